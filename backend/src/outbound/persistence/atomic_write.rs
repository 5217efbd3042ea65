//! Atomic replacement of the store file.
//!
//! Contents go to a hidden sibling temp file which is synced and then
//! renamed over the target, so readers see either the old collection or the
//! new one and never a truncated file.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::Utf8Path;
use cap_std::fs::{Dir, OpenOptions};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replace `file_name` inside `dir` with `contents`.
///
/// `file_name` must be a single path component; the caller validates this
/// once when the store is opened.
///
/// # Errors
///
/// Returns the underlying I/O error if the temp file cannot be written or
/// renamed. The temp file is removed on a best-effort basis in that case.
pub(super) fn write_atomic(dir: &Dir, file_name: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    let tmp_name = temp_name_for(file_name);

    if let Err(err) = write_temp_file(dir, &tmp_name, contents) {
        drop(dir.remove_file(&tmp_name));
        return Err(err);
    }
    if let Err(err) = replace_target(dir, &tmp_name, file_name) {
        drop(dir.remove_file(&tmp_name));
        return Err(err);
    }
    sync_directory(dir);
    Ok(())
}

fn temp_name_for(file_name: &Utf8Path) -> String {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(
        ".{}.tmp.{}.{}.{}",
        file_name,
        std::process::id(),
        nanos,
        counter
    )
}

fn write_temp_file(dir: &Dir, tmp_name: &str, contents: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(windows)]
fn replace_target(dir: &Dir, tmp_name: &str, file_name: &Utf8Path) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(file_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, file_name)
}

#[cfg(not(windows))]
fn replace_target(dir: &Dir, tmp_name: &str, file_name: &Utf8Path) -> io::Result<()> {
    dir.rename(tmp_name, dir, file_name)
}

fn sync_directory(dir: &Dir) {
    // Best effort; some platforms refuse to sync directories.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
}
