//! JSON file-backed `CandidateRepository` implementation.
//!
//! The collection lives in one file as a JSON array. Every append reads the
//! array, pushes the new record and atomically replaces the file. A
//! per-instance async mutex serialises these read-modify-write cycles and
//! the filesystem work runs on the blocking pool. The lock guard moves into
//! the blocking task, so a caller dropping its future does not release the
//! lock while the file is still being rewritten.

use std::io;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tokio::sync::Mutex;
use tracing::debug;

use super::atomic_write::write_atomic;
use super::models::CandidateRecord;
use crate::domain::Candidate;
use crate::domain::ports::{CandidateRepository, CandidateRepositoryError};

/// File-backed candidate store.
///
/// Only one writer per store instance is supported. Two processes pointed
/// at the same file do not coordinate.
#[derive(Debug)]
pub struct JsonFileCandidateRepository {
    dir: Arc<Dir>,
    file_name: Utf8PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileCandidateRepository {
    /// Open a store at `directory/file_name`, creating the directory if
    /// needed. The file itself is created on the first append.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateRepositoryError::Io`] if the directory cannot be
    /// created or opened, or if `file_name` is not a plain file name.
    pub fn open(directory: &Path, file_name: &str) -> Result<Self, CandidateRepositoryError> {
        Dir::create_ambient_dir_all(directory, ambient_authority()).map_err(|err| {
            CandidateRepositoryError::io(format!(
                "cannot create {}: {err}",
                directory.display()
            ))
        })?;
        let dir = Dir::open_ambient_dir(directory, ambient_authority()).map_err(|err| {
            CandidateRepositoryError::io(format!("cannot open {}: {err}", directory.display()))
        })?;
        Self::from_dir(dir, file_name)
    }

    /// Wrap an already opened directory capability.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateRepositoryError::Io`] if `file_name` is not a
    /// single normal path component.
    pub fn from_dir(dir: Dir, file_name: &str) -> Result<Self, CandidateRepositoryError> {
        let file_name = Utf8Path::new(file_name);
        let mut components = file_name.components();
        let (Some(Utf8Component::Normal(_)), None) = (components.next(), components.next()) else {
            return Err(CandidateRepositoryError::io(format!(
                "store file name must be a plain file name, got {file_name:?}"
            )));
        };
        Ok(Self {
            dir: Arc::new(dir),
            file_name: file_name.to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Name of the backing file inside the store directory.
    pub fn file_name(&self) -> &Utf8Path {
        &self.file_name
    }

    /// Run `work` on the blocking pool while holding the store lock.
    async fn run_blocking<T, F>(&self, work: F) -> Result<T, CandidateRepositoryError>
    where
        T: Send + 'static,
        F: FnOnce(&Dir, &Utf8Path) -> Result<T, CandidateRepositoryError> + Send + 'static,
    {
        let guard = Arc::clone(&self.write_lock).lock_owned().await;
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        tokio::task::spawn_blocking(move || {
            let _guard = guard;
            work(&dir, &file_name)
        })
        .await
        .map_err(|err| CandidateRepositoryError::io(format!("store task failed: {err}")))?
    }
}

fn load_records(
    dir: &Dir,
    file_name: &Utf8Path,
) -> Result<Vec<CandidateRecord>, CandidateRepositoryError> {
    let contents = match dir.read_to_string(file_name) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => {
            return Err(CandidateRepositoryError::io(format!(
                "cannot read {file_name}: {err}"
            )));
        }
    };
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&contents)
        .map_err(|err| CandidateRepositoryError::corrupt(format!("{file_name}: {err}")))
}

fn store_records(
    dir: &Dir,
    file_name: &Utf8Path,
    records: &[CandidateRecord],
) -> Result<(), CandidateRepositoryError> {
    let body = serde_json::to_vec(records)
        .map_err(|err| CandidateRepositoryError::serialization(err.to_string()))?;
    write_atomic(dir, file_name, &body)
        .map_err(|err| CandidateRepositoryError::io(format!("cannot write {file_name}: {err}")))
}

#[async_trait]
impl CandidateRepository for JsonFileCandidateRepository {
    async fn read_all(&self) -> Result<Vec<Candidate>, CandidateRepositoryError> {
        self.run_blocking(|dir, file_name| {
            let records = load_records(dir, file_name)?;
            debug!(file = %file_name, record_count = records.len(), "candidate store loaded");
            records
                .into_iter()
                .enumerate()
                .map(|(index, record)| {
                    Candidate::try_from(record).map_err(|err| {
                        CandidateRepositoryError::corrupt(format!(
                            "{file_name}: record {index}: {err}"
                        ))
                    })
                })
                .collect()
        })
        .await
    }

    async fn append(&self, candidate: &Candidate) -> Result<(), CandidateRepositoryError> {
        let record = CandidateRecord::from(candidate);
        self.run_blocking(move |dir, file_name| {
            let mut records = load_records(dir, file_name)?;
            records.push(record);
            store_records(dir, file_name, &records)?;
            debug!(file = %file_name, record_count = records.len(), "candidate store written");
            Ok(())
        })
        .await
    }
}
