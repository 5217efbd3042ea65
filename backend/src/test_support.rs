//! Test utilities shared by unit tests (in `src/`) and integration tests
//! (in `tests/`).
//!
//! File access goes through `cap_std` directory handles rather than
//! `std::fs`, matching the store adapter itself.

use std::io;
use std::path::Path;

use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tempfile::TempDir;

use crate::domain::ports::CandidateRepositoryError;
use crate::outbound::persistence::JsonFileCandidateRepository;

/// Store file name used by [`TempCandidateStore`].
pub const TEMP_STORE_FILE: &str = "candidateDetails.json";

/// A scratch directory holding one candidate store file.
///
/// The directory and everything in it is removed on drop.
///
/// # Examples
///
/// ```rust
/// use survey_service::test_support::TempCandidateStore;
///
/// let store = TempCandidateStore::new()?;
/// store.write_raw("[]")?;
/// assert_eq!(store.read_raw()?, "[]");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct TempCandidateStore {
    tmp: TempDir,
    dir: Dir,
}

impl TempCandidateStore {
    /// Create an empty scratch directory. No store file exists yet.
    ///
    /// # Errors
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> io::Result<Self> {
        let tmp = TempDir::new()?;
        let dir = Dir::open_ambient_dir(tmp.path(), ambient_authority())?;
        Ok(Self { tmp, dir })
    }

    /// Directory holding the store file.
    pub fn path(&self) -> &Path {
        self.tmp.path()
    }

    /// Open a file-backed repository over this directory.
    ///
    /// # Errors
    /// Propagates [`JsonFileCandidateRepository::open`] failures.
    pub fn open(&self) -> Result<JsonFileCandidateRepository, CandidateRepositoryError> {
        JsonFileCandidateRepository::open(self.path(), TEMP_STORE_FILE)
    }

    /// Replace the store file with `contents`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn write_raw(&self, contents: &str) -> io::Result<()> {
        self.dir.write(TEMP_STORE_FILE, contents)
    }

    /// Read the store file verbatim.
    ///
    /// # Errors
    /// Returns an error if the file is absent or unreadable.
    pub fn read_raw(&self) -> io::Result<String> {
        self.dir.read_to_string(TEMP_STORE_FILE)
    }

    /// Whether the store file has been created.
    pub fn exists(&self) -> bool {
        self.dir.exists(TEMP_STORE_FILE)
    }

    /// Names of every entry in the directory, sorted.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be listed.
    pub fn entries(&self) -> io::Result<Vec<String>> {
        let mut names = self
            .dir
            .entries()?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }
}
