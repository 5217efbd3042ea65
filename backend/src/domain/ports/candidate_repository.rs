//! Port for the durable candidate collection.
//!
//! The [`CandidateRepository`] trait is the only way the survey service
//! touches stored records. Adapters may keep the collection in a JSON file,
//! in memory, or anywhere else that can hold one ordered list.

use async_trait::async_trait;

use crate::domain::Candidate;

use super::define_port_error;

define_port_error! {
    /// Errors raised by candidate repository adapters.
    pub enum CandidateRepositoryError {
        /// The backing medium could not be read or written.
        Io { message: String } =>
            "candidate store I/O failed: {message}",
        /// Stored data could not be decoded into candidates.
        Corrupt { message: String } =>
            "candidate store contains malformed data: {message}",
        /// The collection could not be encoded for writing.
        Serialization { message: String } =>
            "candidate store serialization failed: {message}",
    }
}

/// Port for reading and appending candidate records.
///
/// # Ordering
///
/// Records come back oldest first. `append` places the new record last.
///
/// # Concurrency
///
/// `append` is a read-modify-write of the whole collection. Implementations
/// must serialise it per store instance so concurrent submissions never lose
/// each other's records, and `read_all` must never observe a half-written
/// collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Return every stored record in insertion order.
    ///
    /// An absent or empty store yields an empty vector rather than an error.
    async fn read_all(&self) -> Result<Vec<Candidate>, CandidateRepositoryError>;

    /// Durably add one record to the end of the collection.
    async fn append(&self, candidate: &Candidate) -> Result<(), CandidateRepositoryError>;
}

/// Fixture implementation that holds nothing and accepts every append.
///
/// Use it in tests where storage behaviour is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCandidateRepository;

#[async_trait]
impl CandidateRepository for FixtureCandidateRepository {
    async fn read_all(&self) -> Result<Vec<Candidate>, CandidateRepositoryError> {
        Ok(Vec::new())
    }

    async fn append(&self, _candidate: &Candidate) -> Result<(), CandidateRepositoryError> {
        Ok(())
    }
}
