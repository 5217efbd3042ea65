//! In-memory `CandidateRepository` implementation.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::Candidate;
use crate::domain::ports::{CandidateRepository, CandidateRepositoryError};

/// Candidate store held in process memory. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryCandidateRepository {
    records: Mutex<Vec<Candidate>>,
}

impl InMemoryCandidateRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `candidates`, oldest first.
    pub fn with_candidates(candidates: Vec<Candidate>) -> Self {
        Self {
            records: Mutex::new(candidates),
        }
    }
}

#[async_trait]
impl CandidateRepository for InMemoryCandidateRepository {
    async fn read_all(&self) -> Result<Vec<Candidate>, CandidateRepositoryError> {
        Ok(self.records.lock().await.clone())
    }

    async fn append(&self, candidate: &Candidate) -> Result<(), CandidateRepositoryError> {
        self.records.lock().await.push(candidate.clone());
        Ok(())
    }
}
