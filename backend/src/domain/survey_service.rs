//! Survey domain service.
//!
//! Implements the survey driving ports on top of a [`CandidateRepository`].
//! This is the single place where storage failures are classified into
//! domain errors and logged; adapters above it only translate the result.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{
    CandidateRepository, CandidateRepositoryError, SurveyAnalysis, SurveyCommand, SurveyQuery,
};
use crate::domain::{Candidate, Error, TraceId};

const RECORD_OPERATION: &str = "record_survey";
const ANALYSE_OPERATION: &str = "analyse";

/// Survey service implementing [`SurveyCommand`] and [`SurveyQuery`].
///
/// No retries happen here: a storage failure becomes an
/// [`crate::domain::ErrorCode::UnknownError`] immediately.
pub struct SurveyService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> SurveyService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: ?Sized> Clone for SurveyService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> SurveyService<R>
where
    R: CandidateRepository + ?Sized,
{
    fn storage_failure(operation: &'static str, failure: CandidateRepositoryError) -> Error {
        let trace_id = TraceId::current().map(|id| id.to_string());
        error!(
            operation,
            trace_id = trace_id.as_deref(),
            error = %failure,
            "survey store operation failed"
        );
        Error::from_failure(failure.to_string())
    }
}

#[async_trait]
impl<R> SurveyCommand for SurveyService<R>
where
    R: CandidateRepository + ?Sized,
{
    async fn record(&self, candidate: Candidate) -> Result<(), Error> {
        self.repository
            .append(&candidate)
            .await
            .map_err(|failure| Self::storage_failure(RECORD_OPERATION, failure))?;
        debug!(
            operation = RECORD_OPERATION,
            preferred_mode = %candidate.preferred_mode(),
            "survey response recorded"
        );
        Ok(())
    }
}

#[async_trait]
impl<R> SurveyQuery for SurveyService<R>
where
    R: CandidateRepository + ?Sized,
{
    async fn analyse(&self) -> Result<SurveyAnalysis, Error> {
        let candidates = self
            .repository
            .read_all()
            .await
            .map_err(|failure| Self::storage_failure(ANALYSE_OPERATION, failure))?;
        debug!(
            operation = ANALYSE_OPERATION,
            record_count = candidates.len(),
            "survey responses loaded"
        );
        Ok(SurveyAnalysis { candidates })
    }
}

#[cfg(test)]
#[path = "survey_service_tests.rs"]
mod tests;
