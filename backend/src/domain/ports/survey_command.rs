//! Driving port for recording survey submissions.
//!
//! Inbound adapters hand over an already validated [`Candidate`]; turning an
//! absent or malformed request body into an error is their job.

use async_trait::async_trait;

use crate::domain::{Candidate, Error};

/// Domain use-case port for storing one survey response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SurveyCommand: Send + Sync {
    /// Persist `candidate` at the end of the collection.
    async fn record(&self, candidate: Candidate) -> Result<(), Error>;
}

/// Fixture command that accepts and discards every submission.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSurveyCommand;

#[async_trait]
impl SurveyCommand for FixtureSurveyCommand {
    async fn record(&self, _candidate: Candidate) -> Result<(), Error> {
        Ok(())
    }
}
