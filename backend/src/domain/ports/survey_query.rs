//! Driving port for the aggregate read-back of survey responses.

use async_trait::async_trait;

use crate::domain::{Candidate, Error};

/// Every stored response, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyAnalysis {
    pub candidates: Vec<Candidate>,
}

impl SurveyAnalysis {
    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Domain use-case port for analysing stored responses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SurveyQuery: Send + Sync {
    /// Load the full collection.
    async fn analyse(&self) -> Result<SurveyAnalysis, Error>;
}

/// Fixture query reporting an empty survey.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSurveyQuery;

#[async_trait]
impl SurveyQuery for FixtureSurveyQuery {
    async fn analyse(&self) -> Result<SurveyAnalysis, Error> {
        Ok(SurveyAnalysis::default())
    }
}
