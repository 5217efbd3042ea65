//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! the survey ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::SurveyService;
use crate::domain::ports::{CandidateRepository, SurveyCommand, SurveyQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub survey: Arc<dyn SurveyCommand>,
    pub survey_query: Arc<dyn SurveyQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(survey: Arc<dyn SurveyCommand>, survey_query: Arc<dyn SurveyQuery>) -> Self {
        Self {
            survey,
            survey_query,
        }
    }

    /// Wire both ports to one [`SurveyService`] over `repository`.
    pub fn from_repository(repository: Arc<dyn CandidateRepository>) -> Self {
        let service = Arc::new(SurveyService::new(repository));
        Self {
            survey: service.clone(),
            survey_query: service,
        }
    }
}
