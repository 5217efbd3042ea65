//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod candidate_repository;
mod survey_command;
mod survey_query;

#[cfg(test)]
pub use candidate_repository::MockCandidateRepository;
pub use candidate_repository::{
    CandidateRepository, CandidateRepositoryError, FixtureCandidateRepository,
};
#[cfg(test)]
pub use survey_command::MockSurveyCommand;
pub use survey_command::{FixtureSurveyCommand, SurveyCommand};
#[cfg(test)]
pub use survey_query::MockSurveyQuery;
pub use survey_query::{FixtureSurveyQuery, SurveyAnalysis, SurveyQuery};
