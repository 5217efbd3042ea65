//! Candidate store adapters.
//!
//! Both adapters implement [`crate::domain::ports::CandidateRepository`]:
//!
//! - [`JsonFileCandidateRepository`] keeps the whole collection as one JSON
//!   array in a single file, replaced atomically on every append.
//! - [`InMemoryCandidateRepository`] keeps records in process memory and is
//!   intended for tests and ephemeral deployments.
//!
//! The on-disk record shape (`models.rs`) is internal to this module and is
//! never exposed to the domain.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use survey_service::outbound::persistence::JsonFileCandidateRepository;
//!
//! let repository =
//!     JsonFileCandidateRepository::open(Path::new("/var/lib/survey"), "candidateDetails.json")?;
//! # Ok::<(), survey_service::domain::ports::CandidateRepositoryError>(())
//! ```

mod atomic_write;
mod in_memory_candidate_repository;
mod json_file_candidate_repository;
mod models;

pub use in_memory_candidate_repository::InMemoryCandidateRepository;
pub use json_file_candidate_repository::JsonFileCandidateRepository;
