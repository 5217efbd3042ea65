//! Survey domain: candidate records, the error taxonomy, ports, and the
//! service orchestrating them.
//!
//! Public surface:
//! - Candidate, PreferredMode: validated survey response.
//! - Error, ErrorCode, ErrorList: transport-agnostic failures.
//! - SurveyService: implements the survey driving ports over a repository.
//! - TraceId: request correlation identifier.

pub mod candidate;
pub mod error;
pub mod ports;
mod survey_service;
mod trace_id;

pub use self::candidate::{Candidate, CandidateValidationError, PreferredMode};
pub use self::error::{Error, ErrorCode, ErrorList, ErrorSource, ErrorValidationError};
pub use self::survey_service::SurveyService;
pub use self::trace_id::{REQUEST_ID_HEADER, TRACE_ID_HEADER, TraceId};
