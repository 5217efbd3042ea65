//! HTTP inbound adapter exposing the survey endpoints and health probes.

pub mod error;
mod hal_response;
pub mod health;
pub mod schemas;
pub mod state;
pub mod survey;

pub use error::{HalError, HalResult};
