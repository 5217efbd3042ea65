//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: candidate stores backed by a JSON file or by memory
//!
//! Adapters are thin translators between domain types and the stored
//! representation. They contain no business logic.

pub mod persistence;
