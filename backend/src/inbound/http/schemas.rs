//! OpenAPI schema definitions for the HAL payloads.
//!
//! Domain types and the `hal` crate stay framework-agnostic by not deriving
//! `ToSchema`. The wrappers here mirror their wire shape for the generated
//! document only.

use utoipa::ToSchema;

use super::survey::CandidateResponse;

/// OpenAPI schema for [`crate::domain::ErrorSource`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorSource)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSourceSchema {
    /// JSON pointer to the offending request field, or null.
    #[schema(example = "/yearsOfExperience")]
    pointer: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// HTTP status of the failure.
    #[schema(example = 400)]
    status: u16,
    /// Qualified error code.
    #[schema(example = "Domain.SurveyService.1000000")]
    code: String,
    source: ErrorSourceSchema,
    /// Human-readable message.
    #[schema(example = "Missing candidate Information")]
    title: String,
}

/// A HAL link object.
#[derive(ToSchema)]
#[schema(as = hal::Link)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LinkSchema {
    #[schema(example = "/api/Survey/Analyse")]
    href: String,
}

/// `_links` carrying the mandatory `self` relation.
#[derive(ToSchema)]
#[schema(as = hal::Links)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LinksSchema {
    #[schema(rename = "self")]
    self_link: LinkSchema,
}

/// Envelope with links and nothing embedded.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LinksEnvelopeSchema {
    #[schema(rename = "_links")]
    links: LinksSchema,
}

#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmbeddedErrorsSchema {
    #[schema(rename = "_errors")]
    errors: Vec<ErrorSchema>,
}

/// Envelope embedding an `_errors` collection.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    #[schema(rename = "_links")]
    links: LinksSchema,
    #[schema(rename = "_embedded")]
    embedded: EmbeddedErrorsSchema,
}

#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmbeddedCandidatesSchema {
    candidates: Vec<CandidateResponse>,
}

/// Envelope embedding the recorded `candidates`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CandidatesEnvelopeSchema {
    #[schema(rename = "_links")]
    links: LinksSchema,
    #[schema(rename = "_embedded")]
    embedded: EmbeddedCandidatesSchema,
}
