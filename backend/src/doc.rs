//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the survey and health endpoints together with the
//! HAL envelope schemas from [`crate::inbound::http::schemas`]. The document
//! is served by Swagger UI in debug builds and exported by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    CandidatesEnvelopeSchema, ErrorEnvelopeSchema, ErrorSchema, ErrorSourceSchema,
    LinksEnvelopeSchema,
};
use crate::inbound::http::survey::{CandidateRequest, CandidateResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Survey service API",
        description = "Record candidate survey responses and read them back as HAL documents."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::survey::record_survey,
        crate::inbound::http::survey::analyse,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CandidateRequest,
        CandidateResponse,
        ErrorSchema,
        ErrorSourceSchema,
        LinksEnvelopeSchema,
        ErrorEnvelopeSchema,
        CandidatesEnvelopeSchema
    )),
    tags(
        (name = "survey", description = "Candidate survey submissions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
