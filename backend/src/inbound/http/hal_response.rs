//! Rendering of HAL envelopes as `application/hal+json` responses.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use hal::{Envelope, HAL_JSON};
use serde::Serialize;
use tracing::error;

/// Serialise `envelope` with the HAL media type.
///
/// Falls back to a bare 500 if the envelope cannot be encoded, which only
/// happens for payloads that are not representable as JSON.
pub(crate) fn hal_response<T: Serialize>(
    status: StatusCode,
    envelope: &Envelope<T>,
) -> HttpResponse {
    match serde_json::to_vec(envelope) {
        Ok(body) => HttpResponse::build(status)
            .content_type(HAL_JSON)
            .body(body),
        Err(err) => {
            error!(error = %err, "failed to encode HAL envelope");
            HttpResponse::InternalServerError().finish()
        }
    }
}
