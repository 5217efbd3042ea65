//! HTTP adapter mapping for domain errors.
//!
//! Domain errors stay HTTP-agnostic. [`HalError`] pairs them with the path
//! of the request that failed so Actix can render the `_errors` envelope
//! with the right `self` link and status.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use hal::Envelope;
use tracing::warn;

use super::hal_response::hal_response;
use crate::domain::{Error, ErrorList};

/// Convenient result alias for HAL handlers.
pub type HalResult<T> = Result<T, HalError>;

/// An error list bound to the request it answers.
#[derive(Debug, Clone)]
pub struct HalError {
    self_href: String,
    errors: ErrorList,
}

impl HalError {
    /// Bind `errors` to the request path `self_href`.
    pub fn new(self_href: impl Into<String>, errors: impl Into<ErrorList>) -> Self {
        Self {
            self_href: self_href.into(),
            errors: errors.into(),
        }
    }

    /// Errors carried by this response.
    pub fn errors(&self) -> &ErrorList {
        &self.errors
    }

    /// Target of the envelope's `self` link.
    pub fn self_href(&self) -> &str {
        &self.self_href
    }

    /// The `_errors` envelope rendered for this failure.
    pub fn envelope(&self) -> Envelope<Error> {
        Envelope::errors(self.self_href.clone(), self.errors.as_slice().to_vec())
    }
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.self_href, self.errors)
    }
}

impl ResponseError for HalError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.errors.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        hal_response(self.status_code(), &self.envelope())
    }
}

/// JSON extractor configuration that reports unreadable candidate bodies
/// as missing candidate information.
///
/// An absent body, a wrong content type, malformed JSON and a literal
/// `null` all end up here.
pub fn candidate_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        warn!(error = %err, path = req.path(), "candidate payload rejected");
        HalError::new(req.path(), Error::missing_input()).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.expect("read body");
        serde_json::from_slice(&bytes).expect("body is JSON")
    }

    #[rstest]
    #[case(Error::missing_input(), StatusCode::BAD_REQUEST)]
    #[case(Error::invalid_field("name", "empty"), StatusCode::BAD_REQUEST)]
    #[case(Error::from_failure("disk on fire"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_follows_the_error_code(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(HalError::new("/x", error).status_code(), expected);
    }

    #[actix_web::test]
    async fn renders_the_errors_envelope() {
        let response = HalError::new("/api/Survey/Record", Error::missing_input()).error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response
                .headers()
                .get(actix_web::http::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some(hal::HAL_JSON)
        );
        assert_eq!(
            body_json(response).await,
            json!({
                "_links": {"self": {"href": "/api/Survey/Record"}},
                "_embedded": {
                    "_errors": [{
                        "status": 400,
                        "code": "Domain.SurveyService.1000000",
                        "source": {"pointer": null},
                        "title": "Missing candidate Information",
                    }]
                }
            })
        );
    }

    #[actix_web::test]
    async fn failure_titles_are_passed_through() {
        let response =
            HalError::new("/api/Survey/Analyse", Error::from_failure("store unreadable"))
                .error_response();

        let body = body_json(response).await;
        assert_eq!(body["_embedded"]["_errors"][0]["title"], "store unreadable");
        assert_eq!(
            body["_embedded"]["_errors"][0]["code"],
            "Domain.SurveyService.6000001"
        );
    }

    #[test]
    fn a_server_failure_outranks_validation_errors() {
        let mut errors = ErrorList::single(Error::missing_input());
        errors.push(Error::from_failure("boom"));

        let err = HalError::new("/x", errors);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.errors().len(), 2);
    }
}
