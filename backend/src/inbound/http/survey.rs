//! Survey HTTP handlers.
//!
//! ```text
//! POST /api/Survey/Record
//! GET  /api/Survey/Analyse
//! ```
//!
//! Every response body is a HAL envelope. Failures embed an `_errors`
//! collection; an analysis with no stored responses is a bare 204.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use hal::Envelope;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::error::candidate_json_config;
use super::hal_response::hal_response;
use super::schemas::{CandidatesEnvelopeSchema, ErrorEnvelopeSchema, LinksEnvelopeSchema};
use crate::domain::{Candidate, CandidateValidationError, Error, PreferredMode};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{HalError, HalResult};

/// Route prefix shared by the survey endpoints.
pub const SURVEY_SCOPE: &str = "/api/Survey";
/// Full path of the submit endpoint.
pub const RECORD_PATH: &str = "/api/Survey/Record";
/// Full path of the analyse endpoint.
pub const ANALYSE_PATH: &str = "/api/Survey/Analyse";
/// Embedded collection name used by the analyse envelope.
pub const CANDIDATES_KEY: &str = "candidates";
/// Link relation pointing a submitter at the read-back endpoint.
pub const ANALYSE_REL: &str = "analyse";

/// Request payload for a survey submission.
///
/// Fields are optional here so absent values can be reported precisely;
/// [`parse_candidate_request`] enforces presence.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRequest {
    #[schema(value_type = Option<String>, example = "Ada Lovelace")]
    pub name: Option<Value>,
    #[schema(value_type = Option<f64>, example = 4.5)]
    pub years_of_experience: Option<Value>,
    /// `CodingChallenge`, `Project`, or the numeric codes 1 and 2.
    #[serde(alias = "preferredModeOfInterview")]
    #[schema(value_type = Option<String>, example = "CodingChallenge")]
    pub preferred_mode: Option<Value>,
}

/// One stored survey response as returned by the analyse endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResponse {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = 4.5)]
    pub years_of_experience: f64,
    #[schema(example = "CodingChallenge")]
    pub preferred_mode: String,
}

impl From<Candidate> for CandidateResponse {
    fn from(value: Candidate) -> Self {
        Self {
            name: value.name().to_owned(),
            years_of_experience: value.years_of_experience(),
            preferred_mode: value.preferred_mode().to_string(),
        }
    }
}

fn invalid_candidate(err: CandidateValidationError) -> Error {
    Error::invalid_field(err.field(), err.to_string())
}

fn required_field_error(field: &str) -> Error {
    Error::invalid_field(field, format!("{field} is required"))
}

fn parse_name(value: Value) -> Result<String, Error> {
    match value {
        Value::String(name) => Ok(name),
        _ => Err(Error::invalid_field("name", "name must be a string")),
    }
}

fn parse_years(value: Value) -> Result<f64, Error> {
    value.as_f64().ok_or_else(|| {
        Error::invalid_field("yearsOfExperience", "years of experience must be a number")
    })
}

fn parse_preferred_mode(value: Value) -> Result<PreferredMode, CandidateValidationError> {
    match value {
        Value::Number(number) => match number.as_u64() {
            Some(code) => PreferredMode::from_code(code),
            None => Err(CandidateValidationError::UnknownPreferredMode(
                number.to_string(),
            )),
        },
        Value::String(name) => name.parse(),
        other => Err(CandidateValidationError::UnknownPreferredMode(
            other.to_string(),
        )),
    }
}

/// Validate a submission into a [`Candidate`].
///
/// A payload with no fields at all is missing candidate information; a
/// payload missing only some of them names the first absent field.
pub(crate) fn parse_candidate_request(payload: CandidateRequest) -> Result<Candidate, Error> {
    let CandidateRequest {
        name,
        years_of_experience,
        preferred_mode,
    } = payload;
    if name.is_none() && years_of_experience.is_none() && preferred_mode.is_none() {
        return Err(Error::missing_input());
    }

    let name = name.ok_or_else(|| required_field_error("name"))?;
    let years = years_of_experience.ok_or_else(|| required_field_error("yearsOfExperience"))?;
    let mode = preferred_mode.ok_or_else(|| required_field_error("preferredMode"))?;

    let name = parse_name(name)?;
    let years = parse_years(years)?;
    let mode = parse_preferred_mode(mode).map_err(invalid_candidate)?;
    Candidate::new(name, years, mode).map_err(invalid_candidate)
}

/// Record one survey response.
#[utoipa::path(
    post,
    path = "/api/Survey/Record",
    request_body = CandidateRequest,
    responses(
        (
            status = 200,
            description = "Response recorded",
            body = LinksEnvelopeSchema,
            content_type = "application/hal+json"
        ),
        (
            status = 400,
            description = "Missing or invalid candidate information",
            body = ErrorEnvelopeSchema,
            content_type = "application/hal+json"
        ),
        (
            status = 500,
            description = "The candidate store failed",
            body = ErrorEnvelopeSchema,
            content_type = "application/hal+json"
        )
    ),
    tags = ["survey"],
    operation_id = "recordSurvey"
)]
#[post("/Record")]
pub async fn record_survey(
    state: web::Data<HttpState>,
    request: HttpRequest,
    payload: web::Json<CandidateRequest>,
) -> HalResult<HttpResponse> {
    let self_href = request.path();
    let candidate = parse_candidate_request(payload.into_inner())
        .map_err(|err| HalError::new(self_href, err))?;

    state
        .survey
        .record(candidate)
        .await
        .map_err(|err| HalError::new(self_href, err))?;

    let envelope = Envelope::<CandidateResponse>::links_only(self_href)
        .with_link(ANALYSE_REL, ANALYSE_PATH);
    Ok(hal_response(StatusCode::OK, &envelope))
}

/// Return every recorded response, oldest first.
#[utoipa::path(
    get,
    path = "/api/Survey/Analyse",
    responses(
        (
            status = 200,
            description = "Recorded responses",
            body = CandidatesEnvelopeSchema,
            content_type = "application/hal+json"
        ),
        (status = 204, description = "No responses recorded yet"),
        (
            status = 500,
            description = "The candidate store failed",
            body = ErrorEnvelopeSchema,
            content_type = "application/hal+json"
        )
    ),
    tags = ["survey"],
    operation_id = "analyseSurvey"
)]
#[get("/Analyse")]
pub async fn analyse(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> HalResult<HttpResponse> {
    let self_href = request.path();
    let analysis = state
        .survey_query
        .analyse()
        .await
        .map_err(|err| HalError::new(self_href, err))?;

    if analysis.is_empty() {
        return Ok(HttpResponse::NoContent().finish());
    }

    let candidates = analysis
        .candidates
        .into_iter()
        .map(CandidateResponse::from)
        .collect();
    let envelope = Envelope::success(self_href, CANDIDATES_KEY, candidates);
    Ok(hal_response(StatusCode::OK, &envelope))
}

/// Register the survey scope and its JSON error handling.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(SURVEY_SCOPE)
            .app_data(candidate_json_config())
            .service(record_survey)
            .service(analyse),
    );
}

#[cfg(test)]
#[path = "survey_tests.rs"]
mod tests;
