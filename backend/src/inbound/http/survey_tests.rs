//! Tests for the survey HTTP handlers.

use std::sync::Arc;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{
    FixtureSurveyCommand, FixtureSurveyQuery, MockSurveyCommand, MockSurveyQuery, SurveyAnalysis,
    SurveyCommand, SurveyQuery,
};
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::json;

fn state(
    command: impl SurveyCommand + 'static,
    query: impl SurveyQuery + 'static,
) -> HttpState {
    HttpState::new(Arc::new(command), Arc::new(query))
}

async fn send(state: HttpState, request: actix_test::TestRequest) -> ServiceResponse {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;
    actix_test::call_service(&app, request.to_request()).await
}

fn content_type(res: &ServiceResponse) -> Option<&str> {
    res.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
}

fn candidate(name: &str, years: f64, mode: PreferredMode) -> Candidate {
    Candidate::new(name, years, mode).expect("valid candidate")
}

#[rstest]
fn parse_rejects_an_empty_payload_as_missing() {
    let err = parse_candidate_request(CandidateRequest::default()).expect_err("nothing sent");

    assert_eq!(err.code(), ErrorCode::MissingCandidateInformation);
    assert_eq!(err.pointer(), None);
}

#[rstest]
#[case(json!({"yearsOfExperience": 1, "preferredMode": 1}), "/name")]
#[case(json!({"name": "Ada", "preferredMode": 1}), "/yearsOfExperience")]
#[case(json!({"name": "Ada", "yearsOfExperience": 1}), "/preferredMode")]
#[case(json!({"name": "  ", "yearsOfExperience": 1, "preferredMode": 1}), "/name")]
#[case(json!({"name": 5, "yearsOfExperience": 1, "preferredMode": 1}), "/name")]
#[case(json!({"name": "Ada", "yearsOfExperience": -1, "preferredMode": 1}), "/yearsOfExperience")]
#[case(json!({"name": "Ada", "yearsOfExperience": "ten", "preferredMode": 1}), "/yearsOfExperience")]
#[case(json!({"name": "Ada", "yearsOfExperience": 1, "preferredMode": 3}), "/preferredMode")]
#[case(json!({"name": "Ada", "yearsOfExperience": 1, "preferredMode": "Pairing"}), "/preferredMode")]
#[case(json!({"name": "Ada", "yearsOfExperience": 1, "preferredMode": true}), "/preferredMode")]
fn parse_points_at_the_offending_field(#[case] raw: Value, #[case] pointer: &str) {
    let payload: CandidateRequest = serde_json::from_value(raw).expect("decode payload");

    let err = parse_candidate_request(payload).expect_err("invalid payload");
    assert_eq!(err.code(), ErrorCode::InvalidCandidateInformation);
    assert_eq!(err.status(), 400);
    assert_eq!(err.pointer(), Some(pointer));
}

#[rstest]
#[case(json!({"name": "Ada", "yearsOfExperience": 3, "preferredMode": "Project"}))]
#[case(json!({"name": "Ada", "yearsOfExperience": 3.0, "preferredMode": 2}))]
#[case(json!({"name": "Ada", "yearsOfExperience": 3, "preferredModeOfInterview": "project"}))]
fn parse_accepts_names_codes_and_the_legacy_key(#[case] raw: Value) {
    let payload: CandidateRequest = serde_json::from_value(raw).expect("decode payload");

    let parsed = parse_candidate_request(payload).expect("valid payload");
    assert_eq!(parsed, candidate("Ada", 3.0, PreferredMode::Project));
}

#[actix_web::test]
async fn record_returns_links_only_envelope() {
    let mut command = MockSurveyCommand::new();
    command
        .expect_record()
        .withf(|c| c.name() == "Ada" && c.preferred_mode() == PreferredMode::CodingChallenge)
        .times(1)
        .return_once(|_| Ok(()));

    let res = send(
        state(command, FixtureSurveyQuery),
        actix_test::TestRequest::post().uri(RECORD_PATH).set_json(json!({
            "name": "Ada",
            "yearsOfExperience": 2,
            "preferredMode": "CodingChallenge",
        })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(content_type(&res), Some(hal::HAL_JSON));
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({
            "_links": {
                "self": {"href": RECORD_PATH},
                "analyse": {"href": ANALYSE_PATH},
            }
        })
    );
}

#[rstest]
#[case::no_body(actix_test::TestRequest::post().uri(RECORD_PATH))]
#[case::null_body(
    actix_test::TestRequest::post()
        .uri(RECORD_PATH)
        .insert_header((CONTENT_TYPE, "application/json"))
        .set_payload("null")
)]
#[case::malformed_body(
    actix_test::TestRequest::post()
        .uri(RECORD_PATH)
        .insert_header((CONTENT_TYPE, "application/json"))
        .set_payload("{\"name\":")
)]
#[case::empty_object(actix_test::TestRequest::post().uri(RECORD_PATH).set_json(json!({})))]
#[actix_web::test]
async fn record_reports_missing_candidate(#[case] request: actix_test::TestRequest) {
    let mut command = MockSurveyCommand::new();
    command.expect_record().never();

    let res = send(state(command, FixtureSurveyQuery), request).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(content_type(&res), Some(hal::HAL_JSON));
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({
            "_links": {"self": {"href": RECORD_PATH}},
            "_embedded": {"_errors": [{
                "status": 400,
                "code": "Domain.SurveyService.1000000",
                "source": {"pointer": null},
                "title": "Missing candidate Information",
            }]}
        })
    );
}

#[actix_web::test]
async fn record_reports_invalid_fields_with_a_pointer() {
    let mut command = MockSurveyCommand::new();
    command.expect_record().never();

    let res = send(
        state(command, FixtureSurveyQuery),
        actix_test::TestRequest::post().uri(RECORD_PATH).set_json(json!({
            "name": "Ada",
            "yearsOfExperience": -2,
            "preferredMode": 1,
        })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    let error = &body["_embedded"]["_errors"][0];
    assert_eq!(error["code"], "Domain.SurveyService.1000001");
    assert_eq!(error["source"]["pointer"], "/yearsOfExperience");
}

#[actix_web::test]
async fn record_reports_a_wrongly_typed_name_as_invalid() {
    let mut command = MockSurveyCommand::new();
    command.expect_record().never();

    let res = send(
        state(command, FixtureSurveyQuery),
        actix_test::TestRequest::post().uri(RECORD_PATH).set_json(json!({
            "name": 5,
            "yearsOfExperience": 2,
            "preferredMode": 1,
        })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    let error = &body["_embedded"]["_errors"][0];
    assert_eq!(error["code"], "Domain.SurveyService.1000001");
    assert_eq!(error["source"]["pointer"], "/name");
}

#[actix_web::test]
async fn record_surfaces_store_failures() {
    let mut command = MockSurveyCommand::new();
    command
        .expect_record()
        .times(1)
        .return_once(|_| Err(Error::from_failure("candidate store I/O failed: read-only")));

    let res = send(
        state(command, FixtureSurveyQuery),
        actix_test::TestRequest::post().uri(RECORD_PATH).set_json(json!({
            "name": "Ada",
            "yearsOfExperience": 2,
            "preferredMode": 2,
        })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body["_embedded"]["_errors"],
        json!([{
            "status": 500,
            "code": "Domain.SurveyService.6000001",
            "source": {"pointer": null},
            "title": "candidate store I/O failed: read-only",
        }])
    );
}

#[actix_web::test]
async fn analyse_with_no_responses_is_no_content() {
    let res = send(
        state(FixtureSurveyCommand, FixtureSurveyQuery),
        actix_test::TestRequest::get().uri(ANALYSE_PATH),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let body = actix_test::read_body(res).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn analyse_embeds_candidates_in_order() {
    let stored = vec![
        candidate("Ada", 1.0, PreferredMode::CodingChallenge),
        candidate("Grace", 12.5, PreferredMode::Project),
        candidate("Linus", 30.0, PreferredMode::CodingChallenge),
    ];
    let mut query = MockSurveyQuery::new();
    query
        .expect_analyse()
        .times(1)
        .return_once(move || Ok(SurveyAnalysis { candidates: stored }));

    let res = send(
        state(FixtureSurveyCommand, query),
        actix_test::TestRequest::get().uri(ANALYSE_PATH),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(content_type(&res), Some(hal::HAL_JSON));
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({
            "_links": {"self": {"href": ANALYSE_PATH}},
            "_embedded": {"candidates": [
                {"name": "Ada", "yearsOfExperience": 1.0, "preferredMode": "CodingChallenge"},
                {"name": "Grace", "yearsOfExperience": 12.5, "preferredMode": "Project"},
                {"name": "Linus", "yearsOfExperience": 30.0, "preferredMode": "CodingChallenge"},
            ]}
        })
    );
}

#[actix_web::test]
async fn analyse_surfaces_store_failures() {
    let mut query = MockSurveyQuery::new();
    query
        .expect_analyse()
        .times(1)
        .return_once(|| Err(Error::from_failure("candidate store contains malformed data")));

    let res = send(
        state(FixtureSurveyCommand, query),
        actix_test::TestRequest::get().uri(ANALYSE_PATH),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["_links"]["self"]["href"], ANALYSE_PATH);
    let error = &body["_embedded"]["_errors"][0];
    assert_eq!(error["code"], "Domain.SurveyService.6000001");
    assert_eq!(error["title"], "candidate store contains malformed data");
    assert!(body["_embedded"].get("candidates").is_none());
}
