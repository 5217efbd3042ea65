//! Tests for the error taxonomy and its wire representation.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn missing_input_is_a_bad_request_without_pointer() {
    let err = Error::missing_input();

    assert_eq!(err.status(), 400);
    assert_eq!(err.code().to_string(), "Domain.SurveyService.1000000");
    assert_eq!(err.title(), "Missing candidate Information");
    assert_eq!(err.pointer(), None);
}

#[rstest]
fn from_failure_keeps_the_failure_message() {
    let err = Error::from_failure("Unknown Exception");

    assert_eq!(err.status(), 500);
    assert_eq!(err.code().to_string(), "Domain.SurveyService.6000001");
    assert_eq!(err.title(), "Unknown Exception");
    assert_eq!(err.pointer(), None);
}

#[rstest]
#[case("")]
#[case("   ")]
fn from_failure_falls_back_on_blank_messages(#[case] message: &str) {
    let err = Error::from_failure(message);
    assert_eq!(err.title(), UNEXPECTED_ERROR_TITLE);
}

#[rstest]
fn invalid_field_points_at_the_field() {
    let err = Error::invalid_field("yearsOfExperience", "must not be negative");

    assert_eq!(err.status(), 400);
    assert_eq!(err.code(), ErrorCode::InvalidCandidateInformation);
    assert_eq!(err.pointer(), Some("/yearsOfExperience"));
    assert_eq!(err.title(), "must not be negative");
}

#[rstest]
fn try_new_rejects_blank_titles() {
    let result = Error::try_new(ErrorCode::UnknownError, " ", None);
    assert_eq!(result, Err(ErrorValidationError::EmptyTitle));
}

#[rstest]
fn serialises_to_the_wire_shape() {
    let value = serde_json::to_value(Error::missing_input()).expect("serialise error");

    assert_eq!(
        value,
        json!({
            "status": 400,
            "code": "Domain.SurveyService.1000000",
            "source": { "pointer": null },
            "title": "Missing candidate Information"
        })
    );
}

#[rstest]
fn deserialises_from_the_wire_shape() {
    let err: Error = serde_json::from_value(json!({
        "status": 400,
        "code": "Domain.SurveyService.1000001",
        "source": { "pointer": "/name" },
        "title": "candidate name must not be empty"
    }))
    .expect("parse error");

    assert_eq!(err.code(), ErrorCode::InvalidCandidateInformation);
    assert_eq!(err.pointer(), Some("/name"));
}

#[rstest]
#[case(json!({"status": 500, "code": "Domain.SurveyService.42", "title": "x"}))]
#[case(json!({"status": 400, "code": "Domain.SurveyService.6000001", "title": "x"}))]
#[case(json!({"status": 500, "code": "Domain.SurveyService.6000001", "title": ""}))]
fn deserialising_rejects_inconsistent_payloads(#[case] payload: serde_json::Value) {
    assert!(serde_json::from_value::<Error>(payload).is_err());
}

#[rstest]
fn error_list_reports_the_highest_status() {
    let mut errors = ErrorList::single(Error::missing_input());
    assert_eq!(errors.status(), 400);

    errors.push(Error::from_failure("disk full"));
    assert_eq!(errors.status(), 500);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.to_string(), "Missing candidate Information; disk full");
}

#[rstest]
fn error_list_serialises_as_an_array() {
    let errors = ErrorList::from(Error::from_failure("boom"));
    let value = serde_json::to_value(&errors).expect("serialise list");

    let array = value.as_array().expect("array");
    assert_eq!(array.len(), 1);
    assert_eq!(array.first().map(|e| &e["title"]), Some(&json!("boom")));
}
