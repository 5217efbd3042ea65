//! On-disk record shape for the JSON file store.
//!
//! The stored document is a JSON array of these records, oldest first.
//! Files written by earlier deployments used PascalCase keys and numeric
//! interview modes; both spellings are accepted on read, only the camelCase
//! form is written.

use serde::{Deserialize, Serialize};

use crate::domain::{Candidate, CandidateValidationError, PreferredMode};

/// One persisted candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CandidateRecord {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "YearsOfExperience")]
    pub years_of_experience: f64,
    #[serde(
        alias = "PreferredModeOfInterview",
        alias = "preferredModeOfInterview",
        alias = "PreferredMode"
    )]
    pub preferred_mode: PreferredMode,
}

impl From<&Candidate> for CandidateRecord {
    fn from(candidate: &Candidate) -> Self {
        Self {
            name: candidate.name().to_owned(),
            years_of_experience: candidate.years_of_experience(),
            preferred_mode: candidate.preferred_mode(),
        }
    }
}

impl TryFrom<CandidateRecord> for Candidate {
    type Error = CandidateValidationError;

    fn try_from(record: CandidateRecord) -> Result<Self, Self::Error> {
        Candidate::new(record.name, record.years_of_experience, record.preferred_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn writes_camel_case_with_named_mode() {
        let candidate =
            Candidate::new("Ada", 2.5, PreferredMode::CodingChallenge).expect("valid candidate");

        let value = serde_json::to_value(CandidateRecord::from(&candidate)).expect("serialise");

        assert_eq!(
            value,
            json!({
                "name": "Ada",
                "yearsOfExperience": 2.5,
                "preferredMode": "CodingChallenge",
            })
        );
    }

    #[rstest]
    #[case(json!({"name": "Ada", "yearsOfExperience": 3, "preferredMode": "Project"}))]
    #[case(json!({"Name": "Ada", "YearsOfExperience": 3, "PreferredModeOfInterview": 2}))]
    #[case(json!({"name": "Ada", "yearsOfExperience": 3.0, "preferredModeOfInterview": "project"}))]
    fn reads_current_and_legacy_layouts(#[case] raw: serde_json::Value) {
        let record: CandidateRecord = serde_json::from_value(raw).expect("decode record");
        let candidate = Candidate::try_from(record).expect("valid candidate");

        assert_eq!(candidate.name(), "Ada");
        assert_eq!(candidate.years_of_experience(), 3.0);
        assert_eq!(candidate.preferred_mode(), PreferredMode::Project);
    }

    #[test]
    fn rejects_records_that_break_candidate_invariants() {
        let record = CandidateRecord {
            name: " ".to_owned(),
            years_of_experience: 1.0,
            preferred_mode: PreferredMode::Project,
        };

        assert_eq!(
            Candidate::try_from(record),
            Err(CandidateValidationError::EmptyName)
        );
    }
}
