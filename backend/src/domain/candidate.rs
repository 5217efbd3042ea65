//! Candidate survey responses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`Candidate::new`] and the
/// [`PreferredMode`] parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateValidationError {
    EmptyName,
    NegativeExperience,
    NonFiniteExperience,
    UnknownPreferredMode(String),
}

impl CandidateValidationError {
    /// Wire name of the field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::NegativeExperience | Self::NonFiniteExperience => "yearsOfExperience",
            Self::UnknownPreferredMode(_) => "preferredMode",
        }
    }
}

impl fmt::Display for CandidateValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "candidate name must not be empty"),
            Self::NegativeExperience => write!(f, "years of experience must not be negative"),
            Self::NonFiniteExperience => write!(f, "years of experience must be a finite number"),
            Self::UnknownPreferredMode(value) => write!(
                f,
                "preferred mode must be CodingChallenge (1) or Project (2), got {value}"
            ),
        }
    }
}

impl std::error::Error for CandidateValidationError {}

/// How the candidate would like to be interviewed.
///
/// Serialises as its name. Deserialises from either the name (any ASCII
/// case) or the numeric code, so `"Project"` and `2` are equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PreferredModeRepr", into = "String")]
pub enum PreferredMode {
    CodingChallenge,
    Project,
}

impl PreferredMode {
    /// Numeric code used by older clients.
    pub const fn code(self) -> u8 {
        match self {
            Self::CodingChallenge => 1,
            Self::Project => 2,
        }
    }

    /// Resolve a numeric code.
    pub fn from_code(code: u64) -> Result<Self, CandidateValidationError> {
        match code {
            1 => Ok(Self::CodingChallenge),
            2 => Ok(Self::Project),
            other => Err(CandidateValidationError::UnknownPreferredMode(
                other.to_string(),
            )),
        }
    }

    /// Canonical name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CodingChallenge => "CodingChallenge",
            Self::Project => "Project",
        }
    }
}

impl fmt::Display for PreferredMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferredMode {
    type Err = CandidateValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        [Self::CodingChallenge, Self::Project]
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| CandidateValidationError::UnknownPreferredMode(value.to_owned()))
    }
}

impl From<PreferredMode> for String {
    fn from(value: PreferredMode) -> Self {
        value.as_str().to_owned()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PreferredModeRepr {
    Code(u64),
    Name(String),
}

impl TryFrom<PreferredModeRepr> for PreferredMode {
    type Error = CandidateValidationError;

    fn try_from(value: PreferredModeRepr) -> Result<Self, Self::Error> {
        match value {
            PreferredModeRepr::Code(code) => Self::from_code(code),
            PreferredModeRepr::Name(name) => name.parse(),
        }
    }
}

/// One submitted survey response.
///
/// ## Invariants
/// - `name` is non-empty once trimmed of whitespace.
/// - `years_of_experience` is finite and not negative.
///
/// Records are immutable once stored; there is no update or delete path.
///
/// # Examples
/// ```
/// use survey_service::domain::{Candidate, PreferredMode};
///
/// let candidate = Candidate::new("Ada", 4.5, PreferredMode::Project).expect("valid candidate");
/// assert_eq!(candidate.name(), "Ada");
/// assert!(Candidate::new("  ", 1.0, PreferredMode::Project).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    name: String,
    years_of_experience: f64,
    preferred_mode: PreferredMode,
}

impl Candidate {
    /// Validate and construct a candidate.
    pub fn new(
        name: impl Into<String>,
        years_of_experience: f64,
        preferred_mode: PreferredMode,
    ) -> Result<Self, CandidateValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CandidateValidationError::EmptyName);
        }
        if !years_of_experience.is_finite() {
            return Err(CandidateValidationError::NonFiniteExperience);
        }
        if years_of_experience < 0.0 {
            return Err(CandidateValidationError::NegativeExperience);
        }
        Ok(Self {
            name,
            years_of_experience,
            preferred_mode,
        })
    }

    /// Candidate name as submitted.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Years of professional experience.
    pub fn years_of_experience(&self) -> f64 {
        self.years_of_experience
    }

    /// Preferred interview mode.
    pub fn preferred_mode(&self) -> PreferredMode {
        self.preferred_mode
    }
}
