//! Domain-level error taxonomy.
//!
//! These errors are transport agnostic. Each one carries the outcome status a
//! caller should see, a dotted code (`Domain.SurveyService.<number>`) that
//! stays stable across releases, an optional pointer at the offending input
//! field, and a human-readable title. Inbound adapters embed them into HAL
//! envelopes; the domain never builds HTTP responses itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// First segment of every error code.
pub const ERROR_DOMAIN: &str = "Domain";
/// Second segment of every error code.
pub const SERVICE_NAME: &str = "SurveyService";
/// Title used when a request carries no candidate.
pub const MISSING_CANDIDATE_TITLE: &str = "Missing candidate Information";
/// Title used when an unexpected failure has no message of its own.
pub const UNEXPECTED_ERROR_TITLE: &str = "An unexpected error occurs";

/// Stable error identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request carried no usable candidate.
    MissingCandidateInformation,
    /// A candidate field failed validation.
    InvalidCandidateInformation,
    /// Anything unexpected, typically a storage failure.
    UnknownError,
}

impl ErrorCode {
    const ALL: [Self; 3] = [
        Self::MissingCandidateInformation,
        Self::InvalidCandidateInformation,
        Self::UnknownError,
    ];

    /// Numeric suffix of the dotted code.
    pub const fn number(self) -> u32 {
        match self {
            Self::MissingCandidateInformation => 1_000_000,
            Self::InvalidCandidateInformation => 1_000_001,
            Self::UnknownError => 6_000_001,
        }
    }

    /// Outcome status associated with the code.
    pub const fn status(self) -> u16 {
        match self {
            Self::MissingCandidateInformation | Self::InvalidCandidateInformation => 400,
            Self::UnknownError => 500,
        }
    }

    /// Resolve a numeric suffix.
    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.number() == number)
    }

    /// Parse a fully qualified `Domain.SurveyService.<number>` code.
    ///
    /// # Examples
    /// ```
    /// use survey_service::domain::ErrorCode;
    ///
    /// assert_eq!(
    ///     ErrorCode::parse_qualified("Domain.SurveyService.6000001"),
    ///     Some(ErrorCode::UnknownError)
    /// );
    /// assert_eq!(ErrorCode::parse_qualified("Domain.Other.6000001"), None);
    /// ```
    pub fn parse_qualified(value: &str) -> Option<Self> {
        let number = value
            .strip_prefix(ERROR_DOMAIN)?
            .strip_prefix('.')?
            .strip_prefix(SERVICE_NAME)?
            .strip_prefix('.')?;
        number.parse().ok().and_then(Self::from_number)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ERROR_DOMAIN}.{SERVICE_NAME}.{}", self.number())
    }
}

/// Locator of the input that caused an error.
///
/// Always serialised, with `pointer` set to `null` when the error is not tied
/// to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSource {
    /// JSON pointer into the request body, e.g. `/name`.
    pub pointer: Option<String>,
}

/// Validation failures raised when constructing an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValidationError {
    EmptyTitle,
    UnknownCode(String),
    StatusMismatch { code: ErrorCode, status: u16 },
}

impl fmt::Display for ErrorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "error title must not be empty"),
            Self::UnknownCode(code) => write!(f, "unknown error code: {code}"),
            Self::StatusMismatch { code, status } => write!(
                f,
                "status {status} does not match code {code} (expected {})",
                code.status()
            ),
        }
    }
}

impl std::error::Error for ErrorValidationError {}

/// One reportable failure.
///
/// ## Invariants
/// - `title` is non-empty once trimmed.
/// - The status always matches [`ErrorCode::status`].
///
/// # Examples
/// ```
/// use survey_service::domain::{Error, ErrorCode};
///
/// let err = Error::from_failure("disk full");
/// assert_eq!(err.code(), ErrorCode::UnknownError);
/// assert_eq!(err.status(), 500);
/// assert_eq!(err.title(), "disk full");
/// assert_eq!(err.code().to_string(), "Domain.SurveyService.6000001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    source: ErrorSource,
    title: String,
}

impl Error {
    /// Fallible constructor validating the title.
    pub fn try_new(
        code: ErrorCode,
        title: impl Into<String>,
        pointer: Option<String>,
    ) -> Result<Self, ErrorValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ErrorValidationError::EmptyTitle);
        }
        Ok(Self {
            code,
            source: ErrorSource { pointer },
            title,
        })
    }

    /// The request carried no candidate at all.
    pub fn missing_input() -> Self {
        Self {
            code: ErrorCode::MissingCandidateInformation,
            source: ErrorSource::default(),
            title: MISSING_CANDIDATE_TITLE.to_owned(),
        }
    }

    /// A candidate field was present but invalid.
    ///
    /// `field` is the wire name; the pointer becomes `/<field>`.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let title = if message.trim().is_empty() {
            format!("invalid value for {field}")
        } else {
            message
        };
        Self {
            code: ErrorCode::InvalidCandidateInformation,
            source: ErrorSource {
                pointer: Some(format!("/{field}")),
            },
            title,
        }
    }

    /// An unexpected failure, titled with the failure's own message.
    pub fn from_failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let title = if message.trim().is_empty() {
            UNEXPECTED_ERROR_TITLE.to_owned()
        } else {
            message
        };
        Self {
            code: ErrorCode::UnknownError,
            source: ErrorSource::default(),
            title,
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Outcome status.
    pub fn status(&self) -> u16 {
        self.code.status()
    }

    /// Pointer at the offending input, if any.
    pub fn pointer(&self) -> Option<&str> {
        self.source.pointer.as_deref()
    }

    /// Human-readable message.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorDto {
    status: u16,
    code: String,
    #[serde(default)]
    source: ErrorSource,
    title: String,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            status: value.status(),
            code: value.code.to_string(),
            source: value.source,
            title: value.title,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            status,
            code,
            source,
            title,
        } = value;

        let Some(parsed) = ErrorCode::parse_qualified(&code) else {
            return Err(ErrorValidationError::UnknownCode(code));
        };
        let code = parsed;
        if code.status() != status {
            return Err(ErrorValidationError::StatusMismatch { code, status });
        }
        Error::try_new(code, title, source.pointer)
    }
}

/// Non-empty collection of errors reported together.
///
/// The wire contract allows several errors per response even though every
/// failure path builds exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorList(Vec<Error>);

impl ErrorList {
    /// List holding one error.
    pub fn single(error: Error) -> Self {
        Self(vec![error])
    }

    /// Append another error.
    pub fn push(&mut self, error: Error) {
        self.0.push(error);
    }

    /// Highest status among the errors; a server failure outranks a
    /// validation failure.
    pub fn status(&self) -> u16 {
        self.0.iter().map(Error::status).max().unwrap_or(500)
    }

    /// Number of errors, never zero.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the errors.
    pub fn as_slice(&self) -> &[Error] {
        self.0.as_slice()
    }

    /// Take the errors.
    pub fn into_vec(self) -> Vec<Error> {
        self.0
    }
}

impl From<Error> for ErrorList {
    fn from(value: Error) -> Self {
        Self::single(value)
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {}

#[cfg(test)]
mod tests;
