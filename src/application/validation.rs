// SPDX-License-Identifier: MPL-2.0
//! URL validation.
//!
//! A candidate is accepted when it parses as an absolute URL under the
//! WHATWG URL grammar. Validity is purely syntactic: nothing is resolved
//! or fetched.

use std::fmt;
use url::Url;

/// Reasons a URL candidate is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty or whitespace-only input.
    Empty,
    /// Input that does not parse as an absolute URL (e.g. a missing scheme).
    Malformed(String),
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        "generator-error-invalid-url"
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "URL is empty"),
            ValidationError::Malformed(reason) => write!(f, "malformed URL: {reason}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks that `candidate` is a syntactically valid absolute URL.
///
/// # Errors
///
/// Returns [`ValidationError::Empty`] for blank input and
/// [`ValidationError::Malformed`] when parsing fails.
pub fn validate_url(candidate: &str) -> Result<Url, ValidationError> {
    if candidate.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    Url::parse(candidate).map_err(|e| ValidationError::Malformed(e.to_string()))
}

/// Convenience predicate over [`validate_url`].
#[must_use]
pub fn is_valid_url(candidate: &str) -> bool {
    validate_url(candidate).is_ok()
}
