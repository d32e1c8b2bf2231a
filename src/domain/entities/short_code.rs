//! Short code query entity.

use std::fmt;

/// Detail attached to [`super::ResolutionResult::Unknown`] when a lookup is
/// requested for an empty code.
pub const INVALID_SHORT_CODE: &str = "invalid short code";

/// Error returned when a short code cannot be turned into a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid short code")]
pub struct InvalidShortCode;

/// A single request to resolve a short code.
///
/// Created once per `resolve` call and never modified afterwards. Format
/// validation (alphabet, length) belongs to the backend; the only local rule
/// is that the code is not blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortCodeQuery {
    code: String,
}

impl ShortCodeQuery {
    /// Builds a query, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShortCode`] if the code is empty after trimming.
    pub fn new(code: &str) -> Result<Self, InvalidShortCode> {
        let code = code.trim();
        if code.is_empty() {
            return Err(InvalidShortCode);
        }

        Ok(Self {
            code: code.to_string(),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for ShortCodeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
