//! BrandName value object.

use serde::Serialize;
use std::fmt;

use super::errors::NameError;

/// Maximum accepted length of a brand name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// A proposed brand name.
///
/// Always trimmed and non-empty; at most [`MAX_NAME_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BrandName(String);

impl BrandName {
    /// Creates a new BrandName, trimming surrounding whitespace.
    pub fn new(name: impl AsRef<str>) -> Result<Self, NameError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(NameError::Required);
        }

        let length = trimmed.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(NameError::too_long(MAX_NAME_LENGTH, length));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BrandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BrandName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
