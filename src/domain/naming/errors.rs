//! Naming error types.

use thiserror::Error;

/// Errors raised while validating a proposed brand name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// No name was supplied, or it was blank.
    #[error("Name is required")]
    Required,

    /// The name was supplied with a non-string JSON type.
    #[error("Name must be a string")]
    NotAString,

    /// The name exceeds the accepted length.
    #[error("Name must be at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

impl NameError {
    pub fn too_long(max: usize, actual: usize) -> Self {
        NameError::TooLong { max, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_matches_legacy_message() {
        assert_eq!(NameError::Required.to_string(), "Name is required");
    }

    #[test]
    fn too_long_reports_limits() {
        let err = NameError::too_long(100, 140);
        assert_eq!(
            err.to_string(),
            "Name must be at most 100 characters, got 140"
        );
    }
}
