//! Roll-number (USN) patterns.
//!
//! A pattern is a regular expression describing the roll numbers a class is
//! expected to use, e.g. `^1AB\d{2}CS\d{3}$`.

use regex::Regex;

use crate::error::CoreError;

/// Maximum length of a pattern's source text.
pub const MAX_PATTERN_LENGTH: usize = 256;

/// Check that a pattern is non-blank, bounded, and compiles.
pub fn validate_pattern(pattern: &str) -> Result<(), CoreError> {
    if pattern.trim().is_empty() {
        return Err(CoreError::Validation(
            "pattern_text must not be empty".to_string(),
        ));
    }
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(CoreError::Validation(format!(
            "pattern_text exceeds maximum length of {MAX_PATTERN_LENGTH} characters"
        )));
    }
    Regex::new(pattern)
        .map(|_| ())
        .map_err(|e| CoreError::Validation(format!("pattern_text is not a valid regex: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_roll_number_regex() {
        assert!(validate_pattern(r"^1AB\d{2}CS\d{3}$").is_ok());
    }

    #[test]
    fn rejects_blank() {
        assert!(validate_pattern("  ").is_err());
    }

    #[test]
    fn rejects_unbalanced_group() {
        assert!(validate_pattern("(1AB").is_err());
    }
}
