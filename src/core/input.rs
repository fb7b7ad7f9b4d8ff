//! # Message Input
//!
//! Validation and character-counter rules for the message field.
//!
//! The counter measures the raw buffer, whitespace included. Validation
//! trims first, so `"   "` counts 3 but is still rejected as empty.

use std::fmt;

use crate::prediction::AnalysisRequest;

/// Longest message the prediction API accepts, in characters.
pub const MAX_MESSAGE_CHARS: usize = 280;

/// Counter turns yellow above this many characters.
const CAUTION_THRESHOLD: usize = 200;
/// Counter turns red above this many characters.
const LIMIT_THRESHOLD: usize = 250;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty,
    TooLong { length: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "Please enter a message to analyze."),
            ValidationError::TooLong { .. } => write!(
                f,
                "The message cannot exceed {MAX_MESSAGE_CHARS} characters."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Number of characters currently in the buffer.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Builds a request from user text, or explains why it can't be sent.
pub fn validate(text: &str) -> Result<AnalysisRequest, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let length = char_count(trimmed);
    if length > MAX_MESSAGE_CHARS {
        return Err(ValidationError::TooLong { length });
    }

    Ok(AnalysisRequest {
        text: trimmed.to_string(),
    })
}

/// Colour band of the character counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Caution,
    Limit,
}

impl CounterLevel {
    pub fn for_count(count: usize) -> Self {
        if count > LIMIT_THRESHOLD {
            CounterLevel::Limit
        } else if count > CAUTION_THRESHOLD {
            CounterLevel::Caution
        } else {
            CounterLevel::Normal
        }
    }
}

/// Counter text shown under the message field, e.g. `"42/280"`.
pub fn counter_label(text: &str) -> String {
    format!("{}/{}", char_count(text), MAX_MESSAGE_CHARS)
}

/// Messages are single-line; pasted newlines become spaces.
pub fn sanitize_paste(data: &str) -> String {
    data.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_text_within_limit() {
        let request = validate("Exams next week and I can't focus").unwrap();
        assert_eq!(request.text, "Exams next week and I can't focus");
    }

    #[test]
    fn test_validate_trims_surrounding_whitespace() {
        let request = validate("  hello  \n").unwrap();
        assert_eq!(request.text, "hello");
    }

    #[test]
    fn test_validate_rejects_empty_and_blank() {
        assert_eq!(validate(""), Err(ValidationError::Empty));
        assert_eq!(validate("   \t "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_validate_boundary_at_max_length() {
        let exact = "a".repeat(MAX_MESSAGE_CHARS);
        assert!(validate(&exact).is_ok());

        let over = "a".repeat(MAX_MESSAGE_CHARS + 1);
        assert_eq!(
            validate(&over),
            Err(ValidationError::TooLong {
                length: MAX_MESSAGE_CHARS + 1
            })
        );
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        // 280 two-byte characters is 560 bytes but still within the limit
        let text = "é".repeat(MAX_MESSAGE_CHARS);
        assert!(validate(&text).is_ok());
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::Empty.to_string(),
            "Please enter a message to analyze."
        );
        assert_eq!(
            ValidationError::TooLong { length: 300 }.to_string(),
            "The message cannot exceed 280 characters."
        );
    }

    #[test]
    fn test_counter_levels() {
        assert_eq!(CounterLevel::for_count(0), CounterLevel::Normal);
        assert_eq!(CounterLevel::for_count(200), CounterLevel::Normal);
        assert_eq!(CounterLevel::for_count(201), CounterLevel::Caution);
        assert_eq!(CounterLevel::for_count(250), CounterLevel::Caution);
        assert_eq!(CounterLevel::for_count(251), CounterLevel::Limit);
    }

    #[test]
    fn test_counter_label_counts_raw_buffer() {
        assert_eq!(counter_label(""), "0/280");
        assert_eq!(counter_label("  hi "), "5/280");
    }

    #[test]
    fn test_sanitize_paste() {
        assert_eq!(sanitize_paste("line one\nline two"), "line one line two");
        assert_eq!(sanitize_paste("a\r\nb"), "a b");
    }
}
