//! Error types for numeric literal parsing

use crate::logging::codes;
use thiserror::Error;

/// Result type for literal parsing operations
pub type LiteralResult<T> = Result<T, LiteralError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// The numeral is followed by something other than end of text or ':'
    #[error("Unexpected '{found}' at offset {position} in integer literal '{text}'")]
    TrailingCharacters {
        text: String,
        position: usize,
        found: char,
    },

    /// No digits where a numeral was required
    #[error("Expected digits in '{text}'")]
    MissingDigits { text: String },
}

impl LiteralError {
    pub fn trailing_characters(text: &str, position: usize) -> Self {
        let found = text[position..].chars().next().unwrap_or('\0');
        Self::TrailingCharacters {
            text: text.to_string(),
            position,
            found,
        }
    }

    pub fn missing_digits(text: &str) -> Self {
        Self::MissingDigits {
            text: text.to_string(),
        }
    }

    /// Get the log code for this error
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::TrailingCharacters { .. } => codes::literal::MALFORMED_INTEGER,
            Self::MissingDigits { .. } => codes::literal::MISSING_DIGITS,
        }
    }
}
