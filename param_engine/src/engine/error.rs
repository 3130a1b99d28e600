use crate::logging::codes;
use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Failure to validate a named configuration entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown parameter '{name}'")]
    UnknownParameter { name: String },

    #[error("Invalid value '{value}' for {type_name} parameter '{name}'{}", range_suffix(.range))]
    Rejected {
        name: String,
        type_name: String,
        range: Option<String>,
        value: String,
    },
}

fn range_suffix(range: &Option<String>) -> String {
    match range {
        Some(range) if !range.is_empty() => format!(" (range: {})", range),
        _ => String::new(),
    }
}

impl ValidationError {
    pub fn unknown_parameter(name: &str) -> Self {
        Self::UnknownParameter {
            name: name.to_string(),
        }
    }

    pub fn rejected(name: &str, type_name: &str, range: Option<&str>, value: &str) -> Self {
        Self::Rejected {
            name: name.to_string(),
            type_name: type_name.to_string(),
            range: range.map(str::to_string),
            value: value.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::UnknownParameter { name } | Self::Rejected { name, .. } => name,
        }
    }

    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::UnknownParameter { .. } => codes::validation::UNKNOWN_PARAMETER,
            Self::Rejected { .. } => codes::validation::VALUE_REJECTED,
        }
    }
}
