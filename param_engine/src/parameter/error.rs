//! Error types for descriptor tables

use crate::logging::codes;
use thiserror::Error;

pub type DescriptorResult<T> = Result<T, DescriptorError>;

/// A defect in a descriptor or descriptor table
///
/// These describe programming errors in the tables themselves, never bad
/// user values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("Parameter '{name}' ({kind}): invalid range '{range}': {reason}")]
    InvalidRange {
        name: String,
        kind: String,
        range: String,
        reason: String,
    },

    #[error("Parameter '{name}' is a bit_list without a positive maximum bit index")]
    MissingCapacity { name: String },

    #[error("Parameter '{name}' is declared more than once")]
    DuplicateName { name: String },

    #[error("Parameter '{name}' follows wildcard '{wildcard}' and can never be found")]
    UnreachableAfterWildcard { name: String, wildcard: String },

    #[error("Parameter '{name}' ({kind}) cannot take a {variant} range")]
    RangeKindMismatch {
        name: String,
        kind: String,
        variant: String,
    },

    #[error("Limit exceeded for {what}: {current} > {limit}")]
    LimitExceeded {
        what: String,
        current: usize,
        limit: usize,
    },

    #[error("Parameter '{name}' has an empty token in range '{range}'")]
    EmptyToken { name: String, range: String },

    #[error("Invalid parameter name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Parameter '{name}' lists {count} tokens but only {capacity} fit in the mask")]
    MaskCapacityExceeded {
        name: String,
        count: usize,
        capacity: usize,
    },

    #[error("Descriptor table rejected with {error_count} error(s); first: {first}")]
    TableRejected {
        error_count: usize,
        first: Box<DescriptorError>,
    },
}

impl DescriptorError {
    pub fn invalid_range(name: &str, kind: &str, range: &str, reason: &str) -> Self {
        Self::InvalidRange {
            name: name.to_string(),
            kind: kind.to_string(),
            range: range.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn missing_capacity(name: &str) -> Self {
        Self::MissingCapacity {
            name: name.to_string(),
        }
    }

    pub fn duplicate_name(name: &str) -> Self {
        Self::DuplicateName {
            name: name.to_string(),
        }
    }

    pub fn unreachable_after_wildcard(name: &str, wildcard: &str) -> Self {
        Self::UnreachableAfterWildcard {
            name: name.to_string(),
            wildcard: wildcard.to_string(),
        }
    }

    pub fn range_kind_mismatch(name: &str, kind: &str, variant: &str) -> Self {
        Self::RangeKindMismatch {
            name: name.to_string(),
            kind: kind.to_string(),
            variant: variant.to_string(),
        }
    }

    pub fn limit_exceeded(what: &str, current: usize, limit: usize) -> Self {
        Self::LimitExceeded {
            what: what.to_string(),
            current,
            limit,
        }
    }

    pub fn empty_token(name: &str, range: &str) -> Self {
        Self::EmptyToken {
            name: name.to_string(),
            range: range.to_string(),
        }
    }

    pub fn invalid_name(name: &str, reason: &str) -> Self {
        Self::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn mask_capacity_exceeded(name: &str, count: usize, capacity: usize) -> Self {
        Self::MaskCapacityExceeded {
            name: name.to_string(),
            count,
            capacity,
        }
    }

    /// Get the log code for this error
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::InvalidRange { .. } => codes::descriptor::INVALID_RANGE,
            Self::MissingCapacity { .. } => codes::descriptor::MISSING_CAPACITY,
            Self::DuplicateName { .. } => codes::descriptor::DUPLICATE_NAME,
            Self::UnreachableAfterWildcard { .. } => {
                codes::descriptor::UNREACHABLE_AFTER_WILDCARD
            }
            Self::RangeKindMismatch { .. } => codes::descriptor::RANGE_KIND_MISMATCH,
            Self::LimitExceeded { .. } => codes::descriptor::LIMIT_EXCEEDED,
            Self::EmptyToken { .. } => codes::descriptor::EMPTY_TOKEN,
            Self::InvalidName { .. } => codes::descriptor::INVALID_NAME,
            Self::MaskCapacityExceeded { .. } => codes::descriptor::MASK_CAPACITY_EXCEEDED,
            Self::TableRejected { first, .. } => first.error_code(),
        }
    }

    /// Severity label from the code registry
    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }
}
