//! Error types for address parsing

use crate::logging::codes;
use thiserror::Error;

pub type AddressResult<T> = Result<T, AddressError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Empty address")]
    Empty,

    #[error("'{text}' is not a MAC, IPv4 or IPv6 address")]
    Malformed { text: String },

    #[error("Invalid prefix length '{text}'")]
    InvalidPrefix { text: String },

    #[error("Prefix /{bits} exceeds the {width}-bit address width")]
    PrefixOutOfRange { bits: u32, width: u32 },
}

impl AddressError {
    pub fn malformed(text: &str) -> Self {
        Self::Malformed {
            text: text.to_string(),
        }
    }

    pub fn invalid_prefix(text: &str) -> Self {
        Self::InvalidPrefix {
            text: text.to_string(),
        }
    }

    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::Empty | Self::Malformed { .. } => codes::address::MALFORMED_ADDRESS,
            Self::InvalidPrefix { .. } | Self::PrefixOutOfRange { .. } => {
                codes::address::PREFIX_OUT_OF_RANGE
            }
        }
    }
}
