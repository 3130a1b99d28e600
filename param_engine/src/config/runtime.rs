// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationPreferences {
    /// Whether rejected values are logged with their descriptor
    pub log_rejections: bool,

    /// Whether canonicalizing validators log the rewritten form
    pub log_canonicalization: bool,

    /// Whether tables are linted when wrapped in a ParameterTable
    pub lint_on_register: bool,

    /// Whether lint warnings are promoted to errors
    pub strict_lint: bool,
}

impl Default for ValidationPreferences {
    fn default() -> Self {
        Self {
            log_rejections: env_flag(env_vars::VALIDATION_LOG_REJECTIONS, true),
            log_canonicalization: env_flag(env_vars::VALIDATION_LOG_CANONICALIZATION, false),
            lint_on_register: env_flag(env_vars::VALIDATION_LINT_ON_REGISTER, true),
            strict_lint: env_flag(env_vars::VALIDATION_STRICT_LINT, false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Minimum log level emitted
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env_flag(env_vars::LOGGING_USE_STRUCTURED, false),
            enable_console_logging: env_flag(env_vars::LOGGING_ENABLE_CONSOLE, false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

/// `true`/`false` from the environment, `default` when unset or unparsable
fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
pub(crate) fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub validation: ValidationPreferences,
    pub logging: LoggingPreferences,
}

/// Environment variable names for configuration
pub mod env_vars {
    // Validation
    pub const VALIDATION_LOG_REJECTIONS: &str = "PARAM_VALIDATION_LOG_REJECTIONS";
    pub const VALIDATION_LOG_CANONICALIZATION: &str = "PARAM_VALIDATION_LOG_CANONICALIZATION";
    pub const VALIDATION_LINT_ON_REGISTER: &str = "PARAM_VALIDATION_LINT_ON_REGISTER";
    pub const VALIDATION_STRICT_LINT: &str = "PARAM_VALIDATION_STRICT_LINT";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "PARAM_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "PARAM_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "PARAM_LOGGING_MIN_LEVEL";
}
