//! Validation engine facade
//!
//! Wraps [`Parameter::validate`] with logging, statistics and named-entry
//! lookup for callers loading a whole configuration.

pub mod error;
pub mod stats;

pub use error::{ValidationError, ValidationResult};
pub use stats::EngineStats;

use crate::config::runtime::ValidationPreferences;
use crate::log_debug;
use crate::logging::codes;
use crate::parameter::{find, DescriptorResult, ParamKind, Parameter, ParameterTable};
use crate::value::Value;
use stats::EngineCounters;

#[derive(Debug)]
pub struct ParameterEngine {
    preferences: ValidationPreferences,
    counters: EngineCounters,
}

impl ParameterEngine {
    /// Create an engine with preferences read from the environment
    pub fn new() -> Self {
        Self::with_preferences(ValidationPreferences::default())
    }

    pub fn with_preferences(preferences: ValidationPreferences) -> Self {
        Self {
            preferences,
            counters: EngineCounters::new(),
        }
    }

    pub fn preferences(&self) -> &ValidationPreferences {
        &self.preferences
    }

    /// Validate one value, recording the outcome
    ///
    /// A value counts as canonicalized when validation changed its payload
    /// marker, enum index or multi mask.
    pub fn validate(&self, param: &Parameter, value: &mut Value) -> bool {
        let before = canonical_state(value);
        let accepted = param.validate(value);
        let canonicalized = accepted && canonical_state(value) != before;

        self.counters.record(accepted, canonicalized);

        if !accepted && self.preferences.log_rejections {
            log_debug!(
                codes::validation::VALUE_REJECTED,
                "Value rejected",
                "parameter" => param.name(),
                "type" => param.type_name(),
                "range" => param.range_text().unwrap_or_default(),
                "value" => value
            );
        }

        if canonicalized && self.preferences.log_canonicalization {
            log_debug!(
                codes::success::VALUE_CANONICALIZED,
                "Value canonicalized",
                "parameter" => param.name(),
                "form" => value
            );
        }

        accepted
    }

    /// Look up `name` in `table` and validate `value` against it
    pub fn validate_entry<'a>(
        &self,
        table: &'a [Parameter],
        name: &str,
        value: &mut Value,
    ) -> ValidationResult<&'a Parameter> {
        let Some(param) = find(table, name) else {
            self.counters.record_unknown();
            log_debug!(
                codes::validation::UNKNOWN_PARAMETER,
                "Unknown parameter",
                "parameter" => name
            );
            return Err(ValidationError::unknown_parameter(name));
        };

        let original = value.to_string();
        if self.validate(param, value) {
            Ok(param)
        } else {
            Err(ValidationError::rejected(
                name,
                param.type_name(),
                param.range_text().as_deref(),
                &original,
            ))
        }
    }

    /// Lint and register a table using this engine's preferences
    pub fn register_table(&self, entries: Vec<Parameter>) -> DescriptorResult<ParameterTable> {
        ParameterTable::with_preferences(entries, &self.preferences)
    }

    pub fn stats(&self) -> EngineStats {
        self.counters.snapshot()
    }

    pub fn reset_stats(&self) {
        self.counters.reset();
    }
}

fn canonical_state(value: &Value) -> (Option<ParamKind>, Option<usize>, u64) {
    (value.canonical_kind(), value.enum_index(), value.aux())
}

impl Default for ParameterEngine {
    fn default() -> Self {
        Self::new()
    }
}
