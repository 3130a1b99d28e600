// Internal modules
pub mod address;
pub mod config;
pub mod engine;
pub mod lexical;
pub mod literal;
#[macro_use]
pub mod logging;
pub mod parameter;
pub mod validation;
pub mod value;

// Re-export key types for library consumers
pub use engine::{EngineStats, ParameterEngine, ValidationError, ValidationResult};
pub use parameter::{
    find, DescriptorError, DescriptorResult, ParamKind, Parameter, ParameterTable, Range,
    RangeProvider,
};
pub use validation::{lint_table, validate, LintReport};
pub use value::{AddressBytes, Value, ValueType};
