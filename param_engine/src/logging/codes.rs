//! Consolidated log codes and classification system
//!
//! Single source of truth for every code the engine logs, together with the
//! metadata used when formatting events.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Numeric literal error codes
pub mod literal {
    use super::Code;

    pub const MALFORMED_INTEGER: Code = Code::new("E010");
    pub const MISSING_DIGITS: Code = Code::new("E011");
}

/// Descriptor table error codes
pub mod descriptor {
    use super::Code;

    pub const INVALID_RANGE: Code = Code::new("E020");
    pub const MISSING_CAPACITY: Code = Code::new("E021");
    pub const DUPLICATE_NAME: Code = Code::new("E022");
    pub const UNREACHABLE_AFTER_WILDCARD: Code = Code::new("E023");
    pub const RANGE_KIND_MISMATCH: Code = Code::new("E024");
    pub const LIMIT_EXCEEDED: Code = Code::new("E025");
    pub const EMPTY_TOKEN: Code = Code::new("E026");
    pub const INVALID_NAME: Code = Code::new("E027");
    pub const MASK_CAPACITY_EXCEEDED: Code = Code::new("E028");
}

/// Value validation error codes
pub mod validation {
    use super::Code;

    pub const VALUE_REJECTED: Code = Code::new("E040");
    pub const UNKNOWN_PARAMETER: Code = Code::new("E041");
}

/// Address parsing error codes
pub mod address {
    use super::Code;

    pub const MALFORMED_ADDRESS: Code = Code::new("E060");
    pub const PREFIX_OUT_OF_RANGE: Code = Code::new("E061");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const VALUE_ACCEPTED: Code = Code::new("I010");
    pub const VALUE_CANONICALIZED: Code = Code::new("I011");
    pub const TABLE_LINT_PASSED: Code = Code::new("I020");
    pub const TABLE_REGISTERED: Code = Code::new("I021");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

const REGISTRY_ENTRIES: &[ErrorMetadata] = &[
    // System errors
    ErrorMetadata::new(
        "ERR001",
        "System",
        Severity::Critical,
        false,
        "Critical internal engine error",
        "File a bug report with the failing descriptor",
    ),
    ErrorMetadata::new(
        "ERR002",
        "System",
        Severity::Critical,
        false,
        "Engine initialization failure",
        "Check logging configuration and environment variables",
    ),
    // Literal errors
    ErrorMetadata::new(
        "E010",
        "Literal",
        Severity::High,
        false,
        "Integer literal followed by unexpected characters",
        "Range bounds must be a bare numeral optionally followed by ':'",
    ),
    ErrorMetadata::new(
        "E011",
        "Literal",
        Severity::High,
        false,
        "Expected a numeral but found no digits",
        "Use a decimal, 0x hexadecimal, 0 octal or maxNN literal",
    ),
    // Descriptor errors
    ErrorMetadata::new(
        "E020",
        "Descriptor",
        Severity::High,
        false,
        "Range specification does not match the parameter type grammar",
        "Correct the range text in the descriptor table",
    ),
    ErrorMetadata::new(
        "E021",
        "Descriptor",
        Severity::High,
        false,
        "bit_list descriptor declares no capacity",
        "Declare a maximum bit index greater than zero",
    ),
    ErrorMetadata::new(
        "E022",
        "Descriptor",
        Severity::Medium,
        true,
        "Duplicate parameter name in one table",
        "Remove or rename the later descriptor",
    ),
    ErrorMetadata::new(
        "E023",
        "Descriptor",
        Severity::Medium,
        true,
        "Descriptor placed after a wildcard can never be found",
        "Move specific names before the wildcard descriptor",
    ),
    ErrorMetadata::new(
        "E024",
        "Descriptor",
        Severity::High,
        false,
        "Range variant not allowed for this parameter type",
        "Use a dynamic range only on dynamic and nested tables only on table or list",
    ),
    ErrorMetadata::new(
        "E025",
        "Descriptor",
        Severity::High,
        false,
        "Descriptor exceeds a compile-time limit",
        "Shorten the table or raise the limit in the build profile",
    ),
    ErrorMetadata::new(
        "E026",
        "Descriptor",
        Severity::Medium,
        true,
        "Token list contains an empty token",
        "Remove doubled or trailing '|' separators",
    ),
    ErrorMetadata::new(
        "E027",
        "Descriptor",
        Severity::Medium,
        true,
        "Parameter name is empty or uses the wildcard marker",
        "Give the descriptor a name or build it with Parameter::wildcard",
    ),
    ErrorMetadata::new(
        "E028",
        "Descriptor",
        Severity::Low,
        true,
        "multi range has more tokens than mask bits",
        "Tokens past the 64th can be selected but never appear in the mask",
    ),
    // Validation errors
    ErrorMetadata::new(
        "E040",
        "Validation",
        Severity::Medium,
        true,
        "Value does not satisfy the parameter descriptor",
        "Correct the configured value",
    ),
    ErrorMetadata::new(
        "E041",
        "Validation",
        Severity::Medium,
        true,
        "No descriptor matches the parameter name",
        "Check the parameter name for typos",
    ),
    // Address errors
    ErrorMetadata::new(
        "E060",
        "Address",
        Severity::Medium,
        true,
        "Text is not a MAC, IPv4 or IPv6 address",
        "Use xx:xx:xx:xx:xx:xx, dotted quad or IPv6 notation",
    ),
    ErrorMetadata::new(
        "E061",
        "Address",
        Severity::Medium,
        true,
        "CIDR prefix exceeds the address width",
        "Use at most /48, /32 or /128 for MAC, IPv4 and IPv6",
    ),
    // Success codes
    ErrorMetadata::new(
        "I001",
        "System",
        Severity::Low,
        true,
        "Logging system initialized",
        "No action required",
    ),
    ErrorMetadata::new(
        "I010",
        "Validation",
        Severity::Low,
        true,
        "Value accepted",
        "No action required",
    ),
    ErrorMetadata::new(
        "I011",
        "Validation",
        Severity::Low,
        true,
        "Value rewritten to its canonical form",
        "No action required",
    ),
    ErrorMetadata::new(
        "I020",
        "Descriptor",
        Severity::Low,
        true,
        "Descriptor table lint passed",
        "No action required",
    ),
    ErrorMetadata::new(
        "I021",
        "Descriptor",
        Severity::Low,
        true,
        "Descriptor table registered",
        "No action required",
    ),
];

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

/// Initialize and get the error registry
fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        REGISTRY_ENTRIES
            .iter()
            .map(|metadata| (metadata.code, metadata.clone()))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
