//! Parameter descriptors
//!
//! A descriptor pairs a name and type tag with a compact range
//! specification. Tables of descriptors are plain slices searched in order;
//! see [`find`] for the lookup rules.

pub mod error;
pub mod kind;
pub mod range;
pub mod table;

pub use error::{DescriptorError, DescriptorResult};
pub use kind::{ParamKind, UnknownKind};
pub use range::{Range, RangeProvider};
pub use table::{find, ParameterTable};

use crate::literal::parse_real;
use crate::value::Value;
use std::borrow::Cow;

/// Name given to descriptors built with [`Parameter::wildcard`]
pub const WILDCARD_NAME: &str = "*";

#[derive(Debug, Clone)]
pub struct Parameter {
    name: Cow<'static, str>,
    kind: ParamKind,
    range: Range,
    default: Option<Cow<'static, str>>,
    help: Option<Cow<'static, str>>,
    wildcard: bool,
}

impl Parameter {
    pub fn new(name: impl Into<Cow<'static, str>>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            range: Range::None,
            default: None,
            help: None,
            wildcard: false,
        }
    }

    /// A descriptor that matches every lookup key
    pub fn wildcard(kind: ParamKind) -> Self {
        Self {
            wildcard: true,
            ..Self::new(WILDCARD_NAME, kind)
        }
    }

    pub fn with_range(mut self, range: impl Into<Cow<'static, str>>) -> Self {
        self.range = Range::Text(range.into());
        self
    }

    pub fn with_dynamic_range(mut self, provider: impl RangeProvider + 'static) -> Self {
        self.range = Range::dynamic(provider);
        self
    }

    pub fn with_nested(mut self, children: Vec<Parameter>) -> Self {
        self.range = Range::Nested(children);
        self
    }

    pub fn with_default(mut self, default: impl Into<Cow<'static, str>>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<Cow<'static, str>>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    pub fn range(&self) -> &Range {
        &self.range
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    pub fn default_text(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Child descriptors of a table or list
    pub fn nested(&self) -> Option<&[Parameter]> {
        match &self.range {
            Range::Nested(children) if self.kind.is_container() => Some(children),
            _ => None,
        }
    }

    /// Whether a lookup for `name` stops at this descriptor
    pub fn matches(&self, name: &str) -> bool {
        self.wildcard || self.name == name
    }

    // ------------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------------

    pub fn type_name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Current range text
    ///
    /// Tables and lists never have one. A dynamic range is recomputed on
    /// every call.
    pub fn range_text(&self) -> Option<Cow<'_, str>> {
        if self.kind.is_container() {
            return None;
        }
        self.range.resolve()
    }

    /// Default as a boolean: true when the default text contains `t` or `T`
    pub fn default_bool(&self) -> bool {
        self.default
            .as_deref()
            .is_some_and(|d| d.contains(['t', 'T']))
    }

    /// Default as a number, reading the longest numeric prefix
    pub fn default_number(&self) -> f64 {
        self.default.as_deref().map(parse_real).unwrap_or(0.0)
    }

    pub fn default_string(&self) -> &str {
        self.default.as_deref().unwrap_or("")
    }

    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------

    /// Check `value` against this descriptor, canonicalizing it on success
    ///
    /// # Panics
    ///
    /// Panics on descriptor bugs: an integer bound with trailing garbage, or
    /// a bit_list without a usable maximum bit index.
    pub fn validate(&self, value: &mut Value) -> bool {
        crate::validation::validate(self, value)
    }
}
