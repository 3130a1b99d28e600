//! Descriptor table lint
//!
//! Catches table defects that would otherwise surface as a panic or a
//! value that can never validate: malformed bounds, a bit_list without
//! capacity, range variants on the wrong kind, names shadowed by a wildcard.

use crate::config::compile_time::descriptors::{
    MAX_NAME_LENGTH, MAX_NESTING_DEPTH, MAX_TABLE_ENTRIES,
};
use crate::config::compile_time::validation::{MAX_BIT_LIST_CAPACITY, MAX_RANGE_LENGTH};
use crate::literal::{is_c_space, parse_real, parse_unsigned, require_int, try_parse_int};
use crate::logging::codes::{self, Severity};
use crate::parameter::{DescriptorError, ParamKind, Parameter, Range, WILDCARD_NAME};
use crate::value::MASK_BITS;
use crate::{log_error, log_success, log_warning};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    Warning,
    Error,
}

impl LintSeverity {
    fn for_error(error: &DescriptorError) -> Self {
        match codes::get_severity(error.error_code().as_str()) {
            Severity::Critical | Severity::High => LintSeverity::Error,
            Severity::Medium | Severity::Low => LintSeverity::Warning,
        }
    }
}

/// One problem found in a table
#[derive(Debug, Clone, PartialEq)]
pub struct LintFinding {
    /// Dotted path of the descriptor, e.g. `stream.tcp.policy`
    pub path: String,
    pub severity: LintSeverity,
    pub error: DescriptorError,
}

impl LintFinding {
    pub fn is_error(&self) -> bool {
        self.severity == LintSeverity::Error
    }
}

#[derive(Debug, Clone, Default)]
pub struct LintReport {
    findings: Vec<LintFinding>,
}

impl LintReport {
    pub fn findings(&self) -> &[LintFinding] {
        &self.findings
    }

    pub fn errors(&self) -> impl Iterator<Item = &LintFinding> {
        self.findings.iter().filter(|f| f.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &LintFinding> {
        self.findings.iter().filter(|f| !f.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings for the descriptor at `path`
    pub fn for_path<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a LintFinding> {
        self.findings.iter().filter(move |f| f.path == path)
    }

    /// Emit every finding through the global logger
    pub fn log_findings(&self) {
        for finding in &self.findings {
            let message = finding.error.to_string();
            match finding.severity {
                LintSeverity::Error => log_error!(
                    finding.error.error_code(),
                    &message,
                    "path" => finding.path
                ),
                LintSeverity::Warning => log_warning!(
                    finding.error.error_code(),
                    &message,
                    "path" => finding.path
                ),
            }
        }

        if self.is_clean() {
            log_success!(codes::success::TABLE_LINT_PASSED, "Descriptor table lint passed");
        }
    }

    fn push(&mut self, path: &str, error: DescriptorError) {
        self.findings.push(LintFinding {
            path: path.to_string(),
            severity: LintSeverity::for_error(&error),
            error,
        });
    }
}

/// Check a table and every nested table below it
pub fn lint_table(table: &[Parameter]) -> LintReport {
    let mut report = LintReport::default();
    lint_level(table, "", 1, &mut report);
    report
}

fn lint_level(table: &[Parameter], prefix: &str, depth: usize, report: &mut LintReport) {
    let table_path = if prefix.is_empty() { "<root>" } else { prefix };

    if depth > MAX_NESTING_DEPTH {
        report.push(
            table_path,
            DescriptorError::limit_exceeded("table nesting depth", depth, MAX_NESTING_DEPTH),
        );
        return;
    }

    if table.len() > MAX_TABLE_ENTRIES {
        report.push(
            table_path,
            DescriptorError::limit_exceeded("table entries", table.len(), MAX_TABLE_ENTRIES),
        );
    }

    let mut seen = HashSet::new();
    let mut wildcard: Option<&str> = None;

    for param in table {
        let path = if prefix.is_empty() {
            param.name().to_string()
        } else {
            format!("{}.{}", prefix, param.name())
        };

        if let Some(shadow) = wildcard {
            report.push(
                &path,
                DescriptorError::unreachable_after_wildcard(param.name(), shadow),
            );
        }
        if param.is_wildcard() {
            wildcard.get_or_insert(param.name());
        } else if !seen.insert(param.name()) {
            report.push(&path, DescriptorError::duplicate_name(param.name()));
        }

        lint_name(param, &path, report);
        lint_range_variant(param, &path, report);

        if let Range::Text(text) = param.range() {
            lint_range_text(param, text, &path, report);
        } else if needs_range(param.kind()) && matches!(param.range(), Range::None) {
            lint_missing_range(param, &path, report);
        }

        if let Some(children) = param.nested() {
            lint_level(children, &path, depth + 1, report);
        }
    }
}

fn lint_name(param: &Parameter, path: &str, report: &mut LintReport) {
    let name = param.name();

    if name.is_empty() {
        report.push(path, DescriptorError::invalid_name(name, "name is empty"));
    } else if name.starts_with(WILDCARD_NAME) && !param.is_wildcard() {
        report.push(
            path,
            DescriptorError::invalid_name(name, "'*' names are reserved for wildcard descriptors"),
        );
    }

    if name.len() > MAX_NAME_LENGTH {
        report.push(
            path,
            DescriptorError::limit_exceeded("name length", name.len(), MAX_NAME_LENGTH),
        );
    }
}

fn lint_range_variant(param: &Parameter, path: &str, report: &mut LintReport) {
    let kind = param.kind();
    let range = param.range();

    let allowed = match range {
        Range::None => kind != ParamKind::Dynamic,
        Range::Text(_) => !kind.is_container(),
        Range::Dynamic(_) => kind == ParamKind::Dynamic,
        Range::Nested(_) => kind.is_container(),
    };

    if !allowed {
        report.push(
            path,
            DescriptorError::range_kind_mismatch(param.name(), kind.as_str(), range.variant_name()),
        );
    }
}

fn needs_range(kind: ParamKind) -> bool {
    matches!(
        kind,
        ParamKind::Select | ParamKind::Enum | ParamKind::Multi | ParamKind::BitList
    )
}

fn lint_missing_range(param: &Parameter, path: &str, report: &mut LintReport) {
    let error = if param.kind() == ParamKind::BitList {
        DescriptorError::missing_capacity(param.name())
    } else {
        DescriptorError::invalid_range(param.name(), param.type_name(), "", "token list required")
    };
    report.push(path, error);
}

fn lint_range_text(param: &Parameter, text: &str, path: &str, report: &mut LintReport) {
    let invalid = |reason: &str| {
        DescriptorError::invalid_range(param.name(), param.type_name(), text, reason)
    };

    if text.len() > MAX_RANGE_LENGTH {
        report.push(
            path,
            DescriptorError::limit_exceeded("range length", text.len(), MAX_RANGE_LENGTH),
        );
        return;
    }

    match param.kind() {
        ParamKind::Int | ParamKind::Port if !text.is_empty() => {
            if let Err(reason) = check_int_bounds(text) {
                report.push(path, invalid(&reason));
            }
        }
        ParamKind::Real if !text.is_empty() => {
            if let Some((lo, hi)) = text.split_once(':') {
                if !lo.is_empty() && !hi.is_empty() && parse_real(lo) > parse_real(hi) {
                    report.push(path, invalid("lower bound exceeds upper bound"));
                }
            }
        }
        ParamKind::String if !text.is_empty() && text != "(optional)" => {
            if require_int(text).map_or(true, |(n, _)| n < 0) {
                report.push(path, invalid("expected a maximum length or (optional)"));
            }
        }
        ParamKind::BitList => {
            let max = parse_unsigned(text);
            if max == 0 {
                report.push(path, DescriptorError::missing_capacity(param.name()));
            } else if max > MAX_BIT_LIST_CAPACITY as u64 {
                report.push(
                    path,
                    DescriptorError::limit_exceeded(
                        "bit_list capacity",
                        usize::try_from(max).unwrap_or(usize::MAX),
                        MAX_BIT_LIST_CAPACITY,
                    ),
                );
            }
        }
        ParamKind::Select | ParamKind::Enum | ParamKind::Multi => {
            lint_token_list(param, text, path, report);
        }
        _ => {}
    }
}

fn check_int_bounds(text: &str) -> Result<(), String> {
    let colon = text.find(':');

    let low = if text.starts_with(':') {
        None
    } else {
        Some(try_parse_int(text).map_err(|e| e.to_string())?)
    };

    let high = match colon.map(|c| &text[c + 1..]).filter(|hi| !hi.is_empty()) {
        Some(hi) => Some(try_parse_int(hi).map_err(|e| e.to_string())?),
        None => None,
    };

    match (low, high) {
        (Some(lo), Some(hi)) if lo > hi => Err(format!("lower bound {} exceeds upper bound {}", lo, hi)),
        _ => Ok(()),
    }
}

fn lint_token_list(param: &Parameter, text: &str, path: &str, report: &mut LintReport) {
    let tokens: Vec<&str> = text
        .split('|')
        .map(|t| t.trim_matches(|c: char| c.is_ascii() && is_c_space(c as u8)))
        .collect();

    if tokens.iter().all(|t| t.is_empty()) {
        report.push(
            path,
            DescriptorError::invalid_range(param.name(), param.type_name(), text, "no tokens"),
        );
        return;
    }

    if tokens.iter().any(|t| t.is_empty()) {
        report.push(path, DescriptorError::empty_token(param.name(), text));
    }

    if param.kind() == ParamKind::Multi && tokens.len() > MASK_BITS {
        report.push(
            path,
            DescriptorError::mask_capacity_exceeded(param.name(), tokens.len(), MASK_BITS),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn single(param: Parameter) -> LintReport {
        lint_table(&[param])
    }

    #[test]
    fn test_clean_table() {
        let table = vec![
            Parameter::new("depth", ParamKind::Int).with_range("0:max32"),
            Parameter::new("port", ParamKind::Port),
            Parameter::new("ratio", ParamKind::Real).with_range("0.0:1.0"),
            Parameter::new("label", ParamKind::String).with_range("(optional)"),
            Parameter::new("mode", ParamKind::Enum).with_range("a | b | c"),
            Parameter::new("bits", ParamKind::BitList).with_range("255"),
            Parameter::new("policy", ParamKind::Dynamic).with_dynamic_range(|| "x".to_string()),
            Parameter::new("nested", ParamKind::Table)
                .with_nested(vec![Parameter::new("inner", ParamKind::Bool)]),
            Parameter::wildcard(ParamKind::String),
        ];

        let report = lint_table(&table);
        assert!(report.is_clean(), "{:?}", report.findings());
    }

    #[test]
    fn test_int_bounds() {
        let report = single(Parameter::new("n", ParamKind::Int).with_range("1:x"));
        assert_matches!(
            report.findings()[0].error,
            DescriptorError::InvalidRange { .. }
        );
        assert!(report.has_errors());

        let report = single(Parameter::new("n", ParamKind::Int).with_range("10:1"));
        assert!(report.has_errors());

        assert!(single(Parameter::new("n", ParamKind::Int).with_range("-1:")).is_clean());
    }

    #[test]
    fn test_bit_list_capacity() {
        let report = single(Parameter::new("b", ParamKind::BitList));
        assert_matches!(
            report.findings()[0].error,
            DescriptorError::MissingCapacity { .. }
        );

        let report = single(Parameter::new("b", ParamKind::BitList).with_range("0"));
        assert!(report.has_errors());

        let too_big = (MAX_BIT_LIST_CAPACITY + 1).to_string();
        let report = single(Parameter::new("b", ParamKind::BitList).with_range(too_big));
        assert_matches!(
            report.findings()[0].error,
            DescriptorError::LimitExceeded { .. }
        );
    }

    #[test]
    fn test_string_range() {
        assert!(single(Parameter::new("s", ParamKind::String).with_range("16")).is_clean());
        assert!(single(Parameter::new("s", ParamKind::String).with_range("optional")).has_errors());
    }

    #[test]
    fn test_token_lists() {
        let report = single(Parameter::new("m", ParamKind::Select).with_range("a || b"));
        assert_eq!(report.warnings().count(), 1);
        assert!(!report.has_errors());

        assert!(single(Parameter::new("m", ParamKind::Enum)).has_errors());
        assert!(single(Parameter::new("m", ParamKind::Enum).with_range(" | ")).has_errors());

        let many: String = (0..65).map(|i| format!("t{}", i)).collect::<Vec<_>>().join("|");
        let report = single(Parameter::new("m", ParamKind::Multi).with_range(many));
        assert_matches!(
            report.findings()[0].error,
            DescriptorError::MaskCapacityExceeded { count: 65, .. }
        );
    }

    #[test]
    fn test_range_variants() {
        let report = single(
            Parameter::new("s", ParamKind::Select).with_dynamic_range(|| "a".to_string()),
        );
        assert_matches!(
            report.findings()[0].error,
            DescriptorError::RangeKindMismatch { .. }
        );

        assert!(single(Parameter::new("d", ParamKind::Dynamic)).has_errors());
        assert!(single(
            Parameter::new("i", ParamKind::Int).with_nested(vec![Parameter::new("x", ParamKind::Int)])
        )
        .has_errors());
    }

    #[test]
    fn test_names_and_order() {
        let table = vec![
            Parameter::new("a", ParamKind::Int),
            Parameter::new("a", ParamKind::Int),
            Parameter::wildcard(ParamKind::String),
            Parameter::new("late", ParamKind::Bool),
            Parameter::new("*star", ParamKind::Bool),
            Parameter::new("", ParamKind::Bool),
        ];

        let report = lint_table(&table);
        assert!(!report.has_errors());
        assert_eq!(report.for_path("a").count(), 1);
        assert_matches!(
            report.for_path("late").next().map(|f| &f.error),
            Some(DescriptorError::UnreachableAfterWildcard { .. })
        );
        assert_eq!(report.for_path("*star").count(), 2);
        assert_eq!(report.for_path("").count(), 2);
    }

    #[test]
    fn test_nested_paths() {
        let table = vec![Parameter::new("stream", ParamKind::Table).with_nested(vec![
            Parameter::new("tcp", ParamKind::List).with_nested(vec![
                Parameter::new("policy", ParamKind::Enum),
            ]),
        ])];

        let report = lint_table(&table);
        assert_eq!(report.findings().len(), 1);
        assert_eq!(report.findings()[0].path, "stream.tcp.policy");
    }

    #[test]
    fn test_nesting_depth_limit() {
        let mut param = Parameter::new("leaf", ParamKind::Bool);
        for level in 0..=MAX_NESTING_DEPTH {
            param = Parameter::new(format!("t{}", level), ParamKind::Table).with_nested(vec![param]);
        }

        let report = lint_table(&[param]);
        assert!(report
            .errors()
            .any(|f| matches!(f.error, DescriptorError::LimitExceeded { .. })));
    }

    #[test]
    fn test_oversized_name() {
        let name = "n".repeat(MAX_NAME_LENGTH + 1);
        let report = single(Parameter::new(name, ParamKind::Bool));
        assert!(report.has_errors());
    }
}
