//! Descriptor table lookup and registration

use super::{DescriptorError, DescriptorResult, Parameter};
use crate::config::runtime::ValidationPreferences;
use crate::log_success;
use crate::logging::codes;
use crate::validation::lint::{lint_table, LintReport};

/// First descriptor whose name equals `name` or that is a wildcard
///
/// Order matters: a wildcard shadows every descriptor after it, so specific
/// names must come first.
pub fn find<'a>(table: &'a [Parameter], name: &str) -> Option<&'a Parameter> {
    table.iter().find(|p| p.matches(name))
}

/// A descriptor table that passed lint when it was built
#[derive(Debug, Clone)]
pub struct ParameterTable {
    entries: Vec<Parameter>,
}

impl ParameterTable {
    /// Lint and wrap `entries` using preferences from the environment
    pub fn new(entries: Vec<Parameter>) -> DescriptorResult<Self> {
        Self::with_preferences(entries, &ValidationPreferences::default())
    }

    pub fn with_preferences(
        entries: Vec<Parameter>,
        preferences: &ValidationPreferences,
    ) -> DescriptorResult<Self> {
        if preferences.lint_on_register {
            let report = lint_table(&entries);
            report.log_findings();
            Self::check_report(report, preferences.strict_lint)?;
        }

        log_success!(
            codes::success::TABLE_REGISTERED,
            "Descriptor table registered",
            "entries" => entries.len()
        );

        Ok(Self { entries })
    }

    fn check_report(report: LintReport, strict: bool) -> DescriptorResult<()> {
        let mut blocking: Vec<DescriptorError> = report
            .findings()
            .iter()
            .filter(|f| strict || f.is_error())
            .map(|f| f.error.clone())
            .collect();

        if blocking.is_empty() {
            return Ok(());
        }

        let error_count = blocking.len();
        Err(DescriptorError::TableRejected {
            error_count,
            first: Box::new(blocking.swap_remove(0)),
        })
    }

    pub fn find(&self, name: &str) -> Option<&Parameter> {
        find(&self.entries, name)
    }

    pub fn entries(&self) -> &[Parameter] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.entries.iter()
    }
}

impl AsRef<[Parameter]> for ParameterTable {
    fn as_ref(&self) -> &[Parameter] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a ParameterTable {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::ParamKind;
    use assert_matches::assert_matches;

    fn prefs(strict: bool) -> ValidationPreferences {
        ValidationPreferences {
            log_rejections: false,
            log_canonicalization: false,
            lint_on_register: true,
            strict_lint: strict,
        }
    }

    #[test]
    fn test_find_first_match_wins() {
        let table = vec![
            Parameter::new("a", ParamKind::Int),
            Parameter::new("b", ParamKind::Bool),
            Parameter::wildcard(ParamKind::String),
            Parameter::new("c", ParamKind::Real),
        ];

        assert_eq!(find(&table, "b").map(Parameter::kind), Some(ParamKind::Bool));
        assert_eq!(find(&table, "zzz").map(Parameter::kind), Some(ParamKind::String));
        // shadowed by the wildcard
        assert_eq!(find(&table, "c").map(Parameter::kind), Some(ParamKind::String));
        assert!(find(&[], "a").is_none());
    }

    #[test]
    fn test_registration_rejects_errors() {
        let entries = vec![Parameter::new("bits", ParamKind::BitList)];
        let result = ParameterTable::with_preferences(entries, &prefs(false));
        assert_matches!(
            result,
            Err(DescriptorError::TableRejected { error_count: 1, .. })
        );
    }

    #[test]
    fn test_strict_lint_promotes_warnings() {
        let entries = vec![
            Parameter::new("a", ParamKind::Int),
            Parameter::new("a", ParamKind::Int),
        ];

        assert!(ParameterTable::with_preferences(entries.clone(), &prefs(false)).is_ok());
        assert_matches!(
            ParameterTable::with_preferences(entries, &prefs(true)),
            Err(DescriptorError::TableRejected { .. })
        );
    }

    #[test]
    fn test_registered_table_lookup() {
        let table = ParameterTable::with_preferences(
            vec![
                Parameter::new("snaplen", ParamKind::Int).with_range("0:65535"),
                Parameter::new("mode", ParamKind::Enum).with_range("passive | inline"),
            ],
            &prefs(true),
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.find("mode").map(Parameter::type_name), Some("enum"));
        assert_eq!(table.iter().count(), 2);
        assert!(table.find("missing").is_none());
    }
}
