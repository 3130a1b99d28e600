//! Range specifications attached to a descriptor

use super::Parameter;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Supplies range text computed at call time
///
/// Used by `dynamic` parameters whose allowed tokens are only known at run
/// time, such as the names of loaded plugins. Implementations are invoked on
/// every validation and every introspection call.
pub trait RangeProvider: Send + Sync {
    fn range(&self) -> String;
}

impl<F> RangeProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    fn range(&self) -> String {
        self()
    }
}

#[derive(Clone, Default)]
pub enum Range {
    #[default]
    None,
    Text(Cow<'static, str>),
    Dynamic(Arc<dyn RangeProvider>),
    Nested(Vec<Parameter>),
}

impl Range {
    pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
        Range::Text(text.into())
    }

    pub fn dynamic(provider: impl RangeProvider + 'static) -> Self {
        Range::Dynamic(Arc::new(provider))
    }

    /// Resolve the textual form, invoking a provider if there is one
    pub fn resolve(&self) -> Option<Cow<'_, str>> {
        match self {
            Range::Text(text) => Some(Cow::Borrowed(text.as_ref())),
            Range::Dynamic(provider) => Some(Cow::Owned(provider.range())),
            Range::None | Range::Nested(_) => None,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Range::None => "none",
            Range::Text(_) => "text",
            Range::Dynamic(_) => "dynamic",
            Range::Nested(_) => "nested",
        }
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Range::None => f.write_str("None"),
            Range::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Range::Dynamic(_) => f.write_str("Dynamic(<provider>)"),
            Range::Nested(children) => f.debug_tuple("Nested").field(children).finish(),
        }
    }
}
