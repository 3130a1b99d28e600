use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parameter type tag
///
/// Declaration order is significant: it matches the display-name table
/// returned by [`ParamKind::as_str`] and [`ParamKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Table,
    List,
    Dynamic,
    Bool,
    Int,
    Interval,
    Real,
    Port,
    String,
    Select,
    Multi,
    Enum,
    Mac,
    Ip4,
    Addr,
    BitList,
    AddrList,
    Implied,
}

impl ParamKind {
    pub const ALL: [ParamKind; 18] = [
        ParamKind::Table,
        ParamKind::List,
        ParamKind::Dynamic,
        ParamKind::Bool,
        ParamKind::Int,
        ParamKind::Interval,
        ParamKind::Real,
        ParamKind::Port,
        ParamKind::String,
        ParamKind::Select,
        ParamKind::Multi,
        ParamKind::Enum,
        ParamKind::Mac,
        ParamKind::Ip4,
        ParamKind::Addr,
        ParamKind::BitList,
        ParamKind::AddrList,
        ParamKind::Implied,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Table => "table",
            ParamKind::List => "list",
            ParamKind::Dynamic => "dynamic",
            ParamKind::Bool => "bool",
            ParamKind::Int => "int",
            ParamKind::Interval => "interval",
            ParamKind::Real => "real",
            ParamKind::Port => "port",
            ParamKind::String => "string",
            ParamKind::Select => "select",
            ParamKind::Multi => "multi",
            ParamKind::Enum => "enum",
            ParamKind::Mac => "mac",
            ParamKind::Ip4 => "ip4",
            ParamKind::Addr => "addr",
            ParamKind::BitList => "bit_list",
            ParamKind::AddrList => "addr_list",
            ParamKind::Implied => "implied",
        }
    }

    /// Kinds whose range is a child table rather than text
    pub fn is_container(&self) -> bool {
        matches!(self, ParamKind::Table | ParamKind::List)
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a type name is not one of the known kinds
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown parameter type '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for ParamKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
