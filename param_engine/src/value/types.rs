use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Tag of the payload a Value currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Bool,
    Number,
    Text,
    Bytes,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Number => "number",
            ValueType::Text => "text",
            ValueType::Bytes => "bytes",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-width raw address payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressBytes {
    Mac([u8; 6]),
    Ip4([u8; 4]),
    Ip6([u8; 16]),
}

impl AddressBytes {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            AddressBytes::Mac(bytes) => bytes,
            AddressBytes::Ip4(bytes) => bytes,
            AddressBytes::Ip6(bytes) => bytes,
        }
    }

    /// Width of the address in bits
    pub fn bit_width(&self) -> u32 {
        self.as_bytes().len() as u32 * 8
    }
}

impl fmt::Display for AddressBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressBytes::Mac(bytes) => {
                let groups: Vec<String> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
                f.write_str(&groups.join(":"))
            }
            AddressBytes::Ip4(bytes) => write!(f, "{}", Ipv4Addr::from(*bytes)),
            AddressBytes::Ip6(bytes) => write!(f, "{}", Ipv6Addr::from(*bytes)),
        }
    }
}

/// Payload storage; exactly one variant is live at a time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ValueData {
    Bool(bool),
    Number(f64),
    Text(String),
    Address(AddressBytes),
}

impl ValueData {
    pub fn value_type(&self) -> ValueType {
        match self {
            ValueData::Bool(_) => ValueType::Bool,
            ValueData::Number(_) => ValueType::Number,
            ValueData::Text(_) => ValueType::Text,
            ValueData::Address(_) => ValueType::Bytes,
        }
    }
}
