//! Dynamically typed parameter value
//!
//! A Value arrives from the configuration lexer holding a boolean, a number
//! or a string. Validators may rewrite it into a canonical form and record
//! which parameter kind produced that form so a second validation pass is a
//! no-op.

pub mod types;

pub use types::{AddressBytes, ValueData, ValueType};

use crate::parameter::ParamKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of the auxiliary mask written by multi validation
pub const MASK_BITS: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value {
    data: ValueData,
    enum_index: Option<usize>,
    aux: u64,
    canonical: Option<ParamKind>,
}

impl Value {
    fn from_data(data: ValueData) -> Self {
        Self {
            data,
            enum_index: None,
            aux: 0,
            canonical: None,
        }
    }

    pub fn bool(value: bool) -> Self {
        Self::from_data(ValueData::Bool(value))
    }

    pub fn number(value: f64) -> Self {
        Self::from_data(ValueData::Number(value))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::from_data(ValueData::Text(value.into()))
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn value_type(&self) -> ValueType {
        self.data.value_type()
    }

    pub fn data(&self) -> &ValueData {
        &self.data
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.data {
            ValueData::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self.data {
            ValueData::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Integral view of a number, truncating toward zero and saturating
    pub fn as_integer(&self) -> Option<i64> {
        self.as_number().map(|n| n as i64)
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            ValueData::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn address(&self) -> Option<&AddressBytes> {
        match &self.data {
            ValueData::Address(addr) => Some(addr),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.address().map(AddressBytes::as_bytes)
    }

    pub fn enum_index(&self) -> Option<usize> {
        self.enum_index
    }

    pub fn aux(&self) -> u64 {
        self.aux
    }

    /// Kind of the validator that last rewrote this value, if any
    pub fn canonical_kind(&self) -> Option<ParamKind> {
        self.canonical
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Replace the payload with raw address bytes
    pub fn set_address(&mut self, address: AddressBytes) {
        self.data = ValueData::Address(address);
        self.canonical = None;
    }

    pub fn set_enum(&mut self, index: usize) {
        self.enum_index = Some(index);
    }

    pub fn set_aux(&mut self, mask: u64) {
        self.aux = mask;
    }

    pub fn set_number(&mut self, number: f64) {
        self.data = ValueData::Number(number);
        self.canonical = None;
    }

    pub fn set_text(&mut self, text: String) {
        self.data = ValueData::Text(text);
        self.canonical = None;
    }

    pub(crate) fn mark_canonical(&mut self, kind: ParamKind) {
        self.canonical = Some(kind);
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::text(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::text(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            ValueData::Bool(b) => write!(f, "{}", b),
            ValueData::Number(n) => write!(f, "{}", n),
            ValueData::Text(s) => f.write_str(s),
            ValueData::Address(addr) => write!(f, "{}", addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_and_tags() {
        assert_eq!(Value::from(true).value_type(), ValueType::Bool);
        assert_eq!(Value::from(1.5).value_type(), ValueType::Number);
        assert_eq!(Value::from(7i64).as_integer(), Some(7));
        assert_eq!(Value::from("x").value_type(), ValueType::Text);
        assert_eq!(Value::from(String::from("y")).as_text(), Some("y"));
    }

    #[test]
    fn test_integer_view_truncates() {
        assert_eq!(Value::number(1.9).as_integer(), Some(1));
        assert_eq!(Value::number(-1.9).as_integer(), Some(-1));
        assert_eq!(Value::text("1").as_integer(), None);
    }

    #[test]
    fn test_set_address() {
        let mut v = Value::text("1.2.3.4");
        v.set_address(AddressBytes::Ip4([1, 2, 3, 4]));

        assert_eq!(v.value_type(), ValueType::Bytes);
        assert_eq!(v.as_bytes(), Some(&[1u8, 2, 3, 4][..]));
        assert_eq!(v.to_string(), "1.2.3.4");
    }

    #[test]
    fn test_side_channels_survive_payload_changes() {
        let mut v = Value::text("red");
        v.set_enum(2);
        v.set_aux(0b101);
        v.set_text("green".to_string());

        assert_eq!(v.enum_index(), Some(2));
        assert_eq!(v.aux(), 0b101);
    }

    #[test]
    fn test_public_setters_clear_canonical_marker() {
        let mut v = Value::text("00:11:22:33:44:55");
        v.set_address(AddressBytes::Mac([0, 0x11, 0x22, 0x33, 0x44, 0x55]));
        v.mark_canonical(ParamKind::Mac);
        assert_eq!(v.canonical_kind(), Some(ParamKind::Mac));

        v.set_text("00:11:22:33:44:55".to_string());
        assert_eq!(v.canonical_kind(), None);
    }

    #[test]
    fn test_display_formats() {
        let mac = AddressBytes::Mac([0x98, 0x01, 0xa7, 0x9d, 0xd8, 0x41]);
        assert_eq!(mac.to_string(), "98:01:a7:9d:d8:41");
        assert_eq!(mac.bit_width(), 48);

        let mut ip6 = [0u8; 16];
        ip6[15] = 1;
        assert_eq!(AddressBytes::Ip6(ip6).to_string(), "::1");
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let json = serde_json::to_string(&Value::number(3.0)).unwrap();
        assert!(json.contains("\"type\":\"number\""));
    }
}
