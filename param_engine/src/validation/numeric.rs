//! Boolean and numeric validators
//!
//! Range grammar shared by int, port and real: `#` exact, `#:` lower bound,
//! `:#` upper bound, `#:#` both, all inclusive. No surrounding whitespace.

use crate::literal::{parse_int, parse_real};
use crate::value::Value;

/// Range applied to ports when the descriptor gives none
pub const DEFAULT_PORT_RANGE: &str = "0:65535";

pub(crate) fn valid_bool(value: &Value) -> bool {
    value.as_bool().is_some()
}

pub(crate) fn valid_int(value: &Value, range: Option<&str>) -> bool {
    let Some(real) = value.as_number() else {
        return false;
    };

    let integer = real as i64;
    if real != integer as f64 {
        return false;
    }

    match range {
        Some(range) => within_bounds(integer, range, parse_int),
        None => true,
    }
}

pub(crate) fn valid_port(value: &Value, range: Option<&str>) -> bool {
    valid_int(value, Some(range.unwrap_or(DEFAULT_PORT_RANGE)))
}

/// Interval ranges use `a<>b` and `a<=>b` shorthand that the owning module
/// checks itself, so anything is accepted here.
pub(crate) fn valid_interval(_value: &Value) -> bool {
    true
}

pub(crate) fn valid_real(value: &Value, range: Option<&str>) -> bool {
    let Some(real) = value.as_number() else {
        return false;
    };

    match range {
        Some(range) => within_bounds(real, range, parse_real),
        None => true,
    }
}

fn within_bounds<T, F>(value: T, range: &str, parse: F) -> bool
where
    T: PartialOrd,
    F: Fn(&str) -> T,
{
    let colon = range.find(':');

    if !range.starts_with(':') {
        let low = parse(range);
        if value < low {
            return false;
        }
        if colon.is_none() {
            return value == low;
        }
    }

    if let Some(hi) = colon.map(|c| &range[c + 1..]).filter(|hi| !hi.is_empty()) {
        if value > parse(hi) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool() {
        assert!(valid_bool(&Value::bool(true)));
        assert!(valid_bool(&Value::bool(false)));
        assert!(!valid_bool(&Value::number(1.0)));
        assert!(!valid_bool(&Value::text("true")));
    }

    #[test]
    fn test_int_table() {
        let cases: &[(f64, Option<&str>, bool)] = &[
            (0.0, None, true),
            (0.0, Some("0"), true),
            (0.0, Some("0:"), true),
            (0.0, Some(":0"), true),
            (0.0, Some(":1"), true),
            (0.0, Some("-1:1"), true),
            (0.0, Some("-1:"), true),
            (1.0, Some("0"), false),
            (1.0, Some("0:"), true),
            (1.0, Some(":0"), false),
            (1.5, Some(":0"), false),
            (1.5, None, false),
            (-10.0, Some("-11:-9"), true),
            (10.0, Some("9:11"), true),
            (10.0, Some("0xA:11"), true),
            (8.0, Some("010"), true),
            (4294967295.0, Some("0:max32"), true),
            (4294967296.0, Some("0:max32"), false),
        ];

        for (value, range, expected) in cases {
            assert_eq!(
                valid_int(&Value::number(*value), *range),
                *expected,
                "int {} against {:?}",
                value,
                range
            );
        }
    }

    #[test]
    fn test_int_requires_number() {
        assert!(!valid_int(&Value::text("1"), None));
        assert!(!valid_int(&Value::bool(true), None));
        assert!(!valid_int(&Value::number(f64::NAN), None));
        assert!(!valid_int(&Value::number(f64::INFINITY), None));
    }

    #[test]
    fn test_port_default_range() {
        assert!(valid_port(&Value::number(0.0), None));
        assert!(valid_port(&Value::number(65535.0), None));
        assert!(!valid_port(&Value::number(65536.0), None));
        assert!(!valid_port(&Value::number(-1.0), None));
        assert!(valid_port(&Value::number(70000.0), Some("0:")));
    }

    #[test]
    fn test_interval_accepts_anything() {
        assert!(valid_interval(&Value::text("1<>10")));
        assert!(valid_interval(&Value::bool(false)));
    }

    #[test]
    fn test_real_table() {
        let cases: &[(f64, Option<&str>, bool)] = &[
            (0.0, Some("0.0"), true),
            (0.1, Some("0:"), true),
            (0.1, Some(":0.9"), true),
            (0.1, Some("-0.9:0.9"), true),
            (1.0, Some("0.9"), false),
            (1.0, Some("0.9:"), true),
            (1.0, Some(":0.9"), false),
            (-10.0, Some("-11.1:-9.9"), true),
            (10.0, Some("9.9:11.1"), true),
            (10.0, Some("011:11"), false),
            (10.0, Some("0xA:11"), true),
            (1.5, None, true),
        ];

        for (value, range, expected) in cases {
            assert_eq!(
                valid_real(&Value::number(*value), *range),
                *expected,
                "real {} against {:?}",
                value,
                range
            );
        }
    }

    #[test]
    fn test_real_requires_number() {
        assert!(!valid_real(&Value::text("0.5"), None));
    }
}
