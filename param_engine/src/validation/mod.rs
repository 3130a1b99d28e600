//! Value validation against parameter descriptors
//!
//! [`validate`] is the single dispatch point: one validator per parameter
//! kind. Validators return a plain verdict. Those that canonicalize the
//! value (enum index, multi mask, address bytes, packed IPv4, bit-list
//! bitmap) only mutate it on success.

pub mod address;
pub mod bits;
pub mod lint;
pub mod numeric;
pub mod sets;

pub use bits::{bit_list_max, ANY_BITS};
pub use lint::{lint_table, LintFinding, LintReport, LintSeverity};
pub use numeric::DEFAULT_PORT_RANGE;
pub use sets::OPTIONAL_STRING;

use crate::parameter::{ParamKind, Parameter};
use crate::value::Value;

/// Check `value` against `param`, rewriting it into canonical form on success
///
/// An empty range text constrains nothing, the same as no range.
///
/// # Panics
///
/// Panics on descriptor bugs: an integer bound followed by garbage, or a
/// bit_list without a usable maximum bit index.
pub fn validate(param: &Parameter, value: &mut Value) -> bool {
    let resolved = param.range_text();
    let range = resolved.as_deref().filter(|r| !r.is_empty());

    match param.kind() {
        ParamKind::Bool => numeric::valid_bool(value),
        ParamKind::Int => numeric::valid_int(value, range),
        ParamKind::Port => numeric::valid_port(value, range),
        ParamKind::Interval => numeric::valid_interval(value),
        ParamKind::Real => numeric::valid_real(value, range),

        ParamKind::String => sets::valid_string(value, range),
        ParamKind::Select | ParamKind::Dynamic => sets::valid_select(value, range),
        ParamKind::Enum => sets::valid_enum(value, range),
        ParamKind::Multi => sets::valid_multi(value, range),

        ParamKind::Mac => address::valid_mac(value),
        ParamKind::Ip4 => address::valid_ip4(value),
        ParamKind::Addr => address::valid_addr(value),

        ParamKind::BitList => bits::valid_bit_list(value, range, param.name()),

        // validated element by element by their owners
        ParamKind::AddrList | ParamKind::Implied => true,

        // containers hold child descriptors, never a value
        ParamKind::Table | ParamKind::List => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueType;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_dispatch_by_kind() {
        let int = Parameter::new("n", ParamKind::Int).with_range("0:10");
        assert!(validate(&int, &mut Value::number(5.0)));
        assert!(!validate(&int, &mut Value::number(11.0)));

        let mac = Parameter::new("m", ParamKind::Mac);
        let mut v = Value::text("98:01:a7:9d:d8:41");
        assert!(validate(&mac, &mut v));
        assert_eq!(v.value_type(), ValueType::Bytes);
    }

    #[test]
    fn test_empty_range_is_unconstrained() {
        let int = Parameter::new("n", ParamKind::Int).with_range("");
        assert!(validate(&int, &mut Value::number(-42.0)));

        let port = Parameter::new("p", ParamKind::Port).with_range("");
        assert!(!validate(&port, &mut Value::number(70000.0)));

        let s = Parameter::new("s", ParamKind::String).with_range("");
        assert!(!validate(&s, &mut Value::text("")));
        assert!(validate(&s, &mut Value::text("x")));
    }

    #[test]
    fn test_pass_through_kinds() {
        for kind in [ParamKind::AddrList, ParamKind::Implied, ParamKind::Interval] {
            let p = Parameter::new("x", kind);
            assert!(validate(&p, &mut Value::text("anything")));
        }

        for kind in [ParamKind::Table, ParamKind::List] {
            let p = Parameter::new("x", kind).with_nested(Vec::new());
            assert!(!validate(&p, &mut Value::text("anything")));
        }
    }

    #[test]
    fn test_dynamic_range_consulted_each_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let p = Parameter::new("policy", ParamKind::Dynamic).with_dynamic_range(move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                "alpha | beta".to_string()
            } else {
                "gamma".to_string()
            }
        });

        assert!(validate(&p, &mut Value::text("beta")));
        assert!(!validate(&p, &mut Value::text("beta")));
        assert!(validate(&p, &mut Value::text("gamma")));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_enum_and_multi_revalidate_to_same_result() {
        let e = Parameter::new("e", ParamKind::Enum).with_range("red | green | yellow");
        let mut v = Value::text("green");
        assert!(validate(&e, &mut v));
        assert!(validate(&e, &mut v));
        assert_eq!(v.enum_index(), Some(1));

        let m = Parameter::new("m", ParamKind::Multi).with_range("red | green | yellow");
        let mut v = Value::text("yellow red");
        assert!(validate(&m, &mut v));
        assert!(validate(&m, &mut v));
        assert_eq!(v.aux(), 0b101);
    }
}
