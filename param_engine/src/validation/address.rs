//! Address validators
//!
//! mac and addr rewrite the value to raw bytes; ip4 rewrites it to the
//! packed network-order number produced by `inet_addr`.

use crate::address::{inet_addr, parse_address};
use crate::parameter::ParamKind;
use crate::value::{AddressBytes, Value};

pub(crate) fn valid_mac(value: &mut Value) -> bool {
    if value.canonical_kind() == Some(ParamKind::Mac) {
        return matches!(value.address(), Some(AddressBytes::Mac(_)));
    }

    let Some(text) = value.as_text() else {
        return false;
    };

    match parse_address(text) {
        Ok(parsed) if parsed.is_link_layer() => {
            value.set_address(parsed.address);
            value.mark_canonical(ParamKind::Mac);
            true
        }
        _ => false,
    }
}

pub(crate) fn valid_ip4(value: &mut Value) -> bool {
    if value.canonical_kind() == Some(ParamKind::Ip4) {
        return value.as_number().is_some();
    }

    let Some(packed) = value.as_text().and_then(inet_addr) else {
        return false;
    };

    value.set_number(f64::from(packed));
    value.mark_canonical(ParamKind::Ip4);
    true
}

pub(crate) fn valid_addr(value: &mut Value) -> bool {
    if value.canonical_kind() == Some(ParamKind::Addr) {
        return matches!(
            value.address(),
            Some(AddressBytes::Ip4(_) | AddressBytes::Ip6(_))
        );
    }

    let Some(text) = value.as_text() else {
        return false;
    };

    match parse_address(text) {
        Ok(parsed) if parsed.is_ip() => {
            value.set_address(parsed.address);
            value.mark_canonical(ParamKind::Addr);
            true
        }
        _ => false,
    }
}
