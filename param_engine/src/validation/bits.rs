//! bit_list validation
//!
//! The range is the largest permitted bit index. A value of `any` selects
//! every bit; otherwise the value is a whitespace-separated list of
//! base-prefixed indices. The result is a string of `'0'`/`'1'` characters,
//! one per index from 0 to the maximum.

use crate::config::compile_time::validation::MAX_BIT_LIST_CAPACITY;
use crate::literal::{is_c_space, parse_unsigned, scan_int};
use crate::parameter::ParamKind;
use crate::value::Value;

/// Value text selecting every bit
pub const ANY_BITS: &str = "any";

/// Largest bit index declared by a bit_list range
///
/// # Panics
///
/// Panics when the range is missing, zero, or larger than the configured
/// bit-list capacity. Those are defects in the descriptor table.
pub fn bit_list_max(name: &str, range: Option<&str>) -> usize {
    let max = range.map(parse_unsigned).unwrap_or(0);
    if max == 0 {
        panic!("bit_list parameter '{}' declares no maximum bit index", name);
    }

    match usize::try_from(max) {
        Ok(max) if max <= MAX_BIT_LIST_CAPACITY => max,
        _ => panic!(
            "bit_list parameter '{}' declares maximum bit index {} above capacity {}",
            name, max, MAX_BIT_LIST_CAPACITY
        ),
    }
}

pub(crate) fn valid_bit_list(value: &mut Value, range: Option<&str>, name: &str) -> bool {
    let Some(text) = value.as_text() else {
        return false;
    };

    let max = bit_list_max(name, range);

    if value.canonical_kind() == Some(ParamKind::BitList) {
        return is_bitmap(text, max);
    }

    let bitmap = if text == ANY_BITS {
        "1".repeat(max + 1)
    } else {
        match build_bitmap(text, max) {
            Some(bitmap) => bitmap,
            None => return false,
        }
    };

    value.set_text(bitmap);
    value.mark_canonical(ParamKind::BitList);
    true
}

fn build_bitmap(text: &str, max: usize) -> Option<String> {
    let mut bits = vec![b'0'; max + 1];
    let mut rest = text;

    while let Some((bit, consumed)) = scan_int(rest) {
        let index = usize::try_from(bit).ok().filter(|&i| i <= max)?;
        bits[index] = b'1';
        rest = &rest[consumed..];
    }

    // only whitespace may follow the last index
    if !rest.bytes().all(is_c_space) {
        return None;
    }

    String::from_utf8(bits).ok()
}

fn is_bitmap(text: &str, max: usize) -> bool {
    text.len() == max + 1 && text.bytes().all(|b| b == b'0' || b == b'1')
}
