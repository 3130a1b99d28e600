//! String and token-set validators

use crate::lexical::{find_token, index_of, tokenize};
use crate::literal::parse_unsigned;
use crate::value::{Value, MASK_BITS};

/// String range that accepts any text, empty included
pub const OPTIONAL_STRING: &str = "(optional)";

pub(crate) fn valid_string(value: &Value, range: Option<&str>) -> bool {
    let Some(text) = value.as_text() else {
        return false;
    };

    match range {
        Some(OPTIONAL_STRING) => true,
        Some(max) => text.len() as u64 <= parse_unsigned(max),
        None => !text.is_empty(),
    }
}

pub(crate) fn valid_select(value: &Value, range: Option<&str>) -> bool {
    match (value.as_text(), range) {
        (Some(text), Some(range)) => find_token(range, text).is_some(),
        _ => false,
    }
}

pub(crate) fn valid_enum(value: &mut Value, range: Option<&str>) -> bool {
    let (Some(text), Some(range)) = (value.as_text(), range) else {
        return false;
    };

    let Some(position) = find_token(range, text) else {
        return false;
    };

    value.set_enum(index_of(range, position));
    true
}

/// Every whitespace-separated word must be a listed token
///
/// The mask holds one bit per token ordinal. Ordinals past the mask width
/// are accepted but leave no trace in the mask.
pub(crate) fn valid_multi(value: &mut Value, range: Option<&str>) -> bool {
    let (Some(text), Some(range)) = (value.as_text(), range) else {
        return false;
    };

    let mut mask: u64 = 0;
    for word in tokenize(text) {
        let Some(position) = find_token(range, word) else {
            return false;
        };

        let ordinal = index_of(range, position);
        if ordinal < MASK_BITS {
            mask |= 1 << ordinal;
        }
    }

    value.set_aux(mask);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: &str = "red | green | yellow";

    #[test]
    fn test_string_ranges() {
        let green = Value::text("green");
        assert!(valid_string(&green, Some("(optional)")));
        assert!(valid_string(&green, None));
        assert!(valid_string(&green, Some("5")));
        assert!(valid_string(&green, Some("6")));
        assert!(!valid_string(&green, Some("4")));
    }

    #[test]
    fn test_empty_string() {
        let empty = Value::text("");
        assert!(!valid_string(&empty, None));
        assert!(valid_string(&empty, Some("(optional)")));
        assert!(valid_string(&empty, Some("0")));
        assert!(!valid_string(&Value::text("x"), Some("0")));
    }

    #[test]
    fn test_string_requires_text() {
        assert!(!valid_string(&Value::number(1.0), Some("(optional)")));
    }

    #[test]
    fn test_select() {
        assert!(valid_select(&Value::text("green"), Some(COLORS)));
        assert!(!valid_select(&Value::text("blue"), Some(COLORS)));
        assert!(!valid_select(&Value::text("green"), None));
        assert!(!valid_select(&Value::text(""), Some(COLORS)));
        assert!(!valid_select(&Value::number(1.0), Some(COLORS)));
    }

    #[test]
    fn test_enum_sets_ordinal() {
        let mut v = Value::text("yellow");
        assert!(valid_enum(&mut v, Some(COLORS)));
        assert_eq!(v.enum_index(), Some(2));

        let mut v = Value::text("red");
        assert!(valid_enum(&mut v, Some(COLORS)));
        assert_eq!(v.enum_index(), Some(0));

        let mut v = Value::text("blue");
        assert!(!valid_enum(&mut v, Some(COLORS)));
        assert_eq!(v.enum_index(), None);
    }

    #[test]
    fn test_multi_mask() {
        let mut v = Value::text("green");
        assert!(valid_multi(&mut v, Some(COLORS)));
        assert_eq!(v.aux(), 0b010);

        let mut v = Value::text("red yellow");
        assert!(valid_multi(&mut v, Some(COLORS)));
        assert_eq!(v.aux(), 0b101);

        let mut v = Value::text("redgreen");
        assert!(!valid_multi(&mut v, Some(COLORS)));

        let mut v = Value::text("blue");
        assert!(!valid_multi(&mut v, None));
    }

    #[test]
    fn test_multi_empty_text_is_empty_mask() {
        let mut v = Value::text("  ");
        v.set_aux(7);
        assert!(valid_multi(&mut v, Some(COLORS)));
        assert_eq!(v.aux(), 0);
    }

    #[test]
    fn test_multi_drops_ordinals_past_mask() {
        let range: String = (0..70).map(|i| format!("t{}", i)).collect::<Vec<_>>().join(" | ");

        let mut v = Value::text("t0 t63 t64 t69");
        assert!(valid_multi(&mut v, Some(&range)));
        assert_eq!(v.aux(), 1 | (1 << 63));
    }

    #[test]
    fn test_multi_accepts_long_word_lists() {
        let text = vec!["red"; 5000].join(" ");
        let mut v = Value::text(text);
        assert!(valid_multi(&mut v, Some(COLORS)));
        assert_eq!(v.aux(), 0b001);
    }
}
