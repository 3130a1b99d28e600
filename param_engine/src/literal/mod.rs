//! Numeric literal parsing for range specifications
//!
//! Integers follow C `strtoll(.., 0)` prefix rules: optional whitespace and
//! sign, `0x` hexadecimal, leading `0` octal, otherwise decimal, saturating on
//! overflow. Reals follow `strtod` and unsigned values follow `strtoul`. The
//! real and unsigned scanners only look at the longest valid prefix.

pub mod error;

pub use error::{LiteralError, LiteralResult};

/// Largest signed 31-bit value
pub const MAX31: i64 = 2_147_483_647;
/// Largest unsigned 32-bit value
pub const MAX32: i64 = 4_294_967_295;
/// Largest integer exactly representable in an f64
pub const MAX53: i64 = 9_007_199_254_740_992;

/// C `isspace` in the "C" locale
pub(crate) fn is_c_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

// ============================================================================
// INTEGER PREFIX SCANNING
// ============================================================================

/// Digits scanned from the front of a literal
#[derive(Debug, Clone, Copy)]
struct IntegerPrefix {
    negative: bool,
    magnitude: u64,
    overflow: bool,
    /// Byte offset just past the last digit
    end: usize,
}

impl IntegerPrefix {
    fn to_i64(self) -> i64 {
        if self.negative {
            if self.overflow || self.magnitude > i64::MAX as u64 + 1 {
                i64::MIN
            } else {
                (self.magnitude as i64).wrapping_neg()
            }
        } else if self.overflow || self.magnitude > i64::MAX as u64 {
            i64::MAX
        } else {
            self.magnitude as i64
        }
    }

    fn to_u64(self) -> u64 {
        if self.overflow {
            u64::MAX
        } else if self.negative {
            self.magnitude.wrapping_neg()
        } else {
            self.magnitude
        }
    }
}

/// Scan a base-prefixed integer, returning None when no digits were found
fn scan_prefix(text: &str) -> Option<IntegerPrefix> {
    let bytes = text.as_bytes();
    let mut pos = bytes.iter().take_while(|b| is_c_space(**b)).count();

    let negative = bytes.get(pos) == Some(&b'-');
    if matches!(bytes.get(pos), Some(b'+' | b'-')) {
        pos += 1;
    }

    let hex_prefix = bytes.get(pos) == Some(&b'0')
        && matches!(bytes.get(pos + 1), Some(b'x' | b'X'))
        && bytes.get(pos + 2).is_some_and(|b| b.is_ascii_hexdigit());

    let (radix, start) = if hex_prefix {
        (16, pos + 2)
    } else if bytes.get(pos) == Some(&b'0') {
        (8, pos)
    } else {
        (10, pos)
    };

    let mut magnitude: u64 = 0;
    let mut overflow = false;
    let mut end = start;

    while let Some(digit) = bytes.get(end).and_then(|b| (*b as char).to_digit(radix)) {
        match magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(digit)))
        {
            Some(next) => magnitude = next,
            None => overflow = true,
        }
        end += 1;
    }

    (end > start).then_some(IntegerPrefix {
        negative,
        magnitude,
        overflow,
        end,
    })
}

fn sentinel(text: &str) -> Option<i64> {
    let text = if text.starts_with("maxSZ") {
        if std::mem::size_of::<usize>() == 4 {
            "max32"
        } else {
            "max53"
        }
    } else {
        text
    };

    if text.starts_with("max31") {
        Some(MAX31)
    } else if text.starts_with("max32") {
        Some(MAX32)
    } else if text.starts_with("max53") {
        Some(MAX53)
    } else {
        None
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parse a range bound as a signed integer
///
/// Recognises the `max31`, `max32`, `max53` and `maxSZ` sentinels. The
/// numeral must be followed by end of text or `:`. Text without any digits
/// reads as 0, matching `strtoll`.
pub fn try_parse_int(text: &str) -> LiteralResult<i64> {
    if let Some(value) = sentinel(text) {
        return Ok(value);
    }

    let (value, end) = match scan_prefix(text) {
        Some(prefix) => (prefix.to_i64(), prefix.end),
        None => (0, 0),
    };

    match text.as_bytes().get(end) {
        None | Some(b':') => Ok(value),
        Some(_) => Err(LiteralError::trailing_characters(text, end)),
    }
}

/// Parse a range bound as a signed integer
///
/// # Panics
///
/// Panics when the numeral is followed by anything other than end of text
/// or `:`. Range text is authored alongside the descriptor, so a malformed
/// bound is a programming error rather than bad input.
pub fn parse_int(text: &str) -> i64 {
    match try_parse_int(text) {
        Ok(value) => value,
        Err(err) => panic!("malformed integer bound: {}", err),
    }
}

/// `strtoul(.., 0)` over the longest valid prefix; a leading minus wraps
pub fn parse_unsigned(text: &str) -> u64 {
    scan_prefix(text).map(IntegerPrefix::to_u64).unwrap_or(0)
}

/// Scan one base-prefixed integer after optional whitespace
///
/// Returns the value and the number of bytes consumed, or None when no
/// digits follow.
pub fn scan_int(text: &str) -> Option<(i64, usize)> {
    scan_prefix(text).map(|prefix| (prefix.to_i64(), prefix.end))
}

/// Like [`scan_int`] but reports the missing numeral as an error
pub fn require_int(text: &str) -> LiteralResult<(i64, usize)> {
    scan_int(text).ok_or_else(|| LiteralError::missing_digits(text))
}

/// `strtod` over the longest valid prefix; no digits reads as 0
pub fn parse_real(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let mut pos = bytes.iter().take_while(|b| is_c_space(**b)).count();

    let negative = bytes.get(pos) == Some(&b'-');
    if matches!(bytes.get(pos), Some(b'+' | b'-')) {
        pos += 1;
    }

    let magnitude = scan_special(&text[pos..])
        .or_else(|| scan_hex_real(&bytes[pos..]))
        .or_else(|| scan_decimal_real(&bytes[pos..]))
        .unwrap_or(0.0);

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn scan_special(text: &str) -> Option<f64> {
    let lower = text.get(..3)?.to_ascii_lowercase();
    match lower.as_str() {
        "inf" => Some(f64::INFINITY),
        "nan" => Some(f64::NAN),
        _ => None,
    }
}

fn scan_hex_real(bytes: &[u8]) -> Option<f64> {
    if bytes.len() < 3 || bytes[0] != b'0' || !matches!(bytes[1], b'x' | b'X') {
        return None;
    }

    let mut pos = 2;
    let mut mantissa = 0.0f64;
    let mut exponent: i32 = 0;
    let mut digits = 0;

    while let Some(d) = bytes.get(pos).and_then(|b| (*b as char).to_digit(16)) {
        mantissa = mantissa * 16.0 + f64::from(d);
        digits += 1;
        pos += 1;
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        while let Some(d) = bytes.get(pos).and_then(|b| (*b as char).to_digit(16)) {
            mantissa = mantissa * 16.0 + f64::from(d);
            exponent -= 4;
            digits += 1;
            pos += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'p' | b'P')) {
        if let Some((value, _)) = scan_exponent(&bytes[pos + 1..]) {
            exponent = exponent.saturating_add(value);
        }
    }

    Some(mantissa * 2f64.powi(exponent))
}

fn scan_decimal_real(bytes: &[u8]) -> Option<f64> {
    let integer: Vec<u8> = bytes.iter().copied().take_while(u8::is_ascii_digit).collect();
    let mut pos = integer.len();

    let mut fraction = Vec::new();
    if bytes.get(pos) == Some(&b'.') {
        fraction = bytes[pos + 1..]
            .iter()
            .copied()
            .take_while(u8::is_ascii_digit)
            .collect();
        pos += 1 + fraction.len();
    }

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut exponent = 0;
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        if let Some((value, _)) = scan_exponent(&bytes[pos + 1..]) {
            exponent = value;
        }
    }

    let normalized = format!(
        "{}.{}e{}",
        if integer.is_empty() { "0" } else { std::str::from_utf8(&integer).ok()? },
        if fraction.is_empty() { "0" } else { std::str::from_utf8(&fraction).ok()? },
        exponent
    );
    normalized.parse().ok()
}

/// Signed decimal exponent; None when no digits follow the optional sign
fn scan_exponent(bytes: &[u8]) -> Option<(i32, usize)> {
    let mut pos = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let start = pos;
    let mut value: i32 = 0;
    while let Some(d) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
        value = value.saturating_mul(10).saturating_add(i32::from(d - b'0'));
        pos += 1;
    }

    (pos > start).then_some((if negative { -value } else { value }, pos))
}
