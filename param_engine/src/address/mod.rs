//! Textual address parsing
//!
//! Accepts link-layer (`98:01:a7:9d:d8:41`), dotted IPv4 and IPv6 notation,
//! each with an optional `/bits` prefix. Names are never resolved. The
//! classic `inet_addr` parser used by the ip4 kind lives here as well.

pub mod error;

pub use error::{AddressError, AddressResult};

use crate::literal::is_c_space;
use crate::value::AddressBytes;
use std::net::{Ipv4Addr, Ipv6Addr};

/// An address with its optional CIDR prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedAddress {
    pub address: AddressBytes,
    pub prefix: Option<u32>,
}

impl ParsedAddress {
    /// Prefix length, defaulting to the full address width
    pub fn bits(&self) -> u32 {
        self.prefix.unwrap_or_else(|| self.address.bit_width())
    }

    pub fn is_link_layer(&self) -> bool {
        matches!(self.address, AddressBytes::Mac(_))
    }

    pub fn is_ip(&self) -> bool {
        !self.is_link_layer()
    }
}

/// Parse a MAC, IPv4 or IPv6 address with an optional `/bits` suffix
pub fn parse_address(text: &str) -> AddressResult<ParsedAddress> {
    if text.is_empty() {
        return Err(AddressError::Empty);
    }

    let (host, prefix) = match text.split_once('/') {
        Some((host, bits)) => (host, Some(parse_prefix(bits)?)),
        None => (text, None),
    };

    let address = parse_mac(host)
        .map(AddressBytes::Mac)
        .or_else(|| parse_dotted_quad(host).map(AddressBytes::Ip4))
        .or_else(|| {
            host.parse::<Ipv6Addr>()
                .ok()
                .map(|ip| AddressBytes::Ip6(ip.octets()))
        })
        .ok_or_else(|| AddressError::malformed(text))?;

    let parsed = ParsedAddress { address, prefix };
    if let Some(bits) = prefix {
        let width = address.bit_width();
        if bits > width {
            return Err(AddressError::PrefixOutOfRange { bits, width });
        }
    }

    Ok(parsed)
}

fn parse_prefix(bits: &str) -> AddressResult<u32> {
    if bits.is_empty() || !bits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::invalid_prefix(bits));
    }
    bits.parse().map_err(|_| AddressError::invalid_prefix(bits))
}

/// Six colon-separated groups of hex digits, each at most 0xff
fn parse_mac(text: &str) -> Option<[u8; 6]> {
    let mut bytes = [0u8; 6];
    let mut groups = text.split(':');

    for slot in bytes.iter_mut() {
        let group = groups.next()?;
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(group, 16).ok()?;
        *slot = u8::try_from(value).ok()?;
    }

    groups.next().is_none().then_some(bytes)
}

/// Exactly four decimal groups, each at most 255
fn parse_dotted_quad(text: &str) -> Option<[u8; 4]> {
    let mut bytes = [0u8; 4];
    let mut groups = text.split('.');

    for slot in bytes.iter_mut() {
        let group = groups.next()?;
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = group.parse().ok()?;
    }

    groups.next().is_none().then_some(bytes)
}

// ============================================================================
// CLASSIC IPv4 NOTATION
// ============================================================================

/// Parse IPv4 text the way `inet_aton` does
///
/// Accepts one to four parts, each decimal, `0x` hex or leading-`0` octal.
/// With fewer than four parts the last one fills the remaining low-order
/// bytes (`a.b` is 8.24 bits, `a.b.c` is 8.8.16). Anything after trailing
/// whitespace is ignored.
pub fn inet_aton(text: &str) -> Option<Ipv4Addr> {
    let bytes = text.as_bytes();
    let mut parts: Vec<u64> = Vec::with_capacity(4);
    let mut pos = 0;

    loop {
        if !bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            return None;
        }

        let (value, end) = scan_part(bytes, pos)?;
        pos = end;

        if bytes.get(pos) == Some(&b'.') {
            if parts.len() >= 3 || value > 0xff {
                return None;
            }
            parts.push(value);
            pos += 1;
        } else {
            parts.push(value);
            break;
        }
    }

    if let Some(&c) = bytes.get(pos) {
        if !is_c_space(c) {
            return None;
        }
    }

    let last = *parts.last()?;
    let head = &parts[..parts.len() - 1];
    let limit: u64 = match head.len() {
        0 => 0xffff_ffff,
        1 => 0x00ff_ffff,
        2 => 0x0000_ffff,
        _ => 0x0000_00ff,
    };
    if last > limit {
        return None;
    }

    let packed = head
        .iter()
        .enumerate()
        .fold(last, |acc, (i, part)| acc | (part << (24 - 8 * i)));

    u32::try_from(packed).ok().map(Ipv4Addr::from)
}

/// One numeric part with C base prefixes; None on a bad digit or overflow
fn scan_part(bytes: &[u8], start: usize) -> Option<(u64, usize)> {
    let mut pos = start;
    let radix = if bytes[pos] == b'0' {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'x' | b'X')) {
            pos += 1;
            16
        } else {
            8
        }
    } else {
        10
    };

    let mut value: u64 = 0;
    while let Some(&b) = bytes.get(pos) {
        let digit = match (b as char).to_digit(16) {
            Some(d) if radix == 16 => d,
            Some(d) if b.is_ascii_digit() => {
                if d >= radix {
                    return None;
                }
                d
            }
            _ => break,
        };
        value = value * u64::from(radix) + u64::from(digit);
        if value > 0xffff_ffff {
            return None;
        }
        pos += 1;
    }

    Some((value, pos))
}

/// `inet_addr`: the address in network byte order read as a native `u32`
///
/// Returns None on malformed text and for `255.255.255.255`, which the
/// classic interface cannot tell apart from its error value.
pub fn inet_addr(text: &str) -> Option<u32> {
    let raw = u32::from_ne_bytes(inet_aton(text)?.octets());
    (raw != u32::MAX).then_some(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_mac_addresses() {
        let parsed = parse_address("98:01:a7:9d:d8:41").unwrap();
        assert_eq!(
            parsed.address,
            AddressBytes::Mac([0x98, 0x01, 0xa7, 0x9d, 0xd8, 0x41])
        );
        assert!(parsed.is_link_layer());
        assert_eq!(parsed.bits(), 48);

        for bad in [
            ":01:a7:9d:d8:41",
            "01:a7:9d:d8:41",
            "98:01:a7:9d:d8:419",
            "98:01:a7:9d:d8:41x",
            "98:01:a7:9d:d8:41:00",
        ] {
            assert!(parse_address(bad).is_err(), "{} should fail", bad);
        }
    }

    #[test]
    fn test_ipv4_addresses() {
        let parsed = parse_address("1.2.3.4").unwrap();
        assert_eq!(parsed.address, AddressBytes::Ip4([1, 2, 3, 4]));
        assert_eq!(parsed.bits(), 32);

        assert_eq!(parse_address("1.2.3.4/0").unwrap().bits(), 0);
        assert_eq!(parse_address("010.0.0.1").unwrap().address, AddressBytes::Ip4([10, 0, 0, 1]));

        assert_matches!(
            parse_address("1.2.3.4/33"),
            Err(AddressError::PrefixOutOfRange { bits: 33, width: 32 })
        );
        assert!(parse_address("1.2.0x.4/33").is_err());
        assert!(parse_address("1.2.3").is_err());
        assert!(parse_address("256.1.1.1").is_err());
    }

    #[test]
    fn test_ipv6_addresses() {
        let parsed = parse_address("2001:420:c0c4:1004::157/128").unwrap();
        assert_matches!(parsed.address, AddressBytes::Ip6(_));
        assert_eq!(parsed.bits(), 128);

        assert!(parse_address("2001:420:c0c4:1004::157/0").is_ok());
        assert!(parse_address("2001:420:c0c4:1004:0x:157/256").is_err());
        assert_matches!(
            parse_address("::1/129"),
            Err(AddressError::PrefixOutOfRange { width: 128, .. })
        );
    }

    #[test]
    fn test_prefix_syntax() {
        assert_matches!(parse_address("1.2.3.4/"), Err(AddressError::InvalidPrefix { .. }));
        assert_matches!(parse_address("1.2.3.4/-1"), Err(AddressError::InvalidPrefix { .. }));
        assert_matches!(parse_address("1.2.3.4/8x"), Err(AddressError::InvalidPrefix { .. }));
        assert_matches!(parse_address(""), Err(AddressError::Empty));
    }

    #[test]
    fn test_names_are_not_resolved() {
        assert_matches!(parse_address("localhost"), Err(AddressError::Malformed { .. }));
    }

    #[test]
    fn test_inet_aton_forms() {
        assert_eq!(inet_aton("1.2.3.4"), Some(Ipv4Addr::new(1, 2, 3, 4)));
        assert_eq!(inet_aton("1.2.3"), Some(Ipv4Addr::new(1, 2, 0, 3)));
        assert_eq!(inet_aton("1.2"), Some(Ipv4Addr::new(1, 0, 0, 2)));
        assert_eq!(inet_aton("16909060"), Some(Ipv4Addr::new(1, 2, 3, 4)));
        assert_eq!(inet_aton("0x7f.1"), Some(Ipv4Addr::new(127, 0, 0, 1)));
        assert_eq!(inet_aton("010.0.0.1"), Some(Ipv4Addr::new(8, 0, 0, 1)));
        assert_eq!(inet_aton("1.2.3.4 trailing"), Some(Ipv4Addr::new(1, 2, 3, 4)));
    }

    #[test]
    fn test_inet_aton_rejects() {
        for bad in ["1.2.3.", "1.2.x", "", " 1.2.3.4", "1.2.3.4.5", "256.1.1.1", "1.2.3.256", "08", "1.2.3.4x"] {
            assert_eq!(inet_aton(bad), None, "{:?} should fail", bad);
        }
    }

    #[test]
    fn test_inet_addr_is_network_order() {
        let raw = inet_addr("1.2.3.4").unwrap();
        assert_eq!(raw.to_ne_bytes(), [1, 2, 3, 4]);
        assert_eq!(inet_addr("255.255.255.255"), None);
        assert_eq!(inet_addr("0.0.0.0"), Some(0));
    }
}
