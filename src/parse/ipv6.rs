// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IPv6 validation: colon groups with one `::` compression, the embedded
//! IPv4 tail, zones, prefix and mask suffixes, 32-digit single-segment
//! values and the RFC 1924 base-85 form.

use super::{
    build_ip, explode_range, parse_part, parse_prefix, ParseParams, PartVal, TokenRules,
};
use crate::{
    address::Address,
    err::AddressError,
    fmt::decode_base85,
    strings::*,
    types::{AddrFamily, PrefixLen, SegInt, IPV6_BITS, IPV6_SEG_COUNT},
};

pub(crate) fn parse(
    body: &str,
    suffix: Option<&str>,
    params: &ParseParams,
) -> Result<Address, AddressError> {
    let (segs, zone): (Vec<(SegInt, SegInt)>, String) = parse_zoned_body(body, params)?;
    match suffix {
        None => build_ip(&segs, AddrFamily::V6, None, zone),
        Some(s) if s.bytes().all(|b| b.is_ascii_digit()) && !s.is_empty() => {
            if !params.allow_prefix {
                return Err(AddressError::parse(KEY_PREFIX_NOT_ALLOWED));
            }
            let p = parse_prefix(s, IPV6_BITS)?;
            build_ip(&segs, AddrFamily::V6, Some(p), zone)
        }
        Some(mask_str) => {
            if !params.allow_mask {
                return Err(AddressError::parse(KEY_MASK_NOT_ALLOWED));
            }
            let (mask_segs, mask_zone) = parse_zoned_body(mask_str, params)?;
            if !mask_zone.is_empty() {
                return Err(AddressError::parse(KEY_INVALID_MASK));
            }
            let mask: Address = build_ip(&mask_segs, AddrFamily::V6, None, String::new())?;
            if mask.is_multiple() {
                return Err(AddressError::parse(KEY_INVALID_MASK));
            }
            let addr: Address = build_ip(&segs, AddrFamily::V6, None, zone)?;
            super::ipv4::apply_mask(&addr, &mask)
        }
    }
}

/// Cut the zone and tokenize the address part. `%` is the zone separator
/// unless the SQL-wildcard reading is the only one that parses.
fn parse_zoned_body(
    body: &str,
    params: &ParseParams,
) -> Result<(Vec<(SegInt, SegInt)>, String), AddressError> {
    if let Some(i) = body.find(ALT_ZONE_SEP) {
        if !params.allow_zone {
            return Err(AddressError::parse(KEY_ZONE_NOT_ALLOWED));
        }
        let zone: &str = &body[i + ALT_ZONE_SEP.len_utf8()..];
        return Ok((parse_core(&body[..i], params)?, zone.to_string()));
    }
    match body.find(ZONE_SEP) {
        None => Ok((parse_core(body, params)?, String::new())),
        Some(i) => {
            if params.allow_zone {
                match parse_core(&body[..i], params) {
                    Ok(segs) => Ok((segs, body[i + 1..].to_string())),
                    // with SQL wildcards on, '%' may instead belong to a
                    // segment pattern; the zone reading wins when both parse
                    Err(e) => {
                        if params.allow_sql_wildcards {
                            Ok((parse_core(body, params)?, String::new()))
                        } else {
                            Err(e)
                        }
                    }
                }
            } else if params.allow_sql_wildcards {
                Ok((parse_core(body, params)?, String::new()))
            } else {
                Err(AddressError::parse(KEY_ZONE_NOT_ALLOWED))
            }
        }
    }
}

/// Tokenize the colon-grouped address part into 8 segment bounds.
fn parse_core(s: &str, params: &ParseParams) -> Result<Vec<(SegInt, SegInt)>, AddressError> {
    let rules: TokenRules = TokenRules::ipv6(params);

    let (left, right): (&str, Option<&str>) = match s.find("::") {
        None => (s, None),
        Some(i) => {
            let right: &str = &s[i + 2..];
            if right.contains("::") {
                return Err(AddressError::parse_at(KEY_DOUBLE_COMPRESSION, i + 2));
            }
            (&s[..i], Some(right))
        }
    };

    let compressed: bool = right.is_some();
    let mut left_parts: Vec<&str> = split_groups(left);
    let mut right_parts: Vec<&str> = match right {
        None => Vec::new(),
        Some(r) => split_groups(r),
    };

    // the embedded IPv4 tail must be the final group of the address; a
    // tail on the left of a '::' would put zeros after it
    let mut tail: Vec<(SegInt, SegInt)> = Vec::new();
    let tail_host: &mut Vec<&str> = if compressed {
        &mut right_parts
    } else {
        &mut left_parts
    };
    if let Some(last) = tail_host.last().copied() {
        if last.contains(IPV4_SEP) {
            if !params.allow_ipv4_in_ipv6 {
                return Err(AddressError::parse(KEY_IPV4_IN_IPV6_NOT_ALLOWED));
            }
            tail_host.pop();
            tail = parse_ipv4_tail(last, params)?;
        }
    }
    if left_parts.iter().chain(right_parts.iter()).any(|p| p.contains(IPV4_SEP)) {
        return Err(AddressError::parse(KEY_INVALID_MIXED));
    }

    let parse_group = |part: &&str| -> Result<(SegInt, SegInt), AddressError> {
        if part.is_empty() {
            return Err(AddressError::parse(KEY_NULL_SEGMENT));
        }
        let val: PartVal = parse_part(part, 0xffff, 4, &rules)?;
        let (lo, up) = val.bounds(0xffff);
        Ok((lo as SegInt, up as SegInt))
    };
    let head: Vec<(SegInt, SegInt)> = left_parts.iter().map(parse_group).collect::<Result<_, _>>()?;
    let after: Vec<(SegInt, SegInt)> = right_parts.iter().map(parse_group).collect::<Result<_, _>>()?;

    let explicit: usize = head.len() + after.len() + tail.len();
    if compressed {
        if explicit >= IPV6_SEG_COUNT {
            return Err(AddressError::parse(KEY_TOO_MANY_SEGMENTS));
        }
        let missing: usize = IPV6_SEG_COUNT - explicit;
        let mut expanded: Vec<(SegInt, SegInt)> = Vec::with_capacity(IPV6_SEG_COUNT);
        expanded.extend(head);
        expanded.extend(std::iter::repeat((0, 0)).take(missing));
        expanded.extend(after);
        expanded.extend(tail);
        Ok(expanded)
    } else {
        if explicit < IPV6_SEG_COUNT {
            return Err(AddressError::parse(KEY_TOO_FEW_SEGMENTS));
        }
        if explicit > IPV6_SEG_COUNT {
            return Err(AddressError::parse(KEY_TOO_MANY_SEGMENTS));
        }
        let mut out: Vec<(SegInt, SegInt)> = head;
        out.extend(after);
        out.extend(tail);
        Ok(out)
    }
}

fn split_groups(s: &str) -> Vec<&str> {
    if s.is_empty() {
        Vec::new()
    } else {
        s.split(IPV6_SEP).collect()
    }
}

/// `a.b.c.d` in the last group becomes the final two hextets.
fn parse_ipv4_tail(
    s: &str,
    params: &ParseParams,
) -> Result<Vec<(SegInt, SegInt)>, AddressError> {
    let rules: TokenRules = TokenRules::ipv4(params);
    let parts: Vec<&str> = s.split(IPV4_SEP).collect();
    if parts.len() != 4 {
        return Err(AddressError::parse(KEY_INVALID_MIXED));
    }
    let mut bytes: Vec<(u32, u32)> = Vec::with_capacity(4);
    for part in parts {
        let val: PartVal = parse_part(part, 0xff, 3, &rules)?;
        let (lo, up) = val.bounds(0xff);
        bytes.push((lo as u32, up as u32));
    }
    let mut out: Vec<(SegInt, SegInt)> = Vec::with_capacity(2);
    for pair in bytes.chunks(2) {
        let (hi, lo) = (pair[0], pair[1]);
        // a clean 16-bit range needs a single high byte or a full low byte
        if hi.0 != hi.1 && !(lo.0 == 0 && lo.1 == 0xff) {
            return Err(AddressError::parse(KEY_INVALID_MIXED));
        }
        out.push((
            ((hi.0 << 8) | lo.0) as SegInt,
            ((hi.1 << 8) | lo.1) as SegInt,
        ));
    }
    Ok(out)
}

/// A separator-free 32-hex-digit (or 128-bit binary) value, single or
/// ranged. `Ok(None)` when the shape does not match.
pub(crate) fn parse_single_segment(
    body: &str,
    params: &ParseParams,
) -> Result<Option<(u128, u128)>, AddressError> {
    let side = |s: &str| -> Option<u128> {
        if s.len() == 32 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            u128::from_str_radix(s, 16).ok()
        } else if params.allow_binary
            && s.len() == 130
            && s.starts_with("0b")
            && s[2..].bytes().all(|b| b == b'0' || b == b'1')
        {
            u128::from_str_radix(&s[2..], 2).ok()
        } else {
            None
        }
    };
    let range_sep: Option<usize> = body
        .find(ALT_RANGE_SEP)
        .or_else(|| body.find(RANGE_SEP));
    match range_sep {
        None => Ok(side(body).map(|v| (v, v))),
        Some(i) => {
            let sep_len: usize = body[i..].chars().next().map_or(1, |c| c.len_utf8());
            let (l, u) = match (side(&body[..i]), side(&body[i + sep_len..])) {
                (Some(l), Some(u)) => (l, u),
                _ => return Ok(None),
            };
            if l > u {
                return Err(AddressError::parse(KEY_INVALID_RANGE));
            }
            Ok(Some((l, u)))
        }
    }
}

/// A 20-digit RFC 1924 string, optionally `»`-ranged and `§`-zoned.
/// `Ok(None)` when the shape does not match.
pub(crate) fn parse_base85(
    body: &str,
    prefix: PrefixLen,
) -> Result<Option<Address>, AddressError> {
    let (addr_part, zone): (&str, String) = match body.find(ALT_ZONE_SEP) {
        None => (body, String::new()),
        Some(i) => (
            &body[..i],
            body[i + ALT_ZONE_SEP.len_utf8()..].to_string(),
        ),
    };
    let (lower, upper): (u128, u128) = match addr_part.find(ALT_RANGE_SEP) {
        None => match decode_base85(addr_part) {
            None => return Ok(None),
            Some(v) => (v, v),
        },
        Some(i) => {
            let l: &str = &addr_part[..i];
            let u: &str = &addr_part[i + ALT_RANGE_SEP.len_utf8()..];
            match (decode_base85(l), decode_base85(u)) {
                (Some(l), Some(u)) => {
                    if l > u {
                        return Err(AddressError::parse(KEY_INVALID_RANGE));
                    }
                    (l, u)
                }
                _ => return Ok(None),
            }
        }
    };
    let segs: Vec<(SegInt, SegInt)> = explode_range(lower, upper, IPV6_SEG_COUNT, 16)?;
    Some(build_ip(&segs, AddrFamily::V6, prefix, zone)).transpose()
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::AddrStr;

    fn addr(s: &str) -> Address {
        AddrStr::new(s).get_address().unwrap()
    }

    fn is_err(s: &str) -> bool {
        AddrStr::new(s).get_address().is_err()
    }

    #[test]
    fn test_full_form() {
        let a = addr("1:2:3:4:5:6:7:8");
        assert_eq!(a.segment_count(), 8);
        assert_eq!(a.get_segment(0).lower(), 1);
        assert_eq!(a.get_segment(7).lower(), 8);
        assert!(is_err("1:2:3:4:5:6:7"));
        assert!(is_err("1:2:3:4:5:6:7:8:9"));
    }

    #[test]
    fn test_compression() {
        assert_eq!(addr("::").get_value(), 0);
        assert_eq!(addr("::1").get_value(), 1);
        assert_eq!(addr("1::").get_value(), 1u128 << 112);
        assert_eq!(addr("1::1").get_value(), (1u128 << 112) | 1);
        assert_eq!(addr("1:2::7:8").get_segment(6).lower(), 7);
        assert!(is_err("1::2::3"));
        // '::' must stand for at least one zero segment
        assert!(is_err("1:2:3:4:5:6:7:8::"));
        assert!(is_err("1::2:3:4:5:6:7:8"));
    }

    #[test]
    fn test_mixed_tail() {
        let a = addr("1:2:3:4:5:6:1.2.3.4");
        assert_eq!(a.get_segment(6).lower(), 0x0102);
        assert_eq!(a.get_segment(7).lower(), 0x0304);
        assert_eq!(a.to_canonical_string(), "1:2:3:4:5:6:102:304");
        let b = addr("::ffff:10.0.0.1");
        assert!(b.is_ipv4_mapped());
        assert!(is_err("1:2:3:4:5:6:7:1.2.3.4"));
        assert!(is_err("1:2:3:4:5:6:1.2.3"));
    }

    #[test]
    fn test_zone() {
        let a = addr("::1%eth0");
        assert_eq!(a.zone(), "eth0");
        assert_eq!(a.to_canonical_string(), "::1%eth0");
        // empty zone accepted
        let b = addr("::1%");
        assert_eq!(b.zone(), "");
        // zone stops at the prefix
        let c = addr("fe80::%eth0/64");
        assert_eq!(c.zone(), "eth0");
        assert_eq!(c.prefix_len(), Some(64));
        // zone participates in equality
        assert_ne!(addr("::1%eth0"), addr("::1"));
    }

    #[test]
    fn test_ranges_and_wildcards() {
        let a = addr("1-2:*::8");
        assert_eq!(a.get_segment(0).upper(), 2);
        assert!(a.get_segment(1).is_full_range());
        assert_eq!(a.get_segment(7).lower(), 8);
        let full = addr("*:*:*:*:*:*:*:*");
        assert!(full.section().is_full_range());
    }

    #[test]
    fn test_prefix_and_mask() {
        let a = addr("1:2::/32");
        assert_eq!(a.prefix_len(), Some(32));
        let b = addr("1:2::8/ffff:ffff::");
        assert_eq!(b.prefix_len(), Some(32));
        assert_eq!(b.get_value(), (0x0001_0002u128) << 96 | 8);
        assert!(is_err("1:2::/129"));
    }

    #[test]
    fn test_single_segment_32_digits() {
        let a = addr("000102030405060708090a0b0c0d0e0f");
        assert_eq!(a.family(), AddrFamily::V6);
        assert_eq!(a.get_value(), 0x000102030405060708090a0b0c0d0e0f);
    }

    #[test]
    fn test_base85_parse() {
        let a = addr("4)+k&C#VzJ4br>0wv%Yp");
        assert_eq!(a.get_value(), 0x1080_0000_0000_0000_0008_0800_200c_417a);
        // round-trips through the base-85 renderer
        assert_eq!(
            a.to_base85_string().unwrap(),
            "4)+k&C#VzJ4br>0wv%Yp"
        );
    }

    #[test]
    fn test_binary_segment() {
        let a = addr("0b1111111111111111:2:3:4:5:6:7:8");
        assert_eq!(a.get_segment(0).lower(), 0xffff);
    }
}
