// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IPv4 validation: dotted decimal, the 1- to 4-part inet_aton forms
//! with octal/hex/binary parts, wildcards and ranges, plus prefix and
//! mask suffixes.

use super::{
    build_ip, explode_range, parse_part, parse_prefix, ParseParams, PartVal, TokenRules,
};
use crate::{
    address::Address,
    err::AddressError,
    strings::*,
    types::{AddrFamily, SegInt, IPV4_BITS, IPV4_SEG_COUNT},
};

pub(crate) fn parse(
    body: &str,
    suffix: Option<&str>,
    params: &ParseParams,
) -> Result<Address, AddressError> {
    let segs: Vec<(SegInt, SegInt)> = parse_body(body, params)?;
    match suffix {
        None => build_ip(&segs, AddrFamily::V4, None, String::new()),
        Some(s) if s.bytes().all(|b| b.is_ascii_digit()) && !s.is_empty() => {
            if !params.allow_prefix {
                return Err(AddressError::parse(KEY_PREFIX_NOT_ALLOWED));
            }
            let p = parse_prefix(s, IPV4_BITS)?;
            build_ip(&segs, AddrFamily::V4, Some(p), String::new())
        }
        Some(mask_str) => {
            if !params.allow_mask {
                return Err(AddressError::parse(KEY_MASK_NOT_ALLOWED));
            }
            let mask: Address = parse_mask(mask_str, params)?;
            let addr: Address = build_ip(&segs, AddrFamily::V4, None, String::new())?;
            apply_mask(&addr, &mask)
        }
    }
}

/// A mask string must itself be a plain single-valued IPv4 address.
fn parse_mask(s: &str, params: &ParseParams) -> Result<Address, AddressError> {
    let segs: Vec<(SegInt, SegInt)> = parse_body(s, params)?;
    let mask: Address = build_ip(&segs, AddrFamily::V4, None, String::new())?;
    if mask.is_multiple() {
        return Err(AddressError::parse(KEY_INVALID_MASK));
    }
    Ok(mask)
}

/// All-ones-then-zeros masks act as a prefix length; any other mask is
/// applied to the value, range incompatibilities surfacing to the caller.
pub(crate) fn apply_mask(addr: &Address, mask: &Address) -> Result<Address, AddressError> {
    match mask.section().get_block_mask_prefix_len(true) {
        Some(p) => Ok(addr.set_prefix_len(p)),
        None => addr.mask_prefixed(mask, None),
    }
}

fn parse_body(body: &str, params: &ParseParams) -> Result<Vec<(SegInt, SegInt)>, AddressError> {
    let rules: TokenRules = TokenRules::ipv4(params);
    let parts: Vec<&str> = body.split(IPV4_SEP).collect();
    if parts.len() > IPV4_SEG_COUNT {
        return Err(AddressError::parse(KEY_TOO_MANY_SEGMENTS));
    }
    if parts.len() == 1 && !params.allow_single_segment {
        return Err(AddressError::parse(KEY_SINGLE_SEGMENT));
    }
    if parts.len() < IPV4_SEG_COUNT && parts.len() > 1 && !params.allow_inet_aton_joined {
        return Err(AddressError::parse(KEY_INET_ATON_NOT_ALLOWED));
    }

    let mut segs: Vec<(SegInt, SegInt)> = Vec::with_capacity(IPV4_SEG_COUNT);
    let last: usize = parts.len() - 1;
    for (i, part) in parts.iter().enumerate() {
        // the last part absorbs the remaining bytes (inet_aton)
        let byte_count: usize = if i == last { IPV4_SEG_COUNT - i } else { 1 };
        let max: u128 = (1u128 << (8 * byte_count)) - 1;
        let max_digits: usize = super::max_digits_for(max, 10);
        let val: PartVal = parse_part(part, max, max_digits, &rules)?;
        let (lower, upper) = val.bounds(max);
        segs.extend(explode_range(lower, upper, byte_count, 8)?);
    }
    Ok(segs)
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
    fn test_plain_dotted() {
        assert_eq!(addr("1.2.3.4").get_value(), 0x01020304);
        assert_eq!(addr("255.255.255.255").get_value(), 0xffffffff);
        assert!(is_err("256.1.1.1"));
        assert!(is_err("1.2.3.4.5"));
        assert!(is_err("1..3.4"));
    }

    #[test]
    fn test_prefix() {
        let a = addr("1.2.3.4/16");
        assert_eq!(a.prefix_len(), Some(16));
        assert_eq!(a.get_value(), 0x01020304);
        assert!(is_err("1.2.3.4/33"));
        assert!(is_err("1.2.3.4/16/8"));
    }

    #[test]
    fn test_inet_aton_forms() {
        // 2-part: second part takes 3 bytes
        assert_eq!(addr("10.258").get_value(), 0x0a000102);
        // 3-part: third part takes 2 bytes
        assert_eq!(addr("10.20.300").get_value(), 0x0a14012c);
        // octal and hex parts
        assert_eq!(addr("0x0a.0x0.01.1").get_value(), 0x0a000101);
        assert_eq!(addr("010.0.0.1").get_value(), 0x08000001);
        assert!(is_err("10.0x1ffffff"));
    }

    #[test]
    fn test_binary_segments() {
        assert_eq!(addr("0b1010.0.0.0b1").get_value(), 0x0a000001);
    }

    #[test]
    fn test_wildcards_and_ranges() {
        let a = addr("1-2.*.3.4");
        assert!(a.is_multiple());
        assert_eq!(a.get_count(), num_bigint::BigUint::from(512u32));
        assert_eq!(a.to_canonical_string(), "1-2.*.3.4");
        let open = addr("10.-20.250-.0");
        assert_eq!(open.get_segment(1).lower(), 0);
        assert_eq!(open.get_segment(1).upper(), 20);
        assert_eq!(open.get_segment(2).upper(), 255);
    }

    #[test]
    fn test_joined_range() {
        // 10.0.0.0-10.0.255.255 as a 2-part range
        let a = addr("10.0-65535");
        assert_eq!(a.get_value(), 0x0a000000);
        assert_eq!(a.get_upper_value(), 0x0a00ffff);
        // misaligned joined ranges are rejected
        assert!(is_err("10.1-65536"));
        assert!(is_err("10.511-512"));
    }

    #[test]
    fn test_mask_suffix() {
        // contiguous mask converts to a prefix
        let a = addr("1.2.3.4/255.255.0.0");
        assert_eq!(a.prefix_len(), Some(16));
        assert_eq!(a.get_value(), 0x01020304);
        // non-contiguous mask applies to the value
        let b = addr("1.2.3.255/0.255.255.240");
        assert_eq!(b.prefix_len(), None);
        assert_eq!(b.get_value(), 0x000203f0);
        // multi-valued masks are invalid
        assert!(is_err("1.2.3.4/255.*.0.0"));
        // incompatible mask over a range
        assert!(is_err("1.*.3.4/255.240.0.0"));
    }

    #[test]
    fn test_disabled_forms() {
        let strict = ParseParams::strict();
        assert!(AddrStr::with_params("1-2.0.0.0", strict.clone())
            .get_address()
            .is_err());
        assert!(AddrStr::with_params("10.20.30", strict.clone())
            .get_address()
            .is_err());
        assert!(AddrStr::with_params("1.2.3.4", strict).get_address().is_ok());
    }

    #[test]
    fn test_sql_wildcards() {
        let params = ParseParams {
            allow_sql_wildcards: true,
            ..Default::default()
        };
        let a = AddrStr::with_params("1_.%.3.4", params).get_address().unwrap();
        assert_eq!(a.get_segment(0).lower(), 10);
        assert_eq!(a.get_segment(0).upper(), 19);
        assert!(a.get_segment(1).is_full_range());
    }
}
