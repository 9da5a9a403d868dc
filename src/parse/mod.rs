// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The multi-format address parser.
//!
//! Parsing is two-phased: the per-segment tokenizer ([parse_part]) reads
//! digits, radices, wildcards and ranges; the per-family validators
//! (`ipv4`, `ipv6`, `mac` submodules) reconcile segment counts, embedded
//! forms, masks and prefixes into a [Section]. [AddrStr] front-ends the
//! whole thing lazily and keeps family-ambiguous strings (`123`, `*`,
//! `/24`, the empty string) unresolved until an address of a concrete
//! family is requested.

mod ipv4;
mod ipv6;
mod mac;
mod params;

pub use params::{MacParseParams, ParseParams, RangeParseParams};

use crate::{
    address::Address,
    err::AddressError,
    network::{ipv4_network, ipv6_network},
    strings::*,
    types::{AddrFamily, BitCount, PrefixLen, SegInt, IPV4_BITS, IPV6_BITS},
};
use once_cell::sync::OnceCell;
use std::str::FromStr;
use tracing::trace;

/// A lazily parsed IP address string.
///
/// Construction never fails; validation happens on first use and the
/// outcome is cached.
#[derive(Clone, Debug)]
pub struct AddrStr {
    text: String,
    params: ParseParams,
    parsed: OnceCell<Result<Parsed, AddressError>>,
}

/// Validated but possibly family-ambiguous parse outcome.
#[derive(Clone, Debug)]
pub(crate) enum Parsed {
    /// family fully determined
    Ip(Address),
    /// a value without a family: single-segment integers and lone `*`
    Dual {
        lower: u128,
        upper: u128,
        /// the full address space (`*`): the upper bound depends on the
        /// eventual family
        full: bool,
        /// fits in 32 bits and may materialize as IPv4
        fits_v4: bool,
        prefix: PrefixLen,
    },
    /// a lone `/n`
    PrefixOnly(BitCount),
    /// the empty string
    Empty,
}

impl AddrStr {
    /// Wrap a string with the default (permissive) parameters.
    pub fn new(text: impl Into<String>) -> AddrStr {
        AddrStr::with_params(text, ParseParams::default())
    }

    pub fn with_params(text: impl Into<String>, params: ParseParams) -> AddrStr {
        AddrStr {
            text: text.into(),
            params,
            parsed: OnceCell::new(),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn params(&self) -> &ParseParams {
        &self.params
    }

    pub(crate) fn parsed(&self) -> &Result<Parsed, AddressError> {
        self.parsed.get_or_init(|| {
            trace!(text = %self.text, "parsing address string");
            parse(&self.text, &self.params)
        })
    }

    pub fn is_valid(&self) -> bool {
        self.parsed().is_ok()
    }

    /// Whether the string was a lone `/n`.
    pub fn is_prefix_only(&self) -> bool {
        matches!(self.parsed(), Ok(Parsed::PrefixOnly(_)))
    }

    /// The family, when the string pins one down.
    pub fn get_family(&self) -> Option<AddrFamily> {
        match self.parsed() {
            Ok(Parsed::Ip(addr)) => Some(addr.family()),
            _ => None,
        }
    }

    /**
    The parsed address. Family-ambiguous strings resolve to their IPv4
    reading when one exists (the inet_aton precedent), else to IPv6; a
    lone `/n` materializes as the prefixed network mask.
    */
    pub fn get_address(&self) -> Result<Address, AddressError> {
        match self.parsed() {
            Err(e) => Err(e.clone()),
            Ok(Parsed::Ip(addr)) => Ok(addr.clone()),
            Ok(Parsed::Dual { fits_v4: true, .. }) => self.get_v4_address(),
            Ok(Parsed::Dual { .. }) => self.get_v6_address(),
            Ok(Parsed::PrefixOnly(p)) => {
                if *p <= IPV4_BITS {
                    self.get_v4_address()
                } else {
                    self.get_v6_address()
                }
            }
            Ok(Parsed::Empty) => self.get_v4_address(),
        }
    }

    /// The address under a demanded IPv4 reading.
    pub fn get_v4_address(&self) -> Result<Address, AddressError> {
        match self.parsed() {
            Err(e) => Err(e.clone()),
            Ok(Parsed::Ip(addr)) => {
                if addr.family() == AddrFamily::V4 {
                    Ok(addr.clone())
                } else {
                    Err(AddressError::parse(KEY_IPV4))
                }
            }
            Ok(Parsed::Dual {
                lower,
                upper,
                full,
                fits_v4,
                prefix,
            }) => {
                if !fits_v4 {
                    return Err(AddressError::parse(KEY_IPV4));
                }
                let upper: u128 = if *full { u32::MAX as u128 } else { *upper };
                let segs: Vec<(SegInt, SegInt)> = explode_range(*lower, upper, 4, 8)?;
                Ok(build_ip(&segs, AddrFamily::V4, *prefix, String::new())?)
            }
            Ok(Parsed::PrefixOnly(p)) => {
                if *p > IPV4_BITS {
                    return Err(AddressError::parse(KEY_IPV4));
                }
                Ok(ipv4_network().get_prefixed_network_mask(*p))
            }
            Ok(Parsed::Empty) => Ok(Address::from_ipv4_value(0, None)),
        }
    }

    /// The address under a demanded IPv6 reading.
    pub fn get_v6_address(&self) -> Result<Address, AddressError> {
        match self.parsed() {
            Err(e) => Err(e.clone()),
            Ok(Parsed::Ip(addr)) => {
                if addr.family() == AddrFamily::V6 {
                    Ok(addr.clone())
                } else {
                    Err(AddressError::parse(KEY_IPV6))
                }
            }
            Ok(Parsed::Dual {
                lower,
                upper,
                full,
                prefix,
                ..
            }) => {
                let upper: u128 = if *full { u128::MAX } else { *upper };
                let segs: Vec<(SegInt, SegInt)> = explode_range(*lower, upper, 8, 16)?;
                Ok(build_ip(&segs, AddrFamily::V6, *prefix, String::new())?)
            }
            Ok(Parsed::PrefixOnly(p)) => Ok(ipv6_network().get_prefixed_network_mask(*p)),
            Ok(Parsed::Empty) => Ok(Address::from_ipv6_value(0, None)),
        }
    }
}

impl FromStr for AddrStr {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AddrStr::new(s))
    }
}

/* ---------------------------------- */

/// A lazily parsed MAC address string.
#[derive(Clone, Debug)]
pub struct MacAddrStr {
    text: String,
    params: MacParseParams,
    parsed: OnceCell<Result<Address, AddressError>>,
}

impl MacAddrStr {
    pub fn new(text: impl Into<String>) -> MacAddrStr {
        MacAddrStr::with_params(text, MacParseParams::default())
    }

    pub fn with_params(text: impl Into<String>, params: MacParseParams) -> MacAddrStr {
        MacAddrStr {
            text: text.into(),
            params,
            parsed: OnceCell::new(),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_valid(&self) -> bool {
        self.get_address().is_ok()
    }

    pub fn get_address(&self) -> Result<Address, AddressError> {
        self.parsed
            .get_or_init(|| {
                trace!(text = %self.text, "parsing mac address string");
                mac::parse(self.text.trim(), &self.params)
            })
            .clone()
    }
}

/* ---------------------------------- */
// top-level dispatch

fn parse(text: &str, params: &ParseParams) -> Result<Parsed, AddressError> {
    let s: &str = text.trim();
    if s.is_empty() {
        return if params.allow_empty {
            Ok(Parsed::Empty)
        } else {
            Err(AddressError::parse(KEY_EMPTY_NOT_ALLOWED))
        };
    }

    // one '/' splits the address body from a prefix or mask suffix
    let (body, suffix): (&str, Option<&str>) = match s.split_once(PREFIX_SEP) {
        None => (s, None),
        Some((b, rest)) => {
            if rest.contains(PREFIX_SEP) {
                return Err(AddressError::parse_at(KEY_INVALID_PREFIX, b.len() + 1));
            }
            (b, Some(rest))
        }
    };

    if body.is_empty() {
        // a lone "/n"
        let suffix: &str = suffix.ok_or_else(|| AddressError::parse(KEY_EMPTY_NOT_ALLOWED))?;
        if !params.allow_prefix_only || !params.allow_prefix {
            return Err(AddressError::parse(KEY_PREFIX_NOT_ALLOWED));
        }
        let p: BitCount = parse_prefix(suffix, IPV6_BITS)?;
        return Ok(Parsed::PrefixOnly(p));
    }

    if body.contains(IPV6_SEP) || suffix.is_some_and(|m| m.contains(IPV6_SEP)) {
        return ipv6::parse(body, suffix, params).map(Parsed::Ip);
    }
    if body.contains(IPV4_SEP) || suffix.is_some_and(|m| m.contains(IPV4_SEP)) {
        return ipv4::parse(body, suffix, params).map(Parsed::Ip);
    }
    parse_ambiguous(body, suffix, params)
}

/// Single-segment bodies with no separators: inet_aton integers, lone
/// wildcards, 32-hex-digit IPv6 values and base-85.
fn parse_ambiguous(
    body: &str,
    suffix: Option<&str>,
    params: &ParseParams,
) -> Result<Parsed, AddressError> {
    let prefix: PrefixLen = match suffix {
        None => None,
        Some(m) => {
            if !params.allow_prefix {
                return Err(AddressError::parse(KEY_PREFIX_NOT_ALLOWED));
            }
            Some(parse_prefix(m, IPV6_BITS)?)
        }
    };

    if body.chars().all(|c| c == WILDCARD || c == ALT_WILDCARD) && body.chars().count() == 1 {
        if !params.allow_all {
            return Err(AddressError::parse(KEY_ALL_NOT_ALLOWED));
        }
        return Ok(Parsed::Dual {
            lower: 0,
            upper: 0,
            full: true,
            fits_v4: prefix.is_none_or(|p| p <= IPV4_BITS),
            prefix,
        });
    }

    // 1) inet_aton single segment
    if params.allow_single_segment {
        let rules: TokenRules = TokenRules::ipv4(params);
        if let Ok(part) = parse_part(body, u32::MAX as u128, 10, &rules) {
            let (lower, upper) = part.bounds(u32::MAX as u128);
            let fits_v4: bool = prefix.is_none_or(|p| p <= IPV4_BITS);
            return Ok(Parsed::Dual {
                lower,
                upper,
                full: matches!(part, PartVal::Full),
                fits_v4,
                prefix,
            });
        }
    }

    // 2) a 32-hex-digit (or 128-bit binary) IPv6 single segment
    if params.allow_single_segment {
        if let Some(parsed) = ipv6::parse_single_segment(body, params)? {
            let (lower, upper) = parsed;
            return Ok(Parsed::Dual {
                lower,
                upper,
                full: false,
                fits_v4: false,
                prefix,
            });
        }
    }

    // 3) base 85
    if params.allow_base85 {
        if let Some(addr) = ipv6::parse_base85(body, prefix)? {
            return Ok(Parsed::Ip(addr));
        }
    }

    Err(AddressError::parse(KEY_INVALID_CHAR))
}

/* ---------------------------------- */
// shared tokenizer machinery

/// Which token shapes one family permits in a segment.
pub(crate) struct TokenRules {
    pub default_radix: u32,
    pub allow_wildcard: bool,
    pub allow_range: bool,
    pub allow_single_wildcard: bool,
    pub allow_sql: bool,
    pub allow_leading_zeros: bool,
    pub allow_unlimited_zeros: bool,
    pub allow_hex_prefix: bool,
    pub allow_octal: bool,
    pub allow_binary: bool,
}

impl TokenRules {
    pub(crate) fn ipv4(params: &ParseParams) -> TokenRules {
        TokenRules {
            default_radix: 10,
            allow_wildcard: params.allow_wildcard_and_range && params.ipv4_range.allow_wildcard,
            allow_range: params.allow_wildcard_and_range && params.ipv4_range.allow_range,
            allow_single_wildcard: params.allow_wildcard_and_range
                && params.ipv4_range.allow_single_wildcard,
            allow_sql: params.allow_sql_wildcards,
            allow_leading_zeros: params.allow_leading_zeros,
            allow_unlimited_zeros: params.allow_unlimited_leading_zeros,
            allow_hex_prefix: params.allow_inet_aton_hex,
            allow_octal: params.allow_inet_aton_octal,
            allow_binary: params.allow_binary,
        }
    }

    pub(crate) fn ipv6(params: &ParseParams) -> TokenRules {
        TokenRules {
            default_radix: 16,
            allow_wildcard: params.allow_wildcard_and_range && params.ipv6_range.allow_wildcard,
            allow_range: params.allow_wildcard_and_range && params.ipv6_range.allow_range,
            allow_single_wildcard: params.allow_wildcard_and_range
                && params.ipv6_range.allow_single_wildcard,
            allow_sql: params.allow_sql_wildcards,
            allow_leading_zeros: params.allow_leading_zeros,
            allow_unlimited_zeros: params.allow_unlimited_leading_zeros,
            allow_hex_prefix: false,
            allow_octal: false,
            allow_binary: params.allow_binary,
        }
    }

    pub(crate) fn mac(params: &MacParseParams) -> TokenRules {
        TokenRules {
            default_radix: 16,
            allow_wildcard: params.allow_wildcard_and_range,
            allow_range: params.allow_wildcard_and_range,
            allow_single_wildcard: params.allow_wildcard_and_range,
            allow_sql: false,
            allow_leading_zeros: params.allow_leading_zeros,
            allow_unlimited_zeros: params.allow_leading_zeros,
            allow_binary: false,
            allow_hex_prefix: false,
            allow_octal: false,
        }
    }
}

/// One tokenized segment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PartVal {
    Single(u128),
    Range(u128, u128),
    /// `*`: the entire segment
    Full,
}

impl PartVal {
    pub(crate) fn bounds(&self, max: u128) -> (u128, u128) {
        match *self {
            PartVal::Single(v) => (v, v),
            PartVal::Range(l, u) => (l, u),
            PartVal::Full => (0, max),
        }
    }

    pub(crate) fn is_multiple(&self) -> bool {
        !matches!(self, PartVal::Single(_))
    }
}

/**
Tokenize one segment of at most `max`, whose full width spans
`max_digits` digits in the default radix. Recognizes wildcards, ranges,
trailing single wildcards, SQL wildcards and the per-segment radix
prefixes the rules allow.
*/
pub(crate) fn parse_part(
    s: &str,
    max: u128,
    max_digits: usize,
    rules: &TokenRules,
) -> Result<PartVal, AddressError> {
    if s.is_empty() {
        return Err(AddressError::parse(KEY_NULL_SEGMENT));
    }
    if s.len() == WILDCARD.len_utf8() && s.starts_with(WILDCARD)
        || s.chars().eq([ALT_WILDCARD])
    {
        if !rules.allow_wildcard {
            return Err(AddressError::parse(KEY_WILDCARD_NOT_ALLOWED));
        }
        return Ok(PartVal::Full);
    }
    if rules.allow_sql && s.chars().eq([SQL_WILDCARD]) {
        return Ok(PartVal::Full);
    }

    if let Some(i) = find_range_sep(s) {
        if !rules.allow_range {
            return Err(AddressError::parse(KEY_INVALID_RANGE));
        }
        let sep_len: usize = s[i..].chars().next().map_or(1, |c| c.len_utf8());
        let (ls, us) = (&s[..i], &s[i + sep_len..]);
        if us.contains(RANGE_SEP) || us.contains(ALT_RANGE_SEP) {
            return Err(AddressError::parse(KEY_INVALID_RANGE));
        }
        let lower: u128 = if ls.is_empty() {
            0
        } else {
            parse_value(ls, max, max_digits, rules)?
        };
        let upper: u128 = if us.is_empty() {
            max
        } else {
            parse_value(us, max, max_digits, rules)?
        };
        if lower > upper {
            return Err(AddressError::parse(KEY_INVALID_RANGE));
        }
        if lower == 0 && upper == max {
            return Ok(PartVal::Full);
        }
        return Ok(PartVal::Range(lower, upper));
    }

    // trailing '_': a fixed digit prefix over any trailing digits
    if s.ends_with(SINGLE_WILDCARD) {
        if !rules.allow_single_wildcard {
            return Err(AddressError::parse(KEY_WILDCARD_NOT_ALLOWED));
        }
        let digits: &str = s.trim_end_matches(SINGLE_WILDCARD);
        let k: u32 = (s.len() - digits.len()) as u32;
        let radix: u128 = rules.default_radix as u128;
        let span: u128 = radix
            .checked_pow(k)
            .ok_or_else(|| AddressError::parse(KEY_EXCEEDS_SIZE))?;
        let prefix_val: u128 = if digits.is_empty() {
            0
        } else {
            parse_value(digits, max, max_digits, rules)?
        };
        let lower: u128 = prefix_val
            .checked_mul(span)
            .ok_or_else(|| AddressError::parse(KEY_EXCEEDS_SIZE))?;
        if lower > max {
            return Err(AddressError::parse(KEY_EXCEEDS_SIZE));
        }
        let upper: u128 = lower.saturating_add(span - 1).min(max);
        if lower == 0 && upper == max {
            return Ok(PartVal::Full);
        }
        return Ok(PartVal::Range(lower, upper));
    }

    // trailing SQL '%': any continuation of the given digit prefix
    if rules.allow_sql && s.ends_with(SQL_WILDCARD) {
        let digits: &str = &s[..s.len() - 1];
        if digits.contains(SQL_WILDCARD) {
            return Err(AddressError::parse(KEY_INVALID_CHAR));
        }
        let prefix_val: u128 = parse_value(digits, max, max_digits, rules)?;
        let radix: u128 = rules.default_radix as u128;
        let mut upper: u128 = prefix_val;
        for _ in digits.len()..max_digits {
            upper = match upper.checked_mul(radix) {
                Some(v) => v + (radix - 1),
                None => break,
            };
        }
        return Ok(PartVal::Range(prefix_val, upper.min(max)));
    }

    Ok(PartVal::Single(parse_value(s, max, max_digits, rules)?))
}

/// Index of the range separator, skipping a leading `-` only when the
/// whole string is a lower-open range like `-5`.
fn find_range_sep(s: &str) -> Option<usize> {
    if let Some(i) = s.find(ALT_RANGE_SEP) {
        return Some(i);
    }
    s.find(RANGE_SEP)
}

/// One numeric value under radix detection and leading-zero policy.
pub(crate) fn parse_value(
    s: &str,
    max: u128,
    max_digits: usize,
    rules: &TokenRules,
) -> Result<u128, AddressError> {
    if s.is_empty() {
        return Err(AddressError::parse(KEY_NULL_SEGMENT));
    }
    let (digits, radix, digit_cap): (&str, u32, usize) =
        if rules.allow_hex_prefix && (s.starts_with("0x") || s.starts_with("0X")) {
            (&s[2..], 16, max_digits_for(max, 16))
        } else if rules.allow_binary
            && (s.starts_with("0b") || s.starts_with("0B"))
            && s.len() > 2
            && s[2..].bytes().all(|b| b == b'0' || b == b'1')
        {
            (&s[2..], 2, max_digits_for(max, 2))
        } else if rules.allow_octal && s.starts_with('0') && s.len() > 1 {
            (&s[1..], 8, max_digits_for(max, 8))
        } else {
            (s, rules.default_radix, max_digits)
        };

    if digits.is_empty() {
        return Err(AddressError::parse(KEY_NULL_SEGMENT));
    }
    if digits.starts_with('0') && digits.len() > 1 && !rules.allow_leading_zeros {
        return Err(AddressError::parse(KEY_LEADING_ZEROS));
    }
    if digits.len() > digit_cap && !rules.allow_unlimited_zeros {
        return Err(AddressError::parse(KEY_LEADING_ZEROS));
    }

    let value: u128 =
        u128::from_str_radix(digits, radix).map_err(|_| AddressError::parse(KEY_INVALID_CHAR))?;
    if value > max {
        return Err(AddressError::parse(KEY_EXCEEDS_SIZE));
    }
    Ok(value)
}

/// Digits a value of at most `max` may occupy in `radix`.
pub(crate) fn max_digits_for(max: u128, radix: u32) -> usize {
    let mut digits: usize = 1;
    let mut v: u128 = max;
    while v >= radix as u128 {
        v /= radix as u128;
        digits += 1;
    }
    digits
}

/**
Decompose an integer range into per-segment ranges, failing with the
joined-ranges error when the interval is not a clean segment product
(every segment below the highest varying one must span its full width).
*/
pub(crate) fn explode_range(
    lower: u128,
    upper: u128,
    seg_count: usize,
    bits: u32,
) -> Result<Vec<(SegInt, SegInt)>, AddressError> {
    let seg_max: u128 = (1u128 << bits) - 1;
    let mut out: Vec<(SegInt, SegInt)> = Vec::with_capacity(seg_count);
    let mut varied: bool = false;
    for i in 0..seg_count {
        let shift: u32 = bits * (seg_count - 1 - i) as u32;
        let l: u128 = (lower >> shift) & seg_max;
        let u: u128 = (upper >> shift) & seg_max;
        if varied && !(l == 0 && u == seg_max) {
            return Err(AddressError::parse(KEY_INVALID_JOINED_RANGES));
        }
        varied |= l != u;
        out.push((l as SegInt, u as SegInt));
    }
    Ok(out)
}

/// Build a full-length IP address from exploded segment bounds.
pub(crate) fn build_ip(
    segs: &[(SegInt, SegInt)],
    family: AddrFamily,
    prefix: PrefixLen,
    zone: String,
) -> Result<Address, AddressError> {
    use crate::{section::Section, segment::Segment};
    let bits: BitCount = family.bits_per_segment();
    let mut out: Vec<Segment> = Vec::with_capacity(segs.len());
    for &(l, u) in segs {
        out.push(Segment::new(l, u, bits, None)?);
    }
    Address::with_zone(Section::new(out, family, prefix)?, zone)
}

/// A `/n` suffix: plain decimal, at most `max`.
pub(crate) fn parse_prefix(s: &str, max: BitCount) -> Result<BitCount, AddressError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::parse(KEY_INVALID_PREFIX));
    }
    let p: BitCount = s
        .parse()
        .map_err(|_| AddressError::parse(KEY_INVALID_PREFIX))?;
    if p > max {
        return Err(AddressError::parse(KEY_PREFIX_SIZE));
    }
    Ok(p)
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_part_plain() {
        let rules = TokenRules::ipv4(&ParseParams::default());
        assert_eq!(parse_part("123", 255, 3, &rules).unwrap(), PartVal::Single(123));
        assert_eq!(parse_part("0x7f", 255, 3, &rules).unwrap(), PartVal::Single(127));
        assert_eq!(parse_part("017", 255, 3, &rules).unwrap(), PartVal::Single(15));
        assert_eq!(parse_part("0b101", 255, 3, &rules).unwrap(), PartVal::Single(5));
        assert!(parse_part("256", 255, 3, &rules).is_err());
        assert!(parse_part("", 255, 3, &rules).is_err());
    }

    #[test]
    fn test_parse_part_ranges() {
        let rules = TokenRules::ipv4(&ParseParams::default());
        assert_eq!(parse_part("1-5", 255, 3, &rules).unwrap(), PartVal::Range(1, 5));
        assert_eq!(parse_part("250-", 255, 3, &rules).unwrap(), PartVal::Range(250, 255));
        assert_eq!(parse_part("-5", 255, 3, &rules).unwrap(), PartVal::Range(0, 5));
        assert_eq!(parse_part("0-255", 255, 3, &rules).unwrap(), PartVal::Full);
        assert_eq!(parse_part("*", 255, 3, &rules).unwrap(), PartVal::Full);
        assert!(parse_part("5-1", 255, 3, &rules).is_err());
        assert!(parse_part("1-2-3", 255, 3, &rules).is_err());
    }

    #[test]
    fn test_parse_part_single_wildcard() {
        let rules = TokenRules::ipv4(&ParseParams::default());
        assert_eq!(parse_part("1_", 255, 3, &rules).unwrap(), PartVal::Range(10, 19));
        assert_eq!(parse_part("_", 255, 3, &rules).unwrap(), PartVal::Range(0, 9));
        assert_eq!(parse_part("2__", 255, 3, &rules).unwrap(), PartVal::Range(200, 255));
    }

    #[test]
    fn test_parse_part_leading_zeros() {
        let mut params = ParseParams::default();
        params.allow_inet_aton_octal = false;
        let rules = TokenRules::ipv4(&params);
        assert_eq!(parse_part("01", 255, 3, &rules).unwrap(), PartVal::Single(1));
        assert_eq!(parse_part("0001", 255, 3, &rules).unwrap(), PartVal::Single(1));
        let mut strict = params.clone();
        strict.allow_leading_zeros = false;
        let rules = TokenRules::ipv4(&strict);
        assert!(parse_part("01", 255, 3, &rules).is_err());
        let mut limited = params.clone();
        limited.allow_unlimited_leading_zeros = false;
        let rules = TokenRules::ipv4(&limited);
        assert!(parse_part("0001", 255, 3, &rules).is_err());
        assert_eq!(parse_part("001", 255, 3, &rules).unwrap(), PartVal::Single(1));
    }

    #[test]
    fn test_explode_range() {
        assert_eq!(
            explode_range(0x01020304, 0x01020304, 4, 8).unwrap(),
            vec![(1, 1), (2, 2), (3, 3), (4, 4)]
        );
        assert_eq!(
            explode_range(0x0a000000, 0x0a00ffff, 4, 8).unwrap(),
            vec![(10, 10), (0, 0), (0, 255), (0, 255)]
        );
        // not a segment product
        assert!(explode_range(0x0a000001, 0x0a0000ff, 4, 8).is_ok());
        assert!(explode_range(0x0a000001, 0x0a000100, 4, 8).is_err());
    }

    #[test]
    fn test_ambiguous_single_value() {
        let a = AddrStr::new("123");
        assert!(a.is_valid());
        assert_eq!(a.get_address().unwrap().to_canonical_string(), "0.0.0.123");
        assert_eq!(a.get_v4_address().unwrap().get_value(), 123);
        assert_eq!(a.get_v6_address().unwrap().get_value(), 123);
    }

    #[test]
    fn test_inet_aton_single_large() {
        let a = AddrStr::new("0x0a000001");
        assert_eq!(a.get_address().unwrap().to_canonical_string(), "10.0.0.1");
    }

    #[test]
    fn test_all_string() {
        let a = AddrStr::new("*");
        assert_eq!(a.get_v4_address().unwrap().to_canonical_string(), "*.*.*.*");
        assert_eq!(a.get_v6_address().unwrap().to_canonical_string(), "*:*:*:*:*:*:*:*");
        let denied = AddrStr::with_params(
            "*",
            ParseParams {
                allow_all: false,
                ..Default::default()
            },
        );
        assert!(!denied.is_valid());
    }

    #[test]
    fn test_empty_string() {
        let a = AddrStr::new("");
        assert!(a.is_valid());
        assert_eq!(a.get_address().unwrap().get_value(), 0);
        assert!(!AddrStr::with_params("", ParseParams::strict()).is_valid());
    }

    #[test]
    fn test_prefix_only() {
        let a = AddrStr::new("/24");
        assert!(a.is_prefix_only());
        let mask = a.get_address().unwrap();
        assert_eq!(mask.get_value(), 0xffffff00);
        assert_eq!(mask.prefix_len(), Some(24));
        let v6 = AddrStr::new("/64");
        assert_eq!(v6.get_address().unwrap().family(), AddrFamily::V6);
    }

    #[test]
    fn test_single_segment_with_prefix() {
        let a = AddrStr::new("0x0a000001/8");
        let addr = a.get_address().unwrap();
        assert_eq!(addr.prefix_len(), Some(8));
        assert_eq!(addr.get_value(), 0x0a000001);
    }
}
