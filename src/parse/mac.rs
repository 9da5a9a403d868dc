// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MAC/EUI validation: colon, dashed, dotted, space-delimited and
//! separator-free forms, 6 segments or the 8-segment EUI-64 widths.

use super::{explode_range, parse_part, MacParseParams, PartVal, TokenRules};
use crate::{
    address::Address,
    err::AddressError,
    section::Section,
    segment::Segment,
    strings::*,
    types::{AddrFamily, SegInt, MAC_EXT_SEG_COUNT, MAC_SEG_COUNT},
};

pub(crate) fn parse(s: &str, params: &MacParseParams) -> Result<Address, AddressError> {
    if s.is_empty() {
        if !params.allow_empty {
            return Err(AddressError::parse(KEY_EMPTY_NOT_ALLOWED));
        }
        return build(vec![(0, 0); MAC_SEG_COUNT]);
    }
    if s == "*" {
        if !params.allow_all {
            return Err(AddressError::parse(KEY_ALL_NOT_ALLOWED));
        }
        return build(vec![(0, 0xff); MAC_SEG_COUNT]);
    }

    let rules: TokenRules = TokenRules::mac(params);
    if s.contains(MAC_COLON_SEP) {
        return parse_separated(s, MAC_COLON_SEP, false, &rules);
    }
    if s.contains(MAC_SPACE_SEP) {
        return parse_separated(s, MAC_SPACE_SEP, false, &rules);
    }
    if s.contains(MAC_DOT_SEP) {
        return parse_dotted(s, &rules);
    }
    if s.contains(MAC_DASH_SEP) {
        // six or eight dash-separated parts; anything else falls back to
        // a ranged single-segment string
        let count: usize = s.split(MAC_DASH_SEP).count();
        if count == MAC_SEG_COUNT || count == MAC_EXT_SEG_COUNT {
            return parse_separated(s, MAC_DASH_SEP, true, &rules);
        }
    }
    if !params.allow_single_segment {
        return Err(AddressError::parse(KEY_SINGLE_SEGMENT));
    }
    parse_single(s, &rules)
}

fn build(pairs: Vec<(SegInt, SegInt)>) -> Result<Address, AddressError> {
    let mut segs: Vec<Segment> = Vec::with_capacity(pairs.len());
    for (l, u) in pairs {
        segs.push(Segment::new(l, u, 8, None)?);
    }
    Address::new(Section::new(segs, AddrFamily::Mac, None)?)
}

/// Colon, space or dashed byte-per-part forms. Dashed parts write ranges
/// with `|`, the dash being taken by the separator.
fn parse_separated(
    s: &str,
    sep: char,
    dashed: bool,
    rules: &TokenRules,
) -> Result<Address, AddressError> {
    let parts: Vec<&str> = s.split(sep).collect();
    if parts.len() != MAC_SEG_COUNT && parts.len() != MAC_EXT_SEG_COUNT {
        return Err(AddressError::parse(if parts.len() < MAC_SEG_COUNT {
            KEY_TOO_FEW_SEGMENTS
        } else {
            KEY_TOO_MANY_SEGMENTS
        }));
    }
    let mut pairs: Vec<(SegInt, SegInt)> = Vec::with_capacity(parts.len());
    for part in parts {
        let owned: String;
        let token: &str = if dashed && part.contains(MAC_DASHED_RANGE_SEP) {
            owned = part.replace(MAC_DASHED_RANGE_SEP, "-");
            &owned
        } else {
            part
        };
        let val: PartVal = parse_part(token, 0xff, 2, rules)?;
        let (lo, up) = val.bounds(0xff);
        pairs.push((lo as SegInt, up as SegInt));
    }
    build(pairs)
}

/// `aabb.ccdd.eeff` (or four groups for EUI-64): 16 bits per part.
fn parse_dotted(s: &str, rules: &TokenRules) -> Result<Address, AddressError> {
    let parts: Vec<&str> = s.split(MAC_DOT_SEP).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(AddressError::parse(KEY_SEGMENT_COUNT));
    }
    let mut pairs: Vec<(SegInt, SegInt)> = Vec::with_capacity(parts.len() * 2);
    for part in parts {
        let val: PartVal = parse_part(part, 0xffff, 4, rules)?;
        let (lo, up) = val.bounds(0xffff);
        pairs.extend(explode_range(lo, up, 2, 8)?);
    }
    build(pairs)
}

/// 12 or 16 hex digits without separators, optionally `-`-ranged.
fn parse_single(s: &str, rules: &TokenRules) -> Result<Address, AddressError> {
    let mut hex_len: usize = 0;
    for side in s.split(RANGE_SEP) {
        if side.len() != 12 && side.len() != 16 {
            return Err(AddressError::parse(KEY_SINGLE_SEGMENT));
        }
        if hex_len != 0 && side.len() != hex_len {
            return Err(AddressError::parse(KEY_INVALID_RANGE));
        }
        hex_len = side.len();
    }
    let seg_count: usize = hex_len / 2;
    let max: u128 = (1u128 << (hex_len * 4)) - 1;
    let val: PartVal = parse_part(s, max, hex_len, rules)?;
    let (lo, up) = val.bounds(max);
    build(explode_range(lo, up, seg_count, 8)?)
}

/* -------------------------------------------------------------------------- */
