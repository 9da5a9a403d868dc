// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configurable string generator: one segmented writer driven by a
//! [StringOpts] value, plus the per-form front ends in the submodules.

mod ip;
mod mac_str;
mod radix;

pub(crate) use radix::decode_base85;

use crate::{
    err::AddressError,
    section::Section,
    segment::Segment,
    strings::*,
    types::BitCount,
};

/// Characters used to render multi-valued segments.
#[derive(Clone, Debug)]
pub struct Wildcards {
    /// the whole-segment wildcard, canonically `*`
    pub wildcard: String,
    /// the any-single-digit wildcard, canonically `_`
    pub single_wildcard: String,
    /// the separator inside `lower-upper` ranges
    pub range_separator: String,
}

impl Default for Wildcards {
    fn default() -> Self {
        Wildcards {
            wildcard: WILDCARD.to_string(),
            single_wildcard: SINGLE_WILDCARD.to_string(),
            range_separator: RANGE_SEP.to_string(),
        }
    }
}

/// IPv6 zero-run compression control.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompressOpts {
    /// compress a lone zero segment too (the compressed form does, the
    /// canonical form does not)
    pub compress_single: bool,
}

/// Full configuration of one rendering.
#[derive(Clone, Debug)]
pub struct StringOpts {
    pub radix: u32,
    /// segment separator; `None` joins segments without one
    pub separator: Option<char>,
    pub zone_separator: char,
    /// pad every segment to its maximum digit count
    pub expand_segments: bool,
    /// per-segment textual prefix such as `0x` or `0b`
    pub segment_prefix: &'static str,
    /// whole-address label such as `0x`
    pub address_label: &'static str,
    /// whole-address suffix such as `.ip6.arpa`
    pub address_suffix: &'static str,
    pub wildcards: Wildcards,
    /// emit segments (and digits under `split_digits`) right to left
    pub reverse: bool,
    /// emit one digit per slot (reverse-DNS nibble form)
    pub split_digits: bool,
    pub uppercase: bool,
    /// IPv6 zero-run compression; `None` disables
    pub compress: Option<CompressOpts>,
    /// prefer `prefix` + `_` repetitions over `lower-upper` (SQL form)
    pub prefer_single_wildcard: bool,
    /// append `/prefix` when the section carries one
    pub with_prefix_len: bool,
}

impl Default for StringOpts {
    fn default() -> Self {
        StringOpts {
            radix: 10,
            separator: Some(IPV4_SEP),
            zone_separator: ZONE_SEP,
            expand_segments: false,
            segment_prefix: "",
            address_label: "",
            address_suffix: "",
            wildcards: Wildcards::default(),
            reverse: false,
            split_digits: false,
            uppercase: false,
            compress: None,
            prefer_single_wildcard: false,
            with_prefix_len: true,
        }
    }
}

/// Digits needed for a full segment of `bits` in `radix`.
pub(crate) fn max_digits(bits: BitCount, radix: u32) -> usize {
    let max: u32 = (1u64 << bits) as u32 - 1;
    let mut digits: usize = 1;
    let mut v: u32 = max;
    while v >= radix {
        v /= radix;
        digits += 1;
    }
    digits
}

pub(crate) fn digits_str(value: u32, radix: u32, uppercase: bool, pad_to: usize) -> String {
    let mut s: String = match radix {
        2 => format!("{value:b}"),
        8 => format!("{value:o}"),
        16 => {
            if uppercase {
                format!("{value:X}")
            } else {
                format!("{value:x}")
            }
        }
        _ => format!("{value}"),
    };
    while s.len() < pad_to {
        s.insert(0, '0');
    }
    s
}

/**
Render one section with the given options. The zone, when non-empty, is
appended behind [StringOpts::zone_separator]; the prefix length, when
present and enabled, goes last.
*/
pub(crate) fn write_section(
    section: &Section,
    zone: &str,
    opts: &StringOpts,
) -> Result<String, AddressError> {
    let bits: BitCount = section.bits_per_segment();
    let digits: usize = max_digits(bits, opts.radix);

    let mut parts: Vec<String> = Vec::with_capacity(section.segment_count());
    let mut zero_flags: Vec<bool> = Vec::with_capacity(section.segment_count());
    for seg in section.segments() {
        if opts.split_digits {
            split_digit_parts(seg, opts, digits, &mut parts)?;
            zero_flags.resize(parts.len(), false);
        } else {
            parts.push(segment_str(seg, opts, digits)?);
            zero_flags.push(seg.is_zero());
        }
    }
    if opts.reverse {
        parts.reverse();
        zero_flags.reverse();
    }

    let mut body: String = String::new();
    match opts.separator {
        None => {
            for p in &parts {
                body.push_str(p);
            }
        }
        Some(sep) => {
            let run: Option<(usize, usize)> = match (&opts.compress, opts.reverse) {
                (Some(c), false) => find_zero_run(&zero_flags, c.compress_single),
                _ => None,
            };
            match run {
                None => {
                    for (i, p) in parts.iter().enumerate() {
                        if i > 0 {
                            body.push(sep);
                        }
                        body.push_str(p);
                    }
                }
                Some((start, end)) => {
                    // '::' at the boundary; an all-zero section is '::'
                    for (i, p) in parts[..start].iter().enumerate() {
                        if i > 0 {
                            body.push(sep);
                        }
                        body.push_str(p);
                    }
                    body.push(sep);
                    body.push(sep);
                    for (i, p) in parts[end..].iter().enumerate() {
                        if i > 0 {
                            body.push(sep);
                        }
                        body.push_str(p);
                    }
                }
            }
        }
    }

    let mut out: String = String::with_capacity(body.len() + 16);
    out.push_str(opts.address_label);
    out.push_str(&body);
    if !zone.is_empty() {
        out.push(opts.zone_separator);
        out.push_str(zone);
    }
    out.push_str(opts.address_suffix);
    if opts.with_prefix_len {
        if let Some(p) = section.prefix_len() {
            out.push(PREFIX_SEP);
            out.push_str(&p.to_string());
        }
    }
    Ok(out)
}

/// Longest (leftmost on ties) run of zero segments worth compressing.
fn find_zero_run(zero: &[bool], compress_single: bool) -> Option<(usize, usize)> {
    let min_len: usize = if compress_single { 1 } else { 2 };
    let mut best: Option<(usize, usize)> = None;
    let mut i: usize = 0;
    while i < zero.len() {
        if zero[i] {
            let start: usize = i;
            while i < zero.len() && zero[i] {
                i += 1;
            }
            let len: usize = i - start;
            if len >= min_len && best.map_or(true, |(s, e)| len > e - s) {
                best = Some((start, i));
            }
        } else {
            i += 1;
        }
    }
    best
}

/// One segment under the given options.
fn segment_str(seg: &Segment, opts: &StringOpts, digits: usize) -> Result<String, AddressError> {
    let pad: usize = if opts.expand_segments { digits } else { 0 };
    if !seg.is_multiple() {
        let mut s: String = String::new();
        s.push_str(opts.segment_prefix);
        s.push_str(&digits_str(seg.lower() as u32, opts.radix, opts.uppercase, pad));
        return Ok(s);
    }
    if seg.is_full_range() {
        return Ok(opts.wildcards.wildcard.clone());
    }
    if opts.prefer_single_wildcard {
        if let Some(s) = single_wildcard_str(seg, opts, digits) {
            return Ok(s);
        }
        return Err(AddressError::incompatible(KEY_SEGMENT_MISMATCH));
    }
    let mut s: String = String::new();
    s.push_str(opts.segment_prefix);
    s.push_str(&digits_str(seg.lower() as u32, opts.radix, opts.uppercase, pad));
    s.push_str(&opts.wildcards.range_separator);
    s.push_str(opts.segment_prefix);
    s.push_str(&digits_str(seg.upper() as u32, opts.radix, opts.uppercase, pad));
    Ok(s)
}

/**
`prefix` + repeated single-wildcards, when the range is exactly the span
of `k` trailing digits under a fixed digit prefix (e.g. `10-19` as `1_`).
*/
fn single_wildcard_str(seg: &Segment, opts: &StringOpts, digits: usize) -> Option<String> {
    let radix: u32 = opts.radix;
    let (lo, up) = (seg.lower() as u32, seg.upper() as u32);
    let mut span: u32 = 1;
    for k in 1..=digits {
        span *= radix;
        if lo % span == 0 && up == lo + span - 1 {
            let mut s: String = String::new();
            if lo > 0 || up < span - 1 {
                s.push_str(&digits_str(lo / span, radix, opts.uppercase, 0));
            }
            if s.is_empty() && lo == 0 {
                // no digit prefix left: "_" alone covers one digit span
                if up != span - 1 {
                    continue;
                }
            }
            for _ in 0..k {
                s.push_str(&opts.wildcards.single_wildcard);
            }
            return Some(s);
        }
    }
    None
}

/// One part per digit, used by the nibble reverse-DNS form. Only single
/// values and full ranges decompose into independent digits.
fn split_digit_parts(
    seg: &Segment,
    opts: &StringOpts,
    digits: usize,
    parts: &mut Vec<String>,
) -> Result<(), AddressError> {
    let radix: u32 = opts.radix;
    if !seg.is_multiple() {
        let mut v: u32 = seg.lower() as u32;
        let mut own: Vec<String> = Vec::with_capacity(digits);
        for _ in 0..digits {
            own.push(digits_str(v % radix, radix, opts.uppercase, 0));
            v /= radix;
        }
        own.reverse();
        parts.extend(own);
        return Ok(());
    }
    if seg.is_full_range() {
        for _ in 0..digits {
            parts.push(opts.wildcards.wildcard.clone());
        }
        return Ok(());
    }
    // per-digit decomposition: digits below the top varying one must be
    // full, the top varying one may be any sub-range
    let (mut lo, mut up) = (seg.lower() as u32, seg.upper() as u32);
    let mut own: Vec<String> = Vec::with_capacity(digits);
    for _ in 0..digits {
        let (dl, du) = (lo % radix, up % radix);
        let (hl, hu) = (lo / radix, up / radix);
        if lo == up {
            own.push(digits_str(dl, radix, opts.uppercase, 0));
        } else if dl == 0 && du == radix - 1 {
            own.push(opts.wildcards.wildcard.clone());
        } else if hl == hu {
            // the top varying digit carries the residual range
            let mut s: String = digits_str(dl, radix, opts.uppercase, 0);
            s.push_str(&opts.wildcards.range_separator);
            s.push_str(&digits_str(du, radix, opts.uppercase, 0));
            own.push(s);
        } else {
            return Err(AddressError::incompatible(KEY_SPLIT_SEGMENT));
        }
        (lo, up) = (hl, hu);
    }
    own.reverse();
    parts.extend(own);
    Ok(())
}

/* -------------------------------------------------------------------------- */
