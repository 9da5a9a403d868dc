// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sequential address ranges: an inclusive `[lower, upper]` pair of
//! same-family addresses, contiguous in integer order and free of CIDR
//! alignment constraints, with the algebra over them (containment,
//! intersection, union, subtraction and spanning into blocks).

use crate::{
    address::Address,
    err::AddressError,
    section::Section,
    segment::Segment,
    strings::*,
    types::{max_value_u128, AddrFamily, BitCount, SegInt},
};
use num_bigint::BigUint;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{cmp::Ordering, fmt, str::FromStr};

/// An inclusive range between two addresses. Endpoints are single-valued,
/// unprefixed and zoneless; ranges are pure value sets.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AddrRange {
    lower: Address,
    upper: Address,
}

impl AddrRange {
    /**
    Build a range between two addresses of the same family, swapping the
    bounds when given out of order. Multi-valued arguments contribute
    their extremes; prefixes and zones are stripped.
    */
    pub fn new(a: &Address, b: &Address) -> Result<AddrRange, AddressError> {
        if a.family() != b.family() || a.segment_count() != b.segment_count() {
            return Err(AddressError::SizeMismatch {
                key: KEY_SIZE_MISMATCH,
            });
        }
        let lower: Address = strip(&a.get_lower());
        let upper: Address = strip(&b.get_upper());
        if lower.get_value() > upper.get_value() {
            // the caller's bounds were reversed; take the envelope anyway
            let lo: Address = strip(&b.get_lower());
            let up: Address = strip(&a.get_upper());
            return Ok(AddrRange { lower: lo, upper: up });
        }
        Ok(AddrRange { lower, upper })
    }

    pub(crate) fn derive(lower: Address, upper: Address) -> AddrRange {
        debug_assert!(lower.get_value() <= upper.get_value());
        AddrRange { lower, upper }
    }

    fn from_values(&self, lower: u128, upper: u128) -> AddrRange {
        AddrRange {
            lower: self.make_addr(lower, lower, None),
            upper: self.make_addr(upper, upper, None),
        }
    }

    fn make_addr(&self, lower: u128, upper: u128, prefix: Option<BitCount>) -> Address {
        Address::derive(
            Section::from_range_value(
                lower,
                upper,
                self.lower.family(),
                self.lower.segment_count(),
                prefix,
            ),
            String::new(),
        )
    }

    /* ---------------------------------- */

    #[inline]
    pub fn lower(&self) -> &Address {
        &self.lower
    }

    #[inline]
    pub fn upper(&self) -> &Address {
        &self.upper
    }

    #[inline]
    pub fn family(&self) -> AddrFamily {
        self.lower.family()
    }

    #[inline]
    pub fn bit_count(&self) -> BitCount {
        self.lower.bit_count()
    }

    #[inline]
    fn bounds(&self) -> (u128, u128) {
        (self.lower.get_value(), self.upper.get_value())
    }

    pub fn is_multiple(&self) -> bool {
        self.lower.get_value() != self.upper.get_value()
    }

    /// Number of addresses in the range.
    pub fn get_count(&self) -> BigUint {
        let (lo, up) = self.bounds();
        BigUint::from(up - lo) + 1u32
    }

    /// Whether every value of `other` lies within this range.
    pub fn contains_addr(&self, other: &Address) -> bool {
        if other.family() != self.family() || other.segment_count() != self.lower.segment_count()
        {
            return false;
        }
        let (lo, up) = self.bounds();
        lo <= other.get_value() && other.get_upper_value() <= up
    }

    pub fn contains(&self, other: &AddrRange) -> bool {
        if other.family() != self.family() {
            return false;
        }
        let (lo, up) = self.bounds();
        let (olo, oup) = other.bounds();
        lo <= olo && oup <= up
    }

    pub fn overlaps(&self, other: &AddrRange) -> bool {
        if other.family() != self.family() {
            return false;
        }
        let (lo, up) = self.bounds();
        let (olo, oup) = other.bounds();
        lo <= oup && olo <= up
    }

    /// Clip to the overlap; `None` when disjoint.
    pub fn intersect(&self, other: &AddrRange) -> Option<AddrRange> {
        if !self.overlaps(other) {
            return None;
        }
        let (lo, up) = self.bounds();
        let (olo, oup) = other.bounds();
        Some(self.from_values(lo.max(olo), up.min(oup)))
    }

    /// The smallest single range covering both; fails across families.
    pub fn extend(&self, other: &AddrRange) -> Result<AddrRange, AddressError> {
        if other.family() != self.family()
            || other.lower.segment_count() != self.lower.segment_count()
        {
            return Err(AddressError::SizeMismatch {
                key: KEY_SIZE_MISMATCH,
            });
        }
        let (lo, up) = self.bounds();
        let (olo, oup) = other.bounds();
        Ok(self.from_values(lo.min(olo), up.max(oup)))
    }

    /**
    Merge any number of ranges into the minimal sorted list of disjoint
    ranges covering their union. Ranges of different families sort into
    per-family runs and never merge with each other.
    */
    pub fn join(ranges: &[AddrRange]) -> Vec<AddrRange> {
        let mut sorted: Vec<AddrRange> = ranges.to_vec();
        sorted.sort();

        let mut out: Vec<AddrRange> = Vec::with_capacity(sorted.len());
        for r in sorted {
            if let Some(last) = out.last_mut() {
                if last.family() == r.family()
                    && last.lower.segment_count() == r.lower.segment_count()
                {
                    let (_, lup) = last.bounds();
                    let (rlo, rup) = r.bounds();
                    // overlap or adjacency?
                    if rlo <= lup.saturating_add(1) {
                        if rup > lup {
                            *last = last.from_values(last.bounds().0, rup);
                        }
                        continue;
                    }
                }
            }
            out.push(r);
        }
        out
    }

    /// Remove `other`, leaving the 0, 1 or 2 pieces that remain.
    pub fn subtract(&self, other: &AddrRange) -> Vec<AddrRange> {
        if !self.overlaps(other) {
            return vec![self.clone()];
        }
        let (lo, up) = self.bounds();
        let (olo, oup) = other.bounds();
        let mut out: Vec<AddrRange> = Vec::new();
        if olo > lo {
            out.push(self.from_values(lo, olo - 1));
        }
        if oup < up {
            out.push(self.from_values(oup + 1, up));
        }
        out
    }

    /* ---------------------------------- */
    // spanning

    /**
    Decompose into the unique minimal ordered list of prefix-block
    addresses exactly covering the range: repeatedly take the largest
    block aligned at the current lower bound that does not overshoot.
    */
    pub fn span_with_prefix_blocks(&self) -> Vec<Address> {
        let bits: BitCount = self.bit_count();
        let (mut start, end) = self.bounds();

        // full address space special-case
        if start == 0 && end == max_value_u128(bits) {
            return vec![self.make_addr(0, end, Some(0))];
        }

        let mut out: Vec<Address> = Vec::new();
        while start <= end {
            // largest block aligned at 'start'
            let align: u32 = if start == 0 {
                bits
            } else {
                start.trailing_zeros().min(bits)
            };
            // largest block that fits in the remaining length
            let remaining: u128 = end - start + 1;
            let fit: u32 = 127 - remaining.leading_zeros();

            let host: u32 = align.min(fit);
            let prefix: BitCount = bits - host;
            let block_size: u128 = 1u128 << host;
            out.push(self.make_addr(start, start + (block_size - 1), Some(prefix)));

            match start.checked_add(block_size) {
                Some(next) => start = next,
                None => break,
            }
        }
        out
    }

    /**
    Decompose into the minimal ordered list of per-segment-range addresses
    that are each contiguous in integer order. These may span several
    CIDR prefixes apiece, so the list is never longer than the prefix
    block spanning.
    */
    pub fn span_with_sequential_blocks(&self) -> Vec<Address> {
        let n: usize = self.lower.segment_count();
        let lower: Vec<SegInt> = self.lower.section().segments().iter().map(|s| s.lower()).collect();
        let upper: Vec<SegInt> = self.upper.section().segments().iter().map(|s| s.lower()).collect();
        let mut out: Vec<Address> = Vec::new();
        let mut common: Vec<SegInt> = Vec::with_capacity(n);
        self.seq_blocks(&lower, &upper, &mut common, &mut out);
        out
    }

    fn seq_blocks(
        &self,
        lower: &[SegInt],
        upper: &[SegInt],
        common: &mut Vec<SegInt>,
        out: &mut Vec<Address>,
    ) {
        let max: SegInt = self.family().max_segment_value();

        // find the first differing segment
        let mut i: usize = 0;
        while i < lower.len() && lower[i] == upper[i] {
            i += 1;
        }
        if i == lower.len() {
            // single address: common plus the (equal) remaining segments
            let head: usize = common.len();
            common.extend_from_slice(lower);
            out.push(self.addr_from_parts(common, None, 0));
            common.truncate(head);
            return;
        }

        let head: usize = common.len();
        common.extend_from_slice(&lower[..i]);

        let low_tail_zero: bool = lower[i + 1..].iter().all(|&v| v == 0);
        let high_tail_max: bool = upper[i + 1..].iter().all(|&v| v == max);

        let mut mid_lo: SegInt = lower[i];
        let mut mid_hi: SegInt = upper[i];

        if !low_tail_zero {
            // the ragged low end: fix lower[i] and span its tail upward
            common.push(lower[i]);
            let tail_max: Vec<SegInt> = vec![max; lower.len() - i - 1];
            self.seq_blocks(&lower[i + 1..], &tail_max, common, out);
            common.pop();
            mid_lo += 1;
        }
        if !high_tail_max {
            mid_hi -= 1;
        }
        if mid_lo <= mid_hi {
            out.push(self.addr_from_parts(common, Some((mid_lo, mid_hi)), lower.len() - i - 1));
        }
        if !high_tail_max {
            // the ragged high end: fix upper[i] and span its tail downward
            common.push(upper[i]);
            let tail_zero: Vec<SegInt> = vec![0; upper.len() - i - 1];
            self.seq_blocks(&tail_zero, &upper[i + 1..], common, out);
            common.pop();
        }

        common.truncate(head);
    }

    /// Assemble `singles ++ [mid range] ++ full-range tail`.
    fn addr_from_parts(
        &self,
        singles: &[SegInt],
        mid: Option<(SegInt, SegInt)>,
        full_tail: usize,
    ) -> Address {
        let bits: BitCount = self.family().bits_per_segment();
        let max: SegInt = self.family().max_segment_value();
        let mut segs: Vec<Segment> = Vec::with_capacity(self.lower.segment_count());
        for &v in singles {
            segs.push(Segment::derive(v, v, bits, None));
        }
        if let Some((lo, hi)) = mid {
            segs.push(Segment::derive(lo, hi, bits, None));
        }
        for _ in 0..full_tail {
            segs.push(Segment::derive(0, max, bits, None));
        }
        debug_assert_eq!(segs.len(), self.lower.segment_count());
        Address::derive(Section::derive(segs, self.family(), None), String::new())
    }

    /* ---------------------------------- */
    // iteration

    /// Iterate every address in ascending order.
    pub fn iter(&self) -> AddrRangeIter {
        let (lo, up) = self.bounds();
        AddrRangeIter {
            range: self.clone(),
            current: lo,
            end: up,
            step: 1,
            prefix: None,
            done: false,
        }
    }

    /// Iterate the aligned prefix blocks of length `p` covering the range.
    pub fn prefix_block_iter(&self, p: BitCount) -> AddrRangeIter {
        let bits: BitCount = self.bit_count();
        let p: BitCount = p.min(bits);
        let host: BitCount = bits - p;
        let step: u128 = if host >= 128 { u128::MAX } else { 1u128 << host };
        let (lo, up) = self.bounds();
        AddrRangeIter {
            range: self.clone(),
            current: if host >= 128 { 0 } else { lo & !(step - 1) },
            end: up,
            step,
            prefix: Some(p),
            done: false,
        }
    }
}

fn strip(addr: &Address) -> Address {
    Address::derive(addr.section().without_prefix_len(), String::new())
}

/// Iterator over a range, by address or by aligned prefix block.
pub struct AddrRangeIter {
    range: AddrRange,
    current: u128,
    end: u128,
    step: u128,
    prefix: Option<BitCount>,
    done: bool,
}

impl Iterator for AddrRangeIter {
    type Item = Address;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.current > self.end {
            return None;
        }
        let item: Address = match self.prefix {
            None => self.range.make_addr(self.current, self.current, None),
            Some(p) => {
                // a u128::MAX step is the sentinel for the whole 2^128 space
                let upper: u128 = if self.step == u128::MAX {
                    u128::MAX
                } else {
                    self.current.saturating_add(self.step - 1)
                };
                self.range.make_addr(self.current, upper, Some(p))
            }
        };
        match self.current.checked_add(self.step) {
            Some(next) => self.current = next,
            None => self.done = true,
        }
        Some(item)
    }
}

impl PartialOrd for AddrRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AddrRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lower
            .cmp(&other.lower)
            .then_with(|| self.upper.cmp(&other.upper))
    }
}

impl fmt::Display for AddrRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.lower, self.upper)
    }
}

impl FromStr for AddrRange {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once(" -> ")
            .ok_or_else(|| AddressError::parse(KEY_INVALID_RANGE))?;
        AddrRange::new(&a.trim().parse()?, &b.trim().parse()?)
    }
}

impl Serialize for AddrRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AddrRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s: String = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn v4(value: u32) -> Address {
        Address::from_ipv4_value(value, None)
    }

    fn range(lo: u32, up: u32) -> AddrRange {
        AddrRange::new(&v4(lo), &v4(up)).unwrap()
    }

    #[test]
    fn test_new_swaps_and_strips() {
        let r = AddrRange::new(&v4(20), &v4(10)).unwrap();
        assert_eq!(r.lower().get_value(), 10);
        assert_eq!(r.upper().get_value(), 20);
        let prefixed = Address::from_ipv4_value(0x01020304, Some(16));
        let r = AddrRange::new(&prefixed, &prefixed).unwrap();
        assert_eq!(r.lower().prefix_len(), None);
    }

    #[test]
    fn test_count_and_contains() {
        let r = range(0x0a000000, 0x0a0000ff);
        assert_eq!(r.get_count(), BigUint::from(256u32));
        assert!(r.contains_addr(&v4(0x0a000080)));
        assert!(!r.contains_addr(&v4(0x0a000100)));
        assert!(r.contains(&range(0x0a000010, 0x0a000020)));
        assert!(!r.contains(&range(0x0a000010, 0x0a000100)));
    }

    #[test]
    fn test_intersect_and_extend() {
        let a = range(10, 30);
        let b = range(20, 40);
        let both = a.intersect(&b).unwrap();
        assert_eq!(both.lower().get_value(), 20);
        assert_eq!(both.upper().get_value(), 30);
        assert!(a.intersect(&range(31, 40)).is_none());
        let env = a.extend(&range(100, 200)).unwrap();
        assert_eq!(env.lower().get_value(), 10);
        assert_eq!(env.upper().get_value(), 200);
    }

    #[test]
    fn test_join() {
        let joined = AddrRange::join(&[range(10, 20), range(21, 30), range(40, 50), range(45, 60)]);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].lower().get_value(), 10);
        assert_eq!(joined[0].upper().get_value(), 30);
        assert_eq!(joined[1].lower().get_value(), 40);
        assert_eq!(joined[1].upper().get_value(), 60);
    }

    #[test]
    fn test_subtract() {
        let r = range(10, 30);
        assert_eq!(r.subtract(&range(40, 50)), vec![r.clone()]);
        let holes = r.subtract(&range(15, 20));
        assert_eq!(holes.len(), 2);
        assert_eq!(holes[0].upper().get_value(), 14);
        assert_eq!(holes[1].lower().get_value(), 21);
        assert!(r.subtract(&range(0, 100)).is_empty());
        let clipped = r.subtract(&range(0, 15));
        assert_eq!(clipped.len(), 1);
        assert_eq!(clipped[0].lower().get_value(), 16);
    }

    #[test]
    fn test_span_with_prefix_blocks_simple() {
        // 10.0.0.0 - 10.0.0.255 is exactly one /24
        let r = range(0x0a000000, 0x0a0000ff);
        let blocks = r.span_with_prefix_blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].prefix_len(), Some(24));
        assert!(blocks[0].is_prefix_block());
    }

    #[test]
    fn test_span_with_prefix_blocks_unaligned() {
        // 172.16.0.4 - 172.16.0.7 is one /30
        let r = range(0xac100004, 0xac100007);
        let blocks = r.span_with_prefix_blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].prefix_len(), Some(30));

        // 0.0.0.1 - 0.0.0.6: /32 + /31 + /31? no: [1] [2-3] [4-5] [6]
        let r = range(1, 6);
        let blocks = r.span_with_prefix_blocks();
        let descr: Vec<(u128, Option<u32>)> =
            blocks.iter().map(|b| (b.get_value(), b.prefix_len())).collect();
        assert_eq!(
            descr,
            vec![(1, Some(32)), (2, Some(31)), (4, Some(31)), (6, Some(32))]
        );
        // the pieces concatenate exactly
        let mut total = BigUint::from(0u32);
        for b in &blocks {
            total += b.get_count();
        }
        assert_eq!(total, r.get_count());
    }

    #[test]
    fn test_span_wildcard_range() {
        // 1.0.3.4 - 2.255.3.4: badly aligned at both ends
        let r = range(0x01000304, 0x02ff0304);
        let blocks = r.span_with_prefix_blocks();
        assert_eq!(blocks.len(), 32);
        assert_eq!(blocks[0].get_value(), 0x01000304);
        assert_eq!(blocks[0].prefix_len(), Some(30));
        assert_eq!(blocks[31].get_upper_value(), 0x02ff0304);
        // ordered, non-overlapping, exactly covering
        let mut expected: u128 = r.lower().get_value();
        for b in &blocks {
            assert!(b.is_prefix_block());
            assert_eq!(b.get_value(), expected);
            expected = b.get_upper_value() + 1;
        }
        assert_eq!(expected, r.upper().get_value() + 1);
        // no two adjacent blocks merge into a bigger one
        for pair in blocks.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.prefix_len() == b.prefix_len() {
                let size: u128 = a.get_upper_value() - a.get_value() + 1;
                assert!(a.get_value() % (size * 2) != 0 || a.get_upper_value() + 1 != b.get_value());
            }
        }
    }

    #[test]
    fn test_span_full_space() {
        let r = range(0, u32::MAX);
        let blocks = r.span_with_prefix_blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].prefix_len(), Some(0));
    }

    #[test]
    fn test_span_sequential_blocks() {
        // 1.0.3.4 - 2.255.3.4 needs 3 sequential blocks:
        // 1.0.3.4-255.255.255, 1.1-254.*.*, ... wait: lower tail not zero.
        let r = range(0x01000304, 0x02ff0304);
        let blocks = r.span_with_sequential_blocks();
        assert!(!blocks.is_empty());
        // ascending, contiguous, covering
        let mut expected: u128 = r.lower().get_value();
        for b in &blocks {
            assert!(b.is_sequential());
            assert_eq!(b.get_value(), expected);
            expected = b.get_upper_value() + 1;
        }
        assert_eq!(expected, r.upper().get_value() + 1);
        // never more pieces than the CIDR spanning
        assert!(blocks.len() <= r.span_with_prefix_blocks().len());
    }

    #[test]
    fn test_span_sequential_single() {
        let r = range(5, 5);
        let blocks = r.span_with_sequential_blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].get_value(), 5);
        // a clean wildcard range is one block
        let r = range(0x01000000, 0x02ffffff);
        let blocks = r.span_with_sequential_blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].get_value(), 0x01000000);
        assert_eq!(blocks[0].get_upper_value(), 0x02ffffff);
    }

    #[test]
    fn test_iter() {
        let r = range(1, 5);
        let values: Vec<u128> = r.iter().map(|a| a.get_value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_prefix_block_iter() {
        // 10.0.0.10 - 10.0.1.20 covered by /24 blocks: 10.0.0.0/24, 10.0.1.0/24
        let r = range(0x0a00000a, 0x0a000114);
        let blocks: Vec<Address> = r.prefix_block_iter(24).collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].get_value(), 0x0a000000);
        assert_eq!(blocks[1].get_value(), 0x0a000100);
        assert!(blocks.iter().all(|b| b.prefix_len() == Some(24)));
    }

    #[test]
    fn test_mixed_family_rejected() {
        let v6 = Address::from_ipv6_value(1, None);
        assert!(AddrRange::new(&v4(1), &v6).is_err());
    }
}
