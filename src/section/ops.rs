// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Section transformations: masking, prefix manipulation, increment,
//! reversal and splicing. Everything returns a new section.

use super::Section;
use crate::{
    err::AddressError,
    segment::Segment,
    strings::*,
    types::{
        check_bit_count, max_value_u128, network_mask_u128, prefixed_segment_prefix, BitCount,
        PrefixLen, SegInt,
    },
};

impl Section {
    /* ---------------------------------- */
    // masking

    /// Element-wise bitwise AND with a single-valued section, keeping this
    /// section's prefix. Fails when any masked segment range is no longer
    /// an interval.
    pub fn mask(&self, other: &Section) -> Result<Section, AddressError> {
        self.mask_prefixed(other, self.prefix_len())
    }

    /// [Self::mask] with an explicit prefix on the result.
    pub fn mask_prefixed(
        &self,
        other: &Section,
        prefix: PrefixLen,
    ) -> Result<Section, AddressError> {
        let mask_segs: &[Segment] = self.check_mask_operand(other)?;
        let mut segs: Vec<Segment> = Vec::with_capacity(self.segment_count());
        for (seg, m) in self.segments().iter().zip(mask_segs.iter()) {
            segs.push(seg.mask(m.lower())?);
        }
        Ok(Section::derive(segs, self.family(), prefix))
    }

    /// Element-wise bitwise OR with a single-valued section, keeping this
    /// section's prefix.
    pub fn bitwise_or(&self, other: &Section) -> Result<Section, AddressError> {
        self.bitwise_or_prefixed(other, self.prefix_len())
    }

    /// [Self::bitwise_or] with an explicit prefix on the result.
    pub fn bitwise_or_prefixed(
        &self,
        other: &Section,
        prefix: PrefixLen,
    ) -> Result<Section, AddressError> {
        let or_segs: &[Segment] = self.check_mask_operand(other)?;
        let mut segs: Vec<Segment> = Vec::with_capacity(self.segment_count());
        for (seg, o) in self.segments().iter().zip(or_segs.iter()) {
            segs.push(seg.bitwise_or(o.lower())?);
        }
        Ok(Section::derive(segs, self.family(), prefix))
    }

    fn check_mask_operand<'o>(&self, other: &'o Section) -> Result<&'o [Segment], AddressError> {
        if other.segment_count() != self.segment_count()
            || other.bits_per_segment() != self.bits_per_segment()
        {
            return Err(AddressError::SizeMismatch {
                key: KEY_SIZE_MISMATCH,
            });
        }
        if other.is_multiple() {
            return Err(AddressError::incompatible(KEY_MULTIPLE_TO_SINGLE));
        }
        Ok(other.segments())
    }

    /* ---------------------------------- */
    // prefix manipulation

    /// Widen the host portion to the full block of the section prefix.
    /// Without a prefix this is the identity.
    pub fn to_prefix_block(&self) -> Section {
        match self.prefix_len() {
            Some(p) => self.to_prefix_block_len(p),
            None => self.clone(),
        }
    }

    /// Widen the host portion (bits at and after `p`, clamped into range)
    /// to the full block, and set the prefix to `p`.
    pub fn to_prefix_block_len(&self, p: BitCount) -> Section {
        let p: BitCount = check_bit_count(p, self.bit_count());
        let bits: BitCount = self.bits_per_segment();
        let max: SegInt = self.max_segment_value();
        let mut segs: Vec<Segment> = Vec::with_capacity(self.segment_count());
        for (i, seg) in self.segments().iter().enumerate() {
            segs.push(match prefixed_segment_prefix(bits, Some(p), i) {
                None => *seg,
                Some(0) => Segment::derive(0, max, bits, None),
                Some(sp) => {
                    let host: u32 = (1u32 << (bits - sp)) - 1;
                    Segment::derive(
                        (seg.lower() as u32 & !host) as SegInt,
                        (seg.upper() as u32 | host) as SegInt,
                        bits,
                        None,
                    )
                }
            });
        }
        Section::derive(segs, self.family(), Some(p))
    }

    /// Assign a new prefix length (clamped); segment values are unchanged.
    pub fn set_prefix_len(&self, p: BitCount) -> Section {
        Section::derive(self.segments().to_vec(), self.family(), Some(p))
    }

    /// Assign a new prefix length and zero every bit at and after it.
    /// Fails when zeroing a range would leave a non-interval set.
    pub fn set_prefix_len_zeroed(&self, p: BitCount) -> Result<Section, AddressError> {
        let p: BitCount = check_bit_count(p, self.bit_count());
        let bits: BitCount = self.bits_per_segment();
        let mut segs: Vec<Segment> = Vec::with_capacity(self.segment_count());
        for (i, seg) in self.segments().iter().enumerate() {
            segs.push(match prefixed_segment_prefix(bits, Some(p), i) {
                None => *seg,
                Some(sp) => {
                    let net: SegInt = network_mask_u128(bits, sp) as SegInt;
                    seg.mask(net)?
                }
            });
        }
        Ok(Section::derive(segs, self.family(), Some(p)))
    }

    /// Drop the prefix length; values are unchanged.
    pub fn without_prefix_len(&self) -> Section {
        if !self.is_prefixed() {
            return self.clone();
        }
        Section::derive(self.segments().to_vec(), self.family(), None)
    }

    /// When the value set is exactly one prefix block, return the section
    /// prefixed with that block's length.
    pub fn assign_prefix_for_single_block(&self) -> Option<Section> {
        self.prefix_for_single_block().map(|p| self.set_prefix_len(p))
    }

    /// Set the prefix to the smallest length for which the value set
    /// spans complete blocks.
    pub fn assign_min_prefix_for_block(&self) -> Section {
        self.set_prefix_len(self.min_prefix_for_block())
    }

    /* ---------------------------------- */
    // slicing and splicing

    /**
    The segments in `[start, end)` as a new section. Panics when the range
    is out of bounds. The prefix moves with the slice: bits before `start`
    are dropped from it, and it is clamped into the slice's bit count.
    */
    pub fn get_sub_section(&self, start: usize, end: usize) -> Section {
        assert!(start <= end && end <= self.segment_count());
        let bits: BitCount = self.bits_per_segment();
        let skipped: BitCount = bits * start as BitCount;
        let prefix: PrefixLen = self.prefix_len().map(|p| p.saturating_sub(skipped));
        Section::derive(self.segments()[start..end].to_vec(), self.family(), prefix)
    }

    /// Concatenate `other` after this section. The result's prefix is the
    /// first one encountered scanning left to right.
    pub fn append(&self, other: &Section) -> Result<Section, AddressError> {
        self.replace_len(self.segment_count(), self.segment_count(), other, 0, other.segment_count())
    }

    /// Insert `other` before segment `index`.
    pub fn insert(&self, index: usize, other: &Section) -> Result<Section, AddressError> {
        self.replace_len(index, index, other, 0, other.segment_count())
    }

    /// Replace the segments starting at `index` with all of `other`.
    pub fn replace(&self, index: usize, other: &Section) -> Result<Section, AddressError> {
        let end: usize = (index + other.segment_count()).min(self.segment_count());
        self.replace_len(index, end, other, 0, other.segment_count())
    }

    /**
    Replace segments `[start, end)` with `other`'s segments
    `[other_start, other_end)`.

    Panics when either index range is out of bounds; fails when the widths
    differ or the result would exceed the family's segment count. The
    result's prefix is the first prefix encountered scanning the composed
    parts left to right, with later segments forced into the host part.
    */
    pub fn replace_len(
        &self,
        start: usize,
        end: usize,
        other: &Section,
        other_start: usize,
        other_end: usize,
    ) -> Result<Section, AddressError> {
        assert!(start <= end && end <= self.segment_count());
        assert!(other_start <= other_end && other_end <= other.segment_count());
        let bits: BitCount = self.bits_per_segment();
        if other.bits_per_segment() != bits {
            return Err(AddressError::value(
                KEY_MISMATCHED_BIT_SIZE,
                other.bits_per_segment() as u64,
            ));
        }
        let replaced: usize = other_end - other_start;
        let count: usize = self.segment_count() - (end - start) + replaced;
        if count > self.family().max_segment_count() {
            return Err(AddressError::value(KEY_SEGMENT_COUNT, count as u64));
        }

        let mut segs: Vec<Segment> = Vec::with_capacity(count);
        segs.extend_from_slice(&self.segments()[..start]);
        segs.extend_from_slice(&other.segments()[other_start..other_end]);
        segs.extend_from_slice(&self.segments()[end..]);

        let head_bits: BitCount = bits * start as BitCount;
        let mid_bits: BitCount = bits * replaced as BitCount;
        let prefix: PrefixLen = match self.prefix_len() {
            Some(p) if p <= head_bits => Some(p),
            this_prefix => {
                // other's prefix, clipped into the replaced window
                let mid: Option<BitCount> = other.prefix_len().and_then(|op| {
                    let w_start: BitCount = bits * other_start as BitCount;
                    let w_end: BitCount = bits * other_end as BitCount;
                    if op <= w_start {
                        Some(0)
                    } else if op <= w_end {
                        Some(op - w_start)
                    } else {
                        None
                    }
                });
                match mid {
                    Some(rel) => Some(head_bits + rel),
                    None => this_prefix.map(|p| {
                        let tail_start: BitCount = bits * end as BitCount;
                        head_bits + mid_bits + p.saturating_sub(tail_start)
                    }),
                }
            }
        };
        Ok(Section::derive(segs, self.family(), prefix))
    }

    /* ---------------------------------- */
    // increment

    /**
    Walk the value set as a lexicographic enumeration (most significant
    segment slowest) and advance `n` steps from the lower bound; `n` past
    the set continues in integer order from the upper bound, negative `n`
    descends below the lower bound. `None` on over/underflow of the
    section's bit width.
    */
    pub fn increment(&self, n: i64) -> Option<Section> {
        if n == 0 {
            return Some(self.clone());
        }
        let max: u128 = max_value_u128(self.bit_count());
        if !self.is_multiple() {
            let value: u128 = self.get_value();
            let next: u128 = add_signed(value, n, max)?;
            return Some(self.with_value(next));
        }
        if n > 0 {
            let up: u128 = n as u128;
            let count_m1: u128 = self.count_minus_one();
            if up <= count_m1 {
                return Some(self.nth_value(up));
            }
            let over: u128 = up - count_m1;
            let upper: u128 = self.get_upper_value();
            if over > max - upper {
                return None;
            }
            Some(self.with_value(upper + over))
        } else {
            let down: u128 = n.unsigned_abs() as u128;
            let lower: u128 = self.get_value();
            if down > lower {
                return None;
            }
            Some(self.with_value(lower - down))
        }
    }

    /// Advance from the boundary: from the upper bound for positive `n`,
    /// from the lower for negative.
    pub fn increment_boundary(&self, n: i64) -> Option<Section> {
        if n == 0 {
            Some(self.clone())
        } else if n < 0 {
            self.get_lower().increment(n)
        } else {
            self.get_upper().increment(n)
        }
    }

    fn with_value(&self, value: u128) -> Section {
        Section::from_value(value, self.family(), self.segment_count(), self.prefix_len())
    }

    /// The `idx`-th single value of the enumeration, row-major with the
    /// last segment fastest.
    fn nth_value(&self, idx: u128) -> Section {
        let mut idx: u128 = idx;
        let n: usize = self.segment_count();
        let bits: BitCount = self.bits_per_segment();
        let mut values: Vec<SegInt> = vec![0; n];
        for i in (0..n).rev() {
            let seg: &Segment = self.get_segment(i);
            let count: u128 = seg.count() as u128;
            values[i] = seg.lower() + (idx % count) as SegInt;
            idx /= count;
        }
        let segs: Vec<Segment> = values
            .into_iter()
            .map(|v| Segment::derive(v, v, bits, None))
            .collect();
        Section::derive(segs, self.family(), self.prefix_len())
    }

    /* ---------------------------------- */
    // reversal

    /// Reverse the order of the segments. The prefix does not survive.
    pub fn reverse_segments(&self) -> Section {
        let mut segs: Vec<Segment> = self.segments().to_vec();
        segs.reverse();
        Section::derive(segs, self.family(), None)
    }

    /// Reverse every bit of the value (within each byte when `per_byte`).
    /// Fails when a multi-valued segment does not reverse to an interval.
    pub fn reverse_bits(&self, per_byte: bool) -> Result<Section, AddressError> {
        let mut segs: Vec<Segment> = Vec::with_capacity(self.segment_count());
        for seg in self.segments().iter().rev() {
            segs.push(seg.reverse_bits(per_byte)?);
        }
        Ok(Section::derive(segs, self.family(), None))
    }

    /// Reverse the byte order of the value.
    pub fn reverse_bytes(&self) -> Result<Section, AddressError> {
        let mut segs: Vec<Segment> = Vec::with_capacity(self.segment_count());
        for seg in self.segments().iter().rev() {
            segs.push(seg.reverse_bytes()?);
        }
        Ok(Section::derive(segs, self.family(), None))
    }

    /* ---------------------------------- */
    // bit runs and mask recognition

    /// Length of the leading run of ones (or zeros) in the lower value.
    pub fn get_leading_bit_count(&self, ones: bool) -> BitCount {
        let bits: BitCount = self.bit_count();
        let max: u128 = max_value_u128(bits);
        let v: u128 = if ones {
            self.get_value()
        } else {
            !self.get_value() & max
        };
        ((v << (128 - bits)).leading_ones()).min(bits)
    }

    /// Length of the trailing run of ones (or zeros) in the lower value.
    pub fn get_trailing_bit_count(&self, ones: bool) -> BitCount {
        let bits: BitCount = self.bit_count();
        let v: u128 = self.get_value();
        if ones {
            v.trailing_ones().min(bits)
        } else {
            v.trailing_zeros().min(bits)
        }
    }

    /**
    Recognize this section as a network mask (all ones then all zeros) or,
    with `network == false`, a host mask (all zeros then all ones), and
    return the implied prefix length.
    */
    pub fn get_block_mask_prefix_len(&self, network: bool) -> Option<BitCount> {
        if self.is_multiple() {
            return None;
        }
        let bits: BitCount = self.bit_count();
        let v: u128 = self.get_value();
        if network {
            let lead: BitCount = self.get_leading_bit_count(true);
            (v == network_mask_u128(bits, lead)).then_some(lead)
        } else {
            let lead: BitCount = self.get_leading_bit_count(false);
            (v == max_value_u128(bits) & !network_mask_u128(bits, lead)).then_some(lead)
        }
    }

    /// Element-wise overlap clip; `None` when any segment pair is
    /// disjoint. Keeps this section's prefix.
    pub fn intersect(&self, other: &Section) -> Option<Section> {
        if self.family() != other.family() || self.segment_count() != other.segment_count() {
            return None;
        }
        let mut segs: Vec<Segment> = Vec::with_capacity(self.segment_count());
        for (a, b) in self.segments().iter().zip(other.segments().iter()) {
            segs.push(a.intersect(b)?);
        }
        Some(Section::derive(segs, self.family(), self.prefix_len()))
    }
}

/// `value + n` within `[0, max]`, or `None`.
#[inline]
fn add_signed(value: u128, n: i64, max: u128) -> Option<u128> {
    if n >= 0 {
        let up: u128 = n as u128;
        if up > max - value {
            None
        } else {
            Some(value + up)
        }
    } else {
        let down: u128 = n.unsigned_abs() as u128;
        if down > value {
            None
        } else {
            Some(value - down)
        }
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AddrFamily;

    fn v4(vals: [(SegInt, SegInt); 4], prefix: PrefixLen) -> Section {
        let segs: Vec<Segment> = vals
            .iter()
            .map(|&(l, u)| Segment::new(l, u, 8, None).unwrap())
            .collect();
        Section::new(segs, AddrFamily::V4, prefix).unwrap()
    }

    fn v4_single(vals: [SegInt; 4], prefix: PrefixLen) -> Section {
        v4([(vals[0], vals[0]), (vals[1], vals[1]), (vals[2], vals[2]), (vals[3], vals[3])], prefix)
    }

    #[test]
    fn test_mask() {
        let s = v4_single([1, 2, 3, 4], None);
        let m = v4_single([255, 255, 0, 255], None);
        let masked = s.mask(&m).unwrap();
        assert_eq!(masked.get_value(), 0x01020004);
    }

    #[test]
    fn test_mask_range_failure() {
        // full-range segment masked by high-contiguous bits has gaps
        let s = v4([(1, 1), (0, 255), (3, 3), (4, 4)], None);
        let m = v4_single([255, 0xf0, 255, 255], None);
        assert!(s.mask(&m).is_err());
    }

    #[test]
    fn test_bitwise_or_preserves_prefix() {
        let s = v4_single([1, 2, 0, 0], Some(16));
        let o = v4_single([0, 0, 3, 4], None);
        let ored = s.bitwise_or(&o).unwrap();
        assert_eq!(ored.get_value(), 0x01020304);
        assert_eq!(ored.prefix_len(), Some(16));
    }

    #[test]
    fn test_to_prefix_block() {
        let s = v4_single([10, 11, 12, 13], Some(16));
        let block = s.to_prefix_block();
        assert_eq!(block.get_value(), 0x0a0b0000);
        assert_eq!(block.get_upper_value(), 0x0a0bffff);
        assert_eq!(block.prefix_len(), Some(16));
        assert!(block.is_prefix_block());
        // straddling a segment
        let s = v4_single([10, 11, 12, 13], Some(20));
        let block = s.to_prefix_block();
        assert_eq!(block.get_value(), 0x0a0b0000);
        assert_eq!(block.get_upper_value(), 0x0a0b0fff);
    }

    #[test]
    fn test_prefix_block_len_clamps() {
        let s = v4_single([1, 2, 3, 4], None);
        let block = s.to_prefix_block_len(99);
        assert_eq!(block.prefix_len(), Some(32));
        assert_eq!(block.get_value(), 0x01020304);
    }

    #[test]
    fn test_set_prefix_len_zeroed() {
        let s = v4_single([1, 2, 3, 4], None);
        let z = s.set_prefix_len_zeroed(16).unwrap();
        assert_eq!(z.get_value(), 0x01020000);
        assert_eq!(z.prefix_len(), Some(16));
        // zeroing a full-range segment down to part of it has gaps
        let r = v4([(1, 1), (2, 2), (0, 255), (0, 0)], None);
        assert!(r.set_prefix_len_zeroed(20).is_err());
        // but zeroing at the segment boundary is clean
        assert!(r.set_prefix_len_zeroed(16).is_ok());
    }

    #[test]
    fn test_assign_prefix_for_single_block() {
        let s = v4([(16, 31), (0, 255), (0, 255), (0, 255)], None);
        let assigned = s.assign_prefix_for_single_block().unwrap();
        assert_eq!(assigned.prefix_len(), Some(4));
        let not_block = v4([(1, 2), (0, 255), (0, 255), (0, 255)], None);
        assert!(not_block.assign_prefix_for_single_block().is_none());
    }

    #[test]
    fn test_sub_section_prefix() {
        let s = v4_single([1, 2, 3, 4], Some(20));
        let tail = s.get_sub_section(2, 4);
        assert_eq!(tail.segment_count(), 2);
        assert_eq!(tail.prefix_len(), Some(4));
        let head = s.get_sub_section(0, 2);
        assert_eq!(head.prefix_len(), Some(16));
        let unprefixed = v4_single([1, 2, 3, 4], None);
        assert_eq!(unprefixed.get_sub_section(1, 3).prefix_len(), None);
    }

    #[test]
    fn test_append_prefix_rule() {
        let head = v4_single([1, 2, 3, 4], Some(8)).get_sub_section(0, 2);
        let tail = v4_single([5, 6, 7, 8], None).get_sub_section(0, 2);
        let joined = head.append(&tail).unwrap();
        assert_eq!(joined.segment_count(), 4);
        assert_eq!(joined.prefix_len(), Some(8));
        assert_eq!(joined.get_value(), 0x01020506);

        // prefix from the appended part shifts right
        let head = v4_single([1, 2, 0, 0], None).get_sub_section(0, 2);
        let tail = v4_single([3, 4, 0, 0], Some(4)).get_sub_section(0, 2);
        let joined = head.append(&tail).unwrap();
        assert_eq!(joined.prefix_len(), Some(20));
    }

    #[test]
    fn test_replace_len() {
        let s = v4_single([1, 2, 3, 4], None);
        let other = v4_single([9, 9, 9, 9], None);
        let replaced = s.replace_len(1, 3, &other, 0, 2).unwrap();
        assert_eq!(replaced.get_value(), 0x01090904);
        // too many segments
        assert!(s.insert(2, &v4_single([9, 9, 9, 9], None)).is_err());
    }

    #[test]
    fn test_increment_single() {
        let s = v4_single([0, 0, 0, 255], None);
        assert_eq!(s.increment(1).unwrap().get_value(), 0x00000100);
        assert_eq!(s.increment(-255).unwrap().get_value(), 0);
        assert!(s.increment(-256).is_none());
        let max = v4_single([255, 255, 255, 255], None);
        assert!(max.increment(1).is_none());
    }

    #[test]
    fn test_increment_multiple() {
        // 1-2.0-255.3.4: count 512
        let s = v4([(1, 2), (0, 255), (3, 3), (4, 4)], None);
        assert_eq!(s.increment(0).unwrap(), s);
        assert_eq!(s.increment(1).unwrap().get_value(), 0x01010304);
        assert_eq!(s.increment(255).unwrap().get_value(), 0x01ff0304);
        assert_eq!(s.increment(256).unwrap().get_value(), 0x02000304);
        assert_eq!(s.increment(511).unwrap().get_value(), 0x02ff0304);
        // past the end: continues from the upper bound
        assert_eq!(s.increment(512).unwrap().get_value(), 0x02ff0305);
        // below the start
        assert_eq!(s.increment(-1).unwrap().get_value(), 0x01000303);
    }

    #[test]
    fn test_reverse_segments() {
        let s = v4_single([1, 2, 3, 4], Some(16));
        let rev = s.reverse_segments();
        assert_eq!(rev.get_value(), 0x04030201);
        assert_eq!(rev.prefix_len(), None);
    }

    #[test]
    fn test_reverse_bits_and_bytes() {
        let s = v4_single([1, 2, 3, 4], None);
        assert_eq!(s.reverse_bytes().unwrap().get_value(), 0x04030201);
        assert_eq!(s.reverse_bits(false).unwrap().get_value(), 0x20c04080);
        let r = v4([(1, 2), (0, 0), (0, 0), (0, 0)], None);
        assert!(r.reverse_bits(false).is_err());
    }

    #[test]
    fn test_bit_runs_and_mask_recognition() {
        let netmask = v4_single([255, 255, 240, 0], None);
        assert_eq!(netmask.get_leading_bit_count(true), 20);
        assert_eq!(netmask.get_trailing_bit_count(false), 12);
        assert_eq!(netmask.get_block_mask_prefix_len(true), Some(20));
        assert_eq!(netmask.get_block_mask_prefix_len(false), None);

        let hostmask = v4_single([0, 0, 15, 255], None);
        assert_eq!(hostmask.get_block_mask_prefix_len(false), Some(20));

        let not_mask = v4_single([255, 0, 255, 0], None);
        assert_eq!(not_mask.get_block_mask_prefix_len(true), None);
    }

    #[test]
    fn test_intersect() {
        let a = v4([(1, 5), (0, 255), (0, 9), (4, 4)], None);
        let b = v4([(3, 8), (7, 7), (5, 20), (4, 4)], None);
        let both = a.intersect(&b).unwrap();
        assert_eq!(both.get_value(), 0x03070504);
        assert_eq!(both.get_upper_value(), 0x05070904);
        let disjoint = v4([(9, 9), (0, 255), (0, 9), (4, 4)], None);
        assert!(a.intersect(&disjoint).is_none());
    }
}
