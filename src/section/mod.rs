// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! An ordered run of uniform-width segments plus an optional whole-section
//! prefix length, with lazily cached derived values.
//!
//! Sections are immutable; every operation returns a new section. The
//! section prefix is kept aligned with per-segment prefixes: the segment
//! containing the prefix boundary carries `prefix % bits_per_segment`,
//! later segments carry `Some(0)`, earlier ones `None`.

mod iter;
mod ops;

pub use iter::{SectionIter, SectionPrefixIter};

use crate::{
    err::AddressError,
    segment::Segment,
    strings::*,
    types::{
        check_prefix, prefixed_segment_prefix, AddrFamily, BitCount, PrefixLen, SegInt,
    },
};
use num_bigint::BigUint;
use once_cell::sync::OnceCell;
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// A sequence of segments of one address family, possibly prefixed.
#[derive(Clone)]
pub struct Section {
    inner: Arc<SectionInner>,
}

struct SectionInner {
    segs: Vec<Segment>,
    family: AddrFamily,
    prefix: PrefixLen,
    multiple: bool,
    cache: SectionCache,
}

/// Idempotent one-shot cache slots. Publication may race; the first value
/// wins and is never overwritten.
#[derive(Default)]
pub(crate) struct SectionCache {
    lower: OnceCell<Section>,
    upper: OnceCell<Section>,
    bytes: OnceCell<Box<[u8]>>,
    upper_bytes: OnceCell<Box<[u8]>>,
    count: OnceCell<BigUint>,
    prefix_count: OnceCell<BigUint>,
    min_block_prefix: OnceCell<BitCount>,
    single_block_prefix: OnceCell<Option<BitCount>>,
    pub(crate) strings: StringCache,
}

/// Per-form rendered string slots.
#[derive(Default)]
pub(crate) struct StringCache {
    pub(crate) canonical: OnceCell<String>,
    pub(crate) normalized: OnceCell<String>,
    pub(crate) compressed: OnceCell<String>,
    pub(crate) full: OnceCell<String>,
    pub(crate) canonical_wildcard: OnceCell<String>,
    pub(crate) normalized_wildcard: OnceCell<String>,
    pub(crate) compressed_wildcard: OnceCell<String>,
    pub(crate) sql_wildcard: OnceCell<Result<String, AddressError>>,
    pub(crate) segmented_binary: OnceCell<String>,
    pub(crate) unc: OnceCell<String>,
    pub(crate) hex: OnceCell<Result<String, AddressError>>,
    pub(crate) hex_prefixed: OnceCell<Result<String, AddressError>>,
    pub(crate) octal: OnceCell<Result<String, AddressError>>,
    pub(crate) octal_prefixed: OnceCell<Result<String, AddressError>>,
    pub(crate) binary: OnceCell<Result<String, AddressError>>,
    pub(crate) binary_prefixed: OnceCell<Result<String, AddressError>>,
    pub(crate) reverse_dns: OnceCell<Result<String, AddressError>>,
    pub(crate) base85: OnceCell<Result<String, AddressError>>,
    pub(crate) mixed: OnceCell<Result<String, AddressError>>,
}

impl Section {
    /**
    Validating constructor.

    Segment widths must match the family. When `prefix` is given it
    overrides any per-segment prefixes; otherwise a section prefix is
    derived from the per-segment ones, which must align (first prefixed
    segment at `p % bits`, all later ones at 0) or the construction fails
    with an inconsistent-prefix error.
    */
    pub fn new(
        segs: Vec<Segment>,
        family: AddrFamily,
        prefix: PrefixLen,
    ) -> Result<Section, AddressError> {
        let bits: BitCount = family.bits_per_segment();
        if segs.len() > family.max_segment_count() {
            return Err(AddressError::value(KEY_SEGMENT_COUNT, segs.len() as u64));
        }
        for seg in &segs {
            if seg.bit_count() != bits {
                return Err(AddressError::value(
                    KEY_MISMATCHED_BIT_SIZE,
                    seg.bit_count() as u64,
                ));
            }
        }
        let total: BitCount = bits * segs.len() as BitCount;
        let prefix: PrefixLen = match prefix {
            Some(p) => {
                if p > total {
                    return Err(AddressError::value(KEY_PREFIX_SIZE, p as u64));
                }
                Some(p)
            }
            None => derive_prefix(&segs, bits, total)?,
        };
        Ok(Section::derive(segs, family, prefix))
    }

    /// Non-validating constructor; aligns per-segment prefixes with the
    /// section prefix.
    pub(crate) fn derive(segs: Vec<Segment>, family: AddrFamily, prefix: PrefixLen) -> Section {
        let bits: BitCount = family.bits_per_segment();
        let prefix: PrefixLen = check_prefix(prefix, bits * segs.len() as BitCount);
        let mut normalized: Vec<Segment> = Vec::with_capacity(segs.len());
        let mut multiple: bool = false;
        for (i, seg) in segs.iter().enumerate() {
            multiple |= seg.is_multiple();
            normalized.push(Segment::derive(
                seg.lower(),
                seg.upper(),
                bits,
                prefixed_segment_prefix(bits, prefix, i),
            ));
        }
        Section {
            inner: Arc::new(SectionInner {
                segs: normalized,
                family,
                prefix,
                multiple,
                cache: SectionCache::default(),
            }),
        }
    }

    /// Build a single-valued section from an integer value.
    pub(crate) fn from_value(
        value: u128,
        family: AddrFamily,
        seg_count: usize,
        prefix: PrefixLen,
    ) -> Section {
        Section::from_range_value(value, value, family, seg_count, prefix)
    }

    /// Build a section from a pair of integer bounds. The caller must
    /// ensure the bounds decompose into per-segment ranges (prefix blocks
    /// and single values always do).
    pub(crate) fn from_range_value(
        lower: u128,
        upper: u128,
        family: AddrFamily,
        seg_count: usize,
        prefix: PrefixLen,
    ) -> Section {
        let bits: BitCount = family.bits_per_segment();
        let mut segs: Vec<Segment> = Vec::with_capacity(seg_count);
        for i in 0..seg_count {
            let shift: BitCount = bits * (seg_count - 1 - i) as BitCount;
            let mask: u128 = (1u128 << bits) - 1;
            segs.push(Segment::derive(
                ((lower >> shift) & mask) as SegInt,
                ((upper >> shift) & mask) as SegInt,
                bits,
                None,
            ));
        }
        Section::derive(segs, family, prefix)
    }

    /* ---------------------------------- */
    // accessors

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.inner.segs.len()
    }

    /// Panics when `i` is out of range.
    #[inline]
    pub fn get_segment(&self, i: usize) -> &Segment {
        &self.inner.segs[i]
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.inner.segs
    }

    #[inline]
    pub fn family(&self) -> AddrFamily {
        self.inner.family
    }

    #[inline]
    pub fn prefix_len(&self) -> PrefixLen {
        self.inner.prefix
    }

    #[inline]
    pub fn is_prefixed(&self) -> bool {
        self.inner.prefix.is_some()
    }

    /// Whether the value set has more than one member.
    #[inline]
    pub fn is_multiple(&self) -> bool {
        self.inner.multiple
    }

    #[inline]
    pub fn bits_per_segment(&self) -> BitCount {
        self.inner.family.bits_per_segment()
    }

    #[inline]
    pub fn bit_count(&self) -> BitCount {
        self.bits_per_segment() * self.segment_count() as BitCount
    }

    #[inline]
    pub fn byte_count(&self) -> usize {
        (self.bit_count() / 8) as usize
    }

    #[inline]
    pub fn max_segment_value(&self) -> SegInt {
        self.inner.family.max_segment_value()
    }

    pub fn is_zero(&self) -> bool {
        self.inner.segs.iter().all(|s| s.is_zero())
    }

    pub fn includes_zero(&self) -> bool {
        self.inner.segs.iter().all(|s| s.lower() == 0)
    }

    pub fn is_max(&self) -> bool {
        let max: SegInt = self.max_segment_value();
        self.inner.segs.iter().all(|s| s.lower() == max && s.upper() == max)
    }

    pub fn includes_max(&self) -> bool {
        let max: SegInt = self.max_segment_value();
        self.inner.segs.iter().all(|s| s.upper() == max)
    }

    pub fn is_full_range(&self) -> bool {
        self.inner.segs.iter().all(|s| s.is_full_range())
    }

    /**
    Whether the value set is contiguous in integer order: after the first
    multi-valued segment every later segment must span its full range.
    */
    pub fn is_sequential(&self) -> bool {
        let mut seen_multiple: bool = false;
        for seg in &self.inner.segs {
            if seen_multiple && !seg.is_full_range() {
                return false;
            }
            seen_multiple |= seg.is_multiple();
        }
        true
    }

    /* ---------------------------------- */
    // values, bytes, counts

    /// The lowest contained value as an integer (sections are at most
    /// 128 bits).
    pub fn get_value(&self) -> u128 {
        let bits: BitCount = self.bits_per_segment();
        self.inner
            .segs
            .iter()
            .fold(0u128, |acc, s| (acc << bits) | s.lower() as u128)
    }

    /// The highest contained value as an integer.
    pub fn get_upper_value(&self) -> u128 {
        let bits: BitCount = self.bits_per_segment();
        self.inner
            .segs
            .iter()
            .fold(0u128, |acc, s| (acc << bits) | s.upper() as u128)
    }

    /// [Self::get_value] as a big integer.
    pub fn get_big_value(&self) -> BigUint {
        BigUint::from(self.get_value())
    }

    /// [Self::get_upper_value] as a big integer.
    pub fn get_big_upper_value(&self) -> BigUint {
        BigUint::from(self.get_upper_value())
    }

    /// The size of the value set. Exceeds `u128` only for the full
    /// 128-bit space, hence the big integer.
    pub fn get_count(&self) -> BigUint {
        self.inner
            .cache
            .count
            .get_or_init(|| {
                self.inner
                    .segs
                    .iter()
                    .fold(BigUint::from(1u32), |acc, s| acc * BigUint::from(s.count()))
            })
            .clone()
    }

    /// The value-set size minus one, saturating at `u128::MAX` (which is
    /// only reached by the full 128-bit space).
    pub(crate) fn count_minus_one(&self) -> u128 {
        let mut acc: u128 = 1;
        for seg in &self.inner.segs {
            match acc.checked_mul(seg.count() as u128) {
                Some(v) => acc = v,
                None => return u128::MAX,
            }
        }
        acc - 1
    }

    /// Number of distinct prefixes in the value set, under the section
    /// prefix (the full count when unprefixed).
    pub fn get_prefix_count(&self) -> BigUint {
        self.inner
            .cache
            .prefix_count
            .get_or_init(|| match self.inner.prefix {
                None => self.get_count(),
                Some(p) => self.get_prefix_count_len(p),
            })
            .clone()
    }

    /// Number of distinct prefixes of length `p` in the value set.
    pub fn get_prefix_count_len(&self, p: BitCount) -> BigUint {
        let bits: BitCount = self.bits_per_segment();
        let mut acc: BigUint = BigUint::from(1u32);
        for (i, seg) in self.inner.segs.iter().enumerate() {
            let start: BitCount = bits * i as BitCount;
            if p <= start {
                break;
            }
            if p >= start + bits {
                acc *= BigUint::from(seg.count());
            } else {
                let shift: BitCount = start + bits - p;
                let lo: u32 = (seg.lower() as u32) >> shift;
                let hi: u32 = (seg.upper() as u32) >> shift;
                acc *= BigUint::from(hi - lo + 1);
            }
        }
        acc
    }

    /// Big-endian bytes of the lowest value.
    pub fn get_bytes(&self) -> &[u8] {
        self.inner
            .cache
            .bytes
            .get_or_init(|| self.build_bytes(false))
    }

    /// Big-endian bytes of the highest value.
    pub fn get_upper_bytes(&self) -> &[u8] {
        self.inner
            .cache
            .upper_bytes
            .get_or_init(|| self.build_bytes(true))
    }

    fn build_bytes(&self, upper: bool) -> Box<[u8]> {
        let mut out: Vec<u8> = Vec::with_capacity(self.byte_count());
        for seg in &self.inner.segs {
            let v: SegInt = if upper { seg.upper() } else { seg.lower() };
            if self.bits_per_segment() == 16 {
                out.push((v >> 8) as u8);
            }
            out.push((v & 0xff) as u8);
        }
        out.into_boxed_slice()
    }

    /// Copy the lowest value into a caller-supplied buffer, which must be
    /// exactly [Self::byte_count] long.
    pub fn copy_bytes(&self, buf: &mut [u8]) -> Result<(), AddressError> {
        if buf.len() != self.byte_count() {
            return Err(AddressError::SizeMismatch {
                key: KEY_SIZE_MISMATCH,
            });
        }
        buf.copy_from_slice(self.get_bytes());
        Ok(())
    }

    /* ---------------------------------- */
    // bounds

    /// The single-valued section holding the lowest contained value.
    pub fn get_lower(&self) -> Section {
        if !self.is_multiple() {
            // caching would put a cycle of this section inside itself
            return self.clone();
        }
        self.inner
            .cache
            .lower
            .get_or_init(|| {
                let segs: Vec<Segment> = self
                    .inner
                    .segs
                    .iter()
                    .map(|s| Segment::derive(s.lower(), s.lower(), s.bit_count(), s.prefix_len()))
                    .collect();
                Section::derive(segs, self.inner.family, self.inner.prefix)
            })
            .clone()
    }

    /// The single-valued section holding the highest contained value.
    pub fn get_upper(&self) -> Section {
        if !self.is_multiple() {
            return self.clone();
        }
        self.inner
            .cache
            .upper
            .get_or_init(|| {
                let segs: Vec<Segment> = self
                    .inner
                    .segs
                    .iter()
                    .map(|s| Segment::derive(s.upper(), s.upper(), s.bit_count(), s.prefix_len()))
                    .collect();
                Section::derive(segs, self.inner.family, self.inner.prefix)
            })
            .clone()
    }

    /* ---------------------------------- */
    // containment and block classification

    /// Value containment: every address in `other` is in `self`. Prefix
    /// lengths play no part.
    pub fn contains(&self, other: &Section) -> bool {
        if Arc::ptr_eq(&self.inner, &other.inner) {
            return true;
        }
        self.inner.family == other.inner.family
            && self.segment_count() == other.segment_count()
            && self
                .inner
                .segs
                .iter()
                .zip(other.inner.segs.iter())
                .all(|(a, b)| a.contains(b))
    }

    pub fn overlaps(&self, other: &Section) -> bool {
        self.inner.family == other.inner.family
            && self.segment_count() == other.segment_count()
            && self
                .inner
                .segs
                .iter()
                .zip(other.inner.segs.iter())
                .all(|(a, b)| a.overlaps(b))
    }

    /**
    Whether the value set includes every address of every prefix block of
    length `p` it touches: the segment containing bit `p` must cover full
    blocks and all later segments must be full-range. Earlier segments may
    hold any range.
    */
    pub fn contains_prefix_block(&self, p: BitCount) -> bool {
        let bits: BitCount = self.bits_per_segment();
        let p: BitCount = p.min(self.bit_count());
        for (i, seg) in self.inner.segs.iter().enumerate() {
            let start: BitCount = bits * i as BitCount;
            if p <= start {
                if !seg.is_full_range() {
                    return false;
                }
            } else if p < start + bits && !seg.contains_prefix_block(p - start) {
                return false;
            }
        }
        true
    }

    /// Whether the value set is exactly one prefix block of length `p`.
    pub fn contains_single_prefix_block(&self, p: BitCount) -> bool {
        let bits: BitCount = self.bits_per_segment();
        let p: BitCount = p.min(self.bit_count());
        for (i, seg) in self.inner.segs.iter().enumerate() {
            let start: BitCount = bits * i as BitCount;
            if p <= start {
                if !seg.is_full_range() {
                    return false;
                }
            } else if p >= start + bits {
                if seg.is_multiple() {
                    return false;
                }
            } else if !seg.contains_single_prefix_block(p - start) {
                return false;
            }
        }
        true
    }

    /// Whether this is prefixed and spans exactly the blocks of its prefix.
    pub fn is_prefix_block(&self) -> bool {
        match self.inner.prefix {
            Some(p) => self.contains_prefix_block(p),
            None => false,
        }
    }

    /// Whether this is prefixed and is a single block of its prefix.
    pub fn is_single_prefix_block(&self) -> bool {
        match self.inner.prefix {
            Some(p) => self.contains_single_prefix_block(p),
            None => false,
        }
    }

    /// Smallest `p` such that [Self::contains_prefix_block] holds; the bit
    /// count when only the degenerate `p == bit_count` qualifies.
    pub fn min_prefix_for_block(&self) -> BitCount {
        *self.inner.cache.min_block_prefix.get_or_init(|| {
            let bits: BitCount = self.bits_per_segment();
            let mut total: BitCount = self.bit_count();
            for seg in self.inner.segs.iter().rev() {
                let sp: BitCount = seg.min_prefix_for_block();
                if sp == bits {
                    break;
                }
                total -= bits - sp;
                if sp != 0 {
                    break;
                }
            }
            total
        })
    }

    /// The `p` for which the value set is exactly one prefix block, if any.
    pub fn prefix_for_single_block(&self) -> Option<BitCount> {
        *self.inner.cache.single_block_prefix.get_or_init(|| {
            let bits: BitCount = self.bits_per_segment();
            let n: usize = self.segment_count();
            let mut total: BitCount = 0;
            for i in 0..n {
                let seg: &Segment = &self.inner.segs[i];
                let sp: BitCount = seg.prefix_for_single_block()?;
                if !seg.is_multiple() {
                    total += bits;
                    continue;
                }
                for later in &self.inner.segs[i + 1..] {
                    if !later.is_full_range() {
                        return None;
                    }
                }
                return Some(total + sp);
            }
            Some(total)
        })
    }

    pub(crate) fn cache(&self) -> &SectionCache {
        &self.inner.cache
    }
}

/* ---------------------------------- */

/// Section prefix implied by per-segment prefixes, validated for alignment.
fn derive_prefix(
    segs: &[Segment],
    bits: BitCount,
    total: BitCount,
) -> Result<PrefixLen, AddressError> {
    let mut found: PrefixLen = None;
    for (i, seg) in segs.iter().enumerate() {
        match found {
            None => {
                if let Some(sp) = seg.prefix_len() {
                    found = Some(bits * i as BitCount + sp);
                }
            }
            Some(_) => {
                // everything after the prefix boundary must be host
                if seg.prefix_len() != Some(0) {
                    return Err(AddressError::InconsistentPrefix {
                        key: KEY_INCONSISTENT_PREFIXES,
                    });
                }
            }
        }
    }
    Ok(check_prefix(found, total))
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.inner, &other.inner) {
            return true;
        }
        self.inner.family == other.inner.family
            && self.inner.prefix == other.inner.prefix
            && self.inner.segs == other.inner.segs
    }
}

impl Eq for Section {}

impl Hash for Section {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.family.hash(state);
        self.inner.prefix.hash(state);
        self.inner.segs.hash(state);
    }
}

impl PartialOrd for Section {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Section {
    /// Total order: family, then segment count, then lower bounds, then
    /// upper bounds, most significant segment first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner
            .family
            .cmp(&other.inner.family)
            .then_with(|| self.segment_count().cmp(&other.segment_count()))
            .then_with(|| {
                for (a, b) in self.inner.segs.iter().zip(other.inner.segs.iter()) {
                    match a.lower().cmp(&b.lower()) {
                        Ordering::Equal => {}
                        ord => return ord,
                    }
                }
                Ordering::Equal
            })
            .then_with(|| {
                for (a, b) in self.inner.segs.iter().zip(other.inner.segs.iter()) {
                    match a.upper().cmp(&b.upper()) {
                        Ordering::Equal => {}
                        ord => return ord,
                    }
                }
                Ordering::Equal
            })
    }
}

impl std::fmt::Debug for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Section")
            .field("family", &self.inner.family)
            .field("prefix", &self.inner.prefix)
            .field("segs", &self.inner.segs)
            .finish()
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_normalized_string())
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn v4(vals: [(SegInt, SegInt); 4], prefix: PrefixLen) -> Section {
        let segs: Vec<Segment> = vals
            .iter()
            .map(|&(l, u)| Segment::new(l, u, 8, None).unwrap())
            .collect();
        Section::new(segs, AddrFamily::V4, prefix).unwrap()
    }

    #[test]
    fn test_construction_and_alignment() {
        let s = v4([(1, 1), (2, 2), (3, 3), (4, 4)], Some(20));
        assert_eq!(s.prefix_len(), Some(20));
        assert_eq!(s.get_segment(0).prefix_len(), None);
        assert_eq!(s.get_segment(1).prefix_len(), None);
        assert_eq!(s.get_segment(2).prefix_len(), Some(4));
        assert_eq!(s.get_segment(3).prefix_len(), Some(0));
        assert!(!s.is_multiple());
    }

    #[test]
    fn test_prefix_derived_from_segments() {
        let segs = vec![
            Segment::new(1, 1, 8, None).unwrap(),
            Segment::new(2, 2, 8, Some(4)).unwrap(),
            Segment::new(3, 3, 8, Some(0)).unwrap(),
            Segment::new(4, 4, 8, Some(0)).unwrap(),
        ];
        let s = Section::new(segs, AddrFamily::V4, None).unwrap();
        assert_eq!(s.prefix_len(), Some(12));
    }

    #[test]
    fn test_inconsistent_prefixes_rejected() {
        let segs = vec![
            Segment::new(1, 1, 8, Some(4)).unwrap(),
            Segment::new(2, 2, 8, None).unwrap(),
            Segment::new(3, 3, 8, Some(0)).unwrap(),
            Segment::new(4, 4, 8, Some(0)).unwrap(),
        ];
        let err = Section::new(segs, AddrFamily::V4, None).unwrap_err();
        assert!(matches!(err, AddressError::InconsistentPrefix { .. }));
    }

    #[test]
    fn test_values_and_bytes() {
        let s = v4([(1, 1), (2, 2), (3, 3), (4, 4)], None);
        assert_eq!(s.get_value(), 0x01020304);
        assert_eq!(s.get_bytes(), &[1, 2, 3, 4]);
        assert_eq!(s.byte_count(), 4);
        assert_eq!(s.bit_count(), 32);
    }

    #[test]
    fn test_count() {
        let s = v4([(1, 2), (0, 255), (3, 3), (4, 4)], None);
        assert!(s.is_multiple());
        assert_eq!(s.get_count(), BigUint::from(512u32));
        assert_eq!(s.count_minus_one(), 511);
        let single = v4([(1, 1), (2, 2), (3, 3), (4, 4)], None);
        assert_eq!(single.get_count(), BigUint::from(1u32));
    }

    #[test]
    fn test_prefix_count() {
        let s = v4([(1, 2), (0, 255), (3, 3), (4, 4)], Some(12));
        // 2 values in seg 0, 16 prefix values in seg 1's top nibble
        assert_eq!(s.get_prefix_count(), BigUint::from(32u32));
    }

    #[test]
    fn test_bounds() {
        let s = v4([(1, 2), (0, 255), (3, 3), (4, 4)], Some(16));
        let lo = s.get_lower();
        let up = s.get_upper();
        assert_eq!(lo.get_value(), 0x01000304);
        assert_eq!(up.get_value(), 0x02ff0304);
        assert_eq!(lo.prefix_len(), Some(16));
        assert!(lo <= s.get_upper());
    }

    #[test]
    fn test_contains() {
        let wide = v4([(1, 2), (0, 255), (3, 3), (4, 4)], None);
        let narrow = v4([(1, 1), (7, 9), (3, 3), (4, 4)], None);
        assert!(wide.contains(&narrow));
        assert!(!narrow.contains(&wide));
        assert!(wide.contains(&wide));
    }

    #[test]
    fn test_block_classification() {
        let block = v4([(1, 1), (2, 2), (0, 255), (0, 255)], Some(16));
        assert!(block.is_prefix_block());
        assert!(block.is_single_prefix_block());
        assert!(block.contains_prefix_block(16));
        assert!(block.contains_prefix_block(24));
        assert!(!block.contains_single_prefix_block(24));
        assert_eq!(block.min_prefix_for_block(), 16);
        assert_eq!(block.prefix_for_single_block(), Some(16));

        let not_block = v4([(1, 1), (2, 2), (3, 3), (4, 4)], Some(16));
        assert!(!not_block.is_prefix_block());
        assert_eq!(not_block.min_prefix_for_block(), 32);
        assert_eq!(not_block.prefix_for_single_block(), Some(32));

        // two /16 blocks
        let two = v4([(1, 2), (0, 255), (0, 255), (0, 255)], None);
        assert!(two.contains_prefix_block(16));
        assert!(!two.contains_single_prefix_block(16));
        // 1.0.0.0-2.255.255.255 is not CIDR-aligned
        assert_eq!(two.prefix_for_single_block(), None);
        let aligned = v4([(2, 3), (0, 255), (0, 255), (0, 255)], None);
        assert_eq!(aligned.prefix_for_single_block(), Some(7));
    }

    #[test]
    fn test_sequential() {
        assert!(v4([(1, 2), (0, 255), (0, 255), (0, 255)], None).is_sequential());
        assert!(!v4([(1, 2), (0, 255), (3, 3), (4, 4)], None).is_sequential());
        assert!(v4([(1, 1), (2, 2), (3, 3), (0, 255)], None).is_sequential());
    }

    #[test]
    fn test_equality_and_order() {
        let a = v4([(1, 1), (2, 2), (3, 3), (4, 4)], Some(16));
        let b = v4([(1, 1), (2, 2), (3, 3), (4, 4)], Some(16));
        let c = v4([(1, 1), (2, 2), (3, 3), (4, 4)], None);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(v4([(1, 1), (0, 0), (0, 0), (0, 0)], None) < v4([(2, 2), (0, 0), (0, 0), (0, 0)], None));
    }
}
