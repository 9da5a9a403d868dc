// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Section iterators: by single value, by prefix, by prefix block, by
//! trailing block and by sequential block. All of them walk an odometer
//! over the segments with the most significant segment varying slowest.

use super::Section;
use crate::{
    segment::Segment,
    types::{prefixed_segment_prefix, AddrFamily, BitCount, PrefixLen, SegInt},
};

/// Lazy, finite, non-restartable iterator over sections.
pub struct SectionIter {
    family: AddrFamily,
    prefix: PrefixLen,
    bits: BitCount,
    slots: Vec<Slot>,
    done: bool,
}

/// Alias kept for the prefix-walking constructors.
pub type SectionPrefixIter = SectionIter;

struct Slot {
    mode: SlotMode,
    orig: Segment,
    lower: u32,
    upper: u32,
    current: u32,
}

enum SlotMode {
    /// iterate every value, emitting single-valued segments
    Value,
    /// iterate prefix values, emitting each piece clipped to the original
    PrefixClip(u32),
    /// iterate prefix values, emitting each full block
    PrefixBlock(u32),
    /// do not iterate; emit the given segment in every item
    Fixed,
}

impl Slot {
    fn fixed(seg: Segment) -> Slot {
        Slot {
            mode: SlotMode::Fixed,
            orig: seg,
            lower: 0,
            upper: 0,
            current: 0,
        }
    }

    fn value(seg: Segment) -> Slot {
        Slot {
            mode: SlotMode::Value,
            orig: seg,
            lower: seg.lower() as u32,
            upper: seg.upper() as u32,
            current: seg.lower() as u32,
        }
    }

    fn prefixes(seg: Segment, shift: u32, block: bool) -> Slot {
        Slot {
            mode: if block {
                SlotMode::PrefixBlock(shift)
            } else {
                SlotMode::PrefixClip(shift)
            },
            orig: seg,
            lower: (seg.lower() as u32) >> shift,
            upper: (seg.upper() as u32) >> shift,
            current: (seg.lower() as u32) >> shift,
        }
    }

    fn emit(&self, bits: BitCount) -> Segment {
        match self.mode {
            SlotMode::Fixed => self.orig,
            SlotMode::Value => Segment::derive(
                self.current as SegInt,
                self.current as SegInt,
                bits,
                self.orig.prefix_len(),
            ),
            SlotMode::PrefixClip(shift) => {
                let host: u32 = (1u32 << shift) - 1;
                let start: u32 = self.current << shift;
                Segment::derive(
                    (start.max(self.orig.lower() as u32)) as SegInt,
                    ((start | host).min(self.orig.upper() as u32)) as SegInt,
                    bits,
                    self.orig.prefix_len(),
                )
            }
            SlotMode::PrefixBlock(shift) => {
                let host: u32 = (1u32 << shift) - 1;
                let start: u32 = self.current << shift;
                Segment::derive(start as SegInt, (start | host) as SegInt, bits, self.orig.prefix_len())
            }
        }
    }

    fn is_fixed(&self) -> bool {
        matches!(self.mode, SlotMode::Fixed)
    }
}

impl Iterator for SectionIter {
    type Item = Section;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let segs: Vec<Segment> = self.slots.iter().map(|s| s.emit(self.bits)).collect();
        let item: Section = Section::derive(segs, self.family, self.prefix);

        // advance the odometer, least significant varying slot first
        let mut i: usize = self.slots.len();
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.slots[i].is_fixed() {
                continue;
            }
            if self.slots[i].current < self.slots[i].upper {
                self.slots[i].current += 1;
                for later in self.slots[i + 1..].iter_mut() {
                    later.current = later.lower;
                }
                break;
            }
        }
        Some(item)
    }
}

impl Section {
    /// Iterate every contained single-valued section, in value order.
    pub fn iter(&self) -> SectionIter {
        let slots: Vec<Slot> = self.segments().iter().map(|&s| Slot::value(s)).collect();
        self.make_iter(slots)
    }

    /**
    Iterate per distinct prefix of the section prefix (or per value when
    unprefixed). Each item keeps the original host ranges, clipped at the
    straddling segment.
    */
    pub fn prefix_iter(&self) -> SectionPrefixIter {
        self.prefix_values(false)
    }

    /// Iterate the full prefix blocks covering the value set, one per
    /// distinct prefix of the section prefix.
    pub fn prefix_block_iter(&self) -> SectionPrefixIter {
        self.prefix_values(true)
    }

    fn prefix_values(&self, block: bool) -> SectionIter {
        let p: BitCount = self.prefix_len().unwrap_or(self.bit_count());
        let bits: BitCount = self.bits_per_segment();
        let max: SegInt = self.max_segment_value();
        let slots: Vec<Slot> = self
            .segments()
            .iter()
            .enumerate()
            .map(|(i, &seg)| match prefixed_segment_prefix(bits, Some(p), i) {
                None => Slot::value(seg),
                Some(0) => {
                    if block {
                        Slot::fixed(Segment::derive(0, max, bits, seg.prefix_len()))
                    } else {
                        Slot::fixed(seg)
                    }
                }
                Some(sp) => Slot::prefixes(seg, bits - sp, block),
            })
            .collect();
        self.make_iter(slots)
    }

    /**
    Iterate blocks that vary only in the last `trailing` segments: the
    leading segments are walked value by value while the trailing ones
    keep their ranges.
    */
    pub fn block_iter(&self, trailing: usize) -> SectionIter {
        let n: usize = self.segment_count();
        let trailing: usize = trailing.min(n);
        let split: usize = n - trailing;
        let slots: Vec<Slot> = self
            .segments()
            .iter()
            .enumerate()
            .map(|(i, &seg)| {
                if i < split {
                    Slot::value(seg)
                } else {
                    Slot::fixed(seg)
                }
            })
            .collect();
        self.make_iter(slots)
    }

    /// Iterate the fewest blocks that are each contiguous in integer
    /// order: a block boundary is placed before the last segment that is
    /// not followed exclusively by full-range segments.
    pub fn sequential_block_iter(&self) -> SectionIter {
        let n: usize = self.segment_count();
        self.block_iter(n - self.sequential_segment_index())
    }

    /// First segment index after which every segment is full-range.
    pub(crate) fn sequential_segment_index(&self) -> usize {
        let mut idx: usize = 0;
        for (i, seg) in self.segments().iter().enumerate() {
            if !seg.is_full_range() {
                idx = i;
            }
        }
        idx
    }

    fn make_iter(&self, slots: Vec<Slot>) -> SectionIter {
        SectionIter {
            family: self.family(),
            prefix: self.prefix_len(),
            bits: self.bits_per_segment(),
            slots,
            done: self.segment_count() == 0,
        }
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrefixLen;

    fn v4(vals: [(SegInt, SegInt); 4], prefix: PrefixLen) -> Section {
        let segs: Vec<Segment> = vals
            .iter()
            .map(|&(l, u)| Segment::new(l, u, 8, None).unwrap())
            .collect();
        Section::new(segs, crate::types::AddrFamily::V4, prefix).unwrap()
    }

    #[test]
    fn test_value_iter_order_and_count() {
        // 1-2.0-255.3.4
        let s = v4([(1, 2), (0, 255), (3, 3), (4, 4)], None);
        let all: Vec<Section> = s.iter().collect();
        assert_eq!(all.len(), 512);
        assert_eq!(all[0].get_value(), 0x01000304);
        assert_eq!(all[255].get_value(), 0x01ff0304);
        assert_eq!(all[256].get_value(), 0x02000304);
        assert_eq!(all[511].get_value(), 0x02ff0304);
        assert!(all.iter().all(|a| !a.is_multiple()));
    }

    #[test]
    fn test_single_value_iter() {
        let s = v4([(1, 1), (2, 2), (3, 3), (4, 4)], None);
        let all: Vec<Section> = s.iter().collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], s);
    }

    #[test]
    fn test_prefix_block_iter() {
        // 10.11.0.0/18 block has four /18s? no: one /18. widen to /16 block first
        let block = v4([(10, 10), (11, 11), (0, 255), (0, 255)], Some(18));
        let blocks: Vec<Section> = block.prefix_block_iter().collect();
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0].get_value(), 0x0a0b0000);
        assert_eq!(blocks[0].get_upper_value(), 0x0a0b3fff);
        assert_eq!(blocks[3].get_value(), 0x0a0bc000);
        assert_eq!(blocks[3].get_upper_value(), 0x0a0bffff);
        assert!(blocks.iter().all(|b| b.is_prefix_block()));
    }

    #[test]
    fn test_prefix_iter_clips() {
        // third segment 4-11 over a /22: prefix values 4>>2=1 ..= 11>>2=2
        let s = v4([(1, 1), (2, 2), (4, 11), (0, 255)], Some(22));
        let parts: Vec<Section> = s.prefix_iter().collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].get_segment(2).lower(), 4);
        assert_eq!(parts[0].get_segment(2).upper(), 7);
        assert_eq!(parts[1].get_segment(2).lower(), 8);
        assert_eq!(parts[1].get_segment(2).upper(), 11);
        // host segment keeps its range
        assert!(parts[0].get_segment(3).is_full_range());
    }

    #[test]
    fn test_unprefixed_prefix_iter_is_value_iter() {
        let s = v4([(1, 2), (0, 0), (0, 0), (0, 0)], None);
        assert_eq!(s.prefix_iter().count(), 2);
        assert_eq!(s.prefix_block_iter().count(), 2);
    }

    #[test]
    fn test_block_iter() {
        let s = v4([(1, 2), (7, 8), (0, 9), (0, 255)], None);
        // vary the first two segments, keep the last two as ranges
        let blocks: Vec<Section> = s.block_iter(2).collect();
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0].get_segment(0).lower(), 1);
        assert_eq!(blocks[0].get_segment(1).lower(), 7);
        assert_eq!(blocks[0].get_segment(2).upper(), 9);
        assert_eq!(blocks[3].get_segment(0).lower(), 2);
        assert_eq!(blocks[3].get_segment(1).lower(), 8);
    }

    #[test]
    fn test_sequential_block_iter() {
        // 1-2.3.4-5.*: sequential blocks fix segments 0 and 1
        let s = v4([(1, 2), (3, 3), (4, 5), (0, 255)], None);
        let blocks: Vec<Section> = s.sequential_block_iter().collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.is_sequential()));
        assert_eq!(blocks[0].get_value(), 0x01030400);
        assert_eq!(blocks[0].get_upper_value(), 0x010305ff);
        assert_eq!(blocks[1].get_value(), 0x02030400);

        // fully sequential sections yield themselves
        let seq = v4([(1, 2), (0, 255), (0, 255), (0, 255)], None);
        let blocks: Vec<Section> = seq.sequential_block_iter().collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0], seq);
    }
}
