// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The address facade: a full-length [Section] plus, for IPv6, an optional
//! zone (scope) string. `""` means no zone. The zone participates in
//! equality but never in value-based range operations.

use crate::{
    err::AddressError,
    parse::AddrStr,
    range::AddrRange,
    section::{Section, SectionIter},
    segment::Segment,
    strings::*,
    types::{AddrFamily, BitCount, PrefixLen, SegInt},
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{
    cmp::Ordering,
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    str::FromStr,
};

/// A single or multi-valued address of one family.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Address {
    section: Section,
    zone: String,
}

impl Address {
    /**
    Wrap a full-length section. The segment count must be the family's
    full address length (4 for IPv4, 8 for IPv6, 6 or 8 for MAC).
    */
    pub fn new(section: Section) -> Result<Address, AddressError> {
        check_full_length(&section)?;
        Ok(Address {
            section,
            zone: String::new(),
        })
    }

    /// Wrap a full-length IPv6 section with a zone. An empty zone is the
    /// absence of one; zones on other families are rejected.
    pub fn with_zone(section: Section, zone: impl Into<String>) -> Result<Address, AddressError> {
        let zone: String = zone.into();
        if !zone.is_empty() && section.family() != AddrFamily::V6 {
            return Err(AddressError::parse(KEY_INVALID_ZONE));
        }
        check_full_length(&section)?;
        Ok(Address { section, zone })
    }

    pub(crate) fn derive(section: Section, zone: String) -> Address {
        Address { section, zone }
    }

    /// Build from per-segment single values.
    pub fn from_segment_values(
        family: AddrFamily,
        values: &[SegInt],
        prefix: PrefixLen,
    ) -> Result<Address, AddressError> {
        let bits: BitCount = family.bits_per_segment();
        let mut segs: Vec<Segment> = Vec::with_capacity(values.len());
        for &v in values {
            segs.push(Segment::new(v, v, bits, None)?);
        }
        Address::new(Section::new(segs, family, prefix)?)
    }

    /// Build an IPv4 address from big-endian bytes.
    pub fn ipv4_from_bytes(bytes: &[u8], prefix: PrefixLen) -> Result<Address, AddressError> {
        if bytes.len() != 4 {
            return Err(AddressError::SizeMismatch {
                key: KEY_SIZE_MISMATCH,
            });
        }
        let values: Vec<SegInt> = bytes.iter().map(|&b| b as SegInt).collect();
        Address::from_segment_values(AddrFamily::V4, &values, prefix)
    }

    /// Build an IPv6 address from 16 big-endian bytes.
    pub fn ipv6_from_bytes(bytes: &[u8], prefix: PrefixLen) -> Result<Address, AddressError> {
        if bytes.len() != 16 {
            return Err(AddressError::SizeMismatch {
                key: KEY_SIZE_MISMATCH,
            });
        }
        let values: Vec<SegInt> = bytes
            .chunks(2)
            .map(|c| ((c[0] as SegInt) << 8) | c[1] as SegInt)
            .collect();
        Address::from_segment_values(AddrFamily::V6, &values, prefix)
    }

    /// Build a MAC (6 bytes) or EUI-64 (8 bytes) address.
    pub fn mac_from_bytes(bytes: &[u8]) -> Result<Address, AddressError> {
        if bytes.len() != 6 && bytes.len() != 8 {
            return Err(AddressError::SizeMismatch {
                key: KEY_SIZE_MISMATCH,
            });
        }
        let values: Vec<SegInt> = bytes.iter().map(|&b| b as SegInt).collect();
        Address::from_segment_values(AddrFamily::Mac, &values, None)
    }

    /// Build an IPv4 address from its 32-bit value.
    pub fn from_ipv4_value(value: u32, prefix: PrefixLen) -> Address {
        let section: Section =
            Section::from_value(value as u128, AddrFamily::V4, 4, prefix);
        Address::derive(section, String::new())
    }

    /// Build an IPv6 address from its 128-bit value.
    pub fn from_ipv6_value(value: u128, prefix: PrefixLen) -> Address {
        let section: Section = Section::from_value(value, AddrFamily::V6, 8, prefix);
        Address::derive(section, String::new())
    }

    /// Build a MAC address from the low 48 (or 64, when `extended`) bits.
    pub fn from_mac_value(value: u64, extended: bool) -> Address {
        let count: usize = if extended { 8 } else { 6 };
        let section: Section = Section::from_value(value as u128, AddrFamily::Mac, count, None);
        Address::derive(section, String::new())
    }

    /* ---------------------------------- */
    // accessors

    #[inline]
    pub fn section(&self) -> &Section {
        &self.section
    }

    /// The IPv6 scope identifier; `""` when absent.
    #[inline]
    pub fn zone(&self) -> &str {
        &self.zone
    }

    #[inline]
    pub fn has_zone(&self) -> bool {
        !self.zone.is_empty()
    }

    #[inline]
    pub fn family(&self) -> AddrFamily {
        self.section.family()
    }

    #[inline]
    pub fn is_multiple(&self) -> bool {
        self.section.is_multiple()
    }

    #[inline]
    pub fn prefix_len(&self) -> PrefixLen {
        self.section.prefix_len()
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.section.segment_count()
    }

    #[inline]
    pub fn get_segment(&self, i: usize) -> &Segment {
        self.section.get_segment(i)
    }

    #[inline]
    pub fn bit_count(&self) -> BitCount {
        self.section.bit_count()
    }

    #[inline]
    pub fn byte_count(&self) -> usize {
        self.section.byte_count()
    }

    pub fn get_bytes(&self) -> &[u8] {
        self.section.get_bytes()
    }

    pub fn get_upper_bytes(&self) -> &[u8] {
        self.section.get_upper_bytes()
    }

    pub fn get_count(&self) -> num_bigint::BigUint {
        self.section.get_count()
    }

    pub fn get_value(&self) -> u128 {
        self.section.get_value()
    }

    pub fn get_upper_value(&self) -> u128 {
        self.section.get_upper_value()
    }

    /// The lowest contained address, zone preserved.
    pub fn get_lower(&self) -> Address {
        Address::derive(self.section.get_lower(), self.zone.clone())
    }

    /// The highest contained address, zone preserved.
    pub fn get_upper(&self) -> Address {
        Address::derive(self.section.get_upper(), self.zone.clone())
    }

    /// Value containment; zones are ignored.
    pub fn contains(&self, other: &Address) -> bool {
        self.section.contains(&other.section)
    }

    pub fn overlaps(&self, other: &Address) -> bool {
        self.section.overlaps(&other.section)
    }

    pub fn is_sequential(&self) -> bool {
        self.section.is_sequential()
    }

    pub fn is_prefix_block(&self) -> bool {
        self.section.is_prefix_block()
    }

    pub fn is_single_prefix_block(&self) -> bool {
        self.section.is_single_prefix_block()
    }

    pub fn prefix_for_single_block(&self) -> Option<BitCount> {
        self.section.prefix_for_single_block()
    }

    pub fn min_prefix_for_block(&self) -> BitCount {
        self.section.min_prefix_for_block()
    }

    pub fn get_segment_strings(&self) -> Vec<String> {
        self.section
            .segments()
            .iter()
            .map(|seg| {
                let radix: u32 = self.family().default_radix();
                let lo: String = to_radix(seg.lower() as u32, radix);
                if seg.is_multiple() {
                    if seg.is_full_range() {
                        WILDCARD.to_string()
                    } else {
                        format!("{lo}{RANGE_SEP}{}", to_radix(seg.upper() as u32, radix))
                    }
                } else {
                    lo
                }
            })
            .collect()
    }

    /* ---------------------------------- */
    // transforms, all zone-preserving

    pub fn to_prefix_block(&self) -> Address {
        Address::derive(self.section.to_prefix_block(), self.zone.clone())
    }

    pub fn to_prefix_block_len(&self, p: BitCount) -> Address {
        Address::derive(self.section.to_prefix_block_len(p), self.zone.clone())
    }

    pub fn set_prefix_len(&self, p: BitCount) -> Address {
        Address::derive(self.section.set_prefix_len(p), self.zone.clone())
    }

    pub fn set_prefix_len_zeroed(&self, p: BitCount) -> Result<Address, AddressError> {
        Ok(Address::derive(
            self.section.set_prefix_len_zeroed(p)?,
            self.zone.clone(),
        ))
    }

    pub fn without_prefix_len(&self) -> Address {
        Address::derive(self.section.without_prefix_len(), self.zone.clone())
    }

    pub fn assign_prefix_for_single_block(&self) -> Option<Address> {
        self.section
            .assign_prefix_for_single_block()
            .map(|s| Address::derive(s, self.zone.clone()))
    }

    pub fn assign_min_prefix_for_block(&self) -> Address {
        Address::derive(self.section.assign_min_prefix_for_block(), self.zone.clone())
    }

    pub fn mask(&self, other: &Address) -> Result<Address, AddressError> {
        Ok(Address::derive(
            self.section.mask(&other.section)?,
            self.zone.clone(),
        ))
    }

    pub fn mask_prefixed(
        &self,
        other: &Address,
        prefix: PrefixLen,
    ) -> Result<Address, AddressError> {
        Ok(Address::derive(
            self.section.mask_prefixed(&other.section, prefix)?,
            self.zone.clone(),
        ))
    }

    pub fn bitwise_or(&self, other: &Address) -> Result<Address, AddressError> {
        Ok(Address::derive(
            self.section.bitwise_or(&other.section)?,
            self.zone.clone(),
        ))
    }

    pub fn bitwise_or_prefixed(
        &self,
        other: &Address,
        prefix: PrefixLen,
    ) -> Result<Address, AddressError> {
        Ok(Address::derive(
            self.section.bitwise_or_prefixed(&other.section, prefix)?,
            self.zone.clone(),
        ))
    }

    pub fn increment(&self, n: i64) -> Option<Address> {
        self.section
            .increment(n)
            .map(|s| Address::derive(s, self.zone.clone()))
    }

    pub fn increment_boundary(&self, n: i64) -> Option<Address> {
        self.section
            .increment_boundary(n)
            .map(|s| Address::derive(s, self.zone.clone()))
    }

    pub fn reverse_bits(&self, per_byte: bool) -> Result<Address, AddressError> {
        Ok(Address::derive(
            self.section.reverse_bits(per_byte)?,
            self.zone.clone(),
        ))
    }

    pub fn reverse_bytes(&self) -> Result<Address, AddressError> {
        Ok(Address::derive(self.section.reverse_bytes()?, self.zone.clone()))
    }

    pub fn reverse_segments(&self) -> Address {
        Address::derive(self.section.reverse_segments(), self.zone.clone())
    }

    pub fn intersect(&self, other: &Address) -> Option<Address> {
        self.section
            .intersect(&other.section)
            .map(|s| Address::derive(s, self.zone.clone()))
    }

    /// The sequential range from the lowest to the highest contained
    /// address. The zone is stripped: ranges are value-based.
    pub fn to_sequential_range(&self) -> AddrRange {
        AddrRange::derive(
            Address::derive(self.section.get_lower().without_prefix_len(), String::new()),
            Address::derive(self.section.get_upper().without_prefix_len(), String::new()),
        )
    }

    /* ---------------------------------- */
    // iteration

    /// Iterate every contained single-valued address.
    pub fn iter(&self) -> AddressIter {
        AddressIter {
            inner: self.section.iter(),
            zone: self.zone.clone(),
        }
    }

    pub fn prefix_iter(&self) -> AddressIter {
        AddressIter {
            inner: self.section.prefix_iter(),
            zone: self.zone.clone(),
        }
    }

    pub fn prefix_block_iter(&self) -> AddressIter {
        AddressIter {
            inner: self.section.prefix_block_iter(),
            zone: self.zone.clone(),
        }
    }

    pub fn block_iter(&self, trailing: usize) -> AddressIter {
        AddressIter {
            inner: self.section.block_iter(trailing),
            zone: self.zone.clone(),
        }
    }

    pub fn sequential_block_iter(&self) -> AddressIter {
        AddressIter {
            inner: self.section.sequential_block_iter(),
            zone: self.zone.clone(),
        }
    }

    /* ---------------------------------- */
    // classification

    pub fn is_loopback(&self) -> bool {
        match self.family() {
            AddrFamily::V4 => self.get_segment(0).matches(127),
            AddrFamily::V6 => !self.is_multiple() && self.get_value() == 1,
            AddrFamily::Mac => false,
        }
    }

    pub fn is_unspecified(&self) -> bool {
        self.family().is_ip() && self.section.is_zero()
    }

    pub fn is_multicast(&self) -> bool {
        match self.family() {
            AddrFamily::V4 => {
                let seg = self.get_segment(0);
                seg.lower() >= 224 && seg.upper() <= 239
            }
            AddrFamily::V6 => self.get_segment(0).matches_with_mask(0xff00, 0xff00),
            // the group bit of the first octet
            AddrFamily::Mac => self.get_segment(0).matches_with_mask(0x01, 0x01),
        }
    }

    pub fn is_link_local(&self) -> bool {
        match self.family() {
            AddrFamily::V4 => self.get_segment(0).matches(169) && self.get_segment(1).matches(254),
            AddrFamily::V6 => self.get_segment(0).matches_with_mask(0xfe80, 0xffc0),
            AddrFamily::Mac => false,
        }
    }

    /// `::ffff:a.b.c.d`
    pub fn is_ipv4_mapped(&self) -> bool {
        self.family() == AddrFamily::V6
            && self.section.segments()[..5].iter().all(|s| s.is_zero())
            && self.get_segment(5).matches(0xffff)
    }

    /// `::a.b.c.d` (deprecated compatibility embedding)
    pub fn is_ipv4_compatible(&self) -> bool {
        self.family() == AddrFamily::V6
            && self.section.segments()[..6].iter().all(|s| s.is_zero())
    }

    /// Embed an IPv4 address into `::ffff:a.b.c.d`.
    pub fn to_ipv4_mapped(&self) -> Result<Address, AddressError> {
        if self.family() != AddrFamily::V4 {
            return Err(AddressError::parse(KEY_IPV4));
        }
        let segs: &[Segment] = self.section.segments();
        let mut out: Vec<Segment> = Vec::with_capacity(8);
        for _ in 0..5 {
            out.push(Segment::derive(0, 0, 16, None));
        }
        out.push(Segment::derive(0xffff, 0xffff, 16, None));
        out.push(join_seg8(&segs[0], &segs[1])?);
        out.push(join_seg8(&segs[2], &segs[3])?);
        Ok(Address::derive(
            Section::derive(out, AddrFamily::V6, None),
            String::new(),
        ))
    }

    /// The IPv4 address embedded in the last 32 bits, when those split
    /// cleanly into four byte-ranges.
    pub fn get_embedded_ipv4(&self) -> Result<Address, AddressError> {
        if self.family() != AddrFamily::V6 {
            return Err(AddressError::parse(KEY_IPV6));
        }
        let (a, b) = split_seg16(self.get_segment(6))?;
        let (c, d) = split_seg16(self.get_segment(7))?;
        Ok(Address::derive(
            Section::derive(vec![a, b, c, d], AddrFamily::V4, None),
            String::new(),
        ))
    }
}

/// Iterator over the addresses of a multi-valued address.
pub struct AddressIter {
    inner: SectionIter,
    zone: String,
}

impl Iterator for AddressIter {
    type Item = Address;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|s| Address::derive(s, self.zone.clone()))
    }
}

/* ---------------------------------- */
// segment splitting/joining between 8- and 16-bit widths

/// Split a 16-bit segment into its byte halves. A multi-valued segment
/// splits only when the value set is a clean product of byte ranges.
pub(crate) fn split_seg16(seg: &Segment) -> Result<(Segment, Segment), AddressError> {
    let (lo, up) = (seg.lower(), seg.upper());
    let (hi_l, hi_u) = (lo >> 8, up >> 8);
    let (lo_l, lo_u) = (lo & 0xff, up & 0xff);
    if hi_l != hi_u && !(lo_l == 0 && lo_u == 0xff) {
        return Err(AddressError::incompatible(KEY_SPLIT_SEGMENT));
    }
    Ok((
        Segment::derive(hi_l, hi_u, 8, None),
        Segment::derive(lo_l, lo_u, 8, None),
    ))
}

/// Join two byte segments into one 16-bit segment; the inverse of
/// [split_seg16], with the same product constraint.
pub(crate) fn join_seg8(hi: &Segment, lo: &Segment) -> Result<Segment, AddressError> {
    if hi.is_multiple() && !lo.is_full_range() {
        return Err(AddressError::incompatible(KEY_SEGMENT_MISMATCH));
    }
    Ok(Segment::derive(
        (hi.lower() << 8) | lo.lower(),
        (hi.upper() << 8) | lo.upper(),
        16,
        None,
    ))
}

fn check_full_length(section: &Section) -> Result<(), AddressError> {
    let n: usize = section.segment_count();
    let ok: bool = match section.family() {
        AddrFamily::V4 => n == 4,
        AddrFamily::V6 => n == 8,
        AddrFamily::Mac => n == 6 || n == 8,
    };
    if ok {
        Ok(())
    } else {
        Err(AddressError::value(KEY_SEGMENT_COUNT, n as u64))
    }
}

pub(crate) fn to_radix(value: u32, radix: u32) -> String {
    match radix {
        2 => format!("{value:b}"),
        8 => format!("{value:o}"),
        16 => format!("{value:x}"),
        _ => format!("{value}"),
    }
}

/* ---------------------------------- */
// std::net byte bridges

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Address {
        Address::from_ipv4_value(u32::from(ip), None)
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Address {
        Address::from_ipv6_value(u128::from(ip), None)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Address {
        match ip {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl TryFrom<&Address> for IpAddr {
    type Error = AddressError;

    /// Single-valued IP addresses convert back to the stdlib type; ranges
    /// and MAC addresses do not.
    fn try_from(addr: &Address) -> Result<IpAddr, AddressError> {
        if addr.is_multiple() {
            return Err(AddressError::incompatible(KEY_MULTIPLE_TO_SINGLE));
        }
        match addr.family() {
            AddrFamily::V4 => Ok(IpAddr::V4(Ipv4Addr::from(addr.get_value() as u32))),
            AddrFamily::V6 => Ok(IpAddr::V6(Ipv6Addr::from(addr.get_value()))),
            AddrFamily::Mac => Err(AddressError::parse(KEY_IPV6)),
        }
    }
}

/* ---------------------------------- */

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.section
            .cmp(&other.section)
            .then_with(|| self.zone.cmp(&other.zone))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddrStr::new(s).get_address()
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s: String = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const V4_BYTES: [u8; 4] = [1, 2, 3, 4];
    const V6_LOOPBACK: u128 = 1;

    #[test]
    fn test_from_bytes() {
        let a = Address::ipv4_from_bytes(&V4_BYTES, None).unwrap();
        assert_eq!(a.get_value(), 0x01020304);
        assert_eq!(a.get_bytes(), &V4_BYTES);
        assert!(Address::ipv4_from_bytes(&[1, 2, 3], None).is_err());

        let bytes: [u8; 16] = [0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 3, 4];
        let a6 = Address::ipv6_from_bytes(&bytes, None).unwrap();
        assert_eq!(a6.byte_count(), 16);
        assert_eq!(a6.get_bytes(), &bytes);
    }

    #[test]
    fn test_zone_rules() {
        let section = Section::from_value(V6_LOOPBACK, AddrFamily::V6, 8, None);
        let zoned = Address::with_zone(section.clone(), "eth0").unwrap();
        assert_eq!(zoned.zone(), "eth0");
        let plain = Address::new(section).unwrap();
        assert_ne!(zoned, plain);
        assert!(plain.is_loopback());
        // zone is invalid on IPv4
        let v4 = Section::from_value(1, AddrFamily::V4, 4, None);
        assert!(Address::with_zone(v4, "eth0").is_err());
    }

    #[test]
    fn test_classification() {
        let lo = Address::ipv4_from_bytes(&[127, 0, 0, 1], None).unwrap();
        assert!(lo.is_loopback());
        let mc = Address::ipv4_from_bytes(&[224, 0, 0, 1], None).unwrap();
        assert!(mc.is_multicast());
        let ll = Address::ipv4_from_bytes(&[169, 254, 1, 1], None).unwrap();
        assert!(ll.is_link_local());
        let fe80 = Address::from_ipv6_value(0xfe80 << 112, None);
        assert!(fe80.is_link_local());
        let zero = Address::from_ipv4_value(0, None);
        assert!(zero.is_unspecified());
    }

    #[test]
    fn test_ipv4_mapping() {
        let v4 = Address::ipv4_from_bytes(&V4_BYTES, None).unwrap();
        let mapped = v4.to_ipv4_mapped().unwrap();
        assert!(mapped.is_ipv4_mapped());
        let back = mapped.get_embedded_ipv4().unwrap();
        assert_eq!(back.get_value(), 0x01020304);
    }

    #[test]
    fn test_split_join_segments() {
        let seg = Segment::new(0x0102, 0x0102, 16, None).unwrap();
        let (hi, lo) = split_seg16(&seg).unwrap();
        assert_eq!((hi.lower(), lo.lower()), (1, 2));
        // 0x0100-0x02ff splits: high 1-2, low full
        let seg = Segment::new(0x0100, 0x02ff, 16, None).unwrap();
        let (hi, lo) = split_seg16(&seg).unwrap();
        assert_eq!((hi.lower(), hi.upper()), (1, 2));
        assert!(lo.is_full_range());
        // 0x0102-0x0203 does not split into byte products
        let seg = Segment::new(0x0102, 0x0203, 16, None).unwrap();
        assert!(split_seg16(&seg).is_err());
    }

    #[test]
    fn test_std_net_bridge() {
        let a: Address = Ipv4Addr::new(10, 0, 0, 1).into();
        assert_eq!(a.get_value(), 0x0a000001);
        let ip: IpAddr = (&a).try_into().unwrap();
        assert_eq!(ip, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)));
        let a6: Address = Ipv6Addr::LOCALHOST.into();
        assert!(a6.is_loopback());
    }

    #[test]
    fn test_iteration_with_zone() {
        let section = Section::from_range_value(0, 2, AddrFamily::V6, 8, None);
        let addr = Address::with_zone(section, "lo").unwrap();
        let all: Vec<Address> = addr.iter().collect();
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|a| a.zone() == "lo"));
    }

    #[test]
    fn test_ordering() {
        let a = Address::from_ipv4_value(1, None);
        let b = Address::from_ipv4_value(2, None);
        assert!(a < b);
        let v6 = Address::from_ipv6_value(0, None);
        assert!(a < v6); // family ranks v4 below v6
    }
}
