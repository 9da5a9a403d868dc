// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MAC/EUI specifics: EUI-64 widening, the OUI split and the modified
//! EUI-64 IPv6 link-local derivation.

use crate::{
    address::{join_seg8, Address},
    err::AddressError,
    section::Section,
    segment::Segment,
    strings::*,
    types::{AddrFamily, SegInt},
};

impl Address {
    /// Whether this is an 8-segment (EUI-64) MAC address.
    pub fn is_extended(&self) -> bool {
        self.family() == AddrFamily::Mac && self.segment_count() == 8
    }

    /// Whether this is an EUI-64 address derived from an EUI-48, carrying
    /// the `ff:fe` (or `ff:ff` when treated as MAC) marker in the middle.
    pub fn is_eui64(&self, as_mac: bool) -> bool {
        if !self.is_extended() {
            return false;
        }
        let marker: SegInt = if as_mac { 0xff } else { 0xfe };
        self.get_segment(3).matches(0xff) && self.get_segment(4).matches(marker)
    }

    /**
    Widen a 6-segment MAC to its 8-segment EUI-64 form by inserting
    `ff:fe` (`ff:ff` when `as_mac`) after the OUI. An address that is
    already extended is returned as-is when it carries the marker, and
    rejected otherwise.
    */
    pub fn to_eui64(&self, as_mac: bool) -> Result<Address, AddressError> {
        if self.family() != AddrFamily::Mac {
            return Err(AddressError::parse(KEY_INVALID_MIXED));
        }
        if self.is_extended() {
            if self.is_eui64(as_mac) {
                return Ok(self.clone());
            }
            return Err(AddressError::incompatible(KEY_SEGMENT_MISMATCH));
        }
        let marker: SegInt = if as_mac { 0xff } else { 0xfe };
        let segs: &[Segment] = self.section().segments();
        let mut out: Vec<Segment> = Vec::with_capacity(8);
        out.extend_from_slice(&segs[..3]);
        out.push(Segment::derive(0xff, 0xff, 8, None));
        out.push(Segment::derive(marker, marker, 8, None));
        out.extend_from_slice(&segs[3..]);
        Address::new(Section::derive(out, AddrFamily::Mac, None))
    }

    /// The first three segments, the organizationally unique identifier.
    pub fn get_oui_section(&self) -> Result<Section, AddressError> {
        if self.family() != AddrFamily::Mac {
            return Err(AddressError::parse(KEY_INVALID_MIXED));
        }
        Ok(self.section().get_sub_section(0, 3))
    }

    /**
    Derive the IPv6 link-local address `fe80::/64` with the modified
    EUI-64 interface identifier: widen to EUI-64, flip the
    universal/local bit of the first octet, and embed in the host half.
    */
    pub fn to_link_local_ipv6(&self) -> Result<Address, AddressError> {
        let eui: Address = self.to_eui64(false)?;
        let first: &Segment = eui.get_segment(0);
        if first.is_multiple() {
            return Err(AddressError::incompatible(KEY_MASKED_RANGE));
        }
        let flipped: Segment = Segment::derive(
            first.lower() ^ 0x02,
            first.lower() ^ 0x02,
            8,
            None,
        );

        let segs: &[Segment] = eui.section().segments();
        let mut out: Vec<Segment> = Vec::with_capacity(8);
        out.push(Segment::derive(0xfe80, 0xfe80, 16, None));
        for _ in 0..3 {
            out.push(Segment::derive(0, 0, 16, None));
        }
        out.push(join_seg8(&flipped, &segs[1])?);
        out.push(join_seg8(&segs[2], &segs[3])?);
        out.push(join_seg8(&segs[4], &segs[5])?);
        out.push(join_seg8(&segs[6], &segs[7])?);
        Address::new(Section::derive(out, AddrFamily::V6, None))
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const MAC: [u8; 6] = [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff];

    #[test]
    fn test_to_eui64() {
        let mac = Address::mac_from_bytes(&MAC).unwrap();
        let eui = mac.to_eui64(false).unwrap();
        assert_eq!(eui.segment_count(), 8);
        assert_eq!(
            eui.get_bytes(),
            &[0xaa, 0xbb, 0xcc, 0xff, 0xfe, 0xdd, 0xee, 0xff]
        );
        assert!(eui.is_eui64(false));
        // round-trip through the extended form is the identity
        assert_eq!(eui.to_eui64(false).unwrap(), eui);
        // an extended address without the marker is not an EUI-64 widening
        let other = Address::mac_from_bytes(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert!(other.to_eui64(false).is_err());
    }

    #[test]
    fn test_oui() {
        let mac = Address::mac_from_bytes(&MAC).unwrap();
        let oui = mac.get_oui_section().unwrap();
        assert_eq!(oui.segment_count(), 3);
        assert_eq!(oui.get_value(), 0xaabbcc);
    }

    #[test]
    fn test_link_local_ipv6() {
        // 00:11:22:33:44:55 -> fe80::211:22ff:fe33:4455
        let mac = Address::mac_from_bytes(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]).unwrap();
        let ll = mac.to_link_local_ipv6().unwrap();
        assert_eq!(ll.family(), AddrFamily::V6);
        assert!(ll.is_link_local());
        assert_eq!(
            ll.get_bytes(),
            &[0xfe, 0x80, 0, 0, 0, 0, 0, 0, 0x02, 0x11, 0x22, 0xff, 0xfe, 0x33, 0x44, 0x55]
        );
    }
}
