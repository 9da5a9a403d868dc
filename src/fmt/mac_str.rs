// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MAC/EUI string forms: dashed (IEEE canonical), colon-delimited,
//! dotted 16-bit groups and space-delimited.

use super::{StringOpts, Wildcards};
use crate::{
    address::{join_seg8, Address},
    err::AddressError,
    section::Section,
    segment::Segment,
    strings::*,
    types::AddrFamily,
};

fn mac_opts(separator: char, range_separator: char) -> StringOpts {
    StringOpts {
        radix: 16,
        separator: Some(separator),
        expand_segments: true,
        wildcards: Wildcards {
            wildcard: WILDCARD.to_string(),
            single_wildcard: SINGLE_WILDCARD.to_string(),
            range_separator: range_separator.to_string(),
        },
        with_prefix_len: false,
        ..Default::default()
    }
}

impl Section {
    /// IEEE canonical `aa-bb-cc-dd-ee-ff`; ranges use `|` so they cannot
    /// collide with the dash separator.
    pub fn to_dashed_string(&self) -> String {
        self.cache()
            .strings
            .canonical
            .get_or_init(|| {
                super::write_section(self, "", &mac_opts(MAC_DASH_SEP, MAC_DASHED_RANGE_SEP))
                    .expect("infallible mac form")
            })
            .clone()
    }

    /// `aa:bb:cc:dd:ee:ff`, ranges as `a-b`.
    pub fn to_colon_delimited_string(&self) -> String {
        self.cache()
            .strings
            .normalized
            .get_or_init(|| {
                super::write_section(self, "", &mac_opts(MAC_COLON_SEP, RANGE_SEP))
                    .expect("infallible mac form")
            })
            .clone()
    }

    /// `aa bb cc dd ee ff`.
    pub fn to_space_delimited_string(&self) -> String {
        super::write_section(self, "", &mac_opts(MAC_SPACE_SEP, RANGE_SEP))
            .expect("infallible mac form")
    }

    /**
    The Cisco-style dotted form of 16-bit groups, `aabb.ccdd.eeff`.
    Fails when adjacent byte pairs do not join into clean 16-bit ranges.
    */
    pub fn to_dotted_string(&self) -> Result<String, AddressError> {
        if self.family() != AddrFamily::Mac || self.segment_count() % 2 != 0 {
            return Err(AddressError::incompatible(KEY_SEGMENT_MISMATCH));
        }
        let mut wide: Vec<Segment> = Vec::with_capacity(self.segment_count() / 2);
        for pair in self.segments().chunks(2) {
            wide.push(join_seg8(&pair[0], &pair[1])?);
        }
        let grouping: Section = Section::derive(wide, AddrFamily::V6, None);
        let opts = StringOpts {
            radix: 16,
            separator: Some(MAC_DOT_SEP),
            expand_segments: true,
            with_prefix_len: false,
            ..Default::default()
        };
        super::write_section(&grouping, "", &opts)
    }
}

impl Address {
    pub fn to_dashed_string(&self) -> String {
        self.section().to_dashed_string()
    }

    pub fn to_colon_delimited_string(&self) -> String {
        self.section().to_colon_delimited_string()
    }

    pub fn to_space_delimited_string(&self) -> String {
        self.section().to_space_delimited_string()
    }

    pub fn to_dotted_string(&self) -> Result<String, AddressError> {
        self.section().to_dotted_string()
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const MAC: [u8; 6] = [0x0a, 0xbb, 0xcc, 0x0d, 0xee, 0xff];

    fn mac() -> Address {
        Address::mac_from_bytes(&MAC).unwrap()
    }

    #[test]
    fn test_forms() {
        assert_eq!(mac().to_dashed_string(), "0a-bb-cc-0d-ee-ff");
        assert_eq!(mac().to_colon_delimited_string(), "0a:bb:cc:0d:ee:ff");
        assert_eq!(mac().to_space_delimited_string(), "0a bb cc 0d ee ff");
        assert_eq!(mac().to_dotted_string().unwrap(), "0abb.cc0d.eeff");
        assert_eq!(mac().to_canonical_string(), "0a-bb-cc-0d-ee-ff");
        assert_eq!(mac().to_normalized_string(), "0a:bb:cc:0d:ee:ff");
    }

    #[test]
    fn test_ranged_forms() {
        let section = Section::new(
            vec![
                Segment::new(0xaa, 0xaa, 8, None).unwrap(),
                Segment::new(1, 3, 8, None).unwrap(),
                Segment::new(0, 0xff, 8, None).unwrap(),
                Segment::new(0, 0xff, 8, None).unwrap(),
                Segment::new(0xee, 0xee, 8, None).unwrap(),
                Segment::new(0xff, 0xff, 8, None).unwrap(),
            ],
            AddrFamily::Mac,
            None,
        )
        .unwrap();
        let addr = Address::new(section).unwrap();
        assert_eq!(addr.to_dashed_string(), "aa-01|03-*-*-ee-ff");
        assert_eq!(addr.to_colon_delimited_string(), "aa:01-03:*:*:ee:ff");
        assert_eq!(addr.to_dotted_string().unwrap(), "aa01-aa03.*.eeff");
    }

    #[test]
    fn test_dotted_join_failure() {
        let section = Section::new(
            vec![
                Segment::new(1, 2, 8, None).unwrap(),
                Segment::new(5, 5, 8, None).unwrap(),
                Segment::new(0, 0xff, 8, None).unwrap(),
                Segment::new(0, 0xff, 8, None).unwrap(),
                Segment::new(0, 0xff, 8, None).unwrap(),
                Segment::new(0, 0xff, 8, None).unwrap(),
            ],
            AddrFamily::Mac,
            None,
        )
        .unwrap();
        assert!(Address::new(section).unwrap().to_dotted_string().is_err());
    }
}
