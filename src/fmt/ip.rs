// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The named IP string forms, as methods on [Section] and [Address].
//! Zoneless renderings are cached on the section; zoned ones are built on
//! demand around the same writer.

use super::{write_section, CompressOpts, StringOpts, Wildcards};
use crate::{
    address::{split_seg16, Address},
    err::AddressError,
    section::Section,
    strings::*,
    types::AddrFamily,
};

/* ---------------------------------- */
// option sets

fn v4_opts() -> StringOpts {
    StringOpts::default()
}

fn v6_opts() -> StringOpts {
    StringOpts {
        radix: 16,
        separator: Some(IPV6_SEP),
        ..Default::default()
    }
}

fn mac_opts() -> StringOpts {
    StringOpts {
        radix: 16,
        separator: Some(MAC_COLON_SEP),
        expand_segments: true,
        with_prefix_len: false,
        ..Default::default()
    }
}

fn base_opts(family: AddrFamily) -> StringOpts {
    match family {
        AddrFamily::V4 => v4_opts(),
        AddrFamily::V6 => v6_opts(),
        AddrFamily::Mac => mac_opts(),
    }
}

fn canonical_opts(family: AddrFamily) -> StringOpts {
    match family {
        AddrFamily::V6 => StringOpts {
            compress: Some(CompressOpts {
                compress_single: false,
            }),
            ..v6_opts()
        },
        other => base_opts(other),
    }
}

fn compressed_opts(family: AddrFamily) -> StringOpts {
    match family {
        AddrFamily::V6 => StringOpts {
            compress: Some(CompressOpts {
                compress_single: true,
            }),
            ..v6_opts()
        },
        other => base_opts(other),
    }
}

fn full_opts(family: AddrFamily) -> StringOpts {
    StringOpts {
        expand_segments: true,
        ..base_opts(family)
    }
}

fn no_prefix(mut opts: StringOpts) -> StringOpts {
    opts.with_prefix_len = false;
    opts
}

fn sql_opts(family: AddrFamily) -> StringOpts {
    StringOpts {
        wildcards: Wildcards {
            wildcard: SQL_WILDCARD.to_string(),
            single_wildcard: SINGLE_WILDCARD.to_string(),
            range_separator: RANGE_SEP.to_string(),
        },
        prefer_single_wildcard: true,
        with_prefix_len: false,
        ..base_opts(family)
    }
}

fn segmented_binary_opts(family: AddrFamily) -> StringOpts {
    StringOpts {
        radix: 2,
        segment_prefix: BINARY_PREFIX,
        expand_segments: true,
        separator: Some(family.separator()),
        with_prefix_len: false,
        ..Default::default()
    }
}

/* ---------------------------------- */

impl Section {
    /**
    The rendering target: canonical-family forms show a single prefix
    block by its lower bound plus `/prefix` rather than as ranges.
    */
    fn block_view(&self) -> Section {
        if self.is_multiple() && self.is_single_prefix_block() {
            self.get_lower()
        } else {
            self.clone()
        }
    }

    fn write_infallible(&self, zone: &str, opts: &StringOpts) -> String {
        // only the digit-splitting and SQL paths can fail, and the
        // callers of this helper never enable them
        write_section(self, zone, opts).expect("infallible string form")
    }

    pub(crate) fn canonical_zoned(&self, zone: &str) -> String {
        self.block_view()
            .write_infallible(zone, &canonical_opts(self.family()))
    }

    pub(crate) fn normalized_zoned(&self, zone: &str) -> String {
        self.block_view().write_infallible(zone, &base_opts(self.family()))
    }

    pub(crate) fn compressed_zoned(&self, zone: &str) -> String {
        self.block_view()
            .write_infallible(zone, &compressed_opts(self.family()))
    }

    pub(crate) fn full_zoned(&self, zone: &str) -> String {
        self.block_view().write_infallible(zone, &full_opts(self.family()))
    }

    /// Canonical form: dotted decimal for IPv4; RFC 5952 compressed
    /// lowercase for IPv6; dashed for MAC. Prefix blocks render as
    /// `lower/prefix`, other ranges with `-` and `*`.
    pub fn to_canonical_string(&self) -> String {
        if self.family() == AddrFamily::Mac {
            return self.to_dashed_string();
        }
        self.cache()
            .strings
            .canonical
            .get_or_init(|| self.canonical_zoned(""))
            .clone()
    }

    /// Like canonical but without IPv6 zero-run compression (colon form
    /// for MAC).
    pub fn to_normalized_string(&self) -> String {
        if self.family() == AddrFamily::Mac {
            return self.to_colon_delimited_string();
        }
        self.cache()
            .strings
            .normalized
            .get_or_init(|| self.normalized_zoned(""))
            .clone()
    }

    /// Maximal IPv6 compression: even a single zero segment shortens.
    pub fn to_compressed_string(&self) -> String {
        self.cache()
            .strings
            .compressed
            .get_or_init(|| self.compressed_zoned(""))
            .clone()
    }

    /// Every segment padded to its full digit count, no compression.
    pub fn to_full_string(&self) -> String {
        self.cache()
            .strings
            .full
            .get_or_init(|| self.full_zoned(""))
            .clone()
    }

    /// Canonical shape, but multi-valued segments always render as ranges
    /// or wildcards and no prefix length is appended.
    pub fn to_canonical_wildcard_string(&self) -> String {
        self.cache()
            .strings
            .canonical_wildcard
            .get_or_init(|| self.write_infallible("", &no_prefix(canonical_opts(self.family()))))
            .clone()
    }

    pub fn to_normalized_wildcard_string(&self) -> String {
        self.cache()
            .strings
            .normalized_wildcard
            .get_or_init(|| self.write_infallible("", &no_prefix(base_opts(self.family()))))
            .clone()
    }

    pub fn to_compressed_wildcard_string(&self) -> String {
        self.cache()
            .strings
            .compressed_wildcard
            .get_or_init(|| self.write_infallible("", &no_prefix(compressed_opts(self.family()))))
            .clone()
    }

    /// SQL LIKE pattern: `%` spans a segment, `_` one digit. Fails when a
    /// range does not align to digit spans.
    pub fn to_sql_wildcard_string(&self) -> Result<String, AddressError> {
        self.cache()
            .strings
            .sql_wildcard
            .get_or_init(|| write_section(self, "", &sql_opts(self.family())))
            .clone()
    }

    /// Per-segment `0b...` binary, separator-joined.
    pub fn to_segmented_binary_string(&self) -> String {
        self.cache()
            .strings
            .segmented_binary
            .get_or_init(|| self.write_infallible("", &segmented_binary_opts(self.family())))
            .clone()
    }

    /// CIDR form: keeps an existing prefix, else adopts the single-block
    /// prefix when one exists, else falls back to the wildcard form.
    pub fn to_prefix_len_string(&self) -> String {
        if self.is_prefixed() {
            return self.to_canonical_string();
        }
        match self.assign_prefix_for_single_block() {
            Some(assigned) => assigned.to_canonical_string(),
            None => self.to_canonical_wildcard_string(),
        }
    }

    /// CIDR notation when possible, wildcards otherwise.
    pub fn to_subnet_string(&self) -> String {
        self.to_prefix_len_string()
    }

    pub(crate) fn reverse_dns_zoned(&self) -> Result<String, AddressError> {
        match self.family() {
            AddrFamily::V4 => {
                let opts = StringOpts {
                    reverse: true,
                    address_suffix: REV_DNS_V4_SUFFIX,
                    with_prefix_len: false,
                    ..v4_opts()
                };
                write_section(self, "", &opts)
            }
            AddrFamily::V6 => {
                let opts = StringOpts {
                    radix: 16,
                    separator: Some(IPV4_SEP),
                    reverse: true,
                    split_digits: true,
                    address_suffix: REV_DNS_V6_SUFFIX,
                    with_prefix_len: false,
                    ..Default::default()
                };
                write_section(self, "", &opts)
            }
            AddrFamily::Mac => Err(AddressError::incompatible(KEY_SEGMENT_MISMATCH)),
        }
    }

    /// `d.c.b.a.in-addr.arpa` / nibble-reversed `.ip6.arpa`. Fails when a
    /// nibble boundary cuts through a range.
    pub fn to_reverse_dns_string(&self) -> Result<String, AddressError> {
        self.cache()
            .strings
            .reverse_dns
            .get_or_init(|| self.reverse_dns_zoned())
            .clone()
    }

    pub(crate) fn mixed_zoned(&self, zone: &str) -> Result<String, AddressError> {
        if self.family() != AddrFamily::V6 || self.segment_count() != 8 {
            return Err(AddressError::parse(KEY_IPV6));
        }
        let view: Section = self.block_view();
        let (a, b) = split_seg16(view.get_segment(6))?;
        let (c, d) = split_seg16(view.get_segment(7))?;
        let tail: Section = Section::derive(vec![a, b, c, d], AddrFamily::V4, None);
        let head: Section = view.get_sub_section(0, 6).without_prefix_len();

        let head_str: String = head.write_infallible("", &no_prefix(canonical_opts(AddrFamily::V6)));
        let tail_str: String = tail.write_infallible("", &no_prefix(v4_opts()));

        let mut out: String = head_str;
        if !out.ends_with(IPV6_SEP) {
            out.push(IPV6_SEP);
        }
        out.push_str(&tail_str);
        if !zone.is_empty() {
            out.push(ZONE_SEP);
            out.push_str(zone);
        }
        if let Some(p) = self.prefix_len() {
            out.push(PREFIX_SEP);
            out.push_str(&p.to_string());
        }
        Ok(out)
    }

    /// The IPv6-mixed form `x:x:x:x:x:x:a.b.c.d`. Fails when the last two
    /// segments do not split into byte ranges.
    pub fn to_mixed_string(&self) -> Result<String, AddressError> {
        self.cache()
            .strings
            .mixed
            .get_or_init(|| self.mixed_zoned(""))
            .clone()
    }

    pub(crate) fn unc_zoned(&self, zone: &str) -> String {
        if self.family() != AddrFamily::V6 {
            return self.to_canonical_string();
        }
        let opts = StringOpts {
            radix: 16,
            separator: Some(UNC_SEP),
            zone_separator: UNC_ZONE_SEP,
            wildcards: Wildcards {
                wildcard: WILDCARD.to_string(),
                single_wildcard: SINGLE_WILDCARD.to_string(),
                range_separator: UNC_RANGE_SEP.to_string(),
            },
            compress: Some(CompressOpts {
                compress_single: false,
            }),
            address_suffix: UNC_SUFFIX,
            with_prefix_len: false,
            ..Default::default()
        };
        self.block_view().write_infallible(zone, &opts)
    }

    /// The UNC host-name literal: `:` becomes `-`, the zone separator
    /// becomes `s`, suffixed `.ipv6-literal.net`.
    pub fn to_unc_host_name_string(&self) -> String {
        self.cache()
            .strings
            .unc
            .get_or_init(|| self.unc_zoned(""))
            .clone()
    }
}

/* ---------------------------------- */
// address front-ends: delegate to the cached section strings unless a
// zone must be spliced in

impl Address {
    pub fn to_canonical_string(&self) -> String {
        if self.has_zone() {
            self.section().canonical_zoned(self.zone())
        } else {
            self.section().to_canonical_string()
        }
    }

    pub fn to_normalized_string(&self) -> String {
        if self.has_zone() {
            self.section().normalized_zoned(self.zone())
        } else {
            self.section().to_normalized_string()
        }
    }

    pub fn to_compressed_string(&self) -> String {
        if self.has_zone() {
            self.section().compressed_zoned(self.zone())
        } else {
            self.section().to_compressed_string()
        }
    }

    pub fn to_full_string(&self) -> String {
        if self.has_zone() {
            self.section().full_zoned(self.zone())
        } else {
            self.section().to_full_string()
        }
    }

    pub fn to_canonical_wildcard_string(&self) -> String {
        self.section().to_canonical_wildcard_string()
    }

    pub fn to_normalized_wildcard_string(&self) -> String {
        self.section().to_normalized_wildcard_string()
    }

    pub fn to_compressed_wildcard_string(&self) -> String {
        self.section().to_compressed_wildcard_string()
    }

    pub fn to_sql_wildcard_string(&self) -> Result<String, AddressError> {
        self.section().to_sql_wildcard_string()
    }

    pub fn to_segmented_binary_string(&self) -> String {
        self.section().to_segmented_binary_string()
    }

    pub fn to_prefix_len_string(&self) -> String {
        self.section().to_prefix_len_string()
    }

    pub fn to_subnet_string(&self) -> String {
        self.section().to_subnet_string()
    }

    pub fn to_reverse_dns_string(&self) -> Result<String, AddressError> {
        self.section().to_reverse_dns_string()
    }

    pub fn to_mixed_string(&self) -> Result<String, AddressError> {
        if self.has_zone() {
            self.section().mixed_zoned(self.zone())
        } else {
            self.section().to_mixed_string()
        }
    }

    pub fn to_unc_host_name_string(&self) -> String {
        if self.has_zone() {
            self.section().unc_zoned(self.zone())
        } else {
            self.section().to_unc_host_name_string()
        }
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{segment::Segment, types::PrefixLen, types::SegInt};

    fn v4(vals: [(SegInt, SegInt); 4], prefix: PrefixLen) -> Section {
        let segs: Vec<Segment> = vals
            .iter()
            .map(|&(l, u)| Segment::new(l, u, 8, None).unwrap())
            .collect();
        Section::new(segs, AddrFamily::V4, prefix).unwrap()
    }

    fn v6(vals: [SegInt; 8], prefix: PrefixLen) -> Section {
        let segs: Vec<Segment> = vals
            .iter()
            .map(|&v| Segment::new(v, v, 16, None).unwrap())
            .collect();
        Section::new(segs, AddrFamily::V6, prefix).unwrap()
    }

    #[test]
    fn test_v4_strings() {
        let s = v4([(10, 10), (11, 11), (12, 12), (13, 13)], Some(16));
        assert_eq!(s.to_normalized_string(), "10.11.12.13/16");
        assert_eq!(s.to_canonical_string(), "10.11.12.13/16");
        assert_eq!(s.to_full_string(), "010.011.012.013/16");
        let block = s.to_prefix_block();
        assert_eq!(block.to_canonical_string(), "10.11.0.0/16");
        assert_eq!(block.to_canonical_wildcard_string(), "10.11.*.*");
    }

    #[test]
    fn test_v6_compression() {
        let s = v6([0, 0, 0, 0, 0, 0, 0, 1], None);
        assert_eq!(s.to_canonical_string(), "::1");
        assert_eq!(s.to_normalized_string(), "0:0:0:0:0:0:0:1");
        assert_eq!(s.to_full_string(), "0000:0000:0000:0000:0000:0000:0000:0001");
        let all_zero = v6([0; 8], None);
        assert_eq!(all_zero.to_canonical_string(), "::");
        let mid = v6([1, 0, 0, 1, 0, 0, 0, 1], None);
        // the longer right-hand run wins
        assert_eq!(mid.to_canonical_string(), "1:0:0:1::1");
        let tie = v6([1, 0, 0, 1, 0, 0, 1, 1], None);
        // leftmost wins ties
        assert_eq!(tie.to_canonical_string(), "1::1:0:0:1:1");
        // a single zero segment compresses only in the compressed form
        let single = v6([1, 0, 2, 3, 4, 5, 6, 7], None);
        assert_eq!(single.to_canonical_string(), "1:0:2:3:4:5:6:7");
        assert_eq!(single.to_compressed_string(), "1::2:3:4:5:6:7");
    }

    #[test]
    fn test_v6_leading_trailing_runs() {
        let lead = v6([0, 0, 1, 2, 3, 4, 5, 6], None);
        assert_eq!(lead.to_canonical_string(), "::1:2:3:4:5:6");
        let trail = v6([1, 2, 3, 4, 5, 6, 0, 0], None);
        assert_eq!(trail.to_canonical_string(), "1:2:3:4:5:6::");
    }

    #[test]
    fn test_mixed_string() {
        let s = v6([1, 2, 3, 4, 5, 6, 0x0102, 0x0304], None);
        assert_eq!(s.to_mixed_string().unwrap(), "1:2:3:4:5:6:1.2.3.4");
        let mapped = v6([0, 0, 0, 0, 0, 0xffff, 0x0102, 0x0304], None);
        assert_eq!(mapped.to_mixed_string().unwrap(), "::ffff:1.2.3.4");
    }

    #[test]
    fn test_reverse_dns_v4() {
        let s = v4([(1, 1), (2, 2), (3, 3), (4, 4)], None);
        assert_eq!(s.to_reverse_dns_string().unwrap(), "4.3.2.1.in-addr.arpa");
    }

    #[test]
    fn test_reverse_dns_v6() {
        let s = v6([0, 0, 0, 0, 0, 0, 0, 1], None);
        assert_eq!(
            s.to_reverse_dns_string().unwrap(),
            "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.ip6.arpa"
        );
    }

    #[test]
    fn test_sql_wildcard() {
        let s = v4([(10, 19), (0, 255), (3, 3), (4, 4)], None);
        assert_eq!(s.to_sql_wildcard_string().unwrap(), "1_.%.3.4");
        let bad = v4([(10, 29), (0, 255), (3, 3), (4, 4)], None);
        assert!(bad.to_sql_wildcard_string().is_err());
    }

    #[test]
    fn test_segmented_binary() {
        let s = v4([(5, 5), (0, 255), (3, 3), (4, 4)], None);
        assert_eq!(
            s.to_segmented_binary_string(),
            "0b00000101.*.0b00000011.0b00000100"
        );
    }

    #[test]
    fn test_subnet_and_prefix_len_strings() {
        let block = v4([(10, 10), (11, 11), (0, 255), (0, 255)], None);
        assert_eq!(block.to_prefix_len_string(), "10.11.0.0/16");
        let plain = v4([(1, 2), (0, 255), (3, 3), (4, 4)], None);
        assert_eq!(plain.to_subnet_string(), "1-2.*.3.4");
    }

    #[test]
    fn test_unc() {
        let s = v6([0x2001, 0xdb8, 0, 0, 0, 0, 0, 1], None);
        assert_eq!(s.to_unc_host_name_string(), "2001-db8--1.ipv6-literal.net");
    }
}
