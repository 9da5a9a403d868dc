// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parse-parameter structs. Defaults are permissive, matching the wide
//! net the parser is expected to cast; callers strike out the forms they
//! do not want.

/// Per-family range/wildcard allowances.
#[derive(Clone, Copy, Debug)]
pub struct RangeParseParams {
    /// `*` (and `¿`) spanning a whole segment
    pub allow_wildcard: bool,
    /// `a-b`, `a-`, `-b` (and `»`) per segment
    pub allow_range: bool,
    /// trailing `_` digit wildcards
    pub allow_single_wildcard: bool,
}

impl Default for RangeParseParams {
    fn default() -> Self {
        RangeParseParams {
            allow_wildcard: true,
            allow_range: true,
            allow_single_wildcard: true,
        }
    }
}

/// Options of the IP address parser.
#[derive(Clone, Debug)]
pub struct ParseParams {
    /// the empty string parses to the zero address
    pub allow_empty: bool,
    /// a lone `*` parses to the all-addresses value
    pub allow_all: bool,
    /// `/n` suffixes are honored
    pub allow_prefix: bool,
    /// `/a.b.c.d` and `/a:b::h` mask suffixes are honored
    pub allow_mask: bool,
    /// a lone `/n` with no address is valid
    pub allow_prefix_only: bool,
    /// master switch over `*`, `_` and `a-b`
    pub allow_wildcard_and_range: bool,
    /// a 1-part inet_aton integer is accepted
    pub allow_single_segment: bool,
    /// leading zeros in segments are tolerated
    pub allow_leading_zeros: bool,
    /// no cap on the number of leading zeros
    pub allow_unlimited_leading_zeros: bool,
    /// a leading `0` means octal (inet_aton)
    pub allow_inet_aton_octal: bool,
    /// a leading `0x` means hex (inet_aton)
    pub allow_inet_aton_hex: bool,
    /// 1-, 2- and 3-part IPv4 strings are accepted
    pub allow_inet_aton_joined: bool,
    /// per-segment `0b...` binary is accepted
    pub allow_binary: bool,
    /// `%` any-sequence and `_` any-digit SQL wildcards
    pub allow_sql_wildcards: bool,
    /// IPv6 `%zone` suffixes are accepted
    pub allow_zone: bool,
    /// a trailing `a.b.c.d` inside IPv6 is accepted
    pub allow_ipv4_in_ipv6: bool,
    /// 20-digit RFC 1924 base-85 IPv6 strings are accepted
    pub allow_base85: bool,
    pub ipv4_range: RangeParseParams,
    pub ipv6_range: RangeParseParams,
}

impl Default for ParseParams {
    fn default() -> Self {
        ParseParams {
            allow_empty: true,
            allow_all: true,
            allow_prefix: true,
            allow_mask: true,
            allow_prefix_only: true,
            allow_wildcard_and_range: true,
            allow_single_segment: true,
            allow_leading_zeros: true,
            allow_unlimited_leading_zeros: true,
            allow_inet_aton_octal: true,
            allow_inet_aton_hex: true,
            allow_inet_aton_joined: true,
            allow_binary: true,
            allow_sql_wildcards: false,
            allow_zone: true,
            allow_ipv4_in_ipv6: true,
            allow_base85: true,
            ipv4_range: RangeParseParams::default(),
            ipv6_range: RangeParseParams::default(),
        }
    }
}

impl ParseParams {
    /// Plain addresses only: no ranges, no wildcards, no legacy radices,
    /// no masks.
    pub fn strict() -> Self {
        ParseParams {
            allow_empty: false,
            allow_all: false,
            allow_mask: false,
            allow_prefix_only: false,
            allow_wildcard_and_range: false,
            allow_single_segment: false,
            allow_leading_zeros: false,
            allow_unlimited_leading_zeros: false,
            allow_inet_aton_octal: false,
            allow_inet_aton_hex: false,
            allow_inet_aton_joined: false,
            allow_binary: false,
            allow_base85: false,
            ..Default::default()
        }
    }
}

/// Options of the MAC address parser.
#[derive(Clone, Debug)]
pub struct MacParseParams {
    pub allow_empty: bool,
    pub allow_all: bool,
    pub allow_wildcard_and_range: bool,
    pub allow_leading_zeros: bool,
    /// a 12- or 16-digit separator-free hex string is accepted
    pub allow_single_segment: bool,
}

impl Default for MacParseParams {
    fn default() -> Self {
        MacParseParams {
            allow_empty: true,
            allow_all: true,
            allow_wildcard_and_range: true,
            allow_leading_zeros: true,
            allow_single_segment: true,
        }
    }
}
