// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Separator characters and i18n error keys, in one place.
//!
//! Errors never render human-readable prose; they carry one of the
//! `ipaddress.error.*` keys below and the host program translates.

/* ---------------------------------- */
// separators and special characters

pub(crate) const IPV4_SEP: char = '.';
pub(crate) const IPV6_SEP: char = ':';
pub(crate) const MAC_COLON_SEP: char = ':';
pub(crate) const MAC_DASH_SEP: char = '-';
pub(crate) const MAC_DOT_SEP: char = '.';
pub(crate) const MAC_SPACE_SEP: char = ' ';
pub(crate) const PREFIX_SEP: char = '/';
pub(crate) const ZONE_SEP: char = '%';
pub(crate) const RANGE_SEP: char = '-';
pub(crate) const WILDCARD: char = '*';
pub(crate) const SINGLE_WILDCARD: char = '_';
pub(crate) const SQL_WILDCARD: char = '%';
pub(crate) const MAC_DASHED_RANGE_SEP: char = '|';

// alternates, chosen to be disjoint from the base-85 alphabet so that
// base-85 strings with ranges and zones can round-trip
pub(crate) const ALT_RANGE_SEP: char = '\u{00bb}'; // »
pub(crate) const ALT_WILDCARD: char = '\u{00bf}'; // ¿
pub(crate) const ALT_ZONE_SEP: char = '\u{00a7}'; // §

pub(crate) const HEX_PREFIX: &str = "0x";
pub(crate) const OCTAL_PREFIX: &str = "0";
pub(crate) const BINARY_PREFIX: &str = "0b";

pub(crate) const REV_DNS_V4_SUFFIX: &str = ".in-addr.arpa";
pub(crate) const REV_DNS_V6_SUFFIX: &str = ".ip6.arpa";
pub(crate) const UNC_SUFFIX: &str = ".ipv6-literal.net";
pub(crate) const UNC_SEP: char = '-';
pub(crate) const UNC_ZONE_SEP: char = 's';
pub(crate) const UNC_RANGE_SEP: char = '\u{00a6}'; // ¦

/// RFC 1924 alphabet for base-85 IPv6 strings.
pub(crate) const BASE85_ALPHABET: &[u8; 85] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";
pub(crate) const BASE85_DIGITS: usize = 20;

/* ---------------------------------- */
// i18n keys: value errors

pub(crate) static KEY_EXCEEDS_SIZE: &str = "ipaddress.error.exceeds.size";
pub(crate) static KEY_VALUE_EXCEEDS_SEGMENT: &str = "ipaddress.error.value.exceeds.segment";
pub(crate) static KEY_LOWER_ABOVE_UPPER: &str = "ipaddress.error.lower.above.upper";
pub(crate) static KEY_PREFIX_SIZE: &str = "ipaddress.error.prefixSize";
pub(crate) static KEY_SEGMENT_COUNT: &str = "ipaddress.error.segment.count";
pub(crate) static KEY_MISMATCHED_BIT_SIZE: &str = "ipaddress.error.mismatched.bit.size";

/* ---------------------------------- */
// i18n keys: string (parse) errors

pub(crate) static KEY_INVALID_CHAR: &str = "ipaddress.error.invalid.character";
pub(crate) static KEY_NULL_SEGMENT: &str = "ipaddress.error.null.segment";
pub(crate) static KEY_TOO_FEW_SEGMENTS: &str = "ipaddress.error.too.few.segments";
pub(crate) static KEY_TOO_MANY_SEGMENTS: &str = "ipaddress.error.too.many.segments";
pub(crate) static KEY_SINGLE_SEGMENT: &str = "ipaddress.error.single.segment";
pub(crate) static KEY_LEADING_ZEROS: &str = "ipaddress.error.leading.zeros";
pub(crate) static KEY_INVALID_RANGE: &str = "ipaddress.error.invalidRange";
pub(crate) static KEY_WILDCARD_NOT_ALLOWED: &str = "ipaddress.error.wildcard.not.allowed";
pub(crate) static KEY_EMPTY_NOT_ALLOWED: &str = "ipaddress.error.empty.not.allowed";
pub(crate) static KEY_ALL_NOT_ALLOWED: &str = "ipaddress.error.all.not.allowed";
pub(crate) static KEY_PREFIX_NOT_ALLOWED: &str = "ipaddress.error.prefix.not.allowed";
pub(crate) static KEY_MASK_NOT_ALLOWED: &str = "ipaddress.error.mask.not.allowed";
pub(crate) static KEY_ZONE_NOT_ALLOWED: &str = "ipaddress.error.zone.not.allowed";
pub(crate) static KEY_INET_ATON_NOT_ALLOWED: &str = "ipaddress.error.inet_aton.not.allowed";
pub(crate) static KEY_IPV4_IN_IPV6_NOT_ALLOWED: &str = "ipaddress.error.ipv4.in.ipv6.not.allowed";
pub(crate) static KEY_INVALID_PREFIX: &str = "ipaddress.error.invalid.prefix";
pub(crate) static KEY_INVALID_MASK: &str = "ipaddress.error.invalid.mask";
pub(crate) static KEY_INVALID_ZONE: &str = "ipaddress.error.invalid.zone";
pub(crate) static KEY_INVALID_JOINED_RANGES: &str = "ipaddress.error.invalid.joined.ranges";
pub(crate) static KEY_INVALID_MIXED: &str = "ipaddress.error.invalid.mixed";
pub(crate) static KEY_DOUBLE_COMPRESSION: &str = "ipaddress.error.double.compression";
pub(crate) static KEY_IPV6: &str = "ipaddress.error.only.ipv6";
pub(crate) static KEY_IPV4: &str = "ipaddress.error.only.ipv4";

/* ---------------------------------- */
// i18n keys: incompatibility errors

pub(crate) static KEY_MASKED_RANGE: &str = "ipaddress.error.maskMismatch";
pub(crate) static KEY_REVERSED_RANGE: &str = "ipaddress.error.reverseRange";
pub(crate) static KEY_SEGMENT_MISMATCH: &str = "ipaddress.error.segmentMismatch";
pub(crate) static KEY_SPLIT_SEGMENT: &str = "ipaddress.error.splitSeg";
pub(crate) static KEY_NOT_SEQUENTIAL: &str = "ipaddress.error.not.sequential";
pub(crate) static KEY_MULTIPLE_TO_SINGLE: &str = "ipaddress.error.address.is.not.single";

/* ---------------------------------- */
// i18n keys: prefix consistency and size

pub(crate) static KEY_INCONSISTENT_PREFIXES: &str = "ipaddress.error.inconsistent.prefixes";
pub(crate) static KEY_SIZE_MISMATCH: &str = "ipaddress.error.size.mismatch";
