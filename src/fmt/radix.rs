// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Whole-value radix renderings (hex, octal, binary) and the base-85
//! IPv6 form. Multi-valued sections must be sequential to render as a
//! `lower-upper` pair; anything else cannot be expressed in one value.

use crate::{
    address::Address,
    err::AddressError,
    section::Section,
    strings::*,
    types::{AddrFamily, BitCount},
};
use once_cell::sync::OnceCell;

impl Section {
    /// Whole-value hexadecimal, zero-padded; `0x`-labelled on request.
    pub fn to_hex_string(&self, with_prefix: bool) -> Result<String, AddressError> {
        let slot: &OnceCell<Result<String, AddressError>> = if with_prefix {
            &self.cache().strings.hex_prefixed
        } else {
            &self.cache().strings.hex
        };
        slot.get_or_init(|| self.radix_string(16, if with_prefix { HEX_PREFIX } else { "" }))
            .clone()
    }

    /// Whole-value octal, zero-padded; `0`-labelled on request.
    pub fn to_octal_string(&self, with_prefix: bool) -> Result<String, AddressError> {
        let slot: &OnceCell<Result<String, AddressError>> = if with_prefix {
            &self.cache().strings.octal_prefixed
        } else {
            &self.cache().strings.octal
        };
        slot.get_or_init(|| self.radix_string(8, if with_prefix { OCTAL_PREFIX } else { "" }))
            .clone()
    }

    /// Whole-value binary, zero-padded; `0b`-labelled on request.
    pub fn to_binary_string(&self, with_prefix: bool) -> Result<String, AddressError> {
        let slot: &OnceCell<Result<String, AddressError>> = if with_prefix {
            &self.cache().strings.binary_prefixed
        } else {
            &self.cache().strings.binary
        };
        slot.get_or_init(|| self.radix_string(2, if with_prefix { BINARY_PREFIX } else { "" }))
            .clone()
    }

    fn radix_string(&self, radix: u32, label: &str) -> Result<String, AddressError> {
        let bits: BitCount = self.bit_count();
        let width: usize = match radix {
            2 => bits as usize,
            8 => (bits as usize).div_ceil(3),
            _ => (bits as usize) / 4,
        };
        let fmt = |v: u128| -> String {
            let digits: String = match radix {
                2 => format!("{v:b}"),
                8 => format!("{v:o}"),
                _ => format!("{v:x}"),
            };
            let mut s: String = String::with_capacity(label.len() + width);
            s.push_str(label);
            for _ in digits.len()..width {
                s.push('0');
            }
            s.push_str(&digits);
            s
        };
        if !self.is_multiple() {
            return Ok(fmt(self.get_value()));
        }
        if !self.is_sequential() {
            return Err(AddressError::incompatible(KEY_NOT_SEQUENTIAL));
        }
        Ok(format!(
            "{}{RANGE_SEP}{}",
            fmt(self.get_value()),
            fmt(self.get_upper_value())
        ))
    }

    pub(crate) fn base85_zoned(&self, zone: &str) -> Result<String, AddressError> {
        if self.family() != AddrFamily::V6 || self.segment_count() != 8 {
            return Err(AddressError::parse(KEY_IPV6));
        }
        let mut out: String = if self.is_multiple() {
            if !self.is_sequential() {
                return Err(AddressError::incompatible(KEY_NOT_SEQUENTIAL));
            }
            format!(
                "{}{ALT_RANGE_SEP}{}",
                encode_base85(self.get_value()),
                encode_base85(self.get_upper_value())
            )
        } else {
            encode_base85(self.get_value())
        };
        if !zone.is_empty() {
            out.push(ALT_ZONE_SEP);
            out.push_str(zone);
        }
        Ok(out)
    }

    /// The RFC 1924 base-85 form, 20 digits; ranges join with `»`.
    pub fn to_base85_string(&self) -> Result<String, AddressError> {
        self.cache()
            .strings
            .base85
            .get_or_init(|| self.base85_zoned(""))
            .clone()
    }
}

impl Address {
    pub fn to_hex_string(&self, with_prefix: bool) -> Result<String, AddressError> {
        self.section().to_hex_string(with_prefix)
    }

    pub fn to_octal_string(&self, with_prefix: bool) -> Result<String, AddressError> {
        self.section().to_octal_string(with_prefix)
    }

    pub fn to_binary_string(&self, with_prefix: bool) -> Result<String, AddressError> {
        self.section().to_binary_string(with_prefix)
    }

    /// Base-85 with the zone (if any) behind `§`.
    pub fn to_base85_string(&self) -> Result<String, AddressError> {
        if self.has_zone() {
            self.section().base85_zoned(self.zone())
        } else {
            self.section().to_base85_string()
        }
    }
}

/// 128-bit value to the 20-digit RFC 1924 form.
pub(crate) fn encode_base85(value: u128) -> String {
    let mut digits: [u8; BASE85_DIGITS] = [0; BASE85_DIGITS];
    let mut v: u128 = value;
    for slot in digits.iter_mut().rev() {
        *slot = BASE85_ALPHABET[(v % 85) as u8 as usize];
        v /= 85;
    }
    String::from_utf8(digits.to_vec()).expect("ascii alphabet")
}

/// Inverse of [encode_base85]; `None` for anything but 20 alphabet chars.
pub(crate) fn decode_base85(s: &str) -> Option<u128> {
    let bytes: &[u8] = s.as_bytes();
    if bytes.len() != BASE85_DIGITS {
        return None;
    }
    let mut value: u128 = 0;
    for &b in bytes {
        let digit: usize = BASE85_ALPHABET.iter().position(|&a| a == b)?;
        value = value.checked_mul(85)?.checked_add(digit as u128)?;
    }
    Some(value)
}

/* -------------------------------------------------------------------------- */
