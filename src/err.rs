// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error kinds shared by the whole crate.
//!
//! Every variant carries an opaque i18n key (see [crate::strings]); the
//! library itself renders no prose beyond the key and the offending
//! value/position, leaving translation to the host program.

use std::fmt;
use thiserror::Error;

/// Errors produced by constructors, parsers and range operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum AddressError {
    /// A raw numeric input was out of bounds for the address family
    /// (segment value too large, too many segments, bad bit count).
    Value { key: &'static str, value: u64 },
    /// The input string violates a syntactic or semantic parsing rule.
    /// `position` is a byte index into the offending string, if known.
    Parse {
        key: &'static str,
        position: Option<usize>,
    },
    /// An operation would produce a multi-valued set that is not
    /// representable in per-segment `[lower, upper]` range form.
    Incompatible { key: &'static str },
    /// Segment-level prefixes do not align into one section prefix.
    InconsistentPrefix { key: &'static str },
    /// A byte buffer or segment slice had the wrong length.
    SizeMismatch { key: &'static str },
}

impl AddressError {
    /// The i18n key carried by this error.
    pub fn key(&self) -> &'static str {
        match self {
            AddressError::Value { key, .. }
            | AddressError::Parse { key, .. }
            | AddressError::Incompatible { key }
            | AddressError::InconsistentPrefix { key }
            | AddressError::SizeMismatch { key } => key,
        }
    }

    #[inline]
    pub(crate) fn value(key: &'static str, value: u64) -> Self {
        AddressError::Value { key, value }
    }

    #[inline]
    pub(crate) fn parse(key: &'static str) -> Self {
        AddressError::Parse { key, position: None }
    }

    #[inline]
    pub(crate) fn parse_at(key: &'static str, position: usize) -> Self {
        AddressError::Parse {
            key,
            position: Some(position),
        }
    }

    #[inline]
    pub(crate) fn incompatible(key: &'static str) -> Self {
        AddressError::Incompatible { key }
    }
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::Value { key, value } => write!(f, "{key}: {value}"),
            AddressError::Parse { key, position } => match position {
                Some(pos) => write!(f, "{key} @ {pos}"),
                None => write!(f, "{key}"),
            },
            AddressError::Incompatible { key }
            | AddressError::InconsistentPrefix { key }
            | AddressError::SizeMismatch { key } => write!(f, "{key}"),
        }
    }
}
