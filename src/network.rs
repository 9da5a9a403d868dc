// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-family singletons caching network masks, host masks and the
//! loopback address, indexed by prefix length. Slots fill on first use;
//! readers either see a fully built mask or rebuild and race to publish.

use crate::{
    address::Address,
    section::Section,
    types::{host_mask_u128, network_mask_u128, AddrFamily, BitCount},
};
use lazy_static::lazy_static;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use tracing::debug;

/// Mask and loopback cache for one IP family.
pub struct Network {
    family: AddrFamily,
    seg_count: usize,
    bits: BitCount,
    network_masks: RwLock<Vec<Option<Address>>>,
    prefixed_network_masks: RwLock<Vec<Option<Address>>>,
    host_masks: RwLock<Vec<Option<Address>>>,
    prefixed_host_masks: RwLock<Vec<Option<Address>>>,
    loopback: OnceCell<Address>,
}

lazy_static! {
    static ref IPV4_NETWORK: Network = Network::new(AddrFamily::V4);
    static ref IPV6_NETWORK: Network = Network::new(AddrFamily::V6);
}

/// The process-wide IPv4 [Network].
pub fn ipv4_network() -> &'static Network {
    &IPV4_NETWORK
}

/// The process-wide IPv6 [Network].
pub fn ipv6_network() -> &'static Network {
    &IPV6_NETWORK
}

impl Network {
    fn new(family: AddrFamily) -> Network {
        let seg_count: usize = family.default_segment_count();
        let bits: BitCount = family.bits_per_segment() * seg_count as BitCount;
        let slots: usize = bits as usize + 1;
        Network {
            family,
            seg_count,
            bits,
            network_masks: RwLock::new(vec![None; slots]),
            prefixed_network_masks: RwLock::new(vec![None; slots]),
            host_masks: RwLock::new(vec![None; slots]),
            prefixed_host_masks: RwLock::new(vec![None; slots]),
            loopback: OnceCell::new(),
        }
    }

    #[inline]
    pub fn family(&self) -> AddrFamily {
        self.family
    }

    /// Address with the first `p` bits one and the rest zero, unprefixed.
    pub fn get_network_mask(&self, p: BitCount) -> Address {
        self.get_mask(&self.network_masks, p, true, false)
    }

    /// [Self::get_network_mask] carrying `p` as its prefix length.
    pub fn get_prefixed_network_mask(&self, p: BitCount) -> Address {
        self.get_mask(&self.prefixed_network_masks, p, true, true)
    }

    /// Address with the first `p` bits zero and the rest one, unprefixed.
    pub fn get_host_mask(&self, p: BitCount) -> Address {
        self.get_mask(&self.host_masks, p, false, false)
    }

    /// [Self::get_host_mask] carrying `p` as its prefix length.
    pub fn get_prefixed_host_mask(&self, p: BitCount) -> Address {
        self.get_mask(&self.prefixed_host_masks, p, false, true)
    }

    /// The loopback address of the family (`127.0.0.1` / `::1`).
    pub fn get_loopback(&self) -> Address {
        self.loopback
            .get_or_init(|| {
                let value: u128 = match self.family {
                    AddrFamily::V4 => 0x7f000001,
                    _ => 1,
                };
                self.build(value, None)
            })
            .clone()
    }

    fn get_mask(
        &self,
        cache: &RwLock<Vec<Option<Address>>>,
        p: BitCount,
        network: bool,
        with_prefix: bool,
    ) -> Address {
        let p: usize = (p.min(self.bits)) as usize;
        if let Some(mask) = &cache.read()[p] {
            return mask.clone();
        }

        let value: u128 = if network {
            network_mask_u128(self.bits, p as BitCount)
        } else {
            host_mask_u128(self.bits, p as BitCount)
        };
        let built: Address = self.build(value, with_prefix.then_some(p as BitCount));

        let mut slots = cache.write();
        if let Some(winner) = &slots[p] {
            // another thread published first; its value is identical
            return winner.clone();
        }
        debug!(family = ?self.family, prefix = p, network, "mask cache fill");
        slots[p] = Some(built.clone());
        built
    }

    fn build(&self, value: u128, prefix: Option<BitCount>) -> Address {
        Address::derive(
            Section::from_value(value, self.family, self.seg_count, prefix),
            String::new(),
        )
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v4_masks() {
        let net = ipv4_network();
        assert_eq!(net.get_network_mask(24).get_value(), 0xffffff00);
        assert_eq!(net.get_network_mask(0).get_value(), 0);
        assert_eq!(net.get_network_mask(32).get_value(), 0xffffffff);
        assert_eq!(net.get_host_mask(24).get_value(), 0xff);
        assert_eq!(net.get_network_mask(24).prefix_len(), None);
        assert_eq!(net.get_prefixed_network_mask(24).prefix_len(), Some(24));
        assert_eq!(net.get_prefixed_host_mask(8).prefix_len(), Some(8));
    }

    #[test]
    fn test_v6_masks() {
        let net = ipv6_network();
        assert_eq!(
            net.get_network_mask(64).get_value(),
            0xffff_ffff_ffff_ffff_0000_0000_0000_0000
        );
        assert_eq!(net.get_host_mask(64).get_value(), 0xffff_ffff_ffff_ffff);
        // out-of-range prefixes clamp
        assert_eq!(net.get_network_mask(300).get_value(), u128::MAX);
    }

    #[test]
    fn test_cached_identity() {
        let net = ipv4_network();
        let a = net.get_network_mask(16);
        let b = net.get_network_mask(16);
        assert_eq!(a, b);
    }

    #[test]
    fn test_loopback() {
        assert!(ipv4_network().get_loopback().is_loopback());
        assert!(ipv6_network().get_loopback().is_loopback());
    }
}
