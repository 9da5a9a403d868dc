// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
IP (v4/v6) and MAC/EUI addresses with first-class ranges.

A single [Address] may denote one address, an arbitrary per-segment range
set (`1-2.*.3.4`), a CIDR prefix block (`10.11.0.0/16`) or, via
[AddrRange], any sequential run between two addresses. On top of that
model sit the range algebra (containment, intersection, subtraction,
spanning into CIDR blocks), a permissive multi-format parser ([AddrStr],
[MacAddrStr]) and a string generator covering canonical, compressed,
full, wildcard, reverse-DNS, radix and base-85 renderings.

```
use addrtools::Address;

fn main() -> Result<(), addrtools::AddressError> {
    let block = "1.2.3.4/16".parse::<Address>()?.to_prefix_block();
    assert_eq!(block.to_canonical_string(), "1.2.0.0/16");
    assert!(block.contains(&"1.2.200.200".parse()?));
    Ok(())
}
```

Everything user-visible is immutable; derived values (bounds, counts,
byte forms, rendered strings, network masks) fill idempotent caches on
first use and are safe to share across threads.
*/

mod address;
mod err;
mod fmt;
mod mac;
mod network;
mod parse;
mod range;
mod section;
mod segment;
mod strings;
mod types;

pub use address::{Address, AddressIter};
pub use err::AddressError;
pub use fmt::{CompressOpts, StringOpts, Wildcards};
pub use network::{ipv4_network, ipv6_network, Network};
pub use parse::{AddrStr, MacAddrStr, MacParseParams, ParseParams, RangeParseParams};
pub use range::{AddrRange, AddrRangeIter};
pub use section::{Section, SectionIter, SectionPrefixIter};
pub use segment::{SegIter, SegPrefixIter, Segment};
pub use types::{
    AddrFamily, BitCount, Port, PrefixLen, SegInt, IPV4_BITS, IPV6_BITS, MAC_BITS, MAC_EXT_BITS,
};

/* -------------------------------------------------------------------------- */
