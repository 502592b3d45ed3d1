// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Bloom Filter implementation for probabilistic set membership testing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to test whether
//! an element is a member of a set. False positive matches are possible, but false negatives
//! are not. In other words, a query returns either "possibly in set" or "definitely not in set".
//!
//! # Properties
//!
//! - **No false negatives**: If a key was added, `exists()` will always return `true`
//! - **Possible false positives**: `exists()` may return `true` for keys never added
//! - **Fixed size**: the filter never resizes; keys cannot be removed, only all cleared by `reset()`
//!
//! # Usage
//!
//! ```rust
//! use bloomfilter::bloom::make_filter;
//!
//! // Create a filter sized for 100 keys with a 1% false positive rate
//! let mut filter = make_filter::<String>(100, 0.01).unwrap();
//!
//! assert!(filter.add("hello")); // new bits were set
//! assert!(filter.add("world"));
//! assert!(!filter.add("hello")); // nothing new to record
//!
//! assert!(filter.exists("hello"));
//! assert!(!filter.exists("C++")); // never added (probably)
//! ```
//!
//! # Keys
//!
//! A filter is generic over its key type and a [`KeyAdapter`] that reduces keys to bytes.
//! [`DefaultKeyAdapter`] covers text, byte strings, primitives and arrays of primitives; other
//! shapes implement [`FixedLayout`] or bring their own adapter:
//!
//! ```rust
//! use bloomfilter::bloom::make_filter;
//!
//! let mut filter = make_filter::<[i32; 3]>(100, 0.01).unwrap();
//! filter.add(&[1, 2, 3]);
//! assert!(filter.exists(&[1, 2, 3]));
//! ```
//!
//! # Implementation Details
//!
//! - Keys are hashed once with MurmurHash3 (x64, 128-bit) seeded with 4011
//! - The two 64-bit halves drive double hashing: probe `i` is `(h1 + i * h2) mod m`
//! - Bits packed in `u64` words
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/time trade-offs in hash coding with allowable errors"
//! - Kirsch and Mitzenmacher (2008). "Less Hashing, Same Performance: Building a Better Bloom
//!   Filter"

mod builder;
mod key;
mod sketch;

pub use self::builder::BloomFilterBuilder;
pub use self::builder::make_filter;
pub use self::builder::optimal_number_of_bits;
pub use self::builder::optimal_number_of_hash_functions;
pub use self::key::DefaultKeyAdapter;
pub use self::key::FixedLayout;
pub use self::key::KeyAdapter;
pub use self::sketch::BloomFilter;
