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

//! Seeded non-cryptographic hashing for filter keys.
//!
//! Every key is reduced to the 128-bit output of MurmurHash3 (x64 variant), which the bloom
//! filter consumes as a pair of 64-bit words.

mod murmurhash;

pub use self::murmurhash::MurmurHash3X64128;

/// The seed used by filters unless the builder overrides it.
///
/// Two filters only agree on the probe positions of a key when they hash with the same seed, so
/// filters that are combined with [`union`] or [`intersect`] must share it.
///
/// [`union`]: crate::bloom::BloomFilter::union
/// [`intersect`]: crate::bloom::BloomFilter::intersect
pub const DEFAULT_SEED: u64 = 4011;

/// Hashes `bytes` in one shot and returns the `(h1, h2)` pair.
///
/// This is equivalent to feeding `bytes` into [`MurmurHash3X64128`] and calling
/// [`finish128`](MurmurHash3X64128::finish128).
///
/// # Examples
///
/// ```
/// # use bloomfilter::hash::murmurhash3_x64_128;
/// let (h1, h2) = murmurhash3_x64_128(b"", 0);
/// assert_eq!((h1, h2), (0, 0));
/// ```
pub fn murmurhash3_x64_128(bytes: &[u8], seed: u32) -> (u64, u64) {
    use std::hash::Hasher;

    let mut hasher = MurmurHash3X64128::with_seed(u64::from(seed));
    hasher.write(bytes);
    hasher.finish128()
}
