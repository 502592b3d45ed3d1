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

use std::f64::consts::LN_2;

use super::BloomFilter;
use crate::error::Error;
use crate::hash::DEFAULT_SEED;

pub const MIN_NUM_BITS: usize = 1;
pub const MAX_NUM_BITS: u64 = i32::MAX as u64 * 64;
pub const MIN_NUM_HASHES: i32 = 1;

/// Builder for creating [`BloomFilter`] instances.
///
/// Provides two construction modes:
/// - [`with_accuracy()`](Self::with_accuracy): Specify expected insertions and false positive
///   rate (recommended)
/// - [`with_size()`](Self::with_size): Specify bit count and probe count (manual)
///
/// Parameters are validated by [`build()`](Self::build).
#[derive(Debug, Clone, PartialEq)]
pub struct BloomFilterBuilder {
    num_bits: usize,
    num_hashes: i32,
    seed: u64,
}

impl BloomFilterBuilder {
    /// Creates a builder sized for `expected_insertions` keys at a target false positive
    /// probability `fpp`.
    ///
    /// An `expected_insertions` of 0 is treated as 1. An `fpp` of 0 is replaced by the smallest
    /// positive `f64`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilterBuilder;
    /// let builder = BloomFilterBuilder::with_accuracy(100, 0.01);
    /// assert_eq!(builder.num_bits(), 959);
    /// assert_eq!(builder.num_hashes(), 7);
    /// ```
    pub fn with_accuracy(expected_insertions: i64, fpp: f64) -> Self {
        let expected_insertions = if expected_insertions == 0 {
            1
        } else {
            expected_insertions
        };
        let num_bits = optimal_number_of_bits(expected_insertions, fpp);
        let total_bits = i64::try_from(num_bits).unwrap_or(i64::MAX);
        let num_hashes = optimal_number_of_hash_functions(expected_insertions, total_bits);

        tracing::debug!(
            expected_insertions,
            fpp,
            num_bits,
            num_hashes,
            "sized bloom filter from accuracy"
        );
        BloomFilterBuilder {
            num_bits,
            num_hashes,
            seed: DEFAULT_SEED,
        }
    }

    /// Creates a builder with manual size specification.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::{BloomFilter, BloomFilterBuilder};
    /// let filter: BloomFilter<str> = BloomFilterBuilder::with_size(10_000, 7).build().unwrap();
    /// assert_eq!(filter.capacity(), 10_000);
    /// ```
    pub fn with_size(num_bits: usize, num_hashes: i32) -> Self {
        BloomFilterBuilder {
            num_bits,
            num_hashes,
            seed: DEFAULT_SEED,
        }
    }

    /// Sets a custom hash seed (default: 4011).
    ///
    /// **Important**: Filters with different seeds cannot be combined.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the number of bits the filter will have.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Returns the number of probes per key the filter will use.
    pub fn num_hashes(&self) -> i32 {
        self.num_hashes
    }

    /// Builds the Bloom filter for keys of type `T` hashed through adapter `A`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`](crate::error::ErrorKind::InvalidConfiguration) if the
    /// bit count is 0 or too large to allocate, or the probe count is not positive. A target
    /// probability of 1 or more sizes the filter to 0 bits and fails here.
    pub fn build<T: ?Sized, A>(self) -> Result<BloomFilter<T, A>, Error> {
        BloomFilter::with_seed(self.num_bits, self.num_hashes, self.seed)
    }
}

/// Returns the bit count that achieves false positive probability `p` after `n` insertions.
///
/// Formula: `m = ceil(-n * ln(p) / ln(2)^2)`
///
/// A `p` of 0 is replaced by the smallest positive `f64` rather than producing an infinite
/// size. Inputs that yield no positive size (`n <= 0`, `p >= 1`) return 0.
///
/// # Examples
///
/// ```
/// # use bloomfilter::bloom::optimal_number_of_bits;
/// assert_eq!(optimal_number_of_bits(1000, 0.01), 9586);
/// ```
pub fn optimal_number_of_bits(expected_insertions: i64, target_fp_probability: f64) -> usize {
    let p = if target_fp_probability == 0.0 {
        f64::MIN_POSITIVE
    } else {
        target_fp_probability
    };
    let n = expected_insertions as f64;

    // float-to-int casts saturate, and map NaN to 0
    (-n * p.ln() / (LN_2 * LN_2)).ceil() as usize
}

/// Returns the probe count minimizing false positives for `n` insertions into `m` bits.
///
/// Formula: `k = max(1, round(m / n * ln(2)))`
///
/// # Examples
///
/// ```
/// # use bloomfilter::bloom::optimal_number_of_hash_functions;
/// assert_eq!(optimal_number_of_hash_functions(1000, 10_000), 7); // k ≈ 6.93
/// assert_eq!(optimal_number_of_hash_functions(1000, 1), 1);
/// ```
pub fn optimal_number_of_hash_functions(expected_insertions: i64, total_bits: i64) -> i32 {
    let m = total_bits as f64;
    let n = expected_insertions as f64;

    // f64::max ignores NaN, which covers 0 / 0
    (m / n * LN_2).round().max(f64::from(MIN_NUM_HASHES)) as i32
}

/// Creates an empty filter sized for `expected_insertions` keys at false positive probability
/// `target_fp_probability`, hashing keys with the [`DefaultKeyAdapter`](super::DefaultKeyAdapter).
///
/// Use [`BloomFilterBuilder`] to pick another adapter or seed.
///
/// # Errors
///
/// Returns [`InvalidConfiguration`](crate::error::ErrorKind::InvalidConfiguration) when the
/// parameters size the filter to 0 bits (`target_fp_probability >= 1` or negative
/// `expected_insertions`) or to more bits than a filter can hold.
///
/// # Examples
///
/// ```
/// # use bloomfilter::bloom::make_filter;
/// let mut filter = make_filter::<String>(100, 0.01).unwrap();
/// filter.add("hello");
/// assert!(filter.exists("hello"));
/// ```
pub fn make_filter<T: ?Sized>(
    expected_insertions: i64,
    target_fp_probability: f64,
) -> Result<BloomFilter<T>, Error> {
    BloomFilterBuilder::with_accuracy(expected_insertions, target_fp_probability).build()
}
