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

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use super::DefaultKeyAdapter;
use super::KeyAdapter;
use super::builder::MAX_NUM_BITS;
use super::builder::MIN_NUM_BITS;
use super::builder::MIN_NUM_HASHES;
use crate::error::Error;
use crate::hash::DEFAULT_SEED;
use crate::hash::MurmurHash3X64128;

/// A Bloom filter for probabilistic set membership testing.
///
/// Provides fast membership queries with:
/// - No false negatives (added items always return `true` from [`exists`](Self::exists))
/// - Tunable false positive rate
/// - Constant space usage: the bit count `m` and probe count `k` never change
///
/// `T` is the key type and `A` the [`KeyAdapter`] that turns keys into hashed bytes. Cloning
/// yields an independent deep copy of the bits.
///
/// The filter has no interior synchronization; share it across threads behind a lock.
pub struct BloomFilter<T: ?Sized, A = DefaultKeyAdapter> {
    /// Hash seed for all probes
    seed: u64,
    /// Number of probes per key (k)
    num_hashes: i32,
    /// Total number of bits in the filter (m)
    capacity_bits: usize,
    /// Count of bits set to 1 (for statistics)
    num_bits_set: u64,
    /// Bit array packed into u64 words
    /// Length = ceil(capacity_bits / 64)
    bit_array: Vec<u64>,
    marker: PhantomData<fn(&T, A)>,
}

impl<T: ?Sized, A> BloomFilter<T, A> {
    /// Creates an empty filter of `size` bits probed `num_hashes` times per key.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`](crate::error::ErrorKind::InvalidConfiguration) if `size`
    /// is 0 or above 2^37 - 64 bits (the largest supported size), if the bit array cannot be
    /// allocated, or if `num_hashes` is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilter;
    /// let filter = BloomFilter::<str>::new(1024, 5).unwrap();
    /// assert_eq!(filter.capacity(), 1024);
    /// assert_eq!(filter.num_hashes(), 5);
    ///
    /// assert!(BloomFilter::<str>::new(0, 5).is_err());
    /// assert!(BloomFilter::<str>::new(10, 0).is_err());
    /// ```
    pub fn new(size: usize, num_hashes: i32) -> Result<Self, Error> {
        Self::with_seed(size, num_hashes, DEFAULT_SEED)
    }

    /// Creates an empty filter hashing with `seed` instead of the default.
    ///
    /// # Errors
    ///
    /// Same conditions as [`new`](Self::new).
    pub fn with_seed(size: usize, num_hashes: i32, seed: u64) -> Result<Self, Error> {
        if size < MIN_NUM_BITS {
            return Err(
                Error::invalid_configuration("size must be greater than 0")
                    .with_context("size", size),
            );
        }
        if size as u64 > MAX_NUM_BITS {
            return Err(
                Error::invalid_configuration("size exceeds the maximum number of bits")
                    .with_context("size", size)
                    .with_context("max_size", MAX_NUM_BITS),
            );
        }
        if num_hashes < MIN_NUM_HASHES {
            return Err(Error::invalid_configuration(
                "number_of_hash_functions must be greater than 0",
            )
            .with_context("num_hashes", num_hashes));
        }

        let num_words = size.div_ceil(64);
        let mut bit_array = Vec::new();
        bit_array.try_reserve_exact(num_words).map_err(|err| {
            Error::invalid_configuration(format!("cannot allocate bit array: {err}"))
                .with_context("size", size)
        })?;
        bit_array.resize(num_words, 0u64);

        tracing::debug!(num_bits = size, num_hashes, seed, "created bloom filter");
        Ok(BloomFilter {
            seed,
            num_hashes,
            capacity_bits: size,
            num_bits_set: 0,
            bit_array,
            marker: PhantomData,
        })
    }

    /// Adds a key to the filter.
    ///
    /// Returns `true` if at least one of the key's `k` bits went from unset to set, i.e. the
    /// filter recorded new information. This is not a reliable "first insertion" signal: a key
    /// never seen before reports `false` when other keys already set all of its bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::make_filter;
    /// let mut filter = make_filter::<String>(100, 0.01).unwrap();
    /// assert!(filter.add("hello"));
    /// assert!(filter.add("world"));
    /// assert!(!filter.add("hello"));
    /// ```
    pub fn add<Q>(&mut self, value: &Q) -> bool
    where
        Q: ?Sized,
        T: Borrow<Q>,
        A: KeyAdapter<Q>,
    {
        let mut changed = false;
        for index in self.probes(value) {
            changed |= self.set_bit(index);
        }
        changed
    }

    /// Tests whether a key is possibly in the set.
    ///
    /// Returns:
    /// - `true`: the key was **possibly** added (or this is a false positive)
    /// - `false`: the key was **definitely not** added
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::make_filter;
    /// let mut filter = make_filter::<i32>(100, 0.01).unwrap();
    /// filter.add(&111);
    ///
    /// assert!(filter.exists(&111));
    /// assert!(!filter.exists(&333));
    /// ```
    pub fn exists<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized,
        T: Borrow<Q>,
        A: KeyAdapter<Q>,
    {
        self.probes(value).all(|index| self.get_bit(index))
    }

    /// Resets the filter to its initial empty state.
    ///
    /// Clears all bits while preserving capacity, probe count and seed.
    pub fn reset(&mut self) {
        self.bit_array.fill(0);
        self.num_bits_set = 0;
    }

    /// Merges another filter into this one via bitwise OR (union).
    ///
    /// After merging, this filter recognizes keys added to either filter.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`](crate::error::ErrorKind::InvalidConfiguration) if the
    /// filters are not [compatible](Self::is_compatible); `self` is left unchanged.
    pub fn union(&mut self, other: &Self) -> Result<(), Error> {
        self.check_compatible(other, "cannot union incompatible bloom filters")?;
        self.combine(other, |word, other_word| word | other_word);
        Ok(())
    }

    /// Intersects this filter with another via bitwise AND.
    ///
    /// Afterwards this filter recognizes keys added to both filters, plus false positives.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`](crate::error::ErrorKind::InvalidConfiguration) if the
    /// filters are not [compatible](Self::is_compatible); `self` is left unchanged.
    pub fn intersect(&mut self, other: &Self) -> Result<(), Error> {
        self.check_compatible(other, "cannot intersect incompatible bloom filters")?;
        self.combine(other, |word, other_word| word & other_word);
        Ok(())
    }

    /// Returns whether no bit is set.
    pub fn is_empty(&self) -> bool {
        self.num_bits_set == 0
    }

    /// Returns the number of bits set to 1.
    pub fn bits_used(&self) -> u64 {
        self.num_bits_set
    }

    /// Returns the total number of bits in the filter (`m`).
    pub fn capacity(&self) -> usize {
        self.capacity_bits
    }

    /// Returns the number of probes per key (`k`).
    pub fn num_hashes(&self) -> i32 {
        self.num_hashes
    }

    /// Returns the hash seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the fraction of bits set.
    pub fn load_factor(&self) -> f64 {
        self.num_bits_set as f64 / self.capacity_bits as f64
    }

    /// Estimates the current false positive probability as `load_factor^k`.
    ///
    /// This assumes uniformly distributed bits.
    pub fn estimated_fpp(&self) -> f64 {
        self.load_factor().powi(self.num_hashes)
    }

    /// Checks whether two filters probe the same positions for every key.
    ///
    /// Filters are compatible if they have the same capacity, number of probes and seed.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.capacity_bits == other.capacity_bits
            && self.num_hashes == other.num_hashes
            && self.seed == other.seed
    }

    fn check_compatible(&self, other: &Self, msg: &'static str) -> Result<(), Error> {
        if self.is_compatible(other) {
            return Ok(());
        }
        Err(Error::invalid_configuration(msg)
            .with_context("capacity", format!("{} vs {}", self.capacity_bits, other.capacity_bits))
            .with_context("num_hashes", format!("{} vs {}", self.num_hashes, other.num_hashes))
            .with_context("seed", format!("{} vs {}", self.seed, other.seed)))
    }

    fn combine(&mut self, other: &Self, op: impl Fn(u64, u64) -> u64) {
        // Count bits during the combine (single pass)
        let mut num_bits_set = 0;
        for (word, other_word) in self.bit_array.iter_mut().zip(&other.bit_array) {
            *word = op(*word, *other_word);
            num_bits_set += u64::from(word.count_ones());
        }
        self.num_bits_set = num_bits_set;
    }

    fn probes<Q>(&self, value: &Q) -> Probes
    where
        Q: ?Sized,
        A: KeyAdapter<Q>,
    {
        let mut hasher = MurmurHash3X64128::with_seed(self.seed);
        A::write_key(value, &mut hasher);
        let (h1, h2) = hasher.finish128();
        Probes::new(h1, h2, self.capacity_bits, self.num_hashes)
    }

    fn get_bit(&self, bit_index: usize) -> bool {
        let mask = 1u64 << (bit_index & 63);
        (self.bit_array[bit_index >> 6] & mask) != 0
    }

    /// Sets a single bit; returns whether it was previously unset.
    fn set_bit(&mut self, bit_index: usize) -> bool {
        let word = &mut self.bit_array[bit_index >> 6];
        let mask = 1u64 << (bit_index & 63);
        if *word & mask != 0 {
            return false;
        }
        *word |= mask;
        self.num_bits_set += 1;
        true
    }
}

/// Probe positions of one key, derived by double hashing.
///
/// The `i`-th position is `(h1 + i * h2) mod m`, produced by repeatedly adding `h2` to a walking
/// `h1` with wrap-around, so a single 128-bit hash serves all `k` probes.
#[derive(Debug, Clone)]
struct Probes {
    h1: u64,
    h2: u64,
    capacity: u64,
    remaining: i32,
}

impl Probes {
    fn new(h1: u64, h2: u64, capacity: usize, num_hashes: i32) -> Self {
        Probes {
            h1,
            h2,
            capacity: capacity as u64,
            remaining: num_hashes,
        }
    }
}

impl Iterator for Probes {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining <= 0 {
            return None;
        }
        self.remaining -= 1;
        let index = self.h1 % self.capacity;
        self.h1 = self.h1.wrapping_add(self.h2);
        Some(index as usize)
    }
}

impl<T: ?Sized, A> Clone for BloomFilter<T, A> {
    fn clone(&self) -> Self {
        BloomFilter {
            seed: self.seed,
            num_hashes: self.num_hashes,
            capacity_bits: self.capacity_bits,
            num_bits_set: self.num_bits_set,
            bit_array: self.bit_array.clone(),
            marker: PhantomData,
        }
    }
}

impl<T: ?Sized, A> PartialEq for BloomFilter<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.is_compatible(other) && self.bit_array == other.bit_array
    }
}

impl<T: ?Sized, A> Eq for BloomFilter<T, A> {}

impl<T: ?Sized, A> fmt::Debug for BloomFilter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("seed", &self.seed)
            .field("num_hashes", &self.num_hashes)
            .field("capacity_bits", &self.capacity_bits)
            .field("num_bits_set", &self.num_bits_set)
            .finish_non_exhaustive()
    }
}
