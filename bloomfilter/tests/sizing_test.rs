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

use bloomfilter::bloom::BloomFilterBuilder;
use bloomfilter::bloom::optimal_number_of_bits;
use bloomfilter::bloom::optimal_number_of_hash_functions;
use googletest::assert_that;
use googletest::prelude::eq;
use googletest::prelude::ge;
use googletest::prelude::le;
use googletest::prelude::near;

const PROBABILITIES: [f64; 8] = [0.5, 0.2, 0.1, 0.05, 0.01, 0.001, 1e-6, 1e-12];

#[test]
fn test_bits_non_decreasing_in_insertions() {
    for p in PROBABILITIES {
        let mut previous = 0;
        for n in (1..=100_000).step_by(997) {
            let bits = optimal_number_of_bits(n, p);
            assert_that!(bits, ge(previous), "n: {n}, p: {p}");
            previous = bits;
        }
    }
}

#[test]
fn test_bits_non_increasing_in_probability() {
    for n in [1, 10, 100, 12_345, 1_000_000] {
        let mut previous = usize::MAX;
        for p in std::iter::once(0.0).chain(PROBABILITIES.into_iter().rev()) {
            let bits = optimal_number_of_bits(n, p);
            assert_that!(bits, le(previous), "n: {n}, p: {p}");
            previous = bits;
        }
    }
}

#[test]
fn test_hash_functions_at_least_one() {
    for n in [-10, 0, 1, 10, 1_000, 1_000_000] {
        for m in [-10, 0, 1, 10, 1_000, 1_000_000] {
            assert_that!(optimal_number_of_hash_functions(n, m), ge(1), "n: {n}, m: {m}");
        }
    }
}

#[test]
fn test_optimal_sizing_meets_target() {
    // (1 - e^{-kn/m})^k at the suggested parameters stays close to the requested rate
    for n in [10_i64, 100, 1_000, 100_000] {
        for p in [0.1, 0.01, 0.001] {
            let m = optimal_number_of_bits(n, p);
            let k = optimal_number_of_hash_functions(n, m as i64);
            let fpp = (1.0 - (-(k as f64) * n as f64 / m as f64).exp()).powi(k);
            assert_that!(fpp, near(p, p * 0.2), "n: {n}, p: {p}");
        }
    }
}

#[test]
fn test_builder_uses_sizing_functions() {
    for (n, p) in [(1_i64, 0.5), (100, 0.01), (5_000, 0.001)] {
        let builder = BloomFilterBuilder::with_accuracy(n, p);
        let m = optimal_number_of_bits(n, p);
        assert_that!(builder.num_bits(), eq(m));
        assert_that!(
            builder.num_hashes(),
            eq(optimal_number_of_hash_functions(n, m as i64))
        );
    }
}
