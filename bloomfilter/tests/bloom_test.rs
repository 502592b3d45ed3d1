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

use std::hash::Hasher;

use bloomfilter::bloom::BloomFilter;
use bloomfilter::bloom::BloomFilterBuilder;
use bloomfilter::bloom::FixedLayout;
use bloomfilter::bloom::KeyAdapter;
use bloomfilter::bloom::make_filter;
use bloomfilter::error::ErrorKind;
use googletest::assert_that;
use googletest::prelude::eq;
use googletest::prelude::le;

#[test]
fn test_string_scenario() {
    let mut filter = make_filter::<String>(100, 0.01).unwrap();
    assert!(filter.add("hello"));
    assert!(filter.add("world"));
    assert!(!filter.add("hello"));
    assert!(filter.exists("hello"));
    assert!(!filter.exists("C++"));
}

#[test]
fn test_integer_scenario() {
    let mut filter = make_filter::<i32>(100, 0.01).unwrap();
    assert!(filter.add(&111));
    assert!(filter.add(&222));
    assert!(!filter.add(&111));
    assert!(filter.exists(&111));
    assert!(!filter.exists(&333));
}

#[test]
fn test_array_scenario() {
    let mut filter = make_filter::<[i32; 3]>(100, 0.01).unwrap();
    assert!(filter.add(&[1, 2, 3]));
    assert!(filter.add(&[4, 5, 6]));
    assert!(!filter.add(&[1, 2, 3]));
    assert!(filter.exists(&[1, 2, 3]));
    assert!(!filter.exists(&[6, 7, 8]));
}

#[test]
fn test_owned_and_borrowed_keys_agree() {
    let mut filter = make_filter::<String>(100, 0.01).unwrap();
    filter.add(&String::from("owned"));
    assert!(filter.exists("owned"));
    filter.add("borrowed");
    assert!(filter.exists(&String::from("borrowed")));
}

#[test]
fn test_no_false_negatives() {
    let mut filter = make_filter::<u64>(1000, 0.01).unwrap();
    for i in 0..1000_u64 {
        filter.add(&(i * 7919));
        assert!(filter.exists(&(i * 7919)));
    }
    // earlier keys survive later insertions, even past the expected load
    for i in 1000..5000_u64 {
        filter.add(&(i * 7919));
    }
    for i in 0..5000_u64 {
        assert!(filter.exists(&(i * 7919)), "lost key {i}");
    }
}

#[test]
fn test_repeated_add_keeps_membership() {
    let mut filter = make_filter::<str>(10, 0.1).unwrap();
    for _ in 0..5 {
        filter.add("same");
        assert!(filter.exists("same"));
    }
    assert!(!filter.add("same"));
}

#[test]
fn test_false_positive_rate_near_target() {
    let mut filter = make_filter::<i32>(100, 0.01).unwrap();
    for i in 0..100 {
        filter.add(&i);
    }

    let false_positives = (100..10_100).filter(|i| filter.exists(i)).count();
    let rate = false_positives as f64 / 10_000.0;
    assert_that!(rate, le(0.03));
    assert_that!(filter.estimated_fpp(), le(0.03));
}

#[test]
fn test_reset_clears_membership() {
    let mut filter = make_filter::<str>(100, 0.01).unwrap();
    let words = ["alpha", "beta", "gamma", "delta"];
    for word in words {
        filter.add(word);
    }

    filter.reset();
    assert!(filter.is_empty());
    for word in words {
        assert!(!filter.exists(word));
    }

    // the configuration survives, so the filter is usable again
    assert_that!(filter.capacity(), eq(959));
    assert_that!(filter.num_hashes(), eq(7));
    assert!(filter.add("alpha"));
    assert!(filter.exists("alpha"));
}

#[test]
fn test_fresh_filter_contains_nothing() {
    let mut filter = make_filter::<str>(100, 0.01).unwrap();
    filter.reset();
    for word in ["", "a", "hello", "C++"] {
        assert!(!filter.exists(word));
    }
}

#[test]
fn test_copy_is_independent() {
    let mut original = make_filter::<String>(100, 0.01).unwrap();
    original.add("hello");
    original.add("world");

    let mut copy = original.clone();
    assert!(!copy.add("hello"));
    assert!(!copy.add("world"));
    assert!(copy.exists("hello"));
    assert!(!copy.exists("C++"));

    assert!(copy.add("copy only"));
    assert!(!original.exists("copy only"));
    assert!(original.add("original only"));
    assert!(!copy.exists("original only"));
}

#[test]
fn test_move_preserves_membership() {
    let mut filter = make_filter::<i32>(100, 0.01).unwrap();
    filter.add(&111);
    filter.add(&222);

    let mut moved = filter;
    assert!(!moved.add(&111));
    assert!(!moved.add(&222));
    assert!(moved.exists(&111));
    assert!(!moved.exists(&333));
}

#[test]
fn test_construction_errors() {
    let err = BloomFilter::<str>::new(0, 5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

    let err = BloomFilter::<str>::new(10, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

    let err = make_filter::<str>(i64::MAX, 1e-10).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

    let err = BloomFilterBuilder::with_size(10, -3)
        .build::<str, bloomfilter::bloom::DefaultKeyAdapter>()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
}

#[derive(Clone, Copy)]
struct Point3 {
    x: i32,
    y: i32,
    z: i32,
}

impl FixedLayout for Point3 {
    fn write_raw<H: Hasher>(&self, state: &mut H) {
        self.x.write_raw(state);
        self.y.write_raw(state);
        self.z.write_raw(state);
    }
}

#[test]
fn test_fixed_layout_struct_matches_array() {
    let mut points = make_filter::<Point3>(100, 0.01).unwrap();
    let mut arrays = make_filter::<[i32; 3]>(100, 0.01).unwrap();

    points.add(&Point3 { x: 1, y: 2, z: 3 });
    arrays.add(&[1, 2, 3]);

    assert!(points.exists(&Point3 { x: 1, y: 2, z: 3 }));
    assert!(!points.exists(&Point3 { x: 3, y: 2, z: 1 }));
    assert_eq!(points.bits_used(), arrays.bits_used());
    assert!(!arrays.add(&[1, 2, 3]));
}

struct AsciiCaseInsensitive;

impl KeyAdapter<str> for AsciiCaseInsensitive {
    fn write_key<H: Hasher>(value: &str, state: &mut H) {
        for byte in value.bytes() {
            state.write(&[byte.to_ascii_lowercase()]);
        }
    }
}

#[test]
fn test_custom_adapter() {
    let mut filter: BloomFilter<str, AsciiCaseInsensitive> =
        BloomFilterBuilder::with_accuracy(100, 0.01).build().unwrap();

    assert!(filter.add("Hello"));
    assert!(filter.exists("hello"));
    assert!(filter.exists("HELLO"));
    assert!(!filter.add("hELLo"));
    assert!(!filter.exists("world"));
}

#[test]
fn test_union_of_demo_filters() {
    let mut left = make_filter::<String>(100, 0.01).unwrap();
    let mut right = make_filter::<String>(100, 0.01).unwrap();
    left.add("hello");
    right.add("world");

    left.union(&right).unwrap();
    assert!(left.exists("hello"));
    assert!(left.exists("world"));

    let other_seed: BloomFilter<String> = BloomFilterBuilder::with_accuracy(100, 0.01)
        .seed(1)
        .build()
        .unwrap();
    let err = left.union(&other_seed).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
}
