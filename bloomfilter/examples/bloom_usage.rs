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
use bloomfilter::bloom::KeyAdapter;
use bloomfilter::bloom::make_filter;
use bloomfilter::error::Error;
use tracing_subscriber::EnvFilter;

/// Hashes a triple by its components only, ignoring any layout of the container.
struct TripleAdapter;

impl KeyAdapter<[i32; 3]> for TripleAdapter {
    fn write_key<H: Hasher>(value: &[i32; 3], state: &mut H) {
        for component in value {
            state.write(&component.to_ne_bytes());
        }
    }
}

fn print_row(results: [bool; 5]) {
    let row: Vec<&str> = results
        .iter()
        .map(|&x| if x { "1" } else { "0" })
        .collect();
    println!("{}", row.join(" "));
}

fn main() -> Result<(), Error> {
    // RUST_LOG=debug shows how each filter was sized
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Strings, sized for 100 items at 1% false positives:");
    let mut strings = make_filter::<String>(100, 0.01)?;
    print_row([
        strings.add("hello"),
        strings.add("world"),
        strings.add("hello"),
        strings.exists("hello"),
        strings.exists("C++"),
    ]);
    println!(
        "  {} bits, {} hashes, {} bits set",
        strings.capacity(),
        strings.num_hashes(),
        strings.bits_used()
    );

    println!("\nIntegers:");
    let mut integers = make_filter::<i32>(100, 0.01)?;
    print_row([
        integers.add(&111),
        integers.add(&222),
        integers.add(&111),
        integers.exists(&111),
        integers.exists(&333),
    ]);

    println!("\nCopy of the string filter (keeps earlier insertions):");
    let mut copied = strings.clone();
    print_row([
        copied.add("hello"),
        copied.add("world"),
        copied.add("hello"),
        copied.exists("hello"),
        copied.exists("C++"),
    ]);

    println!("\nMoved integer filter (keeps earlier insertions):");
    let mut moved = integers;
    print_row([
        moved.add(&111),
        moved.add(&222),
        moved.add(&111),
        moved.exists(&111),
        moved.exists(&333),
    ]);

    println!("\nFixed-size arrays through a custom adapter:");
    let mut triples: BloomFilter<[i32; 3], TripleAdapter> =
        BloomFilterBuilder::with_accuracy(100, 0.01).build()?;
    print_row([
        triples.add(&[1, 2, 3]),
        triples.add(&[4, 5, 6]),
        triples.add(&[1, 2, 3]),
        triples.exists(&[1, 2, 3]),
        triples.exists(&[6, 7, 8]),
    ]);

    println!("\nInvalid configurations are rejected:");
    if let Err(err) = BloomFilter::<str>::new(0, 5) {
        println!("  {err}");
    }
    if let Err(err) = BloomFilter::<str>::new(10, 0) {
        println!("  {err}");
    }

    Ok(())
}
