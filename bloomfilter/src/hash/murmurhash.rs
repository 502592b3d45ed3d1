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

use byteorder::ByteOrder;
use byteorder::LE;

use super::DEFAULT_SEED;

const C1: u64 = 0x87c37b91114253d5;
const C2: u64 = 0x4cf5ad432745937f;
const BLOCK_LEN: usize = 16;

/// Streaming MurmurHash3, x64 128-bit variant.
///
/// Bytes may arrive through any number of [`write`](Hasher::write) calls; the result only depends
/// on their concatenation. Body blocks are read as little-endian words, so the output is the same
/// on every platform for the same byte sequence.
#[derive(Debug, Clone)]
pub struct MurmurHash3X64128 {
    h1: u64,
    h2: u64,
    total: u64,
    buf: [u8; BLOCK_LEN],
    buf_len: usize,
}

impl MurmurHash3X64128 {
    /// Creates a hasher whose accumulators both start at `seed`.
    pub fn with_seed(seed: u64) -> Self {
        MurmurHash3X64128 {
            h1: seed,
            h2: seed,
            total: 0,
            buf: [0; BLOCK_LEN],
            buf_len: 0,
        }
    }

    /// Returns the `(h1, h2)` pair for everything written so far.
    ///
    /// The hasher itself is left untouched, so more bytes may be written afterwards.
    pub fn finish128(&self) -> (u64, u64) {
        let mut h1 = self.h1;
        let mut h2 = self.h2;

        let rem = self.buf_len;
        let total = self.total + rem as u64;

        // Tail bytes 8..15 feed k2, bytes 0..7 feed k1. Neither is folded back into the
        // accumulators with the rotate-add step the full blocks get.
        if rem > 8 {
            let mut buf = [0u8; 8];
            buf[..rem - 8].copy_from_slice(&self.buf[8..rem]);
            h2 ^= mix_k2(u64::from_le_bytes(buf));
        }
        if rem > 0 {
            let len = rem.min(8);
            let mut buf = [0u8; 8];
            buf[..len].copy_from_slice(&self.buf[..len]);
            h1 ^= mix_k1(u64::from_le_bytes(buf));
        }

        h1 ^= total;
        h2 ^= total;
        h1 = h1.wrapping_add(h2);
        h2 = h2.wrapping_add(h1);
        h1 = fmix64(h1);
        h2 = fmix64(h2);
        h1 = h1.wrapping_add(h2);
        h2 = h2.wrapping_add(h1);
        (h1, h2)
    }

    /// Like [`finish128`](Self::finish128), with the bytes of both words reversed.
    ///
    /// Useful when the pair is compared against output produced on a big-endian host.
    pub fn finish128_swapped(&self) -> (u64, u64) {
        let (h1, h2) = self.finish128();
        (h1.swap_bytes(), h2.swap_bytes())
    }

    #[inline]
    fn update(&mut self, k1: u64, k2: u64) {
        self.h1 ^= mix_k1(k1);
        self.h1 = self.h1.rotate_left(27);
        self.h1 = self.h1.wrapping_add(self.h2);
        self.h1 = self.h1.wrapping_mul(5).wrapping_add(0x52dce729);

        self.h2 ^= mix_k2(k2);
        self.h2 = self.h2.rotate_left(31);
        self.h2 = self.h2.wrapping_add(self.h1);
        self.h2 = self.h2.wrapping_mul(5).wrapping_add(0x38495ab5);

        self.total += BLOCK_LEN as u64;
    }
}

impl Default for MurmurHash3X64128 {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl Hasher for MurmurHash3X64128 {
    fn finish(&self) -> u64 {
        self.finish128().0
    }

    fn write(&mut self, mut bytes: &[u8]) {
        if self.buf_len + bytes.len() < BLOCK_LEN {
            self.buf[self.buf_len..self.buf_len + bytes.len()].copy_from_slice(bytes);
            self.buf_len += bytes.len();
            return;
        }

        // Complete the pending partial block first.
        if self.buf_len != 0 {
            let wanted = BLOCK_LEN - self.buf_len;
            self.buf[self.buf_len..].copy_from_slice(&bytes[..wanted]);

            let k1 = LE::read_u64(&self.buf[0..8]);
            let k2 = LE::read_u64(&self.buf[8..16]);
            self.update(k1, k2);

            bytes = &bytes[wanted..];
            self.buf_len = 0;
        }

        let mut blocks = bytes.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            let k1 = LE::read_u64(&block[0..8]);
            let k2 = LE::read_u64(&block[8..16]);
            self.update(k1, k2);
        }

        let rest = blocks.remainder();
        self.buf[..rest.len()].copy_from_slice(rest);
        self.buf_len = rest.len();
    }
}

#[inline]
fn mix_k1(k1: u64) -> u64 {
    k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2)
}

#[inline]
fn mix_k2(k2: u64) -> u64 {
    k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1)
}

/// Finalization mix: force all bits of a hash block to avalanche.
#[inline]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51afd7ed558ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ceb9fe1a85ec53);
    k ^ (k >> 33)
}
