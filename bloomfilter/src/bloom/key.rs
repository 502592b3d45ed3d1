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

/// Reduces a value of type `T` to the bytes that are hashed for it.
///
/// An adapter is a strategy type, resolved statically per filter: a filter built as
/// `BloomFilter<T, A>` hashes every key through `A`. Whatever bytes `write_key` writes are hashed as
/// one contiguous span, so writing a value in several pieces is the same as writing their
/// concatenation.
///
/// # Examples
///
/// A caller-supplied adapter for a struct that should only be identified by one field:
///
/// ```
/// # use std::hash::Hasher;
/// # use bloomfilter::bloom::{BloomFilterBuilder, KeyAdapter};
/// struct User {
///     id: u32,
///     display_name: String,
/// }
///
/// struct ById;
///
/// impl KeyAdapter<User> for ById {
///     fn write_key<H: Hasher>(value: &User, state: &mut H) {
///         state.write(&value.id.to_ne_bytes());
///     }
/// }
///
/// let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01)
///     .build::<User, ById>()
///     .unwrap();
/// filter.add(&User { id: 7, display_name: "a".into() });
/// assert!(filter.exists(&User { id: 7, display_name: "b".into() }));
/// ```
pub trait KeyAdapter<T: ?Sized> {
    /// Writes the byte view of `value` into `state`.
    fn write_key<H: Hasher>(value: &T, state: &mut H);
}

/// The adapter filters use unless another one is named.
///
/// - text and byte sequences (`str`, `String`, `[u8]`, `Vec<u8>`) hash their content bytes only;
/// - every [`FixedLayout`] value hashes its raw in-memory representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultKeyAdapter;

impl<T: FixedLayout> KeyAdapter<T> for DefaultKeyAdapter {
    fn write_key<H: Hasher>(value: &T, state: &mut H) {
        value.write_raw(state);
    }
}

impl KeyAdapter<str> for DefaultKeyAdapter {
    fn write_key<H: Hasher>(value: &str, state: &mut H) {
        state.write(value.as_bytes());
    }
}

impl KeyAdapter<String> for DefaultKeyAdapter {
    fn write_key<H: Hasher>(value: &String, state: &mut H) {
        state.write(value.as_bytes());
    }
}

impl KeyAdapter<[u8]> for DefaultKeyAdapter {
    fn write_key<H: Hasher>(value: &[u8], state: &mut H) {
        state.write(value);
    }
}

impl KeyAdapter<Vec<u8>> for DefaultKeyAdapter {
    fn write_key<H: Hasher>(value: &Vec<u8>, state: &mut H) {
        state.write(value);
    }
}

/// A value without indirection whose identity is its in-memory bytes.
///
/// The written bytes are the native-endian representation of the value, element by element for
/// arrays, which matches the value's memory image because none of the implementing types carry
/// padding.
///
/// Implement this for a plain struct of scalars to use it with [`DefaultKeyAdapter`]; write the
/// fields in a fixed order and skip padding.
pub trait FixedLayout: Copy {
    /// Writes the raw bytes of `self` into `state`.
    fn write_raw<H: Hasher>(&self, state: &mut H);
}

macro_rules! impl_fixed_layout_for_numbers {
    ($($t:ty),* $(,)?) => {
        $(
            impl FixedLayout for $t {
                #[inline]
                fn write_raw<H: Hasher>(&self, state: &mut H) {
                    state.write(&self.to_ne_bytes());
                }
            }
        )*
    };
}

impl_fixed_layout_for_numbers!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl FixedLayout for bool {
    #[inline]
    fn write_raw<H: Hasher>(&self, state: &mut H) {
        state.write(&[u8::from(*self)]);
    }
}

impl FixedLayout for char {
    #[inline]
    fn write_raw<H: Hasher>(&self, state: &mut H) {
        state.write(&u32::from(*self).to_ne_bytes());
    }
}

impl<T: FixedLayout, const N: usize> FixedLayout for [T; N] {
    fn write_raw<H: Hasher>(&self, state: &mut H) {
        for item in self {
            item.write_raw(state);
        }
    }
}
