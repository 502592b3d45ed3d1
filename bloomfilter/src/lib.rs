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

//! # Bloom Filter Library
//!
//! A fixed-capacity Bloom filter: a bit array plus a seeded 128-bit hash that answers "possibly
//! present" or "definitely absent" for arbitrary keys, with a tunable false positive
//! probability and no false negatives.
//!
//! - [`bloom`] holds the filter, its key adapters and the parameter sizing functions.
//! - [`hash`] holds the MurmurHash3 implementation the filter probes with.
//! - [`error`] holds the error returned for unusable filter parameters.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod bloom;
pub mod error;
pub mod hash;
