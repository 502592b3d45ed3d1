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

//! Errors raised when a bloom filter cannot be built or combined.
//!
//! Membership operations never fail; only choosing parameters can. A filter either comes out of
//! [`BloomFilter::new`](crate::bloom::BloomFilter::new), the builder or
//! [`make_filter`](crate::bloom::make_filter) fully usable, or the caller gets an [`Error`]
//! naming the parameter that was rejected.

use std::fmt;

/// What went wrong with a filter's parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The bit count, probe count or seed cannot produce a usable filter: zero or oversized bit
    /// arrays, non-positive probe counts, or filters combined with a mismatched one.
    InvalidConfiguration,
}

impl ErrorKind {
    /// Returns the kind's name as it appears in formatted errors.
    pub const fn into_static(self) -> &'static str {
        match self {
            ErrorKind::InvalidConfiguration => "InvalidConfiguration",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.into_static())
    }
}

/// A rejected filter configuration.
///
/// Carries the [`ErrorKind`], a human readable reason, and the offending parameters as
/// `name: value` pairs (for instance `size: 0` or `num_hashes: -1`).
///
/// # Examples
///
/// ```
/// # use bloomfilter::bloom::BloomFilter;
/// # use bloomfilter::error::ErrorKind;
/// let err = BloomFilter::<str>::new(0, 5).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
/// assert_eq!(err.message(), "size must be greater than 0");
/// assert_eq!(err.to_string(), "InvalidConfiguration, context: { size: 0 } => size must be greater than 0");
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
}

impl Error {
    /// Creates an error of `kind` with a reason and no parameters attached.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: vec![],
        }
    }

    /// Attaches a rejected parameter and its value.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Returns what kind of failure this is.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the reason the configuration was rejected.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Returns the attached parameters in the order they were added.
    pub fn context(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.context.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub(crate) fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfiguration, msg)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f
                .debug_struct("Error")
                .field("kind", &self.kind)
                .field("message", &self.message)
                .field("context", &self.context)
                .finish();
        }

        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        writeln!(f)?;

        if !self.context.is_empty() {
            writeln!(f, "\nContext:")?;
            for (k, v) in self.context() {
                writeln!(f, "   {k}: {v}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let mut params = self.context();
        if let Some((k, v)) = params.next() {
            write!(f, ", context: {{ {k}: {v}")?;
            for (k, v) in params {
                write!(f, ", {k}: {v}")?;
            }
            f.write_str(" }")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
