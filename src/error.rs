// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy.
//!
//! Two families. [`ValidationError`] is a configuration problem with the
//! alphabet itself: it is raised before any checksum arithmetic runs and is
//! not retryable without a different alphabet. [`ConfigError`] covers loading
//! a configuration record from disk.
//!
//! Noisy input is never an error. Characters outside the alphabet are
//! filtered away.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The alphabet has an odd number of symbols.
///
/// Carries the offending dictionary so callers can report which
/// configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDictionaryError {
    dictionary: String,
}

impl InvalidDictionaryError {
    pub fn new(dictionary: impl Into<String>) -> Self {
        Self {
            dictionary: dictionary.into(),
        }
    }

    /// The rejected dictionary.
    pub fn dictionary(&self) -> &str {
        &self.dictionary
    }

    /// Length of the rejected dictionary, in characters.
    pub fn len(&self) -> usize {
        self.dictionary.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }
}

impl fmt::Display for InvalidDictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dictionary is of invalid length ({}). The length needs to be even",
            self.len()
        )
    }
}

impl std::error::Error for InvalidDictionaryError {}

/// An alphabet that cannot drive a mod-N checksum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Odd number of symbols.
    #[error(transparent)]
    InvalidDictionary(#[from] InvalidDictionaryError),

    /// Zero symbols: even, but there is no modulus to reduce by.
    #[error("dictionary is empty")]
    EmptyDictionary,

    /// A symbol appears more than once, so its position is ambiguous.
    #[error("dictionary contains '{symbol}' more than once (positions {first} and {second})")]
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },
}

impl ValidationError {
    /// The dictionary carried by an odd-length rejection, if that is what this is.
    pub fn invalid_dictionary(&self) -> Option<&InvalidDictionaryError> {
        match self {
            ValidationError::InvalidDictionary(err) => Some(err),
            _ => None,
        }
    }
}

/// Failure to load a [`LuhnConfig`](crate::LuhnConfig) from a file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}
