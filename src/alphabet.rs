// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The dictionary of symbols a checksum is computed over.
//!
//! A symbol's numeric value is its position in the dictionary. Lookups go
//! both ways: position → symbol through the ordered list, symbol → position
//! through a reverse map. Same layout as a columnar dictionary table, just
//! keyed by `char`.
//!
//! Construction never fails. Whether the dictionary can actually drive a
//! mod-N checksum is decided by [`Alphabet::effective_length`], which every
//! checksum operation calls before doing any arithmetic.

use std::collections::HashMap;
use std::fmt;

use crate::error::{InvalidDictionaryError, ValidationError};

/// Digits then lowercase ASCII letters. 36 symbols.
pub const CASE_INSENSITIVE_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Digits then each ASCII letter as an uppercase/lowercase pair. 62 symbols.
pub const CASE_SENSITIVE_ALPHABET: &str =
    "0123456789AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRrSsTtUuVvWwXxYyZz";

/// Default dictionary for the given case sensitivity.
pub fn default_alphabet(case_sensitive: bool) -> &'static str {
    if case_sensitive {
        CASE_SENSITIVE_ALPHABET
    } else {
        CASE_INSENSITIVE_ALPHABET
    }
}

/// An ordered set of symbols.
#[derive(Debug, Clone)]
pub struct Alphabet {
    /// Dictionary as given, kept for error reporting
    source: String,
    /// Ordered symbols; index is the symbol's value
    symbols: Vec<char>,
    /// Reverse lookup: symbol → first position
    positions: HashMap<char, usize>,
    /// First repeated symbol, if any: (symbol, first position, second position)
    duplicate: Option<(char, usize, usize)>,
}

impl Alphabet {
    pub fn new(dictionary: &str) -> Self {
        let symbols: Vec<char> = dictionary.chars().collect();
        let mut positions = HashMap::with_capacity(symbols.len());
        let mut duplicate = None;

        for (idx, &symbol) in symbols.iter().enumerate() {
            if let Some(&first) = positions.get(&symbol) {
                if duplicate.is_none() {
                    duplicate = Some((symbol, first, idx));
                }
                continue;
            }
            positions.insert(symbol, idx);
        }

        Self {
            source: dictionary.to_string(),
            symbols,
            positions,
            duplicate,
        }
    }

    /// The built-in dictionary for the given case sensitivity.
    pub fn default_for(case_sensitive: bool) -> Self {
        Self::new(default_alphabet(case_sensitive))
    }

    /// Number of symbols (characters, not bytes).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Position of `symbol`, or `None` if it is not in the dictionary.
    #[inline]
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.positions.get(&symbol).copied()
    }

    /// Symbol at `position`, or `None` past the end.
    #[inline]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.symbols.get(position).copied()
    }

    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.positions.contains_key(&symbol)
    }

    /// The modulus `n` for checksum arithmetic.
    ///
    /// Odd length is rejected first, so an odd dictionary always fails with
    /// [`ValidationError::InvalidDictionary`] regardless of its other defects.
    pub fn effective_length(&self) -> Result<usize, ValidationError> {
        let n = self.len();
        if n % 2 != 0 {
            tracing::debug!(len = n, dictionary = %self.source, "rejecting odd-length dictionary");
            return Err(InvalidDictionaryError::new(self.source.clone()).into());
        }
        if n == 0 {
            tracing::debug!("rejecting empty dictionary");
            return Err(ValidationError::EmptyDictionary);
        }
        if let Some((symbol, first, second)) = self.duplicate {
            tracing::debug!(%symbol, first, second, "rejecting dictionary with repeated symbol");
            return Err(ValidationError::DuplicateSymbol {
                symbol,
                first,
                second,
            });
        }
        Ok(n)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::default_for(false)
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&str> for Alphabet {
    fn from(dictionary: &str) -> Self {
        Self::new(dictionary)
    }
}
