// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The checksum engine.
//!
//! A [`Luhn`] is one fixed pairing of alphabet and default case sensitivity.
//! It has no setters: a different configuration is a different engine, so a
//! checksum can never change underneath someone holding a reference.
//!
//! Both operations run the same pipeline:
//!
//! ```text
//! input ──▶ lowercase? ──▶ filter to alphabet ──▶ reduce right-to-left ──▶ mod n
//! ```
//!
//! Lowercasing happens on the raw input before filtering, so `'F'` survives
//! a case-insensitive pass over the default alphabet as `'f'`.

use std::path::Path;

use crate::alphabet::Alphabet;
use crate::checksum::{check_position, reduce, Factor};
use crate::config::LuhnConfig;
use crate::contracts::check_round_trip;
use crate::error::{ConfigError, ValidationError};
use crate::types::{ChecksumResult, ValidationResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Luhn {
    alphabet: Alphabet,
    case_sensitive: bool,
}

impl Default for Luhn {
    fn default() -> Self {
        Self::new()
    }
}

impl Luhn {
    /// 36-symbol alphabet, case insensitive.
    pub fn new() -> Self {
        Self::from_config(LuhnConfig::default())
    }

    /// 62-symbol alphabet, case sensitive unless a call says otherwise.
    pub fn case_sensitive() -> Self {
        Self::from_config(LuhnConfig::new().with_case_sensitive(true))
    }

    /// Custom alphabet, case insensitive unless a call says otherwise.
    ///
    /// The alphabet is not checked here; see [`Luhn::checked`].
    pub fn with_alphabet(alphabet: &str) -> Self {
        Self::from_config(LuhnConfig::new().with_alphabet(alphabet))
    }

    pub fn from_config(config: LuhnConfig) -> Self {
        Self {
            alphabet: Alphabet::new(config.resolved_alphabet()),
            case_sensitive: config.case_sensitive,
        }
    }

    /// Like [`Luhn::from_config`], but rejects an unusable alphabet up front.
    pub fn checked(config: LuhnConfig) -> Result<Self, ValidationError> {
        let engine = Self::from_config(config);
        engine.alphabet.effective_length()?;
        Ok(engine)
    }

    /// Load a [`LuhnConfig`] from JSON and build a checked engine from it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = LuhnConfig::from_json_file(path)?;
        Ok(Self::checked(config)?)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Default case sensitivity for calls that pass `None`.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Normalize and filter `input` down to alphabet members, in order.
    pub fn filter(&self, input: &str, case_sensitive: Option<bool>) -> Vec<char> {
        let sensitive = case_sensitive.unwrap_or(self.case_sensitive);
        if sensitive {
            self.keep_members(input)
        } else {
            self.keep_members(&input.to_lowercase())
        }
    }

    fn keep_members(&self, text: &str) -> Vec<char> {
        text.chars().filter(|&c| self.alphabet.contains(c)).collect()
    }

    /// Compute the check character for `input`.
    ///
    /// ```
    /// use luhnmod::Luhn;
    ///
    /// let result = Luhn::new().generate("FoO", None).unwrap();
    /// assert_eq!(result.phrase, "foo");
    /// assert_eq!(result.checksum, '5');
    /// ```
    pub fn generate(
        &self,
        input: &str,
        case_sensitive: Option<bool>,
    ) -> Result<ChecksumResult, ValidationError> {
        let n = self.alphabet.effective_length()?;
        let phrase = self.filter(input, case_sensitive);

        let sum = reduce(&phrase, &self.alphabet, n, Factor::Double);
        let position = check_position(sum, n);
        let checksum = self.alphabet.symbols()[position];

        if cfg!(debug_assertions) {
            let mut full = phrase.clone();
            full.push(checksum);
            check_round_trip(reduce(&full, &self.alphabet, n, Factor::Single), n);
        }

        tracing::trace!(len = phrase.len(), sum, %checksum, "generated check character");
        Ok(ChecksumResult {
            phrase: phrase.into_iter().collect(),
            checksum,
        })
    }

    /// Check that the last alphabet character of `input` is a valid check
    /// character for everything before it.
    ///
    /// A case-insensitive call lowercases the check character too. On an
    /// alphabet with uppercase symbols, a phrase signed with `Some(false)`
    /// must be validated with `Some(true)`: its phrase is already folded, but
    /// its check character may be uppercase.
    ///
    /// ```
    /// use luhnmod::Luhn;
    ///
    /// let luhn = Luhn::new();
    /// assert!(luhn.validate("foo5", None).unwrap().is_valid);
    /// assert!(!luhn.validate("foo6", None).unwrap().is_valid);
    /// ```
    pub fn validate(
        &self,
        input: &str,
        case_sensitive: Option<bool>,
    ) -> Result<ValidationResult, ValidationError> {
        let n = self.alphabet.effective_length()?;
        let phrase = self.filter(input, case_sensitive);

        let sum = reduce(&phrase, &self.alphabet, n, Factor::Single);
        let is_valid = sum % n == 0;

        tracing::trace!(len = phrase.len(), sum, is_valid, "validated phrase");
        Ok(ValidationResult {
            phrase: phrase.into_iter().collect(),
            is_valid,
        })
    }

    /// Filtered phrase with its check character appended.
    ///
    /// The result is already normalized, so validate it case sensitively.
    /// See [`Luhn::validate`].
    pub fn sign(
        &self,
        input: &str,
        case_sensitive: Option<bool>,
    ) -> Result<String, ValidationError> {
        self.generate(input, case_sensitive).map(|result| result.to_string())
    }
}
