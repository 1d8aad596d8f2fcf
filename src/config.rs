// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! A [`LuhnConfig`] is plain data: which alphabet, and whether calls that do
//! not say otherwise are case sensitive. It deserializes from JSON so the
//! CLI (or any host application) can keep it in a file:
//!
//! ```json
//! { "alphabet": "0123456789abcdef", "caseSensitive": false }
//! ```
//!
//! When `alphabet` is absent the default for the sensitivity flag is used.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alphabet::default_alphabet;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LuhnConfig {
    /// Custom dictionary; `None` selects the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<String>,
    /// Case sensitivity applied when a call passes `None`
    #[serde(default)]
    pub case_sensitive: bool,
}

impl LuhnConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// The configured dictionary, or the default for `case_sensitive`.
    pub fn resolved_alphabet(&self) -> &str {
        self.alphabet
            .as_deref()
            .unwrap_or_else(|| default_alphabet(self.case_sensitive))
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            custom_alphabet = config.alphabet.is_some(),
            case_sensitive = config.case_sensitive,
            "loaded checksum config"
        );
        Ok(config)
    }
}
