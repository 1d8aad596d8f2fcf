// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result records returned by the engine.

use std::fmt;

use serde::Serialize;

/// Output of [`Luhn::generate`](crate::Luhn::generate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecksumResult {
    /// Input after normalization and filtering
    pub phrase: String,
    /// Check character to append to `phrase`
    pub checksum: char,
}

/// Writes the phrase with its check character appended.
impl fmt::Display for ChecksumResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.phrase, self.checksum)
    }
}

/// Output of [`Luhn::validate`](crate::Luhn::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Input after normalization and filtering, check character included
    pub phrase: String,
    pub is_valid: bool,
}
