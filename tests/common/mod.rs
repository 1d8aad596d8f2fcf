//! Shared test utilities and fixtures.

#![allow(dead_code)]

use luhnmod::{Luhn, LuhnConfig};

// Re-export canonical fixtures from luhnmod::testing
pub use luhnmod::testing::{sample_phrase, KNOWN_VECTORS};

/// Hexadecimal digits, lowercase.
pub const HEX_ALPHABET: &str = "0123456789abcdef";

/// Lowercase ASCII letters only.
pub const LETTERS_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Five symbols: unusable for a mod-N checksum.
pub const ODD_ALPHABET: &str = "abcfo";

/// Engine over a custom alphabet with the given default sensitivity.
pub fn engine(alphabet: &str, case_sensitive: bool) -> Luhn {
    Luhn::from_config(
        LuhnConfig::new()
            .with_alphabet(alphabet)
            .with_case_sensitive(case_sensitive),
    )
}

/// `phrase` with its generated check character appended.
pub fn signed(luhn: &Luhn, phrase: &str) -> String {
    luhn.sign(phrase, None).expect("alphabet should be valid")
}
