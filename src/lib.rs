//! Luhn mod-N check characters over configurable alphabets.
//!
//! The classic Luhn algorithm protects decimal strings like card numbers.
//! This crate generalizes it to any even-sized alphabet: a symbol's value is
//! its position in the alphabet, doubling folds the base-N carry back in, and
//! the check character is whichever symbol brings the total to a multiple of
//! N. Single-character errors and most adjacent transpositions are caught.
//! It is not a cryptographic integrity check.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  config.rs   │────▶│   luhn.rs    │────▶│   types.rs   │
//! │ (LuhnConfig) │     │ (generate,   │     │ (Checksum-,  │
//! │              │     │  validate)   │     │  Validation- │
//! └──────────────┘     └──────────────┘     │  Result)     │
//!                         │        │        └──────────────┘
//!                         ▼        ▼
//!              ┌──────────────┐ ┌──────────────┐
//!              │ alphabet.rs  │ │ checksum.rs  │
//!              │ (lookups,    │ │ (fold,       │
//!              │  validation) │ │  reduce)     │
//!              └──────────────┘ └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use luhnmod::{Luhn, LuhnConfig};
//!
//! let luhn = Luhn::new();
//! let signed = luhn.sign("FoO", None).unwrap();
//! assert_eq!(signed, "foo5");
//! assert!(luhn.validate(&signed, None).unwrap().is_valid);
//!
//! let hex = Luhn::from_config(LuhnConfig::new().with_alphabet("0123456789abcdef"));
//! assert_eq!(hex.generate("c0ffee", None).unwrap().phrase, "c0ffee");
//! ```

// Module declarations
pub mod alphabet;
pub mod checksum;
pub mod contracts;
mod config;
mod error;
mod luhn;
pub mod testing;
mod types;

// Re-exports for public API
pub use alphabet::{default_alphabet, Alphabet, CASE_INSENSITIVE_ALPHABET, CASE_SENSITIVE_ALPHABET};
pub use config::LuhnConfig;
pub use error::{ConfigError, InvalidDictionaryError, ValidationError};
pub use luhn::Luhn;
pub use types::{ChecksumResult, ValidationResult};
