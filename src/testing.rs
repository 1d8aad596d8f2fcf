//! Test utilities shared across unit, integration, fuzz, and bench code.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::alphabet::CASE_INSENSITIVE_ALPHABET;
use crate::config::LuhnConfig;

/// One known generate() outcome.
#[derive(Debug, Clone, Copy)]
pub struct KnownVector {
    pub alphabet: Option<&'static str>,
    pub case_sensitive_default: bool,
    pub input: &'static str,
    pub case_sensitive: Option<bool>,
    pub phrase: &'static str,
    pub checksum: char,
}

impl KnownVector {
    pub fn config(&self) -> LuhnConfig {
        let config = LuhnConfig::new().with_case_sensitive(self.case_sensitive_default);
        match self.alphabet {
            Some(alphabet) => config.with_alphabet(alphabet),
            None => config,
        }
    }
}

const fn vector(
    alphabet: Option<&'static str>,
    case_sensitive_default: bool,
    input: &'static str,
    case_sensitive: Option<bool>,
    phrase: &'static str,
    checksum: char,
) -> KnownVector {
    KnownVector {
        alphabet,
        case_sensitive_default,
        input,
        case_sensitive,
        phrase,
        checksum,
    }
}

/// Reference outcomes, checked by hand against the reduction.
pub const KNOWN_VECTORS: &[KnownVector] = &[
    vector(None, false, "foo", None, "foo", '5'),
    vector(None, false, "FoO", None, "foo", '5'),
    vector(None, false, "FoO", Some(true), "o", 'n'),
    vector(None, false, "justARandomStringOfLetters", None, "justarandomstringofletters", 'k'),
    vector(None, false, "JUSTARANDOMSTRINGOFLETTERS", Some(true), "", '0'),
    vector(None, false, "a1b2c3", None, "a1b2c3", 'r'),
    vector(None, false, "Hello, World!", None, "helloworld", '0'),
    vector(None, true, "FoO", None, "FoO", 'K'),
    vector(None, true, "foo", None, "foo", 'I'),
    vector(None, true, "justARandomStringOfLetters", None, "justARandomStringOfLetters", 'J'),
    vector(None, true, "Hello, World!", None, "HelloWorld", 'u'),
    vector(None, true, "Hello, World!", Some(false), "helloworld", 'T'),
    vector(Some("0123456789"), false, "7992739871", None, "7992739871", '3'),
    vector(Some("0123456789"), false, "1234", None, "1234", '4'),
    vector(Some("0123456789abcdef"), false, "ABC", None, "abc", '7'),
    vector(
        Some("abcdefghijklmnopqrstuvwxyz"),
        false,
        "justARandomStringOfLetters123",
        None,
        "justarandomstringofletters",
        'v',
    ),
];

/// Deterministic phrase of `len` symbols from the default alphabet.
pub fn sample_phrase(len: usize) -> String {
    let symbols: Vec<char> = CASE_INSENSITIVE_ALPHABET.chars().collect();
    (0..len)
        .map(|i| symbols[(i * 7 + i / 3) % symbols.len()])
        .collect()
}
