// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arbitrary text through the default engines.
//!
//! Whatever bytes come in, filtering must keep only alphabet members, and
//! the filtered phrase plus its generated check character must validate.
//! Debug contracts inside the reduction fire on any arithmetic drift.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use luhnmod::Luhn;

#[derive(Debug, Arbitrary)]
struct RoundTripInput {
    text: String,
    case_sensitive_engine: bool,
    case_sensitive_call: Option<bool>,
}

fuzz_target!(|input: RoundTripInput| {
    let luhn = if input.case_sensitive_engine {
        Luhn::case_sensitive()
    } else {
        Luhn::new()
    };

    let result = luhn
        .generate(&input.text, input.case_sensitive_call)
        .expect("built-in alphabets are valid");

    assert!(result.phrase.chars().all(|c| luhn.alphabet().contains(c)));

    // The filtered phrase is already normalized, so validate it case sensitively
    let signed = result.to_string();
    let check = luhn.validate(&signed, Some(true)).expect("built-in alphabets are valid");
    assert!(check.is_valid, "{:?} did not validate", signed);
    assert_eq!(check.phrase, signed);
});
