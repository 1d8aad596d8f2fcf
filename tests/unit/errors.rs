//! Configuration errors surface before any checksum arithmetic.

use super::common::{engine, ODD_ALPHABET};
use luhnmod::{Luhn, LuhnConfig, ValidationError};

#[test]
fn odd_alphabet_fails_generate() {
    let luhn = Luhn::with_alphabet(ODD_ALPHABET);
    let err = luhn.generate("ab", None).unwrap_err();
    let invalid = err.invalid_dictionary().expect("odd length error");
    assert_eq!(invalid.dictionary(), ODD_ALPHABET);
    assert_eq!(invalid.len(), 5);
}

#[test]
fn odd_alphabet_fails_validate_even_for_empty_input() {
    let luhn = Luhn::with_alphabet(ODD_ALPHABET);
    assert!(matches!(
        luhn.validate("", None),
        Err(ValidationError::InvalidDictionary(_))
    ));
}

#[test]
fn odd_alphabet_message() {
    let err = Luhn::with_alphabet(ODD_ALPHABET)
        .generate("foo", Some(true))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "dictionary is of invalid length (5). The length needs to be even"
    );
}

#[test]
fn empty_alphabet_is_rejected() {
    assert_eq!(
        engine("", false).generate("foo", None),
        Err(ValidationError::EmptyDictionary)
    );
}

#[test]
fn duplicate_symbols_are_rejected() {
    let err = engine("abcb", false).validate("abc", None).unwrap_err();
    assert_eq!(
        err,
        ValidationError::DuplicateSymbol {
            symbol: 'b',
            first: 1,
            second: 3,
        }
    );
}

#[test]
fn checked_surfaces_errors_at_construction() {
    let err = Luhn::checked(LuhnConfig::new().with_alphabet(ODD_ALPHABET)).unwrap_err();
    assert!(err.invalid_dictionary().is_some());

    let luhn = Luhn::checked(LuhnConfig::new().with_case_sensitive(true)).unwrap();
    assert_eq!(luhn.alphabet().len(), 62);
}
