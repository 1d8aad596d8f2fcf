// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The mod-N Luhn reduction.
//!
//! Classic Luhn doubles every second decimal digit and sums the digits of
//! the result, so 7 doubled is 14 and contributes 1 + 4. Over an alphabet of
//! size `n` the same step is "double the position, then fold the base-`n`
//! carry back in": `addend / n + addend % n`. Position is below `n` and the
//! factor is at most 2, so the doubled value is below `2n` and one fold is
//! always enough.
//!
//! Traversal runs right to left. Generation starts with factor 2 because the
//! check character does not exist yet; validation starts with factor 1
//! because the rightmost character *is* the check character. Either way the
//! data characters see the same factor pattern.
//!
//! Everything here assumes the input was already filtered against the
//! alphabet and that `n` came from [`Alphabet::effective_length`].

use crate::alphabet::Alphabet;
use crate::contracts::{check_addend_folded, check_position_in_range};

/// Multiplier applied to a symbol's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    Single,
    Double,
}

impl Factor {
    #[inline]
    pub fn value(self) -> usize {
        match self {
            Factor::Single => 1,
            Factor::Double => 2,
        }
    }

    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Factor::Single => Factor::Double,
            Factor::Double => Factor::Single,
        }
    }
}

/// Fold a weighted position back below `n`.
#[inline]
pub fn fold_addend(position: usize, factor: Factor, n: usize) -> usize {
    check_position_in_range(position, n);
    let addend = factor.value() * position;
    let folded = addend / n + addend % n;
    check_addend_folded(folded, n);
    folded
}

/// Sum of folded addends over `phrase`, traversed right to left.
///
/// `start` is the factor given to the rightmost character. Characters that
/// are not in the alphabet contribute nothing; callers filter first, so in
/// practice that never happens.
pub fn reduce(phrase: &[char], alphabet: &Alphabet, n: usize, start: Factor) -> usize {
    let (sum, _) = phrase
        .iter()
        .rev()
        .fold((0usize, start), |(sum, factor), &symbol| {
            let addend = alphabet
                .index_of(symbol)
                .map_or(0, |position| fold_addend(position, factor, n));
            (sum + addend, factor.flip())
        });
    sum
}

/// Position of the check character that makes `sum` divisible by `n`.
#[inline]
pub fn check_position(sum: usize, n: usize) -> usize {
    (n - sum % n) % n
}
