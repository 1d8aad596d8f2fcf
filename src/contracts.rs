// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the checksum arithmetic.
//!
//! Debug-mode assertions only. They cost nothing in release builds and fail
//! loudly during development and fuzzing if the reduction ever drifts from
//! its invariants.
//!
//! | Contract Function          | Invariant                                  |
//! |----------------------------|--------------------------------------------|
//! | `check_position_in_range`  | symbol position `< n`                      |
//! | `check_addend_folded`      | one fold brings a doubled position `< n`   |
//! | `check_round_trip`         | phrase + generated check validates         |

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

/// Default alphabet sizes must be even, or the defaults would be unusable.
const _: () = {
    assert!(crate::alphabet::CASE_INSENSITIVE_ALPHABET.len() % 2 == 0);
    assert!(crate::alphabet::CASE_SENSITIVE_ALPHABET.len() % 2 == 0);
};

// ============================================================================
// REDUCTION CONTRACTS
// ============================================================================

/// A filtered symbol's position is always inside the alphabet.
#[inline]
pub fn check_position_in_range(position: usize, n: usize) {
    debug_assert!(
        position < n,
        "Contract violation: position {} >= alphabet size {}",
        position,
        n
    );
}

/// `2 * position < 2n`, so `addend / n + addend % n` is at most `1 + (n - 1)`.
///
/// Equality with `n` is impossible: the carry is 1 only when `addend >= n`,
/// and then `addend % n <= n - 2` because `addend <= 2n - 2`.
#[inline]
pub fn check_addend_folded(addend: usize, n: usize) {
    debug_assert!(
        addend < n,
        "Contract violation: folded addend {} >= alphabet size {}",
        addend,
        n
    );
}

// ============================================================================
// ENGINE CONTRACTS
// ============================================================================

/// Appending a freshly generated check character must validate.
#[inline]
pub fn check_round_trip(full_sum: usize, n: usize) {
    debug_assert!(
        full_sum % n == 0,
        "Contract violation: phrase with generated check sums to {} (mod {} = {})",
        full_sum,
        n,
        full_sum % n
    );
}
