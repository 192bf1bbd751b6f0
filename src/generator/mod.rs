//! # Sequence Generation
//!
//! Pseudo-random integer sequences from a linear congruential recurrence.
//! Generation is pure given a seed; production callers derive the seed from
//! the wall clock at the call boundary via [`clock_seed`]. The generator is
//! not cryptographically random, and clock-derived seeds may collide under
//! rapid repeated invocation.

use std::time::{SystemTime, UNIX_EPOCH};

/// LCG multiplier.
const MULTIPLIER: u64 = 9301;
/// LCG increment.
const INCREMENT: u64 = 49_297;
/// LCG modulus.
const MODULUS: u64 = 233_280;
/// Exclusive upper bound of generated element values.
const VALUE_RANGE: f64 = 100_000.0;

/// Derive a seed from the current wall-clock time.
///
/// Milliseconds since the Unix epoch, reduced modulo 1,000,000. Back-to-back
/// calls in the same millisecond return the same seed.
#[must_use]
pub fn clock_seed() -> u64 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    (millis % 1_000_000) as u64
}

/// Generate a sequence of `len` elements in `[0, 100000)` from `seed`.
///
/// Deterministic: equal seeds produce equal sequences. A zero length yields
/// an empty vector.
#[must_use]
pub fn generate(seed: u64, len: usize) -> Vec<u32> {
    // Reducing up front is congruent with folding the seed into the first
    // recurrence step, and keeps the multiply within u64 for any seed.
    let mut state = seed % MODULUS;
    let mut sequence = Vec::with_capacity(len);
    for _ in 0..len {
        state = (state * MULTIPLIER + INCREMENT) % MODULUS;
        // f64 scaling, truncated: element values track the state exactly.
        let value = (state as f64 / MODULUS as f64) * VALUE_RANGE;
        sequence.push(value as u32);
    }
    sequence
}
