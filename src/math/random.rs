//! Deterministic pseudo-random integer sequence
//!
//! Assigns distinguishing activity-start counters to workstation cells.
//! This is a chaotic, non-cryptographic generator chosen purely so runs with
//! the same seed replay the same counters; statistical quality is irrelevant.

use crate::io::configuration::DEFAULT_INTERNAL_LIMIT;

/// Deterministic integer generator yielding values in a closed range
#[derive(Debug, Clone)]
pub struct RandomSequence {
    value: u64,
    minimum: u64,
    maximum: u64,
    counter: u64,
    internal_limit: u64,
}

impl RandomSequence {
    /// Create a generator for values in `[minimum, maximum]`
    ///
    /// All inputs are trusted configuration values; `minimum <= maximum`
    /// is assumed.
    pub const fn new(seed: u64, minimum: u64, maximum: u64) -> Self {
        Self::with_internal_limit(seed, minimum, maximum, DEFAULT_INTERNAL_LIMIT)
    }

    /// Create a generator with an explicit internal modulus
    pub const fn with_internal_limit(
        seed: u64,
        minimum: u64,
        maximum: u64,
        internal_limit: u64,
    ) -> Self {
        Self {
            value: seed,
            minimum,
            maximum,
            counter: 0,
            internal_limit,
        }
    }

    /// Advance the sequence and return the next value in `[minimum, maximum]`
    ///
    /// Update rule: `value = (value * value + counter) % internal_limit`,
    /// then the value is brought into the permitted range. Intermediate
    /// products use 128-bit arithmetic so large seeds cannot overflow.
    pub const fn next(&mut self) -> u64 {
        let squared = (self.value as u128) * (self.value as u128);
        self.value = ((squared + self.counter as u128) % self.internal_limit as u128) as u64;
        self.counter += 1;
        self.minimum + self.value % (self.maximum - self.minimum + 1)
    }
}
