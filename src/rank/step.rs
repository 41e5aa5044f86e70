//! Step arithmetic and append/prepend strategy dispatch.
//!
//! ## Step Arithmetic
//!
//! [`Key::after`] and [`Key::before`] treat the rank as a base-75 integer at
//! its own length and move it by a fixed distance. They are O(1) apart from
//! the big-integer conversion, but they consume key space monotonically:
//! repeated steps eventually hit the top or bottom of the bucket.
//!
//! ## Strategy Dispatch
//!
//! [`smart_append`] and [`smart_prepend`] pick between midpoint search and
//! step arithmetic per [`AppendStrategy`]. When a step does not fit at the
//! key's current length, the key is padded one digit at a time (which never
//! moves it) up to `max_rank_length` before the step is given up on.

use num_bigint::{BigInt, BigUint};

use crate::rank::between;
use crate::types::alphabet::{decode, encode, widen};
use crate::types::{AppendStrategy, Config, Key, RankError, RankResult};

impl Key {
    /// Key `distance` steps above this one, at the same rank length
    ///
    /// Fails with [`RankError::OutOfBounds`] when the result does not fit the
    /// rank's length.
    ///
    /// # Example
    ///
    /// ```
    /// use lexorank::Key;
    ///
    /// let key = Key::parse("1|aaaaaa").unwrap();
    /// assert_eq!(key.after(1).unwrap().as_str(), "1|aaaaab");
    /// assert_eq!(key.after(1000).unwrap().as_str(), "1|aaaanz");
    /// ```
    pub fn after(&self, distance: i64) -> RankResult<Key> {
        self.offset(BigInt::from(distance))
    }

    /// Key `distance` steps below this one, at the same rank length
    ///
    /// Fails with [`RankError::OutOfBounds`] if the result would be negative.
    pub fn before(&self, distance: i64) -> RankResult<Key> {
        self.offset(-BigInt::from(distance))
    }

    fn offset(&self, delta: BigInt) -> RankResult<Key> {
        let moved = BigInt::from(decode(self.rank())?) + delta;
        let value: BigUint = moved.to_biguint().ok_or(RankError::OutOfBounds)?;
        let rank = encode(&value, self.rank_len())?;
        Ok(Key::from_rank(self.bucket(), &rank))
    }

    /// Signed number of steps from this key to `other`
    ///
    /// Both ranks are compared at their common length, so `k.distance(&k.after(n)?)`
    /// is exactly `n`.
    pub fn distance(&self, other: &Key) -> RankResult<BigInt> {
        if self.bucket() != other.bucket() {
            return Err(RankError::BucketMismatch {
                lhs: self.bucket(),
                rhs: other.bucket(),
            });
        }

        let length = self.rank_len().max(other.rank_len());
        let from = widen(decode(self.rank())?, self.rank_len(), length);
        let to = widen(decode(other.rank())?, other.rank_len(), length);
        Ok(BigInt::from(to) - BigInt::from(from))
    }
}

/// Key to place after `last`, per the configured strategy
pub fn smart_append(last: &Key, config: &Config) -> RankResult<Key> {
    match config.append_strategy {
        AppendStrategy::Default => {
            let top = Key::top_of(last.bucket(), config)?;
            between(last, &top, config)
        }
        AppendStrategy::Step => stepped(last, config, Key::after),
    }
}

/// Key to place before `first`, per the configured strategy
pub fn smart_prepend(first: &Key, config: &Config) -> RankResult<Key> {
    match config.append_strategy {
        AppendStrategy::Default => {
            let bottom = Key::bottom_of(first.bucket(), config)?;
            between(&bottom, first, config)
        }
        AppendStrategy::Step => stepped(first, config, Key::before),
    }
}

/// Apply a step, padding the key while the step does not fit its length
fn stepped(
    key: &Key,
    config: &Config,
    step: fn(&Key, i64) -> RankResult<Key>,
) -> RankResult<Key> {
    config.validate()?;
    if key.rank_len() > config.max_rank_length {
        return Err(RankError::RebalanceRequired);
    }

    let mut length = key.rank_len();
    loop {
        match step(&key.padded(length), config.step_size) {
            Err(RankError::OutOfBounds) if length < config.max_rank_length => length += 1,
            result => return result,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
