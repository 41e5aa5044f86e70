//! Keys at exact fractional positions of the key space.
//!
//! Used by list normalization to spread `n` keys evenly. The mapping is
//! exact rational arithmetic, `floor(numerator * 75^length / denominator)`,
//! so two distinct fractions never collapse onto the same key as long as
//! `75^length` is at least the denominator.
//!
//! [`Key::random`] draws the fraction from a random source, for callers that
//! scatter unrelated entries across a bucket instead of appending.

use num_bigint::BigUint;
use rand::Rng;

use crate::types::alphabet::{capacity, encode};
use crate::types::{Config, Key, RankError, RankResult, BUCKET_DIGIT_LIMIT};

/// Denominator of the fractions drawn by [`Key::random`]
const RANDOM_RESOLUTION: usize = 1 << 30;

impl Key {
    /// Key at fraction `numerator / denominator` of a bucket, `length` digits long
    ///
    /// # Example
    ///
    /// ```
    /// use lexorank::Key;
    ///
    /// // Halfway through a 3-digit key space
    /// assert_eq!(Key::at(0, 1, 2, 3).unwrap().as_str(), "0|UUU");
    /// ```
    pub fn at(bucket: u8, numerator: usize, denominator: usize, length: usize) -> RankResult<Key> {
        if bucket > BUCKET_DIGIT_LIMIT {
            return Err(RankError::InvalidKey(format!(
                "bucket {bucket} does not fit a single digit"
            )));
        }
        if denominator == 0 || numerator >= denominator {
            return Err(RankError::OutOfBounds);
        }

        let value = BigUint::from(numerator) * capacity(length) / BigUint::from(denominator);
        let rank = encode(&value, length)?;
        Ok(Key::from_rank(bucket, &rank))
    }

    /// Key at a uniformly random position of `bucket`, `max_rank_length` digits long
    pub fn random(bucket: u8, config: &Config) -> RankResult<Key> {
        Self::random_with(bucket, config, &mut rand::thread_rng())
    }

    /// [`Key::random`] over a caller-supplied source, e.g. a seeded RNG
    pub fn random_with<R: Rng + ?Sized>(
        bucket: u8,
        config: &Config,
        rng: &mut R,
    ) -> RankResult<Key> {
        config.validate()?;
        config.check_bucket(bucket)?;

        let numerator = rng.gen_range(0..RANDOM_RESOLUTION);
        Self::at(bucket, numerator, RANDOM_RESOLUTION, config.max_rank_length)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
