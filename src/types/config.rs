//! Configuration for key generation.
//!
//! A [`Config`] is a plain value: operations borrow it, and callers derive
//! variants with the `with_*` builders instead of mutating a shared instance.
//! It derives serde so deployments can load it from JSON.
//!
//! ## Presets
//!
//! | Preset | max_rank_length | append_strategy | step_size |
//! |--------|-----------------|-----------------|-----------|
//! | [`Config::default`] | 6 | Default | 1 |
//! | [`Config::production`] | 128 | Step | 1000 |

use serde::{Deserialize, Serialize};

use crate::types::{RankError, RankResult};

/// Default maximum rank length
pub const DEFAULT_MAX_RANK_LENGTH: usize = 6;

/// Default highest valid bucket
pub const DEFAULT_MAX_BUCKET: u8 = 2;

/// Highest bucket the single-digit text format can carry
pub const BUCKET_DIGIT_LIMIT: u8 = 9;

/// How `append`/`prepend` derive a key past the end of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppendStrategy {
    /// Midpoint between the last key and the bucket's top (or bottom and first)
    #[default]
    Default,
    /// Fixed offset of `step_size` from the last (or first) key
    Step,
}

/// Key generation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Longest rank `between` may produce; also the length of boundary keys
    pub max_rank_length: usize,

    pub append_strategy: AppendStrategy,

    /// Distance used by [`AppendStrategy::Step`]
    pub step_size: i64,

    /// Valid buckets are `0..=max_bucket`
    pub max_bucket: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_rank_length: DEFAULT_MAX_RANK_LENGTH,
            append_strategy: AppendStrategy::Default,
            step_size: 1,
            max_bucket: DEFAULT_MAX_BUCKET,
        }
    }
}

impl Config {
    /// Long ranks with step-based appends: every new key sits 1000 steps
    /// from its neighbour.
    pub fn production() -> Self {
        Self {
            max_rank_length: 128,
            append_strategy: AppendStrategy::Step,
            step_size: 1000,
            max_bucket: DEFAULT_MAX_BUCKET,
        }
    }

    pub fn with_max_rank_length(mut self, length: usize) -> Self {
        self.max_rank_length = length;
        self
    }

    pub fn with_append_strategy(mut self, strategy: AppendStrategy) -> Self {
        self.append_strategy = strategy;
        self
    }

    pub fn with_step_size(mut self, step: i64) -> Self {
        self.step_size = step;
        self
    }

    pub fn with_max_bucket(mut self, bucket: u8) -> Self {
        self.max_bucket = bucket;
        self
    }

    /// Check the settings are usable
    pub fn validate(&self) -> RankResult<()> {
        if self.max_rank_length == 0 {
            return Err(RankError::InvalidConfig("max_rank_length must be positive".into()));
        }
        if self.step_size <= 0 {
            return Err(RankError::InvalidConfig(format!(
                "step_size must be positive, got {}",
                self.step_size
            )));
        }
        if self.max_bucket > BUCKET_DIGIT_LIMIT {
            return Err(RankError::InvalidConfig(format!(
                "max_bucket {} does not fit a single digit",
                self.max_bucket
            )));
        }
        Ok(())
    }

    /// Reject buckets outside `0..=max_bucket`
    pub fn check_bucket(&self, bucket: u8) -> RankResult<()> {
        if bucket > self.max_bucket.min(BUCKET_DIGIT_LIMIT) {
            return Err(RankError::BucketOutOfRange {
                bucket,
                max: self.max_bucket,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
