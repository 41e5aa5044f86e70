//! Error taxonomy for rank key operations.
//!
//! Every fallible operation returns [`RankResult`]. The list layer uses
//! [`RankError::is_space_exhausted`] to decide whether a failure can be
//! repaired by rebalancing or must be surfaced to the caller.

use thiserror::Error;

/// Result type for rank operations
pub type RankResult<T> = Result<T, RankError>;

/// Rank key errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// Text is not a well-formed `<bucket>|<rank>` key
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Index past the end of a list, or step arithmetic left the key space
    #[error("out of bounds")]
    OutOfBounds,

    /// `between` called with keys from different buckets
    #[error("bucket mismatch: {lhs} vs {rhs}")]
    BucketMismatch { lhs: u8, rhs: u8 },

    /// `between` called with `lhs >= rhs`
    #[error("ordering violation: lhs must sort strictly before rhs")]
    OrderingViolation,

    /// No key fits between the bounds at the configured maximum length
    #[error("rebalance required")]
    RebalanceRequired,

    /// Rebalancing ran but there is still no room at the target position
    #[error("failed to insert key after rebalance")]
    KeyInsertionFailedAfterRebalance,

    /// Bucket outside the configured `0..=max_bucket` range
    #[error("bucket {bucket} outside configured range 0..={max}")]
    BucketOutOfRange { bucket: u8, max: u8 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl RankError {
    /// Whether the error means "no room here" and a rebalance may help.
    ///
    /// Ordering violations count: duplicate or reversed neighbours leave no
    /// room either, and rebalancing rewrites them.
    pub fn is_space_exhausted(&self) -> bool {
        matches!(
            self,
            RankError::RebalanceRequired | RankError::OrderingViolation | RankError::OutOfBounds
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
