//! Core data types for lexorank
//!
//! ## Types
//!
//! - [`Key`]: Bucket id plus rank, ordered by its canonical text
//! - [`Config`]: Maximum rank length, append strategy, step size, bucket range
//! - [`AppendStrategy`]: Midpoint or fixed-step appends
//! - [`RankError`]: Error taxonomy shared by every operation
//!
//! ## Base-75 Ranks
//!
//! Ranks are digit strings over a 75-symbol alphabet (see [`alphabet`]).
//! Arithmetic on them goes through `num_bigint::BigUint`, since a 128-digit
//! rank spans roughly 800 bits.

mod config;
mod error;
mod key;
pub mod alphabet;

// Re-export all types at module level
pub use config::{AppendStrategy, Config, BUCKET_DIGIT_LIMIT, DEFAULT_MAX_BUCKET, DEFAULT_MAX_RANK_LENGTH};
pub use error::{RankError, RankResult};
pub use key::{Key, SEPARATOR};
