//! # lexorank
//!
//! Lexicographically sortable rank keys for externally stored, ordered rows.
//!
//! ## Architecture
//!
//! The crate consists of:
//! - **Types**: Key, Config, the base-75 alphabet and the error taxonomy
//! - **Rank**: Midpoint search (`between`), step arithmetic, fractional positions
//! - **List**: Insert/append/prepend over caller-owned entries, with local
//!   rebalancing and full normalization
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Integer-only arithmetic; same input, same keys
//! 2. **Bounded Precision**: Ranks never grow past `max_rank_length`
//! 3. **Bounded Repair**: Local rewrites first, O(n) normalization only as a fallback
//! 4. **Synchronous Execution**: No I/O, no async; the caller persists
//!
//! ## Example
//!
//! ```
//! use lexorank::{between, Config, Key};
//!
//! let config = Config::default();
//! let first = Key::parse("0|a").unwrap();
//! let second = Key::parse("0|b").unwrap();
//!
//! let mid = between(&first, &second, &config).unwrap();
//! assert!(first < mid && mid < second);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Key, Config, alphabet, errors
pub mod types;

/// Rank arithmetic: between, step, positions
pub mod rank;

/// Ordered collections: ReorderableList and rebalancing
pub mod list;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use list::{Direction, RankedItem, Reorderable, ReorderableList};
pub use rank::{between, smart_append, smart_prepend};
pub use types::{AppendStrategy, Config, Key, RankError, RankResult};
