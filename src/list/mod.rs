//! Ordered-collection algorithms for lexorank.
//!
//! ## Architecture
//!
//! A [`ReorderableList`] borrows a caller-owned slice of entries that are
//! already sorted by key. It hands out keys for new positions and rewrites
//! existing keys in place when it has to make room:
//!
//! - **Entries**: anything implementing [`Reorderable`] (read + overwrite key)
//! - **Insert / Append / Prepend**: midpoint or step arithmetic, retried once
//!   after a rebalance
//! - **Rebalance**: bounded local walk, falling back to full normalization
//!
//! ## Cost
//!
//! | Operation | Key rewrites |
//! |-----------|--------------|
//! | insert / append / prepend (room available) | 0 |
//! | local rebalance | distance walked |
//! | normalize | n |
//!
//! ## Example
//!
//! ```
//! use lexorank::{Config, Key, RankedItem, ReorderableList};
//!
//! let config = Config::default();
//! let mut tasks: Vec<RankedItem<&str>> = Vec::new();
//!
//! for name in ["design", "build", "ship"] {
//!     let key = ReorderableList::new(&mut tasks).append(&config).unwrap();
//!     tasks.push(RankedItem::new(name, key));
//! }
//!
//! // Squeeze "review" in before "ship"
//! let key = ReorderableList::new(&mut tasks).insert(2, &config).unwrap();
//! tasks.insert(2, RankedItem::new("review", key));
//!
//! assert!(ReorderableList::new(&mut tasks).is_sorted());
//! ```

pub mod entry;
pub mod rebalance;
pub mod reorderable;

pub use entry::{RankedItem, Reorderable};
pub use rebalance::Direction;
pub use reorderable::{ReorderableList, MAX_ATTEMPTS};
