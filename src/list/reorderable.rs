//! Reorderable list: key generation for positions in an ordered collection.
//!
//! ## Lifecycle
//!
//! ```text
//! read rows (sorted by key) -> ReorderableList::new(&mut rows)
//!     -> insert / append / prepend / normalize (rewrites keys in place)
//!     -> persist rows whose keys changed
//! ```
//!
//! The list never adds or removes entries. `insert`, `append` and `prepend`
//! return the key for a *new* entry; the caller creates that entry. They may
//! rewrite the keys of existing entries to make room, so callers must persist
//! every entry whose key changed, not just the new one.
//!
//! ## Retry Bound
//!
//! Each operation makes at most [`MAX_ATTEMPTS`] tries: one attempt, one
//! rebalance, one more attempt. A second failure is terminal.

use tracing::{debug, warn};

use crate::list::{Direction, Reorderable};
use crate::rank::{between, smart_append, smart_prepend};
use crate::types::{AppendStrategy, Config, Key, RankError, RankResult};

/// Attempts per insert/append/prepend, with a rebalance between them
pub const MAX_ATTEMPTS: usize = 2;

/// An ordered view over caller-owned entries.
///
/// The entries are assumed to be sorted by key already; the list never sorts
/// them. Exclusive access is enforced by the `&mut` borrow.
///
/// # Example
///
/// ```
/// use lexorank::{Config, Key, RankedItem, ReorderableList};
///
/// let config = Config::default();
/// let mut rows = vec![
///     RankedItem::new("a", Key::parse("0|a").unwrap()),
///     RankedItem::new("c", Key::parse("0|c").unwrap()),
/// ];
///
/// let key = ReorderableList::new(&mut rows).insert(1, &config).unwrap();
/// assert_eq!(key.as_str(), "0|b");
/// rows.insert(1, RankedItem::new("b", key));
///
/// assert!(ReorderableList::new(&mut rows).is_sorted());
/// ```
#[derive(Debug)]
pub struct ReorderableList<'a, E> {
    pub(crate) items: &'a mut [E],
}

impl<'a, E: Reorderable> ReorderableList<'a, E> {
    /// Wrap a slice of entries that is already sorted by key
    pub fn new(items: &'a mut [E]) -> Self {
        Self { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of the current keys, in list order
    pub fn keys(&self) -> Vec<Key> {
        self.items.iter().map(|item| item.key().clone()).collect()
    }

    /// Strictly increasing keys, neighbour by neighbour
    pub fn is_sorted(&self) -> bool {
        self.items
            .windows(2)
            .all(|pair| pair[0].key() < pair[1].key())
    }

    // ========================================================================
    // Key Generation
    // ========================================================================

    /// Key for a new entry placed at `position`
    ///
    /// `0` prepends, `len()` appends; anything in between takes the midpoint
    /// of its neighbours, rebalancing forward from `position` once if they
    /// have no room.
    ///
    /// # Errors
    ///
    /// * [`RankError::OutOfBounds`] - `position > len()`
    /// * [`RankError::KeyInsertionFailedAfterRebalance`] - still no room after rebalancing
    pub fn insert(&mut self, position: usize, config: &Config) -> RankResult<Key> {
        let len = self.items.len();
        if position > len {
            return Err(RankError::OutOfBounds);
        }
        if position == 0 {
            return self.prepend(config);
        }
        if position == len {
            return self.append(config);
        }

        self.retrying(position, Direction::Forward, config, |items| {
            between(items[position - 1].key(), items[position].key(), config)
        })
    }

    /// Key for a new entry after the last one
    ///
    /// An empty list yields the middle key of bucket 0, not its bottom key,
    /// so the first entry leaves room on both sides. Under
    /// [`AppendStrategy::Step`], a step that no longer fits falls back to the
    /// midpoint between the last key and the top of its bucket.
    pub fn append(&mut self, config: &Config) -> RankResult<Key> {
        let Some(last) = self.items.len().checked_sub(1) else {
            return Key::middle_of(0, config);
        };

        self.retrying(last, Direction::Backward, config, |items| {
            let key = items[last].key();
            smart_append(key, config).or_else(|err| match config.append_strategy {
                AppendStrategy::Step if err.is_space_exhausted() => {
                    between(key, &Key::top_of(key.bucket(), config)?, config)
                }
                _ => Err(err),
            })
        })
    }

    /// Key for a new entry before the first one
    ///
    /// An empty list yields the middle key of bucket 0 rather than its top
    /// key, matching [`append`](Self::append). Step fallback mirrors `append`
    /// toward the bottom of the bucket.
    pub fn prepend(&mut self, config: &Config) -> RankResult<Key> {
        if self.items.is_empty() {
            return Key::middle_of(0, config);
        }

        self.retrying(0, Direction::Forward, config, |items| {
            let key = items[0].key();
            smart_prepend(key, config).or_else(|err| match config.append_strategy {
                AppendStrategy::Step if err.is_space_exhausted() => {
                    between(&Key::bottom_of(key.bucket(), config)?, key, config)
                }
                _ => Err(err),
            })
        })
    }

    /// Run `attempt`; on a space error rebalance around `position` and run it
    /// once more.
    fn retrying<F>(
        &mut self,
        position: usize,
        direction: Direction,
        config: &Config,
        mut attempt: F,
    ) -> RankResult<Key>
    where
        F: FnMut(&[E]) -> RankResult<Key>,
    {
        for round in 1..=MAX_ATTEMPTS {
            match attempt(self.items) {
                Ok(key) => return Ok(key),
                Err(err) if !err.is_space_exhausted() => return Err(err),
                Err(err) if round < MAX_ATTEMPTS => {
                    debug!(%err, position, ?direction, "no room for key, rebalancing");
                    self.rebalance_from(position, direction, config)?;
                }
                Err(_) => break,
            }
        }

        warn!(position, len = self.items.len(), "key insertion failed after rebalance");
        Err(RankError::KeyInsertionFailedAfterRebalance)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
