//! Local rebalancing and full normalization.
//!
//! ## Two Tiers
//!
//! 1. **Local walk** ([`ReorderableList::try_rebalance_from`]): starting at
//!    `position`, look for the nearest neighbour pair with room, rewrite that
//!    key, then cascade back so every key up to `position` moves. Writes are
//!    proportional to the distance walked.
//! 2. **Normalize** ([`ReorderableList::normalize`]): rewrite every key at an
//!    evenly spaced fraction of the key space. Always yields a strictly
//!    increasing list for a single-bucket list.
//!
//! [`ReorderableList::rebalance_from`] runs tier 1 and falls back to tier 2
//! when the walk fails, leaves the list unsorted, or leaves the gap next to
//! `position` without room for a midpoint.
//!
//! ## Walk Direction
//!
//! ```text
//! Forward  from p: moves key[p] up    -> room opens between key[p-1] and key[p]
//!          p      p+1     p+2 ...  top
//!          ^------ first pair with room, then cascade back to p
//!
//! Backward from p: moves key[p] down  -> room opens between key[p] and key[p+1]
//!   bottom ... p-2   p-1     p
//! ```

use num_bigint::BigUint;
use tracing::{debug, warn};

use crate::list::{Reorderable, ReorderableList};
use crate::rank::between;
use crate::types::alphabet::{capacity, BASE};
use crate::types::{Config, Key, RankError, RankResult};

/// Walk direction for a local rebalance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward higher indices; moves keys up
    Forward,
    /// Toward lower indices; moves keys down
    Backward,
}

impl<'a, E: Reorderable> ReorderableList<'a, E> {
    /// Make room at `position`, normalizing the whole list if a local walk
    /// cannot.
    ///
    /// Afterwards the list is strictly sorted, even if the input held
    /// duplicates or out-of-order neighbours. A list spanning several buckets
    /// fails with [`RankError::BucketMismatch`].
    pub fn rebalance_from(
        &mut self,
        position: usize,
        direction: Direction,
        config: &Config,
    ) -> RankResult<()> {
        if self.try_rebalance_from(position, direction, config)
            && self.is_sorted()
            && self.has_room_at(position, direction, config)
        {
            debug!(position, ?direction, "local rebalance succeeded");
            return Ok(());
        }

        warn!(
            position,
            ?direction,
            len = self.items.len(),
            "local rebalance failed, normalizing list"
        );
        self.normalize(config)
    }

    /// Walk from `position` to rewrite its key, reporting whether it was
    /// rewritten.
    pub(crate) fn try_rebalance_from(
        &mut self,
        position: usize,
        direction: Direction,
        config: &Config,
    ) -> bool {
        if position >= self.items.len() {
            return false;
        }
        match direction {
            Direction::Forward => self.raise_from(position, config),
            Direction::Backward => self.lower_from(position, config),
        }
    }

    /// Whether the gap a walk in `direction` opens next to `position` can take
    /// a midpoint
    fn has_room_at(&self, position: usize, direction: Direction, config: &Config) -> bool {
        let Some(item) = self.items.get(position) else {
            return false;
        };
        let bucket = item.key().bucket();

        let (lower, upper) = match direction {
            Direction::Forward => match position.checked_sub(1) {
                Some(prev) => (self.items[prev].key().clone(), item.key().clone()),
                None => match Key::bottom_of(bucket, config) {
                    Ok(bottom) => (bottom, item.key().clone()),
                    Err(_) => return false,
                },
            },
            Direction::Backward => match self.items.get(position + 1) {
                Some(next) => (item.key().clone(), next.key().clone()),
                None => match Key::top_of(bucket, config) {
                    Ok(top) => (item.key().clone(), top),
                    Err(_) => return false,
                },
            },
        };

        between(&lower, &upper, config).is_ok()
    }

    fn raise_from(&mut self, position: usize, config: &Config) -> bool {
        let len = self.items.len();

        for i in position..len {
            let upper = match self.items.get(i + 1) {
                Some(next) => next.key().clone(),
                None => match Key::top_of(self.items[i].key().bucket(), config) {
                    Ok(top) => top,
                    Err(_) => return false,
                },
            };
            let Ok(raised) = between(self.items[i].key(), &upper, config) else {
                continue;
            };
            self.items[i].set_key(raised);

            for j in (position..i).rev() {
                match between(self.items[j].key(), self.items[j + 1].key(), config) {
                    Ok(key) => self.items[j].set_key(key),
                    Err(_) => return false,
                }
            }
            return true;
        }

        false
    }

    fn lower_from(&mut self, position: usize, config: &Config) -> bool {
        for i in (0..=position).rev() {
            let lower = match i.checked_sub(1) {
                Some(prev) => self.items[prev].key().clone(),
                None => match Key::bottom_of(self.items[i].key().bucket(), config) {
                    Ok(bottom) => bottom,
                    Err(_) => return false,
                },
            };
            let Ok(lowered) = between(&lower, self.items[i].key(), config) else {
                continue;
            };
            self.items[i].set_key(lowered);

            for j in i + 1..=position {
                match between(self.items[j - 1].key(), self.items[j].key(), config) {
                    Ok(key) => self.items[j].set_key(key),
                    Err(_) => return false,
                }
            }
            return true;
        }

        false
    }

    /// Rewrite every key at fraction `(i + 2) / (n + 3)` of its bucket
    ///
    /// Keys are as short as possible while leaving at least one spare digit
    /// of room in each gap, and never longer than `max_rank_length`. The
    /// margin of two slots below and one above keeps the list clear of the
    /// bucket boundaries.
    ///
    /// A list holds a single bucket; mixed buckets are rejected before any
    /// key is rewritten.
    ///
    /// # Errors
    ///
    /// * [`RankError::BucketMismatch`] - entries from more than one bucket
    /// * [`RankError::RebalanceRequired`] - `max_rank_length` digits cannot
    ///   hold `n + 3` distinct positions
    pub fn normalize(&mut self, config: &Config) -> RankResult<()> {
        config.validate()?;
        if let Some(first) = self.items.first() {
            let lhs = first.key().bucket();
            if let Some(other) = self.items.iter().find(|item| item.key().bucket() != lhs) {
                return Err(RankError::BucketMismatch {
                    lhs,
                    rhs: other.key().bucket(),
                });
            }
        }

        let slots = self.items.len() + 3;
        let length = normalized_length(slots, config.max_rank_length)?;

        for (i, item) in self.items.iter_mut().enumerate() {
            let key = Key::at(item.key().bucket(), i + 2, slots, length)?;
            item.set_key(key);
        }

        debug!(len = self.items.len(), length, "normalized list");
        Ok(())
    }
}

/// Shortest length giving every one of `slots` gaps a full digit of room
fn normalized_length(slots: usize, max_length: usize) -> RankResult<usize> {
    let roomy = BigUint::from(slots) * BASE;

    let mut length = 1;
    while length < max_length && capacity(length) < roomy {
        length += 1;
    }

    if capacity(length) < BigUint::from(slots) {
        return Err(RankError::RebalanceRequired);
    }
    Ok(length)
}

// ============================================================================
// Unit Tests
// ============================================================================
