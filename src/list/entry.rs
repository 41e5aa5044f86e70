//! Entry capability for reorderable lists.
//!
//! ## Design
//!
//! Entries are owned by the caller (typically rows read from storage). The
//! list only needs two things from them: read the current key, and
//! overwrite it. [`Reorderable`] is that capability.
//!
//! The trait is implemented for `&mut T`, so a list can run over a slice of
//! handles (`Vec<&mut Row>`) as well as over the rows themselves.
//!
//! [`RankedItem`] wraps any value with a key for callers that have no row
//! type of their own.

use crate::types::Key;

/// An entry whose key a list may read and rewrite.
pub trait Reorderable {
    /// Current key
    fn key(&self) -> &Key;

    /// Overwrite the key in place
    fn set_key(&mut self, key: Key);
}

impl<T: Reorderable + ?Sized> Reorderable for &mut T {
    #[inline]
    fn key(&self) -> &Key {
        (**self).key()
    }

    #[inline]
    fn set_key(&mut self, key: Key) {
        (**self).set_key(key)
    }
}

impl<T: Reorderable + ?Sized> Reorderable for Box<T> {
    #[inline]
    fn key(&self) -> &Key {
        (**self).key()
    }

    #[inline]
    fn set_key(&mut self, key: Key) {
        (**self).set_key(key)
    }
}

/// A value paired with its rank key.
///
/// # Example
///
/// ```
/// use lexorank::{Key, RankedItem, Reorderable};
///
/// let mut item = RankedItem::new("write docs", Key::parse("0|U").unwrap());
/// item.set_key(Key::parse("0|V").unwrap());
///
/// assert_eq!(item.key().as_str(), "0|V");
/// assert_eq!(item.value, "write docs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedItem<T> {
    pub value: T,
    key: Key,
}

impl<T> RankedItem<T> {
    #[inline]
    pub fn new(value: T, key: Key) -> Self {
        Self { value, key }
    }

    /// Split back into value and key
    #[inline]
    pub fn into_parts(self) -> (T, Key) {
        (self.value, self.key)
    }
}

impl<T> Reorderable for RankedItem<T> {
    #[inline]
    fn key(&self) -> &Key {
        &self.key
    }

    #[inline]
    fn set_key(&mut self, key: Key) {
        self.key = key;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
