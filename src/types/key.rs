//! The rank key value type.
//!
//! ## Text Format
//!
//! ```text
//! 1|aaaaaa
//! ^ ^^^^^^
//! | rank: 1..=max_rank_length alphabet symbols
//! bucket: one ASCII digit, followed by '|'
//! ```
//!
//! The canonical text is the key's identity: equality, hashing and ordering
//! all operate on its bytes. Keys from different buckets order by bucket
//! first, but only same-bucket keys are meaningful to compare.
//!
//! ## Example
//!
//! ```
//! use lexorank::{Config, Key};
//!
//! let key: Key = "1|aaaaaa".parse().unwrap();
//! assert_eq!(key.bucket(), 1);
//! assert_eq!(key.rank(), "aaaaaa");
//!
//! let config = Config::default();
//! assert_eq!(Key::top_of(1, &config).unwrap().to_string(), "1|zzzzzz");
//! assert!(key < Key::top_of(1, &config).unwrap());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::alphabet::{digit_of, MAXIMUM, MIDPOINT, MINIMUM};
use crate::types::config::BUCKET_DIGIT_LIMIT;
use crate::types::{Config, RankError, RankResult};

/// Separator between bucket marker and rank
pub const SEPARATOR: char = '|';

/// An immutable rank key: bucket id plus digit sequence.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Key {
    /// Canonical text, e.g. "0|aaaaaa"
    raw: String,
    bucket: u8,
}

impl Key {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Parse a key from its canonical text
    ///
    /// Fails with [`RankError::InvalidKey`] on empty or malformed text, a
    /// non-digit bucket marker, an empty rank, or a rank symbol outside
    /// the alphabet. The rank length is not bounded here; see
    /// [`Key::parse_with`].
    pub fn parse(text: &str) -> RankResult<Key> {
        if text.is_empty() {
            return Err(RankError::InvalidKey("empty key".into()));
        }

        let (marker, rank) = text
            .split_once(SEPARATOR)
            .ok_or_else(|| RankError::InvalidKey(format!("missing separator in {text:?}")))?;

        let bucket = match marker.as_bytes() {
            [digit] if digit.is_ascii_digit() => digit - b'0',
            _ => {
                return Err(RankError::InvalidKey(format!(
                    "bucket marker {marker:?} is not a single digit"
                )))
            }
        };

        if rank.is_empty() {
            return Err(RankError::InvalidKey(format!("empty rank in {text:?}")));
        }
        if let Some(symbol) = rank.bytes().find(|&symbol| digit_of(symbol).is_none()) {
            return Err(RankError::InvalidKey(format!(
                "symbol {:?} is outside the alphabet",
                symbol as char
            )));
        }

        Ok(Key {
            raw: text.to_owned(),
            bucket,
        })
    }

    /// Parse a key and check its rank fits `config.max_rank_length`
    pub fn parse_with(text: &str, config: &Config) -> RankResult<Key> {
        let key = Key::parse(text)?;
        if key.rank_len() > config.max_rank_length {
            return Err(RankError::InvalidKey(format!(
                "rank length {} exceeds maximum {}",
                key.rank_len(),
                config.max_rank_length
            )));
        }
        Ok(key)
    }

    /// Build a key from parts already known to be valid.
    pub(crate) fn from_rank(bucket: u8, rank: &str) -> Key {
        debug_assert!(bucket <= BUCKET_DIGIT_LIMIT);
        debug_assert!(!rank.is_empty() && rank.bytes().all(|s| digit_of(s).is_some()));

        Key {
            raw: format!("{bucket}{SEPARATOR}{rank}"),
            bucket,
        }
    }

    /// Highest key of a bucket: `max_rank_length` maximum symbols
    pub fn top_of(bucket: u8, config: &Config) -> RankResult<Key> {
        Key::filled(bucket, MAXIMUM, config)
    }

    /// Lowest key of a bucket: `max_rank_length` minimum symbols
    pub fn bottom_of(bucket: u8, config: &Config) -> RankResult<Key> {
        Key::filled(bucket, MINIMUM, config)
    }

    /// Midpoint key of a bucket: `max_rank_length` midpoint symbols
    pub fn middle_of(bucket: u8, config: &Config) -> RankResult<Key> {
        Key::filled(bucket, MIDPOINT, config)
    }

    fn filled(bucket: u8, symbol: u8, config: &Config) -> RankResult<Key> {
        config.validate()?;
        config.check_bucket(bucket)?;

        let rank: String = std::iter::repeat(symbol as char)
            .take(config.max_rank_length)
            .collect();
        Ok(Key::from_rank(bucket, &rank))
    }

    /// Same rank in another bucket
    ///
    /// Buckets outside the configured range are rejected rather than clamped.
    pub fn with_bucket(&self, bucket: u8, config: &Config) -> RankResult<Key> {
        config.check_bucket(bucket)?;
        Ok(Key::from_rank(bucket, self.rank()))
    }

    /// Same position with the rank extended to `length` digits
    ///
    /// Appending minimum symbols adds precision without moving the key.
    /// Shorter or equal lengths return the key unchanged.
    pub fn padded(&self, length: usize) -> Key {
        if length <= self.rank_len() {
            return self.clone();
        }

        let mut raw = String::with_capacity(length + 2);
        raw.push_str(&self.raw);
        raw.extend(std::iter::repeat(MINIMUM as char).take(length - self.rank_len()));
        Key {
            raw,
            bucket: self.bucket,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn bucket(&self) -> u8 {
        self.bucket
    }

    /// The digit sequence after the separator
    #[inline]
    pub fn rank(&self) -> &str {
        &self.raw[2..]
    }

    #[inline]
    pub fn rank_len(&self) -> usize {
        self.raw.len() - 2
    }

    /// Canonical text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

// ============================================================================
// Ordering
// ============================================================================

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.as_bytes().cmp(other.raw.as_bytes())
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Text adapters
// ============================================================================

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self.raw)
    }
}

impl FromStr for Key {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::parse(s)
    }
}

impl TryFrom<&str> for Key {
    type Error = RankError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Key::parse(value)
    }
}

impl TryFrom<String> for Key {
    type Error = RankError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Key::parse(&value)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.raw
    }
}

// === Serde: serialize as canonical string ===

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Key::parse(&text).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
