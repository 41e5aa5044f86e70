//! Midpoint search between two keys.
//!
//! ## Algorithm
//!
//! Both ranks are decoded and scaled to a common digit length `L`. The
//! integer midpoint is accepted if it lies strictly between them; otherwise
//! both values gain one digit of precision (multiply by 75) and the search
//! repeats. Precision only grows, and stops at `max_rank_length`, so every
//! call terminates after at most `max_rank_length` rounds.
//!
//! ```text
//! "a" , "b"   L=1   36 , 37           no integer between
//! "a0", "b0"  L=2   2700 , 2775       mid 2737 -> "aU"
//! ```

use tracing::trace;

use crate::types::alphabet::{decode, encode, widen, BASE};
use crate::types::{Config, Key, RankError, RankResult};

/// Find a key strictly between `lhs` and `rhs`
///
/// # Errors
///
/// * [`RankError::BucketMismatch`] - keys belong to different buckets
/// * [`RankError::OrderingViolation`] - `lhs >= rhs`
/// * [`RankError::RebalanceRequired`] - no key fits within `max_rank_length`
///
/// # Example
///
/// ```
/// use lexorank::{between, Config, Key};
///
/// let config = Config::default();
/// let lhs = Key::parse("0|a").unwrap();
/// let rhs = Key::parse("0|b").unwrap();
///
/// let mid = between(&lhs, &rhs, &config).unwrap();
/// assert_eq!(mid.as_str(), "0|aU");
/// assert!(lhs < mid && mid < rhs);
/// ```
pub fn between(lhs: &Key, rhs: &Key, config: &Config) -> RankResult<Key> {
    if lhs.bucket() != rhs.bucket() {
        return Err(RankError::BucketMismatch {
            lhs: lhs.bucket(),
            rhs: rhs.bucket(),
        });
    }
    if lhs >= rhs {
        return Err(RankError::OrderingViolation);
    }

    let max_length = config.max_rank_length;
    let mut length = lhs.rank_len().max(rhs.rank_len()).max(1);
    if length > max_length {
        return Err(RankError::RebalanceRequired);
    }

    let mut low = widen(decode(lhs.rank())?, lhs.rank_len(), length);
    let mut high = widen(decode(rhs.rank())?, rhs.rank_len(), length);

    loop {
        let mid = (&low + &high) / 2u32;
        if low < mid && mid < high {
            let rank = encode(&mid, length)?;
            return Ok(Key::from_rank(lhs.bucket(), &rank));
        }

        if length >= max_length {
            trace!(%lhs, %rhs, max_length, "no midpoint within maximum rank length");
            return Err(RankError::RebalanceRequired);
        }

        length += 1;
        low *= BASE;
        high *= BASE;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(text: &str) -> Key {
        Key::parse(text).unwrap()
    }

    #[test]
    fn test_between_grows_one_digit() {
        let config = Config::default();
        let mid = between(&key("0|a"), &key("0|b"), &config).unwrap();
        assert_eq!(mid.as_str(), "0|aU");
    }

    #[test]
    fn test_between_boundaries_is_middle() {
        let config = Config::default();
        let bottom = Key::bottom_of(0, &config).unwrap();
        let top = Key::top_of(0, &config).unwrap();

        let mid = between(&bottom, &top, &config).unwrap();
        assert_eq!(mid, Key::middle_of(0, &config).unwrap());
    }

    #[test]
    fn test_between_mixed_lengths() {
        let config = Config::default();
        let lhs = key("1|aaaaaf");
        let top = Key::top_of(1, &config).unwrap();
        assert_eq!(between(&lhs, &top, &config).unwrap().as_str(), "1|nHnHnJ");

        let bottom = Key::bottom_of(1, &config).unwrap();
        assert_eq!(
            between(&bottom, &key("1|aaaaaa"), &config).unwrap().as_str(),
            "1|HnHnHn"
        );
    }

    #[test]
    fn test_between_adjacent_at_ceiling() {
        let config = Config::default();
        assert_eq!(
            between(&key("1|aaaaaa"), &key("1|aaaaab"), &config),
            Err(RankError::RebalanceRequired)
        );

        // One more digit of headroom is enough
        let roomier = config.with_max_rank_length(7);
        assert_eq!(
            between(&key("1|aaaaaa"), &key("1|aaaaab"), &roomier)
                .unwrap()
                .as_str(),
            "1|aaaaaaU"
        );
    }

    #[test]
    fn test_between_equal_value_different_length() {
        // "a" and "a0" name the same position; nothing fits between them
        let config = Config::default();
        assert_eq!(
            between(&key("0|a"), &key("0|a0"), &config),
            Err(RankError::RebalanceRequired)
        );
    }

    #[test]
    fn test_between_rejects_bad_input() {
        let config = Config::default();
        assert_eq!(
            between(&key("0|a"), &key("1|b"), &config),
            Err(RankError::BucketMismatch { lhs: 0, rhs: 1 })
        );
        assert_eq!(
            between(&key("0|b"), &key("0|a"), &config),
            Err(RankError::OrderingViolation)
        );
        assert_eq!(
            between(&key("0|a"), &key("0|a"), &config),
            Err(RankError::OrderingViolation)
        );
    }

    #[test]
    fn test_between_rejects_overlong_input() {
        let config = Config::default();
        assert_eq!(
            between(&key("0|aaaaaaa"), &key("0|b"), &config),
            Err(RankError::RebalanceRequired)
        );
    }

    #[test]
    fn test_between_never_exceeds_ceiling() {
        let config = Config::default();
        let mut lhs = key("0|a");
        let rhs = key("0|b");

        let mut steps = 0;
        while let Ok(mid) = between(&lhs, &rhs, &config) {
            assert!(lhs < mid && mid < rhs);
            assert!(mid.rank_len() <= config.max_rank_length);
            lhs = mid;
            steps += 1;
        }
        assert_eq!(steps, 35);
    }
}
