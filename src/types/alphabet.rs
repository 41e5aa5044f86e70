//! Base-75 alphabet and rank codec.
//!
//! ## Overview
//!
//! A rank is a sequence of digits drawn from a fixed, ordered set of 75
//! printable ASCII symbols. The symbol at index *i* has digit value *i*, and
//! the symbols are contiguous in ASCII, so byte-wise comparison of two
//! equal-length ranks is the same as comparing their base-75 values.
//!
//! ## Fractional Interpretation
//!
//! Ranks of different lengths are compared as base-75 fractions: appending a
//! minimum symbol (`'0'`) never changes a rank's position, it only adds
//! precision. [`widen`] performs that scaling on decoded values.
//!
//! ## Example
//!
//! ```
//! use lexorank::types::alphabet::{decode, encode};
//!
//! let value = decode("aU").unwrap();
//! assert_eq!(encode(&value, 2).unwrap(), "aU");
//! assert_eq!(encode(&value, 4).unwrap(), "00aU");
//! ```

use num_bigint::BigUint;
use num_traits::Zero;

use crate::types::{RankError, RankResult};

/// The ordered symbol set, lowest digit first.
pub const ALPHABET: &[u8; 75] =
    b"0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz";

/// Numeric base of all rank arithmetic
pub const BASE: u32 = 75;

/// Lowest symbol (digit 0)
pub const MINIMUM: u8 = b'0';

/// Midpoint symbol (digit 37)
pub const MIDPOINT: u8 = b'U';

/// Highest symbol (digit 74)
pub const MAXIMUM: u8 = b'z';

// ============================================================================
// Symbol <-> Digit
// ============================================================================

/// Digit value of a symbol, or `None` if it is outside the alphabet
#[inline]
pub fn digit_of(symbol: u8) -> Option<u8> {
    (MINIMUM..=MAXIMUM)
        .contains(&symbol)
        .then(|| symbol - MINIMUM)
}

/// Symbol for a digit value
///
/// # Panics
///
/// Panics if `digit >= 75`
#[inline]
pub fn symbol_of(digit: u8) -> u8 {
    ALPHABET[digit as usize]
}

// ============================================================================
// Rank <-> Integer
// ============================================================================

/// Interpret a rank as a base-75 integer, most-significant digit first
pub fn decode(rank: &str) -> RankResult<BigUint> {
    let digits = rank
        .bytes()
        .map(|symbol| {
            digit_of(symbol).ok_or_else(|| {
                RankError::InvalidKey(format!("symbol {:?} is outside the alphabet", symbol as char))
            })
        })
        .collect::<RankResult<Vec<u8>>>()?;

    if digits.is_empty() {
        return Ok(BigUint::zero());
    }

    BigUint::from_radix_be(&digits, BASE)
        .ok_or_else(|| RankError::InvalidKey(format!("cannot decode rank {rank:?}")))
}

/// Encode `value` as exactly `length` digits, zero-left-padded
///
/// Fails with [`RankError::OutOfBounds`] when `value >= 75^length`.
pub fn encode(value: &BigUint, length: usize) -> RankResult<String> {
    let digits = value.to_radix_be(BASE);
    if length == 0 || digits.len() > length {
        return Err(RankError::OutOfBounds);
    }

    let mut rank = String::with_capacity(length);
    rank.extend(std::iter::repeat(MINIMUM as char).take(length - digits.len()));
    rank.extend(digits.into_iter().map(|digit| symbol_of(digit) as char));
    Ok(rank)
}

/// Number of distinct ranks of the given length (`75^length`)
pub fn capacity(length: usize) -> BigUint {
    BigUint::from(BASE).pow(length as u32)
}

/// Scale a value decoded at `from` digits so it represents `to` digits
pub fn widen(value: BigUint, from: usize, to: usize) -> BigUint {
    if to <= from {
        return value;
    }
    value * capacity(to - from)
}

// ============================================================================
// Unit Tests
// ============================================================================
