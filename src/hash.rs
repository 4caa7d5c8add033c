//! Polynomial rolling hash for tokens.
//!
//! Each byte `b` updates the state as `h = (31*h + b) mod 104729`, starting
//! from `h = 0`. Bytes are taken as unsigned values, so every result lies in
//! `[0, 104729)` regardless of the input.
//!
//! The table is small and collisions are neither detected nor resolved: two
//! distinct tokens that share a hash count as the same element in every set
//! operation downstream, which can only raise a similarity score.

use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};

/// Hash table size (a prime modulus).
pub const TABLE_SIZE: u32 = 104_729;

/// Polynomial multiplier.
const MULTIPLIER: u32 = 31;

/// A token hash in `[0, TABLE_SIZE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenHash(pub u32);

impl TokenHash {
    /// The raw value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TokenHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Rolling-hash state usable wherever a [`Hasher`] is expected.
///
/// Writes accumulate, so hashing `"ab"` in one write or as `"a"` then `"b"`
/// gives the same result. Note that `Hash` impls for `str` append a
/// terminator byte; use [`hash_str`] for the plain token hash.
#[derive(Debug, Default, Clone)]
pub struct PolyHasher {
    state: u32,
}

impl PolyHasher {
    /// A fresh hasher (state 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state as a [`TokenHash`].
    pub fn token_hash(&self) -> TokenHash {
        TokenHash(self.state)
    }
}

impl Hasher for PolyHasher {
    fn finish(&self) -> u64 {
        self.state as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state = (MULTIPLIER * self.state + b as u32) % TABLE_SIZE;
        }
    }
}

/// Hash a byte buffer.
pub fn hash_bytes(bytes: &[u8]) -> TokenHash {
    let mut hasher = PolyHasher::new();
    hasher.write(bytes);
    hasher.token_hash()
}

/// Hash a string's UTF-8 bytes.
#[inline]
pub fn hash_str(s: &str) -> TokenHash {
    hash_bytes(s.as_bytes())
}

/// Hash an input that may be absent.
///
/// Absent input is reported rather than hashed to a placeholder value.
pub fn try_hash(bytes: Option<&[u8]>) -> Result<TokenHash> {
    bytes
        .map(hash_bytes)
        .ok_or(Error::MissingInput("cannot hash an absent buffer"))
}

/// Hash any `Hash` value through [`PolyHasher`].
///
/// This follows the value's own `Hash` impl, so for strings the result
/// differs from [`hash_str`].
pub fn hash_value<T: Hash + ?Sized>(value: &T) -> TokenHash {
    let mut hasher = PolyHasher::new();
    value.hash(&mut hasher);
    hasher.token_hash()
}

/// Hash each token, preserving order and duplicates.
pub fn hash_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<TokenHash> {
    tokens.iter().map(|t| hash_str(t.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn known_values() {
        assert_eq!(hash_str(""), TokenHash(0));
        assert_eq!(hash_str("a"), TokenHash(97));
        assert_eq!(hash_str("ab"), TokenHash(3105));
        assert_eq!(hash_str("the"), TokenHash(10072));
        assert_eq!(hash_str("cat"), TokenHash(98262));
        assert_eq!(hash_str("hello world"), TokenHash(103822));
    }

    #[test]
    fn high_bytes_are_unsigned() {
        // "é" is 0xC3 0xA9.
        assert_eq!(hash_str("é"), TokenHash(6214));
    }

    #[test]
    fn order_sensitive() {
        assert_ne!(hash_str("ab"), hash_str("ba"));
    }

    #[test]
    fn split_writes_match_single_write() {
        let mut h = PolyHasher::new();
        h.write(b"hello ");
        h.write(b"world");
        assert_eq!(h.token_hash(), hash_str("hello world"));
        assert_eq!(h.finish(), 103822);
    }

    #[test]
    fn absent_input_is_an_error() {
        assert!(matches!(try_hash(None), Err(Error::MissingInput(_))));
        assert_eq!(try_hash(Some(b"a".as_slice())), Ok(TokenHash(97)));
    }

    #[test]
    fn hash_value_goes_through_the_poly_hasher() {
        let mut h = PolyHasher::new();
        42u8.hash(&mut h);
        assert_eq!(hash_value(&42u8), h.token_hash());
        assert_eq!(hash_value(&42u8), TokenHash(42));
    }

    #[test]
    fn hash_tokens_keeps_order_and_duplicates() {
        let hs = hash_tokens(&["a", "ab", "a"]);
        assert_eq!(hs, vec![TokenHash(97), TokenHash(3105), TokenHash(97)]);
    }

    #[test]
    fn random_buffers_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let len = rng.gen_range(0..64);
            let buf: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let h = hash_bytes(&buf);
            assert!(h.get() < TABLE_SIZE);
            assert_eq!(h, hash_bytes(&buf));
        }
    }
}
