//! Polynomial string-hash family for the Bloom filter
//!
//! Each family member folds the input's 16-bit lanes through a polynomial
//! accumulator with its own coefficient.

use crate::{PolyBloomError, Result};

/// Maximum accepted input length in bytes. Longer inputs are an error, never
/// truncated.
pub const MAX_INPUT_LEN: usize = 50;

/// Number of 16-bit lanes folded per digest.
const LANE_COUNT: usize = MAX_INPUT_LEN / 2;

/// One member of the hash family, identified by its coefficient.
#[derive(Debug, Clone)]
pub struct PolyHash {
    coefficient: u16,
}

impl PolyHash {
    /// Create a family member with the given coefficient.
    /// A zero coefficient collapses the polynomial to its last lane, so it is
    /// rejected.
    pub fn new(coefficient: u16) -> Result<Self> {
        if coefficient == 0 {
            return Err(PolyBloomError::InvalidParameter(
                "Hash coefficient must be non-zero".to_string(),
            ));
        }
        Ok(PolyHash { coefficient })
    }

    /// The coefficient identifying this family member.
    pub fn coefficient(&self) -> u16 {
        self.coefficient
    }

    /// Digest `input` into the filter's index space.
    ///
    /// Bytes are packed pairwise into 16-bit lanes: byte `i` is the low byte
    /// and byte `i + 1` (when present) the high byte of lane `i / 2`. The
    /// accumulator starts at 1 and folds the full 25-lane window, so short
    /// inputs keep folding zero tail lanes. All arithmetic wraps in `u16`;
    /// the wraparound is the mixing step, and the resulting value covers
    /// exactly the filter's bit-index range.
    pub fn digest(&self, input: &str) -> Result<u16> {
        let bytes = input.as_bytes();
        if bytes.len() > MAX_INPUT_LEN {
            return Err(PolyBloomError::InputTooLong(format!(
                "input is {} bytes, limit is {}",
                bytes.len(),
                MAX_INPUT_LEN
            )));
        }

        let mut lanes = bytes.chunks(2);
        let mut acc: u16 = 1;
        for _ in 0..LANE_COUNT {
            let lane = match lanes.next() {
                Some([lo, hi]) => u16::from(*lo) | (u16::from(*hi) << 8),
                Some([lo]) => u16::from(*lo),
                _ => 0,
            };
            acc = acc.wrapping_mul(self.coefficient).wrapping_add(lane);
        }
        Ok(acc)
    }
}

/// Build the hash family used by a filter: members with coefficients `1..=k`.
pub fn create_hash_family(count: u16) -> Vec<PolyHash> {
    (1..=count)
        .map(|coefficient| PolyHash { coefficient })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_known_values() {
        // Coefficient 1 reduces the polynomial to 1 + the lane sum.
        let hash = PolyHash::new(1).unwrap();
        assert_eq!(hash.digest("").unwrap(), 1);
        assert_eq!(hash.digest("ab").unwrap(), 25186); // 1 + (97 | 98 << 8)
        assert_eq!(hash.digest("abc").unwrap(), 25285); // previous + 99
    }

    #[test]
    fn test_digest_odd_trailing_byte() {
        // A lone trailing byte gets a zero high byte.
        let hash = PolyHash::new(1).unwrap();
        assert_eq!(hash.digest("a").unwrap(), 98); // 1 + 97
    }

    #[test]
    fn test_digest_deterministic() {
        let hash = PolyHash::new(7).unwrap();
        let first = hash.digest("the quick brown fox").unwrap();
        let second = hash.digest("the quick brown fox").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_coefficient_rejected() {
        assert!(PolyHash::new(0).is_err());
        assert!(PolyHash::new(1).is_ok());
    }

    #[test]
    fn test_input_length_boundary() {
        let hash = PolyHash::new(3).unwrap();

        let max = "x".repeat(MAX_INPUT_LEN);
        assert!(hash.digest(&max).is_ok());

        let over = "x".repeat(MAX_INPUT_LEN + 1);
        match hash.digest(&over) {
            Err(PolyBloomError::InputTooLong(_)) => {}
            other => panic!("expected InputTooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_digest_within_capacity() {
        let family = create_hash_family(16);
        for (i, hash) in family.iter().enumerate() {
            let digest = hash.digest(&format!("input-{}", i)).unwrap();
            assert!(usize::from(digest) < crate::bloom::CAPACITY_BITS);
        }
    }

    #[test]
    fn test_family_coefficients() {
        let family = create_hash_family(4);
        let coefficients: Vec<u16> = family.iter().map(|h| h.coefficient()).collect();
        assert_eq!(coefficients, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_family_diversity() {
        // Different coefficients should spread the same input across the
        // index space rather than collapsing onto one position.
        let family = create_hash_family(8);
        let digests: Vec<u16> = family
            .iter()
            .map(|h| h.digest("hello world").unwrap())
            .collect();

        let unique: std::collections::HashSet<_> = digests.iter().collect();
        assert!(unique.len() > 1);
    }
}
