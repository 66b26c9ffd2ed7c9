//! Fixed-capacity Bloom filter
//!
//! A space-efficient probabilistic set-membership structure over the
//! polynomial hash family. No false negatives; false positives at a rate
//! governed by the hash count and the load.

use crate::hash::{create_hash_family, PolyHash};
use crate::{PolyBloomError, Result};
use bitvec::{bitvec, order::Lsb0, vec::BitVec};

/// Filter capacity in bits. The `u16` digest covers exactly this index
/// space, so derived indices are always in range.
pub const CAPACITY_BITS: usize = 1 << 16;

/// Upper bound on the hash-family size.
pub const MAX_NUM_HASHES: u16 = 255;

/// A fixed-capacity Bloom filter
pub struct BloomFilter {
    /// Bit array storing the filter data, packed 8 bits per byte
    bits: BitVec<u8, Lsb0>,
    /// Hash family used by this filter, coefficients `1..=k`
    hash_family: Vec<PolyHash>,
    /// Number of insertions (for statistics)
    count: usize,
}

impl BloomFilter {
    /// Create a new filter using `num_hashes` hash functions.
    ///
    /// The bit array is allocated at the fixed capacity and starts all-zero.
    /// With zero hash functions the filter could never set or check a bit,
    /// so `num_hashes` must be in `1..=MAX_NUM_HASHES`.
    pub fn new(num_hashes: u16) -> Result<Self> {
        if num_hashes == 0 {
            return Err(PolyBloomError::InvalidParameter(
                "Number of hashes must be > 0".to_string(),
            ));
        }
        if num_hashes > MAX_NUM_HASHES {
            return Err(PolyBloomError::InvalidParameter(format!(
                "Number of hashes must be <= {}",
                MAX_NUM_HASHES
            )));
        }

        Ok(BloomFilter {
            bits: bitvec![u8, Lsb0; 0; CAPACITY_BITS],
            hash_family: create_hash_family(num_hashes),
            count: 0,
        })
    }

    /// Insert a string into the filter.
    ///
    /// Every coefficient is digested before any bit is touched, so a failed
    /// digest leaves the filter unchanged.
    pub fn add(&mut self, input: &str) -> Result<()> {
        let mut indices = Vec::with_capacity(self.hash_family.len());
        for hash in &self.hash_family {
            indices.push(usize::from(hash.digest(input)?));
        }

        for index in indices {
            self.bits.set(index, true);
        }

        self.count += 1;
        Ok(())
    }

    /// Check whether a string might be in the filter.
    /// Returns true if the string might be present (with possible false
    /// positives), false if it is definitely not present.
    pub fn contains(&self, input: &str) -> Result<bool> {
        for hash in &self.hash_family {
            let index = usize::from(hash.digest(input)?);
            if !self.bits[index] {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Reset every bit to zero, making the filter reusable across
    /// independent trials without reallocating.
    pub fn clear(&mut self) {
        self.bits.fill(false);
        self.count = 0;
    }

    /// Read-only view of the packed bit array, one byte per 8 bits.
    pub fn bit_array(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }

    /// Get the current load factor (fraction of bits set)
    pub fn load_factor(&self) -> f64 {
        self.bits.count_ones() as f64 / self.bits.len() as f64
    }

    /// Get the estimated false positive rate at the current load
    pub fn estimated_fpr(&self) -> f64 {
        self.load_factor().powi(self.hash_family.len() as i32)
    }

    /// Get statistics about the filter
    pub fn stats(&self) -> BloomStats {
        BloomStats {
            capacity: CAPACITY_BITS,
            num_hashes: self.num_hashes(),
            elements_inserted: self.count,
            load_factor: self.load_factor(),
            estimated_fpr: self.estimated_fpr(),
        }
    }

    /// Get the number of elements inserted
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the capacity (number of bits)
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Get the number of hash functions
    pub fn num_hashes(&self) -> u16 {
        self.hash_family.len() as u16
    }
}

/// Statistics about a Bloom filter
#[derive(Debug, Clone)]
pub struct BloomStats {
    pub capacity: usize,
    pub num_hashes: u16,
    pub elements_inserted: usize,
    pub load_factor: f64,
    pub estimated_fpr: f64,
}

impl std::fmt::Display for BloomStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter Stats:\n\
             - Capacity: {} bits\n\
             - Hash functions: {}\n\
             - Elements inserted: {}\n\
             - Load factor: {:.3}\n\
             - Estimated FPR: {:.6}",
            self.capacity,
            self.num_hashes,
            self.elements_inserted,
            self.load_factor,
            self.estimated_fpr
        )
    }
}
