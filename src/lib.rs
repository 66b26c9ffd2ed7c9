//! # Poly Bloom
//!
//! A fixed-capacity Bloom filter driven by a 16-bit polynomial string-hash
//! family, plus a statistical harness for measuring empirical false-positive
//! rates under varying load factors.

pub mod bloom;
pub mod experiment;
pub mod hash;
pub mod utils;

pub use bloom::{BloomFilter, BloomStats, CAPACITY_BITS, MAX_NUM_HASHES};
pub use experiment::{run_experiment, run_trial, ExperimentReport, TrialOutcome};
pub use hash::{create_hash_family, PolyHash, MAX_INPUT_LEN};

/// Common error types for the library
#[derive(Debug, Clone)]
pub enum PolyBloomError {
    InvalidParameter(String),
    InputTooLong(String),
}

impl std::fmt::Display for PolyBloomError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PolyBloomError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            PolyBloomError::InputTooLong(msg) => write!(f, "Input too long: {}", msg),
        }
    }
}

impl std::error::Error for PolyBloomError {}

pub type Result<T> = std::result::Result<T, PolyBloomError>;
