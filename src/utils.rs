//! Parameter mathematics for fixed-capacity filters

use crate::bloom::{CAPACITY_BITS, MAX_NUM_HASHES};

/// Derived sizing for one experiment point at the crate's fixed capacity.
pub struct TrialParameters {
    pub num_items: usize,
    pub num_hashes: u16,
    pub expected_fpr: f64,
}

/// Hash count minimizing the false-positive rate at the given load factor:
/// k = ln 2 / alpha, rounded up and clamped to the supported range.
pub fn optimal_num_hashes(load_factor: f64) -> u16 {
    let k = (std::f64::consts::LN_2 / load_factor).ceil();
    (k as u16).clamp(1, MAX_NUM_HASHES)
}

/// Theoretical false-positive rate of a filter with `num_hashes` hash
/// functions after `num_items` insertions: (1 - e^(-k * n / m))^k.
pub fn expected_fpr(num_hashes: u16, num_items: usize, capacity_bits: usize) -> f64 {
    if num_items == 0 || capacity_bits == 0 {
        return 0.0;
    }

    let k = f64::from(num_hashes);
    let n = num_items as f64;
    let m = capacity_bits as f64;
    (1.0 - (-k * n / m).exp()).powi(i32::from(num_hashes))
}

/// Calculate the parameters of a single experiment point for a target load
/// factor: item count, optimal hash count, and the theoretical rate they
/// predict.
pub fn trial_parameters(load_factor: f64) -> TrialParameters {
    let num_items = (load_factor * CAPACITY_BITS as f64) as usize;
    let num_hashes = optimal_num_hashes(load_factor);

    TrialParameters {
        num_items,
        num_hashes,
        expected_fpr: expected_fpr(num_hashes, num_items, CAPACITY_BITS),
    }
}
