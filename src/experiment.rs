//! Statistical harness for measuring empirical false-positive rates
//!
//! Drives the filter with random member and probe strings, tracks exact
//! membership on the side, and averages the measured rate over repeated
//! trials.

use crate::bloom::{BloomFilter, CAPACITY_BITS};
use crate::hash::MAX_INPUT_LEN;
use crate::utils::expected_fpr;
use crate::{PolyBloomError, Result};
use fnv::FnvHashSet;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt;

/// Length of generated member and probe strings.
pub const RANDOM_STRING_LEN: usize = MAX_INPUT_LEN;

/// Outcome of a single trial.
#[derive(Debug, Clone, Copy)]
pub struct TrialOutcome {
    pub false_positives: usize,
    pub probes: usize,
}

impl TrialOutcome {
    /// Fraction of probes the filter wrongly reported as members.
    pub fn rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.false_positives as f64 / self.probes as f64
        }
    }
}

/// Averaged results for one (load factor, hash count) experiment point.
#[derive(Debug, Clone)]
pub struct ExperimentReport {
    pub load_factor: f64,
    pub num_hashes: u16,
    pub num_items: usize,
    pub trials: usize,
    pub mean_fpr: f64,
    pub expected_fpr: f64,
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Experiment Results:\n\
             - Load factor: {:.2}\n\
             - Hash functions: {}\n\
             - Items per trial: {}\n\
             - Trials: {}\n\
             - Measured FPR: {:.6}\n\
             - Expected FPR: {:.6}",
            self.load_factor,
            self.num_hashes,
            self.num_items,
            self.trials,
            self.mean_fpr,
            self.expected_fpr
        )
    }
}

/// Generate a uniform random alphanumeric string.
pub fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Run one trial: clear the filter, insert `num_items` random members, then
/// probe `num_probes` fresh random strings and count the ones the filter
/// wrongly reports. True membership is screened with an exact set, so a
/// probe colliding with a member never counts as a false positive.
pub fn run_trial<R: Rng>(
    filter: &mut BloomFilter,
    rng: &mut R,
    num_items: usize,
    num_probes: usize,
) -> Result<TrialOutcome> {
    filter.clear();

    let mut members: FnvHashSet<String> = FnvHashSet::default();
    for _ in 0..num_items {
        let member = random_string(rng, RANDOM_STRING_LEN);
        filter.add(&member)?;
        members.insert(member);
    }

    let mut false_positives = 0;
    for _ in 0..num_probes {
        let probe = random_string(rng, RANDOM_STRING_LEN);
        if filter.contains(&probe)? && !members.contains(&probe) {
            false_positives += 1;
        }
    }

    Ok(TrialOutcome {
        false_positives,
        probes: num_probes,
    })
}

/// Measure the mean false-positive rate at a target load factor, averaged
/// over `trials` independent trials. One filter instance is reused across
/// all trials via `clear`. Each trial inserts `load_factor * CAPACITY_BITS`
/// members and probes the same number of fresh strings.
pub fn run_experiment(load_factor: f64, num_hashes: u16, trials: usize) -> Result<ExperimentReport> {
    if !(load_factor > 0.0 && load_factor <= 1.0) {
        return Err(PolyBloomError::InvalidParameter(format!(
            "Load factor must be in (0, 1], got {}",
            load_factor
        )));
    }
    if trials == 0 {
        return Err(PolyBloomError::InvalidParameter(
            "Trial count must be > 0".to_string(),
        ));
    }

    let num_items = (load_factor * CAPACITY_BITS as f64) as usize;
    let mut filter = BloomFilter::new(num_hashes)?;
    let mut rng = rand::thread_rng();

    let mut total_rate = 0.0;
    for _ in 0..trials {
        let outcome = run_trial(&mut filter, &mut rng, num_items, num_items)?;
        total_rate += outcome.rate();
    }

    Ok(ExperimentReport {
        load_factor,
        num_hashes,
        num_items,
        trials,
        mean_fpr: total_rate / trials as f64,
        expected_fpr: expected_fpr(num_hashes, num_items, CAPACITY_BITS),
    })
}
