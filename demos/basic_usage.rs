//! Basic usage examples for poly-bloom

use poly_bloom::experiment::run_trial;
use poly_bloom::utils::trial_parameters;
use poly_bloom::BloomFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Poly Bloom Filter Examples ===\n");

    // Example 1: Basic membership testing
    println!("1. Basic membership:");
    let mut filter = BloomFilter::new(3)?;

    let members = ["alpha", "bravo", "charlie", "delta"];
    for name in &members {
        filter.add(name)?;
    }

    for name in &members {
        println!("  {} in filter: {}", name, filter.contains(name)?);
    }
    for name in &["echo", "foxtrot"] {
        println!("  {} in filter: {}", name, filter.contains(name)?);
    }

    println!("  {}", filter.stats());
    println!();

    // Example 2: Clearing for reuse
    println!("2. Clear and reuse:");
    filter.clear();
    println!("  alpha after clear: {}", filter.contains("alpha")?);
    println!(
        "  non-zero bytes in bit array: {}",
        filter.bit_array().iter().filter(|&&byte| byte != 0).count()
    );
    println!();

    // Example 3: One measured trial at 5% load
    println!("3. Single trial at 5% load:");
    let params = trial_parameters(0.05);
    let mut trial_filter = BloomFilter::new(params.num_hashes)?;
    let mut rng = rand::thread_rng();

    let outcome = run_trial(
        &mut trial_filter,
        &mut rng,
        params.num_items,
        params.num_items,
    )?;

    println!(
        "  {} probes, {} false positives (measured {:.4}, expected {:.4})",
        outcome.probes,
        outcome.false_positives,
        outcome.rate(),
        params.expected_fpr
    );

    Ok(())
}
