use poly_bloom::experiment::run_experiment;
use poly_bloom::utils::trial_parameters;
use poly_bloom::CAPACITY_BITS;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Bloom filter false-positive sweep");
    println!("{}", "=".repeat(55));

    // Load factors 0.05 to 0.50 in steps of 0.05, 100 trials per point.
    let load_factors: Vec<f64> = (1..=10).map(|i| i as f64 * 0.05).collect();
    let trials = 100;

    println!(
        "Capacity: {} bits, {} trials per point",
        CAPACITY_BITS, trials
    );
    println!();

    let mut results = Vec::new();

    for &load_factor in &load_factors {
        let params = trial_parameters(load_factor);
        println!(
            "🔬 Testing load factor {:.2} ({} items, k = {})...",
            load_factor, params.num_items, params.num_hashes
        );

        let start = Instant::now();
        let report = run_experiment(load_factor, params.num_hashes, trials)?;
        let elapsed = start.elapsed().as_secs_f64();

        println!(
            "   ✅ Done in {:.2}s - measured FPR {:.6} (expected {:.6})",
            elapsed, report.mean_fpr, report.expected_fpr
        );

        results.push(report);
    }

    // CSV block for plotting and comparison across runs.
    println!("\n📊 Results (CSV format):");
    println!("load_factor,num_items,num_hashes,trials,measured_fpr,expected_fpr");
    for report in &results {
        println!(
            "{:.2},{},{},{},{:.6},{:.6}",
            report.load_factor,
            report.num_items,
            report.num_hashes,
            report.trials,
            report.mean_fpr,
            report.expected_fpr
        );
    }

    if let (Some(first), Some(last)) = (results.first(), results.last()) {
        println!("\n🎯 Key findings:");
        println!(
            "   Measured FPR at {:.0}% load: {:.6}",
            first.load_factor * 100.0,
            first.mean_fpr
        );
        println!(
            "   Measured FPR at {:.0}% load: {:.6}",
            last.load_factor * 100.0,
            last.mean_fpr
        );
        println!(
            "   Saturation raised the error rate {:.1}x across the sweep",
            if first.mean_fpr > 0.0 {
                last.mean_fpr / first.mean_fpr
            } else {
                f64::INFINITY
            }
        );
    }

    Ok(())
}
