//! Example: every strategy on the same input, with timings.
//!
//! Run with:
//! `cargo run --release --example strategies`

use std::time::Instant;

use lis_dp::Strategy;

fn main() {
    let seq: Vec<i64> = (0..22).map(|i: i64| (i * 7919) % 23 - 11).collect();
    println!("Input: {seq:?}");

    for strategy in Strategy::ALL {
        let start = Instant::now();
        let len = strategy.solve(&seq);
        println!(
            "{:>10}: {len} ({:.3} ms)",
            strategy.name(),
            start.elapsed().as_secs_f64() * 1e3
        );
    }
}
