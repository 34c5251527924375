//! Example: reconstruct one longest strictly increasing subsequence.
//!
//! Run with:
//! `cargo run --example witness`

use lis_dp::{problems::patience::PatienceProblem, utils::witness_values, LisEngine};

fn main() {
    let seq = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];

    let engine = LisEngine::new(PatienceProblem::new(&seq));
    println!("Block size: {}", engine.block_size());
    for block in engine.checkpoints() {
        println!(
            "  checkpoint [{:>2}, {:>2}) tails={:?}",
            block.start, block.end, block.summary.tails
        );
    }

    let (len, witness) = engine.run();
    println!("LIS length: {len}");
    println!("Witness indices: {witness:?}");
    println!("Witness values: {:?}", witness_values(&seq, &witness));
}
