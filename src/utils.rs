//! Small helpers shared by the engine, the strategies and the binaries.

/// Checkpoint spacing for a run over `num_layers` layers: `ceil(sqrt(T))`,
/// never below 1.
///
/// Used by [`crate::engine::LisEngine::new`] so that both the number of
/// checkpoints and the length of a replayed block grow like √T.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        return 1;
    }
    let mut b = (num_layers as f64).sqrt() as usize;
    // Float rounding can land one off for large T.
    while b * b < num_layers {
        b += 1;
    }
    while b > 1 && (b - 1) * (b - 1) >= num_layers {
        b -= 1;
    }
    b
}

/// Whether `seq` is strictly increasing. Empty and single-element slices are.
pub fn is_strictly_increasing(seq: &[i64]) -> bool {
    seq.windows(2).all(|w| w[0] < w[1])
}

/// Map witness indices back to the values they select.
///
/// # Panics
/// Panics if an index is out of bounds for `seq`.
pub fn witness_values(seq: &[i64], witness: &[usize]) -> Vec<i64> {
    witness.iter().map(|&i| seq[i]).collect()
}

/// Whether `witness` is a valid increasing subsequence of `seq`: indices in
/// bounds and strictly ascending, selected values strictly increasing.
pub fn is_valid_witness(seq: &[i64], witness: &[usize]) -> bool {
    witness.iter().all(|&i| i < seq.len())
        && witness.windows(2).all(|w| w[0] < w[1])
        && is_strictly_increasing(&witness_values(seq, witness))
}
