//! O(n log n) longest strictly increasing subsequence as a layered DP.
//!
//! Layer `i` is the state after consuming `seq[0..i]`. The frontier keeps,
//! for every achievable length `k + 1`, the smallest value that ends a
//! strictly increasing subsequence of that length (`tails[k]`). `tails` is
//! itself strictly increasing, so each step is one binary search.
//!
//! Reconstruction walks blocks right to left. Inside a block the tails are
//! replayed from the block's checkpoint to recover each element's ending
//! length, then elements are picked greedily from the right.

use crate::traits::{LayeredDp, Reconstruct};
use crate::LisEngine;

#[derive(Clone, Copy)]
pub struct PatienceProblem<'a> {
    pub seq: &'a [i64],
}

/// Smallest tail value per achievable subsequence length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatienceFrontier {
    pub tails: Vec<i64>,
}

/// Boundary handed from a block to its left neighbour.
///
/// The witness still needs `need` elements from earlier layers, the last of
/// which must be strictly below `bound` (`None` means unbounded).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatienceBoundary {
    pub need: usize,
    pub bound: Option<i64>,
}

impl PatienceFrontier {
    /// Index of the first tail `>= x`. Using `>=` rather than `>` keeps equal
    /// values from extending a subsequence.
    #[inline]
    pub fn insertion_point(&self, x: i64) -> usize {
        self.tails.partition_point(|&t| t < x)
    }

    /// Consume `x` and return the length of the longest strictly increasing
    /// subsequence ending at it.
    pub fn push(&mut self, x: i64) -> usize {
        let k = self.insertion_point(x);
        if k == self.tails.len() {
            self.tails.push(x);
        } else {
            self.tails[k] = x;
        }
        k + 1
    }

    pub fn len(&self) -> usize {
        self.tails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tails.is_empty()
    }
}

impl<'a> PatienceProblem<'a> {
    pub fn new(seq: &'a [i64]) -> Self {
        Self { seq }
    }

    /// Ending lengths for `seq[a..b]`, replayed from the frontier at `a`.
    fn ending_lengths(&self, a: usize, b: usize, frontier_a: &PatienceFrontier) -> Vec<usize> {
        let mut f = frontier_a.clone();
        self.seq[a..b].iter().map(|&x| f.push(x)).collect()
    }
}

impl<'a> LayeredDp for PatienceProblem<'a> {
    type Frontier = PatienceFrontier;
    type Cost = usize;

    fn num_layers(&self) -> usize {
        self.seq.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        PatienceFrontier::default()
    }

    fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier) {
        frontier.push(self.seq[layer]);
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> usize {
        frontier_t.len()
    }
}

impl<'a> Reconstruct for PatienceProblem<'a> {
    type State = usize;
    type Boundary = PatienceBoundary;

    fn terminal_boundary(&self, frontier_t: &Self::Frontier) -> Self::Boundary {
        PatienceBoundary {
            need: frontier_t.len(),
            bound: None,
        }
    }

    fn reconstruct_block(
        &self,
        a: usize,
        b: usize,
        frontier_a: &Self::Frontier,
        beta_b: &Self::Boundary,
    ) -> (Vec<usize>, Self::Boundary) {
        if beta_b.need == 0 {
            return (Vec::new(), beta_b.clone());
        }

        let ends = self.ending_lengths(a, b, frontier_a);
        let PatienceBoundary {
            mut need,
            mut bound,
        } = beta_b.clone();

        // If an element ends a chain of length `need` below `bound`, some
        // element to its left ends a chain of length `need - 1` below it, so
        // the greedy pick never strands the layers further left.
        let mut picked = Vec::new();
        for i in (a..b).rev() {
            if need == 0 {
                break;
            }
            let x = self.seq[i];
            if ends[i - a] == need && bound.map_or(true, |u| x < u) {
                picked.push(i);
                need -= 1;
                bound = Some(x);
            }
        }
        picked.reverse();

        (picked, PatienceBoundary { need, bound })
    }
}

/// Indices of one longest strictly increasing subsequence of `seq`.
pub fn patience_witness(seq: &[i64]) -> Vec<usize> {
    LisEngine::new(PatienceProblem::new(seq)).run().1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{is_valid_witness, witness_values};

    #[test]
    fn frontier_tracks_smallest_tails() {
        let mut f = PatienceFrontier::default();
        let ends: Vec<usize> = [10, 9, 2, 5, 3, 7, 101, 18]
            .iter()
            .map(|&x| f.push(x))
            .collect();
        assert_eq!(ends, vec![1, 1, 1, 2, 2, 3, 4, 4]);
        assert_eq!(f.tails, vec![2, 3, 7, 18]);
    }

    #[test]
    fn equal_values_do_not_extend() {
        let mut f = PatienceFrontier::default();
        assert_eq!(f.push(1), 1);
        assert_eq!(f.push(1), 1);
        assert_eq!(f.push(1), 1);
        assert_eq!(f.tails, vec![1]);
    }

    #[test]
    fn witness_for_classic_example() {
        let seq = [10, 9, 2, 5, 3, 7, 101, 18];
        let (len, witness) = LisEngine::new(PatienceProblem::new(&seq)).run();
        assert_eq!(len, 4);
        assert!(is_valid_witness(&seq, &witness));
        assert_eq!(witness.len(), 4);
        // Greedy from the right takes the latest candidates.
        assert_eq!(witness_values(&seq, &witness), vec![2, 3, 7, 18]);
    }

    #[test]
    fn witness_is_block_size_independent() {
        let seq = [3, -1, 4, 1, 5, -9, 2, 6, 5, 3, 5, 8, 9, 7, 9];
        let expected = LisEngine::with_block_size(PatienceProblem::new(&seq), 1).run();
        for b in 2..=seq.len() + 1 {
            let got = LisEngine::with_block_size(PatienceProblem::new(&seq), b).run();
            assert_eq!(got, expected, "block size {b}");
        }
        assert!(is_valid_witness(&seq, &expected.1));
    }

    #[test]
    fn handles_extreme_values() {
        let seq = [i64::MAX, i64::MIN, 0, i64::MAX];
        let (len, witness) = LisEngine::new(PatienceProblem::new(&seq)).run();
        assert_eq!(len, 3);
        assert_eq!(witness, vec![1, 2, 3]);
    }

    #[test]
    fn empty_input() {
        assert!(patience_witness(&[]).is_empty());
        assert_eq!(LisEngine::new(PatienceProblem::new(&[])).cost(), 0);
    }
}
