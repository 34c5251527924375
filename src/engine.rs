//! Checkpointed layered DP engine.
//!
//! The engine runs in two phases:
//! 1. A forward pass over all layers that saves the frontier at every block
//!    boundary.
//! 2. A right-to-left reconstruction that replays one block at a time from
//!    its checkpoint and asks the problem to pick the witness states inside it.
//!
//! Only `ceil(T / b) + 1` frontiers and one replayed block are alive at any
//! time. The engine is generic over [`LayeredDp`] and [`Reconstruct`].

use crate::blocks::BlockSummary;
use crate::traits::{LayeredDp, Reconstruct};
use crate::utils::default_block_size;

/// Layered DP engine for a problem instance `P`.
///
/// ```
/// use lis_dp::{LisEngine, problems::patience::PatienceProblem};
///
/// let seq = [10, 9, 2, 5, 3, 7, 101, 18];
/// let (len, witness) = LisEngine::new(PatienceProblem::new(&seq)).run();
/// assert_eq!(len, 4);
/// assert_eq!(witness.len(), 4);
/// ```
pub struct LisEngine<P: LayeredDp> {
    problem: P,
    block_size: usize,
}

/// Result of the forward pass.
struct BuildArtifacts<F> {
    blocks: Vec<BlockSummary<F>>,
    frontier_t: F,
}

impl<P: LayeredDp> LisEngine<P> {
    /// Create an engine with block size `ceil(sqrt(T))`.
    pub fn new(problem: P) -> Self {
        let b = default_block_size(problem.num_layers()).max(1);
        Self::with_block_size(problem, b)
    }

    /// Create an engine with an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(problem: P, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            problem,
            block_size,
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Objective value only. Keeps a single frontier alive.
    pub fn cost(&self) -> P::Cost {
        #[cfg(feature = "tracing")]
        let _enter = tracing::debug_span!("lis_cost", layers = self.problem.num_layers()).entered();

        let mut frontier = self.problem.init_frontier();
        self.problem
            .summarize_block(0, self.problem.num_layers(), &mut frontier);
        self.problem.extract_cost(&frontier)
    }

    /// Run the forward pass and return the per-block checkpoints.
    ///
    /// Each checkpoint stores the frontier at the start of its block.
    pub fn checkpoints(&self) -> Vec<BlockSummary<P::Frontier>> {
        self.build_checkpoints().blocks
    }

    /// Phase I: forward pass over `[0, T)` in blocks of `block_size` layers.
    fn build_checkpoints(&self) -> BuildArtifacts<P::Frontier> {
        let t = self.problem.num_layers();
        let b = self.block_size;
        let num_blocks = if t == 0 { 0 } else { t.div_ceil(b) };

        let mut blocks = Vec::with_capacity(num_blocks);
        let mut frontier = self.problem.init_frontier();

        for k in 0..num_blocks {
            let start = k * b;
            let end = ((k + 1) * b).min(t);
            #[cfg(feature = "tracing")]
            let _enter = tracing::trace_span!("summarize_block", block = k, start, end).entered();
            blocks.push(BlockSummary {
                start,
                end,
                summary: frontier.clone(),
            });
            self.problem.summarize_block(start, end, &mut frontier);
        }

        BuildArtifacts {
            blocks,
            frontier_t: frontier,
        }
    }
}

impl<P: Reconstruct> LisEngine<P> {
    /// Run the forward pass and the reconstruction.
    ///
    /// Returns `(optimal_cost, witness_states)` with the states in ascending
    /// layer order. The result does not depend on the block size.
    ///
    /// # Panics
    /// Panics if the [`Reconstruct`] implementation hands back boundaries
    /// that are inconsistent with its own frontiers.
    pub fn run(&self) -> (P::Cost, Vec<P::State>) {
        #[cfg(feature = "tracing")]
        let _run = tracing::debug_span!(
            "lis_run",
            layers = self.problem.num_layers(),
            block_size = self.block_size
        )
        .entered();

        let BuildArtifacts { blocks, frontier_t } = {
            #[cfg(feature = "tracing")]
            let _enter = tracing::debug_span!("build_checkpoints").entered();
            self.build_checkpoints()
        };

        let cost = self.problem.extract_cost(&frontier_t);
        let mut beta = self.problem.terminal_boundary(&frontier_t);
        drop(frontier_t);

        #[cfg(feature = "tracing")]
        let _enter = tracing::debug_span!("reconstruct", blocks = blocks.len()).entered();

        // Segments come out right to left.
        let mut segments = Vec::with_capacity(blocks.len());
        for block in blocks.iter().rev() {
            #[cfg(feature = "tracing")]
            let _block = tracing::trace_span!(
                "reconstruct_block",
                start = block.start,
                end = block.end
            )
            .entered();
            let (states, beta_a) =
                self.problem
                    .reconstruct_block(block.start, block.end, &block.summary, &beta);
            segments.push(states);
            beta = beta_a;
        }

        let path = segments.into_iter().rev().flatten().collect();
        (cost, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts layers; the witness is every layer index.
    struct Counter {
        t: usize,
    }

    impl LayeredDp for Counter {
        type Frontier = usize;
        type Cost = usize;

        fn num_layers(&self) -> usize {
            self.t
        }
        fn init_frontier(&self) -> usize {
            0
        }
        fn forward_step(&self, _layer: usize, f: &mut usize) {
            *f += 1;
        }
        fn extract_cost(&self, f: &usize) -> usize {
            *f
        }
    }

    impl Reconstruct for Counter {
        type State = usize;
        type Boundary = usize;

        fn terminal_boundary(&self, f: &usize) -> usize {
            *f
        }
        fn reconstruct_block(
            &self,
            a: usize,
            b: usize,
            frontier_a: &usize,
            beta_b: &usize,
        ) -> (Vec<usize>, usize) {
            assert_eq!(*frontier_a, a, "checkpoint must hold the frontier at a");
            assert_eq!(*beta_b, b);
            ((a..b).collect(), a)
        }
    }

    #[test]
    fn checkpoints_cover_all_layers() {
        let engine = LisEngine::with_block_size(Counter { t: 7 }, 3);
        let blocks = engine.checkpoints();
        let spans: Vec<_> = blocks.iter().map(|b| (b.start, b.end, b.summary)).collect();
        assert_eq!(spans, vec![(0, 3, 0), (3, 6, 3), (6, 7, 6)]);
    }

    #[test]
    fn run_concatenates_blocks_in_order() {
        for b in 1..=9 {
            let engine = LisEngine::with_block_size(Counter { t: 8 }, b);
            let (cost, path) = engine.run();
            assert_eq!(cost, 8);
            assert_eq!(path, (0..8).collect::<Vec<_>>(), "block size {b}");
        }
    }

    #[test]
    fn zero_layers() {
        let engine = LisEngine::new(Counter { t: 0 });
        assert_eq!(engine.block_size(), 1);
        assert!(engine.checkpoints().is_empty());
        assert_eq!(engine.run(), (0, vec![]));
        assert_eq!(engine.cost(), 0);
    }

    #[test]
    #[should_panic]
    fn with_block_size_panics_on_zero() {
        let _ = LisEngine::with_block_size(Counter { t: 2 }, 0);
    }
}
