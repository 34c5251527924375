//! Core trait definitions for layered dynamic programs.
//!
//! To run a DP on [`LisEngine`](crate::engine::LisEngine), implement
//! [`LayeredDp`] for a struct that borrows the instance data, and
//! [`Reconstruct`] if you also want an explicit witness back.
//!
//! The model:
//! - Layers `0..=T`; layer `i` is the state after consuming `i` input items.
//! - A frontier is the compact DP state at one layer.
//! - `forward_step(i, f)` advances `f` from layer `i` to layer `i + 1` in place.
//! - Boundaries carry what the witness still needs from the layers to the
//!   left of a block, so blocks can be reconstructed right to left.

/// A dynamic program over a fixed number of layers with an in-place frontier.
pub trait LayeredDp {
    /// DP state at one layer (e.g. a table row, a tail array).
    type Frontier: Clone;

    /// Objective value extracted from the final frontier.
    type Cost: Copy + Ord;

    /// Number of steps `T`. The final frontier lives at layer `T`.
    fn num_layers(&self) -> usize;

    /// Frontier at layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// Advance `frontier` from layer `layer` to `layer + 1`.
    ///
    /// Must only depend on `frontier` and fixed problem data.
    fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier);

    /// Advance `frontier` across the block `[a, b)`.
    fn summarize_block(&self, a: usize, b: usize, frontier: &mut Self::Frontier) {
        for layer in a..b {
            self.forward_step(layer, frontier);
        }
    }

    /// Objective value at layer `T`.
    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost;
}

/// Right-to-left witness reconstruction on top of a [`LayeredDp`].
pub trait Reconstruct: LayeredDp {
    /// One element of the reconstructed witness, usually a layer index.
    type State: Clone;

    /// Constraint handed from a block to its left neighbour.
    type Boundary: Clone;

    /// Boundary at layer `T`, derived from the final frontier.
    fn terminal_boundary(&self, frontier_t: &Self::Frontier) -> Self::Boundary;

    /// Reconstruct the witness states inside `[a, b)`.
    ///
    /// `frontier_a` is the frontier at layer `a` and `beta_b` the boundary
    /// coming from the right. Returns the chosen states in ascending order
    /// together with the boundary at layer `a`.
    fn reconstruct_block(
        &self,
        a: usize,
        b: usize,
        frontier_a: &Self::Frontier,
        beta_b: &Self::Boundary,
    ) -> (Vec<Self::State>, Self::Boundary);
}
