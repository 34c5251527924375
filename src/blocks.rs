//! Block checkpoints kept by the engine between the forward pass and
//! reconstruction.
//!
//! Each `BlockSummary` covers an interval [start, end) of layers and stores
//! whatever the engine needs to replay that interval, typically the frontier
//! observed at `start`.

/// Checkpoint for a contiguous interval of layers [start, end).
#[derive(Debug, Clone)]
pub struct BlockSummary<S> {
    /// Inclusive start layer.
    pub start: usize,
    /// Exclusive end layer.
    pub end: usize,
    /// Data saved for the block, e.g. the frontier at `start`.
    pub summary: S,
}

impl<S> BlockSummary<S> {
    /// Number of layers in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
