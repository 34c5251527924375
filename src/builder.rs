use crate::traits::LayeredDp;
use crate::utils::default_block_size;
use crate::LisEngine;

pub struct EngineBuilder<P: LayeredDp> {
    problem: P,
    block_size: Option<usize>,
}

impl<P: LayeredDp> EngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            block_size: None,
        }
    }

    /// Override the checkpoint spacing. Zero is clamped to 1.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size.max(1));
        self
    }

    pub fn build(self) -> LisEngine<P> {
        let b = self
            .block_size
            .unwrap_or_else(|| default_block_size(self.problem.num_layers()));
        LisEngine::with_block_size(self.problem, b)
    }
}
