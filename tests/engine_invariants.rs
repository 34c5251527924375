use lis_dp::{
    builder::EngineBuilder,
    problems::patience::PatienceProblem,
    strategies::{quadratic_lis, quadratic_witness},
    utils::{is_valid_witness, witness_values},
    LayeredDp, LisEngine, Reconstruct,
};
use proptest::prelude::*;

#[test]
fn zero_layers_no_op() {
    struct EmptyProblem;
    impl LayeredDp for EmptyProblem {
        type Frontier = ();
        type Cost = i32;
        fn num_layers(&self) -> usize {
            0
        }
        fn init_frontier(&self) -> Self::Frontier {}
        fn forward_step(&self, _layer: usize, _frontier: &mut Self::Frontier) {
            unreachable!("no layers to step through");
        }
        fn extract_cost(&self, _frontier_t: &Self::Frontier) -> Self::Cost {
            0
        }
    }
    impl Reconstruct for EmptyProblem {
        type State = usize;
        type Boundary = ();
        fn terminal_boundary(&self, _frontier_t: &Self::Frontier) -> Self::Boundary {}
        fn reconstruct_block(
            &self,
            _a: usize,
            _b: usize,
            _frontier_a: &Self::Frontier,
            _beta_b: &Self::Boundary,
        ) -> (Vec<Self::State>, Self::Boundary) {
            unreachable!("no blocks to reconstruct");
        }
    }
    let engine = LisEngine::new(EmptyProblem);
    let (cost, path) = engine.run();
    assert_eq!(cost, 0);
    assert!(path.is_empty());
}

#[test]
fn checkpoints_hold_prefix_tails() {
    let seq = [10, 9, 2, 5, 3, 7, 101, 18];
    let engine = LisEngine::with_block_size(PatienceProblem::new(&seq), 3);
    let blocks = engine.checkpoints();
    let starts: Vec<_> = blocks.iter().map(|b| (b.start, b.end)).collect();
    assert_eq!(starts, vec![(0, 3), (3, 6), (6, 8)]);
    assert!(blocks[0].summary.tails.is_empty());
    // After 10, 9, 2 the only tail is 2.
    assert_eq!(blocks[1].summary.tails, vec![2]);
    // After 10, 9, 2, 5, 3, 7.
    assert_eq!(blocks[2].summary.tails, vec![2, 3, 7]);
}

#[test]
fn builder_block_size_is_respected() {
    let seq: Vec<i64> = (0..100).rev().collect();
    let engine = EngineBuilder::new(PatienceProblem::new(&seq))
        .with_block_size(7)
        .build();
    assert_eq!(engine.block_size(), 7);
    assert_eq!(engine.checkpoints().len(), 15);
    let (cost, witness) = engine.run();
    assert_eq!(cost, 1);
    // The last element is the rightmost candidate of length 1.
    assert_eq!(witness, vec![99]);
}

proptest! {
    #[test]
    fn witness_is_valid_and_optimal(seq in prop::collection::vec(-30i64..30, 0..150)) {
        let (cost, witness) = LisEngine::new(PatienceProblem::new(&seq)).run();
        prop_assert_eq!(cost, quadratic_lis(&seq));
        prop_assert_eq!(witness.len(), cost);
        prop_assert!(is_valid_witness(&seq, &witness));
    }

    #[test]
    fn block_size_does_not_change_result(
        seq in prop::collection::vec(any::<i64>(), 0..80),
        block in 1usize..90,
    ) {
        let reference = LisEngine::with_block_size(PatienceProblem::new(&seq), 1).run();
        let got = LisEngine::with_block_size(PatienceProblem::new(&seq), block).run();
        prop_assert_eq!(got, reference);
    }

    #[test]
    fn cost_matches_run(seq in prop::collection::vec(-100i64..100, 0..120)) {
        let engine = LisEngine::new(PatienceProblem::new(&seq));
        prop_assert_eq!(engine.cost(), engine.run().0);
    }

    #[test]
    fn witnesses_from_both_methods_have_equal_length(
        seq in prop::collection::vec(-20i64..20, 0..60)
    ) {
        let engine_w = LisEngine::new(PatienceProblem::new(&seq)).run().1;
        let table_w = quadratic_witness(&seq);
        prop_assert_eq!(engine_w.len(), table_w.len());
        prop_assert!(is_valid_witness(&seq, &table_w));
        let values = witness_values(&seq, &engine_w);
        prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
    }
}
