//! Externally supplied point batches through the chain function.
//!
//! A quasi-Monte-Carlo driver generates its own design (a low-discrepancy
//! point set mapped into the input marginals) and feeds it through the chain
//! function like any other batch; the chain must evaluate it pointwise with
//! no dependency on its own aggregated distribution.

use moirai_chain::{ChainError, MarkovChain};
use moirai_distr::{InputDistribution, JointDistribution, Marginal};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn pqr_step(state: &[f64], input: &[f64]) -> Vec<f64> {
    vec![state[0] + input[0] * input[1] + input[2]]
}

fn pqr_law() -> JointDistribution {
    JointDistribution::new(vec![
        Marginal::standard_normal(),
        Marginal::standard_normal(),
        Marginal::weibull(1.0, 1.0).unwrap(),
    ])
    .unwrap()
}

/// A deterministic stand-in for an externally generated design: a regular
/// lattice over a bounded box in input space.
fn lattice(points: usize, dimension: usize) -> Vec<Vec<f64>> {
    (0..points)
        .map(|i| {
            (0..dimension)
                .map(|j| {
                    let u = (i * dimension + j) as f64 / (points * dimension) as f64;
                    2.0 * u - 1.0
                })
                .collect()
        })
        .collect()
}

#[test]
fn batch_agrees_with_pointwise_evaluation() {
    let chain = MarkovChain::new(pqr_step, pqr_law(), 4, vec![0.0]).unwrap();
    let vector = chain.output_random_vector();
    let points = lattice(10, vector.dimension());

    let batch = vector.evaluate_batch(&points).unwrap();
    assert_eq!(batch.len(), points.len());
    for (point, state) in points.iter().zip(&batch) {
        assert_eq!(state, &chain.function().evaluate(point).unwrap());
    }
}

#[test]
fn batch_accepts_points_not_drawn_from_the_aggregated_law() {
    // Negative third components are impossible under Weibull marginals;
    // the function path must evaluate them anyway.
    let chain = MarkovChain::new(pqr_step, pqr_law(), 1, vec![0.0]).unwrap();
    let batch = chain
        .function()
        .evaluate_batch(&[vec![1.0, 1.0, -5.0]])
        .unwrap();
    assert_eq!(batch[0], vec![1.0 * 1.0 - 5.0]);
}

#[test]
fn wrong_column_count_is_rejected_per_row() {
    let chain = MarkovChain::new(pqr_step, pqr_law(), 4, vec![0.0]).unwrap();
    let mut points = lattice(4, 12);
    points[2].pop();

    let result = chain.function().evaluate_batch(&points);
    assert!(matches!(
        result,
        Err(ChainError::BatchRowDimensionMismatch {
            row: 2,
            expected: 12,
            got: 11
        })
    ));
}

#[test]
fn randomized_design_matches_monte_carlo_on_the_same_points() {
    // Draw a design from the aggregated law by hand, then check the batch
    // path reproduces realization-by-hand on exactly those points.
    let chain = MarkovChain::new(pqr_step, pqr_law(), 4, vec![0.0]).unwrap();
    let aggregated = chain.aggregated_distribution();

    let mut rng = StdRng::seed_from_u64(9);
    let design: Vec<Vec<f64>> = (0..32).map(|_| aggregated.draw(&mut rng)).collect();

    let batch = chain.function().evaluate_batch(&design).unwrap();
    for (point, state) in design.iter().zip(&batch) {
        assert_eq!(state, &chain.function().evaluate(point).unwrap());
    }
}

#[test]
fn uniform_unit_cube_design_evaluates_cleanly() {
    // The shape a low-discrepancy generator hands over before marginal
    // mapping: points in [0, 1)^dimension.
    let chain = MarkovChain::new(pqr_step, pqr_law(), 2, vec![0.0]).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let cube: Vec<Vec<f64>> = (0..16)
        .map(|_| (0..6).map(|_| rng.random::<f64>()).collect())
        .collect();

    let batch = chain.function().evaluate_batch(&cube).unwrap();
    assert_eq!(batch.len(), 16);
    for state in &batch {
        assert_eq!(state.len(), 1);
        assert!(state[0].is_finite());
    }
}
