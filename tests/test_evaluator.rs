use lj_cluster::core::domain::{Configuration, LjParams};
use lj_cluster::core::error::LjError;
use lj_cluster::engine::batch::evaluate_batch;
use lj_cluster::engine::evaluator::{Evaluator, LennardJones};
use lj_cluster::engine::lennard_jones::{LjGradient, LjPotential};
use std::sync::Arc;

mod common;

#[test]
fn test_combined_matches_separate_evaluators() {
    let params = LjParams::new(3.0, 1.2).unwrap();
    let lj = LennardJones::new(params);
    let c = common::random_cluster(10, 4);

    let res = lj.evaluate(&c).unwrap();
    assert_eq!(res.energy, LjPotential::new(params).evaluate(&c));
    assert_eq!(res.gradient, LjGradient::new(params).evaluate(&c));

    let norm = res.gradient.iter().map(|g| g.norm_squared()).sum::<f64>().sqrt();
    assert_eq!(res.gradient_norm, norm);
    assert_eq!(lj.params(), &params);
}

#[test]
fn test_permissive_accepts_degenerate_input() {
    let lj = LennardJones::default();
    let c = Configuration::from_rows(&[[0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);

    let res = lj.evaluate(&c).expect("permissive evaluator should not fail");
    assert!(res.energy.is_nan());
}

#[test]
fn test_strict_rejects_degenerate_input() {
    let lj = LennardJones::default().strict();
    assert_eq!(lj.name(), "Lennard-Jones (strict)");

    let coincident = Configuration::from_rows(&[[0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
    let err = lj.evaluate(&coincident).unwrap_err();
    assert!(matches!(err.downcast_ref::<LjError>(), Some(LjError::Coincident { i: 0, j: 1 })));

    let nan = Configuration::from_rows(&[[f64::NAN, 0.0, 0.0]]);
    assert!(lj.evaluate(&nan).is_err());

    let ok = common::random_cluster(5, 2);
    assert!(lj.evaluate(&ok).is_ok());
}

#[test]
fn test_batch_preserves_order() {
    let lj: Arc<dyn Evaluator> = Arc::new(LennardJones::default().strict());
    let mut configs: Vec<Configuration> =
        (0..8).map(|seed| common::random_cluster(7, seed)).collect();
    configs.insert(3, Configuration::from_rows(&[[1.0, 1.0, 1.0], [1.0, 1.0, 1.0]]));

    let results = evaluate_batch(lj.as_ref(), &configs);
    assert_eq!(results.len(), configs.len());

    for (k, (config, res)) in configs.iter().zip(results.iter()).enumerate() {
        if k == 3 {
            assert!(res.is_err());
        } else {
            let expected = lj.evaluate(config).unwrap();
            assert_eq!(res.as_ref().unwrap().energy, expected.energy);
        }
    }
}
