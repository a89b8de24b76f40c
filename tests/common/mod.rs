#![allow(dead_code)]

use lj_cluster::core::domain::Configuration;
use nalgebra::Vector3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A well-separated random argon cluster (no pair closer than 3 Å).
pub fn random_cluster(n: usize, seed: u64) -> Configuration {
    let mut rng = seeded_rng(seed);
    Configuration::new_random(n, 8.0, 3.0, &mut rng).expect("Failed to pack test cluster")
}

pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    let scale = 1.0_f64.max(expected.abs());
    assert!(
        (actual - expected).abs() <= tol * scale,
        "expected {} but got {} (tol {})",
        expected,
        actual,
        tol
    );
}

pub fn assert_vec_close(actual: &Vector3<f64>, expected: &Vector3<f64>, tol: f64) {
    for k in 0..3 {
        assert_close(actual[k], expected[k], tol);
    }
}
