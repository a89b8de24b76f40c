//! Adapters between N×3 configurations and flat length-3N vectors.
//!
//! Generic optimizers work on a single coordinate vector. These wrappers only
//! reshape, so the wrapped function's output comes through bit for bit.

use nalgebra::Vector3;

use crate::core::domain::Configuration;
use crate::core::error::LjError;
use crate::engine::lennard_jones::{LjGradient, LjPotential};

/// Lifts a scalar function of a configuration to a function of a flat vector.
pub fn flatten_function<F>(f: F) -> impl Fn(&[f64]) -> Result<f64, LjError>
where
    F: Fn(&Configuration) -> f64,
{
    move |x: &[f64]| {
        let config = Configuration::from_flat(x)?;
        Ok(f(&config))
    }
}

/// Lifts a per-particle vector function to a flat-in, flat-out function.
pub fn flatten_gradient<G>(g: G) -> impl Fn(&[f64]) -> Result<Vec<f64>, LjError>
where
    G: Fn(&Configuration) -> Vec<Vector3<f64>>,
{
    move |x: &[f64]| {
        let config = Configuration::from_flat(x)?;
        Ok(flatten_vectors(&g(&config)))
    }
}

/// `[v0, v1, ...]` into `[v0.x, v0.y, v0.z, v1.x, ...]`.
pub fn flatten_vectors(vectors: &[Vector3<f64>]) -> Vec<f64> {
    vectors.iter().flat_map(|v| [v.x, v.y, v.z]).collect()
}

/// Argon LJ energy of a flat coordinate vector.
pub fn flat_potential(x: &[f64]) -> Result<f64, LjError> {
    let v = LjPotential::default();
    flatten_function(move |c: &Configuration| v.evaluate(c))(x)
}

/// Argon LJ gradient of a flat coordinate vector, flattened the same way.
pub fn flat_gradient(x: &[f64]) -> Result<Vec<f64>, LjError> {
    let grad_v = LjGradient::default();
    flatten_gradient(move |c: &Configuration| grad_v.evaluate(c))(x)
}
