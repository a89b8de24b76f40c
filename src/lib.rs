//! Lennard-Jones energy and analytic gradient for small particle clusters,
//! with flat-vector adapters for generic optimizers.

pub mod analysis;
pub mod core;
pub mod engine;

pub use crate::core::domain::{Configuration, LjParams, ARGON_EPSILON, ARGON_SIGMA};
pub use crate::core::error::LjError;
pub use crate::engine::flatten::{
    flat_gradient, flat_potential, flatten_function, flatten_gradient,
};
pub use crate::engine::lennard_jones::{gradient, potential, Gradient, LjGradient, LjPotential};
