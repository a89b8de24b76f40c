use nalgebra::{Point3, Vector3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::LjError;

// --- Constants ---

/// Experimental well depth for argon (kJ/mol).
pub const ARGON_EPSILON: f64 = 0.997;
/// Experimental zero-crossing distance for argon (Å).
pub const ARGON_SIGMA: f64 = 3.401;

// --- Parameters ---

/// The two constants of the Lennard-Jones potential.
///
/// Evaluators take their own copy at construction, so changing a `LjParams`
/// value afterwards never affects an evaluator that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LjParams {
    pub sigma: f64,   // Å
    pub epsilon: f64, // kJ/mol
}

impl Default for LjParams {
    fn default() -> Self {
        Self {
            sigma: ARGON_SIGMA,
            epsilon: ARGON_EPSILON,
        }
    }
}

impl LjParams {
    /// Builds a parameter set, rejecting non-positive or non-finite values.
    pub fn new(sigma: f64, epsilon: f64) -> Result<Self, LjError> {
        let params = Self { sigma, epsilon };
        params.check()?;
        Ok(params)
    }

    /// Parses a JSON object such as `{"sigma": 1.0, "epsilon": 1.0}`.
    /// Missing keys fall back to the argon values.
    pub fn from_json(text: &str) -> Result<Self, LjError> {
        let params: Self = serde_json::from_str(text)?;
        params.check()?;
        Ok(params)
    }

    pub fn check(&self) -> Result<(), LjError> {
        check_positive("sigma", self.sigma)?;
        check_positive("epsilon", self.epsilon)
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), LjError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LjError::InvalidParameter { name, value })
    }
}

// --- The Core Entity ---

/// An ordered set of particle positions. Index `i` is always particle `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub positions: Vec<Point3<f64>>,
}

impl Configuration {
    pub fn new(positions: Vec<Point3<f64>>) -> Self {
        Self { positions }
    }

    pub fn from_rows(rows: &[[f64; 3]]) -> Self {
        Self {
            positions: rows.iter().map(|r| Point3::new(r[0], r[1], r[2])).collect(),
        }
    }

    /// Reshapes a flat `[x0, y0, z0, x1, ...]` vector into N points.
    pub fn from_flat(flat: &[f64]) -> Result<Self, LjError> {
        if flat.len() % 3 != 0 {
            return Err(LjError::FlatLength { len: flat.len() });
        }
        let positions = flat
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self { positions })
    }

    /// Inverse of [`Configuration::from_flat`].
    pub fn to_flat(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(3 * self.positions.len());
        for p in &self.positions {
            flat.extend_from_slice(&[p.x, p.y, p.z]);
        }
        flat
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns a copy with every particle shifted by `shift`.
    pub fn translated(&self, shift: &Vector3<f64>) -> Self {
        Self {
            positions: self.positions.iter().map(|p| p + shift).collect(),
        }
    }

    /// Returns a copy where particle `k` of the result is particle `order[k]`
    /// of `self`.
    ///
    /// # Panics
    /// If any index in `order` is out of bounds.
    pub fn permuted(&self, order: &[usize]) -> Self {
        Self {
            positions: order.iter().map(|&k| self.positions[k]).collect(),
        }
    }

    /// Tries to place `n` particles uniformly inside `[-box_size, box_size)^3`
    /// such that no pair is closer than `min_distance`.
    ///
    /// Placement is sequential: each particle gets 100 attempts before the
    /// whole packing is abandoned and `None` is returned.
    pub fn new_random<R: Rng + ?Sized>(
        n: usize,
        box_size: f64,
        min_distance: f64,
        rng: &mut R,
    ) -> Option<Self> {
        let mut positions: Vec<Point3<f64>> = Vec::with_capacity(n);
        let limit_sq = min_distance * min_distance;

        for _ in 0..n {
            let mut placed = false;

            for _ in 0..100 {
                let pos = Point3::new(
                    rng.gen_range(-box_size..box_size),
                    rng.gen_range(-box_size..box_size),
                    rng.gen_range(-box_size..box_size),
                );

                let clash = positions
                    .iter()
                    .any(|existing| (pos - existing).norm_squared() < limit_sq);

                if !clash {
                    positions.push(pos);
                    placed = true;
                    break;
                }
            }
            if !placed {
                return None; // Failed to pack
            }
        }

        Some(Self { positions })
    }
}

impl From<Vec<Point3<f64>>> for Configuration {
    fn from(positions: Vec<Point3<f64>>) -> Self {
        Self { positions }
    }
}
