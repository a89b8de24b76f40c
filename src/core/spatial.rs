use nalgebra::{DMatrix, Vector3};

use crate::core::domain::Configuration;
use crate::core::error::LjError;

/// The dense N×N×3 tensor of pairwise differences `position(i) - position(j)`.
///
/// Stored row-major in a flat buffer, so access is O(1) via `i * N + j`.
#[derive(Debug, Clone)]
pub struct Displacements {
    n: usize,
    data: Vec<Vector3<f64>>,
}

impl Displacements {
    /// Number of particles N.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> &Vector3<f64> {
        &self.data[i * self.n + j]
    }

    /// Euclidean norm of every displacement. The diagonal is exactly zero.
    pub fn norms(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.n, self.n, |i, j| self.get(i, j).norm())
    }
}

/// Broadcasts every point against every other point.
pub fn displacements(config: &Configuration) -> Displacements {
    let n = config.len();
    let mut data = Vec::with_capacity(n * n);

    for p_i in &config.positions {
        for p_j in &config.positions {
            data.push(p_i - p_j);
        }
    }

    Displacements { n, data }
}

/// The full, unmasked N×N matrix of inter-particle distances.
///
/// The diagonal is the true zero. Consumers that take reciprocals must mask
/// it on their own copy.
pub fn distance_matrix(config: &Configuration) -> DMatrix<f64> {
    displacements(config).norms()
}

/// Rejects configurations on which the LJ potential is undefined.
///
/// Checks that every coordinate is finite, then that no two particles share a
/// position. Only strict evaluators call this; the plain kernels accept any
/// input and let NaN/Inf propagate.
pub fn validate(config: &Configuration) -> Result<(), LjError> {
    for (particle, p) in config.positions.iter().enumerate() {
        if p.coords.iter().any(|c| !c.is_finite()) {
            log::warn!("Rejecting configuration: particle {} is not finite", particle);
            return Err(LjError::NonFinite { particle });
        }
    }

    let n = config.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if config.positions[i] == config.positions[j] {
                log::warn!("Rejecting configuration: particles {} and {} coincide", i, j);
                return Err(LjError::Coincident { i, j });
            }
        }
    }
    Ok(())
}
