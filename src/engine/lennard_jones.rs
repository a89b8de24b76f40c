use nalgebra::{DMatrix, Vector3};

use crate::core::domain::{Configuration, LjParams};
use crate::core::spatial;

/// One 3-vector per particle: d(V)/d(x_i, y_i, z_i).
pub type Gradient = Vec<Vector3<f64>>;

/// Total Lennard-Jones energy of a configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct LjPotential {
    params: LjParams,
}

impl LjPotential {
    pub fn new(params: LjParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LjParams {
        &self.params
    }

    /// Sums `4ε[(σ/r)^12 - (σ/r)^6]` over every unordered pair.
    ///
    /// Coincident particles give NaN rather than an error.
    pub fn evaluate(&self, config: &Configuration) -> f64 {
        let LjParams { sigma, epsilon } = self.params;

        let mut dist = spatial::distance_matrix(config);
        // Placeholder so the self-pairs don't divide by zero.
        dist.fill_diagonal(1.0);

        let mut pot = dist.map(|r| {
            let f = sigma / r;
            4.0 * epsilon * (f.powf(12.0) - f.powf(6.0))
        });
        // No self-interaction.
        pot.fill_diagonal(0.0);

        // Symmetric matrix counts each pair twice.
        let energy = pot.sum() / 2.0;
        log::trace!("LJ potential over {} particles: {}", config.len(), energy);
        energy
    }
}

/// Analytic gradient of [`LjPotential`] with respect to every coordinate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LjGradient {
    params: LjParams,
}

impl LjGradient {
    pub fn new(params: LjParams) -> Self {
        Self { params }
    }

    /// Chain rule from the N×N matrix of radial derivatives to the N×3
    /// Cartesian gradient.
    ///
    /// The result points uphill; negate it for forces. Self-terms vanish
    /// because `d(i, i)` is the zero vector, whatever placeholder `r(i, i)`
    /// holds.
    pub fn evaluate(&self, config: &Configuration) -> Gradient {
        let LjParams { sigma, epsilon } = self.params;
        let n = config.len();

        let d = spatial::displacements(config);
        let mut r = d.norms();
        r.fill_diagonal(1.0);

        // pow for every exponent, never repeated multiplication.
        let sigma6 = sigma.powf(6.0);
        let sigma12 = sigma.powf(12.0);
        let t: DMatrix<f64> =
            r.map(|r| 6.0 * sigma6 * r.powf(-7.0) - 12.0 * sigma12 * r.powf(-13.0));

        let mut grad = vec![Vector3::zeros(); n];
        for (i, g) in grad.iter_mut().enumerate() {
            let mut acc = Vector3::zeros();
            for j in 0..n {
                let u = d.get(i, j) / r[(i, j)];
                acc += u * t[(i, j)];
            }
            *g = acc * (4.0 * epsilon);
        }

        log::trace!("LJ gradient over {} particles", n);
        grad
    }
}

/// LJ energy of `config` with the given parameters.
pub fn potential(config: &Configuration, params: &LjParams) -> f64 {
    LjPotential::new(*params).evaluate(config)
}

/// LJ gradient of `config` with the given parameters.
pub fn gradient(config: &Configuration, params: &LjParams) -> Gradient {
    LjGradient::new(*params).evaluate(config)
}
