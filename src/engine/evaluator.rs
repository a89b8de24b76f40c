use anyhow::Result;

use crate::core::domain::{Configuration, LjParams};
use crate::core::spatial;
use crate::engine::lennard_jones::{Gradient, LjGradient, LjPotential};

/// The result of a physical evaluation.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    /// The potential energy (kJ/mol for the argon defaults).
    pub energy: f64,
    /// Per-particle gradient of the energy.
    pub gradient: Gradient,
    /// Euclidean norm of the flattened gradient - useful for checking convergence quality.
    pub gradient_norm: f64,
}

/// A generic interface for physics engines.
/// Implementations must be Thread-Safe (Sync).
pub trait Evaluator: Send + Sync {
    /// Computes energy and gradient of a configuration without modifying it.
    fn evaluate(&self, config: &Configuration) -> Result<EvaluationResult>;

    /// Returns the name of the engine.
    fn name(&self) -> &str;
}

/// Energy and gradient from one shared parameter set.
#[derive(Debug, Clone, Default)]
pub struct LennardJones {
    potential: LjPotential,
    gradient: LjGradient,
    strict: bool,
}

impl LennardJones {
    pub fn new(params: LjParams) -> Self {
        Self {
            potential: LjPotential::new(params),
            gradient: LjGradient::new(params),
            strict: false,
        }
    }

    /// Reject non-finite or overlapping configurations instead of returning
    /// NaN/Inf.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn params(&self) -> &LjParams {
        self.potential.params()
    }
}

impl Evaluator for LennardJones {
    fn name(&self) -> &str {
        if self.strict {
            "Lennard-Jones (strict)"
        } else {
            "Lennard-Jones"
        }
    }

    fn evaluate(&self, config: &Configuration) -> Result<EvaluationResult> {
        if self.strict {
            spatial::validate(config)?;
        }

        let energy = self.potential.evaluate(config);
        let gradient = self.gradient.evaluate(config);
        let gradient_norm = gradient.iter().map(|g| g.norm_squared()).sum::<f64>().sqrt();

        if !energy.is_finite() {
            log::debug!("{}: non-finite energy for {} particles", self.name(), config.len());
        }

        Ok(EvaluationResult {
            energy,
            gradient,
            gradient_norm,
        })
    }
}
