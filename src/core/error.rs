use thiserror::Error;

/// Failures that can occur outside of the numeric kernels.
///
/// The potential and gradient themselves never fail: degenerate geometries
/// produce NaN/Inf. These variants cover reshaping, strict validation and
/// parameter parsing.
#[derive(Debug, Error)]
pub enum LjError {
    #[error("flat coordinate vector has length {len}, which is not a multiple of 3")]
    FlatLength { len: usize },

    #[error("particle {particle} has a non-finite coordinate")]
    NonFinite { particle: usize },

    #[error("particles {i} and {j} are coincident")]
    Coincident { i: usize, j: usize },

    #[error("parameter `{name}` must be positive and finite, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("failed to parse parameters: {0}")]
    Config(#[from] serde_json::Error),
}
