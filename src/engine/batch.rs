use anyhow::Result;
use rayon::prelude::*;

use crate::core::domain::Configuration;
use crate::engine::evaluator::{EvaluationResult, Evaluator};

/// Evaluates independent configurations in parallel.
///
/// Results keep the order of `configs`. Each configuration is still evaluated
/// on a single thread; only the batch is spread over the rayon pool.
pub fn evaluate_batch(
    evaluator: &dyn Evaluator,
    configs: &[Configuration],
) -> Vec<Result<EvaluationResult>> {
    let results: Vec<_> = configs
        .par_iter()
        .map(|config| evaluator.evaluate(config))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    log::debug!(
        "{}: evaluated batch of {} ({} rejected)",
        evaluator.name(),
        configs.len(),
        failed
    );
    results
}
