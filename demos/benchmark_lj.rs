use anyhow::{anyhow, Result};
use lj_cluster::core::domain::{Configuration, LjParams};
use lj_cluster::engine::batch::evaluate_batch;
use lj_cluster::engine::evaluator::{Evaluator, LennardJones};
use lj_cluster::engine::flatten::{flat_gradient, flat_potential};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

fn main() -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let n_atoms = 100;
    let n_configs = 64;

    let configs = (0..n_configs)
        .map(|_| Configuration::new_random(n_atoms, 20.0, 3.0, &mut rng))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| anyhow!("Failed to pack {} atoms", n_atoms))?;

    let evaluator = LennardJones::new(LjParams::default());

    // Single configuration, flat interface
    let x = configs[0].to_flat();
    let start = Instant::now();
    let energy = flat_potential(&x)?;
    let grad = flat_gradient(&x)?;
    println!(
        "{} atoms: V = {:.6}, |grad| = {:.6} ({:?})",
        n_atoms,
        energy,
        grad.iter().map(|g| g * g).sum::<f64>().sqrt(),
        start.elapsed()
    );

    // Independent configurations in parallel
    let start = Instant::now();
    let results = evaluate_batch(&evaluator, &configs);
    let duration = start.elapsed();

    let best = results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .map(|r| r.energy)
        .fold(f64::MAX, f64::min);

    println!(
        "{}: {} configurations in {:?}, lowest V = {:.6}",
        evaluator.name(),
        n_configs,
        duration,
        best
    );
    Ok(())
}
