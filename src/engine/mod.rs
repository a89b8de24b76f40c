pub mod batch;
pub mod evaluator;
pub mod flatten;
pub mod lennard_jones;
