pub mod acceptance;
pub mod reports;
pub mod runner;
pub mod seeds;

pub use acceptance::validate_convergence;
pub use runner::{BatchRunner, SeedRun};
pub use seeds::resolve_seed_inputs;
