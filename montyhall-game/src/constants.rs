//! Fixed parameters of the three-door game and the batch runner.
//!
//! The puzzle variant is not configurable: one car, two goats, three doors.

// Board shape --------------------------------------------------------------
pub const DOOR_COUNT: usize = 3;
pub const CAR_COUNT: usize = 1;

// Batch runner -------------------------------------------------------------
pub const DEFAULT_ROUNDS: usize = 100;
pub(crate) const REPORT_DECIMALS: usize = 2;

// Expected long-run win proportions ---------------------------------------
pub const EXPECTED_STAY_WIN_RATE: f64 = 1.0 / 3.0;
pub const EXPECTED_SWITCH_WIN_RATE: f64 = 2.0 / 3.0;
pub const DEFAULT_CONVERGENCE_TOLERANCE: f64 = 0.03;
pub const ACCEPTANCE_MIN_ROUNDS: usize = 10_000;
