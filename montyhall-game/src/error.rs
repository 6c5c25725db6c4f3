use thiserror::Error;

/// Errors raised when simulation inputs violate the game's invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("door number {number} is outside 1..=3")]
    InvalidDoor { number: usize },
    #[error("board must hold exactly one car (found {cars})")]
    InvalidBoard { cars: usize },
    #[error("opened door {door} cannot also be the contestant's pick")]
    RevealMatchesPick { door: usize },
    #[error("opened door {door} hides the car")]
    RevealedCar { door: usize },
    #[error("batch must run at least one round (got {rounds})")]
    InvalidRoundCount { rounds: usize },
}
