//! Board generation: where the car stands for one round.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{CAR_COUNT, DOOR_COUNT};
use crate::door::{Door, Prize};
use crate::error::GameError;
use crate::source::{ChoiceSource, choose};

/// Arrangement of one car and two goats behind the three doors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Prize; DOOR_COUNT]", into = "[Prize; DOOR_COUNT]")]
pub struct Board {
    slots: [Prize; DOOR_COUNT],
}

impl Board {
    /// Place the car behind `door`; the other two slots hold goats.
    #[must_use]
    pub fn with_car_behind(door: Door) -> Self {
        let mut slots = [Prize::Goat; DOOR_COUNT];
        slots[door.index()] = Prize::Car;
        Self { slots }
    }

    /// Build a board from an explicit slot layout.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoard`] unless exactly one slot holds the car.
    pub fn from_slots(slots: [Prize; DOOR_COUNT]) -> Result<Self, GameError> {
        let cars = slots.iter().filter(|prize| prize.is_car()).count();
        if cars != CAR_COUNT {
            return Err(GameError::InvalidBoard { cars });
        }
        Ok(Self { slots })
    }

    #[must_use]
    pub const fn slots(&self) -> [Prize; DOOR_COUNT] {
        self.slots
    }

    #[must_use]
    pub const fn prize_at(&self, door: Door) -> Prize {
        self.slots[door.index()]
    }

    /// Door hiding the car.
    ///
    /// # Panics
    ///
    /// Panics if the board lost its car, which construction rules out.
    #[must_use]
    pub fn car_door(&self) -> Door {
        Door::ALL
            .into_iter()
            .find(|door| self.prize_at(*door).is_car())
            .expect("board always holds exactly one car")
    }
}

impl TryFrom<[Prize; DOOR_COUNT]> for Board {
    type Error = GameError;

    fn try_from(slots: [Prize; DOOR_COUNT]) -> Result<Self, Self::Error> {
        Self::from_slots(slots)
    }
}

impl From<Board> for [Prize; DOOR_COUNT] {
    fn from(board: Board) -> Self {
        board.slots
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.slots;
        write!(f, "[{a}, {b}, {c}]")
    }
}

/// Produce a fresh board with the car uniformly placed behind one of the doors.
pub fn create_game<S: ChoiceSource + ?Sized>(source: &mut S) -> Board {
    Board::with_car_behind(choose(source, &Door::ALL))
}
