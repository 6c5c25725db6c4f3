//! Door positions and what stands behind them.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::DOOR_COUNT;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prize {
    Goat,
    Car,
}

impl Prize {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Goat => "goat",
            Self::Car => "car",
        }
    }

    #[must_use]
    pub const fn is_car(self) -> bool {
        matches!(self, Self::Car)
    }
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Prize {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "goat" => Ok(Self::Goat),
            "car" => Ok(Self::Car),
            _ => Err(()),
        }
    }
}

/// A validated door position.
///
/// Doors are numbered `1..=3` at every public boundary (display, serde, CLI)
/// and indexed `0..3` internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Door(u8);

impl Door {
    /// Every door, in positional order.
    pub const ALL: [Self; DOOR_COUNT] = [Self(0), Self(1), Self(2)];

    /// Build a door from its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDoor`] when `number` is outside `1..=3`.
    pub fn from_number(number: usize) -> Result<Self, GameError> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
            .ok_or(GameError::InvalidDoor { number })
    }

    /// 1-based door number.
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 as usize + 1
    }

    /// 0-based slot index into a board.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for Door {
    type Error = GameError;

    fn try_from(number: usize) -> Result<Self, Self::Error> {
        Self::from_number(number)
    }
}

impl From<Door> for usize {
    fn from(door: Door) -> Self {
        door.number()
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Doors of the three-door set not listed in `excluded`, in positional order.
///
/// Both the host reveal and the switch resolution are expressed through this
/// complement: excluding the pick and the car leaves the host's candidates,
/// excluding the pick and the opened door leaves the switch target.
pub fn remaining_doors(excluded: &[Door]) -> impl Iterator<Item = Door> + '_ {
    Door::ALL
        .into_iter()
        .filter(move |door| !excluded.contains(door))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn door_numbers_are_one_based() {
        let numbers: Vec<usize> = Door::ALL.iter().map(|d| d.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(Door::from_number(2).unwrap().index(), 1);
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert_eq!(
            Door::from_number(0),
            Err(GameError::InvalidDoor { number: 0 })
        );
        assert_eq!(
            Door::from_number(4),
            Err(GameError::InvalidDoor { number: 4 })
        );
    }

    #[test]
    fn serde_uses_door_numbers() {
        let door = Door::from_number(3).unwrap();
        assert_eq!(serde_json::to_string(&door).unwrap(), "3");
        let parsed: Door = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, Door::ALL[0]);
        assert!(serde_json::from_str::<Door>("0").is_err());
    }

    #[test]
    fn remaining_doors_complements_exclusions() {
        let [one, two, three] = Door::ALL;
        assert_eq!(remaining_doors(&[one, two]).collect::<Vec<_>>(), vec![three]);
        assert_eq!(remaining_doors(&[two, two]).collect::<Vec<_>>(), vec![one, three]);
        assert_eq!(remaining_doors(&[]).count(), DOOR_COUNT);
    }

    #[test]
    fn prize_labels_roundtrip() {
        assert_eq!(Prize::Car.to_string(), "car");
        assert_eq!("goat".parse::<Prize>(), Ok(Prize::Goat));
        assert!("llama".parse::<Prize>().is_err());
    }
}
