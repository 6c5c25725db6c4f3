//! Stay/switch resolution after the host's reveal.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::door::{Door, remaining_doors};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Keep the original pick.
    Stay,
    /// Move to the door that is neither the pick nor the opened door.
    Switch,
}

impl Strategy {
    pub const ALL: [Self; 2] = [Self::Stay, Self::Switch];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stay => "stay",
            Self::Switch => "switch",
        }
    }

    /// Position of the strategy within [`Strategy::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Stay => 0,
            Self::Switch => 1,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stay" => Ok(Self::Stay),
            "switch" => Ok(Self::Switch),
            _ => Err(()),
        }
    }
}

/// Final pick under `strategy`, given the opened door and the original pick.
///
/// # Errors
///
/// Returns [`GameError::RevealMatchesPick`] when `opened_door` equals `pick`;
/// the host never opens the contestant's door.
pub fn change_door(strategy: Strategy, opened_door: Door, pick: Door) -> Result<Door, GameError> {
    if opened_door == pick {
        return Err(GameError::RevealMatchesPick {
            door: pick.number(),
        });
    }
    match strategy {
        Strategy::Stay => Ok(pick),
        Strategy::Switch => {
            let excluded = [opened_door, pick];
            let mut remaining = remaining_doors(&excluded);
            let target = remaining.next();
            debug_assert!(remaining.next().is_none(), "exactly one door remains");
            target.ok_or(GameError::RevealMatchesPick {
                door: pick.number(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stay_keeps_pick_and_switch_takes_third_door() {
        for pick in Door::ALL {
            for opened in Door::ALL.into_iter().filter(|d| *d != pick) {
                assert_eq!(change_door(Strategy::Stay, opened, pick), Ok(pick));
                let switched = change_door(Strategy::Switch, opened, pick).unwrap();
                assert_ne!(switched, pick);
                assert_ne!(switched, opened);
            }
        }
    }

    #[test]
    fn switch_targets_match_complement() {
        let [one, two, three] = Door::ALL;
        assert_eq!(change_door(Strategy::Switch, two, one), Ok(three));
        assert_eq!(change_door(Strategy::Switch, one, three), Ok(two));
        assert_eq!(change_door(Strategy::Switch, three, two), Ok(one));
    }

    #[test]
    fn rejects_opened_pick() {
        let door = Door::ALL[1];
        assert_eq!(
            change_door(Strategy::Switch, door, door),
            Err(GameError::RevealMatchesPick { door: 2 })
        );
        assert!(change_door(Strategy::Stay, door, door).is_err());
    }

    #[test]
    fn labels_are_lowercase() {
        assert_eq!(Strategy::Switch.to_string(), "switch");
        assert_eq!("stay".parse::<Strategy>(), Ok(Strategy::Stay));
        assert_eq!(serde_json::to_string(&Strategy::Stay).unwrap(), "\"stay\"");
    }
}
