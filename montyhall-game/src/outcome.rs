//! Win/lose evaluation of a final pick.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::door::Door;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub const ALL: [Self; 2] = [Self::Win, Self::Lose];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "WIN",
            Self::Lose => "LOSE",
        }
    }

    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WIN" => Ok(Self::Win),
            "LOSE" => Ok(Self::Lose),
            _ => Err(()),
        }
    }
}

/// [`Outcome::Win`] when the car stands behind `final_pick`.
#[must_use]
pub const fn determine_winner(final_pick: Door, board: &Board) -> Outcome {
    if board.prize_at(final_pick).is_car() {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
