//! One full round: board, pick, reveal, and both strategies resolved together.
use serde::{Deserialize, Serialize};

use crate::board::{Board, create_game};
use crate::contestant::select_door;
use crate::door::Door;
use crate::error::GameError;
use crate::host::open_goat_door;
use crate::outcome::{Outcome, determine_winner};
use crate::source::ChoiceSource;
use crate::strategy::{Strategy, change_door};

/// One row of the outcome table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrategyOutcome {
    pub strategy: Strategy,
    pub outcome: Outcome,
}

/// Paired stay/switch result for a single board and reveal.
///
/// Both records are evaluated against the same board, pick, and opened door,
/// so they are correlated rather than independent trials. Records are stored
/// in [`Strategy::ALL`] order. Deserialising reads only the board, pick, and
/// opened door and re-resolves the records from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RoundSetup")]
pub struct RoundResult {
    board: Board,
    pick: Door,
    opened: Door,
    records: [StrategyOutcome; 2],
}

/// Serialised inputs of a round; any stored records are ignored.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RoundSetup {
    board: Board,
    pick: Door,
    opened: Door,
}

impl TryFrom<RoundSetup> for RoundResult {
    type Error = GameError;

    fn try_from(setup: RoundSetup) -> Result<Self, Self::Error> {
        Self::resolve(setup.board, setup.pick, setup.opened)
    }
}

impl RoundResult {
    /// Resolve both strategies for a fixed board, pick, and opened door.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RevealMatchesPick`] when `opened` is the pick and
    /// [`GameError::RevealedCar`] when `opened` hides the car.
    pub fn resolve(board: Board, pick: Door, opened: Door) -> Result<Self, GameError> {
        if board.prize_at(opened).is_car() {
            return Err(GameError::RevealedCar {
                door: opened.number(),
            });
        }
        let stay = change_door(Strategy::Stay, opened, pick)?;
        let switch = change_door(Strategy::Switch, opened, pick)?;
        Ok(Self {
            board,
            pick,
            opened,
            records: [
                StrategyOutcome {
                    strategy: Strategy::Stay,
                    outcome: determine_winner(stay, &board),
                },
                StrategyOutcome {
                    strategy: Strategy::Switch,
                    outcome: determine_winner(switch, &board),
                },
            ],
        })
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn pick(&self) -> Door {
        self.pick
    }

    #[must_use]
    pub const fn opened(&self) -> Door {
        self.opened
    }

    #[must_use]
    pub const fn records(&self) -> &[StrategyOutcome; 2] {
        &self.records
    }

    #[must_use]
    pub const fn outcome(&self, strategy: Strategy) -> Outcome {
        self.records[strategy.ordinal()].outcome
    }

    /// The one strategy that won this round.
    #[must_use]
    pub const fn winning_strategy(&self) -> Strategy {
        if self.outcome(Strategy::Stay).is_win() {
            Strategy::Stay
        } else {
            Strategy::Switch
        }
    }
}

/// Play one round, drawing the board, pick, and any host choice from `source`.
///
/// # Panics
///
/// Panics only if the host reveal breaks its contract, which cannot happen for
/// boards built by [`create_game`].
pub fn play_game<S: ChoiceSource + ?Sized>(source: &mut S) -> RoundResult {
    let board = create_game(source);
    let pick = select_door(source);
    let opened = open_goat_door(&board, pick, source);
    let round = RoundResult::resolve(board, pick, opened)
        .expect("host reveal never opens the pick or the car");
    log::debug!(
        "round board={} pick={} opened={} stay={} switch={}",
        round.board,
        round.pick,
        round.opened,
        round.outcome(Strategy::Stay),
        round.outcome(Strategy::Switch)
    );
    round
}
