//! The contestant's opening pick.
use crate::door::Door;
use crate::source::{ChoiceSource, choose};

/// Pick one of the three doors uniformly, independent of the board.
pub fn select_door<S: ChoiceSource + ?Sized>(source: &mut S) -> Door {
    choose(source, &Door::ALL)
}
