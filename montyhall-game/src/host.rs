//! Host behaviour: opening a goat door after the contestant's pick.
use crate::board::Board;
use crate::door::{Door, remaining_doors};
use crate::source::{ChoiceSource, choose};

/// Open a door that is neither the contestant's pick nor the car.
///
/// When the pick hides the car the host chooses uniformly between the two goat
/// doors. When the pick hides a goat the host is forced to open the only other
/// goat door and no draw is taken from `source`.
pub fn open_goat_door<S: ChoiceSource + ?Sized>(board: &Board, pick: Door, source: &mut S) -> Door {
    let car = board.car_door();
    let candidates: Vec<Door> = remaining_doors(&[pick, car]).collect();
    debug_assert!(
        candidates.iter().all(|door| !board.prize_at(*door).is_car()),
        "host candidates must all hide goats"
    );
    match candidates.as_slice() {
        [forced] => *forced,
        _ => choose(source, &candidates),
    }
}
