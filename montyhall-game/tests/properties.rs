use montyhall_game::{
    Board, Door, Outcome, Prize, SimulationRng, Strategy, change_door, create_game,
    determine_winner, open_goat_door, play_game, remaining_doors,
};

fn every_board() -> impl Iterator<Item = Board> {
    Door::ALL.into_iter().map(Board::with_car_behind)
}

#[test]
fn generated_boards_hold_exactly_one_car() {
    let mut rng = SimulationRng::from_user_seed(31);
    for _ in 0..1000 {
        let slots = create_game(&mut rng).slots();
        assert_eq!(slots.len(), 3);
        assert_eq!(slots.iter().filter(|p| **p == Prize::Car).count(), 1);
        assert_eq!(slots.iter().filter(|p| **p == Prize::Goat).count(), 2);
    }
}

#[test]
fn host_reveal_is_goat_and_not_pick() {
    let mut rng = SimulationRng::from_user_seed(32);
    for board in every_board() {
        for pick in Door::ALL {
            for _ in 0..100 {
                let opened = open_goat_door(&board, pick, &mut rng);
                assert_ne!(opened, pick);
                assert_eq!(board.prize_at(opened), Prize::Goat);
            }
        }
    }
}

#[test]
fn goat_pick_reveal_is_constant() {
    let mut rng = SimulationRng::from_user_seed(33);
    for board in every_board() {
        for pick in Door::ALL.into_iter().filter(|d| board.prize_at(*d) == Prize::Goat) {
            let expected: Vec<Door> = remaining_doors(&[pick, board.car_door()]).collect();
            assert_eq!(expected.len(), 1);
            for _ in 0..1000 {
                assert_eq!(open_goat_door(&board, pick, &mut rng), expected[0]);
            }
        }
    }
}

#[test]
fn change_door_covers_all_valid_pairs() {
    for pick in Door::ALL {
        for opened in Door::ALL.into_iter().filter(|d| *d != pick) {
            assert_eq!(change_door(Strategy::Stay, opened, pick), Ok(pick));
            let third: Vec<Door> = remaining_doors(&[pick, opened]).collect();
            assert_eq!(change_door(Strategy::Switch, opened, pick), Ok(third[0]));
        }
    }
}

#[test]
fn determine_winner_is_exhaustive() {
    for board in every_board() {
        for pick in Door::ALL {
            let outcome = determine_winner(pick, &board);
            assert_eq!(outcome == Outcome::Win, board.prize_at(pick) == Prize::Car);
        }
    }
}

#[test]
fn rounds_share_one_board() {
    let mut rng = SimulationRng::from_user_seed(34);
    for _ in 0..1000 {
        let round = play_game(&mut rng);
        assert_eq!(round.records().len(), 2);
        let board = round.board();
        let stay = change_door(Strategy::Stay, round.opened(), round.pick()).unwrap();
        let switch = change_door(Strategy::Switch, round.opened(), round.pick()).unwrap();
        assert_eq!(round.outcome(Strategy::Stay), determine_winner(stay, board));
        assert_eq!(round.outcome(Strategy::Switch), determine_winner(switch, board));
        assert_ne!(round.outcome(Strategy::Stay), round.outcome(Strategy::Switch));
    }
}
