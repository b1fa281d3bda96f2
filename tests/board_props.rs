use salvo::{Board, BoardError, Cell, Direction, GuessResult, BOARD_SIZE, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_random_ships(&mut rng);
    let guesses = rng.random_range(0..BOARD_SIZE * 3);
    for _ in 0..guesses {
        let x = rng.random_range(0..BOARD_SIZE);
        let y = rng.random_range(0..BOARD_SIZE);
        let _ = board.fire(x, y);
    }
    board
}

/// Cells a ship would cover, walked with signed arithmetic.
fn footprint(x: usize, y: usize, direction: Direction, length: usize) -> Vec<(isize, isize)> {
    let (dx, dy) = direction.delta();
    (0..length as isize)
        .map(|i| (x as isize + dx * i, y as isize + dy * i))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleet_fills_exact_cell_count(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.place_random_ships(&mut rng);
        prop_assert_eq!(board.occupied_cells(), TOTAL_SHIP_CELLS);
        prop_assert!(board.has_any_ships());
    }

    #[test]
    fn can_place_matches_footprint(
        seed in any::<u64>(),
        x in 0..BOARD_SIZE + 2,
        y in 0..BOARD_SIZE + 2,
        dir in 0..4usize,
        length in 1..=5usize,
    ) {
        let board = random_board(seed);
        let direction = Direction::ALL[dir];
        let expected = footprint(x, y, direction, length).into_iter().all(|(cx, cy)| {
            cx >= 0
                && cy >= 0
                && (cx as usize) < BOARD_SIZE
                && (cy as usize) < BOARD_SIZE
                && board.cell(cx as usize, cy as usize) == Some(Cell::Empty)
        });
        prop_assert_eq!(board.can_place_ship(x, y, direction, length), expected);
    }

    #[test]
    fn check_guess_agrees_with_grid(seed in any::<u64>(), x in 0..BOARD_SIZE + 2, y in 0..BOARD_SIZE + 2) {
        let board = random_board(seed);
        let result = board.check_guess(x, y);
        let expected = match board.cell(x, y) {
            None => Err(BoardError::OutOfBounds { x, y }),
            Some(Cell::Hit | Cell::Miss) => Err(BoardError::AlreadyGuessed { x, y }),
            Some(Cell::Ship(ship)) => Ok(GuessResult::Hit(ship)),
            Some(Cell::Empty) => Ok(GuessResult::Miss),
        };
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn fire_is_single_shot(seed in any::<u64>(), x in 0..BOARD_SIZE, y in 0..BOARD_SIZE) {
        let mut board = random_board(seed);
        prop_assume!(!board.is_guessed(x, y));
        let before = board.clone();
        let expected = board.check_guess(x, y).unwrap();
        prop_assert_eq!(board.fire(x, y).unwrap(), expected);
        prop_assert_ne!(&before, &board);
        let after = board.clone();
        prop_assert_eq!(board.fire(x, y).unwrap_err(), BoardError::AlreadyGuessed { x, y });
        prop_assert_eq!(after, board);
    }
}
