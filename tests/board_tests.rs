use salvo::{
    ship_by_name, Board, BoardError, Cell, Direction, GuessResult, BOARD_SIZE, SHIPS,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_place_destroyer_blocks_same_spot() {
    let mut board = Board::new();
    let destroyer = ship_by_name("destroyer").unwrap();

    assert!(board.can_place_ship(3, 3, Direction::Right, 2));
    board.place_ship(3, 3, Direction::Right, destroyer);

    assert_eq!(board.cell(3, 3), Some(Cell::Ship(destroyer)));
    assert_eq!(board.cell(4, 3), Some(Cell::Ship(destroyer)));
    assert_eq!(board.cell(5, 3), Some(Cell::Empty));
    assert_eq!(board.occupied_cells(), 2);
    assert!(!board.can_place_ship(3, 3, Direction::Right, 2));
}

#[test]
fn test_can_place_rejects_edges_and_overlap() {
    let mut board = Board::new();
    assert!(!board.can_place_ship(0, 0, Direction::Up, 2));
    assert!(!board.can_place_ship(0, 0, Direction::Left, 2));
    assert!(!board.can_place_ship(8, 0, Direction::Right, 3));
    assert!(board.can_place_ship(7, 0, Direction::Right, 3));
    assert!(!board.can_place_ship(0, 6, Direction::Down, 5));
    assert!(board.can_place_ship(0, 5, Direction::Down, 5));
    assert!(!board.can_place_ship(BOARD_SIZE, 0, Direction::Down, 1));

    board.place_ship(2, 2, Direction::Down, SHIPS[0]);
    // crosses the carrier at (2, 4)
    assert!(!board.can_place_ship(0, 4, Direction::Right, 3));
    assert!(board.can_place_ship(0, 4, Direction::Right, 2));
}

#[test]
fn test_check_guess_does_not_mutate() {
    let mut board = Board::new();
    let cruiser = ship_by_name("cruiser").unwrap();
    board.place_ship(5, 5, Direction::Left, cruiser);

    assert_eq!(board.check_guess(3, 5).unwrap(), GuessResult::Hit(cruiser));
    assert_eq!(board.check_guess(3, 5).unwrap(), GuessResult::Hit(cruiser));
    assert_eq!(board.check_guess(0, 0).unwrap(), GuessResult::Miss);
    assert_eq!(board.guessed_cells(), 0);
}

#[test]
fn test_invalid_guesses() {
    let mut board = Board::new();
    board.place_ship(0, 0, Direction::Right, SHIPS[4]);

    assert_eq!(
        board.check_guess(BOARD_SIZE, 0).unwrap_err(),
        BoardError::OutOfBounds { x: BOARD_SIZE, y: 0 }
    );
    assert_eq!(
        board.check_guess(0, BOARD_SIZE + 3).unwrap_err(),
        BoardError::OutOfBounds { x: 0, y: BOARD_SIZE + 3 }
    );

    board.fire(0, 0).unwrap();
    board.fire(9, 9).unwrap();
    assert_eq!(
        board.check_guess(0, 0).unwrap_err(),
        BoardError::AlreadyGuessed { x: 0, y: 0 }
    );
    assert_eq!(
        board.fire(9, 9).unwrap_err(),
        BoardError::AlreadyGuessed { x: 9, y: 9 }
    );
}

#[test]
fn test_fire_until_sunk() {
    let mut board = Board::new();
    let submarine = ship_by_name("submarine").unwrap();
    board.place_ship(4, 7, Direction::Up, submarine);

    assert_eq!(board.fire(4, 7).unwrap(), GuessResult::Hit(submarine));
    assert_eq!(board.cell(4, 7), Some(Cell::Hit));
    assert!(board.has_ship(submarine));
    assert!(board.has_ship_with_guess(4, 6, submarine));

    assert_eq!(board.fire(4, 6).unwrap(), GuessResult::Hit(submarine));
    // (4, 5) is the last live segment, whether or not it has been recorded
    assert!(!board.has_ship_with_guess(4, 5, submarine));
    assert!(board.has_ship(submarine));
    assert_eq!(board.fire(4, 5).unwrap(), GuessResult::Hit(submarine));
    assert!(!board.has_ship_with_guess(4, 5, submarine));
    assert!(!board.has_ship(submarine));
    assert!(!board.has_any_ships());
}

#[test]
fn test_has_any_ships_tracks_whole_fleet() {
    let mut board = Board::new();
    assert!(!board.has_any_ships());

    board.place_ship(0, 0, Direction::Down, SHIPS[4]);
    board.place_ship(9, 9, Direction::Left, SHIPS[2]);
    assert!(board.has_any_ships());

    board.fire(0, 0).unwrap();
    board.fire(0, 1).unwrap();
    assert!(!board.has_ship(SHIPS[4]));
    assert!(board.has_any_ships());
    assert_eq!(board.remaining_ships().collect::<Vec<_>>(), vec![SHIPS[2]]);

    for x in 7..10 {
        board.fire(x, 9).unwrap();
    }
    assert!(!board.has_any_ships());
    assert_eq!(board.remaining_ships().count(), 0);
}

#[test]
fn test_place_random_ships_no_overlap() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    board.place_random_ships(&mut rng);

    assert_eq!(board.occupied_cells(), TOTAL_SHIP_CELLS);
    for ship in SHIPS {
        let cells = board
            .cells()
            .filter(|(_, c)| *c == Cell::Ship(ship))
            .count();
        assert_eq!(cells, ship.length(), "{} has the wrong size", ship);
    }
    assert_eq!(board.remaining_ships().collect::<Vec<_>>(), SHIPS.to_vec());
}

#[test]
fn test_place_random_is_reproducible() {
    let mut rng1 = SmallRng::seed_from_u64(7);
    let mut rng2 = SmallRng::seed_from_u64(7);
    let mut board1 = Board::new();
    let mut board2 = Board::new();
    board1.place_random_ships(&mut rng1);
    board2.place_random_ships(&mut rng2);
    assert_eq!(board1, board2);
}

#[test]
fn test_validate_coordinate() {
    assert_eq!(Board::validate_coordinate("0"), Some(0));
    assert_eq!(Board::validate_coordinate(" 9\n"), Some(9));
    assert_eq!(Board::validate_coordinate("10"), None);
    assert_eq!(Board::validate_coordinate("-1"), None);
    assert_eq!(Board::validate_coordinate("three"), None);
    assert_eq!(Board::validate_coordinate(""), None);
}

#[test]
fn test_direction_parsing() {
    assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
    assert_eq!(" Right ".parse::<Direction>(), Ok(Direction::Right));
    assert_eq!("d".parse::<Direction>(), Ok(Direction::Down));
    assert_eq!("L".parse::<Direction>(), Ok(Direction::Left));
    assert!("diagonal".parse::<Direction>().is_err());
    assert!("".parse::<Direction>().is_err());
    for d in Direction::ALL {
        assert_eq!(d.opposite().opposite(), d);
        assert_eq!(d.name().parse::<Direction>(), Ok(d));
    }
}
