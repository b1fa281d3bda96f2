//! Game board state: a grid of cells holding ships, hits and misses.

use crate::common::{BoardError, GuessResult};
use crate::config::{BOARD_SIZE, SHIPS};
use crate::ship::{Direction, ShipType};
use core::fmt;
use rand::Rng;

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Unguessed segment of a ship.
    Ship(ShipType),
    Hit,
    Miss,
}

impl Cell {
    /// True once the cell has been resolved by a guess.
    pub fn is_guessed(&self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// One player's grid. Indexed as `grid[y][x]`.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships placed, nothing guessed).
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Cell at `(x, y)`, or `None` if off the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.grid.get(y).and_then(|row| row.get(x)).copied()
    }

    /// True if `(x, y)` has already been hit or missed.
    pub fn is_guessed(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(|c| c.is_guessed())
    }

    /// True when a ship of `length` starting at `(x, y)` and extending along
    /// `direction` stays on the grid and covers only empty cells.
    pub fn can_place_ship(&self, x: usize, y: usize, direction: Direction, length: usize) -> bool {
        (0..length).all(|segment| {
            direction
                .step((x, y), segment)
                .is_some_and(|(cx, cy)| self.grid[cy][cx] == Cell::Empty)
        })
    }

    /// Write `ship` into its cells starting at `(x, y)` along `direction`.
    ///
    /// Does not validate: call [`Board::can_place_ship`] first. Segments that
    /// would fall off the grid are skipped.
    pub fn place_ship(&mut self, x: usize, y: usize, direction: Direction, ship: ShipType) {
        for segment in 0..ship.length() {
            if let Some((cx, cy)) = direction.step((x, y), segment) {
                self.grid[cy][cx] = Cell::Ship(ship);
            }
        }
    }

    /// Place the whole fleet at uniformly random positions and directions.
    ///
    /// Ships are placed in fleet order; each one is resampled until it fits.
    pub fn place_random_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for ship in SHIPS {
            let mut attempts = 0u32;
            loop {
                attempts += 1;
                let x = rng.random_range(0..BOARD_SIZE);
                let y = rng.random_range(0..BOARD_SIZE);
                let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
                if self.can_place_ship(x, y, direction, ship.length()) {
                    self.place_ship(x, y, direction, ship);
                    log::trace!(
                        "placed {} at ({}, {}) facing {} after {} attempts",
                        ship,
                        x,
                        y,
                        direction,
                        attempts
                    );
                    break;
                }
            }
        }
    }

    /// Evaluate a guess at `(x, y)` without changing the board.
    pub fn check_guess(&self, x: usize, y: usize) -> Result<GuessResult, BoardError> {
        match self.cell(x, y) {
            None => Err(BoardError::OutOfBounds { x, y }),
            Some(Cell::Hit | Cell::Miss) => Err(BoardError::AlreadyGuessed { x, y }),
            Some(Cell::Ship(ship)) => Ok(GuessResult::Hit(ship)),
            Some(Cell::Empty) => Ok(GuessResult::Miss),
        }
    }

    /// Mark `(x, y)` with the outcome of a guess already validated by
    /// [`Board::check_guess`].
    pub fn record(&mut self, x: usize, y: usize, result: GuessResult) -> Result<(), BoardError> {
        let cell = self
            .grid
            .get_mut(y)
            .and_then(|row| row.get_mut(x))
            .ok_or(BoardError::OutOfBounds { x, y })?;
        if cell.is_guessed() {
            return Err(BoardError::AlreadyGuessed { x, y });
        }
        *cell = match result {
            GuessResult::Hit(_) => Cell::Hit,
            GuessResult::Miss => Cell::Miss,
        };
        Ok(())
    }

    /// Check a guess and write its outcome back into the grid.
    pub fn fire(&mut self, x: usize, y: usize) -> Result<GuessResult, BoardError> {
        let result = self.check_guess(x, y)?;
        self.record(x, y, result)?;
        Ok(result)
    }

    /// True while any segment of `ship` remains unguessed.
    pub fn has_ship(&self, ship: ShipType) -> bool {
        let present = self.cells().any(|(_, c)| c == Cell::Ship(ship));
        if !present {
            log::trace!("{} has sunk", ship);
        }
        present
    }

    /// True while any ship in the fleet is still afloat.
    pub fn has_any_ships(&self) -> bool {
        SHIPS.iter().any(|ship| self.has_ship(*ship))
    }

    /// Like [`Board::has_ship`], but ignores the cell at `(x_guess, y_guess)`.
    ///
    /// Answers "does `ship` survive a hit at this cell?" whether or not the
    /// hit has been recorded yet.
    pub fn has_ship_with_guess(&self, x_guess: usize, y_guess: usize, ship: ShipType) -> bool {
        let present = self
            .cells()
            .any(|(pos, c)| pos != (x_guess, y_guess) && c == Cell::Ship(ship));
        if !present {
            log::trace!("{} has sunk", ship);
        }
        present
    }

    /// Ships with at least one unguessed segment, in fleet order.
    pub fn remaining_ships(&self) -> impl Iterator<Item = ShipType> + '_ {
        SHIPS.into_iter().filter(move |ship| self.cells().any(|(_, c)| c == Cell::Ship(*ship)))
    }

    /// Number of cells that hold or held a ship segment.
    pub fn occupied_cells(&self) -> usize {
        self.cells()
            .filter(|(_, c)| matches!(c, Cell::Ship(_) | Cell::Hit))
            .count()
    }

    /// Number of cells already hit or missed.
    pub fn guessed_cells(&self) -> usize {
        self.cells().filter(|(_, c)| c.is_guessed()).count()
    }

    /// Every cell with its `(x, y)` coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        self.grid
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, c)| ((x, y), *c)))
    }

    /// Parse a single coordinate typed by a human. Returns `None` unless the
    /// input is an integer in `0..BOARD_SIZE`.
    pub fn validate_coordinate(raw: &str) -> Option<usize> {
        raw.trim()
            .parse::<usize>()
            .ok()
            .filter(|v| *v < BOARD_SIZE)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.grid.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Ship(_) => 'S',
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
