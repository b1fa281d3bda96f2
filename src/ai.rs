// Hunt-and-target guessing logic for the computer opponent.
// Guesses randomly until a ship is hit, then sweeps outward from that hit
// ("pivot") one direction at a time until the ship sinks.

use crate::{
    board::Board,
    common::GuessResult,
    config::BOARD_SIZE,
    ship::{Direction, DirectionSet},
};
use rand::Rng;

/// Order in which untried directions are picked around a pivot. Opposites are
/// adjacent, so a sweep that dies out is followed by its reverse.
const SEARCH_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::Up,
];

/// Each failed pivot attempt spends a direction, so one turn never needs more
/// than this many before the pivot is dropped.
const MAX_PIVOT_ATTEMPTS: usize = 2 * Direction::ALL.len() + 1;

/// Why a pivot-mode candidate was dropped before being guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Retry {
    /// Candidate lies off the board.
    OutOfRange,
    /// Candidate was hit or missed on an earlier turn.
    AlreadyGuessed,
    /// Every direction around the pivot has been tried.
    NoValidDirection,
}

/// Computer opponent. Holds only what its own guesses have revealed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetingAi {
    pivot: Option<(usize, usize)>,
    exhausted_directions: DirectionSet,
    successful_direction: Option<Direction>,
    offset: Option<usize>,
}

impl TargetingAi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any target and go back to random search.
    pub fn clear_state(&mut self) {
        *self = Self::default();
    }

    /// Hit being swept around, if any.
    pub fn pivot(&self) -> Option<(usize, usize)> {
        self.pivot
    }

    pub fn exhausted_directions(&self) -> DirectionSet {
        self.exhausted_directions
    }

    pub fn successful_direction(&self) -> Option<Direction> {
        self.successful_direction
    }

    /// Distance from the pivot of the next directional guess.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// True while sweeping around a pivot rather than guessing at random.
    pub fn is_targeting(&self) -> bool {
        self.pivot.is_some()
    }

    /// Direction to try next from the pivot.
    ///
    /// After a run of hits the reverse of that run is preferred; otherwise the
    /// first untried direction in search order. `None` once all are tried.
    pub fn choose_next_direction(&self) -> Option<Direction> {
        if let Some(successful) = self.successful_direction {
            let reverse = successful.opposite();
            if !self.exhausted_directions.contains(reverse) {
                return Some(reverse);
            }
        }
        SEARCH_ORDER
            .into_iter()
            .find(|d| !self.exhausted_directions.contains(*d))
    }

    /// Pick the next cell to fire at, learn its outcome from `board`, and
    /// update the search state for the following turn.
    ///
    /// The returned cell has not been guessed before. `board` is only read;
    /// the caller records the shot. Returns `None` once every cell has been
    /// guessed.
    pub fn next_guess<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        rng: &mut R,
    ) -> Option<(usize, usize)> {
        for _ in 0..MAX_PIVOT_ATTEMPTS {
            match self.pivot_candidate(board) {
                Ok(Some((coord, direction))) => {
                    if let Some(guess) = self.evaluate(board, coord, Some(direction)) {
                        return Some(guess);
                    }
                }
                Ok(None) => break,
                Err(Retry::NoValidDirection) => {
                    log::debug!(
                        "no direction left around {:?}; back to random search",
                        self.pivot
                    );
                    self.clear_state();
                    break;
                }
                Err(retry) => {
                    log::trace!("dropping candidate around {:?}: {:?}", self.pivot, retry);
                }
            }
        }
        if self.pivot.is_some() {
            log::warn!("pivot {:?} still set after retries; clearing", self.pivot);
            self.clear_state();
        }

        let coord = random_unguessed(board, rng)?;
        self.evaluate(board, coord, None)
    }

    /// Next directional candidate from the pivot, or `Ok(None)` in random
    /// search mode. Failed candidates leave the state ready for another try.
    fn pivot_candidate(
        &mut self,
        board: &Board,
    ) -> Result<Option<((usize, usize), Direction)>, Retry> {
        let Some(pivot) = self.pivot else {
            return Ok(None);
        };
        let direction = match self.successful_direction {
            Some(direction) => direction,
            None => self.choose_next_direction().ok_or(Retry::NoValidDirection)?,
        };
        self.exhausted_directions.insert(direction);

        let offset = self.offset.unwrap_or(1);
        let Some(candidate) = direction.step(pivot, offset) else {
            self.abandon_direction();
            return Err(Retry::OutOfRange);
        };
        if board.is_guessed(candidate.0, candidate.1) {
            self.abandon_direction();
            return Err(Retry::AlreadyGuessed);
        }
        Ok(Some((candidate, direction)))
    }

    fn abandon_direction(&mut self) {
        self.successful_direction = None;
        self.offset = Some(1);
    }

    fn evaluate(
        &mut self,
        board: &Board,
        coord: (usize, usize),
        direction: Option<Direction>,
    ) -> Option<(usize, usize)> {
        match board.check_guess(coord.0, coord.1) {
            Ok(result) => {
                self.record(board, coord, direction, result);
                Some(coord)
            }
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }

    fn record(
        &mut self,
        board: &Board,
        (x, y): (usize, usize),
        direction: Option<Direction>,
        result: GuessResult,
    ) {
        match (self.pivot, result) {
            (None, GuessResult::Miss) => {}
            (None, GuessResult::Hit(ship)) => {
                if board.has_ship_with_guess(x, y, ship) {
                    log::debug!("hit {} at ({}, {}); targeting around it", ship, x, y);
                    self.pivot = Some((x, y));
                    self.offset = Some(1);
                } else {
                    log::debug!("sank {} with a random shot at ({}, {})", ship, x, y);
                }
            }
            (Some(_), GuessResult::Miss) => {
                // A miss after a run of hits ends that run: turn around.
                self.successful_direction = if self.offset.is_some_and(|o| o > 1) {
                    self.choose_next_direction()
                } else {
                    None
                };
                self.offset = Some(1);
            }
            (Some(pivot), GuessResult::Hit(ship)) => {
                if board.has_ship_with_guess(x, y, ship) {
                    self.successful_direction = direction;
                    self.offset = Some(self.offset.unwrap_or(1) + 1);
                } else {
                    log::debug!("sank {} working from {:?}", ship, pivot);
                    self.clear_state();
                }
            }
        }
    }
}

/// Uniformly random cell that has not been hit or missed yet.
fn random_unguessed<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    let open = BOARD_SIZE * BOARD_SIZE - board.guessed_cells();
    if open == 0 {
        return None;
    }
    let pick = rng.random_range(0..open);
    board
        .cells()
        .filter(|(_, c)| !c.is_guessed())
        .nth(pick)
        .map(|(pos, _)| pos)
}
