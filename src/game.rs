use crate::{
    ai::TargetingAi,
    board::Board,
    common::{BoardError, GuessResult},
    ship::ShipType,
};
use rand::Rng;

/// Current status of a game, from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Outcome of one shot, as announced to both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub coord: (usize, usize),
    pub result: GuessResult,
    /// Ship sent to the bottom by this shot, if any.
    pub sunk: Option<ShipType>,
}

/// Human versus computer game: both boards plus the computer's targeting state.
pub struct Game {
    player_board: Board,
    ai_board: Board,
    ai: TargetingAi,
}

impl Game {
    /// New game with the computer's fleet placed at random and the player's
    /// board left empty for placement.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut ai_board = Board::new();
        ai_board.place_random_ships(rng);
        Self::with_boards(Board::new(), ai_board)
    }

    pub fn with_boards(player_board: Board, ai_board: Board) -> Self {
        Self {
            player_board,
            ai_board,
            ai: TargetingAi::new(),
        }
    }

    /// Mutable reference to the player's board for ship placement.
    pub fn player_board_mut(&mut self) -> &mut Board {
        &mut self.player_board
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    pub fn ai(&self) -> &TargetingAi {
        &self.ai
    }

    /// Fire the player's shot at the computer's board.
    pub fn player_turn(&mut self, x: usize, y: usize) -> Result<TurnReport, BoardError> {
        resolve(&mut self.ai_board, x, y)
    }

    /// Let the computer pick and fire its shot. `None` only when no cell of the
    /// player's board is left to guess.
    pub fn ai_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<TurnReport> {
        let (x, y) = self.ai.next_guess(&self.player_board, rng)?;
        match resolve(&mut self.player_board, x, y) {
            Ok(report) => Some(report),
            Err(e) => {
                log::error!("computer produced an invalid guess: {}", e);
                None
            }
        }
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if !self.ai_board.has_any_ships() {
            GameStatus::Won
        } else if !self.player_board.has_any_ships() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}

fn resolve(board: &mut Board, x: usize, y: usize) -> Result<TurnReport, BoardError> {
    let result = board.fire(x, y)?;
    let sunk = result.ship().filter(|ship| !board.has_ship(*ship));
    if let Some(ship) = sunk {
        log::info!("{} sunk at ({}, {})", ship, x, y);
    }
    Ok(TurnReport {
        coord: (x, y),
        result,
        sunk,
    })
}
