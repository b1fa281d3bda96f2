//! Common types for Battleship: board errors and guess results.

use crate::ship::ShipType;

/// Result of a guess attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess struck a segment of the named ship.
    Hit(ShipType),
    /// Guess missed all ships.
    Miss,
}

impl GuessResult {
    pub fn is_hit(&self) -> bool {
        matches!(self, GuessResult::Hit(_))
    }

    /// Ship struck by the guess, if any.
    pub fn ship(&self) -> Option<ShipType> {
        match self {
            GuessResult::Hit(ship) => Some(*ship),
            GuessResult::Miss => None,
        }
    }
}

/// Errors returned by Board operations.
///
/// Both variants are the "invalid guess" condition: the caller is expected to
/// pick another coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// Guess was already made at this position.
    AlreadyGuessed { x: usize, y: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Invalid guess: ({}, {}) is off the board", x, y)
            }
            BoardError::AlreadyGuessed { x, y } => {
                write!(f, "Invalid guess: ({}, {}) was already guessed", x, y)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
