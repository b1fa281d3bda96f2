#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::{Board, Cell},
    config::{BOARD_SIZE, SHIPS},
    game::{Game, GameStatus, TurnReport},
    ship::{Direction, ShipType},
    GuessResult,
};
use rand::Rng;

/// Render a board as text. Ships are drawn only when `show_ships` is set.
///
/// ```text
///   0123456789
/// 0|s  !x
/// ```
pub fn render_board(board: &Board, show_ships: bool) -> String {
    let mut out = String::from("  ");
    for x in 0..BOARD_SIZE {
        out.push_str(&x.to_string());
    }
    out.push('\n');
    for y in 0..BOARD_SIZE {
        out.push_str(&std::format!("{}|", y));
        for x in 0..BOARD_SIZE {
            let ch = match board.cell(x, y).unwrap_or_default() {
                Cell::Empty => ' ',
                Cell::Ship(_) if show_ships => 's',
                Cell::Ship(_) => ' ',
                Cell::Hit => '!',
                Cell::Miss => 'x',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Terminal front-end for the human player, generic over its input and output
/// so it can be driven by scripted input.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn prompt(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Ask for a start coordinate and direction for `ship`. Each part is
    /// `None` when the answer was not valid.
    pub fn read_placement(
        &mut self,
        ship: ShipType,
    ) -> io::Result<(Option<usize>, Option<usize>, Option<Direction>)> {
        let raw_x = self.prompt(&std::format!(
            "What would you like the x coordinate of your {} (length {}) to be? ",
            ship,
            ship.length()
        ))?;
        let raw_y = self.prompt(&std::format!(
            "What would you like the y coordinate of your {} (length {}) to be? ",
            ship,
            ship.length()
        ))?;
        let raw_direction = self.prompt(
            "Which direction (up, down, left, right) would you like your boat to be in, relative to the coordinate? ",
        )?;
        Ok((
            Board::validate_coordinate(&raw_x),
            Board::validate_coordinate(&raw_y),
            raw_direction.parse().ok(),
        ))
    }

    /// Walk the human through placing every ship of the fleet on `board`.
    pub fn place_ships(&mut self, board: &mut Board) -> io::Result<()> {
        writeln!(
            self.output,
            "Welcome captain! Your board today is {}x{}, so please enter coordinates between 0-{}",
            BOARD_SIZE,
            BOARD_SIZE,
            BOARD_SIZE - 1
        )?;
        for ship in SHIPS {
            loop {
                match self.read_placement(ship)? {
                    (Some(x), Some(y), Some(direction)) => {
                        if board.can_place_ship(x, y, direction, ship.length()) {
                            board.place_ship(x, y, direction, ship);
                            self.print_board(board, true, "Player board")?;
                            writeln!(self.output, "Your {} was successfully placed!\n", ship)?;
                            break;
                        }
                        writeln!(
                            self.output,
                            "Your ship cannot be placed there, it must not go out of bounds or be on top of one of your other ships\n"
                        )?;
                    }
                    _ => writeln!(
                        self.output,
                        "You need to enter a number between 0-{} for your x and y coordinates, and a valid direction. Please try again.\n",
                        BOARD_SIZE - 1
                    )?,
                }
            }
        }
        Ok(())
    }

    /// Prompt until the human names a cell that can be fired at, then fire.
    pub fn take_turn(&mut self, game: &mut Game) -> io::Result<TurnReport> {
        loop {
            let raw_x = self.prompt("What is the x coordinate of the cell you want to hit? ")?;
            let raw_y = self.prompt("What is the y coordinate of the cell you want to hit? ")?;
            let coords = Board::validate_coordinate(&raw_x).zip(Board::validate_coordinate(&raw_y));
            match coords.map(|(x, y)| game.player_turn(x, y)) {
                Some(Ok(report)) => return Ok(report),
                Some(Err(e)) => log::debug!("rejected guess: {}", e),
                None => {}
            }
            writeln!(
                self.output,
                "\nYour guess must be a number between 0-{} that you have not already guessed.",
                BOARD_SIZE - 1
            )?;
        }
    }

    pub fn announce_player(&mut self, report: &TurnReport) -> io::Result<()> {
        let outcome = match report.result {
            GuessResult::Hit(_) => "hit",
            GuessResult::Miss => "miss",
        };
        writeln!(self.output, "\nYou have a {}!", outcome)?;
        if let Some(ship) = report.sunk {
            writeln!(self.output, "You have sunk your opponent's {}", ship)?;
        }
        Ok(())
    }

    pub fn announce_ai(&mut self, report: &TurnReport) -> io::Result<()> {
        let (x, y) = report.coord;
        match report.result {
            GuessResult::Hit(_) => {
                writeln!(self.output, "Avast! Your opponent struck you at ({},{})", x, y)?
            }
            GuessResult::Miss => {
                writeln!(self.output, "Your opponent missed you at ({},{})", x, y)?
            }
        }
        if let Some(ship) = report.sunk {
            writeln!(self.output, "Your opponent has sunk your {}", ship)?;
        }
        Ok(())
    }

    pub fn print_board(&mut self, board: &Board, show_ships: bool, name: &str) -> io::Result<()> {
        write!(self.output, "\n{}\n{}", name, render_board(board, show_ships))
    }

    /// Own board with ships shown, then the opponent's with ships hidden.
    pub fn print_boards(&mut self, game: &Game) -> io::Result<()> {
        self.print_board(game.player_board(), true, "Player board")?;
        self.print_board(game.ai_board(), false, "AI board")
    }
}

/// Alternate human and computer turns until one fleet is gone.
pub fn run_game<R, W, G>(
    game: &mut Game,
    player: &mut CliPlayer<R, W>,
    rng: &mut G,
) -> io::Result<GameStatus>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    loop {
        writeln!(player.output, "{}", "-".repeat(100))?;
        let report = player.take_turn(game)?;
        player.announce_player(&report)?;
        if game.status() == GameStatus::Won {
            writeln!(
                player.output,
                "\nCongratulations captain! You have destroyed your opponent's navy"
            )?;
            return Ok(GameStatus::Won);
        }

        if let Some(report) = game.ai_turn(rng) {
            player.announce_ai(&report)?;
        }
        if game.status() == GameStatus::Lost {
            writeln!(player.output, "\nArgh! Your navy has been destroyed")?;
            return Ok(GameStatus::Lost);
        }

        player.print_boards(game)?;
    }
}
