use clap::Parser;
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{init_logging, Board, TargetingAi, BOARD_SIZE};
use serde::Serialize;

/// Let the computer hunt randomly placed fleets and report how many shots it needs.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = 100)]
    games: usize,
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    games: usize,
    min_guesses: usize,
    max_guesses: usize,
    mean_guesses: f64,
}

fn shots_to_sink_fleet(rng: &mut SmallRng) -> anyhow::Result<usize> {
    let mut board = Board::new();
    board.place_random_ships(rng);
    let mut ai = TargetingAi::new();
    let mut guesses = 0;
    while board.has_any_ships() {
        let (x, y) = ai
            .next_guess(&board, rng)
            .ok_or_else(|| anyhow::anyhow!("ran out of cells after {} guesses", guesses))?;
        board.fire(x, y)?;
        guesses += 1;
    }
    Ok(guesses)
}

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let args = Args::parse();
    if args.games == 0 {
        anyhow::bail!("--games must be at least 1");
    }

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut min_guesses = BOARD_SIZE * BOARD_SIZE;
    let mut max_guesses = 0;
    let mut total = 0;
    for _ in 0..args.games {
        let guesses = shots_to_sink_fleet(&mut rng)?;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        total += guesses;
    }

    let report = Report {
        seed: args.seed,
        games: args.games,
        min_guesses,
        max_guesses,
        mean_guesses: total as f64 / args.games as f64,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
