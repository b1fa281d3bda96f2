use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{init_logging, run_game, CliPlayer, Game, GameStatus};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Place your fleet at random instead of by hand")]
        auto_place: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    let (seed, auto_place) = match cli.command {
        Some(Commands::Play { seed, auto_place }) => (seed, auto_place),
        None => (None, false),
    };

    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new(&mut rng);
    let mut player = CliPlayer::stdio();
    if auto_place {
        game.player_board_mut().place_random_ships(&mut rng);
        player.print_board(game.player_board(), true, "Player board")?;
    } else {
        player.place_ships(game.player_board_mut())?;
    }

    match run_game(&mut game, &mut player, &mut rng)? {
        GameStatus::Won => log::info!("player won"),
        GameStatus::Lost => log::info!("computer won"),
        GameStatus::InProgress => {}
    }
    Ok(())
}
