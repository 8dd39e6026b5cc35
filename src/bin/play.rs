//! Demo driver: one match between randomly playing seats.

use clap::Parser;
use log::LevelFilter;
use rust_domino::{DominoError, GameRng, Match, MatchConfig, Player, RandomPlayer};

/// Simulate a multi-player domino match.
#[derive(Parser, Debug)]
#[command(name = "play")]
struct Args {
    /// Number of players at the table.
    #[arg(long, default_value_t = 2)]
    players: usize,

    /// Highest pip value in the tile set.
    #[arg(long, default_value_t = 6)]
    max_pip: u8,

    /// Tiles dealt to each player.
    #[arg(long, default_value_t = 7)]
    hand_size: usize,

    /// RNG seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the per-turn trace.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), DominoError> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = GameRng::new(seed);

    let players: Vec<Box<dyn Player>> = (0..args.players)
        .map(|_| Box::new(RandomPlayer::new(rng.fork())) as Box<dyn Player>)
        .collect();

    let config = MatchConfig {
        max_pip: args.max_pip,
        initial_hand_size: args.hand_size,
    };
    let mut game = Match::new(players, config, rng)?;

    println!("seed: {seed}");
    println!("{game}");

    let scores = game.play()?;

    println!("{game}");
    println!("final scores: {scores:?}");
    Ok(())
}
