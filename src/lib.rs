//! # rust-domino
//!
//! A multi-player domino match simulation engine: tile set generation, hand
//! distribution, legal-move determination, turn sequencing,
//! draw-until-playable resolution, and scoring.
//!
//! ## Design Principles
//!
//! 1. **Core rules only**: the board state machine and the match loop carry
//!    all the rules; move selection lives behind the `Player` trait and is
//!    not part of the core's correctness surface.
//!
//! 2. **Deterministic**: every random decision flows from one seedable
//!    `GameRng`, so a seed replays a whole match.
//!
//! 3. **Return-style failures**: illegal placements, hand inconsistencies,
//!    and deal underflows are `Result`s, never panics; retry policy belongs
//!    to the caller.
//!
//! ## Modules
//!
//! - `core`: tiles, the board, the player contract, RNG, errors
//! - `game`: match construction, the per-turn protocol, termination
//! - `strategy`: the reference random player
//!
//! ## Example
//!
//! ```
//! use rust_domino::{GameRng, Match, MatchConfig, Player, RandomPlayer};
//!
//! let mut rng = GameRng::new(42);
//! let players: Vec<Box<dyn Player>> = (0..2)
//!     .map(|_| Box::new(RandomPlayer::new(rng.fork())) as Box<dyn Player>)
//!     .collect();
//!
//! let mut game = Match::new(players, MatchConfig::default(), rng).unwrap();
//! let scores = game.play().unwrap();
//! assert_eq!(scores.len(), 2);
//! ```

pub mod core;
pub mod game;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    add_tile, hand_score, remove_tile, Board, DominoError, DrawnTiles, GameRng, Move, Player,
    PlayerId, Tile,
};

pub use crate::game::{Match, MatchConfig, MatchStatus, TurnOutcome};

pub use crate::strategy::RandomPlayer;
