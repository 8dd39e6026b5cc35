//! Core building blocks: tiles, the board state machine, the player
//! contract, deterministic RNG, and the error taxonomy.
//!
//! Match orchestration lives in `crate::game`; concrete strategies live in
//! `crate::strategy`. Nothing here selects moves.

pub mod board;
pub mod error;
pub mod player;
pub mod rng;
pub mod tile;

pub use board::{Board, DrawnTiles, Move};
pub use error::DominoError;
pub use player::{add_tile, hand_score, remove_tile, Player, PlayerId};
pub use rng::GameRng;
pub use tile::Tile;
