//! Players: seat identity, the strategy-facing contract, and the hand toolkit.
//!
//! The core ships no move-selection intelligence. A `Player` only has to
//! expose its hand, propose a move for a given board, and accept turn
//! notifications. `add_tile`, `remove_tile`, and `hand_score` are free
//! functions over that contract, so every strategy shares one hand
//! implementation without inheritance.

use serde::{Deserialize, Serialize};

use super::board::{Board, Move};
use super::error::DominoError;
use super::tile::Tile;

/// Seat index at the table, 0-based in play order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats at a table of `player_count`.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// The capability set every player must implement.
pub trait Player {
    /// Current hand, in a stable order (move enumeration is hand-order outer).
    fn hand(&self) -> &[Tile];

    /// Mutable hand access. Only the core's `add_tile`/`remove_tile` should
    /// resize it; strategies read it to decide moves.
    fn hand_mut(&mut self) -> &mut Vec<Tile>;

    /// Propose a legal move for `board`, or `None` if unable.
    ///
    /// A proposed move must satisfy `board.can_place`; the match treats an
    /// illegal proposal as a contract violation, not a pass.
    fn propose_move(&mut self, board: &Board) -> Option<Move>;

    /// Notification of a completed turn, delivered to every seat including
    /// the mover: who acted, how many tiles they drew this turn, and the tile
    /// they placed, if any.
    fn observe_turn(&mut self, seat: PlayerId, drawn: usize, placed: Option<Tile>);
}

/// Append `tile` to the player's hand.
pub fn add_tile(player: &mut dyn Player, tile: Tile) {
    player.hand_mut().push(tile);
}

/// Remove exactly one occurrence of `tile` from the player's hand,
/// preserving the order of the rest.
pub fn remove_tile(player: &mut dyn Player, tile: Tile) -> Result<(), DominoError> {
    let hand = player.hand_mut();
    match hand.iter().position(|&t| t == tile) {
        Some(i) => {
            hand.remove(i);
            Ok(())
        }
        None => Err(DominoError::TileNotInHand(tile)),
    }
}

/// Sum of pip values across the player's hand. Always recomputed.
#[must_use]
pub fn hand_score(player: &dyn Player) -> u32 {
    player.hand().iter().map(|t| t.pip_sum()).sum()
}
