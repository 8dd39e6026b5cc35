//! Error taxonomy for board, hand, and match-setup failures.
//!
//! All core failures are synchronous `Result` returns; nothing is retried
//! internally. An empty boneyard on draw is NOT an error; `Board::draw`
//! returns an empty sequence in that case.

use thiserror::Error;

use super::tile::Tile;

/// Everything that can go wrong inside the core.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominoError {
    /// `Board::place` rejected the move. Unreachable through a well-behaved
    /// match loop; reaching it signals a strategy contract violation.
    #[error("cannot place {tile} on end {end}")]
    IllegalPlacement { tile: Tile, end: u8 },

    /// `remove_tile` found no matching tile. Signals an internal
    /// inconsistency if it triggers during normal play.
    #[error("tile {0} is not in the player's hand")]
    TileNotInHand(Tile),

    /// Dealing would draw from an exhausted boneyard; the match is not
    /// constructed.
    #[error("cannot deal {hand_size} tiles to each of {players} players from a {set_size}-tile set")]
    DealExhausted {
        players: usize,
        hand_size: usize,
        set_size: usize,
    },

    /// A match needs at least one seat.
    #[error("a match needs at least one player")]
    NoPlayers,
}
