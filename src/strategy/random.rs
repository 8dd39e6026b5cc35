//! A player that picks uniformly among its legal moves.

use crate::core::{Board, GameRng, Move, Player, PlayerId, Tile};

/// Illustrative strategy: a uniformly random choice among `valid_moves`.
///
/// Owns a forked RNG stream so match-level draws and strategy choices stay
/// independently reproducible from one seed.
pub struct RandomPlayer {
    hand: Vec<Tile>,
    rng: GameRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            hand: Vec::new(),
            rng,
        }
    }
}

impl Player for RandomPlayer {
    fn hand(&self) -> &[Tile] {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Vec<Tile> {
        &mut self.hand
    }

    fn propose_move(&mut self, board: &Board) -> Option<Move> {
        let moves = board.valid_moves(&self.hand);
        self.rng.choose(&moves).copied()
    }

    fn observe_turn(&mut self, _seat: PlayerId, _drawn: usize, _placed: Option<Tile>) {
        // A random player does not read the table.
    }
}
