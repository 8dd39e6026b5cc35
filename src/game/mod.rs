//! Match orchestration: setup, the per-turn protocol, and termination.
//!
//! A `Match` owns the board, the seated players, the turn index, and the
//! consecutive-pass counter. Construction builds the full double set, picks a
//! random starting seat, and deals every hand; it lands directly in
//! `InProgress` or fails outright; a partially dealt match is never
//! returned.
//!
//! Each turn resolves to one `TurnOutcome`: play from the hand, draw until
//! playable then play, or draw out the boneyard and pass. The outcome is
//! broadcast to every seat (mover included), then the turn index advances
//! cyclically. The match is over once every seat has passed in a full round
//! with no intervening placement, or any hand is empty.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{
    add_tile, hand_score, remove_tile, Board, DominoError, GameRng, Move, Player, PlayerId, Tile,
};

/// Tile-set and deal configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Highest pip value in the set; the set holds every unordered pair in
    /// `0..=max_pip`.
    pub max_pip: u8,
    /// Tiles dealt to each seat before play starts.
    pub initial_hand_size: usize,
}

impl Default for MatchConfig {
    /// The standard double-six setup: 28 tiles, 7 per hand.
    fn default() -> Self {
        Self {
            max_pip: 6,
            initial_hand_size: 7,
        }
    }
}

/// Match lifecycle. Construction lands directly in `InProgress`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Over,
}

/// What one completed turn did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Placed straight from the hand.
    Played(Move),
    /// Could not move, drew until playable, then placed.
    DrewThenPlayed { drawn: usize, mv: Move },
    /// Drew until the boneyard gave out and still could not move: a full
    /// pass.
    DrewThenPassed { drawn: usize },
}

impl TurnOutcome {
    /// Tiles drawn this turn (0 for a direct play).
    #[must_use]
    pub fn tiles_drawn(&self) -> usize {
        match *self {
            TurnOutcome::Played(_) => 0,
            TurnOutcome::DrewThenPlayed { drawn, .. } | TurnOutcome::DrewThenPassed { drawn } => {
                drawn
            }
        }
    }

    /// The tile placed this turn, if any.
    #[must_use]
    pub fn placed(&self) -> Option<Tile> {
        match *self {
            TurnOutcome::Played(mv) | TurnOutcome::DrewThenPlayed { mv, .. } => Some(mv.tile),
            TurnOutcome::DrewThenPassed { .. } => None,
        }
    }
}

/// One multi-player domino match, from deal to final scores.
pub struct Match {
    board: Board,
    players: Vec<Box<dyn Player>>,
    turn: usize,
    consecutive_passes: usize,
    status: MatchStatus,
    rng: GameRng,
}

impl Match {
    /// Build the full tile set, pick a uniformly random starting seat, and
    /// deal `initial_hand_size` tiles to each seat in seat order.
    ///
    /// Fails with `DealExhausted` if dealing would draw from an exhausted
    /// boneyard, and `NoPlayers` for an empty table.
    pub fn new(
        players: Vec<Box<dyn Player>>,
        config: MatchConfig,
        mut rng: GameRng,
    ) -> Result<Self, DominoError> {
        if players.is_empty() {
            return Err(DominoError::NoPlayers);
        }

        let mut board = Board::with_tile_set(config.max_pip);
        let set_size = board.boneyard_len();
        let n = players.len();
        let turn = rng.gen_range_usize(0..n);

        let mut players = players;
        for seat in 0..n {
            for _ in 0..config.initial_hand_size {
                let tile = board
                    .draw_tile(&mut rng)
                    .ok_or(DominoError::DealExhausted {
                        players: n,
                        hand_size: config.initial_hand_size,
                        set_size,
                    })?;
                add_tile(players[seat].as_mut(), tile);
            }
        }

        debug!(
            "match set up: {n} players, {set_size}-tile set, {} per hand, seat {turn} starts",
            config.initial_hand_size
        );

        Ok(Self {
            board,
            players,
            turn,
            consecutive_passes: 0,
            status: MatchStatus::InProgress,
            rng,
        })
    }

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// The seat that acts next.
    #[must_use]
    pub fn current_seat(&self) -> PlayerId {
        PlayerId::new(self.turn as u8)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    /// Every hand, in seat order. Diagnostics and invariant checks.
    pub fn hands(&self) -> impl Iterator<Item = &[Tile]> {
        self.players.iter().map(|p| p.hand())
    }

    /// Current scores in seat order: each seat's hand pip-sum.
    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.players.iter().map(|p| hand_score(p.as_ref())).collect()
    }

    /// True once every seat has passed in a full round with no intervening
    /// placement, or any hand is empty.
    #[must_use]
    pub fn is_over(&self) -> bool {
        if self.consecutive_passes > self.players.len() {
            return true;
        }
        self.players.iter().any(|p| p.hand().is_empty())
    }

    /// Run one full turn: move-or-draw-or-pass, broadcast, advance.
    ///
    /// Returns `Ok(None)` without touching game state once the match is
    /// over. Errors surface only on strategy contract violations (an illegal
    /// proposed move, or a proposed tile missing from the hand).
    pub fn step(&mut self) -> Result<Option<TurnOutcome>, DominoError> {
        if self.is_over() {
            self.status = MatchStatus::Over;
            return Ok(None);
        }

        let seat = self.turn;
        let outcome = self.take_turn(seat)?;
        debug!("seat {seat}: {outcome:?}, board now {}", self.board);

        let drawn = outcome.tiles_drawn();
        let placed = outcome.placed();
        let seat_id = PlayerId::new(seat as u8);
        for player in self.players.iter_mut() {
            player.observe_turn(seat_id, drawn, placed);
        }

        self.turn = (self.turn + 1) % self.players.len();
        Ok(Some(outcome))
    }

    /// Drive the turn loop to termination and return the final scores, one
    /// per seat in seat order.
    pub fn play(&mut self) -> Result<Vec<u32>, DominoError> {
        while self.step()?.is_some() {}
        let scores = self.scores();
        debug!("match over: scores {scores:?}");
        Ok(scores)
    }

    fn take_turn(&mut self, seat: usize) -> Result<TurnOutcome, DominoError> {
        if let Some(mv) = self.players[seat].propose_move(&self.board) {
            self.apply_move(seat, mv)?;
            return Ok(TurnOutcome::Played(mv));
        }

        let drawn = self.board.draw(&mut self.rng);
        for &tile in drawn.iter() {
            add_tile(self.players[seat].as_mut(), tile);
        }

        match self.players[seat].propose_move(&self.board) {
            Some(mv) => {
                self.apply_move(seat, mv)?;
                Ok(TurnOutcome::DrewThenPlayed {
                    drawn: drawn.len(),
                    mv,
                })
            }
            None => {
                self.consecutive_passes += 1;
                Ok(TurnOutcome::DrewThenPassed { drawn: drawn.len() })
            }
        }
    }

    fn apply_move(&mut self, seat: usize, mv: Move) -> Result<(), DominoError> {
        // Legality first, so a rejected proposal leaves the hand untouched.
        if !self.board.can_place(mv.tile, mv.end) {
            return Err(DominoError::IllegalPlacement {
                tile: mv.tile,
                end: mv.end,
            });
        }
        remove_tile(self.players[seat].as_mut(), mv.tile)?;
        self.board.place(mv.tile, mv.end)?;
        self.consecutive_passes = 0;
        Ok(())
    }
}

impl fmt::Debug for Match {
    // Players are trait objects with no Debug bound; report the seat count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("board", &self.board)
            .field("player_count", &self.players.len())
            .field("turn", &self.turn)
            .field("consecutive_passes", &self.consecutive_passes)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board: {}", self.board)?;
        for (seat, player) in self.players.iter().enumerate() {
            writeln!(
                f,
                "  {}: {} tiles, score {}",
                PlayerId::new(seat as u8),
                player.hand().len(),
                hand_score(player.as_ref())
            )?;
        }
        write!(f, "Scores: {:?}, over: {}", self.scores(), self.is_over())
    }
}
