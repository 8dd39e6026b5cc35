//! Board state: placed tiles, the boneyard, and the two open ends.
//!
//! The board tracks the chain of placed tiles as two mutable end slots rather
//! than walking the chain, which keeps legality checks and placement O(1)
//! past the O(hand × 2) scan for move enumeration. Ends are `None` until the
//! first tile lands; that first tile establishes both slots from its own two
//! sides, and every later placement overwrites exactly one slot with the
//! placed tile's non-matching side.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::DominoError;
use super::rng::GameRng;
use super::tile::Tile;

/// A proposed placement: the tile, and the open end VALUE it attaches to.
///
/// Transient intent between a player and the match; never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub tile: Tile,
    pub end: u8,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on end {}", self.tile, self.end)
    }
}

/// Tiles pulled in one draw-until-playable pass. Usually short.
pub type DrawnTiles = SmallVec<[Tile; 8]>;

/// Placed tiles, boneyard, and the two exposed end values.
///
/// Across a whole match the placed tiles, the boneyard, and the player hands
/// partition the full tile set; the board enforces its share of that by
/// refusing duplicate placements and only shrinking the boneyard via draws.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    /// Placed tiles, append-only, insertion order = play order.
    tiles: Vec<Tile>,
    /// Undrawn tiles. Unordered; draws remove a uniformly random element.
    boneyard: Vec<Tile>,
    /// `None` until the first placement.
    ends: Option<[u8; 2]>,
}

impl Board {
    /// An empty board with an empty boneyard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty board whose boneyard holds the full double set for `max_pip`.
    #[must_use]
    pub fn with_tile_set(max_pip: u8) -> Self {
        Self {
            tiles: Vec::new(),
            boneyard: Tile::full_set(max_pip),
            ends: None,
        }
    }

    /// Placed tiles in play order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Undrawn tiles. Exposed for diagnostics and invariant checks; order is
    /// not meaningful.
    #[must_use]
    pub fn boneyard(&self) -> &[Tile] {
        &self.boneyard
    }

    #[must_use]
    pub fn boneyard_len(&self) -> usize {
        self.boneyard.len()
    }

    /// The two exposed end values, or `None` before the first placement.
    #[must_use]
    pub fn ends(&self) -> Option<[u8; 2]> {
        self.ends
    }

    /// True before the first placement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Which end slot currently equals `end`, if any.
    #[must_use]
    pub fn matching_end(&self, end: u8) -> Option<usize> {
        let ends = self.ends?;
        if ends[0] == end {
            Some(0)
        } else if ends[1] == end {
            Some(1)
        } else {
            None
        }
    }

    /// Can `tile` be placed on the end showing `end`?
    ///
    /// An empty board accepts any tile at any end (the first placement
    /// establishes both ends). Otherwise `end` must be a side of the tile,
    /// the tile must not already be placed, and `end` must be one of the two
    /// open end values.
    #[must_use]
    pub fn can_place(&self, tile: Tile, end: u8) -> bool {
        let Some(ends) = self.ends else {
            return true;
        };
        if !tile.has(end) {
            return false;
        }
        if self.tiles.contains(&tile) {
            return false;
        }
        ends[0] == end || ends[1] == end
    }

    /// Does either open end accept `tile`?
    #[must_use]
    pub fn can_place_anywhere(&self, tile: Tile) -> bool {
        match self.ends {
            None => true,
            Some(ends) => self.can_place(tile, ends[0]) || self.can_place(tile, ends[1]),
        }
    }

    /// Every legal `Move` for `hand` against the current ends.
    ///
    /// Deterministic order: hand order outer, end-slot order inner. When both
    /// ends expose the same pip a matching tile appears once per slot. On an
    /// empty board any tile opens, so each hand tile yields a single move.
    #[must_use]
    pub fn valid_moves(&self, hand: &[Tile]) -> Vec<Move> {
        let Some(ends) = self.ends else {
            return hand
                .iter()
                .map(|&tile| Move {
                    tile,
                    end: tile.lo(),
                })
                .collect();
        };

        let mut valid = Vec::new();
        for &tile in hand {
            for &end in &ends {
                if self.can_place(tile, end) {
                    valid.push(Move { tile, end });
                }
            }
        }
        valid
    }

    /// Place `tile` on the end showing `end`.
    ///
    /// The first placement sets both ends from the tile's two sides. Every
    /// later placement overwrites the matching end slot with the tile's other
    /// side and appends the tile to the play order. Fails with
    /// `IllegalPlacement` without mutating anything if `can_place` is false.
    pub fn place(&mut self, tile: Tile, end: u8) -> Result<(), DominoError> {
        if !self.can_place(tile, end) {
            return Err(DominoError::IllegalPlacement { tile, end });
        }

        match self.ends {
            None => self.ends = Some([tile.lo(), tile.hi()]),
            Some(mut ends) => {
                // Both lookups are guaranteed by the can_place check above.
                let slot = self
                    .matching_end(end)
                    .ok_or(DominoError::IllegalPlacement { tile, end })?;
                let other = tile
                    .other_side(end)
                    .ok_or(DominoError::IllegalPlacement { tile, end })?;
                ends[slot] = other;
                self.ends = Some(ends);
            }
        }

        self.tiles.push(tile);
        Ok(())
    }

    /// Replace the boneyard wholesale, for seeding specific draw scenarios.
    #[cfg(test)]
    pub(crate) fn set_boneyard(&mut self, tiles: Vec<Tile>) {
        self.boneyard = tiles;
    }

    /// Remove one uniformly random tile from the boneyard.
    pub(crate) fn draw_tile(&mut self, rng: &mut GameRng) -> Option<Tile> {
        if self.boneyard.is_empty() {
            return None;
        }
        let i = rng.gen_range_usize(0..self.boneyard.len());
        Some(self.boneyard.swap_remove(i))
    }

    /// Draw from the boneyard until a drawn tile is playable or the boneyard
    /// is empty.
    ///
    /// Every drawn tile, including the final playable one if reached, is
    /// removed from the boneyard and returned; the caller hands them all to
    /// the drawing player. An already-empty boneyard yields an empty result.
    pub fn draw(&mut self, rng: &mut GameRng) -> DrawnTiles {
        let mut drawn = DrawnTiles::new();
        while let Some(tile) = self.draw_tile(rng) {
            drawn.push(tile);
            if self.can_place_anywhere(tile) {
                break;
            }
        }
        drawn
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.ends {
            None => write!(f, "empty board, {} in boneyard", self.boneyard.len()),
            Some([a, b]) => write!(
                f,
                "ends [{a} {b}], {} placed, {} in boneyard",
                self.tiles.len(),
                self.boneyard.len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_board_accepts_anything() {
        let board = Board::new();
        for i in 0..=6 {
            for j in i..=6 {
                assert!(board.can_place(Tile::new(i, j), 0));
                assert!(board.can_place(Tile::new(i, j), 6));
                assert!(board.can_place_anywhere(Tile::new(i, j)));
            }
        }
    }

    #[test]
    fn test_first_placement_sets_both_ends() {
        let mut board = Board::new();
        board.place(Tile::new(2, 5), 2).unwrap();
        assert_eq!(board.ends(), Some([2, 5]));
        assert_eq!(board.tiles(), &[Tile::new(2, 5)]);
        assert!(!board.is_empty());
    }

    #[test]
    fn test_placement_overwrites_matching_end() {
        let mut board = Board::new();
        board.place(Tile::new(2, 5), 2).unwrap();
        board.place(Tile::new(5, 6), 5).unwrap();
        assert_eq!(board.ends(), Some([2, 6]));

        board.place(Tile::new(2, 2), 2).unwrap();
        assert_eq!(board.ends(), Some([2, 6]));

        board.place(Tile::new(0, 6), 6).unwrap();
        assert_eq!(board.ends(), Some([2, 0]));
    }

    #[test]
    fn test_double_zero_opening_scenario() {
        let mut board = Board::new();
        board.place(Tile::new(0, 0), 0).unwrap();
        assert_eq!(board.ends(), Some([0, 0]));

        assert!(board.can_place(Tile::new(0, 3), 0));
        assert!(!board.can_place(Tile::new(1, 3), 0));
        assert!(!board.can_place(Tile::new(0, 0), 0));
    }

    #[test]
    fn test_placed_tile_is_never_placeable_again() {
        let mut board = Board::new();
        board.place(Tile::new(3, 3), 3).unwrap();
        board.place(Tile::new(3, 4), 3).unwrap();

        for end in 0..=6 {
            assert!(!board.can_place(Tile::new(3, 4), end));
            assert!(!board.can_place(Tile::new(3, 3), end));
        }
    }

    #[test]
    fn test_matching_end() {
        let mut board = Board::new();
        assert_eq!(board.matching_end(0), None);

        board.place(Tile::new(1, 4), 1).unwrap();
        assert_eq!(board.matching_end(1), Some(0));
        assert_eq!(board.matching_end(4), Some(1));
        assert_eq!(board.matching_end(2), None);
    }

    #[test]
    fn test_illegal_place_leaves_board_untouched() {
        let mut board = Board::new();
        board.place(Tile::new(2, 5), 2).unwrap();

        let before_tiles = board.tiles().to_vec();
        let before_ends = board.ends();

        let err = board.place(Tile::new(1, 3), 2).unwrap_err();
        assert_eq!(
            err,
            DominoError::IllegalPlacement {
                tile: Tile::new(1, 3),
                end: 2
            }
        );
        assert_eq!(board.tiles(), &before_tiles[..]);
        assert_eq!(board.ends(), before_ends);
    }

    #[test]
    fn test_valid_moves_on_empty_board() {
        let board = Board::new();
        let hand = vec![Tile::new(1, 2), Tile::new(3, 3)];
        let moves = board.valid_moves(&hand);
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].tile, Tile::new(1, 2));
        assert_eq!(moves[1].tile, Tile::new(3, 3));
        for mv in moves {
            assert!(board.can_place(mv.tile, mv.end));
        }
    }

    #[test]
    fn test_valid_moves_order_is_deterministic() {
        let mut board = Board::new();
        board.place(Tile::new(2, 5), 2).unwrap();

        let hand = vec![Tile::new(5, 6), Tile::new(2, 2), Tile::new(1, 1)];
        let moves = board.valid_moves(&hand);
        assert_eq!(
            moves,
            vec![
                Move {
                    tile: Tile::new(5, 6),
                    end: 5
                },
                Move {
                    tile: Tile::new(2, 2),
                    end: 2
                },
            ]
        );
    }

    #[test]
    fn test_valid_moves_reports_equal_ends_per_slot() {
        let mut board = Board::new();
        board.place(Tile::new(4, 4), 4).unwrap();

        let hand = vec![Tile::new(4, 6)];
        let moves = board.valid_moves(&hand);
        // Both end slots expose 4, so the cross product lists the tile twice.
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0], moves[1]);
    }

    #[test]
    fn test_draw_from_empty_boneyard() {
        let mut board = Board::new();
        let mut rng = GameRng::new(7);
        assert!(board.draw(&mut rng).is_empty());
    }

    #[test]
    fn test_draw_on_empty_board_stops_after_one() {
        // Any tile opens an empty board, so the first draw is playable.
        let mut board = Board::with_tile_set(6);
        let mut rng = GameRng::new(7);
        let drawn = board.draw(&mut rng);
        assert_eq!(drawn.len(), 1);
        assert_eq!(board.boneyard_len(), 27);
        assert!(board.can_place_anywhere(drawn[0]));
    }

    #[test]
    fn test_draw_stops_at_first_playable() {
        let mut board = Board::new();
        board.place(Tile::new(0, 0), 0).unwrap();
        board.boneyard = vec![Tile::new(0, 5)];

        let mut rng = GameRng::new(7);
        let drawn = board.draw(&mut rng);
        assert_eq!(drawn.as_slice(), &[Tile::new(0, 5)]);
        assert_eq!(board.boneyard_len(), 0);
    }

    #[test]
    fn test_draw_exhausts_unplayable_boneyard() {
        let mut board = Board::new();
        board.place(Tile::new(0, 0), 0).unwrap();
        board.boneyard = vec![Tile::new(1, 2), Tile::new(3, 4), Tile::new(5, 6)];

        let mut rng = GameRng::new(7);
        let drawn = board.draw(&mut rng);
        assert_eq!(drawn.len(), 3);
        assert_eq!(board.boneyard_len(), 0);
        for tile in &drawn {
            assert!(!board.can_place_anywhere(*tile));
        }
    }

    #[test]
    fn test_with_tile_set_counts() {
        assert_eq!(Board::with_tile_set(6).boneyard_len(), 28);
        assert_eq!(Board::with_tile_set(0).boneyard_len(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut board = Board::with_tile_set(2);
        let mut rng = GameRng::new(3);
        let drawn = board.draw(&mut rng);
        board.place(drawn[drawn.len() - 1], drawn[drawn.len() - 1].lo()).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tiles(), board.tiles());
        assert_eq!(back.ends(), board.ends());
        assert_eq!(back.boneyard_len(), board.boneyard_len());
    }

    proptest! {
        /// Ends only ever expose pip values belonging to placed tiles, and
        /// draws never return more tiles than the boneyard held.
        #[test]
        fn prop_ends_come_from_placed_tiles(seed in any::<u64>()) {
            let mut rng = GameRng::new(seed);
            let mut board = Board::with_tile_set(6);

            loop {
                let before = board.boneyard_len();
                let drawn = board.draw(&mut rng);
                prop_assert!(drawn.len() <= before);
                prop_assert_eq!(board.boneyard_len(), before - drawn.len());

                let Some(&tile) = drawn.last() else { break };
                if !board.can_place_anywhere(tile) {
                    break;
                }

                let end = match board.ends() {
                    None => tile.lo(),
                    Some(ends) if board.can_place(tile, ends[0]) => ends[0],
                    Some(ends) => ends[1],
                };
                board.place(tile, end).unwrap();

                let ends = board.ends().unwrap();
                for end in ends {
                    prop_assert!(board.tiles().iter().any(|t| t.has(end)));
                }
            }
        }
    }
}
