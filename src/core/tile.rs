//! Domino tiles and full-set generation.
//!
//! A tile is an unordered pair of pip values. Construction canonicalizes the
//! pair so `(i, j)` and `(j, i)` are the same entity: `lo <= hi` always holds
//! and equality/hashing work on the canonical pair.

use serde::{Deserialize, Serialize};

/// A domino tile: two pip values in canonical order (`lo <= hi`).
///
/// Immutable after construction. The set a tile belongs to is bounded by the
/// configured maximum pip value, so `u8` pips cover every supported variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    lo: u8,
    hi: u8,
}

impl Tile {
    /// Create a tile from two pip values in either order.
    #[must_use]
    pub fn new(i: u8, j: u8) -> Self {
        if i <= j {
            Self { lo: i, hi: j }
        } else {
            Self { lo: j, hi: i }
        }
    }

    /// The smaller side.
    #[must_use]
    pub const fn lo(self) -> u8 {
        self.lo
    }

    /// The larger side.
    #[must_use]
    pub const fn hi(self) -> u8 {
        self.hi
    }

    /// Both sides as `(lo, hi)`.
    #[must_use]
    pub const fn pips(self) -> (u8, u8) {
        (self.lo, self.hi)
    }

    /// True when both sides are equal.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.lo == self.hi
    }

    /// Sum of both sides. A hand's score is the sum of these.
    #[must_use]
    pub const fn pip_sum(self) -> u32 {
        self.lo as u32 + self.hi as u32
    }

    /// Does either side show `value`?
    #[must_use]
    pub const fn has(self, value: u8) -> bool {
        self.lo == value || self.hi == value
    }

    /// The side opposite `value`, or `None` if `value` is not on this tile.
    ///
    /// For a double the opposite side is the same value.
    #[must_use]
    pub fn other_side(self, value: u8) -> Option<u8> {
        if self.lo == value {
            Some(self.hi)
        } else if self.hi == value {
            Some(self.lo)
        } else {
            None
        }
    }

    /// The full double set for `max_pip`: every unordered pair in
    /// `0..=max_pip`, each exactly once.
    ///
    /// Yields `(max_pip + 1)(max_pip + 2) / 2` tiles; `max_pip = 6` is the
    /// standard 28-tile double-six set.
    #[must_use]
    pub fn full_set(max_pip: u8) -> Vec<Tile> {
        let mut set = Vec::with_capacity((max_pip as usize + 1) * (max_pip as usize + 2) / 2);
        for a in 0..=max_pip {
            for b in a..=max_pip {
                set.push(Tile::new(a, b));
            }
        }
        set
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.lo, self.hi)
    }
}
