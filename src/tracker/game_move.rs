/*
game_move.rs

Copyright 2025 Hervé Quatremain

This file is part of Wezzle.

Wezzle is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wezzle is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wezzle. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Everything that happened after a single player action.
//!
//! A move is a list of chains (cascades), a chain is a list of tile groups, and a tile group is a
//! list of tiles.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::chain::Chain;
use crate::tile::Tile;

/// Move object.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Move {
    /// Cascades triggered by the player action.
    chains: Vec<Chain>,

    /// Points earned by the move.
    score: i64,
}

impl Move {
    /// Create a [`Move`] object from a copy of the given chains.
    pub fn new(chains: &[Chain]) -> Self {
        Self::with_score(chains, 0)
    }

    /// Create a [`Move`] object that records the points earned.
    pub fn with_score(chains: &[Chain], score: i64) -> Self {
        Self {
            chains: chains.to_vec(),
            score,
        }
    }

    /// Return the chains.
    pub fn get_chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Return the points earned by the move.
    pub fn get_score(&self) -> i64 {
        self.score
    }

    /// Return the number of chains.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether the move did not remove anything.
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Return the set of all the tiles removed by the move.
    pub fn get_tile_set(&self) -> HashSet<Tile> {
        let mut tiles: HashSet<Tile> = HashSet::new();
        for chain in &self.chains {
            tiles.extend(chain.get_tiles());
        }
        tiles
    }

    /// Return the number of tile groups in the move.
    ///
    /// Tile effects count as lines.
    pub fn get_num_lines(&self) -> usize {
        self.chains.iter().map(|c| c.len()).sum()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, chain) in self.chains.iter().enumerate() {
            write!(f, "(Chain {})\n{chain}", i + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileColor;
    use crate::tracker::tile_group::{Line, TileGroup};

    fn chain(first_id: usize, groups: usize) -> Chain {
        let groups: Vec<TileGroup> = (0..groups)
            .map(|g| {
                let base: usize = first_id + g * 3;
                Line::new(&[
                    Tile::new(base, TileColor::Purple),
                    Tile::new(base + 1, TileColor::Purple),
                    Tile::new(base + 2, TileColor::Purple),
                ])
                .into()
            })
            .collect();
        Chain::new(&groups)
    }

    #[test]
    fn counts_lines_and_tiles() {
        let m = Move::with_score(&[chain(0, 2), chain(100, 1)], 250);
        assert_eq!(m.len(), 2);
        assert_eq!(m.get_num_lines(), 3);
        assert_eq!(m.get_tile_set().len(), 9);
        assert_eq!(m.get_score(), 250);
    }

    #[test]
    fn empty_move() {
        let m = Move::new(&[]);
        assert!(m.is_empty());
        assert_eq!(m.get_num_lines(), 0);
        assert_eq!(m.to_string(), "");
    }

    #[test]
    fn move_display_numbers_chains() {
        let m = Move::new(&[chain(0, 1), chain(10, 1)]);
        assert_eq!(
            m.to_string(),
            "(Chain 1)\n  (Line 1) [ Purple#0, Purple#1, Purple#2 ]\n\
             (Chain 2)\n  (Line 1) [ Purple#10, Purple#11, Purple#12 ]\n"
        );
    }
}
