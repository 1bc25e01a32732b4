/*
tile_group.rs

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

//! Groups of tiles removed together: matched lines and special tile effects.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::TrackerError;
use crate::tile::Tile;

/// Join the tiles with a comma.
fn join(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

/// A line of matching tiles.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Tiles in the line, in board order.
    tiles: Vec<Tile>,
}

impl Line {
    /// Create a [`Line`] object from a copy of the given tiles.
    pub fn new(tiles: &[Tile]) -> Self {
        Self {
            tiles: tiles.to_vec(),
        }
    }

    /// Return the tiles of the line.
    pub fn get_tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Return the set of distinct tiles of the line.
    pub fn get_unique_tiles(&self) -> HashSet<Tile> {
        self.tiles.iter().copied().collect()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", join(&self.tiles))
    }
}

/// Tiles affected by a special tile, such as a rocket or a bomb explosion.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TileEffect {
    /// Special tile that caused the effect.
    cause_tile: Tile,

    /// Tiles affected by the effect.
    tiles: Vec<Tile>,
}

impl TileEffect {
    /// Create a [`TileEffect`] object from a copy of the given tiles.
    ///
    /// The cause tile usually comes from a board lookup, which is why it is optional here.
    ///
    /// # Errors
    ///
    /// Return [`TrackerError::MissingCauseTile`] if `cause_tile` is `None`.
    pub fn new(cause_tile: Option<Tile>, tiles: &[Tile]) -> Result<Self, TrackerError> {
        let cause_tile: Tile = cause_tile.ok_or(TrackerError::MissingCauseTile)?;
        Ok(Self {
            cause_tile,
            tiles: tiles.to_vec(),
        })
    }

    /// Return the tile that caused the effect.
    pub fn get_cause_tile(&self) -> Tile {
        self.cause_tile
    }

    /// Return the tiles affected by the effect.
    pub fn get_tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Return the set of distinct tiles affected by the effect.
    pub fn get_unique_tiles(&self) -> HashSet<Tile> {
        self.tiles.iter().copied().collect()
    }
}

impl fmt::Display for TileEffect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.tiles.is_empty() {
            write!(f, "{} => *Nothing*", self.cause_tile.get_type())
        } else {
            write!(f, "{} => {}", self.cause_tile.get_type(), join(&self.tiles))
        }
    }
}

/// Tiles removed together during a chain.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum TileGroup {
    Line(Line),
    Effect(TileEffect),
}

impl TileGroup {
    /// Return the set of tiles in the group.
    ///
    /// Several groups can share tiles (two crossing lines, or a bomb exploding a line), so
    /// callers merge these sets to avoid counting a tile twice.
    pub fn tiles(&self) -> HashSet<Tile> {
        match self {
            TileGroup::Line(l) => l.get_unique_tiles(),
            TileGroup::Effect(e) => e.get_unique_tiles(),
        }
    }

    /// Return the tiles of the group, in order.
    pub fn get_tiles(&self) -> &[Tile] {
        match self {
            TileGroup::Line(l) => l.get_tiles(),
            TileGroup::Effect(e) => e.get_tiles(),
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, TileGroup::Line(_))
    }

    pub fn is_effect(&self) -> bool {
        matches!(self, TileGroup::Effect(_))
    }
}

impl From<Line> for TileGroup {
    fn from(line: Line) -> Self {
        TileGroup::Line(line)
    }
}

impl From<TileEffect> for TileGroup {
    fn from(effect: TileEffect) -> Self {
        TileGroup::Effect(effect)
    }
}

impl fmt::Display for TileGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TileGroup::Line(l) => write!(f, "{l}"),
            TileGroup::Effect(e) => write!(f, "{e}"),
        }
    }
}
