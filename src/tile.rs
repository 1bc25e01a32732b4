/*
tile.rs

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

//! Board tiles as seen by the game logic.
//!
//! The board manager owns the graphical tiles. The tracker and the scoring code only need to
//! identify a tile, and to know its color and its type, so a [`Tile`] is a small copyable value.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Tile colors.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum TileColor {
    Blue,
    Green,
    Purple,
    Red,
    Yellow,
    Black,
    Brown,
    White,
}

/// Number of [`TileColor`] variants.
pub const NUM_COLORS: u8 = 8;

impl TileColor {
    /// Return a random color among the first `max` colors.
    ///
    /// Levels start with a few colors and add more as the game progresses, so `max` is clamped
    /// between 1 and [`NUM_COLORS`].
    pub fn get_random_color<R: Rng + ?Sized>(rng: &mut R, max: u8) -> TileColor {
        let max: u8 = max.clamp(1, NUM_COLORS);
        TileColor::from_repr(rng.random_range(0..max)).unwrap_or(TileColor::Blue)
    }
}

impl fmt::Display for TileColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TileColor::Blue => write!(f, "Blue"),
            TileColor::Green => write!(f, "Green"),
            TileColor::Purple => write!(f, "Purple"),
            TileColor::Red => write!(f, "Red"),
            TileColor::Yellow => write!(f, "Yellow"),
            TileColor::Black => write!(f, "Black"),
            TileColor::Brown => write!(f, "Brown"),
            TileColor::White => write!(f, "White"),
        }
    }
}

/// Tile types.
///
/// Apart from [`TileType::Normal`], all types are special tiles: items that trigger an effect
/// (rockets, bombs, stars, gravity) or score multipliers.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr, Default)]
#[repr(u8)]
pub enum TileType {
    #[default]
    Normal,
    Rocket,
    Bomb,
    Star,
    Gravity,
    X2,
    X3,
    X4,
}

impl TileType {
    /// Whether the tile is an item (a tile with an effect when it is removed).
    pub fn is_item(&self) -> bool {
        matches!(
            self,
            TileType::Rocket | TileType::Bomb | TileType::Star | TileType::Gravity
        )
    }

    /// Whether the tile is a score multiplier.
    pub fn is_multiplier(&self) -> bool {
        matches!(self, TileType::X2 | TileType::X3 | TileType::X4)
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TileType::Normal => write!(f, "Normal"),
            TileType::Rocket => write!(f, "Rocket"),
            TileType::Bomb => write!(f, "Bomb"),
            TileType::Star => write!(f, "Star"),
            TileType::Gravity => write!(f, "Gravity"),
            TileType::X2 => write!(f, "X2"),
            TileType::X3 => write!(f, "X3"),
            TileType::X4 => write!(f, "X4"),
        }
    }
}

/// A board tile.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Identifier of the tile, unique for the board.
    pub id: usize,

    /// Color of the tile.
    pub color: TileColor,

    /// Type of the tile.
    pub tile_type: TileType,
}

impl Tile {
    /// Create a [`Tile`] object of type [`TileType::Normal`].
    pub fn new(id: usize, color: TileColor) -> Self {
        Self {
            id,
            color,
            tile_type: TileType::Normal,
        }
    }

    /// Create a special [`Tile`] object.
    pub fn with_type(id: usize, color: TileColor, tile_type: TileType) -> Self {
        Self {
            id,
            color,
            tile_type,
        }
    }

    /// Return the tile type.
    pub fn get_type(&self) -> TileType {
        self.tile_type
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.tile_type {
            TileType::Normal => write!(f, "{}#{}", self.color, self.id),
            t => write!(f, "{} {}#{}", self.color, t, self.id),
        }
    }
}
