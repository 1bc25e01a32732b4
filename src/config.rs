/*
config.rs

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

//! Build and game constants.

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Board dimensions.
pub const BOARD_COLUMNS: i32 = 8;
pub const BOARD_ROWS: i32 = 10;

/// Number of tile colors at the start of a game.
pub const DEFAULT_NUMBER_OF_COLORS: u8 = 5;

/// Largest piece the player can place.
pub const MAX_PIECE_SIZE: i32 = 3;

/// Points for each tile of a line.
pub const POINTS_PER_LINE_TILE: i64 = 50;

/// Points needed to complete a level, per level number.
pub const LEVEL_TARGET_STEP: i64 = 1200;
