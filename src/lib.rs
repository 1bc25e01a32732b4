/*
lib.rs

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

//! Game logic of Wezzle, a tile-matching puzzle game.
//!
//! * [`tracker`] records what each player move removed from the board, for scoring and
//!   achievements.
//! * [`difficulty`] computes the values that depend on the difficulty level: tile drop amounts,
//!   time limits, and score multipliers.
//! * [`game`] ties both together for a game session.
//! * [`simulator`] plays random games, for tuning the difficulty levels.

pub mod cli_options;
pub mod config;
pub mod difficulty;
pub mod game;
pub mod simulator;
pub mod tile;
pub mod tracker;
