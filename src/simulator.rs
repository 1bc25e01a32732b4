/*
simulator.rs

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

//! Play random moves to tune the difficulty levels.
//!
//! The simulator does not model the board geometry. It only tracks the number of tiles on the
//! board: placing a piece adds tiles, random lines and special tile effects remove tiles, and the
//! difficulty strategy decides how many tiles drop in after each move.
//! The moves go through a [`Game`] object, so they are recorded and scored as in a real game.

use chrono::Local;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use crate::config::{BOARD_COLUMNS, BOARD_ROWS, DEFAULT_NUMBER_OF_COLORS, MAX_PIECE_SIZE};
use crate::difficulty::Difficulty;
use crate::game::{Game, calculate_chain_points};
use crate::tile::{NUM_COLORS, Tile, TileColor, TileType};
use crate::tracker::Tracker;
use crate::tracker::chain::Chain;
use crate::tracker::game_move::Move;
use crate::tracker::statistics::Statistic;

/// Probability for a line tile to be a special tile.
const SPECIAL_TILE_PROBABILITY: f64 = 0.1;

/// Maximum number of cascades for a move.
const MAX_CHAINS: u32 = 3;

/// Summary of a simulated game.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SimulationReport {
    /// Generation timestamp, in RFC 3339 format.
    pub generated: String,

    /// Seed of the random generator. Use it to replay the same game.
    pub seed: u64,

    pub difficulty: Difficulty,

    /// Number of moves played.
    pub moves: usize,

    /// Whether the board filled up before all the moves were played.
    pub game_over: bool,

    /// Level reached.
    pub level: i32,

    /// Statistics over all the moves.
    pub statistics: BTreeMap<Statistic, i64>,

    /// Number of tiles dropped after each move.
    pub drops: Vec<i32>,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "difficulty = {}", self.difficulty)?;
        writeln!(f, "      seed = {}", self.seed)?;
        writeln!(f, "     moves = {}", self.moves)?;
        writeln!(f, " game over = {}", self.game_over)?;
        writeln!(f, "     level = {}", self.level)?;
        for stat in Statistic::ALL {
            let value: i64 = self.statistics.get(&stat).copied().unwrap_or(0);
            writeln!(f, "{stat:>10} = {value}")?;
        }
        let total: i64 = self.drops.iter().map(|d| *d as i64).sum();
        if !self.drops.is_empty() {
            writeln!(
                f,
                "  avg drop = {:.2}",
                total as f64 / self.drops.len() as f64
            )?;
        }
        Ok(())
    }
}

/// Random game player.
pub struct Simulator {
    /// Random generator.
    rng: StdRng,

    /// Seed used to initialize the random generator.
    seed: u64,

    /// Game session receiving the moves.
    game: Game,

    /// Number of tiles on the board.
    number_of_tiles: i32,

    /// Board capacity.
    number_of_cells: i32,

    /// Number of tile colors in play.
    number_of_colors: u8,

    /// Identifier of the next tile to create.
    next_tile_id: usize,

    /// Number of tiles dropped after each move.
    drops: Vec<i32>,
}

impl Simulator {
    /// Create a [`Simulator`] object.
    ///
    /// When `seed` is `None`, a random seed is chosen.
    pub fn new(difficulty: Difficulty, seed: Option<u64>) -> Self {
        let seed: u64 = seed.unwrap_or_else(|| rand::rng().random());
        let number_of_cells: i32 = BOARD_COLUMNS * BOARD_ROWS;
        debug!("Simulating a {difficulty} game with seed {seed}");

        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            game: Game::new(difficulty),
            number_of_tiles: number_of_cells / 2,
            number_of_cells,
            number_of_colors: DEFAULT_NUMBER_OF_COLORS,
            next_tile_id: 0,
            drops: Vec::new(),
        }
    }

    /// Return the game session.
    pub fn get_game(&self) -> &Game {
        &self.game
    }

    /// Return the number of tiles on the board.
    pub fn get_number_of_tiles(&self) -> i32 {
        self.number_of_tiles
    }

    /// Whether the board is full.
    pub fn is_game_over(&self) -> bool {
        self.number_of_tiles >= self.number_of_cells
    }

    /// Create a tile, which is sometimes a special tile.
    fn new_tile(&mut self, color: TileColor) -> Tile {
        let id: usize = self.next_tile_id;
        self.next_tile_id += 1;

        if self.rng.random_bool(SPECIAL_TILE_PROBABILITY) {
            let tile_type: TileType =
                TileType::from_repr(self.rng.random_range(1..=7)).unwrap_or_default();
            Tile::with_type(id, color, tile_type)
        } else {
            Tile::new(id, color)
        }
    }

    /// Record one cascade in the game: one or two lines, plus the effects of their items.
    fn play_chain(&mut self) -> Result<Chain, Box<dyn Error>> {
        let num_lines: u32 = self.rng.random_range(1..=2);

        for _ in 0..num_lines {
            let color: TileColor =
                TileColor::get_random_color(&mut self.rng, self.number_of_colors);
            let len: usize = self.rng.random_range(3..=5);
            let tiles: Vec<Tile> = (0..len).map(|_| self.new_tile(color)).collect();
            self.game.record_line(&tiles);

            for item in tiles.iter().filter(|t| t.get_type().is_item()) {
                // Gravity tiles shift the board without removing anything
                let affected: usize = match item.get_type() {
                    TileType::Gravity => 0,
                    _ => self.rng.random_range(1..=4),
                };
                let other: TileColor =
                    TileColor::get_random_color(&mut self.rng, self.number_of_colors);
                let blast: Vec<Tile> = (0..affected).map(|_| self.new_tile(other)).collect();
                self.game.record_effect(Some(*item), &blast)?;
            }
        }
        Ok(self.game.finish_chain())
    }

    /// Place a random piece, play the cascades, and drop new tiles.
    ///
    /// # Errors
    ///
    /// The method returns an error when the difficulty strategy cannot compute the drop amount.
    pub fn play_move(&mut self) -> Result<Move, Box<dyn Error>> {
        let piece_size: i32 = self.rng.random_range(1..=MAX_PIECE_SIZE);
        self.number_of_tiles = (self.number_of_tiles + piece_size).min(self.number_of_cells);

        let num_chains: u32 = if self.number_of_tiles >= 3 {
            self.rng.random_range(0..=MAX_CHAINS)
        } else {
            0
        };

        let mut raw_score: i64 = 0;
        for chain_count in 1..=num_chains {
            let chain: Chain = self.play_chain()?;
            raw_score += calculate_chain_points(&chain, chain_count as i64);
            let removed: i32 = chain.get_tiles().len() as i32;
            self.number_of_tiles = (self.number_of_tiles - removed).max(0);
        }
        let m: Move = self.game.commit_move(raw_score);

        let drop: i32 =
            self.game
                .get_drop_amount(self.number_of_tiles, self.number_of_cells, piece_size)?;
        self.number_of_tiles = (self.number_of_tiles + drop).min(self.number_of_cells);
        self.drops.push(drop);

        // Add a color every few levels, as the board manager does
        let colors: u8 = DEFAULT_NUMBER_OF_COLORS + (self.game.get_level() / 4) as u8;
        self.number_of_colors = colors.min(NUM_COLORS);

        debug!(
            "Move {}: {} chain(s), {} tile(s) dropped, {} tile(s) on the board",
            self.game.get_tracker().history_len(),
            m.len(),
            drop,
            self.number_of_tiles
        );
        Ok(m)
    }

    /// Play up to `moves` moves and return the report. The simulation stops when the board is
    /// full.
    ///
    /// # Errors
    ///
    /// See [`Simulator::play_move`].
    pub fn run(&mut self, moves: usize) -> Result<SimulationReport, Box<dyn Error>> {
        for _ in 0..moves {
            if self.is_game_over() {
                break;
            }
            self.play_move()?;
        }
        Ok(self.report())
    }

    /// Build the report for the moves played so far.
    pub fn report(&self) -> SimulationReport {
        let tracker: &Tracker = self.game.get_tracker();
        SimulationReport {
            generated: Local::now().to_rfc3339(),
            seed: self.seed,
            difficulty: self.game.get_difficulty(),
            moves: tracker.history_len(),
            game_over: self.is_game_over(),
            level: self.game.get_level(),
            statistics: Tracker::get_counts(tracker.get_history())
                .into_iter()
                .collect(),
            drops: self.drops.clone(),
        }
    }
}
