/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Game`] object lives for one game session. It owns the move [`Tracker`] and the selected
//! [`Difficulty`], and keeps the level and the score.

use log::debug;

use crate::config::{LEVEL_TARGET_STEP, POINTS_PER_LINE_TILE};
use crate::difficulty::refactor_speed::RefactorSpeed;
use crate::difficulty::{Difficulty, DifficultyError, DifficultyStrategy};
use crate::tile::{Tile, TileType};
use crate::tracker::chain::Chain;
use crate::tracker::game_move::Move;
use crate::tracker::tile_group::{Line, TileEffect, TileGroup};
use crate::tracker::{Tracker, TrackerError};

/// Return the points for removing the given number of tiles in one chain.
///
/// Up to four tiles, each tile is worth [`POINTS_PER_LINE_TILE`]. Every additional tile is
/// worth one more [`POINTS_PER_LINE_TILE`] than the previous one.
pub fn calculate_line_points(num_tiles: usize) -> i64 {
    if num_tiles <= 4 {
        return num_tiles as i64 * POINTS_PER_LINE_TILE;
    }
    let mut points: i64 = 4 * POINTS_PER_LINE_TILE;
    for i in 0..(num_tiles as i64 - 4) {
        points += (i + 2) * POINTS_PER_LINE_TILE;
    }
    points
}

/// Return the points of a chain, before the difficulty modifier.
///
/// Each multiplier tile in the chain multiplies the points (x2, x3, or x4), and the result is
/// multiplied by the position of the chain in the move (`chain_count` starts at 1).
pub fn calculate_chain_points(chain: &Chain, chain_count: i64) -> i64 {
    let tiles = chain.get_tiles();
    let mut points: i64 = calculate_line_points(tiles.len());

    for tile in &tiles {
        match tile.get_type() {
            TileType::X2 => points *= 2,
            TileType::X3 => points *= 3,
            TileType::X4 => points *= 4,
            _ => (),
        }
    }
    points * chain_count
}

/// Return the points needed to complete the given level.
pub fn generate_target_level_score(level: i32) -> i64 {
    level.max(1) as i64 * LEVEL_TARGET_STEP
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Difficulty selected when the game started.
    difficulty: Difficulty,

    /// Move history.
    tracker: Tracker,

    /// Current level, starting at 1.
    level: i32,

    /// Points earned in the current level.
    level_score: i64,

    /// Points earned since the game started.
    total_score: i64,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl Game {
    /// Create a [`Game`] object.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            tracker: Tracker::new(),
            level: 1,
            level_score: 0,
            total_score: 0,
        }
    }

    pub fn get_difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn strategy(&self) -> &'static dyn DifficultyStrategy {
        self.difficulty.get_strategy()
    }

    /// Return the move recorder.
    pub fn get_tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn get_level(&self) -> i32 {
        self.level
    }

    pub fn get_level_score(&self) -> i64 {
        self.level_score
    }

    pub fn get_total_score(&self) -> i64 {
        self.total_score
    }

    /// Move to the next level.
    pub fn level_up(&mut self) {
        self.level += 1;
        self.level_score = 0;
        debug!("Level up: {}", self.level);
    }

    /// Record a line of matching tiles in the current chain.
    pub fn record_line(&mut self, tiles: &[Tile]) {
        self.tracker.record(&[TileGroup::Line(Line::new(tiles))]);
    }

    /// Record the tiles affected by a special tile in the current chain.
    ///
    /// # Errors
    ///
    /// Return [`TrackerError::MissingCauseTile`] if `cause_tile` is `None`.
    pub fn record_effect(
        &mut self,
        cause_tile: Option<Tile>,
        tiles: &[Tile],
    ) -> Result<(), TrackerError> {
        let effect: TileEffect = TileEffect::new(cause_tile, tiles)?;
        self.tracker.record(&[TileGroup::Effect(effect)]);
        Ok(())
    }

    /// Close the current chain. See [`Tracker::finish_chain`].
    pub fn finish_chain(&mut self) -> Chain {
        self.tracker.finish_chain()
    }

    /// Close the current move.
    ///
    /// The difficulty score modifier is applied to `raw_score`. The resulting points are stored
    /// in the move and added to the score. The level increases when the level target is reached.
    pub fn commit_move(&mut self, raw_score: i64) -> Move {
        let score: i64 = self.strategy().get_score_modifier().apply(raw_score);
        let m: Move = self.tracker.complete_move_with_score(score);

        self.total_score += score;
        self.level_score += score;
        while self.level_score >= generate_target_level_score(self.level) {
            let carry: i64 = self.level_score - generate_target_level_score(self.level);
            self.level_up();
            self.level_score = carry;
        }
        m
    }

    /// Return the number of tiles to drop onto the board for the current level.
    ///
    /// # Errors
    ///
    /// See [`DifficultyStrategy::get_drop_amount`].
    pub fn get_drop_amount(
        &self,
        number_of_tiles: i32,
        number_of_cells: i32,
        piece_size: i32,
    ) -> Result<i32, DifficultyError> {
        self.strategy()
            .get_drop_amount(number_of_tiles, number_of_cells, self.level, piece_size)
    }

    /// Return the move time limit for the current level, in milliseconds.
    pub fn get_time_limit(&self) -> i32 {
        self.strategy().determine_time_for_level(self.level)
    }

    pub fn get_refactor_speed(&self) -> RefactorSpeed {
        self.strategy().get_refactor_speed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileColor;

    fn row(first_id: usize, len: usize) -> Vec<Tile> {
        (first_id..first_id + len)
            .map(|i| Tile::new(i, TileColor::Green))
            .collect()
    }

    #[test]
    fn line_points() {
        assert_eq!(calculate_line_points(3), 150);
        assert_eq!(calculate_line_points(4), 200);
        // 200 + 100
        assert_eq!(calculate_line_points(5), 300);
        // 200 + 100 + 150
        assert_eq!(calculate_line_points(6), 450);
    }

    #[test]
    fn chain_points_with_multiplier() {
        let mut tiles: Vec<Tile> = row(0, 2);
        tiles.push(Tile::with_type(2, TileColor::Green, TileType::X3));
        let chain = Chain::new(&[Line::new(&tiles).into()]);
        assert_eq!(calculate_chain_points(&chain, 1), 450);
        assert_eq!(calculate_chain_points(&chain, 2), 900);
    }

    #[test]
    fn hard_game_doubles_points() {
        let mut game = Game::new(Difficulty::Hard);
        game.record_line(&row(0, 3));
        let chain: Chain = game.finish_chain();
        let m: Move = game.commit_move(calculate_chain_points(&chain, 1));
        assert_eq!(m.get_score(), 300);
        assert_eq!(game.get_total_score(), 300);
        assert_eq!(game.get_tracker().history_len(), 1);
    }

    #[test]
    fn effect_without_cause_is_rejected() {
        let mut game = Game::default();
        assert_eq!(
            game.record_effect(None, &row(0, 2)),
            Err(TrackerError::MissingCauseTile)
        );
        let rocket = Tile::with_type(9, TileColor::Red, TileType::Rocket);
        assert!(game.record_effect(Some(rocket), &row(0, 2)).is_ok());
        assert_eq!(game.finish_chain().len(), 1);
    }

    #[test]
    fn level_increases_with_score() {
        let mut game = Game::new(Difficulty::Easy);
        game.commit_move(1000);
        assert_eq!(game.get_level(), 1);
        game.commit_move(500);
        assert_eq!(game.get_level(), 2);
        assert_eq!(game.get_level_score(), 300);
        assert_eq!(game.get_time_limit(), 9000);
        assert_eq!(game.get_total_score(), 1500);
    }

    #[test]
    fn drop_amount_uses_current_level() {
        let game = Game::new(Difficulty::Easy);
        assert_eq!(game.get_drop_amount(50, 100, 3), Ok(9));
        assert_eq!(game.get_refactor_speed(), RefactorSpeed::Normal);
    }
}
