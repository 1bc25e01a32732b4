/*
difficulty.rs

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

//! Difficulty levels.
//!
//! The player selects a [`Difficulty`] when starting a game. The associated
//! [`DifficultyStrategy`] object provides the values that depend on the difficulty:
//!
//! * the number of tiles to drop onto the board after a piece is placed,
//! * the time limit for placing a piece at the current level,
//! * the score multiplier,
//! * the pace of the tile fall animation.
//!
//! Strategies have no state. All their methods only depend on their arguments and on the
//! constants of the difficulty level.

pub mod easy;
pub mod hard;
pub mod rational;
pub mod refactor_speed;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use strum_macros::FromRepr;

use self::easy::EasyDifficulty;
use self::hard::HardDifficulty;
use self::rational::Rational;
use self::refactor_speed::RefactorSpeed;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum DifficultyError {
    /// The board has no cells.
    NoCells,

    /// No drop amount rule applied. This is a bug.
    DropAmountNotSet,
}

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DifficultyError::NoCells => write!(f, "the board has no cells"),
            DifficultyError::DropAmountNotSet => write!(f, "the drop amount was not set properly"),
        }
    }
}

impl Error for DifficultyError {}

/// Values that depend on the difficulty level.
pub trait DifficultyStrategy: Sync {
    /// Return the pace of the tile fall animation.
    fn get_refactor_speed(&self) -> RefactorSpeed;

    /// Return the upper bound of the move timer, in milliseconds.
    fn get_max_time(&self) -> i32;

    /// Return the move time limit for the given level, in milliseconds.
    fn determine_time_for_level(&self, level: i32) -> i32;

    /// Return the number of tiles to drop onto the board.
    ///
    /// * `number_of_tiles`: tiles currently on the board.
    /// * `number_of_cells`: board capacity.
    /// * `level`: current game level.
    /// * `piece_size`: number of tiles in the piece that the player placed.
    ///
    /// # Errors
    ///
    /// See [`compute_drop_amount`].
    fn get_drop_amount(
        &self,
        number_of_tiles: i32,
        number_of_cells: i32,
        level: i32,
        piece_size: i32,
    ) -> Result<i32, DifficultyError>;

    /// Return the multiplier applied to the points.
    fn get_score_modifier(&self) -> Rational;
}

/// Tuning constants for the drop amount computation.
#[derive(Debug, Clone, Copy)]
pub struct DropParameters {
    /// Tiles always dropped in, on top of the piece size.
    pub minimum_drop: i32,

    /// Level at which the difficulty begins to increase.
    pub minimum_level: i32,

    /// Number of levels before the difficulty increases.
    pub level_interval: i32,

    /// Percentage of tiles to maintain on the board.
    pub tile_ratio: i32,

    /// Maximum number of tiles to drop in, on top of the piece size.
    pub maximum_total_drop_amount: i32,
}

/// Compute the number of tiles to drop onto the board.
///
/// When the board is low, a tenth of the empty cells is added to the drop. Past the ramp up
/// level, one more tile is dropped for each level.
/// The fill ratio is computed as `(number_of_tiles / number_of_cells) * 100`, with the integer
/// division first. Game balance depends on that exact order.
///
/// # Errors
///
/// Return [`DifficultyError::NoCells`] if `number_of_cells` is not positive, and
/// [`DifficultyError::DropAmountNotSet`] if no rule produced a value.
pub fn compute_drop_amount(
    p: &DropParameters,
    number_of_tiles: i32,
    number_of_cells: i32,
    level: i32,
    piece_size: i32,
) -> Result<i32, DifficultyError> {
    if number_of_cells <= 0 {
        return Err(DifficultyError::NoCells);
    }

    // Tiles for the current level, capped once past the ramp up level
    let level_drop: i32 = if level > p.minimum_level {
        p.minimum_level / p.level_interval
    } else {
        level / p.level_interval
    };

    // Part of the board to add back
    let board_percentage: i32 = number_of_cells.saturating_sub(number_of_tiles) / 10;

    // Extra tiles past the ramp up level
    let level_bonus: i32 = level.saturating_sub(p.minimum_level);

    // Saturating arithmetic, as the counts come from the caller
    let base: i32 = piece_size
        .saturating_add(level_drop)
        .saturating_add(p.minimum_drop);

    let drop_amount: Option<i32>;

    if (number_of_tiles / number_of_cells).saturating_mul(100) < p.tile_ratio {
        // The board is low: also drop a part of the empty cells
        if level > p.minimum_level {
            drop_amount = Some(
                base.saturating_add(level_bonus)
                    .saturating_add(board_percentage),
            );
        } else {
            drop_amount = Some(base.saturating_add(board_percentage));
        }
    } else if level > p.minimum_level {
        drop_amount = Some(base.saturating_add(level_bonus));
    } else {
        drop_amount = Some(base);
    }

    let drop_amount: i32 = drop_amount.ok_or(DifficultyError::DropAmountNotSet)?;
    Ok(drop_amount.min(p.maximum_total_drop_amount.saturating_add(piece_size)))
}

static EASY: EasyDifficulty = EasyDifficulty;
static HARD: HardDifficulty = HardDifficulty;

/// Difficulty levels.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    /// Return the strategy object for the difficulty.
    pub fn get_strategy(&self) -> &'static dyn DifficultyStrategy {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Hard => &HARD,
        }
    }

    /// Return the description of the difficulty.
    pub fn get_description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.get_description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: DropParameters = DropParameters {
        minimum_drop: 1,
        minimum_level: 3,
        level_interval: 2,
        tile_ratio: 80,
        maximum_total_drop_amount: 8,
    };

    #[test]
    fn board_without_cells() {
        assert_eq!(
            compute_drop_amount(&PARAMS, 0, 0, 1, 3),
            Err(DifficultyError::NoCells)
        );
    }

    #[test]
    fn full_board_skips_board_percentage() {
        // 100 / 100 * 100 = 100 is not below the ratio
        assert_eq!(compute_drop_amount(&PARAMS, 100, 100, 1, 3), Ok(4));
        // Past the ramp up level: 3 + 3 / 2 + (6 - 3) + 1
        assert_eq!(compute_drop_amount(&PARAMS, 100, 100, 6, 3), Ok(8));
    }

    #[test]
    fn drop_is_clamped() {
        // 3 + 1 + (10 - 3) + 9 + 1 = 21, clamped to 8 + 3
        assert_eq!(compute_drop_amount(&PARAMS, 10, 100, 10, 3), Ok(11));
    }

    #[test]
    fn extreme_counts_do_not_overflow() {
        // Nearly the whole i32 range is empty: the drop is clamped to 8 + 3
        assert_eq!(compute_drop_amount(&PARAMS, i32::MIN, 1, 1, 3), Ok(11));
        assert_eq!(compute_drop_amount(&PARAMS, i32::MAX, 1, i32::MAX, 3), Ok(11));
        assert_eq!(
            compute_drop_amount(&PARAMS, 0, i32::MAX, 1, i32::MAX),
            Ok(i32::MAX)
        );
    }

    #[test]
    fn selector() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
        assert_eq!(Difficulty::from_repr(1), Some(Difficulty::Hard));
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
        assert_eq!(
            Difficulty::Hard.get_strategy().get_refactor_speed(),
            RefactorSpeed::Fast
        );
    }
}
