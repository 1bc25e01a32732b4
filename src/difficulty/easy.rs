/*
easy.rs

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

//! Easy difficulty.

use super::rational::Rational;
use super::refactor_speed::RefactorSpeed;
use super::{DifficultyError, DifficultyStrategy, DropParameters, compute_drop_amount};

/// Drop amount constants.
const PARAMETERS: DropParameters = DropParameters {
    minimum_drop: 1,
    minimum_level: 3,
    level_interval: 2,
    tile_ratio: 80,
    maximum_total_drop_amount: 8,
};

/// Score multiplier.
const SCORE_MODIFIER: Rational = Rational::new(1, 1);

/// Timer upper bound, in ms.
const TIME_UPPER: i32 = 10000;

/// Timer lower bound, in ms.
const TIME_LOWER: i32 = 1000;

/// Easy difficulty strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct EasyDifficulty;

impl DifficultyStrategy for EasyDifficulty {
    fn get_refactor_speed(&self) -> RefactorSpeed {
        RefactorSpeed::Normal
    }

    fn get_max_time(&self) -> i32 {
        TIME_UPPER
    }

    /// The time limit decreases by one second every two levels.
    fn determine_time_for_level(&self, level: i32) -> i32 {
        TIME_UPPER
            .saturating_sub((level / 2).saturating_mul(1000))
            .max(TIME_LOWER)
    }

    fn get_drop_amount(
        &self,
        number_of_tiles: i32,
        number_of_cells: i32,
        level: i32,
        piece_size: i32,
    ) -> Result<i32, DifficultyError> {
        compute_drop_amount(
            &PARAMETERS,
            number_of_tiles,
            number_of_cells,
            level,
            piece_size,
        )
    }

    fn get_score_modifier(&self) -> Rational {
        SCORE_MODIFIER
    }
}
