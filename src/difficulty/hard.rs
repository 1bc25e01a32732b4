/*
hard.rs

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

//! Hard difficulty: faster ramp up, shorter timer, and double points.

use super::rational::Rational;
use super::refactor_speed::RefactorSpeed;
use super::{DifficultyError, DifficultyStrategy, DropParameters, compute_drop_amount};

const PARAMETERS: DropParameters = DropParameters {
    minimum_drop: 1,
    minimum_level: 2,
    level_interval: 1,
    tile_ratio: 80,
    maximum_total_drop_amount: 8,
};

const SCORE_MODIFIER: Rational = Rational::new(2, 1);

// Timer bounds, in ms.
const TIME_UPPER: i32 = 10000;
const TIME_LOWER: i32 = 500;

/// Hard difficulty strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardDifficulty;

impl DifficultyStrategy for HardDifficulty {
    fn get_refactor_speed(&self) -> RefactorSpeed {
        RefactorSpeed::Fast
    }

    fn get_max_time(&self) -> i32 {
        TIME_UPPER
    }

    fn determine_time_for_level(&self, level: i32) -> i32 {
        TIME_UPPER
            .saturating_sub(level.saturating_sub(1).saturating_mul(1500))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_for_level() {
        assert_eq!(HardDifficulty.determine_time_for_level(1), 10000);
        assert_eq!(HardDifficulty.determine_time_for_level(5), 4000);
        assert_eq!(HardDifficulty.determine_time_for_level(7), 1000);
        assert_eq!(HardDifficulty.determine_time_for_level(8), 500);
        assert_eq!(HardDifficulty.determine_time_for_level(100), 500);
        assert_eq!(HardDifficulty.determine_time_for_level(2_000_000), 500);
        assert_eq!(HardDifficulty.determine_time_for_level(i32::MAX), 500);
    }

    #[test]
    fn drop_amount() {
        // Level two is the ramp up level: 3 + 2 + 5 + 1
        assert_eq!(HardDifficulty.get_drop_amount(50, 100, 2, 3), Ok(11));
        // Full board at level four: 3 + 2 + (4 - 2) + 1
        assert_eq!(HardDifficulty.get_drop_amount(100, 100, 4, 3), Ok(8));
        // Clamped to 8 + 4
        assert_eq!(HardDifficulty.get_drop_amount(20, 100, 9, 4), Ok(12));
    }

    #[test]
    fn double_points() {
        let modifier: Rational = HardDifficulty.get_score_modifier();
        assert_eq!(modifier, Rational::new(2, 1));
        assert_eq!(modifier.get_numerator(), 2);
        assert_eq!(modifier.get_denominator(), 1);
        assert_eq!(modifier.apply(125), 250);
    }
}
