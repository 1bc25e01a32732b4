/*
difficulty_tests.rs

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

use wezzle::difficulty::easy::EasyDifficulty;
use wezzle::difficulty::hard::HardDifficulty;
use wezzle::difficulty::rational::Rational;
use wezzle::difficulty::refactor_speed::RefactorSpeed;
use wezzle::difficulty::{Difficulty, DifficultyError, DifficultyStrategy};

#[test]
fn easy_drop_on_half_full_board() {
    let easy: &dyn DifficultyStrategy = Difficulty::Easy.get_strategy();
    assert_eq!(easy.get_drop_amount(50, 100, 1, 3), Ok(9));
}

#[test]
fn fill_ratio_uses_integer_division_first() {
    // 79 / 100 * 100 = 0, so a board at 79% is still considered low
    assert_eq!(EasyDifficulty.get_drop_amount(79, 100, 1, 3), Ok(6));
    // Only a full board takes the other branch
    assert_eq!(EasyDifficulty.get_drop_amount(100, 100, 1, 3), Ok(4));
}

#[test]
fn hard_time_for_level_five() {
    assert_eq!(HardDifficulty.determine_time_for_level(5), 4000);
}

#[test]
fn time_never_below_minimum() {
    for level in 1..100 {
        assert!(EasyDifficulty.determine_time_for_level(level) >= 1000);
        assert!(HardDifficulty.determine_time_for_level(level) >= 500);
        assert!(EasyDifficulty.determine_time_for_level(level) <= EasyDifficulty.get_max_time());
    }
}

#[test]
fn drop_never_exceeds_maximum() {
    for strategy in [Difficulty::Easy.get_strategy(), Difficulty::Hard.get_strategy()] {
        for level in 1..30 {
            for tiles in 0..=80 {
                let drop: i32 = strategy.get_drop_amount(tiles, 80, level, 2).unwrap();
                assert!(drop <= 8 + 2);
                assert!(drop >= 2 + 1);
            }
        }
    }
}

#[test]
fn hard_score_modifier_is_exactly_two() {
    assert_eq!(
        Difficulty::Hard.get_strategy().get_score_modifier(),
        Rational::new(2, 1)
    );
    assert_ne!(
        Difficulty::Easy.get_strategy().get_score_modifier(),
        Rational::new(2, 1)
    );
}

#[test]
fn refactor_speeds() {
    assert_eq!(Difficulty::Easy.get_strategy().get_refactor_speed(), RefactorSpeed::Normal);
    assert_eq!(Difficulty::Hard.get_strategy().get_refactor_speed(), RefactorSpeed::Fast);
}

#[test]
fn empty_board_capacity_is_an_error() {
    assert_eq!(
        HardDifficulty.get_drop_amount(0, 0, 1, 3),
        Err(DifficultyError::NoCells)
    );
}
