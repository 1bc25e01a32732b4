/*
statistics.rs

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

//! Statistics computed over a list of moves. Achievement rules compare these values to their
//! thresholds.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::game_move::Move;
use crate::tile::{Tile, TileType};

/// Values that can be counted over a list of moves.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Statistic {
    Bomb,
    Gravity,
    Items,
    Lines,
    Multipliers,
    Rocket,
    Score,
    Star,
    X2,
    X3,
    X4,
}

impl Statistic {
    /// All the statistics, in display order.
    pub const ALL: [Statistic; 11] = [
        Statistic::Score,
        Statistic::Lines,
        Statistic::Items,
        Statistic::Multipliers,
        Statistic::Rocket,
        Statistic::Bomb,
        Statistic::Star,
        Statistic::Gravity,
        Statistic::X2,
        Statistic::X3,
        Statistic::X4,
    ];
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Statistic::Bomb => write!(f, "bombs"),
            Statistic::Gravity => write!(f, "gravity"),
            Statistic::Items => write!(f, "items"),
            Statistic::Lines => write!(f, "lines"),
            Statistic::Multipliers => write!(f, "multipliers"),
            Statistic::Rocket => write!(f, "rockets"),
            Statistic::Score => write!(f, "score"),
            Statistic::Star => write!(f, "stars"),
            Statistic::X2 => write!(f, "x2"),
            Statistic::X3 => write!(f, "x3"),
            Statistic::X4 => write!(f, "x4"),
        }
    }
}

/// Count the special tiles, lines, and points of the given moves.
///
/// A tile removed by several groups is only counted once.
pub fn count<'a, I>(moves: I) -> HashMap<Statistic, i64>
where
    I: IntoIterator<Item = &'a Move>,
{
    let mut tiles: HashSet<Tile> = HashSet::new();
    let mut lines: i64 = 0;
    let mut score: i64 = 0;

    for m in moves {
        lines += m.get_num_lines() as i64;
        tiles.extend(m.get_tile_set());
        score += m.get_score();
    }

    let mut types: HashMap<TileType, i64> = HashMap::new();
    for tile in &tiles {
        *types.entry(tile.get_type()).or_insert(0) += 1;
    }
    let get = |t: TileType| -> i64 { types.get(&t).copied().unwrap_or(0) };
    let items: i64 = tiles.iter().filter(|t| t.get_type().is_item()).count() as i64;
    let multipliers: i64 = tiles.iter().filter(|t| t.get_type().is_multiplier()).count() as i64;

    let mut counts: HashMap<Statistic, i64> = HashMap::with_capacity(Statistic::ALL.len());
    counts.insert(Statistic::Bomb, get(TileType::Bomb));
    counts.insert(Statistic::Gravity, get(TileType::Gravity));
    counts.insert(Statistic::Items, items);
    counts.insert(Statistic::Lines, lines);
    counts.insert(Statistic::Multipliers, multipliers);
    counts.insert(Statistic::Rocket, get(TileType::Rocket));
    counts.insert(Statistic::Score, score);
    counts.insert(Statistic::Star, get(TileType::Star));
    counts.insert(Statistic::X2, get(TileType::X2));
    counts.insert(Statistic::X3, get(TileType::X3));
    counts.insert(Statistic::X4, get(TileType::X4));
    counts
}
