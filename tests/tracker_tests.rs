/*
tracker_tests.rs

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

use wezzle::tile::{Tile, TileColor, TileType};
use wezzle::tracker::Tracker;
use wezzle::tracker::chain::Chain;
use wezzle::tracker::game_move::Move;
use wezzle::tracker::statistics::Statistic;
use wezzle::tracker::tile_group::{Line, TileEffect, TileGroup};

fn line(color: TileColor, ids: std::ops::Range<usize>) -> TileGroup {
    let tiles: Vec<Tile> = ids.map(|i| Tile::new(i, color)).collect();
    Line::new(&tiles).into()
}

#[test]
fn move_holds_exactly_the_chains_tracked_since_last_completion() {
    let mut tracker = Tracker::new();

    tracker.track(Chain::new(&[line(TileColor::Red, 0..3)]));
    let first: Move = tracker.complete_move();

    let c1 = Chain::new(&[line(TileColor::Blue, 3..6)]);
    let c2 = Chain::new(&[line(TileColor::Green, 6..9), line(TileColor::Green, 9..12)]);
    let c3 = Chain::new(&[line(TileColor::Red, 12..15)]);
    tracker.track(c1.clone());
    tracker.track(c2.clone());
    tracker.track(c3.clone());
    let second: Move = tracker.complete_move();

    assert_eq!(first.len(), 1);
    assert_eq!(second.get_chains(), &[c1, c2, c3]);
    assert_eq!(tracker.get_history(), &[first, second]);
}

#[test]
fn history_grows_by_one_per_completion() {
    let mut tracker = Tracker::new();
    for n in 1..=5 {
        if n % 2 == 0 {
            tracker.track(Chain::new(&[line(TileColor::Yellow, 0..3)]));
        }
        tracker.complete_move();
        assert_eq!(tracker.history_len(), n);
    }
    assert!(tracker.get_history()[0].is_empty());
    assert_eq!(tracker.get_history()[1].len(), 1);
}

#[test]
fn caller_changes_do_not_reach_the_history() {
    let mut tracker = Tracker::new();
    let mut tiles: Vec<Tile> = (0..3).map(|i| Tile::new(i, TileColor::Black)).collect();
    let mut groups: Vec<TileGroup> = vec![Line::new(&tiles).into()];
    let chain = Chain::new(&groups);
    tracker.track(chain);
    let m: Move = tracker.complete_move();

    // Change the caller's data after the move is completed
    tiles.push(Tile::new(3, TileColor::Black));
    groups.push(Line::new(&tiles).into());
    tracker.track(Chain::new(&groups));

    let stored: &Move = &tracker.get_history()[0];
    assert_eq!(stored, &m);
    assert_eq!(stored.get_chains()[0].len(), 1);
    assert_eq!(stored.get_chains()[0].get_tile_groups()[0].get_tiles().len(), 3);
}

#[test]
fn recorded_chains_feed_achievement_counts() {
    let mut tracker = Tracker::new();
    let bomb = Tile::with_type(1, TileColor::Red, TileType::Bomb);
    let star = Tile::with_type(20, TileColor::Blue, TileType::Star);
    let x4 = Tile::with_type(21, TileColor::Blue, TileType::X4);

    let red_line = Line::new(&[
        Tile::new(0, TileColor::Red),
        bomb,
        Tile::new(2, TileColor::Red),
    ]);
    tracker.record(&[red_line.into()]);
    tracker.record(&[TileEffect::new(Some(bomb), &[star, x4]).unwrap().into()]);
    tracker.finish_chain();
    let blast = TileEffect::new(Some(star), &[Tile::new(30, TileColor::Blue)]).unwrap();
    tracker.record(&[blast.into()]);
    tracker.finish_chain();
    tracker.complete_move_with_score(500);

    let counts = Tracker::get_counts(tracker.get_recent_history(1));
    assert_eq!(counts[&Statistic::Bomb], 1);
    assert_eq!(counts[&Statistic::Star], 1);
    assert_eq!(counts[&Statistic::X4], 1);
    assert_eq!(counts[&Statistic::Items], 2);
    assert_eq!(counts[&Statistic::Multipliers], 1);
    assert_eq!(counts[&Statistic::Lines], 3);
    assert_eq!(counts[&Statistic::Score], 500);
}

#[test]
fn move_rendering() {
    let rocket = Tile::with_type(2, TileColor::Red, TileType::Rocket);
    let chain = Chain::new(&[
        Line::new(&[Tile::new(0, TileColor::Red), Tile::new(1, TileColor::Red), rocket]).into(),
        TileEffect::new(Some(rocket), &[]).unwrap().into(),
    ]);
    let m = Move::new(&[chain]);
    assert_eq!(
        m.to_string(),
        "(Chain 1)\n  (Line 1) [ Red#0, Red#1, Red Rocket#2 ]\n  (Line 2) [ Rocket => *Nothing* ]\n"
    );
}
