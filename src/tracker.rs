/*
tracker.rs

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

//! Record the moves of the player.
//!
//! The [`Tracker`] object watches all the moves the player takes and keeps a record, mostly for
//! the achievement system.
//!
//! The record is nested:
//!
//! * A [`game_move::Move`] is everything that happened after a player action.
//!   It is a list of chains.
//! * A [`chain::Chain`] is one cascade: the tile groups removed at the same time, before the
//!   tiles fall.
//! * A [`tile_group::TileGroup`] is either a [`tile_group::Line`] of matching tiles, or a
//!   [`tile_group::TileEffect`] listing the tiles destroyed by a special tile.
//!
//! The board logic records the tile groups with [`Tracker::record`] and closes each cascade with
//! [`Tracker::finish_chain`] (or tracks a prebuilt chain with [`Tracker::track`]).
//! When the board is stable again, [`Tracker::complete_move`] stores the move in the history and
//! starts the next one.

pub mod chain;
pub mod chain_tree;
pub mod game_move;
pub mod statistics;
pub mod tile_group;

use log::debug;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use self::chain::Chain;
use self::game_move::Move;
use self::statistics::Statistic;
use self::tile_group::TileGroup;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum TrackerError {
    /// A tile effect was created without the special tile that caused it.
    MissingCauseTile,
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrackerError::MissingCauseTile => write!(f, "the cause tile of an effect is missing"),
        }
    }
}

impl Error for TrackerError {}

/// Move recorder for a game session.
#[derive(Debug, Default)]
pub struct Tracker {
    /// Completed moves, oldest first.
    history: Vec<Move>,

    /// Chains of the move in progress.
    chains: Vec<Chain>,

    /// Tile groups of the chain in progress.
    tile_groups: Vec<TileGroup>,
}

impl Tracker {
    /// Create a [`Tracker`] object.
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            chains: Vec::new(),
            tile_groups: Vec::new(),
        }
    }

    /// Add tile groups to the chain in progress.
    pub fn record(&mut self, tile_groups: &[TileGroup]) {
        self.tile_groups.extend_from_slice(tile_groups);
    }

    /// Complete the chain in progress and add it to the move in progress.
    ///
    /// Return the completed chain. A new chain is automatically started.
    pub fn finish_chain(&mut self) -> Chain {
        let chain: Chain = Chain::new(&self.tile_groups);
        self.tile_groups.clear();
        debug!("Chain {} finished:\n{chain}", self.chains.len() + 1);
        self.track(chain.clone());
        chain
    }

    /// Add a chain to the move in progress.
    pub fn track(&mut self, chain: Chain) {
        self.chains.push(chain);
    }

    /// Complete the move in progress, add it to the history, and return it.
    ///
    /// A new move is automatically started. Completing a move without any chain is valid: the
    /// player action did not remove any tile.
    pub fn complete_move(&mut self) -> Move {
        self.complete_move_with_score(0)
    }

    /// Same as [`Tracker::complete_move`], but also record the points earned by the move.
    pub fn complete_move_with_score(&mut self, score: i64) -> Move {
        let chains: Vec<Chain> = std::mem::take(&mut self.chains);
        let m: Move = Move::with_score(&chains, score);
        self.history.push(m.clone());
        debug!(
            "Move {} completed: {} chain(s), {} point(s)",
            self.history.len(),
            m.len(),
            score
        );
        m
    }

    /// Return all the completed moves, oldest first.
    pub fn get_history(&self) -> &[Move] {
        &self.history
    }

    /// Return the number of completed moves.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Return the number of chains in the move in progress.
    pub fn current_len(&self) -> usize {
        self.chains.len()
    }

    /// Return the last `n` moves, most recent first.
    ///
    /// Return the whole history if `n` is larger than the history.
    pub fn get_recent_history(&self, n: usize) -> Vec<&Move> {
        self.history.iter().rev().take(n).collect()
    }

    /// Count the special tiles, lines, and points in the given moves.
    ///
    /// See [`statistics::count`].
    pub fn get_counts<'a, I>(moves: I) -> HashMap<Statistic, i64>
    where
        I: IntoIterator<Item = &'a Move>,
    {
        statistics::count(moves)
    }
}
