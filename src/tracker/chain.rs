/*
chain.rs

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

//! A single cascade: all the tile groups removed at the same time, before the remaining tiles
//! fall and new tiles drop in.

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::chain_tree::ChainNode;
use super::tile_group::TileGroup;
use crate::tile::Tile;

/// Chain object.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "ChainGroups")]
pub struct Chain {
    /// Lines and tile effects of the cascade.
    tile_groups: Vec<TileGroup>,

    /// Tree of the removed tiles, derived from the tile groups.
    #[serde(skip)]
    tree: ChainNode,
}

/// Serialized form of a [`Chain`]. The tree is rebuilt on load.
#[derive(Deserialize)]
struct ChainGroups {
    tile_groups: Vec<TileGroup>,
}

impl From<ChainGroups> for Chain {
    fn from(data: ChainGroups) -> Self {
        Self::new(&data.tile_groups)
    }
}

impl Chain {
    /// Create a [`Chain`] object from a copy of the given tile groups.
    pub fn new(tile_groups: &[TileGroup]) -> Self {
        Self {
            tile_groups: tile_groups.to_vec(),
            tree: build_tree(tile_groups),
        }
    }

    /// Return the tile groups.
    pub fn get_tile_groups(&self) -> &[TileGroup] {
        &self.tile_groups
    }

    /// Return the number of tile groups.
    pub fn len(&self) -> usize {
        self.tile_groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tile_groups.is_empty()
    }

    /// Return the set of the tiles removed during the cascade.
    pub fn get_tiles(&self) -> HashSet<Tile> {
        let mut tiles: HashSet<Tile> = HashSet::new();
        for group in &self.tile_groups {
            tiles.extend(group.tiles());
        }
        tiles
    }

    /// Return the tree of the removed tiles.
    pub fn get_tree(&self) -> &ChainNode {
        &self.tree
    }
}

/// Build the tree of the removed tiles.
///
/// Line tiles are attached to the root. The tiles affected by an effect are attached to the
/// node of the tile that caused the effect.
fn build_tree(tile_groups: &[TileGroup]) -> ChainNode {
    let mut root: ChainNode = ChainNode::new(None);

    for group in tile_groups {
        match group {
            TileGroup::Line(line) => root.add_children(line.get_tiles()),
            TileGroup::Effect(effect) => {
                let cause: Tile = effect.get_cause_tile();
                match root.find_mut(&cause) {
                    Some(node) => node.add_children(effect.get_tiles()),
                    None => {
                        warn!("Cause tile {cause} not found in the chain, attaching to root");
                        root.add_children(effect.get_tiles());
                    }
                }
            }
        }
    }
    root
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, group) in self.tile_groups.iter().enumerate() {
            writeln!(f, "  (Line {}) [ {group} ]", i + 1)?;
        }
        Ok(())
    }
}
