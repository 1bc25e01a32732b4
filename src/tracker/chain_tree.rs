/*
chain_tree.rs

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

//! Tree of the tiles removed during a chain.
//!
//! The tiles of the matched lines are the children of the root node. When a special tile in a
//! line explodes, the tiles it destroys become the children of the node holding that special tile.
//! An effect can itself destroy another special tile, which gives the next level of the tree.

use std::fmt;

use crate::tile::Tile;

/// Node of the chain tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainNode {
    /// Tile of the node. The root node has no tile.
    pub tile: Option<Tile>,

    /// Child nodes.
    pub children: Vec<ChainNode>,
}

impl ChainNode {
    /// Create a [`ChainNode`] object for the given tile.
    pub fn new(tile: Option<Tile>) -> Self {
        Self {
            tile,
            children: Vec::new(),
        }
    }

    /// Add a child node for each tile.
    pub fn add_children(&mut self, tiles: &[Tile]) {
        self.children
            .extend(tiles.iter().map(|t| ChainNode::new(Some(*t))));
    }

    /// Look for the node holding the given tile.
    ///
    /// The direct children are checked first, before searching deeper in the tree.
    pub fn find(&self, tile: &Tile) -> Option<&ChainNode> {
        if let Some(node) = self.children.iter().find(|n| n.tile.as_ref() == Some(tile)) {
            return Some(node);
        }
        self.children.iter().find_map(|n| n.find(tile))
    }

    /// Same as [`ChainNode::find`], but return a mutable reference.
    pub fn find_mut(&mut self, tile: &Tile) -> Option<&mut ChainNode> {
        if let Some(i) = self
            .children
            .iter()
            .position(|n| n.tile.as_ref() == Some(tile))
        {
            return Some(&mut self.children[i]);
        }
        for node in self.children.iter_mut() {
            if let Some(found) = node.find_mut(tile) {
                return Some(found);
            }
        }
        None
    }

    /// Return the depth of the tree below this node (0 for a leaf).
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|n| 1 + n.depth())
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for ChainNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.tile {
            Some(t) => write!(f, "{{{t},[")?,
            None => write!(f, "{{*empty*,[")?,
        }
        for (i, node) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, "]}}")
    }
}
