/*
refactor_speed.rs

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

//! Pace of the tile fall animation when the board is refactored.
//!
//! The animation code maps each tag to its speed, gravity and acceleration settings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Refactor speed tags.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RefactorSpeed {
    /// Used in tutorials.
    Slower,

    /// Used in tutorials.
    Slow,

    /// Used during normal operation.
    Normal,

    /// Used in hard mode.
    Fast,

    /// Used during gravity shifts.
    Shift,
}

impl fmt::Display for RefactorSpeed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RefactorSpeed::Slower => write!(f, "slower"),
            RefactorSpeed::Slow => write!(f, "slow"),
            RefactorSpeed::Normal => write!(f, "normal"),
            RefactorSpeed::Fast => write!(f, "fast"),
            RefactorSpeed::Shift => write!(f, "shift"),
        }
    }
}
