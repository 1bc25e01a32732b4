/*
rational.rs

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

//! Exact fractions for score modifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Greatest common divisor of two non-negative numbers.
const fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let t: i64 = a % b;
        a = b;
        b = t;
    }
    a
}

/// Fraction in lowest terms, with a positive denominator.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// Create a [`Rational`] object and reduce it.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator must not be zero");

        let sign: i64 = if denominator < 0 { -1 } else { 1 };
        let d: i64 = gcd(numerator.abs(), denominator.abs());
        Self {
            numerator: sign * numerator / d,
            denominator: sign * denominator / d,
        }
    }

    pub fn get_numerator(&self) -> i64 {
        self.numerator
    }

    pub fn get_denominator(&self) -> i64 {
        self.denominator
    }

    /// Multiply the given score by the fraction. The result is truncated toward zero.
    pub fn apply(&self, score: i64) -> i64 {
        score * self.numerator / self.denominator
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
