/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers tuning the difficulty levels.
//!
//! # Examples
//!
//! Print the time limit and the drop amount of the first five hard levels:
//!
//! ```text
//! $ wezzle -f hard --levels 5
//! level   time (ms)   drop
//!     1       10000      9
//!     2        8500     10
//!     3        7000     11
//!     4        5500     11
//!     5        4000     11
//! ```
//!
//! Simulate 200 random moves and print the report in JSON format:
//!
//! ```text
//! $ wezzle -f easy --simulate 200 --seed 42 --json
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::error::Error;

use crate::config::{BOARD_COLUMNS, BOARD_ROWS, COPYRIGHT_NOTICE, MAX_PIECE_SIZE};
use crate::difficulty::{Difficulty, DifficultyStrategy};
use crate::simulator::{SimulationReport, Simulator};

/// Number of levels printed when no option is given.
const DEFAULT_LEVELS: i32 = 10;

/// Largest number of levels the table can print.
const MAX_LEVELS: i64 = 1000;

/// Tune the Wezzle difficulty levels.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
pub struct Args {
    /// Difficulty level
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,

    /// Print the time limit and the drop amount for the first LEVELS levels
    #[arg(
        short,
        long,
        conflicts_with = "simulate",
        value_parser = clap::value_parser!(i32).range(1..=MAX_LEVELS)
    )]
    pub levels: Option<i32>,

    /// Number of random moves to simulate
    #[arg(short, long)]
    pub simulate: Option<usize>,

    /// Seed for the random generator
    #[arg(long, requires = "simulate")]
    pub seed: Option<u64>,

    /// Print the simulation report in JSON format
    #[arg(short, long, default_value_t = false, requires = "simulate")]
    pub json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

/// Return the level table as text.
///
/// The drop amount is computed for a half full board and the largest piece.
///
/// # Errors
///
/// See [`DifficultyStrategy::get_drop_amount`].
pub fn level_table(difficulty: Difficulty, levels: i32) -> Result<String, Box<dyn Error>> {
    let strategy: &dyn DifficultyStrategy = difficulty.get_strategy();
    let number_of_cells: i32 = BOARD_COLUMNS * BOARD_ROWS;
    let mut table: String = String::from("level   time (ms)   drop\n");

    for level in 1..=levels {
        let drop: i32 =
            strategy.get_drop_amount(number_of_cells / 2, number_of_cells, level, MAX_PIECE_SIZE)?;
        table.push_str(&format!(
            "{level:>5} {:>11} {drop:>6}\n",
            strategy.determine_time_for_level(level)
        ));
    }
    Ok(table)
}

/// Run the simulation and return the report as text or JSON.
///
/// # Errors
///
/// See [`Simulator::run`].
pub fn simulate(
    difficulty: Difficulty,
    moves: usize,
    seed: Option<u64>,
    json: bool,
) -> Result<String, Box<dyn Error>> {
    let mut simulator: Simulator = Simulator::new(difficulty, seed);
    let report: SimulationReport = simulator.run(moves)?;

    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.to_string())
    }
}

/// Execute the command described by the options.
fn run(args: &Args) -> Result<String, Box<dyn Error>> {
    match args.simulate {
        Some(moves) => simulate(args.difficulty, moves, args.seed, args.json),
        None => level_table(args.difficulty, args.levels.unwrap_or(DEFAULT_LEVELS)),
    }
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("{args:?}");

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_level_table() {
        let table: String = level_table(Difficulty::Hard, 5).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "    1       10000      9");
        assert_eq!(lines[2], "    2        8500     10");
        assert_eq!(lines[5], "    5        4000     11");
    }

    #[test]
    fn options() {
        let args = Args::try_parse_from(["wezzle", "-f", "hard", "--simulate", "5", "--seed", "3"])
            .unwrap();
        assert_eq!(args.difficulty, Difficulty::Hard);
        assert_eq!(args.simulate, Some(5));
        assert_eq!(args.seed, Some(3));

        // The seed only makes sense for a simulation
        assert!(Args::try_parse_from(["wezzle", "--seed", "3"]).is_err());
    }

    #[test]
    fn levels_out_of_range() {
        let args = Args::try_parse_from(["wezzle", "--levels", "1000"]).unwrap();
        assert_eq!(args.levels, Some(1000));
        assert!(Args::try_parse_from(["wezzle", "--levels", "1500000"]).is_err());
        assert!(Args::try_parse_from(["wezzle", "--levels", "0"]).is_err());
    }

    #[test]
    fn long_level_table() {
        let table: String = level_table(Difficulty::Hard, MAX_LEVELS as i32).unwrap();
        assert_eq!(table.lines().count(), 1001);
        assert!(table.ends_with(" 1000         500     11\n"));
    }

    #[test]
    fn json_report() {
        let output: String = simulate(Difficulty::Easy, 5, Some(9), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["seed"], 9);
    }
}
