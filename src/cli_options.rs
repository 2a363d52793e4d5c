/*
cli_options.rs

Copyright 2026 The Regina developers

This file is part of Regina.

Regina is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Regina is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Regina. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! The command-line front end is intended for developers tuning the region
//! generator.
//! It batch-generates boards, re-verifies the partition invariants, and
//! prints each board as a letter grid (one letter per region) or as JSON.
//!
//! # Examples
//!
//! Generate one 8×8 board at the hard complexity level:
//!
//! ```text
//! $ regina -s 8 -x hard
//! AAABBBCC
//! ADDDBBCC
//! ADDBBECC
//! ADFFBECC
//! AFFEEECG
//! HFFEGGGG
//! HHFEEGGG
//! HHHHHGGG
//! ```
//!
//! Generate three seeded boards and print some statistics:
//!
//! ```text
//! $ regina -s 9 -x expert -c 3 --seed 42 -m
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::time::Instant;

use regina::generator::growth::RegionGenerator;
use regina::generator::partition::Partition;
use regina::{Cell, Complexity};

/// Generate region-partitioned queens boards for developers.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Board size (also the number of regions and of queens)
    #[arg(short, long, default_value_t = 8)]
    size: usize,

    /// Complexity level controlling the region shapes
    #[arg(value_enum, short = 'x', long, default_value_t = Complexity::Medium)]
    complexity: Complexity,

    /// Number of boards to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Seed for the random source (drawn from the OS when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the boards as JSON instead of a letter grid
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the boards
    #[arg(short = 'm', long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process the command-line options; return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let generator = RegionGenerator::new(args.size, args.complexity);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;

    for i in 0..args.count {
        debug!("Generating board {i}");

        let start: Instant = Instant::now();
        let partition: Partition = generator.generate(&mut rng);
        let duration: f32 = start.elapsed().as_secs_f32();
        total += duration;
        if duration > max {
            max = duration;
        }

        verify(&partition, args.size);

        if args.json {
            println!(
                "{}",
                serde_json::to_string(&partition).expect("Cannot serialize the partition")
            );
        } else {
            print_board(&partition);
        }
    }

    if args.summary {
        println!(
            "
total time = {}s
average time = {}s
    max time = {}s",
            total,
            total / args.count as f32,
            max
        );
    }
    0
}

/// Verify the partition invariants and panic on an internal bug.
fn verify(partition: &Partition, board_size: usize) {
    if partition.regions.len() != board_size {
        eprintln!(
            "Wrong region count: {} instead of {}",
            partition.regions.len(),
            board_size
        );
        panic!("Bug: wrong number of regions");
    }

    let mut cells: Vec<Cell> = partition
        .regions
        .iter()
        .flat_map(|region| region.cells.iter().copied())
        .collect();
    cells.sort_unstable();
    cells.dedup();
    if cells.len() != board_size * board_size {
        eprintln!(
            "The regions cover {} distinct cells instead of {}",
            cells.len(),
            board_size * board_size
        );
        panic!("Bug: the regions do not cover the board");
    }

    for region in &partition.regions {
        for cell in &region.cells {
            if partition.board[cell.row][cell.col] != region.id {
                eprintln!("Board mismatch on {} for region {}", cell, region.id);
                panic!("Bug: the board grid does not match the regions");
            }
        }
    }
}

/// Print the board as a letter grid, one letter per region.
fn print_board(partition: &Partition) {
    for row in &partition.board {
        let line: String = row
            .iter()
            .map(|id| char::from(b'A' + (*id % 26) as u8))
            .collect();
        println!("{line}");
    }
    println!();
}
