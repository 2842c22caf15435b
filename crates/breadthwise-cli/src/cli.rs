use std::{num::NonZero, path::PathBuf};

use breadthwise_solver::{Solver, SolverConfig};
use clap::{Parser, Subcommand, ValueEnum};

/// Solve clock, water, lunar landing, and tip-over puzzles by breadth-first search.
#[derive(Debug, Parser)]
#[command(name = "breadthwise", author, version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,

    /// Give up after producing this many neighbor configurations.
    #[arg(long, global = true, value_name = "COUNT")]
    pub(crate) max_expansions: Option<NonZero<usize>>,

    /// Output format for solver results.
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    pub(crate) format: Format,

    /// Print debug logs to stderr (`RUST_LOG` takes precedence).
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

impl Cli {
    pub(crate) fn solver(&self) -> Solver {
        Solver::with_config(SolverConfig::default().with_max_expansions(self.max_expansions))
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Turn the hand of an HOURS-hour clock from START to END.
    Clock {
        /// Number of hours on the dial.
        hours: u32,
        /// Hour the hand starts at.
        start: u32,
        /// Hour the hand must reach.
        end: u32,
    },
    /// Measure AMOUNT using empty buckets of the given capacities.
    Water {
        /// Amount one bucket must hold.
        amount: u32,
        /// Bucket capacities.
        #[arg(required = true, value_name = "BUCKET")]
        buckets: Vec<u32>,
    },
    /// Solve a lunar landing board file.
    LunarLanding {
        /// Board file.
        file: PathBuf,
    },
    /// Solve a tip-over board file.
    TipOver {
        /// Board file.
        file: PathBuf,
    },
    /// Play a board interactively on the terminal.
    Play {
        /// Which puzzle the board describes.
        #[arg(value_enum)]
        puzzle: BoardPuzzle,
        /// Board file.
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Human-readable trace.
    Text,
    /// A single JSON object.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BoardPuzzle {
    LunarLanding,
    TipOver,
}
