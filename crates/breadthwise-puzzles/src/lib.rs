//! Puzzles solved by the breadthwise search engine.
//!
//! Each puzzle is a [`Configuration`](breadthwise_solver::Configuration):
//!
//! - [`ClockConfiguration`]: turn a clock hand to a goal hour.
//! - [`WaterConfiguration`]: measure an amount with fixed-size buckets.
//! - [`LunarLandingConfiguration`]: slide the explorer onto the lander.
//! - [`TipOverConfiguration`]: topple crates to reach the goal cell.
//!
//! The two board puzzles are read from text with [`FromStr`](std::str::FromStr)
//! or from a file with [`Board::load`], and accept single player moves for
//! interactive play.
//!
//! # Examples
//!
//! ```
//! use breadthwise_puzzles::ClockConfiguration;
//!
//! let start = ClockConfiguration::new(12, 2, 11)?;
//! let outcome = breadthwise_solver::solve(start);
//! assert_eq!(outcome.moves(), Some(3));
//! # Ok::<(), breadthwise_puzzles::ClockError>(())
//! ```

pub use self::{
    board::Board,
    clock::{ClockConfiguration, ClockError},
    coordinates::{Coordinates, Direction, ParseDirectionError},
    error::{LoadError, MoveError, ParseError},
    grid::Grid,
    lunar_landing::LunarLandingConfiguration,
    tip_over::TipOverConfiguration,
    water::{WaterConfiguration, WaterError},
};

mod board;
pub mod clock;
mod coordinates;
mod error;
mod grid;
pub mod lunar_landing;
pub mod tip_over;
pub mod water;
