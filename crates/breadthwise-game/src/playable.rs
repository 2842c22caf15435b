use std::fmt::{self, Display};

use breadthwise_puzzles::{
    Coordinates, Direction, LunarLandingConfiguration, MoveError, TipOverConfiguration,
};
use breadthwise_solver::Configuration;

/// A configuration that a player can change one move at a time.
pub trait Playable: Configuration {
    /// A single player move.
    type Move: fmt::Debug;

    /// Returns the configuration after `mv`.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the rules do not allow `mv` here.
    fn apply_move(&self, mv: &Self::Move) -> Result<Self, MoveError>;
}

/// A lunar landing move: slide the figure on `figure` toward `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureMove {
    /// The cell of the figure to move.
    pub figure: Coordinates,
    /// Where to slide it.
    pub direction: Direction,
}

impl Display for FigureMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.figure, self.direction)
    }
}

impl Playable for LunarLandingConfiguration {
    type Move = FigureMove;

    fn apply_move(&self, mv: &FigureMove) -> Result<Self, MoveError> {
        self.move_figure(mv.figure, mv.direction)
    }
}

impl Playable for TipOverConfiguration {
    type Move = Direction;

    fn apply_move(&self, mv: &Direction) -> Result<Self, MoveError> {
        self.step(*mv)
    }
}
