use std::{io, path::PathBuf};

use crate::{Coordinates, Direction};

/// Errors that can occur when parsing a board description.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The input ended before a required value.
    #[display("missing {what}")]
    MissingValue {
        /// The value that was expected.
        what: &'static str,
    },
    /// A value was present but is not a valid number.
    #[display("invalid {what}: `{token}`")]
    InvalidNumber {
        /// The value that was expected.
        what: &'static str,
        /// The offending token.
        token: String,
    },
    /// The grid has no cells.
    #[display("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid {
        /// Declared number of rows.
        rows: usize,
        /// Declared number of columns.
        cols: usize,
    },
    /// The grid is too large to address.
    #[display("grid of {rows}x{cols} cells is too large")]
    GridTooLarge {
        /// Declared number of rows.
        rows: usize,
        /// Declared number of columns.
        cols: usize,
    },
    /// A position lies outside the grid.
    #[display("{what} at {coordinates} is off the grid")]
    OffGrid {
        /// The item being placed.
        what: &'static str,
        /// Where it was placed.
        coordinates: Coordinates,
    },
    /// A figure line does not read `NAME ROW COL`.
    #[display("line {line}: expected `NAME ROW COL`, got `{text}`")]
    InvalidFigure {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        text: String,
    },
    /// No explorer (`E`) was placed.
    #[display("board has no explorer")]
    MissingExplorer,
    /// More than one explorer (`E`) was placed.
    #[display("board has more than one explorer")]
    DuplicateExplorer,
    /// Two figures share a cell.
    #[display("two figures share the cell at {coordinates}")]
    OverlappingFigures {
        /// The shared cell.
        coordinates: Coordinates,
    },
    /// The tipper does not start on a crate.
    #[display("start position {coordinates} is not on a crate")]
    StartNotOnCrate {
        /// The start position.
        coordinates: Coordinates,
    },
    /// Input continued after the board was complete.
    #[display("unexpected trailing data: `{token}`")]
    TrailingData {
        /// The first unexpected token.
        token: String,
    },
}

/// Errors that can occur when loading a board file.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    Io {
        /// The file that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The file was read but does not describe a valid board.
    #[display("invalid board in {}: {source}", path.display())]
    Parse {
        /// The file that was read.
        path: PathBuf,
        /// What is wrong with the board.
        source: ParseError,
    },
}

/// Errors that can occur when applying a player's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// No figure stands on the selected cell.
    #[display("no figure at {coordinates}")]
    NoFigure {
        /// The selected cell.
        coordinates: Coordinates,
    },
    /// The rules do not allow moving in this direction.
    #[display("cannot move {direction}")]
    Blocked {
        /// The requested direction.
        direction: Direction,
    },
}
