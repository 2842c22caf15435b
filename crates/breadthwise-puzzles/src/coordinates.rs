//! Grid positions and compass directions.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A cell position on a rectangular grid.
///
/// Rows grow downward (south) and columns grow rightward (east). Coordinates
/// may be negative or exceed a grid's size while stepping; use
/// [`Grid::contains`](crate::Grid::contains) to check bounds.
///
/// Ordering is row-major, which gives puzzles a deterministic figure order.
///
/// # Examples
///
/// ```
/// use breadthwise_puzzles::{Coordinates, Direction};
///
/// let pos = Coordinates::new(2, 3);
/// assert_eq!(pos.offset(Direction::North), Coordinates::new(1, 3));
/// assert_eq!(pos.scaled(Direction::East, 2), Coordinates::new(2, 5));
/// assert_eq!(pos.to_string(), "(2, 3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinates {
    row: i32,
    col: i32,
}

impl Coordinates {
    /// Creates coordinates from a row and a column.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the row.
    #[must_use]
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Returns the column.
    #[must_use]
    pub const fn col(self) -> i32 {
        self.col
    }

    /// Returns the adjacent coordinates in `direction`.
    #[must_use]
    pub const fn offset(self, direction: Direction) -> Self {
        self.scaled(direction, 1)
    }

    /// Returns the coordinates `distance` cells away in `direction`.
    ///
    /// Saturates at the `i32` bounds, which lie off every grid.
    #[must_use]
    pub const fn scaled(self, direction: Direction, distance: i32) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row.saturating_add(dr.saturating_mul(distance)),
            col: self.col.saturating_add(dc.saturating_mul(distance)),
        }
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Direction {
    /// Toward row 0.
    #[display("north")]
    North,
    /// Toward the last row.
    #[display("south")]
    South,
    /// Toward the last column.
    #[display("east")]
    East,
    /// Toward column 0.
    #[display("west")]
    West,
}

impl Direction {
    /// All directions, in the order puzzles enumerate their moves.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Returns the `(row, col)` step of one cell in this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::East => (0, 1),
            Self::West => (0, -1),
        }
    }
}

/// Error returned when a string does not name a direction.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown direction `{input}` (expected north, south, east, or west)")]
pub struct ParseDirectionError {
    input: String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parses a direction name or its initial, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Self::North),
            "south" | "s" => Ok(Self::South),
            "east" | "e" => Ok(Self::East),
            "west" | "w" => Ok(Self::West),
            _ => Err(ParseDirectionError {
                input: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        let origin = Coordinates::new(0, 0);
        assert_eq!(origin.offset(Direction::North), Coordinates::new(-1, 0));
        assert_eq!(origin.offset(Direction::South), Coordinates::new(1, 0));
        assert_eq!(origin.offset(Direction::East), Coordinates::new(0, 1));
        assert_eq!(origin.offset(Direction::West), Coordinates::new(0, -1));
        assert_eq!(origin.scaled(Direction::South, 3), Coordinates::new(3, 0));
    }

    #[test]
    fn test_offsets_saturate() {
        let edge = Coordinates::new(i32::MAX - 1, i32::MIN);
        assert_eq!(edge.offset(Direction::South), Coordinates::new(i32::MAX, i32::MIN));
        assert_eq!(edge.scaled(Direction::South, 9), Coordinates::new(i32::MAX, i32::MIN));
        assert_eq!(edge.offset(Direction::West), edge);
    }

    #[test]
    fn test_row_major_order() {
        let mut positions = vec![
            Coordinates::new(1, 0),
            Coordinates::new(0, 2),
            Coordinates::new(0, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                Coordinates::new(0, 1),
                Coordinates::new(0, 2),
                Coordinates::new(1, 0)
            ]
        );
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("north".parse(), Ok(Direction::North));
        assert_eq!("SOUTH".parse(), Ok(Direction::South));
        assert_eq!("e".parse(), Ok(Direction::East));
        assert_eq!("West".parse(), Ok(Direction::West));

        let err = "up".parse::<Direction>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown direction `up` (expected north, south, east, or west)"
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse(), Ok(direction));
        }
    }
}
