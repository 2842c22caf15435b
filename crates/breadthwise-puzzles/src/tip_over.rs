//! The tip-over puzzle: walk across crates and topple them to reach the goal.
//!
//! The tipper stands on a crate. It may step onto any adjacent crate, or tip
//! the crate under it over in a direction: a crate of height `h` lies down
//! across the next `h` cells, which must be empty and on the grid, leaving
//! its own cell empty and the tipper on the nearest new crate.
//!
//! # Board format
//!
//! ```text
//! 3 3    <- rows, columns
//! 0 0    <- start row, column
//! 2 2    <- goal row, column
//! 2 0 0  <- heights, row by row (0 is empty)
//! 0 0 0
//! 0 1 1
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
    sync::Arc,
};

use breadthwise_solver::Configuration;

use crate::{
    Board, Coordinates, Direction, Grid, MoveError, ParseError,
    board::{self, Tokens},
};

/// The tipper's position on a board of crates.
///
/// Walking shares the board with the previous configuration; only tipping a
/// crate produces a new board.
///
/// # Examples
///
/// ```
/// use breadthwise_puzzles::{Coordinates, Direction, TipOverConfiguration};
///
/// let start: TipOverConfiguration = "1 4 0 0 0 3\n2 0 0 1\n".parse()?;
/// let tipped = start.step(Direction::East)?;
/// assert_eq!(tipped.position(), Coordinates::new(0, 1));
/// assert_eq!(tipped.height(Coordinates::new(0, 0)), Some(0));
///
/// let outcome = breadthwise_solver::solve(start);
/// assert_eq!(outcome.moves(), Some(3));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TipOverConfiguration {
    board: Arc<Grid<u8>>,
    position: Coordinates,
    goal: Coordinates,
}

impl TipOverConfiguration {
    /// Returns the crate heights.
    #[must_use]
    pub fn board(&self) -> &Grid<u8> {
        &self.board
    }

    /// Returns the height of the crate at `pos`, or `None` if it is off the board.
    #[must_use]
    pub fn height(&self, pos: Coordinates) -> Option<u8> {
        self.board.get(pos).copied()
    }

    /// Returns the tipper position.
    #[must_use]
    pub fn position(&self) -> Coordinates {
        self.position
    }

    /// Returns the goal position.
    #[must_use]
    pub fn goal(&self) -> Coordinates {
        self.goal
    }

    /// Moves the tipper in `direction`.
    ///
    /// Steps onto the adjacent crate if there is one, otherwise tips the
    /// crate under the tipper.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Blocked`] if neither move is possible.
    pub fn step(&self, direction: Direction) -> Result<Self, MoveError> {
        self.walked(direction)
            .or_else(|| self.tipped(direction))
            .ok_or(MoveError::Blocked { direction })
    }

    fn walked(&self, direction: Direction) -> Option<Self> {
        let next = self.position.offset(direction);
        (self.height(next)? > 0).then(|| Self {
            board: Arc::clone(&self.board),
            position: next,
            goal: self.goal,
        })
    }

    fn tipped(&self, direction: Direction) -> Option<Self> {
        let height = self.height(self.position)?;
        if height <= 1 {
            return None;
        }
        let cells: Vec<Coordinates> = (1..=i32::from(height))
            .map(|distance| self.position.scaled(direction, distance))
            .collect();
        if !cells.iter().all(|&pos| self.height(pos) == Some(0)) {
            return None;
        }

        let mut board = Grid::clone(&self.board);
        board.set(self.position, 0);
        for &pos in &cells {
            board.set(pos, 1);
        }
        Some(Self {
            board: Arc::new(board),
            position: self.position.offset(direction),
            goal: self.goal,
        })
    }

    fn cell_label(&self, pos: Coordinates, height: u8) -> String {
        let marker = if pos == self.position {
            '*'
        } else if pos == self.goal {
            '!'
        } else {
            ' '
        };
        if height == 0 {
            format!("{marker}_")
        } else {
            format!("{marker}{height}")
        }
    }
}

impl Configuration for TipOverConfiguration {
    fn neighbors(&self) -> Vec<Self> {
        let walks = Direction::ALL.into_iter().filter_map(|d| self.walked(d));
        let tips = Direction::ALL.into_iter().filter_map(|d| self.tipped(d));
        walks.chain(tips).collect()
    }

    fn is_goal(&self) -> bool {
        self.position == self.goal
    }
}

impl Display for TipOverConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        board::write_header(f, self.board.cols())?;
        for (row, cells) in (0..).zip(self.board.iter_rows()) {
            write!(f, "\n{row:>2} |")?;
            for (col, &height) in (0..).zip(cells) {
                write!(
                    f,
                    "{:>3}",
                    self.cell_label(Coordinates::new(row, col), height)
                )?;
            }
        }
        Ok(())
    }
}

impl FromStr for TipOverConfiguration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::new(s.split_whitespace());
        let rows = tokens.next_number("rows")?;
        let cols = tokens.next_number("columns")?;
        let start = Coordinates::new(
            tokens.next_number("start row")?,
            tokens.next_number("start column")?,
        );
        let goal = Coordinates::new(
            tokens.next_number("goal row")?,
            tokens.next_number("goal column")?,
        );
        let cells = board::check_dimensions(rows, cols)?;

        let heights = (0..cells)
            .map(|_| tokens.next_number("crate height"))
            .collect::<Result<Vec<u8>, _>>()?;
        tokens.finish()?;
        let grid = Grid::from_cells(rows, cols, heights).ok_or(ParseError::EmptyGrid { rows, cols })?;

        for (what, coordinates) in [("start", start), ("goal", goal)] {
            if !grid.contains(coordinates) {
                return Err(ParseError::OffGrid { what, coordinates });
            }
        }
        if grid.get(start) == Some(&0) {
            return Err(ParseError::StartNotOnCrate { coordinates: start });
        }

        Ok(Self {
            board: Arc::new(grid),
            position: start,
            goal,
        })
    }
}

impl Board for TipOverConfiguration {}

#[cfg(test)]
mod tests {
    use breadthwise_solver::{hint, solve, testing::assert_contract_within};

    use super::*;

    #[track_caller]
    fn board(text: &str) -> TipOverConfiguration {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse() {
        let config = board("2 3\n0 1\n1 2\n0 3 0\n0 0 1\n");
        assert_eq!((config.board().rows(), config.board().cols()), (2, 3));
        assert_eq!(config.position(), Coordinates::new(0, 1));
        assert_eq!(config.goal(), Coordinates::new(1, 2));
        assert_eq!(config.height(Coordinates::new(0, 1)), Some(3));
        assert_eq!(config.height(Coordinates::new(1, 2)), Some(1));
        assert_eq!(config.height(Coordinates::new(2, 0)), None);
    }

    #[test]
    fn test_parse_errors() {
        let cases: [(&str, ParseError); 9] = [
            ("2 2 0 0", ParseError::MissingValue { what: "goal row" }),
            (
                "1 1 0 0 0 0 -1",
                ParseError::InvalidNumber {
                    what: "crate height",
                    token: "-1".to_owned(),
                },
            ),
            ("1 0 0 0 0 0", ParseError::EmptyGrid { rows: 1, cols: 0 }),
            (
                "4294967296 4294967296 0 0 0 0 1",
                ParseError::GridTooLarge {
                    rows: 4_294_967_296,
                    cols: 4_294_967_296,
                },
            ),
            (
                "3000000000 1 0 0 0 0 1",
                ParseError::GridTooLarge {
                    rows: 3_000_000_000,
                    cols: 1,
                },
            ),
            (
                "1 2 0 2 0 0 1 1",
                ParseError::OffGrid {
                    what: "start",
                    coordinates: Coordinates::new(0, 2),
                },
            ),
            (
                "1 2 0 0 -1 0 1 1",
                ParseError::OffGrid {
                    what: "goal",
                    coordinates: Coordinates::new(-1, 0),
                },
            ),
            (
                "1 2 0 1 0 0 1 0",
                ParseError::StartNotOnCrate {
                    coordinates: Coordinates::new(0, 1),
                },
            ),
            (
                "1 2 0 0 0 1 1 1 9",
                ParseError::TrailingData {
                    token: "9".to_owned(),
                },
            ),
        ];
        for (text, expected) in cases {
            assert_eq!(text.parse::<TipOverConfiguration>(), Err(expected), "{text:?}");
        }
    }

    #[test]
    fn test_walk_shares_board() {
        let config = board("1 3 0 0 0 2\n1 1 1\n");
        let walked = config.step(Direction::East).unwrap();
        assert_eq!(walked.position(), Coordinates::new(0, 1));
        assert!(Arc::ptr_eq(&config.board, &walked.board));
    }

    #[test]
    fn test_tip_lays_crate_down() {
        let config = board("4 4 0 3 3 0\n0 0 0 3\n0 0 0 0\n0 0 0 0\n0 0 0 0\n");
        let tipped = config.step(Direction::South).unwrap();
        assert_eq!(tipped.position(), Coordinates::new(1, 3));
        let column: Vec<_> = (0..4)
            .map(|row| tipped.height(Coordinates::new(row, 3)).unwrap())
            .collect();
        assert_eq!(column, vec![0, 1, 1, 1]);
        assert!(!Arc::ptr_eq(&config.board, &tipped.board));
        assert_eq!(config.height(Coordinates::new(0, 3)), Some(3));

        assert!(config.step(Direction::West).is_ok());
        // The crate would land partly off the board.
        for direction in [Direction::North, Direction::East] {
            assert_eq!(
                config.step(direction),
                Err(MoveError::Blocked { direction })
            );
        }
    }

    #[test]
    fn test_tip_needs_empty_cells() {
        let config = board("1 4 0 0 0 3\n2 0 1 0\n");
        assert_eq!(
            config.step(Direction::East),
            Err(MoveError::Blocked {
                direction: Direction::East
            })
        );
    }

    #[test]
    fn test_height_one_does_not_tip() {
        let config = board("1 3 0 0 0 2\n1 0 0\n");
        assert!(config.neighbors().is_empty());
    }

    #[test]
    fn test_neighbors_walks_before_tips() {
        let config = board("5 5 2 2 0 0\n0 0 0 0 0\n0 0 0 0 0\n0 1 2 0 0\n0 0 0 0 0\n0 0 0 0 0\n");
        let positions: Vec<_> = config.neighbors().iter().map(TipOverConfiguration::position).collect();
        // Walk west, then tip north, south, east.
        assert_eq!(
            positions,
            vec![
                Coordinates::new(2, 1),
                Coordinates::new(1, 2),
                Coordinates::new(3, 2),
                Coordinates::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_solve_tip_then_walk() {
        let config = board("1 4 0 0 0 3\n2 0 0 1\n");
        let outcome = solve(config.clone());
        let positions: Vec<_> = outcome
            .path()
            .unwrap()
            .iter()
            .map(TipOverConfiguration::position)
            .collect();
        assert_eq!(
            positions,
            vec![
                Coordinates::new(0, 0),
                Coordinates::new(0, 1),
                Coordinates::new(0, 2),
                Coordinates::new(0, 3),
            ]
        );
        assert_eq!(hint(&config).map(|c| c.position()), Some(Coordinates::new(0, 1)));
    }

    #[test]
    fn test_goal_cut_off_is_unsolvable() {
        let config = board("1 5 0 0 0 4\n1 1 0 0 1\n");
        let outcome = solve(config);
        assert!(outcome.is_unsolvable());
        assert_eq!(outcome.stats().total_expansions(), 2);
        assert_eq!(outcome.stats().unique_states(), 1);
    }

    #[test]
    fn test_render() {
        let config = board("2 3 0 0 1 2\n2 0 0\n0 1 0\n");
        assert_eq!(
            config.to_string(),
            "      0  1  2\n    _________\n 0 | *2  _  _\n 1 |  _  1 !_"
        );
    }

    #[test]
    fn test_contract() {
        // Walks, a tip of the 2, and a tip of the 3 are all in reach.
        let config = board("4 4 0 0 3 3\n2 1 0 0\n0 1 0 0\n0 3 0 0\n0 0 0 1\n");
        assert_eq!(assert_contract_within(&config, 4), 9);
    }
}
