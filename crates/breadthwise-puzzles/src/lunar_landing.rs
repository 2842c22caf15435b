//! The lunar landing puzzle: slide figures across a grid until the explorer reaches the lander.
//!
//! Figures never stop on their own. A figure moves only toward a free
//! neighboring cell and keeps sliding until the next cell holds another
//! figure, stopping just before it. A slide that would carry a figure off the
//! grid is not allowed. The explorer is stopped only by robots; robots are
//! stopped by other robots and by the explorer.
//!
//! # Board format
//!
//! ```text
//! 5 5      <- rows, columns
//! 2 2      <- lander row, column
//! E 0 0    <- explorer
//! A 4 0    <- robots: name, row, column
//! B 0 4
//! ```
//!
//! A blank line or the end of input ends the figure list.

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    str::FromStr,
    sync::Arc,
};

use breadthwise_solver::Configuration;

use crate::{
    Board, Coordinates, Direction, MoveError, ParseError,
    board::{self, Tokens},
};

const EXPLORER: &str = "E";

/// An arrangement of the explorer and robots around a fixed lander.
///
/// The lander position is part of every configuration, so configurations
/// loaded from different boards never share state.
///
/// # Examples
///
/// ```
/// use breadthwise_puzzles::{Coordinates, Direction, LunarLandingConfiguration};
///
/// let board: LunarLandingConfiguration = "1 4\n0 2\nE 0 0\nA 0 3\n".parse()?;
/// let landed = board.move_figure(Coordinates::new(0, 0), Direction::East)?;
/// assert_eq!(landed.explorer(), Coordinates::new(0, 2));
/// assert!(breadthwise_solver::solve(board).is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LunarLandingConfiguration {
    rows: usize,
    cols: usize,
    lander: Coordinates,
    explorer: Coordinates,
    robots: BTreeMap<Coordinates, Arc<str>>,
}

impl LunarLandingConfiguration {
    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the lander position.
    #[must_use]
    pub fn lander(&self) -> Coordinates {
        self.lander
    }

    /// Returns the explorer position.
    #[must_use]
    pub fn explorer(&self) -> Coordinates {
        self.explorer
    }

    /// Returns the robots and their names in row-major order.
    pub fn robots(&self) -> impl Iterator<Item = (Coordinates, &str)> {
        self.robots.iter().map(|(&pos, name)| (pos, &**name))
    }

    /// Returns the name of the figure standing on `pos`, if any.
    ///
    /// The explorer is named `E`.
    #[must_use]
    pub fn figure_at(&self, pos: Coordinates) -> Option<&str> {
        if pos == self.explorer {
            return Some(EXPLORER);
        }
        self.robots.get(&pos).map(|name| &**name)
    }

    /// Slides the figure standing on `figure` in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoFigure`] if no figure stands on `figure`, or
    /// [`MoveError::Blocked`] if the figure cannot move that way.
    pub fn move_figure(&self, figure: Coordinates, direction: Direction) -> Result<Self, MoveError> {
        if self.figure_at(figure).is_none() {
            return Err(MoveError::NoFigure { coordinates: figure });
        }
        self.slid(figure, direction)
            .ok_or(MoveError::Blocked { direction })
    }

    fn contains(&self, pos: Coordinates) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(pos.row()), usize::try_from(pos.col())) else {
            return false;
        };
        row < self.rows && col < self.cols
    }

    /// Returns where a figure starting at `from` comes to rest, or `None` if it cannot move.
    fn slide_target(
        &self,
        from: Coordinates,
        direction: Direction,
        blocked: impl Fn(Coordinates) -> bool,
    ) -> Option<Coordinates> {
        let mut pos = from.offset(direction);
        if !self.contains(pos) || blocked(pos) {
            return None;
        }
        loop {
            let next = pos.offset(direction);
            if !self.contains(next) {
                return None;
            }
            if blocked(next) {
                return Some(pos);
            }
            pos = next;
        }
    }

    fn slid(&self, figure: Coordinates, direction: Direction) -> Option<Self> {
        if figure == self.explorer {
            let target =
                self.slide_target(figure, direction, |pos| self.robots.contains_key(&pos))?;
            return Some(Self {
                explorer: target,
                ..self.clone()
            });
        }

        let target = self.slide_target(figure, direction, |pos| {
            pos == self.explorer || self.robots.contains_key(&pos)
        })?;
        let mut robots = self.robots.clone();
        let name = robots.remove(&figure)?;
        robots.insert(target, name);
        Some(Self {
            robots,
            ..self.clone()
        })
    }

    fn cell_label(&self, pos: Coordinates) -> String {
        let figure = self.figure_at(pos);
        match (pos == self.lander, figure) {
            (true, Some(name)) => format!("!{name}"),
            (true, None) => "!".to_owned(),
            (false, Some(name)) => name.to_owned(),
            (false, None) => "_".to_owned(),
        }
    }
}

impl Configuration for LunarLandingConfiguration {
    fn neighbors(&self) -> Vec<Self> {
        let figures = std::iter::once(self.explorer).chain(self.robots.keys().copied());
        figures
            .flat_map(|figure| {
                Direction::ALL
                    .into_iter()
                    .filter_map(move |direction| self.slid(figure, direction))
            })
            .collect()
    }

    fn is_goal(&self) -> bool {
        self.explorer == self.lander
    }
}

impl Display for LunarLandingConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = i32::try_from(self.rows).map_err(|_| fmt::Error)?;
        let cols = i32::try_from(self.cols).map_err(|_| fmt::Error)?;
        board::write_header(f, self.cols)?;
        for row in 0..rows {
            write!(f, "\n{row:>2} |")?;
            for col in 0..cols {
                write!(f, "{:>3}", self.cell_label(Coordinates::new(row, col)))?;
            }
        }
        Ok(())
    }
}

impl FromStr for LunarLandingConfiguration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().enumerate();

        let mut header = Vec::new();
        while header.len() < 4 {
            let Some((_, line)) = lines.next() else {
                break;
            };
            header.extend(line.split_whitespace());
        }
        let mut tokens = Tokens::new(header.into_iter());
        let rows = tokens.next_number("rows")?;
        let cols = tokens.next_number("columns")?;
        let lander = Coordinates::new(
            tokens.next_number("lander row")?,
            tokens.next_number("lander column")?,
        );
        tokens.finish()?;
        board::check_dimensions(rows, cols)?;

        let mut config = Self {
            rows,
            cols,
            lander,
            explorer: lander,
            robots: BTreeMap::new(),
        };
        if !config.contains(lander) {
            return Err(ParseError::OffGrid {
                what: "lander",
                coordinates: lander,
            });
        }

        let mut explorer = None;
        for (index, line) in lines {
            let text = line.trim();
            if text.is_empty() {
                break;
            }
            let fields: Vec<&str> = text.split_whitespace().collect();
            let &[name, row, col] = fields.as_slice() else {
                return Err(ParseError::InvalidFigure {
                    line: index + 1,
                    text: text.to_owned(),
                });
            };
            let pos = Coordinates::new(
                board::parse_number(row, "figure row")?,
                board::parse_number(col, "figure column")?,
            );

            let what = if name == EXPLORER { "explorer" } else { "robot" };
            if !config.contains(pos) {
                return Err(ParseError::OffGrid {
                    what,
                    coordinates: pos,
                });
            }
            if explorer == Some(pos) || config.robots.contains_key(&pos) {
                return Err(ParseError::OverlappingFigures { coordinates: pos });
            }

            if name == EXPLORER {
                if explorer.is_some() {
                    return Err(ParseError::DuplicateExplorer);
                }
                explorer = Some(pos);
            } else {
                config.robots.insert(pos, name.into());
            }
        }

        config.explorer = explorer.ok_or(ParseError::MissingExplorer)?;
        Ok(config)
    }
}

impl Board for LunarLandingConfiguration {}
