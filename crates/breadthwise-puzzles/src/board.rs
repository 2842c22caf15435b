use std::{fs, path::Path, str::FromStr};

use crate::{LoadError, ParseError};

/// A puzzle whose start configuration is described by a text board.
///
/// Implementors parse the board with [`FromStr`]; [`load`](Self::load) adds
/// file access and attaches the path to any error.
pub trait Board: FromStr<Err = ParseError> {
    /// Reads and parses the board file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, or
    /// [`LoadError::Parse`] if its contents are not a valid board.
    fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        let board = text.parse::<Self>().map_err(|source| LoadError::Parse {
            path: path.to_owned(),
            source,
        })?;
        log::debug!("loaded board from {}", path.display());
        Ok(board)
    }
}

/// Whitespace-separated integer reader for board headers and cell data.
#[derive(Debug)]
pub(crate) struct Tokens<I> {
    inner: I,
}

impl<'a, I> Tokens<I>
where
    I: Iterator<Item = &'a str>,
{
    pub(crate) fn new(inner: I) -> Self {
        Self { inner }
    }

    pub(crate) fn next_number<T: FromStr>(&mut self, what: &'static str) -> Result<T, ParseError> {
        let token = self.inner.next().ok_or(ParseError::MissingValue { what })?;
        parse_number(token, what)
    }

    pub(crate) fn finish(mut self) -> Result<(), ParseError> {
        match self.inner.next() {
            Some(token) => Err(ParseError::TrailingData {
                token: token.to_owned(),
            }),
            None => Ok(()),
        }
    }
}

pub(crate) fn parse_number<T: FromStr>(token: &str, what: &'static str) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        what,
        token: token.to_owned(),
    })
}

/// Checks that a declared grid size has at least one cell and can be
/// addressed by [`Coordinates`](crate::Coordinates).
///
/// Returns the number of cells.
pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<usize, ParseError> {
    if rows == 0 || cols == 0 {
        return Err(ParseError::EmptyGrid { rows, cols });
    }
    let fits = |n: usize| i32::try_from(n).is_ok();
    rows.checked_mul(cols)
        .filter(|_| fits(rows) && fits(cols))
        .ok_or(ParseError::GridTooLarge { rows, cols })
}

/// Writes the column header and separator shared by the grid renderings.
///
/// Rows follow as `\n{row:>2} |` and three-character cells, so the output
/// never ends with a newline.
pub(crate) fn write_header(f: &mut std::fmt::Formatter<'_>, cols: usize) -> std::fmt::Result {
    write!(f, "    ")?;
    for col in 0..cols {
        write!(f, "{col:>3}")?;
    }
    writeln!(f)?;
    write!(f, "    {}", "___".repeat(cols))
}
