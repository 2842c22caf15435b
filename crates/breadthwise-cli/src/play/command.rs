use std::{path::PathBuf, str::FromStr};

use breadthwise_puzzles::{Coordinates, Direction, ParseDirectionError};

/// One line typed at the play prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Help,
    Show,
    Move(Direction),
    Choose(Coordinates),
    Go(Direction),
    Undo,
    Redo,
    Restart,
    Hint,
    Load(PathBuf),
    Reload,
    Quit,
}

/// Errors that can occur when reading a play command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CommandError {
    #[display("unknown command `{name}`")]
    Unknown { name: String },
    #[display("usage: {usage}")]
    Usage { usage: &'static str },
    #[display("invalid number `{token}`")]
    InvalidNumber { token: String },
    #[display("{_0}")]
    #[from]
    Direction(#[error(not(source))] ParseDirectionError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Ok(Self::Show);
        };

        let command = match (name.to_ascii_lowercase().as_str(), args) {
            ("help" | "?", []) => Self::Help,
            ("show", []) => Self::Show,
            ("move", [direction]) => Self::Move(direction.parse()?),
            ("go", [direction]) => Self::Go(direction.parse()?),
            ("choose", [row, col]) => Self::Choose(Coordinates::new(number(row)?, number(col)?)),
            ("undo", []) => Self::Undo,
            ("redo", []) => Self::Redo,
            ("restart", []) => Self::Restart,
            ("hint", []) => Self::Hint,
            ("load", [file]) => Self::Load(PathBuf::from(*file)),
            ("reload", []) => Self::Reload,
            ("quit" | "exit", []) => Self::Quit,
            (known, _) => {
                let usage = usage_of(known).ok_or_else(|| CommandError::Unknown {
                    name: name.to_owned(),
                })?;
                return Err(CommandError::Usage { usage });
            }
        };
        Ok(command)
    }
}

fn number(token: &str) -> Result<i32, CommandError> {
    token.parse().map_err(|_| CommandError::InvalidNumber {
        token: token.to_owned(),
    })
}

/// Usage lines for every command, in help order.
pub(crate) const USAGE: [(&str, &str); 12] = [
    ("help", "show all commands"),
    ("show", "show the board"),
    ("move {north|south|east|west}", "move the tipper (tip-over)"),
    ("choose ROW COL", "pick the figure to move (lunar landing)"),
    ("go {north|south|east|west}", "slide the chosen figure (lunar landing)"),
    ("undo", "take back the last move"),
    ("redo", "replay an undone move"),
    ("restart", "go back to the starting board"),
    ("hint", "make the next move for me"),
    ("load FILE", "load a new board file"),
    ("reload", "load the current board file again"),
    ("quit", "leave the game"),
];

fn usage_of(name: &str) -> Option<&'static str> {
    USAGE
        .iter()
        .map(|&(usage, _)| usage)
        .find(|usage| usage.split_whitespace().next() == Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        let cases = [
            ("help", Command::Help),
            ("  SHOW ", Command::Show),
            ("", Command::Show),
            ("move n", Command::Move(Direction::North)),
            ("go West", Command::Go(Direction::West)),
            ("choose 2 -1", Command::Choose(Coordinates::new(2, -1))),
            ("undo", Command::Undo),
            ("redo", Command::Redo),
            ("restart", Command::Restart),
            ("hint", Command::Hint),
            ("load boards/a.txt", Command::Load(PathBuf::from("boards/a.txt"))),
            ("reload", Command::Reload),
            ("quit", Command::Quit),
        ];
        for (line, expected) in cases {
            assert_eq!(line.parse(), Ok(expected), "{line:?}");
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::Unknown {
                name: "jump".to_owned()
            })
        );
        assert_eq!(
            "choose 1".parse::<Command>(),
            Err(CommandError::Usage {
                usage: "choose ROW COL"
            })
        );
        assert_eq!(
            "hint now".parse::<Command>(),
            Err(CommandError::Usage { usage: "hint" })
        );
        assert_eq!(
            "choose a 1".parse::<Command>(),
            Err(CommandError::InvalidNumber {
                token: "a".to_owned()
            })
        );
        let err = "move up".parse::<Command>().unwrap_err();
        assert!(matches!(err, CommandError::Direction(_)));
        assert!(std::error::Error::source(&err).is_none());
    }
}
