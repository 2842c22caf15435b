//! The terminal play loop for the board puzzles.

use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use breadthwise_game::{FigureMove, GameError, Playable, Session};
use breadthwise_puzzles::{
    Board, Coordinates, LoadError, LunarLandingConfiguration, MoveError, TipOverConfiguration,
};
use breadthwise_solver::Solver;

use self::command::{Command, CommandError, USAGE};

mod command;

/// How a board puzzle turns movement commands into moves.
pub(crate) trait Controls: Playable + Board + Display {
    /// Checks that `pos` names something that can be moved.
    ///
    /// Puzzles without figures reject every selection.
    fn select(&self, _pos: Coordinates) -> Result<(), PlayError> {
        Err(PlayError::Usage {
            usage: "move {north|south|east|west}",
        })
    }

    /// Builds the move requested by `command`, given the current selection.
    fn plan(command: &Command, selection: Option<Coordinates>) -> Result<Self::Move, PlayError>;
}

impl Controls for LunarLandingConfiguration {
    fn select(&self, pos: Coordinates) -> Result<(), PlayError> {
        match self.figure_at(pos) {
            Some(_) => Ok(()),
            None => Err(MoveError::NoFigure { coordinates: pos }.into()),
        }
    }

    fn plan(command: &Command, selection: Option<Coordinates>) -> Result<FigureMove, PlayError> {
        match *command {
            Command::Go(direction) => {
                let figure = selection.ok_or(PlayError::NoSelection)?;
                Ok(FigureMove { figure, direction })
            }
            _ => Err(PlayError::Usage {
                usage: "choose ROW COL, then go {north|south|east|west}",
            }),
        }
    }
}

impl Controls for TipOverConfiguration {
    fn plan(command: &Command, _selection: Option<Coordinates>) -> Result<Self::Move, PlayError> {
        match *command {
            Command::Move(direction) => Ok(direction),
            _ => Err(PlayError::Usage {
                usage: "move {north|south|east|west}",
            }),
        }
    }
}

/// Problems reported at the prompt without ending the game.
///
/// Wrapped errors are shown as-is and not repeated as a source.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum PlayError {
    #[display("{_0}")]
    #[from]
    Command(#[error(not(source))] CommandError),
    #[display("{_0}")]
    #[from]
    Game(#[error(not(source))] GameError),
    #[display("{_0}")]
    #[from]
    Load(#[error(not(source))] LoadError),
    #[display("this puzzle is played with: {usage}")]
    Usage { usage: &'static str },
    #[display("choose a figure first")]
    NoSelection,
}

impl From<MoveError> for PlayError {
    fn from(err: MoveError) -> Self {
        Self::Game(GameError::Move(err))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A play session bound to the board file it was loaded from.
#[derive(Debug)]
pub(crate) struct Player<P> {
    path: PathBuf,
    session: Session<P>,
    selection: Option<Coordinates>,
    solver: Solver,
}

impl<P> Player<P>
where
    P: Controls,
{
    pub(crate) fn open(path: &Path, solver: Solver) -> Result<Self, LoadError> {
        let board = P::load(path)?;
        Ok(Self {
            path: path.to_owned(),
            session: Self::session(board, solver),
            selection: None,
            solver,
        })
    }

    fn session(board: P, solver: Solver) -> Session<P> {
        Session::with_solver(board, breadthwise_game::DEFAULT_HISTORY_CAPACITY, solver)
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub(crate) fn run(&mut self, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        writeln!(out, "Loaded {}", self.path.display())?;
        self.show(&mut out)?;
        write_prompt(&mut out)?;
        for line in input.lines() {
            let line = line?;
            let flow = match line.parse::<Command>() {
                Ok(command) => self.execute(command, &mut out)?,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                return Ok(());
            }
            write_prompt(&mut out)?;
        }
        writeln!(out)
    }

    fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        log::debug!("play command: {command:?}");
        match &command {
            Command::Help => write_help(out)?,
            Command::Show => self.show(out)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Undo => self.step_history(Session::undo, "nothing to undo", out)?,
            Command::Redo => self.step_history(Session::redo, "nothing to redo", out)?,
            Command::Restart => {
                self.session.restart();
                self.selection = None;
                self.show(out)?;
            }
            Command::Reload => {
                let path = self.path.clone();
                self.load(&path, out)?;
            }
            Command::Load(path) => self.load(path, out)?,
            Command::Hint => {
                let hinted = self.session.hint().map(|_| ());
                match hinted {
                    Ok(()) => self.show_after_move("I WON!", out)?,
                    Err(err) => writeln!(out, "{}", PlayError::from(err))?,
                }
            }
            Command::Choose(pos) => match self.session.current().select(*pos) {
                Ok(()) => {
                    self.selection = Some(*pos);
                    writeln!(out, "Chose the figure at {pos}")?;
                }
                Err(err) => {
                    self.selection = None;
                    writeln!(out, "{err}")?;
                }
            },
            Command::Move(_) | Command::Go(_) => {
                let selection = self.selection.take();
                let applied = P::plan(&command, selection).and_then(|mv| {
                    self.session
                        .apply(&mv)
                        .map(|_| ())
                        .map_err(PlayError::from)
                });
                match applied {
                    Ok(()) => self.show_after_move("YOU WON!", out)?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn step_history(
        &mut self,
        step: fn(&mut Session<P>) -> bool,
        nothing: &str,
        out: &mut impl Write,
    ) -> io::Result<()> {
        self.selection = None;
        if step(&mut self.session) {
            self.show(out)
        } else {
            writeln!(out, "{nothing}")
        }
    }

    fn load(&mut self, path: &Path, out: &mut impl Write) -> io::Result<()> {
        match P::load(path) {
            Ok(board) => {
                self.path = path.to_owned();
                self.session = Self::session(board, self.solver);
                self.selection = None;
                writeln!(out, "Loaded {}", path.display())?;
                self.show(out)
            }
            Err(err) => writeln!(out, "{}", PlayError::from(err)),
        }
    }

    fn show(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.session.current())
    }

    fn show_after_move(&self, banner: &str, out: &mut impl Write) -> io::Result<()> {
        self.show(out)?;
        if self.session.is_solved() {
            writeln!(out, "{banner}")?;
        }
        Ok(())
    }
}

fn write_prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn write_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    for (usage, description) in USAGE {
        writeln!(out, "  {usage:<32} {description}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{error::Error as _, io::Cursor};

    use super::*;

    fn board_path(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../boards")
            .join(name)
    }

    fn play<P: Controls>(board: &str, script: &str) -> String {
        let mut player = Player::<P>::open(&board_path(board), Solver::new()).unwrap();
        let mut out = Vec::new();
        player.run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_lunar_landing_win() {
        let out = play::<LunarLandingConfiguration>(
            "lunar_landing/drop.txt",
            "choose 0 0\ngo south\nchoose 2 0\ngo east\nquit\n",
        );
        assert!(out.starts_with("Loaded "));
        assert!(out.contains("Chose the figure at (0, 0)"));
        assert!(out.contains(" 2 |  E  !  C"));
        assert!(out.contains(" 2 |  _ !E  C"));
        assert!(out.contains("YOU WON!"));
    }

    #[test]
    fn test_lunar_landing_requires_selection() {
        let out = play::<LunarLandingConfiguration>(
            "lunar_landing/drop.txt",
            "go south\nchoose 1 1\nmove north\n",
        );
        assert!(out.contains("choose a figure first"));
        assert!(out.contains("no figure at (1, 1)"));
        assert!(out.contains("this puzzle is played with: choose ROW COL"));
    }

    #[test]
    fn test_tip_over_win_undo_and_restart() {
        let out = play::<TipOverConfiguration>(
            "tip_over/corner.txt",
            "move south\nmove south\nmove east\nmove east\nmove west\nundo\nrestart\nundo\nquit\n",
        );
        assert!(out.contains("YOU WON!"));
        assert!(out.contains("illegal move") || out.contains("already solved"));
        assert!(out.contains("nothing to undo"));
    }

    #[test]
    fn test_tip_over_rejects_lunar_commands() {
        let out = play::<TipOverConfiguration>("tip_over/corner.txt", "choose 0 0\ngo east\n");
        assert_eq!(
            out.matches("this puzzle is played with: move {north|south|east|west}")
                .count(),
            2
        );
    }

    #[test]
    fn test_hints_solve_the_board() {
        let out = play::<TipOverConfiguration>(
            "tip_over/corner.txt",
            "hint\nhint\nhint\nhint\nhint\n",
        );
        assert!(out.contains("I WON!"));
        assert!(out.contains("the puzzle is already solved"));
    }

    #[test]
    fn test_hint_on_stranded_board() {
        let out = play::<TipOverConfiguration>("tip_over/stranded.txt", "hint\n");
        assert!(out.contains("no solution from here"));
    }

    #[test]
    fn test_load_and_reload() {
        let quarry = board_path("tip_over/quarry.txt");
        let script = format!("load {}\nmove west\nreload\nload missing.txt\nhelp\n", quarry.display());
        let out = play::<TipOverConfiguration>("tip_over/corner.txt", &script);
        assert_eq!(out.matches("Loaded ").count(), 3);
        assert!(out.contains("failed to read missing.txt"));
        assert!(out.contains("Commands:"));
    }

    #[test]
    fn test_wrapped_errors_are_not_repeated_as_source() {
        let errors = [
            PlayError::from(GameError::Unsolvable),
            PlayError::from("fly".parse::<Command>().unwrap_err()),
            PlayError::from(TipOverConfiguration::load(board_path("missing.txt")).unwrap_err()),
        ];
        for err in errors {
            assert!(err.source().is_none(), "{err:?}");
        }
        assert_eq!(
            PlayError::from(GameError::Unsolvable).to_string(),
            "no solution from here"
        );
    }

    #[test]
    fn test_bad_command_keeps_playing() {
        let out = play::<TipOverConfiguration>("tip_over/corner.txt", "fly\nmove\nmove south\n");
        assert!(out.contains("unknown command `fly`"));
        assert!(out.contains("usage: move {north|south|east|west}"));
        assert!(out.contains(" 1 | *1"));
    }
}
