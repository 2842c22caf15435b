use std::num::NonZero;

use breadthwise_solver::{Configuration, Solver};

use crate::{GameError, Playable, history::History};

/// Default number of configurations kept for undo.
pub const DEFAULT_HISTORY_CAPACITY: NonZero<usize> = NonZero::new(256).unwrap();

/// An interactive play session over one puzzle.
///
/// Tracks the initial configuration and a bounded undo/redo history of the
/// configurations reached since. Hints are computed by the breadth-first
/// [`Solver`] from the current configuration and recorded like a move.
///
/// # Examples
///
/// ```
/// use breadthwise_game::Session;
/// use breadthwise_puzzles::{Direction, TipOverConfiguration};
///
/// let board: TipOverConfiguration = "1 4 0 0 0 3\n2 0 0 1\n".parse()?;
/// let mut session = Session::new(board);
///
/// session.apply(&Direction::East)?;
/// session.hint()?;
/// session.hint()?;
/// assert!(session.is_solved());
///
/// assert!(session.undo());
/// assert!(!session.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session<P> {
    initial: P,
    history: History<P>,
    solver: Solver,
}

impl<P> Session<P>
where
    P: Playable,
{
    /// Starts a session on `initial` with the default history capacity and solver.
    #[must_use]
    pub fn new(initial: P) -> Self {
        Self::with_solver(initial, DEFAULT_HISTORY_CAPACITY, Solver::new())
    }

    /// Starts a session on `initial` keeping at most `capacity` configurations
    /// and asking `solver` for hints.
    #[must_use]
    pub fn with_solver(initial: P, capacity: NonZero<usize>, solver: Solver) -> Self {
        Self {
            history: History::new(initial.clone(), capacity),
            initial,
            solver,
        }
    }

    /// Returns the configuration the session started from.
    #[must_use]
    pub fn initial(&self) -> &P {
        &self.initial
    }

    /// Returns the configuration shown to the player.
    #[must_use]
    pub fn current(&self) -> &P {
        self.history.current()
    }

    /// Returns the number of configurations the history keeps.
    #[must_use]
    pub fn history_capacity(&self) -> NonZero<usize> {
        self.history.capacity()
    }

    /// Returns `true` if the current configuration is a goal.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.current().is_goal()
    }

    /// Plays `mv` on the current configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadySolved`] if the puzzle is solved, or
    /// [`GameError::Move`] if the move is illegal. The session is unchanged
    /// on error.
    pub fn apply(&mut self, mv: &P::Move) -> Result<&P, GameError> {
        if self.is_solved() {
            return Err(GameError::AlreadySolved);
        }
        let next = self.current().apply_move(mv)?;
        log::debug!("applied move {mv:?}");
        self.history.push(next);
        Ok(self.current())
    }

    /// Advances one step along a shortest path to a goal.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadySolved`] if the puzzle is solved, or
    /// [`GameError::Unsolvable`] if the solver finds no path from the current
    /// configuration.
    pub fn hint(&mut self) -> Result<&P, GameError> {
        if self.is_solved() {
            return Err(GameError::AlreadySolved);
        }
        let next = self
            .solver
            .hint(self.current())
            .ok_or(GameError::Unsolvable)?;
        self.history.push(next);
        Ok(self.current())
    }

    /// Returns `true` if [`undo`](Self::undo) would change the current configuration.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Steps back to the previous configuration, returning `false` if there is none.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Returns `true` if [`redo`](Self::redo) would change the current configuration.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Re-applies the most recently undone configuration, returning `false` if there is none.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Returns to the initial configuration and forgets the history.
    pub fn restart(&mut self) {
        self.history.reset(self.initial.clone());
    }
}
