//! Interactive play sessions for the breadthwise board puzzles.
//!
//! A [`Session`] wraps any [`Playable`] configuration with bounded undo/redo
//! history, restart, and solver-backed hints. The session never runs a
//! search except when asked for a hint.

pub use self::{
    error::GameError,
    playable::{FigureMove, Playable},
    session::{DEFAULT_HISTORY_CAPACITY, Session},
};

mod error;
mod history;
mod playable;
mod session;
