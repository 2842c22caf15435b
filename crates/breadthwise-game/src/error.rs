use breadthwise_puzzles::MoveError;

/// Errors that can occur when changing a play session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
    derive_more::IsVariant,
)]
pub enum GameError {
    /// The board is already solved.
    #[display("the puzzle is already solved")]
    AlreadySolved,
    /// No goal can be reached from the current configuration.
    #[display("no solution from here")]
    Unsolvable,
    /// The move is not allowed.
    #[display("illegal move: {_0}")]
    #[from]
    Move(MoveError),
}
