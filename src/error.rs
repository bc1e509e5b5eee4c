use crate::grid::{Action, Position};
use thiserror::Error;

/// Errors produced while parsing a maze file into a [`Grid`](crate::grid::Grid).
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("maze has no rows")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("maze has no start cell ('S')")]
    MissingStart,

    #[error("maze has no goal cell ('G')")]
    MissingGoal,

    #[error("duplicate start cell ('S') at {0}")]
    DuplicateStart(Position),

    #[error("duplicate goal cell ('G') at {0}")]
    DuplicateGoal(Position),

    #[error("endpoint {0} is out of bounds or on a wall")]
    BlockedEndpoint(Position),
}

/// Top-level error type for the grid model.
///
/// "No path found" is not an error; searches report it through
/// [`SearchResult`](crate::algorithms::SearchResult) with an absent solution.
#[derive(Error, Debug)]
pub enum GridError {
    /// The maze source could not be read.
    #[error("failed to read maze: {0}")]
    Load(#[from] std::io::Error),

    /// The maze source was readable but malformed.
    #[error("malformed maze: {0}")]
    Format(#[from] FormatError),

    /// An action was applied whose destination is out of bounds or a wall.
    /// Strategies only apply actions they enumerated as legal, so this
    /// indicates a caller contract violation rather than a runtime condition.
    #[error("action {action:?} is not legal from {from}")]
    InvalidMove { from: Position, action: Action },
}

pub type Result<T> = std::result::Result<T, GridError>;
