use thiserror::Error;

/// Error conditions surfaced at the boundary of the solver core.
///
/// A search that exhausts its iteration or threshold budget reports
/// `SolveStatus::Aborted`/`SolveStatus::Exhausted` on the result instead
/// (see [`crate::search::SolveStatus`]); neither is raised as an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CubeError {
    /// An unrecognized move notation token (parser, not the core).
    #[error("invalid move notation: {0}")]
    InvalidMove(String),

    /// A cube state that violates one of the legality invariants.
    #[error("invalid cube state: {0}")]
    InvalidState(String),
}
