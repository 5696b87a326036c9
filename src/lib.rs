//! # cubie-solver
//! A 3x3x3 Rubik's Cube solver built on a cubie-level state model, an exact
//! 18-move group action, three pattern-database heuristics built by
//! exhaustive reverse BFS, and IDA*/IDDFS search with move pruning.

/// Error define.
pub mod error;

/// Cube state on the cubie level: permutation/orientation arrays, the
/// solved constant, and the legality invariants.
pub mod cube;

/// The 18 face turns and their group action on [`cube::CubieCube`].
pub mod moves;

/// Move notation parsing/printing and QTM compression.
pub mod notation;

/// Pattern databases (corner orientation, edge orientation, corner
/// permutation) built by reverse BFS.
pub mod pdb;

/// The admissible heuristic composed from the three pattern databases.
pub mod heuristic;

/// IDA*/IDDFS search with move pruning.
pub mod search;

pub use cube::CubieCube;
pub use error::CubeError;
pub use moves::{Move, MoveTable};
pub use pdb::PatternDatabases;
pub use search::{solve, Algorithm, SolveOptions, SolveResult, SolveStatus};
