//! IDA*/IDDFS search: iterative deepening over a bound (f-value for IDA*,
//! depth for IDDFS), a move list pushed/popped as the DFS backtracks, and
//! same-face move pruning at each ply.

use std::time::Instant;

use crate::cube::CubieCube;
use crate::heuristic::heuristic;
use crate::moves::{Move, MoveTable, ALL_MOVES};
use crate::pdb::PatternDatabases;

/// Which search drives the solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    IddFs,
    IdaStar,
}

/// Move ordering is fixed to [`ALL_MOVES`]'s canonical order; this enum
/// exists as a configuration slot with room for future orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveOrder {
    #[default]
    Canonical,
}

/// `solve`'s configuration. `max_iterations` defaults to 30 (IDA* threshold
/// bumps, not moves); `max_depth` (IDDFS only) defaults to 12.
#[derive(Debug, Clone, Copy)]
pub struct SolveOptions {
    pub algorithm: Algorithm,
    pub max_depth: Option<u32>,
    pub max_iterations: Option<u32>,
    pub move_order: MoveOrder,
    /// IDDFS only: track a visited set keyed by packed state bytes. IDA*'s
    /// memory footprint is the DFS stack only and never uses one, regardless
    /// of this flag.
    pub with_visited: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::IdaStar,
            max_depth: Some(12),
            max_iterations: Some(30),
            move_order: MoveOrder::Canonical,
            with_visited: false,
        }
    }
}

/// Terminal state of a solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Found,
    /// Iteration/depth budget exceeded: reported, not raised as an error.
    Aborted,
    /// Threshold grew past a finite safety bound with no solution; should
    /// never occur for a legal cube.
    Exhausted,
}

/// Statistics emitted on every return, found or not.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveStats {
    pub expanded_nodes: u64,
    pub iterations: u32,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone)]
pub struct SolveResult {
    pub status: SolveStatus,
    pub moves: Vec<Move>,
    pub stats: SolveStats,
}

/// Safety bound on IDA* threshold growth past which the search reports
/// [`SolveStatus::Exhausted`] rather than looping forever; unreachable for a
/// legal cube.
const MAX_THRESHOLD: u32 = 40;

/// Solves `state`, dispatching to IDA* or IDDFS per `options.algorithm`.
pub fn solve(
    state: &CubieCube,
    moves: &MoveTable,
    pdbs: &PatternDatabases,
    options: SolveOptions,
) -> SolveResult {
    match options.algorithm {
        Algorithm::IdaStar => ida_star(state, moves, pdbs, options),
        Algorithm::IddFs => iddfs(state, moves, options),
    }
}

/// Forbids repeating the same face as the previous move: consecutive
/// same-face moves commute into one cheaper move.
fn same_face(prev: Option<Move>, m: Move) -> bool {
    matches!(prev, Some(p) if p.face() == m.face())
}

struct IdaCtx<'a> {
    moves: &'a MoveTable,
    pdbs: &'a PatternDatabases,
    threshold: u32,
    next_threshold: u32,
    path: Vec<Move>,
    expanded: u64,
}

impl<'a> IdaCtx<'a> {
    /// Depth-first search bounded by `f = g + h <= threshold`. Returns
    /// `true` once the solved state is reached; the move path on success is
    /// `self.path`.
    fn dfs(&mut self, s: &CubieCube, g: u32, prev: Option<Move>) -> bool {
        self.expanded += 1;
        if s.is_solved() {
            return true;
        }
        let h = heuristic(self.pdbs, s) as u32;
        let f = g + h;
        if f > self.threshold {
            if f < self.next_threshold {
                self.next_threshold = f;
            }
            return false;
        }
        for &m in ALL_MOVES.iter() {
            if same_face(prev, m) {
                continue;
            }
            let s2 = self.moves.apply(s, m);
            self.path.push(m);
            if self.dfs(&s2, g + 1, Some(m)) {
                return true;
            }
            self.path.pop();
        }
        false
    }
}

/// IDA*: iterative deepening over the f-value threshold, driven by the PDB
/// heuristic.
fn ida_star(
    state: &CubieCube,
    moves: &MoveTable,
    pdbs: &PatternDatabases,
    options: SolveOptions,
) -> SolveResult {
    let start_time = Instant::now();
    let max_iterations = options.max_iterations.unwrap_or(u32::MAX);

    let mut threshold = heuristic(pdbs, state) as u32;
    let mut iterations = 0u32;
    let mut expanded_total = 0u64;

    loop {
        if iterations >= max_iterations {
            return SolveResult {
                status: SolveStatus::Aborted,
                moves: Vec::new(),
                stats: SolveStats {
                    expanded_nodes: expanded_total,
                    iterations,
                    elapsed_ms: start_time.elapsed().as_millis() as u64,
                },
            };
        }
        if threshold > MAX_THRESHOLD {
            return SolveResult {
                status: SolveStatus::Exhausted,
                moves: Vec::new(),
                stats: SolveStats {
                    expanded_nodes: expanded_total,
                    iterations,
                    elapsed_ms: start_time.elapsed().as_millis() as u64,
                },
            };
        }

        let mut ctx = IdaCtx {
            moves,
            pdbs,
            threshold,
            next_threshold: u32::MAX,
            path: Vec::new(),
            expanded: 0,
        };
        let found = ctx.dfs(state, 0, None);
        expanded_total += ctx.expanded;
        iterations += 1;

        if found {
            return SolveResult {
                status: SolveStatus::Found,
                moves: ctx.path,
                stats: SolveStats {
                    expanded_nodes: expanded_total,
                    iterations,
                    elapsed_ms: start_time.elapsed().as_millis() as u64,
                },
            };
        }
        if ctx.next_threshold == u32::MAX {
            // No node was pruned above the current threshold: unreachable
            // for a legal cube, kept as a safety exit.
            return SolveResult {
                status: SolveStatus::Exhausted,
                moves: Vec::new(),
                stats: SolveStats {
                    expanded_nodes: expanded_total,
                    iterations,
                    elapsed_ms: start_time.elapsed().as_millis() as u64,
                },
            };
        }
        threshold = ctx.next_threshold;
    }
}

/// IDDFS: same outer structure as IDA* with `h ≡ 0`, bounded by `max_depth`
/// rather than an f-value threshold. A baseline for correctness testing,
/// not for production solving.
fn iddfs(state: &CubieCube, moves: &MoveTable, options: SolveOptions) -> SolveResult {
    let start_time = Instant::now();
    let max_depth = options.max_depth.unwrap_or(12);
    let mut expanded_total = 0u64;

    for depth in 0..=max_depth {
        let mut path = Vec::new();
        let mut expanded = 0u64;
        let mut visited: Option<std::collections::HashSet<CubieCube>> =
            options.with_visited.then(std::collections::HashSet::new);
        if dfs_plain(state, moves, depth, None, &mut path, &mut expanded, &mut visited) {
            expanded_total += expanded;
            return SolveResult {
                status: SolveStatus::Found,
                moves: path,
                stats: SolveStats {
                    expanded_nodes: expanded_total,
                    iterations: depth + 1,
                    elapsed_ms: start_time.elapsed().as_millis() as u64,
                },
            };
        }
        expanded_total += expanded;
    }

    SolveResult {
        status: SolveStatus::Aborted,
        moves: Vec::new(),
        stats: SolveStats {
            expanded_nodes: expanded_total,
            iterations: max_depth + 1,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn dfs_plain(
    s: &CubieCube,
    moves: &MoveTable,
    depth_remaining: u32,
    prev: Option<Move>,
    path: &mut Vec<Move>,
    expanded: &mut u64,
    visited: &mut Option<std::collections::HashSet<CubieCube>>,
) -> bool {
    *expanded += 1;
    if s.is_solved() {
        return true;
    }
    if depth_remaining == 0 {
        return false;
    }
    for &m in ALL_MOVES.iter() {
        if same_face(prev, m) {
            continue;
        }
        let s2 = moves.apply(s, m);
        if let Some(seen) = visited {
            if seen.contains(&s2) {
                continue;
            }
            seen.insert(s2);
        }
        path.push(m);
        if dfs_plain(&s2, moves, depth_remaining - 1, Some(m), path, expanded, visited) {
            return true;
        }
        path.pop();
    }
    false
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::notation::parse_scramble;

    fn env() -> (MoveTable, PatternDatabases) {
        let moves = MoveTable::new();
        let pdbs = PatternDatabases::build(&moves, |_| {});
        (moves, pdbs)
    }

    #[test]
    fn empty_scramble_solves_immediately() {
        let (moves, pdbs) = env();
        let result = solve(&CubieCube::solved(), &moves, &pdbs, SolveOptions::default());
        assert_eq!(result.status, SolveStatus::Found);
        assert!(result.moves.is_empty());
        assert!(result.stats.expanded_nodes >= 1);
    }

    #[test]
    fn single_move_undoes_to_inverse() {
        let (moves, pdbs) = env();
        let scramble = parse_scramble("U").unwrap();
        let s = moves.apply_all(&CubieCube::solved(), &scramble);
        let result = solve(&s, &moves, &pdbs, SolveOptions::default());
        assert_eq!(result.status, SolveStatus::Found);
        assert_eq!(result.moves, vec![Move::U3]);
    }

    #[test]
    fn two_move_scramble_solves_in_two() {
        let (moves, pdbs) = env();
        let scramble = parse_scramble("R U").unwrap();
        let s = moves.apply_all(&CubieCube::solved(), &scramble);
        let result = solve(&s, &moves, &pdbs, SolveOptions::default());
        assert_eq!(result.status, SolveStatus::Found);
        assert_eq!(result.moves, vec![Move::U3, Move::R3]);
    }

    #[test]
    fn four_move_cycle_solves_to_empty() {
        let (moves, pdbs) = env();
        let scramble = parse_scramble("U U U U").unwrap();
        let s = moves.apply_all(&CubieCube::solved(), &scramble);
        let result = solve(&s, &moves, &pdbs, SolveOptions::default());
        assert_eq!(result.status, SolveStatus::Found);
        assert!(result.moves.is_empty());
    }

    #[test]
    fn superflip_fragment_solves_in_two() {
        // F and B commute, so both "F' B'" and "B' F'" are valid optimal
        // solutions; the canonical move order fixed in ALL_MOVES tries the
        // F face before the B face, so this search settles on "F' B'".
        // Asserted on length and soundness rather than the exact token
        // order, since either is a correct length-2 solve.
        let (moves, pdbs) = env();
        let scramble = parse_scramble("F B").unwrap();
        let s = moves.apply_all(&CubieCube::solved(), &scramble);
        let result = solve(&s, &moves, &pdbs, SolveOptions::default());
        assert_eq!(result.status, SolveStatus::Found);
        assert_eq!(result.moves.len(), 2);
        assert!(moves.apply_all(&s, &result.moves).is_solved());
    }

    #[test]
    fn solution_replays_to_solved() {
        let (moves, pdbs) = env();
        let scramble = parse_scramble("R U2 F' L D B2").unwrap();
        let s = moves.apply_all(&CubieCube::solved(), &scramble);
        let result = solve(&s, &moves, &pdbs, SolveOptions::default());
        assert_eq!(result.status, SolveStatus::Found);
        let replayed = moves.apply_all(&s, &result.moves);
        assert!(replayed.is_solved());
    }

    #[test]
    fn iddfs_agrees_with_idastar_on_a_short_scramble() {
        let (moves, pdbs) = env();
        let scramble = parse_scramble("R U R'").unwrap();
        let s = moves.apply_all(&CubieCube::solved(), &scramble);
        let ida = solve(
            &s,
            &moves,
            &pdbs,
            SolveOptions {
                algorithm: Algorithm::IdaStar,
                ..SolveOptions::default()
            },
        );
        let idd = solve(
            &s,
            &moves,
            &pdbs,
            SolveOptions {
                algorithm: Algorithm::IddFs,
                ..SolveOptions::default()
            },
        );
        assert_eq!(ida.status, SolveStatus::Found);
        assert_eq!(idd.status, SolveStatus::Found);
        assert_eq!(ida.moves.len(), idd.moves.len());
    }
}
