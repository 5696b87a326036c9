//! The 18 face turns and their group action on [`CubieCube`].
//!
//! Each move is stored as a per-move inverse-permutation table computed once
//! at construction time, so [`MoveTable::apply`] is a fixed-size read/write
//! loop rather than re-deriving a composition on every call. Doubles and
//! inverses are derived from the six quarter-turn-clockwise primitives by
//! composing deltas (see [`compose`]).

use std::fmt;
use std::str::FromStr;

use crate::cube::CubieCube;
use crate::error::CubeError;

/// A quarter-turn-metric move: one of 6 faces times {clockwise, double,
/// counter-clockwise}.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Move {
    U, U2, U3,
    D, D2, D3,
    L, L2, L3,
    R, R2, R3,
    F, F2, F3,
    B, B2, B3,
}

use Move::*;

/// Canonical move order used for search move ordering: face U, D, L, R, F,
/// B, then turn in {clockwise, double, counter-clockwise}.
pub const ALL_MOVES: [Move; 18] = [
    U, U2, U3, D, D2, D3, L, L2, L3, R, R2, R3, F, F2, F3, B, B2, B3,
];

impl Move {
    /// Move id 0..17 used in search trees.
    pub fn index(self) -> usize {
        ALL_MOVES.iter().position(|&m| m == self).expect("exhaustive")
    }

    /// The face this move turns, as an index 0..5 matching `ALL_MOVES`'
    /// grouping (U=0, D=1, L=2, R=3, F=4, B=5). Used by search to forbid
    /// repeating the same face on consecutive moves.
    pub fn face(self) -> u8 {
        (self.index() / 3) as u8
    }

    pub fn inverse(self) -> Move {
        match self {
            U => U3, U3 => U, U2 => U2,
            D => D3, D3 => D, D2 => D2,
            L => L3, L3 => L, L2 => L2,
            R => R3, R3 => R, R2 => R2,
            F => F3, F3 => F, F2 => F2,
            B => B3, B3 => B, B2 => B2,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            U3 => write!(f, "U'"),
            D3 => write!(f, "D'"),
            L3 => write!(f, "L'"),
            R3 => write!(f, "R'"),
            F3 => write!(f, "F'"),
            B3 => write!(f, "B'"),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(U), "U'" => Ok(U3), "U2" => Ok(U2),
            "D" => Ok(D), "D'" => Ok(D3), "D2" => Ok(D2),
            "L" => Ok(L), "L'" => Ok(L3), "L2" => Ok(L2),
            "R" => Ok(R), "R'" => Ok(R3), "R2" => Ok(R2),
            "F" => Ok(F), "F'" => Ok(F3), "F2" => Ok(F2),
            "B" => Ok(B), "B'" => Ok(B3), "B2" => Ok(B2),
            other => Err(CubeError::InvalidMove(other.to_string())),
        }
    }
}

/// One quarter turn's effect on a solved cube, before the inverse-permutation
/// cache is derived.
#[derive(Clone, Copy)]
struct Delta {
    corner_perm: [u8; 8],
    corner_twist: [u8; 8],
    edge_perm: [u8; 12],
    edge_flip: [u8; 12],
}

/// Composes two deltas as "apply `a`, then apply `b`".
fn compose(a: &Delta, b: &Delta) -> Delta {
    let mut corner_perm = [0u8; 8];
    let mut corner_twist = [0u8; 8];
    for i in 0..8 {
        corner_perm[i] = a.corner_perm[b.corner_perm[i] as usize];
        corner_twist[i] = (a.corner_twist[b.corner_perm[i] as usize] + b.corner_twist[i]) % 3;
    }
    let mut edge_perm = [0u8; 12];
    let mut edge_flip = [0u8; 12];
    for i in 0..12 {
        edge_perm[i] = a.edge_perm[b.edge_perm[i] as usize];
        edge_flip[i] = (a.edge_flip[b.edge_perm[i] as usize] + b.edge_flip[i]) % 2;
    }
    Delta {
        corner_perm,
        corner_twist,
        edge_perm,
        edge_flip,
    }
}

fn invert_perm(perm: &[u8]) -> Vec<u8> {
    let mut inv = vec![0u8; perm.len()];
    for (i, &p) in perm.iter().enumerate() {
        inv[p as usize] = i as u8;
    }
    inv
}

/// The six quarter-turn-clockwise primitives.
const U_DELTA: Delta = Delta {
    corner_perm: [3, 0, 1, 2, 4, 5, 6, 7],
    corner_twist: [0; 8],
    edge_perm: [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
    edge_flip: [0; 12],
};
const R_DELTA: Delta = Delta {
    corner_perm: [4, 1, 2, 0, 7, 5, 6, 3],
    corner_twist: [2, 0, 0, 1, 1, 0, 0, 2],
    edge_perm: [8, 1, 2, 3, 11, 5, 6, 7, 4, 9, 10, 0],
    edge_flip: [0; 12],
};
const F_DELTA: Delta = Delta {
    corner_perm: [1, 5, 2, 3, 0, 4, 6, 7],
    corner_twist: [1, 2, 0, 0, 2, 1, 0, 0],
    edge_perm: [0, 9, 2, 3, 4, 8, 6, 7, 1, 5, 10, 11],
    edge_flip: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};
const D_DELTA: Delta = Delta {
    corner_perm: [0, 1, 2, 3, 5, 6, 7, 4],
    corner_twist: [0; 8],
    edge_perm: [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10, 11],
    edge_flip: [0; 12],
};
const L_DELTA: Delta = Delta {
    corner_perm: [0, 2, 6, 3, 4, 1, 5, 7],
    corner_twist: [0, 1, 2, 0, 0, 2, 1, 0],
    edge_perm: [0, 1, 10, 3, 4, 5, 9, 7, 8, 2, 6, 11],
    edge_flip: [0; 12],
};
const B_DELTA: Delta = Delta {
    corner_perm: [0, 1, 3, 7, 4, 5, 2, 6],
    corner_twist: [0, 0, 1, 2, 0, 0, 2, 1],
    edge_perm: [0, 1, 2, 11, 4, 5, 6, 10, 8, 9, 3, 7],
    edge_flip: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

fn primitive_delta(face_move: Move) -> Delta {
    match face_move {
        U => U_DELTA,
        D => D_DELTA,
        L => L_DELTA,
        R => R_DELTA,
        F => F_DELTA,
        B => B_DELTA,
        _ => unreachable!("primitive_delta is only called with a quarter-turn-clockwise move"),
    }
}

fn delta_for(m: Move) -> Delta {
    let face = match m {
        U | U2 | U3 => U,
        D | D2 | D3 => D,
        L | L2 | L3 => L,
        R | R2 | R3 => R,
        F | F2 | F3 => F,
        B | B2 | B3 => B,
    };
    let base = primitive_delta(face);
    match m {
        U | D | L | R | F | B => base,
        U2 | D2 | L2 | R2 | F2 | B2 => compose(&base, &base),
        U3 | D3 | L3 | R3 | F3 | B3 => compose(&compose(&base, &base), &base),
    }
}

/// A single move's permutation+twist tuple plus the cached inverse
/// permutations, so [`MoveTable::apply`] is a fixed 20-read/20-write
/// operation independent of the move.
struct MoveEntry {
    corner_perm_inv: [u8; 8],
    corner_twist: [u8; 8],
    edge_perm_inv: [u8; 12],
    edge_flip: [u8; 12],
}

/// Precomputed application tables for all 18 moves.
pub struct MoveTable {
    entries: [MoveEntry; 18],
}

impl MoveTable {
    pub fn new() -> Self {
        let entries = ALL_MOVES.map(|m| {
            let d = delta_for(m);
            let corner_perm_inv = invert_perm(&d.corner_perm);
            let edge_perm_inv = invert_perm(&d.edge_perm);
            MoveEntry {
                corner_perm_inv: corner_perm_inv.try_into().unwrap(),
                corner_twist: d.corner_twist,
                edge_perm_inv: edge_perm_inv.try_into().unwrap(),
                edge_flip: d.edge_flip,
            }
        });
        Self { entries }
    }

    /// Applies move `m` to state `s`, constant-time regardless of `s`.
    pub fn apply(&self, s: &CubieCube, m: Move) -> CubieCube {
        let e = &self.entries[m.index()];
        let mut out = CubieCube::solved();
        for i in 0..8 {
            let src = e.corner_perm_inv[i] as usize;
            out.corner_perm[i] = s.corner_perm[src];
            out.corner_orient[i] = (s.corner_orient[src] + e.corner_twist[i]) % 3;
        }
        for i in 0..12 {
            let src = e.edge_perm_inv[i] as usize;
            out.edge_perm[i] = s.edge_perm[src];
            out.edge_orient[i] = (s.edge_orient[src] + e.edge_flip[i]) % 2;
        }
        out
    }

    /// Applies a sequence of moves in order.
    pub fn apply_all(&self, s: &CubieCube, moves: &[Move]) -> CubieCube {
        moves.iter().fold(*s, |acc, &m| self.apply(&acc, m))
    }
}

impl Default for MoveTable {
    fn default() -> Self {
        Self::new()
    }
}
