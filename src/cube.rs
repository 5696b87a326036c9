//! Cube state on the cubie level.
//!
//! A [`CubieCube`] is an immutable value: every move produces a new value,
//! nothing is mutated in place. Covers the 18-move quarter-turn group only,
//! no center tracking, no slice/wide moves, no whole-cube rotations.

use std::fmt;

use crate::error::CubeError;

/// Cube state: corner permutation/orientation, edge permutation/orientation.
///
/// Slot numbering is fixed: corners `URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB`;
/// edges `UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR`. Slots are plain
/// indices into fixed-length arrays rather than an enum type, since nothing
/// here ever needs to name a single slot independent of its containing array.
///
/// `corner_perm[i] = j` means the corner cubie currently occupying slot `i`
/// originated from slot `j` of the solved state. Packed as fixed-length byte
/// arrays so PDB ranking arithmetic (base-3/base-2/Lehmer encodings) operates
/// directly on the fields without per-access conversions.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct CubieCube {
    pub corner_perm: [u8; 8],
    pub corner_orient: [u8; 8],
    pub edge_perm: [u8; 12],
    pub edge_orient: [u8; 12],
}

/// The solved cube: identity permutations, zero orientations.
pub const SOLVED: CubieCube = CubieCube {
    corner_perm: [0, 1, 2, 3, 4, 5, 6, 7],
    corner_orient: [0; 8],
    edge_perm: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
    edge_orient: [0; 12],
};

impl Default for CubieCube {
    fn default() -> Self {
        SOLVED
    }
}

impl fmt::Display for CubieCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();
        for i in 0..8 {
            s.push_str(&format!("({},{})", self.corner_perm[i], self.corner_orient[i]));
        }
        for i in 0..12 {
            s.push_str(&format!("({},{})", self.edge_perm[i], self.edge_orient[i]));
        }
        write!(f, "{s}")
    }
}

impl CubieCube {
    /// Returns the identity/solved cube.
    pub fn solved() -> Self {
        SOLVED
    }

    /// Elementwise equality. `CubieCube` already derives `PartialEq`; this
    /// is a named alias for callers that prefer a method call.
    pub fn equals(&self, other: &CubieCube) -> bool {
        self == other
    }

    pub fn is_solved(&self) -> bool {
        *self == SOLVED
    }

    fn permutation_parity(perm: &[u8]) -> bool {
        let mut inversions = 0usize;
        for i in 0..perm.len() {
            for j in (i + 1)..perm.len() {
                if perm[i] > perm[j] {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == 0
    }

    /// Checks the four legality invariants: both permutations are valid,
    /// the orientation sums are zero mod 3/2, and the permutation parities
    /// match. Callers constructing a state from raw arrays should run this
    /// first; moves themselves always preserve legality.
    pub fn verify(&self) -> Result<(), CubeError> {
        let mut seen = [false; 8];
        for &c in &self.corner_perm {
            if c as usize >= 8 || seen[c as usize] {
                return Err(CubeError::InvalidState(
                    "corner_perm is not a permutation of 0..7".into(),
                ));
            }
            seen[c as usize] = true;
        }

        let mut seen = [false; 12];
        for &e in &self.edge_perm {
            if e as usize >= 12 || seen[e as usize] {
                return Err(CubeError::InvalidState(
                    "edge_perm is not a permutation of 0..11".into(),
                ));
            }
            seen[e as usize] = true;
        }

        if self.corner_orient.iter().map(|&x| x as u32).sum::<u32>() % 3 != 0 {
            return Err(CubeError::InvalidState(
                "sum(corner_orient) mod 3 != 0".into(),
            ));
        }
        if self.edge_orient.iter().map(|&x| x as u32).sum::<u32>() % 2 != 0 {
            return Err(CubeError::InvalidState("sum(edge_orient) mod 2 != 0".into()));
        }

        let corner_parity = Self::permutation_parity(&self.corner_perm);
        let edge_parity = Self::permutation_parity(&self.edge_perm);
        if corner_parity != edge_parity {
            return Err(CubeError::InvalidState(
                "corner_perm and edge_perm parities differ".into(),
            ));
        }

        Ok(())
    }
}
