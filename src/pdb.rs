//! Pattern databases: three dense tables mapping a projection of the state
//! to the minimum number of moves required to reach the solved projection,
//! built by exhaustive reverse BFS from the solved state.
//!
//! BFS expands neighbors via a canonical-representative approach: each
//! projected coordinate is unranked into a full [`CubieCube`] whose
//! non-projected fields sit at solved values, moves are applied with the
//! ordinary [`MoveTable`], and the result is re-ranked. The non-projected
//! fields do not feed back into any projection's rank function, so leaving
//! them unreduced after a move is harmless.
//!
//! Each of the 18 moves counts as one edge in this BFS graph and one unit of
//! the search threshold, including doubles: a double turn is not weighted as
//! two. Admissibility of the resulting heuristic holds against optimal
//! solution length measured in this same move-count sense.

use crate::cube::CubieCube;
use crate::moves::{MoveTable, ALL_MOVES};

/// Marks a pattern database cell that has not yet been reached by the BFS.
/// Distances fit in one byte; the diameter of each projected graph is far
/// below 255.
const UNSET: u8 = 255;

pub const CO_SIZE: usize = 2_187; // 3^7
pub const EO_SIZE: usize = 2_048; // 2^11
pub const CP_SIZE: usize = 40_320; // 8!

/// Reported synchronously during table construction through a plain
/// callback; callers that want progress output (a CLI spinner, a log line)
/// wire it up themselves.
pub struct PdbProgress {
    pub name: &'static str,
    pub filled: usize,
    pub total: usize,
    pub depth: u32,
}

/// `π_CO(s) = Σ_{i=0..6} s.corner_orient[i] · 3^i`.
fn rank_co(s: &CubieCube) -> usize {
    let mut r = 0usize;
    for i in 0..7 {
        r += s.corner_orient[i] as usize * 3usize.pow(i as u32);
    }
    r
}

/// Reconstructs a representative state for a CO index: the eighth corner's
/// orientation is forced so `sum(corner_orient) mod 3 == 0` holds.
fn unrank_co(index: usize) -> CubieCube {
    let mut s = CubieCube::solved();
    let mut rest = index;
    let mut sum = 0u32;
    for i in 0..7 {
        let digit = (rest % 3) as u8;
        rest /= 3;
        s.corner_orient[i] = digit;
        sum += digit as u32;
    }
    s.corner_orient[7] = ((3 - sum % 3) % 3) as u8;
    s
}

/// `π_EO(s) = Σ_{i=0..10} s.edge_orient[i] · 2^i`.
fn rank_eo(s: &CubieCube) -> usize {
    let mut r = 0usize;
    for i in 0..11 {
        r += (s.edge_orient[i] as usize) << i;
    }
    r
}

/// Reconstructs a representative state for an EO index, forcing the
/// twelfth edge's flip so `sum(edge_orient) mod 2 == 0` holds.
fn unrank_eo(index: usize) -> CubieCube {
    let mut s = CubieCube::solved();
    let mut sum = 0u32;
    for i in 0..11 {
        let bit = ((index >> i) & 1) as u8;
        s.edge_orient[i] = bit;
        sum += bit as u32;
    }
    s.edge_orient[11] = (sum % 2) as u8;
    s
}

const FACTORIAL: [usize; 9] = [1, 1, 2, 6, 24, 120, 720, 5040, 40320];

/// `π_CP(s) = lehmer(s.corner_perm)`, standard factorial-base ranking of an
/// 8-element permutation.
fn rank_cp(perm: &[u8; 8]) -> usize {
    let mut rank = 0usize;
    for i in 0..8 {
        let smaller = (i + 1..8).filter(|&j| perm[j] < perm[i]).count();
        rank += smaller * FACTORIAL[7 - i];
    }
    rank
}

/// Inverse of [`rank_cp`]: standard factorial number system decode.
fn unrank_cp(mut index: usize) -> CubieCube {
    let mut digits = [0usize; 8];
    for i in 0..8 {
        let f = FACTORIAL[7 - i];
        digits[i] = index / f;
        index %= f;
    }
    let mut pool: Vec<u8> = (0..8).collect();
    let mut perm = [0u8; 8];
    for i in 0..8 {
        perm[i] = pool.remove(digits[i]);
    }
    let mut s = CubieCube::solved();
    s.corner_perm = perm;
    s
}

/// Runs the reverse BFS over a single projection.
///
/// `project` maps a full state to its 0-based key; `unrank` reconstructs a
/// canonical representative state for a key, used to expand BFS neighbors
/// with the ordinary [`MoveTable::apply`].
fn build_table(
    name: &'static str,
    size: usize,
    moves: &MoveTable,
    project: impl Fn(&CubieCube) -> usize,
    unrank: impl Fn(usize) -> CubieCube,
    mut on_progress: impl FnMut(&PdbProgress),
) -> Vec<u8> {
    let mut dist = vec![UNSET; size];
    let solved_key = project(&CubieCube::solved());
    dist[solved_key] = 0;
    let mut filled = 1usize;
    let mut frontier = vec![solved_key];
    let mut depth = 0u32;

    on_progress(&PdbProgress {
        name,
        filled,
        total: size,
        depth,
    });

    while !frontier.is_empty() && filled < size {
        let mut next = Vec::new();
        for &k in &frontier {
            let rep = unrank(k);
            for &m in ALL_MOVES.iter() {
                let s = moves.apply(&rep, m);
                let nk = project(&s);
                if dist[nk] == UNSET {
                    dist[nk] = (depth + 1) as u8;
                    filled += 1;
                    next.push(nk);
                }
            }
        }
        depth += 1;
        frontier = next;
        on_progress(&PdbProgress {
            name,
            filled,
            total: size,
            depth,
        });
    }

    dist
}

/// The three pattern databases, built once at startup and read-only
/// afterward.
pub struct PatternDatabases {
    co: Vec<u8>,
    eo: Vec<u8>,
    cp: Vec<u8>,
}

impl PatternDatabases {
    /// Builds all three tables, reporting progress through `on_progress`.
    /// Blocks the caller until all three are complete.
    pub fn build(moves: &MoveTable, mut on_progress: impl FnMut(&PdbProgress)) -> Self {
        let co = build_table("corner-orientation", CO_SIZE, moves, rank_co, unrank_co, &mut on_progress);
        let eo = build_table("edge-orientation", EO_SIZE, moves, rank_eo, unrank_eo, &mut on_progress);
        let cp = build_table(
            "corner-permutation",
            CP_SIZE,
            moves,
            |s| rank_cp(&s.corner_perm),
            unrank_cp,
            &mut on_progress,
        );
        Self { co, eo, cp }
    }

    /// `dist_CO[π_CO(s)]`. Unreached keys (only possible for an
    /// intentionally truncated table) read as 0, still admissible.
    pub fn co_distance(&self, s: &CubieCube) -> u8 {
        Self::lookup(&self.co, rank_co(s))
    }

    pub fn eo_distance(&self, s: &CubieCube) -> u8 {
        Self::lookup(&self.eo, rank_eo(s))
    }

    pub fn cp_distance(&self, s: &CubieCube) -> u8 {
        Self::lookup(&self.cp, rank_cp(&s.corner_perm))
    }

    fn lookup(table: &[u8], key: usize) -> u8 {
        match table[key] {
            UNSET => 0,
            d => d,
        }
    }

    /// Number of keys each table actually reached; `(co, eo, cp)`. Used by
    /// tests to confirm the CP table reaches all 40,320 keys.
    pub fn reached_counts(&self) -> (usize, usize, usize) {
        let count = |t: &[u8]| t.iter().filter(|&&d| d != UNSET).count();
        (count(&self.co), count(&self.eo), count(&self.cp))
    }
}
