//! The admissible heuristic: the maximum of the three pattern-database
//! lookups.

use crate::cube::CubieCube;
use crate::pdb::PatternDatabases;

/// `h(s) = max(dist_CO[π_CO(s)], dist_EO[π_EO(s)], dist_CP[π_CP(s)])`.
///
/// Admissible (each component underestimates true distance) and consistent
/// (each component can decrease by at most one per move, so the max can
/// too). `heuristic(pdbs, solved()) == 0`.
pub fn heuristic(pdbs: &PatternDatabases, s: &CubieCube) -> u8 {
    pdbs.co_distance(s)
        .max(pdbs.eo_distance(s))
        .max(pdbs.cp_distance(s))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::{Move, MoveTable};

    #[test]
    fn solved_state_has_zero_heuristic() {
        let moves = MoveTable::new();
        let pdbs = PatternDatabases::build(&moves, |_| {});
        assert_eq!(heuristic(&pdbs, &CubieCube::solved()), 0);
    }

    #[test]
    fn one_move_scramble_has_nonzero_heuristic() {
        let moves = MoveTable::new();
        let pdbs = PatternDatabases::build(&moves, |_| {});
        let s = moves.apply(&CubieCube::solved(), Move::R);
        assert!(heuristic(&pdbs, &s) >= 1);
    }

    #[test]
    fn heuristic_is_consistent_along_a_scramble() {
        let moves = MoveTable::new();
        let pdbs = PatternDatabases::build(&moves, |_| {});
        let mut s = CubieCube::solved();
        let mut prev_h = heuristic(&pdbs, &s);
        for &m in &[Move::R, Move::U, Move::F3, Move::L2, Move::D, Move::B3] {
            s = moves.apply(&s, m);
            let h = heuristic(&pdbs, &s);
            assert!(
                (h as i16 - prev_h as i16).abs() <= 1,
                "heuristic jumped by more than one move's worth"
            );
            prev_h = h;
        }
    }
}
