//! Move notation parsing and printing, plus run-length compression of
//! printed solutions.

use std::str::FromStr;

use crate::error::CubeError;
use crate::moves::Move;

/// Parses a whitespace-separated scramble string into a move list. Each
/// token is `U|D|L|R|F|B` optionally followed by `'` or `2`, case-sensitive.
pub fn parse_scramble(s: &str) -> Result<Vec<Move>, CubeError> {
    s.split_whitespace().map(Move::from_str).collect()
}

/// The number of clockwise quarter turns a token is algebraically equivalent
/// to: `M` is 1, `M2` is 2, `M'` is 3 (`M' = M∘M∘M`). Used only to collapse
/// runs of identical tokens back into canonical notation; see [`compress`].
fn raw_quarter_turns(m: Move) -> u32 {
    use Move::*;
    match m {
        U | D | L | R | F | B => 1,
        U2 | D2 | L2 | R2 | F2 | B2 => 2,
        U3 | D3 | L3 | R3 | F3 | B3 => 3,
    }
}

fn face_letter_move(m: Move, raw_turns: u32) -> Option<Move> {
    use Move::*;
    let face = match m {
        U | U2 | U3 => [U, U2, U3],
        D | D2 | D3 => [D, D2, D3],
        L | L2 | L3 => [L, L2, L3],
        R | R2 | R3 => [R, R2, R3],
        F | F2 | F3 => [F, F2, F3],
        B | B2 | B3 => [B, B2, B3],
    };
    match raw_turns % 4 {
        0 => None,
        1 => Some(face[0]),
        2 => Some(face[1]),
        3 => Some(face[2]),
        _ => unreachable!(),
    }
}

/// Collapses runs of identical consecutive moves into canonical notation:
/// three identical quarter turns become the inverse, two become the double,
/// four cancel entirely. Generalizes to runs of any token by summing
/// [`raw_quarter_turns`] mod 4, so e.g. two consecutive `U2`s (4 raw turns)
/// also cancel.
pub fn compress(moves: &[Move]) -> Vec<Move> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < moves.len() {
        let m = moves[i];
        let mut run_turns = raw_quarter_turns(m);
        let mut j = i + 1;
        while j < moves.len() && moves[j] == m {
            run_turns += raw_quarter_turns(m);
            j += 1;
        }
        if let Some(collapsed) = face_letter_move(m, run_turns) {
            out.push(collapsed);
        }
        i = j;
    }
    out
}

/// Prints a move list as whitespace-separated notation, in compressed form.
pub fn format_scramble(moves: &[Move]) -> String {
    compress(moves)
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
