//! End-to-end solve scenarios and search/heuristic property checks against
//! the public API.

use cubie_solver::moves::{Move, MoveTable, ALL_MOVES};
use cubie_solver::notation::{format_scramble, parse_scramble};
use cubie_solver::pdb::PatternDatabases;
use cubie_solver::{solve, CubieCube, SolveOptions, SolveStatus};

fn harness() -> (MoveTable, PatternDatabases) {
    let moves = MoveTable::new();
    let pdbs = PatternDatabases::build(&moves, |_| {});
    (moves, pdbs)
}

fn solve_scramble(notation: &str) -> (CubieCube, cubie_solver::SolveResult, MoveTable) {
    let (moves, pdbs) = harness();
    let scramble = parse_scramble(notation).unwrap();
    let state = moves.apply_all(&CubieCube::solved(), &scramble);
    let result = solve(&state, &moves, &pdbs, SolveOptions::default());
    (state, result, moves)
}

#[test]
fn scenario_a_empty_scramble() {
    let (_, result, _) = solve_scramble("");
    assert_eq!(result.status, SolveStatus::Found);
    assert!(result.moves.is_empty());
    assert!(result.stats.expanded_nodes >= 1);
}

#[test]
fn scenario_b_single_move_undo() {
    let (_, result, _) = solve_scramble("U");
    assert_eq!(result.status, SolveStatus::Found);
    assert_eq!(format_scramble(&result.moves), "U'");
}

#[test]
fn scenario_c_two_move_scramble() {
    let (_, result, _) = solve_scramble("R U");
    assert_eq!(result.status, SolveStatus::Found);
    assert_eq!(format_scramble(&result.moves), "U' R'");
}

#[test]
fn scenario_d_four_move_cycle() {
    let (_, result, _) = solve_scramble("U U U U");
    assert_eq!(result.status, SolveStatus::Found);
    assert!(result.moves.is_empty());
}

#[test]
fn scenario_e_superflip_fragment() {
    // F and B commute: "F' B'" and "B' F'" are both valid optimal solves.
    // The canonical move order tries F before B, so this crate settles on
    // "F' B'"; checked on length and replay-soundness instead of the exact
    // token order.
    let (state, result, moves) = solve_scramble("F B");
    assert_eq!(result.status, SolveStatus::Found);
    assert_eq!(result.moves.len(), 2);
    assert!(moves.apply_all(&state, &result.moves).is_solved());
}

#[test]
fn scenario_f_full_random_scramble() {
    // 25 quarter turns, deterministic "seed 42" stand-in: a fixed pseudo-
    // random sequence rather than drawing from `rand`, since this crate
    // keeps randomness a test/CLI fixture, not a core dependency.
    let faces = [
        Move::U, Move::R, Move::F, Move::D, Move::L, Move::B,
        Move::U2, Move::R2, Move::F2, Move::D2, Move::L2, Move::B2,
        Move::U3, Move::R3, Move::F3, Move::D3, Move::L3, Move::B3,
    ];
    let mut scramble = Vec::new();
    let mut x = 42u64;
    for _ in 0..25 {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        scramble.push(faces[(x as usize) % faces.len()]);
    }

    let (moves, pdbs) = harness();
    let state = moves.apply_all(&CubieCube::solved(), &scramble);
    let options = SolveOptions {
        max_iterations: Some(40),
        ..SolveOptions::default()
    };
    let result = solve(&state, &moves, &pdbs, options);
    assert_eq!(result.status, SolveStatus::Found);
    assert!(result.stats.expanded_nodes >= 1);
    assert!(moves.apply_all(&state, &result.moves).is_solved());
}

#[test]
fn property_apply_preserves_invariants_over_long_random_walk() {
    let moves = MoveTable::new();
    let mut s = CubieCube::solved();
    for (i, &m) in ALL_MOVES.iter().cycle().take(500).enumerate() {
        s = moves.apply(&s, m);
        s.verify().unwrap_or_else(|e| panic!("step {i}: {e}"));
    }
}

#[test]
fn property_apply_then_inverse_undoes_any_reachable_state() {
    let moves = MoveTable::new();
    let scramble = parse_scramble("R U R' F2 D L' B2").unwrap();
    let mut s = CubieCube::solved();
    for &m in &scramble {
        s = moves.apply(&s, m);
    }
    for &m in scramble.iter().rev() {
        s = moves.apply(&s, m.inverse());
    }
    assert!(s.is_solved());
}

#[test]
fn property_search_soundness_across_many_scrambles() {
    let (moves, pdbs) = harness();
    let scrambles = [
        "R U R' U'",
        "L2 D2 B2",
        "F R U R' U' F'",
        "U D L R F B",
        "R' U' F U R U' R' F' R U R' U' R' F R F'",
    ];
    for notation in scrambles {
        let parsed = parse_scramble(notation).unwrap();
        let state = moves.apply_all(&CubieCube::solved(), &parsed);
        let result = solve(&state, &moves, &pdbs, SolveOptions::default());
        assert_eq!(result.status, SolveStatus::Found, "scramble {notation}");
        let replayed = moves.apply_all(&state, &result.moves);
        assert!(replayed.is_solved(), "scramble {notation}");
    }
}

#[test]
fn property_completeness_within_budget_for_short_scrambles() {
    let (moves, pdbs) = harness();
    for k in 1..=8 {
        let mut scramble = Vec::new();
        let mut x = (1000 + k) as u64;
        for _ in 0..k {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            scramble.push(ALL_MOVES[(x as usize) % ALL_MOVES.len()]);
        }
        let state = moves.apply_all(&CubieCube::solved(), &scramble);
        let result = solve(&state, &moves, &pdbs, SolveOptions::default());
        assert_eq!(result.status, SolveStatus::Found, "k = {k}");
        assert!(
            result.moves.len() <= 2 * k + 4,
            "k = {k}, got {} moves",
            result.moves.len()
        );
    }
}

#[test]
fn property_notation_round_trip() {
    let canonical = vec![
        Move::R, Move::U2, Move::F3, Move::D, Move::L3, Move::B2,
    ];
    let printed = format_scramble(&canonical);
    assert_eq!(parse_scramble(&printed).unwrap(), canonical);
}

#[test]
fn heuristic_is_admissible_against_a_known_optimal_distance() {
    let (moves, pdbs) = harness();
    // A single quarter turn has true optimal distance 1; admissibility
    // requires h <= 1 here (and in fact h == 1, since one PDB sees the
    // single-move displacement directly).
    let s = moves.apply(&CubieCube::solved(), Move::R);
    let h = cubie_solver::heuristic::heuristic(&pdbs, &s);
    assert!(h <= 1);
}
