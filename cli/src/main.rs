use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use cubie_solver::moves::ALL_MOVES;
use cubie_solver::notation::{format_scramble, parse_scramble};
use cubie_solver::{
    solve, Algorithm as CoreAlgorithm, CubieCube, Move, MoveTable, PatternDatabases,
    SolveOptions, SolveStatus,
};
use rand::seq::SliceRandom;
use rand::thread_rng;
use spinners::{Spinner, Spinners};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Idastar,
    Iddfs,
}

impl From<AlgorithmArg> for CoreAlgorithm {
    fn from(a: AlgorithmArg) -> Self {
        match a {
            AlgorithmArg::Idastar => CoreAlgorithm::IdaStar,
            AlgorithmArg::Iddfs => CoreAlgorithm::IddFs,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "solves a scramble given in move notation")]
    Solve {
        #[arg(short, long)]
        scramble: String,

        #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Idastar)]
        algorithm: AlgorithmArg,

        #[arg(long)]
        max_iterations: Option<u32>,

        #[arg(long)]
        max_depth: Option<u32>,
    },

    #[command(about = "solves random scrambles and reports aggregate search stats")]
    Bench {
        #[arg(short, long, default_value_t = 20)]
        trials: usize,

        #[arg(short, long, default_value_t = 12)]
        length: usize,

        #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Idastar)]
        algorithm: AlgorithmArg,
    },
}

/// Draws `length` independent random quarter turns. A CLI-only convenience
/// for benchmarking, not a core API.
fn random_scramble(length: usize) -> Vec<Move> {
    let mut rng = thread_rng();
    (0..length)
        .map(|_| *ALL_MOVES.choose(&mut rng).expect("ALL_MOVES is non-empty"))
        .collect()
}

fn build_tables() -> (MoveTable, PatternDatabases) {
    let mut spinner = Spinner::new(Spinners::Dots, "Building pattern databases".into());
    let moves = MoveTable::new();
    let pdbs = PatternDatabases::build(&moves, |_progress| {});
    spinner.stop_with_newline();
    (moves, pdbs)
}

fn run_solve(
    scramble: &str,
    algorithm: AlgorithmArg,
    max_iterations: Option<u32>,
    max_depth: Option<u32>,
) -> ExitCode {
    let parsed = match parse_scramble(scramble) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let (moves, pdbs) = build_tables();
    let state = moves.apply_all(&CubieCube::solved(), &parsed);

    let mut options = SolveOptions {
        algorithm: algorithm.into(),
        ..SolveOptions::default()
    };
    if let Some(n) = max_iterations {
        options.max_iterations = Some(n);
    }
    if let Some(d) = max_depth {
        options.max_depth = Some(d);
    }

    let start = Instant::now();
    let result = solve(&state, &moves, &pdbs, options);
    let elapsed = start.elapsed();

    match result.status {
        SolveStatus::Found => {
            println!("Solution: {}", format_scramble(&result.moves));
            println!("Move count: {}", result.moves.len());
            println!("Expanded nodes: {}", result.stats.expanded_nodes);
            println!("Iterations: {}", result.stats.iterations);
            println!("Solve time: {elapsed:?}");
            ExitCode::SUCCESS
        }
        SolveStatus::Aborted => {
            eprintln!("Aborted: iteration budget exceeded");
            ExitCode::from(2)
        }
        SolveStatus::Exhausted => {
            eprintln!("Exhausted: no solution found within the safety bound");
            ExitCode::from(2)
        }
    }
}

fn run_bench(trials: usize, length: usize, algorithm: AlgorithmArg) -> ExitCode {
    let (moves, pdbs) = build_tables();
    let mut total_expanded = 0u64;
    let mut total_iterations = 0u32;
    let mut solved = 0usize;

    for i in 0..trials {
        let scramble = random_scramble(length);
        let state = moves.apply_all(&CubieCube::solved(), &scramble);
        let options = SolveOptions {
            algorithm: algorithm.into(),
            ..SolveOptions::default()
        };
        let result = solve(&state, &moves, &pdbs, options);
        total_expanded += result.stats.expanded_nodes;
        total_iterations += result.stats.iterations;
        if result.status == SolveStatus::Found {
            solved += 1;
        }
        println!(
            "trial {i}: scramble = {} status = {:?} moves = {} expanded = {}",
            format_scramble(&scramble),
            result.status,
            result.moves.len(),
            result.stats.expanded_nodes
        );
    }

    println!(
        "solved {solved}/{trials}, avg expanded = {:.1}, avg iterations = {:.1}",
        total_expanded as f64 / trials as f64,
        total_iterations as f64 / trials as f64,
    );

    if solved == trials {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Solve {
            scramble,
            algorithm,
            max_iterations,
            max_depth,
        }) => run_solve(&scramble, algorithm, max_iterations, max_depth),
        Some(Commands::Bench {
            trials,
            length,
            algorithm,
        }) => run_bench(trials, length, algorithm),
        None => ExitCode::SUCCESS,
    }
}
