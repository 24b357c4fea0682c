use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use rand::Rng;

#[macro_use]
extern crate text_io;

use boggle::{
    load_dictionary, solve, Algorithm, Board, BoggleError, Orientation, QMode, Solution, Trie,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Basic,
    Fast,
    MultiThreaded,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Basic => Algorithm::Basic,
            AlgorithmArg::Fast => Algorithm::Fast,
            AlgorithmArg::MultiThreaded => Algorithm::MultiThreaded,
        }
    }
}

/// Boggle board solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file, one word per line
    #[arg(short, long)]
    dictionary: PathBuf,

    /// Board letters as a flat string (see --height/--width)
    #[arg(
        short,
        long,
        required_unless_present_any = ["board_file", "random", "interactive"]
    )]
    board: Option<String>,

    /// JSON file holding the board as an array of row strings
    #[arg(long, conflicts_with = "board")]
    board_file: Option<PathBuf>,

    /// Generate a random board of this size instead of reading one
    #[arg(long, conflicts_with_all = ["board", "board_file"])]
    random: Option<usize>,

    /// Board height for a flat board string
    #[arg(long, default_value_t = 4)]
    height: usize,

    /// Board width for a flat board string
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Interpret the flat board string in column-major order
    #[arg(long)]
    column_major: bool,

    /// Keep letter case significant on the board
    #[arg(long)]
    case_sensitive: bool,

    /// Treat Q as a single letter instead of the Qu cube
    #[arg(long)]
    single_q: bool,

    /// Solver strategy
    #[arg(long, value_enum, default_value_t = AlgorithmArg::MultiThreaded)]
    algorithm: AlgorithmArg,

    /// Print the solution as JSON
    #[arg(long)]
    json: bool,

    /// Time all three algorithms on the same board
    #[arg(long)]
    profile: bool,

    /// Read boards from stdin in a loop (boards are assumed square)
    #[arg(short, long)]
    interactive: bool,

    /// Log at debug level (RUST_LOG still overrides)
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<(), BoggleError> {
    let mut trie = load_dictionary(&cli.dictionary)?;
    let q_mode = if cli.single_q {
        QMode::Single
    } else {
        QMode::TwoLetter
    };

    if cli.interactive {
        interactive(&mut trie, q_mode, cli.algorithm.into());
        return Ok(());
    }

    let board = build_board(cli)?;

    if cli.profile {
        profile(&board, &mut trie, q_mode);
        return Ok(());
    }

    let solution = solve(&board, &mut trie, q_mode, cli.algorithm.into());
    report(&solution, cli.json);
    Ok(())
}

fn build_board(cli: &Cli) -> Result<Board, BoggleError> {
    if let Some(path) = &cli.board_file {
        return Board::from_file(path, cli.case_sensitive);
    }
    if let Some(size) = &cli.random {
        return random_board(*size, cli.case_sensitive);
    }

    let orientation = if cli.column_major {
        Orientation::ColumnMajor
    } else {
        Orientation::RowMajor
    };
    // clap enforces that one board source is present
    let flat = cli.board.as_deref().unwrap_or_default();
    Board::from_flat(flat, cli.height, cli.width, cli.case_sensitive, orientation)
}

/// Fills a square board with uniformly random letters, standing in for a
/// board file when profiling.
fn random_board(size: usize, case_sensitive: bool) -> Result<Board, BoggleError> {
    let mut rng = rand::thread_rng();
    let letters: String = (0..size * size)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect();
    Board::from_flat(&letters, size, size, case_sensitive, Orientation::RowMajor)
}

/// Runs each algorithm over the same board and prints how long it took.
fn profile(board: &Board, trie: &mut Trie, q_mode: QMode) {
    for algorithm in [Algorithm::Basic, Algorithm::Fast, Algorithm::MultiThreaded] {
        let start = Instant::now();
        let solution = solve(board, trie, q_mode, algorithm);
        let elapsed = start.elapsed();

        println!("solver: {algorithm:?}");
        println!("  duration: {}ms", elapsed.as_millis());
        println!("  score: {}", solution.score);
        println!("  count: {}", solution.word_count());
    }
}

fn interactive(trie: &mut Trie, q_mode: QMode, algorithm: Algorithm) {
    loop {
        println!("Enter board (blank line to quit):");
        let line: String = read!("{}\n");
        let flat = line.trim().to_string();
        if flat.is_empty() {
            break;
        }

        let size = (flat.chars().count() as f64).sqrt() as usize;
        match Board::from_flat(&flat, size, size, false, Orientation::RowMajor) {
            Ok(board) => {
                let solution = solve(&board, trie, q_mode, algorithm);
                report(&solution, false);
            }
            Err(e) => eprintln!("error: {e}"),
        }
    }
}

fn report(solution: &Solution, json: bool) {
    if json {
        match serde_json::to_string_pretty(solution) {
            Ok(out) => println!("{out}"),
            Err(e) => eprintln!("error: {e}"),
        }
        return;
    }

    println!("score: {}", solution.score);
    println!("count: {}", solution.word_count());
    let mut words = solution.words.clone();
    words.sort();
    for word in words {
        println!("{word}");
    }
}

fn init_logger(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).format_timestamp(None);

    // Let RUST_LOG override the defaults when explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
}
