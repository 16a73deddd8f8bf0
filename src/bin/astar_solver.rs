use anyhow::{bail, Context};
use astar_search::config::{load_config, SearchConfig};
use astar_search::frontier::TieBreak;
use astar_search::heuristics::Heuristic;
use astar_search::river::RiverCrossing;
use astar_search::sliding::{moves_along, Board, SlidingPuzzle};
use astar_search::solver::{solve, SearchResult};
use astar_search::utils::board_from_text;
use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a search config TOML file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Stop after this many node expansions (overrides the config file)
    #[arg(long, global = true)]
    max_expansions: Option<u64>,

    /// Ordering among frontier entries with equal f (overrides the config file)
    #[arg(long, global = true, value_enum)]
    tie_break: Option<TieBreak>,

    #[command(subcommand)]
    puzzle: Puzzle,
}

#[derive(Subcommand, Debug)]
enum Puzzle {
    /// Solve an n×n sliding-tile puzzle
    Sliding {
        /// Path to a board file (one row per line, `.` for the blank)
        board_file: Option<PathBuf>,

        /// Side length of a scrambled board when no file is given
        #[arg(long, default_value_t = 3)]
        size: usize,

        /// Number of random moves used to scramble the board
        #[arg(long, default_value_t = 30)]
        scramble: u32,

        /// Seed for the scramble
        #[arg(long, default_value_t = 514514)]
        seed: u64,

        /// Heuristic guiding the search
        #[arg(long, value_enum, default_value_t = Heuristic::Manhattan)]
        heuristic: Heuristic,
    },
    /// Solve the Homer / baby / dog / poison river crossing
    River,
}

fn read_board_file(path: &Path) -> anyhow::Result<Board> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file {}", path.display()))?;
    board_from_text(&content).with_context(|| format!("Invalid board in {}", path.display()))
}

fn build_config(args: &Args) -> anyhow::Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SearchConfig::default(),
    };
    if let Some(limit) = args.max_expansions {
        config.max_expansions = Some(limit);
    }
    if let Some(tie_break) = args.tie_break {
        config.tie_break = tie_break;
    }
    config.validate()?;
    Ok(config)
}

fn print_counters<S>(result: &SearchResult<S>) {
    println!("Nodes generated: {}", result.nodes_generated);
    println!("Nodes expanded: {}", result.nodes_expanded);
    println!("Frontier high water: {}", result.frontier_high_water);
    println!("Termination: {:?}", result.termination);
}

fn print_path<S: Display>(path: &[S], separator: &str) {
    for (i, state) in path.iter().enumerate() {
        println!("Step {}:{}{}", i, separator, state);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    match args.puzzle {
        Puzzle::Sliding {
            ref board_file,
            size,
            scramble,
            seed,
            heuristic,
        } => {
            let board = match board_file {
                Some(path) => {
                    let board = read_board_file(path)?;
                    println!("Loaded board from {}\n", path.display());
                    board
                }
                None => {
                    let board = Board::scrambled(size, scramble, seed)?;
                    println!(
                        "Scrambled {}x{} board with {} moves (seed {})\n",
                        size, size, scramble, seed
                    );
                    board
                }
            };
            println!("Initial board:\n{}\n", board);

            if !board.is_solvable() {
                bail!("Board is not solvable ({} inversions)", board.inversions());
            }

            println!("Searching with heuristic {}...\n", heuristic.name());
            let result = solve(&SlidingPuzzle::new(board, heuristic), &config);

            match result.path() {
                Some(path) => {
                    let moves = moves_along(&path);
                    println!("Solution found:\n");
                    println!("Moves ({}):", moves.len());
                    if moves.is_empty() {
                        println!("  No moves needed.");
                    } else {
                        let letters: String = moves.iter().map(|d| d.to_char()).collect();
                        println!("  {}", letters);
                    }
                    println!();
                    print_path(&path, "\n");
                    println!();
                }
                None => println!("No solution found.\n"),
            }
            print_counters(&result);
        }
        Puzzle::River => {
            println!("Solving the river crossing (west | east)...\n");
            let result = solve(&RiverCrossing::default(), &config);

            match result.path() {
                Some(path) => {
                    println!("Solution found in {} crossings:\n", path.len() - 1);
                    for (i, pair) in path.windows(2).enumerate() {
                        if let Some(crossing) = pair[0].crossing_to(&pair[1]) {
                            println!("  Crossing {}: {:?}", i + 1, crossing);
                        }
                    }
                    println!();
                    print_path(&path, " ");
                    println!();
                }
                None => println!("No solution found.\n"),
            }
            print_counters(&result);
        }
    }

    Ok(())
}
