use astar_search::config::SearchConfig;
use astar_search::heuristics::Heuristic;
use astar_search::sliding::{Board, Direction, Game, SlidingPuzzle};
use astar_search::solver::{solve, Termination};
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Side length of the board
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// Number of random moves used to scramble the board
    #[arg(long, default_value_t = 30)]
    scramble: u32,

    /// Seed for the scramble
    #[arg(long, default_value_t = 514514)]
    seed: u64,
}

fn parse_direction(input: &str) -> Option<Direction> {
    match input {
        "w" | "up" => Some(Direction::Up),
        "s" | "down" => Some(Direction::Down),
        "a" | "left" => Some(Direction::Left),
        "d" | "right" => Some(Direction::Right),
        _ => None,
    }
}

/// Expansion budget for one hint, so large boards cannot stall the prompt.
const HINT_EXPANSION_LIMIT: u64 = 200_000;

/// First move of an optimal solution from `board`, with the remaining distance.
///
/// Returns `None` on a solved board or when the search runs out of budget.
fn hint(board: &Board, max_expansions: u64) -> Option<(Direction, u32)> {
    let puzzle = SlidingPuzzle::new(board.clone(), Heuristic::LinearConflict);
    let config = SearchConfig {
        max_expansions: Some(max_expansions),
        ..SearchConfig::default()
    };
    let result = solve(&puzzle, &config);
    if result.termination == Termination::ExpansionLimit {
        tracing::debug!(max_expansions, "Hint search hit its expansion limit");
        return None;
    }
    let path = result.path()?;
    let length = result.solution_length()?;
    let first = path.get(1)?;
    board.direction_to(first).map(|d| (d, length))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let mut game = Game::new(Board::scrambled(args.size, args.scramble, args.seed)?);
    println!("Welcome to the sliding puzzle!");
    println!("Move the blank with w/a/s/d (or up/down/left/right).");

    loop {
        println!("---------------------");
        println!("Moves: {}", game.moves());
        println!("{}", game.board());

        if game.is_solved() {
            println!();
            println!("---------------------");
            println!("🎉 SOLVED! 🎉");
            println!("Total Moves: {}", game.moves());
            println!("---------------------");
            break;
        }

        print!("Enter a move, 'h' for a hint, 'u' to undo, 'q' to quit: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed_input = input.trim().to_lowercase();

        // Empty read means stdin closed.
        if trimmed_input == "q" || input.is_empty() {
            println!("Thanks for playing!");
            break;
        }

        if trimmed_input == "u" {
            if game.undo_last_move() {
                println!("Move undone.");
            } else {
                println!("Cannot undo further (no moves made).");
            }
            continue;
        }

        if trimmed_input == "h" {
            match hint(game.board(), HINT_EXPANSION_LIMIT) {
                Some((direction, remaining)) => println!(
                    "Hint: move {:?} ({} moves from the goal).",
                    direction, remaining
                ),
                None => println!("No hint available."),
            }
            continue;
        }

        match parse_direction(&trimmed_input) {
            Some(direction) => {
                if !game.slide(direction) {
                    println!("Invalid move: the blank cannot move {:?}.", direction);
                }
            }
            None => println!("Invalid input. Use w/a/s/d, 'h', 'u', or 'q'."),
        }
    }

    Ok(())
}
