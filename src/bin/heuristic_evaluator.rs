use astar_search::config::SearchConfig;
use astar_search::heuristics::Heuristic;
use astar_search::sliding::{Board, SlidingPuzzle};
use astar_search::solver::solve;
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

const NUM_RANDOM_BOARDS_FOR_EVALUATION: usize = 20;
const START_SEED: u64 = 0;
const BOARD_SIZE: usize = 3;
const SCRAMBLE_MOVES: u32 = 40;

#[derive(Default)]
struct Tally {
    expanded: Vec<u64>,
    generated: Vec<u64>,
}

fn average(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<u64>() as f64 / values.len() as f64
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = SearchConfig::default();
    let mut tallies: HashMap<Heuristic, Tally> = HashMap::new();

    println!(
        "Starting heuristic evaluation for {} boards ({}x{}, {} scramble moves)...",
        NUM_RANDOM_BOARDS_FOR_EVALUATION, BOARD_SIZE, BOARD_SIZE, SCRAMBLE_MOVES
    );

    for board_idx in 0..NUM_RANDOM_BOARDS_FOR_EVALUATION {
        let current_seed = START_SEED + board_idx as u64;
        let initial_board = Board::scrambled(BOARD_SIZE, SCRAMBLE_MOVES, current_seed)?;

        println!("\nEvaluating Board {} (Seed: {})", board_idx, current_seed);

        let mut optimal_length: Option<u32> = None;
        for heuristic in Heuristic::ALL {
            let puzzle = SlidingPuzzle::new(initial_board.clone(), heuristic);
            let result = solve(&puzzle, &config);

            let Some(length) = result.solution_length() else {
                eprintln!(
                    "Warning: heuristic {} found no solution on board {} (Seed: {}).",
                    heuristic.name(),
                    board_idx,
                    current_seed
                );
                continue;
            };

            match optimal_length {
                None => optimal_length = Some(length),
                Some(expected) if expected != length => {
                    eprintln!(
                        "Error: heuristic {} found a path of {} moves on board {} (Seed: {}), expected {}.",
                        heuristic.name(),
                        length,
                        board_idx,
                        current_seed,
                        expected
                    );
                }
                Some(_) => {}
            }

            println!(
                "  Heuristic: {:<16}, Length: {:<3}, Expanded: {:<7}, Generated: {}",
                heuristic.name(),
                length,
                result.nodes_expanded,
                result.nodes_generated
            );
            let tally = tallies.entry(heuristic).or_default();
            tally.expanded.push(result.nodes_expanded);
            tally.generated.push(result.nodes_generated);
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!(
        "Number of boards evaluated: {}",
        NUM_RANDOM_BOARDS_FOR_EVALUATION
    );
    println!(
        "Heuristics evaluated: {}",
        Heuristic::ALL
            .iter()
            .map(|h| h.name())
            .collect::<Vec<&str>>()
            .join(", ")
    );
    println!("\n--- Average Nodes Expanded ---");

    let mut sorted_averages: Vec<(Heuristic, f64, f64)> = Vec::new();
    for heuristic in Heuristic::ALL {
        match tallies.get(&heuristic) {
            Some(tally) if !tally.expanded.is_empty() => sorted_averages.push((
                heuristic,
                average(&tally.expanded),
                average(&tally.generated),
            )),
            _ => println!("Heuristic {}: No results recorded.", heuristic.name()),
        }
    }

    // Fewest expansions first
    sorted_averages.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    for (heuristic, avg_expanded, avg_generated) in sorted_averages {
        println!(
            "Heuristic {:<16}: Expanded = {:.1}, Generated = {:.1}",
            heuristic.name(),
            avg_expanded,
            avg_generated
        );
    }

    Ok(())
}
