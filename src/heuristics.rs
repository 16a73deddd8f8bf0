use crate::sliding::{Board, BLANK};

/// Counts the numbered tiles that are not on their goal cell.
///
/// The blank is never counted. Each move places at most one tile, so the count
/// never exceeds the remaining number of moves.
///
/// # Arguments
/// * `board`: The board to evaluate.
///
/// # Returns
/// The number of misplaced tiles as `u32`. Zero exactly on the goal board.
pub fn misplaced_tiles(board: &Board) -> u32 {
    let mut misplaced = 0;
    for (idx, &tile) in board.tiles().iter().enumerate() {
        if tile != BLANK && tile as usize != idx + 1 {
            misplaced += 1;
        }
    }
    misplaced
}

/// Sums, over all numbered tiles, the grid distance to the tile's goal cell.
///
/// A move shifts one tile by one cell, so this is a lower bound on the number
/// of moves left and changes by exactly one per move.
pub fn manhattan_distance(board: &Board) -> u32 {
    let size = board.size();
    let mut total = 0;
    for (idx, &tile) in board.tiles().iter().enumerate() {
        if tile == BLANK {
            continue;
        }
        let (r, c) = (idx / size, idx % size);
        let (gr, gc) = board.goal_position(tile);
        total += r.abs_diff(gr) + c.abs_diff(gc);
    }
    total as u32
}

/// Manhattan distance plus a linear-conflict correction.
///
/// Two tiles are in linear conflict when both sit in their goal row (or column)
/// but in reversed order; one of them has to leave the line and come back,
/// costing two extra moves. Per line, the correction is two moves for each tile
/// outside a longest correctly ordered subsequence, which keeps the estimate
/// admissible even when a tile conflicts with several others.
pub fn linear_conflict(board: &Board) -> u32 {
    let size = board.size();
    let mut extra = 0;

    for line in 0..size {
        // Goal columns of tiles in row `line` whose goal row is `line`, left to right.
        let mut row_targets = Vec::with_capacity(size);
        // Goal rows of tiles in column `line` whose goal column is `line`, top to bottom.
        let mut col_targets = Vec::with_capacity(size);

        for k in 0..size {
            let row_tile = board.get_tile(line, k);
            if row_tile != BLANK {
                let (gr, gc) = board.goal_position(row_tile);
                if gr == line {
                    row_targets.push(gc);
                }
            }

            let col_tile = board.get_tile(k, line);
            if col_tile != BLANK {
                let (gr, gc) = board.goal_position(col_tile);
                if gc == line {
                    col_targets.push(gr);
                }
            }
        }

        extra += row_targets.len() - longest_increasing_run(&row_targets);
        extra += col_targets.len() - longest_increasing_run(&col_targets);
    }

    manhattan_distance(board) + 2 * extra as u32
}

/// Length of the longest strictly increasing subsequence of `values`.
fn longest_increasing_run(values: &[usize]) -> usize {
    let mut best = vec![1; values.len()];
    for i in 0..values.len() {
        for j in 0..i {
            if values[j] < values[i] && best[j] + 1 > best[i] {
                best[i] = best[j] + 1;
            }
        }
    }
    best.into_iter().max().unwrap_or(0)
}

/// The heuristics available to the sliding-puzzle solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Heuristic {
    /// Always 0; A* degrades to uniform-cost search.
    Zero,
    /// [`misplaced_tiles`]
    Misplaced,
    /// [`manhattan_distance`]
    Manhattan,
    /// [`linear_conflict`]
    LinearConflict,
}

impl Heuristic {
    /// Every heuristic, weakest first.
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Zero,
        Heuristic::Misplaced,
        Heuristic::Manhattan,
        Heuristic::LinearConflict,
    ];

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Zero => "zero",
            Heuristic::Misplaced => "misplaced",
            Heuristic::Manhattan => "manhattan",
            Heuristic::LinearConflict => "linear-conflict",
        }
    }

    /// Estimates the remaining moves from `board`.
    pub fn evaluate(self, board: &Board) -> f64 {
        match self {
            Heuristic::Zero => 0.0,
            Heuristic::Misplaced => f64::from(misplaced_tiles(board)),
            Heuristic::Manhattan => f64::from(manhattan_distance(board)),
            Heuristic::LinearConflict => f64::from(linear_conflict(board)),
        }
    }
}
