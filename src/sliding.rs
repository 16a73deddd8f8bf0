//! The n×n sliding-tile puzzle.
//!
//! This module defines:
//! - `Direction`: the four ways the blank can move.
//! - `Board`: an immutable puzzle configuration with move generation,
//!   solvability checking and seeded scrambling.
//! - `Game`: an interactive session with a move counter and undo history.
//! - `SlidingPuzzle`: the board wrapped as a [`SearchProblem`] for the A* engine.
//!
//! Tiles are numbered `1..n²-1`, the blank is `0`. The goal has the tiles in
//! ascending row-major order with the blank in the bottom-right corner. The
//! row-major tile vector is the board's canonical form, so two boards reached
//! through different move sequences compare and hash equal.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::error::PuzzleError;
use crate::heuristics::Heuristic;
use crate::solver::SearchProblem;

/// Smallest supported side length.
pub const MIN_BOARD_SIZE: usize = 2;
/// Largest supported side length. Tile numbers must fit in a `u8`.
pub const MAX_BOARD_SIZE: usize = 6;
/// The value stored for the empty cell.
pub const BLANK: u8 = 0;

/// A move of the blank. Moving the blank `Up` slides the tile above it down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the order successors are generated.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The move that undoes this one.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Single-letter name used in printed solutions.
    ///
    /// # Examples
    ///
    /// ```
    /// use astar_search::sliding::Direction;
    /// assert_eq!(Direction::Up.to_char(), 'U');
    /// assert_eq!(Direction::Right.to_char(), 'R');
    /// ```
    pub fn to_char(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A sliding-puzzle configuration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u8>,
    blank: usize,
}

fn check_size(size: usize) -> Result<(), PuzzleError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(PuzzleError::UnsupportedSize {
            size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        })
    }
}

impl Board {
    /// Creates the solved board of the given side length.
    ///
    /// # Examples
    /// ```
    /// use astar_search::sliding::Board;
    /// let board = Board::goal(3).unwrap();
    /// assert!(board.is_goal());
    /// assert_eq!(board.blank(), (2, 2));
    /// ```
    pub fn goal(size: usize) -> Result<Self, PuzzleError> {
        check_size(size)?;
        let cells = size * size;
        let mut tiles: Vec<u8> = (1..cells).map(|t| t as u8).collect();
        tiles.push(BLANK);
        Ok(Board {
            size,
            tiles,
            blank: cells - 1,
        })
    }

    /// Creates a board from row-major tile numbers.
    ///
    /// # Arguments
    /// * `size`: The side length.
    /// * `tiles`: `size * size` values holding each of `0..size*size` exactly once.
    ///
    /// # Returns
    /// * `Ok(Board)` for a valid permutation.
    /// * `Err(PuzzleError)` for an unsupported size, a wrong tile count, an
    ///   out-of-range tile or a repeated tile.
    pub fn from_tiles(size: usize, tiles: Vec<u8>) -> Result<Self, PuzzleError> {
        check_size(size)?;
        let cells = size * size;
        if tiles.len() != cells {
            return Err(PuzzleError::TileCount {
                expected: cells,
                found: tiles.len(),
            });
        }

        let mut seen = vec![false; cells];
        for &tile in &tiles {
            let idx = tile as usize;
            if idx >= cells {
                return Err(PuzzleError::TileOutOfRange { tile: idx, size });
            }
            if seen[idx] {
                return Err(PuzzleError::DuplicateTile(tile));
            }
            seen[idx] = true;
        }

        // Every value was in range and unique, so the blank is present.
        let blank = tiles.iter().position(|&t| t == BLANK).unwrap_or_default();
        Ok(Board { size, tiles, blank })
    }

    /// Creates a solvable board by walking `moves` random steps back from the goal.
    ///
    /// The walk never immediately undoes its previous step, and the same seed
    /// always produces the same board.
    ///
    /// # Arguments
    /// * `size`: The side length.
    /// * `moves`: Number of random blank moves applied to the goal board.
    /// * `seed`: Seed for the `SmallRng` driving the walk.
    pub fn scrambled(size: usize, moves: u32, seed: u64) -> Result<Self, PuzzleError> {
        let mut board = Board::goal(size)?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut previous: Option<Direction> = None;

        for _ in 0..moves {
            let mut options: Vec<(Direction, Board)> = Direction::ALL
                .iter()
                .filter(|&&d| previous != Some(d.opposite()))
                .filter_map(|&d| board.slide(d).map(|next| (d, next)))
                .collect();
            // Every cell has at least two neighbors, so one non-reversing move exists.
            let (direction, next) = options.swap_remove(rng.gen_range(0..options.len()));
            previous = Some(direction);
            board = next;
        }
        Ok(board)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major tile numbers, `0` for the blank.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is outside the board.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        assert!(r < self.size && c < self.size, "({r}, {c}) is off the board");
        self.tiles[r * self.size + c]
    }

    /// Position `(row, col)` of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// Position `(row, col)` that `tile` occupies on the goal board.
    pub fn goal_position(&self, tile: u8) -> (usize, usize) {
        let idx = if tile == BLANK {
            self.size * self.size - 1
        } else {
            tile as usize - 1
        };
        (idx / self.size, idx % self.size)
    }

    /// Returns the board after moving the blank one cell, or `None` at an edge.
    pub fn slide(&self, direction: Direction) -> Option<Board> {
        let (r, c) = self.blank();
        let (dr, dc) = direction.delta();
        let nr = r.checked_add_signed(dr).filter(|&v| v < self.size)?;
        let nc = c.checked_add_signed(dc).filter(|&v| v < self.size)?;

        let target = nr * self.size + nc;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Board {
            size: self.size,
            tiles,
            blank: target,
        })
    }

    /// All boards one move away, in `Direction::ALL` order.
    pub fn successors(&self) -> Vec<Board> {
        Direction::ALL.iter().filter_map(|&d| self.slide(d)).collect()
    }

    /// Whether this is the solved configuration.
    pub fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[last] == BLANK
            && self.tiles[..last]
                .iter()
                .enumerate()
                .all(|(i, &t)| t as usize == i + 1)
    }

    /// Number of tile pairs (blank excluded) that appear in the opposite order
    /// from the goal.
    pub fn inversions(&self) -> usize {
        let numbered: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != BLANK).collect();
        let mut count = 0;
        for (i, &a) in numbered.iter().enumerate() {
            count += numbered[i + 1..].iter().filter(|&&b| b < a).count();
        }
        count
    }

    /// Whether the goal can be reached from this board.
    ///
    /// Odd widths need an even inversion count. Even widths need the inversion
    /// count plus the blank's row counted from the bottom (starting at 1) to be odd.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            let row_from_bottom = self.size - self.blank().0;
            (inversions + row_from_bottom) % 2 == 1
        }
    }

    /// The single blank move that turns this board into `other`, if there is one.
    pub fn direction_to(&self, other: &Board) -> Option<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .find(|&d| self.slide(d).as_ref() == Some(other))
    }
}

impl fmt::Display for Board {
    /// Right-aligned tile numbers, one row per line, `.` for the blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.size * self.size - 1).to_string().len();
        for (r, row) in self.tiles.chunks(self.size).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|&t| {
                    if t == BLANK {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{:>width$}", t)
                    }
                })
                .collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// An interactive puzzle session with undo.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    moves: u32,
    history: Vec<Board>, // boards before each move, most recent last
}

impl Game {
    /// Starts a session from `initial_board`.
    pub fn new(initial_board: Board) -> Self {
        Game {
            board: initial_board,
            moves: 0,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves currently applied (undone moves are not counted).
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Moves the blank. Returns `false` and leaves the board unchanged at an edge.
    pub fn slide(&mut self, direction: Direction) -> bool {
        match self.board.slide(direction) {
            Some(next) => {
                let previous = std::mem::replace(&mut self.board, next);
                self.history.push(previous);
                self.moves += 1;
                true
            }
            None => false,
        }
    }

    /// Reverts the last move. Returns `false` if no move has been made.
    pub fn undo_last_move(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.board = previous;
                self.moves -= 1;
                true
            }
            None => false,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.board.is_goal()
    }
}

/// A sliding board posed as a search problem for the A* engine.
#[derive(Clone, Debug)]
pub struct SlidingPuzzle {
    pub start: Board,
    pub heuristic: Heuristic,
}

impl SlidingPuzzle {
    pub fn new(start: Board, heuristic: Heuristic) -> Self {
        SlidingPuzzle { start, heuristic }
    }
}

impl SearchProblem for SlidingPuzzle {
    type State = Board;

    fn start(&self) -> Board {
        self.start.clone()
    }

    fn is_goal(&self, state: &Board) -> bool {
        state.is_goal()
    }

    fn successors(&self, state: &Board) -> Vec<Board> {
        state.successors()
    }

    fn heuristic(&self, state: &Board) -> f64 {
        self.heuristic.evaluate(state)
    }
}

/// Converts a path of boards into the blank moves that connect them.
///
/// Consecutive boards that are not one move apart are skipped.
pub fn moves_along(path: &[Board]) -> Vec<Direction> {
    path.windows(2)
        .filter_map(|pair| pair[0].direction_to(&pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::solver::{solve, Termination};
    use crate::utils::board_from_str_array;

    #[test]
    fn test_goal_board() {
        let board = Board::goal(3).unwrap();
        assert_eq!(board.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert!(board.is_goal());
        assert!(board.is_solvable());
        assert_eq!(board.inversions(), 0);
    }

    #[test]
    fn test_goal_rejects_unsupported_size() {
        assert!(matches!(
            Board::goal(1),
            Err(PuzzleError::UnsupportedSize { size: 1, .. })
        ));
        assert!(Board::goal(MAX_BOARD_SIZE + 1).is_err());
    }

    #[test]
    fn test_from_tiles_validation() {
        assert!(Board::from_tiles(2, vec![1, 2, 3, 0]).is_ok());
        assert!(matches!(
            Board::from_tiles(2, vec![1, 2, 0]),
            Err(PuzzleError::TileCount {
                expected: 4,
                found: 3
            })
        ));
        assert!(matches!(
            Board::from_tiles(2, vec![1, 2, 2, 0]),
            Err(PuzzleError::DuplicateTile(2))
        ));
        assert!(matches!(
            Board::from_tiles(2, vec![1, 2, 4, 0]),
            Err(PuzzleError::TileOutOfRange { tile: 4, size: 2 })
        ));
    }

    #[test]
    fn test_slide_moves_blank() {
        let board = Board::goal(3).unwrap();
        assert!(board.slide(Direction::Down).is_none());
        assert!(board.slide(Direction::Right).is_none());

        let up = board.slide(Direction::Up).unwrap();
        assert_eq!(up.blank(), (1, 2));
        assert_eq!(up.get_tile(2, 2), 6);

        let left = board.slide(Direction::Left).unwrap();
        assert_eq!(left.blank(), (2, 1));
        assert_eq!(left.get_tile(2, 2), 8);
    }

    #[test]
    fn test_successors_order_and_count() {
        let corner = Board::goal(3).unwrap();
        assert_eq!(corner.successors().len(), 2);

        let center = board_from_str_array(&["1 2 3", "4 . 5", "6 7 8"]).unwrap();
        let next = center.successors();
        assert_eq!(next.len(), 4);
        let blanks: Vec<(usize, usize)> = next.iter().map(Board::blank).collect();
        assert_eq!(blanks, vec![(0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn test_slide_and_back_is_identity() {
        let board = board_from_str_array(&["1 2 3", "4 . 5", "6 7 8"]).unwrap();
        for d in Direction::ALL {
            let moved = board.slide(d).unwrap();
            assert_eq!(moved.slide(d.opposite()).unwrap(), board);
            assert_eq!(board.direction_to(&moved), Some(d));
        }
    }

    #[test]
    fn test_solvability_odd_width() {
        let swapped = board_from_str_array(&["2 1 3", "4 5 6", "7 8 ."]).unwrap();
        assert_eq!(swapped.inversions(), 1);
        assert!(!swapped.is_solvable());
    }

    #[test]
    fn test_solvability_even_width() {
        let goal = Board::goal(4).unwrap();
        assert!(goal.is_solvable());
        let up = goal.slide(Direction::Up).unwrap();
        assert!(up.is_solvable());

        let swapped = Board::from_tiles(2, vec![2, 1, 3, 0]).unwrap();
        assert!(!swapped.is_solvable());
    }

    #[test]
    fn test_scrambled_is_deterministic_and_solvable() {
        let a = Board::scrambled(4, 60, 514514).unwrap();
        let b = Board::scrambled(4, 60, 514514).unwrap();
        assert_eq!(a, b);
        assert!(a.is_solvable());

        let zero = Board::scrambled(3, 0, 7).unwrap();
        assert!(zero.is_goal());
    }

    #[test]
    fn test_scrambled_seeds_differ() {
        let boards: Vec<Board> = (0..8)
            .map(|seed| Board::scrambled(3, 30, seed).unwrap())
            .collect();
        assert!(boards.iter().any(|b| b != &boards[0]));
    }

    #[test]
    fn test_display_board_formatting() {
        let board = board_from_str_array(&["1 2 3", "4 . 5", "6 7 8"]).unwrap();
        assert_eq!(board.to_string(), "1 2 3\n4 . 5\n6 7 8");

        let big = Board::goal(4).unwrap();
        let first_line = big.to_string().lines().next().unwrap().to_string();
        assert_eq!(first_line, " 1  2  3  4");
        assert!(big.to_string().ends_with("13 14 15  ."));
    }

    #[test]
    fn test_game_slide_and_undo() {
        let mut game = Game::new(Board::goal(3).unwrap());
        assert!(game.is_solved());
        assert!(!game.undo_last_move());

        assert!(game.slide(Direction::Up));
        let after_up = game.board().clone();
        assert!(game.slide(Direction::Left));
        assert_eq!(game.moves(), 2);
        assert!(!game.is_solved());

        assert!(game.undo_last_move());
        assert_eq!(game.moves(), 1);
        assert_eq!(game.board(), &after_up);
        while game.undo_last_move() {}
        assert_eq!(game.moves(), 0);
        assert!(game.is_solved());
    }

    #[test]
    fn test_game_slide_off_edge_is_rejected() {
        let mut game = Game::new(Board::goal(2).unwrap());
        assert!(!game.slide(Direction::Down));
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_solve_sliding_puzzle() {
        let start = board_from_str_array(&["1 2 3", "4 5 6", ". 7 8"]).unwrap();
        let puzzle = SlidingPuzzle::new(start, Heuristic::Manhattan);
        let result = solve(&puzzle, &SearchConfig::default());

        assert_eq!(result.termination, Termination::GoalReached);
        assert_eq!(result.solution_length(), Some(2));
        let path = result.path().unwrap();
        assert_eq!(moves_along(&path), vec![Direction::Right, Direction::Right]);
    }

    #[test]
    fn test_unsolvable_2x2_exhausts_reachable_states() {
        let start = Board::from_tiles(2, vec![2, 1, 3, 0]).unwrap();
        let puzzle = SlidingPuzzle::new(start, Heuristic::Zero);
        let result = solve(&puzzle, &SearchConfig::default());

        assert!(!result.is_solved());
        assert_eq!(result.termination, Termination::FrontierExhausted);
        // A 2x2 board reaches 12 of its 24 permutations.
        assert_eq!(result.nodes_expanded, 12);
    }
}
