//! # A* Search Library
//!
//! This library provides a generic best-first (A*) search engine and two
//! puzzles that drive it.
//!
//! It is used by three binaries:
//! - `astar_solver`: Solves a sliding puzzle (from a file or a seeded scramble)
//!   or the river-crossing puzzle and prints the path and search counters.
//! - `heuristic_evaluator`: Compares sliding-puzzle heuristics by the number of
//!   nodes A* expands on a batch of seeded scrambles.
//! - `human_player`: Plays a sliding puzzle interactively, with undo and hints.
//!
//! ## Modules
//! - `solver`: The A* engine (`a_star_search`, `solve`, `SearchProblem`, `SearchResult`).
//! - `node`: Immutable search nodes with parent links for path reconstruction.
//! - `frontier`: The min-priority frontier with insertion-order tie-breaking.
//! - `config`: Search limits and tie-break policy, loadable from TOML.
//! - `error`: Error types for board parsing and config loading.
//! - `sliding`: The n×n sliding-tile puzzle (`Board`, `Game`, `SlidingPuzzle`).
//! - `heuristics`: Admissible sliding-puzzle heuristics.
//! - `river`: The river-crossing puzzle (`RiverState`, `RiverCrossing`).
//! - `utils`: Parsing boards from text.

pub mod config;
pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod node;
pub mod river;
pub mod sliding;
pub mod solver;
pub mod utils;

pub use crate::config::SearchConfig;
pub use crate::solver::{a_star_search, solve, SearchProblem, SearchResult, Termination};
