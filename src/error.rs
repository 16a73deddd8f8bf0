//! Error types for the caller-side parts of the crate.
//!
//! The search engine itself never fails: "no solution" is an absent goal node,
//! not an error. These types cover board parsing and config loading.

use std::path::PathBuf;

/// Failure to build a sliding-puzzle board from user input.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// Board side length outside the supported range.
    #[error("Unsupported board size {size}. Expected between {min} and {max}")]
    UnsupportedSize { size: usize, min: usize, max: usize },

    /// Number of rows does not match the board size.
    #[error("Invalid number of rows. Expected {expected}, found {found}")]
    RowCount { expected: usize, found: usize },

    /// A row holds the wrong number of tiles.
    #[error("Row {row} has {found} tiles (expected {expected})")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A token is neither a tile number nor a blank marker.
    #[error("Unrecognized tile '{token}' in row {row} col {col}")]
    UnrecognizedTile {
        token: String,
        row: usize,
        col: usize,
    },

    /// A flat tile list has the wrong length for the board size.
    #[error("Expected {expected} tiles, found {found}")]
    TileCount { expected: usize, found: usize },

    /// A tile number is too large for the board.
    #[error("Tile {tile} is out of range for a {size}x{size} board")]
    TileOutOfRange { tile: usize, size: usize },

    /// A tile (or the blank) occurs more than once.
    #[error("Tile {0} appears more than once")]
    DuplicateTile(u8),
}

/// Failure to load a search configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for the expected layout.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values parsed but are not usable.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_error_messages() {
        let err = PuzzleError::RowLength {
            row: 1,
            expected: 3,
            found: 4,
        };
        assert_eq!(err.to_string(), "Row 1 has 4 tiles (expected 3)");

        let err = PuzzleError::DuplicateTile(7);
        assert_eq!(err.to_string(), "Tile 7 appears more than once");
    }

    #[test]
    fn test_config_error_invalid_message() {
        let err = ConfigError::Invalid("max_expansions must be positive".into());
        assert!(err.to_string().contains("max_expansions must be positive"));
    }
}
