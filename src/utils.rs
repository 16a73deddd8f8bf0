use crate::error::PuzzleError;
use crate::sliding::{Board, BLANK, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Parses an array of string slices into a `Board`.
///
/// Each string slice is one row of the board, starting from row 0, holding
/// whitespace-separated tile numbers. The width of the first row sets the board
/// size; there must be exactly that many rows, each holding that many tiles.
///
/// Valid tokens are:
/// - `1` to `n²-1`: a numbered tile
/// - `.`, `_` or `0`: the blank
///
/// # Arguments
/// * `s`: A slice of string slices (`&[&str]`), one per row from the top.
///
/// # Returns
/// * `Ok(Board)` if parsing is successful.
/// * `Err(PuzzleError)` if:
///     - The first row's width is outside the supported board sizes.
///     - The number of rows differs from that width.
///     - A row holds the wrong number of tiles.
///     - A token is not a number or blank marker, or is out of range.
///     - A tile (or the blank) appears twice.
///
/// Solvability is not checked; see [`Board::is_solvable`].
///
/// # Examples
/// ```
/// use astar_search::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["1 2 3", "4 . 6", "7 5 8"]).unwrap();
/// assert_eq!(board.size(), 3);
/// assert_eq!(board.get_tile(0, 0), 1);
/// assert_eq!(board.blank(), (1, 1));
///
/// assert!(board_from_str_array(&["1 2 X", "4 . 6", "7 5 8"]).is_err());
/// assert!(board_from_str_array(&["1 2", "3 . 4"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, PuzzleError> {
    let size = s
        .first()
        .map_or(0, |row| row.split_whitespace().count());
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(PuzzleError::UnsupportedSize {
            size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        });
    }
    if s.len() != size {
        return Err(PuzzleError::RowCount {
            expected: size,
            found: s.len(),
        });
    }

    let cells = size * size;
    let mut tiles = Vec::with_capacity(cells);

    for (r, row_str) in s.iter().enumerate() {
        let tokens: Vec<&str> = row_str.split_whitespace().collect();
        if tokens.len() != size {
            return Err(PuzzleError::RowLength {
                row: r,
                expected: size,
                found: tokens.len(),
            });
        }

        for (c, token) in tokens.into_iter().enumerate() {
            let tile = match token {
                "." | "_" => BLANK,
                _ => {
                    let value: usize =
                        token
                            .parse()
                            .map_err(|_| PuzzleError::UnrecognizedTile {
                                token: token.to_string(),
                                row: r,
                                col: c,
                            })?;
                    if value >= cells {
                        return Err(PuzzleError::TileOutOfRange { tile: value, size });
                    }
                    value as u8
                }
            };
            tiles.push(tile);
        }
    }

    Board::from_tiles(size, tiles)
}

/// Parses board text with one row per line, ignoring blank lines.
///
/// This is the format of board files read by the binaries.
pub fn board_from_text(text: &str) -> Result<Board, PuzzleError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    board_from_str_array(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_array_valid() {
        let board = board_from_str_array(&["1 2 3", "4 5 6", "7 8 ."]).unwrap();
        assert!(board.is_goal());
        assert_eq!(board.get_tile(1, 2), 6);
    }

    #[test]
    fn test_board_from_str_array_blank_markers() {
        let dot = board_from_str_array(&["1 2", "3 ."]).unwrap();
        let underscore = board_from_str_array(&["1 2", "3 _"]).unwrap();
        let zero = board_from_str_array(&["1 2", "3 0"]).unwrap();
        assert_eq!(dot, underscore);
        assert_eq!(dot, zero);
    }

    #[test]
    fn test_board_from_str_array_extra_whitespace() {
        let board = board_from_str_array(&["  1   2 ", "3\t."]).unwrap();
        assert!(board.is_goal());
    }

    #[test]
    fn test_board_from_str_array_invalid_token() {
        let err = board_from_str_array(&["1 2 3", "4 X 6", "7 8 ."]).unwrap_err();
        assert!(err.to_string().contains("Unrecognized tile 'X'"), "{err}");
    }

    #[test]
    fn test_board_from_str_array_row_too_long() {
        let err = board_from_str_array(&["1 2 3", "4 5 6 7", "8 . 9"]).unwrap_err();
        assert!(err.to_string().contains("Row 1 has 4 tiles"), "{err}");
    }

    #[test]
    fn test_board_from_str_array_row_count_mismatch() {
        let err = board_from_str_array(&["1 2 3", "4 5 6"]).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::RowCount {
                expected: 3,
                found: 2
            }
        ));

        let err = board_from_str_array(&["1 2", "3 .", "4 5"]).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::RowCount {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_board_from_str_array_unsupported_width() {
        let rows = vec!["1"; 3];
        let err = board_from_str_array(&rows).unwrap_err();
        assert!(matches!(err, PuzzleError::UnsupportedSize { size: 1, .. }));

        let wide = vec!["1 2 3 4 5 6 7"; MAX_BOARD_SIZE + 1];
        let err = board_from_str_array(&wide).unwrap_err();
        assert!(matches!(err, PuzzleError::UnsupportedSize { size: 7, .. }));
    }

    #[test]
    fn test_board_from_str_array_empty_input() {
        let rows: [&str; 0] = [];
        assert!(board_from_str_array(&rows).is_err());
    }

    #[test]
    fn test_board_from_str_array_out_of_range_and_duplicates() {
        let err = board_from_str_array(&["1 9 3", "4 . 6", "7 8 2"]).unwrap_err();
        assert!(matches!(err, PuzzleError::TileOutOfRange { tile: 9, size: 3 }));

        let err = board_from_str_array(&["1 1 3", "4 . 6", "7 8 2"]).unwrap_err();
        assert!(matches!(err, PuzzleError::DuplicateTile(1)));

        let err = board_from_str_array(&["1 2 3", ". 5 6", "7 8 ."]).unwrap_err();
        assert!(matches!(err, PuzzleError::DuplicateTile(0)));
    }

    #[test]
    fn test_board_from_text_skips_blank_lines() {
        let board = board_from_text("\n 1 2 3\n4 5 6\n\n7 8 .\n").unwrap();
        assert!(board.is_goal());
    }
}
