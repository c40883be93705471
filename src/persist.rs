//! The single-line save format.
//!
//! ```text
//! <rows*cols cell digits, row-major>-<rows>-<cols>-<win_con>-<active player>
//! ```
//!
//! Cell digits are `0` for empty and `1`/`2` for the players, so a 2x2
//! connect-2 board with one piece of player 1 in the bottom-left corner and
//! player 2 to move is `0010-2-2-2-2`.

use std::fs;
use std::path::Path;

use crate::board::{Board, BoardConfig};
use crate::error::StateError;
use crate::grid::{Cell, Grid, Player};
use crate::{vlog, win};

/// File name used by the console game when none is configured
pub const DEFAULT_SAVE_FILE: &str = "gameState.txt";

const SEPARATOR: char = '-';
const FIELD_COUNT: usize = 5;

pub fn encode(board: &Board) -> String {
    let cells: String = board.grid().cells().iter().map(|cell| cell.digit()).collect();
    format!(
        "{}{sep}{}{sep}{}{sep}{}{sep}{}",
        cells,
        board.rows(),
        board.cols(),
        board.win_con(),
        board.active_player().number(),
        sep = SEPARATOR
    )
}

/// Parses a saved state line, rejecting anything that does not describe a
/// valid board exactly
pub fn decode(state: &str) -> Result<Board, StateError> {
    let state = state.trim();
    if state.is_empty() {
        return Err(StateError::Empty);
    }

    let fields: Vec<&str> = state.split(SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(StateError::FieldCount(fields.len()));
    }

    let rows = parse_number("rows", fields[1])?;
    let cols = parse_number("cols", fields[2])?;
    let win_con = parse_number("win_con", fields[3])?;
    let player_number = parse_number("active player", fields[4])?;

    let config = BoardConfig::new(rows, cols, win_con)?;
    let player =
        Player::from_number(player_number).ok_or(StateError::InvalidPlayer(player_number))?;

    let cells = fields[0]
        .chars()
        .map(|digit| Cell::from_digit(digit).ok_or(StateError::InvalidCell(digit)))
        .collect::<Result<Vec<_>, _>>()?;
    let expected = config.cells();
    if cells.len() != expected {
        return Err(StateError::CellCount {
            rows,
            cols,
            expected,
            found: cells.len(),
        });
    }

    let grid = Grid::from_cells(rows, cols, cells);
    if let Some((row, column)) = grid.floating_piece() {
        return Err(StateError::FloatingPiece { row, column });
    }
    // a finished game is saved before the turn passes, so only the mover can hold a line
    if win::has_line(&grid, win_con, player.opponent()) {
        return Err(StateError::InactiveLine(player.opponent()));
    }

    Ok(Board::from_parts(grid, config, player))
}

fn parse_number(field: &'static str, value: &str) -> Result<usize, StateError> {
    value.parse::<usize>().map_err(|_| StateError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

/// Writes the encoded board to `path`, replacing any previous save
pub fn save<P: AsRef<Path>>(board: &Board, path: P) -> Result<(), StateError> {
    let path = path.as_ref();
    let state = encode(board);
    fs::write(path, &state).map_err(|source| StateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    vlog!("saved '{}' to {}", state, path.display());
    Ok(())
}

/// Reads a board back from `path`. Only the last non-empty line is used.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Board, StateError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| StateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let state = content
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .ok_or(StateError::Empty)?;
    vlog!("loaded '{}' from {}", state.trim(), path.display());
    decode(state)
}
