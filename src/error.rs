use std::path::PathBuf;

use crate::grid::Player;
use crate::session::Phase;
use crate::MAX_CELLS;

/// A board configuration that breaks `rows >= win_con`, `cols >= win_con`, `win_con > 1`,
/// or holds more than [`MAX_CELLS`] cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "invalid settings {rows}x{cols} connect {win_con}: the number of pieces to connect must be \
         larger than 1, and the dimensions of the board must be larger or equal to the number of \
         pieces to connect"
    )]
    Invalid {
        rows: usize,
        cols: usize,
        win_con: usize,
    },

    #[error("board {rows}x{cols} is too large, at most {max} cells are allowed", max = MAX_CELLS)]
    TooLarge { rows: usize, cols: usize },
}

/// Rejection of a player-entered move
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid move, column {column} out of range. Columns must be between 1 and {cols}")]
    OutOfRange { column: usize, cols: usize },

    #[error("Invalid move, column {0} full")]
    ColumnFull(usize),
}

/// Errors while decoding or storing a persisted game state line
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("expected 5 '-' separated fields, found {0}")]
    FieldCount(usize),

    #[error("could not parse {field} '{value}' as a number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("could not parse '{0}' as a cell, expected 0, 1 or 2")]
    InvalidCell(char),

    #[error("board has {found} cells but {rows}x{cols} needs {expected}")]
    CellCount {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    #[error("active player must be 1 or 2, found {0}")]
    InvalidPlayer(usize),

    #[error("saved state is empty")]
    Empty,

    #[error("piece at row {row}, column {column} has an empty cell below it")]
    FloatingPiece { row: usize, column: usize },

    #[error("{0} holds a line but the other player is to move")]
    InactiveLine(Player),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to access save file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("settings validation error: {0}")]
    Validation(#[from] ConfigError),
}

/// A command that does not apply in the current session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("'{command}' is not available while {phase}")]
    Unavailable { command: &'static str, phase: Phase },
}
