//! The authoritative game state: grid, settings, active player and surrender flag

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, MoveError};
use crate::grid::{Cell, Grid, Player};
use crate::{win, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WIN_CON, MAX_CELLS};

/// Board dimensions and connect-length.
///
/// A value of this type always satisfies `win_con > 1`, `rows >= win_con`,
/// `cols >= win_con` and `rows * cols <= MAX_CELLS` when it comes from
/// [`BoardConfig::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_con: usize,
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize, win_con: usize) -> Result<Self, ConfigError> {
        let config = Self {
            rows,
            cols,
            win_con,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_con <= 1 || self.rows < self.win_con || self.cols < self.win_con {
            return Err(ConfigError::Invalid {
                rows: self.rows,
                cols: self.cols,
                win_con: self.win_con,
            });
        }
        match self.rows.checked_mul(self.cols) {
            Some(cells) if cells <= MAX_CELLS => Ok(()),
            _ => Err(ConfigError::TooLarge {
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// Cell count of a validated config
    pub fn cells(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            win_con: DEFAULT_WIN_CON,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    config: BoardConfig,
    player: Player,
    surrendered: bool,
}

impl Board {
    /// A 6x7 connect-4 board with player one to move
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            grid: Grid::new(config.rows, config.cols),
            config,
            player: Player::One,
            surrendered: false,
        }
    }

    pub(crate) fn from_parts(grid: Grid, config: BoardConfig, player: Player) -> Self {
        Self {
            grid,
            config,
            player,
            surrendered: false,
        }
    }

    /// Switches to new settings with an empty grid.
    ///
    /// Invalid settings are rejected before anything changes, leaving the
    /// current board and settings in place.
    pub fn configure(
        &mut self,
        rows: usize,
        cols: usize,
        win_con: usize,
    ) -> Result<(), ConfigError> {
        let config = BoardConfig::new(rows, cols, win_con)?;
        self.grid = Grid::new(config.rows, config.cols);
        self.config = config;
        Ok(())
    }

    /// A move is legal while the column exists and its top cell is empty
    pub fn is_move_legal(&self, column: usize) -> bool {
        self.grid.is_playable(column)
    }

    /// Drops the active player's piece into `column`, returning the landing row.
    ///
    /// Does nothing and returns `None` for an illegal column. The active player
    /// is not switched.
    pub fn apply_move(&mut self, column: usize) -> Option<usize> {
        self.grid.drop_piece(column, Cell::from(self.player))
    }

    /// Plays a 1-indexed column as entered by a player
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<usize, MoveError> {
        if column_one_indexed < 1 || column_one_indexed > self.cols() {
            return Err(MoveError::OutOfRange {
                column: column_one_indexed,
                cols: self.cols(),
            });
        }
        self.apply_move(column_one_indexed - 1)
            .ok_or(MoveError::ColumnFull(column_one_indexed))
    }

    pub fn switch_active_player(&mut self) {
        self.player = self.player.opponent();
    }

    pub fn is_board_full(&self) -> bool {
        self.grid.is_full()
    }

    /// Whether the active player has a line; checked before switching players
    /// so it reports the win of whoever just moved
    pub fn is_win_condition_met(&self) -> bool {
        win::has_line(&self.grid, self.config.win_con, self.player)
    }

    pub fn is_game_over(&self) -> bool {
        self.is_board_full() || self.surrendered || self.is_win_condition_met()
    }

    pub fn surrender(&mut self) {
        self.surrendered = true;
    }

    pub fn is_surrendered(&self) -> bool {
        self.surrendered
    }

    /// Back to the default settings with an empty grid and player one to move
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn cols(&self) -> usize {
        self.config.cols
    }

    pub fn win_con(&self) -> usize {
        self.config.win_con
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn active_player(&self) -> Player {
        self.player
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Columns that currently accept a piece, in ascending order
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cols()).filter(move |&column| self.is_move_legal(column))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
