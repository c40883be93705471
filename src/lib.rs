//! A connect-N engine with a heuristic computer opponent
//!
//! The board can be any size and the connect-length any value from 2 up to
//! the smaller board dimension. The computer looks one move ahead and scores
//! each candidate position by sliding a connect-length window across the board.
//!
//! # Basic Usage
//!
//! ```
//! use connectn_ai::{board::Board, selector::MoveSelector, Player};
//!
//! let mut board = Board::new();
//! for &column in [0, 1, 2].iter() {
//!     board.apply_move(column);
//! }
//! board.switch_active_player();
//!
//! // player one threatens the bottom row, the computer blocks it
//! let column = MoveSelector::new(Player::Two).best_move(&board);
//! assert_eq!(column, Some(3));
//! ```

use static_assertions::*;
pub use anyhow;

#[macro_use]
pub mod logging;

pub mod error;

pub mod grid;

pub mod board;

pub mod win;

pub mod heuristic;

pub mod selector;

pub mod persist;

pub mod session;

pub mod settings;

mod test;

pub use grid::{Cell, Grid, Player};

/// Rows on a default board
pub const DEFAULT_ROWS: usize = 6;

/// Columns on a default board
pub const DEFAULT_COLS: usize = 7;

/// Pieces in a row needed to win on a default board
pub const DEFAULT_WIN_CON: usize = 4;

/// Largest board accepted by [`board::BoardConfig::validate`], in cells
pub const MAX_CELLS: usize = 1 << 16;

// the default board must satisfy the settings invariant
const_assert!(DEFAULT_WIN_CON > 1);
const_assert!(DEFAULT_ROWS >= DEFAULT_WIN_CON && DEFAULT_COLS >= DEFAULT_WIN_CON);
const_assert!(DEFAULT_ROWS * DEFAULT_COLS <= MAX_CELLS);
