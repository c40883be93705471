//! Cell storage and line enumeration for a rectangular connect-N board

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// Digit used in the persisted state line
    pub fn digit(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::PlayerOne => '1',
            Cell::PlayerTwo => '2',
        }
    }

    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Cell::Empty),
            '1' => Some(Cell::PlayerOne),
            '2' => Some(Cell::PlayerTwo),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1 or 2, as shown to users and stored in saves
    pub fn number(self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn from_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "one" => Ok(Player::One),
            "2" | "two" => Ok(Player::Two),
            other => Err(format!("unknown player '{}', expected one or two", other)),
        }
    }
}

/// The four scan directions shared by win detection and heuristic scoring
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    /// left to right
    Horizontal,
    /// top to bottom
    Vertical,
    /// top-left to bottom-right
    DescendingDiagonal,
    /// bottom-left to top-right
    AscendingDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DescendingDiagonal,
        Direction::AscendingDiagonal,
    ];

    /// (row, column) step; row 0 is the top of the board
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DescendingDiagonal => (1, 1),
            Direction::AscendingDiagonal => (-1, 1),
        }
    }
}

/// A `rows x cols` board. Cells are stored row-major, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.cols + column]
    }

    pub fn set(&mut self, row: usize, column: usize, cell: Cell) {
        self.cells[row * self.cols + column] = cell;
    }

    /// A column accepts a piece while its top cell is empty
    pub fn is_playable(&self, column: usize) -> bool {
        column < self.cols && self.get(0, column).is_empty()
    }

    /// The lowest empty row of a column
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if !self.is_playable(column) {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.get(row, column).is_empty())
    }

    /// Drops a piece into a column, returning the row it landed on
    pub fn drop_piece(&mut self, column: usize, cell: Cell) -> Option<usize> {
        let row = self.landing_row(column)?;
        self.set(row, column, cell);
        Some(row)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// The first `(row, column)` holding a piece with an empty cell below it
    pub fn floating_piece(&self) -> Option<(usize, usize)> {
        (0..self.cols).find_map(|column| {
            (1..self.rows)
                .find(|&row| {
                    self.get(row, column).is_empty() && !self.get(row - 1, column).is_empty()
                })
                .map(|row| (row - 1, column))
        })
    }

    /// Every maximal line of cells running in `direction`.
    ///
    /// Lines shorter than a connect-length simply produce no windows, so callers
    /// can scan them without filtering.
    pub fn lines(&self, direction: Direction) -> Vec<Vec<Cell>> {
        self.line_starts(direction)
            .into_iter()
            .map(|start| self.walk(start, direction))
            .collect()
    }

    fn line_starts(&self, direction: Direction) -> Vec<(usize, usize)> {
        if self.rows == 0 || self.cols == 0 {
            return Vec::new();
        }
        match direction {
            Direction::Horizontal => (0..self.rows).map(|row| (row, 0)).collect(),
            Direction::Vertical => (0..self.cols).map(|column| (0, column)).collect(),
            // left edge, then the top edge
            Direction::DescendingDiagonal => (0..self.rows)
                .map(|row| (row, 0))
                .chain((1..self.cols).map(|column| (0, column)))
                .collect(),
            // left edge, then the bottom edge
            Direction::AscendingDiagonal => (0..self.rows)
                .map(|row| (row, 0))
                .chain((1..self.cols).map(|column| (self.rows - 1, column)))
                .collect(),
        }
    }

    fn walk(&self, (row, column): (usize, usize), direction: Direction) -> Vec<Cell> {
        let (d_row, d_column) = direction.step();
        let mut line = Vec::new();
        let (mut r, mut c) = (row as isize, column as isize);
        while r >= 0 && c >= 0 && (r as usize) < self.rows && (c as usize) < self.cols {
            line.push(self.get(r as usize, c as usize));
            r += d_row;
            c += d_column;
        }
        line
    }
}
