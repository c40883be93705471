//! A single-ply heuristic opponent

use crate::{board::Board, grid::Player, heuristic, vlog};

/// Picks moves for an automated player
///
/// # Notes
/// Every legal column is tried on a copy of the grid and the resulting position
/// is scored with [`heuristic::evaluate`] from this player's point of view.
/// There is no lookahead, the opponent's reply is never simulated.
///
/// # Tie-break
/// Columns are tried left to right and only a strictly better score replaces
/// the current choice, so the leftmost of several equally scored columns wins.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveSelector {
    player: Player,
}

impl MoveSelector {
    /// Creates a selector playing as `player`
    pub fn new(player: Player) -> Self {
        Self { player }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Scores every legal column, in ascending column order
    pub fn candidate_scores(&self, board: &Board) -> Vec<(usize, i32)> {
        board
            .legal_moves()
            .map(|column| {
                let mut grid = board.grid().clone();
                grid.drop_piece(column, self.player.into());
                (column, heuristic::evaluate(&grid, board.win_con(), self.player))
            })
            .collect()
    }

    /// Returns the best scoring column, or `None` when the board is full
    pub fn best_move(&self, board: &Board) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (column, score) in self.candidate_scores(board) {
            vlog!("{} column {}: score {}", self.player, column + 1, score);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((column, score)),
            }
        }
        if let Some((column, score)) = best {
            vlog!("{} picks column {} (score {})", self.player, column + 1, score);
        }
        best.map(|(column, _)| column)
    }
}
