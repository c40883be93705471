//! Generalised N-in-a-row detection

use crate::grid::{Cell, Direction, Grid, Player};

/// Checks whether `player` has at least `win_con` pieces in an unbroken line
/// horizontally, vertically or on either diagonal.
///
/// Every line is rescanned on each call, nothing is cached between moves.
pub fn has_line(grid: &Grid, win_con: usize, player: Player) -> bool {
    let target = Cell::from(player);
    Direction::ALL.iter().any(|&direction| {
        grid.lines(direction)
            .iter()
            .any(|line| has_run(line, target, win_con))
    })
}

/// Returns the player holding a line, if either does
pub fn winner(grid: &Grid, win_con: usize) -> Option<Player> {
    [Player::One, Player::Two]
        .iter()
        .copied()
        .find(|&player| has_line(grid, win_con, player))
}

// run-length counter, stopping as soon as the target length is reached
fn has_run(line: &[Cell], target: Cell, win_con: usize) -> bool {
    let mut run = 0;
    for &cell in line {
        if cell == target {
            run += 1;
            if run >= win_con {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    fn place(grid: &mut Grid, cells: &[(usize, usize)], cell: Cell) {
        for &(row, column) in cells {
            grid.set(row, column, cell);
        }
    }

    #[test_case(&[(5, 0), (5, 1), (5, 2), (5, 3)] ; "horizontal bottom left")]
    #[test_case(&[(0, 3), (0, 4), (0, 5), (0, 6)] ; "horizontal top right")]
    #[test_case(&[(2, 6), (3, 6), (4, 6), (5, 6)] ; "vertical right edge")]
    #[test_case(&[(0, 0), (1, 1), (2, 2), (3, 3)] ; "descending from corner")]
    #[test_case(&[(2, 3), (3, 4), (4, 5), (5, 6)] ; "descending off centre")]
    #[test_case(&[(5, 0), (4, 1), (3, 2), (2, 3)] ; "ascending from corner")]
    #[test_case(&[(3, 3), (2, 4), (1, 5), (0, 6)] ; "ascending off centre")]
    fn test_exact_run_wins_and_gap_does_not(run: &[(usize, usize)]) {
        let mut grid = Grid::new(6, 7);
        place(&mut grid, run, Cell::PlayerTwo);
        assert!(has_line(&grid, 4, Player::Two));
        assert!(!has_line(&grid, 4, Player::One));

        for &(row, column) in run {
            let mut broken = grid.clone();
            broken.set(row, column, Cell::Empty);
            assert!(!has_line(&broken, 4, Player::Two));
        }
    }

    #[test]
    fn test_opponent_piece_resets_the_run() {
        let mut grid = Grid::new(1, 7);
        place(&mut grid, &[(0, 0), (0, 1), (0, 2)], Cell::PlayerOne);
        grid.set(0, 3, Cell::PlayerTwo);
        place(&mut grid, &[(0, 4), (0, 5), (0, 6)], Cell::PlayerOne);
        assert!(!has_line(&grid, 4, Player::One));
        assert!(has_line(&grid, 3, Player::One));
    }

    #[test]
    fn test_connect_five_on_larger_board() {
        let mut grid = Grid::new(8, 9);
        place(
            &mut grid,
            &[(7, 4), (6, 5), (5, 6), (4, 7), (3, 8)],
            Cell::PlayerOne,
        );
        assert!(has_line(&grid, 5, Player::One));
        assert!(!has_line(&grid, 6, Player::One));
        assert_eq!(winner(&grid, 5), Some(Player::One));
    }

    #[test]
    fn test_connect_two_on_smallest_board() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 0, Cell::PlayerOne);
        assert!(!has_line(&grid, 2, Player::One));
        grid.set(0, 1, Cell::PlayerOne);
        assert!(has_line(&grid, 2, Player::One));
        assert_eq!(winner(&Grid::new(2, 2), 2), None);
    }
}
