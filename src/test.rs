#[cfg(test)]
pub mod test {
    use anyhow::{anyhow, Result};

    use crate::board::{Board, BoardConfig};
    use crate::heuristic::evaluate;
    use crate::selector::MoveSelector;
    use crate::{persist, win, Cell, Grid, Player};

    fn swap_players(grid: &Grid) -> Grid {
        let cells = grid
            .cells()
            .iter()
            .map(|cell| match cell {
                Cell::PlayerOne => Cell::PlayerTwo,
                Cell::PlayerTwo => Cell::PlayerOne,
                Cell::Empty => Cell::Empty,
            })
            .collect();
        Grid::from_cells(grid.rows(), grid.cols(), cells)
    }

    #[test]
    pub fn fresh_boards_are_not_full() -> Result<()> {
        for rows in 2..7 {
            for cols in 2..7 {
                for win_con in 2..=rows.min(cols) {
                    let mut board = Board::new();
                    board.configure(rows, cols, win_con)?;
                    assert!(!board.is_board_full());
                    assert!(!board.is_game_over());
                }
            }
        }
        Ok(())
    }

    #[test]
    pub fn open_three_is_preferred() -> Result<()> {
        // computer pieces at the bottom of columns 2 and 3 (1-indexed)
        let mut board = persist::decode(&format!("{}0220000-6-7-4-2", "0".repeat(35)))?;
        let selector = MoveSelector::new(Player::Two);

        assert_eq!(
            selector.candidate_scores(&board),
            vec![(0, 60), (1, 30), (2, 40), (3, 110), (4, 70), (5, 30), (6, 20)]
        );
        let best = selector.best_move(&board).ok_or_else(|| anyhow!("no legal move"))?;
        assert_eq!(best, 3);

        board.apply_move(best);
        assert_eq!(
            evaluate(board.grid(), board.win_con(), Player::Two),
            110
        );
        Ok(())
    }

    #[test]
    pub fn opponent_three_is_blocked() -> Result<()> {
        // player one holds the bottom of columns 1 to 3 with column 4 open
        let board = persist::decode(&format!("{}1110000-6-7-4-2", "0".repeat(35)))?;
        let selector = MoveSelector::new(Player::Two);

        // BBB_ costs -90 and BB__ costs -40 wherever the piece goes, except
        // the blocking column which turns both windows mixed
        assert_eq!(
            selector.candidate_scores(&board),
            vec![
                (0, -130),
                (1, -130),
                (2, -130),
                (3, 0),
                (4, -90),
                (5, -130),
                (6, -130)
            ]
        );
        assert_eq!(selector.best_move(&board), Some(3));
        Ok(())
    }

    #[test]
    pub fn completing_a_line_is_preferred() -> Result<()> {
        // the computer has three in column 7, player one two in row 6
        let mut cells = vec![Cell::Empty; 42];
        for column in 0..2 {
            cells[5 * 7 + column] = Cell::PlayerOne;
        }
        for row in 3..6 {
            cells[row * 7 + 6] = Cell::PlayerTwo;
        }
        let board = persist::decode(&format!(
            "{}-6-7-4-2",
            cells.iter().map(|cell| cell.digit()).collect::<String>()
        ))?;
        let selector = MoveSelector::new(Player::Two);

        let base = evaluate(board.grid(), 4, Player::Two);
        let gains: Vec<i32> = selector
            .candidate_scores(&board)
            .into_iter()
            .map(|(_, score)| score - base)
            .collect();
        assert_eq!(gains, vec![0, 0, 40, 50, 10, 10, 100]);
        assert_eq!(selector.best_move(&board), Some(6));
        Ok(())
    }

    #[test]
    pub fn full_board_without_line_is_a_draw() -> Result<()> {
        let board = persist::decode("1122221111222211-4-4-4-1")?;
        assert!(board.is_board_full());
        assert!(!board.is_win_condition_met());
        assert_eq!(win::winner(board.grid(), 4), None);
        assert!(board.is_game_over());
        assert_eq!(MoveSelector::new(Player::One).best_move(&board), None);
        Ok(())
    }

    #[test]
    pub fn surrender_mid_game() {
        let mut board = Board::new();
        for &column in [3, 3, 4].iter() {
            board.apply_move(column);
            board.switch_active_player();
        }
        let full = board.is_board_full();
        let won = board.is_win_condition_met();
        assert!(!board.is_game_over());

        board.surrender();
        assert!(board.is_game_over());
        assert_eq!(board.is_board_full(), full);
        assert_eq!(board.is_win_condition_met(), won);
    }

    #[test]
    pub fn evaluation_is_symmetric_under_role_swap() -> Result<()> {
        let positions = [
            format!("{}0220000-6-7-4-2", "0".repeat(35)),
            format!("{}1110000-6-7-4-2", "0".repeat(35)),
            "000000000000000010000012000002110001221200-6-7-4-2".to_string(),
            "000000120012210-3-5-3-1".to_string(),
        ];
        for state in positions.iter() {
            let board = persist::decode(state)?;
            let grid = board.grid();
            let swapped = swap_players(grid);
            for &player in [Player::One, Player::Two].iter() {
                assert_eq!(
                    evaluate(grid, board.win_con(), player),
                    evaluate(&swapped, board.win_con(), player.opponent()),
                    "{}",
                    state
                );
            }
        }
        Ok(())
    }

    #[test]
    pub fn serialization_round_trip() -> Result<()> {
        let configs = [
            BoardConfig::default(),
            BoardConfig::new(2, 2, 2)?,
            BoardConfig::new(5, 9, 3)?,
            BoardConfig::new(10, 10, 10)?,
        ];
        for &config in configs.iter() {
            let mut board = Board::with_config(config);
            // play a deterministic game until it ends, checking every position
            let mut column = 0;
            loop {
                let decoded = persist::decode(&persist::encode(&board))?;
                assert_eq!(decoded, board);

                if board.is_game_over() {
                    break;
                }
                while !board.is_move_legal(column) {
                    column = (column + 1) % config.cols;
                }
                board.apply_move(column);
                column = (column * 3 + 1) % config.cols;
                if !board.is_game_over() {
                    board.switch_active_player();
                }
            }
        }
        Ok(())
    }

    #[test]
    pub fn computer_game_runs_to_completion() -> Result<()> {
        for &(rows, cols, win_con) in [(6, 7, 4), (4, 4, 3), (5, 8, 5), (3, 3, 2)].iter() {
            let mut board = Board::with_config(BoardConfig::new(rows, cols, win_con)?);
            let players = [MoveSelector::new(Player::One), MoveSelector::new(Player::Two)];

            let mut moves = 0;
            while !board.is_game_over() {
                let selector = players[board.active_player().number() - 1];
                let column = selector
                    .best_move(&board)
                    .ok_or_else(|| anyhow!("no move on an unfinished board"))?;
                assert!(board.is_move_legal(column));
                board.apply_move(column);
                moves += 1;
                if !board.is_game_over() {
                    board.switch_active_player();
                }
            }
            assert!(moves <= rows * cols);
            assert!(board.is_win_condition_met() || board.is_board_full());
        }
        Ok(())
    }
}
