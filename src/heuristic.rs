//! Sliding-window scoring of a board from the automated player's point of view

use static_assertions::const_assert;

use crate::grid::{Cell, Direction, Grid, Player};

/// A window filled entirely by the scoring player
pub const COMPLETE_SCORE: i32 = 100;
/// One piece short of a line, the missing cell empty
pub const ONE_AWAY_SCORE: i32 = 50;
/// Two pieces short of a line, both missing cells empty
pub const TWO_AWAY_SCORE: i32 = 10;
/// The opponent is one piece short of a line
pub const OPPONENT_ONE_AWAY_SCORE: i32 = -90;
/// The opponent is two pieces short of a line
pub const OPPONENT_TWO_AWAY_SCORE: i32 = -40;

const_assert!(COMPLETE_SCORE > ONE_AWAY_SCORE);
const_assert!(ONE_AWAY_SCORE > TWO_AWAY_SCORE);
const_assert!(TWO_AWAY_SCORE > 0);
// blocking an opponent's near-win outweighs building one's own two-away
const_assert!(-OPPONENT_ONE_AWAY_SCORE > TWO_AWAY_SCORE);
const_assert!(OPPONENT_ONE_AWAY_SCORE < OPPONENT_TWO_AWAY_SCORE);

/// Scores a board for `player` by summing [`score_window`] over every
/// `win_con`-long window in the four scan directions
pub fn evaluate(grid: &Grid, win_con: usize, player: Player) -> i32 {
    if win_con == 0 {
        return 0;
    }
    Direction::ALL
        .iter()
        .flat_map(|&direction| grid.lines(direction))
        .map(|line| {
            line.windows(win_con)
                .map(|window| score_window(window, player))
                .sum::<i32>()
        })
        .sum()
}

/// Scores a single window.
///
/// The near-win tiers are measured as a distance from the window length, so a
/// connect-5 window with four pieces and a gap is worth the same as a connect-4
/// window with three. Two-away tiers need at least one piece, which keeps an
/// empty connect-2 window neutral.
pub fn score_window(window: &[Cell], player: Player) -> i32 {
    let own = Cell::from(player);
    let other = Cell::from(player.opponent());

    let length = window.len();
    let own_count = window.iter().filter(|&&cell| cell == own).count();
    let other_count = window.iter().filter(|&&cell| cell == other).count();
    let empty_count = length - own_count - other_count;

    if length == 0 {
        0
    } else if own_count == length {
        COMPLETE_SCORE
    } else if own_count == length - 1 && empty_count == 1 {
        ONE_AWAY_SCORE
    } else if length > 2 && own_count == length - 2 && empty_count == 2 {
        TWO_AWAY_SCORE
    } else if other_count == length - 1 && empty_count == 1 {
        OPPONENT_ONE_AWAY_SCORE
    } else if length > 2 && other_count == length - 2 && empty_count == 2 {
        OPPONENT_TWO_AWAY_SCORE
    } else {
        0
    }
}
