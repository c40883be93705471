use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connectn_ai::board::Board;
use connectn_ai::session::Event;
use connectn_ai::Cell;

pub const START_MENU: &str =
    "COMMANDS:\n0 Change Game Settings\n1 Load Game\n2 Play Against Computer\n3 Play Against Human";

pub const GAME_MENU: &str =
    "COMMANDS:\n0 Return to Game\n1 New Game\n2 Save Game\n3 Surrender\n4 Quit";

pub const SETTINGS_HINT: &str = "The number of pieces to connect must be larger than 1, and the \
    dimensions of the board must be at least as large as the number of pieces to connect.";

/// Draws the board top row first with the 1-indexed column numbers above it
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (1..=board.cols()).map(|x| format!("{:^3}", x)).collect();
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    let grid = board.grid();
    for row in 0..grid.rows() {
        for column in 0..grid.cols() {
            stdout.queue(PrintStyledContent(
                style(" O ")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match grid.get(row, column) {
                        Cell::PlayerOne => Color::Red,
                        Cell::PlayerTwo => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

pub fn input_instructions(board: &Board) -> String {
    format!(
        "Please enter a valid free column number between 1 and {}. \
         (Enter 0 to open the commands list.)",
        board.cols()
    )
}

/// The line printed for an event, if any. `board` is the state after the event.
pub fn describe(event: &Event, board: &Board) -> Option<String> {
    match event {
        Event::SettingsChanged(config) => Some(format!(
            "Board is now {} rows by {} columns, connect {} to win.",
            config.rows, config.cols, config.win_con
        )),
        Event::SettingsRejected(err) => Some(err.to_string()),
        Event::GameStarted { computer: Some(player) } => Some(format!(
            "---- NEW GAME STARTED ----\nThe computer plays as {}.",
            player
        )),
        Event::GameStarted { computer: None } => Some("---- NEW GAME STARTED ----".to_string()),
        Event::GameLoaded => Some("Game loaded.".to_string()),
        Event::MoveRejected(err) => Some(format!("{}, please try again.", err)),
        Event::Moved {
            player,
            column,
            automated: true,
            ..
        } => Some(format!("{}: {}", player, column + 1)),
        Event::Moved { .. } => None,
        Event::Won(player) => Some(format!(
            "{} wins by achieving connect {}!",
            player,
            board.win_con()
        )),
        Event::Draw => Some(
            "The board is now full, there are no more valid moves to be made, it is a draw."
                .to_string(),
        ),
        Event::Surrendered(player) => Some(format!(
            "{} has surrendered. {} wins!",
            player,
            player.opponent()
        )),
        Event::Saved(_) => None,
        Event::NewGame => None,
    }
}
