use anyhow::{bail, Context, Result};
use clap::Parser;

use std::io::{stdin, stdout, Stdin, Write};
use std::path::PathBuf;

use connectn_ai::logging::enable_verbose_logging;
use connectn_ai::session::{Command, Event, Phase, Session};
use connectn_ai::settings::Settings;
use connectn_ai::{persist, vlog, Player};

mod view;

/// Play connect-N in the terminal against a human or the computer.
#[derive(Parser)]
#[command(name = "connectn", about = "Connect-N with a heuristic computer opponent")]
struct Cli {
    /// Path to TOML settings file
    #[arg(long, default_value = "connectn.toml")]
    config: PathBuf,

    /// Where games are saved and loaded from
    #[arg(long)]
    save_file: Option<PathBuf>,

    /// Log scoring and state transitions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Seat taken by the computer: one or two
    #[arg(long)]
    ai_player: Option<Player>,

    /// Print the default settings file and exit
    #[arg(long)]
    print_config: bool,
}

/// Line-based number input; `None` once stdin is closed
struct Input {
    stdin: Stdin,
}

impl Input {
    fn new() -> Self {
        Self { stdin: stdin() }
    }

    fn number(&self, prompt: &str) -> Result<Option<usize>> {
        loop {
            print!("{}", prompt);
            stdout().flush()?;

            let mut buffer = String::new();
            if self.stdin.read_line(&mut buffer)? == 0 {
                return Ok(None);
            }
            match buffer.trim().parse::<usize>() {
                Ok(number) => return Ok(Some(number)),
                Err(_) => println!("Invalid number: {}", buffer.trim()),
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", Settings::default_toml());
        return Ok(());
    }

    let mut settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;

    if let Some(save_file) = cli.save_file {
        settings.save_file = save_file;
    }
    if let Some(player) = cli.ai_player {
        settings.ai.player = player;
    }
    if cli.verbose || settings.verbose {
        enable_verbose_logging();
    }
    vlog!("settings: {:?}", settings);

    let mut session = Session::with_config(settings.board, settings.ai.player);
    let input = Input::new();
    // set when the last settings entered were rejected
    let mut reconfigure = false;

    println!("Welcome to Connect N\n");

    loop {
        let command = match session.phase() {
            Phase::ConfiguringSettings => {
                let choice = if reconfigure {
                    0
                } else {
                    println!("{}", view::START_MENU);
                    match input.number("> ")? {
                        Some(choice) => choice,
                        None => break,
                    }
                };
                match choice {
                    0 => {
                        println!("{}", view::SETTINGS_HINT);
                        let rows = input.number("New number of rows: ")?;
                        let cols = input.number("New number of columns: ")?;
                        let win_con = input.number("New number of pieces to connect: ")?;
                        match (rows, cols, win_con) {
                            (Some(rows), Some(cols), Some(win_con)) => {
                                Command::Configure { rows, cols, win_con }
                            }
                            _ => break,
                        }
                    }
                    1 => {
                        if !persist::exists(&settings.save_file) {
                            println!("Save not found, make sure you have saved a game.");
                            continue;
                        }
                        match persist::load(&settings.save_file) {
                            Ok(board) => Command::Load(board),
                            Err(err) => {
                                println!("Could not load the saved game: {}", err);
                                continue;
                            }
                        }
                    }
                    2 => Command::PlayComputer,
                    3 => Command::PlayHuman,
                    other => {
                        println!(
                            "{} is not a valid command, please enter a command between 0 and 3.",
                            other
                        );
                        continue;
                    }
                }
            }
            Phase::AwaitingMove => {
                let board = session.board();
                view::display(board).context("failed to draw board")?;
                println!("{}", view::input_instructions(board));

                let prompt = format!("{}: ", board.active_player());
                match input.number(&prompt)? {
                    None => break,
                    Some(0) => {
                        println!("{}", view::GAME_MENU);
                        match input.number("> ")? {
                            None | Some(4) => break,
                            Some(0) => continue,
                            Some(1) => Command::NewGame,
                            Some(2) => Command::Save,
                            Some(3) => Command::Surrender,
                            Some(other) => {
                                println!(
                                    "{} is not a valid command, \
                                     please enter a command between 0 and 4.",
                                    other
                                );
                                continue;
                            }
                        }
                    }
                    Some(column) => Command::Move(column),
                }
            }
            Phase::GameOver => {
                view::display(session.board()).context("failed to draw board")?;
                println!("Enter 0 to start a new game or any other integer to quit:");
                match input.number("> ")? {
                    Some(0) => Command::NewGame,
                    _ => break,
                }
            }
            Phase::MoveApplied => bail!("session stopped in the middle of a move"),
        };

        let events = session.handle(command)?;
        reconfigure = false;
        for event in events.iter() {
            match event {
                Event::Saved(_) => match persist::save(session.board(), &settings.save_file) {
                    Ok(()) => println!("Game Saved."),
                    Err(err) => println!("A problem occurred: {}", err),
                },
                Event::SettingsRejected(_) => reconfigure = true,
                _ => {}
            }
            if let Some(line) = view::describe(event, session.board()) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
