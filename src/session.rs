//! The game flow as an explicit state machine.
//!
//! The console driver turns user input into [`Command`]s and renders the
//! returned [`Event`]s. Starting a new game is a transition back to
//! [`Phase::ConfiguringSettings`], so a driver needs nothing more than a single
//! loop around [`Session::handle`].

use std::fmt;

use crate::board::{Board, BoardConfig};
use crate::error::{ConfigError, MoveError, SessionError};
use crate::grid::Player;
use crate::persist;
use crate::selector::MoveSelector;
use crate::vlog;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    ConfiguringSettings,
    AwaitingMove,
    MoveApplied,
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Phase::ConfiguringSettings => "configuring settings",
            Phase::AwaitingMove => "awaiting a move",
            Phase::MoveApplied => "applying a move",
            Phase::GameOver => "the game is over",
        };
        f.write_str(description)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Change the board and start a game against a human
    Configure {
        rows: usize,
        cols: usize,
        win_con: usize,
    },
    /// Continue a previously saved game against a human
    Load(Board),
    PlayComputer,
    PlayHuman,
    /// A 1-indexed column as entered by the player
    Move(usize),
    Save,
    Surrender,
    NewGame,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Configure { .. } => "configure",
            Command::Load(_) => "load",
            Command::PlayComputer => "play against computer",
            Command::PlayHuman => "play against human",
            Command::Move(_) => "move",
            Command::Save => "save",
            Command::Surrender => "surrender",
            Command::NewGame => "new game",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    SettingsChanged(BoardConfig),
    SettingsRejected(ConfigError),
    GameStarted { computer: Option<Player> },
    GameLoaded,
    MoveRejected(MoveError),
    /// A piece was placed; `column` is zero-based
    Moved {
        player: Player,
        column: usize,
        row: usize,
        automated: bool,
    },
    Won(Player),
    Draw,
    Surrendered(Player),
    /// The encoded state line, ready to be written by the driver
    Saved(String),
    NewGame,
}

pub struct Session {
    board: Board,
    phase: Phase,
    initial: BoardConfig,
    computer: MoveSelector,
    computer_enabled: bool,
}

impl Session {
    /// A session on the default board where `computer_player` is the seat the
    /// computer takes when asked to play
    pub fn new(computer_player: Player) -> Self {
        Self::with_config(BoardConfig::default(), computer_player)
    }

    /// A session whose new games start from `config`
    pub fn with_config(config: BoardConfig, computer_player: Player) -> Self {
        Self {
            board: Board::with_config(config),
            phase: Phase::ConfiguringSettings,
            initial: config,
            computer: MoveSelector::new(computer_player),
            computer_enabled: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The computer's seat, when it is playing
    pub fn computer(&self) -> Option<Player> {
        if self.computer_enabled {
            Some(self.computer.player())
        } else {
            None
        }
    }

    pub fn handle(&mut self, command: Command) -> Result<Vec<Event>, SessionError> {
        let mut events = Vec::new();
        match (self.phase, command) {
            (Phase::ConfiguringSettings, Command::Configure { rows, cols, win_con }) => {
                match self.board.configure(rows, cols, win_con) {
                    Ok(()) => {
                        events.push(Event::SettingsChanged(self.board.config()));
                        self.start(false, &mut events);
                    }
                    Err(err) => events.push(Event::SettingsRejected(err)),
                }
            }
            (Phase::ConfiguringSettings, Command::Load(board)) => {
                self.board = board;
                self.computer_enabled = false;
                events.push(Event::GameLoaded);
                if self.board.is_game_over() {
                    self.conclude(&mut events);
                } else {
                    self.transition(Phase::AwaitingMove);
                }
            }
            (Phase::ConfiguringSettings, Command::PlayComputer) => self.start(true, &mut events),
            (Phase::ConfiguringSettings, Command::PlayHuman) => self.start(false, &mut events),
            (Phase::AwaitingMove, Command::Move(column)) => {
                let player = self.board.active_player();
                match self.board.play_checked(column) {
                    Ok(row) => {
                        events.push(Event::Moved {
                            player,
                            column: column - 1,
                            row,
                            automated: false,
                        });
                        self.transition(Phase::MoveApplied);
                        self.finish_move(&mut events);
                        self.play_computer_turn(&mut events);
                    }
                    Err(err) => events.push(Event::MoveRejected(err)),
                }
            }
            (Phase::AwaitingMove, Command::Save) => {
                events.push(Event::Saved(persist::encode(&self.board)));
            }
            (Phase::AwaitingMove, Command::Surrender) => {
                self.board.surrender();
                events.push(Event::Surrendered(self.board.active_player()));
                self.transition(Phase::GameOver);
            }
            (_, Command::NewGame) => {
                self.board.reset();
                if self.initial != self.board.config() {
                    let BoardConfig { rows, cols, win_con } = self.initial;
                    // already validated when the session was created
                    if let Err(err) = self.board.configure(rows, cols, win_con) {
                        events.push(Event::SettingsRejected(err));
                    }
                }
                self.computer_enabled = false;
                events.push(Event::NewGame);
                self.transition(Phase::ConfiguringSettings);
            }
            (phase, command) => {
                return Err(SessionError::Unavailable {
                    command: command.name(),
                    phase,
                })
            }
        }
        Ok(events)
    }

    fn transition(&mut self, phase: Phase) {
        vlog!("session: {} -> {}", self.phase, phase);
        self.phase = phase;
    }

    fn start(&mut self, computer: bool, events: &mut Vec<Event>) {
        self.computer_enabled = computer;
        events.push(Event::GameStarted {
            computer: self.computer(),
        });
        self.transition(Phase::AwaitingMove);
        // the computer may hold the first seat
        self.play_computer_turn(events);
    }

    // MoveApplied -> GameOver, or back to AwaitingMove with the turn passed on
    fn finish_move(&mut self, events: &mut Vec<Event>) {
        if self.board.is_game_over() {
            self.conclude(events);
        } else {
            self.board.switch_active_player();
            self.transition(Phase::AwaitingMove);
        }
    }

    fn conclude(&mut self, events: &mut Vec<Event>) {
        if self.board.is_win_condition_met() {
            events.push(Event::Won(self.board.active_player()));
        } else if self.board.is_board_full() {
            events.push(Event::Draw);
        } else if self.board.is_surrendered() {
            events.push(Event::Surrendered(self.board.active_player()));
        }
        self.transition(Phase::GameOver);
    }

    fn play_computer_turn(&mut self, events: &mut Vec<Event>) {
        if self.phase != Phase::AwaitingMove
            || !self.computer_enabled
            || self.board.active_player() != self.computer.player()
        {
            return;
        }
        let column = match self.computer.best_move(&self.board) {
            Some(column) => column,
            None => return,
        };
        if let Some(row) = self.board.apply_move(column) {
            events.push(Event::Moved {
                player: self.computer.player(),
                column,
                row,
                automated: true,
            });
            self.transition(Phase::MoveApplied);
            self.finish_move(events);
        }
    }
}
