//! Line-oriented text commands over a [`MoveResolver`].
//!
//! Each command gets a response line starting with `=` on success or `?` on
//! failure, followed by a blank line, in the manner of GTP.
//!
//! ## Supported Commands
//!
//! - `player <name>` - Register the next player, answers with its number
//! - `move <player> <pit>` - Apply a move; answers with the 14 cells and
//!   `bonus`, `capture=<seeds>` and `game-over` flags as they apply
//! - `board` - Render the board
//! - `snapshot` - The 14 cells, space separated
//! - `complete` - `true` or `false`
//! - `winner` - Winner message, or an error before the game has ended
//! - `clear` - Start a new game with the same players
//! - `list_commands`, `known_command <cmd>`, `quit`

use std::io::{self, BufRead, Write};

use crate::board::{Board, Snapshot};
use crate::config::AppConfig;
use crate::error::GameError;
use crate::game::{Game, MoveResolver};
use crate::moves::MoveReport;
use crate::render::{Renderer, TextRenderer};
use crate::rules::RuleConfig;

const KNOWN_COMMANDS: &[&str] = &[
    "board",
    "clear",
    "complete",
    "known_command",
    "list_commands",
    "move",
    "player",
    "quit",
    "snapshot",
    "winner",
];

pub struct Session {
    resolver: Box<dyn MoveResolver>,
    rules: RuleConfig,
    renderer: Box<dyn Renderer>,
    show_board: bool,
}

fn format_cells(cells: &Snapshot) -> String {
    cells
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_report(report: &MoveReport) -> String {
    let mut out = format_cells(&report.board);
    if report.bonus_turn {
        out.push_str(" bonus");
    }
    if let Some(capture) = report.capture {
        out.push_str(&format!(" capture={}", capture.seeds));
    }
    if report.game_over {
        out.push_str(" game-over");
    }
    out
}

impl Session {
    pub fn new(rules: RuleConfig) -> Self {
        Session {
            resolver: rules.resolver(Game::new()),
            rules,
            renderer: Box::new(TextRenderer),
            show_board: false,
        }
    }

    /// Build a session from config, registering the configured names.
    pub fn from_config(config: &AppConfig) -> Result<Self, GameError> {
        let mut session = Session::new(config.rules);
        session.show_board = config.display.show_board;
        for name in &config.players.names {
            session.resolver.game_mut().create_player(name.as_str())?;
        }
        Ok(session)
    }

    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn game(&self) -> &Game {
        self.resolver.game()
    }

    /// Read commands from `input` until EOF or `quit`, answering on `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            writeln!(output, "{prefix} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Execute a command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "player" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let name = args.join(" ");
                match self.resolver.game_mut().create_player(name) {
                    Ok(side) => (true, side.id().to_string()),
                    Err(err) => (false, err.to_string()),
                }
            }

            "move" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let (Ok(player), Ok(pit)) = (args[0].parse::<i64>(), args[1].parse::<i64>())
                else {
                    return (false, "player and pit must be integers".to_string());
                };

                match self.resolver.apply_move(player, pit) {
                    Ok(report) => {
                        let mut message = format_report(&report);
                        if self.show_board {
                            message.push('\n');
                            message.push_str(self.render().trim_end());
                        }
                        (true, message)
                    }
                    Err(err) => {
                        tracing::debug!(%err, player, pit, "move rejected");
                        (false, err.to_string())
                    }
                }
            }

            "board" => (true, self.render().trim_end().to_string()),

            "snapshot" => (true, format_cells(&self.game().snapshot())),

            "complete" => (true, self.game().is_complete().to_string()),

            "winner" => match self.resolver.game_mut().winner_message() {
                Ok(message) => (true, message),
                Err(err) => (false, err.to_string()),
            },

            "clear" => {
                let game = Game::with_players(Board::initial(), self.game().players().clone());
                self.resolver = self.rules.resolver(game);
                (true, String::new())
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn render(&self) -> String {
        let game = self.game();
        self.renderer.render(&game.snapshot(), game.players())
    }
}
