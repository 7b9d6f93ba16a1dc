//! Line-oriented terminal front end.
//!
//! A `Session` owns one `GameState`, turns each input line into commands,
//! applies them, and hands back the text to print. Rejected commands come
//! back as a one-line `! reason` and never change the game.

mod parse;

pub use parse::{parse_line, render_help, CommandDef, ShellAction, ShellError, View, COMMANDS};

use tracing::debug;

use crate::core::{Command, GameConfig, GameState};
use crate::error::GameError;
use crate::render;

/// Text to print after a line, and whether the user asked to leave.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub output: String,
    pub quit: bool,
}

impl Reply {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }
}

/// One interactive game.
#[derive(Clone, Debug, Default)]
pub struct Session {
    state: GameState,
}

impl Session {
    /// Start a session in setup with the given config.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
        }
    }

    /// Start a session with players already seated, in order.
    pub fn with_players<S: AsRef<str>>(
        config: GameConfig,
        names: &[S],
    ) -> Result<Self, GameError> {
        let mut state = GameState::new(config);
        for name in names {
            state.add_player(name.as_ref())?;
        }
        Ok(Self { state })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The screen for the current phase.
    #[must_use]
    pub fn screen(&self) -> String {
        render::screen(&self.state)
    }

    /// Handle one line of input.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let action = match parse_line(line) {
            Ok(action) => action,
            Err(err) => return Reply::text(format!("! {err}\n")),
        };

        match action {
            ShellAction::Nothing => Reply::default(),
            ShellAction::Help => Reply::text(render_help()),
            ShellAction::Quit => Reply {
                output: String::new(),
                quit: true,
            },
            ShellAction::Show(view) => Reply::text(self.view(view)),
            ShellAction::Apply(command) => self.run(std::slice::from_ref(&command)),
            ShellAction::Batch(commands) => self.run(&commands),
        }
    }

    fn view(&self, view: View) -> String {
        match view {
            View::Screen => self.screen(),
            View::Table if self.state.is_complete() => render::render_final_table(&self.state),
            View::Table => render::render_live_table(&self.state),
            View::Results if self.state.is_complete() => render::render_results(&self.state),
            View::Results => "Results are shown once round 11 is closed.\n".to_string(),
        }
    }

    /// Apply commands in order, collecting rejections. The screen is redrawn
    /// if anything changed.
    fn run(&mut self, commands: &[Command]) -> Reply {
        let mut rejections = String::new();
        let mut changed = false;

        for command in commands {
            match self.state.apply(command) {
                Ok(transition) => {
                    debug!(?transition, "applied");
                    changed = true;
                }
                Err(err) => rejections.push_str(&format!("! {err}\n")),
            }
        }

        let mut output = rejections;
        if changed {
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&self.screen());
        }
        Reply::text(output)
    }
}
