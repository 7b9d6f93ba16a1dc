//! Shell line grammar.
//!
//! ```text
//! add <name>            rename <n> <name>     remove <n>
//! start                 score <n> [value]     scores <v1> <v2> ...
//! done                  table | results | show
//! new                   help                  quit
//! ```
//!
//! Player numbers are 1-based here and converted to seats on the way out.

use thiserror::Error;

use crate::core::Command;

/// A shell line that could not be turned into an action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("`{0}` is not a player number")]
    BadPlayerNumber(String),
}

/// Something to show without changing the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Screen,
    Table,
    Results,
}

/// What a shell line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellAction {
    /// Blank line.
    Nothing,
    Apply(Command),
    /// Several commands entered on one line, applied in order.
    Batch(Vec<Command>),
    Show(View),
    Help,
    Quit,
}

/// A shell verb for the help listing.
#[derive(Clone, Copy, Debug)]
pub struct CommandDef {
    pub usage: &'static str,
    pub desc: &'static str,
    pub group: &'static str,
}

const fn cmd(usage: &'static str, desc: &'static str, group: &'static str) -> CommandDef {
    CommandDef { usage, desc, group }
}

/// Every verb, grouped for `help`.
pub const COMMANDS: &[CommandDef] = &[
    cmd("add <name>", "Seat a player", "Setup"),
    cmd("rename <n> <name>", "Rename player n", "Setup"),
    cmd("remove <n>", "Remove player n", "Setup"),
    cmd("start", "Deal round 1", "Setup"),
    cmd("score <n> [value]", "Enter (or clear) player n's score", "Play"),
    cmd("scores <v1> <v2> ...", "Enter scores in seat order", "Play"),
    cmd("done", "Close the round", "Play"),
    cmd("table", "Show the score table", "View"),
    cmd("results", "Show the standings", "View"),
    cmd("show", "Redraw the screen", "View"),
    cmd("new", "Discard this game and start over", "Session"),
    cmd("help", "Show this list", "Session"),
    cmd("quit", "Exit", "Session"),
];

/// Help text, one block per group in first-seen order.
#[must_use]
pub fn render_help() -> String {
    let mut groups: Vec<&str> = Vec::new();
    for c in COMMANDS {
        if !groups.contains(&c.group) {
            groups.push(c.group);
        }
    }

    let mut out = String::new();
    for group in groups {
        out.push_str(&format!("[{group}]\n"));
        for c in COMMANDS.iter().filter(|c| c.group == group) {
            out.push_str(&format!("  {:<22} {}\n", c.usage, c.desc));
        }
    }
    out
}

fn player_number(arg: &str, usage: &'static str) -> Result<usize, ShellError> {
    if arg.is_empty() {
        return Err(ShellError::Usage(usage));
    }
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ShellError::BadPlayerNumber(arg.to_string())),
    }
}

/// Split off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

/// Parse one line of shell input.
///
/// ```
/// use five_crowns::core::Command;
/// use five_crowns::shell::{parse_line, ShellAction};
///
/// assert_eq!(
///     parse_line("add Mary Ann").unwrap(),
///     ShellAction::Apply(Command::add_player("Mary Ann"))
/// );
/// assert_eq!(
///     parse_line("score 2 15").unwrap(),
///     ShellAction::Apply(Command::set_score(1, "15"))
/// );
/// ```
pub fn parse_line(line: &str) -> Result<ShellAction, ShellError> {
    let (verb, rest) = split_word(line.trim());
    let verb = verb.to_lowercase();

    match verb.as_str() {
        "" => Ok(ShellAction::Nothing),
        "add" => {
            if rest.is_empty() {
                return Err(ShellError::Usage("add <name>"));
            }
            Ok(ShellAction::Apply(Command::add_player(rest)))
        }
        "remove" | "rm" => {
            let index = player_number(split_word(rest).0, "remove <n>")?;
            Ok(ShellAction::Apply(Command::RemovePlayer { index }))
        }
        "rename" => {
            let (n, name) = split_word(rest);
            let index = player_number(n, "rename <n> <name>")?;
            if name.is_empty() {
                return Err(ShellError::Usage("rename <n> <name>"));
            }
            Ok(ShellAction::Apply(Command::rename_player(index, name)))
        }
        "start" => Ok(ShellAction::Apply(Command::Start)),
        "score" => {
            let (n, value) = split_word(rest);
            let player = player_number(n, "score <n> [value]")?;
            Ok(ShellAction::Apply(Command::set_score(player, value)))
        }
        "scores" => {
            let commands: Vec<Command> = rest
                .split_whitespace()
                .enumerate()
                .map(|(player, value)| Command::set_score(player, value))
                .collect();
            if commands.is_empty() {
                return Err(ShellError::Usage("scores <v1> <v2> ..."));
            }
            Ok(ShellAction::Batch(commands))
        }
        "done" | "next" => Ok(ShellAction::Apply(Command::CompleteRound)),
        "new" | "reset" => Ok(ShellAction::Apply(Command::Reset)),
        "table" => Ok(ShellAction::Show(View::Table)),
        "results" => Ok(ShellAction::Show(View::Results)),
        "show" => Ok(ShellAction::Show(View::Screen)),
        "help" | "?" => Ok(ShellAction::Help),
        "quit" | "exit" => Ok(ShellAction::Quit),
        other => Err(ShellError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_line("   ").unwrap(), ShellAction::Nothing);
    }

    #[test]
    fn test_verbs_are_case_insensitive() {
        assert_eq!(parse_line("START").unwrap(), ShellAction::Apply(Command::Start));
        assert_eq!(parse_line("Done").unwrap(), ShellAction::Apply(Command::CompleteRound));
    }

    #[test]
    fn test_add_keeps_inner_spaces() {
        assert_eq!(
            parse_line("add   Mary  Ann ").unwrap(),
            ShellAction::Apply(Command::add_player("Mary  Ann"))
        );
        assert_eq!(parse_line("add").unwrap_err(), ShellError::Usage("add <name>"));
    }

    #[test]
    fn test_player_numbers_are_one_based() {
        assert_eq!(
            parse_line("remove 1").unwrap(),
            ShellAction::Apply(Command::RemovePlayer { index: 0 })
        );
        assert_eq!(
            parse_line("remove 0").unwrap_err(),
            ShellError::BadPlayerNumber("0".to_string())
        );
        assert_eq!(
            parse_line("remove x").unwrap_err(),
            ShellError::BadPlayerNumber("x".to_string())
        );
        assert_eq!(parse_line("remove").unwrap_err(), ShellError::Usage("remove <n>"));
    }

    #[test]
    fn test_rename() {
        assert_eq!(
            parse_line("rename 2 Bea Jr").unwrap(),
            ShellAction::Apply(Command::rename_player(1, "Bea Jr"))
        );
        assert_eq!(
            parse_line("rename 2").unwrap_err(),
            ShellError::Usage("rename <n> <name>")
        );
    }

    #[test]
    fn test_score_without_value_clears() {
        assert_eq!(
            parse_line("score 3").unwrap(),
            ShellAction::Apply(Command::set_score(2, ""))
        );
    }

    #[test]
    fn test_scores_batch() {
        assert_eq!(
            parse_line("scores 5 0 12").unwrap(),
            ShellAction::Batch(vec![
                Command::set_score(0, "5"),
                Command::set_score(1, "0"),
                Command::set_score(2, "12"),
            ])
        );
        assert!(parse_line("scores").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_line("deal 5").unwrap_err(),
            ShellError::UnknownCommand("deal".to_string())
        );
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = render_help();
        assert!(help.starts_with("[Setup]\n"));
        for c in COMMANDS {
            assert!(help.contains(c.usage));
        }
    }
}
