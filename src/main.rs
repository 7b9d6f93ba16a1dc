//! Five Crowns score keeper for the terminal.
//!
//! Usage:
//!   five-crowns
//!   five-crowns --players Ann,Bob,Cy
//!   five-crowns --config table.json --verbose < session.txt

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use five_crowns::core::GameConfig;
use five_crowns::shell::Session;

#[derive(Parser, Debug)]
#[command(name = "five-crowns", version, about = "Keep score for a game of Five Crowns")]
struct Args {
    /// Players to seat before the first prompt, in seating order
    #[arg(short, long, value_delimiter = ',')]
    players: Vec<String>,

    /// JSON table config (min_players, max_players, max_score_hint, name_width)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every command to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    GameConfig::from_json(&json).with_context(|| format!("bad config {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = load_config(args.config.as_ref())?;
    let mut session =
        Session::with_players(config, args.players.as_slice()).context("failed to seat players")?;
    info!(players = session.state().player_count(), "session ready");

    let interactive = io::stdin().is_terminal();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", session.screen())?;
    if interactive {
        writeln!(stdout, "Type `help` for commands.")?;
    }

    let stdin = io::stdin();
    loop {
        if interactive {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("failed to read input")? == 0 {
            break;
        }

        let reply = session.handle_line(&line);
        if !reply.output.is_empty() {
            write!(stdout, "{}", reply.output)?;
        }
        if reply.quit {
            break;
        }
    }

    Ok(())
}
