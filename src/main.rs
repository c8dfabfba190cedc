//! tilechess - chess levels and puzzles in the terminal
//!
//! Thin front-end over the `chess_rules` crate: parses arguments, sets up
//! logging, restores settings, then hands stdin/stdout to a [`Session`].

mod cli;
mod error;
mod levels;
mod render;
mod session;
mod settings;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chess_rules::ScenarioTable;
use cli::Args;
use render::RenderOptions;
use session::Session;
use settings::Settings;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let table = levels::build_table(args.scenarios.as_deref()).context("failed to load levels")?;

    if args.list {
        for name in table.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let mut settings = Settings::load();
    if args.ascii {
        settings.unicode_pieces = false;
    }

    let start = starting_level(&table, args.scenario.as_deref(), &settings)?;
    info!("[SESSION] Starting at '{}'", start);

    let mut session = Session::new(table, &start, RenderOptions::from(&settings))?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout.lock())?;
    info!(
        "[SESSION] Leaving '{}' after {} moves",
        session.scenario_name(),
        session.game().history().len()
    );

    if !args.no_save {
        settings.last_scenario = Some(session.scenario_name().to_string());
        if let Err(e) = settings.save() {
            warn!("[SETTINGS] Failed to save settings: {}", e);
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`) unless verbose
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Level named on the command line, else the last one played, else the first
fn starting_level(
    table: &ScenarioTable,
    requested: Option<&str>,
    settings: &Settings,
) -> Result<String> {
    if let Some(name) = requested {
        table
            .scenario(name)
            .with_context(|| format!("cannot start at '{}'", name))?;
        return Ok(name.to_string());
    }

    if let Some(last) = settings.last_scenario.as_deref() {
        if table.get(last).is_some() {
            return Ok(last.to_string());
        }
        warn!("[SETTINGS] Last level '{}' no longer exists", last);
    }

    table
        .names()
        .next()
        .map(str::to_string)
        .context("no levels available")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_level_precedence() {
        let table = ScenarioTable::builtin();
        let resumed = Settings {
            last_scenario: Some("keyhole".to_string()),
            ..Settings::default()
        };

        assert_eq!(
            starting_level(&table, Some("test"), &resumed).unwrap(),
            "test"
        );
        assert_eq!(starting_level(&table, None, &resumed).unwrap(), "keyhole");
        assert_eq!(
            starting_level(&table, None, &Settings::default()).unwrap(),
            "classic"
        );
    }

    #[test]
    fn test_stale_or_unknown_levels() {
        let table = ScenarioTable::builtin();
        let stale = Settings {
            last_scenario: Some("removed".to_string()),
            ..Settings::default()
        };

        assert_eq!(starting_level(&table, None, &stale).unwrap(), "classic");
        assert!(starting_level(&table, Some("removed"), &stale).is_err());
        assert!(starting_level(&ScenarioTable::new(), None, &stale).is_err());
    }
}
