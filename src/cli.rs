//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Scenario to start with, defaults to the last one played
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// JSON file with extra levels: { "levels": [ ... ] }
    #[arg(long, value_name = "PATH")]
    pub scenarios: Option<PathBuf>,

    /// List the available scenarios and exit
    #[arg(short, long)]
    pub list: bool,

    /// Draw pieces with layout letters instead of chess symbols
    #[arg(long)]
    pub ascii: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not write settings.json on exit
    #[arg(long)]
    pub no_save: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["tilechess"]).unwrap();
        assert!(args.scenario.is_none());
        assert!(args.scenarios.is_none());
        assert!(!args.list && !args.ascii && !args.verbose && !args.no_save);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "tilechess",
            "--scenario",
            "keyhole",
            "--scenarios",
            "levels.json",
            "--list",
            "--ascii",
            "-v",
            "--no-save",
        ])
        .unwrap();
        assert_eq!(args.scenario.as_deref(), Some("keyhole"));
        assert_eq!(args.scenarios, Some(PathBuf::from("levels.json")));
        assert!(args.list && args.ascii && args.verbose && args.no_save);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
