use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `mhs` binary.
#[derive(Debug, Parser)]
#[command(name = "mhs", version, about = "Mergington High School activities API")]
pub struct Cli {
    /// Path to a TOML config file (defaults to mergington.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Socket address to listen on (overrides config)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Path to the activities database file (overrides config)
    #[arg(short, long)]
    pub db: Option<String>,

    /// Directory served under /static/ (overrides config)
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides_parse() {
        let cli = Cli::parse_from([
            "mhs",
            "--bind",
            "0.0.0.0:9000",
            "--db",
            "/tmp/x.db",
            "--static-dir",
            "assets",
        ]);
        assert_eq!(cli.bind.as_deref(), Some("0.0.0.0:9000"));
        assert_eq!(cli.db.as_deref(), Some("/tmp/x.db"));
        assert_eq!(cli.static_dir, Some(PathBuf::from("assets")));
        assert!(!cli.verbose);
    }
}
