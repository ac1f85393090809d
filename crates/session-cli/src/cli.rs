//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Turn session list payloads into display-ready view records
#[derive(Parser, Debug)]
#[command(name = "sessions")]
#[command(author = "Claude Code SDK")]
#[command(version)]
#[command(about = "Turn session list payloads into display-ready view records")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path (JSON)
    #[arg(long, short = 'c', global = true, env = "SESSIONS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (auto-detects based on TTY if not specified)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Output JSON (alias for --format json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output human-readable (alias for --format human)
    #[arg(long, short = 'H', global = true)]
    pub human: bool,

    /// Output minimal text (alias for --format minimal)
    #[arg(long, short = 'm', global = true)]
    pub minimal: bool,

    /// Pretty-print JSON with indentation
    #[arg(long, short = 'p', global = true)]
    pub pretty: bool,

    /// Force color output
    #[arg(long, global = true)]
    pub color: bool,

    /// Disable color output
    #[arg(long, global = true, conflicts_with = "color")]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Get the effective output format
    pub fn effective_format(&self) -> OutputFormat {
        if self.json {
            return OutputFormat::Json;
        }
        if self.human {
            return OutputFormat::Human;
        }
        if self.minimal {
            return OutputFormat::Minimal;
        }
        if let Some(f) = self.format {
            return f;
        }
        if atty::is(atty::Stream::Stdout) {
            OutputFormat::Human
        } else {
            OutputFormat::Json
        }
    }

    /// Check if colors should be used
    pub fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        if self.color {
            return true;
        }
        atty::is(atty::Stream::Stdout)
    }
}

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// JSON: an array of view records for `translate`, an object with
    /// `sessions`, `message` and `total` for `list`
    Json,
    /// Tab-separated key, label and timestamp
    Minimal,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate a session list into view records, keeping input order
    Translate {
        /// Payload file ("-" or omitted reads stdin)
        input: Option<PathBuf>,
    },

    /// Sort sessions newest first, paginate, then translate
    List {
        /// Payload file ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        /// Sessions per page
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// Page number (1-based)
        #[arg(long)]
        page: Option<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_translate_from_file() {
        let cli = Cli::try_parse_from(["sessions", "translate", "sessions.json", "--json"]).unwrap();
        assert_eq!(cli.effective_format(), OutputFormat::Json);
        match cli.command {
            Command::Translate { input } => {
                assert_eq!(input, Some(PathBuf::from("sessions.json")))
            }
            _ => panic!("expected translate"),
        }
    }

    #[test]
    fn test_parse_list_pagination() {
        let cli = Cli::try_parse_from(["sessions", "list", "-n", "10", "--page", "2"]).unwrap();
        match cli.command {
            Command::List { input, size, page } => {
                assert_eq!(input, None);
                assert_eq!(size, Some(10));
                assert_eq!(page, Some(2));
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_alias_flags_win_over_format() {
        let cli = Cli::try_parse_from(["sessions", "-f", "json", "-m", "translate"]).unwrap();
        assert_eq!(cli.effective_format(), OutputFormat::Minimal);

        let cli = Cli::try_parse_from(["sessions", "-f", "human", "translate"]).unwrap();
        assert_eq!(cli.effective_format(), OutputFormat::Human);
    }

    #[test]
    fn test_color_flags() {
        let cli = Cli::try_parse_from(["sessions", "--no-color", "translate"]).unwrap();
        assert!(!cli.use_color());

        let cli = Cli::try_parse_from(["sessions", "--color", "translate"]).unwrap();
        assert!(cli.use_color());

        assert!(Cli::try_parse_from(["sessions", "--color", "--no-color", "translate"]).is_err());
    }
}
