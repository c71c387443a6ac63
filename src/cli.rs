// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI structure is described with Rust structs
// and attributes, and clap generates the parsing, --help and --version.
//
// Layout:
//   link-inspector [GLOBAL FLAGS] <broken|pages|social> [URLS]... [--csv] [--json]
// =============================================================================

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{CheckerConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

#[derive(Parser, Debug)]
#[command(
    name = "link-inspector",
    version,
    about = "Inspect single web pages for broken links, internal pages and social links",
    long_about = "link-inspector fetches each page you give it and reports on the links it contains. \
                  Every tool respects robots.txt and writes a text report, plus optional CSV and JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug logging (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Turn logging off entirely
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Timeout in seconds for the page fetch and for each link check
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Directory the report files are written to
    #[arg(long, global = true, default_value = ".")]
    pub output_dir: PathBuf,

    /// Do not consult robots.txt before fetching a page
    #[arg(long, global = true)]
    pub ignore_robots: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find broken links on each page
    ///
    /// Example: link-inspector broken example.com --csv
    Broken(TargetArgs),

    /// List the internal pages each page links to
    ///
    /// Example: link-inspector pages https://example.com
    Pages(TargetArgs),

    /// List links to social media profiles on each page
    ///
    /// Example: link-inspector social example.com,example.org --json
    Social(TargetArgs),
}

impl Commands {
    pub fn targets(&self) -> &TargetArgs {
        match self {
            Commands::Broken(args) | Commands::Pages(args) | Commands::Social(args) => args,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// URL(s) to inspect; several arguments and comma separated lists both
    /// work. If none are given they are read from stdin.
    pub urls: Vec<String>,

    /// Also export results as CSV
    #[arg(long)]
    pub csv: bool,

    /// Also export results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn config(&self) -> CheckerConfig {
        CheckerConfig::default()
            .with_timeout_secs(self.timeout)
            .with_user_agent(self.user_agent.clone())
            .with_output_dir(self.output_dir.clone())
            .with_ignore_robots(self.ignore_robots)
    }
}

/// Splits raw arguments on commas, trimming and dropping empty pieces
///
///   ["a.com, b.com", "c.com"] -> ["a.com", "b.com", "c.com"]
pub fn split_targets<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .flat_map(|arg| arg.as_ref().split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_broken_with_flags() {
        let cli = Cli::parse_from([
            "link-inspector",
            "broken",
            "example.com,example.org",
            "rust-lang.org",
            "--csv",
            "--timeout",
            "3",
        ]);
        let targets = cli.command.targets();
        assert!(matches!(cli.command, Commands::Broken(_)));
        assert!(targets.csv);
        assert!(!targets.json);
        assert_eq!(
            split_targets(&targets.urls),
            vec!["example.com", "example.org", "rust-lang.org"]
        );
        assert_eq!(cli.config().timeout, std::time::Duration::from_secs(3));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["link-inspector", "social"]);
        assert!(cli.command.targets().urls.is_empty());
        assert_eq!(cli.timeout, 5);
        assert_eq!(cli.user_agent, DEFAULT_USER_AGENT);
        assert!(!cli.ignore_robots);
    }

    #[test]
    fn test_split_targets_drops_blanks() {
        assert_eq!(split_targets(&[" a.com , ,b.com,"]), vec!["a.com", "b.com"]);
        assert!(split_targets::<&str>(&[]).is_empty());
    }
}
