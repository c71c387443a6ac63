// src/config.rs
// =============================================================================
// Runtime settings for a batch run.
//
// Defaults mirror what the inspection tools have always used: a 5 second
// timeout for every request and a desktop browser User-Agent, because many
// sites reject clients that do not look like a browser.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

/// User-Agent sent with every request (page, link checks and robots.txt)
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Timeout applied to the page fetch and to each link check
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// How many redirects a single request may follow
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub max_redirects: usize,
    /// Directory that receives the .txt/.csv/.json reports
    pub output_dir: PathBuf,
    /// Skip the robots.txt gate entirely
    pub ignore_robots: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            output_dir: PathBuf::from("."),
            ignore_robots: false,
        }
    }
}

impl CheckerConfig {
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_ignore_robots(mut self, ignore: bool) -> Self {
        self.ignore_robots = ignore;
        self
    }
}
