use std::time::Duration;

use log::warn;

/// Desktop Chrome identity sent with every page fetch.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Upper bound on the whole request/response cycle.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const USER_AGENT_ENV: &str = "HEADLINES_USER_AGENT";
pub const TIMEOUT_ENV: &str = "HEADLINES_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FetchConfig {
    /// Defaults, overridden by `HEADLINES_USER_AGENT` / `HEADLINES_TIMEOUT_SECS` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(agent) = lookup(USER_AGENT_ENV).filter(|a| !a.trim().is_empty()) {
            config.user_agent = agent;
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(
                    "Ignoring {}={:?}, keeping {}s timeout",
                    TIMEOUT_ENV,
                    raw,
                    config.timeout.as_secs()
                ),
            }
        }

        config
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
