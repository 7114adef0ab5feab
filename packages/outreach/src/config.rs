use std::env;
use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

pub const DEFAULT_AGENT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_AGENT_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables
///
/// Mail credentials are not part of this struct: they are only required when
/// a send is requested and are read by `mailer::MailerOptions` at that point.
#[derive(Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub agent_model: String,
    pub agent_timeout: Duration,
    pub notify_recipient: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let agent_timeout_secs = match var("AGENT_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse()
                .context("AGENT_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_AGENT_TIMEOUT_SECS,
        };

        Ok(Self {
            openai_api_key: var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?,
            openai_base_url: var("OPENAI_BASE_URL")
                .unwrap_or_else(|| openai_client::DEFAULT_BASE_URL.to_string()),
            agent_model: var("AGENT_MODEL").unwrap_or_else(|| DEFAULT_AGENT_MODEL.to_string()),
            agent_timeout: Duration::from_secs(agent_timeout_secs),
            notify_recipient: var("NOTIFY_RECIPIENT"),
        })
    }

    /// Recipient for the cold email: an explicit address wins over `NOTIFY_RECIPIENT`.
    pub fn recipient(&self, explicit: Option<String>) -> Option<String> {
        explicit.or_else(|| self.notify_recipient.clone())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &"[REDACTED]")
            .field("openai_base_url", &self.openai_base_url)
            .field("agent_model", &self.agent_model)
            .field("agent_timeout", &self.agent_timeout)
            .field("notify_recipient", &self.notify_recipient)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test")])).unwrap();

        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.agent_model, "gpt-4o-mini");
        assert_eq!(config.agent_timeout, Duration::from_secs(120));
        assert!(config.notify_recipient.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1"),
            ("AGENT_MODEL", "gpt-4o"),
            ("AGENT_TIMEOUT_SECS", "15"),
            ("NOTIFY_RECIPIENT", "me@example.com"),
        ]))
        .unwrap();

        assert_eq!(config.openai_base_url, "http://localhost:8080/v1");
        assert_eq!(config.agent_model, "gpt-4o");
        assert_eq!(config.agent_timeout, Duration::from_secs(15));
        assert_eq!(config.notify_recipient.as_deref(), Some("me@example.com"));
    }

    #[test]
    fn test_missing_api_key() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("AGENT_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("AGENT_TIMEOUT_SECS"));
    }

    #[test]
    fn test_explicit_recipient_wins() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("NOTIFY_RECIPIENT", "me@example.com"),
        ]))
        .unwrap();

        assert_eq!(
            config.recipient(Some("cto@prospect.example".into())).as_deref(),
            Some("cto@prospect.example")
        );
        assert_eq!(config.recipient(None).as_deref(), Some("me@example.com"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-live-secret")])).unwrap();
        let debug = format!("{:?}", config);

        assert!(!debug.contains("sk-live-secret"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("gpt-4o-mini"));
    }
}
