//! Process configuration from environment variables.
//!
//! Keys: `BOT_TOKEN` (required unless passed on the CLI), `DATA_DIR`
//! (document root, default `data`), `ROSTER_FILE` (default
//! `<DATA_DIR>/data/roster.json`), `LOG_FILE`, `INACTIVITY_TIMEOUT_MS`
//! (default 180000), `GREETING_IMAGE`.

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_TIMEOUT_MS: u64 = 180_000;

pub struct AppConfig {
    pub bot_token: String,
    pub data_dir: PathBuf,
    pub roster_file: PathBuf,
    pub log_file: Option<String>,
    pub inactivity_timeout: Duration,
    pub greeting_image: Option<PathBuf>,
}

impl AppConfig {
    /// Loads from the environment; `token_override` (CLI) wins over
    /// `BOT_TOKEN`.
    pub fn from_env(token_override: Option<String>) -> Result<Self> {
        let bot_token = token_override
            .or_else(|| env::var("BOT_TOKEN").ok())
            .ok_or_else(|| anyhow::anyhow!("BOT_TOKEN not set"))?;

        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));
        let roster_file = env::var("ROSTER_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("data").join("roster.json"));
        let log_file = env::var("LOG_FILE").ok();

        let inactivity_timeout = match env::var("INACTIVITY_TIMEOUT_MS") {
            Ok(raw) => Duration::from_millis(
                raw.parse()
                    .map_err(|_| anyhow::anyhow!("INACTIVITY_TIMEOUT_MS is not a number: {}", raw))?,
            ),
            Err(_) => Duration::from_millis(DEFAULT_TIMEOUT_MS),
        };

        let greeting_image = env::var("GREETING_IMAGE").ok().map(PathBuf::from);

        Ok(Self {
            bot_token,
            data_dir,
            roster_file,
            log_file,
            inactivity_timeout,
            greeting_image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "BOT_TOKEN",
            "DATA_DIR",
            "ROSTER_FILE",
            "LOG_FILE",
            "INACTIVITY_TIMEOUT_MS",
            "GREETING_IMAGE",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = AppConfig::from_env(Some("t".to_string())).unwrap();
        assert_eq!(config.bot_token, "t");
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.roster_file, PathBuf::from("data/data/roster.json"));
        assert_eq!(config.inactivity_timeout, Duration::from_millis(180_000));
        assert!(config.log_file.is_none());
        assert!(config.greeting_image.is_none());
    }

    #[test]
    #[serial]
    fn test_token_required() {
        clear_env();
        assert!(AppConfig::from_env(None).is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("BOT_TOKEN", "env-token");
        env::set_var("DATA_DIR", "/srv/condo");
        env::set_var("ROSTER_FILE", "/etc/condo/roster.json");
        env::set_var("INACTIVITY_TIMEOUT_MS", "60000");

        let config = AppConfig::from_env(None).unwrap();
        assert_eq!(config.bot_token, "env-token");
        assert_eq!(config.data_dir, PathBuf::from("/srv/condo"));
        assert_eq!(config.roster_file, PathBuf::from("/etc/condo/roster.json"));
        assert_eq!(config.inactivity_timeout, Duration::from_millis(60_000));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_cli_token_wins_over_env() {
        clear_env();
        env::set_var("BOT_TOKEN", "env-token");
        let config = AppConfig::from_env(Some("cli-token".to_string())).unwrap();
        assert_eq!(config.bot_token, "cli-token");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_bad_timeout_is_an_error() {
        clear_env();
        env::set_var("INACTIVITY_TIMEOUT_MS", "soon");
        let result = AppConfig::from_env(Some("t".to_string()));
        assert!(result.is_err());
        clear_env();
    }
}
