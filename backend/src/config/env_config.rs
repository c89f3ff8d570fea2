use std::env;
use std::path::PathBuf;

use crate::api::telegram::DEFAULT_API_BASE;
use crate::error::{RelayError, Result};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Runtime settings for the lead relay, read from the process environment.
///
/// Telegram credentials are optional so the server can start for local
/// previews; leads are then accepted but not forwarded.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub telegram_api_base: String,
    pub bind_addr: String,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };

        let static_dir = match non_empty("STATIC_DIR") {
            Some(dir) => Some(validate_static_dir(PathBuf::from(dir))?),
            None => None,
        };

        Ok(Config {
            telegram_bot_token: non_empty("TELEGRAM_BOT_TOKEN").unwrap_or_default(),
            telegram_chat_id: non_empty("TELEGRAM_CHAT_ID").unwrap_or_default(),
            telegram_api_base: non_empty("TELEGRAM_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port,
            static_dir,
            sentry_dsn: non_empty("SENTRY_DSN"),
        })
    }

    pub fn bot_configured(&self) -> bool {
        !self.telegram_bot_token.is_empty() && !self.telegram_chat_id.is_empty()
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

pub fn parse_port(raw: &str) -> Result<u16> {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(RelayError::config(format!(
            "PORT must be in range 1-65535, got '{}'",
            raw
        ))),
        Ok(port) => Ok(port),
    }
}

fn validate_static_dir(dir: PathBuf) -> Result<PathBuf> {
    if !dir.join("index.html").is_file() {
        return Err(RelayError::config(format!(
            "index.html not found in STATIC_DIR '{}'",
            dir.display()
        )));
    }
    Ok(dir)
}
