use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::env_config::Config;
use crate::error::Result;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TelegramResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub result: Option<SentMessage>,
}

#[derive(Debug, Deserialize)]
pub struct SentMessage {
    pub message_id: i64,
}

/// Bot API client bound to a single chat.
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    api_base: String,
    token: String,
    chat_id: String,
}

impl TelegramClient {
    pub fn new(api_base: &str, token: &str, chat_id: &str) -> Result<Self> {
        let http = Client::builder().timeout(SEND_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.to_string(),
            chat_id: chat_id.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.telegram_api_base,
            &config.telegram_bot_token,
            &config.telegram_chat_id,
        )
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.token)
    }

    /// Sends `text` with HTML parse mode.
    ///
    /// Telegram reports rejected messages with a JSON body and `ok: false`,
    /// so non-2xx statuses are decoded rather than turned into errors.
    pub async fn send_message(&self, text: &str) -> Result<TelegramResponse> {
        let response = self
            .http
            .post(self.send_message_url())
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
                parse_mode: "HTML",
            })
            .send()
            .await?;

        Ok(response.json::<TelegramResponse>().await?)
    }
}
