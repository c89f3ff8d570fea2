use std::process::ExitCode;

use dotenvy::dotenv;

use backend::api::telegram::TelegramClient;
use backend::config::env_config::Config;
use backend::utils::lead_message::format_test_message;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();
    let config = Config::from_env()?;

    if !config.bot_configured() {
        eprintln!("Error: TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID is not set in .env");
        return Ok(ExitCode::FAILURE);
    }

    let token_preview: String = config.telegram_bot_token.chars().take(20).collect();
    println!("Sending test message...");
    println!("   Bot: {}...", token_preview);
    println!("   Chat ID: {}", config.telegram_chat_id);

    let client = TelegramClient::from_config(&config)?;
    let response = match client.send_message(&format_test_message()).await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if response.ok {
        println!("Test message delivered to Telegram");
        if let Some(sent) = response.result {
            println!("   Message ID: {}", sent.message_id);
        }
        return Ok(ExitCode::SUCCESS);
    }

    eprintln!("Telegram rejected the message:");
    eprintln!("   {}", response.description.as_deref().unwrap_or("no description"));
    match response.error_code {
        Some(400) => {
            eprintln!("\nPossible causes:");
            eprintln!("   - wrong chat id");
            eprintln!("   - the bot was never started (send /start to it)");
        }
        Some(401) => {
            eprintln!("\nPossible causes:");
            eprintln!("   - wrong bot token");
        }
        _ => {}
    }
    Ok(ExitCode::FAILURE)
}
