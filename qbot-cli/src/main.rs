//! qbot CLI: run the key-phrase Telegram bot or check its configuration.
//! Config comes from env (.env supported) and optional CLI args.

use anyhow::Result;
use clap::{Parser, Subcommand};
use qbot_telegram::{run_bot, BotConfig};

#[derive(Parser)]
#[command(name = "qbot")]
#[command(about = "Key-phrase Telegram bot: run, check-config", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Load and validate the configuration, print a summary, and exit.
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::CheckConfig => handle_check_config(),
    }
}

/// Loads and validates the config without starting the bot, then prints what
/// the bot would run with (phrases and owner id elided to counts/flags).
fn handle_check_config() -> Result<()> {
    let config = BotConfig::load(None)?;
    config.validate()?;

    println!("Configuration OK");
    println!("  key phrases:      {}", config.router.key_phrases.len());
    println!("  fallback replies: {}", config.router.fallback_replies.len());
    println!(
        "  owner id:         {}",
        if config.router.owner_id.is_some() {
            "set"
        } else {
            "not set (notifications disabled)"
        }
    );
    println!("  log file:         {}", config.log_file);
    println!(
        "  api url:          {}",
        config.telegram_api_url.as_deref().unwrap_or("default")
    );

    Ok(())
}
