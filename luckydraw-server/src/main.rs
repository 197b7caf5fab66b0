mod api;
mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::ServerConfig;
use luckydraw_core::{Ledger, LuckyDrawError};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "luckydraw")]
#[command(about = "Lucky Draw - pick a number, place a bet")]
#[command(version)]
struct Cli {
    /// Data directory for the wallet database
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Highest number on the board
    #[arg(long, global = true, default_value_t = luckydraw_core::config::DEFAULT_MAX_NUMBER)]
    max_number: i64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
    },

    /// Wallet ledger commands
    #[command(subcommand)]
    Wallet(commands::WalletCommands),

    /// Winning number administration
    #[command(subcommand)]
    Draw(commands::DrawCommands),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "luckydraw={0},luckydraw_core={0},luckydraw_game={0},tower_http={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = ServerConfig::default();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    config.game.max_number = cli.max_number;
    config.validate()?;

    let storage = luckydraw_core::open_storage(&config.data_dir).await?;

    // Execute command
    let result = match cli.command {
        Commands::Serve { bind } => {
            config.bind = bind;
            commands::serve(&config, storage).await
        }
        Commands::Wallet(cmd) => {
            commands::handle_wallet_command(cmd, &Ledger::new(storage))
                .await
                .map_err(Into::into)
        }
        Commands::Draw(cmd) => {
            commands::handle_draw_command(cmd, &storage, &config.game)
                .await
                .map_err(Into::into)
        }
    };

    if let Err(e) = result {
        match e.downcast_ref::<LuckyDrawError>() {
            Some(LuckyDrawError::Config(msg)) => {
                eprintln!("Error: {}", msg);
            }
            Some(LuckyDrawError::AmountOutOfRange(amount)) => {
                eprintln!("Error: Amount {} is out of range", amount);
                eprintln!("Amounts are limited to {}", luckydraw_core::MAX_AMOUNT);
            }
            _ => {
                eprintln!("Error: {:#}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
