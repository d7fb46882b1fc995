use clap::Parser;

mod commands;
mod config;

use commands::Commands;
use config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, PartialEq)]
#[command(name = "paperrag")]
#[command(about = "Terminal assistant for your Paperless document archive", long_about = None)]
struct Cli {
    /// Enable debug output
    #[arg(long = "debug", default_value_t = false)]
    debug: bool,

    /// Override the backend API endpoint for this invocation
    #[arg(long = "endpoint")]
    endpoint: Option<String>,

    /// Configuration profile
    #[arg(long = "profile", env = "PAPERRAG_PROFILE")]
    profile: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| format!("error,{}=debug", env!("CARGO_CRATE_NAME")).into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    match AppConfig::load(cli.profile.as_deref()) {
        Ok(mut config) => {
            if let Some(endpoint) = cli.endpoint {
                config.api_endpoint = endpoint;
            }

            match cli.command {
                Some(command) => match command.run(config).await {
                    Ok(_) => {}
                    Err(e) => {
                        eprintln!("Ops! something went wrong: {}", e);
                        std::process::exit(1);
                    }
                },
                None => match commands::chat::run_chat(config).await {
                    Ok(_) => {}
                    Err(e) => {
                        eprintln!("Ops! something went wrong: {}", e);
                        std::process::exit(1);
                    }
                },
            }
        }
        Err(e) => eprintln!("Failed to load config: {}", e),
    }
}
