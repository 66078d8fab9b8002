use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vision_chat::{config::Config, state::AppState, terminal, web};

#[derive(Debug, Parser)]
#[command(name = "vision-chat")]
#[command(about = "Chat with a multimodal model from the terminal or a browser")]
struct CliArgs {
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Mode {
    /// Interactive terminal chat (default).
    Chat,
    /// Serve the chat page and `POST /chat`.
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vision_chat=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let state = AppState::from_config(&config)?;

    match args.mode.unwrap_or(Mode::Chat) {
        Mode::Chat => {
            info!("Starting terminal chat (type 'exit' or 'quit' to leave)");
            let stdin = BufReader::new(tokio::io::stdin());
            terminal::run(&state.pipeline, stdin, tokio::io::stdout()).await?;
        }
        Mode::Serve => {
            web::start_server(state, &config.host, config.port).await?;
        }
    }

    Ok(())
}
