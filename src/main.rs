use deltanian::{
    BotConfig, ChannelId, ConsoleChannel, GameService, InMemorySessionDirectory, PlayerId,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Splits a console line into `<channel> <author> <message>`.
fn split_line(line: &str) -> Option<(ChannelId, PlayerId, &str)> {
    let line = line.trim();
    let (channel, rest) = line.split_once(char::is_whitespace)?;
    let (author, message) = rest.trim_start().split_once(char::is_whitespace)?;
    let author = PlayerId::from_mention(author)?;
    Some((ChannelId::new(channel.trim_start_matches('#')), author, message.trim()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deltanian=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(status = %config.status, prefix = %config.prefix, "Starting Deltanian cards bot");

    let service = GameService::new(
        &config,
        Arc::new(InMemorySessionDirectory::new()),
        Arc::new(ConsoleChannel::new()),
    );

    // Every line is one chat message: "<channel> <author> <message>"
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, "Failed to read from stdin");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let Some((channel, author, message)) = split_line(&line) else {
            warn!(line = %line, "Expected <channel> <author> <message>");
            continue;
        };

        if let Err(e) = service.handle_line(&channel, &author, message).await {
            warn!(channel = %channel, author = %author, error = %e, "Failed to handle message");
        }
    }

    info!("Input closed, shutting down");
}
