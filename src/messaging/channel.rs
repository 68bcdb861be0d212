use async_trait::async_trait;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

use crate::game::{ChannelId, PlayerId};
use crate::shared::AppError;

/// Delivers rendered text to players. The chat gateway implements this.
#[async_trait]
pub trait MessageChannel: Send + Sync {
    async fn send_to_channel(&self, channel: &ChannelId, text: &str) -> Result<(), AppError>;

    async fn send_private(&self, player: &PlayerId, text: &str) -> Result<(), AppError>;
}

/// Writes every message to stdout, tagged with where it would have gone.
pub struct ConsoleChannel {
    stdout: Mutex<Stdout>,
}

impl Default for ConsoleChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleChannel {
    pub fn new() -> Self {
        Self {
            stdout: Mutex::new(tokio::io::stdout()),
        }
    }

    async fn write_line(&self, line: String) -> Result<(), AppError> {
        let mut stdout = self.stdout.lock().await;
        stdout
            .write_all(line.as_bytes())
            .await
            .map_err(|e| AppError::Channel(e.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|e| AppError::Channel(e.to_string()))
    }
}

#[async_trait]
impl MessageChannel for ConsoleChannel {
    async fn send_to_channel(&self, channel: &ChannelId, text: &str) -> Result<(), AppError> {
        self.write_line(format!("[#{}] {}\n", channel, text)).await
    }

    async fn send_private(&self, player: &PlayerId, text: &str) -> Result<(), AppError> {
        self.write_line(format!("[dm {}] {}\n", player, text)).await
    }
}
