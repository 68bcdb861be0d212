use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use deltanian::{AppError, ChannelId, MessageChannel, PlayerId};

// ============================================================================
// Mock Infrastructure
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    Channel(String),
    Player(String),
}

#[derive(Clone, Default)]
pub struct MockMessageChannel {
    sent_messages: Arc<RwLock<Vec<(Recipient, String)>>>,
}

#[allow(dead_code)]
impl MockMessageChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all_messages(&self) -> Vec<(Recipient, String)> {
        self.sent_messages.read().await.clone()
    }

    pub async fn channel_messages(&self, channel: &str) -> Vec<String> {
        self.messages_for(&Recipient::Channel(channel.to_string()))
            .await
    }

    pub async fn private_messages(&self, player: &str) -> Vec<String> {
        self.messages_for(&Recipient::Player(player.to_string()))
            .await
    }

    pub async fn last_channel_message(&self, channel: &str) -> Option<String> {
        self.channel_messages(channel).await.pop()
    }

    pub async fn clear_messages(&self) {
        self.sent_messages.write().await.clear();
    }

    async fn messages_for(&self, recipient: &Recipient) -> Vec<String> {
        self.sent_messages
            .read()
            .await
            .iter()
            .filter(|(to, _)| to == recipient)
            .map(|(_, text)| text.clone())
            .collect()
    }
}

#[async_trait]
impl MessageChannel for MockMessageChannel {
    async fn send_to_channel(&self, channel: &ChannelId, text: &str) -> Result<(), AppError> {
        self.sent_messages
            .write()
            .await
            .push((Recipient::Channel(channel.to_string()), text.to_string()));
        Ok(())
    }

    async fn send_private(&self, player: &PlayerId, text: &str) -> Result<(), AppError> {
        self.sent_messages
            .write()
            .await
            .push((Recipient::Player(player.to_string()), text.to_string()));
        Ok(())
    }
}
