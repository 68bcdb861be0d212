use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::game::logic::Session;
use crate::game::types::ChannelId;

/// Where the running game of each channel lives between commands.
#[async_trait]
pub trait SessionDirectory: Send + Sync {
    async fn get(&self, channel: &ChannelId) -> Option<Session>;
    async fn put(&self, channel: &ChannelId, session: Session);
    async fn remove(&self, channel: &ChannelId) -> Option<Session>;
}

/// In-memory directory. Sessions are lost when the process exits.
#[derive(Clone)]
pub struct InMemorySessionDirectory {
    /// A mapping from channel ID to session
    sessions: Arc<RwLock<HashMap<ChannelId, Session>>>,
}

impl Default for InMemorySessionDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySessionDirectory {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionDirectory for InMemorySessionDirectory {
    #[instrument(skip(self))]
    async fn get(&self, channel: &ChannelId) -> Option<Session> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(channel).cloned();
        debug!(channel = %channel, found = session.is_some(), "Looked up session");
        session
    }

    #[instrument(skip(self, session))]
    async fn put(&self, channel: &ChannelId, session: Session) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(channel.clone(), session);
        debug!(channel = %channel, "Stored session");
    }

    #[instrument(skip(self))]
    async fn remove(&self, channel: &ChannelId) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let removed = sessions.remove(channel);
        debug!(channel = %channel, removed = removed.is_some(), "Removed session");
        removed
    }
}
