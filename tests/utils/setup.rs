use std::sync::Arc;

use deltanian::{
    BotConfig, ChannelId, GameService, InMemorySessionDirectory, PlayerId, Session,
    SessionDirectory,
};

use super::mocks::MockMessageChannel;

pub const TEST_CHANNEL: &str = "general";

pub struct TestSetup {
    pub service: GameService,
    pub directory: Arc<InMemorySessionDirectory>,
    pub messages: MockMessageChannel,
    pub players: Vec<String>,
}

#[allow(dead_code)]
impl TestSetup {
    pub fn channel(&self) -> ChannelId {
        ChannelId::new(TEST_CHANNEL)
    }

    /// Sends a chat line to the test channel as `author`.
    pub async fn say(&self, author: &str, line: &str) {
        self.service
            .handle_line(&self.channel(), &PlayerId::new(author), line)
            .await
            .expect("delivery to the mock channel never fails");
    }

    /// Starts a game with every configured player mentioned.
    pub async fn start_game(&self) {
        let mentions: Vec<String> = self
            .players
            .iter()
            .map(|player| format!("<@{}>", player))
            .collect();
        self.say(&self.players[0], &format!(",start {}", mentions.join(" ")))
            .await;
    }

    pub async fn session(&self) -> Option<Session> {
        self.directory.get(&self.channel()).await
    }

    pub async fn current_player(&self) -> String {
        self.session()
            .await
            .expect("game should be running")
            .current_player()
            .to_string()
    }

    /// The first card, in display order, held by `player`.
    pub async fn first_card_of(&self, player: &str) -> String {
        self.session()
            .await
            .expect("game should be running")
            .hand_of(&PlayerId::new(player))
            .and_then(|hand| hand.iter().next().copied())
            .expect("player should hold a card")
            .to_string()
    }

    pub async fn hand_size(&self, player: &str) -> usize {
        self.session()
            .await
            .expect("game should be running")
            .hand_of(&PlayerId::new(player))
            .map(|hand| hand.len())
            .unwrap_or(0)
    }
}

pub struct TestSetupBuilder {
    players: Vec<String>,
    seed: u64,
    prefix: String,
}

#[allow(dead_code)]
impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            players: vec![],
            seed: 42,
            prefix: ",".to_string(),
        }
    }

    pub fn with_players(mut self, players: &[&str]) -> Self {
        self.players = players.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_three_players(self) -> Self {
        self.with_players(&["100", "200", "300"])
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn build(self) -> TestSetup {
        let config = BotConfig {
            prefix: self.prefix,
            seed: Some(self.seed),
            ..BotConfig::default()
        };
        let directory = Arc::new(InMemorySessionDirectory::new());
        let messages = MockMessageChannel::new();
        let service = GameService::new(&config, directory.clone(), Arc::new(messages.clone()));

        TestSetup {
            service,
            directory,
            messages,
            players: self.players,
        }
    }
}
