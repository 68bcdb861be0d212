use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::{
    commands::Command,
    config::BotConfig,
    game::{
        logic::{GameError, Session},
        repository::SessionDirectory,
        types::{ChannelId, Outcome, PlayerId, Scope},
    },
    messaging::{render_notice, MessageChannel},
    shared::AppError,
};

/// Runs chat commands against the game of the channel they came from and
/// relays the results.
pub struct GameService {
    directory: Arc<dyn SessionDirectory>,
    messages: Arc<dyn MessageChannel>,
    rng: Mutex<StdRng>,
    prefix: String,
}

impl GameService {
    pub fn new(
        config: &BotConfig,
        directory: Arc<dyn SessionDirectory>,
        messages: Arc<dyn MessageChannel>,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            directory,
            messages,
            rng: Mutex::new(rng),
            prefix: config.prefix.clone(),
        }
    }

    /// Handles one raw chat line. Lines without the prefix are ignored.
    pub async fn handle_line(
        &self,
        channel: &ChannelId,
        author: &PlayerId,
        line: &str,
    ) -> Result<(), AppError> {
        match Command::parse(line, &self.prefix) {
            Ok(Some(command)) => self.handle(channel, author, command).await,
            Ok(None) => Ok(()),
            Err(e) => self.report(channel, e.into()).await,
        }
    }

    /// Executes a command and delivers its announcements, or tells the
    /// channel why it was rejected.
    pub async fn handle(
        &self,
        channel: &ChannelId,
        author: &PlayerId,
        command: Command,
    ) -> Result<(), AppError> {
        match self.execute(channel, author, command).await {
            Ok(outcome) => self.deliver(channel, &outcome).await,
            Err(e) => self.report(channel, e).await,
        }
    }

    /// Executes a command without delivering anything.
    #[instrument(skip(self, command), fields(command = command.name()))]
    pub async fn execute(
        &self,
        channel: &ChannelId,
        author: &PlayerId,
        command: Command,
    ) -> Result<Outcome, AppError> {
        match command {
            Command::Start(players) => self.start(channel, &players).await,
            Command::Hand => {
                self.with_session(channel, |session| session.show_hand(author))
                    .await
            }
            Command::Undo => self.with_session(channel, |session| session.undo()).await,
            Command::Draw => {
                self.with_session(channel, |session| session.draw(author))
                    .await
            }
            Command::Play(card) => {
                self.with_session(channel, |session| session.play(author, &card))
                    .await
            }
            Command::Leave(replacement) => {
                self.with_session(channel, |session| {
                    session.leave(author, replacement.as_ref())
                })
                .await
            }
            Command::Kick {
                target,
                replacement,
            } => {
                info!(channel = %channel, kicked_by = %author, target = %target, "Kick requested");
                self.with_session(channel, |session| {
                    session.kick(&target, replacement.as_ref())
                })
                .await
            }
        }
    }

    pub async fn get_session(&self, channel: &ChannelId) -> Option<Session> {
        self.directory.get(channel).await
    }

    async fn start(&self, channel: &ChannelId, players: &[PlayerId]) -> Result<Outcome, AppError> {
        let (session, outcome) = {
            let mut rng = self.rng.lock().await;
            Session::create(players, &mut *rng)?
        };

        if self.directory.get(channel).await.is_some() {
            info!(channel = %channel, "Replacing the game already running in this channel");
        }
        self.directory.put(channel, session).await;

        info!(channel = %channel, players = players.len(), "Game started");
        Ok(outcome)
    }

    /// Applies one operation to the channel's session. A failed operation
    /// leaves the stored session untouched; a finished game is dropped.
    async fn with_session<F>(&self, channel: &ChannelId, op: F) -> Result<Outcome, AppError>
    where
        F: FnOnce(&mut Session) -> Result<Outcome, GameError> + Send,
    {
        let mut session = self
            .directory
            .get(channel)
            .await
            .ok_or(AppError::NoActiveSession)?;

        let outcome = op(&mut session)?;

        if outcome.is_terminal() {
            info!(channel = %channel, status = ?outcome.status, "Game over");
            self.directory.remove(channel).await;
        } else {
            debug!(
                channel = %channel,
                turn = %session.current_player(),
                table = ?session.table(),
                "Session updated"
            );
            self.directory.put(channel, session).await;
        }

        Ok(outcome)
    }

    async fn deliver(&self, channel: &ChannelId, outcome: &Outcome) -> Result<(), AppError> {
        for announcement in &outcome.announcements {
            let text = render_notice(&announcement.notice);
            match &announcement.scope {
                Scope::Channel => self.messages.send_to_channel(channel, &text).await?,
                Scope::Private(player) => self.messages.send_private(player, &text).await?,
            }
        }
        Ok(())
    }

    async fn report(&self, channel: &ChannelId, error: AppError) -> Result<(), AppError> {
        if !error.is_user_facing() {
            return Err(error);
        }

        warn!(channel = %channel, error = %error, "Command rejected");
        self.messages
            .send_to_channel(channel, &error.to_string())
            .await
    }
}
