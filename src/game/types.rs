use std::fmt;

use super::cards::Card;

/// Opaque identity of a player as handed over by the chat gateway.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Accepts a raw id or a chat mention (`<@id>` / `<@!id>`).
    pub fn from_mention(text: &str) -> Option<Self> {
        let text = text.trim();
        let id = match text.strip_prefix("<@") {
            Some(rest) => {
                let rest = rest.strip_suffix('>')?;
                rest.strip_prefix('!').unwrap_or(rest)
            }
            None => text,
        };

        if id.is_empty()
            || id.contains(char::is_whitespace)
            || id.contains(&['<', '>', '@'][..])
        {
            return None;
        }
        Some(Self::new(id))
    }

    pub fn mention(&self) -> String {
        format!("<@{}>", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an announcement should be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Channel,
    Private(PlayerId),
}

/// What happened, for the dispatcher to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    TurnOrder(Vec<PlayerId>),
    /// A player's hand in display order
    Hand(Vec<Card>),
    HandSent,
    Played(Card),
    Won(PlayerId),
    CardReturned,
    Drew { player: PlayerId, count: usize },
    Left { player: PlayerId, replacement: Option<PlayerId> },
    Kicked { target: PlayerId, replacement: Option<PlayerId> },
    Abandoned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub scope: Scope,
    pub notice: Notice,
}

impl Announcement {
    pub fn channel(notice: Notice) -> Self {
        Self {
            scope: Scope::Channel,
            notice,
        }
    }

    pub fn private(player: &PlayerId, notice: Notice) -> Self {
        Self {
            scope: Scope::Private(player.clone()),
            notice,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Won(PlayerId),
    /// The last player left, nobody is left to play
    Abandoned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: SessionStatus,
    pub announcements: Vec<Announcement>,
}

impl Outcome {
    pub fn active(announcements: Vec<Announcement>) -> Self {
        Self {
            status: SessionStatus::Active,
            announcements,
        }
    }

    /// The session no longer exists and must be dropped from the directory
    pub fn is_terminal(&self) -> bool {
        self.status != SessionStatus::Active
    }
}
