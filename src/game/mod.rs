// Public API
pub use cards::{Card, CardParseError, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use logic::{GameError, Session, DRAW_PENALTY, DRAW_REFILL, STARTING_HAND_SIZE};
pub use repository::{InMemorySessionDirectory, SessionDirectory};
pub use service::GameService;
pub use types::{Announcement, ChannelId, Notice, Outcome, PlayerId, Scope, SessionStatus};

// Internal modules
mod cards;
mod deck;
mod logic;
mod repository;
mod service;
mod types;
