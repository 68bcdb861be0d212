// Library crate for the Deltanian cards bot
// This file exposes the public API for integration tests

pub mod commands;
pub mod config;
pub mod game;
pub mod messaging;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use commands::{Command, CommandError};
pub use config::BotConfig;
pub use game::{
    Card, ChannelId, GameError, GameService, InMemorySessionDirectory, PlayerId, Session,
    SessionDirectory, Suit,
};
pub use messaging::{ConsoleChannel, MessageChannel};
pub use shared::AppError;
