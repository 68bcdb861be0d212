use thiserror::Error;

use crate::commands::CommandError;
use crate::game::GameError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("No game in current channel")]
    NoActiveSession,

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    InvalidCommand(#[from] CommandError),

    #[error("Failed to deliver message: {0}")]
    Channel(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// Errors the player caused, which are answered in the channel rather
    /// than handed back to the host.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::NoActiveSession | AppError::Game(_) | AppError::InvalidCommand(_)
        )
    }
}
