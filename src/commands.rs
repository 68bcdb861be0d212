// Chat commands understood by the bot.

// A command is the configured prefix immediately followed by the command name, then
// whitespace-separated arguments. Extra arguments are ignored.
use std::str::FromStr;

use strum_macros::EnumString;

use crate::game::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start(Vec<PlayerId>),
    Hand,
    Undo,
    Draw,
    /// Card text exactly as typed; the session decides whether it is a card
    Play(String),
    Leave(Option<PlayerId>),
    Kick {
        target: PlayerId,
        replacement: Option<PlayerId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Missing argument for {command}: {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("Not a player: {0}")]
    InvalidPlayer(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
enum CommandName {
    #[strum(serialize = "start")]
    Start,
    #[strum(serialize = "hand")]
    Hand,
    #[strum(serialize = "undo")]
    Undo,
    #[strum(serialize = "draw")]
    Draw,
    #[strum(serialize = "play", serialize = "p")]
    Play,
    #[strum(serialize = "leave")]
    Leave,
    #[strum(serialize = "kick")]
    Kick,
}

fn parse_player(text: &str) -> Result<PlayerId, CommandError> {
    PlayerId::from_mention(text).ok_or_else(|| CommandError::InvalidPlayer(text.to_string()))
}

impl Command {
    /// Returns `Ok(None)` for lines that aren't addressed to the bot.
    pub fn parse(line: &str, prefix: &str) -> Result<Option<Self>, CommandError> {
        let Some(body) = line.trim_start().strip_prefix(prefix) else {
            return Ok(None);
        };

        let mut args = body.split_whitespace();
        let Some(name) = args.next() else {
            return Ok(None);
        };
        let name =
            CommandName::from_str(name).map_err(|_| CommandError::Unknown(name.to_string()))?;

        let command = match name {
            CommandName::Start => {
                Command::Start(args.map(parse_player).collect::<Result<_, _>>()?)
            }
            CommandName::Hand => Command::Hand,
            CommandName::Undo => Command::Undo,
            CommandName::Draw => Command::Draw,
            CommandName::Play => {
                let card = args.next().ok_or(CommandError::MissingArgument {
                    command: "play",
                    argument: "card",
                })?;
                Command::Play(card.to_string())
            }
            CommandName::Leave => Command::Leave(args.next().map(parse_player).transpose()?),
            CommandName::Kick => {
                let target = args.next().ok_or(CommandError::MissingArgument {
                    command: "kick",
                    argument: "target",
                })?;
                Command::Kick {
                    target: parse_player(target)?,
                    replacement: args.next().map(parse_player).transpose()?,
                }
            }
        };

        Ok(Some(command))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Start(_) => "start",
            Command::Hand => "hand",
            Command::Undo => "undo",
            Command::Draw => "draw",
            Command::Play(_) => "play",
            Command::Leave(_) => "leave",
            Command::Kick { .. } => "kick",
        }
    }
}
