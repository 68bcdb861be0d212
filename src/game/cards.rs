use std::fmt;
use std::str::FromStr;

use strum_macros::EnumIter;

/// Suit symbols. Declaration order is the display precedence used when a
/// hand is shown; the deck is built in [`Suit::CONSTRUCTION_ORDER`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    EnumIter,
)]
pub enum Suit {
    D,
    N,
    S,
    L,
    W,
    R,
}

impl Suit {
    pub const CONSTRUCTION_ORDER: [Suit; 6] =
        [Suit::R, Suit::W, Suit::L, Suit::S, Suit::N, Suit::D];

    pub fn symbol(self) -> char {
        match self {
            Suit::D => 'D',
            Suit::N => 'N',
            Suit::S => 'S',
            Suit::L => 'L',
            Suit::W => 'W',
            Suit::R => 'R',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'D' => Ok(Suit::D),
            'N' => Ok(Suit::N),
            'S' => Ok(Suit::S),
            'L' => Ok(Suit::L),
            'W' => Ok(Suit::W),
            'R' => Ok(Suit::R),
            _ => Err(CardParseError::InvalidSuit(c)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardParseError {
    #[error("Empty card text")]
    Empty,
    #[error("Invalid suit: {0}")]
    InvalidSuit(char),
    #[error("Invalid rank: {0}")]
    InvalidRank(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
}

impl Card {
    pub const MIN_RANK: u8 = 1;
    pub const MAX_RANK: u8 = 12;

    pub fn new(suit: Suit, rank: u8) -> Self {
        debug_assert!((Self::MIN_RANK..=Self::MAX_RANK).contains(&rank));
        Self { suit, rank }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            other => other,
        }
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = Suit::try_from(chars.next().ok_or(CardParseError::Empty)?)?;

        let digits = chars.as_str();
        let invalid_rank = || CardParseError::InvalidRank(digits.to_string());
        // Only plain 1-12, so "R012" or "R+3" is not a card
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid_rank());
        }
        let rank: u8 = digits.parse().map_err(|_| invalid_rank())?;
        if !(Self::MIN_RANK..=Self::MAX_RANK).contains(&rank) {
            return Err(invalid_rank());
        }

        Ok(Self::new(suit, rank))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}
