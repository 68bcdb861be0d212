// A session is one game of Deltanian cards in one channel.

// The roster is shuffled once when the game starts and that order is the turn order for the rest
// of the game. Players can leave or be kicked, optionally handing their seat and hand to someone
// else.

// Exactly one card can be on the table. Drawing clears it, undoing takes it back.

// Every operation checks its preconditions before touching any state, so a failed command leaves
// the session exactly as it was.
use std::collections::{BTreeSet, HashMap, HashSet};

use rand::Rng;

use crate::game::cards::Card;
use crate::game::deck::Deck;
use crate::game::types::{Announcement, Notice, Outcome, PlayerId, SessionStatus};

pub const STARTING_HAND_SIZE: usize = 9;
pub const DRAW_PENALTY: usize = 4;
pub const DRAW_REFILL: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("It's not your turn!")]
    NotYourTurn,
    #[error("You don't have that card!")]
    CardNotHeld,
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("That player is not in the game")]
    UnknownPlayer,
    #[error("That player is already in the game")]
    PlayerAlreadySeated,
    #[error("A game needs at least one player")]
    EmptyRoster,
}

#[derive(Debug, Clone)]
pub struct Session {
    roster: Vec<PlayerId>,
    hands: HashMap<PlayerId, BTreeSet<Card>>,
    deck: Deck,
    table: Option<Card>,
    turn_index: usize, // The index into the roster of the player who is to act
    discarded: Vec<Card>,
}

impl Session {
    pub fn new(
        roster: Vec<PlayerId>,
        hands: HashMap<PlayerId, BTreeSet<Card>>,
        deck: Deck,
        turn_index: usize,
    ) -> Self {
        Self {
            roster,
            hands,
            deck,
            table: None,
            turn_index,
            discarded: vec![],
        }
    }

    /// Starts a game: shuffles the players into a turn order, shuffles the
    /// deck and deals every player their starting hand.
    pub fn create<R: Rng + ?Sized>(
        players: &[PlayerId],
        rng: &mut R,
    ) -> Result<(Self, Outcome), GameError> {
        if players.is_empty() {
            return Err(GameError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        if !players.iter().all(|player| seen.insert(player)) {
            return Err(GameError::PlayerAlreadySeated);
        }

        let roster = Deck::shuffle(players.to_vec(), rng);
        let hands = roster
            .iter()
            .map(|player| (player.clone(), BTreeSet::new()))
            .collect();
        let mut session = Self::new(roster, hands, Deck::shuffled(rng), 0);

        let mut announcements = vec![Announcement::channel(Notice::TurnOrder(
            session.roster.clone(),
        ))];
        for player in session.roster.clone() {
            session.give(&player, STARTING_HAND_SIZE);
            announcements.push(session.hand_announcement(&player));
        }

        Ok((session, Outcome::active(announcements)))
    }

    /// Deals up to `count` cards to a seated player.
    pub fn deal(&mut self, player: &PlayerId, count: usize) -> Result<Announcement, GameError> {
        if !self.hands.contains_key(player) {
            return Err(GameError::UnknownPlayer);
        }
        self.give(player, count);
        Ok(self.hand_announcement(player))
    }

    pub fn play(&mut self, actor: &PlayerId, card: &str) -> Result<Outcome, GameError> {
        self.ensure_turn(actor)?;

        // Text that isn't a card can't be in anyone's hand
        let card: Card = card.parse().map_err(|_| GameError::CardNotHeld)?;
        let hand = self.hands.get_mut(actor).ok_or(GameError::CardNotHeld)?;
        if !hand.remove(&card) {
            return Err(GameError::CardNotHeld);
        }

        if let Some(previous) = self.table.replace(card) {
            self.discarded.push(previous);
        }
        let mut announcements = vec![Announcement::channel(Notice::Played(card))];

        if hand.is_empty() {
            announcements.push(Announcement::channel(Notice::Won(actor.clone())));
            return Ok(Outcome {
                status: SessionStatus::Won(actor.clone()),
                announcements,
            });
        }

        self.advance_turn();
        Ok(Outcome::active(announcements))
    }

    /// Takes back the card on the table and gives the turn back to whoever
    /// played it.
    pub fn undo(&mut self) -> Result<Outcome, GameError> {
        let card = self.table.take().ok_or(GameError::NothingToUndo)?;

        self.turn_index = (self.turn_index + self.roster.len() - 1) % self.roster.len();
        let owner = self.roster[self.turn_index].clone();
        self.hands.entry(owner).or_default().insert(card);

        Ok(Outcome::active(vec![Announcement::channel(
            Notice::CardReturned,
        )]))
    }

    pub fn draw(&mut self, actor: &PlayerId) -> Result<Outcome, GameError> {
        self.ensure_turn(actor)?;

        if let Some(card) = self.table.take() {
            self.discarded.push(card);
        }
        self.advance_turn();

        let mut drawn = 0;
        let mut hands = Vec::with_capacity(self.roster.len());
        for player in self.roster.clone() {
            if &player == actor {
                drawn = self.give(&player, DRAW_PENALTY);
            } else {
                self.give(&player, DRAW_REFILL);
            }
            hands.push(self.hand_announcement(&player));
        }

        let mut announcements = vec![Announcement::channel(Notice::Drew {
            player: actor.clone(),
            count: drawn,
        })];
        announcements.extend(hands);
        Ok(Outcome::active(announcements))
    }

    pub fn show_hand(&self, actor: &PlayerId) -> Result<Outcome, GameError> {
        if !self.hands.contains_key(actor) {
            return Err(GameError::UnknownPlayer);
        }

        Ok(Outcome::active(vec![
            self.hand_announcement(actor),
            Announcement::channel(Notice::HandSent),
        ]))
    }

    pub fn leave(
        &mut self,
        actor: &PlayerId,
        replacement: Option<&PlayerId>,
    ) -> Result<Outcome, GameError> {
        let status = self.substitute(actor, replacement)?;
        let notice = Notice::Left {
            player: actor.clone(),
            replacement: replacement.cloned(),
        };
        Ok(self.substitution_outcome(status, notice, replacement))
    }

    pub fn kick(
        &mut self,
        target: &PlayerId,
        replacement: Option<&PlayerId>,
    ) -> Result<Outcome, GameError> {
        let status = self.substitute(target, replacement)?;
        let notice = Notice::Kicked {
            target: target.clone(),
            replacement: replacement.cloned(),
        };
        Ok(self.substitution_outcome(status, notice, replacement))
    }

    /// Hands `outgoing`'s seat and cards to `incoming`, or removes
    /// `outgoing` from the game when there is no replacement. Removed
    /// hands are discarded.
    pub fn substitute(
        &mut self,
        outgoing: &PlayerId,
        incoming: Option<&PlayerId>,
    ) -> Result<SessionStatus, GameError> {
        let seat = self
            .roster
            .iter()
            .position(|player| player == outgoing)
            .ok_or(GameError::UnknownPlayer)?;

        match incoming {
            Some(incoming) => {
                if self.hands.contains_key(incoming) {
                    return Err(GameError::PlayerAlreadySeated);
                }
                let hand = self.hands.remove(outgoing).unwrap_or_default();
                self.hands.insert(incoming.clone(), hand);
                self.roster[seat] = incoming.clone();
            }
            None => {
                self.roster.remove(seat);
                if let Some(hand) = self.hands.remove(outgoing) {
                    self.discarded.extend(hand);
                }

                if self.roster.is_empty() {
                    self.turn_index = 0;
                    return Ok(SessionStatus::Abandoned);
                }
                // Later seats moved down one, keep the pointer on the same player
                if seat < self.turn_index {
                    self.turn_index -= 1;
                }
                self.turn_index %= self.roster.len();
            }
        }

        Ok(SessionStatus::Active)
    }

    pub fn roster(&self) -> &[PlayerId] {
        &self.roster
    }

    pub fn current_player(&self) -> &PlayerId {
        &self.roster[self.turn_index]
    }

    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    pub fn hand_of(&self, player: &PlayerId) -> Option<&BTreeSet<Card>> {
        self.hands.get(player)
    }

    pub fn table(&self) -> Option<Card> {
        self.table
    }

    pub fn draw_position(&self) -> usize {
        self.deck.position()
    }

    pub fn undealt(&self) -> &[Card] {
        self.deck.undealt()
    }

    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    fn ensure_turn(&self, actor: &PlayerId) -> Result<(), GameError> {
        if self.roster.get(self.turn_index) != Some(actor) {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    fn advance_turn(&mut self) {
        self.turn_index = (self.turn_index + 1) % self.roster.len();
    }

    fn give(&mut self, player: &PlayerId, count: usize) -> usize {
        let cards = self.deck.deal(count);
        let dealt = cards.len();
        self.hands.entry(player.clone()).or_default().extend(cards);
        dealt
    }

    fn hand_announcement(&self, player: &PlayerId) -> Announcement {
        let cards = self
            .hands
            .get(player)
            .map(|hand| hand.iter().copied().collect())
            .unwrap_or_default();
        Announcement::private(player, Notice::Hand(cards))
    }

    fn substitution_outcome(
        &self,
        status: SessionStatus,
        notice: Notice,
        replacement: Option<&PlayerId>,
    ) -> Outcome {
        let mut announcements = vec![Announcement::channel(notice)];
        if let Some(replacement) = replacement {
            announcements.push(self.hand_announcement(replacement));
        }
        if status == SessionStatus::Abandoned {
            announcements.push(Announcement::channel(Notice::Abandoned));
        }
        Outcome {
            status,
            announcements,
        }
    }
}
