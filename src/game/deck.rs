use rand::seq::SliceRandom;
use rand::Rng;

use super::cards::{Card, Suit};

pub const DECK_SIZE: usize = 72;

/// A shuffled deck and how far into it has been dealt.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// A deck dealt in exactly the given order.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }

    /// All 72 cards in canonical order: R1 W1 L1 S1 N1 D1 R2 ... D12.
    pub fn build() -> Vec<Card> {
        (0..DECK_SIZE)
            .map(|n| {
                let suit = Suit::CONSTRUCTION_ORDER[n % Suit::CONSTRUCTION_ORDER.len()];
                Card::new(suit, (n / Suit::CONSTRUCTION_ORDER.len()) as u8 + 1)
            })
            .collect()
    }

    pub fn shuffle<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
        items.shuffle(rng);
        items
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Self::shuffle(Self::build(), rng))
    }

    /// Takes up to `count` undealt cards. Asking for more than remain
    /// yields only what is left.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.remaining());
        let dealt = self.cards[self.position..self.position + count].to_vec();
        self.position += count;
        dealt
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.position
    }

    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.position..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_build_has_every_card_once() {
        let cards = Deck::build();
        assert_eq!(cards.len(), DECK_SIZE);

        let unique: HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_build_canonical_order() {
        let cards = Deck::build();
        assert_eq!(cards[0], Card::new(Suit::R, 1));
        assert_eq!(cards[1], Card::new(Suit::W, 1));
        assert_eq!(cards[5], Card::new(Suit::D, 1));
        assert_eq!(cards[6], Card::new(Suit::R, 2));
        assert_eq!(cards[71], Card::new(Suit::D, 12));
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut shuffled = Deck::shuffle(Deck::build(), &mut rng);
        let mut canonical = Deck::build();
        shuffled.sort();
        canonical.sort();
        assert_eq!(shuffled, canonical);
    }

    #[test]
    fn test_same_seed_same_order() {
        let first = Deck::shuffled(&mut StdRng::seed_from_u64(42));
        let second = Deck::shuffled(&mut StdRng::seed_from_u64(42));
        assert_eq!(first.undealt(), second.undealt());
    }

    #[test]
    fn test_deal_advances_position() {
        let mut deck = Deck::shuffled(&mut StdRng::seed_from_u64(1));
        let top: Vec<Card> = deck.undealt()[..9].to_vec();

        let dealt = deck.deal(9);
        assert_eq!(dealt, top);
        assert_eq!(deck.position(), 9);
        assert_eq!(deck.remaining(), DECK_SIZE - 9);
    }

    #[test]
    fn test_deal_truncates_to_remaining() {
        let mut deck = Deck::shuffled(&mut StdRng::seed_from_u64(1));
        deck.deal(70);

        let dealt = deck.deal(4);
        assert_eq!(dealt.len(), 2);
        assert_eq!(deck.position(), DECK_SIZE);

        // Exhausted deck is a no-op, not an error
        assert!(deck.deal(1).is_empty());
        assert_eq!(deck.position(), DECK_SIZE);
    }
}
