use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, Rank},
    constants::*,
    error::{Result, UnoError},
};

/// The draw pile. The top of the deck is the end of the vector.
#[derive(Debug, Clone)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// Builds the canonical 108-card deck in a fixed, unshuffled order.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        // Colored Cards
        for color in CardColor::iter() {
            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::number(color, *number));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::colored(color, Rank::DrawTwo));
            }

            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::colored(color, Rank::Skip));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::colored(color, Rank::Reverse));
            }
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::wild_draw_four());
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::wild());
        }

        Self(cards)
    }

    /// A deck holding exactly `cards`, the last one being the top.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn draw_from_top(&mut self) -> Result<Card> {
        self.0.pop().ok_or(UnoError::EmptyDeck)
    }

    /// Removes a uniformly chosen card, by position.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.0.is_empty() {
            return None;
        }
        let pos = rng.gen_range(0..self.0.len());
        Some(self.0.remove(pos))
    }

    /// Removes the top-most card that is not a wild card.
    pub fn draw_first_colored(&mut self) -> Option<Card> {
        self.0
            .iter()
            .rposition(|x| !x.is_wild())
            .map(|pos| self.0.remove(pos))
    }

    pub fn refill(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.0.extend(cards.into_iter().map(Card::unresolved));
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::card::Suit;

    #[test]
    fn correct_card_count_new_deck() {
        assert_eq!(Deck::new().len(), TOTAL_CARDS_IN_DECK as usize);
    }

    #[test]
    fn new_deck_has_canonical_multiset() {
        let deck = Deck::new();
        let count = |card: Card| deck.cards().iter().filter(|x| **x == card).count();

        for color in CardColor::iter() {
            assert_eq!(count(Card::number(color, 0)), 1);
            for number in 1..=9 {
                assert_eq!(count(Card::number(color, number)), 2);
            }
            assert_eq!(count(Card::colored(color, Rank::DrawTwo)), 2);
            assert_eq!(count(Card::colored(color, Rank::Skip)), 2);
            assert_eq!(count(Card::colored(color, Rank::Reverse)), 2);
        }
        assert_eq!(count(Card::wild()), 4);
        assert_eq!(count(Card::wild_draw_four()), 4);
        assert_eq!(
            deck.cards()
                .iter()
                .filter(|x| x.suit() == Suit::Black)
                .count(),
            8
        );
    }

    #[test]
    fn new_deck_order_is_deterministic() {
        assert_eq!(Deck::new().cards(), Deck::new().cards());
    }

    #[test]
    fn shuffle_keeps_cards() {
        let mut deck = Deck::new();
        deck.shuffle(&mut StdRng::seed_from_u64(7));

        let mut shuffled = deck.cards().to_vec();
        let mut original = Deck::new().cards().to_vec();
        let key = |card: &Card| card.to_string();
        shuffled.sort_by_key(key);
        original.sort_by_key(key);
        assert_eq!(shuffled, original);
    }

    #[test]
    fn draw_from_top_takes_last_card() {
        let mut deck = Deck::from_cards(vec![
            Card::number(CardColor::Red, 1),
            Card::number(CardColor::Blue, 2),
        ]);

        assert_eq!(deck.draw_from_top().unwrap(), Card::number(CardColor::Blue, 2));
        assert_eq!(deck.draw_from_top().unwrap(), Card::number(CardColor::Red, 1));
        assert!(matches!(deck.draw_from_top(), Err(UnoError::EmptyDeck)));
    }

    #[test]
    fn draw_random_removes_one_card() {
        let mut deck = Deck::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(deck.draw_random(&mut rng).is_some());
        assert_eq!(deck.len(), TOTAL_CARDS_IN_DECK as usize - 1);

        let mut empty = Deck::from_cards(vec![]);
        assert!(empty.draw_random(&mut rng).is_none());
    }

    #[test]
    fn draw_first_colored_skips_wild_cards() {
        let mut deck = Deck::from_cards(vec![
            Card::number(CardColor::Green, 4),
            Card::number(CardColor::Red, 8),
            Card::wild(),
            Card::wild_draw_four(),
        ]);

        assert_eq!(deck.draw_first_colored(), Some(Card::number(CardColor::Red, 8)));
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.cards().last(), Some(&Card::wild_draw_four()));

        let mut only_wild = Deck::from_cards(vec![Card::wild()]);
        assert_eq!(only_wild.draw_first_colored(), None);
    }

    #[test]
    fn refill_appends_and_unresolves_wild_cards() {
        let mut deck = Deck::from_cards(vec![]);
        deck.refill(vec![
            Card::number(CardColor::Yellow, 3),
            Card::wild().resolve_wild(CardColor::Red),
        ]);

        assert_eq!(
            deck.cards(),
            &[Card::number(CardColor::Yellow, 3), Card::wild()]
        );
    }
}
