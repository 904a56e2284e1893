use std::ops::Index;

use rand::Rng;

use crate::{
    card::Card,
    deck::Deck,
    error::{Result, UnoError},
};

/// The cards held by a single player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    /// Replaces the hand with `count` cards, each taken from a uniformly
    /// random position in the deck.
    pub fn deal_initial<R: Rng + ?Sized>(
        &mut self,
        deck: &mut Deck,
        count: usize,
        rng: &mut R,
    ) -> Result<()> {
        self.0.clear();
        for _ in 0..count {
            let card = deck.draw_random(rng).ok_or(UnoError::EmptyDeck)?;
            self.0.push(card);
        }
        Ok(())
    }

    pub fn playable_cards(&self, active: &Card) -> Vec<Card> {
        self.0.iter().filter(|x| x.matches(active)).copied().collect()
    }

    pub fn playable_indices(&self, active: &Card) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, card)| card.matches(active))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_playable(&self, index: usize, active: &Card) -> bool {
        self.0.get(index).map_or(false, |card| card.matches(active))
    }

    pub fn value_of(card: &Card) -> u8 {
        card.value()
    }

    /// Index of the highest valued playable card, the earliest one on ties.
    /// `None` means the player has to draw.
    pub fn choose_best_play(&self, active: &Card) -> Option<usize> {
        let mut best: Option<(usize, u8)> = None;
        for index in self.playable_indices(active) {
            let value = Self::value_of(&self.0[index]);
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((index, value));
            }
        }
        best.map(|(index, _)| index)
    }

    pub fn remove(&mut self, index: usize) -> Card {
        self.0.remove(index)
    }

    /// Removes the first card equal to `card`.
    pub fn remove_card(&mut self, card: &Card) -> Option<Card> {
        self.0
            .iter()
            .position(|x| x == card)
            .map(|pos| self.0.remove(pos))
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.0.extend(cards);
    }

    pub fn add_card(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
