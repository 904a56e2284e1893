use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::constants::{ACTION_CARD_VALUE, WILD_CARD_VALUE};

/// The four colors a card can carry. Enumeration order is the order the
/// colors are offered to a human choosing the color of a wild card.
#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Blue,
    Yellow,
    Green,
}

impl CardColor {
    pub const ALL: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Yellow,
        CardColor::Green,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Suit {
    Color(CardColor),
    /// Carried by wild cards until they are played and resolved.
    Black,
}

impl Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Color(color) => write!(f, "{color}"),
            Suit::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Number(u8),
    DrawTwo,
    Skip,
    Reverse,
    WildDrawFour,
    Wild,
}

impl Rank {
    pub fn is_wild(&self) -> bool {
        matches!(self, Rank::WildDrawFour | Rank::Wild)
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(number) => write!(f, "{number}"),
            Rank::DrawTwo => write!(f, "+2"),
            Rank::Skip => write!(f, "Skip"),
            Rank::Reverse => write!(f, "Reverse"),
            Rank::WildDrawFour => write!(f, "+4"),
            Rank::Wild => write!(f, "Wild"),
        }
    }
}

/// An immutable `(rank, suit)` pair.
///
/// A played wild card is never mutated: [`Card::resolve_wild`] produces a new
/// card with the same rank and the chosen color, which is what ends up on top
/// of the discard pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn colored(color: CardColor, rank: Rank) -> Self {
        Self::new(rank, Suit::Color(color))
    }

    pub const fn number(color: CardColor, number: u8) -> Self {
        Self::colored(color, Rank::Number(number))
    }

    pub const fn wild() -> Self {
        Self::new(Rank::Wild, Suit::Black)
    }

    pub const fn wild_draw_four() -> Self {
        Self::new(Rank::WildDrawFour, Suit::Black)
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn color(&self) -> Option<CardColor> {
        match self.suit {
            Suit::Color(color) => Some(color),
            Suit::Black => None,
        }
    }

    /// Whether the card still needs a color to be chosen when played.
    pub fn is_wild(&self) -> bool {
        self.suit == Suit::Black
    }

    /// Whether the card is a wild card that already had its color chosen.
    pub fn is_resolved_wild(&self) -> bool {
        self.rank.is_wild() && self.suit != Suit::Black
    }

    /// Returns the resolved form of a wild card. Colored cards are returned
    /// unchanged.
    pub fn resolve_wild(self, color: CardColor) -> Card {
        if self.rank.is_wild() {
            Card::new(self.rank, Suit::Color(color))
        } else {
            self
        }
    }

    /// Undoes [`Card::resolve_wild`], so a wild card goes back to the deck black.
    pub fn unresolved(self) -> Card {
        if self.rank.is_wild() {
            Card::new(self.rank, Suit::Black)
        } else {
            self
        }
    }

    /// Whether this card may be played on top of `active`.
    pub fn matches(&self, active: &Card) -> bool {
        self.rank == active.rank || self.suit == active.suit || self.suit == Suit::Black
    }

    /// Tie-breaking value: digits count as themselves, colored action cards
    /// as 20 and wild cards as 50.
    pub fn value(&self) -> u8 {
        match self.rank {
            Rank::Number(number) => number,
            _ if self.rank.is_wild() => WILD_CARD_VALUE,
            _ => ACTION_CARD_VALUE,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_correct_string_for_number_card() {
        let red_3 = Card::number(CardColor::Red, 3);
        assert_eq!(red_3.to_string(), "Red 3");

        let yellow_5 = Card::number(CardColor::Yellow, 5);
        assert_eq!(yellow_5.to_string(), "Yellow 5");
    }

    #[test]
    fn return_correct_string_for_action_cards() {
        let red_skip = Card::colored(CardColor::Red, Rank::Skip);
        assert_eq!(red_skip.to_string(), "Red Skip");

        let blue_reverse = Card::colored(CardColor::Blue, Rank::Reverse);
        assert_eq!(blue_reverse.to_string(), "Blue Reverse");

        let green_draw = Card::colored(CardColor::Green, Rank::DrawTwo);
        assert_eq!(green_draw.to_string(), "Green +2");
    }

    #[test]
    fn return_correct_string_for_wild_cards() {
        assert_eq!(Card::wild().to_string(), "Black Wild");
        assert_eq!(Card::wild_draw_four().to_string(), "Black +4");
        assert_eq!(
            Card::wild_draw_four()
                .resolve_wild(CardColor::Blue)
                .to_string(),
            "Blue +4"
        );
    }

    #[test]
    fn resolve_wild_keeps_rank_and_sets_color() {
        let resolved = Card::wild().resolve_wild(CardColor::Yellow);
        assert_eq!(resolved.rank(), Rank::Wild);
        assert_eq!(resolved.suit(), Suit::Color(CardColor::Yellow));
        assert!(resolved.is_resolved_wild());
        assert!(!resolved.is_wild());
        assert_eq!(resolved.unresolved(), Card::wild());
    }

    #[test]
    fn resolve_wild_ignores_colored_cards() {
        let red_7 = Card::number(CardColor::Red, 7);
        assert_eq!(red_7.resolve_wild(CardColor::Green), red_7);
        assert_eq!(red_7.unresolved(), red_7);
    }

    #[test]
    fn card_matches_by_rank_suit_or_black() {
        let active = Card::number(CardColor::Blue, 5);

        assert!(Card::number(CardColor::Red, 5).matches(&active));
        assert!(Card::colored(CardColor::Blue, Rank::Skip).matches(&active));
        assert!(Card::wild().matches(&active));
        assert!(Card::wild_draw_four().matches(&active));
        assert!(!Card::number(CardColor::Red, 6).matches(&active));
    }

    #[test]
    fn color_list_follows_enum_order() {
        use strum::IntoEnumIterator;

        assert_eq!(CardColor::iter().collect::<Vec<_>>(), CardColor::ALL.to_vec());
        assert_eq!(CardColor::from_index(2), Some(CardColor::Yellow));
        assert_eq!(CardColor::from_index(4), None);
    }

    #[test]
    fn colors_parse_in_any_case() {
        assert_eq!("green".parse::<CardColor>(), Ok(CardColor::Green));
        assert_eq!("YELLOW".parse::<CardColor>(), Ok(CardColor::Yellow));
        assert!("purple".parse::<CardColor>().is_err());
    }

    #[test]
    fn card_values() {
        assert_eq!(Card::number(CardColor::Red, 0).value(), 0);
        assert_eq!(Card::number(CardColor::Red, 9).value(), 9);
        assert_eq!(Card::colored(CardColor::Red, Rank::Skip).value(), 20);
        assert_eq!(Card::colored(CardColor::Red, Rank::Reverse).value(), 20);
        assert_eq!(Card::colored(CardColor::Red, Rank::DrawTwo).value(), 20);
        assert_eq!(Card::wild().value(), 50);
        assert_eq!(Card::wild_draw_four().value(), 50);
    }
}
