use crate::{
    card::Card,
    cycle::Direction,
    hand::Hand,
    player::{Player, PlayerId},
};

/// A move as decided by a [`MoveSource`](crate::source::MoveSource).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// Play the card at this index of the hand.
    Play(usize),
    Draw,
    Pass,
    /// Leave the table. The game ends with [`UnoError::PlayerLeft`](crate::error::UnoError::PlayerLeft).
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Played(Card),
    Drew { count: usize },
    DrewAndPlayed { drawn: usize, card: Card },
    /// Passing without having drawn first still costs one card, if there is
    /// one left to draw.
    Passed { drawn: usize },
}

impl TurnAction {
    pub fn played_card(&self) -> Option<Card> {
        match self {
            TurnAction::Played(card) | TurnAction::DrewAndPlayed { card, .. } => Some(*card),
            TurnAction::Drew { .. } | TurnAction::Passed { .. } => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEffect {
    Skipped(PlayerId),
    Reversed(Direction),
    Penalized { player: PlayerId, cards: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub player: PlayerId,
    pub action: TurnAction,
    pub effect: Option<CardEffect>,
    pub cards_left: usize,
    pub won: bool,
}

/// Public information about one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeatSummary<'a> {
    pub id: PlayerId,
    pub name: &'a str,
    pub cards: usize,
}

/// Everything a move source may look at when deciding a move.
#[derive(Clone, Debug)]
pub struct TurnView<'a> {
    pub player: PlayerId,
    pub hand: &'a Hand,
    pub active_card: Card,
    pub has_drawn: bool,
    /// False once the deck and the discard pile below the active card are
    /// both empty. Drawing is rejected then, and passing draws nothing.
    pub can_draw: bool,
    pub next_player: PlayerId,
    pub table: Vec<SeatSummary<'a>>,
}

impl<'a> TurnView<'a> {
    pub(crate) fn new(
        players: &'a [Player],
        player: PlayerId,
        active_card: Card,
        has_drawn: bool,
        can_draw: bool,
        next_player: PlayerId,
    ) -> Self {
        Self {
            player,
            hand: &players[player.0].hand,
            active_card,
            has_drawn,
            can_draw,
            next_player,
            table: players
                .iter()
                .map(|p| SeatSummary {
                    id: p.id,
                    name: p.name(),
                    cards: p.cards_count(),
                })
                .collect(),
        }
    }

    pub fn playable_indices(&self) -> Vec<usize> {
        self.hand.playable_indices(&self.active_card)
    }
}
