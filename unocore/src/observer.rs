use std::{cell::RefCell, rc::Rc};

use crate::{
    card::{Card, CardColor},
    cycle::Direction,
    player::PlayerId,
};

/// Something worth announcing while a game is played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted { players: usize, active_card: Card },
    TurnStarted { player: PlayerId, name: String, active_card: Card },
    CardPlayed { player: PlayerId, name: String, card: Card },
    ColorChosen { player: PlayerId, name: String, color: CardColor },
    PlayerSkipped { player: PlayerId, name: String },
    DirectionReversed { direction: Direction },
    PenaltyApplied { player: PlayerId, name: String, cards: usize },
    CardDrawn { player: PlayerId, name: String },
    Passed { player: PlayerId, name: String },
    DeckRefilled { cards: usize },
    CardsLeft { player: PlayerId, name: String, cards: usize },
    Uno { player: PlayerId, name: String },
    Won { player: PlayerId, name: String },
}

/// Receives every [`GameEvent`]. Implementations must return promptly.
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {
    fn notify(&mut self, _event: &GameEvent) {}
}

/// Routes events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted {
                players,
                active_card,
            } => tracing::info!(players, %active_card, "game started"),
            GameEvent::TurnStarted {
                name, active_card, ..
            } => tracing::info!(%name, %active_card, "turn started"),
            GameEvent::CardPlayed { name, card, .. } => {
                tracing::info!(%name, %card, "card played")
            }
            GameEvent::ColorChosen { name, color, .. } => {
                tracing::info!(%name, %color, "color chosen")
            }
            GameEvent::PlayerSkipped { name, .. } => tracing::info!(%name, "player skipped"),
            GameEvent::DirectionReversed { direction } => {
                tracing::info!(%direction, "direction reversed")
            }
            GameEvent::PenaltyApplied { name, cards, .. } => {
                tracing::info!(%name, cards, "penalty applied")
            }
            GameEvent::CardDrawn { name, .. } => tracing::info!(%name, "card drawn"),
            GameEvent::Passed { name, .. } => tracing::info!(%name, "passed"),
            GameEvent::DeckRefilled { cards } => tracing::info!(cards, "deck refilled"),
            GameEvent::CardsLeft { name, cards, .. } => tracing::info!(%name, cards, "cards left"),
            GameEvent::Uno { name, .. } => tracing::info!(%name, "UNO!"),
            GameEvent::Won { name, .. } => tracing::info!(%name, "won"),
        }
    }
}

impl GameObserver for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

impl<T: GameObserver> GameObserver for Rc<RefCell<T>> {
    fn notify(&mut self, event: &GameEvent) {
        self.borrow_mut().notify(event);
    }
}
