use std::fmt::Debug;

use thiserror::Error;

use crate::player::PlayerId;

#[derive(Error, Debug)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("At most one player can be controlled interactively")]
    TooManyInteractivePlayers,
    #[error("The game has already been set up")]
    AlreadyStarted,
    #[error("The game has not been set up yet")]
    NotStarted,
    #[error("The game is over, {0} has already won")]
    GameOver(PlayerId),
    #[error("{0} left the game")]
    PlayerLeft(PlayerId),
    #[error("No cards left in the deck or the discard pile")]
    EmptyDeck,
    #[error("Card count invariant violated: expected {expected} cards, found {found}")]
    CardCountMismatch { expected: usize, found: usize },
}

/// Rejected human input. Recovered by asking again, never returned from the
/// engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("{0}")]
    InvalidMove(#[from] InvalidMove),
    #[error("color choice {0} is out of range")]
    InvalidColorChoice(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("hand index {0} is out of range")]
    HandIndex(usize),
    #[error("the card at index {0} does not match the active card")]
    NotPlayable(usize),
    #[error("there are no cards left to draw")]
    NothingToDraw,
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
