//! Turn management and rule evaluation for a game of UNO between one human
//! and several automated players.

pub mod card;
pub mod config;
pub mod constants;
pub mod cycle;
pub mod deck;
pub mod error;
pub mod hand;
pub mod observer;
pub mod player;
pub mod source;
pub mod turn;
pub mod uno;

pub use crate::card::{Card, CardColor, Rank, Suit};
pub use crate::config::{DrawPolicy, GameConfig};
pub use crate::cycle::{Direction, TurnCycle};
pub use crate::deck::Deck;
pub use crate::error::{InvalidInput, InvalidMove, Result, UnoError};
pub use crate::hand::Hand;
pub use crate::observer::{GameEvent, GameObserver, NoopObserver, TracingObserver};
pub use crate::player::{Player, PlayerId, Seat};
pub use crate::source::{
    HeuristicMoveSource, HumanInputPort, HumanMove, InteractiveMoveSource, MoveSource,
};
pub use crate::turn::{CardEffect, Move, SeatSummary, TurnAction, TurnOutcome, TurnView};
pub use crate::uno::{Phase, Uno};
