use core::fmt;
use std::fmt::Display;

use crate::{config::DrawPolicy, hand::Hand, source::MoveSource};

/// Seat index of a player at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub usize);

impl Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

#[derive(Debug)]
pub struct Player {
    pub id: PlayerId,
    name: String,
    pub hand: Hand,
    human: bool,
    draw_policy: DrawPolicy,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: String, human: bool, draw_policy: DrawPolicy) -> Self {
        Self {
            id,
            name,
            hand: Hand::new(),
            human,
            draw_policy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_human(&self) -> bool {
        self.human
    }

    pub fn draw_policy(&self) -> DrawPolicy {
        self.draw_policy
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }
}

/// A player waiting to be seated: a name plus whatever decides its moves.
pub struct Seat {
    pub name: String,
    pub source: Box<dyn MoveSource>,
}

impl Seat {
    pub fn new(name: impl Into<String>, source: impl MoveSource + 'static) -> Self {
        Self {
            name: name.into(),
            source: Box::new(source),
        }
    }
}

impl fmt::Debug for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seat")
            .field("name", &self.name)
            .field("interactive", &self.source.is_interactive())
            .finish()
    }
}
