use strum_macros::Display;

use crate::player::PlayerId;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Endless, direction aware iteration over the seats of a table.
///
/// Before the first [`TurnCycle::advance`] no seat is current. The first
/// advance lands on seat 0 going forward, or on the last seat going in
/// reverse, and [`TurnCycle::peek_next`] always reports that same seat.
#[derive(Debug, Clone)]
pub struct TurnCycle {
    len: usize,
    position: Option<usize>,
    direction: Direction,
}

impl TurnCycle {
    /// `len` must be non-zero.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "a turn cycle needs at least one seat");
        Self {
            len,
            position: None,
            direction: Direction::Forward,
        }
    }

    pub fn advance(&mut self) -> PlayerId {
        let next = self.step();
        self.position = Some(next);
        PlayerId(next)
    }

    pub fn peek_next(&self) -> PlayerId {
        PlayerId(self.step())
    }

    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.flipped();
    }

    pub fn current(&self) -> Option<PlayerId> {
        self.position.map(PlayerId)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn step(&self) -> usize {
        match (self.position, self.direction) {
            (None, Direction::Forward) => 0,
            (None, Direction::Reverse) => self.len - 1,
            (Some(position), Direction::Forward) => (position + 1) % self.len,
            (Some(position), Direction::Reverse) => (position + self.len - 1) % self.len,
        }
    }
}
