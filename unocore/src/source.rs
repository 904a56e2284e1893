use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    card::CardColor,
    error::InvalidInput,
    turn::{Move, TurnView},
};

/// Decides the moves of one seat.
pub trait MoveSource {
    fn request_move(&mut self, view: &TurnView<'_>) -> Move;

    /// Picks the color a just played wild card resolves to. `None` leaves the
    /// table, like [`Move::Quit`].
    fn choose_color(&mut self, view: &TurnView<'_>) -> Option<CardColor>;

    /// Called when the last move returned by [`MoveSource::request_move`] was
    /// rejected; the move is requested again right after.
    fn reject(&mut self, _error: &InvalidInput) {}

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Plays the highest valued playable card and picks wild colors at random.
#[derive(Debug)]
pub struct HeuristicMoveSource {
    rng: StdRng,
}

impl HeuristicMoveSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for HeuristicMoveSource {
    fn request_move(&mut self, view: &TurnView<'_>) -> Move {
        match view.hand.choose_best_play(&view.active_card) {
            Some(index) => Move::Play(index),
            None if view.can_draw => Move::Draw,
            None => Move::Pass,
        }
    }

    fn choose_color(&mut self, _view: &TurnView<'_>) -> Option<CardColor> {
        Some(CardColor::ALL[self.rng.gen_range(0..CardColor::ALL.len())])
    }
}

/// A move exactly as entered by a human, before any validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HumanMove {
    Play(usize),
    Draw,
    Pass,
    Quit,
}

/// The synchronous exchange with whoever sits in front of the interactive
/// seat.
pub trait HumanInputPort {
    fn request_move(&mut self, view: &TurnView<'_>) -> HumanMove;

    /// Returns an index into [`CardColor::ALL`], or `None` to quit.
    fn request_color_choice(&mut self, view: &TurnView<'_>) -> Option<usize>;

    fn report_invalid(&mut self, error: &InvalidInput);
}

#[derive(Debug)]
pub struct InteractiveMoveSource<P> {
    port: P,
}

impl<P: HumanInputPort> InteractiveMoveSource<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn into_port(self) -> P {
        self.port
    }
}

impl<P: HumanInputPort> MoveSource for InteractiveMoveSource<P> {
    fn request_move(&mut self, view: &TurnView<'_>) -> Move {
        match self.port.request_move(view) {
            HumanMove::Play(index) => Move::Play(index),
            HumanMove::Draw => Move::Draw,
            HumanMove::Pass => Move::Pass,
            HumanMove::Quit => Move::Quit,
        }
    }

    fn choose_color(&mut self, view: &TurnView<'_>) -> Option<CardColor> {
        loop {
            let choice = self.port.request_color_choice(view)?;
            match CardColor::from_index(choice) {
                Some(color) => return Some(color),
                None => {
                    tracing::warn!(choice, "rejected color choice");
                    self.port
                        .report_invalid(&InvalidInput::InvalidColorChoice(choice));
                }
            }
        }
    }

    fn reject(&mut self, error: &InvalidInput) {
        self.port.report_invalid(error);
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
