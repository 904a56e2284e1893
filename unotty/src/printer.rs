use std::io::Write;

use unocore::{
    cycle::Direction,
    observer::{GameEvent, GameObserver},
    player::PlayerId,
};

/// Narrates the game as plain text.
pub struct PrintObserver<W> {
    writer: W,
    human: Option<PlayerId>,
}

impl<W: Write> PrintObserver<W> {
    pub fn new(writer: W, human: Option<PlayerId>) -> Self {
        Self { writer, human }
    }

    fn line(&self, event: &GameEvent) -> String {
        match event {
            GameEvent::GameStarted {
                players,
                active_card,
            } => format!("THE GAME BEGINS! {players} players, first card: {active_card}"),
            GameEvent::TurnStarted {
                player,
                name,
                active_card,
            } => {
                let turn = if Some(*player) == self.human {
                    "\nYOUR TURN!".to_string()
                } else {
                    format!("\nIt's {name}'s turn")
                };
                format!("{turn} (table card: {active_card})")
            }
            GameEvent::CardPlayed { name, card, .. } => format!("{name} plays {card}"),
            GameEvent::ColorChosen { name, color, .. } => format!("{name} chose {color}"),
            GameEvent::PlayerSkipped { name, .. } => format!("{name} loses their turn!"),
            GameEvent::DirectionReversed { direction } => match direction {
                Direction::Forward => "The direction of play is reversed, back to normal!".into(),
                Direction::Reverse => "The direction of play is reversed!".into(),
            },
            GameEvent::PenaltyApplied { name, cards, .. } => {
                format!("{name} takes {cards} cards and loses their turn!")
            }
            GameEvent::CardDrawn { name, .. } => format!("{name} draws a card"),
            GameEvent::Passed { name, .. } => format!("{name} passes"),
            GameEvent::DeckRefilled { cards } => {
                format!("The deck ran out, {cards} played cards are shuffled back in")
            }
            GameEvent::CardsLeft { name, cards, .. } => format!("{name} has {cards} cards left"),
            GameEvent::Uno { name, .. } => format!("\nUNO! {name} has only 1 card!\n"),
            GameEvent::Won { name, .. } => format!("\n{name} has won!"),
        }
    }
}

impl<W: Write> GameObserver for PrintObserver<W> {
    fn notify(&mut self, event: &GameEvent) {
        let line = self.line(event);
        if let Err(err) = writeln!(self.writer, "{line}") {
            tracing::warn!(%err, "failed to print game event");
        }
    }
}
