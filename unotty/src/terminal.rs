use std::{
    fmt,
    io::{self, BufRead, Write},
};

use strum::IntoEnumIterator;
use unocore::{
    card::CardColor,
    error::InvalidInput,
    source::{HumanInputPort, HumanMove},
    turn::TurnView,
};

/// Reads one trimmed line. `None` once the input is closed.
pub fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// The human side of the table, played through a terminal.
pub struct TerminalPort<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalPort<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// `None` once the input is closed or unreadable, which ends the game.
    fn read(&mut self, prompt: &str) -> Option<String> {
        match prompt_line(&mut self.reader, &mut self.writer, prompt) {
            Ok(Some(line)) => Some(line),
            Ok(None) => {
                self.say(format_args!("\nInput closed, leaving the game."));
                None
            }
            Err(err) => {
                tracing::error!(%err, "failed to read from terminal");
                None
            }
        }
    }

    fn say(&mut self, line: fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.writer, "{line}") {
            tracing::warn!(%err, "failed to write to terminal");
        }
    }

    fn show_hand(&mut self, view: &TurnView<'_>) -> io::Result<()> {
        for seat in view.table.iter().filter(|x| x.id != view.player) {
            writeln!(self.writer, "{} has {} cards", seat.name, seat.cards)?;
        }
        let playable = view.playable_indices();
        writeln!(self.writer, "Table card: {}", view.active_card)?;
        writeln!(self.writer, "Your cards:")?;
        for (index, card) in view.hand.iter().enumerate() {
            let marker = if playable.contains(&index) { "*" } else { " " };
            writeln!(self.writer, " {marker}[{index}] {card}")?;
        }
        if !view.can_draw {
            writeln!(self.writer, "There is nothing left to draw.")?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> HumanInputPort for TerminalPort<R, W> {
    fn request_move(&mut self, view: &TurnView<'_>) -> HumanMove {
        if let Err(err) = self.show_hand(view) {
            tracing::warn!(%err, "failed to print hand");
        }
        loop {
            let Some(input) =
                self.read("Type a card number, d to draw, p to pass or q to quit: ")
            else {
                return HumanMove::Quit;
            };
            if input.eq_ignore_ascii_case("d") {
                return HumanMove::Draw;
            }
            if input.eq_ignore_ascii_case("p") {
                return HumanMove::Pass;
            }
            if input.eq_ignore_ascii_case("q") {
                return HumanMove::Quit;
            }
            match input.parse::<usize>() {
                Ok(index) => return HumanMove::Play(index),
                Err(_) => self.say(format_args!("Invalid input: '{input}'.")),
            }
        }
    }

    fn request_color_choice(&mut self, _view: &TurnView<'_>) -> Option<usize> {
        for (index, color) in CardColor::iter().enumerate() {
            self.say(format_args!("  [{index}] {color}"));
        }
        loop {
            let input = self.read("Choose the new color: ")?;
            if input.eq_ignore_ascii_case("q") {
                return None;
            }
            if let Ok(index) = input.parse::<usize>() {
                return Some(index);
            }
            if let Ok(color) = input.parse::<CardColor>() {
                return CardColor::iter().position(|x| x == color);
            }
            self.say(format_args!(
                "Invalid input: '{input}'. Please enter a number."
            ));
        }
    }

    fn report_invalid(&mut self, error: &InvalidInput) {
        self.say(format_args!("That won't work: {error}. Try again."));
    }
}
