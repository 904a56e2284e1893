use std::fmt::Debug;

use rand::{rngs::StdRng, SeedableRng};

use crate::card::{Card, Rank};
use crate::config::{DrawPolicy, GameConfig};
use crate::constants::{DRAW_TWO_PENALTY, MAX_PLAYERS, MIN_PLAYERS, WILD_DRAW_FOUR_PENALTY};
use crate::cycle::TurnCycle;
use crate::deck::Deck;
use crate::error::{InvalidInput, InvalidMove, Result, UnoError};
use crate::observer::{GameEvent, GameObserver, TracingObserver};
use crate::player::{Player, PlayerId, Seat};
use crate::source::MoveSource;
use crate::turn::{CardEffect, Move, TurnAction, TurnOutcome, TurnView};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Dealing,
    TurnLoop,
    GameOver(PlayerId),
    /// A player quit before anybody won.
    Abandoned(PlayerId),
}

/// Runs a single game, from dealing until one hand is empty.
pub struct Uno {
    config: GameConfig,
    deck: Deck,
    discard: Vec<Card>,
    players: Vec<Player>,
    sources: Vec<Box<dyn MoveSource>>,
    cycle: TurnCycle,
    phase: Phase,
    total_cards: usize,
    rng: StdRng,
    observer: Box<dyn GameObserver>,
}

impl Uno {
    pub fn new(config: GameConfig, seats: Vec<Seat>) -> Result<Self> {
        Self::with_deck(config, seats, Deck::new())
    }

    /// Like [`Uno::new`] but plays with `deck` instead of the standard one.
    pub fn with_deck(config: GameConfig, seats: Vec<Seat>, deck: Deck) -> Result<Self> {
        if seats.len() < MIN_PLAYERS {
            return Err(UnoError::NotEnoughPlayers);
        }
        if seats.len() > MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }
        if seats.iter().filter(|x| x.source.is_interactive()).count() > 1 {
            return Err(UnoError::TooManyInteractivePlayers);
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut players = Vec::with_capacity(seats.len());
        let mut sources = Vec::with_capacity(seats.len());
        for (index, seat) in seats.into_iter().enumerate() {
            let interactive = seat.source.is_interactive();
            players.push(Player::new(
                PlayerId(index),
                seat.name,
                interactive,
                config.draw_policy_for(interactive),
            ));
            sources.push(seat.source);
        }

        Ok(Uno {
            total_cards: deck.len(),
            cycle: TurnCycle::new(players.len()),
            deck,
            discard: Vec::new(),
            players,
            sources,
            phase: Phase::Dealing,
            rng,
            observer: Box::new(TracingObserver),
            config,
        })
    }

    pub fn with_observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Shuffles, deals every hand and turns up the first active card.
    pub fn setup(&mut self) -> Result<()> {
        if self.phase != Phase::Dealing {
            return Err(UnoError::AlreadyStarted);
        }

        self.deck.shuffle(&mut self.rng);
        for player in &mut self.players {
            player
                .hand
                .deal_initial(&mut self.deck, self.config.hand_size, &mut self.rng)?;
        }

        let first = self.deck.draw_first_colored().ok_or(UnoError::EmptyDeck)?;
        self.discard = vec![first];
        self.cycle = TurnCycle::new(self.players.len());
        self.phase = Phase::TurnLoop;

        tracing::debug!(
            players = self.players.len(),
            deck = self.deck.len(),
            "cards dealt"
        );
        self.notify(GameEvent::GameStarted {
            players: self.players.len(),
            active_card: first,
        });
        Ok(())
    }

    /// Plays turns until somebody wins and returns the winner.
    pub fn run_game(&mut self) -> Result<PlayerId> {
        loop {
            let outcome = self.play_turn()?;
            if outcome.won {
                return Ok(outcome.player);
            }
        }
    }

    pub fn play_turn(&mut self) -> Result<TurnOutcome> {
        match self.phase {
            Phase::Dealing => return Err(UnoError::NotStarted),
            Phase::GameOver(winner) => return Err(UnoError::GameOver(winner)),
            Phase::Abandoned(player) => return Err(UnoError::PlayerLeft(player)),
            Phase::TurnLoop => {}
        }

        let current = self.cycle.advance();
        let active = self.active_card().ok_or(UnoError::NotStarted)?;
        self.notify(GameEvent::TurnStarted {
            player: current,
            name: self.name_of(current),
            active_card: active,
        });

        let action = self.request_action(current, active)?;
        let next = self.cycle.peek_next();
        let (action, effect) = match action {
            TurnAction::Played(card) => {
                let (card, effect) = self.apply_card_effect(card, current, next, false)?;
                (TurnAction::Played(card), effect)
            }
            TurnAction::DrewAndPlayed { drawn, card } => {
                let (card, effect) = self.apply_card_effect(card, current, next, true)?;
                (TurnAction::DrewAndPlayed { drawn, card }, effect)
            }
            other => (other, None),
        };

        if self.config.check_invariants {
            self.check_card_count()?;
        }

        let cards_left = self.players[current.0].cards_count();
        let won = cards_left == 0;
        let name = self.name_of(current);
        match cards_left {
            0 => {
                self.phase = Phase::GameOver(current);
                tracing::debug!(%current, "hand emptied");
                self.notify(GameEvent::Won {
                    player: current,
                    name,
                });
            }
            1 => self.notify(GameEvent::Uno {
                player: current,
                name,
            }),
            cards => self.notify(GameEvent::CardsLeft {
                player: current,
                name,
                cards,
            }),
        }

        Ok(TurnOutcome {
            player: current,
            action,
            effect,
            cards_left,
            won,
        })
    }

    /// Asks the current player's move source until the turn is settled. A
    /// played card is already out of the hand but not yet on the discard pile.
    fn request_action(&mut self, current: PlayerId, active: Card) -> Result<TurnAction> {
        let policy = self.players[current.0].draw_policy();
        let mut drawn = 0;

        loop {
            let next = self.cycle.peek_next();
            let can_draw = self.can_draw();
            let view = TurnView::new(&self.players, current, active, drawn > 0, can_draw, next);
            let requested = self.sources[current.0].request_move(&view);

            match requested {
                Move::Play(index) => {
                    let hand = &self.players[current.0].hand;
                    let invalid = if index >= hand.len() {
                        Some(InvalidMove::HandIndex(index))
                    } else if !hand.is_playable(index, &active) {
                        Some(InvalidMove::NotPlayable(index))
                    } else {
                        None
                    };
                    if let Some(invalid) = invalid {
                        tracing::warn!(%current, %invalid, "move rejected");
                        self.sources[current.0].reject(&InvalidInput::InvalidMove(invalid));
                        continue;
                    }

                    let card = self.players[current.0].hand.remove(index);
                    return Ok(if drawn == 0 {
                        TurnAction::Played(card)
                    } else {
                        TurnAction::DrewAndPlayed { drawn, card }
                    });
                }
                Move::Draw => {
                    if !can_draw {
                        tracing::warn!(%current, "draw rejected, nothing left to draw");
                        self.sources[current.0]
                            .reject(&InvalidInput::InvalidMove(InvalidMove::NothingToDraw));
                        continue;
                    }
                    self.draw_to_player(current, 1)?;
                    drawn += 1;
                    self.notify(GameEvent::CardDrawn {
                        player: current,
                        name: self.name_of(current),
                    });
                    if policy == DrawPolicy::DrawThenPass {
                        return Ok(TurnAction::Drew { count: drawn });
                    }
                }
                Move::Pass => {
                    if drawn == 0 && can_draw {
                        self.draw_to_player(current, 1)?;
                        drawn += 1;
                        self.notify(GameEvent::CardDrawn {
                            player: current,
                            name: self.name_of(current),
                        });
                    }
                    self.notify(GameEvent::Passed {
                        player: current,
                        name: self.name_of(current),
                    });
                    return Ok(TurnAction::Passed { drawn });
                }
                Move::Quit => return Err(self.abandon(current)),
            }
        }
    }

    /// Puts a just played card on the discard pile and resolves what it does.
    /// Wild cards land resolved to the color picked by `current`. Returns the
    /// card as it now sits on the pile.
    ///
    /// If `current` quits instead of picking a color, the card goes back to
    /// their hand and the game is abandoned.
    pub fn apply_card_effect(
        &mut self,
        card: Card,
        current: PlayerId,
        next: PlayerId,
        has_drawn: bool,
    ) -> Result<(Card, Option<CardEffect>)> {
        let color = if card.is_wild() {
            let active = self.active_card().ok_or(UnoError::NotStarted)?;
            let can_draw = self.can_draw();
            let view = TurnView::new(&self.players, current, active, has_drawn, can_draw, next);
            match self.sources[current.0].choose_color(&view) {
                Some(color) => Some(color),
                None => {
                    self.players[current.0].hand.add_card(card);
                    return Err(self.abandon(current));
                }
            }
        } else {
            None
        };

        self.notify(GameEvent::CardPlayed {
            player: current,
            name: self.name_of(current),
            card,
        });
        let card = if let Some(color) = color {
            self.notify(GameEvent::ColorChosen {
                player: current,
                name: self.name_of(current),
                color,
            });
            card.resolve_wild(color)
        } else {
            card
        };
        self.discard.push(card);

        let effect = match card.rank() {
            Rank::Skip => {
                let skipped = self.cycle.advance();
                self.notify(GameEvent::PlayerSkipped {
                    player: skipped,
                    name: self.name_of(skipped),
                });
                Some(CardEffect::Skipped(skipped))
            }
            Rank::Reverse => {
                self.cycle.reverse_direction();
                let direction = self.cycle.direction();
                self.notify(GameEvent::DirectionReversed { direction });
                Some(CardEffect::Reversed(direction))
            }
            Rank::DrawTwo => Some(self.penalize(next, DRAW_TWO_PENALTY)?),
            Rank::WildDrawFour => Some(self.penalize(next, WILD_DRAW_FOUR_PENALTY)?),
            Rank::Number(_) | Rank::Wild => None,
        };

        Ok((card, effect))
    }

    fn penalize(&mut self, player: PlayerId, cards: usize) -> Result<CardEffect> {
        let cards = cards.min(self.drawable());
        self.draw_to_player(player, cards)?;
        let skipped = self.cycle.advance();
        debug_assert_eq!(skipped, player);
        self.notify(GameEvent::PenaltyApplied {
            player,
            name: self.name_of(player),
            cards,
        });
        Ok(CardEffect::Penalized { player, cards })
    }

    /// Cards that can still be drawn, counting the refill.
    fn drawable(&self) -> usize {
        self.deck.len() + self.discard.len().saturating_sub(1)
    }

    fn can_draw(&self) -> bool {
        self.drawable() > 0
    }

    fn abandon(&mut self, player: PlayerId) -> UnoError {
        tracing::info!(%player, "player left the game");
        self.phase = Phase::Abandoned(player);
        UnoError::PlayerLeft(player)
    }

    fn draw_to_player(&mut self, player: PlayerId, count: usize) -> Result<()> {
        for _ in 0..count {
            let card = self.draw_card()?;
            self.players[player.0].hand.add_card(card);
        }
        Ok(())
    }

    fn draw_card(&mut self) -> Result<Card> {
        if self.deck.is_empty() {
            self.refill_deck();
        }
        self.deck.draw_from_top().map_err(|err| {
            tracing::error!(
                discard = self.discard.len(),
                "nothing left to draw after refilling the deck"
            );
            err
        })
    }

    /// Moves every discarded card except the active one back into the deck.
    fn refill_deck(&mut self) {
        let Some(top) = self.discard.pop() else {
            return;
        };
        let returned = std::mem::replace(&mut self.discard, vec![top]);
        let count = returned.len();

        self.deck.refill(returned);
        if self.config.shuffle_on_refill {
            self.deck.shuffle(&mut self.rng);
        }

        tracing::debug!(count, "deck refilled from discard pile");
        self.notify(GameEvent::DeckRefilled { cards: count });
    }

    fn check_card_count(&self) -> Result<()> {
        let found = self.card_count();
        if found != self.total_cards {
            tracing::error!(
                expected = self.total_cards,
                found,
                "card count invariant violated"
            );
            return Err(UnoError::CardCountMismatch {
                expected: self.total_cards,
                found,
            });
        }
        Ok(())
    }

    fn notify(&mut self, event: GameEvent) {
        self.observer.notify(&event);
    }

    fn name_of(&self, player: PlayerId) -> String {
        self.players[player.0].name().to_string()
    }

    /// Cards currently in the deck, the discard pile and all hands.
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.discard.len()
            + self.players.iter().map(|x| x.cards_count()).sum::<usize>()
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.get(player_id.0)
    }

    pub fn player_mut(&mut self, player_id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(player_id.0)
    }

    pub fn active_card(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn cycle(&self) -> &TurnCycle {
        &self.cycle
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::GameOver(winner) => Some(winner),
            _ => None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl Debug for Uno {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Uno")
            .field("deck", &self.deck)
            .field("discard", &self.discard)
            .field("players", &self.players)
            .field("cycle", &self.cycle)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
