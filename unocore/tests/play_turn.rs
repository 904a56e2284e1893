use std::{cell::RefCell, rc::Rc};

use unocore::{
    card::{Card, CardColor, Rank},
    config::{DrawPolicy, GameConfig},
    deck::Deck,
    error::{InvalidInput, UnoError},
    observer::GameEvent,
    player::{PlayerId, Seat},
    source::{HeuristicMoveSource, HumanInputPort, HumanMove, InteractiveMoveSource},
    turn::{CardEffect, TurnAction, TurnView},
    uno::{Phase, Uno},
};

const MAX_TURNS: usize = 20_000;

fn create_seats(count: usize, seed: u64) -> Vec<Seat> {
    (0..count)
        .map(|i| {
            Seat::new(
                format!("Player {}", i + 1),
                HeuristicMoveSource::new(seed ^ ((i as u64 + 1) * 0x9E37_79B9)),
            )
        })
        .collect()
}

/// Plays the first playable card, otherwise draws, and always picks the
/// first color.
#[derive(Default)]
struct FirstPlayablePort {
    invalid: Vec<InvalidInput>,
}

impl HumanInputPort for FirstPlayablePort {
    fn request_move(&mut self, view: &TurnView<'_>) -> HumanMove {
        match view.playable_indices().first() {
            Some(index) => HumanMove::Play(*index),
            None if view.has_drawn || !view.can_draw => HumanMove::Pass,
            None => HumanMove::Draw,
        }
    }

    fn request_color_choice(&mut self, _view: &TurnView<'_>) -> Option<usize> {
        Some(0)
    }

    fn report_invalid(&mut self, error: &InvalidInput) {
        self.invalid.push(error.clone());
    }
}

fn play_to_the_end(uno: &mut Uno) -> (PlayerId, Vec<PlayerId>) {
    let mut order = Vec::new();
    for _ in 0..MAX_TURNS {
        let outcome = uno.play_turn().expect("turn must succeed");
        assert_eq!(uno.card_count(), 108);
        order.push(outcome.player);
        if outcome.won {
            return (outcome.player, order);
        }
    }
    panic!("game did not finish within {MAX_TURNS} turns");
}

#[test]
fn seeded_games_finish_for_every_table_size() {
    for players in 2..=7 {
        let mut uno = Uno::new(
            GameConfig::default().with_seed(players as u64),
            create_seats(players, players as u64),
        )
        .unwrap();
        uno.setup().unwrap();

        let (winner, _) = play_to_the_end(&mut uno);

        assert_eq!(uno.phase(), Phase::GameOver(winner));
        assert!(uno.player(winner).unwrap().hand.is_empty());
        for player in uno.players() {
            if player.id != winner {
                assert!(!player.hand.is_empty());
            }
        }
    }
}

#[test]
fn same_seed_replays_the_same_game() {
    let play = || {
        let mut uno = Uno::new(GameConfig::default().with_seed(77), create_seats(4, 77)).unwrap();
        uno.setup().unwrap();
        let (winner, order) = play_to_the_end(&mut uno);
        (winner, order, uno.discard_pile().to_vec())
    };

    assert_eq!(play(), play());
}

#[test]
fn run_game_reports_the_winner() {
    let mut uno = Uno::new(GameConfig::default().with_seed(5), create_seats(3, 5)).unwrap();
    uno.setup().unwrap();

    let winner = uno.run_game().unwrap();

    assert_eq!(uno.winner(), Some(winner));
    assert_eq!(uno.player(winner).unwrap().cards_count(), 0);
    assert!(matches!(uno.run_game(), Err(UnoError::GameOver(w)) if w == winner));
}

#[test]
fn skip_with_two_players_gives_the_turn_back() {
    let deck = Deck::from_cards(vec![Card::colored(CardColor::Red, Rank::Skip); 20]);
    let mut uno = Uno::with_deck(GameConfig::default().with_seed(1), create_seats(2, 1), deck)
        .unwrap();
    uno.setup().unwrap();

    for _ in 0..6 {
        let outcome = uno.play_turn().unwrap();
        assert_eq!(outcome.player, PlayerId(0));
        assert_eq!(outcome.effect, Some(CardEffect::Skipped(PlayerId(1))));
        assert!(!outcome.won);
    }

    let outcome = uno.play_turn().unwrap();
    assert_eq!(outcome.player, PlayerId(0));
    assert!(outcome.won);
    assert_eq!(uno.player(PlayerId(1)).unwrap().cards_count(), 7);
    assert_eq!(uno.total_cards(), 20);
}

#[test]
fn reverse_with_three_players_turns_the_table_around() {
    let deck = Deck::from_cards(vec![Card::colored(CardColor::Blue, Rank::Reverse); 30]);
    let mut uno = Uno::with_deck(GameConfig::default().with_seed(2), create_seats(3, 2), deck)
        .unwrap();
    uno.setup().unwrap();

    let order: Vec<_> = (0..5).map(|_| uno.play_turn().unwrap().player.0).collect();

    assert_eq!(order, vec![0, 2, 0, 2, 0]);
}

#[test]
fn draw_two_chain_penalizes_every_other_player() {
    let deck = Deck::from_cards(vec![Card::colored(CardColor::Green, Rank::DrawTwo); 40]);
    let mut uno = Uno::with_deck(GameConfig::default().with_seed(3), create_seats(2, 3), deck)
        .unwrap();
    uno.setup().unwrap();

    let outcome = uno.play_turn().unwrap();

    assert_eq!(
        outcome.effect,
        Some(CardEffect::Penalized {
            player: PlayerId(1),
            cards: 2
        })
    );
    assert_eq!(uno.player(PlayerId(1)).unwrap().cards_count(), 9);
    assert_eq!(uno.play_turn().unwrap().player, PlayerId(0));
}

#[test]
fn wild_cards_are_resolved_on_the_pile() {
    let mut wild_plays = 0;

    for seed in 0..5 {
        let events = Rc::new(RefCell::new(Vec::<GameEvent>::new()));
        let mut uno = Uno::new(GameConfig::default().with_seed(seed), create_seats(4, seed))
            .unwrap()
            .with_observer(events.clone());
        uno.setup().unwrap();

        let mut game_wild_plays = 0;
        for _ in 0..MAX_TURNS {
            let outcome = uno.play_turn().unwrap();
            if let Some(card) = outcome.action.played_card() {
                if card.rank().is_wild() {
                    assert!(card.is_resolved_wild());
                    assert_eq!(uno.active_card(), Some(card));
                    game_wild_plays += 1;
                }
            }
            if outcome.won {
                break;
            }
        }

        let colors_chosen = events
            .borrow()
            .iter()
            .filter(|x| matches!(x, GameEvent::ColorChosen { .. }))
            .count();
        assert_eq!(colors_chosen, game_wild_plays);
        wild_plays += game_wild_plays;
    }

    assert!(wild_plays > 0);
}

#[test]
fn human_seat_plays_through_the_input_port() {
    let mut seats = create_seats(3, 9);
    seats.push(Seat::new(
        "Human",
        InteractiveMoveSource::new(FirstPlayablePort::default()),
    ));
    let mut uno = Uno::new(GameConfig::default().with_seed(9), seats).unwrap();
    uno.setup().unwrap();

    assert!(uno.player(PlayerId(3)).unwrap().is_human());
    assert_eq!(
        uno.player(PlayerId(3)).unwrap().draw_policy(),
        DrawPolicy::DrawThenRetry
    );

    play_to_the_end(&mut uno);
}

#[test]
fn automated_draw_policy_is_configurable() {
    let config = GameConfig::default()
        .with_seed(6)
        .with_automated_draw_policy(DrawPolicy::DrawThenRetry);
    let mut uno = Uno::new(config, create_seats(2, 6)).unwrap();
    uno.setup().unwrap();

    for _ in 0..200 {
        let outcome = uno.play_turn().unwrap();
        assert!(!matches!(outcome.action, TurnAction::Drew { .. }));
        if outcome.won {
            break;
        }
    }
}

#[test]
fn observer_sees_the_whole_game() {
    let events = Rc::new(RefCell::new(Vec::<GameEvent>::new()));
    let mut uno = Uno::new(GameConfig::default().with_seed(8), create_seats(2, 8))
        .unwrap()
        .with_observer(events.clone());
    uno.setup().unwrap();
    let winner = uno.run_game().unwrap();

    let events = events.borrow();
    assert!(matches!(
        events.first(),
        Some(GameEvent::GameStarted { players: 2, .. })
    ));
    assert!(matches!(
        events.last(),
        Some(GameEvent::Won { player, .. }) if *player == winner
    ));
    assert!(events
        .iter()
        .any(|x| matches!(x, GameEvent::Uno { player, .. } if *player == winner)));
}
