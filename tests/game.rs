//! Game integration tests.

use std::collections::VecDeque;

use shoebox::{
    BetError, Card, DealError, Decider, DoubleOption, Event, Game, GameOptions, Hand, HandOutcome,
    Participant, Prompt, RoundError, RoundPhase, Shoe, Suit, settle_hand,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Replaces the shoe so the next draws come out in `draws` order, padded with
/// twos so the round-start reshuffle leaves it alone.
fn set_shoe_from_draws(game: &mut Game, draws: &[Card]) {
    let mut cards = draws.to_vec();
    cards.resize(cards.len().max(80), card(Suit::Clubs, 2));
    game.shoe = Shoe::stacked(1, cards);
}

/// Answers from fixed queues and remembers every question.
#[derive(Default)]
struct Script {
    answers: VecDeque<bool>,
    numbers: VecDeque<usize>,
    asked: Vec<String>,
}

impl Script {
    fn new(numbers: &[usize], answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            numbers: numbers.iter().copied().collect(),
            asked: Vec::new(),
        }
    }

    fn finished(&self) -> bool {
        self.answers.is_empty() && self.numbers.is_empty()
    }
}

impl Decider for Script {
    fn ask_yes_no(&mut self, prompt: &Prompt<'_>) -> bool {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("no answer scripted for {prompt}"))
    }

    fn ask_number(&mut self, prompt: &Prompt<'_>, _low: usize, _high: usize) -> usize {
        self.asked.push(prompt.to_string());
        self.numbers
            .pop_front()
            .unwrap_or_else(|| panic!("no number scripted for {prompt}"))
    }
}

/// Bets the minimum and declines everything.
struct Cautious;

impl Decider for Cautious {
    fn ask_yes_no(&mut self, _prompt: &Prompt<'_>) -> bool {
        false
    }

    fn ask_number(&mut self, _prompt: &Prompt<'_>, low: usize, _high: usize) -> usize {
        low
    }
}

fn table(names: &[&str]) -> Game {
    Game::with_players(GameOptions::default(), 7, names.iter().copied()).unwrap()
}

fn has(events: &[Event], wanted: impl Fn(&Event) -> bool) -> bool {
    events.iter().any(wanted)
}

#[test]
fn player_stands_and_dealer_draws_to_twenty() {
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 6),
            card(Suit::Hearts, 5),
        ],
    );
    let mut script = Script::new(&[10], &[false]);
    let mut events = Vec::new();

    let result = game.play_round(&mut script, &mut events).unwrap();

    assert!(script.finished());
    assert_eq!(result.dealer_total, 20);
    assert!(result.dealer_played);
    assert!(!result.dealer_bust);
    assert_eq!(result.players[0].outcome, HandOutcome::Lose);
    assert_eq!(result.players[0].total, 17);
    assert_eq!(game.players()[0].chips(), 90);
    assert_eq!(game.phase(), RoundPhase::Idle);
    assert!(game.dealer().hand().is_empty());
}

#[test]
fn dealer_bust_pays_even_money() {
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 6),
            card(Suit::Diamonds, 13),
        ],
    );
    let mut script = Script::new(&[10], &[false]);
    let mut events = Vec::new();

    let result = game.play_round(&mut script, &mut events).unwrap();

    assert_eq!(result.dealer_total, 25);
    assert!(result.dealer_bust);
    assert_eq!(result.players[0].outcome, HandOutcome::Win);
    assert_eq!(result.players[0].payout, 20);
    assert_eq!(game.players()[0].chips(), 110);
    assert!(has(&events, |e| matches!(e, Event::Bust { participant, .. } if participant == "Dealer")));
}

#[test]
fn dealt_event_hides_the_hole_card() {
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 6),
            card(Suit::Hearts, 5),
        ],
    );
    let mut events = Vec::new();
    game.play_round(&mut Script::new(&[10], &[false]), &mut events)
        .unwrap();

    let dealt = events
        .iter()
        .find_map(|event| match event {
            Event::Dealt { players, dealer } => Some((players.clone(), dealer.clone())),
            _ => None,
        })
        .unwrap();
    assert_eq!(dealt.0.len(), 1);
    assert_eq!(dealt.0[0].0, "Ann");
    assert_eq!(dealt.0[0].1.total(), Ok(17));
    assert!(!dealt.1.cards()[0].is_face_up());
    assert!(dealt.1.cards()[1].is_face_up());
    assert!(dealt.1.to_string().starts_with("XX  6s"));
}

#[test]
fn natural_pays_two_to_one_plus_stake() {
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 13),
            card(Suit::Spades, 12),
        ],
    );
    // A natural is never asked about a hit.
    let mut script = Script::new(&[10], &[]);
    let mut events = Vec::new();

    let result = game.play_round(&mut script, &mut events).unwrap();

    assert!(script.finished());
    assert_eq!(result.players[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.players[0].payout, 30);
    assert_eq!(game.players()[0].chips(), 120);
}

#[test]
fn equal_totals_push() {
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 13),
            card(Suit::Diamonds, 12),
            card(Suit::Spades, 10),
        ],
    );
    // Declines the split of two tens, then the hit.
    let mut script = Script::new(&[10], &[false, false]);
    let mut events = Vec::new();

    let result = game.play_round(&mut script, &mut events).unwrap();

    assert!(script.asked[1].contains("split"));
    assert_eq!(result.players[0].outcome, HandOutcome::Push);
    assert_eq!(game.players()[0].chips(), 100);
}

#[test]
fn lower_total_loses() {
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 13),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 12),
        ],
    );
    let result = game
        .play_round(&mut Script::new(&[10], &[false]), &mut Vec::new())
        .unwrap();

    assert_eq!(result.players[0].outcome, HandOutcome::Lose);
    assert_eq!(result.players[0].payout, 0);
    assert_eq!(game.players()[0].chips(), 90);
}

#[test]
fn settlement_table() {
    let hand = |ranks: &[u8]| {
        Hand::from_cards(ranks.iter().map(|&rank| card(Suit::Hearts, rank)).collect())
    };

    assert_eq!(settle_hand(&hand(&[10, 9, 5]), 17), Ok(HandOutcome::Bust));
    assert_eq!(settle_hand(&hand(&[10, 9, 5]), 25), Ok(HandOutcome::Bust));
    assert_eq!(settle_hand(&hand(&[10, 2]), 23), Ok(HandOutcome::Win));
    assert_eq!(settle_hand(&hand(&[1, 13]), 23), Ok(HandOutcome::Blackjack));
    assert_eq!(settle_hand(&hand(&[10, 9]), 18), Ok(HandOutcome::Win));
    assert_eq!(settle_hand(&hand(&[1, 13]), 20), Ok(HandOutcome::Blackjack));
    assert_eq!(settle_hand(&hand(&[10, 7]), 18), Ok(HandOutcome::Lose));
    assert_eq!(settle_hand(&hand(&[10, 8]), 18), Ok(HandOutcome::Push));
    // Equal at 21: only the player's natural is looked at.
    assert_eq!(settle_hand(&hand(&[1, 13]), 21), Ok(HandOutcome::Blackjack));
    assert_eq!(settle_hand(&hand(&[7, 7, 7]), 21), Ok(HandOutcome::Push));

    assert_eq!(HandOutcome::Win.payout(10), 20);
    assert_eq!(HandOutcome::Blackjack.payout(10), 30);
    assert_eq!(HandOutcome::Push.payout(10), 10);
    assert_eq!(HandOutcome::Lose.payout(10), 0);
    assert_eq!(HandOutcome::Bust.payout(10), 0);
}

#[test]
fn busted_players_leave_the_dealer_idle() {
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 6),
            card(Suit::Spades, 5),
            card(Suit::Clubs, 13),
        ],
    );
    let mut script = Script::new(&[10], &[true]);
    let mut events = Vec::new();

    let result = game.play_round(&mut script, &mut events).unwrap();

    assert!(!result.dealer_played);
    assert_eq!(result.dealer_total, 14);
    assert_eq!(result.players[0].outcome, HandOutcome::Bust);
    assert_eq!(game.players()[0].chips(), 90);
    assert!(!has(&events, |e| matches!(e, Event::Hit { participant, .. } if participant == "Dealer")));
    // Only Ann's card came out of the shoe after the deal.
    assert_eq!(game.cards_remaining(), 80 - 5);
}

#[test]
fn insurance_pays_against_dealer_blackjack() {
    let mut game = table(&["Ann", "Bo"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Diamonds, 1),
            card(Suit::Clubs, 13),
            card(Suit::Diamonds, 7),
            card(Suit::Hearts, 13),
            card(Suit::Spades, 1),
        ],
    );
    // Bets, then Ann insures for 5 and Bo declines.
    let mut script = Script::new(&[10, 10, 5, 0], &[]);
    let mut events = Vec::new();

    let result = game.play_round(&mut script, &mut events).unwrap();

    assert!(script.finished());
    assert!(result.dealer_blackjack);
    assert!(!result.dealer_played);
    assert_eq!(result.dealer_total, 21);

    let ann = &result.players[0];
    assert_eq!(ann.outcome, HandOutcome::Lose);
    assert_eq!(ann.insurance_bet, 5);
    assert_eq!(ann.insurance_payout, 10);
    assert_eq!(game.players()[0].chips(), 95);

    let bo = &result.players[1];
    assert_eq!(bo.outcome, HandOutcome::Push);
    assert_eq!(bo.insurance_bet, 0);
    assert_eq!(game.players()[1].chips(), 100);

    assert!(has(&events, |e| matches!(e, Event::DealerBlackjack)));
    assert!(has(&events, |e| matches!(
        e,
        Event::InsurancePaid { player, payout: 10, chips: 95 } if player == "Ann"
    )));
}

#[test]
fn insurance_is_lost_without_dealer_blackjack() {
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 1),
        ],
    );
    let mut script = Script::new(&[10, 5], &[false]);
    let mut events = Vec::new();

    let result = game.play_round(&mut script, &mut events).unwrap();

    assert!(script.finished());
    assert!(!result.dealer_blackjack);
    assert_eq!(result.dealer_total, 18);
    assert_eq!(result.players[0].outcome, HandOutcome::Win);
    assert_eq!(result.players[0].insurance_bet, 5);
    assert_eq!(result.players[0].insurance_payout, 0);
    // 100 - 10 bet - 5 insurance + 20 win
    assert_eq!(game.players()[0].chips(), 105);
    assert!(has(&events, |e| matches!(e, Event::InsuranceCollected)));
}

#[test]
fn insurance_can_be_switched_off() {
    let mut game = Game::with_players(GameOptions::default().with_insurance(false), 7, ["Ann"])
        .unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 13),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 1),
        ],
    );
    let mut script = Script::new(&[10], &[]);

    let result = game.play_round(&mut script, &mut Vec::new()).unwrap();

    assert!(script.finished());
    assert!(result.dealer_blackjack);
    assert_eq!(game.players()[0].chips(), 90);
}

#[test]
fn split_takes_a_second_bet_at_once() {
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 12),
            card(Suit::Hearts, 13),
            card(Suit::Diamonds, 10),
        ],
    );
    let mut script = Script::new(&[10], &[true, false, false]);
    let mut events = Vec::new();

    let result = game.play_round(&mut script, &mut events).unwrap();

    assert!(script.finished());
    assert_eq!(result.players.len(), 2);
    let (origin, split) = (&result.players[0], &result.players[1]);
    assert_eq!(origin.total, 18);
    assert_eq!(split.total, 18);
    assert_eq!(split.name, "Ann-2");
    assert_eq!(split.split_from, Some(origin.player_id));
    assert_eq!(split.bet, 10);
    assert_eq!(origin.outcome, HandOutcome::Lose);
    assert_eq!(split.outcome, HandOutcome::Lose);
    // Both bets lost: 100 - 10 - 10.
    assert_eq!(origin.chips, 80);

    assert_eq!(game.player_count(), 1);
    assert_eq!(game.players()[0].chips(), 80);
    assert!(!game.players()[0].is_split_hand());
}

#[test]
fn split_winnings_return_to_the_origin() {
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 7),
            card(Suit::Hearts, 13),
            card(Suit::Diamonds, 10),
        ],
    );
    let mut script = Script::new(&[10], &[true, false, false]);
    let mut events = Vec::new();

    let result = game.play_round(&mut script, &mut events).unwrap();

    assert_eq!(result.dealer_total, 17);
    assert_eq!(result.players[0].chips, 100);
    assert_eq!(result.players[1].chips, 20);
    assert_eq!(game.players()[0].chips(), 120);
    assert!(has(&events, |e| matches!(
        e,
        Event::RoundSummary { bankrolls } if bankrolls == &[(String::from("Ann"), 120)]
    )));
}

#[test]
fn splits_seat_new_hands_beside_their_owners() {
    let mut game = table(&["Ann", "Bo"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 8),
            card(Suit::Hearts, 7),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 8),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 8),
            card(Suit::Hearts, 13),
            card(Suit::Clubs, 1),
            card(Suit::Diamonds, 13),
            card(Suit::Hearts, 1),
        ],
    );
    let mut script = Script::new(&[10, 10], &[true, true, false, false, false, false]);

    let result = game.play_round(&mut script, &mut Vec::new()).unwrap();

    assert!(script.finished());
    let names: Vec<&str> = result.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Ann", "Ann-2", "Bo", "Bo-2"]);
    let ann = result.players[0].player_id;
    let bo = result.players[2].player_id;
    assert_eq!(result.players[1].split_from, Some(ann));
    assert_eq!(result.players[3].split_from, Some(bo));

    let outcomes: Vec<HandOutcome> = result.players.iter().map(|p| p.outcome).collect();
    assert_eq!(
        outcomes,
        [
            HandOutcome::Push,
            HandOutcome::Win,
            HandOutcome::Lose,
            HandOutcome::Push
        ]
    );

    assert_eq!(game.get_chips(ann), Some(110));
    assert_eq!(game.get_chips(bo), Some(90));
    assert_eq!(game.player_count(), 2);
}

#[test]
fn split_needs_chips_to_cover_the_bet() {
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 7),
        ],
    );
    let mut script = Script::new(&[60], &[false]);
    let mut events = Vec::new();

    let result = game.play_round(&mut script, &mut events).unwrap();

    assert!(script.asked.iter().all(|question| !question.contains("split")));
    assert!(has(&events, |e| matches!(e, Event::SplitUnaffordable { .. })));
    assert_eq!(result.players.len(), 1);
    assert_eq!(game.players()[0].chips(), 40);
}

#[test]
fn split_hands_borrow_from_their_origin_to_double() {
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 5),
            card(Suit::Spades, 8),
            card(Suit::Clubs, 4),
            card(Suit::Clubs, 6),
            card(Suit::Hearts, 10),
            card(Suit::Spades, 9),
        ],
    );
    // Split, then double both hands. Doubled hands are never asked to hit.
    let mut script = Script::new(&[10], &[true, true, true]);
    let mut events = Vec::new();

    let result = game.play_round(&mut script, &mut events).unwrap();

    assert!(script.finished());
    let (origin, split) = (&result.players[0], &result.players[1]);
    assert_eq!(origin.bet, 20);
    assert_eq!(split.bet, 20);
    assert_eq!(origin.total, 19);
    assert_eq!(split.total, 20);
    assert_eq!(result.dealer_total, 18);
    assert_eq!(origin.outcome, HandOutcome::Win);
    assert_eq!(split.outcome, HandOutcome::Win);
    // 100 - 10 bet - 10 split - 10 double - 10 lent, then two wins of 40.
    assert_eq!(origin.chips, 100);
    assert_eq!(split.chips, 40);
    assert_eq!(game.players()[0].chips(), 140);
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, Event::DoubledDown { bet: 20, .. }))
            .count(),
        2
    );
}

#[test]
fn double_down_needs_chips() {
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 6),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 4),
            card(Suit::Spades, 8),
        ],
    );
    let mut script = Script::new(&[60], &[false]);
    let mut events = Vec::new();

    game.play_round(&mut script, &mut events).unwrap();

    assert!(has(&events, |e| matches!(e, Event::DoubleDownUnaffordable { .. })));
    assert!(script.asked.iter().all(|question| !question.contains("double")));
    assert_eq!(game.players()[0].chips(), 40);
}

#[test]
fn double_option_limits_the_offer() {
    let options = GameOptions::default().with_double(DoubleOption::None);
    let mut game = Game::with_players(options, 7, ["Ann"]).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 6),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 4),
            card(Suit::Spades, 8),
        ],
    );
    let mut script = Script::new(&[10], &[false]);
    let mut events = Vec::new();

    game.play_round(&mut script, &mut events).unwrap();

    assert!(script.finished());
    assert!(!has(&events, |e| matches!(
        e,
        Event::DoubledDown { .. } | Event::DoubleDownUnaffordable { .. }
    )));
}

#[test]
fn out_of_range_bets_are_asked_again() {
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 6),
            card(Suit::Hearts, 5),
        ],
    );
    let mut script = Script::new(&[0, 500, 10], &[false]);
    let mut events = Vec::new();

    game.play_round(&mut script, &mut events).unwrap();

    assert!(script.finished());
    assert!(has(&events, |e| matches!(
        e,
        Event::BetPlaced { amount: 10, chips: 90, .. }
    )));
}

#[test]
fn empty_shoe_mid_round_refunds_bets() {
    let options = GameOptions::default().with_reshuffle_margin(0);
    let mut game = Game::with_players(options, 7, ["Ann"]).unwrap();
    game.shoe = Shoe::stacked(
        1,
        vec![
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 6),
            card(Suit::Spades, 5),
        ],
    );
    let mut script = Script::new(&[10], &[true]);
    let mut events = Vec::new();

    let error = game.play_round(&mut script, &mut events).unwrap_err();

    let dry = DealError::OutOfCards {
        needed: 1,
        remaining: 0,
    };
    assert_eq!(error, RoundError::Deal(dry));
    assert!(events.contains(&Event::RoundAborted {
        phase: RoundPhase::PlayerTurn,
        error: dry,
    }));
    assert_eq!(game.players()[0].chips(), 100);
    assert_eq!(game.players()[0].bet(), 0);
    assert_eq!(game.phase(), RoundPhase::Idle);
    assert!(game.dealer().hand().is_empty());
}

#[test]
fn aborted_split_round_merges_the_refund() {
    let options = GameOptions::default().with_reshuffle_margin(0);
    let mut game = Game::with_players(options, 7, ["Ann"]).unwrap();
    // Enough for the deal and one split card, not the second.
    game.shoe = Shoe::stacked(
        1,
        vec![
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 7),
            card(Suit::Hearts, 2),
        ],
    );
    let mut script = Script::new(&[10], &[true]);
    let mut events = Vec::new();

    let error = game.play_round(&mut script, &mut events).unwrap_err();

    assert!(matches!(error, RoundError::Deal(_)));
    assert_eq!(game.player_count(), 1);
    assert_eq!(game.players()[0].chips(), 100);
}

#[test]
fn short_shoe_is_rebuilt_before_the_round() {
    let mut game = table(&["Ann"]);
    game.shoe = Shoe::stacked(1, vec![card(Suit::Clubs, 2); 10]);
    let mut events = Vec::new();

    game.play_round(&mut Cautious, &mut events).unwrap();

    assert_eq!(events[0], Event::ShoeReshuffled { remaining: 10 });
    assert!(game.cards_remaining() > 40);
}

#[test]
fn reshuffle_threshold_boundary() {
    let mut game = table(&["Ann"]);
    assert_eq!(game.reshuffle_threshold(), 39);

    game.shoe = Shoe::stacked(1, vec![card(Suit::Clubs, 2); 39]);
    assert!(!game.needs_reshuffle());
    assert!(!game.check_and_reshuffle());
    assert_eq!(game.cards_remaining(), 39);

    game.shoe = Shoe::stacked(1, vec![card(Suit::Clubs, 2); 38]);
    assert!(game.needs_reshuffle());
    assert!(game.check_and_reshuffle());
    assert_eq!(game.cards_remaining(), 52);

    game.join("Bo", 100).unwrap();
    assert_eq!(game.reshuffle_threshold(), 41);
}

#[test]
fn broke_players_are_removed() {
    let mut game = Game::new(GameOptions::default(), 7);
    game.join("Ann", 10).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 13),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 12),
        ],
    );
    let mut script = Script::new(&[10], &[false]);
    let mut events = Vec::new();

    // The session ends without asking for another round.
    game.run(&mut script, &mut events).unwrap();

    assert!(script.finished());
    assert_eq!(game.player_count(), 0);
    assert!(has(&events, |e| matches!(e, Event::PlayerEliminated { player } if player == "Ann")));
    assert_eq!(events.last(), Some(&Event::HouseWins));
}

#[test]
fn run_plays_until_declined() {
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 6),
            card(Suit::Hearts, 5),
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 13),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 12),
        ],
    );
    let mut script = Script::new(&[10, 10], &[false, true, false, false]);
    let mut events = Vec::new();

    game.run(&mut script, &mut events).unwrap();

    assert!(script.finished());
    assert_eq!(game.players()[0].chips(), 80);
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, Event::RoundSummary { .. }))
            .count(),
        2
    );
}

#[test]
fn empty_table_cannot_play() {
    let mut game = Game::new(GameOptions::default(), 7);
    assert_eq!(
        game.play_round(&mut Cautious, &mut Vec::new()),
        Err(RoundError::NoPlayers)
    );
}

#[test]
fn seating_rules() {
    let mut game = Game::new(GameOptions::default(), 7);
    assert_eq!(game.join("Ann", 0), Err(BetError::InsufficientFunds));

    let ann = game.join("Ann", 50).unwrap();
    let bo = game.join("Bo", 70).unwrap();
    assert_ne!(ann, bo);
    assert_eq!(game.get_chips(bo), Some(70));

    let left = game.leave(ann).unwrap();
    assert_eq!(left.chips(), 50);
    assert_eq!(game.player_count(), 1);
    assert!(game.leave(ann).is_none());

    assert!(
        Game::with_players(GameOptions::default().with_starting_chips(0), 7, ["Ann"]).is_err()
    );
}

#[test]
fn seeded_tables_deal_alike() {
    let mut first = table(&["Ann", "Bo"]);
    let mut second = table(&["Ann", "Bo"]);
    let mut first_events = Vec::new();
    let mut second_events = Vec::new();

    let a = first.play_round(&mut Cautious, &mut first_events).unwrap();
    let b = second.play_round(&mut Cautious, &mut second_events).unwrap();

    assert_eq!(a, b);
    assert_eq!(first_events, second_events);
}

#[test]
fn winning_split_hand_keeps_a_broke_origin_seated() {
    let mut game = Game::new(GameOptions::default(), 7);
    let ann = game.join("Ann", 20).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 7),
            card(Suit::Clubs, 8),
            card(Suit::Diamonds, 13),
        ],
    );
    let mut script = Script::new(&[10], &[true, false, false]);
    let mut events = Vec::new();

    let result = game.play_round(&mut script, &mut events).unwrap();

    assert!(script.finished());
    let (origin, split) = (&result.players[0], &result.players[1]);
    assert_eq!((origin.total, origin.outcome, origin.chips), (16, HandOutcome::Lose, 0));
    assert_eq!((split.total, split.outcome, split.chips), (18, HandOutcome::Win, 20));

    assert_eq!(game.get_chips(ann), Some(20));
    assert_eq!(game.player_count(), 1);
    assert!(!has(&events, |e| matches!(e, Event::PlayerEliminated { .. })));
    assert!(!has(&events, |e| matches!(e, Event::HouseWins)));
}

#[test]
fn natural_is_not_offered_a_double() {
    let options = GameOptions::default().with_double(DoubleOption::Any);
    let mut game = Game::with_players(options, 7, ["Ann"]).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 13),
            card(Suit::Spades, 7),
        ],
    );
    // Any double or hit question would run the script dry.
    let mut script = Script::new(&[10], &[]);
    let mut events = Vec::new();

    let result = game.play_round(&mut script, &mut events).unwrap();

    assert!(script.finished());
    assert!(!has(&events, |e| matches!(e, Event::DoubledDown { .. })));
    assert_eq!(result.players[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.players[0].bet, 10);
    assert_eq!(game.players()[0].chips(), 120);
}

#[test]
fn hole_card_is_announced_once() {
    let revealed = |events: &[Event]| {
        events
            .iter()
            .filter(|e| matches!(e, Event::DealerRevealed { .. }))
            .count()
    };

    // Ace up without a natural: shown during insurance only.
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 1),
        ],
    );
    let mut events = Vec::new();
    game.play_round(&mut Script::new(&[10, 0], &[false]), &mut events)
        .unwrap();
    assert_eq!(revealed(&events), 1);

    // No Ace up: shown on the dealer's turn.
    let mut game = table(&["Ann"]);
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 6),
            card(Suit::Hearts, 5),
        ],
    );
    let mut events = Vec::new();
    game.play_round(&mut Script::new(&[10], &[false]), &mut events)
        .unwrap();
    assert_eq!(revealed(&events), 1);
}

#[test]
fn shuffled_rounds_settle_by_the_table() {
    for seed in 0..32 {
        let mut game = Game::with_players(GameOptions::default(), seed, ["Ann"]).unwrap();
        let mut events = Vec::new();

        let result = game.play_round(&mut Cautious, &mut events).unwrap();

        let hand = events
            .iter()
            .find_map(|event| match event {
                Event::Settled { hand, .. } => Some(hand.clone()),
                _ => None,
            })
            .unwrap();
        let ann = &result.players[0];
        let expected = if result.dealer_blackjack {
            if hand.is_blackjack() == Ok(true) {
                HandOutcome::Push
            } else {
                HandOutcome::Lose
            }
        } else {
            settle_hand(&hand, result.dealer_total).unwrap()
        };

        assert_eq!(ann.outcome, expected, "seed {seed}");
        assert_eq!(ann.bet, 1, "seed {seed}");
        assert_eq!(ann.payout, expected.payout(1), "seed {seed}");
        assert_eq!(game.players()[0].chips(), 99 + ann.payout, "seed {seed}");
    }
}
