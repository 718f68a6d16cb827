//! Console blackjack for up to five players sharing one terminal.
//!
//! Run with `RUST_LOG=debug` to see the engine's own log lines.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use shoebox::{Decider, Event, Game, GameOptions, HandOutcome, Observer, Prompt};

struct Console;

impl Decider for Console {
    fn ask_yes_no(&mut self, prompt: &Prompt<'_>) -> bool {
        loop {
            match read_line(&prompt.to_string())
                .map(|answer| answer.to_lowercase())
                .as_deref()
            {
                Some("y" | "yes") => return true,
                Some("n" | "no") | None => return false,
                Some(_) => println!("Please answer y or n."),
            }
        }
    }

    fn ask_number(&mut self, prompt: &Prompt<'_>, low: usize, high: usize) -> usize {
        ask_range(&prompt.to_string(), low, high)
    }
}

impl Observer for Console {
    fn notify(&mut self, event: Event) {
        match event {
            Event::ShoeReshuffled { remaining } => {
                println!("Only {remaining} cards left. Shuffling a fresh shoe.");
            }
            Event::BetPlaced { player, amount, chips } => {
                println!("{player} bets {amount} ({chips} left)");
            }
            Event::Dealt { players, dealer } => {
                println!();
                for (name, hand) in players {
                    println!("{name:>10}: {hand}");
                }
                println!("{:>10}: {dealer}", "Dealer");
            }
            Event::InsurancePlaced { player, amount } => {
                println!("{player} takes {amount} insurance");
            }
            Event::DealerRevealed { dealer } => println!("Dealer has {dealer}"),
            Event::DealerBlackjack => println!("Dealer has blackjack!"),
            Event::InsurancePaid { player, payout, chips } => {
                println!("{player}'s insurance pays {payout}, now {chips}");
            }
            Event::InsuranceCollected => println!("No dealer blackjack. Insurance is lost."),
            Event::Split { name, .. } => println!("Split! {name} joins the table."),
            Event::SplitUnaffordable { player } => {
                println!("{player} cannot afford to split.");
            }
            Event::DoubledDown { player, bet, hand } => {
                println!("{player} doubles to {bet}: {hand}");
            }
            Event::DoubleDownUnaffordable { player } => {
                println!("{player} cannot afford to double down.");
            }
            Event::Hit { participant, card, hand } => {
                println!("{participant} draws {card}: {hand}");
            }
            Event::Stand { .. } => {}
            Event::Bust { participant, hand } => println!("{participant} busts with {hand}"),
            Event::Settled {
                player,
                outcome,
                chips,
                ..
            } => {
                let verdict = match outcome {
                    HandOutcome::Win => "wins",
                    HandOutcome::Blackjack => "wins with blackjack",
                    HandOutcome::Push => "pushes",
                    HandOutcome::Lose => "loses",
                    HandOutcome::Bust => "busted",
                };
                println!("{player} {verdict} ({chips} chips)");
            }
            Event::PlayerEliminated { player } => println!("{player} is out of chips."),
            Event::RoundAborted { error, .. } => {
                println!("Round abandoned: {error}. Bets returned.");
            }
            Event::RoundSummary { bankrolls } => {
                println!();
                for (name, chips) in bankrolls {
                    println!("{name:>10}: {chips} chips");
                }
            }
            Event::HouseWins => println!("Everyone is broke. The house wins."),
        }
    }
}

fn main() {
    env_logger::init();
    println!("Welcome to blackjack!");

    let players = ask_range("How many players? (1-5): ", 1, 5);
    let decks = ask_range("How many decks? (1-4): ", 1, 4);
    let names: Vec<String> = (1..=players)
        .map(|seat| {
            read_line(&format!("Name for player {seat}: "))
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| format!("Player {seat}"))
        })
        .collect();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_decks(u8::try_from(decks).unwrap_or(1));

    let mut game = match Game::with_players(options, seed, names) {
        Ok(game) => game,
        Err(err) => {
            println!("Could not seat players: {err}");
            return;
        }
    };

    if let Err(err) = game.run(&mut Console, &mut Console) {
        println!("Game stopped: {err}");
    }
    println!("Thanks for playing.");
}

fn ask_range(prompt: &str, low: usize, high: usize) -> usize {
    loop {
        let Some(input) = read_line(prompt) else {
            return low;
        };
        match input.parse::<usize>() {
            Ok(value) if (low..=high).contains(&value) => return value,
            _ => println!("Please enter a number from {low} to {high}."),
        }
    }
}

/// Reads one trimmed line. `None` once stdin is closed.
fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(String::from(input.trim())),
    }
}
