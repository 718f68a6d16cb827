//! The boundary between the engine and whoever sits at the table.
//!
//! The engine asks questions through a [`Decider`] and reports what happens
//! through an [`Observer`]. Both calls block; the round does not move on
//! until they return.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::DealError;
use crate::game::RoundPhase;
use crate::hand::Hand;
use crate::player::PlayerId;
use crate::result::HandOutcome;

/// A question the engine needs answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt<'a> {
    /// How much to bet, between 1 and `chips`.
    Bet {
        /// Player being asked.
        player: &'a str,
        /// Chips available.
        chips: usize,
    },
    /// How much insurance to take, between 0 and `max`.
    Insurance {
        /// Player being asked.
        player: &'a str,
        /// The player's hand.
        hand: &'a Hand,
        /// Largest insurance allowed.
        max: usize,
    },
    /// Whether to split a pair.
    Split {
        /// Player being asked.
        player: &'a str,
        /// The pair.
        hand: &'a Hand,
    },
    /// Whether to double down.
    DoubleDown {
        /// Player being asked.
        player: &'a str,
        /// The player's hand.
        hand: &'a Hand,
    },
    /// Whether to take another card.
    Hit {
        /// Player being asked.
        player: &'a str,
        /// The player's hand.
        hand: &'a Hand,
    },
    /// Whether to play another round.
    AnotherRound,
}

impl fmt::Display for Prompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bet { player, chips } => write!(f, "{player}, what is your bet? (1-{chips}): "),
            Self::Insurance { player, hand, max } => {
                write!(f, "{player} has {hand}, insurance (0-{max})? ")
            }
            Self::Split { player, hand } => {
                write!(f, "{player} has {hand}: do you want to split? (y/n): ")
            }
            Self::DoubleDown { player, hand } => {
                write!(f, "{player} has {hand}: do you want to double down? (y/n): ")
            }
            Self::Hit { player, hand } => {
                write!(f, "{player} has {hand}, do you want a hit? (y/n): ")
            }
            Self::AnotherRound => f.write_str("another game? (y/n): "),
        }
    }
}

/// Supplies the choices the rules leave to the players.
pub trait Decider {
    /// Answers a yes/no question.
    fn ask_yes_no(&mut self, prompt: &Prompt<'_>) -> bool;

    /// Answers with a number in `low..=high`.
    ///
    /// Implementations should re-ask on bad input. The engine re-asks
    /// anything out of range without applying it.
    fn ask_number(&mut self, prompt: &Prompt<'_>, low: usize, high: usize) -> usize;
}

/// Something that happened at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The shoe ran low and was rebuilt.
    ShoeReshuffled {
        /// Cards left before the rebuild.
        remaining: usize,
    },
    /// A bet was taken.
    BetPlaced {
        /// Player name.
        player: String,
        /// Amount bet.
        amount: usize,
        /// Chips left.
        chips: usize,
    },
    /// Initial cards are out. The dealer's hole card is face down.
    Dealt {
        /// Every player's name and hand.
        players: Vec<(String, Hand)>,
        /// The dealer's hand.
        dealer: Hand,
    },
    /// An insurance bet was taken.
    InsurancePlaced {
        /// Player name.
        player: String,
        /// Amount bet.
        amount: usize,
    },
    /// The dealer turned the hole card over.
    DealerRevealed {
        /// The dealer's hand.
        dealer: Hand,
    },
    /// The dealer holds a natural; the round ends after insurance is paid.
    DealerBlackjack,
    /// An insurance bet paid out.
    InsurancePaid {
        /// Player name.
        player: String,
        /// Amount paid.
        payout: usize,
        /// Chips after payment.
        chips: usize,
    },
    /// No dealer blackjack; insurance bets were collected.
    InsuranceCollected,
    /// A pair was split into a new hand.
    Split {
        /// Player who split.
        player: PlayerId,
        /// The new hand.
        split_hand: PlayerId,
        /// Name of the new hand.
        name: String,
    },
    /// A split was available but the player could not cover it.
    SplitUnaffordable {
        /// Player name.
        player: String,
    },
    /// A double down was taken.
    DoubledDown {
        /// Player name.
        player: String,
        /// The doubled bet.
        bet: usize,
        /// Hand after the extra card.
        hand: Hand,
    },
    /// A double down was available but could not be covered.
    DoubleDownUnaffordable {
        /// Player name.
        player: String,
    },
    /// A participant drew a card.
    Hit {
        /// Participant name.
        participant: String,
        /// The card drawn.
        card: Card,
        /// Hand after the draw.
        hand: Hand,
    },
    /// A participant stopped drawing.
    Stand {
        /// Participant name.
        participant: String,
        /// Final hand.
        hand: Hand,
    },
    /// A participant went over 21.
    Bust {
        /// Participant name.
        participant: String,
        /// Final hand.
        hand: Hand,
    },
    /// A hand was settled against the dealer.
    Settled {
        /// Player name.
        player: String,
        /// Result of the hand.
        outcome: HandOutcome,
        /// Final hand.
        hand: Hand,
        /// Chips after settlement.
        chips: usize,
    },
    /// A player ran out of chips and left the table.
    PlayerEliminated {
        /// Player name.
        player: String,
    },
    /// The shoe ran dry mid-round; all bets were returned.
    RoundAborted {
        /// Phase the round was in.
        phase: RoundPhase,
        /// What went wrong.
        error: DealError,
    },
    /// Bankrolls going into the next round.
    RoundSummary {
        /// Each remaining player's name and chips.
        bankrolls: Vec<(String, usize)>,
    },
    /// Every player is out of chips.
    HouseWins,
}

/// Receives every [`Event`] the engine emits.
pub trait Observer {
    /// Called once per event, in order.
    fn notify(&mut self, event: Event);
}

impl Observer for Vec<Event> {
    fn notify(&mut self, event: Event) {
        self.push(event);
    }
}
