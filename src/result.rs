//! Round result types for settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::HandError;
use crate::hand::{BLACKJACK, Hand};
use crate::player::PlayerId;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player beat the dealer or the dealer busted.
    Win,
    /// Player won holding a natural.
    Blackjack,
    /// Tie; the bet came back.
    Push,
    /// Dealer finished higher, or held blackjack against the player.
    Lose,
    /// Player went over 21.
    Bust,
}

impl HandOutcome {
    /// Chips returned to the player for a hand that bet `bet`.
    ///
    /// The bet was taken when it was placed, so a win returns the stake plus
    /// even money, a blackjack the stake plus 2:1 and a push only the stake.
    #[must_use]
    pub const fn payout(self, bet: usize) -> usize {
        match self {
            Self::Win => 2 * bet,
            Self::Blackjack => 3 * bet,
            Self::Push => bet,
            Self::Lose | Self::Bust => 0,
        }
    }
}

/// Decides how a standing hand fares against a dealer who finished on
/// `dealer_total`.
///
/// A dealer over 21 loses to every hand still in play. Otherwise the higher
/// total wins. On equal totals a player's natural still wins and anything
/// else pushes; whether the dealer's own 21 was a natural is not considered.
///
/// # Errors
///
/// Returns [`HandError::FaceDownCard`] if the hand cannot be totalled.
pub fn settle_hand(hand: &Hand, dealer_total: u8) -> Result<HandOutcome, HandError> {
    let total = hand.total()?;
    if total > BLACKJACK {
        return Ok(HandOutcome::Bust);
    }

    let win = if hand.is_blackjack()? {
        HandOutcome::Blackjack
    } else {
        HandOutcome::Win
    };

    Ok(if dealer_total > BLACKJACK || total > dealer_total {
        win
    } else if total < dealer_total {
        HandOutcome::Lose
    } else if win == HandOutcome::Blackjack {
        win
    } else {
        HandOutcome::Push
    })
}

/// Result for a single player (or split hand) after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: PlayerId,
    /// The player name.
    pub name: String,
    /// Set when this hand came from a split.
    pub split_from: Option<PlayerId>,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet on the hand, doubled if the player doubled down.
    pub bet: usize,
    /// Chips returned by settlement.
    pub payout: usize,
    /// The player's final total.
    pub total: u8,
    /// Insurance bet amount (0 if no insurance taken).
    pub insurance_bet: usize,
    /// Insurance payout (0 if dealer didn't have blackjack or no insurance taken).
    pub insurance_payout: usize,
    /// Chips held right after settlement, before split hands are merged.
    pub chips: usize,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each hand, in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Whether the dealer drew at all. False when every player busted.
    pub dealer_played: bool,
}
