//! Players, their chips and their bets.

extern crate alloc;

use alloc::string::String;

use crate::error::{BetError, HandError, InsuranceError};
use crate::hand::{BLACKJACK, Hand};
use crate::participant::Participant;
use crate::table::{Decider, Prompt};

/// Identifier the game assigns to every player, split hands included.
pub type PlayerId = u32;

/// A seat at the table: one hand, its bet and the chips behind it.
///
/// A player created by a split carries the id of the player it was split
/// from. It lives for one round, and whatever chips it holds at cleanup go
/// back to its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Hand,
    chips: usize,
    bet: usize,
    insurance: usize,
    split_from: Option<PlayerId>,
    doubled_down: bool,
}

impl Player {
    /// Creates a player with an empty hand and no bet.
    #[must_use]
    pub const fn new(id: PlayerId, name: String, chips: usize) -> Self {
        Self {
            id,
            name,
            hand: Hand::new(),
            chips,
            bet: 0,
            insurance: 0,
            split_from: None,
            doubled_down: false,
        }
    }

    /// Creates the second hand of a split, holding `bet` and no chips.
    #[must_use]
    pub const fn split_of(id: PlayerId, name: String, origin: PlayerId, bet: usize) -> Self {
        Self {
            id,
            name,
            hand: Hand::new(),
            chips: 0,
            bet,
            insurance: 0,
            split_from: Some(origin),
            doubled_down: false,
        }
    }

    /// Returns the player's id.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the chips not currently wagered.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the main bet for this round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the outstanding insurance bet.
    #[must_use]
    pub const fn insurance(&self) -> usize {
        self.insurance
    }

    /// Returns the id of the player this hand was split from.
    #[must_use]
    pub const fn split_from(&self) -> Option<PlayerId> {
        self.split_from
    }

    /// Returns whether this player is the second hand of a split.
    #[must_use]
    pub const fn is_split_hand(&self) -> bool {
        self.split_from.is_some()
    }

    /// Returns whether the player has doubled down this round.
    #[must_use]
    pub const fn is_doubled_down(&self) -> bool {
        self.doubled_down
    }

    /// Moves `amount` from chips onto the bet.
    ///
    /// Adds to any bet already placed, which is how a double down is taken.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::ZeroBet`] for a zero amount and
    /// [`BetError::InsufficientFunds`] if the chips do not cover it.
    pub const fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.chips {
            return Err(BetError::InsufficientFunds);
        }

        self.chips -= amount;
        self.bet += amount;
        Ok(())
    }

    /// Largest insurance bet the player may place.
    #[must_use]
    pub fn max_insurance(&self) -> usize {
        self.chips.min(self.bet)
    }

    /// Moves `amount` from chips into an insurance bet.
    ///
    /// # Errors
    ///
    /// Returns [`InsuranceError::ExceedsLimit`] if `amount` is more than
    /// the main bet or the remaining chips.
    pub fn place_insurance(&mut self, amount: usize) -> Result<(), InsuranceError> {
        let max = self.max_insurance();
        if amount > max {
            return Err(InsuranceError::ExceedsLimit { amount, max });
        }

        self.chips -= amount;
        self.insurance = amount;
        Ok(())
    }

    /// Pays the insurance bet at 2:1 and clears it. Returns the amount paid.
    pub const fn pay_insurance(&mut self) -> usize {
        let payout = 2 * self.insurance;
        self.chips += payout;
        self.insurance = 0;
        payout
    }

    /// Clears a losing insurance bet. Returns the amount forfeited.
    pub const fn forfeit_insurance(&mut self) -> usize {
        let lost = self.insurance;
        self.insurance = 0;
        lost
    }

    /// Marks the hand as doubled down: one more card, then it stands.
    pub const fn set_doubled_down(&mut self) {
        self.doubled_down = true;
    }

    /// Adds `amount` to the player's chips.
    pub const fn credit(&mut self, amount: usize) {
        self.chips += amount;
    }

    /// Takes up to `amount` chips from the player. Returns what was taken.
    pub fn debit(&mut self, amount: usize) -> usize {
        let taken = amount.min(self.chips);
        self.chips -= taken;
        taken
    }

    /// Returns everything wagered this round to the chips.
    pub(crate) const fn refund(&mut self) {
        self.chips += self.bet + self.insurance;
        self.bet = 0;
        self.insurance = 0;
    }

    /// Clears the hand and every per-round flag.
    pub(crate) fn reset_round(&mut self) {
        self.hand.clear();
        self.bet = 0;
        self.insurance = 0;
        self.doubled_down = false;
    }

    /// Hands over every chip, leaving the player with none.
    pub(crate) const fn take_chips(&mut self) -> usize {
        let chips = self.chips;
        self.chips = 0;
        chips
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Players are asked, unless they hold 21 or have doubled down.
    fn wants_card(&self, decider: &mut dyn Decider) -> Result<bool, HandError> {
        if self.doubled_down || self.hand.total()? >= BLACKJACK {
            return Ok(false);
        }

        Ok(decider.ask_yes_no(&Prompt::Hit {
            player: &self.name,
            hand: &self.hand,
        }))
    }
}
