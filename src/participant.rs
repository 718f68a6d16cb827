//! The capability shared by players and the dealer, and the dealer itself.

extern crate alloc;

use alloc::string::String;

use crate::card::Card;
use crate::error::HandError;
use crate::hand::Hand;
use crate::table::Decider;

/// Anyone at the table who holds a hand and draws to it.
pub trait Participant {
    /// Name shown in prompts and events.
    fn name(&self) -> &str;

    /// The participant's hand.
    fn hand(&self) -> &Hand;

    /// The participant's hand, mutably.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Decides whether to take another card.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::FaceDownCard`] if the hand cannot be totalled.
    fn wants_card(&self, decider: &mut dyn Decider) -> Result<bool, HandError>;

    /// Returns whether the hand is over 21.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::FaceDownCard`] if the hand cannot be totalled.
    fn is_busted(&self) -> Result<bool, HandError> {
        self.hand().is_busted()
    }

    /// Returns whether the hand is a natural.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::FaceDownCard`] if the hand cannot be totalled.
    fn is_blackjack(&self) -> Result<bool, HandError> {
        self.hand().is_blackjack()
    }
}

/// The house. Draws by a fixed rule and never bets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer {
    name: String,
    hand: Hand,
    stands_on: u8,
}

impl Dealer {
    /// Creates a dealer that stops drawing once its total reaches `stands_on`.
    #[must_use]
    pub const fn new(name: String, stands_on: u8) -> Self {
        Self {
            name,
            hand: Hand::new(),
            stands_on,
        }
    }

    /// Returns the total the dealer stands on.
    #[must_use]
    pub const fn stands_on(&self) -> u8 {
        self.stands_on
    }

    /// Returns the face-up card dealt second.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().get(1)
    }

    /// Returns whether the hole card is face up.
    #[must_use]
    pub fn is_hole_revealed(&self) -> bool {
        self.hand.first().is_some_and(Card::is_face_up)
    }

    /// Turns the hole card face down.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Empty`] if no card has been dealt.
    pub fn hide_hole(&mut self) -> Result<(), HandError> {
        let hole = self.hand.first().ok_or(HandError::Empty)?;
        if hole.is_face_up() {
            self.hand.flip_first()?;
        }
        Ok(())
    }

    /// Turns the hole card face up.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Empty`] if no card has been dealt.
    pub fn reveal_hole(&mut self) -> Result<(), HandError> {
        let hole = self.hand.first().ok_or(HandError::Empty)?;
        if !hole.is_face_up() {
            self.hand.flip_first()?;
        }
        Ok(())
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.hand.clear();
    }
}

impl Participant for Dealer {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn wants_card(&self, _decider: &mut dyn Decider) -> Result<bool, HandError> {
        Ok(self.hand.total()? < self.stands_on)
    }
}
