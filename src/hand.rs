//! Hand representation and evaluation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::HandError;

/// Highest total a hand can reach without busting.
pub const BLACKJACK: u8 = 21;

/// An ordered collection of cards.
///
/// The same type backs player hands, the dealer's hand and the shoe. Order
/// only matters for rendering and for the dealer's hole card, which is
/// always the first card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the end of the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Turns the first card over.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Empty`] if the hand holds no cards.
    pub fn flip_first(&mut self) -> Result<(), HandError> {
        self.cards.first_mut().ok_or(HandError::Empty)?.flip();
        Ok(())
    }

    /// Moves `card` from this hand to `other`.
    ///
    /// The first card equal to `card` is taken.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotInHand`] if no such card is held.
    pub fn give(&mut self, card: &Card, other: &mut Self) -> Result<(), HandError> {
        let index = self
            .cards
            .iter()
            .position(|held| held == card)
            .ok_or(HandError::CardNotInHand)?;
        other.add(self.cards.remove(index));
        Ok(())
    }

    /// Removes and returns the first card.
    pub(crate) fn take_first(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    pub(crate) fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }

    /// Calculates the total of the hand.
    ///
    /// Every card counts its face value with Aces as 1. If the hand holds
    /// an Ace and that sum is 11 or less, one Ace is counted as 11 instead.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::FaceDownCard`] if any card is face down.
    pub fn total(&self) -> Result<u8, HandError> {
        let mut total: u8 = 0;
        let mut has_ace = false;

        for card in &self.cards {
            let value = card.value().ok_or(HandError::FaceDownCard)?;
            has_ace |= card.is_ace();
            total = total.saturating_add(value);
        }

        if has_ace && total <= 11 {
            total += 10;
        }

        Ok(total)
    }

    /// Returns whether the total is over 21.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::FaceDownCard`] if any card is face down.
    pub fn is_busted(&self) -> Result<bool, HandError> {
        Ok(self.total()? > BLACKJACK)
    }

    /// Returns whether the hand is a two-card 21.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::FaceDownCard`] if any card is face down.
    pub fn is_blackjack(&self) -> Result<bool, HandError> {
        Ok(self.cards.len() == 2 && self.total()? == BLACKJACK)
    }

    /// Returns whether the hand can be split.
    ///
    /// A hand splits when it holds exactly two cards of the same rank, or
    /// two ten-valued cards of any rank (a ten and a king pair up).
    #[must_use]
    pub fn is_splittable(&self) -> bool {
        match self.cards.as_slice() {
            [a, b] => a.rank == b.rank || (a.rank >= 10 && b.rank >= 10),
            _ => false,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("<empty>");
        }

        for card in &self.cards {
            write!(f, "{card}  ")?;
        }

        if let Ok(total) = self.total() {
            write!(f, "totaling: ({total})")?;
        }
        Ok(())
    }
}
