//! The multi-deck draw pile.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DealError;
use crate::hand::Hand;

/// A shoe built from one or more standard 52-card decks.
///
/// Cards are dealt from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shoe {
    cards: Hand,
    decks: u8,
}

impl Shoe {
    /// Creates an empty shoe that [`Shoe::fill`] will load with `decks` decks.
    #[must_use]
    pub const fn new(decks: u8) -> Self {
        Self {
            cards: Hand::new(),
            decks,
        }
    }

    /// Creates a shoe holding `cards` in draw order.
    ///
    /// Useful for replaying a known sequence.
    #[must_use]
    pub const fn stacked(decks: u8, cards: Vec<Card>) -> Self {
        Self {
            cards: Hand::from_cards(cards),
            decks,
        }
    }

    /// Returns the number of decks a full shoe holds.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the cards remaining in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.cards.cards()
    }

    /// Appends one ordered deck, suit by suit, Ace through King.
    pub fn populate(&mut self) {
        for suit in Suit::ALL {
            for rank in 1..=13 {
                self.cards.add(Card::new(suit, rank));
            }
        }
    }

    /// Empties the shoe and loads it with its full number of ordered decks.
    pub fn fill(&mut self) {
        self.cards.clear();
        self.cards
            .cards_mut()
            .reserve(self.decks as usize * DECK_SIZE);
        for _ in 0..self.decks {
            self.populate();
        }
    }

    /// Shuffles every remaining card.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.cards_mut().shuffle(rng);
    }

    /// Refills the shoe and shuffles it.
    pub fn rebuild<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.fill();
        self.shuffle(rng);
        log::debug!(
            "shoe rebuilt with {} deck(s), {} cards",
            self.decks,
            self.remaining()
        );
    }

    /// Removes the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::OutOfCards`] if the shoe is empty.
    pub fn draw(&mut self) -> Result<Card, DealError> {
        self.cards.take_first().ok_or(DealError::OutOfCards {
            needed: 1,
            remaining: 0,
        })
    }

    /// Deals `per_hand` cards to each recipient, one card per recipient per
    /// pass, in list order.
    ///
    /// No card moves unless the shoe can complete the whole deal.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::OutOfCards`] if fewer than
    /// `recipients.len() * per_hand` cards remain.
    pub fn deal(&mut self, recipients: &mut [&mut Hand], per_hand: usize) -> Result<(), DealError> {
        let needed = recipients.len() * per_hand;
        let remaining = self.remaining();
        if remaining < needed {
            return Err(DealError::OutOfCards { needed, remaining });
        }

        for _ in 0..per_hand {
            for hand in recipients.iter_mut() {
                let card = self.draw()?;
                hand.add(card);
            }
        }

        Ok(())
    }
}
