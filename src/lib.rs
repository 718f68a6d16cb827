//! A turn-based, multi-player blackjack round engine with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that plays whole rounds: bets, the
//! initial deal, insurance against a dealer Ace, splits, double downs,
//! player and dealer draws, settlement and cleanup. Choices are made by a
//! [`Decider`] and everything that happens is reported to an [`Observer`],
//! so the engine can be driven by a console, a UI or a test script.
//!
//! # Example
//!
//! ```
//! use shoebox::{Decider, Event, Game, GameOptions, Prompt};
//!
//! struct Cautious;
//!
//! impl Decider for Cautious {
//!     fn ask_yes_no(&mut self, _prompt: &Prompt<'_>) -> bool {
//!         false
//!     }
//!
//!     fn ask_number(&mut self, _prompt: &Prompt<'_>, low: usize, _high: usize) -> usize {
//!         low
//!     }
//! }
//!
//! let mut game = Game::with_players(GameOptions::default(), 42, ["Ann", "Bo"]).unwrap();
//! let mut events: Vec<Event> = Vec::new();
//! let result = game.play_round(&mut Cautious, &mut events).unwrap();
//! assert_eq!(result.players.len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod player;
pub mod result;
pub mod shoe;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{BetError, DealError, HandError, InsuranceError, RoundError};
pub use game::{Game, RoundPhase};
pub use hand::{BLACKJACK, Hand};
pub use options::{DoubleOption, GameOptions};
pub use participant::{Dealer, Participant};
pub use player::{Player, PlayerId};
pub use result::{HandOutcome, PlayerResult, RoundResult, settle_hand};
pub use shoe::Shoe;
pub use table::{Decider, Event, Observer, Prompt};
