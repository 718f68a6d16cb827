//! Error types for game operations.

use thiserror::Error;

/// Errors raised when a hand is asked for something it cannot answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand holds a face-down card, so it has no total.
    #[error("hand holds a face-down card")]
    FaceDownCard,
    /// The card to move is not in the hand.
    #[error("card is not in the hand")]
    CardNotInHand,
    /// The hand holds no cards.
    #[error("hand is empty")]
    Empty,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe: {needed} needed, {remaining} left")]
    OutOfCards {
        /// Cards the deal required.
        needed: usize,
        /// Cards left in the shoe.
        remaining: usize,
    },
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Insurance may not exceed the main bet or the remaining chips.
    #[error("insurance of {amount} exceeds the limit of {max}")]
    ExceedsLimit {
        /// Requested insurance.
        amount: usize,
        /// Largest insurance allowed.
        max: usize,
    },
}

/// Errors that end a round early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// There is nobody left at the table.
    #[error("no players at the table")]
    NoPlayers,
    /// The shoe ran dry mid-round. Bets were refunded.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A hand was evaluated or moved against its preconditions.
    #[error(transparent)]
    Hand(#[from] HandError),
    /// A bet was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// An insurance bet was rejected.
    #[error(transparent)]
    Insurance(#[from] InsuranceError),
}
