//! Round phase tracking.

/// Where the game is within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// Between rounds.
    #[default]
    Idle,
    /// Collecting bets.
    Betting,
    /// Dealing the initial two cards.
    Dealing,
    /// Dealer shows an Ace; taking insurance and checking for blackjack.
    Insurance,
    /// Offering splits.
    Splitting,
    /// Offering double downs.
    DoubleDown,
    /// Players draw.
    PlayerTurn,
    /// Dealer draws.
    DealerTurn,
    /// Comparing hands and paying out.
    Settlement,
    /// Clearing hands and removing split and broke players.
    Cleanup,
}
