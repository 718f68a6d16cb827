//! Round controller.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{BetError, RoundError};
use crate::options::GameOptions;
use crate::participant::{Dealer, Participant};
use crate::player::{Player, PlayerId};
use crate::result::RoundResult;
use crate::shoe::Shoe;
use crate::table::{Decider, Event, Observer, Prompt};

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use state::RoundPhase;

/// A blackjack table: players, a dealer and the shoe they draw from.
///
/// The game plays one round at a time through [`Game::play_round`], asking
/// a [`Decider`] for every choice and reporting to an [`Observer`].
#[derive(Debug, Clone)]
pub struct Game {
    /// The draw pile.
    pub shoe: Shoe,
    /// Game options.
    pub options: GameOptions,
    players: Vec<Player>,
    dealer: Dealer,
    phase: RoundPhase,
    next_id: PlayerId,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates an empty table with a freshly shuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_decks(2), 42);
    /// assert_eq!(game.cards_remaining(), 104);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut shoe = Shoe::new(options.decks);
        shoe.rebuild(&mut rng);

        Self {
            shoe,
            dealer: Dealer::new(String::from("Dealer"), options.dealer_stands_on),
            options,
            players: Vec::new(),
            phase: RoundPhase::Idle,
            next_id: 0,
            rng,
        }
    }

    /// Creates a table seating every name with the configured starting chips.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] if the options start players
    /// with no chips.
    pub fn with_players<I>(options: GameOptions, seed: u64, names: I) -> Result<Self, BetError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let chips = options.starting_chips;
        let mut game = Self::new(options, seed);
        for name in names {
            game.join(name, chips)?;
        }
        Ok(game)
    }

    /// Seats a player with `chips` at the end of the table.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] if `chips` is zero.
    pub fn join(&mut self, name: impl Into<String>, chips: usize) -> Result<PlayerId, BetError> {
        if chips == 0 {
            return Err(BetError::InsufficientFunds);
        }

        let id = self.allocate_id();
        self.players.push(Player::new(id, name.into(), chips));
        Ok(id)
    }

    /// Removes a player from the table between rounds.
    pub fn leave(&mut self, player_id: PlayerId) -> Option<Player> {
        let index = self.position(player_id)?;
        Some(self.players.remove(index))
    }

    /// Returns the seated players in order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given ID.
    #[must_use]
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == player_id)
    }

    /// Returns the current chips for the specified player.
    #[must_use]
    pub fn get_chips(&self, player_id: PlayerId) -> Option<usize> {
        self.player(player_id).map(Player::chips)
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Fewest cards the shoe may hold going into a round.
    ///
    /// Two cards for every player and the dealer, plus the safety margin.
    #[must_use]
    pub fn reshuffle_threshold(&self) -> usize {
        (self.players.len() + 1) * 2 + self.options.reshuffle_margin
    }

    /// Returns whether the shoe is too short to start a round.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.cards_remaining() < self.reshuffle_threshold()
    }

    /// Rebuilds and shuffles the shoe from fresh decks.
    pub fn reshuffle(&mut self) {
        self.shoe.rebuild(&mut self.rng);
    }

    /// Rebuilds the shoe if it is below the reshuffle threshold.
    ///
    /// Returns `true` if a reshuffle was performed.
    pub fn check_and_reshuffle(&mut self) -> bool {
        if self.needs_reshuffle() {
            self.reshuffle();
            true
        } else {
            false
        }
    }

    /// Plays one full round, from bets to cleanup.
    ///
    /// If the shoe runs dry mid-round the round is abandoned: every bet still
    /// on the table goes back to its owner, split hands are merged, an
    /// [`Event::RoundAborted`] is sent and the error is returned. The table is
    /// ready for another round either way.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoPlayers`] if nobody is seated,
    /// [`RoundError::Deal`] if the shoe ran out mid-round, or another
    /// [`RoundError`] if a rule was applied to a hand that cannot satisfy it.
    pub fn play_round(
        &mut self,
        decider: &mut dyn Decider,
        observer: &mut dyn Observer,
    ) -> Result<RoundResult, RoundError> {
        if self.players.is_empty() {
            return Err(RoundError::NoPlayers);
        }

        let remaining = self.cards_remaining();
        if self.check_and_reshuffle() {
            log::debug!("{remaining} cards left, shoe reshuffled");
            observer.notify(Event::ShoeReshuffled { remaining });
        }

        match self.resolve_round(decider, observer) {
            Ok(result) => {
                self.cleanup(observer);
                Ok(result)
            }
            Err(error) => {
                log::warn!("round abandoned during {:?}: {error}", self.phase);
                for player in &mut self.players {
                    player.refund();
                }
                if let RoundError::Deal(error) = error {
                    observer.notify(Event::RoundAborted {
                        phase: self.phase,
                        error,
                    });
                }
                self.cleanup(observer);
                Err(error)
            }
        }
    }

    /// Plays rounds until every player is out or the decider stops.
    ///
    /// A round abandoned for lack of cards does not end the session.
    ///
    /// # Errors
    ///
    /// Returns any [`RoundError`] other than [`RoundError::Deal`].
    pub fn run(
        &mut self,
        decider: &mut dyn Decider,
        observer: &mut dyn Observer,
    ) -> Result<(), RoundError> {
        while !self.players.is_empty() {
            match self.play_round(decider, observer) {
                Ok(_) | Err(RoundError::Deal(_)) => {}
                Err(error) => return Err(error),
            }

            if self.players.is_empty() || !decider.ask_yes_no(&Prompt::AnotherRound) {
                break;
            }
        }
        Ok(())
    }

    fn resolve_round(
        &mut self,
        decider: &mut dyn Decider,
        observer: &mut dyn Observer,
    ) -> Result<RoundResult, RoundError> {
        self.phase = RoundPhase::Betting;
        self.take_bets(decider, observer)?;

        self.phase = RoundPhase::Dealing;
        self.deal_initial(observer)?;

        let ace_showing = self.dealer.up_card().is_some_and(Card::is_ace);
        let forfeited = if ace_showing {
            self.phase = RoundPhase::Insurance;
            let resolution = self.offer_insurance(decider, observer)?;
            if resolution.dealer_blackjack {
                return self.settle_dealer_blackjack(observer);
            }
            resolution.stakes
        } else {
            self.dealer.reveal_hole()?;
            Vec::new()
        };

        self.finish_hand(&forfeited, ace_showing, decider, observer)
    }

    /// Clears the table after a round.
    ///
    /// Split hands hand their chips back to the player they came from, then
    /// anyone left without chips is removed.
    fn cleanup(&mut self, observer: &mut dyn Observer) {
        self.phase = RoundPhase::Cleanup;

        for player in &mut self.players {
            player.reset_round();
        }

        let (splits, seats): (Vec<Player>, Vec<Player>) = core::mem::take(&mut self.players)
            .into_iter()
            .partition(Player::is_split_hand);
        self.players = seats;

        for mut split in splits {
            let chips = split.take_chips();
            let origin = split
                .split_from()
                .and_then(|origin| self.players.iter_mut().find(|p| p.id() == origin));
            match origin {
                Some(origin) => origin.credit(chips),
                None => log::warn!("{} has no origin, {chips} chips dropped", split.name()),
            }
        }

        self.players.retain(|player| {
            let solvent = player.chips() > 0;
            if !solvent {
                log::debug!("{} is out of chips", player.name());
                observer.notify(Event::PlayerEliminated {
                    player: String::from(player.name()),
                });
            }
            solvent
        });

        self.dealer.clear();

        observer.notify(Event::RoundSummary {
            bankrolls: self
                .players
                .iter()
                .map(|player| (String::from(player.name()), player.chips()))
                .collect(),
        });
        if self.players.is_empty() {
            observer.notify(Event::HouseWins);
        }

        self.phase = RoundPhase::Idle;
    }

    const fn allocate_id(&mut self) -> PlayerId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn position(&self, player_id: PlayerId) -> Option<usize> {
        self.players.iter().position(|player| player.id() == player_id)
    }
}

/// Asks for a number until the answer lands in `low..=high`.
fn ask_within(decider: &mut dyn Decider, prompt: &Prompt<'_>, low: usize, high: usize) -> usize {
    loop {
        let answer = decider.ask_number(prompt, low, high);
        if (low..=high).contains(&answer) {
            return answer;
        }
        log::warn!("rejected {answer}, expected {low}-{high}");
    }
}
