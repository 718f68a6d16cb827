use alloc::string::String;
use alloc::vec::Vec;

use crate::error::RoundError;
use crate::hand::BLACKJACK;
use crate::participant::Participant;
use crate::player::{Player, PlayerId};
use crate::result::{HandOutcome, PlayerResult, RoundResult, settle_hand};
use crate::table::{Decider, Event, Observer};

use super::actions::draw_until_stand;
use super::{Game, RoundPhase};

impl Game {
    /// Regular play once the dealer is known not to hold blackjack: splits,
    /// double downs, player draws, dealer draws and settlement.
    ///
    /// The hole card stays face down while players decide. `hole_shown` is
    /// set when the table already saw it during insurance.
    pub(super) fn finish_hand(
        &mut self,
        forfeited: &[(PlayerId, usize)],
        hole_shown: bool,
        decider: &mut dyn Decider,
        observer: &mut dyn Observer,
    ) -> Result<RoundResult, RoundError> {
        self.dealer.hide_hole()?;

        if self.options.split {
            self.phase = RoundPhase::Splitting;
            self.process_splits(decider, observer)?;
        }

        self.phase = RoundPhase::DoubleDown;
        self.offer_double_downs(decider, observer)?;

        self.phase = RoundPhase::PlayerTurn;
        self.play_players(decider, observer)?;

        self.phase = RoundPhase::DealerTurn;
        let dealer_played = self.dealer_play(hole_shown, decider, observer)?;

        self.phase = RoundPhase::Settlement;
        self.settle(forfeited, dealer_played, observer)
    }

    /// Turns the hole card and draws for the dealer.
    ///
    /// The dealer does not draw when every player has already busted.
    /// Returns whether the dealer drew.
    fn dealer_play(
        &mut self,
        hole_shown: bool,
        decider: &mut dyn Decider,
        observer: &mut dyn Observer,
    ) -> Result<bool, RoundError> {
        self.dealer.reveal_hole()?;
        if !hole_shown {
            observer.notify(Event::DealerRevealed {
                dealer: self.dealer.hand().clone(),
            });
        }

        let mut still_playing = false;
        for player in &self.players {
            if !player.is_busted()? {
                still_playing = true;
                break;
            }
        }
        if !still_playing {
            return Ok(false);
        }

        draw_until_stand(&mut self.shoe, &mut self.dealer, decider, observer)?;
        Ok(true)
    }

    /// Compares every hand with the dealer's and pays the winners.
    fn settle(
        &mut self,
        forfeited: &[(PlayerId, usize)],
        dealer_played: bool,
        observer: &mut dyn Observer,
    ) -> Result<RoundResult, RoundError> {
        let dealer_total = self.dealer.hand().total()?;
        let dealer_blackjack = self.dealer.is_blackjack()?;

        let mut outcomes = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let outcome = settle_hand(player.hand(), dealer_total)?;
            outcomes.push((outcome, player.hand().total()?));
        }

        let mut results = Vec::with_capacity(self.players.len());
        for (player, (outcome, total)) in self.players.iter_mut().zip(outcomes) {
            let mut result = settle_player(player, outcome, total, observer);
            result.insurance_bet = forfeited
                .iter()
                .find(|(id, _)| *id == result.player_id)
                .map_or(0, |&(_, stake)| stake);
            results.push(result);
        }

        Ok(RoundResult {
            players: results,
            dealer_total,
            dealer_bust: dealer_total > BLACKJACK,
            dealer_blackjack,
            dealer_played,
        })
    }
}

/// Pays `player` for `outcome` and reports it.
pub(super) fn settle_player(
    player: &mut Player,
    outcome: HandOutcome,
    total: u8,
    observer: &mut dyn Observer,
) -> PlayerResult {
    let bet = player.bet();
    let payout = outcome.payout(bet);
    player.credit(payout);

    log::debug!("{} {outcome:?}, paid {payout} on {bet}", player.name());
    observer.notify(Event::Settled {
        player: String::from(player.name()),
        outcome,
        hand: player.hand().clone(),
        chips: player.chips(),
    });

    PlayerResult {
        player_id: player.id(),
        name: String::from(player.name()),
        split_from: player.split_from(),
        outcome,
        bet,
        payout,
        total,
        insurance_bet: 0,
        insurance_payout: 0,
        chips: player.chips(),
    }
}
