use alloc::string::String;
use alloc::vec::Vec;

use crate::error::RoundError;
use crate::participant::Participant;
use crate::player::PlayerId;
use crate::result::{HandOutcome, PlayerResult, RoundResult};
use crate::table::{Decider, Event, Observer, Prompt};

use super::dealer::settle_player;
use super::{Game, ask_within};

/// What the insurance phase decided.
pub(super) struct InsuranceResolution {
    /// Whether the dealer turned up a natural.
    pub dealer_blackjack: bool,
    /// Insurance each player put up.
    pub stakes: Vec<(PlayerId, usize)>,
}

impl Game {
    /// Takes insurance bets while the dealer shows an Ace, then turns the hole
    /// card. Without a dealer blackjack the bets are lost.
    pub(super) fn offer_insurance(
        &mut self,
        decider: &mut dyn Decider,
        observer: &mut dyn Observer,
    ) -> Result<InsuranceResolution, RoundError> {
        let mut stakes = Vec::with_capacity(self.players.len());

        if self.options.insurance {
            for player in &mut self.players {
                let max = player.max_insurance();
                let prompt = Prompt::Insurance {
                    player: player.name(),
                    hand: player.hand(),
                    max,
                };
                let amount = ask_within(decider, &prompt, 0, max);
                player.place_insurance(amount)?;

                if amount > 0 {
                    observer.notify(Event::InsurancePlaced {
                        player: String::from(player.name()),
                        amount,
                    });
                }
                stakes.push((player.id(), amount));
            }
        }

        self.dealer.reveal_hole()?;
        observer.notify(Event::DealerRevealed {
            dealer: self.dealer.hand().clone(),
        });

        let dealer_blackjack = self.dealer.is_blackjack()?;
        if !dealer_blackjack {
            let collected: usize = self
                .players
                .iter_mut()
                .map(|player| player.forfeit_insurance())
                .sum();
            if collected > 0 {
                log::debug!("no dealer blackjack, {collected} in insurance collected");
                observer.notify(Event::InsuranceCollected);
            }
        }

        Ok(InsuranceResolution {
            dealer_blackjack,
            stakes,
        })
    }

    /// Ends the round on a dealer blackjack.
    ///
    /// Insurance pays first. A player holding a natural as well pushes, which
    /// with insurance taken amounts to even money; everyone else loses.
    pub(super) fn settle_dealer_blackjack(
        &mut self,
        observer: &mut dyn Observer,
    ) -> Result<RoundResult, RoundError> {
        self.phase = super::RoundPhase::Settlement;
        observer.notify(Event::DealerBlackjack);

        let dealer_total = self.dealer.hand().total()?;
        let mut outcomes = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let outcome = if player.is_blackjack()? {
                HandOutcome::Push
            } else {
                HandOutcome::Lose
            };
            outcomes.push((outcome, player.hand().total()?));
        }

        let mut results: Vec<PlayerResult> = Vec::with_capacity(self.players.len());
        for (player, (outcome, total)) in self.players.iter_mut().zip(outcomes) {
            let insurance_bet = player.insurance();
            let insurance_payout = player.pay_insurance();
            if insurance_bet > 0 {
                observer.notify(Event::InsurancePaid {
                    player: String::from(player.name()),
                    payout: insurance_payout,
                    chips: player.chips(),
                });
            }

            let mut result = settle_player(player, outcome, total, observer);
            result.insurance_bet = insurance_bet;
            result.insurance_payout = insurance_payout;
            results.push(result);
        }

        Ok(RoundResult {
            players: results,
            dealer_total,
            dealer_bust: false,
            dealer_blackjack: true,
            dealer_played: false,
        })
    }
}
