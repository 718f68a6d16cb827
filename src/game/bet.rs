use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{BetError, RoundError};
use crate::hand::Hand;
use crate::participant::Participant;
use crate::table::{Decider, Event, Observer, Prompt};

use super::{Game, ask_within};

impl Game {
    /// Takes a bet from every player. Each bet leaves the chips at once.
    pub(super) fn take_bets(
        &mut self,
        decider: &mut dyn Decider,
        observer: &mut dyn Observer,
    ) -> Result<(), RoundError> {
        for player in &mut self.players {
            let chips = player.chips();
            if chips == 0 {
                return Err(BetError::InsufficientFunds.into());
            }

            let prompt = Prompt::Bet {
                player: player.name(),
                chips,
            };
            let amount = ask_within(decider, &prompt, 1, chips);
            player.place_bet(amount)?;

            observer.notify(Event::BetPlaced {
                player: String::from(player.name()),
                amount,
                chips: player.chips(),
            });
        }
        Ok(())
    }

    /// Deals two cards to every player and the dealer, one pass at a time,
    /// and turns the dealer's first card face down.
    pub(super) fn deal_initial(&mut self, observer: &mut dyn Observer) -> Result<(), RoundError> {
        let mut hands: Vec<&mut Hand> = self
            .players
            .iter_mut()
            .map(Participant::hand_mut)
            .chain(core::iter::once(self.dealer.hand_mut()))
            .collect();
        self.shoe.deal(&mut hands, 2)?;

        self.dealer.hide_hole()?;
        log::debug!(
            "dealt {} hands, {} cards left",
            self.players.len() + 1,
            self.shoe.remaining()
        );

        observer.notify(Event::Dealt {
            players: self
                .players
                .iter()
                .map(|player| (String::from(player.name()), player.hand().clone()))
                .collect(),
            dealer: self.dealer.hand().clone(),
        });
        Ok(())
    }
}
