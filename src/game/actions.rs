use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{HandError, RoundError};
use crate::hand::Hand;
use crate::participant::Participant;
use crate::player::Player;
use crate::shoe::Shoe;
use crate::table::{Decider, Event, Observer, Prompt};

use super::Game;

impl Game {
    /// Offers a split to every pair the owner can cover, then performs the
    /// accepted splits in seating order.
    pub(super) fn process_splits(
        &mut self,
        decider: &mut dyn Decider,
        observer: &mut dyn Observer,
    ) -> Result<(), RoundError> {
        let mut accepted = Vec::new();

        for (index, player) in self.players.iter().enumerate() {
            if player.is_split_hand() || !player.hand().is_splittable() {
                continue;
            }

            if player.chips() < player.bet() {
                observer.notify(Event::SplitUnaffordable {
                    player: String::from(player.name()),
                });
                continue;
            }

            let prompt = Prompt::Split {
                player: player.name(),
                hand: player.hand(),
            };
            if decider.ask_yes_no(&prompt) {
                accepted.push(index);
            }
        }

        // Every split seats a new hand, pushing later players one place right.
        for (shift, index) in accepted.into_iter().enumerate() {
            self.split_player(index + shift, observer)?;
        }
        Ok(())
    }

    /// Splits the pair held at `index` into a new hand seated right after it.
    fn split_player(&mut self, index: usize, observer: &mut dyn Observer) -> Result<(), RoundError> {
        let split_id = self.allocate_id();
        let origin = &mut self.players[index];

        let card = *origin.hand().first().ok_or(HandError::Empty)?;
        let bet = origin.bet();
        let stake = origin.debit(bet);

        let name = format!("{}-2", origin.name());
        let mut split = Player::split_of(split_id, name.clone(), origin.id(), stake);
        origin.hand_mut().give(&card, split.hand_mut())?;
        let origin_id = origin.id();

        self.players.insert(index + 1, split);
        let mut pair: Vec<&mut Hand> = self.players[index..=index + 1]
            .iter_mut()
            .map(Participant::hand_mut)
            .collect();
        self.shoe.deal(&mut pair, 1)?;

        log::debug!("player {origin_id} split, new hand {split_id} bets {stake}");
        observer.notify(Event::Split {
            player: origin_id,
            split_hand: split_id,
            name,
        });
        Ok(())
    }

    /// Offers a double down on every hand whose total the options allow.
    /// A natural is never offered one.
    ///
    /// A split hand has no chips of its own, so the player it was split from
    /// lends whatever it is short.
    pub(super) fn offer_double_downs(
        &mut self,
        decider: &mut dyn Decider,
        observer: &mut dyn Observer,
    ) -> Result<(), RoundError> {
        for index in 0..self.players.len() {
            let player = &self.players[index];
            if player.hand().is_blackjack()? || !self.options.double.allows(player.hand().total()?)
            {
                continue;
            }

            let bet = player.bet();
            let shortfall = bet.saturating_sub(player.chips());
            let lender = if shortfall > 0 {
                player.split_from().and_then(|origin| self.position(origin))
            } else {
                None
            };
            let affordable =
                shortfall == 0 || lender.is_some_and(|lender| self.players[lender].chips() >= shortfall);

            if !affordable {
                observer.notify(Event::DoubleDownUnaffordable {
                    player: String::from(player.name()),
                });
                continue;
            }

            let prompt = Prompt::DoubleDown {
                player: player.name(),
                hand: player.hand(),
            };
            if !decider.ask_yes_no(&prompt) {
                continue;
            }

            if let Some(lender) = lender {
                let lent = self.players[lender].debit(shortfall);
                self.players[index].credit(lent);
            }

            let player = &mut self.players[index];
            player.place_bet(bet)?;
            player.set_doubled_down();
            let card = self.shoe.draw()?;
            player.hand_mut().add(card);

            log::debug!("{} doubled down to {}", player.name(), player.bet());
            observer.notify(Event::DoubledDown {
                player: String::from(player.name()),
                bet: player.bet(),
                hand: player.hand().clone(),
            });
        }
        Ok(())
    }

    /// Lets every player draw in seating order.
    pub(super) fn play_players(
        &mut self,
        decider: &mut dyn Decider,
        observer: &mut dyn Observer,
    ) -> Result<(), RoundError> {
        for player in &mut self.players {
            draw_until_stand(&mut self.shoe, player, decider, observer)?;
        }
        Ok(())
    }
}

/// Deals to `participant` for as long as it wants cards and has not busted.
pub(super) fn draw_until_stand<P: Participant + ?Sized>(
    shoe: &mut Shoe,
    participant: &mut P,
    decider: &mut dyn Decider,
    observer: &mut dyn Observer,
) -> Result<(), RoundError> {
    while !participant.is_busted()? && participant.wants_card(decider)? {
        let card = shoe.draw()?;
        participant.hand_mut().add(card);
        observer.notify(Event::Hit {
            participant: String::from(participant.name()),
            card,
            hand: participant.hand().clone(),
        });
    }

    let participant_name = String::from(participant.name());
    let hand = participant.hand().clone();
    if participant.is_busted()? {
        log::debug!("{participant_name} busts with {hand}");
        observer.notify(Event::Bust {
            participant: participant_name,
            hand,
        });
    } else {
        observer.notify(Event::Stand {
            participant: participant_name,
            hand,
        });
    }
    Ok(())
}
