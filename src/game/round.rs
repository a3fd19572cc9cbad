use log::debug;
use rand::Rng;

use crate::battle::resolve_battle;
use crate::error::{GameError, InsufficientCardsError};
use crate::hand::{HAND_SIZE, Order};
use crate::player::PlayerSide;
use crate::result::{BattleReport, Draw, DrawnHands};

use super::{Game, GameState};

impl<R: Rng> Game<R> {
    /// Starts the next battle: replenishes both decks as needed and draws a
    /// hand for each player.
    ///
    /// If a player owns fewer than four cards even with their discard pile
    /// shuffled in, nothing is drawn and that player loses the war; the
    /// result is [`Draw::WarOver`].
    ///
    /// # Errors
    ///
    /// Returns an error if no war is waiting for a draw, or if a deck still
    /// cannot supply a hand. No cards are drawn in either case.
    pub fn draw_hands(&mut self) -> Result<Draw, GameError> {
        if self.state != GameState::AwaitingDraw {
            return Err(GameError::InvalidState);
        }

        let mut replenished = [false; 2];
        for side in PlayerSide::BOTH {
            let piles = &mut self.players[side.index()].piles;
            replenished[side.index()] = piles.ensure_drawable(&mut self.rng);
            if replenished[side.index()] {
                debug!("{side} shuffled discard pile into deck");
            }
        }

        if let Some(loser) = self.eliminated() {
            return Ok(Draw::WarOver(self.finish_war(loser.other())));
        }

        // Both decks are checked before either hand leaves its deck.
        for player in &self.players {
            let available = player.piles.deck().len();
            if available < HAND_SIZE {
                return Err(InsufficientCardsError { available }.into());
            }
        }

        self.battle_number += 1;
        let counts = self.card_counts();
        let [first, second] = &mut self.players;
        let hands = [first.piles.draw_hand()?, second.piles.draw_hand()?];

        self.pending = Some(hands);
        self.state = GameState::AwaitingOrders;

        Ok(Draw::Hands(DrawnHands {
            battle: self.battle_number,
            hands,
            replenished,
            counts,
        }))
    }

    /// Resolves the drawn hands with each player's chosen order.
    ///
    /// Every card in play goes to the discard pile of whoever won its
    /// sub-battle. Afterwards a player left with fewer than four cards loses
    /// the war, P1 being checked first.
    ///
    /// # Errors
    ///
    /// Returns an error if no hands are waiting to be played.
    pub fn submit_orders(
        &mut self,
        first: Order,
        second: Order,
    ) -> Result<BattleReport, GameError> {
        if self.state != GameState::AwaitingOrders {
            return Err(GameError::InvalidState);
        }
        let hands = self.pending.take().ok_or(GameError::InvalidState)?;

        let [p1, p2] = &mut self.players;
        let outcomes = resolve_battle(
            hands,
            [&first, &second],
            [&mut p1.piles, &mut p2.piles],
        );

        let report_counts = self.card_counts();
        debug!(
            "battle {} resolved ({first} vs {second}), counts {:?}",
            self.battle_number, report_counts
        );

        let war_over = if let Some(loser) = self.eliminated() {
            Some(self.finish_war(loser.other()))
        } else {
            self.state = GameState::AwaitingDraw;
            None
        };

        Ok(BattleReport {
            battle: self.battle_number,
            outcomes,
            counts: report_counts,
            war_over,
        })
    }
}
