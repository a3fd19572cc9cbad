use log::info;
use rand::Rng;

use crate::card::{DECK_SIZE, STANDARD_DECK};
use crate::error::GameError;
use crate::player::PlayerSide;
use crate::result::{FinalStandings, WarOutcome};
use crate::shuffle::shuffle;

use super::{Game, GameState};

impl<R: Rng> Game<R> {
    /// Redeals the war in progress.
    ///
    /// The full deck is shuffled and split in half; P1 gets the first half.
    /// Discard piles and any unresolved hands are cleared and the battle
    /// counter restarts. The war counter and the scores are not touched.
    ///
    /// # Errors
    ///
    /// Returns an error unless a war is being played. Use
    /// [`Self::start_new_war`] to begin a war.
    pub fn reset_war(&mut self) -> Result<(), GameError> {
        if !self.state.in_war() {
            return Err(GameError::InvalidState);
        }

        self.deal();
        Ok(())
    }

    /// Starts the next war of the session and returns its number.
    ///
    /// # Errors
    ///
    /// Returns an error unless the session is waiting for its first war or
    /// the previous war has ended.
    pub fn start_new_war(&mut self) -> Result<u32, GameError> {
        if !self.state.can_start_war() {
            return Err(GameError::InvalidState);
        }

        self.war_number += 1;
        self.deal();
        info!("war {} dealt", self.war_number);

        Ok(self.war_number)
    }

    /// Ends the session and returns the final standings.
    ///
    /// The higher score wins overall; equal scores are a tie.
    ///
    /// # Errors
    ///
    /// Returns an error while a war is still being played or after the
    /// session has already ended.
    pub fn end_session(&mut self) -> Result<FinalStandings, GameError> {
        if !self.state.can_start_war() {
            return Err(GameError::InvalidState);
        }

        self.state = GameState::SessionEnded;
        let standings = FinalStandings::from_scores(self.scores(), self.war_number);
        info!(
            "session ended after {} wars, scores {:?}",
            standings.wars, standings.scores
        );

        Ok(standings)
    }

    fn deal(&mut self) {
        let mut shuffled = shuffle(&STANDARD_DECK, &mut self.rng);
        let second_half = shuffled.split_off(DECK_SIZE / 2);

        self.players[0].piles.reset(shuffled);
        self.players[1].piles.reset(second_half);
        self.pending = None;
        self.last_winner = None;
        self.battle_number = 0;
        self.state = GameState::AwaitingDraw;
    }

    /// Credits `winner` with the war and moves to [`GameState::WarEnded`].
    pub(super) fn finish_war(&mut self, winner: PlayerSide) -> WarOutcome {
        let points = self.options.war_points;
        self.player_mut(winner).add_score(points);
        self.last_winner = Some(winner);
        self.state = GameState::WarEnded;

        let outcome = WarOutcome {
            war: self.war_number,
            winner,
            battles: self.battle_number,
            scores: self.scores(),
        };
        info!(
            "war {} won by {} after {} battles",
            outcome.war, winner, outcome.battles
        );
        outcome
    }
}
