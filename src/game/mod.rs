//! Game session and war flow.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::SetupError;
use crate::hand::{HAND_SIZE, Hand};
use crate::options::GameOptions;
use crate::pile::CardCount;
use crate::player::{Player, PlayerProfile, PlayerSide};

mod round;
pub mod state;
mod war;

pub use state::GameState;

/// A War session between two players.
///
/// The session owns both players' piles, their scores, the war and battle
/// counters, and the random number generator used for every shuffle. A
/// session runs any number of wars; scores carry over from one war to the
/// next.
///
/// # Example
///
/// ```
/// use warrs::{Colour, Draw, Game, GameOptions, Order, PlayerProfile};
///
/// let players = [
///     PlayerProfile::new("Ada", Colour::Red),
///     PlayerProfile::new("Grace", Colour::Blue),
/// ];
/// let mut game = Game::new(GameOptions::default(), 42, players).unwrap();
/// game.start_new_war().unwrap();
///
/// if let Draw::Hands(drawn) = game.draw_hands().unwrap() {
///     let report = game.submit_orders(Order::IDENTITY, Order::IDENTITY).unwrap();
///     assert_eq!(report.battle, drawn.battle);
/// }
/// ```
#[derive(Debug)]
pub struct Game<R = ChaCha8Rng> {
    /// Game options.
    pub options: GameOptions,
    players: [Player; 2],
    state: GameState,
    /// Wars started this session.
    war_number: u32,
    /// Battles drawn in the current war.
    battle_number: u32,
    /// Hands drawn but not yet resolved.
    pending: Option<[Hand; 2]>,
    /// Winner of the most recent war.
    last_winner: Option<PlayerSide>,
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Creates a new session whose shuffles are driven by `seed`.
    ///
    /// The same seed and the same play orders always reproduce the same
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an error if both players chose the same colour.
    pub fn new(
        options: GameOptions,
        seed: u64,
        players: [PlayerProfile; 2],
    ) -> Result<Self, SetupError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed), players)
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new session that shuffles with the given random source.
    ///
    /// # Errors
    ///
    /// Returns an error if both players chose the same colour.
    pub fn with_rng(
        options: GameOptions,
        rng: R,
        players: [PlayerProfile; 2],
    ) -> Result<Self, SetupError> {
        if players[0].colour == players[1].colour {
            return Err(SetupError::DuplicateColour);
        }

        Ok(Self {
            options,
            players: players.map(Player::new),
            state: GameState::WaitingForWar,
            war_number: 0,
            battle_number: 0,
            pending: None,
            last_winner: None,
            rng,
        })
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player seated at `side`.
    pub const fn player(&self, side: PlayerSide) -> &Player {
        &self.players[side.index()]
    }

    /// Returns mutable access to the player seated at `side`.
    ///
    /// Intended for setting up positions; moving cards in or out of a
    /// player's piles breaks the 52-card total.
    pub const fn player_mut(&mut self, side: PlayerSide) -> &mut Player {
        &mut self.players[side.index()]
    }

    /// Returns both players, P1 first.
    pub const fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the number of the current (or last) war, 0 before the first.
    pub const fn war_number(&self) -> u32 {
        self.war_number
    }

    /// Returns the number of the current (or last) battle in this war.
    pub const fn battle_number(&self) -> u32 {
        self.battle_number
    }

    /// Returns both players' session scores, P1 first.
    pub const fn scores(&self) -> [u32; 2] {
        [self.players[0].score(), self.players[1].score()]
    }

    /// Returns both players' pile sizes, P1 first.
    pub fn card_counts(&self) -> [CardCount; 2] {
        [self.players[0].piles.counts(), self.players[1].piles.counts()]
    }

    /// Returns the hands drawn for the current battle, if any.
    pub const fn pending_hands(&self) -> Option<&[Hand; 2]> {
        self.pending.as_ref()
    }

    /// Counts every card in play: both players' piles plus unresolved hands.
    ///
    /// Equals [`DECK_SIZE`](crate::DECK_SIZE) throughout a war.
    pub fn cards_in_play(&self) -> usize {
        let in_piles: usize = self
            .players
            .iter()
            .map(|player| player.piles.total_cards())
            .sum();
        let in_hands = self.pending.map_or(0, |hands| hands.len() * HAND_SIZE);
        in_piles + in_hands
    }

    /// Returns the winner if the current war is over.
    pub fn is_war_over(&self) -> Option<PlayerSide> {
        if self.state == GameState::WarEnded {
            self.last_winner
        } else {
            None
        }
    }

    /// Side that lost on card count, if any, checking P1 first.
    fn eliminated(&self) -> Option<PlayerSide> {
        PlayerSide::BOTH
            .into_iter()
            .find(|side| self.player(*side).piles.total_cards() < HAND_SIZE)
    }
}
