//! Per-player draw deck and discard pile.

use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::card::Card;
use crate::error::InsufficientCardsError;
use crate::hand::{HAND_SIZE, Hand};
use crate::shuffle::shuffle;

/// Sizes of a player's piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardCount {
    /// Cards in the draw deck.
    pub deck: usize,
    /// Cards in the discard pile.
    pub discard: usize,
}

impl CardCount {
    /// Total cards the player owns.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.deck + self.discard
    }
}

/// A player's draw deck and discard pile.
///
/// The front of the deck is the next card drawn. Won cards go to the discard
/// pile and only come back into play when the deck runs low.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerPiles {
    deck: Vec<Card>,
    discard: Vec<Card>,
}

impl PlayerPiles {
    /// Creates empty piles.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deck: Vec::new(),
            discard: Vec::new(),
        }
    }

    /// Creates piles with the given contents.
    #[must_use]
    pub const fn from_parts(deck: Vec<Card>, discard: Vec<Card>) -> Self {
        Self { deck, discard }
    }

    /// Replaces the deck with `half` and empties the discard pile.
    pub fn reset(&mut self, half: Vec<Card>) {
        self.deck = half;
        self.discard.clear();
    }

    /// Shuffles the discard pile back into the deck if fewer than
    /// [`HAND_SIZE`] cards are left to draw.
    ///
    /// Returns `true` if a replenishment happened. Afterwards the deck holds
    /// at least [`HAND_SIZE`] cards, unless the player owns fewer than that in
    /// total.
    pub fn ensure_drawable<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.deck.len() >= HAND_SIZE {
            return false;
        }

        let mut pool = core::mem::take(&mut self.discard);
        pool.append(&mut self.deck);
        self.deck = shuffle(&pool, rng);

        debug!("replenished deck to {} cards", self.deck.len());
        true
    }

    /// Removes the front [`HAND_SIZE`] cards of the deck.
    ///
    /// Call [`Self::ensure_drawable`] first; the discard pile is not consulted.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the deck untouched, if fewer than
    /// [`HAND_SIZE`] cards are in the deck.
    pub fn draw_hand(&mut self) -> Result<Hand, InsufficientCardsError> {
        let available = self.deck.len();
        let Some(front) = self.deck.first_chunk::<HAND_SIZE>().copied() else {
            return Err(InsufficientCardsError { available });
        };
        self.deck.drain(..HAND_SIZE);
        Ok(Hand::new(front))
    }

    /// Adds won cards to the discard pile.
    pub fn receive_winnings<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.discard.extend(cards);
    }

    /// Total cards owned: deck plus discard pile.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.discard.len()
    }

    /// Returns the pile sizes.
    #[must_use]
    pub fn counts(&self) -> CardCount {
        CardCount {
            deck: self.deck.len(),
            discard: self.discard.len(),
        }
    }

    /// Returns the draw deck, front first.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the discard pile.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Iterates over every card the player owns.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.deck.iter().chain(&self.discard)
    }
}
