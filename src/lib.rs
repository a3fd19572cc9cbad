//! A two-player War card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a session of wars: dealing,
//! drawing four-card hands, resolving the four sub-battles of each battle
//! with the players' chosen orders, replenishing decks from discard piles,
//! and scoring each war's winner.
//!
//! # Example
//!
//! ```no_run
//! use warrs::{Colour, Game, GameOptions, PlayerProfile};
//!
//! let players = [
//!     PlayerProfile::new("P1", Colour::Red),
//!     PlayerProfile::new("P2", Colour::Green),
//! ];
//! let game = Game::new(GameOptions::default(), 42, players);
//! let _ = game;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod battle;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod pile;
pub mod player;
pub mod result;
pub mod shuffle;

// Re-export main types
pub use battle::{face_off, resolve_battle};
pub use card::{Card, DECK_SIZE, Face, STANDARD_DECK, Suit};
pub use error::{
    ColourError, GameError, InsufficientCardsError, InvalidOrderError, ReplyError, SetupError,
};
pub use game::{Game, GameState};
pub use hand::{HAND_SIZE, Hand, Order};
pub use input::{parse_colour, parse_replay};
pub use options::{DEFAULT_WAR_POINTS, GameOptions};
pub use pile::{CardCount, PlayerPiles};
pub use player::{Colour, Player, PlayerProfile, PlayerSide};
pub use result::{BattleReport, Draw, DrawnHands, FinalStandings, SubBattleOutcome, WarOutcome};
pub use shuffle::shuffle;
