//! Error types for game operations.

use thiserror::Error;

/// A play order that is not a permutation of `1234`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidOrderError {
    /// The order does not have exactly four entries.
    #[error("order must be a 4-digit number, got {len} characters")]
    WrongLength {
        /// Number of characters supplied.
        len: usize,
    },
    /// An entry is not one of the digits 1-4.
    #[error("order may only contain the digits 1-4, found {ch:?}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
    /// A digit appears more than once.
    #[error("each of the digits 1-4 must be used exactly once, {digit} is repeated")]
    RepeatedDigit {
        /// The repeated digit.
        digit: u8,
    },
}

/// A player cannot field a full hand, even with the discard pile shuffled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot draw a hand with only {available} cards available")]
pub struct InsufficientCardsError {
    /// Cards left in the deck when the draw was attempted.
    pub available: usize,
}

/// Errors that can occur while driving a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The operation is not allowed in the current game state.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// A hand could not be drawn although both players were still in the war.
    #[error(transparent)]
    InsufficientCards(#[from] InsufficientCardsError),
}

/// Errors that can occur when setting up a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Both players chose the same colour.
    #[error("players must choose different colours")]
    DuplicateColour,
}

/// Rejected colour choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColourError {
    /// More or fewer than one character was entered.
    #[error("Please enter a single digit from 1-6")]
    NotSingleDigit,
    /// The character is not a digit.
    #[error("Please enter a numerical digit from 1-6")]
    NotADigit,
    /// The digit is outside 1-6.
    #[error("Please enter a digit from 1-6")]
    OutOfRange,
    /// The other player already picked this colour.
    #[error("Please do not choose the same colour as P1")]
    AlreadyTaken,
}

/// Rejected answer to the replay question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplyError {
    /// The answer was neither `YES` nor `NO`.
    #[error("Please enter either YES or NO (match text exactly)")]
    Unrecognised,
}
