//! Battle hands and play orders.

use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::error::InvalidOrderError;

/// Number of cards each player brings into a battle.
pub const HAND_SIZE: usize = 4;

/// The four cards a player drew for the current battle.
///
/// Positions are labelled 1 through 4 when shown to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from four cards, in drawn order.
    #[must_use]
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Returns the cards in drawn order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the cards in the order they will be played.
    #[must_use]
    pub fn arrange(&self, order: &Order) -> [Card; HAND_SIZE] {
        order.positions().map(|position| self.cards[position])
    }
}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = core::array::IntoIter<Card, HAND_SIZE>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// A validated play order: a permutation of the hand positions 1-4.
///
/// Entry `i` names the hand position played in sub-battle `i`.
///
/// ```
/// use warrs::Order;
///
/// let order: Order = "3412".parse().unwrap();
/// assert_eq!(order.digits(), [3, 4, 1, 2]);
/// assert!("1134".parse::<Order>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Order {
    digits: [u8; HAND_SIZE],
}

impl Order {
    /// Plays the cards in the order they were drawn (`1234`).
    pub const IDENTITY: Self = Self {
        digits: [1, 2, 3, 4],
    };

    /// Creates an order from four 1-based hand positions.
    ///
    /// # Errors
    ///
    /// Returns an error if a digit is outside 1-4 or appears twice.
    pub fn new(digits: [u8; HAND_SIZE]) -> Result<Self, InvalidOrderError> {
        let mut used = [false; HAND_SIZE];
        for digit in digits {
            if !(1..=HAND_SIZE as u8).contains(&digit) {
                return Err(InvalidOrderError::InvalidCharacter {
                    ch: char::from_digit(u32::from(digit), 10).unwrap_or('?'),
                });
            }
            let slot = &mut used[usize::from(digit - 1)];
            if *slot {
                return Err(InvalidOrderError::RepeatedDigit { digit });
            }
            *slot = true;
        }
        Ok(Self { digits })
    }

    /// Parses an order such as `"4123"`.
    ///
    /// The input must be exactly four characters long. Surrounding whitespace
    /// is not trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the input has the wrong length, contains anything
    /// other than the digits 1-4, or repeats a digit.
    pub fn parse(input: &str) -> Result<Self, InvalidOrderError> {
        let len = input.chars().count();
        if len != HAND_SIZE {
            return Err(InvalidOrderError::WrongLength { len });
        }

        let mut digits = [0; HAND_SIZE];
        for (slot, ch) in digits.iter_mut().zip(input.chars()) {
            *slot = match ch.to_digit(10) {
                Some(digit @ 1..=4) => digit as u8,
                _ => return Err(InvalidOrderError::InvalidCharacter { ch }),
            };
        }

        Self::new(digits)
    }

    /// Returns the 1-based hand positions in play order.
    #[must_use]
    pub const fn digits(&self) -> [u8; HAND_SIZE] {
        self.digits
    }

    /// Returns the 0-based hand positions in play order.
    #[must_use]
    pub fn positions(&self) -> [usize; HAND_SIZE] {
        self.digits.map(|digit| usize::from(digit - 1))
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl FromStr for Order {
    type Err = InvalidOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
