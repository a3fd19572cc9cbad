//! Card types and the canonical 52-card deck.

use core::fmt;

/// Card face, declared in increasing order of strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    /// Two.
    Deuce,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace (highest).
    Ace,
}

impl Face {
    /// All faces from weakest to strongest.
    pub const ALL: [Self; 13] = [
        Self::Deuce,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Numeric strength of the face (Deuce = 2 through Ace = 14).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Deuce => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
            Self::Ace => 14,
        }
    }

    /// English name of the face.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deuce => "Deuce",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit, declared in increasing order of tiebreak strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades (weakest).
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs (strongest).
    Clubs,
}

impl Suit {
    /// All suits from weakest to strongest.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Tiebreak strength of the suit (Spades = 1 through Clubs = 4).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Spades => 1,
            Self::Hearts => 2,
            Self::Diamonds => 3,
            Self::Clubs => 4,
        }
    }

    /// English name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards order by face first and fall back to the suit on equal faces, so two
/// distinct cards never compare equal.
///
/// ```
/// use warrs::{Card, Face, Suit};
///
/// let seven_hearts = Card::new(Face::Seven, Suit::Hearts);
/// let seven_diamonds = Card::new(Face::Seven, Suit::Diamonds);
/// assert!(seven_diamonds > seven_hearts);
/// assert!(Card::new(Face::Eight, Suit::Spades) > seven_diamonds);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The face of the card. Compared first.
    pub face: Face,
    /// The suit of the card. Only breaks ties between equal faces.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(face: Face, suit: Suit) -> Self {
        Self { face, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.face, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// The 52 cards of a standard deck, faces outer and suits inner.
pub const STANDARD_DECK: [Card; DECK_SIZE] = build_standard_deck();

const fn build_standard_deck() -> [Card; DECK_SIZE] {
    let mut cards = [Card::new(Face::Deuce, Suit::Spades); DECK_SIZE];
    let mut face = 0;
    while face < Face::ALL.len() {
        let mut suit = 0;
        while suit < Suit::ALL.len() {
            cards[face * Suit::ALL.len() + suit] = Card::new(Face::ALL[face], Suit::ALL[suit]);
            suit += 1;
        }
        face += 1;
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_is_sorted_and_unique() {
        assert!(STANDARD_DECK.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(STANDARD_DECK[0], Card::new(Face::Deuce, Suit::Spades));
        assert_eq!(STANDARD_DECK[DECK_SIZE - 1], Card::new(Face::Ace, Suit::Clubs));
    }

    #[test]
    fn face_beats_suit() {
        let low_club = Card::new(Face::Three, Suit::Clubs);
        let high_spade = Card::new(Face::Four, Suit::Spades);
        assert!(high_spade > low_club);
    }

    #[test]
    fn values_follow_declaration_order() {
        assert_eq!(Face::ALL.map(Face::value)[0], 2);
        assert_eq!(Face::Ace.value(), 14);
        assert_eq!(Suit::ALL.map(Suit::value), [1, 2, 3, 4]);
    }

    #[test]
    fn displays_face_of_suit() {
        let card = Card::new(Face::Queen, Suit::Diamonds);
        assert_eq!(alloc::format!("{card}"), "Queen of Diamonds");
    }
}
