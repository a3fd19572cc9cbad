//! Player identity, colours and per-player state.

use alloc::string::String;
use core::fmt;

use crate::pile::PlayerPiles;

/// Identifies one of the two seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerSide {
    /// Player 1 (P1).
    One,
    /// Player 2 (P2).
    Two,
}

impl PlayerSide {
    /// Both sides, P1 first.
    pub const BOTH: [Self; 2] = [Self::One, Self::Two];

    /// Returns the opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Index into per-player arrays (P1 = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// Seat number as shown to players (P1 = 1).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl fmt::Display for PlayerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.number())
    }
}

/// Display colour chosen by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    /// Red (1).
    Red,
    /// Green (2).
    Green,
    /// Yellow (3).
    Yellow,
    /// Blue (4).
    Blue,
    /// Purple (5).
    Purple,
    /// Cyan (6).
    Cyan,
}

impl Colour {
    /// All colours in menu order.
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Purple,
        Self::Cyan,
    ];

    /// Looks up a colour by its menu digit (1-6).
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Yellow),
            4 => Some(Self::Blue),
            5 => Some(Self::Purple),
            6 => Some(Self::Cyan),
            _ => None,
        }
    }

    /// Menu digit of the colour.
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Purple => 5,
            Self::Cyan => 6,
        }
    }

    /// English name of the colour.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::Cyan => "Cyan",
        }
    }
}

/// Name and colour supplied when a session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    /// Player name, free text.
    pub name: String,
    /// Display colour.
    pub colour: Colour,
}

impl PlayerProfile {
    /// Creates a profile.
    #[must_use]
    pub fn new(name: impl Into<String>, colour: Colour) -> Self {
        Self {
            name: name.into(),
            colour,
        }
    }
}

/// A seated player: profile, cards and session score.
#[derive(Debug, Clone)]
pub struct Player {
    profile: PlayerProfile,
    /// Draw deck and discard pile.
    pub piles: PlayerPiles,
    score: u32,
}

impl Player {
    /// Creates a player with empty piles and no score.
    #[must_use]
    pub const fn new(profile: PlayerProfile) -> Self {
        Self {
            profile,
            piles: PlayerPiles::new(),
            score: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.profile.name
    }

    /// Returns the player's colour.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.profile.colour
    }

    /// Returns the player's session score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    pub(crate) const fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
