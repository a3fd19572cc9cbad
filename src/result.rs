//! Outcome types handed to the presentation layer.

use crate::card::Card;
use crate::hand::{HAND_SIZE, Hand};
use crate::pile::CardCount;
use crate::player::PlayerSide;

/// Result of one face-off inside a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubBattleOutcome {
    /// Sub-battle index (0-based).
    pub index: usize,
    /// Side that played the stronger card.
    pub winner: PlayerSide,
    /// The stronger card.
    pub winning_card: Card,
    /// The weaker card.
    pub losing_card: Card,
}

/// Hands drawn at the start of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawnHands {
    /// Battle number within the current war (1-based).
    pub battle: u32,
    /// Hands indexed by [`PlayerSide::index`].
    pub hands: [Hand; 2],
    /// Whether each player's discard pile was shuffled back in first.
    pub replenished: [bool; 2],
    /// Pile sizes after replenishment, before the hands were drawn.
    pub counts: [CardCount; 2],
}

impl DrawnHands {
    /// Returns the hand of `side`.
    #[must_use]
    pub const fn hand(&self, side: PlayerSide) -> &Hand {
        &self.hands[side.index()]
    }
}

/// What drawing produced: either a battle to play or a finished war.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// Both players drew a full hand.
    Hands(DrawnHands),
    /// A player could not field a full hand and lost the war.
    WarOver(WarOutcome),
}

/// Result of a war.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarOutcome {
    /// War number within the session (1-based).
    pub war: u32,
    /// Side that won the war.
    pub winner: PlayerSide,
    /// Battles fought in the war.
    pub battles: u32,
    /// Session scores after the win was credited.
    pub scores: [u32; 2],
}

/// Result of one resolved battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleReport {
    /// Battle number within the current war (1-based).
    pub battle: u32,
    /// Sub-battle results in play order.
    pub outcomes: [SubBattleOutcome; HAND_SIZE],
    /// Pile sizes after the winnings were handed out.
    pub counts: [CardCount; 2],
    /// Set if this battle ended the war.
    pub war_over: Option<WarOutcome>,
}

impl BattleReport {
    /// Number of sub-battles won by `side`.
    #[must_use]
    pub fn wins(&self, side: PlayerSide) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.winner == side)
            .count()
    }
}

/// Scores at the end of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalStandings {
    /// Scores indexed by [`PlayerSide::index`].
    pub scores: [u32; 2],
    /// Overall winner, or `None` on a tie.
    pub winner: Option<PlayerSide>,
    /// Wars played in the session.
    pub wars: u32,
}

impl FinalStandings {
    /// Builds standings from final scores.
    #[must_use]
    pub const fn from_scores(scores: [u32; 2], wars: u32) -> Self {
        let winner = if scores[0] > scores[1] {
            Some(PlayerSide::One)
        } else if scores[1] > scores[0] {
            Some(PlayerSide::Two)
        } else {
            None
        };
        Self {
            scores,
            winner,
            wars,
        }
    }

    /// Returns whether the session ended level.
    #[must_use]
    pub const fn is_tie(&self) -> bool {
        self.winner.is_none()
    }
}
