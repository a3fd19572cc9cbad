//! Battle resolution.

use log::trace;

use crate::card::Card;
use crate::hand::{HAND_SIZE, Hand, Order};
use crate::pile::PlayerPiles;
use crate::player::PlayerSide;
use crate::result::SubBattleOutcome;

/// Decides a single face-off between P1's and P2's card.
///
/// The stronger card wins; faces are compared first, suits break ties.
#[must_use]
pub fn face_off(index: usize, first: Card, second: Card) -> SubBattleOutcome {
    let (winner, winning_card, losing_card) = if first > second {
        (PlayerSide::One, first, second)
    } else {
        (PlayerSide::Two, second, first)
    };
    SubBattleOutcome {
        index,
        winner,
        winning_card,
        losing_card,
    }
}

/// Plays out a battle between two hands.
///
/// Hands and orders are indexed by [`PlayerSide::index`]. For each
/// sub-battle the winner's discard pile receives both cards, P1's card
/// first. The hands are consumed: every card ends up in exactly one of the
/// two discard piles.
///
/// # Example
///
/// ```
/// use warrs::{Card, Face, Hand, Order, PlayerPiles, PlayerSide, Suit, resolve_battle};
///
/// let low = Hand::new([Face::Deuce, Face::Three, Face::Four, Face::Five].map(|f| Card::new(f, Suit::Spades)));
/// let high = Hand::new([Face::Six, Face::Seven, Face::Eight, Face::Nine].map(|f| Card::new(f, Suit::Spades)));
/// let (mut p1, mut p2) = (PlayerPiles::new(), PlayerPiles::new());
///
/// let outcomes = resolve_battle([low, high], [&Order::IDENTITY; 2], [&mut p1, &mut p2]);
/// assert!(outcomes.iter().all(|o| o.winner == PlayerSide::Two));
/// assert_eq!(p2.discard().len(), 8);
/// ```
pub fn resolve_battle(
    hands: [Hand; 2],
    orders: [&Order; 2],
    piles: [&mut PlayerPiles; 2],
) -> [SubBattleOutcome; HAND_SIZE] {
    let [first_hand, second_hand] = hands;
    let first = first_hand.arrange(orders[0]);
    let second = second_hand.arrange(orders[1]);
    let [first_piles, second_piles] = piles;

    core::array::from_fn(|index| {
        let outcome = face_off(index, first[index], second[index]);
        trace!(
            "sub-battle {}: {} wins with {} over {}",
            index + 1,
            outcome.winner,
            outcome.winning_card,
            outcome.losing_card
        );

        let winnings = [first[index], second[index]];
        match outcome.winner {
            PlayerSide::One => first_piles.receive_winnings(winnings),
            PlayerSide::Two => second_piles.receive_winnings(winnings),
        }
        outcome
    })
}
