//! Card shuffling.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;

/// Returns a uniformly random permutation of `cards`.
///
/// Works on a private copy: a random remaining card is removed and appended
/// to the output until the copy is exhausted. The input slice is left as is.
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use warrs::{STANDARD_DECK, shuffle};
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let shuffled = shuffle(&STANDARD_DECK, &mut rng);
/// assert_eq!(shuffled.len(), STANDARD_DECK.len());
/// ```
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut remaining = cards.to_vec();
    let mut shuffled = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let index = rng.random_range(0..remaining.len());
        shuffled.push(remaining.remove(index));
    }

    shuffled
}
