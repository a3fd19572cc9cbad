//! Property tests for card conservation, shuffling and battle resolution.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warrs::{
    Card, Colour, DECK_SIZE, Draw, Game, GameOptions, HAND_SIZE, Hand, Order, PlayerPiles,
    PlayerProfile, PlayerSide, STANDARD_DECK, resolve_battle, shuffle,
};

/// All 24 play orders.
fn all_orders() -> Vec<Order> {
    let mut orders = Vec::with_capacity(24);
    for a in 1..=4 {
        for b in 1..=4 {
            for c in 1..=4 {
                for d in 1..=4 {
                    if let Ok(order) = Order::new([a, b, c, d]) {
                        orders.push(order);
                    }
                }
            }
        }
    }
    orders
}

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_unstable();
    cards
}

fn hand_from(cards: &[Card]) -> Hand {
    Hand::new([cards[0], cards[1], cards[2], cards[3]])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every battle keeps exactly the 52 canonical cards in play.
    #[test]
    fn prop_cards_are_conserved(
        seed in any::<u64>(),
        choices in prop::collection::vec((0usize..24, 0usize..24), 1..150),
    ) {
        let orders = all_orders();
        let players = [
            PlayerProfile::new("P1", Colour::Green),
            PlayerProfile::new("P2", Colour::Purple),
        ];
        let mut game = Game::new(GameOptions::default(), seed, players).unwrap();
        game.start_new_war().unwrap();

        for (first, second) in choices {
            match game.draw_hands().unwrap() {
                Draw::WarOver(_) => break,
                Draw::Hands(_) => {}
            }
            prop_assert_eq!(game.cards_in_play(), DECK_SIZE);

            let report = game.submit_orders(orders[first], orders[second]).unwrap();
            let in_piles: Vec<Card> = game
                .players()
                .iter()
                .flat_map(|player| player.piles.iter().copied())
                .collect();
            prop_assert_eq!(sorted(in_piles), STANDARD_DECK.to_vec());
            prop_assert_eq!(report.counts[0].total() + report.counts[1].total(), DECK_SIZE);

            if report.war_over.is_some() {
                break;
            }
        }
    }

    /// Property: shuffling returns the same cards.
    #[test]
    fn prop_shuffle_is_permutation(
        cards in prop::sample::subsequence(STANDARD_DECK.to_vec(), 0..=DECK_SIZE),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shuffled = shuffle(&cards, &mut rng);
        prop_assert_eq!(shuffled.len(), cards.len());
        prop_assert_eq!(sorted(shuffled), sorted(cards));
    }

    /// Property: two distinct cards never compare equal, and exactly one is greater.
    #[test]
    fn prop_comparator_is_total(a in 0..DECK_SIZE, b in 0..DECK_SIZE) {
        let (x, y) = (STANDARD_DECK[a], STANDARD_DECK[b]);
        if a == b {
            prop_assert_eq!(x, y);
        } else {
            prop_assert_ne!(x, y);
            prop_assert!((x > y) ^ (y > x));
            prop_assert_eq!(x > y, a > b);
        }
    }

    /// Property: replenishing leaves a drawable deck and an empty discard
    /// pile, or the player is out.
    #[test]
    fn prop_replenishment(
        deck_len in 0usize..HAND_SIZE,
        discard_len in 0usize..=(DECK_SIZE - HAND_SIZE),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = STANDARD_DECK[..deck_len].to_vec();
        let discard = STANDARD_DECK[deck_len..deck_len + discard_len].to_vec();
        let mut piles = PlayerPiles::from_parts(deck, discard);

        prop_assert!(piles.ensure_drawable(&mut rng));
        let counts = piles.counts();
        prop_assert!(counts.deck >= HAND_SIZE || counts.total() < HAND_SIZE);
        prop_assert_eq!(counts.discard, 0);
        prop_assert_eq!(
            sorted(piles.deck().to_vec()),
            STANDARD_DECK[..deck_len + discard_len].to_vec()
        );
    }

    /// Property: the same hands and orders always resolve the same way.
    #[test]
    fn prop_resolution_is_deterministic(
        seed in any::<u64>(),
        first in 0usize..24,
        second in 0usize..24,
    ) {
        let orders = all_orders();
        let dealt = shuffle(&STANDARD_DECK, &mut ChaCha8Rng::seed_from_u64(seed));
        let hands = [hand_from(&dealt[..4]), hand_from(&dealt[4..8])];
        let picks = [&orders[first], &orders[second]];

        let (mut a1, mut a2) = (PlayerPiles::new(), PlayerPiles::new());
        let (mut b1, mut b2) = (PlayerPiles::new(), PlayerPiles::new());
        let once = resolve_battle(hands, picks, [&mut a1, &mut a2]);
        let twice = resolve_battle(hands, picks, [&mut b1, &mut b2]);

        prop_assert_eq!(once, twice);
        prop_assert_eq!(&a1, &b1);
        prop_assert_eq!(&a2, &b2);
        prop_assert_eq!(a1.discard().len() + a2.discard().len(), 2 * HAND_SIZE);
        let p1_wins = once.iter().filter(|o| o.winner == PlayerSide::One).count();
        prop_assert_eq!(a1.discard().len(), 2 * p1_wins);
    }
}

#[test]
fn there_are_24_orders() {
    assert_eq!(all_orders().len(), 24);
}
