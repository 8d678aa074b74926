//! Deck construction tests.

use std::collections::{HashMap, HashSet};

use deckrs::deck::{
    add_jokers, append_jokers, duplicate, exclude, filter_out, from_decks, shuffle, sort_by_rank,
    standard_deck,
};
use deckrs::{Card, DECK_SIZE, DeckOptions, Rank, SortMode, Suit, absolute_rank, build};

fn counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn default_options_build_standard_deck() {
    let cards = build(DeckOptions::default());
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(cards, standard_deck());

    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), 52);
    assert!(cards.iter().all(|card| !card.hidden && !card.is_joker()));
}

#[test]
fn standard_deck_follows_catalog_order() {
    let cards = standard_deck();
    assert_eq!(cards[0], Card::new(Suit::Spade, Rank::Ace));
    assert_eq!(cards[12], Card::new(Suit::Spade, Rank::King));
    assert_eq!(cards[13], Card::new(Suit::Diamond, Rank::Ace));
    assert_eq!(cards[51], Card::new(Suit::Heart, Rank::King));
}

#[test]
fn additional_decks_grow_linearly() {
    for extra in 0..5 {
        let cards = DeckOptions::default().with_additional_decks(extra).build();
        assert_eq!(cards.len(), DECK_SIZE * (extra + 1));

        let counts = counts(&cards);
        assert_eq!(counts.len(), DECK_SIZE);
        assert!(counts.values().all(|&count| count == extra + 1));
    }
}

#[test]
fn duplicate_keeps_copies_consecutive() {
    let base = standard_deck();
    let cards = duplicate(&base, 2);
    assert_eq!(&cards[..DECK_SIZE], base.as_slice());
    assert_eq!(&cards[DECK_SIZE..2 * DECK_SIZE], base.as_slice());
    assert_eq!(&cards[2 * DECK_SIZE..], base.as_slice());
}

#[test]
fn from_decks_concatenates() {
    let cards = from_decks([standard_deck(), standard_deck()]);
    assert_eq!(cards.len(), 104);
    assert!(from_decks(Vec::<Vec<Card>>::new()).is_empty());
}

#[test]
fn jokers_are_appended_in_alternating_suits() {
    let cards = DeckOptions::default().with_jokers(3).build();
    assert_eq!(cards.len(), DECK_SIZE + 3);

    let jokers = &cards[DECK_SIZE..];
    assert_eq!(jokers[0], Card::joker(Suit::BlackJoker));
    assert_eq!(jokers[1], Card::joker(Suit::RedJoker));
    assert_eq!(jokers[2], Card::joker(Suit::BlackJoker));
    assert!(jokers.iter().all(|card| card.rank == Rank::Joker));

    let none = DeckOptions::default().with_jokers(0).build();
    assert_eq!(none.len(), DECK_SIZE);
}

#[test]
fn add_jokers_appends_black_then_red() {
    let cards = vec![
        Card::new(Suit::Spade, Rank::Ace),
        Card::new(Suit::Diamond, Rank::Two),
        Card::new(Suit::Club, Rank::Three),
        Card::new(Suit::Heart, Rank::Four),
    ];
    let cards = add_jokers(cards);

    assert_eq!(cards.len(), 6);
    assert_eq!(cards[4].suit, Suit::BlackJoker);
    assert_eq!(cards[5].suit, Suit::RedJoker);

    let mut empty = Vec::new();
    append_jokers(&mut empty, 0);
    assert!(empty.is_empty());
}

#[test]
fn default_sort_is_ascending_and_idempotent() {
    let cards = DeckOptions::default()
        .with_additional_decks(1)
        .with_jokers(4)
        .with_shuffle(true)
        .with_seed(11)
        .build();
    let mut sorted = cards;
    deckrs::ordering::default_sort(&mut sorted);
    assert!(
        sorted
            .windows(2)
            .all(|pair| absolute_rank(&pair[0]) <= absolute_rank(&pair[1]))
    );

    let mut twice = sorted.clone();
    deckrs::ordering::default_sort(&mut twice);
    assert_eq!(twice, sorted);

    let built = DeckOptions::default()
        .with_jokers(2)
        .with_default_sort(true)
        .build();
    assert!(
        built
            .windows(2)
            .all(|pair| pair[0].absolute_rank() <= pair[1].absolute_rank())
    );
    assert_eq!(built[52], Card::joker(Suit::BlackJoker));
    assert_eq!(built[53], Card::joker(Suit::RedJoker));
}

#[test]
fn custom_sort_orders_by_rank_only_and_is_stable() {
    let cards = DeckOptions::default()
        .with_custom_sort(|a, b| a.cmp(&b))
        .build();

    assert!(cards.windows(2).all(|pair| pair[0].rank <= pair[1].rank));
    // Stable: suits keep catalog order within a rank.
    let aces: Vec<Suit> = cards[..4].iter().map(|card| card.suit).collect();
    assert_eq!(aces, Suit::STANDARD);

    let mut descending = standard_deck();
    sort_by_rank(&mut descending, |a, b| b.cmp(&a));
    assert_eq!(descending[0], Card::new(Suit::Spade, Rank::King));
    assert_eq!(descending[51], Card::new(Suit::Heart, Rank::Ace));
}

#[test]
fn last_sort_option_wins() {
    let options = DeckOptions::default()
        .with_default_sort(true)
        .with_custom_sort(|a, b| b.cmp(&a));
    assert!(matches!(options.sort, SortMode::Custom(_)));

    let options = options.with_default_sort(false);
    assert!(matches!(options.sort, SortMode::Custom(_)));

    let options = options.with_default_sort(true);
    assert!(matches!(options.sort, SortMode::Default));

    let options = options.with_default_sort(false);
    assert!(matches!(options.sort, SortMode::Unsorted));
}

#[test]
fn shuffle_preserves_multiset() {
    let base = DeckOptions::default().with_jokers(2).build();
    let shuffled = DeckOptions::default().with_jokers(2).with_shuffle(true).build();

    assert_eq!(shuffled.len(), base.len());
    assert_eq!(counts(&shuffled), counts(&base));
}

#[test]
fn shuffle_changes_order() {
    let base = standard_deck();
    let unchanged = (0..10)
        .filter(|_| {
            let mut cards = base.clone();
            shuffle(&mut cards);
            cards == base
        })
        .count();
    assert!(unchanged < 10, "shuffle never changed the order");
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let options = DeckOptions::default().with_shuffle(true).with_seed(42);
    let a = options.clone().build();
    let b = options.build();
    assert_eq!(a, b);
    assert_ne!(a, standard_deck());

    let c = DeckOptions::default()
        .with_shuffle(true)
        .with_seed(43)
        .build();
    assert_ne!(a, c);
}

#[test]
fn shuffle_runs_after_sort() {
    let cards = DeckOptions::default()
        .with_default_sort(true)
        .with_shuffle(true)
        .with_seed(5)
        .build();
    let mut sorted = cards.clone();
    deckrs::ordering::default_sort(&mut sorted);
    assert_ne!(cards, sorted);
}

#[test]
fn exclusion_by_faces() {
    let cards = DeckOptions::default()
        .with_jokers(2)
        .with_exclusion(["2", "3"], Vec::<String>::new())
        .build();

    assert_eq!(cards.len(), 44 + 2);
    assert!(
        cards
            .iter()
            .all(|card| card.rank != Rank::Two && card.rank != Rank::Three)
    );
    assert_eq!(cards.iter().filter(|card| card.is_joker()).count(), 2);
}

#[test]
fn exclusion_by_suits() {
    let cards = DeckOptions::default()
        .with_jokers(1)
        .with_exclusion(Vec::<String>::new(), ["Hearts"])
        .build();

    assert_eq!(cards.len(), 39 + 1);
    assert!(cards.iter().all(|card| card.suit != Suit::Heart));
    assert!(cards.iter().any(Card::is_joker));
}

#[test]
fn exclusion_by_face_and_suit_removes_intersection() {
    let cards = DeckOptions::default()
        .with_jokers(2)
        .with_exclusion(["Ace"], ["Spades"])
        .build();

    assert_eq!(cards.len(), 51 + 2);
    assert!(!cards.contains(&Card::new(Suit::Spade, Rank::Ace)));
    assert!(cards.contains(&Card::new(Suit::Heart, Rank::Ace)));
    assert!(cards.contains(&Card::new(Suit::Spade, Rank::King)));
}

#[test]
fn intersection_mode_keeps_jokers() {
    let mut cards = DeckOptions::default().with_jokers(2).build();
    exclude(
        &mut cards,
        &strings(&["Joker"]),
        &strings(&["BlackJoker", "RedJoker"]),
    );
    assert_eq!(cards.len(), DECK_SIZE + 2);
}

#[test]
fn single_list_modes_can_remove_jokers() {
    let mut by_face = DeckOptions::default().with_jokers(2).build();
    exclude(&mut by_face, &strings(&["Joker"]), &[]);
    assert_eq!(by_face, standard_deck());

    let mut by_suit = DeckOptions::default().with_jokers(2).build();
    exclude(&mut by_suit, &[], &strings(&["RedJoker"]));
    assert_eq!(by_suit.len(), DECK_SIZE + 1);
}

#[test]
fn empty_or_unknown_exclusions_remove_nothing() {
    let mut cards = standard_deck();
    exclude(&mut cards, &[], &[]);
    assert_eq!(cards.len(), DECK_SIZE);

    exclude(&mut cards, &strings(&["Eleven"]), &[]);
    assert_eq!(cards.len(), DECK_SIZE);

    // Both lists given, so only the (empty) intersection is removed.
    exclude(&mut cards, &strings(&["nope"]), &strings(&["Hearts"]));
    assert_eq!(cards.len(), DECK_SIZE);
}

#[test]
fn exclusion_runs_after_duplication() {
    let cards = DeckOptions::default()
        .with_additional_decks(2)
        .with_exclusion(["K"], ["Diamond"])
        .build();
    assert_eq!(cards.len(), 3 * 51);
}

#[test]
fn filter_out_predicates() {
    let cards = DeckOptions::default()
        .with_filter_out(|card| card.rank == Rank::Two || card.rank == Rank::Three)
        .build();
    assert_eq!(cards.len(), 44);

    let mut cards = DeckOptions::default().with_jokers(2).build();
    filter_out(&mut cards, Card::is_joker);
    assert_eq!(cards.len(), DECK_SIZE);
}

#[test]
fn options_builder_sets_fields() {
    let options = DeckOptions::default()
        .with_shuffle(true)
        .with_seed(9)
        .with_jokers(4)
        .with_additional_decks(3)
        .with_exclusion(["A"], ["Clubs"])
        .with_filter_out(Card::is_joker);

    assert!(options.shuffle);
    assert_eq!(options.seed, Some(9));
    assert_eq!(options.jokers, 4);
    assert_eq!(options.additional_decks, 3);
    assert_eq!(options.exclude_faces, ["A"]);
    assert_eq!(options.exclude_suits, ["Clubs"]);
    assert_eq!(options.filters.len(), 1);
    assert!(matches!(options.sort, SortMode::Unsorted));
}

#[test]
fn build_under_debug_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    let cards = tracing::subscriber::with_default(subscriber, || {
        DeckOptions::default()
            .with_additional_decks(1)
            .with_jokers(2)
            .with_exclusion(["Q"], ["Hearts"])
            .build()
    });
    assert_eq!(cards.len(), 2 * DECK_SIZE - 2 + 2);
}
