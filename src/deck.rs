//! Deck construction.
//!
//! [`build`] interprets a [`DeckOptions`] in a fixed stage order:
//!
//! 1. standard deck
//! 2. duplication (`additional_decks + 1` copies)
//! 3. jokers
//! 4. sort
//! 5. shuffle
//! 6. exclusion lists, then filter predicates
//!
//! Each stage is also exposed as a standalone function.

use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE};
use crate::options::{CardFilter, DeckOptions, RankComparator, SortMode};
use crate::ordering::default_sort;
use crate::rank::Rank;
use crate::rng::{shuffle_seeded, shuffle_shared};
use crate::suit::Suit;

/// Builds a deck from the given options.
///
/// Construction is total: every combination of options yields a deck.
///
/// # Example
///
/// ```
/// use deckrs::{DeckOptions, build};
///
/// let options = DeckOptions::default().with_exclusion(["2", "3"], std::iter::empty::<&str>());
/// let cards = build(options);
/// assert_eq!(cards.len(), 44);
/// ```
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(
        decks = options.additional_decks.saturating_add(1),
        jokers = options.jokers,
        shuffle = options.shuffle,
    )
)]
#[must_use]
pub fn build(options: DeckOptions) -> Vec<Card> {
    let mut cards = duplicate(&standard_deck(), options.additional_decks);
    trace!(len = cards.len(), "duplicated standard deck");

    append_jokers(&mut cards, options.jokers);

    match options.sort {
        SortMode::Unsorted => {}
        SortMode::Default => default_sort(&mut cards),
        SortMode::Custom(compare) => sort_by_rank(&mut cards, compare),
    }

    if options.shuffle {
        match options.seed {
            Some(seed) => shuffle_seeded(&mut cards, seed),
            None => shuffle_shared(&mut cards),
        }
    }

    exclude(&mut cards, &options.exclude_faces, &options.exclude_suits);
    for filter in &options.filters {
        filter_out(&mut cards, *filter);
    }

    debug!(len = cards.len(), "deck built");
    cards
}

/// Returns one face-up card for every standard suit and rank, suits in
/// catalog order and ranks ascending within each suit.
///
/// ```
/// use deckrs::{DECK_SIZE, deck::standard_deck};
///
/// assert_eq!(standard_deck().len(), DECK_SIZE);
/// ```
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::STANDARD {
        for rank in Rank::STANDARD {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// Returns `additional + 1` consecutive copies of `cards`.
#[must_use]
pub fn duplicate(cards: &[Card], additional: usize) -> Vec<Card> {
    cards.repeat(additional.saturating_add(1))
}

/// Concatenates several decks into one.
///
/// ```
/// use deckrs::deck::{from_decks, standard_deck};
///
/// let cards = from_decks([standard_deck(), standard_deck()]);
/// assert_eq!(cards.len(), 104);
/// ```
#[must_use]
pub fn from_decks<I>(decks: I) -> Vec<Card>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = Card>,
{
    decks.into_iter().flatten().collect()
}

/// Appends `count` jokers, alternating black and red, black first.
pub fn append_jokers(cards: &mut Vec<Card>, count: usize) {
    cards.extend(
        Suit::JOKERS
            .into_iter()
            .cycle()
            .take(count)
            .map(Card::joker),
    );
    trace!(count, "appended jokers");
}

/// Returns the cards followed by one black and one red joker.
#[must_use]
pub fn add_jokers(mut cards: Vec<Card>) -> Vec<Card> {
    append_jokers(&mut cards, Suit::JOKERS.len());
    cards
}

/// Sorts cards by rank with a caller-supplied comparator.
///
/// The sort is stable; suits are ignored.
pub fn sort_by_rank(cards: &mut [Card], compare: RankComparator) {
    cards.sort_by(|a, b| compare(a.rank, b.rank));
}

/// Shuffles cards in place with the process-wide generator.
pub fn shuffle(cards: &mut [Card]) {
    shuffle_shared(cards);
}

/// Which cards the exclusion lists remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exclusion {
    None,
    Faces,
    Suits,
    FacesOfSuits,
}

impl Exclusion {
    const fn from_lists(faces: &[String], suits: &[String]) -> Self {
        match (faces.is_empty(), suits.is_empty()) {
            (true, true) => Self::None,
            (false, true) => Self::Faces,
            (true, false) => Self::Suits,
            (false, false) => Self::FacesOfSuits,
        }
    }
}

/// Removes cards named by the exclusion lists.
///
/// - faces only: every card whose rank is listed, in any suit
/// - suits only: every card whose suit is listed
/// - both: cards whose rank and suit are both listed; jokers always survive
/// - neither: nothing
///
/// Entries naming no rank or suit match nothing.
pub fn exclude(cards: &mut Vec<Card>, faces: &[String], suits: &[String]) {
    let face_listed = |card: &Card| faces.iter().any(|face| card.rank.is_named(face));
    let suit_listed = |card: &Card| suits.iter().any(|suit| card.suit.is_named(suit));

    let mode = Exclusion::from_lists(faces, suits);
    let before = cards.len();
    match mode {
        Exclusion::None => return,
        Exclusion::Faces => cards.retain(|card| !face_listed(card)),
        Exclusion::Suits => cards.retain(|card| !suit_listed(card)),
        Exclusion::FacesOfSuits => {
            cards.retain(|card| card.is_joker() || !(face_listed(card) && suit_listed(card)));
        }
    }
    trace!(?mode, removed = before - cards.len(), "applied exclusion");
}

/// Removes every card for which `filter` returns `true`.
pub fn filter_out(cards: &mut Vec<Card>, filter: CardFilter) {
    cards.retain(|card| !filter(card));
}
