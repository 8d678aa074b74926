//! Deck construction options.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::Card;
use crate::rank::Rank;

/// Caller-supplied rank comparator used by [`SortMode::Custom`].
pub type RankComparator = fn(Rank, Rank) -> Ordering;

/// Caller-supplied predicate; cards for which it returns `true` are removed.
pub type CardFilter = fn(&Card) -> bool;

/// How the built deck is ordered before shuffling.
#[derive(Debug, Clone, Copy, Default)]
pub enum SortMode {
    /// Keep construction order.
    #[default]
    Unsorted,
    /// Ascending by absolute rank (suit first, then rank).
    Default,
    /// By rank only, using the given comparator.
    Custom(RankComparator),
}

/// Configuration for building a deck.
///
/// Use the builder pattern to customize options, then call
/// [`DeckOptions::build`]:
///
/// ```
/// use deckrs::DeckOptions;
///
/// let cards = DeckOptions::default()
///     .with_additional_decks(1)
///     .with_jokers(2)
///     .with_shuffle(true)
///     .build();
/// assert_eq!(cards.len(), 106);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeckOptions {
    /// Sort applied after jokers are added.
    pub sort: SortMode,
    /// Whether the deck is shuffled after sorting.
    pub shuffle: bool,
    /// Seed for a reproducible shuffle. `None` uses the shared generator.
    pub seed: Option<u64>,
    /// Number of jokers appended.
    pub jokers: usize,
    /// Number of extra standard decks included.
    pub additional_decks: usize,
    /// Face labels to exclude (`"A"`, `"Ace"`, `"10"`, ...).
    pub exclude_faces: Vec<String>,
    /// Suit names to exclude (`"Spades"`, `"Heart"`, ...).
    pub exclude_suits: Vec<String>,
    /// Predicates removing matching cards after the exclusion lists.
    pub filters: Vec<CardFilter>,
}

impl DeckOptions {
    /// Sets whether the deck is shuffled.
    ///
    /// Shuffling runs after any sort, so a sorted and shuffled deck ends up
    /// in random order.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle(true);
    /// assert!(options.shuffle);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets the seed used when shuffling.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let a = DeckOptions::default().with_shuffle(true).with_seed(7).build();
    /// let b = DeckOptions::default().with_shuffle(true).with_seed(7).build();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables the default sort.
    ///
    /// Enabling replaces any custom sort. Disabling clears the default sort
    /// and leaves a custom sort in place.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, SortMode};
    ///
    /// let options = DeckOptions::default().with_default_sort(true);
    /// assert!(matches!(options.sort, SortMode::Default));
    /// ```
    #[must_use]
    pub const fn with_default_sort(mut self, enabled: bool) -> Self {
        if enabled {
            self.sort = SortMode::Default;
        } else if matches!(self.sort, SortMode::Default) {
            self.sort = SortMode::Unsorted;
        }
        self
    }

    /// Sorts by rank with a custom comparator, replacing the default sort.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, Rank};
    ///
    /// let cards = DeckOptions::default()
    ///     .with_custom_sort(|a, b| b.cmp(&a))
    ///     .build();
    /// assert_eq!(cards[0].rank, Rank::King);
    /// ```
    #[must_use]
    pub const fn with_custom_sort(mut self, compare: RankComparator) -> Self {
        self.sort = SortMode::Custom(compare);
        self
    }

    /// Sets the number of jokers appended to the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let cards = DeckOptions::default().with_jokers(3).build();
    /// assert_eq!(cards.iter().filter(|card| card.is_joker()).count(), 3);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: usize) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets the number of extra standard decks.
    ///
    /// `n` extra decks yield `n + 1` copies of every standard card.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let cards = DeckOptions::default().with_additional_decks(2).build();
    /// assert_eq!(cards.len(), 52 * 3);
    /// ```
    #[must_use]
    pub const fn with_additional_decks(mut self, decks: usize) -> Self {
        self.additional_decks = decks;
        self
    }

    /// Sets the faces and suits to exclude.
    ///
    /// Faces alone remove those faces in every suit, suits alone remove whole
    /// suits, and both together remove only cards matching a listed face and
    /// a listed suit (jokers are kept in that case).
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let cards = DeckOptions::default()
    ///     .with_exclusion(["Ace"], ["Spades"])
    ///     .build();
    /// assert_eq!(cards.len(), 51);
    /// ```
    #[must_use]
    pub fn with_exclusion<F, S>(mut self, faces: F, suits: S) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        self.exclude_faces = faces.into_iter().map(Into::into).collect();
        self.exclude_suits = suits.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a predicate; cards for which it returns `true` are removed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, Rank};
    ///
    /// let cards = DeckOptions::default()
    ///     .with_filter_out(|card| card.rank <= Rank::Three)
    ///     .build();
    /// assert_eq!(cards.len(), 40);
    /// ```
    #[must_use]
    pub fn with_filter_out(mut self, filter: CardFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Builds the deck. See [`crate::deck::build`].
    #[must_use]
    pub fn build(self) -> Vec<Card> {
        crate::deck::build(self)
    }
}
