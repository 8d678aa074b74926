//! Card types.

use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::ordering::absolute_rank;
use crate::rank::Rank;
use crate::render::render_hand;
use crate::suit::Suit;

/// A playing card.
///
/// Equality and hashing consider the suit and rank only. The `hidden` flag
/// asks the renderer to draw the card face down.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    /// Whether the card is rendered face down.
    pub hidden: bool,
}

impl Card {
    /// Creates a new face-up card.
    ///
    /// Note: This function does not check that the suit and rank agree. A
    /// joker suit with a standard rank still renders as a joker.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            hidden: false,
        }
    }

    /// Creates a face-up joker of the given joker suit.
    #[must_use]
    pub const fn joker(suit: Suit) -> Self {
        Self::new(suit, Rank::Joker)
    }

    /// Returns the same card turned face down.
    #[must_use]
    pub const fn face_down(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Returns the same card turned face up.
    #[must_use]
    pub const fn face_up(mut self) -> Self {
        self.hidden = false;
        self
    }

    /// Returns `true` if the card belongs to one of the joker suits.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.suit.is_joker()
    }

    /// Returns the collision-free ordering key of the card.
    #[must_use]
    pub const fn absolute_rank(&self) -> u32 {
        absolute_rank(self)
    }

    /// Renders the card as a six-line ASCII block.
    ///
    /// Same as calling [`render_hand`] with this card alone.
    #[must_use]
    pub fn render(&self) -> String {
        render_hand(core::slice::from_ref(self))
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Suit::BlackJoker => f.write_str("Black Joker"),
            Suit::RedJoker => f.write_str("Red Joker"),
            suit => write!(f, "{} of {}", self.rank, suit.glyph()),
        }
    }
}

/// Number of cards per standard deck.
pub const DECK_SIZE: usize = Suit::STANDARD.len() * Rank::STANDARD.len();
