//! Playing-card decks with composable construction options and ASCII-art
//! rendering.
//!
//! The crate provides a canonical [`Card`]/[`Suit`]/[`Rank`] model, a
//! [`DeckOptions`] builder that produces card sequences through a fixed
//! pipeline (duplication, jokers, sorting, shuffling, exclusion), and a
//! renderer that draws any number of cards side by side with per-suit colors.
//!
//! # Example
//!
//! ```
//! use deckrs::{DeckOptions, render_hand};
//!
//! let mut cards = DeckOptions::default()
//!     .with_jokers(2)
//!     .with_default_sort(true)
//!     .build();
//! assert_eq!(cards.len(), 54);
//!
//! cards[1].hidden = true;
//! let text = render_hand(&cards[..3]);
//! assert_eq!(text.lines().count(), 6);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod ordering;
pub mod rank;
pub mod render;
mod rng;
pub mod suit;

// Re-export main types
pub use card::{Card, DECK_SIZE};
pub use deck::build;
pub use error::{OrderingError, ParseRankError, ParseSuitError};
pub use options::{CardFilter, DeckOptions, RankComparator, SortMode};
pub use ordering::{absolute_rank, coefficient};
pub use rank::Rank;
pub use render::{render_glyph, render_hand};
pub use suit::{Suit, SuitColor};
