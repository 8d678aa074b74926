//! ASCII-art rendering of cards.

use alloc::string::String;
use alloc::vec::Vec;

use crossterm::style::{Colored, Stylize, style};

use crate::card::Card;
use crate::rank::Rank;
use crate::suit::{
    AsciiTemplate, BOTTOM_RIGHT_SLOT, GLYPH_HEIGHT, GLYPH_WIDTH, Suit, SuitColor, TOP_LEFT_SLOT,
};

/// Template drawn for face-down cards.
pub const CARD_BACK: AsciiTemplate = [
    "┌────────┐",
    "│████████│",
    "│████████│",
    "│████████│",
    "│████████│",
    "└────────┘",
];

/// Rendered lines of a single card.
pub type Glyph = [String; GLYPH_HEIGHT];

/// Renders one card as six uncolored lines, each [`GLYPH_WIDTH`] columns wide.
///
/// Hidden cards show [`CARD_BACK`]. Rank-bearing suits get the rank label in
/// both corners. Jokers use their suit template as is.
///
/// ```
/// use deckrs::{Card, Rank, Suit, render::render_glyph};
///
/// let glyph = render_glyph(&Card::new(Suit::Heart, Rank::Ten));
/// assert_eq!(glyph[1], "│10_  _  │");
/// assert_eq!(glyph[4], "│   \\/ 10│");
/// ```
#[must_use]
pub fn render_glyph(card: &Card) -> Glyph {
    if card.hidden {
        return CARD_BACK.map(String::from);
    }

    if !card.suit.has_rank() {
        return card.suit.ascii_template().map(String::from);
    }

    if card.rank == Rank::Joker {
        // A standard suit cannot hold the joker label; draw the joker of the same color.
        let joker = match card.suit.color() {
            SuitColor::White => Suit::BlackJoker,
            SuitColor::BrightRed => Suit::RedJoker,
        };
        return joker.ascii_template().map(String::from);
    }

    let label = card.rank.single();
    let top_left = format!("{label:<2}");
    let bottom_right = format!("{label:>2}");
    card.suit.ascii_template().map(|line| {
        line.replacen(TOP_LEFT_SLOT, &top_left, 1)
            .replacen(BOTTOM_RIGHT_SLOT, &bottom_right, 1)
    })
}

/// Renders cards side by side as one six-line block.
///
/// Visible cards are painted with their suit color; hidden cards are left
/// uncolored. An empty slice renders as an empty string.
///
/// Coloring follows crossterm's color switch (`NO_COLOR`, or
/// [`crossterm::style::force_color_output`]). While it is off every segment
/// is emitted as plain text.
///
/// ```
/// use deckrs::{Card, Rank, Suit, render::render_hand};
///
/// assert_eq!(render_hand(&[]), "");
///
/// let hidden = Card::new(Suit::Club, Rank::Two).face_down();
/// let text = render_hand(&[hidden, hidden]);
/// assert_eq!(text.lines().count(), 6);
/// assert!(text.lines().all(|line| line.chars().count() == 20));
/// ```
#[must_use]
pub fn render_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return String::new();
    }

    let glyphs: Vec<Glyph> = cards.iter().map(render_glyph).collect();
    let paint = !Colored::ansi_color_disabled_memoized();

    let mut out = String::with_capacity(GLYPH_HEIGHT * (cards.len() * GLYPH_WIDTH * 4 + 1));
    for line in 0..GLYPH_HEIGHT {
        if line > 0 {
            out.push('\n');
        }
        for (card, glyph) in cards.iter().zip(&glyphs) {
            let segment = glyph[line].as_str();
            if paint && !card.hidden {
                let color = card.suit.color().terminal_color();
                out.push_str(&style(segment).with(color).to_string());
            } else {
                out.push_str(segment);
            }
        }
    }

    String::from(out.trim_matches('\n'))
}
