//! Card suits and their ASCII-art templates.

use core::fmt;
use core::str::FromStr;

use crossterm::style::Color;

use crate::error::ParseSuitError;

/// Marker for the top-left rank slot in a suit template (left-aligned).
pub(crate) const TOP_LEFT_SLOT: &str = "<<";
/// Marker for the bottom-right rank slot in a suit template (right-aligned).
pub(crate) const BOTTOM_RIGHT_SLOT: &str = ">>";

/// Number of lines in every card glyph.
pub const GLYPH_HEIGHT: usize = 6;
/// Visible width of every card glyph line.
pub const GLYPH_WIDTH: usize = 10;

/// A six-line ASCII-art card template.
pub type AsciiTemplate = [&'static str; GLYPH_HEIGHT];

/// Display color of a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuitColor {
    /// White (the terminal's normal white, not the bright variant).
    White,
    /// Bright red.
    BrightRed,
}

impl SuitColor {
    /// Returns the terminal color used to paint a glyph of this color.
    #[must_use]
    pub const fn terminal_color(self) -> Color {
        match self {
            Self::White => Color::Grey,
            Self::BrightRed => Color::Red,
        }
    }
}

/// Card suit.
///
/// The four standard suits plus two joker suits which only carry jokers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Black joker.
    BlackJoker,
    /// Red joker.
    RedJoker,
}

const SPADE_TEMPLATE: AsciiTemplate = [
    r"┌────────┐",
    r"│<< .    │",
    r"│  / \   │",
    r"│ (_,_)  │",
    r"│   I  >>│",
    r"└────────┘",
];

const DIAMOND_TEMPLATE: AsciiTemplate = [
    r"┌────────┐",
    r"│<< /\   │",
    r"│  /  \  │",
    r"│  \  /  │",
    r"│   \/ >>│",
    r"└────────┘",
];

const CLUB_TEMPLATE: AsciiTemplate = [
    r"┌────────┐",
    r"│<< _    │",
    r"│  ( )   │",
    r"│ (_x_)  │",
    r"│   Y  >>│",
    r"└────────┘",
];

const HEART_TEMPLATE: AsciiTemplate = [
    r"┌────────┐",
    r"│<<_  _  │",
    r"│ ( \/ ) │",
    r"│  \  /  │",
    r"│   \/ >>│",
    r"└────────┘",
];

const BLACK_JOKER_TEMPLATE: AsciiTemplate = [
    r"┌────────┐",
    r"│* \||/ K│",
    r"│J /~~\ O│",
    r"│O( o o)J│",
    r"│K \ v/ *│",
    r"└────────┘",
];

const RED_JOKER_TEMPLATE: AsciiTemplate = [
    r"┌────────┐",
    r"│+ \||/ K│",
    r"│J /~~\ O│",
    r"│O( o o)J│",
    r"│K \ v/ +│",
    r"└────────┘",
];

impl Suit {
    /// The standard suits in catalog order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// The joker suits, black first.
    pub const JOKERS: [Self; 2] = [Self::BlackJoker, Self::RedJoker];

    /// Returns the numeric suit value (1 through 6).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Spade => 1,
            Self::Diamond => 2,
            Self::Club => 3,
            Self::Heart => 4,
            Self::BlackJoker => 5,
            Self::RedJoker => 6,
        }
    }

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::BlackJoker => "BlackJoker",
            Self::RedJoker => "RedJoker",
        }
    }

    /// Returns the display glyph.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Spade => "♠",
            Self::Diamond => "♦",
            Self::Club => "♣",
            Self::Heart => "♥",
            Self::BlackJoker | Self::RedJoker => "🃏",
        }
    }

    /// Returns the color used when rendering cards of this suit.
    #[must_use]
    pub const fn color(self) -> SuitColor {
        match self {
            Self::Spade | Self::Club | Self::BlackJoker => SuitColor::White,
            Self::Diamond | Self::Heart | Self::RedJoker => SuitColor::BrightRed,
        }
    }

    /// Returns `true` if cards of this suit carry a rank.
    ///
    /// Only the joker suits are rank-less.
    #[must_use]
    pub const fn has_rank(self) -> bool {
        !self.is_joker()
    }

    /// Returns `true` for the two joker suits.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::BlackJoker | Self::RedJoker)
    }

    /// Returns the suit's six-line template.
    ///
    /// Templates of rank-bearing suits contain two 2-column slots, top-left
    /// and bottom-right, that the renderer fills with the rank label.
    #[must_use]
    pub const fn ascii_template(self) -> &'static AsciiTemplate {
        match self {
            Self::Spade => &SPADE_TEMPLATE,
            Self::Diamond => &DIAMOND_TEMPLATE,
            Self::Club => &CLUB_TEMPLATE,
            Self::Heart => &HEART_TEMPLATE,
            Self::BlackJoker => &BLACK_JOKER_TEMPLATE,
            Self::RedJoker => &RED_JOKER_TEMPLATE,
        }
    }

    /// Returns `true` if `name` names this suit.
    ///
    /// Accepts the singular or plural name in any case, or the glyph of a
    /// standard suit.
    #[must_use]
    pub fn is_named(self, name: &str) -> bool {
        name.parse::<Self>() == Ok(self)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let singular = s
            .strip_suffix('s')
            .or_else(|| s.strip_suffix('S'))
            .unwrap_or(s);

        Self::STANDARD
            .into_iter()
            .chain(Self::JOKERS)
            .find(|suit| {
                suit.name().eq_ignore_ascii_case(s)
                    || suit.name().eq_ignore_ascii_case(singular)
                    || (!suit.is_joker() && suit.glyph() == s)
            })
            .ok_or(ParseSuitError)
    }
}
