//! Card ranks.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseRankError;

/// The rank of a card within its suit.
///
/// Discriminants are the rank ordinals used by the ordering key. `Joker` is
/// never part of the standard sequence and sorts below every standard rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// The joker pseudo-rank.
    Joker = 0,
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// The standard ranks in catalog order.
    pub const STANDARD: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Lowest standard rank.
    pub const MIN: Self = Self::Ace;
    /// Highest standard rank.
    pub const MAX: Self = Self::King;

    /// Returns the rank ordinal.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the short face label.
    ///
    /// ```
    /// use deckrs::Rank;
    ///
    /// assert_eq!(Rank::Ace.single(), "A");
    /// assert_eq!(Rank::Ten.single(), "10");
    /// assert_eq!(Rank::Queen.single(), "Q");
    /// ```
    #[must_use]
    pub const fn single(self) -> &'static str {
        match self {
            Self::Joker => "Joker",
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Returns the full rank name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Joker => "Joker",
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Returns `true` if `label` names this rank, either by its short label
    /// or by its full name. Case is ignored.
    #[must_use]
    pub fn is_named(self, label: &str) -> bool {
        label.parse::<Self>() == Ok(self)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        core::iter::once(Self::Joker)
            .chain(Self::STANDARD)
            .find(|rank| {
                rank.single().eq_ignore_ascii_case(s) || rank.name().eq_ignore_ascii_case(s)
            })
            .ok_or(ParseRankError)
    }
}
