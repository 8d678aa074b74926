//! Collision-free ordering keys across suits.
//!
//! The key of a card is `suit.value() * coefficient() + rank.ordinal()`. The
//! coefficient is a power of ten wider than any rank ordinal, so the suit and
//! the rank occupy disjoint decimal digits of the key.

use crate::card::Card;
use crate::error::OrderingError;
use crate::rank::Rank;

const COEFFICIENT: u32 = match compute_coefficient(Rank::MAX.ordinal() as u32) {
    Ok(coefficient) => coefficient,
    Err(_) => panic!("rank catalog produces no ordering coefficient"),
};

/// Computes the smallest power of ten that has one more digit than
/// `max_rank * 10`, i.e. `10^digits(max_rank)`.
///
/// # Errors
///
/// Returns [`OrderingError::CoefficientOverflow`] if the result does not fit
/// in a `u32`.
///
/// # Example
///
/// ```
/// use deckrs::ordering::compute_coefficient;
///
/// assert_eq!(compute_coefficient(13), Ok(100));
/// assert_eq!(compute_coefficient(99), Ok(100));
/// assert_eq!(compute_coefficient(1), Ok(10));
/// ```
pub const fn compute_coefficient(max_rank: u32) -> Result<u32, OrderingError> {
    let digits = match max_rank.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    };
    match 10_u32.checked_pow(digits) {
        Some(coefficient) => Ok(coefficient),
        None => Err(OrderingError::CoefficientOverflow { max_rank }),
    }
}

/// Returns the coefficient derived from the highest standard rank.
#[must_use]
pub const fn coefficient() -> u32 {
    COEFFICIENT
}

/// Returns the absolute ordering key of a card.
///
/// Suit is the primary key and rank the secondary key.
#[must_use]
pub const fn absolute_rank(card: &Card) -> u32 {
    card.suit.value() as u32 * COEFFICIENT + card.rank.ordinal() as u32
}

/// Sorts cards ascending by [`absolute_rank`].
///
/// The sort is stable, so equal cards keep their relative order.
pub fn default_sort(cards: &mut [Card]) {
    cards.sort_by_key(absolute_rank);
}
