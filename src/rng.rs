//! Process-wide shuffle generator.

use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

static SHARED: LazyLock<Mutex<ChaCha8Rng>> =
    LazyLock::new(|| Mutex::new(ChaCha8Rng::from_rng(&mut rand::rng())));

/// Locks the shared generator.
///
/// A panic while the lock was held cannot leave the generator in an invalid
/// state, so poisoning is ignored.
fn lock() -> MutexGuard<'static, ChaCha8Rng> {
    SHARED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shuffles cards in place with the process-wide generator.
pub fn shuffle_shared(cards: &mut [Card]) {
    cards.shuffle(&mut *lock());
}

/// Shuffles cards in place with a generator seeded from `seed`.
///
/// The same seed and input always produce the same order.
pub fn shuffle_seeded(cards: &mut [Card], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    cards.shuffle(&mut rng);
}
