//! A seeded random source that can be shared between threads.

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::sync::Mutex;

/// Shuffles decks from a single seeded generator.
///
/// The generator sits behind a mutex, so one `Shuffler` can be shared (for
/// example in an `Arc`) by threads shuffling different decks. Two shufflers
/// created with the same seed produce the same sequence of permutations.
///
/// ```
/// use deckrs::{Deck, Shuffler};
///
/// let a = Shuffler::new(42);
/// let b = Shuffler::new(42);
///
/// let mut left = Deck::new(|_| true);
/// let mut right = left.clone();
/// a.shuffle(&mut left);
/// b.shuffle(&mut right);
/// assert_eq!(left, right);
/// ```
#[derive(Debug)]
pub struct Shuffler {
    rng: Mutex<ChaCha8Rng>,
}

impl Shuffler {
    /// Creates a shuffler with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        debug!("creating shuffler with seed {seed}");
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a shuffler from an existing generator.
    #[must_use]
    pub const fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Shuffles `deck` in place.
    pub fn shuffle(&self, deck: &mut Deck) {
        deck.shuffle(&mut *self.rng.lock());
    }

    /// Shuffles `deck` and returns it.
    #[must_use]
    pub fn shuffled(&self, mut deck: Deck) -> Deck {
        self.shuffle(&mut deck);
        deck
    }

    /// Restarts the generator from `seed`.
    pub fn reseed(&self, seed: u64) {
        debug!("reseeding shuffler with seed {seed}");
        *self.rng.lock() = ChaCha8Rng::seed_from_u64(seed);
    }
}
