//! Canonical card sets and the [`Deck`] type.

use core::fmt;
use core::slice;

use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};
use crate::error::DumpError;
use crate::options::{DeckOptions, DumpOptions};

/// Number of cards in the canonical deck.
pub const FULL_DECK_SIZE: usize = 54;

/// Number of cards in the canonical deck extended with knights.
pub const KNIGHT_DECK_SIZE: usize = 58;

/// Default back glyph for built decks.
pub const BACK: &str = "🂠";

/// Suits in the order they are emitted for each rank.
const SUIT_ORDER: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

/// Face glyphs indexed by `rank - 1`, columns follow [`SUIT_ORDER`].
const FACES: [[&str; 4]; 14] = [
    ["🂡", "🂱", "🃁", "🃑"],
    ["🂢", "🂲", "🃂", "🃒"],
    ["🂣", "🂳", "🃃", "🃓"],
    ["🂤", "🂴", "🃄", "🃔"],
    ["🂥", "🂵", "🃅", "🃕"],
    ["🂦", "🂶", "🃆", "🃖"],
    ["🂧", "🂷", "🃇", "🃗"],
    ["🂨", "🂸", "🃈", "🃘"],
    ["🂩", "🂹", "🃉", "🃙"],
    ["🂪", "🂺", "🃊", "🃚"],
    ["🂫", "🂻", "🃋", "🃛"],
    ["🂬", "🂼", "🃌", "🃜"],
    ["🂭", "🂽", "🃍", "🃝"],
    ["🂮", "🂾", "🃎", "🃞"],
];

/// Red and white joker faces.
const JOKER_FACES: [&str; 2] = ["🂿", "🃟"];

fn generate(knights: bool) -> Vec<Card> {
    let capacity = if knights {
        KNIGHT_DECK_SIZE
    } else {
        FULL_DECK_SIZE
    };
    let mut cards = Vec::with_capacity(capacity);

    for rank in Rank::ALL {
        if rank == Rank::Joker || (rank == Rank::Knight && !knights) {
            continue;
        }

        let faces = FACES[rank as usize - 1];
        for (suit, face) in SUIT_ORDER.into_iter().zip(faces) {
            cards.push(Card::new(rank, suit, face));
        }
    }

    cards.extend(JOKER_FACES.map(Card::joker));
    cards
}

/// Returns a fresh copy of the canonical 54-card deck.
///
/// Cards come rank by rank from ace to king, each rank in spades, hearts,
/// diamonds, clubs order, followed by the red and white jokers. Knights are
/// not included and no back glyph is set.
///
/// ```
/// use deckrs::{FULL_DECK_SIZE, full_deck};
///
/// let cards = full_deck();
/// assert_eq!(cards.len(), FULL_DECK_SIZE);
/// assert_eq!(cards[0].to_string(), "A♤");
/// ```
#[must_use]
pub fn full_deck() -> Vec<Card> {
    generate(false)
}

/// Returns the canonical deck with the four knights between jacks and queens.
#[must_use]
pub fn full_deck_with_knights() -> Vec<Card> {
    generate(true)
}

/// An ordered deck of cards sharing a single back glyph.
///
/// A deck is built by filtering the canonical set with a predicate. Its order
/// is the canonical order of the accepted cards until [`Deck::shuffle`] is
/// called.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a deck from the canonical cards accepted by `accept`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let nobles = Deck::new(|card| card.is_noble());
    /// assert_eq!(nobles.len(), 16);
    /// assert!(nobles.iter().all(|card| card.back() == Some(deckrs::BACK)));
    /// ```
    #[must_use]
    pub fn new<P>(accept: P) -> Self
    where
        P: FnMut(&Card) -> bool,
    {
        Self::with_options(&DeckOptions::default(), accept)
    }

    /// Builds a deck with the given options.
    ///
    /// Backs are stamped only after filtering, so `accept` always sees cards
    /// without a back glyph.
    #[must_use]
    pub fn with_options<P>(options: &DeckOptions, mut accept: P) -> Self
    where
        P: FnMut(&Card) -> bool,
    {
        let mut cards: Vec<Card> = generate(options.knights)
            .into_iter()
            .filter(|card| accept(card))
            .collect();

        for card in &mut cards {
            card.set_back(options.back);
        }

        debug!("built deck of {} cards with back {}", cards.len(), options.back);
        Self { cards }
    }

    /// Shuffles the deck in place with a uniform Fisher-Yates permutation.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut deck = Deck::new(|_| true);
    /// deck.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    /// assert_eq!(deck.len(), 54);
    /// ```
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        trace!("shuffling {} cards", self.cards.len());
        self.cards.shuffle(rng);
    }

    /// Writes the deck to `w`, `cards_per_row` cards per line.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards_per_row` is zero or the sink fails.
    pub fn dump<W: fmt::Write + ?Sized>(
        &self,
        w: &mut W,
        cards_per_row: usize,
    ) -> Result<(), DumpError> {
        self.dump_with(w, &DumpOptions::default().with_cards_per_row(cards_per_row))
    }

    /// Writes the deck to `w` using the given layout.
    ///
    /// Every line, including a final partial one, ends with a newline. An
    /// empty deck writes nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DumpOptions, Rank};
    ///
    /// let aces = Deck::new(|card| card.rank() == Rank::Ace);
    /// let mut out = String::new();
    /// aces.dump_with(&mut out, &DumpOptions::default().with_cards_per_row(3)).unwrap();
    /// assert_eq!(out, "   A♤   A♡   A♢\n   A♧\n");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::ZeroCardsPerRow`] if `options.cards_per_row` is
    /// zero, before anything is written, or [`DumpError::Format`] if the sink
    /// fails.
    pub fn dump_with<W: fmt::Write + ?Sized>(
        &self,
        w: &mut W,
        options: &DumpOptions,
    ) -> Result<(), DumpError> {
        if options.cards_per_row == 0 {
            return Err(DumpError::ZeroCardsPerRow);
        }

        for row in self.cards.chunks(options.cards_per_row) {
            for card in row {
                write!(
                    w,
                    "{:gutter$}{card:>width$}",
                    "",
                    gutter = options.gutter,
                    width = options.cell_width
                )?;
            }
            w.write_char('\n')?;
        }

        Ok(())
    }

    /// Writes the deck to an I/O stream using the given layout.
    ///
    /// # Errors
    ///
    /// Returns an error if `options.cards_per_row` is zero or the stream
    /// fails.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn dump_io<W: std::io::Write + ?Sized>(
        &self,
        w: &mut W,
        options: &DumpOptions,
    ) -> Result<(), DumpError> {
        let mut out = alloc::string::String::new();
        self.dump_with(&mut out, options)?;
        w.write_all(out.as_bytes())
            .map_err(|err| DumpError::Io(err.kind()))
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards in deck order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the back glyph shared by the cards, `None` if the deck is empty.
    #[must_use]
    pub fn back(&self) -> Option<&'static str> {
        self.cards.first().and_then(Card::back)
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
