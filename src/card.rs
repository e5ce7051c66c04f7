//! Card types, display tables, and rank classification.

use core::fmt;

use crate::error::{InvalidRank, InvalidSuit};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs = 0,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

/// Suit glyphs, indexed by discriminant.
const SUIT_GLYPHS: [&str; 4] = ["♧", "♢", "♡", "♤"];

impl Suit {
    /// All suits in discriminant order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the display glyph of the suit.
    ///
    /// ```
    /// use deckrs::Suit;
    ///
    /// assert_eq!(Suit::Spades.glyph(), "♤");
    /// ```
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        SUIT_GLYPHS[self as usize]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.glyph())
    }
}

impl TryFrom<u8> for Suit {
    type Error = InvalidSuit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(InvalidSuit(value))
    }
}

/// Card rank.
///
/// The ordering is `Joker < Ace < Two < ... < Jack < Knight < Queen < King`.
/// It is only meaningful for classification, not for comparing hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Joker, carries no suit.
    Joker = 0,
    /// Ace.
    Ace,
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
    /// Knight, found in some regional decks.
    Knight,
    /// Queen.
    Queen,
    /// King.
    King,
}

/// Rank short codes, indexed by discriminant.
///
/// `Eight` shares the code `"9"` with `Nine`.
const RANK_CODES: [&str; 15] = [
    "j", "A", "2", "3", "4", "5", "6", "7", "9", "9", "10", "J", "k", "Q", "K",
];

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 15] = [
        Self::Joker,
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
        Self::Knight,
        Self::Queen,
        Self::King,
    ];

    /// Returns the short code used when displaying a card.
    ///
    /// ```
    /// use deckrs::Rank;
    ///
    /// assert_eq!(Rank::Ace.code(), "A");
    /// assert_eq!(Rank::Ten.code(), "10");
    /// ```
    #[must_use]
    pub const fn code(self) -> &'static str {
        RANK_CODES[self as usize]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl TryFrom<u8> for Rank {
    type Error = InvalidRank;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(InvalidRank(value))
    }
}

/// A playing card.
///
/// Rank and suit are fixed when the card is created. The back glyph is unset
/// until the card is placed in a [`Deck`](crate::Deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Option<Suit>,
    face: &'static str,
    back: Option<&'static str>,
}

impl Card {
    /// Creates a suited card with the given face glyph.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit, face: &'static str) -> Self {
        Self {
            rank,
            suit: Some(suit),
            face,
            back: None,
        }
    }

    /// Creates a joker with the given face glyph.
    #[must_use]
    pub const fn joker(face: &'static str) -> Self {
        Self {
            rank: Rank::Joker,
            suit: None,
            face,
            back: None,
        }
    }

    /// The card rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// The card suit, `None` for jokers.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// The face glyph.
    #[must_use]
    pub const fn face(&self) -> &'static str {
        self.face
    }

    /// The back glyph, `None` if the card is not part of a built deck.
    #[must_use]
    pub const fn back(&self) -> Option<&'static str> {
        self.back
    }

    pub(crate) const fn set_back(&mut self, back: &'static str) {
        self.back = Some(back);
    }

    /// Returns `true` for aces.
    #[must_use]
    pub const fn is_banner(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    /// Returns `true` for ranks two through nine.
    #[must_use]
    pub const fn is_common(&self) -> bool {
        let rank = self.rank as u8;
        rank >= Rank::Two as u8 && rank <= Rank::Nine as u8
    }

    /// Returns `true` for tens and court cards.
    ///
    /// Knights are not nobles, nor are they common or banner cards.
    #[must_use]
    pub const fn is_noble(&self) -> bool {
        matches!(self.rank, Rank::Ten | Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Returns `true` for jokers.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.rank, Rank::Joker)
    }
}

/// Displays the rank code followed by the suit glyph, e.g. `A♤`.
///
/// Jokers have no suit and display as the rank code alone. Width, fill and
/// alignment apply to the whole label.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.rank.code().as_bytes();
        let suit = self.suit.map_or("", Suit::glyph).as_bytes();

        // Longest label is a two byte code plus a three byte glyph.
        let mut buf = [0_u8; 8];
        let len = code.len() + suit.len();
        buf[..code.len()].copy_from_slice(code);
        buf[code.len()..len].copy_from_slice(suit);

        let label = core::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?;
        f.pad(label)
    }
}
