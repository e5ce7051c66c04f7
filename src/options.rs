//! Deck and dump configuration options.

use crate::deck::BACK;

/// Configuration options for building a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_back("#")
///     .with_knights(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckOptions {
    /// Back glyph stamped on every card of the built deck.
    pub back: &'static str,
    /// Whether the source set includes the four knights.
    pub knights: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            back: BACK,
            knights: false,
        }
    }
}

impl DeckOptions {
    /// Sets the back glyph.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_back("*");
    /// assert_eq!(options.back, "*");
    /// ```
    #[must_use]
    pub const fn with_back(mut self, back: &'static str) -> Self {
        self.back = back;
        self
    }

    /// Sets whether knights are part of the source set.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_knights(true);
    /// assert!(options.knights);
    /// ```
    #[must_use]
    pub const fn with_knights(mut self, knights: bool) -> Self {
        self.knights = knights;
        self
    }
}

/// Layout options for dumping a deck.
///
/// Each card is written as `gutter` spaces followed by its display string
/// right-justified in `cell_width` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpOptions {
    /// Number of cards per printed line. Must be greater than zero.
    pub cards_per_row: usize,
    /// Minimum width of a card cell.
    pub cell_width: usize,
    /// Spaces written before each cell.
    pub gutter: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            cards_per_row: 13,
            cell_width: 3,
            gutter: 2,
        }
    }
}

impl DumpOptions {
    /// Sets the number of cards per row.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DumpOptions;
    ///
    /// let options = DumpOptions::default().with_cards_per_row(4);
    /// assert_eq!(options.cards_per_row, 4);
    /// ```
    #[must_use]
    pub const fn with_cards_per_row(mut self, cards_per_row: usize) -> Self {
        self.cards_per_row = cards_per_row;
        self
    }

    /// Sets the minimum cell width.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DumpOptions;
    ///
    /// let options = DumpOptions::default().with_cell_width(4);
    /// assert_eq!(options.cell_width, 4);
    /// ```
    #[must_use]
    pub const fn with_cell_width(mut self, cell_width: usize) -> Self {
        self.cell_width = cell_width;
        self
    }

    /// Sets the number of spaces before each cell.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DumpOptions;
    ///
    /// let options = DumpOptions::default().with_gutter(1);
    /// assert_eq!(options.gutter, 1);
    /// ```
    #[must_use]
    pub const fn with_gutter(mut self, gutter: usize) -> Self {
        self.gutter = gutter;
        self
    }
}
