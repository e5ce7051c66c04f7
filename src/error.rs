//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur while dumping a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DumpError {
    /// Rows must hold at least one card.
    #[error("cards per row must be greater than zero")]
    ZeroCardsPerRow,
    /// The output sink rejected a write.
    #[error("failed to write to the output sink")]
    Format(#[from] core::fmt::Error),
    /// The output stream failed.
    #[cfg(feature = "std")]
    #[error("failed to write to the output stream: {0}")]
    Io(std::io::ErrorKind),
}

/// A raw value that does not name a [`Rank`](crate::Rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid rank value {0}")]
pub struct InvalidRank(pub u8);

/// A raw value that does not name a [`Suit`](crate::Suit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid suit value {0}")]
pub struct InvalidSuit(pub u8);
