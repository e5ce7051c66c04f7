//! A playing-card deck factory and card model with optional `no_std` support.
//!
//! The crate provides the canonical 54-card set, a [`Deck`] type built by
//! filtering that set with a predicate, shuffling with a caller-supplied
//! random source, and a fixed-width multi-column dump.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, Shuffler};
//!
//! let mut commons = Deck::new(|card| card.is_common());
//! assert_eq!(commons.len(), 32);
//!
//! Shuffler::new(42).shuffle(&mut commons);
//!
//! let mut out = String::new();
//! commons.dump(&mut out, 8).unwrap();
//! assert_eq!(out.lines().count(), 4);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod shuffler;
mod sync;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use deck::{BACK, Deck, FULL_DECK_SIZE, KNIGHT_DECK_SIZE, full_deck, full_deck_with_knights};
pub use error::{DumpError, InvalidRank, InvalidSuit};
pub use options::{DeckOptions, DumpOptions};
pub use shuffler::Shuffler;
