// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Blitz Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use blitz_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "10D".parse().unwrap();
//! assert_eq!(ah.to_string(), "A♥");
//! assert_eq!(td.to_string(), "10♦");
//! ```
//!
//! and a [Deck] type for shuffling, dealing, sampling, and iterating cards in the
//! deck.
//!
//! For example to iterate through all 7 cards hands:
//!
//! ```no_run
//! # use blitz_cards::{Card, Deck, Rank, Suit};
//! // Iterate through all 7 cards hands (133M hands).
//! let mut counter = 0;
//! Deck::default().for_each(7, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 133_784_560);
//! ```
//!
//! to sample 10 random 5-cards hands:
//!
//! ```
//! # use blitz_cards::{Card, Deck, Rank, Suit};
//! let mut counter = 0;
//! Deck::default().sample(&mut rand::rng(), 10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, ParseCardError, Rank, Suit};
