// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Blitz Poker hand evaluator.
//!
//! Texas Hold'em evaluator for 7 cards hands, two hole cards and five board
//! cards. The evaluator returns a [HandValue] with the hand [Category], a
//! [TieBreak] key and the best five cards, values are totally ordered so that
//! two hands can be compared to find the winner:
//!
//! ```
//! # use blitz_eval::*;
//! let board = Card::parse_list("8S 8D 5H 2C 3S").unwrap();
//! let p1 = Hand::new(["8C".parse().unwrap(), "5D".parse().unwrap()], board.clone().try_into().unwrap()).unwrap();
//! let p2 = Hand::new(["AS".parse().unwrap(), "AH".parse().unwrap()], board.try_into().unwrap()).unwrap();
//!
//! let (v1, v2) = (p1.eval(), p2.eval());
//! assert_eq!(v1.category(), Category::FullHouse);
//! assert_eq!(v2.category(), Category::TwoPair);
//! assert_eq!(Winner::between(&v1, &v2), Winner::Player1);
//! ```
//!
//! A [Deal] draws the cards for a two players round from a [Deck]:
//!
//! ```
//! # use blitz_eval::*;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let deal = Deal::from_deck(&mut deck).unwrap();
//! let showdown = deal.showdown();
//! println!("{} vs {}: {}", showdown.player1, showdown.player2, showdown.winner);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Category, HandValue, TieBreak, Winner};

mod hand;
pub use hand::{Deal, Error, Hand, Showdown};

// Reexport cards types.
pub use blitz_cards::{Card, Deck, ParseCardError, Rank, Suit};
