// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator counts ranks and suits of a 7 cards hand and then tries each
//! category from the strongest to the weakest, the first category found is the
//! hand category. Each category computes its own tie-break key and the five
//! cards that make the hand, so that [HandValue::eval] returns both a value that
//! can be compared with other hands and the cards to show the winning hand.
//!
//! Aces play high only, the A-2-3-4-5 wheel is not a straight.

mod detect;
mod value;

pub use value::{Category, HandValue, TieBreak, Winner};
