// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Checked hands and two players deals.
use ahash::AHashSet;
use serde::Serialize;
use thiserror::Error;

use crate::{Card, Deck, HandValue, Winner};

/// Hand construction and dealing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// The deck doesn't have enough cards for a deal.
    #[error("deck has {available} cards, {needed} needed")]
    DeckDepleted {
        /// Number of cards needed.
        needed: usize,
        /// Number of cards left in the deck.
        available: usize,
    },
}

/// Checks that all cards are distinct.
fn check_distinct<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Result<(), Error> {
    let mut seen = AHashSet::with_capacity(Deal::SIZE);
    for card in cards {
        if !seen.insert(*card) {
            return Err(Error::DuplicateCard(*card));
        }
    }
    Ok(())
}

/// A player hand, two hole cards and five board cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    hole: [Card; 2],
    board: [Card; 5],
}

impl Hand {
    /// Creates a hand, fails if a card appears twice.
    pub fn new(hole: [Card; 2], board: [Card; 5]) -> Result<Self, Error> {
        check_distinct(hole.iter().chain(&board))?;
        Ok(Self { hole, board })
    }

    /// The player hole cards.
    pub fn hole(&self) -> &[Card; 2] {
        &self.hole
    }

    /// The board cards.
    pub fn board(&self) -> &[Card; 5] {
        &self.board
    }

    /// All the seven cards, hole cards first.
    pub fn cards(&self) -> [Card; 7] {
        let mut cards = [Card::default(); 7];
        cards[..2].copy_from_slice(&self.hole);
        cards[2..].copy_from_slice(&self.board);
        cards
    }

    /// Evaluates this hand.
    pub fn eval(&self) -> HandValue {
        HandValue::eval(&self.cards())
    }
}

/// The cards for a two players round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    player1: [Card; 2],
    player2: [Card; 2],
    board: [Card; 5],
}

impl Deal {
    /// The number of cards in a deal.
    pub const SIZE: usize = 9;

    /// Creates a deal, fails if a card appears twice.
    pub fn new(player1: [Card; 2], player2: [Card; 2], board: [Card; 5]) -> Result<Self, Error> {
        check_distinct(player1.iter().chain(&player2).chain(&board))?;
        Ok(Self {
            player1,
            player2,
            board,
        })
    }

    /// Deals two cards to each player and then the board.
    pub fn from_deck(deck: &mut Deck) -> Result<Self, Error> {
        let available = deck.count();
        let mut next = || {
            deck.deal().ok_or(Error::DeckDepleted {
                needed: Self::SIZE,
                available,
            })
        };

        let player1 = [next()?, next()?];
        let player2 = [next()?, next()?];
        let board = [next()?, next()?, next()?, next()?, next()?];

        Self::new(player1, player2, board)
    }

    /// The first player hole cards.
    pub fn player1(&self) -> &[Card; 2] {
        &self.player1
    }

    /// The second player hole cards.
    pub fn player2(&self) -> &[Card; 2] {
        &self.player2
    }

    /// The board cards.
    pub fn board(&self) -> &[Card; 5] {
        &self.board
    }

    /// The two players hands.
    pub fn hands(&self) -> (Hand, Hand) {
        let hand = |hole| Hand {
            hole,
            board: self.board,
        };

        (hand(self.player1), hand(self.player2))
    }

    /// Evaluates both hands and finds the winner.
    pub fn showdown(&self) -> Showdown {
        let (h1, h2) = self.hands();
        Showdown::new(h1.eval(), h2.eval())
    }
}

/// The result of a two players showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Showdown {
    /// The first player hand value.
    pub player1: HandValue,
    /// The second player hand value.
    pub player2: HandValue,
    /// The showdown outcome.
    pub winner: Winner,
}

impl Showdown {
    /// Compares two hand values.
    pub fn new(player1: HandValue, player2: HandValue) -> Self {
        Self {
            player1,
            player2,
            winner: Winner::between(&player1, &player2),
        }
    }
}
