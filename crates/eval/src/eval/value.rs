// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand values and their ordering.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use super::detect::{self, Tally};
use crate::{Card, Rank};

/// The category of a poker hand, from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// No pair, no straight, no flush.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks, aces play high only.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight in a single suit not ending with an ace.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl Category {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the weakest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "high-card",
            Category::OnePair => "one-pair",
            Category::TwoPair => "two-pair",
            Category::ThreeOfAKind => "three-of-a-kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full-house",
            Category::FourOfAKind => "four-of-a-kind",
            Category::StraightFlush => "straight-flush",
            Category::RoyalFlush => "royal-flush",
        }
    }

    /// The number of ranks in this category tie-break key.
    pub fn key_len(&self) -> usize {
        match self {
            Category::HighCard | Category::Flush => 5,
            Category::OnePair => 4,
            Category::TwoPair | Category::ThreeOfAKind => 3,
            Category::FullHouse | Category::FourOfAKind => 2,
            Category::Straight | Category::StraightFlush | Category::RoyalFlush => 1,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The ranks used to break ties between hands of the same category.
///
/// Keys are compared element-wise, the first higher rank wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Rank>", from = "Vec<Rank>")]
pub struct TieBreak {
    ranks: [Rank; 5],
    len: u8,
}

impl TieBreak {
    /// Creates a key from at most five ranks, extra ranks are ignored.
    pub fn new<I>(ranks: I) -> Self
    where
        I: IntoIterator<Item = Rank>,
    {
        let mut key = Self {
            ranks: [Rank::Deuce; 5],
            len: 0,
        };

        for (slot, rank) in key.ranks.iter_mut().zip(ranks) {
            *slot = rank;
            key.len += 1;
        }

        key
    }

    /// The key ranks in comparison order.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }
}

impl From<Vec<Rank>> for TieBreak {
    fn from(ranks: Vec<Rank>) -> Self {
        Self::new(ranks)
    }
}

impl From<TieBreak> for Vec<Rank> {
    fn from(key: TieBreak) -> Self {
        key.ranks().to_vec()
    }
}

impl PartialOrd for TieBreak {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TieBreak {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ranks().cmp(other.ranks())
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in self.ranks().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{rank}")?;
        }
        Ok(())
    }
}

/// The value of a 7 cards hand.
///
/// Values are ordered by [Category] first and then by [TieBreak], two values
/// with the same category and key are equal even if their cards differ, the
/// best five cards are carried only to show the hand.
///
/// ```
/// # use blitz_eval::*;
/// let royal = Card::parse_list("AS KS QS JS TS 2H 3D").unwrap();
/// let quads = Card::parse_list("9D 9C 9S 9H 2C 5D 7S").unwrap();
/// let v1 = HandValue::eval(&royal);
/// let v2 = HandValue::eval(&quads);
/// assert_eq!(v1.category(), Category::RoyalFlush);
/// assert_eq!(Winner::between(&v1, &v2), Winner::Player1);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HandValue {
    category: Category,
    tie_break: TieBreak,
    cards: [Card; 5],
}

impl HandValue {
    /// Evaluates a 7 cards hand.
    ///
    /// The cards must be distinct, duplicates are not checked here, use
    /// [Hand](crate::Hand) to build a checked hand.
    ///
    /// Panics if the hand doesn't have 7 cards.
    pub fn eval(cards: &[Card]) -> HandValue {
        let tally = Tally::new(cards);

        detect::straight_flush(&tally)
            .or_else(|| detect::four_of_a_kind(&tally))
            .or_else(|| detect::full_house(&tally))
            .or_else(|| detect::flush(&tally))
            .or_else(|| detect::straight(&tally))
            .or_else(|| detect::three_of_a_kind(&tally))
            .or_else(|| detect::two_pair(&tally))
            .or_else(|| detect::one_pair(&tally))
            .unwrap_or_else(|| detect::high_card(&tally))
    }

    pub(crate) fn new(category: Category, tie_break: TieBreak, cards: [Card; 5]) -> Self {
        debug_assert_eq!(tie_break.ranks().len(), category.key_len());
        Self {
            category,
            tie_break,
            cards,
        }
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The key that breaks ties within the category.
    pub fn tie_break(&self) -> &TieBreak {
        &self.tie_break
    }

    /// The best five cards, defining cards first and then kickers.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.tie_break == other.tie_break
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tie_break.cmp(&other.tie_break))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

/// The outcome of a two players showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Winner {
    /// The first player has the best hand.
    Player1,
    /// The second player has the best hand.
    Player2,
    /// Both hands have the same value.
    Tie,
}

impl Winner {
    /// Compares two hand values.
    pub fn between(p1: &HandValue, p2: &HandValue) -> Winner {
        match p1.cmp(p2) {
            Ordering::Greater => Winner::Player1,
            Ordering::Less => Winner::Player2,
            Ordering::Equal => Winner::Tie,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player1 => f.write_str("Player 1 wins"),
            Winner::Player2 => f.write_str("Player 2 wins"),
            Winner::Tie => f.write_str("Tie"),
        }
    }
}
