// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Category detectors.
//!
//! Each detector looks for a single category and returns `None` if the hand
//! doesn't contain it. Detectors don't check for stronger categories, the
//! caller must try them from the strongest to the weakest.
use std::iter;

use super::value::{Category, HandValue, TieBreak};
use crate::{Card, Rank, Suit};

/// Mask of five consecutive ranks.
const STRAIGHT_MASK: u16 = 0b1_1111;

/// Rank and suit counts for a 7 cards hand.
pub(crate) struct Tally {
    /// Cards sorted from the highest rank.
    cards: [Card; 7],
    /// Number of cards for each rank.
    ranks: [u8; Rank::COUNT],
    /// Number of cards for each suit.
    suits: [u8; Suit::COUNT],
}

impl Tally {
    /// Counts ranks and suits for the given hand.
    ///
    /// Panics if the hand doesn't have 7 cards.
    pub(crate) fn new(hand: &[Card]) -> Self {
        assert_eq!(hand.len(), 7, "a hand must have exactly 7 cards");

        let mut cards = [Card::default(); 7];
        cards.copy_from_slice(hand);
        cards.sort_by(|c1, c2| c2.rank().cmp(&c1.rank()));

        let mut ranks = [0; Rank::COUNT];
        let mut suits = [0; Suit::COUNT];
        for card in &cards {
            ranks[card.rank() as usize] += 1;
            suits[card.suit() as usize] += 1;
        }

        Self {
            cards,
            ranks,
            suits,
        }
    }

    /// Ranks with at least `n` cards, from the highest.
    fn ranks_with(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks()
            .rev()
            .filter(move |&r| self.ranks[r as usize] >= n)
    }

    /// The first suit with at least five cards.
    fn flush_suit(&self) -> Option<Suit> {
        Suit::suits().find(|&s| self.suits[s as usize] >= 5)
    }

    /// The cards with the given rank.
    fn of_rank(&self, rank: Rank) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |c| c.rank() == rank)
    }

    /// The cards not in the given ranks, from the highest.
    fn kickers<'a>(&'a self, exclude: &'a [Rank]) -> impl Iterator<Item = Card> + 'a {
        self.cards
            .iter()
            .copied()
            .filter(move |c| !exclude.contains(&c.rank()))
    }

    /// Bit mask of the ranks of the cards accepted by `f`.
    fn rank_mask(&self, f: impl Fn(&Card) -> bool) -> u16 {
        self.cards
            .iter()
            .filter(|c| f(*c))
            .fold(0, |mask, c| mask | (1u16 << c.rank_bits()))
    }
}

/// Returns the top rank of the highest five consecutive ranks in the mask.
///
/// Aces only play high, A-2-3-4-5 is not a straight.
fn straight_high(mask: u16) -> Option<Rank> {
    Rank::ranks()
        .rev()
        .take_while(|&r| r >= Rank::Six)
        .find(|&r| (mask >> (r as u16 - 4)) & STRAIGHT_MASK == STRAIGHT_MASK)
}

/// The five ranks of a straight from its top rank down.
fn straight_ranks(high: Rank) -> impl Iterator<Item = Rank> {
    Rank::ranks().rev().skip_while(move |&r| r > high).take(5)
}

/// Collects the first five cards from an iterator.
fn five(cards: impl IntoIterator<Item = Card>) -> [Card; 5] {
    let mut hand = [Card::default(); 5];
    for (slot, card) in hand.iter_mut().zip(cards) {
        *slot = card;
    }
    hand
}

fn ranks_of(cards: &[Card]) -> impl Iterator<Item = Rank> + '_ {
    cards.iter().map(Card::rank)
}

/// Straight and royal flushes.
///
/// The straight is searched among the flush suit cards only, a straight made
/// with cards of other suits doesn't count.
pub(crate) fn straight_flush(t: &Tally) -> Option<HandValue> {
    let suit = t.flush_suit()?;
    let high = straight_high(t.rank_mask(|c| c.suit() == suit))?;
    let cards = five(straight_ranks(high).map(|r| Card::new(r, suit)));

    let category = if high == Rank::Ace {
        Category::RoyalFlush
    } else {
        Category::StraightFlush
    };

    Some(HandValue::new(category, TieBreak::new([high]), cards))
}

pub(crate) fn four_of_a_kind(t: &Tally) -> Option<HandValue> {
    let quad = t.ranks_with(4).next()?;
    let kicker = t.kickers(&[quad]).next()?;
    let cards = five(t.of_rank(quad).chain(iter::once(kicker)));

    Some(HandValue::new(
        Category::FourOfAKind,
        TieBreak::new([quad, kicker.rank()]),
        cards,
    ))
}

/// Full house, a second three of a kind can fill the pair.
pub(crate) fn full_house(t: &Tally) -> Option<HandValue> {
    let trips = t.ranks_with(3).next()?;
    let pair = t.ranks_with(2).find(|&r| r != trips)?;
    let cards = five(t.of_rank(trips).take(3).chain(t.of_rank(pair).take(2)));

    Some(HandValue::new(
        Category::FullHouse,
        TieBreak::new([trips, pair]),
        cards,
    ))
}

pub(crate) fn flush(t: &Tally) -> Option<HandValue> {
    let suit = t.flush_suit()?;
    let cards = five(t.cards.iter().copied().filter(|c| c.suit() == suit));

    Some(HandValue::new(
        Category::Flush,
        TieBreak::new(ranks_of(&cards)),
        cards,
    ))
}

pub(crate) fn straight(t: &Tally) -> Option<HandValue> {
    let high = straight_high(t.rank_mask(|_| true))?;
    let cards = five(straight_ranks(high).filter_map(|r| t.of_rank(r).next()));

    Some(HandValue::new(
        Category::Straight,
        TieBreak::new([high]),
        cards,
    ))
}

pub(crate) fn three_of_a_kind(t: &Tally) -> Option<HandValue> {
    let trips = t.ranks_with(3).next()?;
    let cards = five(t.of_rank(trips).take(3).chain(t.kickers(&[trips])));

    Some(HandValue::new(
        Category::ThreeOfAKind,
        TieBreak::new(iter::once(trips).chain(ranks_of(&cards[3..]))),
        cards,
    ))
}

/// Two pair, the kicker can come from a third pair.
pub(crate) fn two_pair(t: &Tally) -> Option<HandValue> {
    let mut pairs = t.ranks_with(2);
    let high = pairs.next()?;
    let low = pairs.next()?;
    let kicker = t.kickers(&[high, low]).next()?;

    let cards = five(
        t.of_rank(high)
            .take(2)
            .chain(t.of_rank(low).take(2))
            .chain(iter::once(kicker)),
    );

    Some(HandValue::new(
        Category::TwoPair,
        TieBreak::new([high, low, kicker.rank()]),
        cards,
    ))
}

pub(crate) fn one_pair(t: &Tally) -> Option<HandValue> {
    let pair = t.ranks_with(2).next()?;
    let cards = five(t.of_rank(pair).take(2).chain(t.kickers(&[pair])));

    Some(HandValue::new(
        Category::OnePair,
        TieBreak::new(iter::once(pair).chain(ranks_of(&cards[2..]))),
        cards,
    ))
}

/// The five highest cards, every hand has a high card value.
pub(crate) fn high_card(t: &Tally) -> HandValue {
    let cards = five(t.cards.iter().copied());
    HandValue::new(Category::HighCard, TieBreak::new(ranks_of(&cards)), cards)
}
