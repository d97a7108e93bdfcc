// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card is packed in a single byte with the following format:
///
/// ```text
///   +--------+
///   |xxrrrrss|
///   +--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   s = suit of card (spades=0,clubs=1,diamonds=2,hearts=3)
/// ```
///
/// Two cards are equal if both rank and suit are equal, hand strength only
/// looks at the [Rank].
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card(u8);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
    }

    /// This card unique id in 0..52.
    pub fn id(&self) -> u8 {
        self.rank_bits() * 4 + self.suit_bits()
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0 => Suit::Spades,
            1 => Suit::Clubs,
            2 => Suit::Diamonds,
            _ => Suit::Hearts,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match self.rank_bits() {
            0 => Rank::Deuce,
            1 => Rank::Trey,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => panic!("Invalid rank 0x{:x}", self.0),
        }
    }

    /// Returns the rank bits.
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        self.0 >> 2
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        self.0 & 0x3
    }

    /// Checks if this card is a diamond or a heart.
    pub fn is_red(&self) -> bool {
        matches!(self.suit(), Suit::Diamonds | Suit::Hearts)
    }

    /// Parses a list of cards separated by whitespace or commas.
    ///
    /// ```
    /// # use blitz_cards::{Card, Rank, Suit};
    /// let cards = Card::parse_list("AS, 10h K♦").unwrap();
    /// assert_eq!(cards[1], Card::new(Rank::Ten, Suit::Hearts));
    /// ```
    pub fn parse_list(s: &str) -> Result<Vec<Card>, ParseCardError> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Error returned when a card cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token has no suit or no rank.
    #[error("invalid card '{0}', expected a rank followed by a suit like 'AS' or '10♥'")]
    Malformed(String),
    /// The rank symbol is unknown.
    #[error("invalid rank '{rank}' in card '{card}'")]
    Rank {
        /// The card token.
        card: String,
        /// The rank part of the token.
        rank: String,
    },
    /// The suit symbol is unknown.
    #[error("invalid suit '{suit}' in card '{card}'")]
    Suit {
        /// The card token.
        card: String,
        /// The suit part of the token.
        suit: char,
    },
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        let suit_char = chars
            .next_back()
            .ok_or_else(|| ParseCardError::Malformed(token.to_string()))?;
        let rank_str = chars.as_str();
        if rank_str.is_empty() {
            return Err(ParseCardError::Malformed(token.to_string()));
        }

        let suit = match suit_char.to_ascii_uppercase() {
            'S' | '♠' => Suit::Spades,
            'C' | '♣' => Suit::Clubs,
            'D' | '♦' => Suit::Diamonds,
            'H' | '♥' => Suit::Hearts,
            suit => {
                return Err(ParseCardError::Suit {
                    card: token.to_string(),
                    suit,
                });
            }
        };

        let rank = match rank_str.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => {
                return Err(ParseCardError::Rank {
                    card: token.to_string(),
                    rank: rank_str.to_string(),
                });
            }
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };

        f.write_str(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Clubs suit.
    Clubs = 1,
    /// Diamonds suit.
    Diamonds = 2,
    /// Hearts suit.
    Hearts = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts].into_iter()
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Indices of the current k-subset, advanced in lexicographic order.
        let mut idx = [0usize; 7];
        for (i, slot) in idx.iter_mut().enumerate().take(k) {
            *slot = i;
        }

        let mut hand = [Card::default(); 7];
        loop {
            for (h, &i) in hand.iter_mut().zip(&idx[..k]) {
                *h = self.cards[i];
            }

            f(&hand[..k]);

            // Find the rightmost index that can still move right.
            let Some(pos) = (0..k).rev().find(|&p| idx[p] < n - k + p) else {
                break;
            };

            idx[pos] += 1;
            for p in (pos + 1)..k {
                idx[p] = idx[p - 1] + 1;
            }
        }
    }

    /// Calls the `f` closure for `samples` random k-cards hands.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn sample<R, F>(&self, rng: &mut R, samples: usize, k: usize, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut hand = [Card::default(); 7];
        for _ in 0..samples {
            for (h, c) in hand.iter_mut().zip(self.cards.choose_multiple(rng, k)) {
                *h = *c;
            }

            f(&hand[..k]);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            assert_eq!(card.rank_bits(), card.rank() as u8);
            assert_eq!(card.suit_bits(), card.suit() as u8);
            assert!(card.id() < Deck::SIZE as u8);
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "K♦");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5♠");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "J♣");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10♥");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(format!("{c:?}"), "Card(A♥)");
    }

    #[test]
    fn card_from_string() {
        assert_eq!("KD".parse::<Card>(), Ok(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!("ts".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Spades)));
        assert_eq!("10♥".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!(" 2♣ ".parse::<Card>(), Ok(Card::new(Rank::Deuce, Suit::Clubs)));

        // Every card parses back from its display form.
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }

        assert!(matches!(
            "".parse::<Card>(),
            Err(ParseCardError::Malformed(_))
        ));
        assert!(matches!(
            "H".parse::<Card>(),
            Err(ParseCardError::Malformed(_))
        ));
        assert!(matches!(
            "1H".parse::<Card>(),
            Err(ParseCardError::Rank { .. })
        ));
        assert!(matches!(
            "AX".parse::<Card>(),
            Err(ParseCardError::Suit { suit: 'X', .. })
        ));
    }

    #[test]
    fn card_parse_list() {
        let cards = Card::parse_list("AS KS,QS  JS\tTS").unwrap();
        assert_eq!(cards.len(), 5);
        assert!(cards.iter().all(|c| c.suit() == Suit::Spades));
        assert_eq!(cards[4].rank(), Rank::Ten);

        assert!(Card::parse_list("").unwrap().is_empty());
        assert!(Card::parse_list("AS ZZ").is_err());
    }

    #[test]
    fn red_suits() {
        assert!(Card::new(Rank::Ace, Suit::Hearts).is_red());
        assert!(Card::new(Rank::Ace, Suit::Diamonds).is_red());
        assert!(!Card::new(Rank::Ace, Suit::Spades).is_red());
        assert!(!Card::new(Rank::Ace, Suit::Clubs).is_red());
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            assert_ne!(cards[0], cards[1]);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    // This takes a while to run in debug mode.
    #[test]
    #[ignore]
    fn deck_for_each_7cards() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 133_784_560);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(4, |cards| {
            assert!(!cards.contains(&Card::new(Rank::Ace, Suit::Diamonds)));
            count += 1;
        });
        assert_eq!(count, 230_300);
    }

    #[test]
    fn deck_sample() {
        let deck = Deck::default();
        let mut rng = StdRng::seed_from_u64(11);

        let mut count = 0;
        deck.sample(&mut rng, 100, 7, |cards| {
            assert_eq!(cards.len(), 7);
            let unique = cards.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 7);
            count += 1;
        });
        assert_eq!(count, 100);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(3));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(3));
        assert_eq!(
            d1.into_iter().collect::<Vec<_>>(),
            d2.into_iter().collect::<Vec<_>>()
        );
    }
}
