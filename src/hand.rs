use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Cards dealt to each player.
pub const HAND_SIZE: usize = 13;

/// The three rows of an arranged hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Top,
    Middle,
    Bottom,
}

impl RowKind {
    pub const ALL: [RowKind; 3] = [RowKind::Top, RowKind::Middle, RowKind::Bottom];

    /// Number of cards the row holds.
    pub const fn arity(self) -> usize {
        match self {
            RowKind::Top => 3,
            RowKind::Middle | RowKind::Bottom => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RowKind::Top => "Top",
            RowKind::Middle => "Middle",
            RowKind::Bottom => "Bottom",
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The first rule a candidate arrangement breaks. Thirteen distinct hand cards
/// in rows of 3/5/5 cover the hand, so a left-out card always shows up as one
/// of these.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArrangementFault {
    RowSize { row: RowKind, expected: usize, got: usize },
    DuplicateCard(Card),
    ForeignCard(Card),
}

impl fmt::Display for ArrangementFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrangementFault::RowSize { row, expected, got } => {
                write!(f, "{row} row needs {expected} cards, got {got}")
            }
            ArrangementFault::DuplicateCard(c) => write!(f, "{c} placed more than once"),
            ArrangementFault::ForeignCard(c) => write!(f, "{c} is not in the hand"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 13 cards in hand, got {0}")]
    InvalidHandSize(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("invalid arrangement: {0}")]
    InvalidArrangement(ArrangementFault),
    #[error("hand has already been arranged")]
    AlreadyArranged,
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// The 13 cards dealt to one player, in dealt order.
///
/// ```
/// use pineapple_rs::hand::Hand;
///
/// let hand: Hand = "2s 3h 4d 5c 6s 7h 8d 9c 10s Jh Qd Kc As".parse().unwrap();
/// assert_eq!(hand.len(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() != HAND_SIZE {
            return Err(HandError::InvalidHandSize(cards.len()));
        }
        if let Some(dup) = first_duplicate(&cards) {
            return Err(HandError::DuplicateCard(dup));
        }
        Ok(Self { cards })
    }

    /// Hands cut from an already validated deck.
    pub(crate) fn from_dealt(cards: Vec<Card>) -> Self {
        debug_assert_eq!(cards.len(), HAND_SIZE);
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Hand::try_new(cards)
    }
}

/// A hand split into Top (3), Middle (5) and Bottom (5) rows.
///
/// Only built from a [`Hand`] through [`Rows::positional`] or [`Rows::try_new`],
/// so the three rows always partition that hand exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rows {
    top: [Card; 3],
    middle: [Card; 5],
    bottom: [Card; 5],
}

impl Rows {
    /// Slice the hand in dealt order: first 3 on top, next 5 middle, last 5 bottom.
    ///
    /// ```
    /// use pineapple_rs::hand::{Hand, Rows};
    ///
    /// let hand: Hand = "2s 3h 4d 5c 6s 7h 8d 9c 10s Jh Qd Kc As".parse().unwrap();
    /// let rows = Rows::positional(&hand);
    /// assert_eq!(rows.top(), &hand.as_slice()[..3]);
    /// assert_eq!(rows.bottom(), &hand.as_slice()[8..]);
    /// ```
    pub fn positional(hand: &Hand) -> Self {
        let c = hand.as_slice();
        Self {
            top: [c[0], c[1], c[2]],
            middle: [c[3], c[4], c[5], c[6], c[7]],
            bottom: [c[8], c[9], c[10], c[11], c[12]],
        }
    }

    /// Validate a candidate arrangement against the hand it was built from.
    ///
    /// Checks, in order: row sizes, a card placed twice, a card not in the hand.
    pub fn try_new(
        hand: &Hand,
        top: &[Card],
        middle: &[Card],
        bottom: &[Card],
    ) -> Result<Self, HandError> {
        let fault = |f| -> Result<Self, HandError> { Err(HandError::InvalidArrangement(f)) };
        let candidate = [(RowKind::Top, top), (RowKind::Middle, middle), (RowKind::Bottom, bottom)];
        for (row, cards) in candidate {
            if cards.len() != row.arity() {
                return fault(ArrangementFault::RowSize {
                    row,
                    expected: row.arity(),
                    got: cards.len(),
                });
            }
        }

        let placed: Vec<Card> = top.iter().chain(middle).chain(bottom).copied().collect();
        if let Some(dup) = first_duplicate(&placed) {
            return fault(ArrangementFault::DuplicateCard(dup));
        }
        if let Some(&foreign) = placed.iter().find(|c| !hand.contains(**c)) {
            return fault(ArrangementFault::ForeignCard(foreign));
        }

        Ok(Self {
            top: [top[0], top[1], top[2]],
            middle: [middle[0], middle[1], middle[2], middle[3], middle[4]],
            bottom: [bottom[0], bottom[1], bottom[2], bottom[3], bottom[4]],
        })
    }

    pub fn top(&self) -> &[Card] {
        &self.top
    }

    pub fn middle(&self) -> &[Card] {
        &self.middle
    }

    pub fn bottom(&self) -> &[Card] {
        &self.bottom
    }

    pub fn row(&self, kind: RowKind) -> &[Card] {
        match kind {
            RowKind::Top => self.top(),
            RowKind::Middle => self.middle(),
            RowKind::Bottom => self.bottom(),
        }
    }

    /// All 13 cards, top row first.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.top.iter().chain(&self.middle).chain(&self.bottom).copied()
    }
}

fn first_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.iter().copied().find(|c| !seen.insert(*c))
}
