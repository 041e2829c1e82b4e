//! Arrangement policies: who decides which cards go in which row.
//!
//! A seat is driven by an [`ArrangementPolicy`] rather than by checks on its index.
//! Bots use [`PositionalPolicy`] (the dealt order sliced 3/5/5) or the
//! [`SortedPolicy`] heuristic; a human front end submits a [`HumanPolicy`] holding
//! the candidate rows it collected.

use crate::cards::{parse_cards, Card};
use crate::hand::{Hand, HandError, Rows};
use core::fmt;

/// Kinds of arrangement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PolicyKind {
    Positional,
    Sorted,
    Human,
}

impl PolicyKind {
    pub const fn label(self) -> &'static str {
        match self {
            PolicyKind::Positional => "Positional",
            PolicyKind::Sorted => "Sorted",
            PolicyKind::Human => "Human",
        }
    }

    /// A ready-made policy for automated seats; `None` for `Human`, whose rows come
    /// from outside.
    pub fn bot_policy(self) -> Option<Box<dyn ArrangementPolicy>> {
        match self {
            PolicyKind::Positional => Some(Box::new(PositionalPolicy)),
            PolicyKind::Sorted => Some(Box::new(SortedPolicy)),
            PolicyKind::Human => None,
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Splits a 13-card hand into Top/Middle/Bottom rows.
pub trait ArrangementPolicy: Send + Sync {
    fn arrange(&self, hand: &Hand) -> Result<Rows, HandError>;
    fn kind(&self) -> PolicyKind;
}

/// Dealt order: first 3 cards on top, next 5 middle, last 5 bottom.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalPolicy;

impl ArrangementPolicy for PositionalPolicy {
    fn arrange(&self, hand: &Hand) -> Result<Rows, HandError> {
        Ok(Rows::positional(hand))
    }
    fn kind(&self) -> PolicyKind {
        PolicyKind::Positional
    }
}

/// Lowest three ranks on top, highest five on the bottom.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortedPolicy;

impl ArrangementPolicy for SortedPolicy {
    fn arrange(&self, hand: &Hand) -> Result<Rows, HandError> {
        let mut cards = hand.as_slice().to_vec();
        cards.sort();
        Rows::try_new(hand, &cards[..3], &cards[3..8], &cards[8..])
    }
    fn kind(&self) -> PolicyKind {
        PolicyKind::Sorted
    }
}

/// A candidate arrangement supplied by a person. Validated against the hand when
/// applied, so a bad split surfaces as `InvalidArrangement` for that seat only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanPolicy {
    top: Vec<Card>,
    middle: Vec<Card>,
    bottom: Vec<Card>,
}

impl HumanPolicy {
    pub fn new(top: Vec<Card>, middle: Vec<Card>, bottom: Vec<Card>) -> Self {
        Self { top, middle, bottom }
    }

    /// Build from three card lists in text form.
    ///
    /// ```
    /// use pineapple_rs::arrange::{ArrangementPolicy, HumanPolicy};
    /// use pineapple_rs::hand::Hand;
    ///
    /// let hand: Hand = "2s 3h 4d 5c 6s 7h 8d 9c 10s Jh Qd Kc As".parse().unwrap();
    /// let policy = HumanPolicy::parse("Qd Kc As", "2s 3h 4d 5c 6s", "7h 8d 9c 10s Jh").unwrap();
    /// assert!(policy.arrange(&hand).is_ok());
    /// ```
    pub fn parse(top: &str, middle: &str, bottom: &str) -> Result<Self, HandError> {
        let rows = [top, middle, bottom]
            .map(|s| parse_cards(s).map_err(|e| HandError::CardParse(e.to_string())));
        let [top, middle, bottom] = rows;
        Ok(Self::new(top?, middle?, bottom?))
    }
}

impl ArrangementPolicy for HumanPolicy {
    fn arrange(&self, hand: &Hand) -> Result<Rows, HandError> {
        Rows::try_new(hand, &self.top, &self.middle, &self.bottom)
    }
    fn kind(&self) -> PolicyKind {
        PolicyKind::Human
    }
}
