pub(crate) mod detector;
pub(crate) mod rank_groups;
pub(crate) mod row_analysis;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::hand::{RowKind, Rows};
use std::fmt;

/// Poker hand category from weakest to strongest.
///
/// The order only ranks categories against each other; rows are never compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a 3- or 5-card row.
///
/// Card order does not matter. Aces are high only, a 3-card row can be a flush or
/// a straight, and categories that need more cards than the row holds never fire.
///
/// ```
/// use pineapple_rs::cards::parse_cards;
/// use pineapple_rs::evaluator::{classify, Category};
///
/// let row = parse_cards("2s 3s 4s 5s 6s").unwrap();
/// assert_eq!(classify(&row), Category::StraightFlush);
///
/// let top = parse_cards("2s 2h Kd").unwrap();
/// assert_eq!(classify(&top), Category::Pair);
/// ```
pub fn classify(row: &[Card]) -> Category {
    use detector::DETECTORS;
    use row_analysis::RowAnalysis;

    let analysis = RowAnalysis::new(row);

    DETECTORS
        .iter()
        .find(|detector| detector.detect(&analysis))
        .map_or(Category::HighCard, |detector| detector.category())
}

/// Categories of the Top, Middle and Bottom rows, in that order.
pub fn classify_rows(rows: &Rows) -> [Category; 3] {
    RowKind::ALL.map(|kind| classify(rows.row(kind)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn cat(s: &str) -> Category {
        classify(&parse_cards(s).unwrap())
    }

    #[test]
    fn five_card_categories() {
        assert_eq!(cat("As Ks Qs Js 10s"), Category::StraightFlush);
        assert_eq!(cat("Kc Kd Kh Ks 2s"), Category::FourOfAKind);
        assert_eq!(cat("10c 10d 10h 2s 2h"), Category::FullHouse);
        assert_eq!(cat("Ah 9h 7h 3h 2h"), Category::Flush);
        assert_eq!(cat("6c 5d 4h 3s 2c"), Category::Straight);
        assert_eq!(cat("Qc Qd Qh 9s 2c"), Category::ThreeOfAKind);
        assert_eq!(cat("Jc Jd 9c 9h 2s"), Category::TwoPair);
        assert_eq!(cat("Ah Ad 10s 9c 2d"), Category::Pair);
        assert_eq!(cat("Ah Kd 7s 5c 2d"), Category::HighCard);
    }

    #[test]
    fn three_card_categories() {
        assert_eq!(cat("2s 3s 4s"), Category::StraightFlush);
        assert_eq!(cat("7c 7d 7h"), Category::ThreeOfAKind);
        assert_eq!(cat("2c 9c Kc"), Category::Flush);
        assert_eq!(cat("Qd Kc As"), Category::Straight);
        assert_eq!(cat("2s 2h Kd"), Category::Pair);
        assert_eq!(cat("2s 5h Kd"), Category::HighCard);
    }

    #[test]
    fn no_low_ace_wraparound() {
        assert_eq!(cat("Ac 2d 3h 4s 5c"), Category::HighCard);
        assert_eq!(cat("As 2s 3s"), Category::Flush);
        assert_eq!(cat("Ac 2d 3h"), Category::HighCard);
    }

    #[test]
    fn labels() {
        assert_eq!(Category::Pair.to_string(), "One Pair");
        assert_eq!(Category::StraightFlush.ordinal(), 8);
    }
}
