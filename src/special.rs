//! Whole-hand bonus patterns.
//!
//! Detectors run in a fixed precedence order and the first match wins, so a hand
//! carries at most one special: NaturalRun, then SixPairs, then ThreeFlushes, then
//! ThreeStraights. The first two read only the 13 cards; the last two need the
//! arranged rows.

use crate::cards::{Card, Rank};
use crate::evaluator::straight_info::StraightInfo;
use crate::evaluator::suit_info::SuitInfo;
use crate::hand::{RowKind, Rows, HAND_SIZE};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SpecialKind {
    /// One card of every rank, two through ace ("Dragon").
    NaturalRun,
    /// Six ranks paired plus one unpaired card.
    SixPairs,
    /// Every row single-suited.
    ThreeFlushes,
    /// Every row a contiguous run.
    ThreeStraights,
}

impl SpecialKind {
    pub const fn label(self) -> &'static str {
        match self {
            SpecialKind::NaturalRun => "Dragon",
            SpecialKind::SixPairs => "Six Pairs",
            SpecialKind::ThreeFlushes => "Three Flushes",
            SpecialKind::ThreeStraights => "Three Straights",
        }
    }
}

impl fmt::Display for SpecialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn rank_counts(cards: impl IntoIterator<Item = Card>) -> [u8; 15] {
    let mut counts = [0u8; 15];
    for c in cards {
        counts[c.rank().value() as usize] += 1;
    }
    counts
}

/// Exactly one card of each rank 2..A; suits are ignored.
pub fn is_natural_run(cards: &[Card]) -> bool {
    let counts = rank_counts(cards.iter().copied());
    cards.len() == HAND_SIZE && Rank::ALL.iter().all(|r| counts[r.value() as usize] == 1)
}

/// Exactly six ranks appear exactly twice. Four of a rank does not count as two pairs.
pub fn is_six_pairs(cards: &[Card]) -> bool {
    let counts = rank_counts(cards.iter().copied());
    cards.len() == HAND_SIZE && counts.iter().filter(|&&n| n == 2).count() == 6
}

/// Each detector recognizes one special; see [`SPECIAL_DETECTORS`] for precedence.
pub trait SpecialDetector {
    fn kind(&self) -> SpecialKind;
    fn detect(&self, rows: &Rows) -> bool;
}

pub struct NaturalRunDetector;

impl SpecialDetector for NaturalRunDetector {
    fn kind(&self) -> SpecialKind {
        SpecialKind::NaturalRun
    }
    fn detect(&self, rows: &Rows) -> bool {
        is_natural_run(&rows.cards().collect::<Vec<_>>())
    }
}

pub struct SixPairsDetector;

impl SpecialDetector for SixPairsDetector {
    fn kind(&self) -> SpecialKind {
        SpecialKind::SixPairs
    }
    fn detect(&self, rows: &Rows) -> bool {
        is_six_pairs(&rows.cards().collect::<Vec<_>>())
    }
}

pub struct ThreeFlushesDetector;

impl SpecialDetector for ThreeFlushesDetector {
    fn kind(&self) -> SpecialKind {
        SpecialKind::ThreeFlushes
    }
    fn detect(&self, rows: &Rows) -> bool {
        RowKind::ALL.iter().all(|&k| SuitInfo::detect(rows.row(k)).is_flush())
    }
}

pub struct ThreeStraightsDetector;

impl SpecialDetector for ThreeStraightsDetector {
    fn kind(&self) -> SpecialKind {
        SpecialKind::ThreeStraights
    }
    fn detect(&self, rows: &Rows) -> bool {
        RowKind::ALL.iter().all(|&k| {
            let ranks: Vec<Rank> = rows.row(k).iter().map(|c| c.rank()).collect();
            StraightInfo::detect(&ranks).is_straight()
        })
    }
}

pub const SPECIAL_DETECTORS: [&dyn SpecialDetector; 4] =
    [&NaturalRunDetector, &SixPairsDetector, &ThreeFlushesDetector, &ThreeStraightsDetector];

/// The first special the arranged hand satisfies, if any.
///
/// ```
/// use pineapple_rs::hand::{Hand, Rows};
/// use pineapple_rs::special::{detect_special, SpecialKind};
///
/// let hand: Hand = "Ad 2s 3h 4d 5c 6s 7h 8d 9c 10s Jh Qd Kc".parse().unwrap();
/// let rows = Rows::positional(&hand);
/// assert_eq!(detect_special(&rows), Some(SpecialKind::NaturalRun));
/// ```
pub fn detect_special(rows: &Rows) -> Option<SpecialKind> {
    SPECIAL_DETECTORS.iter().find(|d| d.detect(rows)).map(|d| d.kind())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;

    fn rows(s: &str) -> Rows {
        let hand: Hand = s.parse().unwrap();
        Rows::positional(&hand)
    }

    #[test]
    fn natural_run_ignores_suits_and_order() {
        let r = rows("Ks 2s 7s 3h Qh 4d 5c Jc 6s 10c 8d 9c Ah");
        assert_eq!(detect_special(&r), Some(SpecialKind::NaturalRun));
    }

    #[test]
    fn six_pairs_with_singleton() {
        let r = rows("2s 2h 5d 5c 9s 9h Jd Jc Qs Qh Ad Ac 7s");
        assert_eq!(detect_special(&r), Some(SpecialKind::SixPairs));
    }

    #[test]
    fn quads_do_not_count_as_two_pairs() {
        // 2222 + four pairs + singleton: only four ranks at exactly two
        let r = rows("2s 2h 2d 2c 5s 5h 9d 9c Js Jh Ad Ac 7s");
        assert_eq!(detect_special(&r), None);
    }

    #[test]
    fn three_flushes_allow_different_suits() {
        let r = rows("2c 9c Kc 3h 5h 8h Jh Qh 2d 4d 6d 10d Ad");
        assert_eq!(detect_special(&r), Some(SpecialKind::ThreeFlushes));
    }

    #[test]
    fn three_straights() {
        let r = rows("Qs Kh Ad 2c 3d 4h 5s 6c 8d 9h 10s Jc Qd");
        assert_eq!(detect_special(&r), Some(SpecialKind::ThreeStraights));
    }

    #[test]
    fn special_detectors_are_listed_strongest_first() {
        let kinds: Vec<SpecialKind> = SPECIAL_DETECTORS.iter().map(|d| d.kind()).collect();
        assert_eq!(
            kinds,
            [
                SpecialKind::NaturalRun,
                SpecialKind::SixPairs,
                SpecialKind::ThreeFlushes,
                SpecialKind::ThreeStraights,
            ]
        );
    }

    #[test]
    fn six_pairs_outrank_three_flushes() {
        // clubs / hearts / spades rows, with the pairs split across them
        let r = rows("2c 3c 7c 2h 3h 4h 5h 6h 4s 5s 6s 7s Ks");
        assert!(SixPairsDetector.detect(&r));
        assert!(ThreeFlushesDetector.detect(&r));
        assert_eq!(detect_special(&r), Some(SpecialKind::SixPairs));
    }

    #[test]
    fn three_flushes_outrank_three_straights() {
        let r = rows("2c 3c 4c 5h 6h 7h 8h 9h 9s 10s Js Qs Ks");
        assert!(ThreeStraightsDetector.detect(&r));
        assert_eq!(detect_special(&r), Some(SpecialKind::ThreeFlushes));
    }

    #[test]
    fn plain_hand_has_no_special() {
        let r = rows("2s 7h Kd 3c 3d 8s 9h Jc 4s 4h 10d Qc Ac");
        assert_eq!(detect_special(&r), None);
    }

    #[test]
    fn raw_card_checks() {
        let hand: Hand = "2s 3h 4d 5c 6s 7h 8d 9c 10s Jh Qd Kc As".parse().unwrap();
        assert!(is_natural_run(hand.as_slice()));
        assert!(!is_six_pairs(hand.as_slice()));
        assert!(!is_natural_run(&hand.as_slice()[..12]));
    }
}
