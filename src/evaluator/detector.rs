use super::row_analysis::RowAnalysis;
use crate::evaluator::Category;

/// Strategy pattern: each detector recognizes exactly one category. Callers try them
/// in precedence order and take the first match.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &RowAnalysis) -> bool;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: one suit and one contiguous run
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }
    fn detect(&self, analysis: &RowAnalysis) -> bool {
        analysis.suit_info.is_flush() && analysis.straight_info.is_straight()
    }
}

/// Four of a Kind: largest rank group has four cards
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }
    fn detect(&self, analysis: &RowAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }
}

/// Full House: groups of three and two
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }
    fn detect(&self, analysis: &RowAnalysis) -> bool {
        analysis.rank_groups.has_full_house()
    }
}

/// Flush: every card in one suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }
    fn detect(&self, analysis: &RowAnalysis) -> bool {
        analysis.suit_info.is_flush()
    }
}

/// Straight: contiguous distinct ranks, Ace high only
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }
    fn detect(&self, analysis: &RowAnalysis) -> bool {
        analysis.straight_info.is_straight()
    }
}

/// Three of a Kind
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }
    fn detect(&self, analysis: &RowAnalysis) -> bool {
        analysis.rank_groups.trips().is_some()
    }
}

/// Two Pair
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }
    fn detect(&self, analysis: &RowAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 2
    }
}

/// One Pair
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }
    fn detect(&self, analysis: &RowAnalysis) -> bool {
        !analysis.rank_groups.pairs().is_empty()
    }
}

/// High Card: fallback
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }
    fn detect(&self, _analysis: &RowAnalysis) -> bool {
        true
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyze(s: &str) -> RowAnalysis {
        RowAnalysis::new(&parse_cards(s).unwrap())
    }

    #[test]
    fn detectors_are_listed_strongest_first() {
        let cats: Vec<Category> = DETECTORS.iter().map(|d| d.category()).collect();
        let mut sorted = cats.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(cats, sorted);
    }

    #[test]
    fn straight_flush_also_matches_weaker_detectors() {
        let a = analyze("9h 8h 7h 6h 5h");
        assert!(StraightFlushDetector.detect(&a));
        assert!(FlushDetector.detect(&a));
        assert!(StraightDetector.detect(&a));
    }

    #[test]
    fn quads_are_not_two_pair() {
        let a = analyze("As Ah Ad Ac Ks");
        assert!(FourOfAKindDetector.detect(&a));
        assert!(!TwoPairDetector.detect(&a));
        assert!(!FullHouseDetector.detect(&a));
    }

    #[test]
    fn full_house_also_has_trips_shape() {
        let a = analyze("Ks Kh Kd Qc Qs");
        assert!(FullHouseDetector.detect(&a));
        assert!(ThreeOfAKindDetector.detect(&a));
    }

    #[test]
    fn three_card_flush_detects() {
        let a = analyze("2c 9c Kc");
        assert!(FlushDetector.detect(&a));
        assert!(!StraightDetector.detect(&a));
    }
}
