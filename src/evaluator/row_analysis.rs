use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed analysis of a 3- or 5-card row.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct RowAnalysis {
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl RowAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        // Descending ranks; input order never reaches the detectors
        let mut ranks: Vec<Rank> = cards.iter().map(|c| c.rank()).collect();
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let mut rank_counts = [0u8; 15];
        for rank in &ranks {
            rank_counts[rank.value() as usize] += 1;
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { rank_groups, suit_info, straight_info }
    }
}
