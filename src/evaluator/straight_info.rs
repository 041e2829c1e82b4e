use crate::cards::Rank;
use std::collections::BTreeSet;

/// Whether a row's ranks form one contiguous run, and the run's top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// A straight needs as many distinct ranks as cards, spanning exactly
    /// `len - 1` steps. Aces are high only: A-2-3 and A-2-3-4-5 are not straights.
    pub fn detect(ranks: &[Rank]) -> Self {
        // BTreeSet iterates ascending, so first/last are min/max.
        let unique: BTreeSet<Rank> = ranks.iter().copied().collect();
        let run = match (unique.first(), unique.last()) {
            (Some(lo), Some(hi)) if unique.len() == ranks.len() => {
                usize::from(hi.value() - lo.value()) == ranks.len() - 1
            }
            _ => false,
        };

        StraightInfo { top_rank: if run { unique.last().copied() } else { None } }
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}
