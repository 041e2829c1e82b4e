use crate::cards::{Card, Suit};

/// Whether every card in a row shares one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    /// Works for any arity; an empty row is never a flush.
    pub fn detect(cards: &[Card]) -> Self {
        match cards.first() {
            Some(first) if cards.iter().all(|c| c.suit() == first.suit()) => {
                SuitInfo { flush_suit: Some(first.suit()) }
            }
            _ => SuitInfo { flush_suit: None },
        }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn test_flush() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
        ];
        let info = SuitInfo::detect(&cards);
        assert!(info.is_flush());
        assert_eq!(info.flush_suit, Some(Suit::Spades));
    }

    #[test]
    fn test_not_flush() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Spades),
        ];
        let info = SuitInfo::detect(&cards);
        assert!(!info.is_flush());
        assert_eq!(info.flush_suit, None);
    }

    #[test]
    fn test_three_card_flush() {
        let cards = [
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Clubs),
            Card::new(Rank::King, Suit::Clubs),
        ];
        assert!(SuitInfo::detect(&cards).is_flush());
    }

    #[test]
    fn test_empty_is_not_flush() {
        assert!(!SuitInfo::detect(&[]).is_flush());
    }
}
