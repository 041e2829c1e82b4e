use crate::cards::{Card, Rank, Suit};
use crate::hand::Hand;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Cards in a standard deck.
pub const DECK_SIZE: usize = 52;
/// Players at a pineapple table.
pub const PLAYERS: usize = 4;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("invalid deck: expected 52 unique cards, got {len} cards ({unique} unique)")]
    InvalidDeckSize { len: usize, unique: usize },
}

/// A standard 52-card deck.
///
/// Canonical order is suit-major (spades, hearts, diamonds, clubs), rank-minor
/// (two to ace), so the card at index `s * 13 + r` is `Rank::ALL[r]` of
/// `Suit::ALL[s]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use pineapple_rs::cards::{Card, Rank, Suit};
    /// use pineapple_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.as_slice()[0], Card::new(Rank::Two, Suit::Spades));
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// Wrap an existing card order, checking it is a full deck.
    pub fn try_from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        validate_deck(&cards)?;
        Ok(Self { cards })
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

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Shuffle in place with the provided RNG (backward Fisher-Yates).
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        fisher_yates(&mut self.cards, rng);
    }

    /// Consume the deck and return a shuffled permutation of it.
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.shuffle_with(rng);
        self
    }

    /// Deal the deck round-robin into four hands. A `Deck` always holds 52 unique
    /// cards, so this cannot fail.
    pub fn deal(&self) -> [Hand; PLAYERS] {
        deal_round_robin(&self.cards)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// For `i` from the last index down to 1, draw `j` uniformly from `0..=i` and swap.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

fn validate_deck(cards: &[Card]) -> Result<(), DeckError> {
    let unique = cards.iter().copied().collect::<HashSet<Card>>().len();
    if cards.len() != DECK_SIZE || unique != DECK_SIZE {
        return Err(DeckError::InvalidDeckSize { len: cards.len(), unique });
    }
    Ok(())
}

/// Deal 52 cards into four 13-card hands. Card `i` goes to player `i % 4`, keeping
/// shuffle order within each hand.
///
/// ```
/// use pineapple_rs::deck::{deal, Deck};
///
/// let hands = deal(Deck::standard().as_slice()).unwrap();
/// assert!(hands.iter().all(|h| h.len() == 13));
/// assert!(deal(&Deck::standard().as_slice()[..51]).is_err());
/// ```
pub fn deal(cards: &[Card]) -> Result<[Hand; PLAYERS], DeckError> {
    validate_deck(cards)?;
    Ok(deal_round_robin(cards))
}

fn deal_round_robin(cards: &[Card]) -> [Hand; PLAYERS] {
    log::debug!("dealing {} cards to {} players", cards.len(), PLAYERS);
    std::array::from_fn(|seat| {
        let dealt: Vec<Card> = cards.iter().copied().skip(seat).step_by(PLAYERS).collect();
        Hand::from_dealt(dealt)
    })
}
