use pineapple_rs::arrange::{ArrangementPolicy, HumanPolicy, PositionalPolicy, SortedPolicy};
use pineapple_rs::cards::Card;
use pineapple_rs::deck::Deck;
use pineapple_rs::hand::{ArrangementFault, Hand, HandError, RowKind, Rows};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn hand() -> Hand {
    "Kc 2s 9d As 3h 10s 4d Qd 5c Jh 6s 8d 7h".parse().unwrap()
}

fn cards(s: &str) -> Vec<Card> {
    pineapple_rs::cards::parse_cards(s).unwrap()
}

#[test]
fn missing_card_replaced_by_repeat_is_invalid_arrangement() {
    // 7h left out, Kc repeated to keep the row sizes right
    let err = Rows::try_new(
        &hand(),
        &cards("Kc 2s 9d"),
        &cards("As 3h 10s 4d Qd"),
        &cards("5c Jh 6s 8d Kc"),
    )
    .unwrap_err();
    assert!(matches!(err, HandError::InvalidArrangement(ArrangementFault::DuplicateCard(_))));
}

#[test]
fn left_out_card_is_invalid_arrangement() {
    // 7h left out, nothing in its place
    let err = Rows::try_new(
        &hand(),
        &cards("Kc 2s 9d"),
        &cards("As 3h 10s 4d Qd"),
        &cards("5c Jh 6s 8d"),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        HandError::InvalidArrangement(ArrangementFault::RowSize { row: RowKind::Bottom, got: 4, .. })
    ));
}

#[test]
fn foreign_card_is_invalid_arrangement() {
    let err = Rows::try_new(
        &hand(),
        &cards("Kc 2s 9d"),
        &cards("As 3h 10s 4d Qd"),
        &cards("5c Jh 6s 8d 7c"),
    )
    .unwrap_err();
    assert_eq!(
        err,
        HandError::InvalidArrangement(ArrangementFault::ForeignCard("7c".parse().unwrap()))
    );
}

#[test]
fn wrong_row_size_names_the_row() {
    let err = Rows::try_new(
        &hand(),
        &cards("Kc 2s 9d As"),
        &cards("3h 10s 4d Qd"),
        &cards("5c Jh 6s 8d 7h"),
    )
    .unwrap_err();
    assert_eq!(
        err,
        HandError::InvalidArrangement(ArrangementFault::RowSize {
            row: RowKind::Top,
            expected: 3,
            got: 4
        })
    );
}

#[test]
fn human_split_is_accepted() {
    let policy = HumanPolicy::parse("2s 3h 4d", "5c 6s 7h 8d 9d", "10s Jh Qd Kc As").unwrap();
    let rows = policy.arrange(&hand()).unwrap();
    assert_eq!(rows.row(RowKind::Bottom).len(), 5);
    assert_eq!(rows.cards().count(), 13);
}

#[test]
fn sorted_policy_keeps_every_card() {
    let h = hand();
    let rows = SortedPolicy.arrange(&h).unwrap();
    let mut placed: Vec<Card> = rows.cards().collect();
    let mut dealt = h.as_slice().to_vec();
    placed.sort();
    dealt.sort();
    assert_eq!(placed, dealt);
}

proptest! {
    #[test]
    fn positional_rows_partition_any_dealt_hand(seed in any::<u64>(), seat in 0usize..4) {
        let deck = Deck::standard().shuffled(&mut ChaCha8Rng::seed_from_u64(seed));
        let h = deck.deal()[seat].clone();
        let rows = PositionalPolicy.arrange(&h).unwrap();
        prop_assert_eq!(rows.top().len(), 3);
        prop_assert_eq!(rows.middle().len(), 5);
        prop_assert_eq!(rows.bottom().len(), 5);
        let placed: Vec<Card> = rows.cards().collect();
        prop_assert_eq!(placed.as_slice(), h.as_slice());
        // The positional split always passes validation
        prop_assert!(Rows::try_new(&h, rows.top(), rows.middle(), rows.bottom()).is_ok());
    }
}
