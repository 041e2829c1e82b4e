use pineapple_rs::arrange::{
    ArrangementPolicy, HumanPolicy, PolicyKind, PositionalPolicy, SortedPolicy,
};
use pineapple_rs::game::{play_round, Session, TableConfig};
use pineapple_rs::hand::{HandError, Rows};

fn seeded(seed: u64, human: Option<usize>) -> Session {
    Session::new(TableConfig::new(Some(seed), human, PolicyKind::Positional))
}

#[test]
fn bots_only_round_scores_four_players() {
    let mut session = seeded(5, None);
    let (players, result) = session.play(None);
    assert_eq!(players.len(), 4);
    assert_eq!(result.len(), 4);
    for (seat, pr) in result.scored().enumerate() {
        assert_eq!(pr.seat, seat);
        assert_eq!(pr.name, format!("Bot {seat}"));
        assert_eq!(Some(&pr.rows), players[seat].rows());
        assert_eq!(pr.rows, Rows::positional(players[seat].hand()));
    }
}

#[test]
fn same_seed_same_results() {
    let (_, a) = seeded(77, None).play(None);
    let (_, b) = seeded(77, None).play(None);
    assert_eq!(a, b);
}

#[test]
fn human_policy_drives_only_the_human_seat() {
    let mut session = seeded(12, Some(0));
    let mut players = session.deal_round();
    let mut sorted = players[0].hand().as_slice().to_vec();
    sorted.sort();
    let human =
        HumanPolicy::new(sorted[..3].to_vec(), sorted[3..8].to_vec(), sorted[8..].to_vec());
    let result = session.play_round(&mut players, Some(&human));
    let you = result.get(0).unwrap().as_ref().unwrap();
    assert_eq!(you.name, "You");
    assert_eq!(you.rows, SortedPolicy.arrange(players[0].hand()).unwrap());
    let bot = result.get(1).unwrap().as_ref().unwrap();
    assert_eq!(bot.rows, Rows::positional(players[1].hand()));
}

#[test]
fn one_bad_seat_does_not_stop_the_others() {
    let mut session = seeded(3, None);
    let mut players = session.deal_round();
    let bad = HumanPolicy::new(Vec::new(), Vec::new(), Vec::new());
    let policies: [&dyn ArrangementPolicy; 4] =
        [&PositionalPolicy, &bad, &PositionalPolicy, &SortedPolicy];
    let result = play_round(&mut players, &policies);
    assert!(result.get(0).unwrap().is_ok());
    assert!(matches!(result.get(1), Some(Err(HandError::InvalidArrangement(_)))));
    assert!(result.get(2).unwrap().is_ok());
    assert!(result.get(3).unwrap().is_ok());
    assert_eq!(result.scored().count(), 3);
}

#[test]
fn missing_policies_fall_back_to_positional() {
    let mut session = seeded(8, None);
    let mut players = session.deal_round();
    let result = play_round(&mut players, &[]);
    for (seat, pr) in result.scored().enumerate() {
        assert_eq!(pr.rows, Rows::positional(players[seat].hand()));
    }
    assert_eq!(result.scored().count(), 4);
}

#[test]
fn replaying_a_round_reports_already_arranged() {
    let mut session = seeded(4, None);
    let mut players = session.deal_round();
    let _ = play_round(&mut players, &[]);
    let again = play_round(&mut players, &[]);
    assert!(again.outcomes().iter().all(|o| matches!(o, Err(HandError::AlreadyArranged))));
}

#[test]
fn seed_var_parses_into_config() {
    assert_eq!(TableConfig::from_seed_var(Some(" 99 ")).seed, Some(99));
    assert_eq!(TableConfig::from_seed_var(Some("not a number")).seed, None);
    let unset = TableConfig::from_seed_var(None);
    assert_eq!(unset.seed, None);
    assert_eq!(unset.human_seat, TableConfig::default().human_seat);
}
