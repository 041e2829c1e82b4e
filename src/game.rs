use crate::arrange::{ArrangementPolicy, PolicyKind, PositionalPolicy};
use crate::deck::Deck;
use crate::evaluator::{classify_rows, Category};
use crate::hand::{Hand, HandError, RowKind, Rows};
use crate::special::{detect_special, SpecialKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Environment variable read by [`TableConfig::from_env`] for a fixed shuffle seed.
pub const SEED_ENV: &str = "PINEAPPLE_SEED";

/// Table setup chosen before a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct TableConfig {
    /// Fixed shuffle seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Seat whose rows come from a person, if any.
    pub human_seat: Option<usize>,
    /// Policy used by every other seat.
    pub bot_policy: PolicyKind,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { seed: None, human_seat: Some(0), bot_policy: PolicyKind::Positional }
    }
}

impl TableConfig {
    pub fn new(seed: Option<u64>, human_seat: Option<usize>, bot_policy: PolicyKind) -> Self {
        Self { seed, human_seat, bot_policy }
    }

    /// Defaults, with the seed taken from `PINEAPPLE_SEED` when it parses as a `u64`.
    pub fn from_env() -> Self {
        Self::from_seed_var(std::env::var(SEED_ENV).ok().as_deref())
    }

    /// Defaults, with the seed parsed from the raw variable value, if any.
    pub fn from_seed_var(value: Option<&str>) -> Self {
        let seed = value.and_then(|v| v.trim().parse::<u64>().ok());
        Self { seed, ..Self::default() }
    }
}

/// One seat for one round: the dealt hand and, once arranged, its frozen rows.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) seat: usize,
    pub(crate) name: String,
    pub(crate) hand: Hand,
    pub(crate) rows: Option<Rows>,
}

impl Player {
    pub fn new(seat: usize, name: impl Into<String>, hand: Hand) -> Self {
        Self { seat, name: name.into(), hand, rows: None }
    }

    /// Returns the player's seat index
    pub fn seat(&self) -> usize {
        self.seat
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's dealt hand
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the player's rows once arranged
    pub fn rows(&self) -> Option<&Rows> {
        self.rows.as_ref()
    }

    pub fn is_arranged(&self) -> bool {
        self.rows.is_some()
    }

    /// Arrange the hand once. Later calls fail with `AlreadyArranged`.
    pub fn arrange(&mut self, policy: &dyn ArrangementPolicy) -> Result<&Rows, HandError> {
        if self.rows.is_some() {
            return Err(HandError::AlreadyArranged);
        }
        let rows = policy.arrange(&self.hand)?;
        Ok(self.rows.insert(rows))
    }
}

/// Scored outcome for one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PlayerResult {
    pub seat: usize,
    pub name: String,
    pub rows: Rows,
    pub categories: [Category; 3],
    pub special: Option<SpecialKind>,
}

impl PlayerResult {
    pub fn category(&self, row: RowKind) -> Category {
        match row {
            RowKind::Top => self.categories[0],
            RowKind::Middle => self.categories[1],
            RowKind::Bottom => self.categories[2],
        }
    }
}

/// Outcomes for every seat, in seat order. A failed seat does not affect the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    outcomes: Vec<Result<PlayerResult, HandError>>,
}

impl RoundResult {
    pub fn outcomes(&self) -> &[Result<PlayerResult, HandError>] {
        &self.outcomes
    }

    pub fn get(&self, seat: usize) -> Option<&Result<PlayerResult, HandError>> {
        self.outcomes.get(seat)
    }

    /// Results of the seats that were scored.
    pub fn scored(&self) -> impl Iterator<Item = &PlayerResult> {
        self.outcomes.iter().filter_map(|o| o.as_ref().ok())
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Arrange, classify and check specials for a single player.
pub fn score_player(
    player: &mut Player,
    policy: &dyn ArrangementPolicy,
) -> Result<PlayerResult, HandError> {
    let rows = *player.arrange(policy)?;
    let result = PlayerResult {
        seat: player.seat,
        name: player.name.clone(),
        rows,
        categories: classify_rows(&rows),
        special: detect_special(&rows),
    };
    log::debug!(
        "seat {} ({}) {} / {} / {} special={:?}",
        result.seat,
        result.name,
        result.categories[0],
        result.categories[1],
        result.categories[2],
        result.special
    );
    Ok(result)
}

/// Score every player with the policy at the same index, falling back to
/// [`PositionalPolicy`] where none is given.
///
/// ```
/// use pineapple_rs::arrange::{ArrangementPolicy, PositionalPolicy};
/// use pineapple_rs::deck::Deck;
/// use pineapple_rs::game::{play_round, Player};
///
/// let hands = Deck::standard().deal();
/// let mut players: Vec<Player> =
///     hands.into_iter().enumerate().map(|(i, h)| Player::new(i, format!("P{i}"), h)).collect();
/// let result = play_round(&mut players, &[&PositionalPolicy]);
/// assert_eq!(result.scored().count(), 4);
/// ```
pub fn play_round(players: &mut [Player], policies: &[&dyn ArrangementPolicy]) -> RoundResult {
    let score = |(i, player): (usize, &mut Player)| {
        let outcome = score_player(player, policy_at(policies, i));
        if let Err(err) = &outcome {
            log::warn!("seat {} ({}) not scored: {err}", player.seat, player.name);
        }
        outcome
    };

    #[cfg(feature = "parallel")]
    let outcomes = players.par_iter_mut().enumerate().map(score).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes = players.iter_mut().enumerate().map(score).collect();

    RoundResult { outcomes }
}

fn policy_at<'a>(policies: &[&'a dyn ArrangementPolicy], i: usize) -> &'a dyn ArrangementPolicy {
    policies.get(i).copied().unwrap_or(&PositionalPolicy)
}

/// Caller-owned game session: table config, shuffle RNG and round counter.
#[derive(Debug, Clone)]
pub struct Session {
    config: TableConfig,
    rng: ChaCha8Rng,
    round: u64,
}

impl Session {
    pub fn new(config: TableConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self { config, rng, round: 0 }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Rounds dealt so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Display name for a seat: "You" for the human seat, "Bot N" otherwise.
    pub fn seat_name(&self, seat: usize) -> String {
        if self.config.human_seat == Some(seat) {
            "You".to_string()
        } else {
            format!("Bot {seat}")
        }
    }

    /// Shuffle a fresh deck with the session RNG and deal four players.
    pub fn deal_round(&mut self) -> Vec<Player> {
        self.round += 1;
        let deck = Deck::standard().shuffled(&mut self.rng);
        self.seat_players(&deck)
    }

    /// Shuffle a fresh deck with the given RNG and deal four players.
    pub fn deal_round_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Player> {
        self.round += 1;
        let deck = Deck::standard().shuffled(rng);
        self.seat_players(&deck)
    }

    fn seat_players(&self, deck: &Deck) -> Vec<Player> {
        log::debug!("round {} seed={:?}", self.round, self.config.seed);
        deck.deal()
            .into_iter()
            .enumerate()
            .map(|(seat, hand)| Player::new(seat, self.seat_name(seat), hand))
            .collect()
    }

    /// Score a dealt round. Bots use the configured policy; the human seat uses
    /// `human` when given and the bot policy otherwise.
    pub fn play_round(
        &self,
        players: &mut [Player],
        human: Option<&dyn ArrangementPolicy>,
    ) -> RoundResult {
        let bot = self.config.bot_policy.bot_policy();
        let bot: &dyn ArrangementPolicy = bot.as_deref().unwrap_or(&PositionalPolicy);
        let policies: Vec<&dyn ArrangementPolicy> = (0..players.len())
            .map(|seat| match human {
                Some(h) if self.config.human_seat == Some(seat) => h,
                _ => bot,
            })
            .collect();
        play_round(players, &policies)
    }

    /// Deal and score a round in one step.
    pub fn play(&mut self, human: Option<&dyn ArrangementPolicy>) -> (Vec<Player>, RoundResult) {
        let mut players = self.deal_round();
        let result = self.play_round(&mut players, human);
        (players, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrange::HumanPolicy;

    #[test]
    fn seeded_sessions_deal_identically() {
        let mut a = Session::new(TableConfig::new(Some(7), None, PolicyKind::Positional));
        let mut b = Session::new(TableConfig::new(Some(7), None, PolicyKind::Positional));
        let pa = a.deal_round();
        let pb = b.deal_round();
        for (x, y) in pa.iter().zip(&pb) {
            assert_eq!(x.hand(), y.hand());
        }
        assert_eq!(a.round(), 1);
    }

    #[test]
    fn consecutive_rounds_differ() {
        let mut s = Session::new(TableConfig::new(Some(7), None, PolicyKind::Positional));
        let first = s.deal_round();
        let second = s.deal_round();
        assert_ne!(first[0].hand(), second[0].hand());
        assert_eq!(s.round(), 2);
    }

    #[test]
    fn player_rows_freeze_after_first_arrangement() {
        let mut s = Session::new(TableConfig::new(Some(1), None, PolicyKind::Positional));
        let mut players = s.deal_round();
        let p = &mut players[0];
        assert!(p.arrange(&PositionalPolicy).is_ok());
        assert_eq!(p.arrange(&PositionalPolicy).unwrap_err(), HandError::AlreadyArranged);
    }

    #[test]
    fn bad_human_split_only_fails_that_seat() {
        let mut s = Session::new(TableConfig::new(Some(3), Some(0), PolicyKind::Positional));
        let mut players = s.deal_round();
        let bad = HumanPolicy::new(Vec::new(), Vec::new(), Vec::new());
        let result = s.play_round(&mut players, Some(&bad));
        assert_eq!(result.len(), 4);
        assert!(matches!(result.get(0), Some(Err(HandError::InvalidArrangement(_)))));
        assert_eq!(result.scored().count(), 3);
        assert!(!players[0].is_arranged());
    }

    #[test]
    fn names_follow_human_seat() {
        let s = Session::new(TableConfig::default());
        assert_eq!(s.seat_name(0), "You");
        assert_eq!(s.seat_name(2), "Bot 2");
    }
}
