use crate::arrange::{ArrangementPolicy, HumanPolicy, PolicyKind};
use crate::cards::Card;
use crate::game::{Player, RoundResult, Session, TableConfig};
use crate::hand::{Hand, RowKind, HAND_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Arrange,
    Results,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    CursorLeft,
    CursorRight,
    Assign(RowKind),
    Unassign,
    Submit,
    NextRound,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub session: Session,
    // Seats of the current round, in seat order
    pub players: Vec<Player>,
    // Index into the human hand
    pub cursor: usize,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_seed: Option<u64>,
    pub cfg_human: bool,
    pub cfg_bot_policy: PolicyKind,
    zones: [Option<RowKind>; HAND_SIZE],
    result: Option<RoundResult>,
    arrange_error: Option<String>,
    help_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl AppState {
    pub fn new(config: TableConfig) -> Self {
        Self {
            scene: Scene::Menu,
            session: Session::new(config),
            players: Vec::new(),
            cursor: 0,
            menu_index: 0,
            cfg_seed: config.seed,
            cfg_human: config.human_seat.is_some(),
            cfg_bot_policy: config.bot_policy,
            zones: [None; HAND_SIZE],
            result: None,
            arrange_error: None,
            help_open: false,
        }
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub fn arrange_error(&self) -> Option<&str> {
        self.arrange_error.as_deref()
    }

    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    pub fn round_dealt(&self) -> bool {
        !self.players.is_empty()
    }

    pub fn human_seat(&self) -> Option<usize> {
        self.session.config().human_seat
    }

    pub fn human_hand(&self) -> Option<&Hand> {
        let seat = self.human_seat()?;
        self.players.get(seat).map(Player::hand)
    }

    /// Zone the card at `idx` of the human hand is assigned to.
    pub fn zone(&self, idx: usize) -> Option<RowKind> {
        self.zones.get(idx).copied().flatten()
    }

    pub fn zone_count(&self, kind: RowKind) -> usize {
        self.zones.iter().filter(|z| **z == Some(kind)).count()
    }

    /// Cards currently assigned to `kind`, in hand order.
    pub fn zone_cards(&self, kind: RowKind) -> Vec<Card> {
        let Some(hand) = self.human_hand() else {
            return Vec::new();
        };
        hand.as_slice()
            .iter()
            .zip(&self.zones)
            .filter(|(_, z)| **z == Some(kind))
            .map(|(c, _)| *c)
            .collect()
    }

    /// Returns true when the action changed game state (a round was scored or
    /// dealt, or a card was assigned).
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::MenuNext => {
                self.menu_next();
                false
            }
            InputAction::MenuPrev => {
                self.menu_prev();
                false
            }
            InputAction::MenuInc => {
                self.menu_inc();
                false
            }
            InputAction::MenuDec => {
                self.menu_dec();
                false
            }
            InputAction::MenuApply => {
                self.apply_menu();
                true
            }
            InputAction::MenuCancel => {
                self.cancel_menu();
                false
            }
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
                false
            }
            InputAction::CursorLeft => {
                if self.scene == Scene::Arrange {
                    self.cursor = self.cursor.saturating_sub(1);
                }
                false
            }
            InputAction::CursorRight => {
                if self.scene == Scene::Arrange {
                    self.cursor = (self.cursor + 1).min(HAND_SIZE - 1);
                }
                false
            }
            InputAction::Assign(kind) => self.assign(kind),
            InputAction::Unassign => {
                if self.scene != Scene::Arrange {
                    return false;
                }
                self.zones[self.cursor] = None;
                true
            }
            InputAction::Submit => self.submit(),
            InputAction::NextRound => {
                if self.scene != Scene::Results {
                    return false;
                }
                self.deal_next();
                true
            }
        }
    }

    fn assign(&mut self, kind: RowKind) -> bool {
        if self.scene != Scene::Arrange {
            return false;
        }
        self.zones[self.cursor] = Some(kind);
        self.arrange_error = None;
        self.cursor = (self.cursor + 1).min(HAND_SIZE - 1);
        true
    }

    /// Deal a fresh round. With a human seat the app waits on the Arrange scene;
    /// otherwise every seat is scored right away.
    pub fn deal_next(&mut self) {
        self.players = self.session.deal_round();
        self.result = None;
        self.zones = [None; HAND_SIZE];
        self.cursor = 0;
        self.arrange_error = None;
        if self.human_seat().is_some() {
            self.scene = Scene::Arrange;
        } else {
            self.result = Some(self.session.play_round(&mut self.players, None));
            self.scene = Scene::Results;
        }
    }

    /// Score the round with the human's zones. An invalid split stays on the
    /// Arrange scene with an error and nothing is frozen.
    fn submit(&mut self) -> bool {
        if self.scene != Scene::Arrange {
            return false;
        }
        let Some(hand) = self.human_hand() else {
            return false;
        };
        let policy = HumanPolicy::new(
            self.zone_cards(RowKind::Top),
            self.zone_cards(RowKind::Middle),
            self.zone_cards(RowKind::Bottom),
        );
        if let Err(err) = policy.arrange(hand) {
            log::info!("human split rejected: {err}");
            self.arrange_error = Some(format!("Invalid split: {err}"));
            return false;
        }
        self.result = Some(self.session.play_round(&mut self.players, Some(&policy)));
        self.arrange_error = None;
        self.scene = Scene::Results;
        true
    }
}
