use crate::arrange::PolicyKind;
use crate::game::{Session, TableConfig};

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Seed,
    HumanSeat,
    BotPolicy,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Seed, MenuItem::HumanSeat, MenuItem::BotPolicy];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Seed => match app.cfg_seed {
                Some(seed) => format!("Seed: {seed}"),
                None => "Seed: random".to_string(),
            },
            MenuItem::HumanSeat => {
                format!("Seat 0: {}", if app.cfg_human { "You" } else { "Bot" })
            }
            MenuItem::BotPolicy => format!("Bot Policy: {}", app.cfg_bot_policy),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Seed => {
                app.cfg_seed = Some(app.cfg_seed.map_or(0, |s| s.saturating_add(1)));
            }
            MenuItem::HumanSeat => app.cfg_human = !app.cfg_human,
            MenuItem::BotPolicy => app.cfg_bot_policy = next_bot_policy(app.cfg_bot_policy),
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            // Below zero wraps back to an entropy seed
            MenuItem::Seed => app.cfg_seed = app.cfg_seed.and_then(|s| s.checked_sub(1)),
            MenuItem::HumanSeat => app.cfg_human = !app.cfg_human,
            MenuItem::BotPolicy => app.cfg_bot_policy = next_bot_policy(app.cfg_bot_policy),
        }
    }
}

fn next_bot_policy(kind: PolicyKind) -> PolicyKind {
    match kind {
        PolicyKind::Positional => PolicyKind::Sorted,
        _ => PolicyKind::Positional,
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        match self.scene {
            Scene::Menu => self.cancel_menu(),
            _ => self.open_menu(),
        }
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        let config = *self.session.config();
        self.menu_index = 0;
        self.cfg_seed = config.seed;
        self.cfg_human = config.human_seat.is_some();
        self.cfg_bot_policy = config.bot_policy;
        self.scene = Scene::Menu;
    }

    /// Start a new session from the edited config and deal its first round.
    pub fn apply_menu(&mut self) {
        let config = TableConfig::new(
            self.cfg_seed,
            self.cfg_human.then_some(0),
            self.cfg_bot_policy,
        );
        log::info!("new session: {config:?}");
        self.session = Session::new(config);
        self.deal_next();
    }

    /// Leave the menu without changes; back to the round in progress, if any.
    pub fn cancel_menu(&mut self) {
        if !self.round_dealt() {
            return;
        }
        self.scene = if self.result().is_some() { Scene::Results } else { Scene::Arrange };
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_steps_down_to_random() {
        let mut app = AppState::default();
        assert_eq!(app.cfg_seed, None);
        app.menu_inc();
        assert_eq!(app.cfg_seed, Some(0));
        app.menu_dec();
        assert_eq!(app.cfg_seed, None);
    }

    #[test]
    fn bot_seat_zero_scores_without_arranging() {
        let mut app = AppState::default();
        app.menu_next();
        app.menu_inc();
        assert!(!app.cfg_human);
        app.apply_menu();
        assert_eq!(app.scene, Scene::Results);
        assert_eq!(app.result().map(|r| r.scored().count()), Some(4));
    }
}
