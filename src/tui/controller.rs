use crate::hand::RowKind;
use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Map a key to an action for the current scene. Returns true to quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    let action = match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => InputAction::MenuPrev,
            KeyCode::Down => InputAction::MenuNext,
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => InputAction::MenuInc,
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => InputAction::MenuDec,
            KeyCode::Enter => InputAction::MenuApply,
            KeyCode::Esc => InputAction::MenuCancel,
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => return false,
        },
        Scene::Arrange => match code {
            KeyCode::Left => InputAction::CursorLeft,
            KeyCode::Right => InputAction::CursorRight,
            KeyCode::Char('t') | KeyCode::Char('T') => InputAction::Assign(RowKind::Top),
            KeyCode::Char('m') | KeyCode::Char('M') => InputAction::Assign(RowKind::Middle),
            KeyCode::Char('b') | KeyCode::Char('B') => InputAction::Assign(RowKind::Bottom),
            KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => {
                InputAction::Unassign
            }
            KeyCode::Enter => InputAction::Submit,
            KeyCode::Esc => InputAction::ToggleMenu,
            _ => return false,
        },
        Scene::Results => match code {
            KeyCode::Char(' ') => InputAction::NextRound,
            KeyCode::Char('m') | KeyCode::Char('M') => InputAction::ToggleMenu,
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => return false,
        },
    };
    let _ = app.handle_input(action);
    false
}
