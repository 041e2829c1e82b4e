mod arrange;
mod layout;
mod menu;
mod table;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::*;
use ratatui::widgets::*;

use self::layout::{centered_rect, inner};

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Arrange => arrange::draw_arrange(f, app),
        Scene::Results => table::draw_results(f, app),
    }
    if app.help_open() {
        draw_help(f);
    }
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Arrange:", bold)),
        Line::from("- Left / Right: move cursor"),
        Line::from("- T / M / B: put card in Top / Middle / Bottom"),
        Line::from("- U or Backspace: unassign card"),
        Line::from("- Enter: submit rows"),
        Line::from("- Esc: menu"),
        Line::from(""),
        Line::from(Span::styled("Results:", bold)),
        Line::from("- Space: next round"),
        Line::from("- M: menu"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply and deal"),
        Line::from("- Esc: cancel"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
