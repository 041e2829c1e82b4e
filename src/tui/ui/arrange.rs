use crate::hand::{RowKind, HAND_SIZE};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{columns, inner};
use super::table::{card_spans, render_card_widget};

pub(super) fn draw_arrange(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let status_height: u16 = 2 + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // header
            Constraint::Length(5),             // hand
            Constraint::Min(5),                // zones
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let header = Paragraph::new(Line::from(format!(
        "Round {}   Arrange your 13 cards: 3 top, 5 middle, 5 bottom",
        app.session.round()
    )))
    .block(Block::default().title("pineapple-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Hand: one slot per card, zone letter in the slot title
    let hand_area = chunks[1];
    f.render_widget(Block::default().title("Hand").borders(Borders::ALL), hand_area);
    if let Some(hand) = app.human_hand() {
        let slots = columns(inner(hand_area), HAND_SIZE);
        for (i, (card, slot)) in hand.as_slice().iter().zip(slots).enumerate() {
            let border = if i == app.cursor {
                Some(Color::Yellow)
            } else if app.zone(i).is_some() {
                Some(Color::DarkGray)
            } else {
                None
            };
            render_card_widget(f, slot, *card, border);
            if let Some(kind) = app.zone(i) {
                let tag = Paragraph::new(Span::styled(
                    zone_letter(kind),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center);
                f.render_widget(tag, Rect { height: 1, ..slot });
            }
        }
    }

    // Zones
    let zone_cols = columns(chunks[2], RowKind::ALL.len());
    for (kind, area) in RowKind::ALL.into_iter().zip(zone_cols) {
        let count = app.zone_count(kind);
        let full = count == kind.arity();
        let title = format!("{kind} {count}/{}", kind.arity());
        let mut block = Block::default().title(title).borders(Borders::ALL);
        if full {
            block = block.border_style(Style::default().fg(Color::Green));
        } else if count > kind.arity() {
            block = block.border_style(Style::default().fg(Color::Red));
        }
        let line = Line::from(card_spans(&app.zone_cards(kind)));
        f.render_widget(block, area);
        f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), inner(area));
    }

    // Status bar
    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let mut status = Vec::with_capacity(2);
    match app.arrange_error() {
        Some(err) => {
            status.push(Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))))
        }
        None => status.push(Line::from("")),
    }
    status.push(Line::from(Span::styled(
        "←/→ move • T/M/B assign • U unassign • Enter submit • Esc menu • ? help",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(Paragraph::new(status).wrap(Wrap { trim: true }), inner(status_area));
}

fn zone_letter(kind: RowKind) -> &'static str {
    match kind {
        RowKind::Top => "T",
        RowKind::Middle => "M",
        RowKind::Bottom => "B",
    }
}
