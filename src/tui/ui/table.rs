use crate::cards::{Card, Suit};
use crate::game::{PlayerResult, RoundResult};
use crate::hand::{HandError, RowKind};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{columns, inner};

pub(super) fn draw_results(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(8),    // seats
            Constraint::Length(3), // keys
        ])
        .split(size);

    let header = Paragraph::new(Line::from(format!(
        "Round {}   Seed: {}   Bots: {}",
        app.session.round(),
        app.session.config().seed.map_or_else(|| "random".to_string(), |s| s.to_string()),
        app.session.config().bot_policy,
    )))
    .block(Block::default().title("pineapple-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let seats_area = chunks[1];
    if let Some(result) = app.result() {
        draw_seats(f, seats_area, app, result);
    } else {
        let para = Paragraph::new("No round scored yet.")
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(para, seats_area);
    }

    let keys = Paragraph::new(Line::from("Space next round • M menu • ? help • Q quit"))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(keys, chunks[2]);
}

fn draw_seats(f: &mut Frame, area: Rect, app: &AppState, result: &RoundResult) {
    let cols = columns(area, result.len());
    for (seat, outcome) in result.outcomes().iter().enumerate() {
        let Some(&seat_area) = cols.get(seat) else {
            continue;
        };
        let name = app.players.get(seat).map_or("?", |p| p.name());
        match outcome {
            Ok(pr) => render_player_result(f, seat_area, name, pr),
            Err(err) => render_player_error(f, seat_area, name, err),
        }
    }
}

fn render_player_result(f: &mut Frame, area: Rect, name: &str, pr: &PlayerResult) {
    let mut block =
        Block::default().title(format!("{name} (seat {})", pr.seat)).borders(Borders::ALL);
    if pr.special.is_some() {
        block = block.border_style(Style::default().fg(Color::Green));
    }
    let dim = Style::default().add_modifier(Modifier::DIM);
    let mut lines: Vec<Line> = Vec::with_capacity(10);
    for kind in RowKind::ALL {
        lines.push(Line::from(Span::styled(format!("{kind}:"), dim)));
        let mut spans = card_spans(pr.rows.row(kind));
        spans.push(Span::raw(format!("  {}", pr.category(kind))));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    match pr.special {
        Some(special) => lines.push(Line::from(Span::styled(
            format!("Special: {special}"),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))),
        None => lines.push(Line::from(vec![Span::raw("Special: "), Span::styled("--", dim)])),
    }
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn render_player_error(f: &mut Frame, area: Rect, name: &str, err: &HandError) {
    let block = Block::default()
        .title(name.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let line =
        Line::from(Span::styled(format!("Not scored: {err}"), Style::default().fg(Color::Red)));
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), inner(area));
}

pub(super) fn suit_style(s: Suit) -> Style {
    if s.is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

pub(super) fn card_spans(cards: &[Card]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(cards.len() * 2);
    for (i, c) in cards.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(c.face(), suit_style(c.suit())));
    }
    spans
}

pub(super) fn render_card_widget(f: &mut Frame, area: Rect, card: Card, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = Line::from(Span::styled(card.face(), suit_style(card.suit())));
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
