//! The intake form pane.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, FormState};

/// Render the four-field intake form.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Enter Your Information ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  // One two-line row per field, plus a trailing hint.
  let mut constraints =
    vec![Constraint::Length(2); FormState::FIELD_COUNT];
  constraints.push(Constraint::Length(1));
  constraints.push(Constraint::Min(0));

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints(constraints)
    .split(inner);

  for (idx, label) in FormState::LABELS.iter().enumerate() {
    draw_field(f, rows[idx], app, idx, label);
  }

  f.render_widget(
    Paragraph::new(Line::from(Span::styled(
      "Press Enter to discover your guide.",
      Style::default().fg(Color::DarkGray),
    ))),
    rows[FormState::FIELD_COUNT],
  );
}

fn draw_field(
  f:     &mut Frame,
  area:  Rect,
  app:   &App,
  idx:   usize,
  label: &str,
) {
  let focused = app.form.focus == idx;
  let value = app.form.field(idx);

  let label_style = if focused {
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default().fg(Color::Gray)
  };

  let mut value_spans = vec![Span::raw("  "), Span::raw(value.to_owned())];
  if focused {
    value_spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
  }

  let lines = vec![
    Line::from(Span::styled(format!("{label}:"), label_style)),
    Line::from(value_spans),
  ];

  f.render_widget(Paragraph::new(lines), area);
}
