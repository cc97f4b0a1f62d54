//! The profile summary and chat panes.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

/// Render the chat screen: profile summary on the left, guide chat on the
/// right.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
    .split(area);

  draw_profile(f, cols[0], app);
  draw_chat(f, cols[1], app);
}

// ─── Profile summary ──────────────────────────────────────────────────────────

fn draw_profile(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Your Profile ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = vec![
    labelled("Name", &app.form.name),
    labelled("Birthday", &app.form.birthday),
    labelled("Place of birth", &app.form.birthplace),
    labelled("Job title", &app.form.job_title),
  ];
  if let Some(result) = &app.result {
    lines.push(Line::default());
    lines.push(labelled("Sun sign", &result.sun_sign));
    lines.push(labelled("HD type", &result.hd_type));
  }

  f.render_widget(
    Paragraph::new(lines).wrap(Wrap { trim: false }),
    inner,
  );
}

fn labelled<'a>(label: &'a str, value: &'a str) -> Line<'a> {
  Line::from(vec![
    Span::styled(
      format!("{label}: "),
      Style::default().fg(Color::Gray),
    ),
    Span::raw(value),
  ])
}

// ─── Chat panel ───────────────────────────────────────────────────────────────

fn draw_chat(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Min(0), Constraint::Length(3)])
    .split(area);

  draw_messages(f, rows[0], app);
  draw_input(f, rows[1], app);
}

fn draw_messages(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Your Personalized Guide ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = Vec::new();
  for message in &app.messages {
    let (prefix, style) = if message.from_bot {
      ("guide ▸ ", Style::default().fg(Color::Cyan))
    } else {
      ("  you ▸ ", Style::default().fg(Color::White))
    };
    lines.push(Line::from(vec![
      Span::styled(prefix, style.add_modifier(Modifier::BOLD)),
      Span::raw(message.text.clone()),
    ]));
    lines.push(Line::default());
  }

  // Keep the latest messages in view.
  let visible = inner.height as usize;
  let scroll = lines.len().saturating_sub(visible) as u16;

  f.render_widget(
    Paragraph::new(lines)
      .wrap(Wrap { trim: false })
      .scroll((scroll, 0)),
    inner,
  );
}

fn draw_input(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Ask something… ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(area);
  f.render_widget(block, area);

  f.render_widget(
    Paragraph::new(Line::from(vec![
      Span::raw(app.input.clone()),
      Span::styled("▏", Style::default().fg(Color::Cyan)),
    ])),
    inner,
  );
}
