pub mod format;
pub mod panes;

use ratatui::layout::{
  Alignment,
  Constraint,
  Direction,
  Layout,
  Rect,
};
use ratatui::style::{
  Color,
  Style,
};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::Overlay;

pub fn draw(
  f: &mut ratatui::Frame,
  app: &mut crate::App,
)
{
  // Split top header (1 row), content, and the field bar (3 rows)
  let full = f.area();
  let vchunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1),
      Constraint::Min(1),
      Constraint::Length(3),
    ])
    .split(full);

  draw_header(f, vchunks[0], app);

  let chunks = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
    .split(vchunks[1]);

  panes::draw_entries_panel(f, chunks[0], app);
  panes::draw_preview_panel(f, chunks[1], app);
  panes::draw_fields_bar(f, vchunks[2], app);

  if let Some(msg) = &app.status_error
  {
    panes::draw_error_bar(f, f.area(), msg);
  }

  // Overlays last so they sit on top
  match app.overlay
  {
    Overlay::Messages => panes::draw_messages_panel(f, f.area(), app),
    Overlay::Confirm(_) => panes::draw_confirm_panel(f, f.area(), app),
    Overlay::None =>
    {}
  }
}

fn draw_header(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
)
{
  // Left: {user}@{host}:{dir}; right: selection and conflict counts
  let user = whoami::username().unwrap_or_default();
  let host = whoami::hostname().unwrap_or_default();
  let left_full = format!("{}@{}:{}", user, host, app.cwd.display());

  let right_full = if app.conflicts.is_empty()
  {
    format!("{} selected", app.selected.len())
  }
  else
  {
    format!(
      "{} selected  {} conflict(s)",
      app.selected.len(),
      app.conflicts.len()
    )
  };

  let total = area.width as usize;
  let right_w = UnicodeWidthStr::width(right_full.as_str());
  let left_max = total.saturating_sub(right_w + 1);
  let left = format::truncate_to_width(&left_full, left_max);

  let style = Style::default().fg(Color::Gray);
  let right_style = if app.conflicts.is_empty()
  {
    style
  }
  else
  {
    Style::default().fg(Color::Red)
  };
  let left_p = Paragraph::new(left).alignment(Alignment::Left).style(style);
  let right_p =
    Paragraph::new(right_full).alignment(Alignment::Right).style(right_style);
  f.render_widget(left_p, area);
  f.render_widget(right_p, area);
}
