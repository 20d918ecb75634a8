use ratatui::{
  layout::Rect,
  style::{
    Color,
    Modifier,
    Style,
  },
  text::{
    Line,
    Span,
  },
  widgets::{
    Block,
    Borders,
    Clear,
    List,
    ListItem,
    Paragraph,
    Wrap,
  },
};

use crate::app::{
  App,
  FieldId,
  FieldState,
  Focus,
  Overlay,
};

pub fn draw_entries_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &mut App,
)
{
  let items: Vec<ListItem> = app
    .entries
    .iter()
    .map(|e| {
      let mark = if app.selected.contains(&e.path) { "[x] " } else { "[ ] " };
      let name = if e.is_dir
      {
        format!("{}{}/", mark, e.name)
      }
      else
      {
        format!("{}{}", mark, e.name)
      };
      let style = if e.is_dir
      {
        Style::default().fg(Color::Blue)
      }
      else
      {
        Style::default()
      };
      ListItem::new(Line::from(Span::styled(name, style)))
    })
    .collect();

  let focused = matches!(app.focus, Focus::List);
  let border_style = if focused
  {
    Style::default().fg(Color::Yellow)
  }
  else
  {
    Style::default()
  };
  let list = List::new(items)
    .block(
      Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Files"),
    )
    .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
  f.render_stateful_widget(list, area, &mut app.list_state);
}

pub fn draw_preview_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let max_len = app.config.ui.max_display_len;
  let mut lines: Vec<Line> = Vec::new();
  if app.plan.is_empty()
  {
    lines.push(Line::from(Span::styled(
      "Select files with <space>, then type the rule text.",
      Style::default().fg(Color::DarkGray),
    )));
  }
  for item in &app.plan
  {
    let current =
      crate::core::transform::truncate_display(&item.current, max_len);
    let new_name =
      crate::core::transform::truncate_display(&item.new_name, max_len);
    let conflict = app.conflicts.contains(&item.new_name);
    let arrow_style = Style::default().fg(Color::DarkGray);
    let new_style = if conflict
    {
      Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }
    else if item.unchanged()
    {
      Style::default().fg(Color::DarkGray)
    }
    else
    {
      Style::default().fg(Color::Green)
    };
    lines.push(Line::from(vec![
      Span::raw(current),
      Span::styled(" -> ", arrow_style),
      Span::styled(new_name, new_style),
    ]));
  }

  if let Some(detail) = app.conflict_detail_for_cursor()
  {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
      detail,
      Style::default().fg(Color::Red),
    )));
    if let Some(entry) = app.selected_entry()
      && let Some(mtime) = entry.mtime
    {
      let fmt = app
        .config
        .ui
        .date_format
        .as_deref()
        .unwrap_or("%Y-%m-%d %H:%M");
      lines.push(Line::from(Span::styled(
        format!(
          "Selected: {}  {}  last modified {}",
          entry.name,
          crate::ui::format::human_size(entry.size),
          crate::ui::format::format_time_abs(mtime, fmt)
        ),
        Style::default().fg(Color::DarkGray),
      )));
    }
  }

  let title = format!("Preview ({})", app.mode.label());
  let panel = Paragraph::new(lines)
    .block(Block::default().borders(Borders::ALL).title(title));
  f.render_widget(panel, area);
}

pub fn draw_fields_bar(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let mut spans: Vec<Span> = vec![
    Span::styled(
      format!("[{}] ", app.mode.label()),
      Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ),
  ];
  match app.mode
  {
    crate::core::transform::RenameMode::Replace =>
    {
      push_field(
        &mut spans,
        "Find: ",
        &app.search,
        app.focus == Focus::Field(FieldId::Search),
      );
      spans.push(Span::raw("  "));
      push_field(
        &mut spans,
        "Replace: ",
        &app.replacement,
        app.focus == Focus::Field(FieldId::Replacement),
      );
    }
    _ =>
    {
      push_field(
        &mut spans,
        "Text: ",
        &app.text,
        app.focus == Focus::Field(FieldId::Text),
      );
    }
  }

  let hint =
    "tab focus  m mode  space select  a all  n none  enter rename  q quit";
  let block = Block::default().borders(Borders::ALL).title("Rule");
  let inner = block.inner(area);
  let bar = Paragraph::new(Line::from(spans)).block(block);
  f.render_widget(bar, area);
  // Right-aligned key hint in the same row, after the field text
  let hint_p = Paragraph::new(Line::from(Span::styled(
    hint,
    Style::default().fg(Color::DarkGray),
  )))
  .alignment(ratatui::layout::Alignment::Right);
  f.render_widget(hint_p, inner);
}

/// Render one labelled field; the focused field shows a reversed cursor
/// cell at the edit position.
fn push_field(
  spans: &mut Vec<Span<'static>>,
  label: &'static str,
  field: &FieldState,
  focused: bool,
)
{
  let label_style = if focused
  {
    Style::default().fg(Color::Yellow)
  }
  else
  {
    Style::default().fg(Color::Gray)
  };
  spans.push(Span::styled(label, label_style));
  if !focused
  {
    spans.push(Span::raw(field.input.clone()));
    return;
  }
  let chars: Vec<char> = field.input.chars().collect();
  let cur = field.cursor.min(chars.len());
  let before: String = chars[..cur].iter().collect();
  let at: String = chars
    .get(cur)
    .map(|c| c.to_string())
    .unwrap_or_else(|| " ".to_string());
  let after: String =
    if cur < chars.len() { chars[cur + 1..].iter().collect() } else { String::new() };
  spans.push(Span::raw(before));
  spans
    .push(Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)));
  spans.push(Span::raw(after));
}

pub fn draw_error_bar(
  f: &mut ratatui::Frame,
  area: Rect,
  msg: &str,
)
{
  if area.height == 0
  {
    return;
  }
  let bar = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
  let p = Paragraph::new(Line::from(Span::styled(
    format!(" {} ", msg),
    Style::default().fg(Color::White).bg(Color::Red),
  )));
  f.render_widget(Clear, bar);
  f.render_widget(p, bar);
}

pub fn draw_messages_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let width = (area.width.saturating_mul(70) / 100).max(30).min(area.width);
  let height =
    (area.height.saturating_mul(60) / 100).max(6).min(area.height);
  let popup = Rect::new(
    area.x + area.width.saturating_sub(width) / 2,
    area.y + area.height.saturating_sub(height) / 2,
    width,
    height,
  );
  f.render_widget(Clear, popup);

  let mut lines: Vec<Line> = app
    .messages
    .iter()
    .rev()
    .take(height.saturating_sub(2) as usize)
    .map(|m| Line::from(m.clone()))
    .collect();
  if lines.is_empty()
  {
    lines.push(Line::from(Span::styled(
      "No messages yet.",
      Style::default().fg(Color::DarkGray),
    )));
  }
  let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
    Block::default().borders(Borders::ALL).title(Span::styled(
      "Messages",
      Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )),
  );
  f.render_widget(panel, popup);
}

pub fn draw_confirm_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let state = match app.overlay
  {
    Overlay::Confirm(ref s) => s.as_ref(),
    _ => return,
  };

  let popup = Rect::new(
    area.x + area.width.saturating_sub(60) / 2,
    area.y + area.height.saturating_sub(5) / 2,
    60.min(area.width),
    5.min(area.height),
  );
  f.render_widget(Clear, popup);

  let lines = vec![
    Line::from(state.question.clone()),
    Line::from(Span::styled(
      "y: rename   n: cancel",
      Style::default().fg(Color::DarkGray),
    )),
  ];
  let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
    Block::default().borders(Borders::ALL).title(Span::styled(
      state.title.clone(),
      Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )),
  );
  f.render_widget(panel, popup);
}
