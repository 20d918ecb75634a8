//! Input handling for keyboard events.

use std::io;

use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyEventKind,
  KeyModifiers,
};

use crate::app::{
  App,
  Focus,
  Overlay,
};

/// Accept a terminal key event and mutate the [`App`] accordingly.
///
/// Returns `Ok(true)` when the caller should exit. Keys are routed by focus:
/// list navigation and selection while the list has focus, text editing
/// while a rule field does. Overlays swallow everything first.
pub fn handle_key(
  app: &mut App,
  key: KeyEvent,
) -> io::Result<bool>
{
  // Ignore key release/repeat events to avoid double-processing (esp. on
  // Windows)
  if key.kind != KeyEventKind::Press
  {
    return Ok(false);
  }

  match app.overlay
  {
    Overlay::Confirm(_) => return Ok(handle_confirm_key(app, key)),
    Overlay::Messages =>
    {
      app.overlay = Overlay::None;
      app.force_full_redraw = true;
      return Ok(false);
    }
    Overlay::None =>
    {}
  }

  // Keys that behave the same regardless of focus
  match key.code
  {
    KeyCode::Esc =>
    {
      if matches!(app.focus, Focus::Field(_))
      {
        app.focus = Focus::List;
      }
      else
      {
        app.should_quit = true;
        return Ok(true);
      }
      return Ok(false);
    }
    KeyCode::Tab =>
    {
      app.cycle_focus();
      return Ok(false);
    }
    KeyCode::Enter =>
    {
      app.request_commit();
      return Ok(false);
    }
    _ =>
    {}
  }

  if matches!(app.focus, Focus::Field(_))
  {
    handle_field_key(app, key);
    return Ok(false);
  }

  handle_list_key(app, key)
}

fn handle_confirm_key(
  app: &mut App,
  key: KeyEvent,
) -> bool
{
  match key.code
  {
    KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter =>
    {
      app.commit_renames();
    }
    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc =>
    {
      app.overlay = Overlay::None;
      app.force_full_redraw = true;
    }
    _ =>
    {}
  }
  false
}

fn handle_field_key(
  app: &mut App,
  key: KeyEvent,
)
{
  // Ctrl-modified keys are reserved (nothing bound today)
  if key.modifiers.contains(KeyModifiers::CONTROL)
  {
    return;
  }
  let mut edited = false;
  if let Some(field) = app.active_field_mut()
  {
    match key.code
    {
      KeyCode::Char(ch) =>
      {
        if !is_name_hostile(ch)
        {
          field.insert(ch);
          edited = true;
        }
      }
      KeyCode::Backspace =>
      {
        field.backspace();
        edited = true;
      }
      KeyCode::Delete =>
      {
        field.delete();
        edited = true;
      }
      KeyCode::Left => field.move_left(),
      KeyCode::Right => field.move_right(),
      KeyCode::Home => field.move_home(),
      KeyCode::End => field.move_end(),
      _ =>
      {}
    }
  }
  if edited
  {
    app.refresh_plan();
  }
}

fn handle_list_key(
  app: &mut App,
  key: KeyEvent,
) -> io::Result<bool>
{
  match key.code
  {
    KeyCode::Char('q') =>
    {
      app.should_quit = true;
      return Ok(true);
    }
    KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
    KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
    KeyCode::Char('g') | KeyCode::Home => app.move_cursor(isize::MIN / 2),
    KeyCode::Char('G') | KeyCode::End => app.move_cursor(isize::MAX / 2),
    KeyCode::Char(' ') => app.toggle_select_current(),
    KeyCode::Char('a') => app.select_all_files(),
    KeyCode::Char('n') => app.clear_selection(),
    KeyCode::Char('m') => app.cycle_mode(),
    KeyCode::Char('r') => app.refresh_entries()?,
    KeyCode::Char('?') =>
    {
      app.overlay = Overlay::Messages;
      app.force_full_redraw = true;
    }
    _ =>
    {}
  }
  Ok(false)
}

/// Characters that can never appear in a file name component.
fn is_name_hostile(ch: char) -> bool
{
  ch == '/' || ch == '\0'
}
