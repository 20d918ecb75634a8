use std::fs;

use bren::{
  App,
  app::{
    FieldId,
    Focus,
    Overlay,
  },
  config::Config,
  core::transform::RenameMode,
};
use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyModifiers,
};

fn key(code: KeyCode) -> KeyEvent
{
  KeyEvent::new(code, KeyModifiers::NONE)
}

fn app_in_tempdir(files: &[&str]) -> (tempfile::TempDir, App)
{
  let tmp = tempfile::tempdir().expect("tmp");
  for f in files
  {
    fs::write(tmp.path().join(f), b"x").unwrap();
  }
  let app = App::new(tmp.path().to_path_buf(), Config::default())
    .expect("app");
  (tmp, app)
}

#[test]
fn plan_follows_selection_and_field_edits()
{
  let (_tmp, mut app) = app_in_tempdir(&["report.doc", "summary.doc"]);
  assert_eq!(app.entries.len(), 2);

  app.select_all_files();
  assert!(app.plan.iter().all(|i| i.unchanged()));

  // Type the prefix into the text field, one edit event per char
  app.focus = Focus::Field(FieldId::Text);
  for ch in "2024_".chars()
  {
    bren::input::handle_key(&mut app, key(KeyCode::Char(ch))).unwrap();
  }
  let news: Vec<&str> =
    app.plan.iter().map(|i| i.new_name.as_str()).collect();
  assert_eq!(news, vec!["2024_report.doc", "2024_summary.doc"]);
  assert!(app.conflicts.is_empty());
}

#[test]
fn conflicts_block_commit_until_resolved()
{
  let (_tmp, mut app) = app_in_tempdir(&["a.txt", "x.txt"]);
  // Select only a.txt
  app.list_state.select(Some(0));
  app.toggle_select_current();
  assert_eq!(app.selection_names(), vec!["a.txt".to_string()]);

  app.mode = RenameMode::Replace;
  app.search.input = "a".to_string();
  app.replacement.input = "x".to_string();
  app.refresh_plan();
  assert!(app.conflicts.contains("x.txt"));

  app.request_commit();
  assert!(app.status_error.is_some());
  assert!(matches!(app.overlay, Overlay::None));
  // Nothing moved on disk
  assert!(app.cwd.join("a.txt").exists());
}

#[test]
fn commit_flow_confirms_then_renames()
{
  let (_tmp, mut app) = app_in_tempdir(&["one.log", "two.log"]);
  app.select_all_files();
  app.mode = RenameMode::Replace;
  app.search.input = ".log".to_string();
  app.replacement.input = ".txt".to_string();
  app.refresh_plan();
  assert!(app.conflicts.is_empty());

  app.request_commit();
  assert!(matches!(app.overlay, Overlay::Confirm(_)));

  // Answer 'y' to the confirm overlay
  bren::input::handle_key(&mut app, key(KeyCode::Char('y'))).unwrap();
  assert!(app.cwd.join("one.txt").exists());
  assert!(app.cwd.join("two.txt").exists());
  assert!(!app.cwd.join("one.log").exists());
  // Listing refreshed to the new names
  assert!(app.entries.iter().any(|e| e.name == "one.txt"));
  assert!(app.selected.is_empty());
}

#[test]
fn unchanged_rule_refuses_to_commit()
{
  let (_tmp, mut app) = app_in_tempdir(&["a.txt"]);
  app.select_all_files();
  app.refresh_plan();
  app.request_commit();
  assert!(app.status_error.is_some());
  assert!(matches!(app.overlay, Overlay::None));
}

#[test]
fn mode_cycle_moves_focus_to_the_right_field()
{
  let (_tmp, mut app) = app_in_tempdir(&["a.txt"]);
  assert_eq!(app.mode, RenameMode::Append);
  app.cycle_mode();
  assert_eq!(app.mode, RenameMode::Prepend);
  assert_eq!(app.focus, Focus::Field(FieldId::Text));
  app.cycle_mode();
  assert_eq!(app.mode, RenameMode::Replace);
  assert_eq!(app.focus, Focus::Field(FieldId::Search));
  // Tab walks search -> replacement -> list
  app.cycle_focus();
  assert_eq!(app.focus, Focus::Field(FieldId::Replacement));
  app.cycle_focus();
  assert_eq!(app.focus, Focus::List);
}

#[test]
fn field_editing_is_char_correct()
{
  let (_tmp, mut app) = app_in_tempdir(&["a.txt"]);
  app.focus = Focus::Field(FieldId::Text);
  for ch in "héllo".chars()
  {
    bren::input::handle_key(&mut app, key(KeyCode::Char(ch))).unwrap();
  }
  assert_eq!(app.text.input, "héllo");
  bren::input::handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
  assert_eq!(app.text.input, "héll");
  bren::input::handle_key(&mut app, key(KeyCode::Home)).unwrap();
  bren::input::handle_key(&mut app, key(KeyCode::Delete)).unwrap();
  assert_eq!(app.text.input, "éll");
  // Path separators never reach a name field
  bren::input::handle_key(&mut app, key(KeyCode::Char('/'))).unwrap();
  assert_eq!(app.text.input, "éll");
}
