//! Core application state, used both by the TUI and integration tests.
//!
//! [`App`] models the batch-rename dialog: the directory listing with its
//! selection, the rename mode and rule fields, and the live plan with its
//! conflict set. The plan is recomputed from the current field values on
//! every edit and discarded after commit; nothing here touches the
//! filesystem except entry refresh and the commit itself.

use std::{
  collections::HashSet,
  io,
  path::PathBuf,
};

use ratatui::widgets::ListState;

use crate::{
  config::Config,
  core::{
    conflicts::{
      self,
      NameSet,
    },
    fs_ops,
    listing::{
      self,
      EntryInfo,
    },
    transform::{
      self,
      RenameItem,
      RenameMode,
      RenameRule,
    },
  },
};

/// Which rule field a key press edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId
{
  Text,
  Search,
  Replacement,
}

/// Where key presses are routed: the entry list or one of the rule fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus
{
  List,
  Field(FieldId),
}

#[derive(Debug, Clone, Default)]
pub struct FieldState
{
  pub input:  String,
  /// Cursor position in chars, not bytes.
  pub cursor: usize,
}

impl FieldState
{
  fn byte_at(
    &self,
    char_idx: usize,
  ) -> usize
  {
    self
      .input
      .char_indices()
      .nth(char_idx)
      .map(|(b, _)| b)
      .unwrap_or(self.input.len())
  }

  pub fn insert(
    &mut self,
    ch: char,
  )
  {
    let at = self.byte_at(self.cursor);
    self.input.insert(at, ch);
    self.cursor += 1;
  }

  pub fn backspace(&mut self)
  {
    if self.cursor == 0
    {
      return;
    }
    let at = self.byte_at(self.cursor - 1);
    self.input.remove(at);
    self.cursor -= 1;
  }

  pub fn delete(&mut self)
  {
    if self.cursor >= self.input.chars().count()
    {
      return;
    }
    let at = self.byte_at(self.cursor);
    self.input.remove(at);
  }

  pub fn move_left(&mut self)
  {
    self.cursor = self.cursor.saturating_sub(1);
  }

  pub fn move_right(&mut self)
  {
    self.cursor = (self.cursor + 1).min(self.input.chars().count());
  }

  pub fn move_home(&mut self)
  {
    self.cursor = 0;
  }

  pub fn move_end(&mut self)
  {
    self.cursor = self.input.chars().count();
  }
}

#[derive(Debug, Clone)]
pub struct ConfirmState
{
  pub title:    String,
  pub question: String,
}

#[derive(Debug, Clone)]
pub enum Overlay
{
  None,
  Confirm(Box<ConfirmState>),
  Messages,
}

/// Runtime state for bren: listing, selection, rule fields, live plan.
pub struct App
{
  pub cwd:    PathBuf,
  pub config: Config,

  pub entries:    Vec<EntryInfo>,
  pub list_state: ListState,
  pub selected:   HashSet<PathBuf>,
  siblings:       NameSet,

  pub mode:        RenameMode,
  pub focus:       Focus,
  pub text:        FieldState,
  pub search:      FieldState,
  pub replacement: FieldState,

  pub plan:      Vec<RenameItem>,
  pub conflicts: HashSet<String>,

  pub overlay:      Overlay,
  pub messages:     Vec<String>,
  pub status_error: Option<String>,

  pub should_quit:       bool,
  pub force_full_redraw: bool,
}

impl App
{
  pub fn new(
    cwd: PathBuf,
    config: Config,
  ) -> io::Result<Self>
  {
    let mut app = Self {
      cwd,
      config,
      entries: Vec::new(),
      list_state: ListState::default(),
      selected: HashSet::new(),
      siblings: NameSet::default(),
      mode: RenameMode::Append,
      focus: Focus::List,
      text: FieldState::default(),
      search: FieldState::default(),
      replacement: FieldState::default(),
      plan: Vec::new(),
      conflicts: HashSet::new(),
      overlay: Overlay::None,
      messages: Vec::new(),
      status_error: None,
      should_quit: false,
      force_full_redraw: false,
    };
    app.refresh_entries()?;
    if !app.entries.is_empty()
    {
      app.list_state.select(Some(0));
    }
    Ok(app)
  }

  /// Re-read the directory and the sibling snapshot, dropping selected
  /// paths that no longer exist, then recompute the plan.
  pub fn refresh_entries(&mut self) -> io::Result<()>
  {
    self.entries = listing::read_dir_sorted(
      &self.cwd,
      self.config.ui.show_hidden,
      self.config.ui.max_list_items,
    )?;
    self.siblings = listing::sibling_names(&self.cwd)?;
    let live: HashSet<PathBuf> =
      self.entries.iter().map(|e| e.path.clone()).collect();
    self.selected.retain(|p| live.contains(p));
    let len = self.entries.len();
    match self.list_state.selected()
    {
      Some(i) if i >= len && len > 0 => self.list_state.select(Some(len - 1)),
      Some(_) if len == 0 => self.list_state.select(None),
      None if len > 0 => self.list_state.select(Some(0)),
      _ =>
      {}
    }
    self.refresh_plan();
    Ok(())
  }

  /// Names of the selected entries, in listing order.
  pub fn selection_names(&self) -> Vec<String>
  {
    self
      .entries
      .iter()
      .filter(|e| self.selected.contains(&e.path))
      .map(|e| e.name.clone())
      .collect()
  }

  /// The rule described by the current mode and field values.
  pub fn rule(&self) -> RenameRule
  {
    match self.mode
    {
      RenameMode::Prepend =>
      {
        RenameRule::Prepend { text: self.text.input.clone() }
      }
      RenameMode::Replace => RenameRule::Replace {
        search:      self.search.input.clone(),
        replacement: self.replacement.input.clone(),
      },
      // Format has no semantics; the mode cycle never lands on it
      _ => RenameRule::Append { text: self.text.input.clone() },
    }
  }

  /// Recompute the plan and conflict set from the current field values.
  /// Called on every edit event.
  pub fn refresh_plan(&mut self)
  {
    let rule = self.rule();
    let names = self.selection_names();
    self.plan = transform::plan_batch(&rule, &names);
    self.conflicts = conflicts::detect_conflicts(&self.plan, &self.siblings);
    self.status_error = None;
  }

  pub fn cycle_mode(&mut self)
  {
    self.mode = self.mode.next();
    self.focus = Focus::Field(self.first_field());
    self.refresh_plan();
  }

  pub fn first_field(&self) -> FieldId
  {
    match self.mode
    {
      RenameMode::Replace => FieldId::Search,
      _ => FieldId::Text,
    }
  }

  pub fn active_field_mut(&mut self) -> Option<&mut FieldState>
  {
    match self.focus
    {
      Focus::Field(FieldId::Text) => Some(&mut self.text),
      Focus::Field(FieldId::Search) => Some(&mut self.search),
      Focus::Field(FieldId::Replacement) => Some(&mut self.replacement),
      Focus::List => None,
    }
  }

  /// Advance focus: list -> first field -> (second field) -> list.
  pub fn cycle_focus(&mut self)
  {
    self.focus = match (self.focus, self.mode)
    {
      (Focus::List, _) => Focus::Field(self.first_field()),
      (Focus::Field(FieldId::Search), RenameMode::Replace) =>
      {
        Focus::Field(FieldId::Replacement)
      }
      _ => Focus::List,
    };
  }

  pub fn selected_entry(&self) -> Option<&EntryInfo>
  {
    self.list_state.selected().and_then(|i| self.entries.get(i))
  }

  pub fn move_cursor(
    &mut self,
    delta: isize,
  )
  {
    if self.entries.is_empty()
    {
      return;
    }
    let len = self.entries.len() as isize;
    let cur = self.list_state.selected().unwrap_or(0) as isize;
    let new = (cur + delta).clamp(0, len - 1);
    self.list_state.select(Some(new as usize));
  }

  pub fn toggle_select_current(&mut self)
  {
    let path = match self.selected_entry()
    {
      Some(e) => e.path.clone(),
      None => return,
    };
    if !self.selected.remove(&path)
    {
      self.selected.insert(path);
    }
    self.refresh_plan();
  }

  pub fn select_all_files(&mut self)
  {
    self.selected = self
      .entries
      .iter()
      .filter(|e| !e.is_dir)
      .map(|e| e.path.clone())
      .collect();
    self.refresh_plan();
  }

  pub fn clear_selection(&mut self)
  {
    self.selected.clear();
    self.refresh_plan();
  }

  pub fn add_message(
    &mut self,
    msg: &str,
  )
  {
    crate::trace::log(format!("[msg] {}", msg));
    self.messages.push(msg.to_string());
  }

  pub fn set_error(
    &mut self,
    msg: &str,
  )
  {
    self.status_error = Some(msg.to_string());
    self.add_message(msg);
  }

  /// Detail line for the highlighted entry when its planned name conflicts.
  pub fn conflict_detail_for_cursor(&self) -> Option<String>
  {
    let entry = self.selected_entry()?;
    let item =
      self.plan.iter().find(|i| i.current == entry.name)?;
    if !self.conflicts.contains(&item.new_name)
    {
      return None;
    }
    let existing = self.entries.iter().find(|e| e.name == item.new_name);
    let age = conflicts::conflict_age(
      entry.mtime,
      existing.and_then(|e| e.mtime),
    );
    let is_dir = existing.map(|e| e.is_dir).unwrap_or(false);
    Some(conflicts::conflict_detail(&item.new_name, is_dir, age))
  }

  /// Ask to commit: refuse with an error while conflicts remain, otherwise
  /// confirm (when configured) and rename.
  pub fn request_commit(&mut self)
  {
    if self.selected.is_empty()
    {
      self.set_error("Rename: no files selected");
      return;
    }
    if !self.conflicts.is_empty()
    {
      self.set_error(&format!(
        "Rename blocked: {} name(s) already exist",
        self.conflicts.len()
      ));
      return;
    }
    if self.plan.iter().all(|i| i.unchanged())
    {
      self.set_error("Rename: rule leaves all names unchanged");
      return;
    }
    if self.config.ui.confirm_rename
    {
      let changed = self.plan.iter().filter(|i| !i.unchanged()).count();
      self.overlay = Overlay::Confirm(Box::new(ConfirmState {
        title:    "Confirm Rename".to_string(),
        question: format!("Rename {} item(s)? (y/n)", changed),
      }));
      self.force_full_redraw = true;
    }
    else
    {
      self.commit_renames();
    }
  }

  /// Apply the plan, then re-read the directory so the new names show up.
  pub fn commit_renames(&mut self)
  {
    let outcome = fs_ops::commit_plan(&self.cwd, &self.plan);
    self.overlay = Overlay::None;
    self.selected.clear();
    // Refresh first: it recomputes the (now empty) plan and clears the
    // status line, which must not eat the outcome report below
    if let Err(e) = self.refresh_entries()
    {
      self.add_message(&format!("Refresh failed: {}", e));
    }
    for m in &outcome.messages
    {
      crate::trace::log(format!("[rename] {}", m));
      self.messages.push(m.clone());
    }
    self.add_message(&outcome.summary());
    if outcome.failed > 0
    {
      self.status_error = Some(outcome.summary());
    }
    self.force_full_redraw = true;
  }
}
