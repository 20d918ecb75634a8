use std::{
  io,
  path::{
    Path,
    PathBuf,
  },
  time::SystemTime,
};

use crate::core::conflicts::NameSet;

/// One directory entry as shown in the selection pane.
#[derive(Debug, Clone)]
pub struct EntryInfo
{
  pub name:   String,
  pub path:   PathBuf,
  pub is_dir: bool,
  pub size:   u64,
  pub mtime:  Option<SystemTime>,
}

/// Read a directory into entries sorted dirs-first by case-insensitive name.
/// Hidden files (dotfiles) are filtered when `show_hidden` is false; the
/// result is capped at `max_items`.
pub fn read_dir_sorted(
  path: &Path,
  show_hidden: bool,
  max_items: usize,
) -> io::Result<Vec<EntryInfo>>
{
  use std::fs;
  let mut entries: Vec<EntryInfo> = fs::read_dir(path)?
    .filter_map(|res| res.ok())
    .filter_map(|e| {
      let path = e.path();
      let name = e.file_name().to_string_lossy().to_string();
      if !show_hidden && name.starts_with('.')
      {
        return None;
      }
      let ft = e.file_type().ok()?;
      let meta = fs::metadata(&path).ok();
      let size = meta.as_ref().map(|m| m.len()).unwrap_or(0);
      let mtime = meta.as_ref().and_then(|m| m.modified().ok());
      Some(EntryInfo { name, path, is_dir: ft.is_dir(), size, mtime })
    })
    .take(max_items)
    .collect();

  entries.sort_by(|a, b| {
    // Always keep directories before files
    match (a.is_dir, b.is_dir)
    {
      (true, false) => return std::cmp::Ordering::Less,
      (false, true) => return std::cmp::Ordering::Greater,
      _ =>
      {}
    }
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
  });
  Ok(entries)
}

/// Snapshot every sibling name in `path`, hidden entries included, so the
/// conflict check sees the directory the way the filesystem does.
pub fn sibling_names(path: &Path) -> io::Result<NameSet>
{
  let names = std::fs::read_dir(path)?
    .filter_map(|res| res.ok())
    .map(|e| e.file_name().to_string_lossy().to_string());
  Ok(NameSet::new(names))
}
