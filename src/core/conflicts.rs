//! Conflict detection for a computed rename batch.
//!
//! A conflict is a new name that already names a different, pre-existing
//! entry in the same directory. Collisions among the new names themselves
//! are deliberately not detected here.

use std::{
  collections::HashSet,
  time::SystemTime,
};

use crate::core::transform::RenameItem;

/// Existence check against the sibling names of a directory.
///
/// The TUI hands in a snapshot ([`NameSet`]); tests can implement this on
/// anything that answers membership.
pub trait SiblingIndex
{
  fn contains_name(
    &self,
    name: &str,
  ) -> bool;
}

/// Snapshot of the names present in a directory at plan time.
#[derive(Debug, Clone, Default)]
pub struct NameSet
{
  names: HashSet<String>,
}

impl NameSet
{
  pub fn new(names: impl IntoIterator<Item = String>) -> Self
  {
    Self { names: names.into_iter().collect() }
  }

  pub fn len(&self) -> usize
  {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool
  {
    self.names.is_empty()
  }
}

impl SiblingIndex for NameSet
{
  fn contains_name(
    &self,
    name: &str,
  ) -> bool
  {
    self.names.contains(name)
  }
}

impl SiblingIndex for HashSet<String>
{
  fn contains_name(
    &self,
    name: &str,
  ) -> bool
  {
    self.contains(name)
  }
}

/// Collect the new names that collide with pre-existing directory entries.
///
/// An item whose new name equals its current name is never a conflict with
/// itself, even though that name trivially exists in the directory.
pub fn detect_conflicts(
  items: &[RenameItem],
  index: &impl SiblingIndex,
) -> HashSet<String>
{
  let mut result = HashSet::new();
  for item in items
  {
    if !item.unchanged() && index.contains_name(&item.new_name)
    {
      result.insert(item.new_name.clone());
    }
  }
  result
}

/// Age of the entry that already holds a conflicting name, relative to the
/// entry being renamed onto it, from their modification times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictAge
{
  Older,
  Newer,
  SameAge,
}

pub fn conflict_age(
  source_mtime: Option<SystemTime>,
  existing_mtime: Option<SystemTime>,
) -> ConflictAge
{
  match (source_mtime, existing_mtime)
  {
    (Some(src), Some(dst)) if src > dst => ConflictAge::Older,
    (Some(src), Some(dst)) if src < dst => ConflictAge::Newer,
    _ => ConflictAge::SameAge,
  }
}

/// Detail line for a conflicting name, phrased relative to the entry that
/// already holds the name.
pub fn conflict_detail(
  name: &str,
  is_dir: bool,
  age: ConflictAge,
) -> String
{
  let noun = if is_dir { "folder" } else { "file" };
  let adjective = match age
  {
    ConflictAge::Older => "An older",
    ConflictAge::Newer => "A newer",
    ConflictAge::SameAge => "Another",
  };
  format!("{} {} named \"{}\" already exists here.", adjective, noun, name)
}
