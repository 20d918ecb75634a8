use std::path::Path;

use crate::core::transform::RenameItem;

/// Result of committing a plan: what actually happened, per batch.
#[derive(Debug, Clone, Default)]
pub struct CommitOutcome
{
  pub renamed:  usize,
  pub skipped:  usize,
  pub failed:   usize,
  pub messages: Vec<String>,
}

impl CommitOutcome
{
  pub fn summary(&self) -> String
  {
    format!(
      "Renamed {} item(s), skipped {}, failed {}",
      self.renamed, self.skipped, self.failed
    )
  }
}

/// Apply an accepted plan inside `dir` with `std::fs::rename`.
///
/// Items whose new name equals the current name are skipped. A target that
/// appeared since the plan was previewed is re-checked immediately before
/// the rename so the batch never clobbers it; that item fails and the rest
/// of the batch continues.
pub fn commit_plan(
  dir: &Path,
  items: &[RenameItem],
) -> CommitOutcome
{
  let mut outcome = CommitOutcome::default();
  for item in items
  {
    if item.unchanged()
    {
      outcome.skipped += 1;
      continue;
    }
    let from = dir.join(&item.current);
    let to = dir.join(&item.new_name);
    if to.exists()
    {
      outcome.failed += 1;
      outcome.messages.push(format!(
        "Rename '{}': target '{}' already exists",
        item.current, item.new_name
      ));
      continue;
    }
    match std::fs::rename(&from, &to)
    {
      Ok(()) => outcome.renamed += 1,
      Err(e) =>
      {
        outcome.failed += 1;
        outcome
          .messages
          .push(format!("Rename '{}' failed: {}", item.current, e));
      }
    }
  }
  outcome
}
