//! Pure rename-rule engine: compute new names from a rule, no I/O.
//!
//! Everything in this module is a total function of its inputs; the TUI
//! recomputes the plan on every edit and throws it away after commit.

/// Naming rule families offered by the dialog.
///
/// `Format` is declared for parity with the mode selector but has no
/// semantics yet; no [`RenameRule`] can be built for it and the mode cycle
/// skips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameMode
{
  Append,
  Prepend,
  Replace,
  Format,
}

impl RenameMode
{
  /// Modes that currently have rule semantics, in cycle order.
  pub const IMPLEMENTED: [RenameMode; 3] =
    [RenameMode::Append, RenameMode::Prepend, RenameMode::Replace];

  pub fn label(self) -> &'static str
  {
    match self
    {
      RenameMode::Append => "Append",
      RenameMode::Prepend => "Prepend",
      RenameMode::Replace => "Replace",
      RenameMode::Format => "Format",
    }
  }

  /// Next implemented mode in the cycle (`Format` is never returned).
  pub fn next(self) -> RenameMode
  {
    match self
    {
      RenameMode::Append => RenameMode::Prepend,
      RenameMode::Prepend => RenameMode::Replace,
      RenameMode::Replace => RenameMode::Append,
      RenameMode::Format => RenameMode::Append,
    }
  }
}

/// A rename mode together with its parameters, built fresh from the current
/// field values on every edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameRule
{
  /// Place `text` in front of the current name.
  Append
  {
    text: String
  },
  /// Place `text` after the current name.
  Prepend
  {
    text: String
  },
  /// Replace every occurrence of `search` with `replacement`.
  Replace
  {
    search:      String,
    replacement: String,
  },
}

impl RenameRule
{
  pub fn mode(&self) -> RenameMode
  {
    match self
    {
      RenameRule::Append { .. } => RenameMode::Append,
      RenameRule::Prepend { .. } => RenameMode::Prepend,
      RenameRule::Replace { .. } => RenameMode::Replace,
    }
  }
}

/// One entry of a computed batch: the current name and the name the rule
/// produces for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameItem
{
  pub current:  String,
  pub new_name: String,
}

impl RenameItem
{
  /// True when the rule left the name untouched.
  pub fn unchanged(&self) -> bool
  {
    self.current == self.new_name
  }
}

/// Apply `rule` to a single name and return the newly owned result.
///
/// `Replace` scans left-to-right for non-overlapping occurrences and resumes
/// after the replacement text, so inserted text is never re-scanned (a
/// replacement containing the search text cannot expand forever). An empty
/// search is a defined no-op, not an error.
pub fn apply_rule(
  rule: &RenameRule,
  name: &str,
) -> String
{
  match rule
  {
    RenameRule::Append { text } => format!("{}{}", text, name),
    RenameRule::Prepend { text } => format!("{}{}", name, text),
    RenameRule::Replace { search, replacement } =>
    {
      if search.is_empty()
      {
        name.to_string()
      }
      else
      {
        name.replace(search.as_str(), replacement.as_str())
      }
    }
  }
}

/// Apply `rule` to every name in `names`, preserving order and length.
pub fn plan_batch(
  rule: &RenameRule,
  names: &[String],
) -> Vec<RenameItem>
{
  names
    .iter()
    .map(|n| {
      RenameItem { current: n.clone(), new_name: apply_rule(rule, n) }
    })
    .collect()
}

/// Display cap used for preview rows when the config does not override it.
pub const MAX_DISPLAY_LEN: usize = 40;

const ELLIPSIS: &str = "...";

/// Shorten `name` for display: results whose char count reaches
/// `max_display_len` come back exactly `max_display_len` chars long, ending
/// in `...`. Anything shorter passes through untouched.
pub fn truncate_display(
  name: &str,
  max_display_len: usize,
) -> String
{
  let len = name.chars().count();
  if len < max_display_len
  {
    return name.to_string();
  }
  let keep = max_display_len.saturating_sub(ELLIPSIS.len());
  let mut out: String = name.chars().take(keep).collect();
  out.push_str(ELLIPSIS);
  out
}

/// Preview text for one name: the rule applied, then capped for display.
/// Never used as the actual rename value.
pub fn preview_name(
  rule: &RenameRule,
  name: &str,
  max_display_len: usize,
) -> String
{
  truncate_display(&apply_rule(rule, name), max_display_len)
}
