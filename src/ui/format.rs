use std::time::SystemTime;

use unicode_width::{
  UnicodeWidthChar,
  UnicodeWidthStr,
};

pub fn human_size(bytes: u64) -> String
{
  const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];
  let mut val = bytes as f64;
  let mut idx = 0usize;
  while val >= 1024.0 && idx + 1 < UNITS.len()
  {
    val /= 1024.0;
    idx += 1;
  }
  if idx == 0
  {
    format!("{} {}", bytes, UNITS[idx])
  }
  else
  {
    format!("{:.1} {}", val, UNITS[idx])
  }
}

pub fn format_time_abs(
  t: SystemTime,
  fmt: &str,
) -> String
{
  use chrono::{
    DateTime,
    Local,
  };
  let dt: DateTime<Local> = DateTime::from(t);
  dt.format(fmt).to_string()
}

/// Cut `s` so it renders in at most `max` terminal columns.
pub fn truncate_to_width(
  s: &str,
  max: usize,
) -> String
{
  if UnicodeWidthStr::width(s) <= max
  {
    return s.to_string();
  }
  let mut out = String::new();
  let mut used = 0usize;
  for ch in s.chars()
  {
    let w = UnicodeWidthChar::width(ch).unwrap_or(0);
    if used + w > max
    {
      break;
    }
    out.push(ch);
    used += w;
  }
  out
}
