//! Configuration: a small TOML file discovered the usual XDG way.

use std::{
  env,
  fs,
  io,
  path::{
    Path,
    PathBuf,
  },
};

use serde::Deserialize;

use crate::core::transform::MAX_DISPLAY_LEN;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config
{
  pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
/// User interface configuration block.
pub struct UiConfig
{
  pub show_hidden:     bool,
  pub max_list_items:  usize,
  pub max_display_len: usize,
  pub date_format:     Option<String>,
  pub confirm_rename:  bool,
}

impl Default for Config
{
  fn default() -> Self
  {
    Self { ui: UiConfig::default() }
  }
}

impl Default for UiConfig
{
  fn default() -> Self
  {
    Self {
      show_hidden:     false,
      max_list_items:  5000,
      max_display_len: MAX_DISPLAY_LEN,
      date_format:     None,
      confirm_rename:  true,
    }
  }
}

/// Resolved configuration locations for bren.
#[derive(Debug, Clone)]
pub struct ConfigPaths
{
  pub root:   PathBuf,
  pub entry:  PathBuf,
  pub exists: bool,
}

/// Discover the effective configuration directory and entry point.
///
/// Checks `BREN_CONFIG_DIR`, then `XDG_CONFIG_HOME/bren`.
///
/// Platform-specific fallbacks:
/// - Unix: `~/.config/bren`
/// - Windows: `%LOCALAPPDATA%\\bren`, then `%APPDATA%\\bren`, then
///   `%USERPROFILE%\\.config\\bren`
///
/// The returned struct includes the root directory, the path to
/// `config.toml`, and whether the file currently exists.
pub fn discover_config_paths() -> io::Result<ConfigPaths>
{
  fn root_from_env() -> Option<PathBuf>
  {
    if let Ok(dir) = env::var("BREN_CONFIG_DIR")
      && !dir.trim().is_empty()
    {
      return Some(PathBuf::from(dir));
    }
    None
  }

  let root = if let Some(over) = root_from_env()
  {
    over
  }
  else if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
    && !xdg.trim().is_empty()
  {
    Path::new(&xdg).join("bren")
  }
  else
  {
    #[cfg(windows)]
    {
      if let Ok(local) = env::var("LOCALAPPDATA")
        && !local.trim().is_empty()
      {
        Path::new(&local).join("bren")
      }
      else if let Ok(app) = env::var("APPDATA")
        && !app.trim().is_empty()
      {
        Path::new(&app).join("bren")
      }
      else if let Ok(up) = env::var("USERPROFILE")
        && !up.trim().is_empty()
      {
        Path::new(&up).join(".config").join("bren")
      }
      else
      {
        Path::new(".config").join("bren")
      }
    }
    #[cfg(not(windows))]
    {
      if let Ok(home) = env::var("HOME")
        && !home.trim().is_empty()
      {
        Path::new(&home).join(".config").join("bren")
      }
      else
      {
        Path::new(".config").join("bren")
      }
    }
  };

  let entry = root.join("config.toml");
  let exists = fs::metadata(&entry).map(|m| m.is_file()).unwrap_or(false);
  Ok(ConfigPaths { root, entry, exists })
}

/// Parse a config from TOML text. Unknown keys are ignored; missing keys
/// fall back to defaults.
pub fn from_toml_str(text: &str) -> Result<Config, toml::de::Error>
{
  toml::from_str(text)
}

/// Load the discovered config file, or defaults when there is none.
/// A malformed file is reported as an error rather than silently ignored.
pub fn load_config(paths: &ConfigPaths) -> io::Result<Config>
{
  if !paths.exists
  {
    return Ok(Config::default());
  }
  let text = fs::read_to_string(&paths.entry)?;
  crate::trace::log(format!(
    "[config] loaded {}",
    paths.entry.to_string_lossy()
  ));
  from_toml_str(&text).map_err(|e| {
    io::Error::new(
      io::ErrorKind::InvalidData,
      format!("{}: {}", paths.entry.to_string_lossy(), e),
    )
  })
}
