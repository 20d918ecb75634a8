use std::{
  env,
  sync::Mutex,
};

// Env vars are process-global; tests that touch them take this lock
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> std::sync::MutexGuard<'static, ()>
{
  ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

fn with_env<T>(
  k: &str,
  v: Option<&str>,
  f: impl FnOnce() -> T,
) -> T
{
  let old = env::var(k).ok();
  unsafe {
    match v
    {
      Some(val) => env::set_var(k, val),
      None => env::remove_var(k),
    }
  }
  let out = f();
  unsafe {
    match old
    {
      Some(s) => env::set_var(k, s),
      None => env::remove_var(k),
    }
  }
  out
}

#[test]
fn defaults_when_no_file_exists()
{
  let _guard = env_guard();
  let tmp = tempfile::tempdir().unwrap();
  let res =
    with_env("BREN_CONFIG_DIR", Some(tmp.path().to_str().unwrap()), || {
      let paths = bren::config::discover_config_paths().unwrap();
      bren::config::load_config(&paths).unwrap()
    });
  assert!(!res.ui.show_hidden);
  assert_eq!(res.ui.max_list_items, 5000);
  assert_eq!(res.ui.max_display_len, 40);
  assert!(res.ui.confirm_rename);
  assert!(res.ui.date_format.is_none());
}

#[test]
fn discover_honors_bren_config_dir()
{
  let _guard = env_guard();
  let tmp = tempfile::tempdir().unwrap();
  let dir = tmp.path().join("conf");
  std::fs::create_dir_all(&dir).unwrap();
  let res = with_env("BREN_CONFIG_DIR", Some(dir.to_str().unwrap()), || {
    bren::config::discover_config_paths().unwrap()
  });
  assert_eq!(res.root, dir);
  assert_eq!(res.entry, dir.join("config.toml"));
  assert!(!res.exists);
}

#[test]
#[cfg(not(windows))]
fn discover_uses_xdg_when_set()
{
  let _guard = env_guard();
  let tmp = tempfile::tempdir().unwrap();
  let xdg = tmp.path().join("xdg");
  std::fs::create_dir_all(&xdg).unwrap();
  let res = with_env("BREN_CONFIG_DIR", None, || {
    with_env("XDG_CONFIG_HOME", Some(xdg.to_str().unwrap()), || {
      bren::config::discover_config_paths().unwrap()
    })
  });
  assert_eq!(res.root, xdg.join("bren"));
}

#[test]
fn toml_values_override_defaults()
{
  let cfg = bren::config::from_toml_str(
    r#"
      [ui]
      show_hidden = true
      max_display_len = 25
      confirm_rename = false
      date_format = "%d/%m/%Y"
    "#,
  )
  .unwrap();
  assert!(cfg.ui.show_hidden);
  assert_eq!(cfg.ui.max_display_len, 25);
  assert!(!cfg.ui.confirm_rename);
  assert_eq!(cfg.ui.date_format.as_deref(), Some("%d/%m/%Y"));
  // Unset keys keep defaults
  assert_eq!(cfg.ui.max_list_items, 5000);
}

#[test]
fn empty_toml_is_all_defaults()
{
  let cfg = bren::config::from_toml_str("").unwrap();
  assert_eq!(cfg.ui.max_display_len, 40);
}

#[test]
fn malformed_file_is_an_error()
{
  let _guard = env_guard();
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join("config.toml"), "ui = 3").unwrap();
  let res =
    with_env("BREN_CONFIG_DIR", Some(tmp.path().to_str().unwrap()), || {
      let paths = bren::config::discover_config_paths().unwrap();
      bren::config::load_config(&paths)
    });
  assert!(res.is_err());
}
