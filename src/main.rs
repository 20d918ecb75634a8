mod app;
mod config;
mod core;
mod input;
mod runtime;
mod trace;
mod ui;

pub use app::App;

fn print_version()
{
  println!("bren {}", env!("CARGO_PKG_VERSION"));
}

fn print_help()
{
  println!(
    "Usage: bren [OPTIONS] [DIR]\n\n\
     Options:\n\
       -h, --help            Show this help and exit\n\
       -V, --version         Show version and exit\n\
           --config-dir DIR  Use DIR as the config root (sets BREN_CONFIG_DIR)\n\
           --trace[=FILE]    Enable tracing to FILE (default /tmp/bren-trace.log)\n\
     Arguments:\n\
       DIR                   Rename files in DIR (default: current dir)\n"
  );
}

fn main() -> Result<(), Box<dyn std::error::Error>>
{
  use std::env;
  trace::install_panic_hook();

  // Minimal argument parsing (avoid external deps)
  let mut args = env::args().skip(1);
  let mut dir_arg: Option<String> = None;
  while let Some(a) = args.next()
  {
    match a.as_str()
    {
      "-h" | "--help" =>
      {
        print_help();
        return Ok(());
      }
      "-V" | "--version" =>
      {
        print_version();
        return Ok(());
      }
      s if s == "--trace" || s.starts_with("--trace=") =>
      {
        let file = if let Some(eq) = s.split_once('=')
        {
          eq.1.to_string()
        }
        else
        {
          String::new()
        };
        unsafe { env::set_var("BREN_TRACE", "1") };
        if !file.is_empty()
        {
          unsafe { env::set_var("BREN_TRACE_FILE", file) };
        }
      }
      "--config-dir" =>
      {
        if let Some(dir) = args.next()
        {
          unsafe { env::set_var("BREN_CONFIG_DIR", &dir) };
        }
        else
        {
          eprintln!("bren: --config-dir requires a DIR argument");
          print_help();
          std::process::exit(2);
        }
      }
      s if s.starts_with("--config-dir=") =>
      {
        if let Some((_, dir)) = s.split_once('=')
        {
          unsafe { env::set_var("BREN_CONFIG_DIR", dir) };
        }
      }
      "--" =>
      {
        // Remaining is positional dir (optional); take first if present
        dir_arg = args.next();
        break;
      }
      s if s.starts_with('-') =>
      {
        eprintln!("bren: unknown option: {}", s);
        print_help();
        std::process::exit(2);
      }
      // Positional directory
      other =>
      {
        if dir_arg.is_none()
        {
          dir_arg = Some(other.to_string());
        }
      }
    }
  }

  let cwd = match dir_arg
  {
    Some(dir) =>
    {
      let p = std::path::PathBuf::from(&dir);
      if !p.is_dir()
      {
        eprintln!("bren: not a directory: {}", dir);
        std::process::exit(2);
      }
      p.canonicalize()?
    }
    None => std::env::current_dir()?,
  };

  let paths = config::discover_config_paths()?;
  let cfg = match config::load_config(&paths)
  {
    Ok(c) => c,
    Err(e) =>
    {
      eprintln!("bren: config error: {}", e);
      config::Config::default()
    }
  };

  trace::log(format!("[start] dir={}", cwd.display()));
  let mut app = App::new(cwd, cfg)?;
  runtime::run_app(&mut app)
}
