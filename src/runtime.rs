use std::{
  io,
  time::Duration,
};

use crossterm::{
  event,
  event::Event,
  execute,
  terminal::{
    EnterAlternateScreen,
    LeaveAlternateScreen,
    disable_raw_mode,
    enable_raw_mode,
  },
};
use ratatui::{
  Terminal,
  backend::CrosstermBackend,
};

use crate::app::App;

pub fn run_app(app: &mut App) -> Result<(), Box<dyn std::error::Error>>
{
  enable_raw_mode()?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend)?;
  terminal.clear()?;

  // Keep the loop fallible but always restore the terminal afterwards
  let res = event_loop(&mut terminal, app);

  disable_raw_mode()?;
  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
  terminal.show_cursor()?;
  res
}

fn event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<(), Box<dyn std::error::Error>>
{
  loop
  {
    if app.force_full_redraw
    {
      let _ = terminal.clear();
      app.force_full_redraw = false;
    }
    terminal.draw(|f| crate::ui::draw(f, app))?;

    if !event::poll(Duration::from_millis(200))?
    {
      continue;
    }
    match event::read()?
    {
      Event::Key(key) =>
      {
        if crate::input::handle_key(app, key)?
        {
          return Ok(()); // graceful exit
        }
      }
      Event::Resize(_, _) =>
      {}
      _ =>
      {}
    }
  }
}
