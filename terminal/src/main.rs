use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use common::GameConfig;
use terminal::app::{App, AppCommand};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Optional RNG seed from args; the wall clock otherwise, so every run
    // gets a different apple sequence.
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)?
            .as_millis() as u64,
    };

    let config = GameConfig {
        seed,
        ..GameConfig::default()
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app at the current terminal size
    let (cols, rows) = crossterm::terminal::size()?;
    let mut app = App::new(config, cols, rows);

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // The host callback cadence: every pass offers the game a frame and
        // its throttle decides whether a tick runs.
        if app.frame() {
            terminal.draw(|f| app.render(f))?;
        }

        // Handle input
        if event::poll(Duration::from_millis(4))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(AppCommand::Quit) = app.handle_key(key) {
                        app.stop();
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }
}
