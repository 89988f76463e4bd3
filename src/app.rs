//! Larder application runtime (terminal lifecycle and the event loop).
//!
//! The loop is fully synchronous: draw, poll for input with a timeout,
//! dispatch one event, repeat. The store persists itself on every mutation,
//! so there is nothing to flush on the way out.

use std::time::Duration;

/// Convenience result alias for runtime setup errors.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::args::Args;
use crate::events::handle_event;
use crate::state::AppState;
use crate::store::ItemStore;
use crate::theme;
use crate::ui::ui;

/// Put the terminal into raw mode on the alternate screen.
fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Undo [`setup_terminal`].
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Build the initial [`AppState`] from CLI arguments.
///
/// Loads the pantry collection and theme preference from the data directory
/// (or the default config dir); both loads degrade to safe defaults rather
/// than failing.
#[must_use]
pub fn init_state(args: &Args) -> AppState {
    let data_path = args
        .data_dir
        .as_ref()
        .map_or_else(theme::pantry_data_path, |d| d.join("pantry.json"));
    let mut store = ItemStore::load(data_path);
    if args.read_only {
        store = store.into_read_only();
    }
    let conf_path = args
        .data_dir
        .as_ref()
        .map_or_else(theme::theme_conf_path, |d| d.join("theme.conf"));
    let mode = theme::settings::load_mode_from(&conf_path);
    let mut app = AppState::new(store, mode);
    if !args.read_only {
        app.theme_conf = Some(conf_path);
    }
    app.read_only = args.read_only;
    app.clamp_selection(app.store.len());
    app
}

/// Start the TUI and run the main event loop until the user quits.
///
/// # Errors
///
/// Returns an error when terminal setup, drawing, or input polling fails.
pub fn run(args: &Args) -> Result<()> {
    let mut app = init_state(args);
    setup_terminal()?;
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;
    let res = event_loop(&mut terminal, &mut app);
    restore_terminal()?;
    res
}

/// Draw and dispatch until an exit is requested.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;
        if event::poll(Duration::from_millis(250))? {
            let ev: CEvent = event::read()?;
            if handle_event(app, &ev) {
                tracing::info!("exit requested");
                return Ok(());
            }
        }
    }
}
