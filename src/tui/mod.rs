//! Terminal User Interface for the typewriter

pub mod input;
pub mod render;

use crate::app::{Event, Handler, Typewriter};
use anyhow::{Context, Result};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        cursor::Show,
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io;
use tracing::{debug, info};

/// Run the TUI application until the user quits
///
/// Raw mode keeps the terminal from acting on keys itself (echo, line
/// editing, Ctrl+C), so every key reaches the input handler. The terminal is
/// restored on every exit path, panics included.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or restored
pub fn run(mut app: Typewriter) -> Result<Typewriter> {
    install_panic_hook();
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            if let Err(restore_err) = restore_terminal() {
                debug!(%restore_err, "Terminal restore after failed setup");
            }
            return Err(e);
        }
    };
    info!(mode = %app.mode, "Typewriter started");

    let event_handler = Handler::new(app.config.blink_interval_ms);
    let result = run_loop(&mut terminal, &mut app, &event_handler);

    restore_terminal().context("Failed to restore terminal")?;
    result.map(|()| app)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Put the terminal back before the panic message is printed
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = restore_terminal() {
            eprintln!("Failed to restore terminal: {e}");
        }
        previous(panic_info);
    }));
}

/// Apply one event to the application state
///
/// Returns whether the frame has to be redrawn: after a blink, a resize, a
/// paper change, or a change to the status bar or help overlay.
pub fn handle_event(app: &mut Typewriter, event: Event) -> bool {
    match event {
        Event::Tick => {
            app.blink();
            true
        }
        Event::Key(key) => {
            let chrome = (app.mode, app.show_help);
            let effect = input::handle_key_event(app, key);
            if effect.needs_render() {
                debug!(
                    len = app.document.len(),
                    struck = app.document.struck_count(),
                    "Paper updated"
                );
            }
            effect.needs_render() || chrome != (app.mode, app.show_help)
        }
        Event::Resize(width, height) => {
            debug!(width, height, "Terminal resized");
            true
        }
        Event::Ignored => false,
    }
}

/// Draw when needed, wait for an event, dispatch it; repeat until quit
///
/// # Errors
///
/// Returns an error if drawing or polling the terminal fails
pub fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut Typewriter,
    event_handler: &Handler,
) -> Result<()> {
    let mut needs_draw = true;
    loop {
        if needs_draw {
            terminal.draw(|frame| render::render(frame, app))?;
        }

        needs_draw = handle_event(app, event_handler.next()?);

        if app.should_quit {
            info!("Quit requested");
            break;
        }
    }

    Ok(())
}
