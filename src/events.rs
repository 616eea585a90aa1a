//! Event handling functions for user input and replay updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::App;

/// Longest time to wait for a key before advancing the replay anyway.
const MAX_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Handles input events and advances the replay.
///
/// This function polls for keyboard events and dispatches them to [`handle_key`]. The poll never
/// waits longer than one animation frame so the replay keeps its pace while no key is pressed.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    let timeout = app
        .animation_manager
        .frame_delay()
        .clamp(Duration::from_millis(1), MAX_POLL_TIMEOUT);

    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            handle_key(app, key.code)?;
        }
    }

    app.animation_manager.update();

    Ok(())
}

/// Handles a single key press.
///
/// - `q` quits.
/// - `r` carves and solves a new maze with a fresh seed.
/// - `a` replays the current maze from the start.
/// - `f` jumps to the final frame.
/// - `p` pauses or resumes the replay.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.exit = true,
        KeyCode::Char('r') => app.regenerate()?,
        KeyCode::Char('a') => app.animation_manager.reset(),
        KeyCode::Char('f') => app.animation_manager.finish(),
        KeyCode::Char('p') => app.animation_manager.toggle_pause(),
        _ => {}
    }

    Ok(())
}
