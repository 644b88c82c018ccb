//! Terminal User Interface for episode-browser using ratatui.
//!
//! This module provides a full-screen TUI with a live search bar, an
//! episode selector panel, and the rendered episode card list.

mod render;
mod state;
mod types;

pub use render::{ATTRIBUTION, card_lines, counter_text, draw};
pub use state::{App, SHOW_ALL_LABEL};
pub use types::{Action, Focus, Screen, SelectorOption};

use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;

/// Poll for keyboard events with a timeout.
pub fn poll_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
