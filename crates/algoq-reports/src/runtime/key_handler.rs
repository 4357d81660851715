use crossterm::event::KeyEvent;

use crate::app::{App, View};
use crate::runtime::{EventResult, mode};
use crate::ui::state::app_mode::AppMode;

pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    match app.mode {
        AppMode::Help { .. } => mode::help::handle(app, key),
        AppMode::Browse => match app.view {
            View::Listing(_) => mode::listing::handle(app, key),
            View::Report(_) => mode::report::handle(app, key),
        },
    }
}
