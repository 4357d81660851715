//! `AppMode`-specific key handling modules.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

pub(crate) mod help;
pub(crate) mod listing;
pub(crate) mod report;

/// Handles the keys shared by every page: quit, help, back and breadcrumb
/// digits.
///
/// Returns `None` when the key is page-specific.
fn handle_navigation_key(app: &mut App, key: KeyEvent) -> Option<EventResult> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(EventResult::Quit)
        }
        KeyCode::Char('q') => Some(EventResult::Quit),
        KeyCode::Char('?') => {
            app.mode = AppMode::Help { scroll_offset: 0 };

            Some(EventResult::Continue)
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            app.back();

            Some(EventResult::Continue)
        }
        KeyCode::Char(digit @ '0'..='9') => {
            if let Some(index) = digit
                .to_digit(10)
                .and_then(|value| usize::try_from(value).ok())
            {
                app.follow_breadcrumb(index);
            }

            Some(EventResult::Continue)
        }
        _ => None,
    }
}
