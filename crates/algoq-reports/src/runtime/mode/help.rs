use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the app is showing the help overlay.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if let AppMode::Help { scroll_offset } = &mut app.mode {
        match key.code {
            KeyCode::Char('?' | 'q') | KeyCode::Esc => {
                app.mode = AppMode::Browse;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                *scroll_offset = scroll_offset.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                *scroll_offset = scroll_offset.saturating_sub(1);
            }
            _ => {}
        }
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::config::Config;
    use crate::domain::route::Route;
    use crate::infra::contents::MockContentsClient;
    use crate::infra::opener::MockExternalOpener;

    fn new_test_app() -> App {
        let mut client = MockContentsClient::new();
        client
            .expect_list_directory()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));

        App::new(
            Config::for_tests(Route::Home),
            Arc::new(client),
            Arc::new(MockExternalOpener::new()),
        )
    }

    #[tokio::test]
    async fn test_handle_question_mark_restores_browse_mode() {
        // Arrange
        let mut app = new_test_app();
        app.mode = AppMode::Help { scroll_offset: 2 };

        // Act
        let result = handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
        );

        // Assert
        assert!(matches!(result, EventResult::Continue));
        assert_eq!(app.mode, AppMode::Browse);
    }

    #[tokio::test]
    async fn test_handle_quit_key_closes_overlay_without_quitting() {
        // Arrange
        let mut app = new_test_app();
        app.mode = AppMode::Help { scroll_offset: 0 };

        // Act
        let result = handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
        );

        // Assert
        assert!(matches!(result, EventResult::Continue));
        assert_eq!(app.mode, AppMode::Browse);
    }

    #[tokio::test]
    async fn test_handle_down_key_increments_scroll_offset() {
        // Arrange
        let mut app = new_test_app();
        app.mode = AppMode::Help { scroll_offset: 0 };

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));

        // Assert
        assert_eq!(app.mode, AppMode::Help { scroll_offset: 1 });
    }

    #[tokio::test]
    async fn test_handle_up_key_saturates_at_zero() {
        // Arrange
        let mut app = new_test_app();
        app.mode = AppMode::Help { scroll_offset: 0 };

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));

        // Assert
        assert_eq!(app.mode, AppMode::Help { scroll_offset: 0 });
    }
}
