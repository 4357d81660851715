use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;

/// Handles key input on Home, Bot Detail and Version Detail.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if let Some(result) = super::handle_navigation_key(app, key) {
        return result;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.open_selected(),
        _ => {}
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::app::View;
    use crate::config::Config;
    use crate::domain::entry::{DirectoryEntry, EntryKind};
    use crate::domain::route::Route;
    use crate::infra::contents::MockContentsClient;
    use crate::infra::opener::MockExternalOpener;
    use crate::ui::state::app_mode::AppMode;

    fn bot_entry(name: &str) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            path: format!("reports/{name}"),
            kind: EntryKind::Dir,
            download_url: None,
        }
    }

    async fn new_home_app() -> App {
        let mut client = MockContentsClient::new();
        client.expect_list_directory().returning(|_| {
            Box::pin(async { Ok(vec![bot_entry("BotA"), bot_entry("BotB")]) })
        });
        let mut app = App::new(
            Config::for_tests(Route::Home),
            Arc::new(client),
            Arc::new(MockExternalOpener::new()),
        );
        while app.view.is_loading() {
            let event = app.next_app_event().await.expect("event channel closed");
            app.apply_app_events(event);
        }

        app
    }

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        handle(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_handle_down_then_enter_opens_second_bot() {
        // Arrange
        let mut app = new_home_app().await;

        // Act
        press(&mut app, KeyCode::Down);
        let result = press(&mut app, KeyCode::Enter);

        // Assert
        assert!(matches!(result, EventResult::Continue));
        assert_eq!(
            *app.view.route(),
            Route::Bot {
                bot: "BotB".to_string()
            }
        );
        assert!(app.can_go_back());
    }

    #[tokio::test]
    async fn test_handle_escape_returns_to_retained_home() {
        // Arrange
        let mut app = new_home_app().await;
        let home_view = app.view.clone();
        press(&mut app, KeyCode::Enter);

        // Act
        press(&mut app, KeyCode::Esc);

        // Assert
        assert_eq!(app.view, home_view);
        assert!(matches!(app.view, View::Listing(_)));
    }

    #[tokio::test]
    async fn test_handle_question_mark_opens_help() {
        // Arrange
        let mut app = new_home_app().await;

        // Act
        press(&mut app, KeyCode::Char('?'));

        // Assert
        assert_eq!(app.mode, AppMode::Help { scroll_offset: 0 });
    }

    #[tokio::test]
    async fn test_handle_quit_key_quits() {
        // Arrange
        let mut app = new_home_app().await;

        // Act
        let result = press(&mut app, KeyCode::Char('q'));

        // Assert
        assert!(matches!(result, EventResult::Quit));
    }

    #[tokio::test]
    async fn test_handle_digit_follows_breadcrumb() {
        // Arrange
        let mut app = new_home_app().await;
        press(&mut app, KeyCode::Enter);

        // Act
        press(&mut app, KeyCode::Char('0'));

        // Assert
        assert_eq!(*app.view.route(), Route::Home);
        assert!(app.view.is_loading());
    }
}
