use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, View};
use crate::runtime::EventResult;

/// Handles key input on the Report Frame.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if let Some(result) = super::handle_navigation_key(app, key) {
        return result;
    }

    if key.code == KeyCode::Char('o') {
        app.open_report_externally();

        return EventResult::Continue;
    }

    if let View::Report(report) = &mut app.view {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => report.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => report.scroll_up(),
            KeyCode::Char('g') | KeyCode::Home => report.scroll_to_top(),
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

    const RAW_URL: &str =
        "https://raw.githubusercontent.com/algoqnet/backtesting-reports/main/reports/BotA/v1/run1.html";

    fn new_report_app(opener: MockExternalOpener) -> App {
        let mut client = MockContentsClient::new();
        client
            .expect_list_directory()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));
        client
            .expect_fetch_raw()
            .returning(|_| Box::pin(async { Ok("<p>Net Profit</p>".to_string()) }));
        let route = Route::parse("#/report/BotA/v1/run1.html").expect("valid route");

        App::new(Config::for_tests(route), Arc::new(client), Arc::new(opener))
    }

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        handle(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn scroll_offset(app: &App) -> u16 {
        match &app.view {
            View::Report(report) => report.scroll_offset,
            View::Listing(_) => panic!("expected a report view"),
        }
    }

    #[tokio::test]
    async fn test_handle_open_direct_opens_raw_url() {
        // Arrange
        let mut opener = MockExternalOpener::new();
        opener
            .expect_open()
            .withf(|url| url == RAW_URL)
            .times(1)
            .returning(|_| Ok(()));
        let mut app = new_report_app(opener);

        // Act
        let result = press(&mut app, KeyCode::Char('o'));

        // Assert
        assert!(matches!(result, EventResult::Continue));
    }

    #[tokio::test]
    async fn test_handle_scroll_keys_move_report_offset() {
        // Arrange
        let mut app = new_report_app(MockExternalOpener::new());
        if let View::Report(report) = &mut app.view {
            let request_id = report.request_id;
            report.resolve(request_id, Some("one\ntwo\nthree\nfour".to_string()));
        }

        // Act
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        let scrolled = scroll_offset(&app);
        press(&mut app, KeyCode::Char('k'));
        let scrolled_back = scroll_offset(&app);
        press(&mut app, KeyCode::Char('g'));

        // Assert
        assert_eq!(scrolled, 2);
        assert_eq!(scrolled_back, 1);
        assert_eq!(scroll_offset(&app), 0);
    }

    #[tokio::test]
    async fn test_handle_open_direct_failure_keeps_running() {
        // Arrange
        let mut opener = MockExternalOpener::new();
        opener
            .expect_open()
            .returning(|_| Err(std::io::Error::other("no opener")));
        let mut app = new_report_app(opener);

        // Act
        let result = press(&mut app, KeyCode::Char('o'));

        // Assert
        assert!(matches!(result, EventResult::Continue));
    }

    #[tokio::test]
    async fn test_handle_breadcrumb_digit_opens_version_listing() {
        // Arrange
        let mut app = new_report_app(MockExternalOpener::new());

        // Act
        press(&mut app, KeyCode::Char('2'));

        // Assert
        assert_eq!(
            *app.view.route(),
            Route::Version {
                bot: "BotA".to_string(),
                version: "v1".to_string(),
            }
        );
    }
}
