use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::ListingView;
use crate::domain::route::Route;
use crate::ui::components::entry_list::{EntryList, ListingText};
use crate::ui::{Component, Page};

/// Empty-state copy of the Version Detail page.
pub const EMPTY_MESSAGE: &str = "No HTML reports found in this version folder.";

/// Version Detail page listing the reports of one bot version.
pub struct ReportListPage<'a> {
    can_go_back: bool,
    listing: &'a ListingView,
}

impl<'a> ReportListPage<'a> {
    pub fn new(listing: &'a ListingView, can_go_back: bool) -> Self {
        Self {
            can_go_back,
            listing,
        }
    }
}

impl Page for ReportListPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let title = match &self.listing.level.route {
            Route::Version { bot, version } => format!("{bot} • {version} reports"),
            Route::Home | Route::Bot { .. } | Route::Report { .. } => "Reports".to_string(),
        };
        let text = ListingText {
            title: &title,
            loading: "Loading reports",
            empty: EMPTY_MESSAGE,
        };

        EntryList::new(self.listing, text, self.can_go_back).render(f, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::app::LoadState;
    use crate::domain::hierarchy::Hierarchy;

    #[test]
    fn test_report_list_page_render_titles_bot_and_version() {
        // Arrange
        let route = Route::Version {
            bot: "BotA".to_string(),
            version: "v1".to_string(),
        };
        let level = Hierarchy::new("reports", ".html")
            .level(&route)
            .expect("version route has a listing");
        let mut listing = ListingView::new(level, 1);
        listing.state = LoadState::Empty;
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                ReportListPage::new(&listing, true).render(f, area);
            })
            .expect("failed to draw");

        // Assert
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("BotA • v1 reports"));
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(text.contains("Esc: back"));
    }
}
