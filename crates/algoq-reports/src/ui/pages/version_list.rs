use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::ListingView;
use crate::domain::route::Route;
use crate::ui::components::entry_list::{EntryList, ListingText};
use crate::ui::{Component, Page};

/// Empty-state copy of the Bot Detail page.
pub const EMPTY_MESSAGE: &str = "No versions logged yet.";

/// Bot Detail page listing the logged versions of one bot.
pub struct VersionListPage<'a> {
    can_go_back: bool,
    listing: &'a ListingView,
}

impl<'a> VersionListPage<'a> {
    pub fn new(listing: &'a ListingView, can_go_back: bool) -> Self {
        Self {
            can_go_back,
            listing,
        }
    }
}

impl Page for VersionListPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let bot = match &self.listing.level.route {
            Route::Bot { bot } => bot.as_str(),
            Route::Home | Route::Version { .. } | Route::Report { .. } => "",
        };
        let title = format!("{bot} versions");
        let text = ListingText {
            title: &title,
            loading: "Loading versions",
            empty: EMPTY_MESSAGE,
        };

        EntryList::new(self.listing, text, self.can_go_back).render(f, area);
    }
}
