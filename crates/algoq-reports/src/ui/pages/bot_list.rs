use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::ListingView;
use crate::ui::components::entry_list::{EntryList, ListingText};
use crate::ui::{Component, Page};

/// Empty-state copy of the Home page.
pub const EMPTY_MESSAGE: &str = "No cBots found in repository.";

/// Home page listing one directory per bot.
pub struct BotListPage<'a> {
    can_go_back: bool,
    listing: &'a ListingView,
}

impl<'a> BotListPage<'a> {
    pub fn new(listing: &'a ListingView, can_go_back: bool) -> Self {
        Self {
            can_go_back,
            listing,
        }
    }
}

impl Page for BotListPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let text = ListingText {
            title: "cBots",
            loading: "Loading cBots",
            empty: EMPTY_MESSAGE,
        };

        EntryList::new(self.listing, text, self.can_go_back).render(f, area);
    }
}
