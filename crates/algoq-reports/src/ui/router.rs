use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::{ListingView, View};
use crate::domain::route::Route;
use crate::ui::components::help_overlay::HelpOverlay;
use crate::ui::pages::bot_list::BotListPage;
use crate::ui::pages::report_frame::ReportFramePage;
use crate::ui::pages::report_list::ReportListPage;
use crate::ui::pages::version_list::VersionListPage;
use crate::ui::state::app_mode::AppMode;
use crate::ui::state::help_action::{self, HelpAction, ListingHelpState};
use crate::ui::{Component, Page, RenderContext};

/// Routes the content-area render path by the current view's route, then
/// layers the help overlay when it is open.
pub(crate) fn route_frame(f: &mut Frame, area: Rect, context: RenderContext<'_>) {
    let RenderContext {
        can_go_back,
        mode,
        view,
        ..
    } = context;

    match view {
        View::Listing(listing) => render_listing_page(f, area, listing, can_go_back),
        View::Report(report) => ReportFramePage::new(report, can_go_back).render(f, area),
    }

    if let AppMode::Help { scroll_offset } = mode {
        let (title, actions) = help_content(view, can_go_back);
        HelpOverlay::new(title, &actions, *scroll_offset).render(f, area);
    }
}

fn render_listing_page(f: &mut Frame, area: Rect, listing: &ListingView, can_go_back: bool) {
    match &listing.level.route {
        Route::Home => BotListPage::new(listing, can_go_back).render(f, area),
        Route::Bot { .. } => VersionListPage::new(listing, can_go_back).render(f, area),
        Route::Version { .. } | Route::Report { .. } => {
            ReportListPage::new(listing, can_go_back).render(f, area);
        }
    }
}

/// Returns the overlay title and the full keybinding list for `view`.
fn help_content(view: &View, can_go_back: bool) -> (&'static str, Vec<HelpAction>) {
    match view {
        View::Listing(listing) => (
            "Listing Keybindings",
            help_action::listing_actions(ListingHelpState {
                can_go_back,
                can_open_selected: listing.selected_link().is_some(),
                has_breadcrumb_links: listing.level.route != Route::Home,
            }),
        ),
        View::Report(_) => (
            "Report Keybindings",
            help_action::report_actions(can_go_back),
        ),
    }
}
