//! Per-page view state for the four navigation views.

use crate::config::Config;
use crate::domain::entry::DirectoryEntry;
use crate::domain::hierarchy::Level;
use crate::domain::route::Route;

const REPORT_SCROLL_STEP: u16 = 1;

/// Load lifecycle of one view instance: `Loading` → `Populated` or `Empty`,
/// exactly once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Populated(T),
    Empty,
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// One mounted page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum View {
    /// Home, Bot Detail and Version Detail.
    Listing(ListingView),
    /// Report Frame.
    Report(ReportView),
}

impl View {
    /// Mounts the view bound to `route`, starting in `Loading`.
    pub fn new(route: Route, config: &Config, request_id: u64) -> Self {
        match config.hierarchy.level(&route) {
            Some(level) => Self::Listing(ListingView::new(level, request_id)),
            None => {
                let raw_url = config
                    .repository
                    .raw_url(&config.hierarchy.repository_path(&route));

                Self::Report(ReportView::new(route, raw_url, request_id))
            }
        }
    }

    pub fn route(&self) -> &Route {
        match self {
            Self::Listing(listing) => &listing.level.route,
            Self::Report(report) => &report.route,
        }
    }

    /// Returns the id of the fetch this view instance is waiting for or was
    /// resolved by.
    pub fn request_id(&self) -> u64 {
        match self {
            Self::Listing(listing) => listing.request_id,
            Self::Report(report) => report.request_id,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            Self::Listing(listing) => listing.state.is_loading(),
            Self::Report(report) => report.state.is_loading(),
        }
    }

    /// Rebinds a still-loading view to a new fetch.
    pub(crate) fn restart(&mut self, request_id: u64) {
        match self {
            Self::Listing(listing) => listing.request_id = request_id,
            Self::Report(report) => report.request_id = request_id,
        }
    }
}

/// Listing page state: fetched entries filtered by the level rule plus the
/// selection cursor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingView {
    pub level: Level,
    pub request_id: u64,
    pub state: LoadState<Vec<DirectoryEntry>>,
    pub selected_index: usize,
}

impl ListingView {
    pub fn new(level: Level, request_id: u64) -> Self {
        Self {
            level,
            request_id,
            state: LoadState::Loading,
            selected_index: 0,
        }
    }

    /// Returns the entries shown as links; empty until populated.
    pub fn entries(&self) -> &[DirectoryEntry] {
        match &self.state {
            LoadState::Populated(entries) => entries,
            LoadState::Loading | LoadState::Empty => &[],
        }
    }

    /// Applies the fetch result for `request_id`.
    ///
    /// Returns `false` and leaves the view untouched when the result belongs
    /// to another fetch or the view already left `Loading`.
    pub fn resolve(&mut self, request_id: u64, entries: Vec<DirectoryEntry>) -> bool {
        if request_id != self.request_id || !self.state.is_loading() {
            return false;
        }

        let entries = self.level.filter.apply(entries);
        self.state = if entries.is_empty() {
            LoadState::Empty
        } else {
            LoadState::Populated(entries)
        };
        self.selected_index = 0;

        true
    }

    /// Moves the cursor down, wrapping to the first entry.
    pub fn select_next(&mut self) {
        let count = self.entries().len();
        if count == 0 {
            return;
        }

        self.selected_index = if self.selected_index >= count - 1 {
            0
        } else {
            self.selected_index + 1
        };
    }

    /// Moves the cursor up, wrapping to the last entry.
    pub fn select_previous(&mut self) {
        let count = self.entries().len();
        if count == 0 {
            return;
        }

        self.selected_index = if self.selected_index == 0 {
            count - 1
        } else {
            self.selected_index - 1
        };
    }

    /// Returns the route the selected entry links to.
    pub fn selected_link(&self) -> Option<Route> {
        let entry = self.entries().get(self.selected_index)?;

        self.level.link(entry)
    }
}

/// Report Frame state: the raw-content location and the embedded body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportView {
    pub route: Route,
    /// Frame source and "Open Direct" target.
    pub raw_url: String,
    pub request_id: u64,
    /// Readable report text once downloaded.
    pub state: LoadState<String>,
    pub scroll_offset: u16,
}

impl ReportView {
    pub fn new(route: Route, raw_url: String, request_id: u64) -> Self {
        Self {
            route,
            raw_url,
            request_id,
            state: LoadState::Loading,
            scroll_offset: 0,
        }
    }

    /// Applies the download result for `request_id`; `None` or blank text
    /// lands in `Empty`.
    pub fn resolve(&mut self, request_id: u64, text: Option<String>) -> bool {
        if request_id != self.request_id || !self.state.is_loading() {
            return false;
        }

        self.state = match text {
            Some(text) if !text.trim().is_empty() => LoadState::Populated(text),
            _ => LoadState::Empty,
        };

        true
    }

    /// Scrolls one step down, stopping once the last text line is at the
    /// top of the pane.
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self
            .scroll_offset
            .saturating_add(REPORT_SCROLL_STEP)
            .min(self.max_scroll_offset());
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(REPORT_SCROLL_STEP);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    fn max_scroll_offset(&self) -> u16 {
        match &self.state {
            LoadState::Populated(text) => {
                u16::try_from(text.lines().count().saturating_sub(1)).unwrap_or(u16::MAX)
            }
            LoadState::Loading | LoadState::Empty => 0,
        }
    }

    /// Returns `(bot, version, report)` route parameters.
    pub fn parameters(&self) -> (&str, &str, &str) {
        match &self.route {
            Route::Report {
                bot,
                version,
                report,
            } => (bot.as_str(), version.as_str(), report.as_str()),
            Route::Home | Route::Bot { .. } | Route::Version { .. } => ("", "", ""),
        }
    }
}
