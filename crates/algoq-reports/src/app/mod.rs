//! App-layer composition root: current view, navigation history and the
//! internal event bus fed by background fetches.

use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::entry::DirectoryEntry;
use crate::domain::route::Route;
use crate::infra::contents::{ContentsClient, fetch_directory};
use crate::infra::opener::ExternalOpener;
use crate::infra::report_text;
use crate::ui::state::app_mode::AppMode;

mod service;
pub mod view;

pub use service::AppServices;
pub use view::{ListingView, LoadState, ReportView, View};

/// Internal app events emitted by background fetch tasks.
///
/// Each event carries the request id of the view instance that started the
/// fetch so results for views the user already left are discarded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum AppEvent {
    /// A directory listing finished; failures arrive as an empty list.
    ListingLoaded {
        request_id: u64,
        entries: Vec<DirectoryEntry>,
    },
    /// A report download finished with its readable text, if any.
    ReportLoaded {
        request_id: u64,
        text: Option<String>,
    },
}

/// Stateful application model used by the runtime loop and renderer.
pub struct App {
    pub mode: AppMode,
    pub view: View,
    copyright_year: i32,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    history: Vec<View>,
    next_request_id: u64,
    services: AppServices,
}

impl App {
    /// Builds the app and starts loading `config.initial_route`.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(
        config: Config,
        contents_client: Arc<dyn ContentsClient>,
        opener: Arc<dyn ExternalOpener>,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let initial_route = config.initial_route.clone();
        let view = View::new(initial_route, &config, 1);
        let services = AppServices::new(config, contents_client, event_tx, opener);
        let copyright_year = OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .year();

        let app = Self {
            mode: AppMode::Browse,
            view,
            copyright_year,
            event_rx,
            history: Vec::new(),
            next_request_id: 2,
            services,
        };
        app.start_fetch();

        app
    }

    pub fn config(&self) -> &Config {
        self.services.config()
    }

    /// Year shown in the layout footer.
    pub fn copyright_year(&self) -> i32 {
        self.copyright_year
    }

    /// Returns whether a back step is available.
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Mounts a fresh view for `route` and starts its fetch.
    ///
    /// The current view is kept in history exactly as it is so [`Self::back`]
    /// can restore it without refetching.
    pub fn navigate(&mut self, route: Route) {
        info!(route = %route, "navigating");
        let request_id = self.allocate_request_id();
        let next_view = View::new(route, self.services.config(), request_id);
        let previous_view = std::mem::replace(&mut self.view, next_view);
        self.history.push(previous_view);

        self.start_fetch();
    }

    /// Restores the previously shown view.
    ///
    /// A restored view that never finished loading gets a new fetch; its old
    /// result, if it still arrives, no longer matches.
    /// Returns `false` when history is empty.
    pub fn back(&mut self) -> bool {
        let Some(previous_view) = self.history.pop() else {
            return false;
        };
        self.view = previous_view;
        debug!(route = %self.view.route(), "navigated back");

        if self.view.is_loading() {
            let request_id = self.allocate_request_id();
            self.view.restart(request_id);
            self.start_fetch();
        }

        true
    }

    /// Follows the link under the listing cursor.
    pub fn open_selected(&mut self) {
        let View::Listing(listing) = &self.view else {
            return;
        };
        let Some(route) = listing.selected_link() else {
            return;
        };

        self.navigate(route);
    }

    /// Follows breadcrumb link `index`: `0` is Home, `1..` are the crumbs of
    /// the current route.
    ///
    /// The last crumb names the current page and is not a link. Returns
    /// whether navigation happened.
    pub fn follow_breadcrumb(&mut self, index: usize) -> bool {
        let current_route = self.view.route();
        let target = if index == 0 {
            (*current_route != Route::Home).then_some(Route::Home)
        } else {
            let breadcrumbs = current_route.breadcrumbs();
            if index >= breadcrumbs.len() {
                None
            } else {
                breadcrumbs
                    .into_iter()
                    .nth(index - 1)
                    .map(|breadcrumb| breadcrumb.route)
            }
        };
        let Some(target) = target else {
            return false;
        };

        self.navigate(target);

        true
    }

    pub fn select_next(&mut self) {
        if let View::Listing(listing) = &mut self.view {
            listing.select_next();
        }
    }

    pub fn select_previous(&mut self) {
        if let View::Listing(listing) = &mut self.view {
            listing.select_previous();
        }
    }

    /// Opens the current report's raw content outside the terminal.
    pub fn open_report_externally(&self) {
        let View::Report(report) = &self.view else {
            return;
        };

        if let Err(error) = self.services.opener().open(&report.raw_url) {
            warn!(url = %report.raw_url, %error, "failed to open report externally");
        }
    }

    /// Waits for the next internal app event.
    pub(crate) async fn next_app_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    /// Applies `first_event` and every other event already queued.
    pub(crate) fn apply_app_events(&mut self, first_event: AppEvent) {
        self.apply_app_event(first_event);
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_app_event(event);
        }
    }

    fn apply_app_event(&mut self, event: AppEvent) {
        let applied = match (event, &mut self.view) {
            (
                AppEvent::ListingLoaded {
                    request_id,
                    entries,
                },
                View::Listing(listing),
            ) => listing.resolve(request_id, entries),
            (AppEvent::ReportLoaded { request_id, text }, View::Report(report)) => {
                report.resolve(request_id, text)
            }
            _ => false,
        };

        if !applied {
            debug!("discarded stale fetch result");
        }
    }

    /// Starts the fetch for the current view on a background task.
    fn start_fetch(&self) {
        let client = self.services.contents_client();
        let event_tx = self.services.event_sender();

        match &self.view {
            View::Listing(listing) => {
                let request_id = listing.request_id;
                let path = listing.level.fetch_path.clone();
                debug!(%path, request_id, "fetching directory listing");

                tokio::spawn(async move {
                    let entries = fetch_directory(client.as_ref(), &path).await;
                    let _ = event_tx.send(AppEvent::ListingLoaded {
                        request_id,
                        entries,
                    });
                });
            }
            View::Report(report) => {
                let request_id = report.request_id;
                let url = report.raw_url.clone();
                debug!(%url, request_id, "fetching report");

                tokio::spawn(async move {
                    let text = match client.fetch_raw(url.clone()).await {
                        Ok(html) => {
                            tokio::task::spawn_blocking(move || report_text::extract_text(&html))
                                .await
                                .ok()
                        }
                        Err(error) => {
                            warn!(%url, %error, "report download failed");

                            None
                        }
                    };
                    let _ = event_tx.send(AppEvent::ReportLoaded { request_id, text });
                });
            }
        }
    }

    fn allocate_request_id(&mut self) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        request_id
    }
}
