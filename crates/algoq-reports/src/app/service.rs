//! Shared app dependency container for navigation and background fetches.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::AppEvent;
use crate::config::Config;
use crate::infra::contents::ContentsClient;
use crate::infra::opener::ExternalOpener;

/// Shared app dependencies used by views and background fetch tasks.
pub struct AppServices {
    config: Config,
    contents_client: Arc<dyn ContentsClient>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    opener: Arc<dyn ExternalOpener>,
}

impl AppServices {
    /// Creates a shared service container.
    pub(crate) fn new(
        config: Config,
        contents_client: Arc<dyn ContentsClient>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
        opener: Arc<dyn ExternalOpener>,
    ) -> Self {
        Self {
            config,
            contents_client,
            event_tx,
            opener,
        }
    }

    /// Returns the startup configuration.
    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a clone of the app event sender.
    pub(crate) fn event_sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.event_tx.clone()
    }

    /// Returns the shared contents client for directory and report fetches.
    pub(crate) fn contents_client(&self) -> Arc<dyn ContentsClient> {
        Arc::clone(&self.contents_client)
    }

    pub(crate) fn opener(&self) -> &dyn ExternalOpener {
        self.opener.as_ref()
    }
}
