use crate::domain::entry::{DirectoryEntry, EntryFilter};
use crate::domain::route::Route;

const PATH_SEPARATOR: &str = "/";

/// Shape of the hosted report tree: `<root_dir>/<bot>/<version>/<report>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hierarchy {
    /// Top-level directory holding one directory per bot. May be empty when
    /// bots live at the repository root.
    pub root_dir: String,
    /// File-name suffix that marks a report inside a version directory.
    pub report_suffix: String,
}

/// Listing contract of one navigable level.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Level {
    /// Route that owns this listing.
    pub route: Route,
    /// Repository-relative directory fetched for the listing.
    pub fetch_path: String,
    /// Rule selecting which entries become links.
    pub filter: EntryFilter,
}

impl Hierarchy {
    pub fn new(root_dir: impl Into<String>, report_suffix: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            report_suffix: report_suffix.into(),
        }
    }

    /// Returns the repository-relative path addressed by `route`.
    ///
    /// Home maps to the root directory and a report route maps to the report
    /// file itself.
    pub fn repository_path(&self, route: &Route) -> String {
        std::iter::once(self.root_dir.as_str())
            .chain(route.segments())
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(PATH_SEPARATOR)
    }

    /// Returns the listing contract for `route`, or `None` for the report
    /// leaf which has no listing.
    pub fn level(&self, route: &Route) -> Option<Level> {
        let filter = match route {
            Route::Home | Route::Bot { .. } => EntryFilter::Directories,
            Route::Version { .. } => EntryFilter::Suffix(self.report_suffix.clone()),
            Route::Report { .. } => return None,
        };

        Some(Level {
            route: route.clone(),
            fetch_path: self.repository_path(route),
            filter,
        })
    }
}

impl Level {
    /// Returns the route that `entry` links to from this level.
    pub fn link(&self, entry: &DirectoryEntry) -> Option<Route> {
        self.route.child(&entry.name)
    }
}
