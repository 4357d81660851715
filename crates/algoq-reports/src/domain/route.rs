//! Hash-style routes for the bot → version → report hierarchy.

use std::fmt;

const BOT_SEGMENT: &str = "bot";
const HASH_PREFIX: char = '#';
const HOME_LABEL: &str = "Home";
const PATH_SEPARATOR: char = '/';
const REPORT_SEGMENT: &str = "report";

/// One location in the browser, matching exactly one of the four route
/// templates:
///
/// - `/`
/// - `/bot/:botName`
/// - `/bot/:botName/:versionName`
/// - `/report/:botName/:versionName/:reportName`
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Route {
    Home,
    Bot {
        bot: String,
    },
    Version {
        bot: String,
        version: String,
    },
    Report {
        bot: String,
        version: String,
        report: String,
    },
}

/// One navigational link in the breadcrumb trail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Breadcrumb {
    pub label: String,
    pub route: Route,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>, route: Route) -> Self {
        Self {
            label: label.into(),
            route,
        }
    }

    /// Returns the fixed anchor that precedes every trail.
    pub fn home() -> Self {
        Self::new(HOME_LABEL, Route::Home)
    }
}

impl Route {
    /// Parses a hash (`#/bot/BotA`) or bare (`/bot/BotA`) route.
    ///
    /// Returns `None` for paths that match no template, including paths with
    /// empty segments.
    pub fn parse(input: &str) -> Option<Self> {
        let path = input.trim();
        let path = path.strip_prefix(HASH_PREFIX).unwrap_or(path);
        let path = path.trim_matches(PATH_SEPARATOR);
        if path.is_empty() {
            return Some(Self::Home);
        }

        let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return None;
        }

        match segments.as_slice() {
            [BOT_SEGMENT, bot] => Some(Self::Bot {
                bot: (*bot).to_string(),
            }),
            [BOT_SEGMENT, bot, version] => Some(Self::Version {
                bot: (*bot).to_string(),
                version: (*version).to_string(),
            }),
            [REPORT_SEGMENT, bot, version, report] => Some(Self::Report {
                bot: (*bot).to_string(),
                version: (*version).to_string(),
                report: (*report).to_string(),
            }),
            _ => None,
        }
    }

    /// Returns the route path without the hash prefix (e.g. `/bot/BotA`).
    pub fn path(&self) -> String {
        match self {
            Self::Home => PATH_SEPARATOR.to_string(),
            Self::Bot { bot } => format!("/{BOT_SEGMENT}/{bot}"),
            Self::Version { bot, version } => format!("/{BOT_SEGMENT}/{bot}/{version}"),
            Self::Report {
                bot,
                version,
                report,
            } => format!("/{REPORT_SEGMENT}/{bot}/{version}/{report}"),
        }
    }

    /// Returns the route one hierarchy level below this one for the entry
    /// `name`, or `None` at the report leaf.
    pub fn child(&self, name: &str) -> Option<Self> {
        match self {
            Self::Home => Some(Self::Bot {
                bot: name.to_string(),
            }),
            Self::Bot { bot } => Some(Self::Version {
                bot: bot.clone(),
                version: name.to_string(),
            }),
            Self::Version { bot, version } => Some(Self::Report {
                bot: bot.clone(),
                version: version.clone(),
                report: name.to_string(),
            }),
            Self::Report { .. } => None,
        }
    }

    /// Returns the route parameters in hierarchy order.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Self::Home => Vec::new(),
            Self::Bot { bot } => vec![bot.as_str()],
            Self::Version { bot, version } => vec![bot.as_str(), version.as_str()],
            Self::Report {
                bot,
                version,
                report,
            } => vec![bot.as_str(), version.as_str(), report.as_str()],
        }
    }

    /// Returns the breadcrumb trail for this route, excluding the fixed
    /// "Home" anchor.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        match self {
            Self::Home => Vec::new(),
            Self::Bot { bot } => vec![Breadcrumb::new(bot.as_str(), self.clone())],
            Self::Version { bot, version } => vec![
                Breadcrumb::new(bot.as_str(), Self::Bot { bot: bot.clone() }),
                Breadcrumb::new(version.as_str(), self.clone()),
            ],
            Self::Report {
                bot,
                version,
                report,
            } => vec![
                Breadcrumb::new(bot.as_str(), Self::Bot { bot: bot.clone() }),
                Breadcrumb::new(
                    version.as_str(),
                    Self::Version {
                        bot: bot.clone(),
                        version: version.clone(),
                    },
                ),
                Breadcrumb::new(report.as_str(), self.clone()),
            ],
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{HASH_PREFIX}{}", self.path())
    }
}
