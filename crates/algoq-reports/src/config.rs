//! Startup configuration resolved from command-line flags and environment.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use url::Url;

use crate::domain::hierarchy::Hierarchy;
use crate::domain::route::Route;
use crate::infra::github::{DEFAULT_API_BASE, DEFAULT_RAW_BASE, Repository};

/// Directory name used for app state under the home directory.
pub const APP_HOME_DIR: &str = ".algoq-reports";
const LOG_DIR: &str = "log";

/// Returns the app home directory (`~/.algoq-reports`).
pub fn app_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(APP_HOME_DIR);
    }

    PathBuf::from(APP_HOME_DIR)
}

/// Invalid startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} `{value}`: {source}")]
    InvalidBaseUrl {
        name: &'static str,
        value: String,
        source: url::ParseError,
    },
    #[error("{name} `{value}` cannot be used as a base URL")]
    NotABaseUrl { name: &'static str, value: String },
    #[error("route `{0}` matches no page")]
    UnknownRoute(String),
}

/// Command-line interface of the report browser.
#[derive(Debug, Parser)]
#[command(
    name = "algoq-reports",
    version,
    about = "Browse AlgoQ cBot backtesting reports hosted on GitHub"
)]
pub struct Cli {
    /// Account that owns the report repository.
    #[arg(long, env = "ALGOQ_REPORTS_OWNER", default_value = "algoqnet")]
    pub owner: String,

    /// Repository holding the reports.
    #[arg(long, env = "ALGOQ_REPORTS_REPO", default_value = "backtesting-reports")]
    pub repo: String,

    /// Top-level directory holding one directory per bot.
    #[arg(long, env = "ALGOQ_REPORTS_ROOT_DIR", default_value = "reports")]
    pub root_dir: String,

    /// Branch that raw report content is served from.
    #[arg(long, env = "ALGOQ_REPORTS_BRANCH", default_value = "main")]
    pub branch: String,

    /// Base URL of the contents API.
    #[arg(long, env = "ALGOQ_REPORTS_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Base URL of the raw-content host.
    #[arg(long, env = "ALGOQ_REPORTS_RAW_BASE", default_value = DEFAULT_RAW_BASE)]
    pub raw_base: String,

    /// File-name suffix that marks a report inside a version directory.
    #[arg(long, env = "ALGOQ_REPORTS_REPORT_SUFFIX", default_value = ".html")]
    pub report_suffix: String,

    /// Route to open first, e.g. `#/bot/BotA/v1`.
    #[arg(long, default_value = "/")]
    pub route: String,

    /// Directory for log files. Defaults to `~/.algoq-reports/log`.
    #[arg(long, env = "ALGOQ_REPORTS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Resolved configuration, fixed for the process lifetime.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub repository: Repository,
    pub hierarchy: Hierarchy,
    pub initial_route: Route,
    pub log_dir: PathBuf,
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let api_base = parse_base_url("api base", &cli.api_base)?;
        let raw_base = parse_base_url("raw base", &cli.raw_base)?;
        let initial_route =
            Route::parse(&cli.route).ok_or_else(|| ConfigError::UnknownRoute(cli.route.clone()))?;
        let log_dir = cli.log_dir.unwrap_or_else(|| app_home().join(LOG_DIR));

        Ok(Self {
            repository: Repository {
                owner: cli.owner,
                name: cli.repo,
                branch: cli.branch,
                api_base,
                raw_base,
            },
            hierarchy: Hierarchy::new(cli.root_dir.trim_matches('/'), cli.report_suffix),
            initial_route,
            log_dir,
        })
    }
}

#[cfg(test)]
impl Config {
    /// Returns the default `algoqnet/backtesting-reports` configuration
    /// starting at `initial_route`.
    pub(crate) fn for_tests(initial_route: Route) -> Self {
        Self {
            repository: Repository {
                owner: "algoqnet".to_string(),
                name: "backtesting-reports".to_string(),
                branch: "main".to_string(),
                api_base: Url::parse(DEFAULT_API_BASE).expect("valid api base"),
                raw_base: Url::parse(DEFAULT_RAW_BASE).expect("valid raw base"),
            },
            hierarchy: Hierarchy::new("reports", ".html"),
            initial_route,
            log_dir: PathBuf::from("/tmp/algoq-reports"),
        }
    }
}

fn parse_base_url(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidBaseUrl {
        name,
        value: value.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::NotABaseUrl {
            name,
            value: value.to_string(),
        });
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        let cli = Cli::try_parse_from(std::iter::once("algoq-reports").chain(args.iter().copied()))
            .expect("failed to parse arguments");

        Config::try_from(cli)
    }

    #[test]
    fn test_defaults_point_at_algoq_report_repository() {
        // Arrange & Act
        let config = parse(&["--log-dir", "/tmp/algoq-reports"]).expect("defaults are valid");

        // Assert
        assert_eq!(config.repository.owner, "algoqnet");
        assert_eq!(config.repository.name, "backtesting-reports");
        assert_eq!(config.repository.branch, "main");
        assert_eq!(config.repository.api_base.as_str(), "https://api.github.com/");
        assert_eq!(config.hierarchy, Hierarchy::new("reports", ".html"));
        assert_eq!(config.initial_route, Route::Home);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/algoq-reports"));
    }

    #[test]
    fn test_flags_override_defaults() {
        // Arrange
        let args = [
            "--owner",
            "acme",
            "--repo",
            "bots",
            "--root-dir",
            "/results/",
            "--branch",
            "release",
            "--route",
            "#/bot/BotA/v1",
        ];

        // Act
        let config = parse(&args).expect("flags are valid");

        // Assert
        assert_eq!(config.repository.owner, "acme");
        assert_eq!(config.repository.name, "bots");
        assert_eq!(config.repository.branch, "release");
        assert_eq!(config.hierarchy.root_dir, "results");
        assert_eq!(
            config.initial_route,
            Route::Version {
                bot: "BotA".to_string(),
                version: "v1".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_route_is_rejected() {
        // Arrange & Act
        let result = parse(&["--route", "/settings"]);

        // Assert
        assert!(matches!(result, Err(ConfigError::UnknownRoute(route)) if route == "/settings"));
    }

    #[test]
    fn test_invalid_base_urls_are_rejected() {
        // Arrange & Act
        let invalid = parse(&["--api-base", "not a url"]);
        let not_base = parse(&["--raw-base", "mailto:reports@algoq.net"]);

        // Assert
        assert!(matches!(
            invalid,
            Err(ConfigError::InvalidBaseUrl {
                name: "api base",
                ..
            })
        ));
        assert!(matches!(
            not_base,
            Err(ConfigError::NotABaseUrl {
                name: "raw base",
                ..
            })
        ));
    }
}
