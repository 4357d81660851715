use std::future::Future;
use std::pin::Pin;

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::entry::DirectoryEntry;
use crate::infra::github::Repository;

/// Media type requested from the contents API.
const GITHUB_JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
/// The contents API rejects requests without a user agent.
const USER_AGENT: &str = concat!("algoq-reports/", env!("CARGO_PKG_VERSION"));

/// Boxed async result used by [`ContentsClient`] trait methods.
pub type ContentsFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Failure of one request against the hosting service.
#[derive(Debug, Error)]
pub enum ContentsError {
    /// The host has nothing at the requested location.
    #[error("nothing found at `{location}`")]
    NotFound { location: String },
    /// The host answered with a non-success status other than 404.
    #[error("`{location}` answered with HTTP {status}")]
    Status { location: String, status: u16 },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The listing body was not a JSON array of entries.
    #[error("unexpected listing payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read-only boundary to the repository host.
///
/// Production uses [`GithubContentsClient`], while tests can inject
/// `MockContentsClient` to drive views without a network.
#[cfg_attr(test, mockall::automock)]
pub trait ContentsClient: Send + Sync {
    /// Lists the directory at the repository-relative `path`.
    ///
    /// # Errors
    /// Returns [`ContentsError::NotFound`] on HTTP 404, and the other
    /// variants for any other status, transport or decoding failure.
    fn list_directory(
        &self,
        path: String,
    ) -> ContentsFuture<Result<Vec<DirectoryEntry>, ContentsError>>;

    /// Downloads the body served at the raw-content `url`.
    ///
    /// # Errors
    /// Returns an error for non-success statuses and transport failures.
    fn fetch_raw(&self, url: String) -> ContentsFuture<Result<String, ContentsError>>;
}

/// Lists `path` and collapses every failure into an empty listing.
///
/// A missing directory is expected while the tree is being populated and is
/// only logged at debug level; every other failure is logged as a warning.
/// Callers cannot tell an empty directory from a failed request.
pub async fn fetch_directory(client: &dyn ContentsClient, path: &str) -> Vec<DirectoryEntry> {
    match client.list_directory(path.to_string()).await {
        Ok(entries) => {
            debug!(path, count = entries.len(), "directory listed");

            entries
        }
        Err(ContentsError::NotFound { location }) => {
            debug!(path, %location, "directory not found, showing empty listing");

            Vec::new()
        }
        Err(error) => {
            warn!(path, %error, "directory listing failed, showing empty listing");

            Vec::new()
        }
    }
}

/// [`ContentsClient`] backed by the GitHub REST contents API.
pub struct GithubContentsClient {
    http: Client,
    repository: Repository,
}

impl GithubContentsClient {
    /// Creates a client for `repository`.
    ///
    /// # Errors
    /// Returns an error when the HTTP client cannot be initialized.
    pub fn new(repository: Repository) -> Result<Self, ContentsError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self::with_http(repository, http))
    }

    /// Creates a client for `repository` that sends requests through `http`.
    pub fn with_http(repository: Repository, http: Client) -> Self {
        Self { http, repository }
    }
}

impl ContentsClient for GithubContentsClient {
    fn list_directory(
        &self,
        path: String,
    ) -> ContentsFuture<Result<Vec<DirectoryEntry>, ContentsError>> {
        let http = self.http.clone();
        let url = self.repository.contents_url(&path);

        Box::pin(async move {
            let body = get_text(&http, &url, Some(GITHUB_JSON_MEDIA_TYPE)).await?;

            parse_listing(&body)
        })
    }

    fn fetch_raw(&self, url: String) -> ContentsFuture<Result<String, ContentsError>> {
        let http = self.http.clone();

        Box::pin(async move { get_text(&http, &url, None).await })
    }
}

async fn get_text(
    http: &Client,
    url: &str,
    accept: Option<&str>,
) -> Result<String, ContentsError> {
    let mut request = http.get(url);
    if let Some(media_type) = accept {
        request = request.header(ACCEPT, media_type);
    }

    let response = request.send().await?;
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ContentsError::NotFound {
            location: url.to_string(),
        });
    }

    if !status.is_success() {
        return Err(ContentsError::Status {
            location: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}

/// Parses a contents API listing body.
///
/// The API answers with a single object when the path names a file; that is
/// reported as a decode error rather than a one-entry listing.
fn parse_listing(body: &str) -> Result<Vec<DirectoryEntry>, ContentsError> {
    Ok(serde_json::from_str(body)?)
}
