use url::Url;

/// Default contents API host.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
/// Default raw-content host.
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";

const CONTENTS_SEGMENT: &str = "contents";
const PATH_SEPARATOR: char = '/';
const REPOS_SEGMENT: &str = "repos";

/// Coordinates of the hosted report repository.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
    pub branch: String,
    pub api_base: Url,
    pub raw_base: Url,
}

impl Repository {
    /// Returns the contents-listing endpoint for `relative_path`.
    pub fn contents_url(&self, relative_path: &str) -> String {
        contents_api_url(&self.api_base, &self.owner, &self.name, relative_path)
    }

    /// Returns the raw-content location of the file at `relative_path`.
    pub fn raw_url(&self, relative_path: &str) -> String {
        build_raw_url(
            &self.raw_base,
            &self.owner,
            &self.name,
            &self.branch,
            relative_path,
        )
    }
}

/// Builds `<raw_base>/<owner>/<repo>/<branch>/<relative_path>`.
///
/// Every segment is percent-escaped on its own, so names with spaces, `#` or
/// `?` stay inside their segment. URL-safe names produce the plain
/// concatenation.
pub fn build_raw_url(
    raw_base: &Url,
    owner: &str,
    repo: &str,
    branch: &str,
    relative_path: &str,
) -> String {
    join_segments(raw_base, &[owner, repo, branch], relative_path)
}

/// Builds `<api_base>/repos/<owner>/<repo>/contents/<relative_path>`.
pub fn contents_api_url(api_base: &Url, owner: &str, repo: &str, relative_path: &str) -> String {
    join_segments(
        api_base,
        &[REPOS_SEGMENT, owner, repo, CONTENTS_SEGMENT],
        relative_path,
    )
}

fn join_segments(base: &Url, prefix: &[&str], relative_path: &str) -> String {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty();
        segments.extend(prefix);
        segments.extend(
            relative_path
                .split(PATH_SEPARATOR)
                .filter(|segment| !segment.is_empty()),
        );
    }

    url.to_string()
}
