use serde::Deserialize;

/// Kind of one listing entry as reported by the contents API `type` field.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
    /// Symlinks, submodules and any kind the host adds later.
    #[serde(other)]
    Other,
}

/// One item of a remote directory listing.
///
/// Only the fields the browser reads are kept; `sha`, `size` and the API
/// links are ignored during deserialization.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct DirectoryEntry {
    /// File or directory name, unique within one listing.
    pub name: String,
    /// Repository-relative path (e.g. `reports/BotA/v1`).
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Raw download location; absent for directories.
    #[serde(default)]
    pub download_url: Option<String>,
}

impl DirectoryEntry {
    /// Returns whether this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Rule that decides which listing entries a view links to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EntryFilter {
    /// Keeps directory entries only.
    Directories,
    /// Keeps `file` entries whose name ends with the given suffix
    /// (case-sensitive). A directory named like a report is not kept, even
    /// though its name matches.
    Suffix(String),
}

impl EntryFilter {
    /// Returns whether `entry` passes this filter.
    pub fn matches(&self, entry: &DirectoryEntry) -> bool {
        match self {
            Self::Directories => entry.is_dir(),
            Self::Suffix(suffix) => {
                entry.kind == EntryKind::File && entry.name.ends_with(suffix.as_str())
            }
        }
    }

    /// Drops every entry that does not pass this filter, keeping listing
    /// order.
    pub fn apply(&self, entries: Vec<DirectoryEntry>) -> Vec<DirectoryEntry> {
        entries
            .into_iter()
            .filter(|entry| self.matches(entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, kind: EntryKind) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            path: format!("reports/{name}"),
            kind,
            download_url: None,
        }
    }

    fn mixed_listing() -> Vec<DirectoryEntry> {
        vec![
            entry("x.html", EntryKind::File),
            entry("y", EntryKind::Dir),
            entry("notes.txt", EntryKind::File),
            entry("linked", EntryKind::Other),
        ]
    }

    #[test]
    fn test_deserialize_contents_api_listing() {
        // Arrange
        let body = r#"[
            {
                "name": "run1.html",
                "path": "reports/BotA/v1/run1.html",
                "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
                "size": 5362,
                "url": "https://api.github.com/repos/algoqnet/backtesting-reports/contents/reports/BotA/v1/run1.html?ref=main",
                "html_url": "https://github.com/algoqnet/backtesting-reports/blob/main/reports/BotA/v1/run1.html",
                "git_url": "https://api.github.com/repos/algoqnet/backtesting-reports/git/blobs/3d21ec53a331a6f037a91c368710b99387d012c1",
                "download_url": "https://raw.githubusercontent.com/algoqnet/backtesting-reports/main/reports/BotA/v1/run1.html",
                "type": "file"
            },
            {
                "name": "archive",
                "path": "reports/BotA/v1/archive",
                "sha": "a84d88e7554fc1fa21bcbc4efae3c782a70d2b9d",
                "size": 0,
                "url": "https://api.github.com/repos/algoqnet/backtesting-reports/contents/reports/BotA/v1/archive?ref=main",
                "html_url": "https://github.com/algoqnet/backtesting-reports/tree/main/reports/BotA/v1/archive",
                "git_url": "https://api.github.com/repos/algoqnet/backtesting-reports/git/trees/a84d88e7554fc1fa21bcbc4efae3c782a70d2b9d",
                "download_url": null,
                "type": "dir"
            },
            {
                "name": "vendor",
                "path": "reports/BotA/v1/vendor",
                "type": "submodule",
                "download_url": null
            }
        ]"#;

        // Act
        let entries: Vec<DirectoryEntry> =
            serde_json::from_str(body).expect("failed to parse listing");

        // Assert
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(
            entries[0].download_url.as_deref(),
            Some(
                "https://raw.githubusercontent.com/algoqnet/backtesting-reports/main/reports/BotA/v1/run1.html"
            )
        );
        assert!(entries[1].is_dir());
        assert_eq!(entries[1].download_url, None);
        assert_eq!(entries[2].kind, EntryKind::Other);
    }

    #[test]
    fn test_directories_filter_keeps_only_directories() {
        // Arrange
        let filter = EntryFilter::Directories;

        // Act
        let kept = filter.apply(mixed_listing());

        // Assert
        let names: Vec<&str> = kept.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["y"]);
    }

    #[test]
    fn test_suffix_filter_keeps_only_matching_files() {
        // Arrange
        let filter = EntryFilter::Suffix(".html".to_string());

        // Act
        let kept = filter.apply(mixed_listing());

        // Assert
        let names: Vec<&str> = kept.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["x.html"]);
    }

    #[test]
    fn test_suffix_filter_is_case_sensitive_and_skips_directories() {
        // Arrange
        let filter = EntryFilter::Suffix(".html".to_string());
        let listing = vec![
            entry("RUN.HTML", EntryKind::File),
            entry("bundle.html", EntryKind::Dir),
        ];

        // Act
        let kept = filter.apply(listing);

        // Assert
        assert!(kept.is_empty());
    }

    #[test]
    fn test_filters_are_idempotent() {
        // Arrange
        let filters = [
            EntryFilter::Directories,
            EntryFilter::Suffix(".html".to_string()),
        ];

        for filter in filters {
            // Act
            let once = filter.apply(mixed_listing());
            let twice = filter.apply(once.clone());

            // Assert
            assert_eq!(once, twice);
        }
    }
}
