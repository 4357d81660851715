//! Infrastructure adapters for the hosting API, raw content and the desktop.

/// Contents-API client boundary and the collapsing directory fetcher.
pub mod contents;
/// Repository coordinates and URL builders for the API and raw hosts.
pub mod github;
pub mod opener;
/// Readable-text extraction for embedded HTML reports.
pub mod report_text;
