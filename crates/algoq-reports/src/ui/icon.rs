use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A collection of icons used throughout the terminal UI.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    /// A breadcrumb separator symbol (›).
    ChevronRight,
    /// An external link symbol (↗).
    ExternalLink,
    /// A report file symbol (▤).
    File,
    /// A directory symbol (▸).
    Folder,
    /// A spinner symbol frame.
    Spinner(usize),
}

impl Icon {
    /// Returns a `Spinner` icon with the frame index calculated based on
    /// current time.
    pub fn current_spinner() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        Icon::Spinner((now / 100) as usize)
    }

    /// Returns the string representation of the icon.
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::ChevronRight => "›",
            Icon::ExternalLink => "↗",
            Icon::File => "▤",
            Icon::Folder => "▸",
            Icon::Spinner(frame) => SPINNER_FRAMES[frame % SPINNER_FRAMES.len()],
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
