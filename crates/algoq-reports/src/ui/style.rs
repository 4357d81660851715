use ratatui::style::{Color, Modifier, Style};

use super::icon::Icon;
use crate::domain::entry::{DirectoryEntry, EntryKind};

/// Accent used for the brand, borders and interactive links.
pub const ACCENT_COLOR: Color = Color::Cyan;

/// Returns the style of a followable link label.
pub fn link_style() -> Style {
    Style::default()
        .fg(ACCENT_COLOR)
        .add_modifier(Modifier::UNDERLINED)
}

/// Returns the style of the non-interactive current position.
pub fn current_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Returns the style of secondary text such as hints and empty messages.
pub fn muted_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Returns the icon shown in front of one listing entry.
pub fn entry_icon(entry: &DirectoryEntry) -> Icon {
    match entry.kind {
        EntryKind::Dir => Icon::Folder,
        EntryKind::File | EntryKind::Other => Icon::File,
    }
}

/// Returns the terminal color used for one listing entry label.
pub fn entry_color(entry: &DirectoryEntry) -> Color {
    match entry.kind {
        EntryKind::Dir => Color::LightBlue,
        EntryKind::File => Color::White,
        EntryKind::Other => Color::DarkGray,
    }
}
