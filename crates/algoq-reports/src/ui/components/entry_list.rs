use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::{ListingView, LoadState};
use crate::domain::entry::DirectoryEntry;
use crate::domain::route::Route;
use crate::ui::Component;
use crate::ui::components::loading::StatusMessage;
use crate::ui::state::help_action::{self, ListingHelpState};
use crate::ui::style;

const ROW_HIGHLIGHT_SYMBOL: &str = ">> ";

/// Fixed copy of one listing page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListingText<'a> {
    pub title: &'a str,
    pub loading: &'a str,
    pub empty: &'a str,
}

/// Bordered entry list with load-state placeholders and a key hint line,
/// shared by Home, Bot Detail and Version Detail.
pub struct EntryList<'a> {
    can_go_back: bool,
    listing: &'a ListingView,
    text: ListingText<'a>,
}

impl<'a> EntryList<'a> {
    pub fn new(listing: &'a ListingView, text: ListingText<'a>, can_go_back: bool) -> Self {
        Self {
            can_go_back,
            listing,
            text,
        }
    }
}

impl Component for EntryList<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .margin(1)
            .split(area);

        let main_area = chunks[0];
        let footer_area = chunks[1];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(style::ACCENT_COLOR))
            .title(format!(" {} ", self.text.title));

        match &self.listing.state {
            LoadState::Loading => {
                let inner_area = block.inner(main_area);
                f.render_widget(block, main_area);
                StatusMessage::loading(self.text.loading).render(f, inner_area);
            }
            LoadState::Empty => {
                let inner_area = block.inner(main_area);
                f.render_widget(block, main_area);
                StatusMessage::empty(self.text.empty).render(f, inner_area);
            }
            LoadState::Populated(entries) => {
                let items: Vec<ListItem<'_>> = entries.iter().map(entry_item).collect();
                let list = List::new(items)
                    .block(block)
                    .highlight_style(Style::default().bg(Color::DarkGray))
                    .highlight_symbol(ROW_HIGHLIGHT_SYMBOL);
                let mut list_state =
                    ListState::default().with_selected(Some(self.listing.selected_index));

                f.render_stateful_widget(list, main_area, &mut list_state);
            }
        }

        let help_state = ListingHelpState {
            can_go_back: self.can_go_back,
            can_open_selected: self.listing.selected_link().is_some(),
            has_breadcrumb_links: self.listing.level.route != Route::Home,
        };
        let help_text =
            help_action::footer_text(&help_action::listing_footer_actions(help_state));
        f.render_widget(
            Paragraph::new(help_text).style(style::muted_style()),
            footer_area,
        );
    }
}

/// Renders one entry as an icon plus its name.
fn entry_item(entry: &DirectoryEntry) -> ListItem<'_> {
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{} ", style::entry_icon(entry)),
            Style::default().fg(style::entry_color(entry)),
        ),
        Span::styled(
            entry.name.as_str(),
            Style::default().fg(style::entry_color(entry)),
        ),
    ]))
}
