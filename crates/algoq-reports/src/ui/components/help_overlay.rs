use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Component;
use crate::ui::state::help_action::HelpAction;
use crate::ui::style::ACCENT_COLOR;

const OVERLAY_WIDTH_PERCENT: u16 = 60;
const OVERLAY_HEIGHT_PERCENT: u16 = 60;
const MIN_OVERLAY_WIDTH: u16 = 30;
const MIN_OVERLAY_HEIGHT: u16 = 10;
const BORDER_SIZE: u16 = 2;
const SCROLL_X_OFFSET: u16 = 0;

/// Centered popup overlay showing keybindings for the current page.
pub struct HelpOverlay<'a> {
    actions: &'a [HelpAction],
    scroll_offset: u16,
    title: &'a str,
}

impl<'a> HelpOverlay<'a> {
    /// Creates a help overlay for the given page actions and scroll position.
    pub fn new(title: &'a str, actions: &'a [HelpAction], scroll_offset: u16) -> Self {
        Self {
            actions,
            scroll_offset,
            title,
        }
    }
}

impl Component for HelpOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(area);

        f.render_widget(Clear, popup_area);

        let title = format!(" {} ", self.title);
        let key_width = self
            .actions
            .iter()
            .map(|action| action.key.len())
            .max()
            .unwrap_or(0);

        let mut lines: Vec<Line<'_>> =
            Vec::with_capacity(self.actions.len() + BORDER_SIZE as usize);
        lines.push(Line::from(""));

        for action in self.actions {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:>key_width$}", action.key),
                    Style::default()
                        .fg(ACCENT_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(": ", Style::default().fg(Color::White)),
                Span::styled(action.popup_label, Style::default().fg(Color::White)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Press ? / q / Esc to close",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT_COLOR))
                    .title(Span::styled(title, Style::default().fg(ACCENT_COLOR))),
            )
            .scroll((self.scroll_offset, SCROLL_X_OFFSET));

        f.render_widget(paragraph, popup_area);
    }
}

/// Computes a centered rectangle within the given `area`.
fn centered_rect(area: Rect) -> Rect {
    let popup_width = (area.width * OVERLAY_WIDTH_PERCENT / 100).max(MIN_OVERLAY_WIDTH);
    let popup_height = (area.height * OVERLAY_HEIGHT_PERCENT / 100).max(MIN_OVERLAY_HEIGHT);

    let width = popup_width.min(area.width);
    let height = popup_height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
}
