use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;
use crate::ui::layout;
use crate::ui::style::ACCENT_COLOR;

const BRAND: &str = " AlgoQ Reports";

/// Top bar with the brand and the repository owner.
pub struct Header {
    owner: String,
}

impl Header {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
        }
    }
}

impl Component for Header {
    fn render(&self, f: &mut Frame, area: Rect) {
        let owner_text = format!("GitHub: {} ", self.owner);
        let mut spans = vec![Span::styled(
            BRAND,
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        )];

        if let Some(padding) = layout::edge_padding(BRAND, &owner_text, area.width) {
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(owner_text, Style::default().fg(Color::Gray)));
        }

        let header = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(header, area);
    }
}
