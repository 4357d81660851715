use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;
use crate::ui::icon::Icon;
use crate::ui::style::muted_style;

/// Centered status line shown while a view waits for its fetch or has
/// nothing to list.
pub struct StatusMessage<'a> {
    message: &'a str,
    spinner: Option<Icon>,
}

impl<'a> StatusMessage<'a> {
    /// Creates an animated loading line.
    pub fn loading(message: &'a str) -> Self {
        Self {
            message,
            spinner: Some(Icon::current_spinner()),
        }
    }

    /// Creates a static empty-state line.
    pub fn empty(message: &'a str) -> Self {
        Self {
            message,
            spinner: None,
        }
    }
}

impl Component for StatusMessage<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(2);
        if let Some(spinner) = self.spinner {
            spans.push(Span::styled(
                format!("{spinner} "),
                Style::default().fg(Color::Yellow),
            ));
        }
        spans.push(Span::styled(self.message, muted_style()));

        let vertical_offset = area.height / 2;
        let line_area = Rect::new(
            area.x,
            area.y + vertical_offset,
            area.width,
            area.height.saturating_sub(vertical_offset).min(1),
        );

        f.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            line_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render_text(message: &StatusMessage<'_>) -> String {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                message.render(f, area);
            })
            .expect("failed to draw");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_empty_message_renders_without_spinner() {
        // Arrange
        let message = StatusMessage::empty("No versions logged yet.");

        // Act
        let text = render_text(&message);

        // Assert
        assert!(text.contains("No versions logged yet."));
        assert!(!text.contains('⠋'));
    }

    #[test]
    fn test_loading_message_renders_spinner_frame() {
        // Arrange
        let message = StatusMessage::loading("Loading");

        // Act
        let text = render_text(&message);

        // Assert
        assert!(text.contains("Loading"));
        assert!(message.spinner.is_some());
    }
}
