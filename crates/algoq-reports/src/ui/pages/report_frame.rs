use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{LoadState, ReportView};
use crate::ui::components::loading::StatusMessage;
use crate::ui::icon::Icon;
use crate::ui::state::help_action;
use crate::ui::{Component, Page, style};

/// Shown when the raw report could not be downloaded or has no text.
pub const UNAVAILABLE_MESSAGE: &str = "Report preview unavailable. Press o to open it directly.";
const SCROLL_X_OFFSET: u16 = 0;

/// Report Frame page: report identity, the "Open Direct" link and the
/// embedded report text.
pub struct ReportFramePage<'a> {
    can_go_back: bool,
    report: &'a ReportView,
}

impl<'a> ReportFramePage<'a> {
    pub fn new(report: &'a ReportView, can_go_back: bool) -> Self {
        Self {
            can_go_back,
            report,
        }
    }
}

impl Page for ReportFramePage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .margin(1)
            .split(area);

        let title_area = chunks[0];
        let frame_area = chunks[1];
        let footer_area = chunks[2];

        f.render_widget(Paragraph::new(title_lines(self.report)), title_area);

        let frame_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(style::ACCENT_COLOR))
            .title(" Report ");
        match &self.report.state {
            LoadState::Loading => {
                let inner_area = frame_block.inner(frame_area);
                f.render_widget(frame_block, frame_area);
                StatusMessage::loading("Loading report").render(f, inner_area);
            }
            LoadState::Empty => {
                let inner_area = frame_block.inner(frame_area);
                f.render_widget(frame_block, frame_area);
                StatusMessage::empty(UNAVAILABLE_MESSAGE).render(f, inner_area);
            }
            LoadState::Populated(text) => {
                let paragraph = Paragraph::new(text.as_str())
                    .block(frame_block)
                    .wrap(Wrap { trim: false })
                    .scroll((self.report.scroll_offset, SCROLL_X_OFFSET));
                f.render_widget(paragraph, frame_area);
            }
        }

        let help_text =
            help_action::footer_text(&help_action::report_footer_actions(self.can_go_back));
        f.render_widget(
            Paragraph::new(help_text).style(style::muted_style()),
            footer_area,
        );
    }
}

/// Report name, `bot • version` and the direct link line.
fn title_lines(report: &ReportView) -> Vec<Line<'_>> {
    let (bot, version, report_name) = report.parameters();

    vec![
        Line::from(Span::styled(report_name, style::current_style())),
        Line::from(Span::styled(format!("{bot} • {version}"), style::muted_style())),
        Line::from(vec![
            Span::styled(
                format!("{} Open Direct ", Icon::ExternalLink),
                Style::default()
                    .fg(style::ACCENT_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(report.raw_url.as_str(), style::link_style()),
        ]),
    ]
}
