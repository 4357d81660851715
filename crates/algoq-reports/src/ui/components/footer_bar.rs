use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::domain::route::Route;
use crate::ui::Component;
use crate::ui::layout;

const ECOSYSTEM_TEXT: &str = "Built for cTrader Ecosystem ";

/// Bottom bar with the copyright notice, the current hash route and the
/// ecosystem tagline.
pub struct FooterBar {
    copyright_year: i32,
    route: Route,
}

impl FooterBar {
    pub fn new(copyright_year: i32, route: Route) -> Self {
        Self {
            copyright_year,
            route,
        }
    }
}

impl Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let left_text = format!(" © {} AlgoQ", self.copyright_year);
        let route_text = self.route.to_string();
        let mut spans = vec![Span::raw(left_text.clone())];

        if let Some((left_padding, right_padding)) =
            centered_paddings(&left_text, &route_text, ECOSYSTEM_TEXT, area.width)
        {
            spans.push(Span::raw(" ".repeat(left_padding)));
            spans.push(Span::styled(
                route_text,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::DIM),
            ));
            spans.push(Span::raw(" ".repeat(right_padding)));
            spans.push(Span::raw(ECOSYSTEM_TEXT));
        } else if let Some(padding) = layout::edge_padding(&left_text, ECOSYSTEM_TEXT, area.width)
        {
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::raw(ECOSYSTEM_TEXT));
        }

        let footer = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));

        f.render_widget(footer, area);
    }
}

/// Returns the spaces before and after `middle` so it sits centered between
/// `left` and `right`, or `None` when it would touch either side.
fn centered_paddings(
    left: &str,
    middle: &str,
    right: &str,
    total_width: u16,
) -> Option<(usize, usize)> {
    let total_width = usize::from(total_width);
    let left_width = layout::display_width(left);
    let middle_width = layout::display_width(middle);
    let right_width = layout::display_width(right);

    let middle_start = total_width.checked_sub(middle_width)? / 2;
    let left_padding = middle_start.checked_sub(left_width)?;
    let right_padding = total_width
        .checked_sub(middle_start + middle_width)?
        .checked_sub(right_width)?;
    if left_padding == 0 || right_padding == 0 {
        return None;
    }

    Some((left_padding, right_padding))
}
