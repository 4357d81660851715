use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::domain::route::{Breadcrumb, Route};
use crate::ui::Component;
use crate::ui::icon::Icon;
use crate::ui::style;

/// One element of the rendered trail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TrailItem {
    pub breadcrumb: Breadcrumb,
    /// Digit key that follows this item; `None` for the current position.
    pub link_index: Option<usize>,
}

/// Returns the trail for `route`: the fixed Home anchor followed by the route
/// crumbs, where every item but the last is a numbered link.
pub fn trail(route: &Route) -> Vec<TrailItem> {
    let breadcrumbs: Vec<Breadcrumb> = std::iter::once(Breadcrumb::home())
        .chain(route.breadcrumbs())
        .collect();
    let current_index = breadcrumbs.len() - 1;

    breadcrumbs
        .into_iter()
        .enumerate()
        .map(|(index, breadcrumb)| TrailItem {
            breadcrumb,
            link_index: (index < current_index).then_some(index),
        })
        .collect()
}

/// Navigation trail shown under the header.
pub struct Breadcrumbs<'a> {
    route: &'a Route,
}

impl<'a> Breadcrumbs<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self { route }
    }
}

impl Component for Breadcrumbs<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let separator = format!(" {} ", Icon::ChevronRight);
        let mut spans = vec![Span::raw(" ")];

        for (position, item) in trail(self.route).into_iter().enumerate() {
            if position > 0 {
                spans.push(Span::styled(separator.clone(), style::muted_style()));
            }

            match item.link_index {
                Some(link_index) => {
                    spans.push(Span::styled(
                        format!("[{link_index}] "),
                        style::muted_style(),
                    ));
                    spans.push(Span::styled(item.breadcrumb.label, style::link_style()));
                }
                None => spans.push(Span::styled(item.breadcrumb.label, style::current_style())),
            }
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
