use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::View;
use crate::ui::state::app_mode::AppMode;
use crate::ui::{components, router};

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    /// Renders a page in the provided frame and area.
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    /// Renders a component in the provided frame and area.
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Immutable data required to draw a single UI frame.
pub struct RenderContext<'a> {
    pub can_go_back: bool,
    pub copyright_year: i32,
    pub mode: &'a AppMode,
    pub owner: &'a str,
    pub view: &'a View,
}

/// Renders a complete frame including header, breadcrumbs, content and footer.
pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let area = f.area();
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header_area = outer_chunks[0];
    let breadcrumbs_area = outer_chunks[1];
    let content_area = outer_chunks[2];
    let footer_bar_area = outer_chunks[3];

    components::header::Header::new(context.owner).render(f, header_area);
    components::breadcrumbs::Breadcrumbs::new(context.view.route()).render(f, breadcrumbs_area);
    components::footer_bar::FooterBar::new(context.copyright_year, context.view.route().clone())
        .render(f, footer_bar_area);

    router::route_frame(f, content_area, context);
}
