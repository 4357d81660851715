pub mod components;
pub mod icon;
pub mod layout;
pub mod pages;
mod render;
pub mod router;
pub mod state;
pub mod style;

/// A trait for UI components that enforces a standard rendering interface.
pub use render::Component;
/// A trait for UI pages that enforces a standard rendering interface.
pub use render::Page;
/// Immutable data required to draw a single UI frame.
pub use render::RenderContext;
/// Renders a complete frame including header, breadcrumbs, content and footer.
pub use render::render;
