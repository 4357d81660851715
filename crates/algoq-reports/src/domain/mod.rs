//! Pure domain types shared by the app, infra and UI layers.

pub mod entry;
/// Hierarchy levels and the listing contract of each level.
pub mod hierarchy;
pub mod route;
