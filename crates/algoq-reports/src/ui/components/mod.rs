pub mod breadcrumbs;
pub mod entry_list;
pub mod footer_bar;
pub mod header;
pub mod help_overlay;
pub mod loading;
