pub mod app_mode;
pub mod help_action;
