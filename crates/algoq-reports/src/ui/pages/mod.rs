pub mod bot_list;
pub mod report_frame;
pub mod report_list;
pub mod version_list;
