pub mod app_time;
pub mod format_utils;

pub use format_utils::group_digits;
