pub mod date;
pub mod format;

pub use format::format_time_range;
