pub(crate) mod date;
pub(crate) mod format;
pub(crate) mod logging;

pub(crate) use date::parse_timestamp;
pub(crate) use format::{format_duration, format_hour};
pub(crate) use logging::init_logging;
