// Common utilities

pub mod bit;
pub mod option_map;
pub mod log_format;

pub use option_map::OptionMap;
pub use log_format::LogFormat;
