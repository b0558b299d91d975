pub mod config;
pub mod locale;
pub mod logging;
pub mod model;
pub mod time_format;
pub mod ui;
