pub mod app_config;
pub mod logging;
pub mod output;

pub use app_config::*;
pub use logging::*;
pub use output::*;
