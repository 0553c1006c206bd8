//! JSON configuration for the command-line tools.
pub mod filters;

pub use filters::{load_config, parse_config, FilterOutputConfig, FilterToolConfig};
