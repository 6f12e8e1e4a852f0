//! Command implementation modules

pub mod clean;
pub mod config;

pub use clean::run_clean_command;
pub use config::run_config_command;
