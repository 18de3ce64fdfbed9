//! Critter evolution runner
//!
//! Loads the simulation config file and drives the core simulation headless.

pub mod config;
pub mod headless;

pub use config::{CONFIG_FILE, ConfigError, load_config};
pub use headless::{RunOptions, RunReport, run};
