//! Configuration management
//!
//! Handles loading user settings. The library never writes configuration.

pub mod settings;

pub use settings::{Settings, config_dir, load_settings, load_settings_from};
