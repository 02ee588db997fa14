// src/config/mod.rs
//! Configuration system for rotary-cipher
//!
//! Lazy-loaded global config with TOML + env overrides.

pub use app::{
    apply_overrides, config_path, load, load_from, CipherSettings, Config, ConfigSource,
    LoggingSettings, OutputSettings, PromptSettings,
};

mod app;
mod defaults;
