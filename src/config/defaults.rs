// src/config/defaults.rs
use crate::config::app::{CipherSettings, LoggingSettings, OutputSettings, PromptSettings};
use crate::consts::{DEFAULT_KEY, DEFAULT_LOG_FILTER};
use crate::enums::OutputFormat;

impl Default for CipherSettings {
    fn default() -> Self {
        Self {
            default_key: DEFAULT_KEY,
        }
    }
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            pause_on_exit: true,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}
