// src/consts.rs
//! Shared constants — defaults and the prompt grammar

/// Key used when the input line carries no `/<key>` suffix
pub const DEFAULT_KEY: u64 = 13;

/// Separates the plaintext from an explicit key on the input line
pub const KEY_SEPARATOR: char = '/';

/// Marks the dropped first character in the misalignment line
pub const SKIPPED_MARKER: char = '█';

/// Format tag written into JSON reports
pub const REPORT_FORMAT: &str = "rotary-cipher-report-v1";

/// Default tracing filter when neither config nor `RUST_LOG` set one
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Env var naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "ROTARY_CONFIG";

/// Env var overriding `cipher.default_key`
pub const DEFAULT_KEY_ENV: &str = "ROTARY_DEFAULT_KEY";

/// Env var that, when present, disables the exit pause
pub const NO_PAUSE_ENV: &str = "ROTARY_NO_PAUSE";
