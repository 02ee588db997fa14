// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: cipher direction,
//! cipher mode and report format.

use serde::{Deserialize, Serialize};

/// Which way a rotation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Encrypt
    #[default]
    Forward,
    /// Decrypt
    Backward,
}

impl From<bool> for Direction {
    fn from(forward: bool) -> Self {
        if forward {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// Where each character's rotation amount comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherMode {
    /// Every character rotates by the key
    Constant,
    /// Character `i` rotates by key + `i`
    Positional,
    /// Rotations drawn from a key-seeded generator
    Random,
}

impl CipherMode {
    /// Human-readable name used in reports
    pub fn label(self, include_spaces: bool) -> &'static str {
        match (self, include_spaces) {
            (CipherMode::Constant, false) => "Rotary cipher without spaces",
            (CipherMode::Constant, true) => "Rotary cipher with spaces",
            (CipherMode::Positional, _) => "Rotary cipher with index",
            (CipherMode::Random, _) => "Random cipher",
        }
    }

    /// Two-letter id prefixed to each report line
    pub fn id(self, include_spaces: bool) -> &'static str {
        match (self, include_spaces) {
            (CipherMode::Constant, false) => "Rn",
            (CipherMode::Constant, true) => "Rs",
            (CipherMode::Positional, _) => "Ix",
            (CipherMode::Random, _) => "Ra",
        }
    }
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
