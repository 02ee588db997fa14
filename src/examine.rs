// src/examine.rs
//! Side-by-side comparison of correct and broken decryptions
//!
//! Each [`Examination`] encrypts a plaintext with one mode, then decrypts it
//! three ways: with the right key, with `key - 1`, and with the first
//! ciphertext character dropped.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::enums::{CipherMode, Direction};

/// Modes run by the demo, in print order
pub const STANDARD_SUITE: [(CipherMode, bool); 4] = [
    (CipherMode::Constant, false),
    (CipherMode::Constant, true),
    (CipherMode::Positional, true),
    (CipherMode::Random, true),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Examination {
    pub name: String,
    pub id: String,
    pub mode: CipherMode,
    pub include_spaces: bool,
    pub key: u64,
    pub input: String,
    pub encrypted: String,
    pub correct: String,
    /// Key used for the wrong-key line (wraps at zero)
    pub wrong_key_used: u64,
    pub wrong_key: String,
    pub skipped_first: String,
}

/// Run one mode over `input` and collect all four outputs
pub fn examine(mode: CipherMode, input: &str, key: u64, include_spaces: bool) -> Examination {
    let encrypted = mode.apply(input, key, Direction::Forward, include_spaces);
    let correct = mode.apply(&encrypted, key, Direction::Backward, include_spaces);

    let wrong_key_used = key.wrapping_sub(1);
    let wrong_key = mode.apply(&encrypted, wrong_key_used, Direction::Backward, include_spaces);

    let mut rest = encrypted.chars();
    rest.next();
    let skipped_first = mode.apply(rest.as_str(), key, Direction::Backward, include_spaces);

    debug!(
        ?mode,
        include_spaces,
        key,
        chars = input.chars().count(),
        "examined cipher mode"
    );

    Examination {
        name: mode.label(include_spaces).to_owned(),
        id: mode.id(include_spaces).to_owned(),
        mode,
        include_spaces,
        key,
        input: input.to_owned(),
        encrypted,
        correct,
        wrong_key_used,
        wrong_key,
        skipped_first,
    }
}

/// Run every entry of [`STANDARD_SUITE`]
pub fn examine_all(input: &str, key: u64) -> Vec<Examination> {
    STANDARD_SUITE
        .iter()
        .map(|&(mode, include_spaces)| examine(mode, input, key, include_spaces))
        .collect()
}
