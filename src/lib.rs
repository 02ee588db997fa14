// src/lib.rs
//! rotary-cipher — classical rotation ciphers over a 27-symbol alphabet
//!
//! Features:
//! - Forward/backward rotation over `a`..=`z` plus an optional space
//! - Constant, position-dependent and key-seeded pseudo-random modes
//! - Side-by-side reports of correct and broken decryptions
//!
//! None of this is secure. It exists to show why.

pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod examine;
pub mod export;
pub mod input;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use crate::core::{
    cipher, rand_cipher, rand_cipher_with, rot_cipher, rotate_backward, rotate_forward, ALPHABET,
};
pub use enums::{CipherMode, Direction, OutputFormat};
pub use error::{CoreError, Result as CoreResult};
pub use examine::{examine, examine_all, Examination};
pub use input::{parse_line, pause, read_prompt, Prompt};
