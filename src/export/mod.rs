// src/export/mod.rs
//! Report renderers for examination results
//!
//! Text mirrors the classic console layout; JSON is for scripting.

pub use json::{export_to_json, write_json};
pub use text::{render_text, write_text};

pub mod json;
pub mod text;
