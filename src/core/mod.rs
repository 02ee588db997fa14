// src/core/mod.rs
pub mod alphabet;
pub mod cipher;
pub mod rotate;

pub use alphabet::*;
pub use cipher::*;
pub use rotate::*;
