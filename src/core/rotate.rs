// src/core/rotate.rs
//! Single-character rotation in both directions

use super::alphabet::{effective_size, position, symbol_at};
use crate::enums::Direction;

#[inline]
fn reduce(rotation: u64, size: usize) -> usize {
    // size is 26 or 27, so the remainder always fits
    (rotation % size as u64) as usize
}

/// Rotate `symbol` forward by `rotation` places
///
/// Lowercase letters always rotate. The space rotates only when
/// `include_spaces` is set; everything else is returned unchanged.
pub fn rotate_forward(symbol: char, rotation: u64, include_spaces: bool) -> char {
    let Some(pos) = position(symbol, include_spaces) else {
        return symbol;
    };
    let size = effective_size(include_spaces);
    symbol_at((pos + reduce(rotation, size)) % size)
}

/// Exact inverse of [`rotate_forward`] for the same `rotation` and `include_spaces`
pub fn rotate_backward(symbol: char, rotation: u64, include_spaces: bool) -> char {
    let Some(pos) = position(symbol, include_spaces) else {
        return symbol;
    };
    let size = effective_size(include_spaces);
    let rotation = reduce(rotation, size);
    let pos = if pos < rotation {
        size - (rotation - pos)
    } else {
        pos - rotation
    };
    symbol_at(pos)
}

impl Direction {
    /// Rotate one character in this direction
    #[inline]
    pub fn rotate(self, symbol: char, rotation: u64, include_spaces: bool) -> char {
        match self {
            Direction::Forward => rotate_forward(symbol, rotation, include_spaces),
            Direction::Backward => rotate_backward(symbol, rotation, include_spaces),
        }
    }
}
