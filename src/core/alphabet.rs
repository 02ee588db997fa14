// src/core/alphabet.rs
//! The fixed 27-symbol rotation alphabet
//!
//! Letters `a`..=`z` at positions 0..=25, then the space at 26.
//! A symbol's position is its rotation index.

/// Number of letters `a`..=`z`
pub const LETTER_COUNT: usize = 26;

/// The one non-letter symbol that may take part in rotation
pub const SPACE: char = ' ';

/// Letters followed by the space, in rotation order
pub const ALPHABET: [u8; LETTER_COUNT + 1] = build_alphabet();

/// Least common multiple of both effective sizes (26 × 27)
pub const ROTATION_PERIOD: u64 = (LETTER_COUNT * (LETTER_COUNT + 1)) as u64;

const fn build_alphabet() -> [u8; LETTER_COUNT + 1] {
    let mut ret = [b' '; LETTER_COUNT + 1];
    let mut i = 0;
    while i < LETTER_COUNT {
        ret[i] = b'a' + i as u8;
        i += 1;
    }
    ret
}

/// Effective alphabet size: 27 when the space rotates, 26 otherwise
#[inline]
pub const fn effective_size(include_spaces: bool) -> usize {
    if include_spaces {
        ALPHABET.len()
    } else {
        LETTER_COUNT
    }
}

/// Rotation index of `symbol`, or `None` when it passes through untouched
pub fn position(symbol: char, include_spaces: bool) -> Option<usize> {
    match symbol {
        'a'..='z' => Some(symbol as usize - 'a' as usize),
        SPACE if include_spaces => Some(ALPHABET.len() - 1),
        _ => None,
    }
}

/// Symbol stored at `pos`; callers pass positions below the effective size
#[inline]
pub(crate) fn symbol_at(pos: usize) -> char {
    char::from(ALPHABET[pos])
}
