// src/core/cipher.rs
//! Whole-string rotation ciphers
//!
//! All three modes share one loop and differ only in where each
//! character's rotation amount comes from:
//! - `rot_cipher`: the key, unchanged
//! - `cipher`: key + character index
//! - `rand_cipher`: a generator seeded from the key, one draw per character

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::alphabet::ROTATION_PERIOD;
use crate::enums::{CipherMode, Direction};

fn transform<I>(text: &str, rotations: I, direction: Direction, include_spaces: bool) -> String
where
    I: IntoIterator<Item = u64>,
{
    text.chars()
        .zip(rotations)
        .map(|(c, rotation)| direction.rotate(c, rotation, include_spaces))
        .collect()
}

/// Position-dependent mode: the character at index `i` rotates by `key + i`
pub fn cipher(text: &str, key: u64, direction: Direction, include_spaces: bool) -> String {
    // Reducing both terms by the period keeps the sum exact mod 26 and mod 27
    let base = key % ROTATION_PERIOD;
    let rotations = (0..ROTATION_PERIOD).cycle().map(move |i| base + i);
    transform(text, rotations, direction, include_spaces)
}

/// Constant mode: every character rotates by `key`
pub fn rot_cipher(text: &str, key: u64, direction: Direction, include_spaces: bool) -> String {
    transform(text, std::iter::repeat(key), direction, include_spaces)
}

/// Pseudo-random mode, seeded from `key`
///
/// A fresh generator is built on every call, so encrypting and decrypting
/// with the same key draw the same sequence. The sequence is only stable
/// for one build of this crate and its `rand` version; it is not portable
/// and has no cryptographic value.
pub fn rand_cipher(text: &str, key: u64, direction: Direction, include_spaces: bool) -> String {
    let mut rng = StdRng::seed_from_u64(key);
    rand_cipher_with(text, &mut rng, direction, include_spaces)
}

/// Pseudo-random mode driven by a caller-supplied generator
///
/// One `u32` is drawn per character. Decrypting needs a generator in the
/// same state the encrypting one started from.
pub fn rand_cipher_with<R: Rng>(
    text: &str,
    rng: &mut R,
    direction: Direction,
    include_spaces: bool,
) -> String {
    let rotations = std::iter::repeat_with(|| u64::from(rng.random::<u32>()));
    transform(text, rotations, direction, include_spaces)
}

impl CipherMode {
    /// Run the whole-string cipher this mode names
    pub fn apply(self, text: &str, key: u64, direction: Direction, include_spaces: bool) -> String {
        match self {
            CipherMode::Constant => rot_cipher(text, key, direction, include_spaces),
            CipherMode::Positional => cipher(text, key, direction, include_spaces),
            CipherMode::Random => rand_cipher(text, key, direction, include_spaces),
        }
    }
}
