// src/input.rs
//! Prompt-line grammar: `<plaintext>[/<key>]`

use std::io::{BufRead, Write};
use tracing::warn;

use crate::consts::KEY_SEPARATOR;
use crate::error::{CoreError, Result};

/// A parsed input line, ready for ciphering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Plaintext with ASCII letters folded to lowercase
    pub text: String,
    pub key: u64,
}

/// Parse one line read from the prompt
///
/// The text after the last `/` is the key and must be a plain decimal
/// number. Without a `/` the line keeps `default_key`.
pub fn parse_line(line: &str, default_key: u64) -> Result<Prompt> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    if line.is_empty() {
        return Err(CoreError::EmptyInput);
    }

    let (text, key) = match line.rsplit_once(KEY_SEPARATOR) {
        Some((text, suffix)) => (text, parse_key(suffix)?),
        None => (line, default_key),
    };

    Ok(Prompt {
        text: fold_lowercase(text),
        key,
    })
}

/// Parse a key suffix. Signs, whitespace and trailing characters are rejected.
pub fn parse_key(suffix: &str) -> Result<u64> {
    let invalid = || {
        warn!(suffix, "rejected key suffix");
        CoreError::InvalidKeyFormat {
            suffix: suffix.to_owned(),
        }
    };

    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    suffix.parse().map_err(|_| invalid())
}

/// Fold ASCII letters to lowercase; everything else is untouched
pub fn fold_lowercase(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// Print the prompt text once
pub fn write_prompt<W: Write>(out: &mut W, default_key: u64) -> Result<()> {
    writeln!(
        out,
        "Enter plaintext, if not added key will default to {default_key}."
    )?;
    writeln!(
        out,
        "To add a custom key, end your plaintext with /XX, where XX is a valid positive number."
    )?;
    writeln!(
        out,
        "Only lower case text will be translated, upper case text will be converted. Non-space punctuation will be skipped."
    )?;
    out.flush()?;
    Ok(())
}

/// Prompt until a non-empty line arrives
///
/// Empty lines re-prompt. `Ok(None)` means the key suffix was malformed and
/// the caller should abort; end of input before any text is `UnexpectedEof`.
pub fn read_prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    default_key: u64,
) -> Result<Option<Prompt>> {
    loop {
        write_prompt(out, default_key)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(CoreError::UnexpectedEof);
        }

        match parse_line(&line, default_key) {
            Ok(prompt) => return Ok(Some(prompt)),
            Err(CoreError::EmptyInput) => continue,
            Err(CoreError::InvalidKeyFormat { .. }) => return Ok(None),
            Err(e) => return Err(e),
        }
    }
}

/// Wait for one line of input when `enabled`
pub fn pause<R: BufRead, W: Write>(input: &mut R, out: &mut W, enabled: bool) -> Result<()> {
    if !enabled {
        return Ok(());
    }
    writeln!(out, "Press [return] to continue...")?;
    out.flush()?;
    let mut discard = String::new();
    input.read_line(&mut discard)?;
    Ok(())
}
