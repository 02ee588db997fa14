// src/export/json.rs
use std::io::Write;

use serde_json::json;

use crate::consts::REPORT_FORMAT;
use crate::error::Result;
use crate::examine::Examination;

/// Build the pretty-printed JSON report for one run
///
/// The random mode's ciphertext is only reproducible with the same build,
/// so reports are not meant to be compared across versions.
pub fn export_to_json(key: u64, examinations: &[Examination]) -> Result<String> {
    let report = json!({
        "format": REPORT_FORMAT,
        "version": env!("CARGO_PKG_VERSION"),
        "key": key,
        "total_examinations": examinations.len(),
        "examinations": examinations,
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Write the JSON report followed by a newline
pub fn write_json<W: Write>(out: &mut W, key: u64, examinations: &[Examination]) -> Result<()> {
    let report = export_to_json(key, examinations)?;
    writeln!(out, "{report}")?;
    Ok(())
}
