// src/export/text.rs
use std::io::{self, Write};

use crate::consts::SKIPPED_MARKER;
use crate::examine::Examination;

fn format_examination(exam: &Examination) -> String {
    let id = &exam.id;
    format!(
        "{name} examples:\n\
         Input:\n\t{input}\n\
         Encrypted form (using key {key}):\n\
         {id}.0\t{encrypted}\n\
         Output:\n\
         {id}.1\t{correct}\tCorrect Decryption.\n\
         {id}.2\t{wrong}\tIncorrect decryption - Wrong key ({wrong_key}).\n\
         {id}.3\t{SKIPPED_MARKER}{skipped}\tIncorrect decryption - Skipped first letter.\n\n",
        name = exam.name,
        input = exam.input,
        key = exam.key,
        encrypted = exam.encrypted,
        correct = exam.correct,
        wrong = exam.wrong_key,
        wrong_key = exam.wrong_key_used,
        skipped = exam.skipped_first,
    )
}

/// Every examination in the console layout
pub fn render_text(examinations: &[Examination]) -> String {
    examinations.iter().map(format_examination).collect()
}

/// Write [`render_text`] output to `out`
pub fn write_text<W: Write>(out: &mut W, examinations: &[Examination]) -> io::Result<()> {
    out.write_all(render_text(examinations).as_bytes())
}
