// src/bin/rotary_demo.rs
//! Interactive rotation cipher demo — one line in, four cipher reports out

use anyhow::{Context, Result};
use rotary_cipher::config::Config;
use rotary_cipher::export::{write_json, write_text};
use rotary_cipher::input::{pause, read_prompt};
use rotary_cipher::{examine_all, load_config, OutputFormat};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let (config, source) = load_config().context("Failed to load configuration")?;
    init_tracing(config);
    source.log();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let pause_on_exit = config.prompt.pause_on_exit;

    let prompt = match read_prompt(&mut input, &mut out, config.cipher.default_key)
        .context("stdin closed at the prompt")?
    {
        Some(prompt) => prompt,
        None => {
            writeln!(out, "Unable to parse key, aborting...")?;
            pause(&mut input, &mut out, pause_on_exit)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    info!(key = prompt.key, "running standard suite");
    let examinations = examine_all(&prompt.text, prompt.key);

    match config.output.format {
        OutputFormat::Text => write_text(&mut out, &examinations)?,
        OutputFormat::Json => write_json(&mut out, prompt.key, &examinations)?,
    }

    pause(&mut input, &mut out, pause_on_exit)?;
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}
