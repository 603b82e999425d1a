//! Binary entry point.
//!
//! A single linear run: resolve the invoking user's full name, render the
//! report with that name in the author field, write `paper.tex` into the
//! working directory, exit. Any failure aborts with a message on stderr and
//! a non-zero status; on failure no output file is created or replaced.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use moonpaper_report::OUTPUT_FILENAME;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_default();

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let author =
        moonpaper_identity::resolve().context("could not determine the author's full name")?;
    tracing::info!(author = %author, "resolved author");

    let document = moonpaper_report::render(&author);
    moonpaper_report::write_document(OUTPUT_FILENAME, &document)
        .with_context(|| format!("could not write {OUTPUT_FILENAME}"))?;

    Ok(())
}
