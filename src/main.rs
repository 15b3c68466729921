//! Times point lookups by linear scan against a hash index over a synthetic
//! dataset and prints the speedup.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use dictlookup::bench;
use dictlookup::config::BenchConfig;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    bench::run(&BenchConfig::default(), &mut out).context("benchmark failed")?;
    out.flush()?;
    Ok(())
}
