//! The timed comparison between a linear scan and a hash index.
//!
//! [`run`] is the whole program: generate, sort, pick sample ids, then hand
//! off to [`compare`], which times both strategies and writes the progress
//! trail and results to `out`.

use std::io::Write;
use std::time::{Duration, Instant};

use tracing::info;

use crate::config::BenchConfig;
use crate::dataset;
use crate::error::{Error, Result};
use crate::index::RecordIndex;
use crate::linear;
use crate::random;
use crate::record::Record;
use crate::sample;
use crate::utils::group_thousands;

/// Everything measured by one comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    pub ids: Vec<u32>,
    /// Result of the linear scan for each entry of `ids`.
    pub linear: Vec<Option<Record>>,
    /// Result of the index lookup for each entry of `ids`.
    pub hashed: Vec<Option<Record>>,
    pub linear_elapsed: Duration,
    /// Index build plus every lookup.
    pub hash_elapsed: Duration,
    /// The build alone; already included in `hash_elapsed`.
    pub build_elapsed: Duration,
}

impl BenchReport {
    /// Linear time over hash time. Always finite and positive.
    pub fn speedup(&self) -> f64 {
        speedup(self.linear_elapsed, self.hash_elapsed)
    }

    /// Time spent on lookups alone, without the index build.
    pub fn lookup_elapsed(&self) -> Duration {
        self.hash_elapsed - self.build_elapsed
    }

    /// Linear time over lookup-only time. Unlike [`speedup`](Self::speedup)
    /// this leaves out the O(n) build, so it grows with the dataset.
    pub fn lookup_speedup(&self) -> f64 {
        speedup(self.linear_elapsed, self.lookup_elapsed())
    }

    /// Number of sample ids with no matching record.
    pub fn misses(&self) -> usize {
        self.linear.iter().filter(|r| r.is_none()).count()
    }
}

pub fn speedup(linear: Duration, hash: Duration) -> f64 {
    let hash = std::cmp::max(hash, Duration::from_nanos(1));
    let linear = std::cmp::max(linear, Duration::from_nanos(1));
    linear.as_secs_f64() / hash.as_secs_f64()
}

/// Run the full benchmark described by `config`.
pub fn run<W: Write>(config: &BenchConfig, out: &mut W) -> Result<BenchReport> {
    config.validate()?;
    let mut rng = random::seeded(config.seed);

    write!(out, "Creating data... ")?;
    out.flush()?;
    let mut records = dataset::generate(config, &mut rng);
    writeln!(out, "done.")?;

    write!(out, "Simulating randomized data ... ")?;
    out.flush()?;
    dataset::sort_by_quality(&mut records);
    writeln!(out, "done.")?;

    let ids = sample::select_ids(&mut rng, config.record_count, config.sample_size);
    writeln!(out, "Creating {} interesting IDs to seek.", ids.len())?;

    compare(&records, &ids, out)
}

/// Look up every id in `ids` by linear scan, then through a freshly built
/// index, and report both.
///
/// Fails with [`Error::LookupMismatch`] if the two strategies disagree on
/// any id.
pub fn compare<W: Write>(records: &[Record], ids: &[u32], out: &mut W) -> Result<BenchReport> {
    write!(out, "Locating data in list... ")?;
    out.flush()?;

    let t0 = Instant::now();
    let linear: Vec<Option<Record>> = ids
        .iter()
        .map(|id| linear::find_by_id(records, *id).copied())
        .collect();
    let linear_elapsed = t0.elapsed();

    writeln!(out, "done.")?;
    writeln!(out, "DT: {} sec", linear_elapsed.as_secs_f64())?;
    write_points(out, &linear)?;
    info!(
        records = records.len(),
        ids = ids.len(),
        elapsed_ms = linear_elapsed.as_secs_f64() * 1e3,
        "linear scan finished"
    );

    write!(out, "Creating dictionary...")?;
    out.flush()?;

    let t0 = Instant::now();
    let index = RecordIndex::build(records);
    let build_elapsed = t0.elapsed();
    let hashed: Vec<Option<Record>> = ids.iter().map(|id| index.get(*id).copied()).collect();
    let hash_elapsed = t0.elapsed();

    writeln!(out, "done.")?;
    writeln!(out, "Locating data in dictionary... done.")?;
    writeln!(out, "DT: {} sec", hash_elapsed.as_secs_f64())?;
    write_points(out, &hashed)?;
    info!(
        indexed = index.len(),
        build_ms = build_elapsed.as_secs_f64() * 1e3,
        elapsed_ms = hash_elapsed.as_secs_f64() * 1e3,
        "hash lookup finished"
    );

    for ((id, a), b) in ids.iter().zip(linear.iter()).zip(hashed.iter()) {
        if a != b {
            return Err(Error::LookupMismatch { id: *id });
        }
    }

    let report = BenchReport {
        ids: ids.to_vec(),
        linear,
        hashed,
        linear_elapsed,
        hash_elapsed,
        build_elapsed,
    };

    writeln!(out)?;
    writeln!(
        out,
        "Speedup from dict: {}x",
        group_thousands(report.speedup().round() as u64)
    )?;
    info!(speedup = report.speedup(), misses = report.misses(), "benchmark complete");
    Ok(report)
}

fn write_points<W: Write>(out: &mut W, points: &[Option<Record>]) -> Result<()> {
    write!(out, "[")?;
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        match point {
            Some(record) => write!(out, "{}", record)?,
            None => write!(out, "None")?,
        }
    }
    writeln!(out, "]")?;
    Ok(())
}
