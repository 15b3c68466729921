use tracing::debug;

use crate::config::BenchConfig;
use crate::random::RandomSource;
use crate::record::Record;

/// Generate `config.record_count` records with ids `0..record_count`, in id
/// order.
///
/// Each record draws `x`, `y`, `temp` and then `quality` from `rng`, so the
/// same seed reproduces the same fields in the same order.
pub fn generate<R: RandomSource>(config: &BenchConfig, rng: &mut R) -> Vec<Record> {
    let (coord_lo, coord_hi) = (
        i64::from(*config.coord_range.start()),
        i64::from(*config.coord_range.end()),
    );
    let (temp_lo, temp_hi) = (
        i64::from(*config.temp_range.start()),
        i64::from(*config.temp_range.end()),
    );

    let mut records = Vec::with_capacity(config.record_count);
    for id in 0..config.record_count as u32 {
        let x = rng.int_in(coord_lo, coord_hi) as u16;
        let y = rng.int_in(coord_lo, coord_hi) as u16;
        let temp = rng.int_in(temp_lo, temp_hi) as i8;
        let quality = rng.unit();
        records.push(Record {
            id,
            x,
            y,
            temp,
            quality,
        });
    }
    debug!(count = records.len(), "generated records");
    records
}

/// Reorder by ascending quality, so that position no longer predicts id.
/// Ties keep no particular order.
pub fn sort_by_quality(records: &mut [Record]) {
    records.sort_unstable_by(|a, b| a.quality.total_cmp(&b.quality));
}
