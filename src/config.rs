use std::ops::RangeInclusive;

use crate::error::{Error, Result};

pub const RECORD_COUNT: usize = 500_000;
pub const SEED: u64 = 0;
pub const SAMPLE_SIZE: usize = 100;
pub const COORD_RANGE: RangeInclusive<u16> = 0..=1000;
pub const TEMP_RANGE: RangeInclusive<i8> = -10..=50;

/// The fixed parameters of a benchmark run.
///
/// The binary always runs with `BenchConfig::default()`. Tests and benches
/// shrink it with struct update syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub record_count: usize,
    pub seed: u64,
    /// Number of draws for the sample selector, before deduplication.
    pub sample_size: usize,
    pub coord_range: RangeInclusive<u16>,
    pub temp_range: RangeInclusive<i8>,
}

impl Default for BenchConfig {
    fn default() -> BenchConfig {
        BenchConfig {
            record_count: RECORD_COUNT,
            seed: SEED,
            sample_size: SAMPLE_SIZE,
            coord_range: COORD_RANGE,
            temp_range: TEMP_RANGE,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.record_count == 0 {
            return Err(Error::InvalidConfig("record_count must be positive".into()));
        }
        // Samples are drawn from 0..=record_count, so the count itself has to
        // fit in an id.
        if self.record_count > u32::max_value() as usize {
            return Err(Error::InvalidConfig(format!(
                "record_count {} does not fit in a u32 id",
                self.record_count
            )));
        }
        if self.sample_size == 0 {
            return Err(Error::InvalidConfig("sample_size must be positive".into()));
        }
        if self.coord_range.start() > self.coord_range.end() {
            return Err(Error::InvalidConfig(format!(
                "empty coordinate range {:?}",
                self.coord_range
            )));
        }
        if self.temp_range.start() > self.temp_range.end() {
            return Err(Error::InvalidConfig(format!(
                "empty temperature range {:?}",
                self.temp_range
            )));
        }
        Ok(())
    }
}
