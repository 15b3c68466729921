use std::fmt;

/// A single synthetic data point. Never mutated after generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub id: u32,
    pub x: u16,
    pub y: u16,
    pub temp: i8,
    /// In `[0, 1)`. The dataset is ordered by this field.
    pub quality: f64,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Record(id={}, x={}, y={}, temp={}, quality={})",
            self.id, self.x, self.y, self.temp, self.quality
        )
    }
}
