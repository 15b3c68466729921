pub mod bench;
pub mod config;
pub mod dataset;
pub mod error;
pub mod index;
pub mod linear;
pub mod random;
pub mod record;
pub mod sample;

pub(crate) mod utils;

pub use error::{Error, Result};
