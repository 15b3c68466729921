use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The linear scan and the hash index returned different answers for
    /// the same id.
    #[error("lookup strategies disagree on id {id}")]
    LookupMismatch { id: u32 },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
