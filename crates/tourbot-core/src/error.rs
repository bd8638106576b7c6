use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Index has {index_rows} entries but answer table has {answer_rows}")]
    Misaligned { index_rows: usize, answer_rows: usize },

    #[error("Identifier {id} out of range for answer table of length {len}")]
    OutOfRange { id: i64, len: usize },

    #[error("Search returned no match")]
    NoMatch,
}

pub type Result<T> = std::result::Result<T, Error>;
