//! The error type shared by the aligners and the input/output boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignError {
    /// A symbol outside `ACGT` (and not a gap where gaps are allowed).
    #[error("unknown symbol {0:?}, expected one of A, C, G, T")]
    UnknownSymbol(char),

    /// The two rows of an alignment differ in length.
    #[error("aligned sequences differ in length: {len_a} != {len_b}")]
    LengthMismatch { len_a: usize, len_b: usize },

    /// The input file does not have the expected structure.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("invalid cost model: {0}")]
    InvalidCostModel(String),

    /// An alignment or DP table does not belong to the given sequences.
    #[error("inconsistent alignment: {0}")]
    InconsistentAlignment(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse cost model: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AlignError>;
