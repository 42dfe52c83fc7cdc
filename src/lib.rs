//!
//! # Linear-space pairwise alignment
//!
//! Global alignment of two DNA sequences under a linear gap cost and a
//! substitution table over `ACGT`.
//! Two aligners are provided:
//! - [`NW`]: Needleman-Wunsch on the full `(m+1) x (n+1)` table, with traceback.
//! - [`Hirschberg`]: divide-and-conquer that combines a forward and a backward
//!   linear-memory sweep to find an optimal split column, and recurses.
//!
//! Both return an [`Alignment`]: the optimal cost and the two aligned rows,
//! padded with [`GAP`].
//!
//! The remaining modules are the boundary around the aligners: parsing and
//! expanding input files, writing the output file, and measuring time and
//! memory.
//!

pub mod aligners;
pub mod alignment;
pub mod cigar;
pub mod cli;
pub mod cost_model;
pub mod error;
pub mod generate;
pub mod input;
pub mod output;
pub mod stats;

pub use aligners::{hirschberg::Hirschberg, nw::NW, Aligner, AlignerType};
pub use alignment::{evaluate, Alignment};
pub use cost_model::{CostModel, ALPHABET, GAP};
pub use error::{AlignError, Result};

/// Type for storing costs.
pub type Cost = u32;
/// An owned sequence.
pub type Sequence = Vec<u8>;
/// A sequence slice.
pub type Seq<'a> = &'a [u8];

/// Lossy conversion of a (possibly gapped) sequence for printing.
pub fn seq_to_string(seq: Seq) -> String {
    String::from_utf8_lossy(seq).into_owned()
}

pub mod prelude {
    pub use crate::aligners::{sweep, Aligner, AlignerType};
    pub use crate::alignment::{evaluate, Alignment};
    pub use crate::cost_model::{CostModel, ALPHABET, GAP};
    pub use crate::error::{AlignError, Result};
    pub use crate::{seq_to_string, Cost, Hirschberg, Seq, Sequence, NW};
    pub use std::cmp::{max, min};
}
