//! This module contains the aligners.

use crate::{Alignment, Cost, CostModel, Result, Seq};
use serde::{Deserialize, Serialize};

pub mod hirschberg;
pub mod nw;
pub mod sweep;


/// An aligner is a type that supports aligning sequences using some algorithm.
///
/// Both methods validate that `a` and `b` only contain `ACGT`, and fail with
/// `InvalidCostModel` when their costs could overflow `Cost`.
pub trait Aligner: std::fmt::Debug {
    /// Returns the cost model used by the aligner.
    fn cost_model(&self) -> &CostModel;

    /// Finds the cost of aligning `a` and `b`.
    /// The cost-only version uses linear memory.
    fn cost(&self, a: Seq, b: Seq) -> Result<Cost> {
        let costs = sweep::forward_costs(self.cost_model(), a, b)?;
        Ok(costs[b.len()])
    }

    /// Finds an optimal alignment of `a` and `b`.
    fn align(&self, a: Seq, b: Seq) -> Result<Alignment>;
}

#[derive(clap::ValueEnum, Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlignerType {
    /// Needleman-Wunsch with a full DP table.
    Basic,
    /// Hirschberg's linear-memory divide-and-conquer.
    #[default]
    Efficient,
}

impl AlignerType {
    pub fn build(&self, cm: CostModel) -> Box<dyn Aligner> {
        match self {
            AlignerType::Basic => Box::new(nw::NW::new(cm)),
            AlignerType::Efficient => Box::new(hirschberg::Hirschberg::new(cm)),
        }
    }
}
