//! The result of an aligner, and the evaluator that recomputes its cost.

use crate::{cigar::Cigar, seq_to_string, AlignError, Cost, CostModel, Result, Seq, Sequence, GAP};
use serde::{Deserialize, Serialize};

/// A global alignment: its cost and the two rows, padded with `GAP`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    pub cost: Cost,
    pub a: Sequence,
    pub b: Sequence,
}

/// Recomputes the cost of the aligned rows `a` and `b` column by column.
pub fn evaluate(cm: &CostModel, a: Seq, b: Seq) -> Result<Cost> {
    if a.len() != b.len() {
        return Err(AlignError::LengthMismatch {
            len_a: a.len(),
            len_b: b.len(),
        });
    }
    a.iter().zip(b).try_fold(0, |cost: Cost, (&ca, &cb)| -> Result<Cost> {
        let column = if ca == GAP || cb == GAP {
            cm.gap_cost()
        } else {
            cm.sub_cost(ca, cb)?
        };
        cost.checked_add(column).ok_or_else(|| {
            AlignError::InvalidCostModel(format!("the cost of {} columns overflows", a.len()))
        })
    })
}

fn ungapped(row: Seq) -> impl Iterator<Item = &u8> {
    row.iter().filter(|&&c| c != GAP)
}

impl Alignment {
    /// An empty alignment with room for aligning sequences of the given lengths.
    pub fn with_capacity(len_a: usize, len_b: usize) -> Self {
        Alignment {
            cost: 0,
            a: Vec::with_capacity(len_a + len_b),
            b: Vec::with_capacity(len_a + len_b),
        }
    }

    /// Appends the column `(ca, cb)`.
    pub(crate) fn push(&mut self, ca: u8, cb: u8) {
        self.a.push(ca);
        self.b.push(cb);
    }

    pub fn cigar(&self) -> Cigar {
        Cigar::from_rows(&self.a, &self.b)
    }

    /// Checks that this is an alignment of `a` and `b` of cost `self.cost`:
    /// - both rows have the same length,
    /// - removing gaps gives back `a` and `b`,
    /// - no column aligns a gap to a gap,
    /// - `evaluate` returns `self.cost`.
    pub fn verify(&self, cm: &CostModel, a: Seq, b: Seq) -> Result<()> {
        let cost = evaluate(cm, &self.a, &self.b)?;
        if !ungapped(&self.a).eq(a) {
            return Err(AlignError::InconsistentAlignment(format!(
                "first row {} does not spell {}",
                seq_to_string(&self.a),
                seq_to_string(a)
            )));
        }
        if !ungapped(&self.b).eq(b) {
            return Err(AlignError::InconsistentAlignment(format!(
                "second row {} does not spell {}",
                seq_to_string(&self.b),
                seq_to_string(b)
            )));
        }
        if let Some(col) = self
            .a
            .iter()
            .zip(&self.b)
            .position(|(&ca, &cb)| ca == GAP && cb == GAP)
        {
            return Err(AlignError::InconsistentAlignment(format!(
                "column {col} aligns a gap to a gap"
            )));
        }
        if cost != self.cost {
            return Err(AlignError::InconsistentAlignment(format!(
                "reported cost {} but the rows cost {cost}",
                self.cost
            )));
        }
        Ok(())
    }
}
