//! Needleman-Wunsch on the full DP table, with traceback.
//!
//! This uses `O(nm)` memory and exists as the ground truth for `Hirschberg`.
use crate::{AlignError, Aligner, Alignment, Cost, CostModel, Result, Seq, Sequence, GAP};
use std::cmp::min;
use std::ops::Index;

/// The `(m+1) x (n+1)` table of costs to align prefixes `a[..i]` and `b[..j]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    /// `n+1`.
    width: usize,
    costs: Vec<Cost>,
}

impl DpTable {
    /// `m+1`.
    pub fn rows(&self) -> usize {
        self.costs.len() / self.width
    }

    /// `n+1`.
    pub fn cols(&self) -> usize {
        self.width
    }

}

impl Index<(usize, usize)> for DpTable {
    type Output = Cost;
    fn index(&self, (i, j): (usize, usize)) -> &Cost {
        &self.costs[i * self.width + j]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NW {
    /// The cost model to use.
    pub cm: CostModel,
}

impl NW {
    pub fn new(cm: CostModel) -> Self {
        NW { cm }
    }

    /// Fills the full table. Returns it together with the optimal cost `dp[m][n]`.
    pub fn compute_table(&self, a: Seq, b: Seq) -> Result<(DpTable, Cost)> {
        self.cm.validate_pair(a, b)?;

        let gap = self.cm.gap_cost();
        let width = b.len() + 1;
        let mut costs = vec![0; (a.len() + 1) * width];

        for j in 0..width {
            costs[j] = self.cm.gaps(j);
        }
        for (i0, &ca) in a.iter().enumerate() {
            // Change from 0-based to 1-based indexing.
            let i = i0 + 1;
            let (done, rest) = costs.split_at_mut(i * width);
            let prev = &done[(i - 1) * width..];
            let next = &mut rest[..width];
            next[0] = self.cm.gaps(i);
            for (j0, &cb) in b.iter().enumerate() {
                let j = j0 + 1;
                next[j] = min(
                    prev[j - 1] + self.cm.sub(ca, cb),
                    min(prev[j] + gap, next[j - 1] + gap),
                );
            }
        }

        let table = DpTable { width, costs };
        let cost = table[(a.len(), b.len())];
        Ok((table, cost))
    }

    /// Walks back from `(m, n)` to `(0, 0)`, at each cell taking the first
    /// predecessor that explains its value, in the order
    /// diagonal, vertical (gap in `b`), horizontal (gap in `a`).
    pub fn traceback(&self, table: &DpTable, a: Seq, b: Seq) -> Result<(Sequence, Sequence)> {
        if table.rows() != a.len() + 1 || table.cols() != b.len() + 1 {
            return Err(AlignError::InconsistentAlignment(format!(
                "table of size {}x{} does not match sequences of length {} and {}",
                table.rows(),
                table.cols(),
                a.len(),
                b.len()
            )));
        }
        self.cm.validate_pair(a, b)?;

        let gap = self.cm.gap_cost();
        let mut alignment = Alignment::with_capacity(a.len(), b.len());
        let (mut i, mut j) = (a.len(), b.len());
        while i > 0 || j > 0 {
            let cur = table[(i, j)];
            let diagonal = || {
                let sub = self.cm.sub(a[i - 1], b[j - 1]);
                table[(i - 1, j - 1)].checked_add(sub)
            };
            if i > 0 && j > 0 && diagonal() == Some(cur) {
                alignment.push(a[i - 1], b[j - 1]);
                i -= 1;
                j -= 1;
            } else if i > 0 && table[(i - 1, j)].checked_add(gap) == Some(cur) {
                alignment.push(a[i - 1], GAP);
                i -= 1;
            } else if j > 0 && table[(i, j - 1)].checked_add(gap) == Some(cur) {
                alignment.push(GAP, b[j - 1]);
                j -= 1;
            } else {
                return Err(AlignError::InconsistentAlignment(format!(
                    "no predecessor explains cost {cur} at ({i}, {j})"
                )));
            }
        }
        alignment.a.reverse();
        alignment.b.reverse();
        Ok((alignment.a, alignment.b))
    }
}

impl Aligner for NW {
    fn cost_model(&self) -> &CostModel {
        &self.cm
    }

    fn align(&self, a: Seq, b: Seq) -> Result<Alignment> {
        let (ref table, cost) = self.compute_table(a, b)?;
        let (a, b) = self.traceback(table, a, b)?;
        Ok(Alignment { cost, a, b })
    }
}
