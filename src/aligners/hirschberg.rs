//! Hirschberg's divide-and-conquer alignment in linear memory.
//!
//! `a` is split in the middle. A forward sweep over the left half and a
//! backward sweep over the right half give, for every column `j` of `b`, the
//! cost of the best alignment that passes through `(a.len()/2, j)`. The
//! cheapest column splits the problem into two independent quadrants.
//!
//! Sub-problems are borrowed slices of the input, and all columns are appended
//! to one output `Alignment`, so nothing besides the two sweep rows of the
//! current call is allocated.
use super::sweep::{backward_costs_unchecked, forward_costs_unchecked};
use crate::{Aligner, Alignment, Cost, CostModel, Result, Seq, GAP};
use itertools::Itertools;
use std::iter::{once, repeat};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hirschberg {
    /// The cost model to use.
    pub cm: CostModel,
}

/// Which side of the alignment holds the single symbol in a base case.
#[derive(Clone, Copy)]
enum Single {
    A,
    B,
}

impl Hirschberg {
    pub fn new(cm: CostModel) -> Self {
        Hirschberg { cm }
    }

    /// The column of `b` where an optimal alignment of `a` and `b` crosses
    /// row `a.len() / 2`. Ties go to the smallest column.
    pub fn split_column(&self, a: Seq, b: Seq) -> Result<usize> {
        self.cm.validate_pair(a, b)?;
        Ok(self.split_column_unchecked(a, b))
    }

    fn split_column_unchecked(&self, a: Seq, b: Seq) -> usize {
        let mid = a.len() / 2;
        let left = forward_costs_unchecked(&self.cm, &a[..mid], b);
        let right = backward_costs_unchecked(&self.cm, &a[mid..], b);
        left.iter()
            .zip(&right)
            .map(|(l, r)| l + r)
            .position_min()
            .unwrap_or(0)
    }

    /// Appends an optimal alignment of `a` and `b` to `out` and returns its cost.
    fn align_into(&self, a: Seq, b: Seq, out: &mut Alignment) -> Cost {
        match (a.len(), b.len()) {
            (0, _) => {
                out.a.extend(repeat(GAP).take(b.len()));
                out.b.extend_from_slice(b);
                self.cm.gaps(b.len())
            }
            (_, 0) => {
                out.a.extend_from_slice(a);
                out.b.extend(repeat(GAP).take(a.len()));
                self.cm.gaps(a.len())
            }
            (1, _) => self.align_single(a[0], b, Single::A, out),
            (_, 1) => self.align_single(b[0], a, Single::B, out),
            _ => {
                let mid = a.len() / 2;
                let j = self.split_column_unchecked(a, b);
                log::trace!("split {}x{} at ({mid}, {j})", a.len(), b.len());
                self.align_into(&a[..mid], &b[..j], out) + self.align_into(&a[mid..], &b[j..], out)
            }
        }
    }

    /// Aligns the single symbol `c` against the non-empty `other`.
    ///
    /// Candidates are, in order: `c` against `other[j]` for each `j`, with all
    /// other symbols against gaps, and finally `c` after all of `other`
    /// against a gap. The first cheapest candidate wins.
    fn align_single(&self, c: u8, other: Seq, side: Single, out: &mut Alignment) -> Cost {
        let n = other.len();
        let (pos, cost) = other
            .iter()
            .enumerate()
            .map(|(j, &o)| {
                let sub = match side {
                    Single::A => self.cm.sub(c, o),
                    Single::B => self.cm.sub(o, c),
                };
                (Some(j), self.cm.gaps(n - 1) + sub)
            })
            .chain(once((None, self.cm.gaps(n + 1))))
            .min_by_key(|&(_, cost)| cost)
            .unwrap_or((None, self.cm.gaps(n + 1)));

        // The row containing `c`, and the row containing `other`.
        let (single, full) = match side {
            Single::A => (&mut out.a, &mut out.b),
            Single::B => (&mut out.b, &mut out.a),
        };
        full.extend_from_slice(other);
        match pos {
            Some(j) => {
                single.extend(repeat(GAP).take(j));
                single.push(c);
                single.extend(repeat(GAP).take(n - j - 1));
            }
            None => {
                single.extend(repeat(GAP).take(n));
                single.push(c);
                full.push(GAP);
            }
        }
        cost
    }
}

impl Aligner for Hirschberg {
    fn cost_model(&self) -> &CostModel {
        &self.cm
    }

    fn align(&self, a: Seq, b: Seq) -> Result<Alignment> {
        self.cm.validate_pair(a, b)?;
        let mut alignment = Alignment::with_capacity(a.len(), b.len());
        let cost = self.align_into(a, b, &mut alignment);
        alignment.cost = cost;
        Ok(alignment)
    }
}
