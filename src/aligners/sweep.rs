//! Linear-memory sweeps over the alignment recurrence.
//!
//! Only two rows of the DP table are kept: `prev` holds row `i-1` and `next`
//! receives row `i`, after which the two buffers swap roles.
//!
//! - `forward_costs(a, b)[j]` is the cost of aligning `a` to `b[..j]`, i.e. the
//!   last row of the NW table.
//! - `backward_costs(a, b)[j]` is the cost of aligning `a` to `b[j..]`, i.e. the
//!   last row of the NW table of the reversed sequences, read backwards.

use crate::{Cost, CostModel, Result, Seq};
use std::cmp::min;

pub fn forward_costs(cm: &CostModel, a: Seq, b: Seq) -> Result<Vec<Cost>> {
    cm.validate_pair(a, b)?;
    Ok(forward_costs_unchecked(cm, a, b))
}

pub fn backward_costs(cm: &CostModel, a: Seq, b: Seq) -> Result<Vec<Cost>> {
    cm.validate_pair(a, b)?;
    Ok(backward_costs_unchecked(cm, a, b))
}

pub(crate) fn forward_costs_unchecked(cm: &CostModel, a: Seq, b: Seq) -> Vec<Cost> {
    let gap = cm.gap_cost();
    let mut prev: Vec<Cost> = (0..=b.len()).map(|j| cm.gaps(j)).collect();
    let mut next: Vec<Cost> = vec![0; b.len() + 1];

    for (i0, &ca) in a.iter().enumerate() {
        // Change from 0-based to 1-based indexing.
        let i = i0 + 1;
        next[0] = cm.gaps(i);
        for (j0, &cb) in b.iter().enumerate() {
            let j = j0 + 1;
            next[j] = min(
                prev[j - 1] + cm.sub(ca, cb),
                min(prev[j] + gap, next[j - 1] + gap),
            );
        }
        std::mem::swap(&mut prev, &mut next);
    }
    prev
}

pub(crate) fn backward_costs_unchecked(cm: &CostModel, a: Seq, b: Seq) -> Vec<Cost> {
    let gap = cm.gap_cost();
    let n = b.len();
    let mut prev: Vec<Cost> = (0..=n).map(|j| cm.gaps(n - j)).collect();
    let mut next: Vec<Cost> = vec![0; n + 1];

    for (suffix, &ca) in a.iter().rev().enumerate() {
        next[n] = cm.gaps(suffix + 1);
        for j in (0..n).rev() {
            next[j] = min(
                prev[j + 1] + cm.sub(ca, b[j]),
                min(prev[j] + gap, next[j + 1] + gap),
            );
        }
        std::mem::swap(&mut prev, &mut next);
    }
    prev
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{AlignError, NW};

    #[test]
    fn forward_is_last_table_row() {
        let cm = CostModel::default();
        let nw = NW::new(cm);
        for (a, b) in [
            ("", ""),
            ("A", ""),
            ("", "GT"),
            ("ACGT", "AGT"),
            ("TTGGGTCAATCAG", "TTTGAGTGGGTCATC"),
        ] {
            let (a, b) = (a.as_bytes(), b.as_bytes());
            let (table, _) = nw.compute_table(a, b).unwrap();
            let row = (0..=b.len()).map(|j| table[(a.len(), j)]).collect::<Vec<_>>();
            assert_eq!(forward_costs(&cm, a, b).unwrap(), row);
        }
    }

    #[test]
    fn backward_is_first_row_of_reversed_table() {
        let cm = CostModel::default();
        let nw = NW::new(cm);
        for (a, b) in [
            ("", ""),
            ("C", ""),
            ("", "GT"),
            ("ACGT", "AGT"),
            ("CTCTCTTCTCTCTCTA", "CCTCTCTCTCTCCTCTC"),
        ] {
            let (a, b) = (a.as_bytes(), b.as_bytes());
            let ra = a.iter().rev().copied().collect::<Vec<_>>();
            let rb = b.iter().rev().copied().collect::<Vec<_>>();
            let (table, _) = nw.compute_table(&ra, &rb).unwrap();
            let n = b.len();
            // Suffix b[j..] of length n-j is the reversed prefix of that length.
            let row = (0..=n).map(|j| table[(a.len(), n - j)]).collect::<Vec<_>>();
            assert_eq!(backward_costs(&cm, a, b).unwrap(), row);
        }
    }

    #[test]
    fn boundaries() {
        let cm = CostModel::default();
        assert_eq!(forward_costs(&cm, b"", b"ACG").unwrap(), vec![0, 30, 60, 90]);
        assert_eq!(backward_costs(&cm, b"", b"ACG").unwrap(), vec![90, 60, 30, 0]);
        assert_eq!(forward_costs(&cm, b"AC", b"").unwrap(), vec![60]);
        assert_eq!(backward_costs(&cm, b"AC", b"").unwrap(), vec![60]);
        assert_eq!(forward_costs(&cm, b"A", b"GA").unwrap(), vec![30, 48, 30]);
        assert_eq!(backward_costs(&cm, b"G", b"GA").unwrap(), vec![30, 48, 30]);
    }

    #[test]
    fn unknown_symbols() {
        let cm = CostModel::default();
        assert!(matches!(
            forward_costs(&cm, b"ACN", b"A"),
            Err(AlignError::UnknownSymbol('N'))
        ));
        assert!(matches!(
            backward_costs(&cm, b"A", b"a"),
            Err(AlignError::UnknownSymbol('a'))
        ));
    }
}
