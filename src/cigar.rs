//! Run-length encoding of the columns of an alignment.

use crate::{Seq, GAP};
use std::fmt;

/// Note that insertions are when `b` has more characters than `a`, and
/// deletions are when `b` has less characters than `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CigarOp {
    Match,
    Mismatch,
    Insertion,
    Deletion,
}

impl CigarOp {
    fn get_char(&self) -> char {
        match self {
            CigarOp::Match => 'M',
            CigarOp::Mismatch => 'X',
            CigarOp::Insertion => 'I',
            CigarOp::Deletion => 'D',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CigarElem {
    pub op: CigarOp,
    pub cnt: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cigar {
    pub ops: Vec<CigarElem>,
}

impl Cigar {
    pub fn push(&mut self, op: CigarOp) {
        if let Some(s) = self.ops.last_mut() {
            if s.op == op {
                s.cnt += 1;
                return;
            }
        }
        self.ops.push(CigarElem { op, cnt: 1 });
    }

    /// Encodes two aligned rows of equal length.
    /// Gap/gap columns do not occur in valid alignments and are skipped.
    pub fn from_rows(a: Seq, b: Seq) -> Self {
        let mut cigar = Cigar::default();
        for (&ca, &cb) in a.iter().zip(b) {
            match (ca == GAP, cb == GAP) {
                (true, true) => {}
                (true, false) => cigar.push(CigarOp::Insertion),
                (false, true) => cigar.push(CigarOp::Deletion),
                (false, false) if ca == cb => cigar.push(CigarOp::Match),
                (false, false) => cigar.push(CigarOp::Mismatch),
            }
        }
        cigar
    }
}

impl fmt::Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in &self.ops {
            write!(f, "{}{}", elem.cnt, elem.op.get_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode() {
        assert_eq!(Cigar::from_rows(b"", b"").to_string(), "");
        assert_eq!(Cigar::from_rows(b"ACGT", b"ACGT").to_string(), "4M");
        assert_eq!(Cigar::from_rows(b"AG_", b"_GA").to_string(), "1D1M1I");
        assert_eq!(Cigar::from_rows(b"AACT__", b"AGCTTT").to_string(), "1M1X2M2I");
    }
}
