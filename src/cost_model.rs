//! This module contains the `CostModel`: a linear gap cost and a substitution
//! table over the `ACGT` alphabet.

use crate::{AlignError, Cost, Result, Seq};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The symbols that can be aligned, in the order of the substitution table.
pub const ALPHABET: [u8; 4] = *b"ACGT";

/// Marker for a gap in an aligned sequence.
pub const GAP: u8 = b'_';

const NO_RANK: u8 = u8::MAX;

/// Index of each byte in `ALPHABET`, or `NO_RANK`.
const RANK: [u8; 256] = {
    let mut rank = [NO_RANK; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        rank[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    rank
};

fn rank(c: u8) -> Result<usize> {
    match RANK[c as usize] {
        NO_RANK => Err(AlignError::UnknownSymbol(c as char)),
        r => Ok(r as usize),
    }
}

/// On-disk representation, validated on conversion into a `CostModel`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(deny_unknown_fields)]
struct CostModelConfig {
    gap: Cost,
    sub: [[Cost; 4]; 4],
}

/// Linear gap cost plus a substitution cost for every ordered pair of symbols.
///
/// The model is immutable after construction, so it can be copied into and
/// shared between any number of aligners.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "CostModelConfig", into = "CostModelConfig")]
pub struct CostModel {
    gap: Cost,
    /// Indexed by the rank of the symbols in `ALPHABET`.
    sub: [[Cost; 4]; 4],
}

impl TryFrom<CostModelConfig> for CostModel {
    type Error = AlignError;
    fn try_from(CostModelConfig { gap, sub }: CostModelConfig) -> Result<Self> {
        CostModel::new(gap, sub)
    }
}

impl From<CostModel> for CostModelConfig {
    fn from(CostModel { gap, sub }: CostModel) -> Self {
        CostModelConfig { gap, sub }
    }
}

/// The default DNA model: gaps cost 30, transitions are cheaper than transversions.
impl Default for CostModel {
    fn default() -> Self {
        CostModel {
            gap: 30,
            sub: [
                //A    C    G    T
                [0, 110, 48, 94],  // A
                [110, 0, 118, 48], // C
                [48, 118, 0, 110], // G
                [94, 48, 110, 0],  // T
            ],
        }
    }
}

impl CostModel {
    /// `sub` is indexed in `ACGT` order. The gap cost must be positive and
    /// substituting a symbol by itself must be free.
    pub fn new(gap: Cost, sub: [[Cost; 4]; 4]) -> Result<Self> {
        if gap == 0 {
            return Err(AlignError::InvalidCostModel(
                "the gap cost must be positive".into(),
            ));
        }
        for (i, row) in sub.iter().enumerate() {
            if row[i] != 0 {
                return Err(AlignError::InvalidCostModel(format!(
                    "substituting {} by itself costs {} instead of 0",
                    ALPHABET[i] as char, row[i]
                )));
            }
        }
        Ok(CostModel { gap, sub })
    }

    /// Edit distance: gaps and mismatches all cost 1.
    pub fn unit() -> Self {
        let mut sub = [[1; 4]; 4];
        for (i, row) in sub.iter_mut().enumerate() {
            row[i] = 0;
        }
        CostModel { gap: 1, sub }
    }

    /// Reads a JSON object `{"gap": .., "sub": [[..]; 4]}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn gap_cost(&self) -> Cost {
        self.gap
    }

    /// The cost of `n` consecutive gaps. Saturates at `Cost::MAX`.
    pub fn gaps(&self, n: usize) -> Cost {
        Cost::try_from(n).map_or(Cost::MAX, |n| n.saturating_mul(self.gap))
    }

    /// The largest cost of a single column.
    pub fn max_column_cost(&self) -> Cost {
        self.sub.iter().flatten().copied().fold(self.gap, std::cmp::max)
    }

    pub fn sub_cost(&self, a: u8, b: u8) -> Result<Cost> {
        Ok(self.sub[rank(a)?][rank(b)?])
    }

    /// Lookup without validation, for sequences that passed `validate`.
    #[inline]
    pub(crate) fn sub(&self, a: u8, b: u8) -> Cost {
        debug_assert!(RANK[a as usize] != NO_RANK && RANK[b as usize] != NO_RANK);
        self.sub[RANK[a as usize] as usize][RANK[b as usize] as usize]
    }

    /// Fails on the first symbol of `seq` that is not in `ALPHABET`.
    pub fn validate(&self, seq: Seq) -> Result<()> {
        match seq.iter().find(|&&c| RANK[c as usize] == NO_RANK) {
            Some(&c) => Err(AlignError::UnknownSymbol(c as char)),
            None => Ok(()),
        }
    }

    /// Validates both sequences, and checks that no cost in the DP for
    /// aligning them can overflow `Cost`.
    ///
    /// Every DP value is at most `(len_a + len_b) * max_column_cost()`.
    pub fn validate_pair(&self, a: Seq, b: Seq) -> Result<()> {
        self.validate(a)?;
        self.validate(b)?;
        let columns = a.len() as u64 + b.len() as u64;
        match columns.checked_mul(self.max_column_cost() as u64) {
            Some(bound) if bound <= Cost::MAX as u64 => Ok(()),
            _ => Err(AlignError::InvalidCostModel(format!(
                "costs up to {} overflow for sequences of length {} and {}",
                self.max_column_cost(),
                a.len(),
                b.len()
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_table_is_symmetric() {
        let cm = CostModel::default();
        for a in ALPHABET {
            assert_eq!(cm.sub_cost(a, a).unwrap(), 0);
            for b in ALPHABET {
                assert_eq!(cm.sub_cost(a, b).unwrap(), cm.sub_cost(b, a).unwrap());
            }
        }
        assert_eq!(cm.gap_cost(), 30);
        assert_eq!(cm.sub_cost(b'A', b'G').unwrap(), 48);
        assert_eq!(cm.sub_cost(b'A', b'T').unwrap(), 94);
        assert_eq!(cm.sub_cost(b'A', b'C').unwrap(), 110);
        assert_eq!(cm.sub_cost(b'C', b'G').unwrap(), 118);
        assert_eq!(cm.sub_cost(b'C', b'T').unwrap(), 48);
        assert_eq!(cm.sub_cost(b'G', b'T').unwrap(), 110);
    }

    #[test]
    fn unknown_symbol() {
        let cm = CostModel::default();
        assert!(matches!(
            cm.sub_cost(b'A', b'N'),
            Err(AlignError::UnknownSymbol('N'))
        ));
        assert!(matches!(
            cm.sub_cost(b'a', b'A'),
            Err(AlignError::UnknownSymbol('a'))
        ));
        assert!(matches!(
            cm.sub_cost(GAP, b'A'),
            Err(AlignError::UnknownSymbol('_'))
        ));
        assert!(cm.validate(b"ACGTTGCA").is_ok());
        assert!(cm.validate(b"").is_ok());
        assert!(matches!(
            cm.validate(b"ACGXT"),
            Err(AlignError::UnknownSymbol('X'))
        ));
    }

    #[test]
    fn rejects_invalid_models() {
        assert!(matches!(
            CostModel::new(0, [[0; 4]; 4]),
            Err(AlignError::InvalidCostModel(_))
        ));
        let mut sub = [[5; 4]; 4];
        assert!(CostModel::new(1, sub).is_err());
        for i in 0..4 {
            sub[i][i] = 0;
        }
        assert!(CostModel::new(1, sub).is_ok());
    }

    #[test]
    fn json() {
        let cm: CostModel =
            serde_json::from_str(r#"{"gap": 2, "sub": [[0,1,1,1],[1,0,1,1],[1,1,0,1],[1,1,1,0]]}"#)
                .unwrap();
        assert_eq!(cm.gap_cost(), 2);
        assert_eq!(cm.sub_cost(b'C', b'T').unwrap(), 1);

        let json = serde_json::to_string(&CostModel::default()).unwrap();
        assert_eq!(
            serde_json::from_str::<CostModel>(&json).unwrap(),
            CostModel::default()
        );

        // Invalid tables are rejected while parsing.
        assert!(serde_json::from_str::<CostModel>(
            r#"{"gap": 0, "sub": [[0,1,1,1],[1,0,1,1],[1,1,0,1],[1,1,1,0]]}"#
        )
        .is_err());
        assert!(serde_json::from_str::<CostModel>(
            r#"{"gap": 1, "sub": [[0,1,1,1],[1,0,1,1],[1,1,0,1],[1,1,1,0]], "open": 3}"#
        )
        .is_err());
    }

    #[test]
    fn rejects_overflowing_costs() {
        let cm = CostModel::new(3_000_000_000, [[0; 4]; 4]).unwrap();
        assert_eq!(cm.max_column_cost(), 3_000_000_000);
        assert!(cm.validate_pair(b"A", b"").is_ok());
        assert!(matches!(
            cm.validate_pair(b"A", b"C"),
            Err(AlignError::InvalidCostModel(_))
        ));
        assert_eq!(cm.gaps(2), Cost::MAX);
        assert!(CostModel::default().validate_pair(b"ACGT", b"ACGT").is_ok());
    }
}
