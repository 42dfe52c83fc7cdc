//! Parsing of input files.
//!
//! An input file describes two sequences. Each is given by a base string on
//! one line, followed by zero or more lines holding a single index each:
//! ```text
//! ACTG
//! 3
//! 6
//! 1
//! TACG
//! 1
//! 2
//! 9
//! ```
//! The base string is expanded by inserting a full copy of the running string
//! right after position `idx`, for each index in order.
//! An index past the end of the running string is rejected as malformed input.
use crate::{AlignError, Result, Seq, Sequence};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A base string and the indices at which it is expanded.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceSpec {
    pub base: Sequence,
    pub insertions: Vec<usize>,
}

impl SequenceSpec {
    pub fn expand(&self) -> Result<Sequence> {
        expand(&self.base, &self.insertions)
    }
}

/// For each `idx`, replaces `s` by `s[..=idx] + s + s[idx+1..]`.
/// Each index must point into the string as it is at that point.
pub fn expand(base: Seq, insertions: &[usize]) -> Result<Sequence> {
    let mut s = base.to_vec();
    for &idx in insertions {
        if idx >= s.len() {
            return Err(AlignError::MalformedInput(format!(
                "insertion index {idx} is out of range for a string of length {}",
                s.len()
            )));
        }
        let mut next = Vec::with_capacity(2 * s.len());
        next.extend_from_slice(&s[..=idx]);
        next.extend_from_slice(&s);
        next.extend_from_slice(&s[idx + 1..]);
        s = next;
    }
    Ok(s)
}

fn is_index(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|c| c.is_ascii_digit())
}

/// Parses the two sequence descriptions, without expanding them.
pub fn parse_input(text: &str) -> Result<(SequenceSpec, SequenceSpec)> {
    let mut lines = text.lines().map(str::trim).enumerate().peekable();

    let mut next_sequence = |which: &str| -> Result<SequenceSpec> {
        let Some((_, base)) = lines.next() else {
            return Err(AlignError::MalformedInput(format!(
                "missing the {which} base string"
            )));
        };
        let mut insertions = vec![];
        while let Some(&(line_nr, line)) = lines.peek() {
            if !is_index(line) {
                break;
            }
            insertions.push(line.parse::<usize>().map_err(|e| {
                AlignError::MalformedInput(format!("line {}: {line:?}: {e}", line_nr + 1))
            })?);
            lines.next();
        }
        Ok(SequenceSpec {
            base: base.as_bytes().to_vec(),
            insertions,
        })
    };

    if text.trim().is_empty() {
        return Err(AlignError::MalformedInput("the input is empty".into()));
    }
    let a = next_sequence("first")?;
    let b = next_sequence("second")?;

    if let Some((line_nr, line)) = lines.find(|(_, line)| !line.is_empty()) {
        return Err(AlignError::MalformedInput(format!(
            "line {}: unexpected {line:?} after the second sequence",
            line_nr + 1
        )));
    }
    Ok((a, b))
}

/// Reads, parses, and expands the two sequences in the file at `path`.
pub fn read_input(path: &Path) -> Result<(Sequence, Sequence)> {
    let text = std::fs::read_to_string(path)?;
    let (a, b) = parse_input(&text)?;
    log::debug!(
        "base lengths {} and {}, {} and {} insertions",
        a.base.len(),
        b.base.len(),
        a.insertions.len(),
        b.insertions.len()
    );
    Ok((a.expand()?, b.expand()?))
}
