//! Writing the result file.
//!
//! The output has exactly five lines:
//! 1. the cost of the alignment,
//! 2. the first aligned row,
//! 3. the second aligned row,
//! 4. the time spent aligning, in milliseconds,
//! 5. the change in resident memory, in KB.
use crate::{stats::Measurement, Alignment, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

pub fn write_result(
    w: &mut impl Write,
    alignment: &Alignment,
    measurement: &Measurement,
) -> Result<()> {
    writeln!(w, "{}", alignment.cost)?;
    w.write_all(&alignment.a)?;
    writeln!(w)?;
    w.write_all(&alignment.b)?;
    writeln!(w)?;
    writeln!(w, "{}", measurement.time_ms)?;
    writeln!(w, "{}", measurement.memory_kb)?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the result to it.
pub fn write_output(path: &Path, alignment: &Alignment, measurement: &Measurement) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_result(&mut w, alignment, measurement)?;
    w.flush()?;
    Ok(())
}
