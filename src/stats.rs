//! Time and memory measurements, and the summary table printed per run.
use crate::{Cost, Seq};
use derive_more::AddAssign;
use instant::Instant;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use sysinfo::{get_current_pid, System};

/// Wall time and resident memory change of a single call.
#[derive(Serialize, Deserialize, Default, Clone, Copy, AddAssign, Debug, PartialEq)]
pub struct Measurement {
    pub time_ms: f64,
    /// Difference in resident set size after and before, in KB. May be negative.
    pub memory_kb: i64,
}

/// Samples the resident set size of the current process in KB.
pub struct MemorySampler {
    sys: System,
}

impl MemorySampler {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }

    /// Returns 0 when the process can not be inspected on this platform.
    pub fn rss_kb(&mut self) -> i64 {
        let Ok(pid) = get_current_pid() else {
            return 0;
        };
        self.sys.refresh_process(pid);
        self.sys
            .process(pid)
            .map_or(0, |process| (process.memory() / 1024) as i64)
    }
}

impl Default for MemorySampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `f`, sampling memory and time right before and after it.
pub fn measure<T>(sampler: &mut MemorySampler, f: impl FnOnce() -> T) -> (T, Measurement) {
    let memory_before = sampler.rss_kb();
    let start = Instant::now();
    let t = f();
    let time_ms = start.elapsed().as_secs_f64() * 1000.;
    let memory_after = sampler.rss_kb();
    (
        t,
        Measurement {
            time_ms,
            memory_kb: memory_after - memory_before,
        },
    )
}

/// Statistics of one or more runs. Summing with `+=` and printing gives averages.
#[derive(Serialize, Deserialize, Default, Clone, AddAssign, Debug)]
pub struct AlignStats {
    pub len_a: usize,
    pub len_b: usize,
    /// The computed cost.
    pub cost: Cost,
    pub measurement: Measurement,
    pub sample_size: usize,
}

impl AlignStats {
    pub fn new(a: Seq, b: Seq, cost: Cost, measurement: Measurement) -> Self {
        Self {
            len_a: a.len(),
            len_b: b.len(),
            cost,
            measurement,
            sample_size: 1,
        }
    }

    fn format_raw<T: Display>(
        &self,
        align: char,
        width: usize,
        title: &str,
        val: T,
    ) -> (String, String) {
        if align == '<' {
            (format!("{:<width$}", title), format!("{:<width$}", val))
        } else {
            (format!("{:>width$}", title), format!("{:>width$}", val))
        }
    }

    fn format_flt<T: Display>(
        &self,
        align: char,
        mut width: usize,
        title: &str,
        val: T,
    ) -> (String, String) {
        let val = val.to_string();
        // Never cut off digits before the decimal point.
        let point = val.find('.').unwrap_or(val.len());
        width = width.max(point);
        let val = if val.len() > width { &val[..width] } else { val.as_str() };
        self.format_raw(align, width, title, val)
    }

    fn format_avg<T: num_traits::AsPrimitive<f64>>(
        &self,
        align: char,
        width: usize,
        title: &str,
        val: T,
    ) -> (String, String) {
        let n = self.sample_size.max(1) as f64;
        self.format_flt(align, width, title, val.as_() / n)
    }

    /// Header and value columns, averaged over the sample size.
    pub fn values(&self) -> (Vec<String>, Vec<String>) {
        [
            self.format_raw('>', 5, "nr", self.sample_size),
            self.format_avg('>', 10, "|a|", self.len_a),
            self.format_avg('>', 10, "|b|", self.len_b),
            self.format_avg('>', 10, "cost", self.cost),
            self.format_avg('>', 10, "t (ms)", self.measurement.time_ms),
            self.format_avg('>', 10, "mem (KB)", self.measurement.memory_kb),
        ]
        .into_iter()
        .unzip()
    }

    pub fn print(&self, header: bool) {
        let (h, v) = self.values();
        if header {
            println!("{}", h.join(" "));
        }
        println!("{}", v.join(" "));
    }

    /// Tab-separated header and value lines.
    pub fn to_tsv(&self, header: bool) -> String {
        let (h, v) = self.values();
        let values = v.iter().map(|x| x.trim()).join("\t");
        if header {
            format!("{}\n{values}\n", h.iter().map(|x| x.trim()).join("\t"))
        } else {
            format!("{values}\n")
        }
    }
}
