use crate::{
    input::read_input,
    output::write_output,
    seq_to_string,
    stats::{measure, AlignStats, MemorySampler},
    AlignerType, CostModel, Result,
};
use clap::{value_parser, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Globally align two DNA sequences under a linear gap cost.
#[derive(Parser, Serialize, Deserialize, Debug)]
#[clap(author, about)]
pub struct Cli {
    /// File with the two base strings, each followed by its insertion indices.
    #[arg(value_parser = value_parser!(PathBuf))]
    pub input: PathBuf,

    /// Where to write the cost, the aligned rows, the time (ms), and the memory (KB).
    #[arg(value_parser = value_parser!(PathBuf))]
    pub output: PathBuf,

    /// The aligner to use.
    #[arg(long, value_enum, default_value = "efficient")]
    pub aligner: AlignerType,

    /// JSON file with a custom cost model: `{"gap": 30, "sub": [[..]; 4]}` in ACGT order.
    #[arg(long, value_parser = value_parser!(PathBuf), hide_short_help = true)]
    pub cost_model: Option<PathBuf>,

    /// Where to write optional statistics, as tab-separated header and value lines.
    #[arg(long, value_parser = value_parser!(PathBuf), hide_short_help = true)]
    pub stats: Option<PathBuf>,

    /// Log more. Pass up to three times.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the statistics table.
    #[arg(short, long)]
    pub silent: bool,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn cost_model(&self) -> Result<CostModel> {
        match &self.cost_model {
            Some(path) => {
                log::info!("Cost model: {}", path.display());
                CostModel::from_json_file(path)
            }
            None => Ok(CostModel::default()),
        }
    }

    /// Reads the input, aligns it, verifies the result, and writes the output file.
    pub fn run(&self) -> Result<AlignStats> {
        let cm = self.cost_model()?;
        log::info!("Input: {}", self.input.display());
        let (a, b) = read_input(&self.input)?;
        log::info!("Lengths: {} and {}", a.len(), b.len());

        log::info!("Aligner: {:?}", self.aligner);
        log::debug!("{cm:?}");
        let aligner = self.aligner.build(cm);

        let mut sampler = MemorySampler::new();
        let (alignment, measurement) = measure(&mut sampler, || aligner.align(&a, &b));
        let alignment = alignment?;
        alignment.verify(aligner.cost_model(), &a, &b)?;

        log::info!(
            "Cost {} in {:.3}ms, memory delta {}KB",
            alignment.cost,
            measurement.time_ms,
            measurement.memory_kb
        );
        log::debug!("CIGAR: {}", alignment.cigar());
        log::trace!("Row a: {}", seq_to_string(&alignment.a));
        log::trace!("Row b: {}", seq_to_string(&alignment.b));

        write_output(&self.output, &alignment, &measurement)?;

        let stats = AlignStats::new(&a, &b, alignment.cost, measurement);
        if let Some(path) = &self.stats {
            std::fs::write(path, stats.to_tsv(true))?;
        }
        if !self.silent {
            stats.print(true);
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::AlignError;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("pa-hirschberg").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let cli = parse(&["in.txt", "out.txt"]).unwrap();
        assert_eq!(cli.aligner, AlignerType::Efficient);
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
        assert!(cli.cost_model.is_none() && cli.stats.is_none() && !cli.silent);
    }

    #[test]
    fn options() {
        let cli = parse(&["in.txt", "out.txt", "--aligner", "basic", "-vv", "-s"]).unwrap();
        assert_eq!(cli.aligner, AlignerType::Basic);
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
        assert!(cli.silent);
    }

    #[test]
    fn wrong_argument_count() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["in.txt"]).is_err());
        assert!(parse(&["in.txt", "out.txt", "extra"]).is_err());
    }

    #[test]
    fn run_both_aligners() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        std::fs::write(&input, "ACTG\n3\n6\n1\nTACG\n1\n2\n9\n").unwrap();

        let mut costs = vec![];
        for aligner in ["basic", "efficient"] {
            let output = dir.path().join(format!("{aligner}.txt"));
            let stats = dir.path().join(format!("{aligner}.tsv"));
            let cli = parse(&[
                input.to_str().unwrap(),
                output.to_str().unwrap(),
                "--aligner",
                aligner,
                "--stats",
                stats.to_str().unwrap(),
                "-s",
            ])
            .unwrap();
            let result = cli.run().unwrap();
            assert_eq!((result.len_a, result.len_b), (32, 32));

            let text = std::fs::read_to_string(&output).unwrap();
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), 5);
            assert_eq!(lines[0], result.cost.to_string());
            assert_eq!(lines[1].len(), lines[2].len());
            assert_eq!(std::fs::read_to_string(&stats).unwrap().lines().count(), 2);
            costs.push(result.cost);
        }
        assert_eq!(costs[0], costs[1]);
    }

    #[test]
    fn run_rejects_unknown_symbols() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        std::fs::write(&input, "ACXT\nACGT\n").unwrap();
        let cli = parse(&[input.to_str().unwrap(), output.to_str().unwrap(), "-s"]).unwrap();
        assert!(matches!(cli.run(), Err(AlignError::UnknownSymbol('X'))));
        assert!(!output.exists());
    }
}
