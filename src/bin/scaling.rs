//! Runs both aligners on random pairs of increasing length and reports the
//! average time and memory per size.
use clap::{value_parser, Parser};
use itertools::Itertools;
use pa_hirschberg::{
    generate::generate_pair,
    stats::{measure, AlignStats, MemorySampler},
    AlignError, AlignerType, CostModel, Result,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, about)]
struct Cli {
    /// Lengths of the first sequence.
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [
            16, 64, 128, 256, 384, 512, 768, 1024, 1280, 1536, 2048, 2560, 3072, 3584, 3968
        ]
    )]
    sizes: Vec<usize>,

    /// Fraction of edits between the two sequences of a pair.
    #[arg(short, long, default_value_t = 0.1)]
    error_rate: f32,

    /// Pairs per size.
    #[arg(short, long, default_value_t = 3)]
    reps: usize,

    #[arg(long, default_value_t = 31415)]
    seed: u64,

    /// Where to write the table, tab-separated.
    #[arg(short, long, value_parser = value_parser!(PathBuf))]
    output: Option<PathBuf>,

    /// Log more. Pass up to three times.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const ALIGNERS: [AlignerType; 2] = [AlignerType::Basic, AlignerType::Efficient];

fn run(args: &Cli) -> Result<String> {
    let cm = CostModel::default();
    let aligners = ALIGNERS.map(|t| t.build(cm));
    let rng = &mut ChaCha8Rng::seed_from_u64(args.seed);
    let mut sampler = MemorySampler::new();

    let mut tsv = String::new();
    for (i, &size) in args.sizes.iter().enumerate() {
        let mut totals: [AlignStats; 2] = Default::default();
        for _ in 0..args.reps {
            let (a, b) = generate_pair(size, args.error_rate, rng);
            let mut costs = vec![];
            for (aligner, total) in aligners.iter().zip(&mut totals) {
                let (alignment, measurement) = measure(&mut sampler, || aligner.align(&a, &b));
                let alignment = alignment?;
                alignment.verify(&cm, &a, &b)?;
                costs.push(alignment.cost);
                *total += AlignStats::new(&a, &b, alignment.cost, measurement);
            }
            if !costs.iter().all_equal() {
                return Err(AlignError::InconsistentAlignment(format!(
                    "aligners disagree on a pair of length {size}: {costs:?}"
                )));
            }
        }

        for (t, total) in ALIGNERS.iter().zip(&totals) {
            let (header, values) = total.values();
            let name = format!("{t:?}").to_lowercase();
            if i == 0 && t == &ALIGNERS[0] {
                println!("{:>10} {}", "aligner", header.join(" "));
                tsv += &format!("aligner\t{}\n", header.iter().map(|x| x.trim()).join("\t"));
            }
            println!("{name:>10} {}", values.join(" "));
            tsv += &format!("{name}\t{}\n", values.iter().map(|x| x.trim()).join("\t"));
        }
    }
    Ok(tsv)
}

fn main() {
    let args = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    let tsv = match run(&args) {
        Ok(tsv) => tsv,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    if let Some(output) = &args.output {
        if let Err(e) = std::fs::write(output, tsv) {
            log::error!("{}: {e}", output.display());
            std::process::exit(1);
        }
    }
}
