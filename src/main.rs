use clap::Parser;
use pa_hirschberg::cli::Cli;

fn main() {
    let args = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level())
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = args.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
