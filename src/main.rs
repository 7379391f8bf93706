use std::fs;
use std::io;

use ascii_pulse::cli::{self, Cli};
use ascii_pulse::error::Result;
use ascii_pulse::pipeline::{PipelineStats, run};
use clap::Parser;

fn main() {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) if cli::is_missing_input(&err) => {
            println!("{}", cli::USAGE);
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    env_logger::Builder::new()
        .filter_level(args.log_filter())
        .init();

    match execute(&args) {
        Ok(stats) => log::info!(
            "wrote {} frames of {}x{}",
            stats.frames_rendered,
            stats.width,
            stats.height
        ),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn execute(args: &Cli) -> Result<PipelineStats> {
    let config = args.pipeline_config();
    let mut diagnostics = io::stderr();

    match &args.output {
        Some(path) => {
            // Buffered so a failed run leaves no partial file behind.
            let mut buffer = Vec::new();
            let stats = run(&config, &mut buffer, &mut diagnostics)?;
            fs::write(path, buffer)?;
            Ok(stats)
        }
        None => run(&config, &mut io::stdout().lock(), &mut diagnostics),
    }
}
