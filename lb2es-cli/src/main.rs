//! lb2es CLI
//!
//! Migrates LaunchBox platform catalogs, ROMs and media into an
//! EmulationStation directory tree.

mod cli_types;
mod error;
mod logger;
mod progress;

use std::time::Instant;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use lb2es_lib::{PlatformSummary, load_config, resolve_config_path};

use crate::cli_types::Cli;
use crate::error::CliError;
use crate::progress::ProgressDisplay;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.verbose, cli.quiet, cli.logfile.as_deref()) {
        eprintln!("Could not open log file: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let steps = cli.steps();
    if !steps.any() {
        log::warn!(
            "Nothing to do. Pass at least one of --gamelist, --roms, --box-art, --all-art, --videos"
        );
        return Ok(());
    }

    let config_path = resolve_config_path(cli.config.clone());
    log::debug!("loading config from {}", config_path.display());
    let config = load_config(&config_path)?;

    let start = Instant::now();
    let display = ProgressDisplay::new(cli.quiet);
    let summaries = lb2es_lib::run(&config, steps, &|p| display.handle(p))?;

    logger::log_blank();
    report(&summaries);
    log::info!("entire process took {:.2?}", start.elapsed());
    Ok(())
}

fn report(summaries: &[PlatformSummary]) {
    let included: usize = summaries.iter().map(|s| s.included).sum();
    log::info!(
        "{} {} platform(s), {} game(s)",
        "Finished:".if_supports_color(Stderr, |t| t.bold()),
        summaries.len(),
        included,
    );

    for summary in summaries {
        let failed: usize = summary.steps.iter().map(|(_, s)| s.failed).sum();
        if failed > 0 {
            log::warn!(
                "{} -> {}: {} item(s) failed, see log above",
                summary.platform,
                summary.target,
                failed
            );
        }
    }
}
