//! Terminal rendering of [`MigrateProgress`] events.

use std::cell::RefCell;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use lb2es_lib::{MigrateProgress, StepSummary};

pub(crate) struct ProgressDisplay {
    quiet: bool,
    bar: RefCell<Option<ProgressBar>>,
}

impl ProgressDisplay {
    pub(crate) fn new(quiet: bool) -> Self {
        Self {
            quiet,
            bar: RefCell::new(None),
        }
    }

    pub(crate) fn handle(&self, progress: MigrateProgress) {
        match progress {
            MigrateProgress::PlatformStarted { platform, target } => {
                crate::logger::log_blank();
                log::info!(
                    "{} {} -> {}",
                    "Starting platform:".if_supports_color(Stderr, |t| t.bold()),
                    platform.if_supports_color(Stderr, |t| t.cyan()),
                    target.if_supports_color(Stderr, |t| t.cyan()),
                );
            }
            MigrateProgress::CatalogLoaded { total, included } => {
                log::info!("  {included} of {total} games match the configured regions");
            }
            MigrateProgress::StepStarted { step, total } => {
                let pb = if self.quiet {
                    ProgressBar::hidden()
                } else {
                    let pb = ProgressBar::new(total as u64);
                    pb.set_style(
                        ProgressStyle::with_template(
                            "  {prefix:.bold} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}",
                        )
                        .expect("static pattern")
                        .progress_chars("=> "),
                    );
                    pb
                };
                pb.set_prefix(step.label());
                *self.bar.borrow_mut() = Some(pb);
            }
            MigrateProgress::Item { index, title, .. } => {
                if let Some(ref pb) = *self.bar.borrow() {
                    pb.set_position(index as u64);
                    pb.set_message(title);
                }
            }
            MigrateProgress::StepFinished { step, summary } => {
                if let Some(pb) = self.bar.borrow_mut().take() {
                    pb.finish_and_clear();
                }
                log::info!("  {}: {}", step.label(), format_summary(&summary));
            }
            MigrateProgress::PlatformFinished { .. } => {}
        }
    }
}

fn format_summary(summary: &StepSummary) -> String {
    let mut out = format!(
        "{} done",
        summary.copied.if_supports_color(Stderr, |t| t.green())
    );
    if summary.skipped > 0 {
        out.push_str(&format!(", {} not found", summary.skipped));
    }
    if summary.failed > 0 {
        out.push_str(&format!(
            ", {} failed",
            summary.failed.if_supports_color(Stderr, |t| t.red())
        ));
    }
    out
}
