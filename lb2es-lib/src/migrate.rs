//! The per-platform migration run.

use lb2es_core::{ART_CATEGORIES, EsGame, LbGame, MediaCategory, map_game};
use lb2es_frontend::{EsDeFrontend, Frontend, PlatformLayout};
use lb2es_launchbox::{catalog_path, parse_catalog_file};

use crate::config::Config;
use crate::copy::{AssetCopier, ensure_dir};
use crate::error::MigrateError;
use crate::progress::{MigrateProgress, Step, StepSummary};

/// Which steps to perform for each platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steps {
    pub gamelist: bool,
    pub roms: bool,
    pub box_art: bool,
    pub all_art: bool,
    pub videos: bool,
}

impl Steps {
    pub fn any(&self) -> bool {
        self.gamelist || self.roms || self.box_art || self.all_art || self.videos
    }
}

/// A catalog entry that passed the region filter, with its ES mapping.
#[derive(Debug, Clone)]
pub struct MigratedGame {
    pub source: LbGame,
    pub target: EsGame,
}

/// Outcome of migrating one platform.
#[derive(Debug, Clone, Default)]
pub struct PlatformSummary {
    pub platform: String,
    pub target: String,
    /// Games read from the catalog
    pub parsed: usize,
    /// Games left after region filtering
    pub included: usize,
    pub steps: Vec<(Step, StepSummary)>,
}

/// Read a platform catalog, filter it by region and map each game.
///
/// Returns the number of games parsed alongside the included ones, in
/// catalog order. An unreadable catalog is fatal.
pub fn load_platform(
    config: &Config,
    platform: &str,
) -> Result<(usize, Vec<MigratedGame>), MigrateError> {
    let path = catalog_path(&config.launch_box_root, platform);
    log::debug!("reading catalog {}", path.display());

    let games = parse_catalog_file(&path).map_err(|e| MigrateError::Catalog {
        platform: platform.to_string(),
        source: e,
    })?;
    let parsed = games.len();

    let filter = config.region_filter();
    let included = filter
        .apply(games)
        .into_iter()
        .map(|source| {
            let mapping = map_game(&source);
            for warning in &mapping.warnings {
                log::warn!("{warning}");
            }
            MigratedGame {
                source,
                target: mapping.game,
            }
        })
        .collect();

    Ok((parsed, included))
}

/// Migrate one platform: write its gamelist and copy the requested files.
pub fn migrate_platform(
    config: &Config,
    platform: &str,
    target: &str,
    steps: Steps,
    progress: &dyn Fn(MigrateProgress),
) -> Result<PlatformSummary, MigrateError> {
    progress(MigrateProgress::PlatformStarted {
        platform: platform.to_string(),
        target: target.to_string(),
    });

    let (parsed, mut games) = load_platform(config, platform)?;
    log::info!("{platform}: {parsed} games in catalog, {} after region filter", games.len());
    progress(MigrateProgress::CatalogLoaded {
        total: parsed,
        included: games.len(),
    });

    let layout = PlatformLayout::new(&config.output_directory, target);
    let copier = AssetCopier::new(&config.launch_box_root, &layout, ART_CATEGORIES);
    let mut summary = PlatformSummary {
        platform: platform.to_string(),
        target: target.to_string(),
        parsed,
        included: games.len(),
        steps: Vec::new(),
    };

    if steps.gamelist {
        let step = run_gamelist(&layout, &games, progress)?;
        summary.steps.push((Step::Gamelist, step));
    }

    if steps.roms {
        ensure_dir(&layout.roms())?;
        let step = run_items(Step::Roms, &mut games, progress, |game| {
            match copier.copy_rom(game) {
                Ok(_) => Outcome::Copied,
                Err(e) => {
                    log::error!("error copying rom for {}: {e}", game.target.name);
                    Outcome::Failed
                }
            }
        });
        summary.steps.push((Step::Roms, step));
    }

    if steps.box_art {
        ensure_dir(&layout.media(MediaCategory::Cover))?;
        let step = run_items(Step::BoxArt, &mut games, progress, |game| {
            match copier.copy_box_art(game) {
                Ok(_) => Outcome::Copied,
                Err(e) if e.is_not_found() => {
                    log::warn!("{e}");
                    Outcome::Skipped
                }
                Err(e) => {
                    log::error!("{e}");
                    Outcome::Failed
                }
            }
        });
        summary.steps.push((Step::BoxArt, step));
    }

    if steps.all_art {
        let mut totals = StepSummary::default();
        let total = games.len();
        progress(MigrateProgress::StepStarted {
            step: Step::AllArt,
            total,
        });
        for (index, game) in games.iter().enumerate() {
            progress(MigrateProgress::Item {
                step: Step::AllArt,
                index,
                total,
                title: game.target.name.clone(),
            });
            let s = copier.copy_all_art(game)?;
            totals.copied += s.copied;
            totals.skipped += s.skipped;
            totals.failed += s.failed;
        }
        progress(MigrateProgress::StepFinished {
            step: Step::AllArt,
            summary: totals,
        });
        summary.steps.push((Step::AllArt, totals));
    }

    if steps.videos {
        let video_dir = config.video_dir(platform);
        log::debug!("{platform}: videos from {}", video_dir.display());
        ensure_dir(&layout.media(MediaCategory::Video))?;
        let step = run_items(Step::Videos, &mut games, progress, |game| {
            match copier.copy_video(&video_dir, game) {
                Ok(_) => Outcome::Copied,
                Err(e) if e.is_not_found() => {
                    log::warn!("{e}");
                    Outcome::Skipped
                }
                Err(e) => {
                    log::error!("{e}");
                    Outcome::Failed
                }
            }
        });
        summary.steps.push((Step::Videos, step));
    }

    progress(MigrateProgress::PlatformFinished {
        platform: platform.to_string(),
    });
    Ok(summary)
}

/// Migrate every configured platform in name order.
///
/// Stops at the first fatal error; per-game failures are only counted.
pub fn run(
    config: &Config,
    steps: Steps,
    progress: &dyn Fn(MigrateProgress),
) -> Result<Vec<PlatformSummary>, MigrateError> {
    config
        .platforms
        .iter()
        .map(|(platform, target)| migrate_platform(config, platform, target, steps, progress))
        .collect()
}

fn run_gamelist(
    layout: &PlatformLayout,
    games: &[MigratedGame],
    progress: &dyn Fn(MigrateProgress),
) -> Result<StepSummary, MigrateError> {
    progress(MigrateProgress::StepStarted {
        step: Step::Gamelist,
        total: games.len(),
    });

    let es_games: Vec<EsGame> = games.iter().map(|g| g.target.clone()).collect();
    let frontend = EsDeFrontend::new();
    let path = frontend.write_metadata(&es_games, layout)?;
    log::info!(
        "wrote {} ({} games) for {}",
        path.display(),
        es_games.len(),
        frontend.name()
    );

    let summary = StepSummary {
        copied: es_games.len(),
        ..Default::default()
    };
    progress(MigrateProgress::StepFinished {
        step: Step::Gamelist,
        summary,
    });
    Ok(summary)
}

enum Outcome {
    Copied,
    Skipped,
    Failed,
}

/// Run `f` over every game, reporting progress and tallying outcomes.
fn run_items<F>(
    step: Step,
    games: &mut [MigratedGame],
    progress: &dyn Fn(MigrateProgress),
    mut f: F,
) -> StepSummary
where
    F: FnMut(&mut MigratedGame) -> Outcome,
{
    let total = games.len();
    progress(MigrateProgress::StepStarted { step, total });

    let mut summary = StepSummary::default();
    for (index, game) in games.iter_mut().enumerate() {
        progress(MigrateProgress::Item {
            step,
            index,
            total,
            title: game.target.name.clone(),
        });
        match f(game) {
            Outcome::Copied => summary.copied += 1,
            Outcome::Skipped => summary.skipped += 1,
            Outcome::Failed => summary.failed += 1,
        }
    }

    progress(MigrateProgress::StepFinished { step, summary });
    summary
}

#[cfg(test)]
#[path = "tests/migrate_tests.rs"]
mod tests;
