/// One of the optional work steps of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Gamelist,
    Roms,
    BoxArt,
    AllArt,
    Videos,
}

impl Step {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gamelist => "gamelist",
            Self::Roms => "roms",
            Self::BoxArt => "box-art",
            Self::AllArt => "all-art",
            Self::Videos => "videos",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-step counters.
///
/// For art steps `copied` counts files, so a single game can contribute
/// several. `skipped` counts lookups that found nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    pub copied: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Progress update sent while migrating.
#[derive(Debug, Clone)]
pub enum MigrateProgress {
    /// A platform's catalog is about to be read
    PlatformStarted { platform: String, target: String },

    /// Catalog parsed and region-filtered
    CatalogLoaded { total: usize, included: usize },

    /// A step is starting over `total` games
    StepStarted { step: Step, total: usize },

    /// A step is working on one game
    Item {
        step: Step,
        index: usize,
        total: usize,
        title: String,
    },

    /// A step is done
    StepFinished { step: Step, summary: StepSummary },

    /// All steps for the platform are done
    PlatformFinished { platform: String },
}
