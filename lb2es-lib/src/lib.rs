//! Migration pipeline: configuration, asset copying and the per-platform
//! read -> filter -> map -> write run.

pub mod config;
pub mod copy;
pub mod error;
pub mod migrate;
pub mod progress;

pub use config::{Config, load_config, resolve_config_path};
pub use error::{ConfigError, CopyError, MigrateError};
pub use migrate::{MigratedGame, PlatformSummary, Steps, load_platform, migrate_platform, run};
pub use progress::{MigrateProgress, Step, StepSummary};

pub use lb2es_core::{EsGame, LbGame, MediaCategory};
