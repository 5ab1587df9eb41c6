use std::path::PathBuf;

use lb2es_frontend::FrontendError;
use lb2es_launchbox::CatalogError;
use thiserror::Error;

/// Errors loading or validating the YAML configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

/// Errors that abort a migration run.
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("{platform}: {source}")]
    Catalog {
        platform: String,
        source: CatalogError,
    },

    #[error(transparent)]
    Frontend(#[from] FrontendError),

    #[error("could not create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Per-item failure while copying one asset. Logged and skipped.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error(transparent)]
    Resolve(#[from] lb2es_launchbox::ResolveError),

    #[error("copying {} -> {}: {source}", src.display(), dest.display())]
    Io {
        src: PathBuf,
        dest: PathBuf,
        source: std::io::Error,
    },
}

impl CopyError {
    /// True when no source file existed, which is routine for art.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Resolve(e) if e.is_not_found())
    }
}
