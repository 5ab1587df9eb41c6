use thiserror::Error;

/// Errors that end a CLI run.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] lb2es_lib::ConfigError),

    /// Fatal migration error
    #[error(transparent)]
    Migrate(#[from] lb2es_lib::MigrateError),
}
