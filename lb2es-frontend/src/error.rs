/// Errors that can occur during frontend metadata generation.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl FrontendError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
