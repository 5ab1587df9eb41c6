use std::path::PathBuf;

/// Errors that can occur while reading a LaunchBox platform catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("Invalid value for <{field}> in \"{title}\": {value:?}")]
    InvalidField {
        field: &'static str,
        title: String,
        value: String,
    },
}

/// Errors from looking up a media file for a game.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Nothing matched. Expected for most games in most categories.
    #[error("no matches found for {name} in {}", dir.display())]
    NotFound { name: String, dir: PathBuf },

    #[error("could not read {}: {source}", dir.display())]
    Io {
        dir: PathBuf,
        source: std::io::Error,
    },
}

impl ResolveError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
