pub mod error;
pub mod esde;
pub mod layout;

pub use error::FrontendError;
pub use esde::EsDeFrontend;
pub use layout::PlatformLayout;

use std::path::PathBuf;

use lb2es_core::EsGame;

/// Trait for gaming frontend metadata generators.
pub trait Frontend {
    fn name(&self) -> &'static str;

    /// Write the metadata file for one platform, returning the path written.
    fn write_metadata(
        &self,
        games: &[EsGame],
        layout: &PlatformLayout,
    ) -> Result<PathBuf, FrontendError>;
}
