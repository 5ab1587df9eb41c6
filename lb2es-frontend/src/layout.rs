use std::path::{Path, PathBuf};

use lb2es_core::MediaCategory;

/// Directory layout ES expects for one platform:
///
/// ```text
/// <output>/<platform>/
///     gamelist.xml
///     roms/
///     media/<category>/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformLayout {
    root: PathBuf,
}

impl PlatformLayout {
    pub fn new(output_dir: &Path, platform_dir: &str) -> Self {
        Self {
            root: output_dir.join(platform_dir),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn gamelist(&self) -> PathBuf {
        self.root.join("gamelist.xml")
    }

    pub fn roms(&self) -> PathBuf {
        self.root.join("roms")
    }

    pub fn media(&self, category: MediaCategory) -> PathBuf {
        self.root.join("media").join(category.esde_folder())
    }
}
