//! Copying ROMs and media into the ES layout.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lb2es_core::util::native_rom_path;
use lb2es_core::MediaCategory;
use lb2es_frontend::PlatformLayout;
use lb2es_launchbox::{ResolvedAsset, resolve_art, resolve_video};

use crate::error::{CopyError, MigrateError};
use crate::migrate::MigratedGame;
use crate::progress::StepSummary;

/// Copy a file byte-for-byte, returning the number of bytes written.
///
/// The destination directory must already exist.
pub fn copy_file(src: &Path, dest: &Path) -> io::Result<u64> {
    let data = fs::read(src)?;
    fs::write(dest, &data)?;
    Ok(data.len() as u64)
}

/// Create `dir` and its parents. Failure aborts the run.
pub fn ensure_dir(dir: &Path) -> Result<(), MigrateError> {
    fs::create_dir_all(dir).map_err(|e| MigrateError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Copies one platform's files from LaunchBox into a [`PlatformLayout`].
pub struct AssetCopier<'a> {
    launchbox_root: &'a Path,
    layout: &'a PlatformLayout,
    categories: &'a [MediaCategory],
}

impl<'a> AssetCopier<'a> {
    /// `categories` is the set of art categories [`copy_all_art`](Self::copy_all_art)
    /// walks, normally [`lb2es_core::ART_CATEGORIES`].
    pub fn new(
        launchbox_root: &'a Path,
        layout: &'a PlatformLayout,
        categories: &'a [MediaCategory],
    ) -> Self {
        Self {
            launchbox_root,
            layout,
            categories,
        }
    }

    /// Copy the game's ROM into `roms/`.
    pub fn copy_rom(&self, game: &MigratedGame) -> Result<PathBuf, CopyError> {
        let src = self
            .launchbox_root
            .join(native_rom_path(&game.source.application_path));
        let dest = self.layout.roms().join(game.target.rom_filename());
        copy_one(&src, &dest)?;
        Ok(dest)
    }

    /// Copy the front cover into `media/covers/` and record its filename
    /// as the game's image path.
    pub fn copy_box_art(&self, game: &mut MigratedGame) -> Result<PathBuf, CopyError> {
        let asset = resolve_art(
            self.launchbox_root,
            &game.source,
            &game.target,
            MediaCategory::Cover,
        )?;
        game.target.image_path = asset.dest_filename.clone();
        self.place(&asset, MediaCategory::Cover)
    }

    /// Copy every art category that has a file for this game.
    ///
    /// Missing art and failed copies are counted and logged; only an
    /// uncreatable media directory is an error.
    pub fn copy_all_art(&self, game: &MigratedGame) -> Result<StepSummary, MigrateError> {
        let mut summary = StepSummary::default();

        for &category in self.categories {
            let asset = match resolve_art(self.launchbox_root, &game.source, &game.target, category)
            {
                Ok(asset) => asset,
                Err(e) if e.is_not_found() => {
                    log::debug!("{category}: {e}");
                    summary.skipped += 1;
                    continue;
                }
                Err(e) => {
                    log::error!("{category}: {e}");
                    summary.failed += 1;
                    continue;
                }
            };

            ensure_dir(&self.layout.media(category))?;
            match self.place(&asset, category) {
                Ok(dest) => {
                    log::info!("copying {} -> {}", asset.source.display(), dest.display());
                    summary.copied += 1;
                }
                Err(e) => {
                    log::error!("{e}");
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Copy the game's video from `video_dir` into `media/videos/` and
    /// record its filename as the game's video path.
    pub fn copy_video(
        &self,
        video_dir: &Path,
        game: &mut MigratedGame,
    ) -> Result<PathBuf, CopyError> {
        let asset = resolve_video(video_dir, &game.target)?;
        game.target.video_path = Some(asset.dest_filename.clone());
        self.place(&asset, MediaCategory::Video)
    }

    fn place(&self, asset: &ResolvedAsset, category: MediaCategory) -> Result<PathBuf, CopyError> {
        let dest = self.layout.media(category).join(&asset.dest_filename);
        copy_one(&asset.source, &dest)?;
        Ok(dest)
    }
}

fn copy_one(src: &Path, dest: &Path) -> Result<u64, CopyError> {
    let bytes = copy_file(src, dest).map_err(|e| CopyError::Io {
        src: src.to_path_buf(),
        dest: dest.to_path_buf(),
        source: e,
    })?;
    log::debug!("copied {} bytes to {}", bytes, dest.display());
    Ok(bytes)
}

#[cfg(test)]
#[path = "tests/copy_tests.rs"]
mod tests;
