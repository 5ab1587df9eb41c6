//! Locating media files for a game on disk.
//!
//! LaunchBox names art `<scrubbed title>-01.<ext>` inside
//! `Images/<platform>/<category>/<region>`. Videos are matched by ROM stem
//! in a separately configured directory.

use std::io;
use std::path::{Path, PathBuf};

use lb2es_core::util::{file_extension, scrub_title};
use lb2es_core::{EsGame, LbGame, MediaCategory, UNIVERSAL_REGION};

use crate::error::ResolveError;

/// A media file found for a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    /// Full path of the matched LaunchBox file
    pub source: PathBuf,
    /// Filename to use on the ES side: ROM stem + the source's extension
    pub dest_filename: String,
}

/// Directory LaunchBox keeps `category` art in for this game.
///
/// Region-less games (tagged [`UNIVERSAL_REGION`]) keep their art directly
/// in the category folder.
pub fn art_dir(launchbox_root: &Path, game: &LbGame, category: MediaCategory) -> PathBuf {
    let dir = launchbox_root
        .join("Images")
        .join(&game.platform)
        .join(category.launchbox_folder());
    if game.region == UNIVERSAL_REGION {
        dir
    } else {
        dir.join(&game.region)
    }
}

/// Find the `category` art for `game`.
///
/// Matches `<scrubbed title>-01.*` in [`art_dir`]. When several files match
/// (e.g. both `.jpg` and `.png`) the lexicographically first name wins.
/// Does not touch `game` or `target`; callers decide what to record.
pub fn resolve_art(
    launchbox_root: &Path,
    game: &LbGame,
    target: &EsGame,
    category: MediaCategory,
) -> Result<ResolvedAsset, ResolveError> {
    let dir = art_dir(launchbox_root, game, category);
    let prefix = format!("{}-01.", scrub_title(&game.title));
    log::debug!("searching {} for {}*", dir.display(), prefix);

    let source = first_match(&dir, &prefix)?.ok_or_else(|| ResolveError::NotFound {
        name: game.title.clone(),
        dir: dir.clone(),
    })?;
    Ok(to_asset(source, target))
}

/// Find the video for `target` in `video_dir`.
///
/// Videos must be named after the ES ROM stem with any extension
/// (`Test Game.mp4` for `./Test Game.sfc`).
pub fn resolve_video(video_dir: &Path, target: &EsGame) -> Result<ResolvedAsset, ResolveError> {
    // An empty stem would turn the prefix into "." and match dotfiles.
    if target.rom_stem().is_empty() {
        return Err(ResolveError::NotFound {
            name: target.name.clone(),
            dir: video_dir.to_path_buf(),
        });
    }
    let prefix = format!("{}.", target.rom_stem());
    log::debug!("searching {} for {}*", video_dir.display(), prefix);

    let source = first_match(video_dir, &prefix)?.ok_or_else(|| ResolveError::NotFound {
        name: target.name.clone(),
        dir: video_dir.to_path_buf(),
    })?;
    Ok(to_asset(source, target))
}

fn to_asset(source: PathBuf, target: &EsGame) -> ResolvedAsset {
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    ResolvedAsset {
        dest_filename: target.media_filename(file_extension(&file_name)),
        source,
    }
}

/// Lexicographically first regular file in `dir` whose name starts with
/// `prefix`. A missing directory is treated as "no match".
fn first_match(dir: &Path, prefix: &str) -> Result<Option<PathBuf>, ResolveError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ResolveError::Io {
                dir: dir.to_path_buf(),
                source: e,
            });
        }
    };

    let mut matches: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| e.file_name().to_string_lossy().starts_with(prefix))
        .collect();
    matches.sort_by_key(|e| e.file_name());

    Ok(matches.first().map(|e| e.path()))
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
