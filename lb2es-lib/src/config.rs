//! YAML run configuration.
//!
//! ```yaml
//! launch_box_root: /mnt/LaunchBox
//! output_directory: /mnt/es
//! include_universal_games: true
//! regions: [North America, United States]
//! platforms:
//!   Super Nintendo Entertainment System: snes
//! alt_video_locations:
//!   Super Nintendo Entertainment System: /mnt/videos/snes
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use lb2es_core::RegionFilter;

use crate::error::ConfigError;

/// Filename looked for when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// LaunchBox installation root (holds `Data/`, `Images/`, `Videos/`)
    pub launch_box_root: PathBuf,

    /// Where ES platform directories are created
    pub output_directory: PathBuf,

    /// LaunchBox platform name -> ES platform directory name
    pub platforms: BTreeMap<String, String>,

    /// Region tags to migrate
    #[serde(default)]
    pub regions: Vec<String>,

    /// Also migrate games with no region
    #[serde(default)]
    pub include_universal_games: bool,

    /// Video directory used for platforms without an entry in
    /// `alt_video_locations`
    #[serde(default)]
    pub alt_video_location: Option<PathBuf>,

    /// Per-platform video directories
    #[serde(default)]
    pub alt_video_locations: BTreeMap<String, PathBuf>,
}

impl Config {
    /// Check the fields a run can't do without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.launch_box_root.as_os_str().is_empty() {
            return Err(ConfigError::invalid("launch_box_root is not set"));
        }
        if self.output_directory.as_os_str().is_empty() {
            return Err(ConfigError::invalid("output_directory is not set"));
        }
        if self.platforms.is_empty() {
            return Err(ConfigError::invalid("no platforms configured"));
        }
        if let Some((lb, _)) = self.platforms.iter().find(|(_, es)| es.is_empty()) {
            return Err(ConfigError::invalid(format!(
                "platform \"{lb}\" has no output directory name"
            )));
        }
        Ok(())
    }

    pub fn region_filter(&self) -> RegionFilter {
        RegionFilter::new(self.regions.clone(), self.include_universal_games)
    }

    /// Directory to look for `platform`'s videos in.
    ///
    /// Priority: `alt_video_locations[platform]`, then `alt_video_location`,
    /// then LaunchBox's own `Videos/<platform>`.
    pub fn video_dir(&self, platform: &str) -> PathBuf {
        if let Some(dir) = self.alt_video_locations.get(platform) {
            return dir.clone();
        }
        if let Some(ref dir) = self.alt_video_location {
            return dir.clone();
        }
        self.launch_box_root
            .join(lb2es_core::MediaCategory::Video.launchbox_folder())
            .join(platform)
    }
}

/// Parse and validate a config from YAML text.
pub fn parse_config(contents: &str, source: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_yml::from_str(contents).map_err(|e| ConfigError::Parse {
        path: source.to_string(),
        source: e,
    })?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_config(&contents, &path.display().to_string())
}

/// Per-user config location: `~/.config/lb2es/config.yaml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("lb2es").join(DEFAULT_CONFIG_FILE))
}

/// Resolve the config path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `config.yaml` in the current directory, if present
/// 3. `~/.config/lb2es/config.yaml`, if present
/// 4. `config.yaml` in the current directory (so the error names it)
pub fn resolve_config_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.is_file() {
        return local;
    }
    match user_config_path() {
        Some(p) if p.is_file() => p,
        _ => local,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
