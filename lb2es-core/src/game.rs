/// One `<Game>` entry from a LaunchBox platform catalog.
///
/// Fields hold the raw text as read from the catalog; conversion happens
/// in [`crate::map_game`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LbGame {
    pub title: String,
    pub developer: String,
    pub publisher: String,
    /// Semicolon-delimited genre list (e.g. "Action;Platform")
    pub genre: String,
    /// RFC 3339 timestamp, possibly empty
    pub release_date: String,
    /// Maximum player count as written in the catalog, possibly empty
    pub max_players: String,
    /// Community star rating on a 0-5 scale
    pub star_rating: f32,
    /// Region tag (e.g. "North America"), empty when LaunchBox has none
    pub region: String,
    /// LaunchBox platform name (e.g. "Super Nintendo Entertainment System")
    pub platform: String,
    /// ROM path relative to the LaunchBox root, usually backslash-separated
    pub application_path: String,
    pub notes: String,
}

/// One `<game>` entry in an EmulationStation `gamelist.xml`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EsGame {
    /// ROM filename relative to the platform directory, always `./`-prefixed
    pub path: String,
    pub name: String,
    pub description: String,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    /// Comma-delimited genre list
    pub genre: Option<String>,
    /// Player count ("1" or "1-N")
    pub players: Option<String>,
    /// Rating on a 0-1 scale, two decimals
    pub rating: String,
    /// Release date as `YYYYMMDDTHHMMSS`
    pub release_date: String,
    /// Media filename for the front cover.
    ///
    /// Starts as the ROM stem with no extension and is replaced by the
    /// resolved filename once the cover has been located on disk.
    pub image_path: String,
    /// Media filename for the video, set once a video has been located.
    pub video_path: Option<String>,
}

impl EsGame {
    /// ROM filename without the `./` prefix.
    pub fn rom_filename(&self) -> &str {
        self.path.strip_prefix("./").unwrap_or(&self.path)
    }

    /// ROM filename without the `./` prefix and without its extension.
    ///
    /// Every media file copied for this game is named `<rom_stem><ext>`.
    pub fn rom_stem(&self) -> &str {
        crate::util::strip_extension(self.rom_filename())
    }

    /// Media filename for this game given the extension of a matched source file.
    pub fn media_filename(&self, source_extension: &str) -> String {
        format!("{}{}", self.rom_stem(), source_extension)
    }
}
