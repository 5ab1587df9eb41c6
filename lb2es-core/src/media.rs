/// Art and video categories, paired with their folder name on each side.
///
/// LaunchBox stores art under `Images/<platform>/<launchbox_folder>`,
/// EmulationStation expects it under `media/<esde_folder>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaCategory {
    /// 3D rendered box art
    Box3D,
    /// Back of the box
    BackCover,
    /// Front box art (2D)
    Cover,
    /// Fan-created background artwork
    Fanart,
    /// Arcade marquee / logo
    Marquee,
    /// Cartridge or disc image
    PhysicalMedia,
    /// In-game screenshot
    Screenshot,
    /// Title screen capture
    TitleScreen,
    /// Gameplay video, resolved separately from the art categories
    Video,
}

/// The image categories copied by an all-art run, in copy order.
pub const ART_CATEGORIES: &[MediaCategory] = &[
    MediaCategory::Box3D,
    MediaCategory::BackCover,
    MediaCategory::Cover,
    MediaCategory::Fanart,
    MediaCategory::Marquee,
    MediaCategory::PhysicalMedia,
    MediaCategory::Screenshot,
    MediaCategory::TitleScreen,
];

impl MediaCategory {
    /// Folder name LaunchBox uses for this category.
    pub fn launchbox_folder(&self) -> &'static str {
        match self {
            Self::Box3D => "Box - 3D",
            Self::BackCover => "Box - Back",
            Self::Cover => "Box - Front",
            Self::Fanart => "Fanart - Background",
            Self::Marquee => "Arcade - Marquee",
            Self::PhysicalMedia => "Cart - Front",
            Self::Screenshot => "Screenshot - Gameplay",
            Self::TitleScreen => "Screenshot - Game Title",
            Self::Video => "Videos",
        }
    }

    /// Subdirectory name under `media/` (matches ES-DE layout).
    pub fn esde_folder(&self) -> &'static str {
        match self {
            Self::Box3D => "3dboxes",
            Self::BackCover => "backcovers",
            Self::Cover => "covers",
            Self::Fanart => "fanart",
            Self::Marquee => "marquees",
            Self::PhysicalMedia => "physicalmedia",
            Self::Screenshot => "screenshots",
            Self::TitleScreen => "titlescreens",
            Self::Video => "videos",
        }
    }
}

impl std::fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.esde_folder())
    }
}
