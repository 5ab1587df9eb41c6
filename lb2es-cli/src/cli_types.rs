//! CLI type definitions.

use std::path::PathBuf;

use clap::Parser;

use lb2es_lib::Steps;

#[derive(Parser)]
#[command(name = "lb2es")]
#[command(
    about = "Migrate a LaunchBox library to EmulationStation",
    long_about = None
)]
pub(crate) struct Cli {
    /// Path to the YAML config file (default: ./config.yaml, then ~/.config/lb2es/config.yaml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write gamelist.xml for each platform
    #[arg(long)]
    pub gamelist: bool,

    /// Copy ROM files
    #[arg(long)]
    pub roms: bool,

    /// Copy front box art only
    #[arg(long, conflicts_with = "all_art")]
    pub box_art: bool,

    /// Copy every art category found (this can take a while)
    #[arg(long)]
    pub all_art: bool,

    /// Copy videos
    #[arg(long)]
    pub videos: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long)]
    pub logfile: Option<PathBuf>,
}

impl Cli {
    pub(crate) fn steps(&self) -> Steps {
        Steps {
            gamelist: self.gamelist,
            roms: self.roms,
            box_art: self.box_art,
            all_art: self.all_art,
            videos: self.videos,
        }
    }
}
