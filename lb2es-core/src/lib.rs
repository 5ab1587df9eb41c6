//! Core data model for migrating a LaunchBox library to EmulationStation.
//!
//! Everything in this crate is pure: records, the media category table,
//! region filtering and the LaunchBox -> ES field mapping. Filesystem work
//! lives in `lb2es-launchbox`, `lb2es-frontend` and `lb2es-lib`.

pub mod game;
pub mod mapping;
pub mod media;
pub mod region;
pub mod util;

pub use game::{EsGame, LbGame};
pub use mapping::{Mapping, MappingWarning, map_game};
pub use media::{ART_CATEGORIES, MediaCategory};
pub use region::{RegionFilter, UNIVERSAL_REGION};
