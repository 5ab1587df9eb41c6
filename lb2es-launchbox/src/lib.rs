//! Reading the LaunchBox side of a migration: platform catalogs and the
//! art/video files that sit next to them.

pub mod catalog;
pub mod error;
pub mod resolver;

pub use catalog::{catalog_path, parse_catalog, parse_catalog_file};
pub use error::{CatalogError, ResolveError};
pub use resolver::{ResolvedAsset, resolve_art, resolve_video};
