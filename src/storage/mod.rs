//! File system plumbing
//!
//! - JSON Lines fixture files (the line sources for reloads)
//! - The models.json manifest describing registered models

mod fixtures;
mod manifest;

pub use fixtures::FixtureFile;
pub use manifest::{ModelSpec, ModelsManifest};
