//! Resolving model labels to collections and fixture files
//!
//! The registry is thin glue around the models manifest: it maps a
//! user-supplied `<app_label>.<model_name>` label to the model's file-backed
//! collection and the JSON Lines fixture that populates it.

use super::FileCollection;
use crate::storage::{FixtureFile, ModelSpec, ModelsManifest};
use eyre::{Result, bail};
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "models.json";

pub struct Registry {
    base_dir: PathBuf,
    manifest: ModelsManifest,
}

impl Registry {
    /// Load the registry from `<base_dir>/models.json`.
    pub fn open(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let manifest = ModelsManifest::load(base_dir.join(MANIFEST_FILE))?;
        log::debug!(
            "Registry opened with {} model(s) from {}",
            manifest.models.len(),
            base_dir.display()
        );
        Ok(Self { base_dir, manifest })
    }

    pub fn models(&self) -> &[ModelSpec] {
        &self.manifest.models
    }

    /// Resolve a `<app_label>.<model_name>` label, case-insensitively.
    pub fn resolve(&self, label: &str) -> Result<(FileCollection, FixtureFile)> {
        let lowered = label.to_lowercase();
        let Some((app, name)) = lowered.rsplit_once('.') else {
            bail!("Invalid model label '{label}'. Expected the form <app_label>.<model_name>");
        };

        let Some(spec) = self.manifest.models.iter().find(|spec| {
            spec.app.to_lowercase() == app && spec.name.to_lowercase() == name
        }) else {
            bail!("No model found with label '{label}'");
        };

        let collection =
            FileCollection::new(spec.label(), spec.schema.clone(), self.data_path(spec));
        let fixture = FixtureFile::new(self.fixture_path(spec));
        Ok((collection, fixture))
    }

    /// `<base>/<app>/fixtures/<plural>.jsonl`
    pub fn fixture_path(&self, spec: &ModelSpec) -> PathBuf {
        self.base_dir
            .join(&spec.app)
            .join("fixtures")
            .join(format!("{}.jsonl", spec.plural_name()))
    }

    /// `<base>/<app>/data/<plural>.ndjson`
    pub fn data_path(&self, spec: &ModelSpec) -> PathBuf {
        self.base_dir
            .join(&spec.app)
            .join("data")
            .join(format!("{}.ndjson", spec.plural_name()))
    }
}
