//! The models manifest
//!
//! `models.json` lives at the base directory root and lists every model the
//! registry can resolve.
//!
//! Example format:
//! ```json
//! {
//!   "models": [
//!     {"app": "fruits", "name": "Love", "schema": {"name": "string"}},
//!     {"app": "fruits", "name": "Joy", "plural": "joy", "schema": {}}
//!   ]
//! }
//! ```

use crate::store::Schema;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelsManifest {
    pub models: Vec<ModelSpec>,
}

/// One registered model: where its data lives and what shape it accepts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelSpec {
    /// App label, e.g. `fruits`.
    pub app: String,

    /// Model name, e.g. `Love`.
    pub name: String,

    /// Plural form naming the fixture and data files. Defaults to the
    /// lowercased name plus "s".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,

    /// Fields accepted on insert.
    #[serde(default)]
    pub schema: Schema,
}

impl ModelSpec {
    /// Display label, e.g. `fruits.Love`.
    pub fn label(&self) -> String {
        format!("{}.{}", self.app, self.name)
    }

    pub fn plural_name(&self) -> String {
        self.plural
            .clone()
            .unwrap_or_else(|| format!("{}s", self.name.to_lowercase()))
    }
}

impl ModelsManifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read models manifest: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse models manifest: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("models.json");
        fs::write(
            &path,
            r#"{"models": [{"app": "fruits", "name": "Love", "schema": {"name": "string"}}]}"#,
        )
        .unwrap();

        let manifest = ModelsManifest::load(&path).unwrap();
        assert_eq!(manifest.models.len(), 1);
        assert_eq!(manifest.models[0].label(), "fruits.Love");
    }

    #[test]
    fn test_plural_defaults_to_lowercased_name() {
        let spec = ModelSpec {
            app: "fruits".to_string(),
            name: "Love".to_string(),
            plural: None,
            schema: Schema::default(),
        };
        assert_eq!(spec.plural_name(), "loves");
    }

    #[test]
    fn test_explicit_plural_wins() {
        let spec = ModelSpec {
            app: "fruits".to_string(),
            name: "Joy".to_string(),
            plural: Some("joy".to_string()),
            schema: Schema::default(),
        };
        assert_eq!(spec.plural_name(), "joy");
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let temp = TempDir::new().unwrap();
        let error = ModelsManifest::load(temp.path().join("models.json")).unwrap_err();
        assert!(error.to_string().contains("Failed to read models manifest"));
    }
}
