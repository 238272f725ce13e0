//! Optional TOML configuration file.
//!
//! ```toml
//! output_dir = "build/ontology"
//!
//! [compile]
//! ontology_name = "trees"
//! base_iri = "https://example.org/trees"
//! consistency_policy = "fail-closed"
//! reasoner_timeout_secs = 10
//! collision_suffix = "hash"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use onto_model::CompileOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub output_dir: Option<PathBuf>,
    pub compile: CompileOptions,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("load config {}", path.display()))
    }

    /// Loads `path`, or the defaults when no file was given.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onto_model::{CollisionSuffix, ConsistencyPolicy};

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigFile::parse(
            r#"
            [compile]
            ontology_name = "trees"
            consistency_policy = "fail-closed"
            collision_suffix = "hash"
            "#,
        )
        .unwrap();
        assert_eq!(config.output_dir, None);
        assert_eq!(config.compile.ontology_name, "trees");
        assert_eq!(config.compile.consistency_policy, ConsistencyPolicy::FailClosed);
        assert_eq!(config.compile.collision_suffix, CollisionSuffix::Hash);
        assert_eq!(config.compile.root_class, CompileOptions::default().root_class);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConfigFile::parse("ouput_dir = \"x\"").is_err());
    }

    #[test]
    fn missing_file_means_defaults() {
        assert_eq!(ConfigFile::load_optional(None).unwrap(), ConfigFile::default());
    }
}
