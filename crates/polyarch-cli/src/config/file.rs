use crate::error::{CliError, Result};
use polyarch::core::io::architecture::{ArchitectureDef, ArmEntry, ChainEntry, GraftEntry};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileExpansionConfig {
    pub unroll: Option<bool>,
    pub chains: Option<Vec<String>>,
}

/// An architecture file: the arm, graft and chain tables plus an optional
/// `[expansion]` table.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub expansion: Option<FileExpansionConfig>,
    #[serde(default, rename = "arm")]
    pub arms: Vec<ArmEntry>,
    #[serde(default, rename = "graft")]
    pub grafts: Vec<GraftEntry>,
    #[serde(default, rename = "chain")]
    pub chains: Vec<ChainEntry>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading architecture file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Splits off the expansion settings, leaving the architecture definition.
    pub fn into_parts(self) -> (Option<FileExpansionConfig>, ArchitectureDef) {
        let architecture = ArchitectureDef {
            arms: self.arms,
            grafts: self.grafts,
            chains: self.chains,
        };
        (self.expansion, architecture)
    }
}
