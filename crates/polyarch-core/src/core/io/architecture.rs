use super::record::graft_from_raw;
use crate::core::models::arm::ArmId;
use crate::core::models::segment::{BlockSpec, Segment, Statistics};
use crate::core::topology::error::TopologyError;
use crate::core::topology::graph::TopologyGraph;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ArmEntry {
    pub name: String,
    #[serde(default)]
    pub statistics: Option<Statistics>,
    pub blocks: Vec<BlockSpec>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct GraftEntry {
    pub base: String,
    pub graft: String,
    pub attach_positions: Vec<i64>,
    #[serde(default)]
    pub attach_end: i64,
    #[serde(default = "default_multiplicity")]
    pub multiplicity: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChainEntry {
    #[serde(default)]
    pub name: Option<String>,
    pub arm: String,
}

fn default_multiplicity() -> usize {
    1
}

/// A hand-written architecture definition.
///
/// Arms are labelled with file-local names; grafts and chains refer to arms
/// by those names.
///
/// ```toml
/// [[arm]]
/// name = "backbone"
/// blocks = [["A", 10]]
///
/// [[arm]]
/// name = "side"
/// blocks = [["B", 3], ["C", 2]]
///
/// [[graft]]
/// base = "backbone"
/// graft = "side"
/// attach-positions = [1, 2, 4, 8]
/// multiplicity = 2
///
/// [[chain]]
/// name = "Comb"
/// arm = "backbone"
/// ```
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ArchitectureDef {
    #[serde(default, rename = "arm")]
    pub arms: Vec<ArmEntry>,
    #[serde(default, rename = "graft")]
    pub grafts: Vec<GraftEntry>,
    #[serde(default, rename = "chain")]
    pub chains: Vec<ChainEntry>,
}

#[derive(Debug, Error)]
pub enum ArchitectureError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Arm '{0}' is defined more than once")]
    DuplicateArmName(String),
    #[error("Arm '{0}' is not defined")]
    UnknownArmName(String),
    #[error(transparent)]
    Topology(#[from] TopologyError),
}

impl ArchitectureDef {
    pub fn load(path: &Path) -> Result<Self, ArchitectureError> {
        let content = std::fs::read_to_string(path).map_err(|e| ArchitectureError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ArchitectureError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ArchitectureError> {
        Ok(toml::from_str(content)?)
    }

    /// Builds the topology: arms in file order, then chains, then grafts.
    pub fn build(&self) -> Result<TopologyGraph, ArchitectureError> {
        let mut graph = TopologyGraph::new();
        let mut ids: HashMap<&str, ArmId> = HashMap::new();

        for entry in &self.arms {
            if ids.contains_key(entry.name.as_str()) {
                return Err(ArchitectureError::DuplicateArmName(entry.name.clone()));
            }
            let segment = Segment::from_blocks(entry.blocks.iter().cloned())
                .map_err(TopologyError::from)?
                .with_statistics(entry.statistics.unwrap_or_default());
            let id = graph.add_arm(segment)?;
            ids.insert(entry.name.as_str(), id);
        }

        let lookup = |name: &str| -> Result<ArmId, ArchitectureError> {
            ids.get(name)
                .copied()
                .ok_or_else(|| ArchitectureError::UnknownArmName(name.to_string()))
        };

        for chain in &self.chains {
            graph.mark_chain_type(lookup(&chain.arm)?, chain.name.as_deref())?;
        }
        for entry in &self.grafts {
            let attrs = graft_from_raw(
                &entry.attach_positions,
                entry.attach_end,
                entry.multiplicity,
            )?;
            graph.add_graft(lookup(&entry.base)?, lookup(&entry.graft)?, attrs)?;
        }

        debug!(
            arms = graph.n_arms(),
            grafts = graph.n_grafts(),
            chains = graph.chain_types().len(),
            "Built topology from architecture definition."
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const COMB: &str = r#"
        [[arm]]
        name = "backbone"
        blocks = [["A", 10]]

        [[arm]]
        name = "side"
        statistics = "FJC"
        blocks = [["B", 3], "C", "C"]

        [[graft]]
        base = "backbone"
        graft = "side"
        attach-positions = [1, 2, 4, 8]
        multiplicity = 2

        [[chain]]
        name = "Comb"
        arm = "backbone"
    "#;

    #[test]
    fn parses_and_builds_comb() {
        let def = ArchitectureDef::from_toml_str(COMB).unwrap();
        assert_eq!(def.arms.len(), 2);
        assert_eq!(def.grafts[0].attach_end, 0);

        let graph = def.build().unwrap();
        assert_eq!(graph.n_arms(), 2);
        assert_eq!(graph.n_grafts(), 1);
        let root = graph.chain_root("Comb").unwrap();
        let (side, attrs) = graph.grafts_from(root)[0];
        assert_eq!(attrs.multiplicity, 2);
        let side = graph.arm(side).unwrap();
        assert_eq!(side.sequence(), vec!["B", "B", "B", "C", "C"]);
        assert_eq!(side.statistics(), Statistics::FreelyJointed);
    }

    #[test]
    fn unknown_arm_names_are_reported() {
        let def = ArchitectureDef::from_toml_str(
            r#"
            [[arm]]
            name = "a"
            blocks = ["A"]

            [[graft]]
            base = "a"
            graft = "b"
            attach-positions = [0]
            "#,
        )
        .unwrap();
        assert!(matches!(
            def.build(),
            Err(ArchitectureError::UnknownArmName(name)) if name == "b"
        ));
    }

    #[test]
    fn duplicate_arm_names_are_reported() {
        let def = ArchitectureDef::from_toml_str(
            r#"
            [[arm]]
            name = "a"
            blocks = ["A"]

            [[arm]]
            name = "a"
            blocks = ["B"]
            "#,
        )
        .unwrap();
        assert!(matches!(
            def.build(),
            Err(ArchitectureError::DuplicateArmName(_))
        ));
    }

    #[test]
    fn invalid_attach_end_is_a_construction_error() {
        let def = ArchitectureDef::from_toml_str(
            r#"
            [[arm]]
            name = "a"
            blocks = [["A", 3]]

            [[graft]]
            base = "a"
            graft = "a"
            attach-positions = [0]
            attach-end = 1
            "#,
        )
        .unwrap();
        assert!(matches!(
            def.build(),
            Err(ArchitectureError::Topology(TopologyError::InvalidAttachEnd(1)))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = ArchitectureDef::from_toml_str(
            "[[arm]]\nname = \"a\"\nblocks = [\"A\"]\ncolour = 1\n",
        );
        assert!(matches!(result, Err(ArchitectureError::Parse(_))));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(COMB.as_bytes()).unwrap();
        let def = ArchitectureDef::load(file.path()).unwrap();
        assert_eq!(def.chains[0].name.as_deref(), Some("Comb"));

        let missing = ArchitectureDef::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(missing, Err(ArchitectureError::Io { .. })));
    }
}
