use crate::core::topology::graph::TopologyGraph;
use crate::engine::config::{ChainSelection, ExpansionConfig};
use crate::engine::error::EngineError;
use crate::engine::expand::ChainBeads;
use std::borrow::Cow;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct BuildResult {
    /// The topology that was expanded: the input, or its unrolled form.
    pub topology: TopologyGraph,
    pub chains: Vec<ChainBeads>,
}

impl BuildResult {
    pub fn n_beads(&self) -> usize {
        self.chains.iter().map(|c| c.beads.n_beads()).sum()
    }
}

#[instrument(skip_all, name = "build_workflow")]
pub fn run(topology: &TopologyGraph, config: &ExpansionConfig) -> Result<BuildResult, EngineError> {
    // === Phase 1: Validation ===
    topology.ensure_valid()?;
    info!(
        arms = topology.n_arms(),
        grafts = topology.n_grafts(),
        chains = topology.chain_types().len(),
        "Topology is valid."
    );

    // === Phase 2: Optional unrolling ===
    let topology: Cow<'_, TopologyGraph> = if config.unroll {
        Cow::Owned(topology.fully_enumerate()?)
    } else {
        Cow::Borrowed(topology)
    };

    // === Phase 3: Expansion ===
    let chains = match &config.chains {
        ChainSelection::All => topology.expand_to_beads()?,
        ChainSelection::Named(names) => names
            .iter()
            .map(|name| {
                Ok(ChainBeads {
                    name: name.clone(),
                    beads: topology.expand_chain(name)?,
                })
            })
            .collect::<Result<Vec<_>, EngineError>>()?,
    };

    let result = BuildResult {
        topology: topology.into_owned(),
        chains,
    };
    info!(
        chains = result.chains.len(),
        beads = result.n_beads(),
        "Build workflow finished."
    );
    Ok(result)
}
