use super::error::EngineError;
use crate::core::topology::graph::TopologyGraph;
use tracing::warn;

impl TopologyGraph {
    /// Fails with [`EngineError::CyclicTopology`] unless the graft graph is acyclic.
    ///
    /// Every traversal in the engine calls this once on entry; traversals
    /// themselves never look for cycles.
    pub fn ensure_valid(&self) -> Result<(), EngineError> {
        match self.find_cycle() {
            Some(cycle) => {
                warn!(?cycle, "Rejecting cyclic topology.");
                Err(EngineError::CyclicTopology { cycle })
            }
            None => Ok(()),
        }
    }
}
