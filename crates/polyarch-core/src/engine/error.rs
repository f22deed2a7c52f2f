use thiserror::Error;

use crate::core::models::arm::ArmId;
use crate::core::topology::error::TopologyError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Topology contains a graft cycle {}", format_cycle(.cycle))]
    CyclicTopology { cycle: Vec<ArmId> },

    #[error("Graft {base} -> {graft} attaches from the last bead; only bead 0 is supported")]
    UnsupportedAttachEnd { base: ArmId, graft: ArmId },

    #[error("Attach position {position} is out of range for {arm} with {n_beads} beads")]
    AttachPositionOutOfRange {
        arm: ArmId,
        position: usize,
        n_beads: usize,
    },

    #[error("Attach bead {bead} is out of range for a bead graph with {n_beads} beads")]
    AttachBeadOutOfRange { bead: usize, n_beads: usize },

    #[error("Chain type '{0}' is not defined")]
    UnknownChain(String),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

fn format_cycle(cycle: &[ArmId]) -> String {
    cycle
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
