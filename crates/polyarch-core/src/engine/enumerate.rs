use super::error::EngineError;
use crate::core::models::arm::ArmId;
use crate::core::models::graft::AttachEnd;
use crate::core::models::segment::{Block, Segment, Statistics};
use crate::core::topology::error::TopologyError;
use crate::core::topology::graph::TopologyGraph;
use crate::core::topology::path::Branch;
use serde::Serialize;
use tracing::{debug, instrument};

/// One explicit graft occurrence: a single copy of an arm attached at a
/// single bead position of its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraftOccurrence {
    /// The arm this occurrence was enumerated from.
    pub arm: ArmId,
    /// Compact bead sequence of the grafted arm.
    pub sequence: Vec<Block>,
    pub statistics: Statistics,
    /// Bead index on the parent arm.
    pub attach_position: usize,
    pub sub_grafts: Vec<GraftOccurrence>,
}

impl GraftOccurrence {
    pub fn segment(&self) -> Segment {
        Segment::from_parts(self.sequence.clone(), self.statistics)
    }

    /// Number of arm copies in this occurrence's subtree, itself included.
    pub fn n_arms(&self) -> usize {
        1 + self.sub_grafts.iter().map(GraftOccurrence::n_arms).sum::<usize>()
    }
}

impl From<GraftOccurrence> for Branch {
    fn from(occurrence: GraftOccurrence) -> Self {
        let segment = occurrence.segment();
        Branch {
            arm: segment.into(),
            attach_positions: vec![occurrence.attach_position],
            sub_branches: occurrence.sub_grafts.into_iter().map(Branch::from).collect(),
        }
    }
}

impl TopologyGraph {
    /// Enumerates every graft occurrence below `root`.
    ///
    /// Each edge contributes one entry per `(position, repetition)` pair, so
    /// an edge with positions `[1, 2]` and multiplicity 2 yields four entries
    /// in the order 1, 1, 2, 2.
    ///
    /// # Errors
    ///
    /// Fails if `root` does not exist, the topology is cyclic, or any edge
    /// reachable from `root` attaches from the last bead of its graft arm.
    #[instrument(skip(self), name = "get_grafts")]
    pub fn get_grafts(&self, root: ArmId) -> Result<Vec<GraftOccurrence>, EngineError> {
        self.ensure_arm(root)?;
        self.ensure_valid()?;
        let grafts = self.graft_occurrences(root)?;
        debug!(
            occurrences = grafts.iter().map(GraftOccurrence::n_arms).sum::<usize>(),
            "Enumerated grafts."
        );
        Ok(grafts)
    }

    /// Recursive enumeration; callers must have checked acyclicity.
    fn graft_occurrences(&self, base: ArmId) -> Result<Vec<GraftOccurrence>, EngineError> {
        let mut occurrences = Vec::new();
        for (target, attrs) in self.grafts_from(base) {
            if attrs.attach_end != AttachEnd::Head {
                return Err(EngineError::UnsupportedAttachEnd {
                    base,
                    graft: target,
                });
            }
            let arm = self.arm(target).ok_or(TopologyError::UnknownArm(target))?;
            let sequence = arm.sequence_compact();
            let sub_grafts = self.graft_occurrences(target)?;
            for position in attrs.occurrences() {
                occurrences.push(GraftOccurrence {
                    arm: target,
                    sequence: sequence.clone(),
                    statistics: arm.statistics(),
                    attach_position: position,
                    sub_grafts: sub_grafts.clone(),
                });
            }
        }
        Ok(occurrences)
    }
}
