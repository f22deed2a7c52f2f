use super::error::EngineError;
use crate::core::models::arm::ArmId;
use crate::core::models::graft::AttachEnd;
use crate::core::topology::error::TopologyError;
use crate::core::topology::graph::TopologyGraph;
use serde::Serialize;
use tracing::{debug, instrument};

/// Flat per-bead connectivity: bead species by global index plus bonds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BeadGraph {
    pub nodes: Vec<String>,
    pub bonds: Vec<(usize, usize)>,
}

impl BeadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n_beads(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_bonds(&self) -> usize {
        self.bonds.len()
    }
}

/// The bead graph of one chain type, indexed from 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainBeads {
    pub name: String,
    pub beads: BeadGraph,
}

impl TopologyGraph {
    /// Expands `arm` and everything grafted below it into `beads`.
    ///
    /// The arm's beads are appended after the existing ones and bonded
    /// consecutively. When `attach_bead` is given, it is bonded to the arm's
    /// first bead. Every graft occurrence below is expanded the same way,
    /// attached at `start + position` of its parent.
    ///
    /// On error `beads` is restored to its previous contents.
    ///
    /// # Errors
    ///
    /// Fails for a cyclic topology, an unknown arm, an `attach_bead` not yet in
    /// `beads`, a tail attachment, or an attach position at or beyond the bead
    /// count of its base arm.
    pub fn expand_graft_to_beads(
        &self,
        arm: ArmId,
        attach_bead: Option<usize>,
        beads: &mut BeadGraph,
    ) -> Result<(), EngineError> {
        self.ensure_valid()?;
        let (n_nodes, n_bonds) = (beads.nodes.len(), beads.bonds.len());
        if let Some(bead) = attach_bead.filter(|&bead| bead >= n_nodes) {
            return Err(EngineError::AttachBeadOutOfRange {
                bead,
                n_beads: n_nodes,
            });
        }
        let result = self.expand_unchecked(arm, attach_bead, beads);
        if result.is_err() {
            beads.nodes.truncate(n_nodes);
            beads.bonds.truncate(n_bonds);
        }
        result
    }

    /// Expands every chain type into its own bead graph.
    #[instrument(skip_all, name = "expand_to_beads")]
    pub fn expand_to_beads(&self) -> Result<Vec<ChainBeads>, EngineError> {
        self.ensure_valid()?;
        self.chain_types()
            .iter()
            .map(|chain| {
                let mut beads = BeadGraph::new();
                self.expand_unchecked(chain.root, None, &mut beads)?;
                Ok(ChainBeads {
                    name: chain.name.clone(),
                    beads,
                })
            })
            .collect()
    }

    /// Expands a single chain type by name.
    pub fn expand_chain(&self, name: &str) -> Result<BeadGraph, EngineError> {
        let root = self
            .chain_root(name)
            .ok_or_else(|| EngineError::UnknownChain(name.to_string()))?;
        self.ensure_valid()?;
        let mut beads = BeadGraph::new();
        self.expand_unchecked(root, None, &mut beads)?;
        Ok(beads)
    }

    /// Depth-first expansion driven by an explicit work stack.
    fn expand_unchecked(
        &self,
        root: ArmId,
        attach_bead: Option<usize>,
        beads: &mut BeadGraph,
    ) -> Result<(), EngineError> {
        let mut stack = vec![(root, attach_bead)];

        while let Some((arm_id, parent_bead)) = stack.pop() {
            let arm = self.arm(arm_id).ok_or(TopologyError::UnknownArm(arm_id))?;
            let n_beads = arm.n_beads();
            if n_beads == 0 {
                return Err(TopologyError::EmptySegment.into());
            }

            let start = beads.nodes.len();
            beads
                .nodes
                .extend(arm.sequence().into_iter().map(str::to_owned));
            beads
                .bonds
                .extend((start..start + n_beads - 1).map(|i| (i, i + 1)));
            if let Some(parent_bead) = parent_bead {
                beads.bonds.push((parent_bead, start));
            }

            let mut children = Vec::new();
            for (target, attrs) in self.grafts_from(arm_id) {
                if attrs.attach_end != AttachEnd::Head {
                    return Err(EngineError::UnsupportedAttachEnd {
                        base: arm_id,
                        graft: target,
                    });
                }
                children.reserve(attrs.n_occurrences());
                for position in attrs.occurrences() {
                    if position >= n_beads {
                        return Err(EngineError::AttachPositionOutOfRange {
                            arm: arm_id,
                            position,
                            n_beads,
                        });
                    }
                    children.push((target, Some(start + position)));
                }
            }
            stack.extend(children.into_iter().rev());
        }

        debug!(
            root = root.index(),
            beads = beads.n_beads(),
            bonds = beads.n_bonds(),
            "Expanded arm to beads."
        );
        Ok(())
    }
}
