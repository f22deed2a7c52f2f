use super::cycles;
use super::error::TopologyError;
use crate::core::models::arm::{ArmDef, ArmId, ArmRef, ArmType};
use crate::core::models::graft::Graft;
use crate::core::models::segment::Segment;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::fmt;
use tracing::{debug, warn};

/// A named top-level arm, enumerated and expanded as a complete molecule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainType {
    pub name: String,
    pub root: ArmId,
}

/// Non-fatal issues noticed while building a topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralWarning {
    /// A second graft edge was added between an already connected pair of arms.
    DuplicateGraft { base: ArmId, graft: ArmId },
}

impl fmt::Display for StructuralWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateGraft { base, graft } => write!(
                f,
                "graft {base} -> {graft} already exists; adding a parallel edge"
            ),
        }
    }
}

/// Arms, chain types and the directed multigraph of grafts between arms.
///
/// Arms live in an append-only arena and are referred to everywhere by
/// [`ArmId`]. Graph node `i` always corresponds to arm `i`. Acyclicity is not
/// enforced on mutation; call [`TopologyGraph::is_valid`] (the engine does so
/// on entry to every traversal).
#[derive(Debug, Clone, Default)]
pub struct TopologyGraph {
    /// Arena of arms, indexed by `ArmId`.
    arms: Vec<ArmType>,
    /// Distinct bead sequences seen so far, reusable through `ArmDef::Library`.
    segments: Vec<Segment>,
    /// Chain types in declaration order.
    chain_types: Vec<ChainType>,
    /// Graft multigraph; node weights mirror the arm ids.
    grafts: DiGraph<ArmId, Graft>,
    /// Counter for auto-generated chain names.
    chain_counter: usize,
    /// Warnings raised while building.
    warnings: Vec<StructuralWarning>,
}

impl TopologyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new arm and returns its index.
    ///
    /// A fresh definition is also recorded in the segment library if its
    /// sequence has not been seen before.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptySegment`] for a zero-bead definition and
    /// [`TopologyError::UnknownSegment`] for a library index out of range.
    pub fn add_arm(&mut self, def: impl Into<ArmDef>) -> Result<ArmId, TopologyError> {
        let segment = match def.into() {
            ArmDef::Fresh(segment) => {
                if segment.is_empty() {
                    return Err(TopologyError::EmptySegment);
                }
                let sequence = segment.sequence();
                if !self.segments.iter().any(|s| s.sequence() == sequence) {
                    self.segments.push(segment.clone());
                }
                segment
            }
            ArmDef::Library(index) => self
                .segments
                .get(index)
                .cloned()
                .ok_or(TopologyError::UnknownSegment(index))?,
        };

        let id = ArmId(self.arms.len());
        let node = self.grafts.add_node(id);
        debug_assert_eq!(node.index(), id.index());
        debug!(arm = id.index(), n_beads = segment.n_beads(), "Added arm.");
        self.arms.push(ArmType::new(id, segment));
        Ok(id)
    }

    /// Adds an arm and registers it as a chain type.
    ///
    /// Without a name, one of the form `Chain{n}` is generated.
    pub fn add_chain_type(
        &mut self,
        def: impl Into<ArmDef>,
        name: Option<&str>,
    ) -> Result<ArmId, TopologyError> {
        if let Some(name) = name {
            self.ensure_chain_name_free(name)?;
        }
        let root = self.add_arm(def)?;
        self.mark_chain_type(root, name)
    }

    /// Registers an existing arm as the root of a chain type.
    pub fn mark_chain_type(
        &mut self,
        root: ArmId,
        name: Option<&str>,
    ) -> Result<ArmId, TopologyError> {
        self.ensure_arm(root)?;
        let name = match name {
            Some(name) => {
                self.ensure_chain_name_free(name)?;
                name.to_string()
            }
            None => self.next_chain_name(),
        };
        debug!(chain = %name, root = root.index(), "Registered chain type.");
        self.chain_types.push(ChainType { name, root });
        Ok(root)
    }

    /// Adds a graft edge `base -> graft`.
    ///
    /// Adding a second edge between the same ordered pair is accepted; the
    /// returned warning (also kept in [`TopologyGraph::warnings`]) flags it.
    ///
    /// # Errors
    ///
    /// Fails if either arm does not exist or the multiplicity is zero.
    pub fn add_graft(
        &mut self,
        base: impl Into<ArmId>,
        graft: impl Into<ArmId>,
        attrs: Graft,
    ) -> Result<Option<StructuralWarning>, TopologyError> {
        let (base, graft) = (base.into(), graft.into());
        self.ensure_arm(base)?;
        self.ensure_arm(graft)?;
        if attrs.multiplicity == 0 {
            return Err(TopologyError::ZeroMultiplicity { base, graft });
        }

        let (u, v) = (Self::node(base), Self::node(graft));
        let warning = if self.grafts.contains_edge(u, v) {
            let warning = StructuralWarning::DuplicateGraft { base, graft };
            warn!("{}", warning);
            self.warnings.push(warning.clone());
            Some(warning)
        } else {
            None
        };

        debug!(
            base = base.index(),
            graft = graft.index(),
            positions = ?attrs.attach_positions,
            multiplicity = attrs.multiplicity,
            "Added graft."
        );
        self.grafts.add_edge(u, v, attrs);
        Ok(warning)
    }

    /// Resolves an arm reference, creating a new arm for a fresh definition.
    pub fn resolve(&mut self, arm: ArmRef) -> Result<ArmId, TopologyError> {
        match arm {
            ArmRef::Existing(id) => self.ensure_arm(id).map(|_| id),
            ArmRef::Fresh(segment) => self.add_arm(segment),
        }
    }

    /// `true` iff the graft graph contains no directed cycle.
    pub fn is_valid(&self) -> bool {
        self.find_cycle().is_none()
    }

    /// Returns the arms along one directed cycle (closed), if any exists.
    pub fn find_cycle(&self) -> Option<Vec<ArmId>> {
        cycles::find_cycle(&self.grafts)
            .map(|path| path.into_iter().map(|n| self.grafts[n]).collect())
    }

    pub fn arm(&self, id: ArmId) -> Option<&ArmType> {
        self.arms.get(id.index())
    }

    pub fn arms(&self) -> &[ArmType] {
        &self.arms
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn chain_types(&self) -> &[ChainType] {
        &self.chain_types
    }

    pub fn chain_root(&self, name: &str) -> Option<ArmId> {
        self.chain_types
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.root)
    }

    pub fn warnings(&self) -> &[StructuralWarning] {
        &self.warnings
    }

    pub fn n_arms(&self) -> usize {
        self.arms.len()
    }

    pub fn n_grafts(&self) -> usize {
        self.grafts.edge_count()
    }

    /// Outgoing grafts of `base` in insertion order.
    pub fn grafts_from(&self, base: ArmId) -> Vec<(ArmId, &Graft)> {
        if base.index() >= self.arms.len() {
            return Vec::new();
        }
        let mut edges: Vec<_> = self.grafts.edges(Self::node(base)).collect();
        edges.sort_by_key(|e| e.id());
        edges
            .into_iter()
            .map(|e| (self.grafts[e.target()], e.weight()))
            .collect()
    }

    /// All graft edges `(base, graft, attrs)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (ArmId, ArmId, &Graft)> + '_ {
        self.grafts
            .edge_references()
            .map(|e| (self.grafts[e.source()], self.grafts[e.target()], e.weight()))
    }

    pub(crate) fn ensure_arm(&self, id: ArmId) -> Result<(), TopologyError> {
        if id.index() < self.arms.len() {
            Ok(())
        } else {
            Err(TopologyError::UnknownArm(id))
        }
    }

    pub(crate) fn ensure_chain_name_free(&self, name: &str) -> Result<(), TopologyError> {
        if self.chain_root(name).is_some() {
            Err(TopologyError::DuplicateChainName(name.to_string()))
        } else {
            Ok(())
        }
    }

    fn next_chain_name(&mut self) -> String {
        loop {
            self.chain_counter += 1;
            let name = format!("Chain{}", self.chain_counter);
            if self.chain_root(&name).is_none() {
                return name;
            }
        }
    }

    fn node(id: ArmId) -> NodeIndex {
        NodeIndex::new(id.index())
    }
}
