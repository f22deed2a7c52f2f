use crate::core::models::arm::ArmId;
use crate::core::models::graft::{AttachEnd, Graft};
use crate::core::models::segment::{Segment, Statistics};
use crate::core::topology::error::TopologyError;
use crate::core::topology::graph::TopologyGraph;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub statistics: Statistics,
    pub block_species: Vec<String>,
    pub n_per_block: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraftRecord {
    pub attach_positions: Vec<i64>,
    pub attach_end: i64,
    pub multiplicity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphRecord {
    pub nodes: Vec<usize>,
    pub edges: Vec<(usize, usize, GraftRecord)>,
}

/// Plain-data layout of a [`TopologyGraph`], as exchanged with serializers.
///
/// Saving does not check validity: cyclic topologies round-trip as well.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TopologyRecord {
    pub chain_types: Vec<(String, usize)>,
    pub arm_types: Vec<SegmentRecord>,
    pub graph: GraphRecord,
}

impl From<&Segment> for SegmentRecord {
    fn from(segment: &Segment) -> Self {
        Self {
            statistics: segment.statistics(),
            block_species: segment.blocks().iter().map(|b| b.species.clone()).collect(),
            n_per_block: segment.blocks().iter().map(|b| b.count).collect(),
        }
    }
}

impl TryFrom<&SegmentRecord> for Segment {
    type Error = TopologyError;
    fn try_from(record: &SegmentRecord) -> Result<Self, Self::Error> {
        if record.block_species.len() != record.n_per_block.len() {
            return Err(TopologyError::MalformedRecord(format!(
                "{} block species but {} block sizes",
                record.block_species.len(),
                record.n_per_block.len()
            )));
        }
        let mut segment = Segment::new(record.statistics);
        for (species, &count) in record.block_species.iter().zip(&record.n_per_block) {
            segment.add_block(species, count)?;
        }
        Ok(segment)
    }
}

impl From<&Graft> for GraftRecord {
    fn from(graft: &Graft) -> Self {
        Self {
            attach_positions: graft.attach_positions.iter().map(|&p| p as i64).collect(),
            attach_end: graft.attach_end.as_index(),
            multiplicity: graft.multiplicity,
        }
    }
}

impl TryFrom<&GraftRecord> for Graft {
    type Error = TopologyError;
    fn try_from(record: &GraftRecord) -> Result<Self, Self::Error> {
        graft_from_raw(&record.attach_positions, record.attach_end, record.multiplicity)
    }
}

/// Validates untyped graft attributes as found in files.
pub(crate) fn graft_from_raw(
    attach_positions: &[i64],
    attach_end: i64,
    multiplicity: usize,
) -> Result<Graft, TopologyError> {
    let attach_end = AttachEnd::try_from(attach_end)?;
    let attach_positions = attach_positions
        .iter()
        .map(|&p| usize::try_from(p).map_err(|_| TopologyError::NegativeAttachPosition(p)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Graft {
        attach_positions,
        attach_end,
        multiplicity,
    })
}

impl TopologyGraph {
    /// Externalizes the graph as plain records.
    pub fn to_record(&self) -> TopologyRecord {
        TopologyRecord {
            chain_types: self
                .chain_types()
                .iter()
                .map(|c| (c.name.clone(), c.root.index()))
                .collect(),
            arm_types: self.arms().iter().map(|a| a.segment().into()).collect(),
            graph: GraphRecord {
                nodes: self.arms().iter().map(|a| a.id().index()).collect(),
                edges: self
                    .edges()
                    .map(|(u, v, attrs)| (u.index(), v.index(), attrs.into()))
                    .collect(),
            },
        }
    }

    /// Rebuilds a graph from records produced by [`TopologyGraph::to_record`].
    ///
    /// # Errors
    ///
    /// Any construction error of the individual arms, chain types or grafts,
    /// and [`TopologyError::MalformedRecord`] when the node list does not
    /// cover exactly the recorded arms.
    pub fn from_record(record: &TopologyRecord) -> Result<Self, TopologyError> {
        let mut nodes = record.graph.nodes.clone();
        nodes.sort_unstable();
        if !nodes.iter().copied().eq(0..record.arm_types.len()) {
            return Err(TopologyError::MalformedRecord(format!(
                "node list {:?} does not match {} arm types",
                record.graph.nodes,
                record.arm_types.len()
            )));
        }

        let mut graph = TopologyGraph::new();
        for arm in &record.arm_types {
            graph.add_arm(Segment::try_from(arm)?)?;
        }
        for (name, root) in &record.chain_types {
            graph.mark_chain_type(ArmId(*root), Some(name))?;
        }
        for (u, v, attrs) in &record.graph.edges {
            graph.add_graft(ArmId(*u), ArmId(*v), Graft::try_from(attrs)?)?;
        }
        Ok(graph)
    }
}
