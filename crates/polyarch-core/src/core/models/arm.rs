use super::segment::Segment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// Stable index of an arm inside its owning
/// [`TopologyGraph`](crate::core::topology::graph::TopologyGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArmId(pub usize);

impl ArmId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ArmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "arm#{}", self.0)
    }
}

impl From<usize> for ArmId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<&ArmType> for ArmId {
    fn from(arm: &ArmType) -> Self {
        arm.id()
    }
}

/// A segment registered as a graph node.
///
/// Two arms are equal only if they are the same node, regardless of their
/// bead sequences. Only the owning graph creates arms.
#[derive(Debug, Clone)]
pub struct ArmType {
    id: ArmId,
    segment: Segment,
}

impl ArmType {
    pub(crate) fn new(id: ArmId, segment: Segment) -> Self {
        Self { id, segment }
    }

    pub fn id(&self) -> ArmId {
        self.id
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }
}

impl Deref for ArmType {
    type Target = Segment;
    fn deref(&self) -> &Self::Target {
        &self.segment
    }
}

impl PartialEq for ArmType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ArmType {}

impl Hash for ArmType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Source of the bead sequence for a new arm.
#[derive(Debug, Clone, PartialEq)]
pub enum ArmDef {
    /// A fresh sequence definition.
    Fresh(Segment),
    /// Index into the graph's segment library.
    Library(usize),
}

impl From<Segment> for ArmDef {
    fn from(segment: Segment) -> Self {
        Self::Fresh(segment)
    }
}

/// An arm named either by an existing node or by a fresh definition that
/// becomes a new node when resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum ArmRef {
    Existing(ArmId),
    Fresh(Segment),
}

impl From<ArmId> for ArmRef {
    fn from(id: ArmId) -> Self {
        Self::Existing(id)
    }
}

impl From<Segment> for ArmRef {
    fn from(segment: Segment) -> Self {
        Self::Fresh(segment)
    }
}
