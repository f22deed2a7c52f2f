use crate::core::models::arm::ArmId;
use crate::core::models::graft::InvalidAttachEnd;
use crate::core::models::segment::SegmentError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("Invalid attach end {0}: a graft must attach from its first (0) or last (-1) bead")]
    InvalidAttachEnd(i64),

    #[error("Attach positions must be non-negative bead indices, found {0}")]
    NegativeAttachPosition(i64),

    #[error("Graft {base} -> {graft} must have a multiplicity of at least 1")]
    ZeroMultiplicity { base: ArmId, graft: ArmId },

    #[error("Arm {0} does not exist in this topology")]
    UnknownArm(ArmId),

    #[error("Segment library index {0} does not exist")]
    UnknownSegment(usize),

    #[error("An arm must contain at least one bead")]
    EmptySegment,

    #[error("Chain type '{0}' is already defined")]
    DuplicateChainName(String),

    #[error("Invalid segment: {0}")]
    Segment(#[from] SegmentError),

    #[error("Malformed topology record: {0}")]
    MalformedRecord(String),
}

impl From<InvalidAttachEnd> for TopologyError {
    fn from(e: InvalidAttachEnd) -> Self {
        Self::InvalidAttachEnd(e.0)
    }
}
