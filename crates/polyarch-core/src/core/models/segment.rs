use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Chain statistics used by field-theory solvers. Carried as metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Statistics {
    #[default]
    DiscreteGaussian, // Discrete Gaussian chain (DGC)
    FreelyJointed,    // Freely jointed chain (FJC)
    Continuous,       // Continuous Gaussian chain
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("Block '{species}' must contain at least one bead")]
    EmptyBlock { species: String },
    #[error("Unknown chain statistics '{0}' (expected DGC, FJC or Continuous)")]
    UnknownStatistics(String),
}

impl FromStr for Statistics {
    type Err = SegmentError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dgc" => Ok(Self::DiscreteGaussian),
            "fjc" => Ok(Self::FreelyJointed),
            "continuous" => Ok(Self::Continuous),
            _ => Err(SegmentError::UnknownStatistics(s.to_string())),
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::DiscreteGaussian => "DGC",
                Self::FreelyJointed => "FJC",
                Self::Continuous => "Continuous",
            }
        )
    }
}

impl TryFrom<String> for Statistics {
    type Error = SegmentError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Statistics> for String {
    fn from(s: Statistics) -> Self {
        s.to_string()
    }
}

/// A run of `count` consecutive beads of one species.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub species: String,
    pub count: usize,
}

impl Block {
    pub fn new(species: impl Into<String>, count: usize) -> Self {
        Self {
            species: species.into(),
            count,
        }
    }
}

/// Shorthand block notation: a bare species is a single bead, a pair is a run.
///
/// Deserializes from either `"A"` or `["A", 3]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockSpec {
    Bead(String),
    Run(String, usize),
}

impl BlockSpec {
    pub fn species(&self) -> &str {
        match self {
            Self::Bead(species) | Self::Run(species, _) => species,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Self::Bead(_) => 1,
            Self::Run(_, count) => *count,
        }
    }
}

impl From<&str> for BlockSpec {
    fn from(species: &str) -> Self {
        Self::Bead(species.to_string())
    }
}

impl From<(&str, usize)> for BlockSpec {
    fn from((species, count): (&str, usize)) -> Self {
        Self::Run(species.to_string(), count)
    }
}

impl From<Block> for BlockSpec {
    fn from(block: Block) -> Self {
        Self::Run(block.species, block.count)
    }
}

/// A linear run of beads stored as an ordered list of blocks.
///
/// The block list is the single canonical store; the verbose, compact and
/// compactest views are all derived from it on demand. Blocks are kept as
/// given (adjacent blocks of the same species are *not* merged) until
/// [`Segment::to_compact`] is called.
#[derive(Debug, Clone, Default)]
pub struct Segment {
    blocks: Vec<Block>,
    statistics: Statistics,
}

impl Segment {
    pub fn new(statistics: Statistics) -> Self {
        Self {
            blocks: Vec::new(),
            statistics,
        }
    }

    /// Builds a segment from shorthand blocks such as `["A", ("B", 3)]`.
    pub fn from_blocks<I, B>(blocks: I) -> Result<Self, SegmentError>
    where
        I: IntoIterator<Item = B>,
        B: Into<BlockSpec>,
    {
        let mut segment = Self::default();
        for spec in blocks {
            let spec = spec.into();
            segment.add_block(spec.species(), spec.count())?;
        }
        Ok(segment)
    }

    /// Builds a segment from a verbose, one-entry-per-bead species list.
    pub fn from_beads<I, S>(beads: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocks: beads.into_iter().map(|s| Block::new(s, 1)).collect(),
            statistics: Statistics::default(),
        }
    }

    /// Assembles a segment from blocks already known to be non-empty.
    pub(crate) fn from_parts(blocks: Vec<Block>, statistics: Statistics) -> Self {
        debug_assert!(blocks.iter().all(|b| b.count > 0));
        Self { blocks, statistics }
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn add_block(&mut self, species: &str, count: usize) -> Result<(), SegmentError> {
        if count == 0 {
            return Err(SegmentError::EmptyBlock {
                species: species.to_string(),
            });
        }
        self.blocks.push(Block::new(species, count));
        Ok(())
    }

    pub fn remove_last_block(&mut self) -> Option<Block> {
        self.blocks.pop()
    }

    /// Rewrites the stored blocks in merged form.
    pub fn to_compact(&mut self) {
        self.blocks = self.sequence_compact();
    }

    /// Returns a copy with merged blocks.
    pub fn compacted(&self) -> Self {
        Self {
            blocks: self.sequence_compact(),
            statistics: self.statistics,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    pub fn n_beads(&self) -> usize {
        self.blocks.iter().map(|b| b.count).sum()
    }

    pub fn n_blocks(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_beads() == 0
    }

    /// Verbose sequence, one species per bead.
    pub fn sequence(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .flat_map(|b| std::iter::repeat_n(b.species.as_str(), b.count))
            .collect()
    }

    /// Sequence with adjacent blocks of equal species merged.
    pub fn sequence_compact(&self) -> Vec<Block> {
        let mut merged: Vec<Block> = Vec::with_capacity(self.blocks.len());
        for block in &self.blocks {
            match merged.last_mut() {
                Some(last) if last.species == block.species => last.count += block.count,
                _ => merged.push(block.clone()),
            }
        }
        merged
    }

    /// Like [`Segment::sequence_compact`], but single beads are rendered bare.
    pub fn sequence_compactest(&self) -> Vec<BlockSpec> {
        self.sequence_compact()
            .into_iter()
            .map(|b| {
                if b.count == 1 {
                    BlockSpec::Bead(b.species)
                } else {
                    BlockSpec::Run(b.species, b.count)
                }
            })
            .collect()
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.statistics == other.statistics && self.sequence() == other.sequence()
    }
}

impl Eq for Segment {}
