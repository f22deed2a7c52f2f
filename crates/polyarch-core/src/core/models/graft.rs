use std::fmt;
use thiserror::Error;

/// Which end of the grafted arm connects to the base arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttachEnd {
    #[default]
    Head, // First bead (0)
    Tail, // Last bead (-1)
}

impl AttachEnd {
    pub fn as_index(self) -> i64 {
        match self {
            Self::Head => 0,
            Self::Tail => -1,
        }
    }
}

/// Returned when an attach end is neither `0` nor `-1`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid attach end {0}: expected 0 or -1")]
pub struct InvalidAttachEnd(pub i64);

impl TryFrom<i64> for AttachEnd {
    type Error = InvalidAttachEnd;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Head),
            -1 => Ok(Self::Tail),
            other => Err(InvalidAttachEnd(other)),
        }
    }
}

impl fmt::Display for AttachEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_index())
    }
}

/// Attributes of one graft edge `base -> graft`.
///
/// A multiplicity of `m` is equivalent to listing every attach position `m`
/// times.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Graft {
    pub attach_positions: Vec<usize>,
    pub attach_end: AttachEnd,
    pub multiplicity: usize,
}

impl Graft {
    pub fn new(attach_positions: Vec<usize>) -> Self {
        Self {
            attach_positions,
            attach_end: AttachEnd::Head,
            multiplicity: 1,
        }
    }

    pub fn with_attach_end(mut self, attach_end: AttachEnd) -> Self {
        self.attach_end = attach_end;
        self
    }

    pub fn with_multiplicity(mut self, multiplicity: usize) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    /// Every attachment occurrence, positions in order with repetitions innermost.
    pub fn occurrences(&self) -> impl Iterator<Item = usize> + '_ {
        self.attach_positions
            .iter()
            .flat_map(move |&p| std::iter::repeat_n(p, self.multiplicity))
    }

    pub fn n_occurrences(&self) -> usize {
        self.attach_positions.len() * self.multiplicity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_end_accepts_only_both_ends() {
        assert_eq!(AttachEnd::try_from(0), Ok(AttachEnd::Head));
        assert_eq!(AttachEnd::try_from(-1), Ok(AttachEnd::Tail));
        assert_eq!(AttachEnd::try_from(2), Err(InvalidAttachEnd(2)));
        assert_eq!(AttachEnd::try_from(-2), Err(InvalidAttachEnd(-2)));
    }

    #[test]
    fn invalid_attach_end_is_a_reportable_error() {
        let err: Box<dyn std::error::Error> = Box::new(InvalidAttachEnd(3));
        assert_eq!(err.to_string(), "Invalid attach end 3: expected 0 or -1");
    }

    #[test]
    fn multiplicity_is_equivalent_to_repeated_positions() {
        let with_multiplicity = Graft::new(vec![1, 2, 4, 8]).with_multiplicity(2);
        let repeated = Graft::new(vec![1, 1, 2, 2, 4, 4, 8, 8]);
        assert_eq!(
            with_multiplicity.occurrences().collect::<Vec<_>>(),
            repeated.occurrences().collect::<Vec<_>>()
        );
        assert_eq!(with_multiplicity.n_occurrences(), 8);
    }

    #[test]
    fn defaults_attach_from_head_once() {
        let g = Graft::new(vec![0]);
        assert_eq!(g.attach_end, AttachEnd::Head);
        assert_eq!(g.multiplicity, 1);
        assert_eq!(g.attach_end.to_string(), "0");
    }
}
