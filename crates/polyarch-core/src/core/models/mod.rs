//! # Core Models Module
//!
//! Data structures describing the linear building blocks of a polymer
//! architecture and the relationships between them.
//!
//! ## Key Components
//!
//! - [`segment`] - Run-length-encoded bead sequences and chain statistics
//! - [`arm`] - Arms (segments registered as graph nodes) and the ways to name them
//! - [`graft`] - Attributes of a graft edge between two arms
//!
//! ## Usage
//!
//! ```
//! use polyarch::core::models::segment::{BlockSpec, Segment};
//!
//! let seg = Segment::from_blocks([BlockSpec::from("A"), BlockSpec::from(("B", 3))])?;
//! assert_eq!(seg.sequence(), vec!["A", "B", "B", "B"]);
//! # Ok::<(), polyarch::core::models::segment::SegmentError>(())
//! ```

pub mod arm;
pub mod graft;
pub mod segment;
