//! # Topology Module
//!
//! The graft graph of a polymer architecture: which arms exist, which of them
//! are top-level chains, and how arms are grafted onto one another.
//!
//! ## Overview
//!
//! A [`graph::TopologyGraph`] owns every arm in an append-only arena and
//! records grafts as edges of a directed multigraph over arm indices. Each
//! edge carries the bead positions on the base arm where the graft attaches,
//! the end of the grafted arm that connects, and a multiplicity.
//!
//! A physical polymer cannot branch into itself, so a valid topology has no
//! directed cycle. Validity is checked on demand with
//! [`graph::TopologyGraph::is_valid`].
//!
//! ## Key Components
//!
//! - [`graph`] - The topology graph and its mutation API
//! - [`path`] - Nested "root plus branches" shorthand builder
//! - [`cycles`] - Directed cycle search
//! - [`error`] - Construction errors
//!
//! ## Usage
//!
//! ```
//! use polyarch::core::models::graft::Graft;
//! use polyarch::core::models::segment::Segment;
//! use polyarch::core::topology::graph::TopologyGraph;
//!
//! let mut topology = TopologyGraph::new();
//! let backbone = topology.add_chain_type(Segment::from_blocks([("A", 10)])?, Some("Comb"))?;
//! let side = topology.add_arm(Segment::from_blocks([("B", 3), ("C", 2)])?)?;
//! topology.add_graft(backbone, side, Graft::new(vec![1, 2, 4, 8]).with_multiplicity(2))?;
//! assert!(topology.is_valid());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cycles;
pub mod error;
pub mod graph;
pub mod path;
