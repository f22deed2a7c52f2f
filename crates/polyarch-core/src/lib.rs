//! # polyarch
//!
//! A compact, shareable graph representation of branched polymer architecture
//! (linear, star, comb and arbitrarily nested graft structures), with the
//! algorithms needed to turn it into simulation input.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Segment`, `ArmType`,
//!   `Graft`), the `TopologyGraph` that ties arms together with graft edges,
//!   and I/O for topology records and hand-written architecture files.
//!
//! - **[`engine`]: The Logic Core.** Validity checking and the three
//!   traversals over a valid topology: graft enumeration, structural
//!   unrolling, and expansion to an explicit per-bead bond graph.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures that validate,
//!   optionally unroll, and expand a topology in one call.
//!
//! ## Example
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
//!
//! assert_eq!(topology.get_grafts(backbone)?.len(), 8);
//!
//! let beads = topology.expand_chain("Comb")?;
//! assert_eq!(beads.n_beads(), 50);
//! assert_eq!(beads.n_bonds(), 49);
//!
//! let unrolled = topology.fully_enumerate()?;
//! assert_eq!(unrolled.n_arms(), 9);
//! assert_eq!(unrolled.expand_chain("Comb")?, beads);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
