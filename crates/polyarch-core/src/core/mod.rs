//! # Core Module
//!
//! The stateless foundation of polyarch: the data model of a branched polymer
//! architecture and the boundary between that model and the outside world.
//!
//! ## Architecture
//!
//! - **Building blocks** ([`models`]) - Segments, arms and graft attributes
//! - **Graft graph** ([`topology`]) - Arms, chain types and the directed multigraph of grafts
//! - **Persistence** ([`io`]) - Plain records, JSON topology files and TOML architecture files
//!
//! Everything that walks the graph (enumeration, unrolling, bead expansion)
//! lives in [`crate::engine`] and assumes the acyclicity checked there.

pub mod io;
pub mod models;
pub mod topology;
