//! Boundary input/output for topologies.
//!
//! This module converts topology graphs to and from plain records
//! ([`record`]), stores those records on disk through a trait-based file
//! interface ([`traits`], [`json`]), and reads hand-written TOML
//! architecture definitions ([`architecture`]). None of it enforces
//! validity; that is left to the engine.

pub mod architecture;
pub mod json;
pub mod record;
pub mod traits;
