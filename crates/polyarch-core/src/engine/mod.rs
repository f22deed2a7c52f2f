//! # Engine Module
//!
//! The algorithms that run over a [`TopologyGraph`](crate::core::topology::graph::TopologyGraph).
//!
//! ## Overview
//!
//! Construction in [`crate::core`] is permissive: a graph may be cyclic while it
//! is being assembled. Every entry point in this module checks acyclicity once
//! on entry ([`validate`]) and then walks the graft edges in insertion order,
//! positions in listed order, repetitions innermost. All three traversals share
//! that order, so the bead numbering of a graph and of its unrolled form agree.
//!
//! ## Architecture
//!
//! - **Enumeration** ([`enumerate`]) - Nested list of explicit graft occurrences below an arm
//! - **Unrolling** ([`unroll`]) - Rebuilds a graph in which no arm is shared
//! - **Bead expansion** ([`expand`]) - Per-bead node and bond lists for each chain type
//! - **Configuration** ([`config`]) - Options for the end-to-end build workflow
//! - **Error Handling** ([`error`]) - Validity and expansion-time errors

pub mod config;
pub mod enumerate;
pub mod error;
pub mod expand;
pub mod unroll;
pub mod validate;
