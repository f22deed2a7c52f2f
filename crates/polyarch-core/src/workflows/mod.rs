//! # Workflows Module
//!
//! High-level entry points that tie [`crate::core`] and [`crate::engine`]
//! together.
//!
//! - **Build Workflow** ([`build`]) - Validate, optionally unroll, and expand
//!   the selected chain types to beads in one call.

pub mod build;
