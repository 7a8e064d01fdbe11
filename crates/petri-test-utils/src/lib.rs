//! Shared test fixtures for Petri development.
//!
//! The classic-rule deployment every scenario test uses: the planar
//! 8-offset neighbourhood embedded in a 3D lattice, the `lower = 1,
//! upper = 3` threshold rule, and the seed patterns with known lifetimes.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::*;
