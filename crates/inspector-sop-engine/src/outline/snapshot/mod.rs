//! # Snapshot Testing Support
//!
//! The forest itself derives `Serialize`, so `insta` snapshots take it as-is.
//! This module adds runtime checks for structural invariants that every
//! parsed forest must satisfy.

pub mod invariants;

pub use invariants::check as invariants;
