//! # Engine Module
//!
//! The detection logic of plint: feature classification, spatial indexing, the
//! five per-type detectors, and result aggregation.
//!
//! ## Architecture
//!
//! The engine is a pipeline of stateless steps sharing a read-only
//! [`context::DetectionContext`]:
//!
//! - **Feature Classification** ([`features`]) - derives donors, acceptors,
//!   hydrophobic carbons, charged groups, aromatic rings, and metal ions once
//!   per analysis, for both atom sets
//! - **Spatial Index** ([`grid`]) - uniform-cell radius queries over the
//!   protein set, pruning candidate pairs without confirming them
//! - **Detectors** ([`detectors`]) - one independent routine per interaction
//!   type, each producing candidate contacts with geometric evidence
//! - **Aggregation** ([`aggregate`]) - deduplication, stable ordering,
//!   summaries, and warning collection
//! - **Error Handling** ([`error`]) - the fatal error taxonomy; non-fatal
//!   conditions travel as warnings, never as errors
//!
//! Every step is synchronous and deterministic; the engine holds no state
//! between invocations.

pub mod aggregate;
pub mod context;
pub mod detectors;
pub mod error;
pub mod features;
pub mod grid;
