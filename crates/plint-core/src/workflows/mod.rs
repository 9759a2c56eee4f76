//! # Workflows Module
//!
//! The public, user-facing layer: complete analysis procedures assembled from
//! the engine's building blocks. Currently a single workflow, [`detect`],
//! covering one full protein-ligand interaction analysis.

pub mod detect;
