//! # Plint Core Library
//!
//! A small, deterministic engine for detecting non-covalent interactions between a
//! macromolecule (protein) and a small molecule (ligand) from their 3-D atomic
//! coordinates: hydrogen bonds, hydrophobic contacts, π-π stacking, salt bridges,
//! and metal coordination.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Atom`, `Ring`,
//!   `Contact`, `InteractionParams`), pure geometry utilities, and static
//!   physicochemical rule tables.
//!
//! - **[`engine`]: The Logic Core.** Feature classification (donors, acceptors,
//!   charged groups, aromatic rings, metals), a uniform-cell spatial index for
//!   radius queries, the five per-type detectors, and the result aggregator.
//!
//! - **[`workflows`]: The Public API.** Ties the engine together into the single
//!   entry point [`detect`], a pure synchronous function from two annotated atom
//!   sets and a parameter block to an [`AnalysisResult`].
//!
//! The engine holds no process-wide state: every invocation builds its own feature
//! maps, spatial index, and result buffers, so concurrent calls are safe without
//! any locking.

pub mod core;
pub mod engine;
pub mod workflows;

pub use crate::core::models::atom::Atom;
pub use crate::core::models::contact::{Contact, ContactKind};
pub use crate::core::models::params::InteractionParams;
pub use crate::core::models::result::{AnalysisResult, LigandSummary, ProteinSummary};
pub use crate::engine::error::EngineError;
pub use crate::workflows::detect::detect;
