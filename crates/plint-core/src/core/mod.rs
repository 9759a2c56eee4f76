//! # Core Module
//!
//! Stateless foundations of the detection engine: the data models exchanged with
//! callers (atoms, rings, parameters, contacts, results), pure geometry utilities,
//! and static element/residue rule tables.
//!
//! Nothing in this module performs detection; everything here is a value type or a
//! pure function over value types.

pub mod models;
pub mod utils;
