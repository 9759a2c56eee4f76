//! # Core Models Module
//!
//! The fundamental data structures of the engine: the immutable [`atom::Atom`]
//! record supplied by the structure parser, the derived [`ring::Ring`] geometry,
//! the [`params::InteractionParams`] threshold block, and the output types
//! ([`contact::Contact`], [`result::AnalysisResult`]).
//!
//! All models are plain values. They are created at the start of one `detect`
//! invocation and discarded at its end; the engine never mutates an atom after
//! construction and never shares models across calls.

pub mod atom;
pub mod contact;
pub mod params;
pub mod result;
pub mod ring;
