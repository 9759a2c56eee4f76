//! Per-type contact detectors.
//!
//! Five independent routines, one per interaction type, each consuming the
//! shared [`DetectionContext`](crate::engine::context::DetectionContext) and
//! producing zero or more candidate contacts. Detectors are order-insensitive:
//! the aggregator imposes the final deterministic ordering.
//!
//! A detector never fails on missing optional features (no rings, no charged
//! groups, no metals all yield empty output); structurally invalid input is
//! rejected by the workflow before any detector runs.

pub mod hbond;
pub mod hydrophobic;
pub mod metal;
pub mod pi_stacking;
pub mod salt_bridge;

#[cfg(test)]
pub(crate) mod testutil {
    use crate::core::models::atom::Atom;
    use crate::core::models::params::InteractionParams;
    use crate::engine::context::DetectionContext;
    use crate::engine::features::{self, Features, SetLabel};
    use crate::engine::grid::SpatialGrid;

    /// Owns everything a `DetectionContext` borrows, so detector tests can
    /// build a context from plain atom vectors.
    pub struct Fixture {
        pub protein: Vec<Atom>,
        pub ligand: Vec<Atom>,
        pub params: InteractionParams,
        pub protein_features: Features,
        pub ligand_features: Features,
        pub grid: SpatialGrid,
    }

    impl Fixture {
        pub fn new(protein: Vec<Atom>, ligand: Vec<Atom>, params: InteractionParams) -> Self {
            let params = params.validated().expect("test params must be valid");
            let protein_features = features::classify(&protein, SetLabel::Protein);
            let ligand_features = features::classify(&ligand, SetLabel::Ligand);
            let grid = SpatialGrid::build(&protein, params.max_cutoff());
            Self {
                protein,
                ligand,
                params,
                protein_features,
                ligand_features,
                grid,
            }
        }

        pub fn ctx(&self) -> DetectionContext<'_> {
            DetectionContext {
                protein: &self.protein,
                ligand: &self.ligand,
                protein_features: &self.protein_features,
                ligand_features: &self.ligand_features,
                grid: &self.grid,
                params: &self.params,
            }
        }
    }
}
