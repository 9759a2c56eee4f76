use crate::core::models::atom::Atom;
use crate::core::models::contact::{Contact, ContactKind};
use crate::core::models::params::InteractionParams;
use crate::engine::features::Features;
use crate::engine::grid::SpatialGrid;

// Read-only state shared by all detectors during one analysis. Built once by
// the workflow and borrowed everywhere; `params` is already validated.
#[derive(Debug)]
pub struct DetectionContext<'a> {
    pub protein: &'a [Atom],
    pub ligand: &'a [Atom],
    pub protein_features: &'a Features,
    pub ligand_features: &'a Features,
    pub grid: &'a SpatialGrid,
    pub params: &'a InteractionParams,
}

impl DetectionContext<'_> {
    // Lifts the protein residue identity into the output record.
    pub fn contact(
        &self,
        kind: ContactKind,
        ligand_atom: usize,
        protein_atom: usize,
        distance: f64,
        angle: Option<f64>,
    ) -> Contact {
        let p = &self.protein[protein_atom];
        Contact {
            kind,
            ligand_atom,
            protein_resi: p.residue_id,
            protein_resn: p.residue_name.clone(),
            protein_atom: p.atom_name.clone(),
            distance,
            angle,
        }
    }
}
