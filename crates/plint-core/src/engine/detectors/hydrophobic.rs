use crate::core::models::contact::{Contact, ContactKind};
use crate::core::utils::geometry;
use crate::engine::context::DetectionContext;
use std::collections::HashSet;
use tracing::{debug, instrument};

#[instrument(skip_all, name = "hydrophobic_detection")]
pub fn run(ctx: &DetectionContext) -> Vec<Contact> {
    let max_dist = ctx.params.hydrophobic_max_dist;
    let protein_carbons: HashSet<usize> = ctx
        .protein_features
        .hydrophobic_carbons
        .iter()
        .copied()
        .collect();

    let mut contacts = Vec::new();
    let mut candidates = Vec::new();

    for &l in &ctx.ligand_features.hydrophobic_carbons {
        let ligand_atom = &ctx.ligand[l];
        ctx.grid.query(&ligand_atom.position, max_dist, &mut candidates);
        candidates.sort_unstable();
        for &p in &candidates {
            if !protein_carbons.contains(&p) {
                continue;
            }
            let dist = geometry::distance(&ligand_atom.position, &ctx.protein[p].position);
            if dist <= max_dist {
                contacts.push(ctx.contact(ContactKind::Hydrophobic, l, p, dist, None));
            }
        }
    }

    debug!(count = contacts.len(), "Hydrophobic detection complete.");
    contacts
}
