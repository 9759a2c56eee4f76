use crate::core::models::contact::{Contact, ContactKind};
use crate::core::utils::geometry;
use crate::engine::context::DetectionContext;
use itertools::Itertools;
use tracing::{debug, instrument};

// Acceptance is judged centroid-to-centroid; the reported contact carries
// the closest constituent-atom pair and its distance.
#[instrument(skip_all, name = "salt_bridge_detection")]
pub fn run(ctx: &DetectionContext) -> Vec<Contact> {
    let max_dist = ctx.params.salt_bridge_max_dist;
    let mut contacts = Vec::new();

    for (lg, pg) in ctx
        .ligand_features
        .charged_groups
        .iter()
        .cartesian_product(&ctx.protein_features.charged_groups)
    {
        if lg.sign == 0 || lg.sign != -pg.sign {
            continue;
        }
        if geometry::distance(&lg.centroid, &pg.centroid) > max_dist {
            continue;
        }

        let mut best: Option<(f64, usize, usize)> = None;
        for (&la, &pa) in lg.atoms.iter().cartesian_product(&pg.atoms) {
            let d = geometry::distance(&ctx.ligand[la].position, &ctx.protein[pa].position);
            if best.is_none_or(|(bd, _, _)| d < bd) {
                best = Some((d, la, pa));
            }
        }
        let Some((dist, la, pa)) = best else {
            continue;
        };
        contacts.push(ctx.contact(ContactKind::SaltBridge, la, pa, dist, None));
    }

    debug!(count = contacts.len(), "Salt-bridge detection complete.");
    contacts
}
