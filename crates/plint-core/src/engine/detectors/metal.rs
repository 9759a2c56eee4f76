use crate::core::models::contact::{Contact, ContactKind};
use crate::core::utils::elements;
use crate::core::utils::geometry;
use crate::engine::context::DetectionContext;
use tracing::{debug, instrument};

// Direction-agnostic: metals on either set coordinate O/N/S on the other,
// with `ligand_atom` identifying whichever atom belongs to the ligand.
#[instrument(skip_all, name = "metal_detection")]
pub fn run(ctx: &DetectionContext) -> Vec<Contact> {
    let max_dist = ctx.params.metal_max_dist;
    let mut contacts = Vec::new();
    let mut candidates = Vec::new();

    for &m in &ctx.ligand_features.metals {
        let metal = &ctx.ligand[m];
        ctx.grid.query(&metal.position, max_dist, &mut candidates);
        candidates.sort_unstable();
        for &p in &candidates {
            let coordinator = &ctx.protein[p];
            if !elements::is_metal_coordinator(&coordinator.element) {
                continue;
            }
            let dist = geometry::distance(&metal.position, &coordinator.position);
            if dist <= max_dist {
                contacts.push(ctx.contact(ContactKind::Metal, m, p, dist, None));
            }
        }
    }

    for &m in &ctx.protein_features.metals {
        let metal = &ctx.protein[m];
        for atom in ctx.ligand {
            if !elements::is_metal_coordinator(&atom.element) {
                continue;
            }
            let dist = geometry::distance(&metal.position, &atom.position);
            if dist <= max_dist {
                contacts.push(ctx.contact(ContactKind::Metal, atom.index, m, dist, None));
            }
        }
    }

    debug!(count = contacts.len(), "Metal-coordination detection complete.");
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::params::InteractionParams;
    use crate::engine::detectors::testutil::Fixture;
    use nalgebra::Point3;

    fn histidine_nitrogen(x: f64) -> Vec<Atom> {
        let mut n = Atom::new(0, "N", Point3::new(x, 0.0, 0.0), false);
        n.residue_id = 94;
        n.residue_name = "HIS".to_string();
        n.atom_name = "NE2".to_string();
        vec![n]
    }

    #[test]
    fn ligand_zinc_coordinated_by_histidine_nitrogen() {
        let ligand = vec![Atom::new(0, "ZN", Point3::origin(), true)];
        let fixture = Fixture::new(histidine_nitrogen(2.1), ligand, InteractionParams::default());
        let contacts = run(&fixture.ctx());

        assert_eq!(contacts.len(), 1);
        let c = &contacts[0];
        assert_eq!(c.kind, ContactKind::Metal);
        assert_eq!(c.ligand_atom, 0);
        assert_eq!(c.protein_resn, "HIS");
        assert!((c.distance - 2.1).abs() < 1e-9);
    }

    #[test]
    fn coordination_beyond_cutoff_is_rejected() {
        let ligand = vec![Atom::new(0, "ZN", Point3::origin(), true)];
        let fixture = Fixture::new(histidine_nitrogen(3.0), ligand, InteractionParams::default());
        assert!(run(&fixture.ctx()).is_empty());
    }

    #[test]
    fn protein_metal_coordinated_by_ligand_oxygen() {
        let mut zn = Atom::new(0, "ZN", Point3::origin(), false);
        zn.residue_id = 500;
        zn.residue_name = "ZN".to_string();
        zn.atom_name = "ZN".to_string();

        let ligand = vec![
            Atom::new(0, "C", Point3::new(5.0, 0.0, 0.0), true),
            Atom::new(1, "O", Point3::new(2.2, 0.0, 0.0), true),
        ];
        let fixture = Fixture::new(vec![zn], ligand, InteractionParams::default());
        let contacts = run(&fixture.ctx());

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].ligand_atom, 1);
        assert_eq!(contacts[0].protein_atom, "ZN");
    }

    #[test]
    fn carbon_never_coordinates_a_metal() {
        let ligand = vec![Atom::new(0, "ZN", Point3::origin(), true)];
        let mut c = Atom::new(0, "C", Point3::new(2.0, 0.0, 0.0), false);
        c.residue_id = 1;
        c.residue_name = "ALA".to_string();
        c.atom_name = "CB".to_string();
        let fixture = Fixture::new(vec![c], ligand, InteractionParams::default());
        assert!(run(&fixture.ctx()).is_empty());
    }
}
