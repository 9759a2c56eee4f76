use crate::core::models::atom::Atom;
use crate::core::models::contact::{Contact, ContactKind};
use crate::core::utils::geometry;
use crate::engine::context::DetectionContext;
use crate::engine::features::Donor;
use nalgebra::Point3;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

#[instrument(skip_all, name = "hbond_detection")]
pub fn run(ctx: &DetectionContext) -> Vec<Contact> {
    let max_dist = ctx.params.hbond_max_dist;
    let min_angle = ctx.params.hbond_min_angle;
    let mut contacts = Vec::new();
    let mut candidates = Vec::new();

    let protein_acceptors: HashSet<usize> =
        ctx.protein_features.acceptors.iter().copied().collect();

    for donor in &ctx.ligand_features.donors {
        let donor_atom = &ctx.ligand[donor.atom];
        ctx.grid.query(&donor_atom.position, max_dist, &mut candidates);
        candidates.sort_unstable();
        for &p in &candidates {
            if !protein_acceptors.contains(&p) {
                continue;
            }
            let acceptor = &ctx.protein[p];
            let dist = geometry::distance(&donor_atom.position, &acceptor.position);
            if dist > max_dist {
                continue;
            }
            let angle = best_angle(donor, ctx.ligand, &acceptor.position);
            if let Some(a) = angle {
                if a < min_angle {
                    continue;
                }
            }
            contacts.push(ctx.contact(ContactKind::HydrogenBond, donor.atom, p, dist, angle));
        }
    }

    let protein_donors: HashMap<usize, &Donor> = ctx
        .protein_features
        .donors
        .iter()
        .map(|d| (d.atom, d))
        .collect();

    for &acc in &ctx.ligand_features.acceptors {
        let acceptor = &ctx.ligand[acc];
        ctx.grid.query(&acceptor.position, max_dist, &mut candidates);
        candidates.sort_unstable();
        for &p in &candidates {
            let Some(donor) = protein_donors.get(&p) else {
                continue;
            };
            let donor_atom = &ctx.protein[p];
            let dist = geometry::distance(&donor_atom.position, &acceptor.position);
            if dist > max_dist {
                continue;
            }
            let angle = best_angle(donor, ctx.protein, &acceptor.position);
            if let Some(a) = angle {
                if a < min_angle {
                    continue;
                }
            }
            contacts.push(ctx.contact(ContactKind::HydrogenBond, acc, p, dist, angle));
        }
    }

    debug!(count = contacts.len(), "Hydrogen-bond detection complete.");
    contacts
}

// Donor-H-acceptor angle for the hydrogen maximizing it; `None` when the
// donor's hydrogen positions are unknown.
fn best_angle(donor: &Donor, set: &[Atom], acceptor_pos: &Point3<f64>) -> Option<f64> {
    let donor_pos = set[donor.atom].position;
    donor
        .hydrogens
        .iter()
        .map(|&h| geometry::angle_at_vertex(&donor_pos, &set[h].position, acceptor_pos))
        .fold(None, |best: Option<f64>, a| {
            Some(best.map_or(a, |b| b.max(a)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::params::InteractionParams;
    use crate::engine::detectors::testutil::Fixture;

    /// A protein hydroxyl oxygen with its hydrogens elsewhere in the set, so
    /// the oxygen classifies as an acceptor without becoming a donor
    /// candidate.
    fn protein_acceptor(pos: [f64; 3]) -> Vec<Atom> {
        let mut o = Atom::new(0, "O", Point3::from(pos), false);
        o.residue_id = 55;
        o.residue_name = "SER".to_string();
        o.atom_name = "OG".to_string();
        let mut c = Atom::new(1, "C", Point3::new(pos[0] + 1.4, pos[1] + 1.0, pos[2]), false);
        c.residue_id = 55;
        c.residue_name = "SER".to_string();
        c.atom_name = "CB".to_string();
        let mut h = Atom::new(2, "H", Point3::new(pos[0] + 2.0, pos[1] + 1.9, pos[2]), false);
        h.residue_id = 55;
        h.residue_name = "SER".to_string();
        h.atom_name = "HB".to_string();
        o.bonded.push(1);
        c.bonded.extend([0, 2]);
        h.bonded.push(1);
        vec![o, c, h]
    }

    /// Ligand N-H donor aimed at a protein acceptor; the geometry gives a
    /// donor-H-acceptor angle of 180° at ~2.9 Å.
    fn linear_donor_ligand() -> Vec<Atom> {
        let mut n = Atom::new(0, "N", Point3::new(0.0, 0.0, 0.0), true);
        let h = Atom::new(1, "H", Point3::new(1.0, 0.0, 0.0), true);
        n.bonded.push(1);
        let mut atoms = vec![n, h];
        atoms[1].bonded.push(0);
        atoms
    }

    #[test]
    fn linear_hydrogen_bond_is_reported_with_angle() {
        let fixture = Fixture::new(
            protein_acceptor([2.9, 0.0, 0.0]),
            linear_donor_ligand(),
            InteractionParams::default(),
        );
        let contacts = run(&fixture.ctx());

        assert_eq!(contacts.len(), 1);
        let c = &contacts[0];
        assert_eq!(c.kind, ContactKind::HydrogenBond);
        assert_eq!(c.ligand_atom, 0);
        assert_eq!(c.protein_resi, 55);
        assert_eq!(c.protein_atom, "OG");
        assert!((c.distance - 2.9).abs() < 1e-9);
        assert!((c.angle.unwrap() - 180.0).abs() < 1e-6);
    }

    #[test]
    fn bent_geometry_below_min_angle_is_rejected() {
        // Hydrogen perpendicular to the donor-acceptor axis: angle ≈ 71°.
        let mut ligand = linear_donor_ligand();
        ligand[1].position = Point3::new(0.0, 1.0, 0.0);

        let fixture = Fixture::new(
            protein_acceptor([2.9, 0.0, 0.0]),
            ligand,
            InteractionParams::default(),
        );
        assert!(run(&fixture.ctx()).is_empty());
    }

    #[test]
    fn multiple_hydrogens_use_the_best_angle() {
        let mut ligand = linear_donor_ligand();
        // Second hydrogen pointing away from the acceptor.
        let mut h2 = Atom::new(2, "H", Point3::new(-1.0, 0.0, 0.0), true);
        h2.bonded.push(0);
        ligand[0].bonded.push(2);
        ligand.push(h2);

        let fixture = Fixture::new(
            protein_acceptor([2.9, 0.0, 0.0]),
            ligand,
            InteractionParams::default(),
        );
        let contacts = run(&fixture.ctx());
        assert_eq!(contacts.len(), 1);
        assert!((contacts[0].angle.unwrap() - 180.0).abs() < 1e-6);
    }

    #[test]
    fn donor_without_hydrogens_passes_on_distance_alone() {
        // Bare ligand oxygen: donor candidate with unknown hydrogens.
        let ligand = vec![Atom::new(0, "O", Point3::new(0.0, 0.0, 0.0), true)];
        let fixture = Fixture::new(
            protein_acceptor([2.9, 0.0, 0.0]),
            ligand,
            InteractionParams::default(),
        );
        let contacts = run(&fixture.ctx());
        assert_eq!(contacts.len(), 1);
        assert!(contacts[0].angle.is_none());
        assert_eq!(contacts[0].protein_atom, "OG");
    }

    #[test]
    fn partially_annotated_ligand_keeps_bare_donors() {
        // The N-H donor is fully annotated; a second polar oxygen carries no
        // bonds at all and must still reach the acceptor on distance alone.
        let mut ligand = linear_donor_ligand();
        ligand.push(Atom::new(2, "O", Point3::new(2.9, 3.0, 0.0), true));

        let fixture = Fixture::new(
            protein_acceptor([2.9, 0.0, 0.0]),
            ligand,
            InteractionParams::default(),
        );
        let contacts = run(&fixture.ctx());

        assert_eq!(contacts.len(), 2);
        let angled = contacts.iter().find(|c| c.ligand_atom == 0).unwrap();
        assert!((angled.angle.unwrap() - 180.0).abs() < 1e-6);
        let bare = contacts.iter().find(|c| c.ligand_atom == 2).unwrap();
        assert!(bare.angle.is_none());
        assert!((bare.distance - 3.0).abs() < 1e-9);
    }

    #[test]
    fn pair_beyond_max_distance_is_rejected() {
        let fixture = Fixture::new(
            protein_acceptor([3.6, 0.0, 0.0]),
            linear_donor_ligand(),
            InteractionParams::default(),
        );
        assert!(run(&fixture.ctx()).is_empty());
    }

    #[test]
    fn protein_donor_against_ligand_acceptor_is_detected() {
        let mut n = Atom::new(0, "N", Point3::new(0.0, 0.0, 0.0), false);
        n.residue_id = 7;
        n.residue_name = "GLY".to_string();
        n.atom_name = "N".to_string();
        let mut h = Atom::new(1, "H", Point3::new(1.0, 0.0, 0.0), false);
        h.residue_id = 7;
        h.residue_name = "GLY".to_string();
        h.atom_name = "H".to_string();
        n.bonded.push(1);
        h.bonded.push(0);

        // Carbonyl-like ligand oxygen (bonded to carbon, no hydrogens).
        let mut o = Atom::new(0, "O", Point3::new(2.9, 0.0, 0.0), true);
        let mut c = Atom::new(1, "C", Point3::new(4.1, 0.0, 0.0), true);
        o.bonded.push(1);
        c.bonded.push(0);
        let mut c_h = Atom::new(2, "H", Point3::new(4.7, 0.9, 0.0), true);
        c_h.bonded.push(1);
        c.bonded.push(2);

        let fixture = Fixture::new(vec![n, h], vec![o, c, c_h], InteractionParams::default());
        let contacts = run(&fixture.ctx());

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].ligand_atom, 0);
        assert_eq!(contacts[0].protein_atom, "N");
        assert!((contacts[0].angle.unwrap() - 180.0).abs() < 1e-6);
    }
}
